// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Typed view of `SDL_Event`
//!
//! The raw union is read once, by discriminant, and every borrowed native
//! string is copied out. The resulting [`Event`] owns all of its data and
//! can outlive the next `SDL_PollEvent`.

use crate::codec;
use crate::error::Result;

use sdl3_sys::*;
use std::ffi::c_char;

/// Phase of a gamepad touchpad contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchpadPhase {
    Down,
    Motion,
    Up,
}

/// Which part of a drag-and-drop sequence an event reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropKind {
    Begin,
    Position,
    File,
    Text,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioDeviceChange {
    Added,
    Removed,
    FormatChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraDeviceChange {
    Added,
    Removed,
    Approved,
    Denied,
}

/// An owned, decoded event
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Quit {
        timestamp: u64,
    },
    TextInput {
        timestamp: u64,
        window_id: u32,
        text: String,
    },
    TextEditingCandidates {
        timestamp: u64,
        window_id: u32,
        candidates: Vec<String>,
        /// `None` when nothing is selected
        selected: Option<usize>,
        horizontal: bool,
    },
    MouseButton {
        timestamp: u64,
        window_id: u32,
        which: u32,
        button: u8,
        down: bool,
        clicks: u8,
        x: f32,
        y: f32,
    },
    JoyAxis {
        timestamp: u64,
        which: u32,
        axis: u8,
        value: i16,
    },
    GamepadButton {
        timestamp: u64,
        which: u32,
        button: u8,
        down: bool,
    },
    GamepadTouchpad {
        timestamp: u64,
        which: u32,
        phase: TouchpadPhase,
        touchpad: i32,
        finger: i32,
        x: f32,
        y: f32,
        pressure: f32,
    },
    PenTouch {
        timestamp: u64,
        window_id: u32,
        which: u32,
        x: f32,
        y: f32,
        eraser: bool,
        down: bool,
    },
    Clipboard {
        timestamp: u64,
        /// Whether this application owns the new contents
        owner: bool,
        mime_types: Vec<String>,
    },
    Drop {
        timestamp: u64,
        window_id: u32,
        kind: DropKind,
        x: f32,
        y: f32,
        /// Originating application or URL, when the platform reports one
        source: Option<String>,
        /// File path for `File`, text for `Text`
        data: Option<String>,
    },
    AudioDevice {
        timestamp: u64,
        which: u32,
        recording: bool,
        change: AudioDeviceChange,
    },
    CameraDevice {
        timestamp: u64,
        which: u32,
        change: CameraDeviceChange,
    },
    /// Any event type without a typed projection
    Unknown {
        kind: u32,
        timestamp: u64,
    },
}

unsafe fn owned(ptr: *const c_char) -> Result<String> {
    Ok(unsafe { codec::decode(ptr) }?.to_owned())
}

unsafe fn owned_opt(ptr: *const c_char) -> Result<Option<String>> {
    if ptr.is_null() {
        return Ok(None);
    }
    unsafe { owned(ptr) }.map(Some)
}

impl Event {
    /// Decode a raw event
    ///
    /// Fails only when an embedded string is not valid UTF-8.
    ///
    /// # Safety
    ///
    /// `raw` must be an event produced by SDL (or laid out identically):
    /// the payload must match its type, and any string pointers in it must
    /// be valid for the duration of this call.
    pub unsafe fn from_raw(raw: &SDL_Event) -> Result<Event> {
        let kind = unsafe { raw.type_ };
        let timestamp = unsafe { raw.common.timestamp };

        let event = match kind {
            SDL_EVENT_QUIT => Event::Quit { timestamp },
            SDL_EVENT_TEXT_INPUT => {
                let e = unsafe { &raw.text };
                Event::TextInput {
                    timestamp,
                    window_id: e.windowID,
                    text: unsafe { owned(e.text) }?,
                }
            }
            SDL_EVENT_TEXT_EDITING_CANDIDATES => {
                let e = unsafe { &raw.edit_candidates };
                let count = usize::try_from(e.num_candidates).unwrap_or(0);
                Event::TextEditingCandidates {
                    timestamp,
                    window_id: e.windowID,
                    candidates: unsafe { codec::decode_array_owned(e.candidates, count) }?,
                    selected: usize::try_from(e.selected_candidate).ok(),
                    horizontal: e.horizontal,
                }
            }
            SDL_EVENT_MOUSE_BUTTON_DOWN | SDL_EVENT_MOUSE_BUTTON_UP => {
                let e = unsafe { raw.button };
                Event::MouseButton {
                    timestamp,
                    window_id: e.windowID,
                    which: e.which,
                    button: e.button,
                    down: e.down,
                    clicks: e.clicks,
                    x: e.x,
                    y: e.y,
                }
            }
            SDL_EVENT_JOYSTICK_AXIS_MOTION => {
                let e = unsafe { raw.jaxis };
                Event::JoyAxis {
                    timestamp,
                    which: e.which,
                    axis: e.axis,
                    value: e.value,
                }
            }
            SDL_EVENT_GAMEPAD_BUTTON_DOWN | SDL_EVENT_GAMEPAD_BUTTON_UP => {
                let e = unsafe { raw.gbutton };
                Event::GamepadButton {
                    timestamp,
                    which: e.which,
                    button: e.button,
                    down: e.down,
                }
            }
            SDL_EVENT_GAMEPAD_TOUCHPAD_DOWN
            | SDL_EVENT_GAMEPAD_TOUCHPAD_MOTION
            | SDL_EVENT_GAMEPAD_TOUCHPAD_UP => {
                let e = unsafe { raw.gtouchpad };
                let phase = match kind {
                    SDL_EVENT_GAMEPAD_TOUCHPAD_DOWN => TouchpadPhase::Down,
                    SDL_EVENT_GAMEPAD_TOUCHPAD_MOTION => TouchpadPhase::Motion,
                    _ => TouchpadPhase::Up,
                };
                Event::GamepadTouchpad {
                    timestamp,
                    which: e.which,
                    phase,
                    touchpad: e.touchpad,
                    finger: e.finger,
                    x: e.x,
                    y: e.y,
                    pressure: e.pressure,
                }
            }
            SDL_EVENT_PEN_DOWN | SDL_EVENT_PEN_UP => {
                let e = unsafe { raw.ptouch };
                Event::PenTouch {
                    timestamp,
                    window_id: e.windowID,
                    which: e.which,
                    x: e.x,
                    y: e.y,
                    eraser: e.eraser,
                    down: e.down,
                }
            }
            SDL_EVENT_CLIPBOARD_UPDATE => {
                let e = unsafe { &raw.clipboard };
                let count = usize::try_from(e.num_mime_types).unwrap_or(0);
                Event::Clipboard {
                    timestamp,
                    owner: e.owner,
                    mime_types: unsafe { codec::decode_array_owned(e.mime_types, count) }?,
                }
            }
            SDL_EVENT_DROP_BEGIN
            | SDL_EVENT_DROP_POSITION
            | SDL_EVENT_DROP_FILE
            | SDL_EVENT_DROP_TEXT
            | SDL_EVENT_DROP_COMPLETE => {
                let e = unsafe { &raw.drop };
                let drop_kind = match kind {
                    SDL_EVENT_DROP_BEGIN => DropKind::Begin,
                    SDL_EVENT_DROP_POSITION => DropKind::Position,
                    SDL_EVENT_DROP_FILE => DropKind::File,
                    SDL_EVENT_DROP_TEXT => DropKind::Text,
                    _ => DropKind::Complete,
                };
                Event::Drop {
                    timestamp,
                    window_id: e.windowID,
                    kind: drop_kind,
                    x: e.x,
                    y: e.y,
                    source: unsafe { owned_opt(e.source) }?,
                    data: unsafe { owned_opt(e.data) }?,
                }
            }
            SDL_EVENT_AUDIO_DEVICE_ADDED
            | SDL_EVENT_AUDIO_DEVICE_REMOVED
            | SDL_EVENT_AUDIO_DEVICE_FORMAT_CHANGED => {
                let e = unsafe { raw.adevice };
                let change = match kind {
                    SDL_EVENT_AUDIO_DEVICE_ADDED => AudioDeviceChange::Added,
                    SDL_EVENT_AUDIO_DEVICE_REMOVED => AudioDeviceChange::Removed,
                    _ => AudioDeviceChange::FormatChanged,
                };
                Event::AudioDevice {
                    timestamp,
                    which: e.which,
                    recording: e.recording,
                    change,
                }
            }
            SDL_EVENT_CAMERA_DEVICE_ADDED
            | SDL_EVENT_CAMERA_DEVICE_REMOVED
            | SDL_EVENT_CAMERA_DEVICE_APPROVED
            | SDL_EVENT_CAMERA_DEVICE_DENIED => {
                let e = unsafe { raw.cdevice };
                let change = match kind {
                    SDL_EVENT_CAMERA_DEVICE_ADDED => CameraDeviceChange::Added,
                    SDL_EVENT_CAMERA_DEVICE_REMOVED => CameraDeviceChange::Removed,
                    SDL_EVENT_CAMERA_DEVICE_APPROVED => CameraDeviceChange::Approved,
                    _ => CameraDeviceChange::Denied,
                };
                Event::CameraDevice {
                    timestamp,
                    which: e.which,
                    change,
                }
            }
            _ => Event::Unknown { kind, timestamp },
        };
        Ok(event)
    }

    /// Nanoseconds since SDL initialization
    pub fn timestamp(&self) -> u64 {
        match *self {
            Event::Quit { timestamp }
            | Event::TextInput { timestamp, .. }
            | Event::TextEditingCandidates { timestamp, .. }
            | Event::MouseButton { timestamp, .. }
            | Event::JoyAxis { timestamp, .. }
            | Event::GamepadButton { timestamp, .. }
            | Event::GamepadTouchpad { timestamp, .. }
            | Event::PenTouch { timestamp, .. }
            | Event::Clipboard { timestamp, .. }
            | Event::Drop { timestamp, .. }
            | Event::AudioDevice { timestamp, .. }
            | Event::CameraDevice { timestamp, .. }
            | Event::Unknown { timestamp, .. } => timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::ffi::CString;

    fn header(kind: u32, timestamp: u64) -> SDL_Event {
        let mut raw = SDL_Event::zeroed();
        raw.common = SDL_CommonEvent {
            type_: kind,
            reserved: 0,
            timestamp,
        };
        raw
    }

    #[test]
    fn test_quit_and_unknown() {
        let quit = unsafe { Event::from_raw(&header(SDL_EVENT_QUIT, 5)) }.unwrap();
        assert_eq!(quit, Event::Quit { timestamp: 5 });

        let other = unsafe { Event::from_raw(&header(0x8000, 9)) }.unwrap();
        assert_eq!(other, Event::Unknown { kind: 0x8000, timestamp: 9 });
        assert_eq!(other.timestamp(), 9);
    }

    #[test]
    fn test_text_input_is_copied() {
        let text = CString::new("héllo").unwrap();
        let mut raw = SDL_Event::zeroed();
        raw.text = SDL_TextInputEvent {
            type_: SDL_EVENT_TEXT_INPUT,
            reserved: 0,
            timestamp: 1,
            windowID: 3,
            text: text.as_ptr(),
        };
        let event = unsafe { Event::from_raw(&raw) }.unwrap();
        drop(text);
        assert_eq!(
            event,
            Event::TextInput {
                timestamp: 1,
                window_id: 3,
                text: "héllo".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_text_is_error() {
        let text = CString::new(vec![0xc3, 0x28]).unwrap();
        let mut raw = SDL_Event::zeroed();
        raw.text = SDL_TextInputEvent {
            type_: SDL_EVENT_TEXT_INPUT,
            reserved: 0,
            timestamp: 1,
            windowID: 0,
            text: text.as_ptr(),
        };
        assert!(matches!(unsafe { Event::from_raw(&raw) }, Err(Error::InvalidUtf8(_))));
    }

    #[test]
    fn test_editing_candidates() {
        let a = CString::new("日本").unwrap();
        let b = CString::new("二本").unwrap();
        let list = [a.as_ptr(), b.as_ptr()];
        let mut raw = SDL_Event::zeroed();
        raw.edit_candidates = SDL_TextEditingCandidatesEvent {
            type_: SDL_EVENT_TEXT_EDITING_CANDIDATES,
            reserved: 0,
            timestamp: 2,
            windowID: 1,
            candidates: list.as_ptr(),
            num_candidates: 2,
            selected_candidate: -1,
            horizontal: true,
            padding1: 0,
            padding2: 0,
            padding3: 0,
        };
        match unsafe { Event::from_raw(&raw) }.unwrap() {
            Event::TextEditingCandidates {
                candidates,
                selected,
                horizontal,
                ..
            } => {
                assert_eq!(candidates, vec!["日本".to_string(), "二本".to_string()]);
                assert_eq!(selected, None);
                assert!(horizontal);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_clipboard_mime_types() {
        let plain = CString::new("text/plain").unwrap();
        let list = [plain.as_ptr(), std::ptr::null()];
        let mut raw = SDL_Event::zeroed();
        raw.clipboard = SDL_ClipboardEvent {
            type_: SDL_EVENT_CLIPBOARD_UPDATE,
            reserved: 0,
            timestamp: 4,
            owner: false,
            num_mime_types: 2,
            mime_types: list.as_ptr(),
        };
        assert_eq!(
            unsafe { Event::from_raw(&raw) }.unwrap(),
            Event::Clipboard {
                timestamp: 4,
                owner: false,
                mime_types: vec!["text/plain".to_string()]
            }
        );
    }

    #[test]
    fn test_drop_file_and_complete() {
        let path = CString::new("/tmp/photo.png").unwrap();
        let mut raw = SDL_Event::zeroed();
        raw.drop = SDL_DropEvent {
            type_: SDL_EVENT_DROP_FILE,
            reserved: 0,
            timestamp: 7,
            windowID: 2,
            x: 10.0,
            y: 20.0,
            source: std::ptr::null(),
            data: path.as_ptr(),
        };
        match unsafe { Event::from_raw(&raw) }.unwrap() {
            Event::Drop { kind, source, data, x, .. } => {
                assert_eq!(kind, DropKind::File);
                assert_eq!(source, None);
                assert_eq!(data.as_deref(), Some("/tmp/photo.png"));
                assert_eq!(x, 10.0);
            }
            other => panic!("unexpected {:?}", other),
        }

        unsafe {
            raw.drop.type_ = SDL_EVENT_DROP_COMPLETE;
            raw.drop.data = std::ptr::null();
        }
        assert!(matches!(
            unsafe { Event::from_raw(&raw) }.unwrap(),
            Event::Drop { kind: DropKind::Complete, data: None, .. }
        ));
    }

    #[test]
    fn test_input_devices() {
        let mut raw = SDL_Event::zeroed();
        raw.gtouchpad = SDL_GamepadTouchpadEvent {
            type_: SDL_EVENT_GAMEPAD_TOUCHPAD_MOTION,
            which: 11,
            finger: 1,
            pressure: 0.5,
            ..Default::default()
        };
        assert!(matches!(
            unsafe { Event::from_raw(&raw) }.unwrap(),
            Event::GamepadTouchpad { phase: TouchpadPhase::Motion, which: 11, finger: 1, .. }
        ));

        raw.jaxis = SDL_JoyAxisEvent {
            type_: SDL_EVENT_JOYSTICK_AXIS_MOTION,
            axis: 2,
            value: -32768,
            ..Default::default()
        };
        assert!(matches!(
            unsafe { Event::from_raw(&raw) }.unwrap(),
            Event::JoyAxis { axis: 2, value: -32768, .. }
        ));

        raw.button = SDL_MouseButtonEvent {
            type_: SDL_EVENT_MOUSE_BUTTON_UP,
            button: 1,
            clicks: 2,
            ..Default::default()
        };
        assert!(matches!(
            unsafe { Event::from_raw(&raw) }.unwrap(),
            Event::MouseButton { button: 1, clicks: 2, down: false, .. }
        ));
    }

    #[test]
    fn test_device_changes() {
        let mut raw = SDL_Event::zeroed();
        raw.adevice = SDL_AudioDeviceEvent {
            type_: SDL_EVENT_AUDIO_DEVICE_REMOVED,
            which: 4,
            recording: true,
            ..Default::default()
        };
        assert_eq!(
            unsafe { Event::from_raw(&raw) }.unwrap(),
            Event::AudioDevice {
                timestamp: 0,
                which: 4,
                recording: true,
                change: AudioDeviceChange::Removed
            }
        );

        raw.cdevice = SDL_CameraDeviceEvent {
            type_: SDL_EVENT_CAMERA_DEVICE_DENIED,
            which: 8,
            ..Default::default()
        };
        assert!(matches!(
            unsafe { Event::from_raw(&raw) }.unwrap(),
            Event::CameraDevice { change: CameraDeviceChange::Denied, which: 8, .. }
        ));
    }
}
