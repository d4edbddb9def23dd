// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Event projections (`SDL_events.h`)
//!
//! Only the event structs that carry pointers, booleans or explicit padding
//! are projected here; the remaining members of the union are covered by
//! [`SDL_CommonEvent`] and the raw `padding` bytes.

use crate::SDL_WindowID;
use std::ffi::c_char;

pub type SDL_EventType = u32;
pub const SDL_EVENT_QUIT: SDL_EventType = 0x100;
pub const SDL_EVENT_TEXT_EDITING: SDL_EventType = 0x302;
pub const SDL_EVENT_TEXT_INPUT: SDL_EventType = 0x303;
pub const SDL_EVENT_TEXT_EDITING_CANDIDATES: SDL_EventType = 0x307;
pub const SDL_EVENT_MOUSE_BUTTON_DOWN: SDL_EventType = 0x401;
pub const SDL_EVENT_MOUSE_BUTTON_UP: SDL_EventType = 0x402;
pub const SDL_EVENT_JOYSTICK_AXIS_MOTION: SDL_EventType = 0x600;
pub const SDL_EVENT_GAMEPAD_BUTTON_DOWN: SDL_EventType = 0x651;
pub const SDL_EVENT_GAMEPAD_BUTTON_UP: SDL_EventType = 0x652;
pub const SDL_EVENT_GAMEPAD_TOUCHPAD_DOWN: SDL_EventType = 0x656;
pub const SDL_EVENT_GAMEPAD_TOUCHPAD_MOTION: SDL_EventType = 0x657;
pub const SDL_EVENT_GAMEPAD_TOUCHPAD_UP: SDL_EventType = 0x658;
pub const SDL_EVENT_CLIPBOARD_UPDATE: SDL_EventType = 0x900;
pub const SDL_EVENT_DROP_FILE: SDL_EventType = 0x1000;
pub const SDL_EVENT_DROP_TEXT: SDL_EventType = 0x1001;
pub const SDL_EVENT_DROP_BEGIN: SDL_EventType = 0x1002;
pub const SDL_EVENT_DROP_COMPLETE: SDL_EventType = 0x1003;
pub const SDL_EVENT_DROP_POSITION: SDL_EventType = 0x1004;
pub const SDL_EVENT_AUDIO_DEVICE_ADDED: SDL_EventType = 0x1100;
pub const SDL_EVENT_AUDIO_DEVICE_REMOVED: SDL_EventType = 0x1101;
pub const SDL_EVENT_AUDIO_DEVICE_FORMAT_CHANGED: SDL_EventType = 0x1102;
pub const SDL_EVENT_PEN_DOWN: SDL_EventType = 0x1302;
pub const SDL_EVENT_PEN_UP: SDL_EventType = 0x1303;
pub const SDL_EVENT_CAMERA_DEVICE_ADDED: SDL_EventType = 0x1400;
pub const SDL_EVENT_CAMERA_DEVICE_REMOVED: SDL_EventType = 0x1401;
pub const SDL_EVENT_CAMERA_DEVICE_APPROVED: SDL_EventType = 0x1402;
pub const SDL_EVENT_CAMERA_DEVICE_DENIED: SDL_EventType = 0x1403;

pub type SDL_MouseID = u32;
pub type SDL_JoystickID = u32;
pub type SDL_PenID = u32;
pub type SDL_AudioDeviceID = u32;
pub type SDL_CameraID = u32;
pub type SDL_PenInputFlags = u32;

/// Fields shared by every event
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SDL_CommonEvent {
    pub type_: u32,
    pub reserved: u32,
    /// Nanoseconds, from `SDL_GetTicksNS()`
    pub timestamp: u64,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SDL_QuitEvent {
    pub type_: SDL_EventType,
    pub reserved: u32,
    pub timestamp: u64,
}

/// Keyboard text input event. `text` is owned by SDL and only valid until
/// the next event poll.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SDL_TextInputEvent {
    pub type_: SDL_EventType,
    pub reserved: u32,
    pub timestamp: u64,
    pub windowID: SDL_WindowID,
    pub text: *const c_char,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SDL_TextEditingCandidatesEvent {
    pub type_: SDL_EventType,
    pub reserved: u32,
    pub timestamp: u64,
    pub windowID: SDL_WindowID,
    /// NULL when there are no candidates
    pub candidates: *const *const c_char,
    pub num_candidates: i32,
    /// -1 when nothing is selected
    pub selected_candidate: i32,
    pub horizontal: bool,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SDL_MouseButtonEvent {
    pub type_: SDL_EventType,
    pub reserved: u32,
    pub timestamp: u64,
    pub windowID: SDL_WindowID,
    pub which: SDL_MouseID,
    pub button: u8,
    pub down: bool,
    /// 1 for single-click, 2 for double-click, etc.
    pub clicks: u8,
    pub padding: u8,
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SDL_JoyAxisEvent {
    pub type_: SDL_EventType,
    pub reserved: u32,
    pub timestamp: u64,
    pub which: SDL_JoystickID,
    pub axis: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub value: i16,
    pub padding4: u16,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SDL_GamepadButtonEvent {
    pub type_: SDL_EventType,
    pub reserved: u32,
    pub timestamp: u64,
    pub which: SDL_JoystickID,
    pub button: u8,
    pub down: bool,
    pub padding1: u8,
    pub padding2: u8,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SDL_GamepadTouchpadEvent {
    pub type_: SDL_EventType,
    pub reserved: u32,
    pub timestamp: u64,
    pub which: SDL_JoystickID,
    pub touchpad: i32,
    pub finger: i32,
    /// Normalized in the range 0...1
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SDL_PenTouchEvent {
    pub type_: SDL_EventType,
    pub reserved: u32,
    pub timestamp: u64,
    pub windowID: SDL_WindowID,
    pub which: SDL_PenID,
    pub pen_state: SDL_PenInputFlags,
    pub x: f32,
    pub y: f32,
    pub eraser: bool,
    pub down: bool,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SDL_ClipboardEvent {
    pub type_: SDL_EventType,
    pub reserved: u32,
    pub timestamp: u64,
    /// Whether this application owns the clipboard contents
    pub owner: bool,
    pub num_mime_types: i32,
    pub mime_types: *const *const c_char,
}

/// File, text or position drop. `source` and `data` are NULL for
/// begin/complete/position events.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SDL_DropEvent {
    pub type_: SDL_EventType,
    pub reserved: u32,
    pub timestamp: u64,
    pub windowID: SDL_WindowID,
    pub x: f32,
    pub y: f32,
    pub source: *const c_char,
    pub data: *const c_char,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SDL_AudioDeviceEvent {
    pub type_: SDL_EventType,
    pub reserved: u32,
    pub timestamp: u64,
    pub which: SDL_AudioDeviceID,
    pub recording: bool,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SDL_CameraDeviceEvent {
    pub type_: SDL_EventType,
    pub reserved: u32,
    pub timestamp: u64,
    pub which: SDL_CameraID,
}

/// The structure for all events in SDL. Always 128 bytes so that the
/// layout stays stable across versions.
#[repr(C)]
#[derive(Clone, Copy)]
pub union SDL_Event {
    pub type_: u32,
    pub common: SDL_CommonEvent,
    pub quit: SDL_QuitEvent,
    pub text: SDL_TextInputEvent,
    pub edit_candidates: SDL_TextEditingCandidatesEvent,
    pub button: SDL_MouseButtonEvent,
    pub jaxis: SDL_JoyAxisEvent,
    pub gbutton: SDL_GamepadButtonEvent,
    pub gtouchpad: SDL_GamepadTouchpadEvent,
    pub ptouch: SDL_PenTouchEvent,
    pub clipboard: SDL_ClipboardEvent,
    pub drop: SDL_DropEvent,
    pub adevice: SDL_AudioDeviceEvent,
    pub cdevice: SDL_CameraDeviceEvent,
    pub padding: [u8; 128],
}

impl SDL_Event {
    /// An all-zero event, as SDL's own `SDL_zero(event)` produces
    pub const fn zeroed() -> Self {
        SDL_Event { padding: [0; 128] }
    }
}

impl std::fmt::Debug for SDL_Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // SAFETY: every variant starts with the 32-bit type tag
        let ty = unsafe { self.type_ };
        f.debug_struct("SDL_Event").field("type", &format_args!("{ty:#x}")).finish_non_exhaustive()
    }
}
