// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Modal message boxes
//!
//! Both calls block until the box is dismissed, so everything is pinned for
//! the duration of one synchronous native call.

use crate::codec::{self, NativeString};
use crate::error::{Error, Result};
use crate::pin::{PinStack, Pinned};
use crate::pool::BufferPool;
use crate::sdl::{window_ptr, Sdl, WindowRef};

use sdl3_sys::{
    SDL_MessageBoxButtonData, SDL_MessageBoxColor, SDL_MessageBoxColorScheme, SDL_MessageBoxData,
};
use std::ffi::c_int;
use std::ops::BitOr;
use std::sync::Arc;

/// Message box flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MessageBoxFlags(u32);

impl MessageBoxFlags {
    pub const ERROR: Self = Self(sdl3_sys::SDL_MESSAGEBOX_ERROR);
    pub const WARNING: Self = Self(sdl3_sys::SDL_MESSAGEBOX_WARNING);
    pub const INFORMATION: Self = Self(sdl3_sys::SDL_MESSAGEBOX_INFORMATION);
    pub const BUTTONS_LEFT_TO_RIGHT: Self = Self(sdl3_sys::SDL_MESSAGEBOX_BUTTONS_LEFT_TO_RIGHT);
    pub const BUTTONS_RIGHT_TO_LEFT: Self = Self(sdl3_sys::SDL_MESSAGEBOX_BUTTONS_RIGHT_TO_LEFT);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for MessageBoxFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A message box button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBoxButton {
    id: i32,
    text: String,
    return_key_default: bool,
    escape_key_default: bool,
}

impl MessageBoxButton {
    /// `id` is what [`Sdl::show_message_box`] returns when this button is pressed
    pub fn new(id: i32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            return_key_default: false,
            escape_key_default: false,
        }
    }

    /// Mark as the button activated by Return
    pub fn return_key_default(mut self) -> Self {
        self.return_key_default = true;
        self
    }

    /// Mark as the button activated by Escape
    pub fn escape_key_default(mut self) -> Self {
        self.escape_key_default = true;
        self
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    fn flags(&self) -> u32 {
        let mut flags = 0;
        if self.return_key_default {
            flags |= sdl3_sys::SDL_MESSAGEBOX_BUTTON_RETURNKEY_DEFAULT;
        }
        if self.escape_key_default {
            flags |= sdl3_sys::SDL_MESSAGEBOX_BUTTON_ESCAPEKEY_DEFAULT;
        }
        flags
    }
}

/// RGB colors for a message box; `None` keeps the system scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageBoxColorScheme {
    pub background: (u8, u8, u8),
    pub text: (u8, u8, u8),
    pub button_border: (u8, u8, u8),
    pub button_background: (u8, u8, u8),
    pub button_selected: (u8, u8, u8),
}

impl MessageBoxColorScheme {
    fn to_raw(self) -> SDL_MessageBoxColorScheme {
        let c = |(r, g, b): (u8, u8, u8)| SDL_MessageBoxColor { r, g, b };
        SDL_MessageBoxColorScheme {
            colors: [
                c(self.background),
                c(self.text),
                c(self.button_border),
                c(self.button_background),
                c(self.button_selected),
            ],
        }
    }
}

/// Everything needed to show a message box
#[derive(Debug, Clone)]
pub struct MessageBoxData {
    flags: MessageBoxFlags,
    window: Option<WindowRef>,
    title: String,
    message: String,
    buttons: Vec<MessageBoxButton>,
    color_scheme: Option<MessageBoxColorScheme>,
}

/// Encoded strings and arrays a pinned [`MessageBoxData`] points into
pub struct MessageBoxStorage {
    title: NativeString,
    message: NativeString,
    button_texts: Vec<NativeString>,
    buttons: Vec<SDL_MessageBoxButtonData>,
    color_scheme: Option<SDL_MessageBoxColorScheme>,
}

impl MessageBoxData {
    pub fn new(
        flags: MessageBoxFlags,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            flags,
            window: None,
            title: title.into(),
            message: message.into(),
            buttons: Vec::new(),
            color_scheme: None,
        }
    }

    pub fn window(mut self, window: WindowRef) -> Self {
        self.window = Some(window);
        self
    }

    pub fn button(mut self, button: MessageBoxButton) -> Self {
        self.buttons.push(button);
        self
    }

    pub fn color_scheme(mut self, scheme: MessageBoxColorScheme) -> Self {
        self.color_scheme = Some(scheme);
        self
    }

    /// Encode and pin into an `SDL_MessageBoxData`
    ///
    /// Title, message, color scheme and every button text are pinned before
    /// the button array that points at them.
    pub fn pin(
        &self,
        pool: &Arc<BufferPool<u8>>,
    ) -> Result<Pinned<'_, SDL_MessageBoxData, MessageBoxStorage>> {
        let numbuttons = c_int::try_from(self.buttons.len())
            .map_err(|_| Error::InvalidArgument("too many message box buttons"))?;

        let button_texts = self
            .buttons
            .iter()
            .map(|b| codec::encode(&b.text, pool))
            .collect::<Result<Vec<_>>>()?;
        let mut storage = Box::new(MessageBoxStorage {
            title: codec::encode(&self.title, pool)?,
            message: codec::encode(&self.message, pool)?,
            button_texts,
            buttons: Vec::with_capacity(self.buttons.len()),
            color_scheme: self.color_scheme.map(MessageBoxColorScheme::to_raw),
        });

        let mut pins = PinStack::new();
        let s = &mut *storage;
        pins.pin(&s.title);
        pins.pin(&s.message);
        let color_scheme = match &s.color_scheme {
            Some(scheme) => pins.pin(scheme).1,
            None => std::ptr::null(),
        };
        for text in &s.button_texts {
            pins.pin(text);
        }
        s.buttons.extend(self.buttons.iter().zip(&s.button_texts).map(|(button, text)| {
            SDL_MessageBoxButtonData {
                flags: button.flags(),
                buttonID: button.id,
                text: text.as_ptr(),
            }
        }));
        let (_, buttons) = pins.pin(s.buttons.as_slice());

        let raw = SDL_MessageBoxData {
            flags: self.flags.bits(),
            window: window_ptr(self.window),
            title: s.title.as_ptr(),
            message: s.message.as_ptr(),
            numbuttons,
            buttons: if s.buttons.is_empty() { std::ptr::null() } else { buttons.cast() },
            colorScheme: color_scheme,
        };
        Ok(Pinned::new(pins, raw, storage))
    }
}

impl MessageBoxStorage {
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }
}

impl Sdl {
    /// Show a modal message box and return the id of the pressed button
    ///
    /// Returns -1 when the box was closed without pressing a button.
    pub fn show_message_box(&self, data: &MessageBoxData) -> Result<i32> {
        let show = native!(self.api(), SDL_ShowMessageBox);
        let pinned = data.pin(self.pool())?;
        let mut button: c_int = -1;

        let ok = unsafe { show(pinned.as_ptr(), &mut button) };
        if ok {
            Ok(button)
        } else {
            Err(self.native_error("SDL_ShowMessageBox"))
        }
    }

    /// Show a simple modal message box with an OK button
    pub fn show_simple_message_box(
        &self,
        flags: MessageBoxFlags,
        title: &str,
        message: &str,
        window: Option<WindowRef>,
    ) -> Result<()> {
        let show = native!(self.api(), SDL_ShowSimpleMessageBox);
        let title = codec::encode(title, self.pool())?;
        let message = codec::encode(message, self.pool())?;

        let mut pins = PinStack::new();
        pins.pin(&title);
        pins.pin(&message);
        let ok =
            unsafe { show(flags.bits(), title.as_ptr(), message.as_ptr(), window_ptr(window)) };
        pins.unpin_all();

        if ok {
            Ok(())
        } else {
            Err(self.native_error("SDL_ShowSimpleMessageBox"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::fakes;
    use sdl3_sys::{Api, SDL_MessageBoxFlags, SDL_Window};
    use std::cell::RefCell;
    use std::ffi::{c_char, CStr};

    #[derive(Debug, Default, Clone)]
    struct Seen {
        flags: u32,
        title: Option<String>,
        message: Option<String>,
        buttons: Vec<(u32, i32, String)>,
        colors: Option<[SDL_MessageBoxColor; 5]>,
    }

    thread_local! {
        static SEEN: RefCell<Seen> = RefCell::new(Seen::default());
    }

    unsafe fn opt(ptr: *const c_char) -> Option<String> {
        (!ptr.is_null()).then(|| unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
    }

    /// Presses the escape-default button, or fails when there are no buttons
    unsafe extern "C" fn fake_show(data: *const SDL_MessageBoxData, buttonid: *mut c_int) -> bool {
        let data = unsafe { &*data };
        let buttons: Vec<_> = (0..data.numbuttons as usize)
            .map(|i| {
                let b = unsafe { &*data.buttons.add(i) };
                (b.flags, b.buttonID, unsafe { opt(b.text) }.unwrap_or_default())
            })
            .collect();
        let colors = (!data.colorScheme.is_null()).then(|| unsafe { (*data.colorScheme).colors });
        let seen = Seen {
            flags: data.flags,
            title: unsafe { opt(data.title) },
            message: unsafe { opt(data.message) },
            buttons,
            colors,
        };
        SEEN.with(|s| *s.borrow_mut() = seen.clone());

        if seen.buttons.is_empty() {
            fakes::set_error("no buttons");
            return false;
        }
        let pressed = seen
            .buttons
            .iter()
            .find(|b| b.0 & sdl3_sys::SDL_MESSAGEBOX_BUTTON_ESCAPEKEY_DEFAULT != 0)
            .map_or(-1, |b| b.1);
        unsafe { *buttonid = pressed };
        true
    }

    unsafe extern "C" fn fake_simple(
        flags: SDL_MessageBoxFlags,
        title: *const c_char,
        message: *const c_char,
        _window: *mut SDL_Window,
    ) -> bool {
        SEEN.with(|s| {
            *s.borrow_mut() = Seen {
                flags,
                title: unsafe { opt(title) },
                message: unsafe { opt(message) },
                ..Seen::default()
            }
        });
        true
    }

    fn sdl() -> Sdl {
        let api = Api {
            SDL_ShowMessageBox: Some(fake_show),
            SDL_ShowSimpleMessageBox: Some(fake_simple),
            ..fakes::api()
        };
        unsafe { Sdl::from_api(api) }
    }

    #[test]
    fn test_show_message_box_returns_button() {
        let sdl = sdl();
        let data =
            MessageBoxData::new(MessageBoxFlags::WARNING, "Unsaved changes", "Save before closing?")
            .button(MessageBoxButton::new(1, "Save").return_key_default())
            .button(MessageBoxButton::new(2, "Discard"))
            .button(MessageBoxButton::new(3, "Cancel").escape_key_default());

        assert_eq!(sdl.show_message_box(&data).unwrap(), 3);

        let seen = SEEN.with(|s| s.borrow().clone());
        assert_eq!(seen.flags, sdl3_sys::SDL_MESSAGEBOX_WARNING);
        assert_eq!(seen.title.as_deref(), Some("Unsaved changes"));
        assert_eq!(seen.buttons.len(), 3);
        assert_eq!(seen.buttons[0], (1, 1, "Save".to_string()));
        assert_eq!(seen.buttons[1].2, "Discard");
        assert!(seen.colors.is_none());
        assert_eq!(sdl.pool().outstanding(), 0);
    }

    #[test]
    fn test_color_scheme_and_long_message() {
        let sdl = sdl();
        let long_message = "line\n".repeat(200);
        let scheme = MessageBoxColorScheme {
            background: (10, 20, 30),
            button_selected: (255, 0, 0),
            ..Default::default()
        };
        let data = MessageBoxData::new(MessageBoxFlags::ERROR, "Crash report", long_message.clone())
            .button(MessageBoxButton::new(0, "OK"))
            .color_scheme(scheme);

        assert_eq!(sdl.show_message_box(&data).unwrap(), -1);
        let seen = SEEN.with(|s| s.borrow().clone());
        assert_eq!(seen.message.as_deref(), Some(long_message.as_str()));
        let colors = seen.colors.unwrap();
        assert_eq!(colors[0], SDL_MessageBoxColor { r: 10, g: 20, b: 30 });
        assert_eq!(colors[4], SDL_MessageBoxColor { r: 255, g: 0, b: 0 });
        assert_eq!(sdl.pool().outstanding(), 0, "pooled message returned after the call");
    }

    #[test]
    fn test_failure_reports_native_error() {
        let sdl = sdl();
        let data = MessageBoxData::new(MessageBoxFlags::INFORMATION, "t", "m");
        match sdl.show_message_box(&data) {
            Err(Error::Native { call, message }) => {
                assert_eq!(call, "SDL_ShowMessageBox");
                assert_eq!(message, "no buttons");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(sdl.pool().outstanding(), 0);
    }

    #[test]
    fn test_pin_order_children_then_array() {
        let pool = Arc::new(BufferPool::new(4));
        let data = MessageBoxData::new(MessageBoxFlags::INFORMATION, "Title", "Body")
            .button(MessageBoxButton::new(1, "A"))
            .button(MessageBoxButton::new(2, "B"))
            .color_scheme(MessageBoxColorScheme::default());
        let pinned = data.pin(&pool).unwrap();

        let addrs = pinned.pins().addresses();
        // title, message, scheme, two texts, then the button array
        assert_eq!(addrs.len(), 6);
        assert_eq!(*addrs.last().unwrap(), pinned.get().buttons as usize);
        assert_eq!(pinned.storage().title(), "Title");
        assert_eq!(pinned.storage().button_count(), 2);
        assert_eq!(pinned.get().numbuttons, 2);
    }

    #[test]
    fn test_blank_title_is_null() {
        let sdl = sdl();
        sdl.show_simple_message_box(MessageBoxFlags::INFORMATION, " ", "Done", None)
            .unwrap();
        let seen = SEEN.with(|s| s.borrow().clone());
        assert_eq!(seen.title, None);
        assert_eq!(seen.message.as_deref(), Some("Done"));
        assert_eq!(seen.flags, sdl3_sys::SDL_MESSAGEBOX_INFORMATION);
    }

    #[test]
    fn test_encoding_error_skips_native_call() {
        let sdl = sdl();
        SEEN.with(|s| *s.borrow_mut() = Seen::default());
        let err = sdl
            .show_simple_message_box(MessageBoxFlags::ERROR, "a\0b", "x", None)
            .unwrap_err();
        assert!(err.is_encoding());
        assert_eq!(SEEN.with(|s| s.borrow().message.clone()), None);
    }

    #[test]
    fn test_flags_combine() {
        let flags = MessageBoxFlags::ERROR | MessageBoxFlags::BUTTONS_RIGHT_TO_LEFT;
        assert!(flags.contains(MessageBoxFlags::ERROR));
        assert!(!flags.contains(MessageBoxFlags::WARNING));
        assert_eq!(flags.bits(), 0x110);
    }
}
