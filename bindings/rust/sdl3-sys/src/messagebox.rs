// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Message box projections (`SDL_messagebox.h`)

use crate::SDL_Window;
use std::ffi::{c_char, c_int};

pub type SDL_MessageBoxFlags = u32;
pub const SDL_MESSAGEBOX_ERROR: SDL_MessageBoxFlags = 0x0000_0010;
pub const SDL_MESSAGEBOX_WARNING: SDL_MessageBoxFlags = 0x0000_0020;
pub const SDL_MESSAGEBOX_INFORMATION: SDL_MessageBoxFlags = 0x0000_0040;
pub const SDL_MESSAGEBOX_BUTTONS_LEFT_TO_RIGHT: SDL_MessageBoxFlags = 0x0000_0080;
pub const SDL_MESSAGEBOX_BUTTONS_RIGHT_TO_LEFT: SDL_MessageBoxFlags = 0x0000_0100;

pub type SDL_MessageBoxButtonFlags = u32;
pub const SDL_MESSAGEBOX_BUTTON_RETURNKEY_DEFAULT: SDL_MessageBoxButtonFlags = 0x0000_0001;
pub const SDL_MESSAGEBOX_BUTTON_ESCAPEKEY_DEFAULT: SDL_MessageBoxButtonFlags = 0x0000_0002;

/// Individual button data
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SDL_MessageBoxButtonData {
    pub flags: SDL_MessageBoxButtonFlags,
    /// User defined button id (value returned via `SDL_ShowMessageBox`)
    pub buttonID: c_int,
    /// The UTF-8 button text
    pub text: *const c_char,
}

/// RGB value used in a message box color scheme
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SDL_MessageBoxColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub type SDL_MessageBoxColorType = c_int;
pub const SDL_MESSAGEBOX_COLOR_BACKGROUND: SDL_MessageBoxColorType = 0;
pub const SDL_MESSAGEBOX_COLOR_TEXT: SDL_MessageBoxColorType = 1;
pub const SDL_MESSAGEBOX_COLOR_BUTTON_BORDER: SDL_MessageBoxColorType = 2;
pub const SDL_MESSAGEBOX_COLOR_BUTTON_BACKGROUND: SDL_MessageBoxColorType = 3;
pub const SDL_MESSAGEBOX_COLOR_BUTTON_SELECTED: SDL_MessageBoxColorType = 4;
pub const SDL_MESSAGEBOX_COLOR_COUNT: usize = 5;

/// A set of colors to use for message box dialogs
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SDL_MessageBoxColorScheme {
    pub colors: [SDL_MessageBoxColor; SDL_MESSAGEBOX_COLOR_COUNT],
}

/// MessageBox structure containing title, text, window, etc.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SDL_MessageBoxData {
    pub flags: SDL_MessageBoxFlags,
    /// Parent window, can be NULL
    pub window: *mut SDL_Window,
    /// UTF-8 title
    pub title: *const c_char,
    /// UTF-8 message text
    pub message: *const c_char,
    pub numbuttons: c_int,
    pub buttons: *const SDL_MessageBoxButtonData,
    /// NULL selects the system color scheme
    pub colorScheme: *const SDL_MessageBoxColorScheme,
}
