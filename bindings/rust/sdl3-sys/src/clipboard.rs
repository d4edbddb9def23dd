// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Clipboard callback typedefs (`SDL_clipboard.h`)

use std::ffi::{c_char, c_void};

/// Called when data for `mime_type` is requested by the OS.
///
/// Called with a NULL `mime_type` when the clipboard is cleared or new data
/// is set. The returned pointer is not freed by SDL and must stay valid
/// until the next request or the cleanup callback.
pub type SDL_ClipboardDataCallback = Option<
    unsafe extern "C" fn(
        userdata: *mut c_void,
        mime_type: *const c_char,
        size: *mut usize,
    ) -> *const c_void,
>;

/// Called once when the clipboard is cleared or new data is set.
pub type SDL_ClipboardCleanupCallback = Option<unsafe extern "C" fn(userdata: *mut c_void)>;
