// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Helpers for memory and error state owned by the native library

use sdl3_sys::Api;
use std::ffi::{c_void, CStr};

/// A pointer allocated by SDL that this side must hand back to `SDL_free`
pub(crate) struct NativeAlloc {
    ptr: *mut c_void,
    free: unsafe extern "C" fn(*mut c_void),
}

impl NativeAlloc {
    pub(crate) fn new(ptr: *mut c_void, free: unsafe extern "C" fn(*mut c_void)) -> Self {
        Self { ptr, free }
    }

    pub(crate) fn as_ptr(&self) -> *mut c_void {
        self.ptr
    }

    pub(crate) fn is_null(&self) -> bool {
        self.ptr.is_null()
    }
}

impl Drop for NativeAlloc {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            unsafe { (self.free)(self.ptr) };
        }
    }
}

/// Current `SDL_GetError()` text, empty when unset or unavailable
pub(crate) fn error_message(api: &Api) -> String {
    let Some(get_error) = api.SDL_GetError else {
        return String::new();
    };
    let ptr = unsafe { get_error() };
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}
