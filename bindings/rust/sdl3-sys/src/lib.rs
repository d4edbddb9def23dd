// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Raw FFI declarations for SDL3
//!
//! This crate provides unsafe, low-level projections of the SDL3 C ABI:
//! `#[repr(C)]` structs whose field order, size and alignment mirror the
//! native headers, the callback typedefs, and a runtime symbol table
//! ([`Api`]) resolved from the shared library with `libloading`.
//! For a safe, idiomatic Rust API, use the `sdl3` crate instead.
//!
//! # Safety
//!
//! Every entry in the symbol table is an `unsafe extern "C" fn` and follows
//! C calling conventions. The caller is responsible for:
//! - Ensuring pointers are valid, properly aligned and NUL-terminated where
//!   the native side expects strings
//! - Keeping every buffer handed to an asynchronous call alive until the
//!   matching callback fires
//! - Never unwinding out of a callback invoked by the native library
//!
//! # Example
//!
//! ```no_run
//! use sdl3_sys::SdlLibrary;
//!
//! let lib = unsafe { SdlLibrary::open("libSDL3.so.0") }.expect("SDL3 not found");
//! if let Some(get_version) = lib.api().SDL_GetVersion {
//!     let version = unsafe { get_version() };
//!     println!("SDL {}.{}.{}", version / 1_000_000, (version / 1000) % 1000, version % 1000);
//! }
//! ```

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

mod api;
mod clipboard;
mod dialog;
mod events;
mod gpu;
mod log;
mod messagebox;
mod misc;
mod shadercross;

pub use api::*;
pub use clipboard::*;
pub use dialog::*;
pub use events::*;
pub use gpu::*;
pub use log::*;
pub use messagebox::*;
pub use misc::*;
pub use shadercross::*;

use std::ffi::c_int;

/// Opaque window handle (`SDL_Window *`)
#[repr(C)]
pub struct SDL_Window {
    _private: [u8; 0],
}

/// Property group handle
pub type SDL_PropertiesID = u32;

/// Window identifier carried by events
pub type SDL_WindowID = u32;

/// Generic function pointer as returned by `SDL_LoadFunction`
pub type SDL_FunctionPointer = Option<unsafe extern "C" fn()>;

/// Packs a version triple the way `SDL_VERSIONNUM` does
pub const fn SDL_VERSIONNUM(major: c_int, minor: c_int, patch: c_int) -> c_int {
    major * 1_000_000 + minor * 1000 + patch
}

/// Lowest SDL version these projections were written against
pub const SDL_MIN_VERSION: c_int = SDL_VERSIONNUM(3, 2, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versionnum() {
        assert_eq!(SDL_VERSIONNUM(3, 2, 0), 3_002_000);
        assert_eq!(SDL_VERSIONNUM(3, 2, 16), 3_002_016);
        assert!(SDL_VERSIONNUM(3, 3, 0) > SDL_MIN_VERSION);
    }

    #[test]
    fn test_opaque_window_is_zero_sized() {
        assert_eq!(std::mem::size_of::<SDL_Window>(), 0);
    }
}
