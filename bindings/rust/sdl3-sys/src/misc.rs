// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Small fixed-layout structs from assorted headers

/// A 128-bit identifier for an input device (`SDL_guid.h`)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SDL_GUID {
    pub data: [u8; 16],
}

/// Opaque shared object handle (`SDL_loadso.h`)
#[repr(C)]
pub struct SDL_SharedObject {
    _private: [u8; 0],
}

/// Opaque per-display-mode driver data
#[repr(C)]
pub struct SDL_DisplayModeData {
    _private: [u8; 0],
}

pub type SDL_DisplayID = u32;
pub type SDL_PixelFormat = u32;

/// Structure describing a display mode (`SDL_video.h`)
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SDL_DisplayMode {
    pub displayID: SDL_DisplayID,
    pub format: SDL_PixelFormat,
    pub w: i32,
    pub h: i32,
    pub pixel_density: f32,
    /// 0.0 when unspecified
    pub refresh_rate: f32,
    pub refresh_rate_numerator: i32,
    pub refresh_rate_denominator: i32,
    pub internal: *mut SDL_DisplayModeData,
}

pub type SDL_PathType = i32;
pub const SDL_PATHTYPE_NONE: SDL_PathType = 0;
pub const SDL_PATHTYPE_FILE: SDL_PathType = 1;
pub const SDL_PATHTYPE_DIRECTORY: SDL_PathType = 2;
pub const SDL_PATHTYPE_OTHER: SDL_PathType = 3;

/// Nanoseconds since the Unix epoch
pub type SDL_Time = i64;

/// Information about a path on the filesystem (`SDL_filesystem.h`)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SDL_PathInfo {
    pub type_: SDL_PathType,
    pub size: u64,
    pub create_time: SDL_Time,
    pub modify_time: SDL_Time,
    pub access_time: SDL_Time,
}

/// An atomic 32-bit value (`SDL_atomic.h`); only touch it through SDL's
/// atomic functions.
#[repr(C)]
#[derive(Debug, Default)]
pub struct SDL_AtomicU32 {
    pub value: u32,
}
