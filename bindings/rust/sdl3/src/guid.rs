// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Device GUIDs

use crate::codec;
use crate::error::Result;
use crate::sdl::Sdl;

use sdl3_sys::SDL_GUID;
use std::ffi::{c_char, c_int};
use std::fmt;

/// Size of the buffer SDL needs for a GUID string, terminator included
pub const GUID_STRING_SIZE: usize = 33;

/// A 128-bit device identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Guid(pub [u8; 16]);

impl From<SDL_GUID> for Guid {
    fn from(raw: SDL_GUID) -> Self {
        Guid(raw.data)
    }
}

impl From<Guid> for SDL_GUID {
    fn from(guid: Guid) -> Self {
        SDL_GUID { data: guid.0 }
    }
}

/// Lowercase hex, the same text `SDL_GUIDToString` produces
impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl Sdl {
    /// Format `guid` through SDL
    pub fn guid_to_string(&self, guid: Guid) -> Result<String> {
        let to_string = native!(self.api(), SDL_GUIDToString);
        let mut buf = [0u8; GUID_STRING_SIZE];
        unsafe {
            to_string(
                guid.into(),
                buf.as_mut_ptr().cast::<c_char>(),
                GUID_STRING_SIZE as c_int,
            )
        };
        Ok(codec::decode_bytes(&buf)?.to_owned())
    }

    /// Parse a GUID string through SDL; malformed input yields a zero GUID
    pub fn string_to_guid(&self, text: &str) -> Result<Guid> {
        let parse = native!(self.api(), SDL_StringToGUID);
        let text = codec::encode_required(text, self.pool())?;
        Ok(unsafe { parse(text.as_ptr()) }.into())
    }
}
