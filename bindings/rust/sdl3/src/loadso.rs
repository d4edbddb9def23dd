// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Shared objects loaded through SDL

use crate::codec;
use crate::error::Result;
use crate::sdl::Sdl;

use sdl3_sys::SDL_SharedObject;
use std::fmt;
use std::ptr::NonNull;

/// A function looked up in a [`SharedObject`]
///
/// Transmute to the real signature before calling.
pub type FunctionPointer = unsafe extern "C" fn();

/// A shared library opened with `SDL_LoadObject`, unloaded on drop
pub struct SharedObject {
    sdl: Sdl,
    handle: NonNull<SDL_SharedObject>,
}

// The handle is only passed back to SDL, which is thread-safe here.
unsafe impl Send for SharedObject {}
unsafe impl Sync for SharedObject {}

impl Sdl {
    /// Open the shared object at `path`
    pub fn load_object(&self, path: &str) -> Result<SharedObject> {
        let load = native!(self.api(), SDL_LoadObject);
        // drop needs it; fail now rather than leak the handle
        let _ = native!(self.api(), SDL_UnloadObject);
        let path = codec::encode_required(path, self.pool())?;

        let handle = unsafe { load(path.as_ptr()) };
        match NonNull::new(handle) {
            Some(handle) => Ok(SharedObject {
                sdl: self.clone(),
                handle,
            }),
            None => Err(self.native_error("SDL_LoadObject")),
        }
    }
}

impl SharedObject {
    /// Look up `name`; `Ok(None)` when the object does not export it
    pub fn function(&self, name: &str) -> Result<Option<FunctionPointer>> {
        let lookup = native!(self.sdl.api(), SDL_LoadFunction);
        let name = codec::encode_required(name, self.sdl.pool())?;
        Ok(unsafe { lookup(self.handle.as_ptr(), name.as_ptr()) })
    }
}

impl Drop for SharedObject {
    fn drop(&mut self) {
        if let Some(unload) = self.sdl.api().SDL_UnloadObject {
            unsafe { unload(self.handle.as_ptr()) };
        }
    }
}

impl fmt::Debug for SharedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedObject").field("handle", &self.handle).finish()
    }
}
