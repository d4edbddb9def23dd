// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Core `Sdl` handle

use crate::error::{Error, Result};
use crate::native;
use crate::options::Options;
use crate::pool::BufferPool;

use sdl3_sys::{Api, SdlLibrary, SDL_Window};
use std::ffi::c_int;
use std::fmt;
use std::ptr::NonNull;
use std::sync::Arc;

pub(crate) struct SdlInner {
    api: Api,
    pool: Arc<BufferPool<u8>>,
    options: Options,
    // Keeps the symbols in `api` mapped; dropped last.
    _library: Option<SdlLibrary>,
}

/// Handle to a loaded SDL3 library
///
/// Cheap to clone; every clone shares the symbol table and the transient
/// buffer pool. All methods may be called from any thread, subject to SDL's
/// own rules (dialogs and message boxes usually want the main thread).
///
/// # Example
///
/// ```no_run
/// use sdl3::{MessageBoxFlags, Sdl};
///
/// # fn main() -> sdl3::Result<()> {
/// let sdl = Sdl::load()?;
/// println!("running against SDL {}", sdl.version()?);
/// sdl.show_simple_message_box(MessageBoxFlags::INFORMATION, "Hello", "Loaded", None)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Sdl {
    pub(crate) inner: Arc<SdlInner>,
}

impl Sdl {
    /// Load SDL3 using default options
    pub fn load() -> Result<Self> {
        Self::with_options(&Options::new())
    }

    /// Load SDL3, trying each of [`Options::library_candidates`] in turn
    pub fn with_options(options: &Options) -> Result<Self> {
        let mut last_err = None;
        for path in options.library_candidates() {
            match unsafe { SdlLibrary::open(&path) } {
                Ok(library) => {
                    log::debug!("loaded SDL3 from {}", path.display());
                    let missing = library.api().missing();
                    if !missing.is_empty() {
                        log::debug!("{} SDL3 symbols unavailable: {:?}", missing.len(), missing);
                    }
                    let api = *library.api();
                    let sdl = Self::from_parts(api, options.clone(), Some(library));
                    sdl.check_version();
                    return Ok(sdl);
                }
                Err(e) => {
                    log::trace!("SDL3 not loadable from {}: {}", path.display(), e);
                    last_err = Some(e);
                }
            }
        }
        match last_err {
            Some(e) => Err(Error::Load(e)),
            None => Err(Error::InvalidArgument("no SDL3 library candidates configured")),
        }
    }

    /// Wrap an already populated symbol table
    ///
    /// Used for statically linked builds and for test doubles.
    ///
    /// # Safety
    ///
    /// Every `Some` entry must be callable with the declared signature and
    /// honor SDL's documented contract, for as long as any clone of the
    /// returned handle is alive.
    pub unsafe fn from_api(api: Api) -> Self {
        Self::from_parts(api, Options::new(), None)
    }

    /// Like [`Sdl::from_api`], with explicit options
    ///
    /// # Safety
    ///
    /// Same contract as [`Sdl::from_api`].
    pub unsafe fn from_api_with_options(api: Api, options: Options) -> Self {
        Self::from_parts(api, options, None)
    }

    fn from_parts(api: Api, options: Options, library: Option<SdlLibrary>) -> Self {
        let pool = Arc::new(BufferPool::new(options.retained_per_size()));
        Self {
            inner: Arc::new(SdlInner {
                api,
                pool,
                options,
                _library: library,
            }),
        }
    }

    fn check_version(&self) {
        if let Ok(version) = self.version_num() {
            if version < sdl3_sys::SDL_MIN_VERSION {
                log::warn!(
                    "SDL {} is older than the {} these bindings target",
                    format_version(version),
                    format_version(sdl3_sys::SDL_MIN_VERSION)
                );
            }
        }
    }

    /// The resolved symbol table (for advanced use)
    pub fn api(&self) -> &Api {
        &self.inner.api
    }

    /// The pool every call site rents transient buffers from
    pub fn pool(&self) -> &Arc<BufferPool<u8>> {
        &self.inner.pool
    }

    /// The options this handle was created with
    pub fn options(&self) -> &Options {
        &self.inner.options
    }

    /// Packed version number (`major * 1000000 + minor * 1000 + patch`)
    pub fn version_num(&self) -> Result<c_int> {
        let get_version = native!(self.api(), SDL_GetVersion);
        Ok(unsafe { get_version() })
    }

    /// Version as `"major.minor.patch"`
    pub fn version(&self) -> Result<String> {
        self.version_num().map(format_version)
    }

    /// The message of the last native error on this thread
    ///
    /// Empty when no error is set or the symbol is unavailable.
    pub fn last_error(&self) -> String {
        native::error_message(self.api())
    }

    /// Clear the native error state
    pub fn clear_error(&self) {
        if let Some(clear) = self.api().SDL_ClearError {
            unsafe { clear() };
        }
    }

    /// Build an `Error::Native` for `call` from the current native error
    pub(crate) fn native_error(&self, call: &'static str) -> Error {
        Error::Native {
            call,
            message: self.last_error(),
        }
    }
}

impl fmt::Debug for Sdl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sdl")
            .field("loaded", &self.inner._library.is_some())
            .field("pool", &self.inner.pool)
            .finish_non_exhaustive()
    }
}

fn format_version(version: c_int) -> String {
    format!("{}.{}.{}", version / 1_000_000, (version / 1000) % 1000, version % 1000)
}

/// Borrowed handle to an SDL window, used to parent dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRef(NonNull<SDL_Window>);

impl WindowRef {
    /// # Safety
    ///
    /// `ptr` must be a live window created by the same SDL library, and must
    /// stay alive for every call (and asynchronous callback) it is passed to.
    pub unsafe fn from_raw(ptr: NonNull<SDL_Window>) -> Self {
        Self(ptr)
    }

    pub fn as_ptr(self) -> *mut SDL_Window {
        self.0.as_ptr()
    }
}

pub(crate) fn window_ptr(window: Option<WindowRef>) -> *mut SDL_Window {
    window.map_or(std::ptr::null_mut(), WindowRef::as_ptr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::fakes;

    #[test]
    fn test_version_from_fake_table() {
        let sdl = unsafe { Sdl::from_api(fakes::api()) };
        assert_eq!(sdl.version_num().unwrap(), 3_002_010);
        assert_eq!(sdl.version().unwrap(), "3.2.10");
    }

    #[test]
    fn test_missing_symbol() {
        let sdl = unsafe { Sdl::from_api(Api::empty()) };
        match sdl.version() {
            Err(Error::MissingSymbol(name)) => assert_eq!(name, "SDL_GetVersion"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(sdl.last_error(), "");
        sdl.clear_error();
    }

    #[test]
    fn test_last_error_and_clear() {
        let sdl = unsafe { Sdl::from_api(fakes::api()) };
        fakes::set_error("Parameter 'window' is invalid");
        assert_eq!(sdl.last_error(), "Parameter 'window' is invalid");
        match sdl.native_error("SDL_Test") {
            Error::Native { call, message } => {
                assert_eq!(call, "SDL_Test");
                assert_eq!(message, "Parameter 'window' is invalid");
            }
            other => panic!("unexpected {:?}", other),
        }
        sdl.clear_error();
        assert_eq!(sdl.last_error(), "");
    }

    #[test]
    fn test_clones_share_pool() {
        let sdl = unsafe { Sdl::from_api(fakes::api()) };
        let clone = sdl.clone();
        let _buf = sdl.pool().rent(32);
        assert_eq!(clone.pool().outstanding(), 1);
    }

    #[test]
    fn test_load_failure_reports_error() {
        let opts = Options::new()
            .library_path("/definitely/not/here/libSDL3.so.0")
            .search_defaults(false);
        assert!(matches!(Sdl::with_options(&opts), Err(Error::Load(_))));

        let empty = Options::new().search_defaults(false);
        assert!(matches!(Sdl::with_options(&empty), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_window_ptr() {
        assert!(window_ptr(None).is_null());
        let mut storage = 0u8;
        let raw = NonNull::from(&mut storage).cast::<SDL_Window>();
        let window = unsafe { WindowRef::from_raw(raw) };
        assert_eq!(window_ptr(Some(window)), raw.as_ptr());
    }
}
