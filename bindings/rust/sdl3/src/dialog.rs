// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! File dialogs
//!
//! SDL may show a dialog asynchronously and call back on another thread, or
//! call back before the show function returns. Filters and the default
//! location are encoded into a heap block that the pending context owns, so
//! they stay valid until the callback has run.

use crate::callback::{dialog_trampoline, DialogContext, DialogResult, DIALOG_CALLBACKS};
use crate::codec::{self, NativeString};
use crate::error::{Error, Result};
use crate::pin::PinStack;
use crate::pool::BufferPool;
use crate::sdl::{window_ptr, Sdl, WindowRef};

use sdl3_sys::{SDL_DialogFileFilter, SDL_FileDialogType, SDL_PropertiesID};
use std::ffi::{c_char, c_int, c_void};
use std::sync::Arc;

/// A named filter for file dialogs
///
/// `pattern` is a semicolon-separated list of extensions without dots
/// (`"png;jpg"`), or `"*"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogFileFilter {
    name: String,
    pattern: String,
}

impl DialogFileFilter {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Dialog kind for [`Sdl::show_file_dialog_with_properties`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileDialogKind {
    OpenFile,
    SaveFile,
    OpenFolder,
}

impl FileDialogKind {
    fn to_c(self) -> SDL_FileDialogType {
        match self {
            FileDialogKind::OpenFile => sdl3_sys::SDL_FILEDIALOG_OPENFILE,
            FileDialogKind::SaveFile => sdl3_sys::SDL_FILEDIALOG_SAVEFILE,
            FileDialogKind::OpenFolder => sdl3_sys::SDL_FILEDIALOG_OPENFOLDER,
        }
    }
}

/// Encoded dialog inputs, kept at a fixed heap address until the callback
pub(crate) struct DialogInputs {
    pins: PinStack,
    filters: Vec<SDL_DialogFileFilter>,
    strings: Vec<NativeString>,
    location: NativeString,
}

// SAFETY: the raw pointers in `filters` point into `strings`, which this
// struct owns; nothing else aliases them, so moving the block to the thread
// SDL calls back on is sound.
unsafe impl Send for DialogInputs {}

impl DialogInputs {
    pub(crate) fn new(
        filters: &[DialogFileFilter],
        default_location: Option<&str>,
        pool: &Arc<BufferPool<u8>>,
    ) -> Result<Box<Self>> {
        let mut strings = Vec::with_capacity(filters.len() * 2);
        for filter in filters {
            strings.push(codec::encode_required(&filter.name, pool)?);
            strings.push(codec::encode_required(&filter.pattern, pool)?);
        }
        let location = match default_location {
            Some(path) => codec::encode(path, pool)?,
            None => NativeString::Absent,
        };

        let mut inputs = Box::new(Self {
            pins: PinStack::new(),
            filters: Vec::with_capacity(filters.len()),
            strings,
            location,
        });

        // children first, then the array that points at them
        let this = &mut *inputs;
        for s in &this.strings {
            this.pins.pin(s);
        }
        this.pins.pin(&this.location);
        this.filters.extend(this.strings.chunks_exact(2).map(|pair| SDL_DialogFileFilter {
            name: pair[0].as_ptr(),
            pattern: pair[1].as_ptr(),
        }));
        this.pins.pin(this.filters.as_slice());
        Ok(inputs)
    }

    fn filters_ptr(&self) -> *const SDL_DialogFileFilter {
        if self.filters.is_empty() {
            std::ptr::null()
        } else {
            self.filters.as_ptr()
        }
    }

    fn nfilters(&self) -> Result<c_int> {
        c_int::try_from(self.filters.len())
            .map_err(|_| Error::InvalidArgument("too many dialog filters"))
    }

    fn location_ptr(&self) -> *const c_char {
        self.location.as_ptr()
    }

    #[cfg(test)]
    pub(crate) fn pins(&self) -> &PinStack {
        &self.pins
    }
}

impl Sdl {
    fn register_dialog<F>(&self, callback: F, inputs: Option<Box<DialogInputs>>) -> *mut c_void
    where
        F: FnOnce(DialogResult<'_>) + Send + 'static,
    {
        DIALOG_CALLBACKS.register(DialogContext {
            callback: Box::new(callback),
            api: *self.api(),
            pool: Arc::clone(self.pool()),
            inputs: inputs.map(|b| b as Box<dyn Send>),
        })
    }

    /// Show a file picker that lets the user select one or more files
    ///
    /// Returns once the request is issued; `callback` runs exactly once, on
    /// whichever thread SDL reports the result from, possibly before this
    /// function returns.
    ///
    /// # Arguments
    ///
    /// * `window` - Parent window, or `None`
    /// * `filters` - File type filters; may be empty
    /// * `default_location` - Initial folder or file; blank means none
    /// * `allow_many` - Whether several files may be chosen
    pub fn show_open_file_dialog<F>(
        &self,
        window: Option<WindowRef>,
        filters: &[DialogFileFilter],
        default_location: Option<&str>,
        allow_many: bool,
        callback: F,
    ) -> Result<()>
    where
        F: FnOnce(DialogResult<'_>) + Send + 'static,
    {
        let show = native!(self.api(), SDL_ShowOpenFileDialog);
        let inputs = DialogInputs::new(filters, default_location, self.pool())?;
        let nfilters = inputs.nfilters()?;
        let filters_ptr = inputs.filters_ptr();
        let location_ptr = inputs.location_ptr();
        let handle = self.register_dialog(callback, Some(inputs));
        log::debug!("open file dialog issued (handle={:p}, filters={})", handle, nfilters);

        unsafe {
            show(
                Some(dialog_trampoline),
                handle,
                window_ptr(window),
                filters_ptr,
                nfilters,
                location_ptr,
                allow_many,
            )
        };
        Ok(())
    }

    /// Show a file picker for choosing a path to save to
    ///
    /// Same callback contract as [`Sdl::show_open_file_dialog`]. The selection
    /// holds at most one path.
    pub fn show_save_file_dialog<F>(
        &self,
        window: Option<WindowRef>,
        filters: &[DialogFileFilter],
        default_location: Option<&str>,
        callback: F,
    ) -> Result<()>
    where
        F: FnOnce(DialogResult<'_>) + Send + 'static,
    {
        let show = native!(self.api(), SDL_ShowSaveFileDialog);
        let inputs = DialogInputs::new(filters, default_location, self.pool())?;
        let nfilters = inputs.nfilters()?;
        let filters_ptr = inputs.filters_ptr();
        let location_ptr = inputs.location_ptr();
        let handle = self.register_dialog(callback, Some(inputs));
        log::debug!("save file dialog issued (handle={:p}, filters={})", handle, nfilters);

        unsafe {
            show(
                Some(dialog_trampoline),
                handle,
                window_ptr(window),
                filters_ptr,
                nfilters,
                location_ptr,
            )
        };
        Ok(())
    }

    /// Show a folder picker
    ///
    /// Same callback contract as [`Sdl::show_open_file_dialog`].
    pub fn show_open_folder_dialog<F>(
        &self,
        window: Option<WindowRef>,
        default_location: Option<&str>,
        allow_many: bool,
        callback: F,
    ) -> Result<()>
    where
        F: FnOnce(DialogResult<'_>) + Send + 'static,
    {
        let show = native!(self.api(), SDL_ShowOpenFolderDialog);
        let inputs = DialogInputs::new(&[], default_location, self.pool())?;
        let location_ptr = inputs.location_ptr();
        let handle = self.register_dialog(callback, Some(inputs));
        log::debug!("open folder dialog issued (handle={:p})", handle);

        unsafe {
            show(
                Some(dialog_trampoline),
                handle,
                window_ptr(window),
                location_ptr,
                allow_many,
            )
        };
        Ok(())
    }

    /// Show a dialog configured through an SDL property group
    ///
    /// Any pointers stored in `props` (filters, window, strings) are the
    /// caller's to keep alive until `callback` runs.
    pub fn show_file_dialog_with_properties<F>(
        &self,
        kind: FileDialogKind,
        props: SDL_PropertiesID,
        callback: F,
    ) -> Result<()>
    where
        F: FnOnce(DialogResult<'_>) + Send + 'static,
    {
        let show = native!(self.api(), SDL_ShowFileDialogWithProperties);
        let handle = self.register_dialog(callback, None);
        log::debug!("{:?} dialog issued with properties {} (handle={:p})", kind, props, handle);

        unsafe { show(kind.to_c(), Some(dialog_trampoline), handle, props) };
        Ok(())
    }
}
