// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! File dialog projections (`SDL_dialog.h`)

use std::ffi::{c_char, c_int, c_void};

/// An entry for filters for file dialogs.
///
/// `name` is a user-readable label ("Office document"), `pattern` a
/// semicolon-separated list of extensions ("doc;docx") or `"*"`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SDL_DialogFileFilter {
    pub name: *const c_char,
    pub pattern: *const c_char,
}

/// Callback used by the file dialogs.
///
/// `filelist` is NULL on error, points at a NULL entry when the user
/// cancelled, and otherwise at a NULL-terminated list of UTF-8 paths owned
/// by SDL. `filter` is the index of the selected filter, or -1.
pub type SDL_DialogFileCallback = Option<
    unsafe extern "C" fn(userdata: *mut c_void, filelist: *const *const c_char, filter: c_int),
>;

/// Various types of file dialogs
pub type SDL_FileDialogType = c_int;
pub const SDL_FILEDIALOG_OPENFILE: SDL_FileDialogType = 0;
pub const SDL_FILEDIALOG_SAVEFILE: SDL_FileDialogType = 1;
pub const SDL_FILEDIALOG_OPENFOLDER: SDL_FileDialogType = 2;

pub const SDL_PROP_FILE_DIALOG_FILTERS_POINTER: &str = "SDL.filedialog.filters";
pub const SDL_PROP_FILE_DIALOG_NFILTERS_NUMBER: &str = "SDL.filedialog.nfilters";
pub const SDL_PROP_FILE_DIALOG_WINDOW_POINTER: &str = "SDL.filedialog.window";
pub const SDL_PROP_FILE_DIALOG_LOCATION_STRING: &str = "SDL.filedialog.location";
pub const SDL_PROP_FILE_DIALOG_MANY_BOOLEAN: &str = "SDL.filedialog.many";
pub const SDL_PROP_FILE_DIALOG_TITLE_STRING: &str = "SDL.filedialog.title";
pub const SDL_PROP_FILE_DIALOG_ACCEPT_STRING: &str = "SDL.filedialog.accept";
pub const SDL_PROP_FILE_DIALOG_CANCEL_STRING: &str = "SDL.filedialog.cancel";
