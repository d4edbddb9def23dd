// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Callback side table and dialog trampoline
//!
//! Closures never cross the boundary themselves. Each asynchronous call
//! registers its context in a [`CallbackTable`] and passes the returned
//! handle as SDL's `userdata`. The trampoline takes the context back out of
//! the table, which makes the handle single-fire: a second invocation finds
//! nothing and is logged instead of touching freed memory.

use crate::codec::{self, StringList};
use crate::error::Result;
use crate::native;
use crate::pool::BufferPool;

use sdl3_sys::Api;
use std::collections::BTreeMap;
use std::ffi::{c_char, c_int, c_void};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Map from opaque `userdata` handles to callback contexts
///
/// Handles are small non-zero integers, so they survive the round trip
/// through a pointer on every target and are never null.
pub struct CallbackTable<C> {
    next: AtomicUsize,
    entries: Mutex<BTreeMap<usize, C>>,
}

impl<C> CallbackTable<C> {
    pub const fn new() -> Self {
        Self {
            next: AtomicUsize::new(1),
            entries: Mutex::new(BTreeMap::new()),
        }
    }

    /// Store `context` and return the handle to pass as `userdata`
    pub fn register(&self, context: C) -> *mut c_void {
        let key = loop {
            let key = self.next.fetch_add(1, Ordering::Relaxed);
            if key != 0 {
                break key;
            }
        };
        self.lock().insert(key, context);
        key as *mut c_void
    }

    /// Remove and return the context for `handle`
    pub fn take(&self, handle: *mut c_void) -> Option<C> {
        self.lock().remove(&(handle as usize))
    }

    pub fn contains(&self, handle: *mut c_void) -> bool {
        self.lock().contains_key(&(handle as usize))
    }

    /// Number of registered contexts not yet taken
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<usize, C>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<C: Clone> CallbackTable<C> {
    /// Clone the context for `handle` without removing it
    pub fn get_cloned(&self, handle: *mut c_void) -> Option<C> {
        self.lock().get(&(handle as usize)).cloned()
    }
}

impl<C> Default for CallbackTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for CallbackTable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackTable").field("len", &self.len()).finish()
    }
}

/// Outcome of a file dialog, valid only for the duration of the callback
#[derive(Debug)]
pub enum DialogResult<'a> {
    /// The dialog could not be shown or failed; carries `SDL_GetError()`
    Error(&'a str),
    /// The user dismissed the dialog without choosing
    Cancelled,
    /// One or more paths were chosen
    Selected {
        files: &'a StringList,
        /// Index of the filter the user picked, when the platform reports it
        filter: Option<usize>,
    },
}

/// A native file list, classified
#[derive(Debug)]
pub(crate) enum FileListOutcome {
    Failed,
    Cancelled,
    Selected(StringList),
}

/// Classify and decode the `filelist` argument of a dialog callback
///
/// Null means failure, an immediately terminated list means the user
/// cancelled, anything else is a selection.
///
/// # Safety
///
/// `filelist` must be null or a valid NULL-terminated array of
/// NUL-terminated strings.
pub(crate) unsafe fn decode_file_list(
    filelist: *const *const c_char,
    pool: &Arc<BufferPool<u8>>,
) -> Result<FileListOutcome> {
    if filelist.is_null() {
        return Ok(FileListOutcome::Failed);
    }
    if unsafe { (*filelist).is_null() } {
        return Ok(FileListOutcome::Cancelled);
    }
    match unsafe { codec::decode_list(filelist, pool) }? {
        Some(list) => Ok(FileListOutcome::Selected(list)),
        None => Ok(FileListOutcome::Failed),
    }
}

pub(crate) type DialogCallback = Box<dyn FnOnce(DialogResult<'_>) + Send + 'static>;

/// Everything a pending dialog owns until SDL calls back
pub(crate) struct DialogContext {
    pub callback: DialogCallback,
    pub api: Api,
    pub pool: Arc<BufferPool<u8>>,
    /// Call inputs SDL may still read; released after the user callback
    pub inputs: Option<Box<dyn Send>>,
}

impl DialogContext {
    fn fire(self, filelist: *const *const c_char, filter: c_int) {
        let DialogContext {
            callback,
            api,
            pool,
            inputs,
        } = self;
        let filter = usize::try_from(filter).ok();

        match unsafe { decode_file_list(filelist, &pool) } {
            Ok(FileListOutcome::Failed) => {
                let message = native::error_message(&api);
                callback(DialogResult::Error(&message));
            }
            Ok(FileListOutcome::Cancelled) => callback(DialogResult::Cancelled),
            Ok(FileListOutcome::Selected(files)) => {
                callback(DialogResult::Selected {
                    files: &files,
                    filter,
                });
            }
            Err(e) => {
                log::warn!("dialog result could not be decoded: {}", e);
                let message = e.to_string();
                callback(DialogResult::Error(&message));
            }
        }
        drop(inputs);
    }
}

/// Pending dialogs, keyed by the `userdata` handed to SDL
pub(crate) static DIALOG_CALLBACKS: CallbackTable<DialogContext> = CallbackTable::new();

/// Single-fire lookup; a miss is a protocol violation
fn take_dialog(userdata: *mut c_void) -> Option<DialogContext> {
    let context = DIALOG_CALLBACKS.take(userdata);
    debug_assert!(
        context.is_some(),
        "dialog callback fired for unknown or completed handle {:p}",
        userdata
    );
    context
}

/// `SDL_DialogFileCallback` trampoline
///
/// May run on any thread. Panics in the user callback are caught here; the
/// transient buffers and the context are released either way.
pub(crate) unsafe extern "C" fn dialog_trampoline(
    userdata: *mut c_void,
    filelist: *const *const c_char,
    filter: c_int,
) {
    // catch_unwind prevents panics from unwinding across the FFI boundary,
    // which would be undefined behavior. That includes the debug assertion
    // on a second fire, which is a caller bug.
    let taken = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| take_dialog(userdata)));
    let Ok(Some(context)) = taken else {
        log::error!(
            "dialog callback fired for unknown or completed handle {:p}; ignored",
            userdata
        );
        return;
    };

    if std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        context.fire(filelist, filter);
    }))
    .is_err()
    {
        log::error!("panic in dialog callback (caught at FFI boundary, handle={:p})", userdata);
    }
}
