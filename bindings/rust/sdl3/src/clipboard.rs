// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Clipboard data providers
//!
//! Unlike dialogs, a clipboard provider is invoked any number of times and
//! lives until SDL calls the cleanup callback (when the clipboard is cleared
//! or replaced). The data trampoline therefore clones the context instead
//! of taking it; only cleanup removes it from the table.

use crate::callback::CallbackTable;
use crate::codec::{self, NativeString};
use crate::error::{Error, Result};
use crate::native::NativeAlloc;
use crate::pin::PinStack;
use crate::sdl::Sdl;

use std::ffi::{c_char, c_void};
use std::sync::{Arc, Mutex};

type Provider = Box<dyn Fn(&str) -> Option<Vec<u8>> + Send + Sync + 'static>;

struct ClipboardContext {
    provider: Provider,
    // Bytes handed out by the last request; SDL reads them after we return.
    last: Mutex<Option<Vec<u8>>>,
}

static CLIPBOARD_CALLBACKS: CallbackTable<Arc<ClipboardContext>> = CallbackTable::new();

/// `SDL_ClipboardDataCallback` trampoline
unsafe extern "C" fn clipboard_data_trampoline(
    userdata: *mut c_void,
    mime_type: *const c_char,
    size: *mut usize,
) -> *const c_void {
    if !size.is_null() {
        unsafe { *size = 0 };
    }
    // NULL means the offer is being withdrawn; nothing to provide.
    if mime_type.is_null() {
        return std::ptr::null();
    }
    let Some(context) = CLIPBOARD_CALLBACKS.get_cloned(userdata) else {
        log::error!("clipboard data requested for unknown handle {:p}", userdata);
        return std::ptr::null();
    };
    let mime = match unsafe { codec::decode(mime_type) } {
        Ok(mime) => mime,
        Err(e) => {
            log::warn!("clipboard MIME type could not be decoded: {}", e);
            return std::ptr::null();
        }
    };

    let provided =
        std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| (context.provider)(mime)));
    let data = match provided {
        Ok(data) => data,
        Err(_) => {
            log::error!(
                "panic in clipboard provider (caught at FFI boundary, handle={:p})",
                userdata
            );
            None
        }
    };

    let mut last = context.last.lock().unwrap_or_else(|e| e.into_inner());
    *last = data;
    match last.as_ref() {
        Some(bytes) => {
            if !size.is_null() {
                unsafe { *size = bytes.len() };
            }
            bytes.as_ptr().cast()
        }
        None => std::ptr::null(),
    }
}

/// `SDL_ClipboardCleanupCallback` trampoline
unsafe extern "C" fn clipboard_cleanup_trampoline(userdata: *mut c_void) {
    if CLIPBOARD_CALLBACKS.take(userdata).is_none() {
        log::debug!("clipboard cleanup for unknown handle {:p}", userdata);
    }
}

impl Sdl {
    /// Offer data on the clipboard for the given MIME types
    ///
    /// `provider` is called with the requested MIME type each time another
    /// application pastes, and may return `None` when it has nothing for
    /// that type. It stays registered until SDL replaces or clears the
    /// clipboard contents.
    pub fn set_clipboard_data<F>(&self, mime_types: &[&str], provider: F) -> Result<()>
    where
        F: Fn(&str) -> Option<Vec<u8>> + Send + Sync + 'static,
    {
        let set = native!(self.api(), SDL_SetClipboardData);
        if mime_types.is_empty() {
            return Err(Error::InvalidArgument("clipboard data needs at least one MIME type"));
        }

        let encoded = mime_types
            .iter()
            .map(|m| codec::encode_required(m, self.pool()))
            .collect::<Result<Vec<NativeString>>>()?;
        let mut pins = PinStack::new();
        for mime in &encoded {
            pins.pin(mime);
        }
        let pointers: Vec<*const c_char> = encoded.iter().map(NativeString::as_ptr).collect();
        pins.pin(pointers.as_slice());

        let handle = CLIPBOARD_CALLBACKS.register(Arc::new(ClipboardContext {
            provider: Box::new(provider),
            last: Mutex::new(None),
        }));
        // SDL copies the MIME type strings before returning
        let ok = unsafe {
            set(
                Some(clipboard_data_trampoline),
                Some(clipboard_cleanup_trampoline),
                handle,
                pointers.as_ptr(),
                pointers.len(),
            )
        };
        pins.unpin_all();

        if ok {
            log::debug!("clipboard provider registered for {:?}", mime_types);
            Ok(())
        } else {
            CLIPBOARD_CALLBACKS.take(handle);
            Err(self.native_error("SDL_SetClipboardData"))
        }
    }

    /// Clear clipboard data; SDL releases the current provider
    pub fn clear_clipboard_data(&self) -> Result<()> {
        let clear = native!(self.api(), SDL_ClearClipboardData);
        if unsafe { clear() } {
            Ok(())
        } else {
            Err(self.native_error("SDL_ClearClipboardData"))
        }
    }

    /// Whether the clipboard holds data for `mime_type`
    pub fn has_clipboard_data(&self, mime_type: &str) -> Result<bool> {
        let has = native!(self.api(), SDL_HasClipboardData);
        let mime = codec::encode_required(mime_type, self.pool())?;
        Ok(unsafe { has(mime.as_ptr()) })
    }

    /// MIME types currently offered on the clipboard
    pub fn clipboard_mime_types(&self) -> Result<Vec<String>> {
        let get = native!(self.api(), SDL_GetClipboardMimeTypes);
        let free = native!(self.api(), SDL_free);

        let mut count = 0usize;
        let list = NativeAlloc::new(unsafe { get(&mut count) }.cast(), free);
        if list.is_null() {
            return Err(self.native_error("SDL_GetClipboardMimeTypes"));
        }
        let names = list.as_ptr().cast::<*const c_char>();
        let types = unsafe { codec::decode_array(names, count, self.pool()) }?;
        Ok(types.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::fakes;
    use sdl3_sys::{Api, SDL_ClipboardCleanupCallback, SDL_ClipboardDataCallback};
    use std::cell::RefCell;
    use std::ffi::CStr;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Registered {
        callback: SDL_ClipboardDataCallback,
        cleanup: SDL_ClipboardCleanupCallback,
        userdata: usize,
        mime_types: Vec<String>,
    }

    thread_local! {
        static CLIPBOARD: RefCell<Option<Registered>> = const { RefCell::new(None) };
        static FAIL_SET: RefCell<bool> = const { RefCell::new(false) };
    }

    unsafe extern "C" fn fake_set(
        callback: SDL_ClipboardDataCallback,
        cleanup: SDL_ClipboardCleanupCallback,
        userdata: *mut c_void,
        mime_types: *const *const c_char,
        num_mime_types: usize,
    ) -> bool {
        if FAIL_SET.with(|f| *f.borrow()) {
            fakes::set_error("clipboard unavailable");
            return false;
        }
        unsafe { fake_clear() };
        let mime_types = (0..num_mime_types)
            .map(|i| unsafe { CStr::from_ptr(*mime_types.add(i)) }.to_string_lossy().into_owned())
            .collect();
        CLIPBOARD.with(|c| {
            *c.borrow_mut() = Some(Registered {
                callback,
                cleanup,
                userdata: userdata as usize,
                mime_types,
            })
        });
        true
    }

    unsafe extern "C" fn fake_clear() -> bool {
        if let Some(old) = CLIPBOARD.with(|c| c.borrow_mut().take()) {
            if let Some(cleanup) = old.cleanup {
                unsafe { cleanup(old.userdata as *mut c_void) };
            }
        }
        true
    }

    unsafe extern "C" fn fake_has(mime_type: *const c_char) -> bool {
        let mime = unsafe { CStr::from_ptr(mime_type) }.to_string_lossy().into_owned();
        CLIPBOARD.with(|c| c.borrow().as_ref().is_some_and(|r| r.mime_types.contains(&mime)))
    }

    /// One malloc'd pointer array over static strings, like SDL returns
    unsafe extern "C" fn fake_mime_types(num: *mut usize) -> *mut *mut c_char {
        let entries: [&'static CStr; 2] = [c"text/plain", c"image/png"];
        let size = std::mem::size_of::<*mut c_char>() * (entries.len() + 1);
        let array = unsafe { libc::malloc(size) }.cast::<*mut c_char>();
        for (i, entry) in entries.iter().enumerate() {
            unsafe { *array.add(i) = entry.as_ptr().cast_mut() };
        }
        unsafe {
            *array.add(entries.len()) = std::ptr::null_mut();
            *num = entries.len();
        }
        array
    }

    fn sdl() -> Sdl {
        FAIL_SET.with(|f| *f.borrow_mut() = false);
        let api = Api {
            SDL_SetClipboardData: Some(fake_set),
            SDL_ClearClipboardData: Some(fake_clear),
            SDL_HasClipboardData: Some(fake_has),
            SDL_GetClipboardMimeTypes: Some(fake_mime_types),
            ..fakes::api()
        };
        unsafe { Sdl::from_api(api) }
    }

    /// Ask the registered provider for `mime`, as a pasting app would
    fn request(mime: &CStr) -> Option<Vec<u8>> {
        CLIPBOARD.with(|c| {
            let c = c.borrow();
            let registered = c.as_ref()?;
            let callback = registered.callback?;
            let mut size = usize::MAX;
            let userdata = registered.userdata as *mut c_void;
            let data = unsafe { callback(userdata, mime.as_ptr(), &mut size) };
            if data.is_null() {
                assert_eq!(size, 0);
                return None;
            }
            Some(unsafe { std::slice::from_raw_parts(data.cast::<u8>(), size) }.to_vec())
        })
    }

    fn handle() -> *mut c_void {
        CLIPBOARD.with(|c| c.borrow().as_ref().map_or(0, |r| r.userdata)) as *mut c_void
    }

    #[test]
    fn test_provider_serves_repeated_requests() {
        let sdl = sdl();
        let calls = Arc::new(AtomicUsize::new(0));
        let c = calls.clone();
        sdl.set_clipboard_data(&["text/plain", "text/html"], move |mime| {
            c.fetch_add(1, Ordering::SeqCst);
            match mime {
                "text/plain" => Some(b"hello".to_vec()),
                "text/html" => Some(b"<b>hello</b>".to_vec()),
                _ => None,
            }
        })
        .unwrap();

        assert_eq!(request(c"text/plain").as_deref(), Some(&b"hello"[..]));
        assert_eq!(request(c"text/html").as_deref(), Some(&b"<b>hello</b>"[..]));
        assert_eq!(request(c"text/plain").as_deref(), Some(&b"hello"[..]));
        assert_eq!(request(c"image/png"), None);
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        assert!(sdl.has_clipboard_data("text/html").unwrap());
        assert!(!sdl.has_clipboard_data("image/png").unwrap());

        let h = handle();
        assert!(CLIPBOARD_CALLBACKS.contains(h));
        sdl.clear_clipboard_data().unwrap();
        assert!(!CLIPBOARD_CALLBACKS.contains(h), "cleanup releases the provider");
    }

    #[test]
    fn test_replacing_data_releases_previous_provider() {
        let sdl = sdl();
        sdl.set_clipboard_data(&["text/plain"], |_| Some(b"one".to_vec())).unwrap();
        let first = handle();
        sdl.set_clipboard_data(&["text/plain"], |_| Some(b"two".to_vec())).unwrap();
        let second = handle();

        assert_ne!(first, second);
        assert!(!CLIPBOARD_CALLBACKS.contains(first));
        assert_eq!(request(c"text/plain").as_deref(), Some(&b"two"[..]));
        sdl.clear_clipboard_data().unwrap();
    }

    #[test]
    fn test_panicking_provider_returns_no_data() {
        let sdl = sdl();
        sdl.set_clipboard_data(&["text/plain"], |_| panic!("provider failed")).unwrap();
        assert_eq!(request(c"text/plain"), None);
        // still registered; a later request is served the same way
        assert!(CLIPBOARD_CALLBACKS.contains(handle()));
        sdl.clear_clipboard_data().unwrap();
    }

    #[test]
    fn test_failed_set_unregisters() {
        let sdl = sdl();
        FAIL_SET.with(|f| *f.borrow_mut() = true);
        let dropped = Arc::new(AtomicUsize::new(0));
        struct Guard(Arc<AtomicUsize>);
        impl Drop for Guard {
            fn drop(&mut self) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
        let guard = Guard(dropped.clone());
        let err = sdl
            .set_clipboard_data(&["text/plain"], move |_| {
                let _ = &guard;
                None
            })
            .unwrap_err();
        assert!(matches!(err, Error::Native { call: "SDL_SetClipboardData", .. }));
        assert_eq!(dropped.load(Ordering::SeqCst), 1, "provider released on failure");
    }

    #[test]
    fn test_invalid_mime_types_rejected() {
        let sdl = sdl();
        assert!(matches!(
            sdl.set_clipboard_data(&[], |_| None),
            Err(Error::InvalidArgument(_))
        ));
        assert!(sdl.set_clipboard_data(&["text/\0plain"], |_| None).unwrap_err().is_encoding());
    }

    #[test]
    fn test_mime_types_listed_and_freed() {
        let sdl = sdl();
        let before = fakes::FREED.load(Ordering::SeqCst);
        let types = sdl.clipboard_mime_types().unwrap();
        assert_eq!(types, vec!["text/plain".to_string(), "image/png".to_string()]);
        assert!(fakes::FREED.load(Ordering::SeqCst) > before);
        assert_eq!(sdl.pool().outstanding(), 0);
    }

    #[test]
    fn test_null_mime_type_skips_provider() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        let handle = CLIPBOARD_CALLBACKS.register(Arc::new(ClipboardContext {
            provider: Box::new(move |_| {
                calls_clone.fetch_add(1, Ordering::SeqCst);
                Some(b"payload".to_vec())
            }),
            last: Mutex::new(None),
        }));

        let mut size = 7usize;
        let data = unsafe { clipboard_data_trampoline(handle, std::ptr::null(), &mut size) };
        assert!(data.is_null());
        assert_eq!(size, 0);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(CLIPBOARD_CALLBACKS.contains(handle), "only cleanup releases the provider");

        let data = unsafe { clipboard_data_trampoline(handle, c"text/plain".as_ptr(), &mut size) };
        assert!(!data.is_null());
        assert_eq!(size, 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        unsafe { clipboard_cleanup_trampoline(handle) };
        assert!(!CLIPBOARD_CALLBACKS.contains(handle));
    }

    #[test]
    fn test_unknown_handle_returns_null() {
        let mut size = 7usize;
        let unknown = usize::MAX as *mut c_void;
        let data = unsafe { clipboard_data_trampoline(unknown, c"text/plain".as_ptr(), &mut size) };
        assert!(data.is_null());
        assert_eq!(size, 0);
    }
}
