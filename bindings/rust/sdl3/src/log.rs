// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! SDL log output and priorities
//!
//! SDL's log output function is process-wide, so the installed handler is
//! too. It may be invoked from any thread that logs through SDL.
//!
//! # Example
//!
//! ```no_run
//! use sdl3::{LogCategory, LogPriority, Sdl};
//!
//! # fn main() -> sdl3::Result<()> {
//! let sdl = Sdl::load()?;
//! sdl.set_log_output(|category, priority, msg| {
//!     eprintln!("[{} {:?}] {}", priority, category, msg);
//! })?;
//! sdl.log_message(LogCategory::Application, LogPriority::Info, "started")?;
//! sdl.clear_log_output()?;
//! # Ok(())
//! # }
//! ```

use crate::codec;
use crate::error::Result;
use crate::sdl::Sdl;

use sdl3_sys::{SDL_LogOutputFunction, SDL_LogPriority};
use std::ffi::{c_char, c_int, c_void};
use std::sync::{Arc, Mutex};

/// Log message priority, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogPriority {
    Trace = 1,
    Verbose = 2,
    Debug = 3,
    Info = 4,
    Warn = 5,
    Error = 6,
    Critical = 7,
}

impl LogPriority {
    pub fn to_c(self) -> SDL_LogPriority {
        self as SDL_LogPriority
    }

    /// `None` for `SDL_LOG_PRIORITY_INVALID` and out-of-range values
    pub fn from_c(priority: SDL_LogPriority) -> Option<Self> {
        Some(match priority {
            sdl3_sys::SDL_LOG_PRIORITY_TRACE => LogPriority::Trace,
            sdl3_sys::SDL_LOG_PRIORITY_VERBOSE => LogPriority::Verbose,
            sdl3_sys::SDL_LOG_PRIORITY_DEBUG => LogPriority::Debug,
            sdl3_sys::SDL_LOG_PRIORITY_INFO => LogPriority::Info,
            sdl3_sys::SDL_LOG_PRIORITY_WARN => LogPriority::Warn,
            sdl3_sys::SDL_LOG_PRIORITY_ERROR => LogPriority::Error,
            sdl3_sys::SDL_LOG_PRIORITY_CRITICAL => LogPriority::Critical,
            _ => return None,
        })
    }

    /// Upper-case name, as SDL prints it
    pub fn name(self) -> &'static str {
        match self {
            LogPriority::Trace => "TRACE",
            LogPriority::Verbose => "VERBOSE",
            LogPriority::Debug => "DEBUG",
            LogPriority::Info => "INFO",
            LogPriority::Warn => "WARN",
            LogPriority::Error => "ERROR",
            LogPriority::Critical => "CRITICAL",
        }
    }

    /// Matching `log` crate level; SDL has two more levels than `log`
    pub fn level(self) -> ::log::Level {
        match self {
            LogPriority::Trace | LogPriority::Verbose => ::log::Level::Trace,
            LogPriority::Debug => ::log::Level::Debug,
            LogPriority::Info => ::log::Level::Info,
            LogPriority::Warn => ::log::Level::Warn,
            LogPriority::Error | LogPriority::Critical => ::log::Level::Error,
        }
    }
}

impl std::fmt::Display for LogPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// SDL log category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogCategory {
    Application,
    Error,
    Assert,
    System,
    Audio,
    Video,
    Render,
    Input,
    Test,
    Gpu,
    /// Application-defined, `SDL_LOG_CATEGORY_CUSTOM` and above
    Custom(i32),
}

impl LogCategory {
    pub fn to_c(self) -> c_int {
        match self {
            LogCategory::Application => sdl3_sys::SDL_LOG_CATEGORY_APPLICATION,
            LogCategory::Error => sdl3_sys::SDL_LOG_CATEGORY_ERROR,
            LogCategory::Assert => sdl3_sys::SDL_LOG_CATEGORY_ASSERT,
            LogCategory::System => sdl3_sys::SDL_LOG_CATEGORY_SYSTEM,
            LogCategory::Audio => sdl3_sys::SDL_LOG_CATEGORY_AUDIO,
            LogCategory::Video => sdl3_sys::SDL_LOG_CATEGORY_VIDEO,
            LogCategory::Render => sdl3_sys::SDL_LOG_CATEGORY_RENDER,
            LogCategory::Input => sdl3_sys::SDL_LOG_CATEGORY_INPUT,
            LogCategory::Test => sdl3_sys::SDL_LOG_CATEGORY_TEST,
            LogCategory::Gpu => sdl3_sys::SDL_LOG_CATEGORY_GPU,
            LogCategory::Custom(n) => n,
        }
    }

    /// Reserved values between `Gpu` and `Custom` come back as `Custom`
    pub fn from_c(category: c_int) -> Self {
        match category {
            sdl3_sys::SDL_LOG_CATEGORY_APPLICATION => LogCategory::Application,
            sdl3_sys::SDL_LOG_CATEGORY_ERROR => LogCategory::Error,
            sdl3_sys::SDL_LOG_CATEGORY_ASSERT => LogCategory::Assert,
            sdl3_sys::SDL_LOG_CATEGORY_SYSTEM => LogCategory::System,
            sdl3_sys::SDL_LOG_CATEGORY_AUDIO => LogCategory::Audio,
            sdl3_sys::SDL_LOG_CATEGORY_VIDEO => LogCategory::Video,
            sdl3_sys::SDL_LOG_CATEGORY_RENDER => LogCategory::Render,
            sdl3_sys::SDL_LOG_CATEGORY_INPUT => LogCategory::Input,
            sdl3_sys::SDL_LOG_CATEGORY_TEST => LogCategory::Test,
            sdl3_sys::SDL_LOG_CATEGORY_GPU => LogCategory::Gpu,
            n => LogCategory::Custom(n),
        }
    }

    /// `log` crate target used when forwarding
    pub fn target(self) -> &'static str {
        match self {
            LogCategory::Application => "sdl3::application",
            LogCategory::Error => "sdl3::error",
            LogCategory::Assert => "sdl3::assert",
            LogCategory::System => "sdl3::system",
            LogCategory::Audio => "sdl3::audio",
            LogCategory::Video => "sdl3::video",
            LogCategory::Render => "sdl3::render",
            LogCategory::Input => "sdl3::input",
            LogCategory::Test => "sdl3::test",
            LogCategory::Gpu => "sdl3::gpu",
            LogCategory::Custom(_) => "sdl3::custom",
        }
    }
}

type LogHandler = Arc<dyn Fn(LogCategory, LogPriority, &str) + Send + Sync + 'static>;

/// Process-wide handler storage
static LOG_HANDLER: Mutex<Option<LogHandler>> = Mutex::new(None);

fn current_handler() -> Option<LogHandler> {
    LOG_HANDLER.lock().unwrap_or_else(|e| e.into_inner()).clone()
}

fn replace_handler(handler: Option<LogHandler>) {
    *LOG_HANDLER.lock().unwrap_or_else(|e| e.into_inner()) = handler;
}

/// `SDL_LogOutputFunction` trampoline
unsafe extern "C" fn log_output_trampoline(
    _userdata: *mut c_void,
    category: c_int,
    priority: SDL_LogPriority,
    message: *const c_char,
) {
    if message.is_null() {
        return;
    }
    // Cloned out so a handler that logs through SDL does not deadlock.
    let Some(handler) = current_handler() else {
        return;
    };

    // catch_unwind prevents panics from unwinding across the FFI boundary
    let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let text = match unsafe { codec::decode(message) } {
            Ok(text) => std::borrow::Cow::Borrowed(text),
            Err(_) => unsafe { std::ffi::CStr::from_ptr(message) }.to_string_lossy(),
        };
        let priority = LogPriority::from_c(priority).unwrap_or(LogPriority::Info);
        handler(LogCategory::from_c(category), priority, &text);
    }));
}

impl Sdl {
    /// Route every SDL log message to `handler`
    ///
    /// Replaces any previously installed handler.
    pub fn set_log_output<F>(&self, handler: F) -> Result<()>
    where
        F: Fn(LogCategory, LogPriority, &str) + Send + Sync + 'static,
    {
        let set = native!(self.api(), SDL_SetLogOutputFunction);
        replace_handler(Some(Arc::new(handler)));
        unsafe { set(Some(log_output_trampoline), std::ptr::null_mut()) };
        Ok(())
    }

    /// Restore SDL's default output function and drop the handler
    pub fn clear_log_output(&self) -> Result<()> {
        let set = native!(self.api(), SDL_SetLogOutputFunction);
        let default = native!(self.api(), SDL_GetDefaultLogOutputFunction);
        unsafe { set(default(), std::ptr::null_mut()) };
        replace_handler(None);
        Ok(())
    }

    /// Whether SDL's current output function is a handler installed with
    /// [`Sdl::set_log_output`]
    ///
    /// Asks SDL rather than local state, so output replaced by other code
    /// reports `false`.
    pub fn log_output_is_custom(&self) -> Result<bool> {
        let get = native!(self.api(), SDL_GetLogOutputFunction);
        let mut callback: SDL_LogOutputFunction = None;
        let mut userdata: *mut c_void = std::ptr::null_mut();
        unsafe { get(&mut callback, &mut userdata) };
        Ok(callback.map(|f| f as usize) == Some(log_output_trampoline as usize))
    }

    /// Forward SDL log output to the `log` crate
    ///
    /// Each category gets its own target (see [`LogCategory::target`]).
    pub fn forward_log_to_log_crate(&self) -> Result<()> {
        self.set_log_output(|category, priority, msg| {
            ::log::log!(target: category.target(), priority.level(), "{}", msg);
        })
    }

    /// Log `message` through SDL. Blank messages are not sent.
    pub fn log_message(
        &self,
        category: LogCategory,
        priority: LogPriority,
        message: &str,
    ) -> Result<()> {
        let message = codec::encode(message, self.pool())?;
        if message.is_absent() {
            return Ok(());
        }
        let log_message = native!(self.api(), SDL_LogMessage);
        // never pass user text as the format string
        unsafe { log_message(category.to_c(), priority.to_c(), c"%s".as_ptr(), message.as_ptr()) };
        Ok(())
    }

    pub fn set_log_priority(&self, category: LogCategory, priority: LogPriority) -> Result<()> {
        let set = native!(self.api(), SDL_SetLogPriority);
        unsafe { set(category.to_c(), priority.to_c()) };
        Ok(())
    }

    /// Current priority threshold for `category`
    pub fn get_log_priority(&self, category: LogCategory) -> Result<Option<LogPriority>> {
        let get = native!(self.api(), SDL_GetLogPriority);
        Ok(LogPriority::from_c(unsafe { get(category.to_c()) }))
    }

    /// Set the threshold of every category at once
    pub fn set_log_priorities(&self, priority: LogPriority) -> Result<()> {
        let set = native!(self.api(), SDL_SetLogPriorities);
        unsafe { set(priority.to_c()) };
        Ok(())
    }

    pub fn reset_log_priorities(&self) -> Result<()> {
        let reset = native!(self.api(), SDL_ResetLogPriorities);
        unsafe { reset() };
        Ok(())
    }

    /// Text prepended to messages of `priority`; blank removes the prefix
    pub fn set_log_priority_prefix(&self, priority: LogPriority, prefix: &str) -> Result<()> {
        let set = native!(self.api(), SDL_SetLogPriorityPrefix);
        let prefix = codec::encode(prefix, self.pool())?;
        if unsafe { set(priority.to_c(), prefix.as_ptr()) } {
            Ok(())
        } else {
            Err(self.native_error("SDL_SetLogPriorityPrefix"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::native::fakes;
    use sdl3_sys::Api;
    use std::collections::HashMap;
    use std::ffi::CString;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serializes tests that mutate the process-wide log output.
    /// Rust runs tests in parallel by default; without this guard,
    /// concurrent set/clear calls corrupt each other's handler state.
    static LOG_TEST_LOCK: Mutex<()> = Mutex::new(());

    static OUTPUT: Mutex<SDL_LogOutputFunction> = Mutex::new(None);
    static PRIORITIES: Mutex<Option<HashMap<c_int, SDL_LogPriority>>> = Mutex::new(None);

    unsafe extern "C" fn default_output(
        _: *mut c_void,
        _: c_int,
        _: SDL_LogPriority,
        _: *const c_char,
    ) {
    }

    unsafe extern "C" fn fake_set_output(callback: SDL_LogOutputFunction, _userdata: *mut c_void) {
        *OUTPUT.lock().unwrap() = callback;
    }

    unsafe extern "C" fn fake_get_output(
        callback: *mut SDL_LogOutputFunction,
        userdata: *mut *mut c_void,
    ) {
        unsafe {
            *callback = *OUTPUT.lock().unwrap();
            *userdata = std::ptr::null_mut();
        }
    }

    unsafe extern "C" fn fake_default_output() -> SDL_LogOutputFunction {
        Some(default_output)
    }

    unsafe extern "C" fn fake_set_priority(category: c_int, priority: SDL_LogPriority) {
        PRIORITIES.lock().unwrap().get_or_insert_with(HashMap::new).insert(category, priority);
    }

    unsafe extern "C" fn fake_get_priority(category: c_int) -> SDL_LogPriority {
        PRIORITIES
            .lock()
            .unwrap()
            .as_ref()
            .and_then(|p| p.get(&category).copied())
            .unwrap_or(sdl3_sys::SDL_LOG_PRIORITY_ERROR)
    }

    unsafe extern "C" fn fake_set_prefix(
        _priority: SDL_LogPriority,
        _prefix: *const c_char,
    ) -> bool {
        true
    }

    fn sdl() -> Sdl {
        let api = Api {
            SDL_SetLogOutputFunction: Some(fake_set_output),
            SDL_GetDefaultLogOutputFunction: Some(fake_default_output),
            SDL_GetLogOutputFunction: Some(fake_get_output),
            SDL_SetLogPriority: Some(fake_set_priority),
            SDL_GetLogPriority: Some(fake_get_priority),
            SDL_SetLogPriorityPrefix: Some(fake_set_prefix),
            ..fakes::api()
        };
        unsafe { Sdl::from_api(api) }
    }

    /// Deliver a message the way SDL would, through the installed output
    fn emit(category: c_int, priority: SDL_LogPriority, msg: &[u8]) {
        let output = *OUTPUT.lock().unwrap();
        let msg = CString::new(msg).unwrap();
        if let Some(output) = output {
            unsafe { output(std::ptr::null_mut(), category, priority, msg.as_ptr()) };
        }
    }

    fn installed_is_trampoline() -> bool {
        let current = *OUTPUT.lock().unwrap();
        current.map(|f| f as usize) == Some(log_output_trampoline as usize)
    }

    #[test]
    fn test_priority_ordering_and_names() {
        assert!(LogPriority::Trace < LogPriority::Verbose);
        assert!(LogPriority::Error < LogPriority::Critical);
        assert_eq!(LogPriority::Warn.name(), "WARN");
        assert_eq!(format!("{}", LogPriority::Critical), "CRITICAL");
    }

    #[test]
    fn test_priority_c_values() {
        assert_eq!(LogPriority::Trace.to_c(), sdl3_sys::SDL_LOG_PRIORITY_TRACE);
        assert_eq!(LogPriority::Critical.to_c(), sdl3_sys::SDL_LOG_PRIORITY_CRITICAL);
        assert_eq!(LogPriority::from_c(4), Some(LogPriority::Info));
        assert_eq!(LogPriority::from_c(sdl3_sys::SDL_LOG_PRIORITY_INVALID), None);
        assert_eq!(LogPriority::from_c(sdl3_sys::SDL_LOG_PRIORITY_COUNT), None);
    }

    #[test]
    fn test_priority_to_log_level() {
        assert_eq!(LogPriority::Verbose.level(), ::log::Level::Trace);
        assert_eq!(LogPriority::Warn.level(), ::log::Level::Warn);
        assert_eq!(LogPriority::Critical.level(), ::log::Level::Error);
    }

    #[test]
    fn test_category_round_trip() {
        assert_eq!(LogCategory::from_c(LogCategory::Gpu.to_c()), LogCategory::Gpu);
        assert_eq!(LogCategory::from_c(25), LogCategory::Custom(25));
        assert_eq!(LogCategory::Custom(sdl3_sys::SDL_LOG_CATEGORY_CUSTOM).to_c(), 19);
        assert_eq!(LogCategory::Audio.target(), "sdl3::audio");
    }

    #[test]
    fn test_handler_receives_category_priority_message() {
        let _lock = LOG_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let sdl = sdl();
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();

        sdl.set_log_output(move |category, priority, msg| {
            received_clone.lock().unwrap().push((category, priority, msg.to_string()));
        })
        .unwrap();
        assert!(installed_is_trampoline());

        emit(sdl3_sys::SDL_LOG_CATEGORY_VIDEO, sdl3_sys::SDL_LOG_PRIORITY_WARN, b"vsync off");
        emit(42, sdl3_sys::SDL_LOG_PRIORITY_INVALID, b"custom");

        let received = received.lock().unwrap();
        assert_eq!(received[0], (LogCategory::Video, LogPriority::Warn, "vsync off".to_string()));
        assert_eq!(received[1], (LogCategory::Custom(42), LogPriority::Info, "custom".to_string()));

        sdl.clear_log_output().unwrap();
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let _lock = LOG_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let sdl = sdl();
        let received = Arc::new(Mutex::new(String::new()));
        let received_clone = received.clone();
        sdl.set_log_output(move |_, _, msg| *received_clone.lock().unwrap() = msg.to_string())
            .unwrap();

        emit(0, sdl3_sys::SDL_LOG_PRIORITY_INFO, b"bad \xff byte");
        assert_eq!(*received.lock().unwrap(), "bad \u{fffd} byte");

        sdl.clear_log_output().unwrap();
    }

    #[test]
    fn test_clear_restores_default_output() {
        let _lock = LOG_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let sdl = sdl();
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        sdl.set_log_output(move |_, _, _| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        sdl.clear_log_output().unwrap();
        assert!(!installed_is_trampoline());
        assert_eq!(
            OUTPUT.lock().unwrap().map(|f| f as usize),
            Some(default_output as usize)
        );

        // a late message through a stale trampoline pointer goes nowhere
        unsafe { log_output_trampoline(std::ptr::null_mut(), 0, 4, c"late".as_ptr()) };
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_output_is_custom_follows_native_state() {
        let _lock = LOG_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let sdl = sdl();
        sdl.set_log_output(|_, _, _| {}).unwrap();
        assert!(sdl.log_output_is_custom().unwrap());

        // Replaced behind our back
        unsafe { fake_set_output(Some(default_output), std::ptr::null_mut()) };
        assert!(!sdl.log_output_is_custom().unwrap());

        sdl.set_log_output(|_, _, _| {}).unwrap();
        sdl.clear_log_output().unwrap();
        assert!(!sdl.log_output_is_custom().unwrap());

        let bare = unsafe { Sdl::from_api(fakes::api()) };
        assert!(matches!(
            bare.log_output_is_custom(),
            Err(Error::MissingSymbol("SDL_GetLogOutputFunction"))
        ));
    }

    #[test]
    fn test_replace_handler() {
        let _lock = LOG_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let sdl = sdl();
        let first_count = Arc::new(AtomicUsize::new(0));
        let second_count = Arc::new(AtomicUsize::new(0));

        let first_clone = first_count.clone();
        sdl.set_log_output(move |_, _, _| {
            first_clone.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
        emit(0, 4, b"first");

        let second_clone = second_count.clone();
        sdl.set_log_output(move |_, _, _| {
            second_clone.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
        emit(0, 4, b"second");

        assert_eq!(first_count.load(Ordering::SeqCst), 1);
        assert_eq!(second_count.load(Ordering::SeqCst), 1);

        sdl.clear_log_output().unwrap();
    }

    #[test]
    fn test_panicking_handler_is_contained() {
        let _lock = LOG_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let sdl = sdl();
        sdl.set_log_output(|_, _, _| panic!("handler failed")).unwrap();
        emit(0, 4, b"boom");
        sdl.clear_log_output().unwrap();
    }

    #[test]
    fn test_forward_installs_trampoline() {
        let _lock = LOG_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let sdl = sdl();
        sdl.forward_log_to_log_crate().unwrap();
        assert!(installed_is_trampoline());
        emit(sdl3_sys::SDL_LOG_CATEGORY_GPU, sdl3_sys::SDL_LOG_PRIORITY_CRITICAL, b"device lost");
        sdl.clear_log_output().unwrap();
    }

    #[test]
    fn test_priorities_round_trip() {
        let sdl = sdl();
        sdl.set_log_priority(LogCategory::Custom(77), LogPriority::Verbose).unwrap();
        assert_eq!(
            sdl.get_log_priority(LogCategory::Custom(77)).unwrap(),
            Some(LogPriority::Verbose)
        );
        sdl.set_log_priority_prefix(LogPriority::Warn, "W: ").unwrap();
    }

    #[test]
    fn test_log_message_blank_and_missing_symbol() {
        let sdl = sdl();
        // blank text is dropped before the native call
        sdl.log_message(LogCategory::Application, LogPriority::Info, "  ").unwrap();
        assert!(matches!(
            sdl.log_message(LogCategory::Application, LogPriority::Info, "hello"),
            Err(Error::MissingSymbol("SDL_LogMessage"))
        ));
        assert!(sdl
            .log_message(LogCategory::Application, LogPriority::Info, "a\0b")
            .unwrap_err()
            .is_encoding());
        assert!(matches!(sdl.reset_log_priorities(), Err(Error::MissingSymbol(_))));
    }
}
