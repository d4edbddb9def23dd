// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Log projections (`SDL_log.h`)

use std::ffi::{c_char, c_int, c_void};

/// The predefined log priorities
pub type SDL_LogPriority = c_int;
pub const SDL_LOG_PRIORITY_INVALID: SDL_LogPriority = 0;
pub const SDL_LOG_PRIORITY_TRACE: SDL_LogPriority = 1;
pub const SDL_LOG_PRIORITY_VERBOSE: SDL_LogPriority = 2;
pub const SDL_LOG_PRIORITY_DEBUG: SDL_LogPriority = 3;
pub const SDL_LOG_PRIORITY_INFO: SDL_LogPriority = 4;
pub const SDL_LOG_PRIORITY_WARN: SDL_LogPriority = 5;
pub const SDL_LOG_PRIORITY_ERROR: SDL_LogPriority = 6;
pub const SDL_LOG_PRIORITY_CRITICAL: SDL_LogPriority = 7;
pub const SDL_LOG_PRIORITY_COUNT: SDL_LogPriority = 8;

/// The predefined log categories
pub type SDL_LogCategory = c_int;
pub const SDL_LOG_CATEGORY_APPLICATION: SDL_LogCategory = 0;
pub const SDL_LOG_CATEGORY_ERROR: SDL_LogCategory = 1;
pub const SDL_LOG_CATEGORY_ASSERT: SDL_LogCategory = 2;
pub const SDL_LOG_CATEGORY_SYSTEM: SDL_LogCategory = 3;
pub const SDL_LOG_CATEGORY_AUDIO: SDL_LogCategory = 4;
pub const SDL_LOG_CATEGORY_VIDEO: SDL_LogCategory = 5;
pub const SDL_LOG_CATEGORY_RENDER: SDL_LogCategory = 6;
pub const SDL_LOG_CATEGORY_INPUT: SDL_LogCategory = 7;
pub const SDL_LOG_CATEGORY_TEST: SDL_LogCategory = 8;
pub const SDL_LOG_CATEGORY_GPU: SDL_LogCategory = 9;
/// First category available to applications
pub const SDL_LOG_CATEGORY_CUSTOM: SDL_LogCategory = 19;

/// The prototype for the log output callback function
pub type SDL_LogOutputFunction = Option<
    unsafe extern "C" fn(
        userdata: *mut c_void,
        category: c_int,
        priority: SDL_LogPriority,
        message: *const c_char,
    ),
>;
