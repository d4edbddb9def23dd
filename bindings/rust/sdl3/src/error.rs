// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Error types for the SDL3 bindings

use thiserror::Error;

/// Error type for SDL3 operations
#[derive(Debug, Error)]
pub enum Error {
    /// A Rust string could not be passed as a C string
    #[error("String contains an interior NUL byte at offset {0}")]
    InteriorNul(usize),

    /// Native text was not valid UTF-8
    #[error("Native string is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// The native call reported failure; `message` is `SDL_GetError()`
    #[error("{call} failed: {message}")]
    Native { call: &'static str, message: String },

    /// The loaded library does not export the entry point
    #[error("Symbol not available: {0}")]
    MissingSymbol(&'static str),

    /// No candidate shared library could be loaded
    #[error("Failed to load shared library: {0}")]
    Load(#[source] libloading::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Result type alias for SDL3 operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this is an encoding error raised before any native call
    pub fn is_encoding(&self) -> bool {
        matches!(self, Error::InteriorNul(_) | Error::InvalidUtf8(_))
    }
}
