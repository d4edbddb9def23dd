// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Safe marshalling layer over the SDL3 C ABI
//!
//! SDL owns the interesting logic (windowing, dialogs, the clipboard); this
//! crate owns the boundary. Every call site follows the same protocol:
//! encode Rust strings into NUL-terminated buffers rented from a
//! [`BufferPool`], pin the projections the native side will hold on to,
//! issue the call, and release everything on every exit path. Callbacks
//! fired by SDL land in `extern "C"` trampolines that decode native-owned
//! data into transient buffers, run the user closure under
//! `catch_unwind`, and then free all of it exactly once.
//!
//! # Quick Start
//!
//! ```no_run
//! use sdl3::{DialogFileFilter, DialogResult, Sdl};
//!
//! fn main() -> sdl3::Result<()> {
//!     let sdl = Sdl::load()?;
//!     let filters = [DialogFileFilter::new("Images", "png;jpg")];
//!
//!     sdl.show_open_file_dialog(None, &filters, None, true, |result| match result {
//!         DialogResult::Error(msg) => eprintln!("dialog failed: {}", msg),
//!         DialogResult::Cancelled => println!("cancelled"),
//!         DialogResult::Selected { files, .. } => {
//!             for path in files.iter() {
//!                 println!("{}", path);
//!             }
//!         }
//!     })?;
//!     Ok(())
//! }
//! ```
//!
//! # API Overview
//!
//! - [`Sdl`] - Loaded library handle; every native call goes through it
//! - [`Options`] - Library search path and pool configuration
//! - [`BufferPool`] / [`Pooled`] - Transient buffers
//! - [`NativeString`] - Encoded, NUL-terminated string
//! - [`PinStack`] / [`Pinned`] - Address bookkeeping for native projections
//! - [`DialogResult`] - Error / Cancelled / Selected dialog outcome
//! - [`Event`] - Tagged projection of `SDL_Event`
//!
//! # Soundness Limitations
//!
//! - [`Sdl::from_api`] trusts every function pointer in the table to match
//!   the declared signature. A mismatched table is undefined behavior.
//! - [`WindowRef`] wraps a raw window pointer; the window must outlive every
//!   call that receives it, including asynchronous dialogs.

/// Fetch a symbol from a table or return `Error::MissingSymbol`.
macro_rules! native {
    ($api:expr, $symbol:ident) => {
        ($api).$symbol.ok_or($crate::Error::MissingSymbol(stringify!($symbol)))?
    };
}

mod callback;
mod clipboard;
mod codec;
mod dialog;
mod error;
mod events;
mod guid;
mod loadso;
mod log;
mod messagebox;
mod native;
mod options;
mod pin;
mod pool;
mod sdl;
mod shadercross;

#[cfg(feature = "async")]
pub mod async_dialog;

pub use callback::{CallbackTable, DialogResult};
pub use codec::{
    decode, decode_bytes, decode_list, encode, encode_required, wide_codec, NativeString,
    StringList, Utf16Codec, Utf32Codec, WideCodec, INLINE_THRESHOLD,
};
pub use dialog::{DialogFileFilter, FileDialogKind};
pub use error::{Error, Result};
pub use events::{AudioDeviceChange, CameraDeviceChange, DropKind, Event, TouchpadPhase};
pub use guid::{Guid, GUID_STRING_SIZE};
pub use loadso::{FunctionPointer, SharedObject};
pub use self::log::{LogCategory, LogPriority};
pub use messagebox::{
    MessageBoxButton, MessageBoxColorScheme, MessageBoxData, MessageBoxFlags, MessageBoxStorage,
};
pub use options::Options;
pub use pin::{PinId, PinStack, Pinned};
pub use pool::{BufferPool, Pooled};
pub use sdl::{Sdl, WindowRef};
pub use shadercross::{
    ComputePipelineMetadata, GraphicsShaderMetadata, HlslInfo, HlslStorage, ShaderCross,
    ShaderStage, SpirvInfo, SpirvStorage,
};

#[cfg(feature = "async")]
pub use async_dialog::{AsyncDialogs, DialogFuture, DialogOutcome};

// Raw layouts callers need for properties and event pumps
pub use sdl3_sys::{SDL_Event, SDL_PropertiesID, SDL_Window};
