// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! Runtime symbol tables
//!
//! Each table holds one nullable function pointer per native entry point.
//! A table is either resolved from a loaded shared library or filled in by
//! hand (statically linked builds, test doubles). Missing symbols stay
//! `None`; callers decide whether that is an error.

use crate::*;
use std::ffi::{c_char, c_int, c_void, OsStr};
use std::fmt;

macro_rules! symbol_table {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* $symbol:ident : $ty:ty, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default)]
        pub struct $name {
            $( $(#[$fmeta])* pub $symbol: Option<$ty>, )*
        }

        impl $name {
            /// A table with no resolved symbols
            pub const fn empty() -> Self {
                Self { $( $symbol: None, )* }
            }

            /// Resolve every symbol of the table from `library`.
            ///
            /// # Safety
            ///
            /// `library` must export each symbol with exactly the declared
            /// signature, and must outlive every use of the returned table.
            pub unsafe fn resolve(library: &libloading::Library) -> Self {
                Self {
                    $(
                        $symbol: unsafe {
                            library
                                .get::<$ty>(concat!(stringify!($symbol), "\0").as_bytes())
                                .ok()
                                .map(|symbol| *symbol)
                        },
                    )*
                }
            }

            /// Names of the symbols this table could not resolve
            pub fn missing(&self) -> Vec<&'static str> {
                let mut missing = Vec::new();
                $( if self.$symbol.is_none() { missing.push(stringify!($symbol)); } )*
                missing
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    $( .field(stringify!($symbol), &self.$symbol.is_some()) )*
                    .finish()
            }
        }
    };
}

symbol_table! {
    /// Entry points of the core SDL3 library
    pub struct Api {
        // Version / errors / memory
        SDL_GetVersion: unsafe extern "C" fn() -> c_int,
        SDL_GetError: unsafe extern "C" fn() -> *const c_char,
        SDL_ClearError: unsafe extern "C" fn() -> bool,
        SDL_free: unsafe extern "C" fn(mem: *mut c_void),

        // Dialogs
        SDL_ShowOpenFileDialog: unsafe extern "C" fn(
            callback: SDL_DialogFileCallback,
            userdata: *mut c_void,
            window: *mut SDL_Window,
            filters: *const SDL_DialogFileFilter,
            nfilters: c_int,
            default_location: *const c_char,
            allow_many: bool,
        ),
        SDL_ShowSaveFileDialog: unsafe extern "C" fn(
            callback: SDL_DialogFileCallback,
            userdata: *mut c_void,
            window: *mut SDL_Window,
            filters: *const SDL_DialogFileFilter,
            nfilters: c_int,
            default_location: *const c_char,
        ),
        SDL_ShowOpenFolderDialog: unsafe extern "C" fn(
            callback: SDL_DialogFileCallback,
            userdata: *mut c_void,
            window: *mut SDL_Window,
            default_location: *const c_char,
            allow_many: bool,
        ),
        SDL_ShowFileDialogWithProperties: unsafe extern "C" fn(
            kind: SDL_FileDialogType,
            callback: SDL_DialogFileCallback,
            userdata: *mut c_void,
            props: SDL_PropertiesID,
        ),

        // Message boxes
        SDL_ShowMessageBox: unsafe extern "C" fn(
            messageboxdata: *const SDL_MessageBoxData,
            buttonid: *mut c_int,
        ) -> bool,
        SDL_ShowSimpleMessageBox: unsafe extern "C" fn(
            flags: SDL_MessageBoxFlags,
            title: *const c_char,
            message: *const c_char,
            window: *mut SDL_Window,
        ) -> bool,

        // Clipboard
        SDL_SetClipboardData: unsafe extern "C" fn(
            callback: SDL_ClipboardDataCallback,
            cleanup: SDL_ClipboardCleanupCallback,
            userdata: *mut c_void,
            mime_types: *const *const c_char,
            num_mime_types: usize,
        ) -> bool,
        SDL_ClearClipboardData: unsafe extern "C" fn() -> bool,
        SDL_HasClipboardData: unsafe extern "C" fn(mime_type: *const c_char) -> bool,
        SDL_GetClipboardMimeTypes: unsafe extern "C" fn(
            num_mime_types: *mut usize,
        ) -> *mut *mut c_char,

        // GUID
        SDL_GUIDToString: unsafe extern "C" fn(guid: SDL_GUID, pszGUID: *mut c_char, cbGUID: c_int),
        SDL_StringToGUID: unsafe extern "C" fn(pchGUID: *const c_char) -> SDL_GUID,

        // Shared objects
        SDL_LoadObject: unsafe extern "C" fn(sofile: *const c_char) -> *mut SDL_SharedObject,
        SDL_LoadFunction: unsafe extern "C" fn(
            handle: *mut SDL_SharedObject,
            name: *const c_char,
        ) -> SDL_FunctionPointer,
        SDL_UnloadObject: unsafe extern "C" fn(handle: *mut SDL_SharedObject),

        // Logging
        SDL_SetLogPriorities: unsafe extern "C" fn(priority: SDL_LogPriority),
        SDL_SetLogPriority: unsafe extern "C" fn(category: c_int, priority: SDL_LogPriority),
        SDL_GetLogPriority: unsafe extern "C" fn(category: c_int) -> SDL_LogPriority,
        SDL_ResetLogPriorities: unsafe extern "C" fn(),
        SDL_SetLogPriorityPrefix: unsafe extern "C" fn(
            priority: SDL_LogPriority,
            prefix: *const c_char,
        ) -> bool,
        SDL_LogMessage: unsafe extern "C" fn(
            category: c_int,
            priority: SDL_LogPriority,
            fmt: *const c_char,
            ...
        ),
        SDL_GetDefaultLogOutputFunction: unsafe extern "C" fn() -> SDL_LogOutputFunction,
        SDL_SetLogOutputFunction: unsafe extern "C" fn(
            callback: SDL_LogOutputFunction,
            userdata: *mut c_void,
        ),
        SDL_GetLogOutputFunction: unsafe extern "C" fn(
            callback: *mut SDL_LogOutputFunction,
            userdata: *mut *mut c_void,
        ),
    }
}

symbol_table! {
    /// Entry points of the SDL_shadercross library
    pub struct ShaderCrossApi {
        SDL_ShaderCross_Init: unsafe extern "C" fn() -> bool,
        SDL_ShaderCross_Quit: unsafe extern "C" fn(),
        SDL_ShaderCross_GetSPIRVShaderFormats: unsafe extern "C" fn() -> SDL_GPUShaderFormat,
        SDL_ShaderCross_TranspileMSLFromSPIRV: unsafe extern "C" fn(
            info: *const SDL_ShaderCross_SPIRV_Info,
        ) -> *mut c_void,
        SDL_ShaderCross_TranspileHLSLFromSPIRV: unsafe extern "C" fn(
            info: *const SDL_ShaderCross_SPIRV_Info,
        ) -> *mut c_void,
        SDL_ShaderCross_CompileDXBCFromSPIRV: unsafe extern "C" fn(
            info: *const SDL_ShaderCross_SPIRV_Info,
            size: *mut usize,
        ) -> *mut c_void,
        SDL_ShaderCross_CompileDXILFromSPIRV: unsafe extern "C" fn(
            info: *const SDL_ShaderCross_SPIRV_Info,
            size: *mut usize,
        ) -> *mut c_void,
        SDL_ShaderCross_ReflectGraphicsSPIRV: unsafe extern "C" fn(
            bytecode: *const u8,
            bytecode_size: usize,
            props: SDL_PropertiesID,
        ) -> *mut SDL_ShaderCross_GraphicsShaderMetadata,
        SDL_ShaderCross_ReflectComputeSPIRV: unsafe extern "C" fn(
            bytecode: *const u8,
            bytecode_size: usize,
            metadata: *mut SDL_ShaderCross_ComputePipelineMetadata,
        ) -> bool,
        SDL_ShaderCross_GetHLSLShaderFormats: unsafe extern "C" fn() -> SDL_GPUShaderFormat,
        SDL_ShaderCross_CompileSPIRVFromHLSL: unsafe extern "C" fn(
            info: *const SDL_ShaderCross_HLSL_Info,
            size: *mut usize,
        ) -> *mut c_void,
        SDL_ShaderCross_CompileDXBCFromHLSL: unsafe extern "C" fn(
            info: *const SDL_ShaderCross_HLSL_Info,
            size: *mut usize,
        ) -> *mut c_void,
        SDL_ShaderCross_CompileDXILFromHLSL: unsafe extern "C" fn(
            info: *const SDL_ShaderCross_HLSL_Info,
            size: *mut usize,
        ) -> *mut c_void,
    }
}

/// File names tried, in order, when no explicit path is configured
#[cfg(target_os = "windows")]
pub const DEFAULT_LIBRARY_NAMES: &[&str] = &["SDL3.dll"];
/// File names tried, in order, when no explicit path is configured
#[cfg(target_os = "macos")]
pub const DEFAULT_LIBRARY_NAMES: &[&str] =
    &["libSDL3.0.dylib", "libSDL3.dylib", "SDL3.framework/SDL3"];
/// File names tried, in order, when no explicit path is configured
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub const DEFAULT_LIBRARY_NAMES: &[&str] = &["libSDL3.so.0", "libSDL3.so"];

/// File names tried for SDL_shadercross
#[cfg(target_os = "windows")]
pub const DEFAULT_SHADERCROSS_NAMES: &[&str] = &["SDL3_shadercross.dll"];
/// File names tried for SDL_shadercross
#[cfg(target_os = "macos")]
pub const DEFAULT_SHADERCROSS_NAMES: &[&str] =
    &["libSDL3_shadercross.0.dylib", "libSDL3_shadercross.dylib"];
/// File names tried for SDL_shadercross
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub const DEFAULT_SHADERCROSS_NAMES: &[&str] =
    &["libSDL3_shadercross.so.0", "libSDL3_shadercross.so"];

/// Library directory reported by pkg-config when this crate was built
pub fn pkg_config_libdir() -> Option<&'static str> {
    option_env!("SDL3_PKG_LIBDIR")
}

/// A loaded SDL3 shared library together with its resolved symbol table
pub struct SdlLibrary {
    api: Api,
    // Must outlive `api`; fields drop in declaration order.
    _handle: libloading::Library,
}

impl SdlLibrary {
    /// Load the library at `path` and resolve its symbols.
    ///
    /// # Safety
    ///
    /// Loading a shared library runs its initialisers. `path` must name a
    /// genuine SDL3 build whose exports match the declared signatures.
    pub unsafe fn open(path: impl AsRef<OsStr>) -> Result<Self, libloading::Error> {
        let handle = unsafe { libloading::Library::new(path.as_ref())? };
        let api = unsafe { Api::resolve(&handle) };
        Ok(Self { api, _handle: handle })
    }

    /// The resolved symbol table
    pub fn api(&self) -> &Api {
        &self.api
    }
}

impl fmt::Debug for SdlLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdlLibrary").field("api", &self.api).finish_non_exhaustive()
    }
}

/// A loaded SDL_shadercross shared library
pub struct ShaderCrossLibrary {
    api: ShaderCrossApi,
    _handle: libloading::Library,
}

impl ShaderCrossLibrary {
    /// Load the library at `path` and resolve its symbols.
    ///
    /// # Safety
    ///
    /// Same contract as [`SdlLibrary::open`].
    pub unsafe fn open(path: impl AsRef<OsStr>) -> Result<Self, libloading::Error> {
        let handle = unsafe { libloading::Library::new(path.as_ref())? };
        let api = unsafe { ShaderCrossApi::resolve(&handle) };
        Ok(Self { api, _handle: handle })
    }

    /// The resolved symbol table
    pub fn api(&self) -> &ShaderCrossApi {
        &self.api
    }
}
