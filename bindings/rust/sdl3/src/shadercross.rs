// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! SDL_shadercross: SPIR-V and HLSL cross-compilation
//!
//! Descriptions are pinned for one synchronous call. Results come back in
//! memory SDL allocated; they are copied out and freed with `SDL_free`.

use crate::codec::{self, NativeString};
use crate::error::{Error, Result};
use crate::native::NativeAlloc;
use crate::pin::{PinStack, Pinned};
use crate::pool::BufferPool;
use crate::sdl::Sdl;

use sdl3_sys::{
    SDL_GPUShaderFormat, SDL_PropertiesID, SDL_ShaderCross_ComputePipelineMetadata,
    SDL_ShaderCross_GraphicsShaderMetadata, SDL_ShaderCross_HLSL_Define, SDL_ShaderCross_HLSL_Info,
    SDL_ShaderCross_SPIRV_Info, ShaderCrossApi, ShaderCrossLibrary,
};
use std::ffi::{c_int, c_void};
use std::fmt;
use std::sync::Arc;

/// Pipeline stage a shader is compiled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Compute,
}

impl ShaderStage {
    fn to_c(self) -> c_int {
        match self {
            ShaderStage::Vertex => sdl3_sys::SDL_SHADERCROSS_SHADERSTAGE_VERTEX,
            ShaderStage::Fragment => sdl3_sys::SDL_SHADERCROSS_SHADERSTAGE_FRAGMENT,
            ShaderStage::Compute => sdl3_sys::SDL_SHADERCROSS_SHADERSTAGE_COMPUTE,
        }
    }
}

/// A SPIR-V module to transpile
///
/// The bytecode is borrowed and handed to native code in place.
#[derive(Debug, Clone)]
pub struct SpirvInfo<'a> {
    bytecode: &'a [u8],
    entrypoint: String,
    stage: ShaderStage,
    enable_debug: bool,
    name: Option<String>,
    props: SDL_PropertiesID,
}

pub struct SpirvStorage {
    entrypoint: NativeString,
    name: NativeString,
}

impl<'a> SpirvInfo<'a> {
    pub fn new(bytecode: &'a [u8], entrypoint: impl Into<String>, stage: ShaderStage) -> Self {
        Self {
            bytecode,
            entrypoint: entrypoint.into(),
            stage,
            enable_debug: false,
            name: None,
            props: 0,
        }
    }

    pub fn enable_debug(mut self, enable: bool) -> Self {
        self.enable_debug = enable;
        self
    }

    /// Name shown in debuggers
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn props(mut self, props: SDL_PropertiesID) -> Self {
        self.props = props;
        self
    }

    /// Encode and pin into an `SDL_ShaderCross_SPIRV_Info`
    pub fn pin(
        &self,
        pool: &Arc<BufferPool<u8>>,
    ) -> Result<Pinned<'_, SDL_ShaderCross_SPIRV_Info, SpirvStorage>> {
        if self.bytecode.is_empty() {
            return Err(Error::InvalidArgument("empty SPIR-V bytecode"));
        }
        let storage = Box::new(SpirvStorage {
            entrypoint: codec::encode_required(&self.entrypoint, pool)?,
            name: codec::encode(self.name.as_deref().unwrap_or(""), pool)?,
        });

        let mut pins = PinStack::new();
        let (_, bytecode) = pins.pin(self.bytecode);
        pins.pin(&storage.entrypoint);
        pins.pin(&storage.name);

        let raw = SDL_ShaderCross_SPIRV_Info {
            bytecode: bytecode.cast(),
            bytecode_size: self.bytecode.len(),
            entrypoint: storage.entrypoint.as_ptr(),
            shader_stage: self.stage.to_c(),
            enable_debug: self.enable_debug,
            name: storage.name.as_ptr(),
            props: self.props,
        };
        Ok(Pinned::new(pins, raw, storage))
    }
}

/// HLSL source to compile
#[derive(Debug, Clone)]
pub struct HlslInfo<'a> {
    source: &'a str,
    entrypoint: String,
    include_dir: Option<String>,
    defines: Vec<(String, Option<String>)>,
    stage: ShaderStage,
    enable_debug: bool,
    name: Option<String>,
    props: SDL_PropertiesID,
}

pub struct HlslStorage {
    source: NativeString,
    entrypoint: NativeString,
    include_dir: NativeString,
    name: NativeString,
    define_strings: Vec<(NativeString, NativeString)>,
    defines: Vec<SDL_ShaderCross_HLSL_Define>,
}

impl HlslStorage {
    /// Define entries handed to native code, terminator included
    pub fn define_count(&self) -> usize {
        self.defines.len()
    }
}

impl<'a> HlslInfo<'a> {
    pub fn new(source: &'a str, entrypoint: impl Into<String>, stage: ShaderStage) -> Self {
        Self {
            source,
            entrypoint: entrypoint.into(),
            include_dir: None,
            defines: Vec::new(),
            stage,
            enable_debug: false,
            name: None,
            props: 0,
        }
    }

    /// Directory searched by `#include`
    pub fn include_dir(mut self, dir: impl Into<String>) -> Self {
        self.include_dir = Some(dir.into());
        self
    }

    /// Add a preprocessor define; `None` defines the name without a value
    pub fn define(mut self, name: impl Into<String>, value: Option<&str>) -> Self {
        self.defines.push((name.into(), value.map(str::to_owned)));
        self
    }

    pub fn enable_debug(mut self, enable: bool) -> Self {
        self.enable_debug = enable;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn props(mut self, props: SDL_PropertiesID) -> Self {
        self.props = props;
        self
    }

    /// Encode and pin into an `SDL_ShaderCross_HLSL_Info`
    ///
    /// Defines become a `{NULL, NULL}`-terminated array, pinned after the
    /// strings it points at.
    pub fn pin(
        &self,
        pool: &Arc<BufferPool<u8>>,
    ) -> Result<Pinned<'_, SDL_ShaderCross_HLSL_Info, HlslStorage>> {
        let define_strings = self
            .defines
            .iter()
            .map(|(name, value)| {
                Ok((
                    codec::encode_required(name, pool)?,
                    codec::encode(value.as_deref().unwrap_or(""), pool)?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        let mut storage = Box::new(HlslStorage {
            source: codec::encode_required(self.source, pool)?,
            entrypoint: codec::encode_required(&self.entrypoint, pool)?,
            include_dir: codec::encode(self.include_dir.as_deref().unwrap_or(""), pool)?,
            name: codec::encode(self.name.as_deref().unwrap_or(""), pool)?,
            define_strings,
            defines: Vec::new(),
        });

        let mut pins = PinStack::new();
        let s = &mut *storage;
        pins.pin(&s.source);
        pins.pin(&s.entrypoint);
        pins.pin(&s.include_dir);
        pins.pin(&s.name);
        for (name, value) in &s.define_strings {
            pins.pin(name);
            pins.pin(value);
        }
        let defines: *const SDL_ShaderCross_HLSL_Define = if s.define_strings.is_empty() {
            std::ptr::null()
        } else {
            let entries = s.define_strings.iter().map(|(name, value)| SDL_ShaderCross_HLSL_Define {
                name: name.as_ptr(),
                value: value.as_ptr(),
            });
            s.defines.extend(entries);
            s.defines.push(SDL_ShaderCross_HLSL_Define::NULL);
            pins.pin(s.defines.as_slice()).1.cast()
        };

        let raw = SDL_ShaderCross_HLSL_Info {
            source: s.source.as_ptr(),
            entrypoint: s.entrypoint.as_ptr(),
            include_dir: s.include_dir.as_ptr(),
            defines,
            shader_stage: self.stage.to_c(),
            enable_debug: self.enable_debug,
            name: s.name.as_ptr(),
            props: self.props,
        };
        Ok(Pinned::new(pins, raw, storage))
    }
}

/// Resources a graphics shader declares
///
/// Per-variable input and output records stay native; only their counts
/// are copied out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphicsShaderMetadata {
    pub num_samplers: u32,
    pub num_storage_textures: u32,
    pub num_storage_buffers: u32,
    pub num_uniform_buffers: u32,
    pub num_inputs: u32,
    pub num_outputs: u32,
}

impl From<&SDL_ShaderCross_GraphicsShaderMetadata> for GraphicsShaderMetadata {
    fn from(raw: &SDL_ShaderCross_GraphicsShaderMetadata) -> Self {
        Self {
            num_samplers: raw.num_samplers,
            num_storage_textures: raw.num_storage_textures,
            num_storage_buffers: raw.num_storage_buffers,
            num_uniform_buffers: raw.num_uniform_buffers,
            num_inputs: raw.num_inputs,
            num_outputs: raw.num_outputs,
        }
    }
}

/// Resources and workgroup size a compute shader declares
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComputePipelineMetadata {
    pub num_samplers: u32,
    pub num_readonly_storage_textures: u32,
    pub num_readonly_storage_buffers: u32,
    pub num_readwrite_storage_textures: u32,
    pub num_readwrite_storage_buffers: u32,
    pub num_uniform_buffers: u32,
    pub threadcount: [u32; 3],
}

impl From<&SDL_ShaderCross_ComputePipelineMetadata> for ComputePipelineMetadata {
    fn from(raw: &SDL_ShaderCross_ComputePipelineMetadata) -> Self {
        Self {
            num_samplers: raw.num_samplers,
            num_readonly_storage_textures: raw.num_readonly_storage_textures,
            num_readonly_storage_buffers: raw.num_readonly_storage_buffers,
            num_readwrite_storage_textures: raw.num_readwrite_storage_textures,
            num_readwrite_storage_buffers: raw.num_readwrite_storage_buffers,
            num_uniform_buffers: raw.num_uniform_buffers,
            threadcount: [raw.threadcount_x, raw.threadcount_y, raw.threadcount_z],
        }
    }
}

/// A loaded and initialized SDL_shadercross library
///
/// `SDL_ShaderCross_Quit` runs on drop.
pub struct ShaderCross {
    api: ShaderCrossApi,
    sdl: Sdl,
    _library: Option<ShaderCrossLibrary>,
}

impl ShaderCross {
    /// Load SDL_shadercross from [`crate::Options::shadercross_candidates`]
    /// and initialize it
    pub fn load(sdl: &Sdl) -> Result<Self> {
        let mut last_err = None;
        for path in sdl.options().shadercross_candidates() {
            match unsafe { ShaderCrossLibrary::open(&path) } {
                Ok(library) => {
                    log::debug!("loaded SDL_shadercross from {}", path.display());
                    let api = *library.api();
                    return Self::init(sdl, api, Some(library));
                }
                Err(e) => {
                    log::trace!("SDL_shadercross not loadable from {}: {}", path.display(), e);
                    last_err = Some(e);
                }
            }
        }
        match last_err {
            Some(e) => Err(Error::Load(e)),
            None => Err(Error::InvalidArgument("no SDL_shadercross candidates configured")),
        }
    }

    /// Initialize from an already populated symbol table
    ///
    /// # Safety
    ///
    /// Same contract as [`Sdl::from_api`].
    pub unsafe fn from_api(sdl: &Sdl, api: ShaderCrossApi) -> Result<Self> {
        Self::init(sdl, api, None)
    }

    fn init(sdl: &Sdl, api: ShaderCrossApi, library: Option<ShaderCrossLibrary>) -> Result<Self> {
        let init = native!(api, SDL_ShaderCross_Init);
        if !unsafe { init() } {
            return Err(sdl.native_error("SDL_ShaderCross_Init"));
        }
        Ok(Self {
            api,
            sdl: sdl.clone(),
            _library: library,
        })
    }

    /// Formats SPIR-V can be translated to on this platform
    pub fn spirv_shader_formats(&self) -> Result<SDL_GPUShaderFormat> {
        let formats = native!(self.api, SDL_ShaderCross_GetSPIRVShaderFormats);
        Ok(unsafe { formats() })
    }

    pub fn transpile_msl_from_spirv(&self, info: &SpirvInfo<'_>) -> Result<String> {
        let transpile = native!(self.api, SDL_ShaderCross_TranspileMSLFromSPIRV);
        let pinned = info.pin(self.sdl.pool())?;
        let result = unsafe { transpile(pinned.as_ptr()) };
        self.take_string(result, "SDL_ShaderCross_TranspileMSLFromSPIRV")
    }

    pub fn transpile_hlsl_from_spirv(&self, info: &SpirvInfo<'_>) -> Result<String> {
        let transpile = native!(self.api, SDL_ShaderCross_TranspileHLSLFromSPIRV);
        let pinned = info.pin(self.sdl.pool())?;
        let result = unsafe { transpile(pinned.as_ptr()) };
        self.take_string(result, "SDL_ShaderCross_TranspileHLSLFromSPIRV")
    }

    pub fn compile_spirv_from_hlsl(&self, info: &HlslInfo<'_>) -> Result<Vec<u8>> {
        let compile = native!(self.api, SDL_ShaderCross_CompileSPIRVFromHLSL);
        self.compile_hlsl(info, compile, "SDL_ShaderCross_CompileSPIRVFromHLSL")
    }

    pub fn compile_dxil_from_hlsl(&self, info: &HlslInfo<'_>) -> Result<Vec<u8>> {
        let compile = native!(self.api, SDL_ShaderCross_CompileDXILFromHLSL);
        self.compile_hlsl(info, compile, "SDL_ShaderCross_CompileDXILFromHLSL")
    }

    pub fn compile_dxbc_from_hlsl(&self, info: &HlslInfo<'_>) -> Result<Vec<u8>> {
        let compile = native!(self.api, SDL_ShaderCross_CompileDXBCFromHLSL);
        self.compile_hlsl(info, compile, "SDL_ShaderCross_CompileDXBCFromHLSL")
    }

    pub fn compile_dxbc_from_spirv(&self, info: &SpirvInfo<'_>) -> Result<Vec<u8>> {
        let compile = native!(self.api, SDL_ShaderCross_CompileDXBCFromSPIRV);
        self.compile_spirv(info, compile, "SDL_ShaderCross_CompileDXBCFromSPIRV")
    }

    pub fn compile_dxil_from_spirv(&self, info: &SpirvInfo<'_>) -> Result<Vec<u8>> {
        let compile = native!(self.api, SDL_ShaderCross_CompileDXILFromSPIRV);
        self.compile_spirv(info, compile, "SDL_ShaderCross_CompileDXILFromSPIRV")
    }

    /// Formats HLSL can be compiled to on this platform
    pub fn hlsl_shader_formats(&self) -> Result<SDL_GPUShaderFormat> {
        let formats = native!(self.api, SDL_ShaderCross_GetHLSLShaderFormats);
        Ok(unsafe { formats() })
    }

    /// Resource counts a graphics pipeline needs for this SPIR-V module
    pub fn reflect_graphics_spirv(
        &self,
        bytecode: &[u8],
        props: SDL_PropertiesID,
    ) -> Result<GraphicsShaderMetadata> {
        let reflect = native!(self.api, SDL_ShaderCross_ReflectGraphicsSPIRV);
        let free = native!(self.sdl.api(), SDL_free);
        if bytecode.is_empty() {
            return Err(Error::InvalidArgument("empty SPIR-V bytecode"));
        }
        let mut pins = PinStack::new();
        let (_, ptr) = pins.pin(bytecode);
        let result = NativeAlloc::new(
            unsafe { reflect(ptr.cast(), bytecode.len(), props) }.cast::<c_void>(),
            free,
        );
        pins.unpin_all();

        if result.is_null() {
            return Err(self.sdl.native_error("SDL_ShaderCross_ReflectGraphicsSPIRV"));
        }
        let raw = unsafe { &*result.as_ptr().cast::<SDL_ShaderCross_GraphicsShaderMetadata>() };
        Ok(GraphicsShaderMetadata::from(raw))
    }

    /// Resource counts and workgroup size of a compute SPIR-V module
    pub fn reflect_compute_spirv(&self, bytecode: &[u8]) -> Result<ComputePipelineMetadata> {
        let reflect = native!(self.api, SDL_ShaderCross_ReflectComputeSPIRV);
        if bytecode.is_empty() {
            return Err(Error::InvalidArgument("empty SPIR-V bytecode"));
        }
        let mut raw = SDL_ShaderCross_ComputePipelineMetadata::default();
        let mut pins = PinStack::new();
        let (_, ptr) = pins.pin(bytecode);
        let ok = unsafe { reflect(ptr.cast(), bytecode.len(), &mut raw) };
        pins.unpin_all();

        if !ok {
            return Err(self.sdl.native_error("SDL_ShaderCross_ReflectComputeSPIRV"));
        }
        Ok(ComputePipelineMetadata::from(&raw))
    }

    fn compile_hlsl(
        &self,
        info: &HlslInfo<'_>,
        compile: unsafe extern "C" fn(*const SDL_ShaderCross_HLSL_Info, *mut usize) -> *mut c_void,
        call: &'static str,
    ) -> Result<Vec<u8>> {
        let free = native!(self.sdl.api(), SDL_free);
        let pinned = info.pin(self.sdl.pool())?;
        let mut size = 0usize;
        let result = NativeAlloc::new(unsafe { compile(pinned.as_ptr(), &mut size) }, free);
        drop(pinned);
        self.take_bytes(result, size, call)
    }

    fn compile_spirv(
        &self,
        info: &SpirvInfo<'_>,
        compile: unsafe extern "C" fn(*const SDL_ShaderCross_SPIRV_Info, *mut usize) -> *mut c_void,
        call: &'static str,
    ) -> Result<Vec<u8>> {
        let free = native!(self.sdl.api(), SDL_free);
        let pinned = info.pin(self.sdl.pool())?;
        let mut size = 0usize;
        let result = NativeAlloc::new(unsafe { compile(pinned.as_ptr(), &mut size) }, free);
        drop(pinned);
        self.take_bytes(result, size, call)
    }

    fn take_bytes(&self, result: NativeAlloc, size: usize, call: &'static str) -> Result<Vec<u8>> {
        if result.is_null() {
            return Err(self.sdl.native_error(call));
        }
        let bytes = unsafe { std::slice::from_raw_parts(result.as_ptr().cast::<u8>(), size) };
        Ok(bytes.to_vec())
    }

    fn take_string(&self, result: *mut c_void, call: &'static str) -> Result<String> {
        let free = native!(self.sdl.api(), SDL_free);
        let result = NativeAlloc::new(result, free);
        if result.is_null() {
            return Err(self.sdl.native_error(call));
        }
        Ok(unsafe { codec::decode(result.as_ptr().cast()) }?.to_owned())
    }
}

impl Drop for ShaderCross {
    fn drop(&mut self) {
        if let Some(quit) = self.api.SDL_ShaderCross_Quit {
            unsafe { quit() };
        }
    }
}

impl fmt::Debug for ShaderCross {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShaderCross")
            .field("api", &self.api)
            .finish_non_exhaustive()
    }
}
