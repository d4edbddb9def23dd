// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! SDL_shadercross projections

use crate::SDL_PropertiesID;
use std::ffi::{c_char, c_int};

pub type SDL_ShaderCross_ShaderStage = c_int;
pub const SDL_SHADERCROSS_SHADERSTAGE_VERTEX: SDL_ShaderCross_ShaderStage = 0;
pub const SDL_SHADERCROSS_SHADERSTAGE_FRAGMENT: SDL_ShaderCross_ShaderStage = 1;
pub const SDL_SHADERCROSS_SHADERSTAGE_COMPUTE: SDL_ShaderCross_ShaderStage = 2;

/// A preprocessor define; arrays of these end with a `{NULL, NULL}` entry.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SDL_ShaderCross_HLSL_Define {
    pub name: *const c_char,
    /// May be NULL
    pub value: *const c_char,
}

impl SDL_ShaderCross_HLSL_Define {
    /// The terminating entry
    pub const NULL: Self = Self { name: std::ptr::null(), value: std::ptr::null() };
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SDL_ShaderCross_SPIRV_Info {
    pub bytecode: *const u8,
    pub bytecode_size: usize,
    pub entrypoint: *const c_char,
    pub shader_stage: SDL_ShaderCross_ShaderStage,
    pub enable_debug: bool,
    /// Optional, may be NULL
    pub name: *const c_char,
    pub props: SDL_PropertiesID,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SDL_ShaderCross_HLSL_Info {
    pub source: *const c_char,
    pub entrypoint: *const c_char,
    /// Optional, may be NULL
    pub include_dir: *const c_char,
    /// Optional `{NULL, NULL}`-terminated array, may be NULL
    pub defines: *const SDL_ShaderCross_HLSL_Define,
    pub shader_stage: SDL_ShaderCross_ShaderStage,
    pub enable_debug: bool,
    pub name: *const c_char,
    pub props: SDL_PropertiesID,
}

/// Opaque per-variable reflection record
#[repr(C)]
pub struct SDL_ShaderCross_IOVarMetadata {
    _private: [u8; 0],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SDL_ShaderCross_GraphicsShaderMetadata {
    pub num_samplers: u32,
    pub num_storage_textures: u32,
    pub num_storage_buffers: u32,
    pub num_uniform_buffers: u32,
    pub num_inputs: u32,
    pub inputs: *mut SDL_ShaderCross_IOVarMetadata,
    pub num_outputs: u32,
    pub outputs: *mut SDL_ShaderCross_IOVarMetadata,
}

/// Resource counts and workgroup size of a compute shader
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SDL_ShaderCross_ComputePipelineMetadata {
    pub num_samplers: u32,
    pub num_readonly_storage_textures: u32,
    pub num_readonly_storage_buffers: u32,
    pub num_readwrite_storage_textures: u32,
    pub num_readwrite_storage_buffers: u32,
    pub num_uniform_buffers: u32,
    pub threadcount_x: u32,
    pub threadcount_y: u32,
    pub threadcount_z: u32,
}
