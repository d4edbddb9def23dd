// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 SDL3-RS Contributors


//! GPU projections (`SDL_gpu.h`) used by the shader tooling

use crate::SDL_PropertiesID;
use std::ffi::{c_char, c_int};

/// Opaque texture handle
#[repr(C)]
pub struct SDL_GPUTexture {
    _private: [u8; 0],
}

pub type SDL_GPUShaderFormat = u32;
pub const SDL_GPU_SHADERFORMAT_INVALID: SDL_GPUShaderFormat = 0;
pub const SDL_GPU_SHADERFORMAT_PRIVATE: SDL_GPUShaderFormat = 1 << 0;
pub const SDL_GPU_SHADERFORMAT_SPIRV: SDL_GPUShaderFormat = 1 << 1;
pub const SDL_GPU_SHADERFORMAT_DXBC: SDL_GPUShaderFormat = 1 << 2;
pub const SDL_GPU_SHADERFORMAT_DXIL: SDL_GPUShaderFormat = 1 << 3;
pub const SDL_GPU_SHADERFORMAT_MSL: SDL_GPUShaderFormat = 1 << 4;
pub const SDL_GPU_SHADERFORMAT_METALLIB: SDL_GPUShaderFormat = 1 << 5;

pub type SDL_GPULoadOp = c_int;
pub const SDL_GPU_LOADOP_LOAD: SDL_GPULoadOp = 0;
pub const SDL_GPU_LOADOP_CLEAR: SDL_GPULoadOp = 1;
pub const SDL_GPU_LOADOP_DONT_CARE: SDL_GPULoadOp = 2;

pub type SDL_GPUCompareOp = c_int;
pub type SDL_GPUStencilOp = c_int;
pub type SDL_GPUSampleCount = c_int;
pub type SDL_GPUTransferBufferUsage = c_int;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SDL_GPUViewport {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SDL_GPUTextureLocation {
    pub texture: *mut SDL_GPUTexture,
    pub mip_level: u32,
    pub layer: u32,
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SDL_GPUStencilOpState {
    pub fail_op: SDL_GPUStencilOp,
    pub pass_op: SDL_GPUStencilOp,
    pub depth_fail_op: SDL_GPUStencilOp,
    pub compare_op: SDL_GPUCompareOp,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SDL_GPUDepthStencilState {
    pub compare_op: SDL_GPUCompareOp,
    pub back_stencil_state: SDL_GPUStencilOpState,
    pub front_stencil_state: SDL_GPUStencilOpState,
    pub compare_mask: u8,
    pub write_mask: u8,
    pub enable_depth_test: bool,
    pub enable_depth_write: bool,
    pub enable_stencil_test: bool,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SDL_GPUMultisampleState {
    pub sample_count: SDL_GPUSampleCount,
    pub sample_mask: u32,
    pub enable_mask: bool,
    pub enable_alpha_to_coverage: bool,
    pub padding2: u8,
    pub padding3: u8,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SDL_GPUTransferBufferCreateInfo {
    pub usage: SDL_GPUTransferBufferUsage,
    pub size: u32,
    pub props: SDL_PropertiesID,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SDL_GPUComputePipelineCreateInfo {
    pub code_size: usize,
    pub code: *const u8,
    pub entrypoint: *const c_char,
    pub format: SDL_GPUShaderFormat,
    pub num_samplers: u32,
    pub num_readonly_storage_textures: u32,
    pub num_readonly_storage_buffers: u32,
    pub num_readwrite_storage_textures: u32,
    pub num_readwrite_storage_buffers: u32,
    pub num_uniform_buffers: u32,
    pub threadcount_x: u32,
    pub threadcount_y: u32,
    pub threadcount_z: u32,
    pub props: SDL_PropertiesID,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, offset_of, size_of};

    #[test]
    fn test_plain_value_layouts() {
        assert_eq!(size_of::<SDL_GPUViewport>(), 24);
        assert_eq!(size_of::<SDL_GPUStencilOpState>(), 16);
        assert_eq!(size_of::<SDL_GPUMultisampleState>(), 12);
        assert_eq!(size_of::<SDL_GPUTransferBufferCreateInfo>(), 12);
    }

    #[test]
    fn test_depth_stencil_layout() {
        assert_eq!(size_of::<SDL_GPUDepthStencilState>(), 44);
        assert_eq!(align_of::<SDL_GPUDepthStencilState>(), 4);
        assert_eq!(offset_of!(SDL_GPUDepthStencilState, compare_mask), 36);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_pointer_bearing_layouts() {
        assert_eq!(size_of::<SDL_GPUTextureLocation>(), 32);
        assert_eq!(size_of::<SDL_GPUComputePipelineCreateInfo>(), 72);
        assert_eq!(offset_of!(SDL_GPUComputePipelineCreateInfo, props), 64);
    }
}
