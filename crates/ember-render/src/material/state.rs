// Copyright 2026 embergfx
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The fixed-function state bundle attached to a render material.

use ember_core::renderer::{BlendMode, CompareFunc, CullFace};

/// The fixed-function pipeline state a material is rendered with.
///
/// Stock configurations for the engine's built-in shading types are provided
/// as constructors; custom materials can tweak any field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialState {
    /// Whether alpha blending is enabled.
    pub is_transparency_enabled: bool,
    /// Whether the material writes to the colour buffer.
    pub is_colour_write_enabled: bool,
    /// Whether the material writes to the depth buffer.
    pub is_depth_write_enabled: bool,
    /// Whether depth testing is performed.
    pub is_depth_test_enabled: bool,
    /// Whether back/front face culling is performed.
    pub is_face_culling_enabled: bool,
    /// The comparison used for depth testing.
    pub depth_test_func: CompareFunc,
    /// The source blend factor. Only applies when transparency is enabled.
    pub source_blend_mode: BlendMode,
    /// The destination blend factor. Only applies when transparency is enabled.
    pub destination_blend_mode: BlendMode,
    /// The face to discard when culling is enabled.
    pub cull_face: CullFace,
}

impl MaterialState {
    /// State for an opaque base pass: depth tested and written, back faces
    /// culled.
    pub const fn opaque() -> Self {
        Self {
            is_transparency_enabled: false,
            is_colour_write_enabled: true,
            is_depth_write_enabled: true,
            is_depth_test_enabled: true,
            is_face_culling_enabled: true,
            depth_test_func: CompareFunc::LessEqual,
            source_blend_mode: BlendMode::One,
            destination_blend_mode: BlendMode::OneMinusSourceAlpha,
            cull_face: CullFace::Back,
        }
    }

    /// State for a transparent pass: blended, depth tested but not written.
    pub const fn transparent() -> Self {
        Self {
            is_transparency_enabled: true,
            is_depth_write_enabled: false,
            source_blend_mode: BlendMode::SourceAlpha,
            destination_blend_mode: BlendMode::OneMinusSourceAlpha,
            ..Self::opaque()
        }
    }

    /// State for an additive light pass layered over an opaque base pass.
    pub const fn additive_light() -> Self {
        Self {
            is_transparency_enabled: true,
            is_depth_write_enabled: false,
            source_blend_mode: BlendMode::One,
            destination_blend_mode: BlendMode::One,
            ..Self::opaque()
        }
    }

    /// State for a skybox pass: drawn behind everything, no depth writes.
    pub const fn skybox() -> Self {
        Self {
            is_depth_write_enabled: false,
            ..Self::opaque()
        }
    }

    /// State for a shadow map pass: depth only, front faces culled to reduce
    /// peter-panning.
    pub const fn shadow_map() -> Self {
        Self {
            is_colour_write_enabled: false,
            cull_face: CullFace::Front,
            ..Self::opaque()
        }
    }
}

impl Default for MaterialState {
    fn default() -> Self {
        Self::opaque()
    }
}
