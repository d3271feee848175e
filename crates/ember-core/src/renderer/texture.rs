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

//! Defines the opaque handle types describing GPU textures.

use crate::math::Extent2d;

/// An opaque handle to a GPU texture resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// The texel format of a texture.
///
/// Only the formats the resource-group managers care about are listed; a
/// backend maps these onto its native format enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// 8-bit RGBA, unsigned normalized.
    Rgba8,
    /// 8-bit BGRA, unsigned normalized. The common swapchain format.
    Bgra8,
    /// 24-bit depth with an 8-bit stencil component.
    Depth24Stencil8,
    /// 32-bit floating point depth.
    Depth32Float,
}

impl TextureFormat {
    /// Whether this format stores depth information and can back a depth
    /// attachment.
    #[inline]
    pub const fn is_depth(&self) -> bool {
        matches!(self, Self::Depth24Stencil8 | Self::Depth32Float)
    }
}

/// An immutable description of an externally owned GPU texture.
///
/// Instances are created by whichever system owns the underlying GPU object
/// (a texture manager, a swapchain) and shared into the resource-group
/// pipeline via `Arc`. This crate never creates or destroys the GPU object
/// behind the handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTexture {
    id: TextureId,
    dimensions: Extent2d,
    format: TextureFormat,
}

impl RenderTexture {
    /// Creates a new texture description.
    pub fn new(id: TextureId, dimensions: Extent2d, format: TextureFormat) -> Self {
        Self {
            id,
            dimensions,
            format,
        }
    }

    /// The opaque id of the GPU texture.
    #[inline]
    pub fn id(&self) -> TextureId {
        self.id
    }

    /// The size of the texture in pixels.
    #[inline]
    pub fn dimensions(&self) -> Extent2d {
        self.dimensions
    }

    /// The texel format of the texture.
    #[inline]
    pub fn format(&self) -> TextureFormat {
        self.format
    }
}
