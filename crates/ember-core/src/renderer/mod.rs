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

//! Shared renderer-facing types: opaque GPU resource handles, render state
//! enums and vertex format descriptions.

pub mod shader;
pub mod state;
pub mod texture;
pub mod vertex;

pub use shader::{RenderShader, ShaderId};
pub use state::{BlendMode, CompareFunc, CullFace};
pub use texture::{RenderTexture, TextureFormat, TextureId};
pub use vertex::{VertexElement, VertexElementType, VertexElementUsage, VertexFormat};
