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

//! A render material group: one material per render pass per vertex format,
//! bundled under a single lifecycle.

use super::MaterialState;
use ember_core::renderer::{RenderShader, RenderTexture, VertexFormat};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A process-wide unique id for a render material group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderMaterialGroupId(u64);

impl RenderMaterialGroupId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value, for logging.
    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// The render passes a material group can provide a material for.
///
/// Also used as the slot index within a [`MaterialCollection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderPass {
    /// The depth-only shadow map pass.
    ShadowMap,
    /// The opaque base pass.
    Base,
    /// The additive directional light pass.
    DirectionalLight,
    /// The blended transparency pass.
    Transparent,
    /// The skybox pass.
    Skybox,
}

impl RenderPass {
    /// The number of distinct passes, i.e. the number of material slots in a
    /// collection.
    pub const COUNT: usize = 5;

    /// The slot index of this pass within a collection.
    #[inline]
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

/// A single renderable material: a shader, its bound textures, and the
/// fixed-function state to render with.
#[derive(Debug, Clone)]
pub struct RenderMaterial {
    shader: Arc<RenderShader>,
    textures: Vec<Arc<RenderTexture>>,
    state: MaterialState,
}

impl RenderMaterial {
    /// Creates a new material.
    pub fn new(
        shader: Arc<RenderShader>,
        textures: Vec<Arc<RenderTexture>>,
        state: MaterialState,
    ) -> Self {
        Self {
            shader,
            textures,
            state,
        }
    }

    /// The shader program the material renders with.
    #[inline]
    pub fn shader(&self) -> &Arc<RenderShader> {
        &self.shader
    }

    /// The textures bound by the material.
    #[inline]
    pub fn textures(&self) -> &[Arc<RenderTexture>] {
        &self.textures
    }

    /// The fixed-function state of the material.
    #[inline]
    pub fn state(&self) -> &MaterialState {
        &self.state
    }
}

/// The per-pass material slots for a single vertex format.
///
/// Slots hold indices into the owning group's material list; a `None` slot
/// means the group provides no material for that pass with this format.
#[derive(Debug, Clone)]
pub struct MaterialCollection {
    vertex_format: VertexFormat,
    slots: [Option<usize>; RenderPass::COUNT],
}

impl MaterialCollection {
    pub(crate) fn new(vertex_format: VertexFormat, slots: [Option<usize>; RenderPass::COUNT]) -> Self {
        Self {
            vertex_format,
            slots,
        }
    }

    /// The vertex format this collection serves.
    #[inline]
    pub fn vertex_format(&self) -> &VertexFormat {
        &self.vertex_format
    }

    /// The material slot for the given pass.
    #[inline]
    pub fn slot(&self, pass: RenderPass) -> Option<usize> {
        self.slots[pass.index()]
    }
}

/// A group of materials with a single combined lifecycle.
///
/// Immutable once constructed. The group owns its materials; collections
/// index into them per vertex format and render pass.
#[derive(Debug)]
pub struct RenderMaterialGroup {
    id: RenderMaterialGroupId,
    materials: Vec<RenderMaterial>,
    collections: Vec<MaterialCollection>,
}

impl RenderMaterialGroup {
    pub(crate) fn new(materials: Vec<RenderMaterial>, collections: Vec<MaterialCollection>) -> Self {
        Self {
            id: RenderMaterialGroupId::next(),
            materials,
            collections,
        }
    }

    /// The unique id of this group.
    #[inline]
    pub fn id(&self) -> RenderMaterialGroupId {
        self.id
    }

    /// Every material owned by the group.
    #[inline]
    pub fn materials(&self) -> &[RenderMaterial] {
        &self.materials
    }

    /// The per-format collections of the group.
    #[inline]
    pub fn collections(&self) -> &[MaterialCollection] {
        &self.collections
    }

    /// Looks up the material used for `pass` when rendering geometry with
    /// the given vertex format. Returns `None` if the group serves neither
    /// the format nor the pass.
    pub fn material_for(&self, format: &VertexFormat, pass: RenderPass) -> Option<&RenderMaterial> {
        self.collections
            .iter()
            .find(|collection| collection.vertex_format() == format)
            .and_then(|collection| collection.slot(pass))
            .map(|index| &self.materials[index])
    }

    /// A cheap, shareable description of this group, carried by load
    /// commands and the manager's live list.
    pub fn desc(&self) -> RenderMaterialGroupDesc {
        RenderMaterialGroupDesc {
            id: self.id,
            materials: self.materials.clone(),
        }
    }
}

/// The immutable description of a [`RenderMaterialGroup`], detached from the
/// pooled object itself: everything a renderer needs to materialise GPU
/// state for the group's materials.
#[derive(Debug, Clone)]
pub struct RenderMaterialGroupDesc {
    /// The unique id of the described group.
    pub id: RenderMaterialGroupId,
    /// The materials to materialise.
    pub materials: Vec<RenderMaterial>,
}
