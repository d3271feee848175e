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

//! The lifecycle manager for render material groups, specialised for the
//! forward rendering path.

use super::{
    MaterialCollection, MaterialState, RenderMaterial, RenderMaterialGroup,
    RenderMaterialGroupDesc, RenderPass,
};
use crate::snapshot::{RenderSnapshot, RenderSnapshotSystem, TargetType};
use ember_core::renderer::{RenderShader, RenderTexture, VertexFormat};
use ember_data::{FrameAllocator, ObjectPool, PoolBox, PoolLimitPolicy};
use std::sync::{Arc, Mutex, PoisonError};

/// The default number of pooled material group slots.
const DEFAULT_GROUP_POOL_CAPACITY: usize = 100;

/// The creation and destruction surface shared by material group managers.
///
/// Every `create_*` method allocates the group from the manager's pool,
/// registers it and queues a load command for the next snapshot; the
/// returned handle owns the group until it is passed back to
/// [`destroy_render_material_group`](Self::destroy_render_material_group).
pub trait RenderMaterialGroupManager: RenderSnapshotSystem {
    /// Creates an unlit material group covering the sprite, static mesh and
    /// animated mesh vertex formats.
    fn create_unlit_render_material_group(
        &self,
        texture: Arc<RenderTexture>,
        state: MaterialState,
    ) -> PoolBox<RenderMaterialGroup>;

    /// Creates a lit material group (base plus additive directional light
    /// pass) covering the static and animated mesh vertex formats.
    fn create_lit_render_material_group(
        &self,
        texture: Arc<RenderTexture>,
    ) -> PoolBox<RenderMaterialGroup>;

    /// Creates a skybox material group for static mesh geometry.
    fn create_skybox_render_material_group(
        &self,
        cubemap: Arc<RenderTexture>,
    ) -> PoolBox<RenderMaterialGroup>;

    /// Creates a material group from explicit per-pass shaders for a single
    /// vertex format.
    fn create_custom_render_material_group(
        &self,
        vertex_format: VertexFormat,
        shaders: &[(Arc<RenderShader>, RenderPass)],
        textures: Vec<Arc<RenderTexture>>,
        state: MaterialState,
    ) -> PoolBox<RenderMaterialGroup>;

    /// Removes the group from the live set and queues its unload command for
    /// the next snapshot. The command takes ownership of the group, so its
    /// pool slot is released only after the render thread has processed it.
    fn destroy_render_material_group(&self, group: PoolBox<RenderMaterialGroup>);
}

/// The stock shader programs the forward renderer draws with, supplied by
/// the composition root.
///
/// Shadow map shaders are optional; when absent, shadow map materials are
/// simply not generated (shadow mapping unsupported on the device).
#[derive(Debug, Clone)]
pub struct ForwardShaders {
    /// Unlit shader for sprite geometry.
    pub sprite_unlit: Arc<RenderShader>,
    /// Unlit shader for static mesh geometry.
    pub static_unlit: Arc<RenderShader>,
    /// Unlit shader for animated mesh geometry.
    pub animated_unlit: Arc<RenderShader>,
    /// Lit base pass shader for static mesh geometry.
    pub static_lit_base: Arc<RenderShader>,
    /// Directional light pass shader for static mesh geometry.
    pub static_lit_directional: Arc<RenderShader>,
    /// Lit base pass shader for animated mesh geometry.
    pub animated_lit_base: Arc<RenderShader>,
    /// Directional light pass shader for animated mesh geometry.
    pub animated_lit_directional: Arc<RenderShader>,
    /// Skybox shader.
    pub skybox: Arc<RenderShader>,
    /// Shadow map shader for static mesh geometry, if supported.
    pub static_shadow_map: Option<Arc<RenderShader>>,
    /// Shadow map shader for animated mesh geometry, if supported.
    pub animated_shadow_map: Option<Arc<RenderShader>>,
}

struct PendingState {
    live: Vec<RenderMaterialGroupDesc>,
    pending_loads: Vec<RenderMaterialGroupDesc>,
    pending_unloads: Vec<PoolBox<RenderMaterialGroup>>,
}

/// Builds material collections one pass at a time, accumulating the group's
/// material list.
struct CollectionBuilder {
    materials: Vec<RenderMaterial>,
    collections: Vec<MaterialCollection>,
}

impl CollectionBuilder {
    fn new() -> Self {
        Self {
            materials: Vec::new(),
            collections: Vec::new(),
        }
    }

    fn collection(
        &mut self,
        format: VertexFormat,
        passes: &[(RenderPass, RenderMaterial)],
    ) {
        let mut slots = [None; RenderPass::COUNT];
        for (pass, material) in passes {
            slots[pass.index()] = Some(self.materials.len());
            self.materials.push(material.clone());
        }
        self.collections.push(MaterialCollection::new(format, slots));
    }

    fn build(self) -> RenderMaterialGroup {
        RenderMaterialGroup::new(self.materials, self.collections)
    }
}

/// The material group manager for the forward rendering path.
///
/// Same lifecycle discipline as
/// [`RenderTargetGroupManager`](crate::target::RenderTargetGroupManager):
/// any-thread creation and destruction under one mutex, with GPU-side work
/// deferred to the commands drained into the main snapshot each frame.
pub struct ForwardRenderMaterialGroupManager {
    shaders: ForwardShaders,
    pool: ObjectPool<RenderMaterialGroup>,
    state: Mutex<PendingState>,
}

impl ForwardRenderMaterialGroupManager {
    /// Creates a manager drawing with the given stock shaders.
    pub fn new(shaders: ForwardShaders) -> Self {
        Self::with_pool_capacity(shaders, DEFAULT_GROUP_POOL_CAPACITY, PoolLimitPolicy::Expand)
    }

    /// Creates a manager with an explicit pool capacity and limit policy.
    pub fn with_pool_capacity(
        shaders: ForwardShaders,
        capacity: usize,
        limit_policy: PoolLimitPolicy,
    ) -> Self {
        Self {
            shaders,
            pool: ObjectPool::new(capacity, limit_policy),
            state: Mutex::new(PendingState {
                live: Vec::new(),
                pending_loads: Vec::new(),
                pending_unloads: Vec::new(),
            }),
        }
    }

    /// Descriptions of every group currently alive. A detached copy, not a
    /// live view; order is unspecified.
    pub fn render_material_groups(&self) -> Vec<RenderMaterialGroupDesc> {
        self.lock_state().live.clone()
    }

    fn register(&self, group: RenderMaterialGroup) -> PoolBox<RenderMaterialGroup> {
        let group = self.pool.allocate(group);
        let desc = group.desc();
        log::debug!(
            "render material group {} created ({} materials)",
            desc.id.value(),
            desc.materials.len()
        );

        let mut state = self.lock_state();
        state.live.push(desc.clone());
        state.pending_loads.push(desc);
        group
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, PendingState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The pass an unlit material lands in: transparent groups render in the
    /// transparency pass, opaque groups in the base pass.
    fn unlit_pass(state: &MaterialState) -> RenderPass {
        if state.is_transparency_enabled {
            RenderPass::Transparent
        } else {
            RenderPass::Base
        }
    }

    fn shadow_map_material(shader: &Arc<RenderShader>) -> RenderMaterial {
        RenderMaterial::new(shader.clone(), Vec::new(), MaterialState::shadow_map())
    }
}

impl RenderMaterialGroupManager for ForwardRenderMaterialGroupManager {
    fn create_unlit_render_material_group(
        &self,
        texture: Arc<RenderTexture>,
        state: MaterialState,
    ) -> PoolBox<RenderMaterialGroup> {
        let pass = Self::unlit_pass(&state);
        let mut builder = CollectionBuilder::new();

        builder.collection(
            VertexFormat::SPRITE,
            &[(
                pass,
                RenderMaterial::new(self.shaders.sprite_unlit.clone(), vec![texture.clone()], state),
            )],
        );

        // Mesh formats also cast shadows when supported, but transparent
        // geometry never writes the shadow map.
        let mut static_passes = vec![(
            pass,
            RenderMaterial::new(self.shaders.static_unlit.clone(), vec![texture.clone()], state),
        )];
        if let (Some(shadow), false) = (&self.shaders.static_shadow_map, state.is_transparency_enabled) {
            static_passes.push((RenderPass::ShadowMap, Self::shadow_map_material(shadow)));
        }
        builder.collection(VertexFormat::STATIC_MESH, &static_passes);

        let mut animated_passes = vec![(
            pass,
            RenderMaterial::new(
                self.shaders.animated_unlit.clone(),
                vec![texture.clone()],
                state,
            ),
        )];
        if let (Some(shadow), false) =
            (&self.shaders.animated_shadow_map, state.is_transparency_enabled)
        {
            animated_passes.push((RenderPass::ShadowMap, Self::shadow_map_material(shadow)));
        }
        builder.collection(VertexFormat::ANIMATED_MESH, &animated_passes);

        self.register(builder.build())
    }

    fn create_lit_render_material_group(
        &self,
        texture: Arc<RenderTexture>,
    ) -> PoolBox<RenderMaterialGroup> {
        let mut builder = CollectionBuilder::new();

        let mut static_passes = vec![
            (
                RenderPass::Base,
                RenderMaterial::new(
                    self.shaders.static_lit_base.clone(),
                    vec![texture.clone()],
                    MaterialState::opaque(),
                ),
            ),
            (
                RenderPass::DirectionalLight,
                RenderMaterial::new(
                    self.shaders.static_lit_directional.clone(),
                    vec![texture.clone()],
                    MaterialState::additive_light(),
                ),
            ),
        ];
        if let Some(shadow) = &self.shaders.static_shadow_map {
            static_passes.push((RenderPass::ShadowMap, Self::shadow_map_material(shadow)));
        }
        builder.collection(VertexFormat::STATIC_MESH, &static_passes);

        let mut animated_passes = vec![
            (
                RenderPass::Base,
                RenderMaterial::new(
                    self.shaders.animated_lit_base.clone(),
                    vec![texture.clone()],
                    MaterialState::opaque(),
                ),
            ),
            (
                RenderPass::DirectionalLight,
                RenderMaterial::new(
                    self.shaders.animated_lit_directional.clone(),
                    vec![texture.clone()],
                    MaterialState::additive_light(),
                ),
            ),
        ];
        if let Some(shadow) = &self.shaders.animated_shadow_map {
            animated_passes.push((RenderPass::ShadowMap, Self::shadow_map_material(shadow)));
        }
        builder.collection(VertexFormat::ANIMATED_MESH, &animated_passes);

        self.register(builder.build())
    }

    fn create_skybox_render_material_group(
        &self,
        cubemap: Arc<RenderTexture>,
    ) -> PoolBox<RenderMaterialGroup> {
        let mut builder = CollectionBuilder::new();
        builder.collection(
            VertexFormat::STATIC_MESH,
            &[(
                RenderPass::Skybox,
                RenderMaterial::new(
                    self.shaders.skybox.clone(),
                    vec![cubemap],
                    MaterialState::skybox(),
                ),
            )],
        );
        self.register(builder.build())
    }

    fn create_custom_render_material_group(
        &self,
        vertex_format: VertexFormat,
        shaders: &[(Arc<RenderShader>, RenderPass)],
        textures: Vec<Arc<RenderTexture>>,
        state: MaterialState,
    ) -> PoolBox<RenderMaterialGroup> {
        let passes: Vec<_> = shaders
            .iter()
            .map(|(shader, pass)| {
                (
                    *pass,
                    RenderMaterial::new(shader.clone(), textures.clone(), state),
                )
            })
            .collect();

        let mut builder = CollectionBuilder::new();
        builder.collection(vertex_format, &passes);
        self.register(builder.build())
    }

    fn destroy_render_material_group(&self, group: PoolBox<RenderMaterialGroup>) {
        let mut state = self.lock_state();
        let index = state
            .live
            .iter()
            .position(|desc| desc.id == group.id())
            .expect("destroyed a render material group this manager does not own");
        state.live.swap_remove(index);
        log::debug!(
            "render material group {} queued for unload",
            group.id().value()
        );
        state.pending_unloads.push(group);
    }
}

impl RenderSnapshotSystem for ForwardRenderMaterialGroupManager {
    /// Drains pending material group loads and unloads into the snapshot;
    /// main-target snapshots only, under the manager's mutex. See
    /// [`RenderTargetGroupManager`](crate::target::RenderTargetGroupManager)
    /// for the full discipline.
    fn on_render_snapshot(
        &self,
        target_type: TargetType,
        snapshot: &mut RenderSnapshot,
        _frame_allocator: &FrameAllocator,
    ) {
        if target_type != TargetType::Main {
            return;
        }

        let mut state = self.lock_state();
        if !state.pending_loads.is_empty() || !state.pending_unloads.is_empty() {
            log::trace!(
                "draining {} material group loads, {} unloads",
                state.pending_loads.len(),
                state.pending_unloads.len()
            );
        }

        let pre = snapshot.pre_render_command_list();
        for desc in state.pending_loads.drain(..) {
            pre.add_load_material_group_command(desc);
        }

        let post = snapshot.post_render_command_list();
        for group in state.pending_unloads.drain(..) {
            post.add_unload_material_group_command(group);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::RenderCommand;
    use ember_core::math::{Color, Extent2d};
    use ember_core::renderer::{ShaderId, TextureFormat, TextureId};

    fn shader(id: u64, label: &str) -> Arc<RenderShader> {
        Arc::new(RenderShader::new(ShaderId(id), label))
    }

    fn texture(id: u64) -> Arc<RenderTexture> {
        Arc::new(RenderTexture::new(
            TextureId(id),
            Extent2d::new(128, 128),
            TextureFormat::Rgba8,
        ))
    }

    fn stock_shaders(with_shadows: bool) -> ForwardShaders {
        ForwardShaders {
            sprite_unlit: shader(1, "Sprite-Unlit"),
            static_unlit: shader(2, "Static-Unlit"),
            animated_unlit: shader(3, "Animated-Unlit"),
            static_lit_base: shader(4, "Static-Lit-Base"),
            static_lit_directional: shader(5, "Static-Lit-Directional"),
            animated_lit_base: shader(6, "Animated-Lit-Base"),
            animated_lit_directional: shader(7, "Animated-Lit-Directional"),
            skybox: shader(8, "Skybox"),
            static_shadow_map: with_shadows.then(|| shader(9, "Static-ShadowMap")),
            animated_shadow_map: with_shadows.then(|| shader(10, "Animated-ShadowMap")),
        }
    }

    fn main_snapshot() -> RenderSnapshot {
        RenderSnapshot::new(TargetType::Main, Extent2d::new(128, 128), Color::BLACK)
    }

    #[test]
    fn unlit_group_covers_all_three_formats() {
        let manager = ForwardRenderMaterialGroupManager::new(stock_shaders(true));
        let group =
            manager.create_unlit_render_material_group(texture(1), MaterialState::opaque());

        for format in [
            VertexFormat::SPRITE,
            VertexFormat::STATIC_MESH,
            VertexFormat::ANIMATED_MESH,
        ] {
            assert!(
                group.material_for(&format, RenderPass::Base).is_some(),
                "missing base material for {format:?}"
            );
        }

        // Opaque mesh geometry casts shadows; sprites do not.
        assert!(group
            .material_for(&VertexFormat::STATIC_MESH, RenderPass::ShadowMap)
            .is_some());
        assert!(group
            .material_for(&VertexFormat::SPRITE, RenderPass::ShadowMap)
            .is_none());

        manager.destroy_render_material_group(group);
    }

    #[test]
    fn transparent_unlit_group_renders_in_the_transparent_pass() {
        let manager = ForwardRenderMaterialGroupManager::new(stock_shaders(true));
        let group =
            manager.create_unlit_render_material_group(texture(1), MaterialState::transparent());

        assert!(group
            .material_for(&VertexFormat::STATIC_MESH, RenderPass::Transparent)
            .is_some());
        assert!(group
            .material_for(&VertexFormat::STATIC_MESH, RenderPass::Base)
            .is_none());
        // Transparent geometry never writes the shadow map.
        assert!(group
            .material_for(&VertexFormat::STATIC_MESH, RenderPass::ShadowMap)
            .is_none());

        manager.destroy_render_material_group(group);
    }

    #[test]
    fn lit_group_without_shadow_support_skips_shadow_materials() {
        let manager = ForwardRenderMaterialGroupManager::new(stock_shaders(false));
        let group = manager.create_lit_render_material_group(texture(1));

        assert!(group
            .material_for(&VertexFormat::STATIC_MESH, RenderPass::Base)
            .is_some());
        assert!(group
            .material_for(&VertexFormat::STATIC_MESH, RenderPass::DirectionalLight)
            .is_some());
        assert!(group
            .material_for(&VertexFormat::STATIC_MESH, RenderPass::ShadowMap)
            .is_none());

        manager.destroy_render_material_group(group);
    }

    #[test]
    fn skybox_group_serves_only_the_skybox_pass() {
        let manager = ForwardRenderMaterialGroupManager::new(stock_shaders(true));
        let group = manager.create_skybox_render_material_group(texture(1));

        let skybox = group
            .material_for(&VertexFormat::STATIC_MESH, RenderPass::Skybox)
            .expect("skybox material present");
        assert_eq!(skybox.shader().label(), "Skybox");
        assert!(group
            .material_for(&VertexFormat::STATIC_MESH, RenderPass::Base)
            .is_none());

        manager.destroy_render_material_group(group);
    }

    #[test]
    fn custom_group_uses_the_given_shaders_per_pass() {
        let manager = ForwardRenderMaterialGroupManager::new(stock_shaders(true));
        let group = manager.create_custom_render_material_group(
            VertexFormat::SPRITE,
            &[
                (shader(20, "Custom-Base"), RenderPass::Base),
                (shader(21, "Custom-Transparent"), RenderPass::Transparent),
            ],
            vec![texture(1), texture(2)],
            MaterialState::opaque(),
        );

        let base = group
            .material_for(&VertexFormat::SPRITE, RenderPass::Base)
            .expect("base material present");
        assert_eq!(base.shader().label(), "Custom-Base");
        assert_eq!(base.textures().len(), 2);

        manager.destroy_render_material_group(group);
    }

    #[test]
    fn lifecycle_commands_flow_through_the_snapshot() {
        let manager = ForwardRenderMaterialGroupManager::new(stock_shaders(true));
        let allocator = FrameAllocator::new(1024);

        let group =
            manager.create_unlit_render_material_group(texture(1), MaterialState::opaque());
        let id = group.id();
        assert_eq!(manager.render_material_groups().len(), 1);

        let mut first = main_snapshot();
        manager.on_render_snapshot(TargetType::Main, &mut first, &allocator);
        let (pre, post) = first.claim_render_command_lists();
        assert_eq!(pre.len(), 1);
        assert!(post.is_empty());
        match pre.iter().next().unwrap() {
            RenderCommand::LoadMaterialGroup { desc } => assert_eq!(desc.id, id),
            other => panic!("expected a load command, got {other:?}"),
        }

        manager.destroy_render_material_group(group);
        assert!(manager.render_material_groups().is_empty());

        let mut second = main_snapshot();
        manager.on_render_snapshot(TargetType::Main, &mut second, &allocator);
        let (pre, post) = second.claim_render_command_lists();
        assert!(pre.is_empty());
        assert_eq!(post.len(), 1);
        match post.into_iter().next().unwrap() {
            RenderCommand::UnloadMaterialGroup { group } => assert_eq!(group.id(), id),
            other => panic!("expected an unload command, got {other:?}"),
        }
    }

    #[test]
    fn offscreen_snapshots_do_not_drain() {
        let manager = ForwardRenderMaterialGroupManager::new(stock_shaders(true));
        let allocator = FrameAllocator::new(1024);
        let group =
            manager.create_unlit_render_material_group(texture(1), MaterialState::opaque());

        let mut offscreen =
            RenderSnapshot::new(TargetType::Offscreen, Extent2d::new(64, 64), Color::BLACK);
        manager.on_render_snapshot(TargetType::Offscreen, &mut offscreen, &allocator);
        assert!(offscreen.pre_render_command_list().is_empty());

        manager.destroy_render_material_group(group);
    }
}
