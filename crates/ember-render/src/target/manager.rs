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

//! The lifecycle manager for render target groups.

use super::{RenderTargetGroup, RenderTargetGroupDesc, RenderTargetGroupType};
use crate::snapshot::{RenderSnapshot, RenderSnapshotSystem, TargetType};
use ember_core::renderer::RenderTexture;
use ember_data::{FrameAllocator, ObjectPool, PoolBox, PoolLimitPolicy};
use std::sync::{Arc, Mutex, PoisonError};

/// The default number of pooled target group slots.
const DEFAULT_POOL_CAPACITY: usize = 16;

struct PendingState {
    /// Descriptions of every group currently alive, in no particular order.
    live: Vec<RenderTargetGroupDesc>,
    /// Loads queued since the last snapshot drain.
    pending_loads: Vec<RenderTargetGroupDesc>,
    /// Unloads queued since the last snapshot drain. Owning: the group stays
    /// alive here, then inside the unload command, until the render thread
    /// has processed it.
    pending_unloads: Vec<PoolBox<RenderTargetGroup>>,
}

/// The sole authority for creating, tracking and destroying render target
/// groups.
///
/// Creation and destruction may be called from any thread; both only touch
/// pool and pending-buffer bookkeeping under the manager's mutex. No GPU
/// work happens here: the renderer materialises and tears down GPU state
/// when it processes the load/unload commands this manager queues through
/// [`RenderSnapshotSystem::on_render_snapshot`].
pub struct RenderTargetGroupManager {
    pool: ObjectPool<RenderTargetGroup>,
    state: Mutex<PendingState>,
}

impl RenderTargetGroupManager {
    /// Creates a manager with the default pool capacity.
    pub fn new() -> Self {
        Self::with_pool_capacity(DEFAULT_POOL_CAPACITY, PoolLimitPolicy::Expand)
    }

    /// Creates a manager with an explicit pool capacity and limit policy.
    pub fn with_pool_capacity(capacity: usize, limit_policy: PoolLimitPolicy) -> Self {
        Self {
            pool: ObjectPool::new(capacity, limit_policy),
            state: Mutex::new(PendingState {
                live: Vec::new(),
                pending_loads: Vec::new(),
                pending_unloads: Vec::new(),
            }),
        }
    }

    /// Creates a target group with a colour and a depth attachment and
    /// queues its load command for the next snapshot.
    ///
    /// # Panics
    ///
    /// Panics if the attachments' dimensions differ, if `colour` has a depth
    /// format, or if `depth` does not.
    pub fn create_render_target_group(
        &self,
        colour: Arc<RenderTexture>,
        depth: Arc<RenderTexture>,
    ) -> PoolBox<RenderTargetGroup> {
        assert!(
            colour.dimensions() == depth.dimensions(),
            "colour and depth targets must have matching dimensions"
        );
        assert!(
            !colour.format().is_depth(),
            "colour target cannot have a depth format"
        );
        assert!(
            depth.format().is_depth(),
            "depth target must have a depth format"
        );

        let resolution = colour.dimensions();
        self.register(RenderTargetGroup::new(
            Some(colour),
            Some(depth),
            RenderTargetGroupType::ColourDepth,
            resolution,
        ))
    }

    /// Creates a colour-only target group and queues its load command for
    /// the next snapshot. When `should_use_depth_buffer` is set the renderer
    /// backs the pass with an internal depth buffer.
    ///
    /// # Panics
    ///
    /// Panics if `colour` has a depth format.
    pub fn create_colour_render_target_group(
        &self,
        colour: Arc<RenderTexture>,
        should_use_depth_buffer: bool,
    ) -> PoolBox<RenderTargetGroup> {
        assert!(
            !colour.format().is_depth(),
            "colour target cannot have a depth format"
        );

        let group_type = if should_use_depth_buffer {
            RenderTargetGroupType::Colour
        } else {
            RenderTargetGroupType::ColourNoDepth
        };
        let resolution = colour.dimensions();
        self.register(RenderTargetGroup::new(
            Some(colour),
            None,
            group_type,
            resolution,
        ))
    }

    /// Creates a depth-only target group (e.g. for a shadow map) and queues
    /// its load command for the next snapshot.
    ///
    /// # Panics
    ///
    /// Panics if `depth` does not have a depth format.
    pub fn create_depth_render_target_group(
        &self,
        depth: Arc<RenderTexture>,
    ) -> PoolBox<RenderTargetGroup> {
        assert!(
            depth.format().is_depth(),
            "depth target must have a depth format"
        );

        let resolution = depth.dimensions();
        self.register(RenderTargetGroup::new(
            None,
            Some(depth),
            RenderTargetGroupType::Depth,
            resolution,
        ))
    }

    /// Descriptions of every group currently alive. A detached copy, not a
    /// live view; order is unspecified.
    pub fn render_target_groups(&self) -> Vec<RenderTargetGroupDesc> {
        self.lock_state().live.clone()
    }

    /// Removes the group from the live set and queues its unload command for
    /// the next snapshot.
    ///
    /// The group object is moved into the pending unload buffer and from
    /// there into the unload command, so it outlives every queued reference
    /// to it; its pool slot is released only when the render thread drops
    /// the processed command.
    pub fn destroy_render_target_group(&self, group: PoolBox<RenderTargetGroup>) {
        let mut state = self.lock_state();
        let index = state
            .live
            .iter()
            .position(|desc| desc.id == group.id())
            .expect("destroyed a render target group this manager does not own");
        state.live.swap_remove(index);
        log::debug!(
            "render target group {} queued for unload",
            group.id().value()
        );
        state.pending_unloads.push(group);
    }

    fn register(&self, group: RenderTargetGroup) -> PoolBox<RenderTargetGroup> {
        let group = self.pool.allocate(group);
        let desc = group.desc();
        log::debug!(
            "render target group {} created ({:?}, {}x{})",
            desc.id.value(),
            desc.group_type,
            desc.resolution.width,
            desc.resolution.height
        );

        let mut state = self.lock_state();
        state.live.push(desc.clone());
        state.pending_loads.push(desc);
        group
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, PendingState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RenderTargetGroupManager {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSnapshotSystem for RenderTargetGroupManager {
    /// Drains the pending load and unload buffers into the snapshot's pre-
    /// and post-render command lists.
    ///
    /// Only main-target snapshots own resource lifecycle; offscreen
    /// snapshots leave the pending buffers untouched so commands are neither
    /// duplicated nor lost. The drain happens under the manager's mutex,
    /// making it atomic with respect to concurrent create/destroy calls.
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
                "draining {} target group loads, {} unloads",
                state.pending_loads.len(),
                state.pending_unloads.len()
            );
        }

        let pre = snapshot.pre_render_command_list();
        for desc in state.pending_loads.drain(..) {
            pre.add_load_target_group_command(desc);
        }

        let post = snapshot.post_render_command_list();
        for group in state.pending_unloads.drain(..) {
            post.add_unload_target_group_command(group);
        }
    }
}
