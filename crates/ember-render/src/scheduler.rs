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

//! The per-frame snapshot stage of the render pipeline.

use crate::snapshot::{RenderSnapshot, RenderSnapshotSystem, TargetType};
use ember_core::math::{Color, Extent2d};
use ember_data::FrameAllocator;
use std::sync::Arc;

/// Drives the snapshot stage: builds one [`RenderSnapshot`] per frame and
/// routes it through every registered [`RenderSnapshotSystem`].
///
/// Systems are owned by the composition root and registered explicitly;
/// there is no ambient registry. Registration order is visit order, which in
/// turn fixes the relative order of different systems' commands within a
/// frame's command lists.
#[derive(Default)]
pub struct RenderFrameScheduler {
    systems: Vec<Arc<dyn RenderSnapshotSystem>>,
}

impl RenderFrameScheduler {
    /// Creates a scheduler with no registered systems.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a system to be visited each frame, after all previously
    /// registered systems.
    pub fn register_system(&mut self, system: Arc<dyn RenderSnapshotSystem>) {
        self.systems.push(system);
    }

    /// The number of registered systems.
    pub fn num_systems(&self) -> usize {
        self.systems.len()
    }

    /// Builds the snapshot for one frame, visiting every registered system
    /// once.
    ///
    /// The caller (the embedding renderer) subsequently claims the command
    /// lists, executes the pre-render list, renders the frame, and executes
    /// the post-render list.
    pub fn snapshot_frame(
        &self,
        target_type: TargetType,
        resolution: Extent2d,
        clear_colour: Color,
        frame_allocator: &FrameAllocator,
    ) -> RenderSnapshot {
        let mut snapshot = RenderSnapshot::new(target_type, resolution, clear_colour);
        for system in &self.systems {
            system.on_render_snapshot(target_type, &mut snapshot, frame_allocator);
        }
        log::trace!(
            "snapshot stage complete for {target_type:?} target ({} frame bytes used)",
            frame_allocator.bytes_used()
        );
        snapshot
    }
}

impl std::fmt::Debug for RenderFrameScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderFrameScheduler")
            .field("num_systems", &self.systems.len())
            .finish()
    }
}
