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

//! The per-frame render snapshot bridging game-thread state to the render
//! thread.

use crate::command::RenderCommandList;
use ember_core::math::{Color, Extent2d};
use ember_data::FrameAllocator;

/// Classifies the destination of a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    /// The main screen. Resource lifecycle commands are queued only for
    /// snapshots of this type.
    Main,
    /// An offscreen or secondary render target.
    Offscreen,
}

/// The per-frame container of pre- and post-render command lists.
///
/// Exactly one snapshot exists per rendered frame. Managers append their
/// pending load commands to the pre-render list and their pending unload
/// commands to the post-render list; the renderer executes the pre-render
/// list before any draw command of the frame and the post-render list after
/// all of them, so a resource is loaded before first use and torn down only
/// once nothing in the frame references it.
#[derive(Debug)]
pub struct RenderSnapshot {
    target_type: TargetType,
    resolution: Extent2d,
    clear_colour: Color,
    pre_render_commands: RenderCommandList,
    post_render_commands: RenderCommandList,
    claimed: bool,
}

impl RenderSnapshot {
    /// Creates an empty snapshot for one frame.
    pub fn new(target_type: TargetType, resolution: Extent2d, clear_colour: Color) -> Self {
        Self {
            target_type,
            resolution,
            clear_colour,
            pre_render_commands: RenderCommandList::new(),
            post_render_commands: RenderCommandList::new(),
            claimed: false,
        }
    }

    /// The destination this snapshot renders to.
    #[inline]
    pub fn target_type(&self) -> TargetType {
        self.target_type
    }

    /// The viewport resolution of the frame.
    #[inline]
    pub fn resolution(&self) -> Extent2d {
        self.resolution
    }

    /// The clear colour of the frame.
    #[inline]
    pub fn clear_colour(&self) -> Color {
        self.clear_colour
    }

    /// The command list executed before any draw command of the frame.
    ///
    /// # Panics
    ///
    /// Panics if the command lists have already been claimed.
    pub fn pre_render_command_list(&mut self) -> &mut RenderCommandList {
        assert!(
            !self.claimed,
            "render command lists already claimed for this frame"
        );
        &mut self.pre_render_commands
    }

    /// The command list executed after every draw command of the frame.
    ///
    /// # Panics
    ///
    /// Panics if the command lists have already been claimed.
    pub fn post_render_command_list(&mut self) -> &mut RenderCommandList {
        assert!(
            !self.claimed,
            "render command lists already claimed for this frame"
        );
        &mut self.post_render_commands
    }

    /// Moves the pre- and post-render command lists out for the renderer.
    ///
    /// The snapshot is committed at this point; each frame's lists are
    /// consumed exactly once.
    ///
    /// # Panics
    ///
    /// Panics on a second claim.
    pub fn claim_render_command_lists(&mut self) -> (RenderCommandList, RenderCommandList) {
        assert!(
            !self.claimed,
            "render command lists already claimed for this frame"
        );
        self.claimed = true;
        (
            std::mem::take(&mut self.pre_render_commands),
            std::mem::take(&mut self.post_render_commands),
        )
    }
}

/// A system that contributes to the render snapshot once per frame.
///
/// Implemented directly by the resource-group managers; the render pipeline
/// calls every registered system exactly once per frame, from its snapshot
/// stage, passing the frame-scoped allocator for any transient data.
pub trait RenderSnapshotSystem: Send + Sync {
    /// Appends this system's pending work for the frame to the snapshot.
    fn on_render_snapshot(
        &self,
        target_type: TargetType,
        snapshot: &mut RenderSnapshot,
        frame_allocator: &FrameAllocator,
    );
}
