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

//! Render commands and the ordered lists that carry them to the renderer.

use crate::material::{RenderMaterialGroup, RenderMaterialGroupDesc};
use crate::target::{RenderTargetGroup, RenderTargetGroupDesc};
use ember_data::PoolBox;

/// A single renderer-directed operation, queued during the snapshot stage
/// and executed later on the render thread.
///
/// *Load* commands are non-owning: they carry the group's immutable
/// description, while the group object itself stays owned by its creator.
/// *Unload* commands own the group outright; the render thread drops the
/// command once the GPU state is torn down, which releases the group's pool
/// slot. A group is therefore never freed before its unload command has been
/// processed.
#[derive(Debug)]
pub enum RenderCommand {
    /// Materialise GPU state for a render target group.
    LoadTargetGroup {
        /// The description of the group to load.
        desc: RenderTargetGroupDesc,
    },
    /// Tear down GPU state for a render target group and release it.
    UnloadTargetGroup {
        /// The group to unload; the command is its sole owner.
        group: PoolBox<RenderTargetGroup>,
    },
    /// Materialise GPU state for a render material group.
    LoadMaterialGroup {
        /// The description of the group to load.
        desc: RenderMaterialGroupDesc,
    },
    /// Tear down GPU state for a render material group and release it.
    UnloadMaterialGroup {
        /// The group to unload; the command is its sole owner.
        group: PoolBox<RenderMaterialGroup>,
    },
}

/// An ordered, append-only list of render commands.
///
/// Built during the snapshot stage and consumed, in order, exactly once by
/// the renderer. The list itself is not internally synchronized; each
/// manager serializes its writes under its own lock before appending.
#[derive(Debug, Default)]
pub struct RenderCommandList {
    commands: Vec<RenderCommand>,
}

impl RenderCommandList {
    /// Creates an empty command list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a load command for a render target group.
    pub fn add_load_target_group_command(&mut self, desc: RenderTargetGroupDesc) {
        self.commands.push(RenderCommand::LoadTargetGroup { desc });
    }

    /// Appends an unload command owning the given render target group.
    pub fn add_unload_target_group_command(&mut self, group: PoolBox<RenderTargetGroup>) {
        self.commands
            .push(RenderCommand::UnloadTargetGroup { group });
    }

    /// Appends a load command for a render material group.
    pub fn add_load_material_group_command(&mut self, desc: RenderMaterialGroupDesc) {
        self.commands
            .push(RenderCommand::LoadMaterialGroup { desc });
    }

    /// Appends an unload command owning the given render material group.
    pub fn add_unload_material_group_command(&mut self, group: PoolBox<RenderMaterialGroup>) {
        self.commands
            .push(RenderCommand::UnloadMaterialGroup { group });
    }

    /// The number of commands in the list.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the list contains no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterates over the commands in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, RenderCommand> {
        self.commands.iter()
    }
}

impl IntoIterator for RenderCommandList {
    type Item = RenderCommand;
    type IntoIter = std::vec::IntoIter<RenderCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl<'a> IntoIterator for &'a RenderCommandList {
    type Item = &'a RenderCommand;
    type IntoIter = std::slice::Iter<'a, RenderCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
