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

//! A render target group: the bundle of colour and depth attachments a
//! render pass draws into, with a single combined lifecycle.

use ember_core::math::Extent2d;
use ember_core::renderer::RenderTexture;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A process-wide unique id for a render target group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderTargetGroupId(u64);

impl RenderTargetGroupId {
    /// Returns the next unique id.
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

/// Which combination of attachments a target group carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderTargetGroupType {
    /// A client-supplied colour target and a client-supplied depth target.
    ColourDepth,
    /// A client-supplied colour target; the renderer supplies an internal
    /// depth buffer for the pass.
    Colour,
    /// A client-supplied colour target with no depth buffer at all.
    ColourNoDepth,
    /// A client-supplied depth target only (e.g. a shadow map).
    Depth,
}

/// A group of render targets treated as a single resource.
///
/// Immutable once constructed: the attachment references never change, and
/// GPU-side state is materialised only by the renderer when it processes the
/// group's load command.
#[derive(Debug)]
pub struct RenderTargetGroup {
    id: RenderTargetGroupId,
    colour_target: Option<Arc<RenderTexture>>,
    depth_target: Option<Arc<RenderTexture>>,
    group_type: RenderTargetGroupType,
    resolution: Extent2d,
}

impl RenderTargetGroup {
    pub(crate) fn new(
        colour_target: Option<Arc<RenderTexture>>,
        depth_target: Option<Arc<RenderTexture>>,
        group_type: RenderTargetGroupType,
        resolution: Extent2d,
    ) -> Self {
        Self {
            id: RenderTargetGroupId::next(),
            colour_target,
            depth_target,
            group_type,
            resolution,
        }
    }

    /// The unique id of this group.
    #[inline]
    pub fn id(&self) -> RenderTargetGroupId {
        self.id
    }

    /// The colour attachment, if the group has one.
    #[inline]
    pub fn colour_target(&self) -> Option<&Arc<RenderTexture>> {
        self.colour_target.as_ref()
    }

    /// The depth attachment, if the group has one.
    #[inline]
    pub fn depth_target(&self) -> Option<&Arc<RenderTexture>> {
        self.depth_target.as_ref()
    }

    /// The attachment combination of this group.
    #[inline]
    pub fn group_type(&self) -> RenderTargetGroupType {
        self.group_type
    }

    /// The pixel resolution shared by the group's attachments.
    #[inline]
    pub fn resolution(&self) -> Extent2d {
        self.resolution
    }

    /// A cheap, shareable description of this group, carried by load
    /// commands and the manager's live list.
    pub fn desc(&self) -> RenderTargetGroupDesc {
        RenderTargetGroupDesc {
            id: self.id,
            colour_target: self.colour_target.clone(),
            depth_target: self.depth_target.clone(),
            group_type: self.group_type,
            resolution: self.resolution,
        }
    }
}

/// The immutable description of a [`RenderTargetGroup`], detached from the
/// pooled object itself.
///
/// This is everything a renderer needs to materialise GPU state for the
/// group; cloning it only bumps the attachment `Arc`s.
#[derive(Debug, Clone)]
pub struct RenderTargetGroupDesc {
    /// The unique id of the described group.
    pub id: RenderTargetGroupId,
    /// The colour attachment, if any.
    pub colour_target: Option<Arc<RenderTexture>>,
    /// The depth attachment, if any.
    pub depth_target: Option<Arc<RenderTexture>>,
    /// The attachment combination.
    pub group_type: RenderTargetGroupType,
    /// The pixel resolution of the attachments.
    pub resolution: Extent2d,
}
