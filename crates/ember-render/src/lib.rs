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

//! # Ember Render
//!
//! The render resource lifecycle pipeline. Resource-group managers bridge
//! synchronous, any-thread creation and destruction of GPU-adjacent resource
//! groups with the render thread that actually materialises and tears down
//! GPU state:
//!
//! - clients create groups through a manager, which allocates them from an
//!   object pool and queues a *load* command;
//! - once per frame the render pipeline collects a [`RenderSnapshot`] from
//!   every registered [`RenderSnapshotSystem`], draining each manager's
//!   pending commands into the snapshot's pre- and post-render command
//!   lists;
//! - an external renderer walks the pre-render list, issues its draw calls,
//!   then walks the post-render list. Dropping a processed *unload* command
//!   releases the group back to its pool, so a group is never freed while
//!   any queued work can still reference it.

#![warn(missing_docs)]

pub mod command;
pub mod material;
pub mod scheduler;
pub mod snapshot;
pub mod target;

pub use command::{RenderCommand, RenderCommandList};
pub use scheduler::RenderFrameScheduler;
pub use snapshot::{RenderSnapshot, RenderSnapshotSystem, TargetType};
