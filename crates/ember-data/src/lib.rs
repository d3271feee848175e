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

//! # Ember Data
//!
//! Allocation primitives backing the render resource lifecycle: a slot-based
//! object pool with stable addresses, and a frame-scoped linear allocator
//! for per-frame transient data.

#![warn(missing_docs)]

pub mod allocators;

pub use allocators::{FrameAllocator, ObjectPool, PoolBox, PoolLimitPolicy};
