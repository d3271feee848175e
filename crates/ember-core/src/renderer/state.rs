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

//! Fixed-function render state enums shared by material descriptions.

/// A blend factor applied to the source or destination colour during
/// blending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// Multiply by zero.
    Zero,
    /// Multiply by one.
    One,
    /// Multiply by the source alpha.
    SourceAlpha,
    /// Multiply by one minus the source alpha.
    OneMinusSourceAlpha,
    /// Multiply by the destination alpha.
    DestinationAlpha,
    /// Multiply by one minus the destination alpha.
    OneMinusDestinationAlpha,
}

/// Which side of a triangle is discarded when face culling is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CullFace {
    /// Cull front-facing triangles.
    Front,
    /// Cull back-facing triangles.
    Back,
}

/// A comparison function used for depth testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareFunc {
    /// The test never passes.
    Never,
    /// Passes if the new value is less than the stored value.
    Less,
    /// Passes if the new value is less than or equal to the stored value.
    LessEqual,
    /// Passes if the new value equals the stored value.
    Equal,
    /// Passes if the new value is greater than the stored value.
    Greater,
    /// Passes if the new value is greater than or equal to the stored value.
    GreaterEqual,
    /// The test always passes.
    Always,
}
