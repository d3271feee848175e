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

//! Defines the opaque handle types describing GPU shader programs.

/// An opaque handle to a compiled GPU shader program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderId(pub u64);

/// An immutable description of an externally owned shader program.
///
/// Like [`RenderTexture`](crate::renderer::RenderTexture), instances are
/// created by the system that owns the compiled program and shared via `Arc`;
/// this crate never compiles or frees the program itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderShader {
    id: ShaderId,
    label: String,
}

impl RenderShader {
    /// Creates a new shader description with a human-readable label used in
    /// logging.
    pub fn new(id: ShaderId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    /// The opaque id of the shader program.
    #[inline]
    pub fn id(&self) -> ShaderId {
        self.id
    }

    /// The debug label of the shader program.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}
