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

//! Describes the layout of a single vertex in a mesh's vertex buffer.

/// The maximum number of elements a vertex format can hold.
pub const MAX_VERTEX_ELEMENTS: usize = 8;

/// The data type of a single vertex element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexElementType {
    /// Two 32-bit floats.
    Float2,
    /// Three 32-bit floats.
    Float3,
    /// Four 32-bit floats.
    Float4,
    /// Four unsigned bytes, typically normalized in the shader.
    Byte4,
}

impl VertexElementType {
    /// The size of a single element of this type, in bytes.
    #[inline]
    pub const fn size_bytes(&self) -> u32 {
        match self {
            Self::Float2 => 8,
            Self::Float3 => 12,
            Self::Float4 => 16,
            Self::Byte4 => 4,
        }
    }
}

/// The semantic meaning of a vertex element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexElementUsage {
    /// Object-space position.
    Position,
    /// Surface normal.
    Normal,
    /// Vertex colour.
    Colour,
    /// Texture coordinates.
    TexCoord,
    /// Skinning weights.
    Weights,
    /// Skinning joint indices.
    JointIndices,
}

/// A single element of a vertex: its data type paired with its semantic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexElement {
    /// The data type of the element.
    pub element_type: VertexElementType,
    /// The semantic meaning of the element.
    pub usage: VertexElementUsage,
}

impl VertexElement {
    /// Creates a new vertex element.
    #[inline]
    pub const fn new(element_type: VertexElementType, usage: VertexElementUsage) -> Self {
        Self {
            element_type,
            usage,
        }
    }

    /// The size of this element in bytes.
    #[inline]
    pub const fn size_bytes(&self) -> u32 {
        self.element_type.size_bytes()
    }
}

/// An ordered description of the elements making up one vertex.
///
/// Formats are value types: two formats compare equal when they list the
/// same elements in the same order. The stock formats used by the engine's
/// built-in shaders are provided as associated constants.
#[derive(Debug, Clone, Copy)]
pub struct VertexFormat {
    elements: [VertexElement; MAX_VERTEX_ELEMENTS],
    count: usize,
}

impl VertexFormat {
    /// The format used for sprites: position, colour, texture coordinates.
    pub const SPRITE: Self = Self::new(&[
        VertexElement::new(VertexElementType::Float4, VertexElementUsage::Position),
        VertexElement::new(VertexElementType::Byte4, VertexElementUsage::Colour),
        VertexElement::new(VertexElementType::Float2, VertexElementUsage::TexCoord),
    ]);

    /// The format used for static meshes: position, normal, texture
    /// coordinates.
    pub const STATIC_MESH: Self = Self::new(&[
        VertexElement::new(VertexElementType::Float4, VertexElementUsage::Position),
        VertexElement::new(VertexElementType::Float3, VertexElementUsage::Normal),
        VertexElement::new(VertexElementType::Float2, VertexElementUsage::TexCoord),
    ]);

    /// The format used for skinned meshes: the static mesh layout plus
    /// skinning weights and joint indices.
    pub const ANIMATED_MESH: Self = Self::new(&[
        VertexElement::new(VertexElementType::Float4, VertexElementUsage::Position),
        VertexElement::new(VertexElementType::Float3, VertexElementUsage::Normal),
        VertexElement::new(VertexElementType::Float2, VertexElementUsage::TexCoord),
        VertexElement::new(VertexElementType::Float4, VertexElementUsage::Weights),
        VertexElement::new(VertexElementType::Byte4, VertexElementUsage::JointIndices),
    ]);

    /// Creates a format from an ordered list of elements.
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_VERTEX_ELEMENTS`] elements are given.
    pub const fn new(elements: &[VertexElement]) -> Self {
        assert!(
            elements.len() <= MAX_VERTEX_ELEMENTS,
            "too many vertex elements"
        );

        // Pad the fixed backing array with copies of the first element; only
        // the first `count` entries are ever observed.
        let filler = if elements.is_empty() {
            VertexElement::new(VertexElementType::Float4, VertexElementUsage::Position)
        } else {
            elements[0]
        };
        let mut storage = [filler; MAX_VERTEX_ELEMENTS];
        let mut i = 0;
        while i < elements.len() {
            storage[i] = elements[i];
            i += 1;
        }

        Self {
            elements: storage,
            count: elements.len(),
        }
    }

    /// The ordered elements of this format.
    #[inline]
    pub fn elements(&self) -> &[VertexElement] {
        &self.elements[..self.count]
    }

    /// The number of elements in this format.
    #[inline]
    pub const fn num_elements(&self) -> usize {
        self.count
    }

    /// The total size of one vertex in bytes.
    pub fn size_bytes(&self) -> u32 {
        self.elements().iter().map(VertexElement::size_bytes).sum()
    }

    /// The byte offset of the element at `index` from the start of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn element_offset(&self, index: usize) -> u32 {
        assert!(index < self.count, "vertex element index out of range");
        self.elements[..index]
            .iter()
            .map(VertexElement::size_bytes)
            .sum()
    }
}

impl PartialEq for VertexFormat {
    fn eq(&self, other: &Self) -> bool {
        self.elements() == other.elements()
    }
}

impl Eq for VertexFormat {}
