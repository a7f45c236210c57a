// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Layout of the interleaved vertex record.
//!
//! The mesh generators hand their output to a rendering layer that uploads it into a GPU
//! buffer.  That layer needs to know how a [`Vertex`](crate::mesh::vertex::Vertex) is laid out
//! once interleaved: which scalar components are present, in which order, and how wide each
//! one is.  [`VertexLayout`] carries that description.
//!
//! # Example
//!
//! ```
//! use strip_mesh::mesh::vertex_layout::{VertexLayout, VertexFieldType};
//!
//! let mut layout = VertexLayout::new();
//! layout.add_field("position_x", VertexFieldType::F32);
//! layout.add_field("position_y", VertexFieldType::F32);
//! layout.add_field("texcoord_s", VertexFieldType::F32);
//! assert_eq!(layout.element_stride(), 12);
//! assert_eq!(layout.offset_of("texcoord_s"), Some(8));
//! ```

/// Describes the layout of one interleaved vertex.
///
/// Fields are listed in memory order.  Multi-component attributes (a 4D position, a 2D
/// texture coordinate) are one field per component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    fields: Vec<VertexField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct VertexField {
    name: &'static str,
    r#type: VertexFieldType,
}

/// Data type of a vertex field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum VertexFieldType {
    /// A 32-bit float.
    F32,
}

impl VertexFieldType {
    /// Width of the field in bytes.
    pub fn stride(&self) -> usize {
        match self {
            VertexFieldType::F32 => 4,
        }
    }
}

impl VertexLayout {
    /// Creates an empty layout.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Appends a field.  Order of calls is memory order.
    pub fn add_field(&mut self, name: &'static str, r#type: VertexFieldType) {
        self.fields.push(VertexField { name, r#type });
    }

    /// Number of scalar fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Field names in memory order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    /// Size in bytes of one interleaved vertex.
    pub fn element_stride(&self) -> usize {
        self.fields.iter().map(|e| e.r#type.stride()).sum()
    }

    /// Byte offset of the first field called `name`, if any.
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        let mut offset = 0;
        for field in &self.fields {
            if field.name == name {
                return Some(offset);
            }
            offset += field.r#type.stride();
        }
        None
    }
}

impl Default for VertexLayout {
    fn default() -> Self {
        Self::new()
    }
}
