/*! Crate-level error type. */

use crate::mesh::draw_batch::IndexFormat;
use crate::mesh::resolution::ResolutionError;
use crate::mesh::surface::{LookupError, ShapeError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Invalid resolution {0}")]
    Resolution(#[from] ResolutionError),
    #[error("Can't find surface {0}")]
    Lookup(#[from] LookupError),
    #[error("Invalid shape {0}")]
    Shape(#[from] ShapeError),
    #[error("{vertex_count} vertices can't be addressed with {format:?} indices")]
    IndexOverflow {
        vertex_count: usize,
        format: IndexFormat,
    },
}
