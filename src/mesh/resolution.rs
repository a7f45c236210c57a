/*!
Grid resolution.

A [Resolution] is the `(longs, lats)` pair every other part of the mesh pipeline is sized from.
It is validated once, here, so the generators downstream never see an empty grid.

```
use strip_mesh::mesh::resolution::Resolution;

let resolution = Resolution::new(10, 5).unwrap();
assert_eq!(resolution.vertex_count(), 66);
assert_eq!(resolution.row_count(), 5);
assert_eq!(resolution.row_len(), 22);
assert_eq!(resolution.index_count(), 110);
```
*/

/// Errors constructing a [Resolution].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ResolutionError {
    #[error("longs must be at least 1")]
    ZeroLongs,
    #[error("lats must be at least 1")]
    ZeroLats,
    #[error("{longs}x{lats} grid can't be indexed with u32")]
    TooLarge { longs: usize, lats: usize },
}

/// Vertex indices are `u32`, so the grid may hold at most `u32::MAX + 1` vertices.
const MAX_VERTEX_INDEX: usize = u32::MAX as usize;

/**
Number of longitudinal (`longs`) and latitudinal (`lats`) slices of a parametric grid.

The sample lattice is `(longs + 1) x (lats + 1)` vertices.  Dimensions are fixed at construction;
consumers pre-size their storage from the counts reported here.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    longs: usize,
    lats: usize,
}

impl Resolution {
    /**
    Creates a new resolution.

    Both `longs` and `lats` must be at least 1.  Zero is rejected rather than clamped.
    Grids whose vertex or index counts overflow `usize`, or whose largest vertex index
    doesn't fit in a `u32`, are rejected as [ResolutionError::TooLarge].

    ```
    use strip_mesh::mesh::resolution::{Resolution, ResolutionError};
    assert_eq!(Resolution::new(0, 4), Err(ResolutionError::ZeroLongs));
    assert_eq!(Resolution::new(4, 0), Err(ResolutionError::ZeroLats));
    ```
    */
    pub fn new(longs: usize, lats: usize) -> Result<Self, ResolutionError> {
        if longs < 1 {
            return Err(ResolutionError::ZeroLongs);
        }
        if lats < 1 {
            return Err(ResolutionError::ZeroLats);
        }
        let too_large = ResolutionError::TooLarge { longs, lats };
        let width = longs.checked_add(1).ok_or(too_large)?;
        let height = lats.checked_add(1).ok_or(too_large)?;
        let vertex_count = width.checked_mul(height).ok_or(too_large)?;
        if vertex_count - 1 > MAX_VERTEX_INDEX {
            return Err(too_large);
        }
        width
            .checked_mul(2)
            .and_then(|row_len| row_len.checked_mul(lats))
            .ok_or(too_large)?;
        Ok(Self { longs, lats })
    }

    /// Number of longitudinal slices.
    pub fn longs(&self) -> usize {
        self.longs
    }

    /// Number of latitudinal slices.
    pub fn lats(&self) -> usize {
        self.lats
    }

    /**
    Vertices per latitude row, `longs + 1`.
    */
    pub fn vertex_count_width(&self) -> usize {
        self.longs + 1
    }

    /**
    Number of latitude rows of vertices, `lats + 1`.
    */
    pub fn vertex_count_height(&self) -> usize {
        self.lats + 1
    }

    /// Total vertices in the grid.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count_width() * self.vertex_count_height()
    }

    /// Number of strip rows, one per latitude band.
    pub fn row_count(&self) -> usize {
        self.lats
    }

    /// Indices in a single strip row, two per column.
    pub fn row_len(&self) -> usize {
        2 * self.vertex_count_width()
    }

    /// Total indices across all strip rows.
    pub fn index_count(&self) -> usize {
        self.row_count() * self.row_len()
    }

    /**
    Linear vertex index for grid position `(i, j)`, i.e. `j * (longs + 1) + i`.

    # Panics
    Panics if `i > longs` or `j > lats`.
    */
    pub fn linear_index(&self, i: usize, j: usize) -> usize {
        assert!(i < self.vertex_count_width(), "Index out of bounds");
        assert!(j < self.vertex_count_height(), "Index out of bounds");
        j * self.vertex_count_width() + i
    }

    /**
    Inverse of [Self::linear_index].
    */
    pub fn coordinates_for_vertex(&self, vertex: usize) -> (usize, usize) {
        let i = vertex % self.vertex_count_width();
        let j = vertex / self.vertex_count_width();
        assert!(j < self.vertex_count_height(), "Index out of bounds");
        (i, j)
    }
}
