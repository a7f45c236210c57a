/*!
Triangle-strip index lists for a sampled grid.

Each latitude band `j` (between vertex rows `j` and `j + 1`) becomes one independent strip.
A strip walks the band column by column, emitting two indices per column, the upper row first:

```text
 row j+1   0 ── 2 ── 4 ── 6
           │ ╲  │ ╲  │ ╲  │
           │  ╲ │  ╲ │  ╲ │
 row j     1 ── 3 ── 5 ── 7
```

The order above is what fixes the winding of every triangle in the strip.  Swapping the two
indices of each pair flips every face, so it is part of the contract, not a detail.

Strips share no state: there are no degenerate joins, and each row is drawn by its own
draw call (see [crate::mesh::draw_batch]).

By default every index refers to its own grid vertex, so closed shapes rely on their
coincident seam samples.  [Wrap] instead points the last column (or row) back at the first,
which makes the seam share vertices.  Counts and ordering are the same either way.

```
use strip_mesh::mesh::resolution::Resolution;
use strip_mesh::mesh::index_algorithms::StripIndexGenerator;

// 3 longs, 2 lats: vertex rows of 4, 2 strips of 8 indices
let generator = StripIndexGenerator::new(Resolution::new(3, 2).unwrap());
assert_eq!(generator.num_indices(), 16);
assert_eq!(generator.index_for(0), 4); // row 1, column 0
assert_eq!(generator.index_for(1), 0); // row 0, column 0

let indices = generator.generate();
assert_eq!(indices.row(1), &[8, 4, 9, 5, 10, 6, 11, 7]);
```
*/

use crate::mesh::resolution::Resolution;

const INDICES_PER_COLUMN: usize = 2;

/**
Which parametric directions close on themselves in the index buffer.

With `longitude`, column `longs` is emitted as column 0.  With `latitude`, row `lats` is
emitted as row 0 (the torus case).
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Wrap {
    pub longitude: bool,
    pub latitude: bool,
}

impl Wrap {
    pub const NONE: Wrap = Wrap {
        longitude: false,
        latitude: false,
    };
    pub const BOTH: Wrap = Wrap {
        longitude: true,
        latitude: true,
    };
}

/**
Generates strip indices for a grid, either one at a time or all at once.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripIndexGenerator {
    resolution: Resolution,
    wrap: Wrap,
}

impl StripIndexGenerator {
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            wrap: Wrap::NONE,
        }
    }

    /**
    Chooses which directions wrap.

    ```
    use strip_mesh::mesh::resolution::Resolution;
    use strip_mesh::mesh::index_algorithms::{StripIndexGenerator, Wrap};

    let generator = StripIndexGenerator::new(Resolution::new(3, 1).unwrap()).with_wrap(Wrap {
        longitude: true,
        latitude: false,
    });
    assert_eq!(generator.generate().row(0), &[4, 0, 5, 1, 6, 2, 4, 0]);
    ```
    */
    pub fn with_wrap(mut self, wrap: Wrap) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn wrap(&self) -> Wrap {
        self.wrap
    }

    /// Number of strips, equal to `lats`.
    pub fn num_rows(&self) -> usize {
        self.resolution.row_count()
    }

    /// Indices per strip, `2 * (longs + 1)`.
    pub fn row_len(&self) -> usize {
        self.resolution.vertex_count_width() * INDICES_PER_COLUMN
    }

    /// Indices across all strips.
    pub fn num_indices(&self) -> usize {
        self.num_rows() * self.row_len()
    }

    /**
    Returns the vertex index at position `buffer_pos` of the flattened index buffer.

    # Panics
    Panics if `buffer_pos >= self.num_indices()`.
    */
    pub fn index_for(&self, buffer_pos: usize) -> u32 {
        assert!(buffer_pos < self.num_indices(), "Index out of bounds");
        let row = buffer_pos / self.row_len();
        let column_pos = buffer_pos % self.row_len();
        let i = column_pos / INDICES_PER_COLUMN;
        let j = match column_pos % INDICES_PER_COLUMN {
            0 => row + 1,
            1 => row,
            _ => unreachable!(),
        };
        let i = if self.wrap.longitude && i == self.resolution.longs() { 0 } else { i };
        let j = if self.wrap.latitude && j == self.resolution.lats() { 0 } else { j };
        let index = self.resolution.linear_index(i, j);
        assert!(index <= u32::MAX as usize, "Grid exceeds u32 index range");
        index as u32
    }

    /// Builds every strip.
    pub fn generate(&self) -> StripIndices {
        logwise::trace_sync!(
            "StripIndexGenerator::generate {rows} rows of {len}",
            rows = self.num_rows(),
            len = self.row_len()
        );
        let indices = (0..self.num_indices()).map(|p| self.index_for(p)).collect();
        StripIndices {
            indices,
            row_len: self.row_len(),
        }
    }
}

/**
Strip indices for a whole grid, stored contiguously.

Row `j` occupies `as_flat()[j * row_len()..(j + 1) * row_len()]`, so the flat slice can be
uploaded as one index buffer and addressed per row by a [crate::mesh::draw_batch::DrawBatch].
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripIndices {
    indices: Vec<u32>,
    row_len: usize,
}

impl StripIndices {
    pub fn row_len(&self) -> usize {
        self.row_len
    }

    pub fn row_count(&self) -> usize {
        self.indices.len() / self.row_len
    }

    /// # Panics
    /// Panics if `j >= self.row_count()`.
    pub fn row(&self, j: usize) -> &[u32] {
        assert!(j < self.row_count(), "Row out of bounds");
        &self.indices[j * self.row_len..(j + 1) * self.row_len]
    }

    /// Each strip in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u32]> + '_ {
        self.indices.chunks_exact(self.row_len)
    }

    /// All strips back to back.
    pub fn as_flat(&self) -> &[u32] {
        &self.indices
    }

    pub fn into_flat(self) -> Vec<u32> {
        self.indices
    }

    /// The largest vertex index referenced.
    pub fn max_index(&self) -> u32 {
        self.indices.iter().copied().max().unwrap_or(0)
    }
}
