/*!
Per-row draw descriptors for multi-draw calls.

A multi-draw call over an index buffer takes, per draw, an element count and a byte offset
into the buffer.  For strip indices laid out row after row, both are pure arithmetic on the
resolution and the index element size:

* `count_j = 2 * (longs + 1)`
* `offset_j = j * count_j * index_element_size`

```
use strip_mesh::mesh::resolution::Resolution;
use strip_mesh::mesh::draw_batch::DrawBatch;

let batch = DrawBatch::new(Resolution::new(10, 5).unwrap(), 4);
assert_eq!(batch.len(), 5);
assert_eq!(batch.counts(), vec![22; 5]);
assert_eq!(batch.offsets(), vec![0, 88, 176, 264, 352]);
```
*/

use std::ops::Range;

use crate::mesh::index_algorithms::StripIndices;
use crate::mesh::resolution::Resolution;

/// Element type of an index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndexFormat {
    U16,
    #[default]
    U32,
}

impl IndexFormat {
    /// Bytes per index.
    pub fn element_size(&self) -> usize {
        match self {
            IndexFormat::U16 => 2,
            IndexFormat::U32 => 4,
        }
    }

    /// Largest vertex count this format can address.
    pub fn max_vertex_count(&self) -> usize {
        match self {
            IndexFormat::U16 => u16::MAX as usize + 1,
            //saturates where usize is 32 bits
            IndexFormat::U32 => (u32::MAX as usize).saturating_add(1),
        }
    }
}

/// One strip's slice of the index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawDescriptor {
    /// Number of indices.
    pub count: usize,
    /// Byte offset of the first index.
    pub offset: usize,
}

impl DrawDescriptor {
    /**
    The slice expressed in elements rather than bytes, for APIs that take index ranges.

    # Panics
    Panics if `element_size` is zero, if `offset` is not a multiple of `element_size`,
    or if the range ends past `u32::MAX`.
    */
    pub fn element_range(&self, element_size: usize) -> Range<u32> {
        assert!(element_size > 0, "Invalid index element size");
        assert_eq!(self.offset % element_size, 0, "Misaligned offset");
        let start = self.offset / element_size;
        let end = start.checked_add(self.count);
        assert!(
            end.is_some_and(|end| end <= u32::MAX as usize),
            "Index range exceeds u32"
        );
        let end = end.unwrap_or_default();
        start as u32..end as u32
    }
}

/**
Draw descriptors for every strip of a grid.

Derived, never edited: if the resolution or the index element size changes, build a new one.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawBatch {
    descriptors: Vec<DrawDescriptor>,
    index_element_size: usize,
}

impl DrawBatch {
    /**
    Builds descriptors for the strips of a grid at `resolution`.

    # Panics
    Panics if `index_element_size` is zero, or so large that the batch's byte offsets
    overflow `usize`.
    */
    pub fn new(resolution: Resolution, index_element_size: usize) -> Self {
        Self::with_rows(resolution.row_count(), resolution.row_len(), index_element_size)
    }

    /**
    Builds descriptors matching an already generated index list.

    # Panics
    Same conditions as [Self::new].
    */
    pub fn for_indices(indices: &StripIndices, index_element_size: usize) -> Self {
        Self::with_rows(indices.row_count(), indices.row_len(), index_element_size)
    }

    fn with_rows(rows: usize, row_len: usize, index_element_size: usize) -> Self {
        assert!(index_element_size > 0, "Invalid index element size");
        //the end of the last row bounds every offset
        let row_bytes = row_len.checked_mul(index_element_size);
        let total_bytes = row_bytes.and_then(|b| b.checked_mul(rows));
        assert!(total_bytes.is_some(), "Index buffer size overflows usize");
        let row_bytes = row_bytes.unwrap_or_default();
        logwise::trace_sync!(
            "DrawBatch {rows} rows, {row_bytes} bytes per row",
            rows = rows,
            row_bytes = row_bytes
        );
        let descriptors = (0..rows)
            .map(|j| DrawDescriptor {
                count: row_len,
                offset: j * row_bytes,
            })
            .collect();
        Self {
            descriptors,
            index_element_size,
        }
    }

    pub fn index_element_size(&self) -> usize {
        self.index_element_size
    }

    pub fn descriptors(&self) -> &[DrawDescriptor] {
        &self.descriptors
    }

    /// Number of draws.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Per-draw counts, in the shape multi-draw APIs expect.
    pub fn counts(&self) -> Vec<usize> {
        self.descriptors.iter().map(|d| d.count).collect()
    }

    /// Per-draw byte offsets.
    pub fn offsets(&self) -> Vec<usize> {
        self.descriptors.iter().map(|d| d.offset).collect()
    }

    /// Per-draw element ranges.
    pub fn element_ranges(&self) -> impl Iterator<Item = Range<u32>> + '_ {
        self.descriptors
            .iter()
            .map(|d| d.element_range(self.index_element_size))
    }

    /// Bytes of index buffer the batch spans.
    pub fn byte_len(&self) -> usize {
        //checked against overflow in with_rows
        self.descriptors
            .last()
            .map(|d| d.offset + d.count * self.index_element_size)
            .unwrap_or(0)
    }
}
