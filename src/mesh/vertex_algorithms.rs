/*!
Samples a parametric surface on a uniform grid.

The grid is `(longs + 1) x (lats + 1)` points, row-major by latitude: `j` is the outer loop,
`i` the inner one, and vertex `k` sits at `k = j * (longs + 1) + i`.

```
use strip_mesh::mesh::resolution::Resolution;
use strip_mesh::mesh::surface::Surface;
use strip_mesh::mesh::vertex_algorithms::GridSampler;

let sphere = Surface::sphere(2.0).unwrap();
let sampler = GridSampler::new(&sphere, Resolution::new(10, 5).unwrap());
let vertices = sampler.generate();
assert_eq!(vertices.len(), 66);
assert!((vertices[0].position[1] - -2.0).abs() < 1e-5);
```
*/

use crate::mesh::resolution::Resolution;
use crate::mesh::surface::SurfaceFunction;
use crate::mesh::vertex::{GridSample, TexCoords, Vertex};

/**
Evaluates a [SurfaceFunction] over a grid.

The sampler does not deduplicate seam vertices or patch poles.  Closed shapes produce
coincident first and last columns because their formulas are periodic; open shapes do not.
*/
#[derive(Debug, Clone, Copy)]
pub struct GridSampler<'s> {
    surface: &'s dyn SurfaceFunction,
    resolution: Resolution,
    tex_coords: TexCoords,
}

impl<'s> GridSampler<'s> {
    /// Creates a sampler that also produces texture coordinates.
    pub fn new(surface: &'s dyn SurfaceFunction, resolution: Resolution) -> Self {
        Self {
            surface,
            resolution,
            tex_coords: TexCoords::Include,
        }
    }

    /// Chooses whether texture coordinates are produced.
    pub fn with_tex_coords(mut self, tex_coords: TexCoords) -> Self {
        self.tex_coords = tex_coords;
        self
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /**
    Number of vertices this sampler writes.  Size caller buffers from this.
    */
    pub fn vertex_count(&self) -> usize {
        self.resolution.vertex_count()
    }

    /**
    Returns the vertex at linear index `vertex`.

    # Panics
    Panics if `vertex >= self.vertex_count()`.
    */
    pub fn vertex_for(&self, vertex: usize) -> Vertex {
        let (i, j) = self.resolution.coordinates_for_vertex(vertex);
        let sample = GridSample::new(i, j, self.resolution);
        let tex_coords = match self.tex_coords {
            TexCoords::Include => Some(self.surface.tex_coords(sample)),
            TexCoords::Omit => None,
        };
        Vertex::from_point(self.surface.position(sample), tex_coords)
    }

    /**
    Writes every vertex into a caller-owned buffer.

    # Panics
    Panics if `out.len() != self.vertex_count()`.
    */
    pub fn fill(&self, out: &mut [Vertex]) {
        assert_eq!(out.len(), self.vertex_count(), "Vertex buffer size mismatch");
        for (k, slot) in out.iter_mut().enumerate() {
            *slot = self.vertex_for(k);
        }
    }

    /// Samples the whole grid into a new vector.
    pub fn generate(&self) -> Vec<Vertex> {
        logwise::trace_sync!(
            "GridSampler::generate {longs}x{lats} -> {count} vertices",
            longs = self.resolution.longs(),
            lats = self.resolution.lats(),
            count = self.vertex_count()
        );
        (0..self.vertex_count()).map(|k| self.vertex_for(k)).collect()
    }
}
