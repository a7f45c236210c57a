/*! strip_mesh turns parametric surfaces into triangle-strip meshes ready for a multi-draw call.

The pipeline has four parts, leaves first:

| Part                 | Module                                  | Produces                                      |
|----------------------|-----------------------------------------|-----------------------------------------------|
| Surface functions    | [mesh::surface]                         | `(f, g, h)` for each grid sample              |
| Grid sampler         | [mesh::vertex_algorithms]               | `(longs + 1) * (lats + 1)` vertices, row-major |
| Strip index builder  | [mesh::index_algorithms]                | `lats` strips of `2 * (longs + 1)` indices    |
| Draw batch           | [mesh::draw_batch]                      | one `(count, byte offset)` per strip          |

Generation is pure and synchronous.  Every call owns its output, so independent surfaces can
be generated on as many threads as you like; the only shared thing is a
[SurfaceRegistry](mesh::SurfaceRegistry), which is read-only once shared.

Uploading and drawing is up to the rendering layer.  With the `backend_wgpu` feature,
`mesh::wgpu_support` does it for wgpu.

# Example

```
use strip_mesh::mesh::{IndexFormat, Resolution, Surface};

let sphere = Surface::sphere(2.0).unwrap();
let resolution = Resolution::new(10, 5).unwrap();

let vertices = strip_mesh::generate_vertices(&sphere, resolution);
let indices = strip_mesh::generate_strip_indices(resolution);
let batch = strip_mesh::generate_draw_descriptors(resolution, IndexFormat::U32.element_size());

assert_eq!(vertices.len(), 66);
assert_eq!(indices.row(0).len(), 22);
assert_eq!(batch.offsets()[1], 88);
```
*/

mod error;
pub mod mesh;

pub use error::Error;

use mesh::draw_batch::{DrawBatch, IndexFormat};
use mesh::index_algorithms::{StripIndexGenerator, StripIndices, Wrap};
use mesh::resolution::Resolution;
use mesh::strip_mesh::Mesh;
use mesh::surface::{SurfaceFunction, SurfaceRegistry};
use mesh::vertex::{TexCoords, Vertex};
use mesh::vertex_algorithms::GridSampler;

/// Samples `surface` over the grid, with texture coordinates.
pub fn generate_vertices(surface: &dyn SurfaceFunction, resolution: Resolution) -> Vec<Vertex> {
    generate_vertices_with(surface, resolution, TexCoords::Include)
}

/// Samples `surface` over the grid, choosing whether texture coordinates are produced.
pub fn generate_vertices_with(
    surface: &dyn SurfaceFunction,
    resolution: Resolution,
    tex_coords: TexCoords,
) -> Vec<Vertex> {
    GridSampler::new(surface, resolution)
        .with_tex_coords(tex_coords)
        .generate()
}

/// Builds one triangle strip per latitude band.
pub fn generate_strip_indices(resolution: Resolution) -> StripIndices {
    StripIndexGenerator::new(resolution).generate()
}

/// Like [generate_strip_indices], with seam columns or rows folded back onto the first.
pub fn generate_strip_indices_with(resolution: Resolution, wrap: Wrap) -> StripIndices {
    StripIndexGenerator::new(resolution).with_wrap(wrap).generate()
}

/**
Builds one draw descriptor per strip.

# Panics
Panics if `index_element_size` is zero, or large enough to overflow the buffer's byte size.
*/
pub fn generate_draw_descriptors(resolution: Resolution, index_element_size: usize) -> DrawBatch {
    DrawBatch::new(resolution, index_element_size)
}

/// Generates vertices, strips and draw batch together.
pub fn generate_mesh(
    surface: &dyn SurfaceFunction,
    resolution: Resolution,
    index_format: IndexFormat,
) -> Result<Mesh, Error> {
    Mesh::generate(surface, resolution, index_format, TexCoords::Include)
}

/**
Looks up a surface by name and generates it at `longs x lats`.

```
use strip_mesh::mesh::{IndexFormat, SurfaceRegistry};
use strip_mesh::Error;

let registry = SurfaceRegistry::builtin();
let mesh = strip_mesh::generate_named(&registry, "torus", 12, 6, IndexFormat::U16).unwrap();
assert_eq!(mesh.batch().len(), 6);

assert!(matches!(
    strip_mesh::generate_named(&registry, "torus", 0, 6, IndexFormat::U16),
    Err(Error::Resolution(_))
));
assert!(matches!(
    strip_mesh::generate_named(&registry, "teapot", 12, 6, IndexFormat::U16),
    Err(Error::Lookup(_))
));
```
*/
pub fn generate_named(
    registry: &SurfaceRegistry,
    name: &str,
    longs: usize,
    lats: usize,
    index_format: IndexFormat,
) -> Result<Mesh, Error> {
    let resolution = Resolution::new(longs, lats)?;
    let surface = registry.get(name)?;
    generate_mesh(surface.as_ref(), resolution, index_format)
}
