/*!
Surface functions and the registry that names them.

A surface function maps a grid position `(i, j)` at resolution `(longs, lats)` to a point
`(f, g, h)` in 3D.  The sampler in [crate::mesh::vertex_algorithms] only ever talks to the
[SurfaceFunction] trait, so adding a shape means adding one implementation and nothing else.

The built-in shapes are collected in the [Surface] tagged variant.  [SurfaceRegistry] maps
names to shared surface values for callers that pick a shape at runtime.

```
use strip_mesh::mesh::surface::{SurfaceFunction, SurfaceRegistry};
use strip_mesh::mesh::vertex::GridSample;

let registry = SurfaceRegistry::builtin();
let torus = registry.get("torus").unwrap();
assert!(torus.is_closed());
assert!(registry.get("klein_bottle").is_err());

let p = torus.position(GridSample { i: 0, j: 0, longs: 8, lats: 4 });
assert!((p[0] - -2.5).abs() < 1e-5);
```
*/

use std::collections::HashMap;
use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt::Debug;
use std::str::FromStr;
use std::sync::Arc;

use crate::mesh::vertex::GridSample;

/**
A pure coordinate-generating function for one shape.

Implementations must be deterministic.  For closed shapes, the point at `i == 0` must coincide
with the point at `i == longs` for every `j`; the sampler relies on the formulas for this and
never patches the seam itself.
*/
pub trait SurfaceFunction: Debug + Send + Sync {
    /// `(f(i,j), g(i,j), h(i,j))`.
    fn position(&self, sample: GridSample) -> [f32; 3];

    /// Texture coordinate for the sample.  Defaults to `(i/longs, j/lats)`.
    fn tex_coords(&self, sample: GridSample) -> [f32; 2] {
        sample.default_tex_coords()
    }

    /// Whether the first and last longitudinal samples coincide.
    fn is_closed(&self) -> bool {
        true
    }
}

/// Errors constructing a [Surface] from parameters.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("Invalid shape parameter {name}: {value}")]
pub struct ShapeError {
    pub name: &'static str,
    pub value: f32,
}

/// Errors looking up a surface by name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LookupError {
    #[error("No surface named {0}")]
    NotFound(String),
}

fn positive(name: &'static str, value: f32) -> Result<f32, ShapeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError { name, value })
    }
}

/// The built-in shapes, with their parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    /// Latitude/longitude sphere centered at the origin, poles on the y axis.
    Sphere { radius: f32 },
    /// Sphere whose longitude runs the other way around the y axis, so an equirectangular
    /// (Mercator-style) globe texture reads correctly from outside.
    MercatorSphere { radius: f32 },
    /// Upper half of a sphere; latitude spans the equator to the north pole.
    Hemisphere { radius: f32 },
    /// Torus around the z axis.
    Torus { outer_radius: f32, tube_radius: f32 },
    /// Open cylinder around the y axis, spanning `-half_height..=half_height`.
    Cylinder { radius: f32, half_height: f32 },
    /// Square in the xz plane spanning `-extent..=extent` on both axes.
    Plane { extent: f32 },
}

impl Surface {
    pub fn sphere(radius: f32) -> Result<Self, ShapeError> {
        Ok(Surface::Sphere {
            radius: positive("radius", radius)?,
        })
    }

    pub fn mercator_sphere(radius: f32) -> Result<Self, ShapeError> {
        Ok(Surface::MercatorSphere {
            radius: positive("radius", radius)?,
        })
    }

    pub fn hemisphere(radius: f32) -> Result<Self, ShapeError> {
        Ok(Surface::Hemisphere {
            radius: positive("radius", radius)?,
        })
    }

    pub fn torus(outer_radius: f32, tube_radius: f32) -> Result<Self, ShapeError> {
        Ok(Surface::Torus {
            outer_radius: positive("outer_radius", outer_radius)?,
            tube_radius: positive("tube_radius", tube_radius)?,
        })
    }

    pub fn cylinder(radius: f32, half_height: f32) -> Result<Self, ShapeError> {
        Ok(Surface::Cylinder {
            radius: positive("radius", radius)?,
            half_height: positive("half_height", half_height)?,
        })
    }

    pub fn plane(extent: f32) -> Result<Self, ShapeError> {
        Ok(Surface::Plane {
            extent: positive("extent", extent)?,
        })
    }

    /// Which kind of shape this is.
    pub fn kind(&self) -> SurfaceKind {
        match self {
            Surface::Sphere { .. } => SurfaceKind::Sphere,
            Surface::MercatorSphere { .. } => SurfaceKind::MercatorSphere,
            Surface::Hemisphere { .. } => SurfaceKind::Hemisphere,
            Surface::Torus { .. } => SurfaceKind::Torus,
            Surface::Cylinder { .. } => SurfaceKind::Cylinder,
            Surface::Plane { .. } => SurfaceKind::Plane,
        }
    }
}

/// Point at `latitude` and longitude `2π i/longs`.
fn sphere_point(radius: f32, latitude: f32, sample: GridSample) -> [f32; 3] {
    let theta = 2.0 * sample.u() * PI;
    [
        radius * latitude.cos() * theta.cos(),
        radius * latitude.sin(),
        radius * latitude.cos() * theta.sin(),
    ]
}

impl SurfaceFunction for Surface {
    fn position(&self, sample: GridSample) -> [f32; 3] {
        match *self {
            Surface::Sphere { radius } => {
                sphere_point(radius, -FRAC_PI_2 + sample.v() * PI, sample)
            }
            Surface::MercatorSphere { radius } => {
                let [x, y, z] = sphere_point(radius, -FRAC_PI_2 + sample.v() * PI, sample);
                [x, y, -z]
            }
            Surface::Hemisphere { radius } => sphere_point(radius, sample.v() * FRAC_PI_2, sample),
            Surface::Torus {
                outer_radius,
                tube_radius,
            } => {
                let psi = (-1.0 + 2.0 * sample.v()) * PI;
                let omega = (-1.0 + 2.0 * sample.u()) * PI;
                let ring = outer_radius + tube_radius * psi.cos();
                [ring * omega.cos(), ring * omega.sin(), tube_radius * psi.sin()]
            }
            Surface::Cylinder {
                radius,
                half_height,
            } => {
                let theta = 2.0 * sample.u() * PI;
                [
                    radius * theta.cos(),
                    (-1.0 + 2.0 * sample.v()) * half_height,
                    radius * theta.sin(),
                ]
            }
            Surface::Plane { extent } => [
                (-1.0 + 2.0 * sample.v()) * extent,
                0.0,
                (-1.0 + 2.0 * sample.u()) * extent,
            ],
        }
    }

    fn tex_coords(&self, sample: GridSample) -> [f32; 2] {
        match self {
            // s follows j over longs, t follows i over lats
            Surface::Plane { .. } => [
                sample.j as f32 / sample.longs as f32,
                sample.i as f32 / sample.lats as f32,
            ],
            _ => sample.default_tex_coords(),
        }
    }

    fn is_closed(&self) -> bool {
        !matches!(self, Surface::Plane { .. })
    }
}

/// Names of the built-in shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    Sphere,
    MercatorSphere,
    Hemisphere,
    Torus,
    Cylinder,
    Plane,
}

impl SurfaceKind {
    pub const ALL: [SurfaceKind; 6] = [
        SurfaceKind::Sphere,
        SurfaceKind::MercatorSphere,
        SurfaceKind::Hemisphere,
        SurfaceKind::Torus,
        SurfaceKind::Cylinder,
        SurfaceKind::Plane,
    ];

    /// Registry name.
    pub fn name(&self) -> &'static str {
        match self {
            SurfaceKind::Sphere => "sphere",
            SurfaceKind::MercatorSphere => "mercator_sphere",
            SurfaceKind::Hemisphere => "hemisphere",
            SurfaceKind::Torus => "torus",
            SurfaceKind::Cylinder => "cylinder",
            SurfaceKind::Plane => "plane",
        }
    }

    /**
    The shape with its demo parameters.

    ```
    use strip_mesh::mesh::surface::{Surface, SurfaceKind};
    assert_eq!(SurfaceKind::Sphere.default_surface(), Surface::Sphere { radius: 2.0 });
    ```
    */
    pub fn default_surface(&self) -> Surface {
        match self {
            SurfaceKind::Sphere => Surface::Sphere { radius: 2.0 },
            SurfaceKind::MercatorSphere => Surface::MercatorSphere { radius: 12.0 },
            SurfaceKind::Hemisphere => Surface::Hemisphere { radius: 2.0 },
            SurfaceKind::Torus => Surface::Torus {
                outer_radius: 3.0,
                tube_radius: 0.5,
            },
            SurfaceKind::Cylinder => Surface::Cylinder {
                radius: 1.0,
                half_height: 2.0,
            },
            SurfaceKind::Plane => Surface::Plane { extent: 5.0 },
        }
    }
}

impl FromStr for SurfaceKind {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SurfaceKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| LookupError::NotFound(s.to_string()))
    }
}

/**
Maps names to shared surface functions.

Build it up with [Self::register], then share it; lookups only need `&self`.
*/
#[derive(Debug, Clone, Default)]
pub struct SurfaceRegistry {
    surfaces: HashMap<String, Arc<dyn SurfaceFunction>>,
}

impl SurfaceRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every [SurfaceKind] under its [SurfaceKind::name], with default parameters.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for kind in SurfaceKind::ALL {
            registry.register(kind.name(), Arc::new(kind.default_surface()));
        }
        registry
    }

    /**
    Adds a surface under `name`, returning whatever was registered there before.
    */
    pub fn register(
        &mut self,
        name: impl Into<String>,
        surface: Arc<dyn SurfaceFunction>,
    ) -> Option<Arc<dyn SurfaceFunction>> {
        let name = name.into();
        logwise::info_sync!(
            "SurfaceRegistry::register {name}",
            name = logwise::privacy::LogIt(&name)
        );
        self.surfaces.insert(name, surface)
    }

    /// Looks up a surface.  Unknown names are an error, never a fallback shape.
    pub fn get(&self, name: &str) -> Result<Arc<dyn SurfaceFunction>, LookupError> {
        self.surfaces
            .get(name)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(name.to_string()))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.surfaces.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{LookupError, ShapeError, Surface, SurfaceFunction, SurfaceKind, SurfaceRegistry};
    use crate::mesh::vertex::GridSample;
    use std::sync::Arc;

    fn sample(i: usize, j: usize, longs: usize, lats: usize) -> GridSample {
        GridSample { i, j, longs, lats }
    }

    fn close(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn sphere_poles() {
        let s = Surface::sphere(2.0).unwrap();
        assert!(close(s.position(sample(0, 0, 10, 5)), [0.0, -2.0, 0.0]));
        assert!(close(s.position(sample(3, 5, 10, 5)), [0.0, 2.0, 0.0]));
        // equator, quarter turn
        let p = s.position(sample(1, 1, 4, 2));
        assert!(close(p, [0.0, 0.0, 2.0]));
    }

    #[test]
    fn mercator_mirrors_z() {
        let s = Surface::sphere(12.0).unwrap().position(sample(1, 1, 4, 2));
        let m = Surface::mercator_sphere(12.0).unwrap().position(sample(1, 1, 4, 2));
        assert!(close(m, [s[0], s[1], -s[2]]));
    }

    #[test]
    fn hemisphere_spans_equator_to_pole() {
        let h = Surface::hemisphere(1.0).unwrap();
        assert!(close(h.position(sample(0, 0, 4, 3)), [1.0, 0.0, 0.0]));
        assert!(close(h.position(sample(0, 3, 4, 3)), [0.0, 1.0, 0.0]));
    }

    #[test]
    fn torus_extremes() {
        let t = Surface::torus(3.0, 0.5).unwrap();
        // inner equator at omega = -pi
        assert!(close(t.position(sample(0, 0, 8, 4)), [-2.5, 0.0, 0.0]));
        // outer equator at omega = 0
        assert!(close(t.position(sample(4, 2, 8, 4)), [3.5, 0.0, 0.0]));
    }

    #[test]
    fn cylinder_height() {
        let c = Surface::cylinder(1.0, 2.0).unwrap();
        assert!(close(c.position(sample(0, 0, 6, 2)), [1.0, -2.0, 0.0]));
        assert!(close(c.position(sample(0, 2, 6, 2)), [1.0, 2.0, 0.0]));
    }

    #[test]
    fn plane_tex_coords_are_transposed() {
        let p = Surface::plane(5.0).unwrap();
        assert!(!p.is_closed());
        assert_eq!(p.tex_coords(sample(2, 1, 4, 2)), [0.25, 1.0]);
        assert!(close(p.position(sample(0, 0, 4, 2)), [-5.0, 0.0, -5.0]));
        assert!(close(p.position(sample(4, 2, 4, 2)), [5.0, 0.0, 5.0]));
    }

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(
            Surface::sphere(0.0),
            Err(ShapeError {
                name: "radius",
                value: 0.0
            })
        );
        assert!(Surface::torus(3.0, -1.0).is_err());
        assert!(Surface::plane(f32::NAN).is_err());
        assert!(Surface::cylinder(f32::INFINITY, 1.0).is_err());
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in SurfaceKind::ALL {
            assert_eq!(kind.name().parse::<SurfaceKind>(), Ok(kind));
            assert_eq!(kind.default_surface().kind(), kind);
        }
        assert_eq!(
            "Sphere".parse::<SurfaceKind>(),
            Err(LookupError::NotFound("Sphere".to_string()))
        );
    }

    #[test]
    fn registry() {
        let mut registry = SurfaceRegistry::builtin();
        assert_eq!(registry.len(), SurfaceKind::ALL.len());
        assert_eq!(
            registry.names(),
            vec!["cylinder", "hemisphere", "mercator_sphere", "plane", "sphere", "torus"]
        );
        assert!(matches!(registry.get("cone"), Err(LookupError::NotFound(n)) if n == "cone"));

        let big = Arc::new(Surface::sphere(10.0).unwrap());
        assert!(registry.register("big_sphere", big).is_none());
        let p = registry.get("big_sphere").unwrap().position(sample(0, 0, 4, 2));
        assert!(close(p, [0.0, -10.0, 0.0]));
        assert!(SurfaceRegistry::new().is_empty());
    }
}
