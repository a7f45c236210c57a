use std::sync::Arc;

use strip_mesh::mesh::surface::SurfaceFunction;
use strip_mesh::mesh::{IndexFormat, Resolution, Surface, SurfaceKind, SurfaceRegistry, TexCoords};
use strip_mesh::mesh::index_algorithms::Wrap;
use strip_mesh::{generate_draw_descriptors, generate_strip_indices, generate_vertices};

const TOLERANCE: f32 = 1e-5;

fn resolutions() -> Vec<Resolution> {
    let mut out = Vec::new();
    for longs in [1, 2, 3, 10, 17] {
        for lats in [1, 2, 5, 9] {
            out.push(Resolution::new(longs, lats).unwrap());
        }
    }
    out
}

fn distance(a: [f32; 3], b: [f32; 3]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

#[test]
fn counts_match_resolution() {
    let surface = Surface::torus(3.0, 0.5).unwrap();
    for r in resolutions() {
        let vertices = generate_vertices(&surface, r);
        assert_eq!(vertices.len(), (r.longs() + 1) * (r.lats() + 1));

        let indices = generate_strip_indices(r);
        assert_eq!(indices.rows().len(), r.lats());
        for row in indices.rows() {
            assert_eq!(row.len(), 2 * (r.longs() + 1));
            for index in row {
                assert!((*index as usize) < vertices.len());
            }
        }
    }
}

#[test]
fn closed_surfaces_have_coincident_seams() {
    for kind in SurfaceKind::ALL {
        let surface = kind.default_surface();
        if !surface.is_closed() {
            continue;
        }
        for r in resolutions() {
            let vertices = generate_vertices(&surface, r);
            for j in 0..=r.lats() {
                let first = vertices[r.linear_index(0, j)].point();
                let last = vertices[r.linear_index(r.longs(), j)].point();
                assert!(
                    distance(first, last) < TOLERANCE,
                    "{kind:?} seam open at j={j}: {first:?} vs {last:?}"
                );
            }
        }
    }
}

#[test]
fn plane_is_not_closed() {
    let plane = Surface::plane(3.0).unwrap();
    assert!(!plane.is_closed());
    let r = Resolution::new(6, 4).unwrap();
    let vertices = generate_vertices(&plane, r);
    for j in 0..=r.lats() {
        let first = vertices[r.linear_index(0, j)].point();
        let last = vertices[r.linear_index(6, j)].point();
        assert!(distance(first, last) > 1.0);
    }
}

#[test]
fn descriptor_offsets() {
    for r in resolutions() {
        for size in [2, 4] {
            let batch = generate_draw_descriptors(r, size);
            assert_eq!(batch.len(), r.lats());
            let count = 2 * (r.longs() + 1);
            for (j, d) in batch.descriptors().iter().enumerate() {
                assert_eq!(d.count, count);
                assert_eq!(d.offset, j * count * size);
            }
            assert!(batch.offsets().windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn generation_is_deterministic() {
    let r = Resolution::new(13, 7).unwrap();
    for kind in SurfaceKind::ALL {
        let surface = kind.default_surface();
        let a = generate_vertices(&surface, r);
        let b = generate_vertices(&surface, r);
        let bits = |v: &[strip_mesh::mesh::Vertex]| {
            v.iter()
                .flat_map(|v| {
                    let mut out = Vec::new();
                    v.write_interleaved(&mut out);
                    out.into_iter().map(f32::to_bits)
                })
                .collect::<Vec<u32>>()
        };
        assert_eq!(bits(&a), bits(&b));
    }
    assert_eq!(generate_strip_indices(r), generate_strip_indices(r));
}

#[test]
fn sphere_scenario() {
    let sphere = Surface::sphere(2.0).unwrap();
    let r = Resolution::new(10, 5).unwrap();
    let vertices = generate_vertices(&sphere, r);
    assert_eq!(vertices.len(), 66);
    assert_eq!(generate_strip_indices(r).row(0).len(), 22);
    assert!(distance(vertices[0].point(), [0.0, -2.0, 0.0]) < TOLERANCE);
    assert_eq!(vertices[0].position[3], 1.0);
    for v in &vertices {
        let radius = distance(v.point(), [0.0, 0.0, 0.0]);
        assert!((radius - 2.0).abs() < TOLERANCE);
    }
}

#[test]
fn torus_and_plane_scenarios() {
    let r = Resolution::new(8, 4).unwrap();

    let torus = generate_vertices(&Surface::torus(3.0, 0.5).unwrap(), r);
    assert!(distance(torus[0].point(), [-2.5, 0.0, 0.0]) < TOLERANCE);

    let plane = generate_vertices(&Surface::plane(2.0).unwrap(), r);
    assert!(distance(plane[0].point(), [-2.0, 0.0, -2.0]) < TOLERANCE);
    assert!(distance(plane[r.vertex_count() - 1].point(), [2.0, 0.0, 2.0]) < TOLERANCE);
}

#[test]
fn mercator_texture_coordinates() {
    let globe = Surface::mercator_sphere(12.0).unwrap();
    let r = Resolution::new(20, 20).unwrap();
    let vertices = strip_mesh::generate_vertices_with(&globe, r, TexCoords::Include);
    assert_eq!(vertices[r.linear_index(5, 10)].tex_coords, Some([0.25, 0.5]));
    let bare = strip_mesh::generate_vertices_with(&globe, r, TexCoords::Omit);
    assert!(bare.iter().all(|v| v.tex_coords.is_none()));
}

#[test]
fn independent_surfaces_on_many_threads() {
    let registry = SurfaceRegistry::builtin();
    let names: Vec<String> = registry.names().into_iter().map(String::from).collect();
    let r = Resolution::new(16, 8).unwrap();

    let expected: Vec<_> = names
        .iter()
        .map(|n| {
            let surface = registry.get(n).unwrap();
            strip_mesh::generate_mesh(surface.as_ref(), r, IndexFormat::U32).unwrap()
        })
        .collect();

    let produced: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = names
            .iter()
            .map(|n| {
                let registry = &registry;
                scope.spawn(move || strip_mesh::generate_named(registry, n, 16, 8, IndexFormat::U32))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect::<Vec<_>>()
    });
    assert_eq!(produced, expected);
}

#[test]
fn custom_surface_plugs_in() {
    /// A flat disc, closed around its center.
    #[derive(Debug)]
    struct Disc;
    impl SurfaceFunction for Disc {
        fn position(&self, s: strip_mesh::mesh::GridSample) -> [f32; 3] {
            let theta = 2.0 * s.u() * std::f32::consts::PI;
            let radius = s.v();
            [radius * theta.cos(), 0.0, radius * theta.sin()]
        }
    }

    let mut registry = SurfaceRegistry::builtin();
    registry.register("disc", Arc::new(Disc));
    let mesh = strip_mesh::generate_named(&registry, "disc", 12, 3, IndexFormat::U16).unwrap();
    assert_eq!(mesh.vertices().len(), 52);
    assert_eq!(mesh.index_bytes().len(), mesh.batch().byte_len());
}

#[test]
fn wrapped_seam_indices_hit_coincident_vertices() {
    let torus = Surface::torus(3.0, 0.5).unwrap();
    let r = Resolution::new(12, 6).unwrap();
    let vertices = generate_vertices(&torus, r);
    let plain = generate_strip_indices(r);
    let wrapped = strip_mesh::generate_strip_indices_with(r, Wrap::BOTH);
    assert_eq!(wrapped.as_flat().len(), plain.as_flat().len());
    for (a, b) in plain.as_flat().iter().zip(wrapped.as_flat()) {
        let a = vertices[*a as usize].point();
        let b = vertices[*b as usize].point();
        assert!(distance(a, b) < TOLERANCE);
    }
    assert!(wrapped.max_index() < plain.max_index());
}
