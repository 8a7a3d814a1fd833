//! Benchmarks for mesh construction and traversal.

use criterion::{criterion_group, criterion_main, Criterion};
use halfmesh::prelude::*;
use nalgebra::Point3;

fn grid_input(n: usize) -> (Vec<Point3<f64>>, Vec<Vec<usize>>) {
    let mut points = Vec::with_capacity((n + 1) * (n + 1));
    let mut faces = Vec::with_capacity(n * n * 2);

    for j in 0..=n {
        for i in 0..=n {
            points.push(Point3::new(i as f64, j as f64, 0.0));
        }
    }

    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1);
            let v11 = v01 + 1;

            faces.push(vec![v00, v10, v11]);
            faces.push(vec![v00, v11, v01]);
        }
    }

    (points, faces)
}

fn bench_mesh_construction(c: &mut Criterion) {
    let (points, faces) = grid_input(10);

    c.bench_function("build_grid_10x10", |b| {
        b.iter(|| {
            let mesh: HalfEdgeMesh = build_from_polygons(&points, &faces).unwrap();
            mesh
        });
    });
}

fn bench_mesh_traversal(c: &mut Criterion) {
    let (points, faces) = grid_input(50);
    let mesh: HalfEdgeMesh = build_from_polygons(&points, &faces).unwrap();

    c.bench_function("vertex_vertices_all", |b| {
        b.iter(|| {
            let mut count = 0;
            for v in mesh.vertex_ids() {
                count += mesh.vertex_vertices(v, true).count();
            }
            count
        });
    });

    c.bench_function("face_halfedges_all", |b| {
        b.iter(|| {
            let mut count = 0;
            for f in mesh.face_ids() {
                count += mesh.face_halfedges(f, true).count();
            }
            count
        });
    });
}

criterion_group!(benches, bench_mesh_construction, bench_mesh_traversal);
criterion_main!(benches);
