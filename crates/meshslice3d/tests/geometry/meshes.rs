use meshslice3d::math::{Point, Real};
use meshslice3d::shape::PolyMesh;

/// Axis-aligned cube centered at the origin, with outward-facing quads.
pub fn cube(half_extent: Real) -> PolyMesh {
    let h = half_extent;
    let vertices = vec![
        Point::new(-h, -h, -h),
        Point::new(h, -h, -h),
        Point::new(h, h, -h),
        Point::new(-h, h, -h),
        Point::new(-h, -h, h),
        Point::new(h, -h, h),
        Point::new(h, h, h),
        Point::new(-h, h, h),
    ];
    PolyMesh::new(vertices, cube_quads())
}

/// The same cube as [`cube`], with each quad split in two triangles.
pub fn triangulated_cube(half_extent: Real) -> PolyMesh {
    let quads = cube_quads();
    let triangles: Vec<[u32; 3]> = quads
        .iter()
        .flat_map(|q| [[q[0], q[1], q[2]], [q[0], q[2], q[3]]])
        .collect();
    PolyMesh::new(cube(half_extent).vertices().to_vec(), triangles)
}

fn cube_quads() -> [[u32; 4]; 6] {
    [
        [0, 3, 2, 1], // -z
        [4, 5, 6, 7], // +z
        [0, 1, 5, 4], // -y
        [1, 2, 6, 5], // +x
        [2, 3, 7, 6], // +y
        [3, 0, 4, 7], // -x
    ]
}

/// Regular tetrahedron inscribed in the cube `[-1, 1]³`.
pub fn tetrahedron() -> PolyMesh {
    PolyMesh::new(
        vec![
            Point::new(1.0, 1.0, 1.0),
            Point::new(1.0, -1.0, -1.0),
            Point::new(-1.0, 1.0, -1.0),
            Point::new(-1.0, -1.0, 1.0),
        ],
        [[0u32, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]],
    )
}

/// A single square in the plane `z = 0`.
pub fn square_sheet() -> PolyMesh {
    PolyMesh::new(
        vec![
            Point::new(-1.0, -1.0, 0.0),
            Point::new(1.0, -1.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
            Point::new(-1.0, 1.0, 0.0),
        ],
        [[0u32, 1, 2, 3]],
    )
}
