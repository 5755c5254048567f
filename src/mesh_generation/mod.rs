//! Structured mesh generators.
//!
//! Each generator returns `(num_vertices, cell_vertices)` in the internal
//! node ordering, ready for
//! [`MeshTopology::build`](crate::topology::mesh_topology::MeshTopology::build).
//! Vertices are numbered lexicographically: index `i + j*(nx+1)` in 2D and
//! `i + j*(nx+1) + k*(nx+1)*(ny+1)` in 3D.

/// `n` intervals covering the unit interval. `n + 1` vertices.
pub fn unit_interval(n: usize) -> (usize, Vec<u32>) {
    assert!(n >= 1, "at least one cell");
    let mut cells = Vec::with_capacity(2 * n);
    for i in 0..n as u32 {
        cells.extend([i, i + 1]);
    }
    (n + 1, cells)
}

/// `nx x ny` grid of squares, each split into two triangles along the
/// diagonal from the lower-left corner. `(nx+1)(ny+1)` vertices,
/// `2*nx*ny` cells.
pub fn unit_square_triangles(nx: usize, ny: usize) -> (usize, Vec<u32>) {
    assert!(nx >= 1 && ny >= 1, "at least one cell per direction");
    let stride = (nx + 1) as u32;
    let mut cells = Vec::with_capacity(6 * nx * ny);
    for j in 0..ny as u32 {
        for i in 0..nx as u32 {
            let v00 = i + j * stride;
            let v10 = v00 + 1;
            let v01 = v00 + stride;
            let v11 = v01 + 1;
            cells.extend([v00, v10, v11]);
            cells.extend([v00, v11, v01]);
        }
    }
    ((nx + 1) * (ny + 1), cells)
}

/// `nx x ny` grid of quadrilaterals. `(nx+1)(ny+1)` vertices, `nx*ny`
/// cells.
pub fn unit_square_quads(nx: usize, ny: usize) -> (usize, Vec<u32>) {
    assert!(nx >= 1 && ny >= 1, "at least one cell per direction");
    let stride = (nx + 1) as u32;
    let mut cells = Vec::with_capacity(4 * nx * ny);
    for j in 0..ny as u32 {
        for i in 0..nx as u32 {
            let v00 = i + j * stride;
            cells.extend([v00, v00 + 1, v00 + stride, v00 + stride + 1]);
        }
    }
    ((nx + 1) * (ny + 1), cells)
}

/// `nx x ny x nz` grid of boxes, each split into six tetrahedra around the
/// main diagonal (Kuhn decomposition). `(nx+1)(ny+1)(nz+1)` vertices,
/// `6*nx*ny*nz` cells.
pub fn unit_cube_tetrahedra(nx: usize, ny: usize, nz: usize) -> (usize, Vec<u32>) {
    assert!(nx >= 1 && ny >= 1 && nz >= 1, "at least one cell per direction");
    let sx = (nx + 1) as u32;
    let sxy = sx * (ny + 1) as u32;
    // Vertex paths from (0,0,0) to (1,1,1), one per axis permutation.
    const PATHS: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];
    let mut cells = Vec::with_capacity(24 * nx * ny * nz);
    for k in 0..nz as u32 {
        for j in 0..ny as u32 {
            for i in 0..nx as u32 {
                let origin = i + j * sx + k * sxy;
                let step = [1, sx, sxy];
                for path in &PATHS {
                    let mut v = origin;
                    let mut tet = [v, 0, 0, 0];
                    for (slot, &axis) in path.iter().enumerate() {
                        v += step[axis];
                        tet[slot + 1] = v;
                    }
                    cells.extend(tet);
                }
            }
        }
    }
    ((nx + 1) * (ny + 1) * (nz + 1), cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::cell_type::CellType;
    use crate::topology::mesh_topology::MeshTopology;

    #[test]
    fn interval_chain() {
        let (nv, cells) = unit_interval(4);
        assert_eq!(nv, 5);
        assert_eq!(cells.len(), 8);
        MeshTopology::build(CellType::Interval, nv, &cells).unwrap();
    }

    #[test]
    fn triangle_grid_counts() {
        let (nv, cells) = unit_square_triangles(3, 2);
        assert_eq!(nv, 12);
        assert_eq!(cells.len() / 3, 12);
        let topo = MeshTopology::build(CellType::Triangle, nv, &cells).unwrap();
        // Euler characteristic of a disk: V - E + F = 1.
        let e = topo.num_entities(1).unwrap();
        assert_eq!(nv as i64 - e as i64 + 12, 1);
    }

    #[test]
    fn quad_grid_counts() {
        let (nv, cells) = unit_square_quads(2, 2);
        assert_eq!(nv, 9);
        assert_eq!(cells.len() / 4, 4);
        let topo = MeshTopology::build(CellType::Quadrilateral, nv, &cells).unwrap();
        assert_eq!(topo.num_entities(1).unwrap(), 12);
    }

    #[test]
    fn tet_grid_is_conforming() {
        let (nv, cells) = unit_cube_tetrahedra(1, 1, 1);
        assert_eq!(nv, 8);
        assert_eq!(cells.len() / 4, 6);
        let topo = MeshTopology::build(CellType::Tetrahedron, nv, &cells).unwrap();
        // One cube: 19 edges (12 box + 6 face diagonals + 1 body diagonal).
        assert_eq!(topo.num_entities(1).unwrap(), 19);
        // Every interior face is shared by exactly two tets.
        let fc = topo.connectivity(2, 3).unwrap();
        assert!(fc.rows().all(|r| r.len() == 1 || r.len() == 2));
    }
}
