//! Corner normals for flattening
//!
//! Imported meshes normally carry per-point normals. A mesh without them
//! (an OBJ file with no `vn` lines) is shaded flat with its face normals.

use super::{Face, ParsedMesh};

/// Unit normal of a counter-clockwise triangle, zero for degenerate faces
pub fn face_normal(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> [f32; 3] {
    let edge1 = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    let edge2 = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];

    normalize([
        edge1[1] * edge2[2] - edge1[2] * edge2[1],
        edge1[2] * edge2[0] - edge1[0] * edge2[2],
        edge1[0] * edge2[1] - edge1[1] * edge2[0],
    ])
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let length = (v[0].powi(2) + v[1].powi(2) + v[2].powi(2)).sqrt();
    if length > f32::EPSILON {
        [v[0] / length, v[1] / length, v[2] / length]
    } else {
        [0.0; 3]
    }
}

/// Normals for the three corners of `face`
///
/// Returns `None` when a corner has no matching point or normal.
pub fn corner_normals(mesh: &ParsedMesh, face: &Face) -> Option<[[f32; 3]; 3]> {
    let [a, b, c] = face.points.map(|p| p as usize);

    if mesh.has_normals() {
        Some([
            *mesh.normals.get(a)?,
            *mesh.normals.get(b)?,
            *mesh.normals.get(c)?,
        ])
    } else {
        let n = face_normal(*mesh.points.get(a)?, *mesh.points.get(b)?, *mesh.points.get(c)?);
        Some([n; 3])
    }
}
