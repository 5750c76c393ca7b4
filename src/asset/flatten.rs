//! Flattening of indexed meshes into per-corner attribute arrays
//!
//! Every face corner is copied out, so shared points are duplicated. The
//! resulting arrays are drawn as a plain triangle list without an index
//! buffer.

use log::debug;

use super::{normals::corner_normals, ParsedScene};
use crate::error::{AssetError, Result};

/// Three parallel attribute arrays, one entry per face corner
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatBuffers {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    /// `None` when no mesh in the source carried texture coordinates
    pub tex_coords: Option<Vec<[f32; 2]>>,
}

impl FlatBuffers {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn has_tex_coords(&self) -> bool {
        self.tex_coords.is_some()
    }

    /// Axis-aligned bounds of all positions, `None` for an empty model
    pub fn bounds(&self) -> Option<Bounds> {
        let first = *self.positions.first()?;
        let mut bounds = Bounds {
            min: first,
            max: first,
        };
        for p in &self.positions[1..] {
            for axis in 0..3 {
                bounds.min[axis] = bounds.min[axis].min(p[axis]);
                bounds.max[axis] = bounds.max[axis].max(p[axis]);
            }
        }
        Some(bounds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl Bounds {
    pub fn center(&self) -> [f32; 3] {
        [
            (self.min[0] + self.max[0]) * 0.5,
            (self.min[1] + self.max[1]) * 0.5,
            (self.min[2] + self.max[2]) * 0.5,
        ]
    }

    /// Length of the longest box edge
    pub fn extent(&self) -> f32 {
        (0..3)
            .map(|axis| self.max[axis] - self.min[axis])
            .fold(0.0, f32::max)
    }

    /// Uniform scale that makes the longest edge equal `target`
    ///
    /// Returns 1.0 for a point-sized model.
    pub fn fit_scale(&self, target: f32) -> f32 {
        let extent = self.extent();
        if extent > 1e-9 {
            target / extent
        } else {
            1.0
        }
    }
}

/// Total triangle count across every mesh in the scene
pub fn count_faces(scene: &ParsedScene) -> usize {
    scene.meshes.iter().map(|mesh| mesh.faces.len()).sum()
}

/// Consumes a parsed scene and builds the flat attribute arrays
///
/// Meshes are visited in order, then faces, then the three corners of each
/// face. Texture coordinates are only produced when at least one mesh has
/// texels; meshes without them contribute `[0, 0]` in that case.
pub fn flatten(scene: ParsedScene) -> Result<FlatBuffers> {
    let total_faces = count_faces(&scene);
    let textured = scene.meshes.iter().any(|mesh| mesh.has_texels());

    let mut positions = Vec::with_capacity(total_faces * 3);
    let mut normals = Vec::with_capacity(total_faces * 3);
    let mut tex_coords = textured.then(|| Vec::with_capacity(total_faces * 3));

    for mesh in &scene.meshes {
        for (face_idx, face) in mesh.faces.iter().enumerate() {
            for &p in &face.points {
                let position = mesh.points.get(p as usize).ok_or_else(|| {
                    AssetError::malformed(format!(
                        "mesh '{}' face {} references point {} of {}",
                        mesh.name,
                        face_idx,
                        p,
                        mesh.points.len()
                    ))
                })?;
                positions.push(*position);

                if let Some(tex_coords) = tex_coords.as_mut() {
                    if mesh.has_texels() {
                        let texel = mesh.texels.get(p as usize).ok_or_else(|| {
                            AssetError::malformed(format!(
                                "mesh '{}' has {} texels but face {} uses point {}",
                                mesh.name,
                                mesh.texels.len(),
                                face_idx,
                                p
                            ))
                        })?;
                        tex_coords.push(*texel);
                    } else {
                        tex_coords.push([0.0, 0.0]);
                    }
                }
            }

            let corners = corner_normals(mesh, face).ok_or_else(|| {
                AssetError::malformed(format!(
                    "mesh '{}' has {} normals for {} points",
                    mesh.name,
                    mesh.normals.len(),
                    mesh.points.len()
                ))
            })?;
            normals.extend(corners);
        }
    }

    debug!(
        "Flattened {} meshes into {} triangles (texture coordinates: {})",
        scene.meshes.len(),
        total_faces,
        textured
    );

    // The parsed scene is released here; only the flat arrays survive
    drop(scene);

    Ok(FlatBuffers {
        positions,
        normals,
        tex_coords,
    })
}
