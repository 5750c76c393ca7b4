//! Wavefront OBJ loading through `tobj`

use std::path::Path;

use log::{debug, warn};

use super::{Face, ParsedMesh, ParsedScene};
use crate::error::{AssetError, Result};

/// Loads an OBJ file into the same indexed form the 3DS import produces
///
/// Normals are kept when the file has one per vertex; otherwise the model
/// is shaded flat.
pub fn load_obj(path: impl AsRef<Path>) -> Result<ParsedScene> {
    let path = path.as_ref();
    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )
    .map_err(|e| match e {
        tobj::LoadError::OpenFileFailed => AssetError::NotFound {
            path: path.display().to_string(),
        },
        other => AssetError::malformed(format!("{}: {}", path.display(), other)),
    })?;

    let mut scene = ParsedScene::default();

    for model in models {
        let mesh = model.mesh;

        if mesh.indices.len() % 3 != 0 {
            warn!(
                "OBJ model '{}' has {} indices, dropping the incomplete triangle",
                model.name,
                mesh.indices.len()
            );
        }

        let points = mesh
            .positions
            .chunks_exact(3)
            .map(|p| [p[0], p[1], p[2]])
            .collect::<Vec<_>>();

        // Attributes only line up with positions when tobj produced one per vertex
        let normals = if mesh.normals.len() == mesh.positions.len() {
            mesh.normals
                .chunks_exact(3)
                .map(|n| [n[0], n[1], n[2]])
                .collect()
        } else {
            Vec::new()
        };

        let texels = if mesh.texcoords.len() / 2 == points.len() {
            mesh.texcoords
                .chunks_exact(2)
                .map(|t| [t[0], t[1]])
                .collect()
        } else {
            Vec::new()
        };

        let faces = mesh
            .indices
            .chunks_exact(3)
            .map(|tri| Face::new(tri[0], tri[1], tri[2]))
            .collect::<Vec<_>>();

        debug!(
            "OBJ model '{}': {} points, {} faces, normals: {}, texels: {}",
            model.name,
            points.len(),
            faces.len(),
            !normals.is_empty(),
            !texels.is_empty()
        );

        scene.meshes.push(ParsedMesh {
            name: model.name,
            points,
            normals,
            texels,
            faces,
        });
    }

    Ok(scene)
}
