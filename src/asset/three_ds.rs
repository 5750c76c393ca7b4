//! 3DS import through Assimp
//!
//! Assimp reads the chunk tree, applies the file's smoothing groups to build
//! per-vertex normals and hands back one mesh per object and material. This
//! module only copies those meshes into a [`ParsedScene`].

use std::path::Path;

use asset_importer::{postprocess::PostProcessSteps, Importer};
use log::debug;

use super::{Face, ParsedMesh, ParsedScene};
use crate::error::{AssetError, Result};

/// Post-processing requested from Assimp for every import
///
/// Smooth normals are only generated for meshes the 3DS reader left without
/// normals.
pub fn import_steps() -> PostProcessSteps {
    PostProcessSteps::TRIANGULATE | PostProcessSteps::GEN_SMOOTH_NORMALS
}

/// Imports a `.3ds` file
///
/// A missing path is [`AssetError::NotFound`]; anything Assimp refuses to
/// read is [`AssetError::Malformed`].
pub fn load_3ds(path: impl AsRef<Path>) -> Result<ParsedScene> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(AssetError::NotFound {
            path: path.display().to_string(),
        });
    }

    let imported = Importer::new()
        .read_file(path)
        .with_post_process(import_steps())
        .import()
        .map_err(|e| AssetError::malformed(format!("{}: {}", path.display(), e)))?;

    let mut scene = ParsedScene::default();
    for mesh in imported.meshes() {
        let points: Vec<[f32; 3]> = mesh
            .vertices_raw()
            .iter()
            .map(|v| [v.x, v.y, v.z])
            .collect();

        let normals: Vec<[f32; 3]> = mesh
            .normals()
            .map(|normals| normals.iter().map(|n| [n.x, n.y, n.z]).collect())
            .unwrap_or_default();

        let texels: Vec<[f32; 2]> = mesh
            .texture_coords(0)
            .map(|uvs| uvs.iter().map(|t| [t.x, t.y]).collect())
            .unwrap_or_default();

        let faces: Vec<Face> = mesh
            .triangles_iter()
            .map(|[a, b, c]| Face::new(a, b, c))
            .collect();

        scene.meshes.push(ParsedMesh {
            name: mesh.name().to_string(),
            points,
            normals,
            texels,
            faces,
        });
    }

    debug!(
        "Imported {:?}: {} meshes, {} faces",
        path,
        scene.meshes.len(),
        super::count_faces(&scene)
    );
    Ok(scene)
}
