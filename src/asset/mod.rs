//! # Asset Loading
//!
//! Turns a model file on disk into flat vertex attribute arrays ready for GPU
//! upload. Loading happens in two steps:
//!
//! 1. A format loader ([`three_ds`] through Assimp, or [`obj`] through
//!    `tobj`) reads the file into an owned [`ParsedScene`], a list of indexed
//!    triangle meshes.
//! 2. [`flatten`] consumes the scene and duplicates every face corner into
//!    three parallel arrays (positions, normals, texture coordinates).
//!
//! ```no_run
//! use viewer3ds::asset;
//!
//! let scene = asset::load_scene("models/teapot.3ds")?;
//! let buffers = asset::flatten(scene)?;
//! assert_eq!(buffers.vertex_count(), buffers.triangle_count() * 3);
//! # Ok::<(), viewer3ds::error::AssetError>(())
//! ```

pub mod flatten;
pub mod normals;
pub mod obj;
pub mod three_ds;

use std::path::Path;

use crate::error::{AssetError, Result};

pub use flatten::{count_faces, flatten, Bounds, FlatBuffers};
pub use obj::load_obj;
pub use three_ds::load_3ds;

/// A single triangle referencing three entries of its mesh's point list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub points: [u32; 3],
}

impl Face {
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self { points: [a, b, c] }
    }
}

/// An indexed triangle mesh as stored in the source file
#[derive(Debug, Clone, Default)]
pub struct ParsedMesh {
    pub name: String,
    pub points: Vec<[f32; 3]>,
    /// Per-point normals; empty when the source had none
    pub normals: Vec<[f32; 3]>,
    /// Per-point texture coordinates; empty when the mesh has none
    pub texels: Vec<[f32; 2]>,
    pub faces: Vec<Face>,
}

impl ParsedMesh {
    pub fn has_texels(&self) -> bool {
        !self.texels.is_empty()
    }

    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }
}

/// Owned result of reading a model file
///
/// Lives only until [`flatten`] consumes it.
#[derive(Debug, Clone, Default)]
pub struct ParsedScene {
    pub meshes: Vec<ParsedMesh>,
}

/// Loads a model, choosing the parser from the file extension
///
/// `.3ds` files go through Assimp in [`three_ds`], `.obj` files through
/// `tobj`. A path that does not exist fails with
/// [`AssetError::NotFound`] regardless of its extension.
pub fn load_scene(path: impl AsRef<Path>) -> Result<ParsedScene> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(AssetError::NotFound {
            path: path.display().to_string(),
        });
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "3ds" => load_3ds(path),
        "obj" => load_obj(path),
        _ => Err(AssetError::UnsupportedFormat { extension }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_not_found() {
        let result = load_scene("definitely/not/here.3ds");
        assert!(matches!(result, Err(AssetError::NotFound { .. })));
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let file = tempfile::Builder::new()
            .suffix(".stl")
            .tempfile()
            .unwrap();

        match load_scene(file.path()) {
            Err(AssetError::UnsupportedFormat { extension }) => assert_eq!(extension, "stl"),
            other => panic!("expected UnsupportedFormat, got {:?}", other),
        }
    }
}
