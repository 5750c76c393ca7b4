mod common;

use approx::assert_relative_eq;
use common::*;
use viewer3ds::{asset, AssetError};

#[cfg(test)]
mod loading_tests {
    use super::*;

    #[test]
    fn test_buffers_are_three_per_triangle() {
        let bytes = file(&[unit_quad("quad").build(), unit_triangle("tri").build()]);
        let tmp = write_temp(&bytes, ".3ds");

        let scene = asset::load_scene(tmp.path()).unwrap();
        assert_eq!(asset::count_faces(&scene), 3);

        let buffers = asset::flatten(scene).unwrap();
        assert_eq!(buffers.triangle_count(), 3);
        assert_eq!(buffers.positions.len(), 9);
        assert_eq!(buffers.normals.len(), 9);
    }

    #[test]
    fn test_no_texels_means_no_tex_coords() {
        let tmp = write_temp(&file(&[unit_triangle("tri").build()]), ".3ds");
        let buffers = asset::flatten(asset::load_scene(tmp.path()).unwrap()).unwrap();
        assert!(buffers.tex_coords.is_none());
        assert!(!buffers.has_tex_coords());
    }

    #[test]
    fn test_texels_follow_face_corners() {
        let mesh = unit_quad("quad").texels(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        let tmp = write_temp(&file(&[mesh.build()]), ".3ds");
        let buffers = asset::flatten(asset::load_scene(tmp.path()).unwrap()).unwrap();

        let uvs = buffers.tex_coords.unwrap();
        assert_eq!(uvs.len(), 6);
        assert_eq!(uvs[2], [1.0, 1.0]);
        assert_eq!(uvs[5], [0.0, 1.0]);
    }

    #[test]
    fn test_meshes_keep_file_order() {
        let far = MeshBuilder::new("far")
            .points(&[[5.0, 0.0, 0.0], [6.0, 0.0, 0.0], [5.0, 1.0, 0.0]])
            .faces(&[[0, 1, 2]]);
        let tmp = write_temp(&file(&[unit_triangle("near").build(), far.build()]), ".3ds");

        let scene = asset::load_scene(tmp.path()).unwrap();
        assert_eq!(scene.meshes.len(), 2);

        let buffers = asset::flatten(scene).unwrap();
        assert_eq!(buffers.positions[0], [0.0, 0.0, 0.0]);
        assert_eq!(buffers.positions[3], [5.0, 0.0, 0.0]);
    }

    #[test]
    fn test_unknown_chunks_are_skipped() {
        let mesh = unit_triangle("tri").unknown_chunk(UNKNOWN, &[0u8; 12]);
        let stray = chunk(UNKNOWN, &[1, 2, 3, 4]);
        let tmp = write_temp(&file(&[stray, mesh.build()]), ".3ds");

        let buffers = asset::flatten(asset::load_scene(tmp.path()).unwrap()).unwrap();
        assert_eq!(buffers.triangle_count(), 1);
    }

    #[test]
    fn test_planar_mesh_normals_are_perpendicular() {
        let tmp = write_temp(&file(&[unit_quad("quad").build()]), ".3ds");
        let buffers = asset::flatten(asset::load_scene(tmp.path()).unwrap()).unwrap();
        assert_eq!(buffers.normals.len(), 6);
        for n in buffers.normals {
            assert_relative_eq!(n[0], 0.0, epsilon = 1e-5);
            assert_relative_eq!(n[1], 0.0, epsilon = 1e-5);
            assert_relative_eq!(n[2].abs(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_smoothing_groups_average_shared_corners() {
        // Two faces folded 90 degrees along the X axis
        let mesh = MeshBuilder::new("fold")
            .points(&[
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, -1.0],
            ])
            .faces(&[[0, 1, 2], [0, 1, 3]])
            .smoothing(&[1, 1]);
        let tmp = write_temp(&file(&[mesh.build()]), ".3ds");
        let buffers = asset::flatten(asset::load_scene(tmp.path()).unwrap()).unwrap();

        let shared = buffers.normals[0];
        let half = std::f32::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(shared[1], half, epsilon = 1e-5);
        assert_relative_eq!(shared[2], half, epsilon = 1e-5);
    }
}

#[cfg(test)]
mod failure_tests {
    use super::*;

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nothing-here.3ds");
        assert!(matches!(
            asset::load_scene(&path),
            Err(AssetError::NotFound { .. })
        ));
    }

    #[test]
    fn test_foreign_content_is_malformed() {
        let tmp = write_temp(&[0xAB; 8], ".3ds");
        assert!(matches!(
            asset::load_scene(tmp.path()),
            Err(AssetError::Malformed { .. })
        ));
    }

    #[test]
    fn test_other_extensions_are_rejected() {
        let tmp = write_temp(b"solid nothing", ".stl");
        assert!(matches!(
            asset::load_scene(tmp.path()),
            Err(AssetError::UnsupportedFormat { .. })
        ));
    }
}
