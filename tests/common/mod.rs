//! Byte-level builders for small 3DS files

#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

pub const MAIN: u16 = 0x4D4D;
pub const EDITOR: u16 = 0x3D3D;
pub const NAMED_OBJECT: u16 = 0x4000;
pub const TRIANGLE_MESH: u16 = 0x4100;
pub const POINT_ARRAY: u16 = 0x4110;
pub const FACE_ARRAY: u16 = 0x4120;
pub const TEXEL_ARRAY: u16 = 0x4140;
pub const SMOOTH_GROUP: u16 = 0x4150;
/// An id no 3DS reader assigns meaning to
pub const UNKNOWN: u16 = 0x1234;

pub fn chunk(id: u16, body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(body.len() + 6);
    out.extend_from_slice(&id.to_le_bytes());
    out.extend_from_slice(&((body.len() + 6) as u32).to_le_bytes());
    out.extend_from_slice(body);
    out
}

/// A named object holding one triangle mesh
pub struct MeshBuilder {
    name: String,
    points: Vec<[f32; 3]>,
    texels: Option<Vec<[f32; 2]>>,
    faces: Vec<[u16; 3]>,
    smoothing: Option<Vec<u32>>,
    extra: Vec<Vec<u8>>,
}

impl MeshBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            points: Vec::new(),
            texels: None,
            faces: Vec::new(),
            smoothing: None,
            extra: Vec::new(),
        }
    }

    pub fn points(mut self, points: &[[f32; 3]]) -> Self {
        self.points = points.to_vec();
        self
    }

    pub fn texels(mut self, texels: &[[f32; 2]]) -> Self {
        self.texels = Some(texels.to_vec());
        self
    }

    pub fn faces(mut self, faces: &[[u16; 3]]) -> Self {
        self.faces = faces.to_vec();
        self
    }

    pub fn smoothing(mut self, groups: &[u32]) -> Self {
        self.smoothing = Some(groups.to_vec());
        self
    }

    /// Adds a chunk with no known meaning inside the mesh
    pub fn unknown_chunk(mut self, id: u16, body: &[u8]) -> Self {
        self.extra.push(chunk(id, body));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut mesh = Vec::new();

        let mut points = (self.points.len() as u16).to_le_bytes().to_vec();
        for p in &self.points {
            for v in p {
                points.extend_from_slice(&v.to_le_bytes());
            }
        }
        mesh.extend(chunk(POINT_ARRAY, &points));

        for extra in &self.extra {
            mesh.extend_from_slice(extra);
        }

        if let Some(texels) = &self.texels {
            let mut body = (texels.len() as u16).to_le_bytes().to_vec();
            for t in texels {
                for v in t {
                    body.extend_from_slice(&v.to_le_bytes());
                }
            }
            mesh.extend(chunk(TEXEL_ARRAY, &body));
        }

        let mut faces = (self.faces.len() as u16).to_le_bytes().to_vec();
        for f in &self.faces {
            for i in f {
                faces.extend_from_slice(&i.to_le_bytes());
            }
            faces.extend_from_slice(&0u16.to_le_bytes());
        }
        if let Some(groups) = &self.smoothing {
            let mut body = Vec::new();
            for g in groups {
                body.extend_from_slice(&g.to_le_bytes());
            }
            faces.extend(chunk(SMOOTH_GROUP, &body));
        }
        mesh.extend(chunk(FACE_ARRAY, &faces));

        let mut object = self.name.as_bytes().to_vec();
        object.push(0);
        object.extend(chunk(TRIANGLE_MESH, &mesh));
        chunk(NAMED_OBJECT, &object)
    }
}

/// Wraps objects (and any other editor chunks) in MAIN/EDITOR
pub fn file(editor_chunks: &[Vec<u8>]) -> Vec<u8> {
    let editor: Vec<u8> = editor_chunks.concat();
    chunk(MAIN, &chunk(EDITOR, &editor))
}

pub fn unit_triangle(name: &str) -> MeshBuilder {
    MeshBuilder::new(name)
        .points(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
        .faces(&[[0, 1, 2]])
}

/// Unit square in the XY plane split into two triangles
pub fn unit_quad(name: &str) -> MeshBuilder {
    MeshBuilder::new(name)
        .points(&[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ])
        .faces(&[[0, 1, 2], [0, 2, 3]])
}

pub fn write_temp(bytes: &[u8], suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(bytes).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
