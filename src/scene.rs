use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use glam::DVec2;

use crate::{
    error::{Error, Result},
    mesh::UvMesh,
};

/// A mesh primitive read from a scene, with its uv layout if it has one.
#[derive(Debug)]
pub struct MeshPrimitive {
    pub name: String,
    /// `None` if the mesh has no texture coordinates. A mesh whose texture
    /// coordinates are malformed keeps the error, so the caller can decide
    /// what to do with it.
    pub uvs: Option<Result<UvMesh>>,
}

/// All mesh primitives of a scene, in file order.
#[derive(Debug, Default)]
pub struct Scene {
    pub meshes: Vec<MeshPrimitive>,
}

fn uv_mesh_from_obj(mesh: tobj::Mesh) -> Option<Result<UvMesh>> {
    if mesh.texcoords.is_empty() {
        return None;
    }
    let positions: Vec<DVec2> = mesh
        .texcoords
        .chunks_exact(2)
        .map(|uv| DVec2::new(f64::from(uv[0]), f64::from(uv[1])))
        .collect();
    let indices = mesh.texcoord_indices;
    Some(if mesh.face_arities.is_empty() {
        // tobj leaves the arities empty when every face is a triangle.
        UvMesh::uniform(3, indices, positions)
    } else {
        UvMesh::new(mesh.face_arities, indices, positions)
    })
}

impl Scene {
    fn from_models(models: Vec<tobj::Model>) -> Self {
        Scene {
            meshes: models
                .into_iter()
                .map(|model| MeshPrimitive {
                    name: model.name,
                    uvs: uv_mesh_from_obj(model.mesh),
                })
                .collect(),
        }
    }

    /// Load every object of a Wavefront OBJ file as a mesh primitive.
    pub fn load_obj(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::SceneLoadFailed {
            path: path.to_path_buf(),
            message: format!("{}", e),
        })?;
        Self::read_obj(&mut BufReader::new(file)).map_err(|e| match e {
            Error::SceneLoadFailed { message, .. } => Error::SceneLoadFailed {
                path: path.to_path_buf(),
                message,
            },
            e => e,
        })
    }

    /// Read a Wavefront OBJ file from any reader. Material libraries are not
    /// loaded.
    pub fn read_obj<R: BufRead>(reader: &mut R) -> Result<Self> {
        let options = tobj::LoadOptions::default();
        let (models, _) = tobj::load_obj_buf(reader, &options, |_| Ok(Default::default()))
            .map_err(|e| Error::SceneLoadFailed {
                path: Default::default(),
                message: format!("{}", e),
            })?;
        Ok(Self::from_models(models))
    }

    pub fn num_meshes(&self) -> usize {
        self.meshes.len()
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use glam::dvec2;

    use super::Scene;
    use crate::error::Error;

    const TWO_OBJECTS: &str = "\
o quad
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vt 0.0 0.0
vt 1.0 0.0
vt 1.0 1.0
vt 0.0 1.0
f 1/1 2/2 3/3 4/4
o no_uvs
v 0 0 1
v 1 0 1
v 0 1 1
f 5 6 7
";

    #[test]
    fn t_read_obj() {
        let scene = Scene::read_obj(&mut Cursor::new(TWO_OBJECTS)).unwrap();
        assert_eq!(scene.num_meshes(), 2);
        assert_eq!(scene.meshes[0].name, "quad");
        let uvs = scene.meshes[0].uvs.as_ref().unwrap().as_ref().unwrap();
        assert_eq!(uvs.face_vertex_counts(), &[4]);
        assert_eq!(uvs.uv_indices().len(), 4);
        assert_eq!(uvs.uv_positions().len(), 4);
        let face = uvs.faces().next().unwrap();
        assert_eq!(
            uvs.positions_of(face).collect::<Vec<_>>(),
            vec![
                dvec2(0.0, 0.0),
                dvec2(1.0, 0.0),
                dvec2(1.0, 1.0),
                dvec2(0.0, 1.0)
            ]
        );
        assert_eq!(scene.meshes[1].name, "no_uvs");
        assert!(scene.meshes[1].uvs.is_none());
    }

    #[test]
    fn t_read_triangles() {
        let obj = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 1 1 0
vt 0.1 0.1
vt 0.9 0.1
vt 0.1 0.9
vt 0.9 0.9
f 1/1 2/2 3/3
f 3/3 2/2 4/4
";
        let scene = Scene::read_obj(&mut Cursor::new(obj)).unwrap();
        assert_eq!(scene.num_meshes(), 1);
        let uvs = scene.meshes[0].uvs.as_ref().unwrap().as_ref().unwrap();
        assert_eq!(uvs.num_faces(), 2);
        assert_eq!(uvs.face_vertex_counts(), &[3, 3]);
    }

    #[test]
    fn t_missing_file() {
        let path = std::env::temp_dir().join("uvcheck_this_file_does_not_exist.obj");
        assert!(matches!(
            Scene::load_obj(&path),
            Err(Error::SceneLoadFailed { .. })
        ));
    }

    #[test]
    fn t_malformed_obj() {
        let obj = "\
v 0 zero 0
v 1 0 0
v 0 1 0
f 1 2 3
";
        assert!(matches!(
            Scene::read_obj(&mut Cursor::new(obj)),
            Err(Error::SceneLoadFailed { .. })
        ));
    }
}
