use crate::shape::PolyMesh;
use obj::{Group, IndexTuple, ObjData, ObjError, Object, SimplePolygon};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

impl PolyMesh {
    /// Outputs a Wavefront (`.obj`) file at the given path.
    ///
    /// Faces are written as polygons with any number of vertices. Edges not used by any
    /// face are not written.
    ///
    /// This function is enabled by the `wavefront` feature flag.
    pub fn to_obj_file(&self, path: impl AsRef<Path>) -> Result<(), ObjError> {
        let mut file = BufWriter::new(File::create(path)?);

        ObjData {
            #[allow(clippy::unnecessary_cast)]
            position: self
                .vertices()
                .iter()
                .map(|v| [v.x as f32, v.y as f32, v.z as f32])
                .collect(),
            objects: vec![Object {
                groups: vec![Group {
                    polys: self
                        .faces()
                        .iter()
                        .map(|face| {
                            SimplePolygon(
                                face.iter()
                                    .map(|i| IndexTuple(*i as usize, None, None))
                                    .collect(),
                            )
                        })
                        .collect(),
                    name: String::new(),
                    index: 0,
                    material: None,
                }],
                name: "sliced".to_string(),
            }],
            ..Default::default()
        }
        .write_to_buf(&mut file)
    }
}
