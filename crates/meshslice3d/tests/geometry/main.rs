mod cube_slice;
mod meshes;
mod slice_properties;
mod tetrahedron_slice;
