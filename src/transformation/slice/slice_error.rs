use crate::query::BisectError;

#[cfg(doc)]
use crate::transformation::{slice_mesh, SliceParameters};

/// Errors that can occur when slicing a mesh with [`slice_mesh`].
///
/// The mesh is left unmodified when one of these is returned: parameters, mesh and plane are
/// all checked before anything is changed.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SliceError {
    /// The bisection of the mesh failed.
    #[error(transparent)]
    Bisect(#[from] BisectError),
    /// One of the [`SliceParameters`] has an unusable value.
    #[error("invalid slice parameter `{name}`: {reason}")]
    InvalidParameter {
        /// The name of the offending field.
        name: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}
