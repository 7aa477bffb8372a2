pub mod gjk;
pub mod shapes;
pub mod simplex;
pub mod support;
pub mod support_ext;

pub use self::{
    gjk::{GjkError, Outcome, Settings, intersects, intersects_with},
    shapes::{Cuboid, Dimension, Disk, Shape, ShapeError, Sphere},
    support::SupportMap,
    support_ext::{MinkowskiDifference, SupportMapExt, Translate},
};
