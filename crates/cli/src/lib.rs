pub mod scene;

pub use self::scene::{PairDesc, PairError, Scene, ShapeDesc};
