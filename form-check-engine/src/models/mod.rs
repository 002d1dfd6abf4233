pub mod keypoint;
pub mod movement;
pub mod trajectory;

pub use keypoint::*;
pub use movement::*;
pub use trajectory::*;
