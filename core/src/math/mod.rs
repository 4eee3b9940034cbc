pub mod fit;
pub mod rotation;

pub use fit::GroundDistanceFit;
pub use rotation::Rotation2d;
