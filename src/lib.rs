pub mod angle;
pub mod body;
pub mod c_api;
pub mod config;
pub mod driver;
pub mod render;
pub mod scenario;
pub mod utils;
pub mod velocity;
pub mod world;

pub use angle::angle_of;
pub use body::{Body, Face, Flags, Size};
pub use config::PhysicalConstants;
pub use velocity::Velocity;
pub use world::World;
