//! The domain module encapsulates the core business logic. It defines the `Rover` and
//! `LandingZone` entities, along with the rules governing their movement and rotation.
//!
//! By minimizing hard dependencies, this module ensures the business logic remains adaptable and
//! independent of specific implementation details.

mod direction;
mod landing_zone;
mod rover;

pub use direction::{Control, DirectionError, Heading};
pub use landing_zone::LandingZone;
pub use rover::{Rover, RoverError};
