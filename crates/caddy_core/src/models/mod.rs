pub mod clubs;
pub mod course;

pub use clubs::{ClubCapability, ClubDistanceTable};
pub use course::{Course, HOLE_COUNT};
