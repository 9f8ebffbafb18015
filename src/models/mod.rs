pub mod circuit;
pub mod driver;
pub mod error;
pub mod race;
pub mod standings;

pub use circuit::Circuit;
pub use driver::Driver;
pub use error::ApiError;
pub use race::{Race, RaceResult};
pub use standings::{ConstructorStanding, DriverStanding};
