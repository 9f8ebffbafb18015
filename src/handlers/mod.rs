pub mod circuits;
pub mod drivers;
pub mod results;
pub mod schedule;
pub mod standings;
