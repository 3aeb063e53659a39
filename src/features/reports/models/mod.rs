mod report;

pub use report::{Coords, Priority, Report, Reporter, Review, UpdateEntry};
