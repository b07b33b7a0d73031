pub mod constraints;
pub mod departments;
pub mod personnel;
pub mod positions;
pub mod schedule;
