pub mod constraint;
pub mod department;
pub mod person;
pub mod position;
pub mod schedule;
