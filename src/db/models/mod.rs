pub mod constraint;
pub mod department;
pub mod person;
pub mod person_skill;
pub mod population;
pub mod position;
pub mod schedule;
pub mod skill;

pub use constraint::*;
pub use department::*;
pub use person::*;
pub use person_skill::*;
pub use population::*;
pub use position::*;
pub use schedule::*;
pub use skill::*;
