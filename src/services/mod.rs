pub mod constraints_service;
pub mod departments_service;
pub mod person_skills_service;
pub mod personnel_service;
pub mod populations_service;
pub mod positions_service;
pub mod schedule_service;
pub mod skills_service;
