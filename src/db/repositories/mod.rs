pub mod constraints;
pub mod departments;
pub mod person_skills;
pub mod personnel;
pub mod populations;
pub mod positions;
pub mod schedule;
pub mod skills;

// Case-insensitive name uniqueness is checked with LOWER(), matching the
// unique indexes in the migrations.
diesel::sql_function! {
    fn lower(x: diesel::sql_types::Text) -> diesel::sql_types::Text;
}
