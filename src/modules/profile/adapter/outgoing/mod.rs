mod profile_query_postgres;
mod profile_repository_postgres;
pub mod sea_orm_entity;

pub(crate) use profile_query_postgres::{apply_ordering, like_pattern};
pub use profile_query_postgres::{load_profile_details, ProfileQueryPostgres};
pub use profile_repository_postgres::ProfileRepositoryPostgres;
