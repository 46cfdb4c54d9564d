pub mod sea_orm_entity;
mod talent_query_postgres;
mod talent_repository_postgres;

pub use talent_query_postgres::{load_talent_records, TalentQueryPostgres};
pub use talent_repository_postgres::TalentRepositoryPostgres;
