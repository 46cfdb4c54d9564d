mod endorsement_repository_postgres;
pub mod sea_orm_entity;
mod skill_query_postgres;
mod skill_repository_postgres;

pub use endorsement_repository_postgres::EndorsementRepositoryPostgres;
pub use skill_query_postgres::{load_skill_views, SkillQueryPostgres};
pub use skill_repository_postgres::SkillRepositoryPostgres;
