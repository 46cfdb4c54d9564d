pub mod endorsement_repository;
pub mod skill_query;
pub mod skill_repository;

pub use endorsement_repository::{EndorsementRepository, EndorsementRepositoryError};
pub use skill_query::{SkillQuery, SkillQueryError};
pub use skill_repository::{SkillRepository, SkillRepositoryError};
