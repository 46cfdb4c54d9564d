pub mod talent_query;
pub mod talent_repository;

pub use talent_query::{TalentQuery, TalentQueryError};
pub use talent_repository::{TalentRepository, TalentRepositoryError};
