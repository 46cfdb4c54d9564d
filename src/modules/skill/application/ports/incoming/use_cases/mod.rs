mod create_skill;
mod delete_skill;
mod endorse_skill;
mod get_skill;
mod list_skills;
mod remove_endorsement;
mod update_skill;

pub use create_skill::{CreateSkillError, CreateSkillUseCase};
pub use delete_skill::{DeleteSkillError, DeleteSkillUseCase};
pub use endorse_skill::{EndorseOutcome, EndorseSkillError, EndorseSkillUseCase};
pub use get_skill::{GetSkillError, GetSkillUseCase};
pub use list_skills::{ListSkillsError, ListSkillsUseCase};
pub use remove_endorsement::{RemoveEndorsementError, RemoveEndorsementUseCase};
pub use update_skill::{UpdateSkillError, UpdateSkillUseCase};
