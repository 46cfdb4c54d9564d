mod create_skill_service;
mod delete_skill_service;
mod endorse_skill_service;
mod get_skill_service;
mod list_skills_service;
mod remove_endorsement_service;
mod update_skill_service;

#[cfg(test)]
pub(crate) mod fakes;

pub use create_skill_service::CreateSkillService;
pub use delete_skill_service::DeleteSkillService;
pub use endorse_skill_service::EndorseSkillService;
pub use get_skill_service::GetSkillService;
pub use list_skills_service::ListSkillsService;
pub use remove_endorsement_service::RemoveEndorsementService;
pub use update_skill_service::UpdateSkillService;
