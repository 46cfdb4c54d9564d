mod create_skill;
mod delete_skill;
mod endorse_skill;
mod get_skill;
mod list_skills;
mod remove_endorsement;
mod update_skill;

pub use create_skill::create_skill_handler;
pub use delete_skill::delete_skill_handler;
pub use endorse_skill::endorse_skill_handler;
pub use get_skill::get_skill_handler;
pub use list_skills::list_skills_handler;
pub use remove_endorsement::remove_endorsement_handler;
pub use update_skill::{patch_skill_handler, put_skill_handler};
