mod create_talent_service;
mod delete_talent_service;
mod get_talent_service;
mod list_talents_service;
mod update_talent_service;

#[cfg(test)]
pub(crate) mod fakes;

pub use create_talent_service::CreateTalentService;
pub use delete_talent_service::DeleteTalentService;
pub use get_talent_service::GetTalentService;
pub use list_talents_service::ListTalentsService;
pub use update_talent_service::UpdateTalentService;
