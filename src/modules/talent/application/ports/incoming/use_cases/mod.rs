mod create_talent;
mod delete_talent;
mod get_talent;
mod list_talents;
mod update_talent;

pub use create_talent::{CreateTalentError, CreateTalentUseCase};
pub use delete_talent::{DeleteTalentError, DeleteTalentUseCase};
pub use get_talent::{GetTalentError, GetTalentUseCase};
pub use list_talents::{ListTalentsError, ListTalentsUseCase};
pub use update_talent::{UpdateTalentError, UpdateTalentUseCase};
