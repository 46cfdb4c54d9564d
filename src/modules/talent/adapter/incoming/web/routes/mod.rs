mod create_talent;
mod delete_talent;
mod get_talent;
mod list_talents;
mod update_talent;

pub use create_talent::create_talent_handler;
pub use delete_talent::delete_talent_handler;
pub use get_talent::get_talent_handler;
pub use list_talents::list_talents_handler;
pub use update_talent::{patch_talent_handler, put_talent_handler};
