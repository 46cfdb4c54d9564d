mod json_config;
pub mod payload;
mod response;

pub use json_config::{custom_json_config, custom_path_config, custom_query_config};
pub use response::{collect_field_errors, ApiError, ApiResponse, FieldErrors};
