pub mod cv_layout;
pub mod filename;
