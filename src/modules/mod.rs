pub mod admin;
pub mod auth;
pub mod document;
pub mod profile;
pub mod skill;
pub mod talent;
