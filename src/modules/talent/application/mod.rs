pub mod domain;
pub mod ports;
pub mod service;
pub mod talent_use_cases;
