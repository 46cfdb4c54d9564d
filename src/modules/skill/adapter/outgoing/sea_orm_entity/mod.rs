pub mod skill_endorsements;
pub mod skills;
