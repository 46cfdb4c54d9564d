pub mod completion;
pub mod entities;
pub mod listing;
pub mod recommendation;
