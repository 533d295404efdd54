pub mod entities;
pub mod media_identifier;
pub mod policies;
pub mod reconciliation;
