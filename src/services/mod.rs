pub mod password;
pub mod validators;
pub mod workflow;
