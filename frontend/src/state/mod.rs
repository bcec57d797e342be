pub mod admin;
pub mod message;
