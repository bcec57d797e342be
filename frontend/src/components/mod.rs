pub mod clock;
pub mod common;
pub mod layout;
pub mod message;
