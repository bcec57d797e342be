pub mod admin;
pub mod check_in;

pub use admin::AdminPanel;
pub use check_in::CheckInPage;
