pub mod login_form;
pub mod roster;
pub mod stats;
