pub mod client;
pub mod debt;
pub mod reminder;
