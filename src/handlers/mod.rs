pub mod chat;
pub mod questions;
pub mod quiz_result;
pub mod status;
