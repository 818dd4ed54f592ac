pub mod chat;
pub mod contact;
pub mod user;
