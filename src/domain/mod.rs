pub mod book;
pub mod contact;
