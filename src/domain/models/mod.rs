pub mod book;
pub mod token;
pub mod webhook;
