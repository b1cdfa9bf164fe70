pub mod controllers;
pub mod dto;
mod error;
pub mod middleware;
pub mod state;
