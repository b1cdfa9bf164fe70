pub mod token_dto;
pub mod webhook_dto;
