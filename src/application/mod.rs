pub mod articles;
pub mod dto;
pub mod error;
pub mod ports;

pub use error::{ApplicationError, ApplicationResult};
