pub mod bank;
pub mod batch;
mod emit;
pub mod error;
pub mod wait;
