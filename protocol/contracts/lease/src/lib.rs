pub mod api;
pub mod error;
mod event;
pub mod finance;
pub mod lease;
pub mod leaser;
mod loan;
pub mod oracle;
mod position;
