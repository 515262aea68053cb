pub use cosmwasm_std;
#[cfg(feature = "schema")]
pub use cosmwasm_schema::{self, schemars};
