use std::{env, fs, path::PathBuf};

use lease::api::{
    ExecuteMsg, LeaserConfig,
    query::{PriceQuoteResponse, StatusResponse},
    receipt::Receipt,
};
use sdk::cosmwasm_schema::{export_schema, schema_for};

fn main() {
    let out_dir = prep_out_dir().expect("The output directory should be valid");
    export_schema(&schema_for!(LeaserConfig), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(StatusResponse), &out_dir);
    export_schema(&schema_for!(PriceQuoteResponse), &out_dir);
    export_schema(&schema_for!(Receipt), &out_dir);
}

fn prep_out_dir() -> std::io::Result<PathBuf> {
    let out_dir = env::current_dir()?.join("schema");
    fs::create_dir_all(&out_dir).map(|()| out_dir)
}
