//! Writes the OpenAPI document to disk for client generation.
//!
//! ```text
//! cargo run -p accounts_api --bin gen_openapi -- --output docs/openapi.json
//! ```

use accounts_api::openapi::write_openapi;
use clap::Parser;
use core_config::tracing::install_color_eyre;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Generate the Accounts API OpenAPI document")]
struct Args {
    /// Destination file
    #[arg(short, long, default_value = "docs/openapi.json")]
    output: PathBuf,
}

fn main() -> eyre::Result<()> {
    install_color_eyre();
    let args = Args::parse();

    write_openapi(&args.output)?;

    println!("openapi.json updated");
    Ok(())
}
