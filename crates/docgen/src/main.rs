//! docgen command line entry point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `docgen` / `docgen serve` | Load the model and serve the HTTP API |
//! | `docgen generate --file app.py` | Document one file and print the results |
//! | `docgen providers` | List registered adapters and stores |

// Force-link docgen-providers so its registry entries are included
extern crate docgen_providers;

use clap::Parser;
use docgen_server::{Cli, run};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Cli::parse()).await
}
