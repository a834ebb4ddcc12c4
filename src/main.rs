use anyhow::Error;
use clap::Parser;
use tracing::error;

use args::Args;
use clients::llama::get_generated_response;
use output::{write_prompt, write_response};
use utils::build_prompt;

mod args;
mod clients;
mod config;
mod models;
mod output;
mod utils;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "exemplar=info".to_string())
        )
        .init();
    let args = Args::parse();

    let prompt = build_prompt(&args.words);

    let mut stdout = std::io::stdout();
    write_prompt(&mut stdout, &prompt)?;

    let response = match get_generated_response(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to get generated response from Llama API: {}", e);
            return Err(e);
        }
    };
    write_response(&mut stdout, &response)?;

    Ok(())
}
