use anyhow::Context;
use clap::Parser;

mod cli;
mod logging;
mod render;

use cli::{App, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level());

    let app = App::new(&cli.store_config(), &cli.provider_config())
        .await
        .with_context(|| format!("failed to open {:?} storage", cli.storage))?;
    let output = app.run(cli.command).await?;
    println!("{}", output);

    Ok(())
}
