use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use podshelf::app::{self, App};
use podshelf::catalog::Catalog;
use podshelf::config::Cli;
use podshelf::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file, &cli.log_level).context("setting up logging")?;

    let catalog = match &cli.data {
        Some(path) => Catalog::from_file(path)
            .with_context(|| format!("loading dataset {}", path.display()))?,
        None => Catalog::builtin().context("loading built-in dataset")?,
    };
    info!("Loaded {} podcasts", catalog.podcasts.len());

    let app = App::new(catalog, cli.columns());

    if cli.list {
        for card in app.grid.cards() {
            println!("{}", card.content());
        }
        return Ok(());
    }

    app::start_ui(app)
}
