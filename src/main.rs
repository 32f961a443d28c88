use anyhow::Result;
use clap::Parser;

use spendlog::config::{DataPaths, Settings};
use spendlog::storage::AccountStore;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Interactive personal expense tracker",
    long_about = "spendlog is a single-user expense tracker. It keeps one \
                  flat text file per account under ./data, tracks expenses \
                  and savings against a monthly budget, and exports monthly \
                  CSV reports."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let paths = DataPaths::new();
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = AccountStore::new(paths.data_dir());

    spendlog::cli::run(&store, &paths, &settings)?;
    Ok(())
}
