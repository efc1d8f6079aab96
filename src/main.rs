use std::io::{stdin, stdout};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use budget_cli::cli::MenuSession;
use budget_cli::config::{paths::BudgetPaths, settings::Settings};
use budget_cli::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Terminal-based monthly budget and expense tracker",
    long_about = "A personal budget tracker for the terminal. Set a monthly \
                  budget, record expenses as you go, and check spending \
                  status and per-category summaries from an interactive menu."
)]
struct Cli {
    /// Override the data directory (defaults to ~/.config/budget-cli)
    #[arg(long, env = "BUDGET_CLI_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => BudgetPaths::with_base_dir(dir),
        None => BudgetPaths::new()?,
    };

    let settings = Settings::load_or_create(&paths)?;

    // Create the stores on first run; never overwrites existing data
    initialize_storage(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }

    let storage = Storage::new(paths)?;

    let stdin = stdin();
    let mut input = stdin.lock();
    let mut output = stdout();

    MenuSession::new(&storage, &settings).run(&mut input, &mut output)?;

    Ok(())
}
