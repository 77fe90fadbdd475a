use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use rfandom::app::FandomApp;
use rfandom::config::Config;
use rfandom::fandom::FandomState;
use rfandom::logging::init_tracing;
use rfandom::view;

#[derive(Parser, Debug)]
#[command(name = "rfandom", version, about = "Browse the wiki list one batch at a time")]
struct Cli {
    /// Config file (default: ~/.config/rfandom/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Wikis per batch
    #[arg(long, value_name = "N")]
    per_page: Option<u32>,

    /// List URL template with two %d placeholders (page size, batch)
    #[arg(long, value_name = "TEMPLATE")]
    api_url: Option<String>,

    /// Load N more batches after the first one, then exit
    #[arg(long, value_name = "N")]
    pages: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(log_file) = init_tracing() {
        eprintln!("Logging to {}", log_file.display());
    }

    let config = load_config(&cli)?;
    let app = FandomApp::from_config(&config).context("Failed to set up HTTP client")?;

    let shown = Arc::new(AtomicUsize::new(0));
    render(&app.state().get(), &shown);

    let subscriber_shown = Arc::clone(&shown);
    let subscription = app
        .state()
        .subscribe(move |state: &FandomState| render(state, &subscriber_shown));

    match cli.pages {
        Some(pages) => {
            for _ in 0..pages {
                app.next_page();
            }
        }
        None => run_interactive(&app)?,
    }

    subscription.unsubscribe();
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let config = apply_overrides(config, cli);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(per_page) = cli.per_page {
        config.api.per_page = per_page;
    }
    if let Some(url) = &cli.api_url {
        config.api.url = url.clone();
    }
    config
}

fn render(state: &FandomState, shown: &AtomicUsize) {
    let rows = view::new_rows(state, shown.load(Ordering::SeqCst));
    shown.store(state.wikis.len(), Ordering::SeqCst);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for row in rows {
        let _ = writeln!(out, "{}", row);
    }
    let _ = writeln!(out, "{}", view::footer(state));
    let _ = out.flush();
}

fn run_interactive(app: &FandomApp) -> anyhow::Result<()> {
    let stdin = io::stdin();
    prompt();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        match line.trim() {
            "q" | "quit" => break,
            "" | "n" | "next" => app.next_page(),
            other => println!("Unknown command '{}'", other),
        }
        prompt();
    }
    Ok(())
}

fn prompt() {
    print!("[Enter] next page, [q] quit > ");
    let _ = io::stdout().flush();
}
