//! QuickMart Traders sales console
//!
//! Records a sale and reports profit or loss on it.

use frontdesk_console::{telemetry, Config, MartCounter, Terminal};

fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    // Initialize tracing
    telemetry::init_tracing(&config.logging);

    tracing::info!(environment = %config.environment, "Starting QuickMart Traders");

    let stdin = std::io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), std::io::stdout());
    MartCounter::new(&config).run(&mut terminal)?;

    Ok(())
}
