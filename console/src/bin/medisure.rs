//! MediSure Clinic billing console
//!
//! Creates, shows and clears the last patient bill.

use frontdesk_console::{telemetry, ClinicDesk, Config, Terminal};

fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    // Initialize tracing
    telemetry::init_tracing(&config.logging);

    let mut desk = ClinicDesk::new(&config);
    tracing::info!(
        environment = %config.environment,
        discount_percent = %desk.billing().discount_percent(),
        "Starting MediSure Clinic billing"
    );

    let stdin = std::io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), std::io::stdout());
    desk.run(&mut terminal)?;

    Ok(())
}
