use anyhow::Context;
use clap::Parser;
use staff_roster::utils::error::ErrorSeverity;
use staff_roster::utils::logger;
use staff_roster::{CliConfig, Console, JsonRosterStore, LocalStorage, Session, SessionOutcome};
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(cli.verbose, &config.logging.level);
    tracing::info!("Starting staff-roster");
    tracing::debug!("Effective config: {:?}", config);

    let store = JsonRosterStore::new(LocalStorage::default(), config.storage.path.clone())
        .with_pretty(config.storage.pretty);
    let console = Console::new(BufReader::new(tokio::io::stdin()), std::io::stdout());
    let mut session = Session::new(store, console, config.session.clone());

    match session.run().await {
        Ok(SessionOutcome::Saved) => {
            tracing::info!("Roster saved to {}", config.storage.path);
        }
        Ok(SessionOutcome::EndOfInput) => {
            tracing::info!("Input closed, roster not saved");
        }
        Err(e) if e.severity() == ErrorSeverity::Low => {
            tracing::warn!("Session ended: {}", e);
            println!("{}", e.user_friendly_message());
        }
        Err(e) => {
            tracing::error!(
                "Session failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    std::io::Write::flush(&mut std::io::stdout()).context("failed to flush stdout")?;
    Ok(())
}
