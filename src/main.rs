use clap::Parser;
use seller_stats::core::ConfigProvider;
use seller_stats::utils::{logger, validation::Validate};
use seller_stats::{CliConfig, Session};
use std::io;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.load().and_then(|c| {
        c.validate()?;
        Ok(c)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Writing reports to {} (quit token '{}')",
        config.output_path(),
        config.quit_token()
    );

    let mut session = Session::from_config(io::stdin().lock(), io::stdout(), &config);

    if let Err(e) = session.run().await {
        // Only terminal I/O and report writes get here; bad numbers are re-prompted.
        tracing::error!("❌ Session aborted: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    Ok(())
}
