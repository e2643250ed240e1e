use aura_lens::core::ConfigProvider;
use aura_lens::utils::{logger, validation::Validate};
use aura_lens::{AuraEngine, CliConfig, LocalStorage, SnapshotPipeline, TomlConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting aura-lens");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let outcome = match &cli.config {
        Some(path) => {
            let config = TomlConfig::from_file(path)?;
            if let Err(e) = config.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(3);
            }
            let monitor = config.monitoring_enabled() || cli.monitor;
            let storage = LocalStorage::new(config.output_path().to_string());
            let pipeline = SnapshotPipeline::new(storage, config);
            AuraEngine::new_with_monitoring(pipeline, monitor).run().await
        }
        None => {
            if let Err(e) = cli.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(3);
            }
            let monitor = cli.monitor;
            let storage = LocalStorage::new(cli.output_path.clone());
            let pipeline = SnapshotPipeline::new(storage, cli);
            AuraEngine::new_with_monitoring(pipeline, monitor).run().await
        }
    };

    match outcome {
        Ok(output_path) => {
            println!("✅ Aura rendered successfully!");
            println!("📁 Output saved to: {}", output_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Aura pipeline failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                aura_lens::utils::error::ErrorSeverity::Low => 0,
                aura_lens::utils::error::ErrorSeverity::Medium => 2,
                aura_lens::utils::error::ErrorSeverity::High => 1,
                aura_lens::utils::error::ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}
