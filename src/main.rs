use anyhow::Context;
use clap::Parser;
use queue_trigger::utils::logger;
use queue_trigger::{AwsClients, CliArgs, TriggerEngine, TriggerError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting queue-trigger CLI");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    // 載入並驗證配置
    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let clients = AwsClients::load(&config.region).await;
    let engine = TriggerEngine::new(
        clients.queue_depth(),
        clients.worker_controller(&config),
        config,
    )
    .with_dry_run(args.dry_run);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no task will be launched");
        let outcome = match engine.evaluate().await {
            Ok(outcome) => outcome,
            Err(e) => exit_with(&e),
        };
        let report =
            serde_json::to_string_pretty(&outcome).context("Failed to serialize trigger outcome")?;
        println!("{}", report);
        return Ok(());
    }

    match engine.run(&args.request()).await {
        Ok(response) => {
            let body = serde_json::to_string(&response).context("Failed to serialize response")?;
            println!("{}", body);
            Ok(())
        }
        Err(e) => exit_with(&e),
    }
}

fn exit_with(e: &TriggerError) -> ! {
    tracing::error!(
        "❌ Trigger failed: {} (Category: {:?})",
        e,
        e.category()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
