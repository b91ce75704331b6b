use anyhow::Context;
use clap::Parser;
use portfolio_site::core::ConfigProvider;
use portfolio_site::utils::error::ErrorSeverity;
use portfolio_site::utils::logger::{self, LogFormat};
use portfolio_site::utils::validation::Validate;
use portfolio_site::{
    CliConfig, DiagnosticPolicy, LocalStorage, SiteEngine, SiteError, SiteOutcome, SitePipeline,
    SiteToml,
};

async fn run_site<C: ConfigProvider + Validate>(
    config: C,
    dry_run: bool,
) -> Result<SiteOutcome, SiteError> {
    config.validate()?;

    let policy = if config.strict() {
        tracing::info!("🔒 Strict mode: diagnostics fail the run");
        DiagnosticPolicy::Strict
    } else {
        DiagnosticPolicy::LogAndContinue
    };

    let storage = LocalStorage::new(config.output_path());
    let engine = SiteEngine::new_with_policy(SitePipeline::new(storage, config), policy);

    if dry_run {
        engine.dry_run().await
    } else {
        engine.run().await
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_cli_logger(cli.verbose, format);

    tracing::info!("🚀 Starting portfolio-site");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut site = SiteToml::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?;
            site.apply_cli_overrides(&cli);
            run_site(site, cli.dry_run).await
        }
        None => run_site(cli.clone(), cli.dry_run).await,
    };

    match result {
        Ok(outcome) => {
            if !outcome.report.is_clean() {
                println!(
                    "⚠️ {} integrity diagnostic(s), see log above",
                    outcome.report.len()
                );
            }
            match outcome.output_path {
                Some(path) => {
                    tracing::info!("✅ Site rendered to: {}", path);
                    println!("✅ Site rendered to: {}", path);
                }
                None => println!("✅ Dry run finished, nothing written"),
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Site build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
