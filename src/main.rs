use clap::Parser;
use code_table::config::validate_job_paths;
use code_table::utils::{logger, validation::Validate};
use code_table::{CliArgs, ConversionEngine, ConvertError, JobsConfig};

fn exit_with(stage: &str, e: ConvertError) -> ! {
    tracing::error!("❌ {}: {}", stage, e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}: {}", stage, e);
    if let Some(cause) = std::error::Error::source(&e) {
        eprintln!("   caused by: {}", cause);
    }
    eprintln!("💡 {}", e.recovery_suggestion());

    // 退出碼依錯誤類別：1 檔案、2 設定、3 資料
    std::process::exit(e.exit_code());
}

fn main() {
    let args = CliArgs::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting code-table");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    // 載入配置，未指定時使用內建的兩組轉換
    let config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading jobs from: {}", path.display());
            JobsConfig::from_file(path)
                .unwrap_or_else(|e| exit_with("Failed to load config file", e))
        }
        None => JobsConfig::default(),
    };

    if let Err(e) = config.validate() {
        exit_with("Configuration validation failed", e);
    }

    let verify = args.verify || config.verify_enabled();
    let jobs = config.resolve_jobs(args.base_dir.as_deref());

    // --base-dir 可能改變路徑，重新檢查一次
    if let Err(e) = validate_job_paths(&jobs) {
        exit_with("Configuration validation failed", e);
    }
    tracing::info!("📋 {} conversions queued", jobs.len());

    let engine = ConversionEngine::from_jobs(jobs).with_verification(verify);

    match engine.run() {
        Ok(summaries) => {
            for summary in &summaries {
                println!(
                    "✅ {} -> {} ({} rows)",
                    summary.source.display(),
                    summary.dest.display(),
                    summary.rows_written
                );
            }
            tracing::info!("✅ All conversions completed");
        }
        Err(e) => exit_with("Conversion failed", e),
    }
}
