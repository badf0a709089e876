use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "code_table=info";
pub const VERBOSE_FILTER: &str = "code_table=debug,info";

/// `RUST_LOG` 有設定時優先
fn cli_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// 轉換工具只輸出簡短的一行訊息，不帶 target 與原始碼位置
pub fn init_cli_logger(verbose: bool) {
    let layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(cli_filter(verbose))
        .with(layer)
        .init();
}
