use clap::Parser;
use std::path::PathBuf;

/// 不帶任何參數時執行內建的兩組轉換
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "code-table")]
#[command(about = "Convert raw code/name lists into sorted two-column CSV files")]
pub struct CliArgs {
    /// TOML job file; the built-in area/epicenter jobs are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory that relative job paths are resolved against
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Reload every written CSV as a code dictionary
    #[arg(long)]
    pub verify: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
