//! CLI definitions và command implementations cho solano-fetch.

pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// solano-fetch - Download artifacts từ session passed gần nhất trên Solano CI
#[derive(Parser)]
#[command(name = "solano-fetch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tìm session passed gần nhất và in lệnh curl cho các artifacts
    Fetch(FetchArgs),

    /// Tạo file config với các giá trị mặc định
    Init {
        /// Đường dẫn file config (mặc định: ~/.config/solano-fetch/config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Ghi đè file config đã tồn tại
        #[arg(long)]
        force: bool,
    },
}

/// Các flag của `fetch`, ghi đè giá trị trong file config
#[derive(Args, Debug, Default)]
pub struct FetchArgs {
    /// File config (mặc định: ./solano-fetch.toml hoặc ~/.config/solano-fetch/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File chứa API key (mặc định: ./.solano hoặc ~/.solano)
    #[arg(long)]
    pub credentials: Option<PathBuf>,

    /// Host của Solano CI
    #[arg(long)]
    pub host: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,

    #[arg(long)]
    pub scheme: Option<String>,

    /// Account handle
    #[arg(short, long)]
    pub account: Option<String>,

    /// Origin URL của repository (SSH URL)
    #[arg(short, long)]
    pub repo: Option<String>,

    #[arg(short, long)]
    pub branch: Option<String>,

    /// Tên file cần download (lặp lại để thêm nhiều file)
    #[arg(short, long = "file", value_name = "NAME")]
    pub files: Vec<String>,

    /// Số sessions tối đa lấy từ server
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Không lọc sessions theo status ở server
    #[arg(long)]
    pub any_status: bool,
}
