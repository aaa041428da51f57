//! solano-fetch Core Library
//!
//! Tìm session passed gần nhất của một branch trên Solano CI và tạo lệnh `curl`
//! để download các file artifacts đính kèm session đó.
//!
//! Chương trình chỉ in lệnh download, không tự download.

pub mod api;
pub mod config;
pub mod credentials;
pub mod error;
pub mod pipeline;
pub mod utils;

// Re-export main types
pub use api::{CiApi, SolanoClient};
pub use config::Settings;
pub use credentials::Credentials;
pub use error::{FatalError, NothingFound, RunError};
