//! Utils module - Các hàm tiện ích dùng chung.

pub mod shell;

pub use shell::shell_escape;
