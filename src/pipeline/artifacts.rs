//! Chọn file artifacts theo allow-list và tạo lệnh `curl` để download.

use crate::api::{FileLink, Session};
use crate::config::Settings;
use crate::error::{FatalError, NothingFound, RunError};
use crate::utils::shell_escape;
use std::fmt;
use std::io::Write;

/// Một lệnh download cho một file artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadCommand<'a> {
    pub name: &'a str,
    pub url: &'a str,
}

impl fmt::Display for DownloadCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "curl -o {} {}",
            shell_escape(self.name),
            shell_escape(self.url)
        )
    }
}

/// Lọc file links theo allow-list, giữ nguyên thứ tự của session
pub fn select_artifacts<'a>(links: &'a [FileLink], settings: &Settings) -> Vec<DownloadCommand<'a>> {
    links
        .iter()
        .filter(|link| settings.is_wanted(&link.name))
        .map(|link| DownloadCommand {
            name: &link.name,
            url: &link.url,
        })
        .collect()
}

/// In một lệnh curl cho mỗi file khớp allow-list, trả về số file tìm thấy
pub fn emit_download_commands<W: Write>(
    session: &Session,
    settings: &Settings,
    out: &mut W,
) -> Result<usize, RunError> {
    if session.file_links.is_empty() {
        return Err(NothingFound::NoFilesAttached {
            session_id: session.id,
        }
        .into());
    }

    let mut files_found = 0;
    for command in select_artifacts(&session.file_links, settings) {
        tracing::debug!("Matched artifact {}", command.name);
        writeln!(out, "{}", command).map_err(FatalError::Output)?;
        files_found += 1;
    }

    if files_found == 0 {
        return Err(NothingFound::NoMatchingFiles {
            session_id: session.id,
        }
        .into());
    }

    out.flush().map_err(FatalError::Output)?;
    Ok(files_found)
}
