//! Command implementations cho solano-fetch CLI.
//!
//! Các commands chính:
//! - fetch: Tìm session passed gần nhất và in lệnh curl cho artifacts
//! - init: Tạo file config mặc định

use super::FetchArgs;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use solano_fetch::config::{default_config_path, find_config_file};
use solano_fetch::{pipeline, Credentials, Settings, SolanoClient};
use std::io;
use std::path::{Path, PathBuf};

/// Tìm session passed gần nhất và in lệnh download ra stdout
pub fn fetch(args: FetchArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Cannot determine current directory")?;
    let settings = load_settings(&args, &cwd)?;

    let credentials = match &args.credentials {
        Some(path) => Credentials::load(path)?,
        None => Credentials::discover(&cwd, dirs::home_dir().as_deref())?,
    };

    let client = SolanoClient::new(&settings.api, credentials)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let files_found = pipeline::run(&client, &settings, &mut out)?;

    tracing::info!("{} download command(s) printed", files_found);
    Ok(())
}

/// Tạo file config mặc định
pub fn init(config: Option<PathBuf>, force: bool) -> Result<()> {
    let path = config.unwrap_or_else(default_config_path);

    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    Settings::default().save(&path)?;
    eprintln!("  {} Created {}", "✓".green(), path.display());
    Ok(())
}

/// Load config (file hoặc mặc định) rồi áp dụng các flag từ command line
fn load_settings(args: &FetchArgs, cwd: &Path) -> Result<Settings> {
    let path = args.config.clone().or_else(|| find_config_file(cwd));
    if let Some(path) = &path {
        tracing::debug!("Loading config from {}", path.display());
    }

    let mut settings = Settings::load_or_default(path.as_deref())?;
    apply_overrides(&mut settings, args);
    Ok(settings)
}

fn apply_overrides(settings: &mut Settings, args: &FetchArgs) {
    if let Some(host) = &args.host {
        settings.api.host = host.clone();
    }
    if let Some(port) = args.port {
        settings.api.port = port;
    }
    if let Some(scheme) = &args.scheme {
        settings.api.scheme = scheme.clone();
    }
    if let Some(account) = &args.account {
        settings.account = account.clone();
    }
    if let Some(repo) = &args.repo {
        settings.repo_url = repo.clone();
    }
    if let Some(branch) = &args.branch {
        settings.branch = branch.clone();
    }
    if !args.files.is_empty() {
        settings.files = args.files.clone();
    }
    if let Some(limit) = args.limit {
        settings.sessions.limit = limit;
    }
    if args.any_status {
        settings.sessions.any_status = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_config_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("custom.toml");
        std::fs::write(
            &config_path,
            "account = \"acme\"\nbranch = \"develop\"\nfiles = [\"a.zip\"]\n",
        )?;

        let args = FetchArgs {
            config: Some(config_path),
            branch: Some("release".to_string()),
            port: Some(8443),
            ..FetchArgs::default()
        };

        let settings = load_settings(&args, temp_dir.path())?;
        assert_eq!(settings.account, "acme");
        assert_eq!(settings.branch, "release");
        assert_eq!(settings.files, vec!["a.zip".to_string()]);
        assert_eq!(settings.api.port, 8443);

        Ok(())
    }

    #[test]
    fn test_file_flags_replace_allow_list() {
        let mut settings = Settings::default();
        let args = FetchArgs {
            files: vec!["report.html".to_string()],
            any_status: true,
            limit: Some(5),
            ..FetchArgs::default()
        };

        apply_overrides(&mut settings, &args);
        assert_eq!(settings.files, vec!["report.html".to_string()]);
        assert_eq!(settings.sessions.status_filter(), None);
        assert_eq!(settings.sessions.limit, 5);
    }

    #[test]
    fn test_init_refuses_to_overwrite() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        init(Some(config_path.clone()), false)?;
        assert!(Settings::load(&config_path).is_ok());

        assert!(init(Some(config_path.clone()), false).is_err());
        assert!(init(Some(config_path), true).is_ok());

        Ok(())
    }
}
