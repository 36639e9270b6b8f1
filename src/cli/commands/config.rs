use anyhow::{Result, anyhow};
use clap::Subcommand;

use crate::cli::output::emit;
use crate::error::AppError;
use crate::models::{OutputFormat, Settings};

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Show the resolved connection settings")]
    Show,
    #[command(about = "Show the configuration file path")]
    Path,
}

/// Runs without a loaded configuration so `path` still works when the
/// config file itself is broken.
pub fn handle_config(cmd: ConfigCommand, format: OutputFormat) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let settings = Settings::load().map_err(AppError::from)?;
            handle_show(&settings, format)
        }
        ConfigCommand::Path => handle_path(),
    }
}

fn handle_show(settings: &Settings, format: OutputFormat) -> Result<()> {
    let redacted = settings.redacted();

    if format.is_structured() {
        return emit(&redacted, format);
    }

    print!("{}", render_text(&redacted));
    Ok(())
}

fn render_text(settings: &Settings) -> String {
    let token = settings.access_token.as_deref().unwrap_or("(not set)");
    format!(
        "endpoint = \"{}\"\naccess_token = \"{}\"\nversion = \"{}\"\ntimeout_secs = {}\n",
        settings.endpoint, token, settings.version, settings.timeout_secs
    )
}

fn handle_path() -> Result<()> {
    let path = Settings::config_path()
        .ok_or_else(|| anyhow!("could not determine the configuration directory"))?;
    println!("{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_masks_token() {
        let settings = Settings {
            access_token: Some("abcdefgh".to_string()),
            ..Settings::default()
        }
        .redacted();
        let text = render_text(&settings);
        assert!(text.contains("endpoint = \"http://localhost:8080\""));
        assert!(text.contains("access_token = \"****efgh\""));
        assert!(text.contains("timeout_secs = 5"));
        assert!(!text.contains("abcdefgh"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_path_works_with_unparseable_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("fessctl");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.toml"), "endpoint = ").unwrap();

        // SAFETY: no other test reads or writes XDG_CONFIG_HOME.
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", dir.path());
        }

        assert_eq!(
            Settings::config_path(),
            Some(config_dir.join("config.toml"))
        );
        assert!(Settings::load().is_err());
        assert!(handle_config(ConfigCommand::Path, OutputFormat::Text).is_ok());
        assert!(handle_config(ConfigCommand::Show, OutputFormat::Text).is_err());

        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[test]
    fn test_render_text_without_token() {
        let text = render_text(&Settings::default());
        assert!(text.contains("access_token = \"(not set)\""));
    }
}
