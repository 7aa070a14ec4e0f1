//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only sees the [`ScaffoldOptions`]
//! derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `LIBFORGE_*` environment variables, `__` between nested keys
//!    (`LIBFORGE_TOOLS__DOTNET=/opt/dotnet/dotnet`); `.env` is loaded first
//! 3. Config file (`--config FILE`, else [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use libforge_core::application::ScaffoldOptions;

const ENV_PREFIX: &str = "LIBFORGE";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// License copyright holder.
    pub author: String,
    /// Message of the initial commit.
    pub commit_message: String,
    /// External tool executables.
    pub tools: ToolsConfig,
    /// `dotnet new` templates.
    pub templates: TemplateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfig {
    pub dotnet: String,
    pub git: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub library: String,
    pub tests: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let options = ScaffoldOptions::default();
        Self {
            author: options.author,
            commit_message: options.commit_message,
            tools: ToolsConfig {
                dotnet: options.dotnet,
                git: options.git,
            },
            templates: TemplateConfig {
                library: options.library_template,
                tests: options.test_template,
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then the
    /// environment.
    ///
    /// A file passed with `--config` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to serialise built-in defaults")?;

        Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from '{}'", path.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.libforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "libforge", "libforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".libforge.toml"))
    }

    /// The file `load` reads: `--config` when given, else the default.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }

    pub fn to_scaffold_options(&self) -> ScaffoldOptions {
        ScaffoldOptions {
            dotnet: self.tools.dotnet.clone(),
            git: self.tools.git.clone(),
            library_template: self.templates.library.clone(),
            test_template: self.templates.tests.clone(),
            commit_message: self.commit_message.clone(),
            author: self.author.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn no_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::new()))
    }

    #[test]
    fn defaults_match_scaffold_options() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.to_scaffold_options(), ScaffoldOptions::default());
        assert_eq!(cfg.tools.dotnet, "dotnet");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&tmp.path().join("absent.toml"), false, no_env()).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        assert!(AppConfig::load_from(&tmp.path().join("absent.toml"), true, no_env()).is_err());
    }

    #[test]
    fn file_overrides_defaults_partially() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "author = \"Acme Corp\"\n[tools]\ndotnet = \"/opt/dotnet/dotnet\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, true, no_env()).unwrap();
        assert_eq!(cfg.author, "Acme Corp");
        assert_eq!(cfg.tools.dotnet, "/opt/dotnet/dotnet");
        assert_eq!(cfg.tools.git, "git");
        assert_eq!(cfg.templates.tests, "nunit");
    }

    #[test]
    fn environment_overrides_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[tools]\ngit = \"/usr/local/bin/git\"\n").unwrap();

        let env = Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::from([
            ("LIBFORGE_TOOLS__GIT".to_string(), "/opt/git".to_string()),
            ("LIBFORGE_OUTPUT__NO_COLOR".to_string(), "true".to_string()),
        ])));

        let cfg = AppConfig::load_from(&path, true, env).unwrap();
        assert_eq!(cfg.tools.git, "/opt/git");
        assert!(cfg.output.no_color);
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, text).unwrap();
        assert_eq!(AppConfig::load_from(&path, true, no_env()).unwrap(), AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
