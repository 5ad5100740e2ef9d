use mailblocks_compiler_html::CompileOptions;
use mailblocks_model::ThemeParameters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "mailblocks.config.json";

/// Mailblocks configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory containing template records (`<name>.json`)
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,

    /// Where compiled HTML and variable lists are written
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Pretty-print compiled HTML
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Theme for templates created by `init`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeParameters>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_templates_dir() -> String {
    "templates".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_pretty() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to the templates directory
    pub fn get_templates_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.templates_dir)
    }

    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }

    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            pretty: self.pretty,
            ..CompileOptions::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            out_dir: default_out_dir(),
            pretty: default_pretty(),
            theme: None,
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r##"{
            "templatesDir": "emails",
            "outDir": "build",
            "pretty": false,
            "theme": { "primaryColor": "#0ea5e9", "contentWidth": 640 },
            "logLevel": "debug"
        }"##;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.templates_dir, "emails");
        assert_eq!(config.out_dir, "build");
        assert!(!config.pretty);
        assert!(!config.compile_options().pretty);
        assert_eq!(config.log_level, "debug");

        let theme = config.theme.unwrap();
        assert_eq!(theme.primary_color, "#0ea5e9");
        assert_eq!(theme.content_width, 640);
        assert_eq!(theme.border_radius, 12);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.templates_dir, "templates");
        assert_eq!(config.out_dir, "dist");
        assert!(config.pretty);
        assert!(config.theme.is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"outDir": "public"}"#).unwrap();

        assert_eq!(config.out_dir, "public");
        assert_eq!(config.templates_dir, "templates");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().display().to_string()).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_config_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "{ nope").unwrap();

        assert!(Config::load(&dir.path().display().to_string()).is_err());
    }
}
