//! Tests for TOML configuration parsing.

use super::ConfigError;
use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml = r#"
            db_name = "history.db"
            discord_notifications_enabled = true
            discord_webhook_url = "https://discord.com/api/webhooks/1/token"
            discord_id = "42"
            log_level = "INFO"
            http_timeout = 5
            address_url = "https://ip.example.net/"
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.db_name.as_deref(), Some("history.db"));
        assert!(config.discord_notifications_enabled);
        assert_eq!(
            config.discord_webhook_url.as_deref(),
            Some("https://discord.com/api/webhooks/1/token")
        );
        assert_eq!(config.discord_id.as_deref(), Some("42"));
        assert_eq!(config.log_level.as_deref(), Some("INFO"));
        assert_eq!(config.http_timeout, Some(5));
        assert_eq!(config.address_url.as_deref(), Some("https://ip.example.net/"));
    }

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.db_name.is_none());
        assert!(!config.discord_notifications_enabled);
        assert!(config.discord_webhook_url.is_none());
        assert!(config.log_level.is_none());
    }

    #[test]
    fn reject_unknown_fields() {
        let result = TomlConfig::parse(r#"discord_token = "oops""#);

        assert!(result.is_err());
    }

    #[test]
    fn reject_wrong_type_for_toggle() {
        let result = TomlConfig::parse(r#"discord_notifications_enabled = "yes""#);

        assert!(result.is_err());
    }
}

mod default_template {
    use super::*;

    #[test]
    fn template_is_valid_toml() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert_eq!(config.db_name.as_deref(), Some("ip_addrs.db"));
        assert!(!config.discord_notifications_enabled);
        assert_eq!(config.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn template_documents_every_key() {
        let template = default_config_template();

        for key in [
            "db_name",
            "discord_notifications_enabled",
            "discord_webhook_url",
            "discord_id",
            "log_level",
            "http_timeout",
            "address_url",
        ] {
            assert!(template.contains(key), "template is missing {key}");
        }
    }
}

mod file_loading {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_valid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ip-tracker.toml");
        std::fs::write(&path, r#"db_name = "x.db""#).unwrap();

        let config = TomlConfig::load(&path).unwrap();

        assert_eq!(config.db_name.as_deref(), Some("x.db"));
    }

    #[test]
    fn load_nonexistent_file_returns_error() {
        let dir = TempDir::new().unwrap();

        let result = TomlConfig::load(&dir.path().join("missing.toml"));

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn load_invalid_toml_file_returns_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "db_name = [").unwrap();

        let result = TomlConfig::load(&path);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
