//! Configuration loading and validation

use figment::Jail;
use scb_domain::value_objects::ViewMode;
use scb_infrastructure::config::loader::{to_toml, validate_app_config};
use scb_infrastructure::config::{AppConfig, ConfigLoader};
use scb_infrastructure::constants::DEFAULT_LOG_LEVEL;
use std::time::Duration;

#[test]
fn test_defaults_load_without_a_file() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.providers.embedding.provider, "null");
        assert_eq!(config.providers.vector_index.provider, "filesystem");
        assert_eq!(config.providers.service_store.provider, "filesystem");
        assert_eq!(config.indexing.workers, 4);
        assert_eq!(config.search.mode, ViewMode::Capability);
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        Ok(())
    });
}

#[test]
fn test_toml_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "scb.toml",
            r#"
                [providers.embedding]
                provider = "ollama"
                model = "nomic-embed-text"

                [indexing]
                workers = 8

                [search]
                default_limit = 3
                mode = "service"
            "#,
        )?;

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.providers.embedding.provider, "ollama");
        assert_eq!(
            config.providers.embedding.model.as_deref(),
            Some("nomic-embed-text")
        );
        assert_eq!(config.indexing.workers, 8);
        assert_eq!(config.search.default_limit, 3);
        assert_eq!(config.search.mode, ViewMode::Service);
        // untouched sections keep their defaults
        assert_eq!(config.search.max_limit, 20);
        assert_eq!(config.indexing.embed_timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn test_environment_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("scb.toml", "[indexing]\nworkers = 8\n")?;
        jail.set_env("SCB__INDEXING__WORKERS", "2");
        jail.set_env("SCB__INDEXING__EMBED_TIMEOUT_SECS", "5");
        jail.set_env("SCB__PROVIDERS__VECTOR_INDEX__PROVIDER", "memory");

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.indexing.workers, 2);
        assert_eq!(config.indexing.embed_timeout_secs, 5);
        assert_eq!(config.providers.vector_index.provider, "memory");
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("CATALOG__SEARCH__MAX_LIMIT", "50");
        jail.set_env("SCB__SEARCH__MAX_LIMIT", "7");

        let config = ConfigLoader::new()
            .with_env_prefix("CATALOG")
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.search.max_limit, 50);
        Ok(())
    });
}

#[test]
fn test_explicit_config_path() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[logging]\nlevel = \"debug\"\n")?;

        let loader = ConfigLoader::new().with_config_path("custom.toml");
        let config = loader.load().map_err(|e| e.to_string())?;

        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            loader.config_path().map(|p| p.to_string_lossy().into_owned()),
            Some("custom.toml".to_string())
        );
        Ok(())
    });
}

#[test]
fn test_missing_explicit_config_path_is_an_error() {
    Jail::expect_with(|_jail| {
        let err = ConfigLoader::new()
            .with_config_path("absent.toml")
            .load()
            .err()
            .ok_or("missing file accepted")?;

        assert!(err.to_string().contains("absent.toml"));
        Ok(())
    });
}

#[test]
fn test_zero_workers_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("SCB__INDEXING__WORKERS", "0");

        let err = ConfigLoader::new()
            .load()
            .err()
            .ok_or("zero workers accepted")?;

        assert!(err.to_string().contains("Indexing workers cannot be 0"));
        Ok(())
    });
}

#[test]
fn test_default_limit_above_max_is_rejected() {
    let mut config = AppConfig::default();
    config.search.default_limit = 30;
    config.search.max_limit = 10;

    let err = validate_app_config(&config).expect_err("limit accepted");
    assert!(err.to_string().contains("exceeds max limit"));
}

#[test]
fn test_zero_limits_are_rejected() {
    let mut config = AppConfig::default();
    config.search.default_limit = 0;
    assert!(validate_app_config(&config).is_err());

    let mut config = AppConfig::default();
    config.search.max_limit = 0;
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_filesystem_providers_require_a_path() {
    let mut config = AppConfig::default();
    config.providers.service_store.path = None;
    assert!(validate_app_config(&config).is_err());

    let mut config = AppConfig::default();
    config.providers.vector_index.path = None;
    assert!(validate_app_config(&config).is_err());

    // memory providers need no path
    let mut config = AppConfig::default();
    config.providers.vector_index.provider = "memory".to_string();
    config.providers.vector_index.path = None;
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let mut config = AppConfig::default();
    config.logging.level = "loud".to_string();

    let err = validate_app_config(&config).expect_err("level accepted");
    assert!(err.to_string().contains("Invalid log level"));
}

#[test]
fn test_save_then_load_round_trip() {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let config_path = temp_dir.path().join("saved.toml");

    let mut original = AppConfig::default();
    original.indexing.workers = 12;
    original.search.mode = ViewMode::Service;
    original.providers.embedding.dimensions = Some(128);

    let loader = ConfigLoader::new();
    loader
        .save_to_file(&original, &config_path)
        .expect("save config");

    let loaded = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .expect("load config");

    assert_eq!(loaded.indexing.workers, 12);
    assert_eq!(loaded.search.mode, ViewMode::Service);
    assert_eq!(loaded.providers.embedding.dimensions, Some(128));
}

#[test]
fn test_to_toml_lists_every_section() {
    let rendered = to_toml(&AppConfig::default()).expect("render");

    for section in [
        "[providers.embedding]",
        "[providers.vector_index]",
        "[providers.service_store]",
        "[indexing]",
        "[search]",
        "[logging]",
    ] {
        assert!(rendered.contains(section), "missing {section}");
    }
}

#[test]
fn test_pipeline_options_follow_config() {
    let mut config = AppConfig::default();
    config.indexing.workers = 1;
    config.indexing.embed_timeout_secs = 2;
    config.providers.embedding.query_prefix = "passage: ".to_string();
    config.search.default_limit = 4;
    config.search.max_limit = 9;

    let indexing = config.indexing_options();
    assert_eq!(indexing.workers, 1);
    assert_eq!(indexing.embed_timeout, Duration::from_secs(2));
    assert_eq!(indexing.query_prefix, "passage: ");

    let search = config.search_options();
    assert_eq!(search.default_limit, 4);
    assert_eq!(search.max_limit, 9);
    assert_eq!(search.query_prefix, "passage: ");
    assert_eq!(search.embed_timeout, Duration::from_secs(2));
}

#[test]
fn test_registry_configs_carry_provider_settings() {
    let mut config = AppConfig::default();
    config.providers.embedding.provider = "ollama".to_string();
    config.providers.embedding.base_url = Some("http://gpu:11434".to_string());
    config.providers.vector_index.collection = "capabilities".to_string();

    let embedding = config.providers.embedding.to_registry_config();
    assert_eq!(embedding.provider, "ollama");
    assert_eq!(embedding.base_url.as_deref(), Some("http://gpu:11434"));

    let index = config.providers.vector_index.to_registry_config();
    assert_eq!(index.collection, "capabilities");
    assert_eq!(index.path, config.providers.vector_index.path);

    let store = config.providers.service_store.to_registry_config();
    assert_eq!(store.path, config.providers.service_store.path);
}
