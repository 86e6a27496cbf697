//! Tests for configuration loading and validation
//!
//! `figment::Jail` isolates the working directory and environment of each
//! test, so these run safely in parallel.

use figment::Jail;
use repolock_domain::error::Error;
use repolock_infrastructure::config::loader::{to_toml, validate_app_config};
use repolock_infrastructure::config::{
    AppConfig, ConfigBuilder, ConfigLoader, LockingConfig, StoreProvider,
};
use std::path::PathBuf;

fn to_figment(err: Error) -> figment::Error {
    figment::Error::from(err.to_string())
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json_format);
    assert_eq!(config.locking.token_bytes, 32);
    assert!(config.locking.events_enabled);
    assert_eq!(config.store.provider, StoreProvider::Memory);
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_load_without_file_uses_defaults() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().map_err(to_figment)?;
        assert_eq!(config.locking.token_bytes, 32);
        assert_eq!(config.store.provider, StoreProvider::Memory);
        Ok(())
    });
}

#[test]
fn test_load_explicit_toml_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "locks.toml",
            r#"
            [logging]
            level = "debug"

            [locking]
            token_bytes = 48
            admin_principals = ["root", "release-manager"]

            [store]
            provider = "filesystem"
            path = "/var/lib/repolock"
            "#,
        )?;

        let config = ConfigLoader::new()
            .with_config_path("locks.toml")
            .load()
            .map_err(to_figment)?;

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.locking.token_bytes, 48);
        assert_eq!(
            config.locking.admin_principals,
            vec!["root".to_string(), "release-manager".to_string()]
        );
        assert_eq!(config.store.provider, StoreProvider::Filesystem);
        assert_eq!(config.store.lock_dir(), PathBuf::from("/var/lib/repolock"));
        // Sections absent from the file keep their defaults
        assert!(config.locking.events_enabled);
        Ok(())
    });
}

#[test]
fn test_default_file_in_working_directory_is_found() {
    Jail::expect_with(|jail| {
        jail.create_file("repolock.toml", "[locking]\nevents_enabled = false\n")?;
        let config = ConfigLoader::new().load().map_err(to_figment)?;
        assert!(!config.locking.events_enabled);
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new()
            .with_config_path("does-not-exist.toml")
            .load()
            .map_err(to_figment)?;
        assert_eq!(config.logging.level, "info");
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("repolock.toml", "[locking]\ntoken_bytes = 24\n")?;
        jail.set_env("REPOLOCK__LOCKING__TOKEN_BYTES", "64");
        jail.set_env("REPOLOCK__LOGGING__LEVEL", "warn");

        let config = ConfigLoader::new().load().map_err(to_figment)?;
        assert_eq!(config.locking.token_bytes, 64);
        assert_eq!(config.logging.level, "warn");
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("LOCKD__STORE__PROVIDER", "filesystem");
        jail.set_env("REPOLOCK__STORE__PROVIDER", "memory");

        let config = ConfigLoader::new()
            .with_env_prefix("LOCKD")
            .load()
            .map_err(to_figment)?;
        assert_eq!(config.store.provider, StoreProvider::Filesystem);
        Ok(())
    });
}

#[test]
fn test_short_tokens_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("REPOLOCK__LOCKING__TOKEN_BYTES", "8");
        let result = ConfigLoader::new().load();
        assert!(matches!(result, Err(Error::Configuration { .. })));
        Ok(())
    });
}

#[test]
fn test_invalid_log_level_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("repolock.toml", "[logging]\nlevel = \"loud\"\n")?;
        let result = ConfigLoader::new().load();
        assert!(matches!(result, Err(Error::Configuration { .. })));
        Ok(())
    });
}

#[test]
fn test_unknown_store_provider_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("REPOLOCK__STORE__PROVIDER", "redis");
        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });
}

#[test]
fn test_builder_validation() {
    let config = ConfigBuilder::new()
        .with_filesystem_store("/tmp/locks")
        .with_admin("root")
        .build()
        .unwrap();
    assert_eq!(config.store.provider, StoreProvider::Filesystem);
    assert_eq!(config.locking.admin_principals, vec!["root".to_string()]);

    let blank_admin = ConfigBuilder::new().with_admin("  ").build();
    assert!(matches!(blank_admin, Err(Error::Configuration { .. })));

    let no_capacity = ConfigBuilder::new()
        .with_locking(LockingConfig {
            event_capacity: 0,
            ..LockingConfig::default()
        })
        .build();
    assert!(no_capacity.is_err());
}

#[test]
fn test_lock_dir_defaults() {
    let config = ConfigBuilder::new().with_memory_store().build().unwrap();
    assert_eq!(config.store.lock_dir(), PathBuf::from("./data/locks"));
}

#[test]
fn test_save_and_reload() {
    Jail::expect_with(|jail| {
        let config = ConfigBuilder::new()
            .with_filesystem_store("locks")
            .with_admin("root")
            .build()
            .map_err(to_figment)?;

        let path = jail.directory().join("saved.toml");
        let loader = ConfigLoader::new().with_config_path(&path);
        loader.save_to_file(&config, &path).map_err(to_figment)?;
        assert_eq!(loader.config_path(), Some(path.as_path()));

        let reloaded = loader.load().map_err(to_figment)?;
        assert_eq!(reloaded.store.provider, StoreProvider::Filesystem);
        assert_eq!(reloaded.store.lock_dir(), PathBuf::from("locks"));
        assert_eq!(reloaded.locking.admin_principals, vec!["root".to_string()]);
        Ok(())
    });
}

#[test]
fn test_to_toml_contains_sections() {
    let rendered = to_toml(&AppConfig::default()).unwrap();
    assert!(rendered.contains("[logging]"));
    assert!(rendered.contains("[locking]"));
    assert!(rendered.contains("[store]"));
    assert!(rendered.contains("provider = \"memory\""));
}
