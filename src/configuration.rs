use std::path::PathBuf;

use sqlx::sqlite::SqliteConnectOptions;

#[derive(Debug, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub application: ApplicationSettings,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub path: PathBuf,
    pub create_if_missing: bool,
}

/// Reads `configuration.yaml` from the current directory, then applies
/// environment overrides of the form `APP_APPLICATION__PORT=8000`.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}

impl DatabaseSettings {
    /// The output goes like "sqlite:path/to/newsletters.db".
    pub fn connection_string(&self) -> String {
        format!("sqlite:{}", self.path.display())
    }

    pub fn connect_options(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(self.create_if_missing)
            .foreign_keys(true)
    }
}
