use crate::domain::GeoPoint;
use crate::proximity::SortKey;
use config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    directory: Directory,
    #[serde(default)]
    observer: GeoPoint,
    #[serde(default)]
    ranking: Ranking,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// The observer location to rank from until another location is provided.
    pub fn observer(&self) -> GeoPoint {
        self.observer
    }

    pub fn ranking(&self) -> &Ranking {
        &self.ranking
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    log_top: usize,
}

impl Core {
    /// Number of ranked entries to log after every ranking.
    pub fn log_top(&self) -> usize {
        self.log_top
    }
}

#[derive(Debug, Deserialize)]
pub struct Directory {
    path: String,
    extension: String,
}

impl Directory {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Ranking {
    #[serde(default)]
    sort_key: SortKey,
}

impl Ranking {
    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use pretty_assertions::assert_eq;

    fn from_toml(toml: &str) -> Result<AppConfig, ConfigError> {
        Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn load_a_complete_config() -> Result<(), ConfigError> {
        let config = from_toml(
            r#"
            [core]
            log_top = 3

            [directory]
            path = "data/support_orgs"
            extension = "json"

            [observer]
            lat = 52.52
            lng = 13.405

            [ranking]
            sort_key = "exact"
            "#,
        )?;

        assert_eq!(config.core().log_top(), 3);
        assert_eq!(config.directory().path(), "data/support_orgs");
        assert_eq!(config.directory().extension(), "json");
        assert_eq!(config.observer(), GeoPoint { latitude: 52.52, longitude: 13.405 });
        assert_eq!(config.ranking().sort_key(), SortKey::Exact);
        Ok(())
    }

    #[test]
    fn observer_and_ranking_have_defaults() -> Result<(), ConfigError> {
        let config = from_toml(
            r#"
            [core]
            log_top = 5

            [directory]
            path = "orgs"
            extension = "json"
            "#,
        )?;

        assert_eq!(config.observer(), GeoPoint::PARIS);
        assert_eq!(config.ranking().sort_key(), SortKey::Rounded);
        Ok(())
    }

    #[test]
    fn reject_an_observer_out_of_range() {
        let result = from_toml(
            r#"
            [core]
            log_top = 5

            [directory]
            path = "orgs"
            extension = "json"

            [observer]
            latitude = 120.0
            longitude = 0.0
            "#,
        );

        assert!(result.is_err());
    }
}
