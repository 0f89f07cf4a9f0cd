pub mod scoring;

use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::de::DeserializeOwned;
use thiserror::Error;

use self::scoring::ScoringConfiguration;

/// All configuration is loaded centrally and handed out through one shared
/// handle. Consumers load a guard when they need a consistent snapshot.
#[derive(Debug, Default)]
pub struct SystemConfigurations {
    pub scoring: ScoringConfiguration,
}

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("environment variable {0} is not set")]
    MissingEnvironmentVariable(String),
    #[error("could not read configuration file {path}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("configuration file {path} did not parse")]
    Invalid {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl SystemConfigurations {
    /// Reads every configuration file below `ROTA_CONFIG_DIR` once and
    /// wraps the result so that consumers never hold stray unmanaged
    /// configuration.
    pub fn read_all_configs() -> Result<Arc<ArcSwap<SystemConfigurations>>, ConfigurationError> {
        let configuration_dir = dotenvy::var("ROTA_CONFIG_DIR").map_err(|_| {
            ConfigurationError::MissingEnvironmentVariable("ROTA_CONFIG_DIR".to_string())
        })?;

        let scoring =
            read_toml(&Path::new(&configuration_dir).join("assignment/scoring.toml"))?;

        Ok(Arc::new(ArcSwap::new(Arc::new(SystemConfigurations {
            scoring,
        }))))
    }
}

fn read_toml<T>(path: &Path) -> Result<T, ConfigurationError>
where
    T: DeserializeOwned,
{
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Unreadable {
        path: path.to_owned(),
        source,
    })?;

    toml::from_str(&contents).map_err(|source| ConfigurationError::Invalid {
        path: path.to_owned(),
        source,
    })
}
