use serde::Deserialize;
use skyfare_core::SortKey;
use skyfare_inventory::GeneratorConfig;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub results: ResultsConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ResultsConfig {
    /// Artificial latency before results are shown. Cosmetic only; zero
    /// skips the pause entirely.
    #[serde(default)]
    pub simulated_delay_ms: u64,

    /// Initial ordering of the results listing
    #[serde(default)]
    pub sort: SortKey,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default").required(false))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of SKYFARE)
            // Eg.. `SKYFARE__RESULTS__SORT=price-desc` would set the sort key
            .add_source(config::Environment::with_prefix("SKYFARE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
