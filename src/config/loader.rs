use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::args::{
    Flag, FlagAction, Parser, Reducer, RegistrationDefaults, ResolveError, Separator, Syntax,
};
use crate::config::types::{Config, FlagConfig, ParserConfig};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },

    #[error(transparent)]
    Registration(#[from] ResolveError),
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/argfold/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("argfold").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads, parses and validates the config file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Indicators, separators and suffixes have a valid shape
    /// - Flag and parser names are valid and unique within their kind
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.syntax()?;
        let defaults = self.registration_defaults()?;

        for (idx, flag) in self.flags.iter().enumerate() {
            if self.flags[..idx].iter().any(|f| f.name == flag.name) {
                return Err(ConfigError::ValidationError {
                    message: format!("Flag '{}' is declared more than once", flag.name),
                });
            }
            flag.register(&defaults, |_: &[String]| {})?;
        }

        for (idx, parser) in self.parsers.iter().enumerate() {
            if self.parsers[..idx].iter().any(|p| p.name == parser.name) {
                return Err(ConfigError::ValidationError {
                    message: format!("Parser '{}' is declared more than once", parser.name),
                });
            }
            parser.register(&defaults, |_: &[String]| String::new())?;
        }

        Ok(())
    }

    /// Indicator syntax described by `[syntax]`.
    pub fn syntax(&self) -> Result<Syntax, ResolveError> {
        Syntax::new(&self.syntax.flag_indicator, &self.syntax.parser_indicator)
    }

    /// Registration defaults described by `[defaults]`.
    pub fn registration_defaults(&self) -> Result<RegistrationDefaults, ResolveError> {
        Ok(RegistrationDefaults {
            flag_arity: self.defaults.arity,
            separator: Separator::parse(&self.defaults.separator)?,
            allow_multiple: self.defaults.allow_multiple,
            parser_arity: self.defaults.parser_arity,
            suffix: self.defaults.suffix.clone(),
        })
    }
}

impl FlagConfig {
    /// Build the flag, filling unset fields from `defaults`.
    pub fn register(
        &self,
        defaults: &RegistrationDefaults,
        action: impl FlagAction + 'static,
    ) -> Result<Flag, ResolveError> {
        let separator = match &self.separator {
            Some(raw) => Separator::parse(raw)?,
            None => defaults.separator,
        };
        Ok(defaults
            .flag(&self.name, action)?
            .with_arity(self.arity.unwrap_or(defaults.flag_arity))
            .with_separator(separator)
            .with_multiple(self.allow_multiple.unwrap_or(defaults.allow_multiple)))
    }
}

impl ParserConfig {
    /// Build the parser, filling unset fields from `defaults`.
    pub fn register(
        &self,
        defaults: &RegistrationDefaults,
        reducer: impl Reducer + 'static,
    ) -> Result<Parser, ResolveError> {
        let parser = defaults
            .parser(&self.name, reducer)?
            .with_arity(self.arity.unwrap_or(defaults.parser_arity));
        match &self.suffix {
            Some(suffix) => parser.with_suffix(suffix),
            None => Ok(parser),
        }
    }
}
