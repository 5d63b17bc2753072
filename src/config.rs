use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::selection::City;

/// Environment variable naming the directory that holds the city CSVs.
pub const DATA_DIR_ENV: &str = "BIKESHARE_DATA_DIR";

/// Resolves each city to the CSV file holding its trips.
///
/// Overrides are stored as a plain JSON object on disk:
/// ```json
/// {
///   "chicago": "chicago_2017.csv",
///   "new york city": "nyc/trips.csv"
/// }
/// ```
/// Cities without an override use [`City::file_name`].
#[derive(Debug, Clone)]
pub struct SourceConfig {
    data_dir: PathBuf,
    overrides: HashMap<City, PathBuf>,
}

impl SourceConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            overrides: HashMap::new(),
        }
    }

    /// Uses `$BIKESHARE_DATA_DIR`, falling back to the working directory.
    pub fn from_env() -> Self {
        let data_dir = std::env::var(DATA_DIR_ENV).unwrap_or_else(|_| ".".to_string());
        Self::new(data_dir)
    }

    /// Loads per-city file overrides from a JSON file at `path`.
    pub fn with_overrides_file(mut self, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: HashMap<String, String> =
            serde_json::from_str(&content).map_err(|source| ConfigError::ParseError {
                path: path.to_path_buf(),
                source,
            })?;

        for (key, file) in entries {
            let city: City = key.parse().map_err(|source| ConfigError::UnknownCity {
                path: path.to_path_buf(),
                source,
            })?;
            self.overrides.insert(city, PathBuf::from(file));
        }
        Ok(self)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of the storage file for `city`.
    pub fn resolve(&self, city: City) -> PathBuf {
        match self.overrides.get(&city) {
            Some(file) => self.data_dir.join(file),
            None => self.data_dir.join(city.file_name()),
        }
    }
}
