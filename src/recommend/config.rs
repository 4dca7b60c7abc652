use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    recommend::reason::DEFAULT_MAX_SHARED_TERMS,
};

/// Default number of recommendations per call
pub const DEFAULT_TOP_N: usize = 3;

/// Recommender settings
///
/// Every field has a default, so a partial JSON object (or `{}`) is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecommenderConfig {
    /// maximum number of recommendations returned
    pub top_n: usize,
    /// shared terms considered when writing a reason
    pub max_shared_terms: usize,
    /// vectorize candidates on the rayon pool
    pub parallel: bool,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            max_shared_terms: DEFAULT_MAX_SHARED_TERMS,
            parallel: false,
        }
    }
}

impl RecommenderConfig {
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_max_shared_terms(mut self, max_shared_terms: usize) -> Self {
        self.max_shared_terms = max_shared_terms;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// `top_n = 0` is allowed (it yields no recommendations),
    /// `max_shared_terms = 0` is not.
    pub fn validate(&self) -> Result<()> {
        if self.max_shared_terms == 0 {
            return Err(Error::Config("max_shared_terms must be at least 1".into()));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RecommenderConfig::default();
        assert_eq!(config.top_n, 3);
        assert_eq!(config.max_shared_terms, 3);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = RecommenderConfig::from_json_str(r#"{"top_n": 5}"#).unwrap();
        assert_eq!(config, RecommenderConfig::default().with_top_n(5));
        assert_eq!(RecommenderConfig::from_json_str("{}").unwrap(), RecommenderConfig::default());
    }

    #[test]
    fn rejects_zero_shared_terms() {
        let err = RecommenderConfig::from_json_str(r#"{"max_shared_terms": 0}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(matches!(
            RecommenderConfig::from_json_str(r#"{"topn": 2}"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn zero_top_n_is_valid() {
        assert!(RecommenderConfig::default().with_top_n(0).validate().is_ok());
    }
}
