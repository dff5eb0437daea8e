//! Classifier Configuration
//!
//! Defines the configuration used to grow a decision tree. Every field has a
//! serde default, so `{}` deserializes into the default configuration.
use crate::errors::SaplingError;
use crate::grower::GrowPolicy;
use crate::utils::validate_min_usize_parameter;
use serde::{Deserialize, Serialize};

fn default_max_depth() -> Option<usize> {
    None
}
fn default_min_samples_split() -> usize {
    2
}
fn default_grow_policy() -> GrowPolicy {
    GrowPolicy::DepthFirst
}

/// Configuration for the `DecisionTreeClassifier`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Maximum depth of the tree, the root is at depth 0. Nodes at this
    /// depth become leaves holding their majority label. `None` grows until
    /// every node stops on its own.
    #[serde(default = "default_max_depth")]
    pub max_depth: Option<usize>,
    /// Nodes with fewer rows than this become leaves holding their majority label.
    #[serde(default = "default_min_samples_split")]
    pub min_samples_split: usize,
    /// Order in which nodes are grown.
    #[serde(default = "default_grow_policy")]
    pub grow_policy: GrowPolicy,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            max_depth: default_max_depth(),
            min_samples_split: default_min_samples_split(),
            grow_policy: default_grow_policy(),
        }
    }
}

impl ClassifierConfig {
    /// Check the configuration before it is used to fit a tree.
    pub fn validate_parameters(&self) -> Result<(), SaplingError> {
        validate_min_usize_parameter(self.min_samples_split, 2, "min_samples_split")
    }

    /// Load a configuration from a json string.
    pub fn from_json(json_str: &str) -> Result<Self, SaplingError> {
        let cfg: ClassifierConfig =
            serde_json::from_str(json_str).map_err(|e| SaplingError::UnableToParse(e.to_string()))?;
        cfg.validate_parameters()?;
        Ok(cfg)
    }

    /// Dump the configuration as a json string.
    pub fn json_dump(&self) -> Result<String, SaplingError> {
        serde_json::to_string(self).map_err(|e| SaplingError::UnableToParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_from_empty_json() {
        let cfg = ClassifierConfig::from_json("{}").unwrap();
        assert_eq!(cfg, ClassifierConfig::default());
        assert_eq!(cfg.max_depth, None);
        assert_eq!(cfg.min_samples_split, 2);
        assert_eq!(cfg.grow_policy, GrowPolicy::DepthFirst);
    }

    #[test]
    fn test_config_from_json() {
        let cfg =
            ClassifierConfig::from_json(r#"{"max_depth": 4, "min_samples_split": 5, "grow_policy": "BreadthFirst"}"#)
                .unwrap();
        assert_eq!(cfg.max_depth, Some(4));
        assert_eq!(cfg.min_samples_split, 5);
        assert_eq!(cfg.grow_policy, GrowPolicy::BreadthFirst);
    }

    #[test]
    fn test_config_json_dump() {
        let cfg = ClassifierConfig {
            max_depth: Some(3),
            ..Default::default()
        };
        let json = cfg.json_dump().unwrap();
        assert_eq!(ClassifierConfig::from_json(&json).unwrap(), cfg);
    }

    #[test]
    fn test_config_invalid_json() {
        let err = ClassifierConfig::from_json(r#"{"max_depth": "deep"}"#).unwrap_err();
        assert!(matches!(err, SaplingError::UnableToParse(_)));
    }

    #[test]
    fn test_config_invalid_min_samples_split() {
        let err = ClassifierConfig::from_json(r#"{"min_samples_split": 1}"#).unwrap_err();
        assert!(matches!(err, SaplingError::InvalidParameter(..)));
    }
}
