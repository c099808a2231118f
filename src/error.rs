use wasm_bindgen::JsValue;

/// Errors that stop the crate from mounting at all.
///
/// Missing page elements are not errors: the affected behavior is skipped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EffectsError {
    /// Configuration YAML could not be parsed
    #[error("YAML parse error: {0}")]
    Yaml(String),

    /// Configuration parsed but holds an unusable value
    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("window is not available")]
    WindowNotAvailable,

    #[error("document is not available")]
    DocumentNotAvailable,

    /// A DOM call failed while mounting
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl EffectsError {
    pub(crate) fn dom(err: JsValue) -> Self {
        Self::Dom(format!("{:?}", err))
    }
}

impl From<serde_yaml::Error> for EffectsError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<EffectsError> for JsValue {
    fn from(err: EffectsError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = EffectsError::InvalidConfig {
            field: "nav.threshold_px",
            reason: "must be finite".to_string(),
        };
        assert_eq!(err.to_string(), "invalid config `nav.threshold_px`: must be finite");
    }

    #[test]
    fn test_yaml_error_conversion() {
        let parsed: Result<Vec<u32>, _> = serde_yaml::from_str("not: [a list");
        let err: EffectsError = parsed.unwrap_err().into();
        assert!(matches!(err, EffectsError::Yaml(_)));
    }
}
