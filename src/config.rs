use crate::errors::BilledError;

/// Application settings. Every field has a default, so a RON document only
/// needs to name what it overrides:
///
/// ```ron
/// (
///     accepted_proof_extensions: ["jpg", "jpeg", "png", "webp"],
///     default_pct: 10,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, serde_derive::Deserialize)]
#[serde(default)]
pub struct BilledConfig {
    /// Lowercase file extensions accepted for proof uploads.
    pub accepted_proof_extensions: Vec<String>,
    /// VAT percentage used when the form leaves it empty.
    pub default_pct: u32,
    /// Width of the proof preview modal, in pixels. The preview image takes
    /// half of it.
    pub proof_modal_width: u32,
    pub currency_symbol: String,
}

impl Default for BilledConfig {
    fn default() -> Self {
        Self {
            accepted_proof_extensions: vec!["jpg".into(), "jpeg".into(), "png".into()],
            default_pct: 20,
            proof_modal_width: 800,
            currency_symbol: "€".into(),
        }
    }
}

impl BilledConfig {
    pub fn from_ron(s: &str) -> Result<Self, BilledError> {
        Ok(ron::from_str(s)?)
    }

    pub async fn from_file<P>(path: P) -> Result<Self, BilledError>
    where
        P: AsRef<std::path::Path>,
    {
        Self::from_ron(&tokio::fs::read_to_string(path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_ron_keeps_defaults() {
        let config = BilledConfig::from_ron("(default_pct: 10)").unwrap();
        assert_eq!(config.default_pct, 10);
        assert_eq!(config.accepted_proof_extensions, vec!["jpg", "jpeg", "png"]);
        assert_eq!(config.currency_symbol, "€");
    }

    #[test]
    fn test_ron_with_default_values() {
        assert_eq!(
            BilledConfig::from_ron("(proof_modal_width: 800)").unwrap(),
            BilledConfig::default()
        );
    }

    #[test]
    fn test_invalid_ron() {
        assert!(matches!(
            BilledConfig::from_ron("(default_pct: \"ten\")"),
            Err(BilledError::InvalidConfig(_))
        ));
    }
}
