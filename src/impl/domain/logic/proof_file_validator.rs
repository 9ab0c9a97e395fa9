use regex::Regex;

use crate::{entities::ProofFile, errors::BilledError};

pub(crate) struct ProofFileValidator {
    accepted: Vec<String>,
    pattern: Option<Regex>,
}

impl ProofFileValidator {
    pub(crate) fn new(accepted_extensions: &[String]) -> Self {
        let alternatives = accepted_extensions
            .iter()
            .filter(|e| !e.is_empty())
            .map(|e| regex::escape(e.trim_start_matches('.')))
            .collect::<Vec<_>>();
        // An empty list accepts nothing.
        let pattern = (!alternatives.is_empty())
            .then(|| Regex::new(&format!(r"(?i)\.(?:{})$", alternatives.join("|"))).ok())
            .flatten();
        Self {
            accepted: accepted_extensions.to_vec(),
            pattern,
        }
    }

    pub(crate) fn validate(&self, file: &ProofFile) -> Result<(), BilledError> {
        match &self.pattern {
            Some(p) if p.is_match(&file.name) => Ok(()),
            _ => Err(BilledError::InvalidProofFile {
                file_name: file.name.clone(),
                accepted: self.accepted.join(", "),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> ProofFile {
        ProofFile {
            name: name.to_string(),
            bytes: vec![],
        }
    }

    fn default_validator() -> ProofFileValidator {
        ProofFileValidator::new(&["jpg".into(), "jpeg".into(), "png".into()])
    }

    #[test]
    fn test_accepts_images_case_insensitively() {
        let v = default_validator();
        assert!(v.validate(&file("ticket.jpg")).is_ok());
        assert!(v.validate(&file("ticket.JPEG")).is_ok());
        assert!(v.validate(&file("scan.final.Png")).is_ok());
    }

    #[test]
    fn test_rejects_other_files() {
        let v = default_validator();
        for name in ["facture.pdf", "jpg", "ticket.jpg.exe", "ticket.pngx", ""] {
            assert!(
                matches!(
                    v.validate(&file(name)),
                    Err(BilledError::InvalidProofFile { .. })
                ),
                "{} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_empty_list_accepts_nothing() {
        let v = ProofFileValidator::new(&[]);
        assert!(v.validate(&file("ticket.jpg")).is_err());
    }
}
