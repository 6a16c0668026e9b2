//! Required-field validation for complaint records

use crate::model::{ComplaintRecord, FilingType};

use super::LetterError;

/// Validate a complaint record before rendering
///
/// Third-party filings must carry victim name, victim address, and the
/// relationship to the victim; whitespace-only values count as missing.
/// Self filings have no conditional requirements beyond the typed fields.
pub fn validate(record: &ComplaintRecord) -> Result<(), LetterError> {
    if record.filing_type == FilingType::ThirdParty {
        require(&record.victim_name, "victim_name")?;
        require(&record.victim_address, "victim_address")?;
        require(&record.relationship_to_victim, "relationship_to_victim")?;
    }

    Ok(())
}

fn require(value: &Option<String>, field: &'static str) -> Result<(), LetterError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(LetterError::MissingRequiredField(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::letter::tests::{self_record, third_party_record};

    #[test]
    fn self_filing_needs_no_victim_fields() {
        assert!(validate(&self_record()).is_ok());
    }

    #[test]
    fn complete_third_party_filing_is_valid() {
        assert!(validate(&third_party_record()).is_ok());
    }

    #[test]
    fn third_party_without_victim_name_is_rejected() {
        let mut record = third_party_record();
        record.victim_name = None;
        assert!(matches!(
            validate(&record),
            Err(LetterError::MissingRequiredField("victim_name"))
        ));
    }

    #[test]
    fn third_party_without_victim_address_is_rejected() {
        let mut record = third_party_record();
        record.victim_address = None;
        assert!(matches!(
            validate(&record),
            Err(LetterError::MissingRequiredField("victim_address"))
        ));
    }

    #[test]
    fn third_party_without_relationship_is_rejected() {
        let mut record = third_party_record();
        record.relationship_to_victim = None;
        assert!(matches!(
            validate(&record),
            Err(LetterError::MissingRequiredField("relationship_to_victim"))
        ));
    }

    #[test]
    fn whitespace_only_victim_field_counts_as_missing() {
        let mut record = third_party_record();
        record.victim_address = Some("   ".to_string());
        assert!(matches!(
            validate(&record),
            Err(LetterError::MissingRequiredField("victim_address"))
        ));
    }
}
