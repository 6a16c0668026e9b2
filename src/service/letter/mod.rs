//! Complaint letter template engine
//!
//! Renders a validated [`ComplaintRecord`] into the fixed letter skeleton.
//! Section builders live in [`sections`]; each returns an empty string when
//! its input is absent, so assembly stays one deterministic template. The
//! only non-deterministic input is the current-date stamp.

use chrono::Local;

use crate::model::{ComplaintRecord, ComplaintResponse, Config, ImmediateHelp};

pub mod sections;
pub mod validation;

const SAFETY_REMINDER: &str = "Please keep a copy of this document in a secure location.";

const NEXT_STEPS: &[&str] = &[
    "Review all information for accuracy",
    "Make multiple copies for your records",
    "Consider seeking legal counsel",
    "Create a safety plan",
    "Keep all related documentation",
];

#[derive(Debug, thiserror::Error)]
pub enum LetterError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),
}

/// Service producing complaint letters and their advisory fields
#[derive(Clone)]
pub struct LetterService {
    emergency_hotline: String,
    legal_aid_url: String,
}

impl LetterService {
    pub fn new(config: &Config) -> Self {
        Self {
            emergency_hotline: config.emergency_hotline.clone(),
            legal_aid_url: config.legal_aid_url.clone(),
        }
    }

    /// Validate a record and produce the full complaint response
    pub fn generate(&self, record: &ComplaintRecord) -> Result<ComplaintResponse, LetterError> {
        validation::validate(record)?;

        let date_stamp = Local::now().format("%B %d, %Y").to_string();
        let letter = render(record, &date_stamp);

        tracing::info!(
            filing_type = ?record.filing_type,
            letter_length = letter.len(),
            "Complaint letter generated"
        );

        Ok(ComplaintResponse {
            success: true,
            complaint_letter: letter,
            safety_reminder: SAFETY_REMINDER.to_string(),
            next_steps: NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
            immediate_help: ImmediateHelp {
                emergency: self.emergency_hotline.clone(),
                legal_aid: self.legal_aid_url.clone(),
            },
        })
    }
}

/// Assemble the letter from its sections
///
/// Callers must validate the record first; victim fields referenced by the
/// third-party sections fall back to empty strings rather than panicking.
fn render(record: &ComplaintRecord, date_stamp: &str) -> String {
    format!(
        r#"{date_stamp}

{complainant_name}
{complainant_address}
{contact_section}

{filing_authority}
{filing_authority_address}

Subject: Formal Domestic Violence Complaint

Dear {authority_title},

I am writing to formally report a case of domestic violence that occurred on {incident_date} at {incident_time} in {incident_location}. {filing_capacity}

Incident Details:

{incident_narrative}
{injuries_section}{evidence_section}{witness_section}
Request for Action:

1. Implementation of immediate protective measures to ensure safety
2. Thorough investigation of the reported incidents
3. Appropriate legal action based on the investigation findings
4. Regular updates on the case progress
{additional_requests}
I request that my personal information and the details of this complaint be handled with strict confidentiality to ensure my safety and protection.

Thank you for your immediate attention to this serious matter.

Respectfully,
{complainant_name}
{contact_line}{victim_information}"#,
        date_stamp = date_stamp,
        complainant_name = record.complainant_name,
        complainant_address = record.complainant_address,
        contact_section = sections::contact_section(record),
        filing_authority = record.filing_authority,
        filing_authority_address = record.filing_authority_address,
        authority_title = sections::authority_title(&record.filing_authority),
        incident_date = record.date_of_incident,
        incident_time = record.time_of_incident,
        incident_location = record.location_of_incident,
        filing_capacity = sections::filing_capacity(record),
        incident_narrative = record.incident_details,
        injuries_section = sections::injuries_section(record.injuries_sustained.as_deref()),
        evidence_section = sections::evidence_section(record.evidence_description.as_deref()),
        witness_section = sections::witness_section(record.witness_information.as_deref()),
        additional_requests = sections::additional_requests(record.filing_type),
        contact_line = sections::contact_line(record),
        victim_information = sections::victim_information(record),
    )
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::FilingType;

    pub fn self_record() -> ComplaintRecord {
        ComplaintRecord {
            filing_type: FilingType::SelfFiled,
            complainant_name: "Jane Doe".to_string(),
            complainant_address: "42 Elm Street, Springfield, 62704".to_string(),
            complainant_contact: Some("555-0100".to_string()),
            complainant_email: Some("jane@example.org".to_string()),
            victim_name: None,
            victim_address: None,
            relationship_to_victim: None,
            filing_authority: "Chief Inspector Morse".to_string(),
            filing_authority_address: "1 Precinct Plaza, Springfield".to_string(),
            incident_details: "Repeated threats and physical intimidation at home.".to_string(),
            date_of_incident: "2025-11-03".to_string(),
            time_of_incident: "around 9 PM".to_string(),
            location_of_incident: "our shared apartment".to_string(),
            injuries_sustained: None,
            witness_information: None,
            evidence_description: None,
        }
    }

    pub fn third_party_record() -> ComplaintRecord {
        ComplaintRecord {
            filing_type: FilingType::ThirdParty,
            victim_name: Some("Dana Smith".to_string()),
            victim_address: Some("7 Oak Lane, Springfield".to_string()),
            relationship_to_victim: Some("sister".to_string()),
            ..self_record()
        }
    }

    fn test_service() -> LetterService {
        LetterService::new(&Config::default())
    }

    fn numbered_request_lines(letter: &str) -> usize {
        letter
            .lines()
            .filter(|line| {
                line.trim_start()
                    .split_once(". ")
                    .is_some_and(|(n, _)| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
            })
            .count()
    }

    #[test]
    fn self_filing_renders_direct_victim_phrasing() {
        let response = test_service().generate(&self_record()).unwrap();
        let letter = &response.complaint_letter;

        assert!(letter.contains("I am the direct victim of the incidents described"));
        assert!(!letter.contains("Victim Information:"));
        assert!(letter.contains("Subject: Formal Domestic Violence Complaint"));
        assert!(letter.contains("Dear Morse,"));
    }

    #[test]
    fn self_filing_has_five_numbered_requests() {
        let response = test_service().generate(&self_record()).unwrap();
        assert_eq!(numbered_request_lines(&response.complaint_letter), 5);
    }

    #[test]
    fn third_party_filing_has_four_numbered_requests_and_victim_block() {
        let response = test_service().generate(&third_party_record()).unwrap();
        let letter = &response.complaint_letter;

        assert_eq!(numbered_request_lines(letter), 4);
        assert!(letter.contains("on behalf of Dana Smith, as their sister"));
        assert!(letter.contains("Victim Information:\nName: Dana Smith\nAddress: 7 Oak Lane"));
    }

    #[test]
    fn invalid_third_party_record_is_rejected_before_rendering() {
        let mut record = third_party_record();
        record.relationship_to_victim = None;

        assert!(matches!(
            test_service().generate(&record),
            Err(LetterError::MissingRequiredField("relationship_to_victim"))
        ));
    }

    #[test]
    fn response_carries_advisory_fields_from_configuration() {
        let config = Config {
            emergency_hotline: "1-800-000-0000".to_string(),
            legal_aid_url: "legalaid.example".to_string(),
            ..Config::default()
        };

        let response = LetterService::new(&config).generate(&self_record()).unwrap();

        assert!(response.success);
        assert_eq!(response.immediate_help.emergency, "1-800-000-0000");
        assert_eq!(response.immediate_help.legal_aid, "legalaid.example");
        assert_eq!(response.next_steps.len(), 5);
        assert_eq!(response.safety_reminder, SAFETY_REMINDER);
    }

    #[test]
    fn omitted_injuries_leave_no_injuries_heading() {
        let response = test_service().generate(&self_record()).unwrap();
        assert!(!response.complaint_letter.contains("Injuries Sustained:"));

        let mut record = self_record();
        record.injuries_sustained = Some("sprained wrist".to_string());
        let response = test_service().generate(&record).unwrap();
        assert!(response.complaint_letter.contains("Injuries Sustained:"));
    }

    #[test]
    fn closing_contact_line_follows_signature() {
        let response = test_service().generate(&self_record()).unwrap();
        assert!(response
            .complaint_letter
            .contains("Respectfully,\nJane Doe\nContact: 555-0100"));
    }
}
