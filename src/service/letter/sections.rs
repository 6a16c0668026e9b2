//! Section builders for the complaint letter
//!
//! Each builder returns a fully framed block, or an empty string when its
//! input is absent, so the skeleton in `render` stays a single fixed
//! template.

use crate::model::{ComplaintRecord, FilingType};

const CONTACT_PLACEHOLDER: &str = "Contact information provided separately";
const EVIDENCE_PLACEHOLDER: &str =
    "Documentation is available and can be provided upon request.";
const WITNESS_PLACEHOLDER: &str =
    "Witness details can be provided as needed with appropriate privacy protections.";

/// Email and phone on separate lines (email first), or a placeholder
pub fn contact_section(record: &ComplaintRecord) -> String {
    let mut parts = Vec::new();
    if let Some(email) = record.complainant_email.as_deref() {
        parts.push(email);
    }
    if let Some(contact) = record.complainant_contact.as_deref() {
        parts.push(contact);
    }

    if parts.is_empty() {
        CONTACT_PLACEHOLDER.to_string()
    } else {
        parts.join("\n")
    }
}

/// Narrative stating the capacity in which the complaint is filed
pub fn filing_capacity(record: &ComplaintRecord) -> String {
    match record.filing_type {
        FilingType::SelfFiled => {
            "I am the direct victim of the incidents described in this complaint.".to_string()
        }
        FilingType::ThirdParty => format!(
            "I am filing this complaint on behalf of {}, as their {}. I have direct \
             knowledge of the incidents described herein and am deeply concerned for \
             their safety and well-being.",
            record.victim_name.as_deref().unwrap_or_default(),
            record.relationship_to_victim.as_deref().unwrap_or_default()
        ),
    }
}

/// Labeled injuries block, or nothing when no injuries were reported
pub fn injuries_section(injuries: Option<&str>) -> String {
    match injuries {
        Some(injuries) => format!("\nInjuries Sustained:\n\n{}\n", injuries),
        None => String::new(),
    }
}

/// Labeled evidence block
///
/// Evidence given as a `", "`-separated list becomes hyphen bullets; a single
/// item passes through verbatim; absent evidence yields the fixed
/// available-on-request sentence.
pub fn evidence_section(evidence: Option<&str>) -> String {
    format!(
        "\nSupporting Evidence:\n{}\n",
        format_evidence_description(evidence)
    )
}

fn format_evidence_description(evidence: Option<&str>) -> String {
    let Some(evidence) = evidence else {
        return EVIDENCE_PLACEHOLDER.to_string();
    };

    let points: Vec<&str> = evidence.split(", ").collect();
    if points.len() == 1 {
        return evidence.to_string();
    }

    points
        .iter()
        .map(|point| format!("- {}", point))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Labeled witness block with the report verbatim, or a privacy placeholder
pub fn witness_section(witnesses: Option<&str>) -> String {
    format!(
        "\nWitness Information:\n{}\n",
        witnesses.unwrap_or(WITNESS_PLACEHOLDER)
    )
}

/// Salutation title: last token of a multi-word authority name, else a
/// neutral fallback
pub fn authority_title(filing_authority: &str) -> &str {
    let tokens: Vec<&str> = filing_authority.split_whitespace().collect();
    if tokens.len() > 1 {
        tokens[tokens.len() - 1]
    } else {
        "Sir/Madam"
    }
}

/// Fifth numbered request, present only for self filings
pub fn additional_requests(filing_type: FilingType) -> &'static str {
    match filing_type {
        FilingType::SelfFiled => "5. Provision of necessary support services and resources\n",
        FilingType::ThirdParty => "",
    }
}

/// Closing contact line, empty when no phone contact was given
pub fn contact_line(record: &ComplaintRecord) -> String {
    match record.complainant_contact.as_deref() {
        Some(contact) => format!("Contact: {}\n", contact),
        None => String::new(),
    }
}

/// Victim name and address block, emitted only for third-party filings
pub fn victim_information(record: &ComplaintRecord) -> String {
    match record.filing_type {
        FilingType::ThirdParty => format!(
            "\nVictim Information:\nName: {}\nAddress: {}\n",
            record.victim_name.as_deref().unwrap_or_default(),
            record.victim_address.as_deref().unwrap_or_default()
        ),
        FilingType::SelfFiled => String::new(),
    }
}
