//! Complaint intake and response models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Capacity in which a complaint is filed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FilingType {
    /// Filed by the victim directly
    #[serde(rename = "self")]
    SelfFiled,
    /// Filed by someone on the victim's behalf
    #[serde(rename = "third_party")]
    ThirdParty,
}

/// One complaint submission, constructed fresh per request and never persisted
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ComplaintRecord {
    pub filing_type: FilingType,
    pub complainant_name: String,
    /// Full address including city and postal code
    pub complainant_address: String,
    #[serde(default)]
    pub complainant_contact: Option<String>,
    #[serde(default)]
    pub complainant_email: Option<String>,
    /// Required together with address and relationship for third-party filings
    #[serde(default)]
    pub victim_name: Option<String>,
    #[serde(default)]
    pub victim_address: Option<String>,
    #[serde(default)]
    pub relationship_to_victim: Option<String>,
    /// Name and title of the filing authority
    pub filing_authority: String,
    /// Complete address of the filing authority
    pub filing_authority_address: String,
    pub incident_details: String,
    pub date_of_incident: String,
    /// Approximate time of the incident
    pub time_of_incident: String,
    /// Specific location where the incident occurred
    pub location_of_incident: String,
    #[serde(default)]
    pub injuries_sustained: Option<String>,
    #[serde(default)]
    pub witness_information: Option<String>,
    /// Comma-separated list or free text
    #[serde(default)]
    pub evidence_description: Option<String>,
}

/// Emergency and legal-aid contacts returned alongside every letter
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ImmediateHelp {
    pub emergency: String,
    pub legal_aid: String,
}

/// Successful complaint generation response
#[derive(Debug, Serialize, ToSchema)]
pub struct ComplaintResponse {
    pub success: bool,
    pub complaint_letter: String,
    pub safety_reminder: String,
    pub next_steps: Vec<String>,
    pub immediate_help: ImmediateHelp,
}
