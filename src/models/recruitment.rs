//! Recruitment models: job postings and candidates.
//!
//! Neither model stores a count. Stage totals and per-job applicant
//! numbers are always recomputed from the candidate records on read; the
//! original system cached them alongside the documents and the copies
//! drifted apart.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The stage a candidate sits at in the hiring pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    /// Application received, not yet screened.
    #[default]
    NewApplications,
    /// Under resume screening.
    Screening,
    /// Interview scheduled or in progress.
    Interview,
    /// Skills or aptitude assessment.
    Assessment,
    /// Offer extended.
    Offer,
    /// Offer accepted.
    Hired,
}

impl PipelineStage {
    /// Every stage, in pipeline order.
    pub const ALL: [PipelineStage; 6] = [
        PipelineStage::NewApplications,
        PipelineStage::Screening,
        PipelineStage::Interview,
        PipelineStage::Assessment,
        PipelineStage::Offer,
        PipelineStage::Hired,
    ];
}

/// Whether a job posting accepts applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Accepting applications.
    Open,
    /// No longer accepting applications.
    Closed,
}

/// An open or closed job posting.
///
/// The applicant count deliberately has no field here; it is derived from
/// the candidate records whenever a summary is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    /// Unique identifier for the posting.
    pub id: String,
    /// The job title candidates apply for.
    pub title: String,
    /// The department the posting belongs to.
    pub department: String,
    /// Whether the posting accepts applications.
    pub status: JobStatus,
}

/// A candidate in the hiring pipeline.
///
/// The original collection carried several alternate spellings of the same
/// fields merged with fallback chains (`name` / `candidateName` /
/// `fullName`, three phone variants, three resume variants); this is the
/// one canonical schema, normalized at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Unique identifier for the candidate.
    pub id: String,
    /// The candidate's full name.
    pub name: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone_number: String,
    /// Link to the candidate's resume.
    #[serde(default)]
    pub resume_link: String,
    /// The position applied for, as free text.
    pub position: String,
    /// The job posting applied to, when the application carries one.
    #[serde(default)]
    pub job_id: Option<String>,
    /// Current pipeline stage.
    #[serde(default)]
    pub stage: PipelineStage,
    /// The date the application was received.
    pub applied_on: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&PipelineStage::NewApplications).unwrap(),
            "\"new_applications\""
        );
        assert_eq!(
            serde_json::to_string(&PipelineStage::Hired).unwrap(),
            "\"hired\""
        );
    }

    #[test]
    fn test_stage_defaults_to_new_applications() {
        assert_eq!(PipelineStage::default(), PipelineStage::NewApplications);
    }

    #[test]
    fn test_deserialize_candidate_with_defaults() {
        let json = r#"{
            "id": "cand_001",
            "name": "John Doe",
            "position": "Software Engineer",
            "applied_on": "2025-06-15"
        }"#;

        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.stage, PipelineStage::NewApplications);
        assert_eq!(candidate.job_id, None);
        assert_eq!(candidate.phone_number, "");
    }

    #[test]
    fn test_job_posting_round_trip() {
        let job = JobPosting {
            id: "job_001".to_string(),
            title: "Software Engineer".to_string(),
            department: "Engineering".to_string(),
            status: JobStatus::Open,
        };

        let json = serde_json::to_string(&job).unwrap();
        assert!(json.contains("\"status\":\"open\""));
        let deserialized: JobPosting = serde_json::from_str(&json).unwrap();
        assert_eq!(job, deserialized);
    }
}
