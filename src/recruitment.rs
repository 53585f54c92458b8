//! Recruitment pipeline summaries.
//!
//! Stage totals and per-job applicant counts are pure functions of the
//! candidate records. Nothing here is cached or written back: the store
//! holds only the records, and every summary is recomputed from them on
//! read, so a count can never disagree with the candidates it describes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{Candidate, JobPosting, JobStatus, PipelineStage};

/// The number of candidates sitting at one pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCount {
    /// The pipeline stage.
    pub stage: PipelineStage,
    /// Candidates currently at this stage.
    pub count: u32,
}

/// A job posting with its applicant count derived from the candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplicantSummary {
    /// The posting's identifier.
    pub job_id: String,
    /// The job title.
    pub title: String,
    /// The department the posting belongs to.
    pub department: String,
    /// Whether the posting accepts applications.
    pub status: JobStatus,
    /// Candidates counted toward this posting.
    pub applicants: u32,
}

/// Counts candidates at each pipeline stage.
///
/// Every stage appears in the result, in pipeline order, with a zero for
/// stages no candidate sits at. The counts always sum to the number of
/// candidates.
pub fn stage_counts(candidates: &[Candidate]) -> Vec<StageCount> {
    PipelineStage::ALL
        .iter()
        .map(|&stage| StageCount {
            stage,
            count: candidates.iter().filter(|c| c.stage == stage).count() as u32,
        })
        .collect()
}

/// Derives the applicant count for each job posting.
///
/// A candidate counts toward the posting their `job_id` names. When the
/// application carries no `job_id`, or names a posting that no longer
/// exists, the candidate counts toward every posting whose title matches
/// their position, case-insensitively.
pub fn job_summaries(jobs: &[JobPosting], candidates: &[Candidate]) -> Vec<JobApplicantSummary> {
    let known: HashSet<&str> = jobs.iter().map(|job| job.id.as_str()).collect();

    jobs.iter()
        .map(|job| {
            let applicants = candidates
                .iter()
                .filter(|candidate| applies_to(candidate, job, &known))
                .count() as u32;

            JobApplicantSummary {
                job_id: job.id.clone(),
                title: job.title.clone(),
                department: job.department.clone(),
                status: job.status,
                applicants,
            }
        })
        .collect()
}

fn applies_to(candidate: &Candidate, job: &JobPosting, known: &HashSet<&str>) -> bool {
    match candidate.job_id.as_deref() {
        Some(id) if known.contains(id) => id == job.id,
        _ => {
            let position = candidate.position.trim();
            !position.is_empty() && position.eq_ignore_ascii_case(job.title.trim())
        }
    }
}
