//! Content hashes for job reports.

use crate::job::JobFile;
use sha2::{Digest, Sha256};

pub fn compute_job_id(job: &JobFile, table_fingerprint: &str, version: &str) -> String {
    let mut hasher = Sha256::new();

    let job_json = serde_json::to_string(job).unwrap_or_default();
    hasher.update(job_json.as_bytes());
    hasher.update(table_fingerprint.as_bytes());
    hasher.update(version.as_bytes());

    format!("{:x}", hasher.finalize())
}

/// SHA-256 of a coefficient source text.
pub fn source_fingerprint(text: &str) -> String {
    format!("sha256:{:x}", Sha256::digest(text.as_bytes()))
}
