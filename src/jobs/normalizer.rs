// src/jobs/normalizer.rs
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use super::types::present;
use super::{CanonicalJob, RawProviderJob, MAX_API_JOBS};

pub const PROVIDER_SOURCE: &str = "LinkedIn";
pub const SALARY_NOT_SPECIFIED: &str = "Salary not specified";
pub const RECENTLY_POSTED: &str = "Recently posted";

const ID_PREFIX: &str = "linkedin-";
const JOB_VIEW_URL: &str = "https://www.linkedin.com/jobs/view/";
const JOBS_ROOT_URL: &str = "https://www.linkedin.com/jobs/";

/// Identity of a provider record: `job_id-company_name-job_title`.
pub fn dedup_key(raw: &RawProviderJob) -> String {
    format!(
        "{}-{}-{}",
        raw.job_id.as_deref().unwrap_or_default(),
        raw.company_name.as_deref().unwrap_or_default(),
        raw.job_title.as_deref().unwrap_or_default()
    )
}

/// Collapse records sharing a key. A key keeps the position of its first
/// occurrence and the contents of its last.
pub fn deduplicate(records: Vec<RawProviderJob>) -> Vec<RawProviderJob> {
    let mut slots: HashMap<String, usize> = HashMap::with_capacity(records.len());
    let mut unique: Vec<RawProviderJob> = Vec::with_capacity(records.len());

    for record in records {
        match slots.entry(dedup_key(&record)) {
            Entry::Occupied(slot) => unique[*slot.get()] = record,
            Entry::Vacant(slot) => {
                slot.insert(unique.len());
                unique.push(record);
            }
        }
    }

    unique
}

/// Map one provider record onto a `CanonicalJob`. Total over partial input.
pub fn to_canonical(raw: RawProviderJob, city: &str) -> CanonicalJob {
    let job_id = present(&raw.job_id).map(str::to_string);

    let apply_link = present(&raw.linkedin_job_url_cleaned)
        .or_else(|| present(&raw.job_url))
        .map(str::to_string)
        .unwrap_or_else(|| match &job_id {
            Some(id) => format!("{}{}", JOB_VIEW_URL, id),
            None => JOBS_ROOT_URL.to_string(),
        });

    let id = match &job_id {
        Some(id) => format!("{}{}", ID_PREFIX, id),
        None => format!("{}{}", ID_PREFIX, random_token()),
    };

    CanonicalJob {
        id,
        title: raw.job_title.unwrap_or_default(),
        company: raw.company_name.unwrap_or_default(),
        location: present(&raw.location).unwrap_or(city).to_string(),
        salary: Some(
            present(&raw.salary_range)
                .unwrap_or(SALARY_NOT_SPECIFIED)
                .to_string(),
        ),
        apply_link,
        source: PROVIDER_SOURCE.to_string(),
        description: present(&raw.job_description).map(str::to_string),
        posted_date: Some(present(&raw.posted_date).unwrap_or(RECENTLY_POSTED).to_string()),
    }
}

/// Deduplicate, keep the first `MAX_API_JOBS` in order and map them.
pub fn normalize(records: Vec<RawProviderJob>, city: &str) -> Vec<CanonicalJob> {
    let mut seen_ids = HashSet::new();

    deduplicate(records)
        .into_iter()
        .take(MAX_API_JOBS)
        .map(|raw| to_canonical(raw, city))
        .map(|mut job| {
            // Same provider id under a different company/title still needs a distinct id.
            let base = job.id.clone();
            let mut n = 2;
            while !seen_ids.insert(job.id.clone()) {
                job.id = format!("{}-{}", base, n);
                n += 1;
            }
            job
        })
        .collect()
}

fn random_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..9].to_string()
}
