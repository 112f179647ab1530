// src/jobs/fallback.rs
use std::fmt;

use super::CanonicalJob;

pub const FALLBACK_SOURCE: &str = "fallback";

/// Why the provider path was abandoned for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    MissingCredential,
    FetchFailed,
    EmptyResult,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            FallbackReason::MissingCredential => "no provider credential configured",
            FallbackReason::FetchFailed => "provider fetch failed",
            FallbackReason::EmptyResult => "provider returned no matching jobs",
        };
        f.write_str(reason)
    }
}

struct FallbackSeed {
    id: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    salary: &'static str,
    description: &'static str,
    posted_date: &'static str,
}

const FALLBACK_APPLY_LINK: &str = "https://linkedin.com/jobs/";

const FALLBACK_SEEDS: [FallbackSeed; 5] = [
    FallbackSeed {
        id: "1",
        title: "Senior Software Developer - Women Returnship Program",
        company: "Tech Solutions Inc",
        location: "Bangalore",
        salary: "₹15,00,000 - ₹25,00,000 /year",
        description: "Special returnship program for women in tech with a career break. Flexible work hours, mentorship, and childcare support available.",
        posted_date: "2024-02-20",
    },
    FallbackSeed {
        id: "2",
        title: "Diversity & Inclusion Program Manager",
        company: "Global Services Ltd",
        location: "Mumbai",
        salary: "₹12,00,000 - ₹18,00,000 /year",
        description: "Looking for an experienced professional to lead our D&I initiatives. Women candidates are strongly encouraged to apply.",
        posted_date: "2024-02-19",
    },
    FallbackSeed {
        id: "3",
        title: "Marketing Lead - WomenInTech Initiative",
        company: "Digital Solutions",
        location: "Delhi",
        salary: "₹10,00,000 - ₹15,00,000 /year",
        description: "Join our marketing team to drive campaigns focused on women in technology. Flexible work arrangements available.",
        posted_date: "2024-02-18",
    },
    FallbackSeed {
        id: "4",
        title: "Data Scientist - Women Preferred",
        company: "Tech Corp",
        location: "Hyderabad",
        salary: "₹18,00,000 - ₹25,00,000 /year",
        description: "Seeking women data scientists to join our growing analytics team. Work from home options available.",
        posted_date: "2024-02-17",
    },
    FallbackSeed {
        id: "5",
        title: "Product Manager - Diversity Hiring",
        company: "Innovation Labs",
        location: "Bangalore",
        salary: "₹20,00,000 - ₹30,00,000 /year",
        description: "Looking for women product managers to lead our innovative products. Mentorship and leadership development programs available.",
        posted_date: "2024-02-16",
    },
];

/// The static job set served whenever the provider path is unavailable.
/// Not filtered by city.
pub fn fallback_jobs() -> Vec<CanonicalJob> {
    FALLBACK_SEEDS
        .iter()
        .map(|seed| CanonicalJob {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            company: seed.company.to_string(),
            location: seed.location.to_string(),
            salary: Some(seed.salary.to_string()),
            apply_link: FALLBACK_APPLY_LINK.to_string(),
            source: FALLBACK_SOURCE.to_string(),
            description: Some(seed.description.to_string()),
            posted_date: Some(seed.posted_date.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fallback_set_is_fixed() {
        let jobs = fallback_jobs();
        assert_eq!(jobs.len(), 5);
        assert!(jobs.iter().all(|j| j.source == FALLBACK_SOURCE));
        assert_eq!(jobs, fallback_jobs());
    }

    #[test]
    fn test_fallback_ids_unique() {
        let ids: HashSet<_> = fallback_jobs().into_iter().map(|j| j.id).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(
            FallbackReason::MissingCredential.to_string(),
            "no provider credential configured"
        );
    }
}
