// src/jobs/fetcher.rs
use anyhow::{Context, Result};
use futures::future::join_all;
use tracing::{debug, info, warn};

use super::{ProviderQuery, RawProviderJob};
use crate::core::ServiceClient;

/// Issues planned queries against the job-search provider.
///
/// Every query runs concurrently and independently: a failed query is
/// logged and dropped, successful result sets are concatenated in plan
/// order. The fetch only fails when no query succeeded.
pub struct JobFetcher {
    client: ServiceClient,
    endpoint: String,
    api_key: String,
    api_host: String,
}

impl JobFetcher {
    pub fn new(client: ServiceClient, endpoint: String, api_key: String, api_host: String) -> Self {
        Self {
            client,
            endpoint,
            api_key,
            api_host,
        }
    }

    pub async fn fetch_all(&self, queries: &[ProviderQuery]) -> Result<Vec<RawProviderJob>> {
        if queries.is_empty() {
            return Ok(Vec::new());
        }

        let outcomes = join_all(queries.iter().map(|query| self.fetch_one(query))).await;

        let mut records = Vec::new();
        let mut failures = Vec::new();

        for (query, outcome) in queries.iter().zip(outcomes) {
            match outcome {
                Ok(batch) => {
                    debug!(query = %query.search_terms, records = batch.len(), "Provider query succeeded");
                    records.extend(batch);
                }
                Err(e) => {
                    let reason = format!("{:#}", e);
                    warn!(query = %query.search_terms, error = %reason, "Provider query dropped");
                    failures.push(e);
                }
            }
        }

        if failures.len() == queries.len() {
            let first = failures.swap_remove(0);
            return Err(first.context(format!("All {} provider queries failed", queries.len())));
        }

        info!(
            "Fetched {} raw records from {} of {} provider queries",
            records.len(),
            queries.len() - failures.len(),
            queries.len()
        );
        Ok(records)
    }

    async fn fetch_one(&self, query: &ProviderQuery) -> Result<Vec<RawProviderJob>> {
        let headers = [
            ("X-RapidAPI-Key", self.api_key.as_str()),
            ("X-RapidAPI-Host", self.api_host.as_str()),
        ];

        self.client
            .post_json::<_, Vec<RawProviderJob>>(&self.endpoint, &headers, query)
            .await
            .with_context(|| format!("Provider query '{}' failed", query.search_terms))
    }
}
