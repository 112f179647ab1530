// src/jobs/aggregator.rs
use tracing::{error, info, warn};

use super::locality::filter_by_city;
use super::normalizer::normalize;
use super::query_planner::plan_queries;
use super::{CanonicalJob, FallbackReason, JobFetcher, JobsResponse};
use crate::core::config_manager::JobsConfig;
use crate::core::ServiceClient;

/// Runs the jobs pipeline for one request. Holds no per-request state.
pub struct JobAggregator {
    fetcher: Option<JobFetcher>,
    hiring_intents: Vec<String>,
}

impl JobAggregator {
    pub fn new(config: &JobsConfig, client: ServiceClient) -> Self {
        let fetcher = config.api_key.as_ref().map(|key| {
            JobFetcher::new(
                client,
                config.endpoint.clone(),
                key.clone(),
                config.api_host.clone(),
            )
        });

        Self {
            fetcher,
            hiring_intents: config.hiring_intents.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.fetcher.is_some()
    }

    /// Never fails: any problem on the provider path yields the fallback set.
    pub async fn search(&self, city: &str) -> JobsResponse {
        match self.run_pipeline(city).await {
            Ok(jobs) => {
                info!("Serving {} provider jobs for {}", jobs.len(), city);
                JobsResponse::from_api(jobs)
            }
            Err(reason) => {
                warn!("Serving fallback jobs for {}: {}", city, reason);
                JobsResponse::fallback()
            }
        }
    }

    async fn run_pipeline(&self, city: &str) -> Result<Vec<CanonicalJob>, FallbackReason> {
        let fetcher = self
            .fetcher
            .as_ref()
            .ok_or(FallbackReason::MissingCredential)?;

        let queries = plan_queries(city, self.hiring_intents.as_slice());

        let records = fetcher.fetch_all(&queries).await.map_err(|e| {
            error!("Error fetching jobs from provider: {:#}", e);
            FallbackReason::FetchFailed
        })?;

        let jobs = normalize(records, city);
        if jobs.is_empty() {
            return Err(FallbackReason::EmptyResult);
        }

        let jobs = filter_by_city(jobs, city);
        if jobs.is_empty() {
            return Err(FallbackReason::EmptyResult);
        }

        Ok(jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigManager;
    use crate::jobs::{JobsSource, MAX_API_JOBS};

    fn aggregator(api_key: Option<&str>, endpoint: String) -> JobAggregator {
        let mut config = ConfigManager::default().jobs;
        config.api_key = api_key.map(str::to_string);
        config.endpoint = endpoint;
        JobAggregator::new(&config, ServiceClient::new(5).unwrap())
    }

    #[tokio::test]
    async fn test_missing_credential_serves_fallback_without_calling_provider() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/search")
            .expect(0)
            .create_async()
            .await;

        let agg = aggregator(None, format!("{}/search", server.url()));
        assert!(!agg.is_configured());

        for city in ["Bangalore", "All Cities", "Nowhere"] {
            let response = agg.search(city).await;
            assert_eq!(response.source, JobsSource::Fallback);
            assert_eq!(response.jobs.len(), 5);
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_empty_provider_results_serve_fallback() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/search")
            .with_status(200)
            .with_body("[]")
            .expect(3)
            .create_async()
            .await;

        let response = aggregator(Some("k"), format!("{}/search", server.url()))
            .search("Pune")
            .await;
        assert_eq!(response.source, JobsSource::Fallback);
        assert_eq!(response.total, 5);
    }

    #[tokio::test]
    async fn test_provider_failure_serves_fallback() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/search")
            .with_status(502)
            .expect(3)
            .create_async()
            .await;

        let response = aggregator(Some("k"), format!("{}/search", server.url()))
            .search("Pune")
            .await;
        assert_eq!(response.source, JobsSource::Fallback);
    }

    #[tokio::test]
    async fn test_provider_jobs_are_deduplicated_and_filtered() {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::json!([
            {"job_id": "1", "company_name": "Acme", "job_title": "Engineer", "location": "Bangalore, Karnataka"},
            {"job_id": "2", "company_name": "Globex", "job_title": "Analyst", "location": "Mumbai"},
        ]);
        let _mock = server
            .mock("POST", "/search")
            .with_status(200)
            .with_body(body.to_string())
            .expect(3)
            .create_async()
            .await;

        let response = aggregator(Some("k"), format!("{}/search", server.url()))
            .search("Bangalore")
            .await;

        assert_eq!(response.source, JobsSource::Api);
        assert_eq!(response.total, 1);
        assert_eq!(response.jobs[0].id, "linkedin-1");
        assert!(response.jobs.iter().all(|j| j.source == "LinkedIn"));
    }

    #[tokio::test]
    async fn test_filter_emptying_the_set_serves_fallback() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/search")
            .with_status(200)
            .with_body(r#"[{"job_id":"2","company_name":"Globex","job_title":"Analyst","location":"Mumbai"}]"#)
            .expect(3)
            .create_async()
            .await;

        let response = aggregator(Some("k"), format!("{}/search", server.url()))
            .search("Chennai")
            .await;
        assert_eq!(response.source, JobsSource::Fallback);
    }

    #[tokio::test]
    async fn test_api_response_is_capped() {
        let mut server = mockito::Server::new_async().await;
        let records: Vec<_> = (0..30)
            .map(|i| serde_json::json!({"job_id": i, "company_name": "Acme", "job_title": "Engineer", "location": "India"}))
            .collect();
        let _mock = server
            .mock("POST", "/search")
            .with_status(200)
            .with_body(serde_json::Value::Array(records).to_string())
            .expect(3)
            .create_async()
            .await;

        let response = aggregator(Some("k"), format!("{}/search", server.url()))
            .search("All Cities")
            .await;
        assert_eq!(response.source, JobsSource::Api);
        assert_eq!(response.jobs.len(), MAX_API_JOBS);
        assert_eq!(response.total, MAX_API_JOBS);
    }
}
