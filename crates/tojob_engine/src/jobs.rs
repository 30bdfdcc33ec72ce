use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tojob_core::Job;

use crate::{QueryError, QueryFailure};

pub const DEFAULT_ENDPOINT: &str = "https://api.graphql.jobs/";

const JOBS_QUERY: &str = "\
query Jobs($type: String!) {
  jobs(type: $type) {
    title
    description
    company {
      name
      logoUrl
    }
  }
}";

#[derive(Debug, Clone)]
pub struct QuerySettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Boundary to the remote jobs service.
#[async_trait::async_trait]
pub trait JobsSource: Send + Sync {
    async fn jobs_by_type(&self, job_type: &str) -> Result<Vec<Job>, QueryError>;
}

/// [`JobsSource`] that posts the jobs query to a GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct GraphqlJobsSource {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphqlJobsSource {
    pub fn new(settings: QuerySettings) -> Result<Self, QueryError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| QueryError::new(QueryFailure::InvalidEndpoint, err.to_string()))?;
        Ok(Self {
            client,
            endpoint: settings.endpoint,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<JobsData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct JobsData {
    jobs: Vec<Job>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[async_trait::async_trait]
impl JobsSource for GraphqlJobsSource {
    async fn jobs_by_type(&self, job_type: &str) -> Result<Vec<Job>, QueryError> {
        let body = json!({
            "query": JOBS_QUERY,
            "variables": { "type": job_type },
        });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::new(
                QueryFailure::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let envelope: GraphqlResponse = response
            .json()
            .await
            .map_err(|err| QueryError::new(QueryFailure::MalformedResponse, err.to_string()))?;

        if !envelope.errors.is_empty() {
            let message = envelope
                .errors
                .iter()
                .map(|error| error.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(QueryError::new(QueryFailure::Server, message));
        }

        match envelope.data {
            Some(data) => Ok(data.jobs),
            None => Err(QueryError::new(
                QueryFailure::MalformedResponse,
                "response carried neither data nor errors",
            )),
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> QueryError {
    if err.is_timeout() {
        return QueryError::new(QueryFailure::Timeout, err.to_string());
    }
    QueryError::new(QueryFailure::Network, err.to_string())
}
