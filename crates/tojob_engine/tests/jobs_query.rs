use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use tojob_engine::{GraphqlJobsSource, JobsSource, QueryFailure, QuerySettings};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn source_for(server: &MockServer) -> GraphqlJobsSource {
    let settings = QuerySettings {
        endpoint: server.uri(),
        ..QuerySettings::default()
    };
    GraphqlJobsSource::new(settings).expect("build source")
}

#[tokio::test]
async fn query_parses_jobs_and_sends_type_variable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({ "variables": { "type": "go" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "jobs": [
                    {
                        "title": "Backend Engineer",
                        "description": "Build the backend",
                        "company": { "name": "Acme", "logoUrl": "https://logo.example.com/acme" }
                    },
                    { "title": "Contractor", "description": null, "company": null }
                ]
            }
        })))
        .mount(&server)
        .await;

    let jobs = source_for(&server)
        .jobs_by_type("go")
        .await
        .expect("query ok");

    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].title, "Backend Engineer");
    assert_eq!(
        jobs[0].company.as_ref().map(|c| c.name.as_str()),
        Some("Acme")
    );
    assert!(jobs[1].company.is_none());
}

#[tokio::test]
async fn graphql_errors_become_a_server_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [
                { "message": "Cannot query field jobs" },
                { "message": "Unknown type" }
            ]
        })))
        .mount(&server)
        .await;

    let err = source_for(&server)
        .jobs_by_type("go")
        .await
        .expect_err("query fails");

    assert_eq!(err.kind, QueryFailure::Server);
    assert_eq!(err.message, "Cannot query field jobs; Unknown type");
}

#[tokio::test]
async fn http_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = source_for(&server)
        .jobs_by_type("go")
        .await
        .expect_err("query fails");

    assert_eq!(err.kind, QueryFailure::HttpStatus(500));
}

#[tokio::test]
async fn malformed_body_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = source_for(&server)
        .jobs_by_type("go")
        .await
        .expect_err("query fails");

    assert_eq!(err.kind, QueryFailure::MalformedResponse);
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "data": { "jobs": [] } })),
        )
        .mount(&server)
        .await;

    let settings = QuerySettings {
        endpoint: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..QuerySettings::default()
    };
    let source = GraphqlJobsSource::new(settings).expect("build source");

    let err = source.jobs_by_type("go").await.expect_err("query fails");
    assert_eq!(err.kind, QueryFailure::Timeout);
}

#[tokio::test]
async fn fake_source_always_returns_jobs() {
    let jobs = tojob_engine::FakeJobsSource
        .jobs_by_type("anything")
        .await
        .expect("fake ok");

    assert!((30..60).contains(&jobs.len()));
    assert!(jobs.iter().all(|job| job.company.is_some()));
}
