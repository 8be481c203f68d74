use super::{CompletionService, RecommendationService};
use crate::config::ApiConfig;
use crate::core::error::VerseError;
use crate::course::Course;
use crate::services::base_client::BaseApiClient;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
struct ResponseRequest<'a> {
    course: Course,
    query: &'a str,
}

#[derive(Serialize)]
struct RecommendationRequest<'a> {
    course: Course,
    messages: &'a [String],
}

/// HTTP client for the professor RAG backend, serving both the response and
/// the recommendation endpoints.
#[derive(Clone)]
pub struct ProfessorClient {
    client: BaseApiClient,
    response_path: String,
    recommendation_path: String,
}

impl ProfessorClient {
    pub fn new(config: &ApiConfig) -> Result<Self, VerseError> {
        let timeout = config.timeout_secs.map(Duration::from_secs);
        Ok(Self {
            client: BaseApiClient::new(config.base_url.clone(), timeout)?,
            response_path: config.response_path.clone(),
            recommendation_path: config.recommendation_path.clone(),
        })
    }
}

#[async_trait]
impl CompletionService for ProfessorClient {
    async fn complete(&self, course: Course, query: &str) -> Result<String, VerseError> {
        let payload = ResponseRequest { course, query };
        self.client.post_json(&self.response_path, &payload).await
    }
}

#[async_trait]
impl RecommendationService for ProfessorClient {
    async fn recommend(&self, course: Course, messages: &[String]) -> Result<String, VerseError> {
        let payload = RecommendationRequest { course, messages };
        self.client
            .post_json(&self.recommendation_path, &payload)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ProfessorClient {
        let config = ApiConfig {
            base_url: format!("{}/rag", server.uri()),
            ..ApiConfig::default()
        };
        ProfessorClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn completion_posts_course_and_query() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rag/professorResponse"))
            .and(body_json(json!({
                "course": "Milton",
                "query": "Who is Satan?"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!("An answer.\n\nA segue.")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let reply = client_for(&server)
            .complete(Course::Milton, "Who is Satan?")
            .await
            .unwrap();
        assert_eq!(reply, "An answer.\n\nA segue.");
    }

    #[tokio::test]
    async fn completion_error_status_is_a_transport_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rag/professorResponse"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete(Course::EnglishLiterature, "What is iambic pentameter?")
            .await
            .unwrap_err();
        assert!(matches!(err, VerseError::Transport(_)));
    }

    #[tokio::test]
    async fn recommendation_posts_course_and_messages() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rag/professorRecommendation"))
            .and(body_json(json!({
                "course": "Modern Poetry",
                "messages": ["Who wrote The Waste Land?", "T. S. Eliot."]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!("Read Four Quartets.")))
            .expect(1)
            .mount(&server)
            .await;

        let history = vec![
            "Who wrote The Waste Land?".to_string(),
            "T. S. Eliot.".to_string(),
        ];
        let reply = client_for(&server)
            .recommend(Course::ModernPoetry, &history)
            .await
            .unwrap();
        assert_eq!(reply, "Read Four Quartets.");
    }

    #[tokio::test]
    async fn recommendation_error_status_is_a_transport_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rag/professorRecommendation"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .recommend(Course::Milton, &[])
            .await
            .unwrap_err();
        assert!(matches!(err, VerseError::Transport(_)));
    }

    #[tokio::test]
    async fn non_string_body_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": 1 })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete(Course::Milton, "Paradise Lost?")
            .await
            .unwrap_err();
        assert!(matches!(err, VerseError::Serialization(_)));
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_failure() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:1/rag".to_string(),
            ..ApiConfig::default()
        };
        let err = ProfessorClient::new(&config)
            .unwrap()
            .complete(Course::Milton, "Anyone there?")
            .await
            .unwrap_err();
        assert!(matches!(err, VerseError::Transport(_)));
    }
}
