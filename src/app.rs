//! The question-answering boundary.
//!
//! [`Assistant`] dispatches a question either to the arithmetic fast path
//! or to the configured text-generation backend, and converts every failure
//! into a user-displayable reply. Nothing propagates past [`Assistant::answer`].

use tracing::warn;

use crate::adapter::outbound::huggingface::HuggingFace;
use crate::config::{Config, TOKEN_ENV};
use crate::domain::arithmetic::FastPath;
use crate::error::{ConfigError, Error, Result};
use crate::port::outbound::generator::TextGenerator;

/// Reply when no credential is configured.
pub const MISSING_CREDENTIAL: &str =
    "No API token is configured. Set HUGGINGFACEHUB_API_TOKEN to enable model answers.";

/// Reply for a 503 from the endpoint.
pub const MODEL_LOADING: &str = "The model is still loading, please try again in a moment.";

/// Reply when the response body is not valid JSON.
pub const PARSE_FAILURE: &str = "Sorry, I failed to parse the model response.";

/// Reply when the body decodes to something other than a result sequence.
pub const UNEXPECTED_FORMAT: &str = "Sorry, the model returned an unexpected response format.";

/// Stateless question answerer.
///
/// Holds the fast-path rule table and an optional generation backend; no
/// per-call state, so a shared instance is safe across concurrent tasks.
/// The backend is absent when no credential is configured, in which case
/// remote questions get a refusal reply while arithmetic still works.
pub struct Assistant {
    fast_path: FastPath,
    generator: Option<Box<dyn TextGenerator>>,
}

impl Assistant {
    pub fn new(generator: Option<Box<dyn TextGenerator>>) -> Self {
        Self {
            fast_path: FastPath::new(),
            generator,
        }
    }

    /// Build an assistant from configuration, reading the credential from
    /// the environment.
    ///
    /// A missing credential is not fatal: the fast path is unaffected and
    /// remote questions are refused with a hint.
    ///
    /// # Errors
    ///
    /// Returns an error only if the HTTP client cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let generator = match HuggingFace::from_env(config) {
            Ok(client) => Some(Box::new(client) as Box<dyn TextGenerator>),
            Err(Error::Config(ConfigError::MissingField { .. })) => {
                warn!("{TOKEN_ENV} not set; remote answers disabled");
                None
            }
            Err(e) => return Err(e),
        };
        Ok(Self::new(generator))
    }

    /// Answer a single question.
    ///
    /// Never returns an error: every failure is converted into a
    /// user-displayable reply. Performs at most one network call.
    pub async fn answer(&self, question: &str) -> String {
        let question = question.trim();

        if let Some(reply) = self.fast_path.evaluate(question) {
            return reply;
        }

        let Some(generator) = &self.generator else {
            return MISSING_CREDENTIAL.to_string();
        };

        match generator.generate(question).await {
            Ok(text) => text,
            Err(error) => {
                warn!(backend = generator.name(), error = %error, "generation failed");
                describe_failure(&error)
            }
        }
    }
}

/// Convert a generation failure into the reply shown to the user.
fn describe_failure(error: &Error) -> String {
    match error {
        Error::Connection(detail) => format!("Sorry, a network error occurred: {detail}"),
        Error::ModelLoading => MODEL_LOADING.to_string(),
        Error::MalformedResponse(_) => PARSE_FAILURE.to_string(),
        Error::UnexpectedShape => UNEXPECTED_FORMAT.to_string(),
        other => format!("Sorry, I encountered an error: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::arithmetic::DIVISION_BY_ZERO;
    use crate::port::outbound::generator::tests::MockGenerator;

    fn assistant_with(mock: MockGenerator) -> Assistant {
        Assistant::new(Some(Box::new(mock)))
    }

    #[tokio::test]
    async fn arithmetic_answers_without_network_call() {
        let mock = MockGenerator::ok("should never be used");
        let counter = mock.counter();
        let assistant = assistant_with(mock);

        assert_eq!(assistant.answer("2 + 2").await, "2 + 2 = 4");
        assert_eq!(assistant.answer(" 12 * 3 ").await, "12 * 3 = 36");
        assert_eq!(assistant.answer("10 / 0").await, DIVISION_BY_ZERO);
        assert_eq!(counter.get(), 0);
    }

    #[tokio::test]
    async fn non_arithmetic_makes_exactly_one_call() {
        let mock = MockGenerator::ok("Why did the chicken cross the road?");
        let counter = mock.counter();
        let assistant = assistant_with(mock);

        let reply = assistant.answer("Tell me a joke").await;
        assert_eq!(reply, "Why did the chicken cross the road?");
        assert_eq!(counter.get(), 1);
    }

    #[tokio::test]
    async fn missing_credential_refuses_without_generator() {
        let assistant = Assistant::new(None);
        assert_eq!(assistant.answer("Tell me a joke").await, MISSING_CREDENTIAL);
        // The fast path is unaffected by the missing credential
        assert_eq!(assistant.answer("40 + 2").await, "40 + 2 = 42");
    }

    #[tokio::test]
    async fn connection_failure_becomes_network_error_reply() {
        let assistant = assistant_with(MockGenerator::err(Error::Connection(
            "dns error: no such host".into(),
        )));

        let reply = assistant.answer("Tell me a joke").await;
        assert!(reply.contains("network error"), "got: {reply}");
        assert!(reply.contains("no such host"), "got: {reply}");
    }

    #[tokio::test]
    async fn model_loading_becomes_retry_reply() {
        let assistant = assistant_with(MockGenerator::err(Error::ModelLoading));
        assert_eq!(assistant.answer("Tell me a joke").await, MODEL_LOADING);
    }

    #[tokio::test]
    async fn malformed_body_becomes_parse_failure_reply() {
        let malformed = serde_json::from_str::<serde_json::Value>("not json")
            .expect_err("must fail to parse");
        let assistant = assistant_with(MockGenerator::err(Error::MalformedResponse(malformed)));
        assert_eq!(assistant.answer("Tell me a joke").await, PARSE_FAILURE);
    }

    #[tokio::test]
    async fn unexpected_shape_becomes_format_reply() {
        let assistant = assistant_with(MockGenerator::err(Error::UnexpectedShape));
        assert_eq!(assistant.answer("Tell me a joke").await, UNEXPECTED_FORMAT);
    }

    #[tokio::test]
    async fn hard_status_becomes_generic_error_reply() {
        let assistant = assistant_with(MockGenerator::err(Error::UpstreamStatus {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        }));

        let reply = assistant.answer("Tell me a joke").await;
        assert!(reply.starts_with("Sorry, I encountered an error:"), "got: {reply}");
        assert!(reply.contains("500"), "got: {reply}");
    }

    #[tokio::test]
    async fn upstream_error_body_becomes_generic_error_reply() {
        let assistant = assistant_with(MockGenerator::err(Error::Upstream(
            "model is overloaded".into(),
        )));

        let reply = assistant.answer("Tell me a joke").await;
        assert!(reply.starts_with("Sorry, I encountered an error:"), "got: {reply}");
        assert!(reply.contains("overloaded"), "got: {reply}");
    }
}
