//! Generator policy tests: retry ceiling, non-retry classes, fallback totality.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use canvo_gen::{BackendError, CanvasGenerator, GenerativeBackend, RetryPolicy};
use pretty_assertions::assert_eq;

const COMPLETE_JSON: &str = r#"{
    "key_partners": ["Roasters", "Couriers", "Packaging suppliers"],
    "key_activities": ["Curation", "Fulfilment", "Community"],
    "value_propositions": ["Fresh artisanal coffee monthly"],
    "customer_relationships": ["Subscription management"],
    "customer_segments": ["Coffee enthusiasts"],
    "key_resources": ["Supplier network"],
    "channels": ["Web store"],
    "cost_structure": ["Beans", "Shipping"],
    "revenue_streams": ["Monthly subscriptions"]
}"#;

/// Backend that replays a fixed script of responses and counts calls.
struct ScriptedBackend {
    script: Mutex<VecDeque<Result<String, BackendError>>>,
    calls: AtomicU32,
}

impl ScriptedBackend {
    fn new(script: Vec<Result<String, BackendError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            calls: AtomicU32::new(0),
        })
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerativeBackend for ScriptedBackend {
    async fn complete(&self, _prompt: &str) -> Result<String, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .expect("script exhausted: generator made more attempts than scripted")
    }
}

fn overloaded() -> BackendError {
    BackendError::Overloaded {
        status: 503,
        message: "The model is overloaded. Please try again later.".to_string(),
    }
}

fn make_generator(backend: Arc<ScriptedBackend>) -> CanvasGenerator {
    CanvasGenerator::new(backend).with_retry_policy(RetryPolicy::immediate())
}

#[tokio::test]
async fn well_formed_response_passes_through_unchanged() {
    let backend = ScriptedBackend::new(vec![Ok(COMPLETE_JSON.to_string())]);
    let generator = make_generator(Arc::clone(&backend));

    let canvas = generator
        .generate("A subscription box for artisanal coffee", "Food & Beverage")
        .await;

    assert_eq!(backend.calls(), 1);
    assert_eq!(
        canvas.key_partners,
        vec!["Roasters", "Couriers", "Packaging suppliers"]
    );
    assert_eq!(canvas.revenue_streams, vec!["Monthly subscriptions"]);
}

#[tokio::test]
async fn fenced_response_parses_the_same() {
    let backend = ScriptedBackend::new(vec![Ok(format!("```json\n{COMPLETE_JSON}\n```"))]);
    let canvas = make_generator(Arc::clone(&backend)).generate("idea", "industry").await;

    assert_eq!(backend.calls(), 1);
    assert_eq!(canvas.channels, vec!["Web store"]);
}

#[tokio::test]
async fn persistent_overload_makes_exactly_four_attempts_then_falls_back() {
    let backend = ScriptedBackend::new(vec![
        Err(overloaded()),
        Err(overloaded()),
        Err(overloaded()),
        Err(overloaded()),
    ]);
    let canvas = make_generator(Arc::clone(&backend))
        .generate("A subscription box for artisanal coffee", "Food & Beverage")
        .await;

    assert_eq!(backend.calls(), 4, "1 initial try + 3 retries");
    assert!(canvas.validate().is_ok());
    assert!(
        canvas.key_partners[0].contains("Food & Beverage"),
        "fallback should interpolate the industry"
    );
}

#[tokio::test]
async fn overload_then_success_is_invisible_to_the_caller() {
    let backend = ScriptedBackend::new(vec![Err(overloaded()), Ok(COMPLETE_JSON.to_string())]);
    let canvas = make_generator(Arc::clone(&backend)).generate("idea", "industry").await;

    assert_eq!(backend.calls(), 2);
    assert_eq!(canvas.customer_segments, vec!["Coffee enthusiasts"]);
}

#[tokio::test]
async fn malformed_response_is_not_retried() {
    let backend = ScriptedBackend::new(vec![Ok("not json at all".to_string())]);
    let canvas = make_generator(Arc::clone(&backend)).generate("idea", "industry").await;

    assert_eq!(backend.calls(), 1, "parse failure must not trigger a retry");
    assert!(canvas.validate().is_ok());
}

#[tokio::test]
async fn missing_field_response_is_not_retried() {
    let incomplete = COMPLETE_JSON.replace("\"channels\": [\"Web store\"],", "");
    let backend = ScriptedBackend::new(vec![Ok(incomplete)]);
    let canvas = make_generator(Arc::clone(&backend)).generate("idea", "industry").await;

    assert_eq!(backend.calls(), 1);
    assert!(canvas.validate().is_ok(), "fallback is always complete");
}

#[tokio::test]
async fn non_retryable_backend_error_falls_back_immediately() {
    let backend = ScriptedBackend::new(vec![Err(BackendError::Api {
        status: 400,
        message: "API key not valid".to_string(),
    })]);
    let canvas = make_generator(Arc::clone(&backend)).generate("idea", "industry").await;

    assert_eq!(backend.calls(), 1);
    assert!(canvas.validate().is_ok());
}

#[tokio::test]
async fn empty_completion_falls_back() {
    let backend = ScriptedBackend::new(vec![Err(BackendError::Empty)]);
    let canvas = make_generator(Arc::clone(&backend)).generate("idea", "industry").await;

    assert_eq!(backend.calls(), 1);
    assert!(canvas.validate().is_ok());
}

#[tokio::test]
async fn concurrent_generations_are_independent() {
    let first = ScriptedBackend::new(vec![Ok(COMPLETE_JSON.to_string())]);
    let second = ScriptedBackend::new(vec![Err(overloaded()), Ok(COMPLETE_JSON.to_string())]);
    let gen_a = make_generator(Arc::clone(&first));
    let gen_b = make_generator(Arc::clone(&second));

    let (a, b) = tokio::join!(gen_a.generate("a", "x"), gen_b.generate("b", "y"));

    assert_eq!(first.calls(), 1);
    assert_eq!(second.calls(), 2);
    assert_eq!(a, b);
}
