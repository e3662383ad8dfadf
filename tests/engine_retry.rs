//! Retry/backoff/fallback behavior of the generation engine, driven over a
//! scripted in-memory backend with the tokio clock paused. Waits auto-advance
//! instantly, so elapsed paused time measures the schedule exactly.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::time::Instant;

use recipeforge::types::{GenerationRequest, PromptPayload, SchemaTag};
use recipeforge::{Error, GenerationConfig, GenerationEngine, GenerativeBackend};

/// One scripted outcome for a generate call.
enum Scripted {
    Ok(&'static str),
    Overloaded,
    BadRequest,
}

struct StubBackend {
    listing: Vec<String>,
    listing_fails: bool,
    script: Mutex<VecDeque<Scripted>>,
    generate_calls: Mutex<Vec<String>>,
    listing_calls: AtomicUsize,
}

impl StubBackend {
    fn new(listing: &[&str], script: Vec<Scripted>) -> Self {
        Self {
            listing: listing.iter().map(|m| m.to_string()).collect(),
            listing_fails: false,
            script: Mutex::new(script.into()),
            generate_calls: Mutex::new(Vec::new()),
            listing_calls: AtomicUsize::new(0),
        }
    }

    fn with_failing_listing() -> Self {
        let mut stub = Self::new(&[], Vec::new());
        stub.listing_fails = true;
        stub
    }

    fn models_tried(&self) -> Vec<String> {
        self.generate_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeBackend for StubBackend {
    async fn list_models(&self) -> recipeforge::Result<Vec<String>> {
        self.listing_calls.fetch_add(1, Ordering::SeqCst);
        if self.listing_fails {
            return Err(Error::CatalogUnavailable { status: 500 });
        }
        Ok(self.listing.clone())
    }

    async fn generate(&self, model: &str, _payload: &PromptPayload) -> recipeforge::Result<String> {
        self.generate_calls.lock().unwrap().push(model.to_string());
        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Ok(text)) => Ok(text.to_string()),
            Some(Scripted::Overloaded) | None => Err(Error::Overloaded {
                status: 503,
                message: "The model is overloaded.".to_string(),
            }),
            Some(Scripted::BadRequest) => Err(Error::Call {
                status: 400,
                class: "invalid_request",
                message: "bad request".to_string(),
            }),
        }
    }
}

fn engine(stub: StubBackend) -> GenerationEngine<StubBackend> {
    GenerationEngine::new(stub, &GenerationConfig::new("test-key"))
}

/// RUST_LOG=recipeforge=debug shows the attempt trace when a test fails.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn text_request() -> GenerationRequest {
    GenerationRequest::new(PromptPayload::text("prompt"), SchemaTag::Recipe)
}

const TWO_MODELS: &[&str] = &["models/gemini-2.5-flash", "models/gemini-2.0-flash"];

#[tokio::test(start_paused = true)]
async fn exhausted_schedule_waits_three_times_then_falls_back_once() {
    init_tracing();
    let engine = engine(StubBackend::new(
        TWO_MODELS,
        vec![
            Scripted::Overloaded,
            Scripted::Overloaded,
            Scripted::Overloaded,
            Scripted::Overloaded,
        ],
    ));

    let start = Instant::now();
    let err = engine.run_raw(&text_request()).await.unwrap_err();
    assert!(err.is_overloaded());

    // 500 ms + 1 s + 2 s, nothing more: the fallback attempt is unbacked-off.
    assert_eq!(start.elapsed().as_millis(), 3500);

    let tried = engine.backend().models_tried();
    assert_eq!(
        tried,
        vec![
            "gemini-2.5-flash",
            "gemini-2.5-flash",
            "gemini-2.5-flash",
            "gemini-2.0-flash",
        ]
    );
    // One resolution up front, one for the fallback.
    assert_eq!(engine.backend().listing_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn success_on_first_attempt_never_sleeps() {
    let engine = engine(StubBackend::new(TWO_MODELS, vec![Scripted::Ok("reply")]));

    let start = Instant::now();
    let text = engine.run_raw(&text_request()).await.unwrap();
    assert_eq!(text, "reply");
    assert_eq!(start.elapsed().as_millis(), 0);
    assert_eq!(engine.backend().models_tried().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn recovers_on_the_same_model_within_the_schedule() {
    let engine = engine(StubBackend::new(
        TWO_MODELS,
        vec![Scripted::Overloaded, Scripted::Overloaded, Scripted::Ok("ok")],
    ));

    let start = Instant::now();
    let text = engine.run_raw(&text_request()).await.unwrap();
    assert_eq!(text, "ok");
    // Two waits consumed, the third attempt succeeded.
    assert_eq!(start.elapsed().as_millis(), 1500);

    let tried = engine.backend().models_tried();
    assert_eq!(tried.len(), 3);
    assert!(tried.iter().all(|m| m == "gemini-2.5-flash"));
}

#[tokio::test(start_paused = true)]
async fn non_retryable_error_aborts_without_waits_or_fallback() {
    let engine = engine(StubBackend::new(TWO_MODELS, vec![Scripted::BadRequest]));

    let start = Instant::now();
    let err = engine.run_raw(&text_request()).await.unwrap_err();
    match err {
        Error::Call { class, .. } => assert_eq!(class, "invalid_request"),
        other => panic!("expected Call, got {other:?}"),
    }
    assert_eq!(start.elapsed().as_millis(), 0);
    assert_eq!(engine.backend().models_tried().len(), 1);
    // No second resolution: the fallback path was never entered.
    assert_eq!(engine.backend().listing_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn fallback_success_returns_the_alternate_reply() {
    init_tracing();
    let engine = engine(StubBackend::new(
        TWO_MODELS,
        vec![
            Scripted::Overloaded,
            Scripted::Overloaded,
            Scripted::Overloaded,
            Scripted::Ok("{\"title\":\"A\",\"ingredientsList\":[],\"steps\":[]}"),
        ],
    ));

    let value = engine.run(&text_request()).await.unwrap();
    assert_eq!(value["title"], "A");
    // Normalizer defaults applied on the fallback reply too.
    assert_eq!(value["difficulty"], "Easy");

    let tried = engine.backend().models_tried();
    assert_eq!(tried.last().map(String::as_str), Some("gemini-2.0-flash"));
}

#[tokio::test(start_paused = true)]
async fn no_preferred_model_is_terminal_before_any_attempt() {
    let engine = engine(StubBackend::new(&["models/some-other-model"], Vec::new()));

    let err = engine.run_raw(&text_request()).await.unwrap_err();
    match err {
        Error::NoModelAvailable { found } => assert_eq!(found, "some-other-model"),
        other => panic!("expected NoModelAvailable, got {other:?}"),
    }
    assert!(engine.backend().models_tried().is_empty());
}

#[tokio::test(start_paused = true)]
async fn fallback_resolution_failure_surfaces_when_no_alternate_exists() {
    // Only one preferred model is available; after it is excluded the
    // fallback resolution has nothing left.
    let engine = engine(StubBackend::new(
        &["models/gemini-2.5-flash"],
        vec![
            Scripted::Overloaded,
            Scripted::Overloaded,
            Scripted::Overloaded,
        ],
    ));

    let err = engine.run_raw(&text_request()).await.unwrap_err();
    assert!(matches!(err, Error::NoModelAvailable { .. }));
    assert_eq!(engine.backend().models_tried().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn catalog_failure_is_terminal() {
    let engine = engine(StubBackend::with_failing_listing());

    let err = engine.run_raw(&text_request()).await.unwrap_err();
    assert!(matches!(err, Error::CatalogUnavailable { status: 500 }));
    assert!(engine.backend().models_tried().is_empty());
}
