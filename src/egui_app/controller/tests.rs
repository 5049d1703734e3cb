use super::*;
use crate::classifier::{PredictError, Prediction};
use serde_json::json;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

type Reply = Result<Prediction, PredictError>;

/// Classifier whose replies are fed by the test, one per call.
struct ScriptedClassifier {
    calls: AtomicUsize,
    texts: Mutex<Vec<String>>,
    replies: Mutex<Receiver<Reply>>,
}

impl SentimentClassifier for ScriptedClassifier {
    fn predict(&self, text: &str) -> Reply {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.texts.lock().unwrap().push(text.to_string());
        self.replies
            .lock()
            .unwrap()
            .recv()
            .unwrap_or_else(|_| Err(PredictError::Transport("test hung up".into())))
    }
}

struct PanickingClassifier;

impl SentimentClassifier for PanickingClassifier {
    fn predict(&self, _text: &str) -> Reply {
        panic!("model exploded");
    }
}

fn scripted() -> (AnalyzerController, Arc<ScriptedClassifier>, Sender<Reply>) {
    let (tx, rx) = mpsc::channel();
    let classifier = Arc::new(ScriptedClassifier {
        calls: AtomicUsize::new(0),
        texts: Mutex::new(Vec::new()),
        replies: Mutex::new(rx),
    });
    let controller = AnalyzerController::new(classifier.clone());
    (controller, classifier, tx)
}

fn wait_until_idle(controller: &mut AnalyzerController) {
    for _ in 0..1000 {
        controller.tick();
        if controller.request_state() == RequestState::Idle {
            return;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    panic!("request never settled");
}

fn prediction(body: serde_json::Value) -> Reply {
    Ok(Prediction::from_value(body))
}

#[test]
fn blank_text_never_reaches_the_classifier() {
    let (mut controller, classifier, _tx) = scripted();
    for text in ["", "   ", "\n\t"] {
        controller.set_text(text);
        controller.submit();
        assert_eq!(controller.request_state(), RequestState::Idle);
    }
    controller.tick();
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 0);
    assert!(controller.outcome().is_none());
}

#[test]
fn submit_goes_in_flight_synchronously_and_settles_once() {
    let (mut controller, classifier, tx) = scripted();
    controller.set_text("I loved this product");
    controller.submit();
    assert_eq!(controller.request_state(), RequestState::InFlight);

    controller.tick();
    assert_eq!(controller.request_state(), RequestState::InFlight);

    tx.send(prediction(json!({ "label": 1, "probability": 0.87 })))
        .unwrap();
    wait_until_idle(&mut controller);
    assert!(matches!(
        controller.outcome(),
        Some(AnalysisOutcome::Success(p)) if p.is_positive()
    ));

    controller.tick();
    assert_eq!(controller.request_state(), RequestState::Idle);
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        classifier.texts.lock().unwrap().as_slice(),
        ["I loved this product"]
    );
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let (mut controller, classifier, tx) = scripted();
    controller.set_text("first");
    controller.submit();
    controller.set_text("second");
    controller.submit();

    tx.send(prediction(json!({ "label": 0 }))).unwrap();
    wait_until_idle(&mut controller);
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 1);
    assert_eq!(classifier.texts.lock().unwrap().as_slice(), ["first"]);
}

#[test]
fn new_submission_clears_previous_outcome() {
    let (mut controller, _classifier, tx) = scripted();
    controller.set_text("one");
    controller.submit();
    tx.send(prediction(json!({ "label": 1 }))).unwrap();
    wait_until_idle(&mut controller);
    assert!(controller.outcome().is_some());

    controller.submit();
    assert!(controller.outcome().is_none());
    assert_eq!(controller.request_state(), RequestState::InFlight);
    tx.send(Err(PredictError::Status {
        code: 500,
        status_text: "Internal Server Error".into(),
    }))
    .unwrap();
    wait_until_idle(&mut controller);
    match controller.outcome() {
        Some(AnalysisOutcome::Failure { message }) => assert!(message.contains("500")),
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn transport_errors_become_failures_and_release_the_trigger() {
    let (mut controller, _classifier, tx) = scripted();
    controller.set_text("hello");
    controller.submit();
    tx.send(Err(PredictError::Transport("connection refused".into())))
        .unwrap();
    wait_until_idle(&mut controller);
    assert_eq!(
        controller.outcome(),
        Some(&AnalysisOutcome::failure("Network error: connection refused"))
    );
    assert!(controller.ui.analyzer.can_submit());
    assert_eq!(controller.ui.status.badge_label, "Error");
}

#[test]
fn panicking_classifier_still_returns_to_idle() {
    let mut controller = AnalyzerController::new(Arc::new(PanickingClassifier));
    controller.set_text("boom");
    controller.submit();
    wait_until_idle(&mut controller);
    match controller.outcome() {
        Some(AnalysisOutcome::Failure { message }) => assert!(message.contains("model exploded")),
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn selecting_example_sets_exact_text_and_clears_result() {
    let (mut controller, _classifier, tx) = scripted();
    controller.set_text("something");
    controller.submit();
    tx.send(prediction(json!({ "label": 1 }))).unwrap();
    wait_until_idle(&mut controller);
    assert!(controller.outcome().is_some());

    controller.select_example(1);
    assert_eq!(controller.text(), EXAMPLES[1]);
    assert!(controller.outcome().is_none());

    controller.select_example(EXAMPLES.len());
    assert_eq!(controller.text(), EXAMPLES[1]);
}

#[test]
fn example_selected_mid_request_discards_the_stale_result() {
    let (mut controller, _classifier, tx) = scripted();
    controller.set_text("old text");
    controller.submit();
    controller.select_example(0);
    assert_eq!(controller.request_state(), RequestState::InFlight);

    tx.send(prediction(json!({ "label": 0 }))).unwrap();
    wait_until_idle(&mut controller);
    assert!(controller.outcome().is_none());
    assert_eq!(controller.text(), EXAMPLES[0]);

    controller.submit();
    tx.send(prediction(json!({ "label": 1 }))).unwrap();
    wait_until_idle(&mut controller);
    assert!(controller.outcome().is_some());
}

#[test]
fn clipboard_summary_requires_a_result() {
    let (mut controller, _classifier, tx) = scripted();
    assert_eq!(controller.clipboard_summary(), None);

    controller.set_text("text");
    controller.submit();
    tx.send(prediction(json!({ "label": 1 }))).unwrap();
    wait_until_idle(&mut controller);
    assert_eq!(
        controller.clipboard_summary().as_deref(),
        Some(r#"{"label":1}"#)
    );
}

#[test]
fn footer_label_is_the_absolute_predict_url() {
    let config = crate::config::resolve(
        crate::config::AppSettings::default(),
        Some("https://api.example.com/".to_string()),
    )
    .unwrap();
    let controller = AnalyzerController::from_config(&config);
    assert_eq!(
        controller.ui.endpoint_label,
        "https://api.example.com/api/predict"
    );

    let same_origin = crate::config::resolve(crate::config::AppSettings::default(), None).unwrap();
    let controller = AnalyzerController::from_config(&same_origin);
    assert_eq!(
        controller.ui.endpoint_label,
        "http://127.0.0.1:8000/api/predict"
    );
}
