use std::time::Duration;

use parla_speech::{ScriptStep, ScriptedCapture, SpeechSupport};
use parla_types::AppEvent;

use super::harness::{ScriptedTranslator, next_state, spawn_widget, widget_config};
use crate::events::listen::CAPTURE_UNSUPPORTED;

#[tokio::test(start_paused = true)]
async fn transcript_replaces_input_and_translates() {
    let translator = ScriptedTranslator::echoing();
    let engine = ScriptedCapture::new([ScriptStep::Transcript {
        text: "hola amigo".into(),
        after: Duration::from_millis(50),
    }]);
    let cfg = widget_config(500, "es", "en");
    let w = spawn_widget(&cfg, translator, SpeechSupport::Available(engine.clone())).await;

    w.tx.send(AppEvent::ListenPressed).await.unwrap();
    let listening = next_state(&w.rx).await;
    assert!(listening.listening);
    assert_eq!(listening.error_message, None);

    let transcribed = next_state(&w.rx).await;
    assert!(!transcribed.listening);
    assert_eq!(transcribed.input_text, "hola amigo");

    let loading = next_state(&w.rx).await;
    assert!(loading.loading);
    let done = next_state(&w.rx).await;
    assert_eq!(done.translated_text, "hola amigo*");

    assert_eq!(engine.seen_locales(), vec!["es-ES".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn bengali_network_failures_get_the_dedicated_message() {
    let translator = ScriptedTranslator::echoing();
    let engine = ScriptedCapture::new([ScriptStep::Fail {
        code: "network".into(),
        after: Duration::from_millis(10),
    }]);
    let cfg = widget_config(500, "bn", "en");
    let w = spawn_widget(&cfg, translator, SpeechSupport::Available(engine.clone())).await;

    w.tx.send(AppEvent::ListenPressed).await.unwrap();
    next_state(&w.rx).await;

    let failed = next_state(&w.rx).await;
    assert!(!failed.listening);
    assert_eq!(
        failed.error_message.as_deref(),
        Some(
            "Speech recognition for Bengali is not available right now. \
             Please type your text instead."
        )
    );
    assert_eq!(engine.seen_locales(), vec!["bn-IN".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn other_capture_errors_use_the_generic_template() {
    let translator = ScriptedTranslator::echoing();
    let engine = ScriptedCapture::new([ScriptStep::Fail {
        code: "no-speech".into(),
        after: Duration::from_millis(10),
    }]);
    let cfg = widget_config(500, "en", "es");
    let w = spawn_widget(&cfg, translator, SpeechSupport::Available(engine)).await;

    w.tx.send(AppEvent::ListenPressed).await.unwrap();
    next_state(&w.rx).await;

    let failed = next_state(&w.rx).await;
    assert!(!failed.listening);
    assert_eq!(
        failed.error_message.as_deref(),
        Some(
            "Speech recognition error: no-speech. Please check your internet connection and try again."
        )
    );
}

#[tokio::test]
async fn listen_without_an_engine_reports_unsupported() {
    let translator = ScriptedTranslator::echoing();
    let cfg = widget_config(500, "en", "es");
    let w = spawn_widget(&cfg, translator, SpeechSupport::Unavailable).await;

    w.tx.send(AppEvent::ListenPressed).await.unwrap();
    let state = next_state(&w.rx).await;
    assert!(!state.listening);
    assert_eq!(state.error_message.as_deref(), Some(CAPTURE_UNSUPPORTED));
}

#[tokio::test(start_paused = true)]
async fn switching_source_language_tears_the_session_down() {
    let translator = ScriptedTranslator::echoing();
    let engine = ScriptedCapture::new([ScriptStep::Transcript {
        text: "too late".into(),
        after: Duration::from_secs(30),
    }]);
    let cfg = widget_config(500, "en", "es");
    let w = spawn_widget(&cfg, translator, SpeechSupport::Available(engine.clone())).await;

    w.tx.send(AppEvent::ListenPressed).await.unwrap();
    let listening = next_state(&w.rx).await;
    assert!(listening.listening);

    w.tx.send(AppEvent::SourceChanged("fr".into()))
        .await
        .unwrap();
    let switched = next_state(&w.rx).await;
    assert!(!switched.listening);
    assert_eq!(switched.source_lang, "fr");

    // The aborted session resolves as Stopped under a stale sequence
    // number; the widget does not change.
    let after_stop = next_state(&w.rx).await;
    assert_eq!(after_stop.input_text, "");
    assert!(!after_stop.listening);
}

#[tokio::test(start_paused = true)]
async fn switching_source_without_a_session_is_plain() {
    let translator = ScriptedTranslator::echoing();
    let engine = ScriptedCapture::new([]);
    let cfg = widget_config(500, "en", "es");
    let w = spawn_widget(&cfg, translator, SpeechSupport::Available(engine.clone())).await;

    w.tx.send(AppEvent::SourceChanged("de".into()))
        .await
        .unwrap();
    let switched = next_state(&w.rx).await;
    assert_eq!(switched.source_lang, "de");
    assert_eq!(switched.error_message, None);
    assert!(!switched.listening);
    assert!(engine.seen_locales().is_empty());
}

#[tokio::test(start_paused = true)]
async fn stop_resolves_the_session_without_an_error() {
    let translator = ScriptedTranslator::echoing();
    let engine = ScriptedCapture::new([ScriptStep::Silent]);
    let cfg = widget_config(500, "en", "es");
    let w = spawn_widget(&cfg, translator, SpeechSupport::Available(engine)).await;

    w.tx.send(AppEvent::ListenPressed).await.unwrap();
    let listening = next_state(&w.rx).await;
    assert!(listening.listening);

    w.tx.send(AppEvent::StopPressed).await.unwrap();
    // The press itself changes nothing; the engine's Stopped does.
    next_state(&w.rx).await;

    let stopped = next_state(&w.rx).await;
    assert!(!stopped.listening);
    assert_eq!(stopped.error_message, None);
    assert_eq!(stopped.input_text, "");
}

#[tokio::test(start_paused = true)]
async fn a_second_press_restarts_the_session() {
    let translator = ScriptedTranslator::echoing();
    let engine = ScriptedCapture::new([
        ScriptStep::Silent,
        ScriptStep::Transcript {
            text: "second wins".into(),
            after: Duration::from_millis(20),
        },
    ]);
    let cfg = widget_config(500, "en", "es");
    let w = spawn_widget(&cfg, translator, SpeechSupport::Available(engine.clone())).await;

    w.tx.send(AppEvent::ListenPressed).await.unwrap();
    next_state(&w.rx).await;

    w.tx.send(AppEvent::ListenPressed).await.unwrap();
    let restarted = next_state(&w.rx).await;
    assert!(restarted.listening);

    // Two snapshots follow: the first session's ignored Stopped, then the
    // second session's transcript.
    let first = next_state(&w.rx).await;
    assert_eq!(first.input_text, "");
    let second = next_state(&w.rx).await;
    assert_eq!(second.input_text, "second wins");
    assert!(!second.listening);

    assert_eq!(engine.seen_locales().len(), 2);
}
