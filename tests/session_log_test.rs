use std::fs;
use std::path::PathBuf;

use blockfall::core::{EngineConfig, GameEngine, SequenceRng};
use blockfall::input::{IntentBatch, MAX_INTENTS_PER_FRAME};
use blockfall::types::{GameAction, ShapeKind, DEFAULT_FALL_INTERVAL_MS};
use blockfall::{LogRecord, SessionLog};

fn temp_log_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("blockfall-{}-{name}.jsonl", std::process::id()));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn test_records_are_appended_as_json_lines() {
    let path = temp_log_path("lines");
    let mut log = SessionLog::open(&path).unwrap();
    assert!(log.is_enabled());

    log.record(&LogRecord::SessionStart {
        seed: 7,
        grid_width: 10,
        grid_height: 20,
        fall_interval_ms: 500,
    });
    log.record(&LogRecord::SessionEnd { pieces: 3, rows: 1 });
    log.finish().unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);

    let start: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(start["event"], "session_start");
    assert_eq!(start["seed"], 7);
    assert_eq!(start["fall_interval_ms"], 500);

    let end: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(end["event"], "session_end");
    assert_eq!(end["pieces"], 3);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_lock_event_becomes_lock_record() {
    let mut engine = GameEngine::new(
        EngineConfig::default(),
        SequenceRng::of_kinds(&[ShapeKind::O]),
    );
    let event = loop {
        engine.update(DEFAULT_FALL_INTERVAL_MS, &[]);
        if let Some(event) = engine.take_last_event() {
            break event;
        }
    };

    let path = temp_log_path("lock");
    let mut log = SessionLog::open(&path).unwrap();
    log.record(&event.into());
    log.finish().unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "{\"event\":\"lock\",\"kind\":\"o\",\"x\":4,\"y\":18,\"rows_cleared\":0}\n"
    );
    let _ = fs::remove_file(&path);
}

#[test]
fn test_reopen_appends() {
    let path = temp_log_path("append");
    for pieces in [1, 2] {
        let mut log = SessionLog::open(&path).unwrap();
        log.record(&LogRecord::GameOver { pieces, rows: 0 });
        log.finish().unwrap();
    }
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 2);
    let _ = fs::remove_file(&path);
}

#[test]
fn test_missing_path_is_disabled() {
    let log = SessionLog::from_path(None).unwrap();
    assert!(!log.is_enabled());

    let dir = std::env::temp_dir().join("blockfall-no-such-dir").join("x.jsonl");
    assert!(SessionLog::open(dir).is_err());
}

#[test]
fn test_batch_overflow_is_logged_with_count() {
    let mut batch = IntentBatch::new();
    for _ in 0..MAX_INTENTS_PER_FRAME + 2 {
        batch.push(GameAction::MoveLeft);
    }
    assert_eq!(batch.len(), MAX_INTENTS_PER_FRAME);

    let path = temp_log_path("overflow");
    let mut log = SessionLog::open(&path).unwrap();
    log.record(&LogRecord::InputOverflow {
        dropped: batch.dropped(),
    });
    log.finish().unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let record: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
    assert_eq!(record["event"], "input_overflow");
    assert_eq!(record["dropped"], 2);
    let _ = fs::remove_file(&path);
}
