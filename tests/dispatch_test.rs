//! End-to-end dispatch tests: recognition in, injected key strings out.

use keyspeak::{
    Captures, CaptureError, Category, DispatchError, Dispatcher, InjectError, KeyAlternates,
    KeyInjector, ModifierSet, Recognition, Rule, Vocabulary,
};

/// Records every injected key instead of pressing it
#[derive(Default)]
struct RecordingInjector {
    keys: Vec<String>,
}

impl KeyInjector for RecordingInjector {
    fn inject(&mut self, key: &str) -> Result<(), InjectError> {
        self.keys.push(key.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Always fails, standing in for a broken OS injection layer
struct FailingInjector;

impl KeyInjector for FailingInjector {
    fn inject(&mut self, key: &str) -> Result<(), InjectError> {
        Err(InjectError::Backend(format!("cannot press {:?}", key)))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

fn key_recognition(modifiers: &[&str], keys: KeyAlternates) -> Recognition {
    let modifier_sets = if modifiers.is_empty() {
        vec![]
    } else {
        vec![ModifierSet::from_captures(modifiers.iter().copied())]
    };
    Recognition {
        rule: Rule::Key,
        captures: Captures {
            keys,
            symbol: None,
            modifier_sets,
        },
    }
}

#[test]
fn every_declared_entry_resolves_to_its_value() {
    let vocab = Vocabulary::new();
    for category in Category::ALL {
        let entries = vocab.entries(category);
        assert!(!entries.is_empty(), "{} table is empty", category.name());
        for (phrase, value) in entries {
            assert_eq!(
                vocab.lookup(category, phrase).as_ref(),
                Some(&value),
                "lookup mismatch for {} {:?}",
                category.name(),
                phrase
            );
        }
    }

    // Spot checks against the literal tables
    assert_eq!(vocab.lookup(Category::Letter, "whale"), Some("w".into()));
    assert_eq!(vocab.lookup(Category::Symbol, "back tick"), Some("`".into()));
    assert_eq!(vocab.lookup(Category::Number, "zero"), Some("0".into()));
    assert_eq!(vocab.lookup(Category::Modifier, "troll"), Some("ctrl".into()));
    assert_eq!(vocab.lookup(Category::Arrow, "up"), Some("up".into()));
    assert_eq!(
        vocab.lookup(Category::Special, "forward delete"),
        Some("delete".into())
    );
}

#[test]
fn synonyms_inject_identical_keys() {
    let vocab = Vocabulary::new();
    let mut dispatcher = Dispatcher::new(RecordingInjector::default());

    for phrase in ["dot", "period"] {
        let rec = Recognition {
            rule: Rule::Symbol,
            captures: Captures {
                symbol: vocab.lookup(Category::Symbol, phrase),
                ..Default::default()
            },
        };
        dispatcher.dispatch(&rec).unwrap();
    }

    for phrase in ["delete", "junk"] {
        let rec = Recognition {
            rule: Rule::Special,
            captures: Captures {
                keys: KeyAlternates {
                    special: vocab.lookup(Category::Special, phrase),
                    ..Default::default()
                },
                ..Default::default()
            },
        };
        dispatcher.dispatch(&rec).unwrap();
    }

    let keys = &dispatcher.injector().keys;
    assert_eq!(keys, &[".", ".", "backspace", "backspace"]);
}

#[test]
fn any_key_priority_prefers_arrow_over_letter() {
    let rec = key_recognition(
        &[],
        KeyAlternates {
            arrow: Some("left".into()),
            letter: Some("a".into()),
            ..Default::default()
        },
    );
    let mut dispatcher = Dispatcher::new(RecordingInjector::default());
    dispatcher.dispatch(&rec).unwrap();
    assert_eq!(dispatcher.injector().keys, ["left"]);
}

#[test]
fn modifier_combination_formatting() {
    let mut dispatcher = Dispatcher::new(RecordingInjector::default());

    let rec = key_recognition(
        &["ctrl", "shift"],
        KeyAlternates {
            letter: Some("a".into()),
            ..Default::default()
        },
    );
    dispatcher.dispatch(&rec).unwrap();

    let rec = key_recognition(
        &[],
        KeyAlternates {
            letter: Some("a".into()),
            ..Default::default()
        },
    );
    dispatcher.dispatch(&rec).unwrap();

    assert_eq!(dispatcher.injector().keys, ["ctrl-shift-a", "a"]);
}

#[test]
fn dispatch_is_pure_per_input() {
    let rec = key_recognition(
        &["cmd"],
        KeyAlternates {
            special: Some("end".into()),
            ..Default::default()
        },
    );
    let mut dispatcher = Dispatcher::new(RecordingInjector::default());
    dispatcher.dispatch(&rec).unwrap();
    dispatcher.dispatch(&rec).unwrap();
    assert_eq!(dispatcher.injector().keys, ["cmd-end", "cmd-end"]);
}

#[test]
fn empty_alternates_fail_without_injecting() {
    let rec = key_recognition(&["ctrl"], KeyAlternates::default());
    let mut dispatcher = Dispatcher::new(RecordingInjector::default());
    let err = dispatcher.dispatch(&rec).unwrap_err();
    assert!(matches!(
        err,
        DispatchError::Capture(CaptureError::NoKeyMatched { .. })
    ));
    assert!(dispatcher.injector().keys.is_empty());
}

#[test]
fn bare_rule_without_capture_fails_without_injecting() {
    let rec = Recognition {
        rule: Rule::NavigateArrow,
        captures: Captures::default(),
    };
    let mut dispatcher = Dispatcher::new(RecordingInjector::default());
    let err = dispatcher.dispatch(&rec).unwrap_err();
    assert!(matches!(
        err,
        DispatchError::MissingCapture {
            rule: Rule::NavigateArrow,
            capture: "arrow"
        }
    ));
    assert!(dispatcher.injector().keys.is_empty());
}

#[test]
fn navigate_arrow_end_to_end() {
    let vocab = Vocabulary::new();
    let rec = Recognition {
        rule: Rule::NavigateArrow,
        captures: Captures {
            keys: KeyAlternates {
                arrow: vocab.lookup(Category::Arrow, "down"),
                ..Default::default()
            },
            ..Default::default()
        },
    };
    let mut dispatcher = Dispatcher::new(RecordingInjector::default());
    dispatcher.dispatch(&rec).unwrap();
    assert_eq!(dispatcher.injector().keys, ["down"]);
}

#[test]
fn injection_failures_propagate_unchanged() {
    let rec = key_recognition(
        &[],
        KeyAlternates {
            letter: Some("a".into()),
            ..Default::default()
        },
    );
    let mut dispatcher = Dispatcher::new(FailingInjector);
    let err = dispatcher.dispatch(&rec).unwrap_err();
    match err {
        DispatchError::Inject(InjectError::Backend(msg)) => {
            assert!(msg.contains("\"a\""), "message was: {}", msg);
        }
        other => panic!("expected an injection error, got {:?}", other),
    }
}
