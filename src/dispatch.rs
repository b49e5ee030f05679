//! Recognition dispatch
//!
//! One handler per command rule: pull out the capture the rule needs,
//! resolve it to a key string, and hand it to the injector. No retries and
//! no validation beyond what capture resolution already guarantees;
//! injection failures pass through untouched.

use crate::capture::{CaptureError, KeyAlternates, ModifierSet, combine};
use crate::inject::{InjectError, KeyInjector};
use std::fmt;

/// The command rules the host grammar can match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// "go <arrow>"
    NavigateArrow,
    /// "<number>"
    Number,
    /// "<letter>"
    Letter,
    /// "<symbol>"
    Symbol,
    /// "<special>"
    Special,
    /// "<key>", optional modifiers plus any key
    Key,
}

/// Captured values delivered with a recognition
///
/// `keys` holds the `any` alternatives; `symbol` is separate because the
/// symbol capture is not part of `any`. `modifier_sets` carries every match
/// of the repeated modifier capture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures {
    pub keys: KeyAlternates,
    pub symbol: Option<String>,
    pub modifier_sets: Vec<ModifierSet>,
}

/// One recognized utterance as delivered by the host engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recognition {
    pub rule: Rule,
    pub captures: Captures,
}

/// Error type for dispatch
#[derive(Debug)]
pub enum DispatchError {
    /// The host matched a rule but omitted the capture the rule requires
    MissingCapture { rule: Rule, capture: &'static str },
    Capture(CaptureError),
    Inject(InjectError),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::MissingCapture { rule, capture } => {
                write!(f, "rule {:?} matched without its {} capture", rule, capture)
            }
            DispatchError::Capture(e) => write!(f, "{}", e),
            DispatchError::Inject(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DispatchError::MissingCapture { .. } => None,
            DispatchError::Capture(e) => Some(e),
            DispatchError::Inject(e) => Some(e),
        }
    }
}

impl From<CaptureError> for DispatchError {
    fn from(e: CaptureError) -> Self {
        DispatchError::Capture(e)
    }
}

impl From<InjectError> for DispatchError {
    fn from(e: InjectError) -> Self {
        DispatchError::Inject(e)
    }
}

/// Routes recognitions to the key injector
pub struct Dispatcher<I: KeyInjector> {
    injector: I,
    verbose: bool,
}

impl<I: KeyInjector> Dispatcher<I> {
    pub fn new(injector: I) -> Self {
        Self {
            injector,
            verbose: false,
        }
    }

    /// Enable verbose logging
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn injector(&self) -> &I {
        &self.injector
    }

    /// Handle one recognized utterance to completion
    pub fn dispatch(&mut self, recognition: &Recognition) -> Result<(), DispatchError> {
        let key = resolve_rule(recognition)?;
        if self.verbose {
            eprintln!(
                "[KEYS] {:?} -> {:?} via {}",
                recognition.rule,
                key,
                self.injector.name()
            );
        }
        self.injector.inject(&key)?;
        Ok(())
    }
}

/// Resolve the key string a recognition injects
pub fn resolve_rule(recognition: &Recognition) -> Result<String, DispatchError> {
    let captures = &recognition.captures;
    let key = match recognition.rule {
        Rule::NavigateArrow => required(recognition.rule, "arrow", &captures.keys.arrow)?,
        Rule::Number => required(recognition.rule, "number", &captures.keys.number)?,
        Rule::Letter => required(recognition.rule, "letter", &captures.keys.letter)?,
        Rule::Symbol => required(recognition.rule, "symbol", &captures.symbol)?,
        Rule::Special => required(recognition.rule, "special", &captures.keys.special)?,
        Rule::Key => {
            let base = captures.keys.resolve()?;
            combine(&captures.modifier_sets, base)
        }
    };
    Ok(key)
}

fn required(
    rule: Rule,
    capture: &'static str,
    value: &Option<String>,
) -> Result<String, DispatchError> {
    value
        .clone()
        .ok_or(DispatchError::MissingCapture { rule, capture })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter_recognition(letter: &str) -> Recognition {
        Recognition {
            rule: Rule::Letter,
            captures: Captures {
                keys: KeyAlternates {
                    letter: Some(letter.into()),
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_resolve_bare_rules() {
        assert_eq!(resolve_rule(&letter_recognition("a")).unwrap(), "a");

        let rec = Recognition {
            rule: Rule::NavigateArrow,
            captures: Captures {
                keys: KeyAlternates {
                    arrow: Some("down".into()),
                    ..Default::default()
                },
                ..Default::default()
            },
        };
        assert_eq!(resolve_rule(&rec).unwrap(), "down");

        let rec = Recognition {
            rule: Rule::Symbol,
            captures: Captures {
                symbol: Some("*".into()),
                ..Default::default()
            },
        };
        assert_eq!(resolve_rule(&rec).unwrap(), "*");
    }

    #[test]
    fn test_resolve_key_rule_combines_modifiers() {
        let rec = Recognition {
            rule: Rule::Key,
            captures: Captures {
                keys: KeyAlternates {
                    letter: Some("a".into()),
                    ..Default::default()
                },
                modifier_sets: vec![ModifierSet::from_captures(["ctrl", "shift"])],
                ..Default::default()
            },
        };
        assert_eq!(resolve_rule(&rec).unwrap(), "ctrl-shift-a");
    }

    #[test]
    fn test_resolve_key_rule_without_modifiers() {
        let rec = Recognition {
            rule: Rule::Key,
            captures: Captures {
                keys: KeyAlternates {
                    special: Some("backspace".into()),
                    ..Default::default()
                },
                ..Default::default()
            },
        };
        assert_eq!(resolve_rule(&rec).unwrap(), "backspace");
    }

    #[test]
    fn test_missing_capture_is_an_error() {
        let rec = Recognition {
            rule: Rule::Number,
            captures: Captures::default(),
        };
        let err = resolve_rule(&rec).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::MissingCapture {
                rule: Rule::Number,
                capture: "number"
            }
        ));
        assert!(err.to_string().contains("Number"));
    }

    #[test]
    fn test_key_rule_empty_alternates_surfaces_capture_error() {
        let rec = Recognition {
            rule: Rule::Key,
            captures: Captures {
                modifier_sets: vec![ModifierSet::from_captures(["ctrl"])],
                ..Default::default()
            },
        };
        assert!(matches!(
            resolve_rule(&rec).unwrap_err(),
            DispatchError::Capture(CaptureError::NoKeyMatched { .. })
        ));
    }
}
