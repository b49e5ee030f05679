//! Capture resolution
//!
//! The host engine matches an utterance against the declared grammar and
//! hands back per-category captures. The resolvers here turn those captures
//! into the single key string the injection layer consumes: the any-key
//! resolver picks one alternative, the modifier resolver collects spoken
//! modifiers into a set, and [`combine`] joins the two.

use std::fmt;

/// Alternatives captured by the `any` rule
///
/// The host fills whichever fields the utterance matched. Resolution checks
/// arrow, number, letter, special in that order and returns the first value
/// present, so a match carrying several fields always resolves the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyAlternates {
    pub arrow: Option<String>,
    pub number: Option<String>,
    pub letter: Option<String>,
    pub special: Option<String>,
}

impl KeyAlternates {
    /// Resolve to the first present alternative
    ///
    /// A well-formed grammar guarantees at least one field is set; an empty
    /// match is a grammar-definition bug and surfaces as
    /// [`CaptureError::NoKeyMatched`].
    pub fn resolve(&self) -> Result<&str, CaptureError> {
        let ordered = [
            self.arrow.as_deref(),
            self.number.as_deref(),
            self.letter.as_deref(),
            self.special.as_deref(),
        ];
        ordered
            .into_iter()
            .flatten()
            .next()
            .ok_or_else(|| CaptureError::NoKeyMatched {
                state: format!("{:?}", self),
            })
    }
}

/// Modifier keys collected from a `{modifier}+` capture
///
/// Deduplicated, kept in first-seen order. That order is also the join order
/// of the combined key, so "control shift air" always renders as
/// "ctrl-shift-a".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierSet {
    mods: Vec<String>,
}

impl ModifierSet {
    /// Collect captured modifier values, dropping repeats
    pub fn from_captures<I, S>(captures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for m in captures {
            set.insert(m);
        }
        set
    }

    pub fn insert(&mut self, modifier: impl Into<String>) {
        let modifier = modifier.into();
        if !self.mods.contains(&modifier) {
            self.mods.push(modifier);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mods.is_empty()
    }

    pub fn len(&self) -> usize {
        self.mods.len()
    }

    pub fn contains(&self, modifier: &str) -> bool {
        self.mods.iter().any(|m| m == modifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.mods.iter().map(String::as_str)
    }

    /// Hyphen-joined form, e.g. "ctrl-shift"
    pub fn joined(&self) -> String {
        self.mods.join("-")
    }
}

/// Combine an optional modifier capture with a resolved base key
///
/// The grammar allows the modifier capture to match more than once; like the
/// source grammar, only the first set is honored. Without modifiers the base
/// key passes through unchanged.
pub fn combine(modifier_sets: &[ModifierSet], key: &str) -> String {
    match modifier_sets.first() {
        Some(mods) if !mods.is_empty() => format!("{}-{}", mods.joined(), key),
        _ => key.to_string(),
    }
}

/// Error type for capture resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// None of the `any` alternatives was present in the match
    NoKeyMatched { state: String },
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::NoKeyMatched { state } => {
                write!(f, "no key found in capture: {}", state)
            }
        }
    }
}

impl std::error::Error for CaptureError {}
