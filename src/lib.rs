//! Spoken-word keyboard input: vocabulary, captures, and key dispatch
//!
//! The building blocks of a voice-controlled keyboard, minus the speech
//! engine itself:
//! - `vocab`: phonetic-phrase tables (letters, symbols, numbers, modifiers,
//!   arrows, special keys), immutable after startup
//! - `grammar`: the list/capture/command declarations a host recognition
//!   engine registers
//! - `capture`: resolvers that turn host captures into one key string
//!   (any-key priority, modifier sets, "ctrl-shift-a" combination)
//! - `dispatch`: routes each recognized command rule to the injector
//! - `inject`: the key-injection seam; enigo backend behind the `inject`
//!   feature, dry-run backend otherwise
//! - `config`: config.toml settings for the companion binary
//!
//! The host owns recognition, matching, and disambiguation. It registers the
//! grammar once, then delivers one [`Recognition`] per utterance, which a
//! [`Dispatcher`] handles to completion before the next.

pub mod capture;
pub mod config;
pub mod dispatch;
pub mod grammar;
pub mod inject;
pub mod vocab;

pub use capture::{CaptureError, KeyAlternates, ModifierSet, combine};
pub use dispatch::{Captures, DispatchError, Dispatcher, Recognition, Rule, resolve_rule};
pub use inject::{DryRunInjector, InjectError, KeyInjector, KeySpec};
pub use vocab::{Category, Vocabulary, vocabulary};
