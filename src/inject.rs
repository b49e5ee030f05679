//! Key injection backends
//!
//! The single external action this crate consumes: press a combined-key
//! specification ("ctrl-shift-a", "cmd-left", "backspace") on the operating
//! system. The real backend drives enigo and is gated behind the `inject`
//! feature; the dry-run backend just reports what it would press.

use std::fmt;

/// Modifier names a combined-key specification may carry, in the form the
/// vocabulary emits them
pub const MODIFIER_NAMES: [&str; 4] = ["cmd", "ctrl", "shift", "alt"];

/// Error type for key injection
#[derive(Debug)]
pub enum InjectError {
    /// The combined-key string is not a valid key specification
    InvalidKey(String),
    /// The OS-level backend failed
    Backend(String),
}

impl fmt::Display for InjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjectError::InvalidKey(spec) => write!(f, "invalid key specification: {:?}", spec),
            InjectError::Backend(msg) => write!(f, "injection backend error: {}", msg),
        }
    }
}

impl std::error::Error for InjectError {}

/// Sends one combined key into the OS input stream
///
/// Failures propagate to the caller untouched; nothing here retries.
pub trait KeyInjector {
    fn inject(&mut self, key: &str) -> Result<(), InjectError>;

    /// Backend name, for logs
    fn name(&self) -> &'static str;
}

impl<T: KeyInjector + ?Sized> KeyInjector for Box<T> {
    fn inject(&mut self, key: &str) -> Result<(), InjectError> {
        (**self).inject(key)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// A combined-key string split into its modifier prefix and base key
///
/// Parsing peels known modifier names off the front, so a base key that is
/// itself a hyphen ("ctrl--") still parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpec {
    pub modifiers: Vec<String>,
    pub key: String,
}

impl KeySpec {
    pub fn parse(spec: &str) -> Result<Self, InjectError> {
        let mut rest = spec;
        let mut modifiers = Vec::new();

        loop {
            let Some((head, tail)) = rest.split_once('-') else {
                break;
            };
            if tail.is_empty() || !MODIFIER_NAMES.contains(&head) {
                break;
            }
            modifiers.push(head.to_string());
            rest = tail;
        }

        if rest.is_empty() {
            return Err(InjectError::InvalidKey(spec.to_string()));
        }

        Ok(Self {
            modifiers,
            key: rest.to_string(),
        })
    }
}

/// Reports every key press instead of performing it
#[derive(Debug, Default)]
pub struct DryRunInjector;

impl KeyInjector for DryRunInjector {
    fn inject(&mut self, key: &str) -> Result<(), InjectError> {
        // Validate the spec even though nothing is pressed, so dry runs catch
        // the same malformed strings the real backend would
        let spec = KeySpec::parse(key)?;
        println!("[INJECT] press {:?} (mods: {:?})", spec.key, spec.modifiers);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "dry-run"
    }
}

#[cfg(feature = "inject")]
pub use enigo_backend::EnigoInjector;

#[cfg(feature = "inject")]
mod enigo_backend {
    use super::{InjectError, KeyInjector, KeySpec};
    use enigo::{Direction, Enigo, Key, Keyboard, Settings};
    use std::thread;
    use std::time::Duration;

    /// Presses combined keys through enigo
    pub struct EnigoInjector {
        enigo: Enigo,
        modifier_delay: Duration,
        click_delay: Duration,
    }

    impl EnigoInjector {
        pub fn new(modifier_delay_ms: u64, click_delay_ms: u64) -> Result<Self, InjectError> {
            let enigo = Enigo::new(&Settings::default())
                .map_err(|e| InjectError::Backend(format!("failed to initialize enigo: {}", e)))?;
            Ok(Self {
                enigo,
                modifier_delay: Duration::from_millis(modifier_delay_ms),
                click_delay: Duration::from_millis(click_delay_ms),
            })
        }

        fn modifier_key(name: &str) -> Result<Key, InjectError> {
            match name {
                "cmd" => Ok(Key::Meta),
                "ctrl" => Ok(Key::Control),
                "shift" => Ok(Key::Shift),
                "alt" => Ok(Key::Alt),
                other => Err(InjectError::InvalidKey(other.to_string())),
            }
        }

        fn base_key(name: &str) -> Result<Key, InjectError> {
            let key = match name {
                "left" => Key::LeftArrow,
                "right" => Key::RightArrow,
                "up" => Key::UpArrow,
                "down" => Key::DownArrow,
                "tab" => Key::Tab,
                "escape" => Key::Escape,
                "enter" => Key::Return,
                "space" => Key::Space,
                "home" => Key::Home,
                "end" => Key::End,
                "pageup" => Key::PageUp,
                "pagedown" => Key::PageDown,
                "backspace" => Key::Backspace,
                "delete" => Key::Delete,
                other => {
                    let mut chars = other.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Key::Unicode(c),
                        _ => return Err(InjectError::InvalidKey(other.to_string())),
                    }
                }
            };
            Ok(key)
        }
    }

    impl KeyInjector for EnigoInjector {
        fn inject(&mut self, key: &str) -> Result<(), InjectError> {
            let spec = KeySpec::parse(key)?;
            let modifiers: Vec<Key> = spec
                .modifiers
                .iter()
                .map(|m| Self::modifier_key(m))
                .collect::<Result<_, _>>()?;
            let base = Self::base_key(&spec.key)?;

            for modifier in &modifiers {
                self.enigo
                    .key(*modifier, Direction::Press)
                    .map_err(|e| InjectError::Backend(format!("failed to press modifier: {}", e)))?;
            }

            if !modifiers.is_empty() {
                thread::sleep(self.modifier_delay);
            }

            self.enigo
                .key(base, Direction::Click)
                .map_err(|e| InjectError::Backend(format!("failed to click key: {}", e)))?;

            if !modifiers.is_empty() {
                thread::sleep(self.click_delay);
            }

            // Release in reverse order
            for modifier in modifiers.iter().rev() {
                self.enigo.key(*modifier, Direction::Release).map_err(|e| {
                    InjectError::Backend(format!("failed to release modifier: {}", e))
                })?;
            }

            Ok(())
        }

        fn name(&self) -> &'static str {
            "enigo"
        }
    }
}
