use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub injection: InjectionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            injection: InjectionConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InjectionBackend {
    /// Print key presses instead of performing them (default)
    #[default]
    DryRun,
    /// Real OS injection; requires the `inject` build feature
    Enigo,
}

#[derive(Debug, Deserialize)]
pub struct InjectionConfig {
    #[serde(default)]
    pub backend: InjectionBackend,

    /// Delay after pressing modifiers, before the key click (ms)
    #[serde(default = "default_modifier_delay_ms")]
    pub modifier_delay_ms: u64,

    /// Delay after the key click, before releasing modifiers (ms)
    #[serde(default = "default_click_delay_ms")]
    pub click_delay_ms: u64,
}

impl Default for InjectionConfig {
    fn default() -> Self {
        Self {
            backend: InjectionBackend::default(),
            modifier_delay_ms: default_modifier_delay_ms(),
            click_delay_ms: default_click_delay_ms(),
        }
    }
}

fn default_modifier_delay_ms() -> u64 {
    10
}

fn default_click_delay_ms() -> u64 {
    50
}

impl Config {
    pub fn load() -> Self {
        let path = Path::new("config.toml");
        if path.exists() {
            fs::read_to_string(path)
                .ok()
                .and_then(|s| toml::from_str(&s).ok())
                .unwrap_or_default()
        } else {
            Config::default()
        }
    }
}
