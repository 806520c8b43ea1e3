//! Run configuration: tree parameters and the debug switch.
//!
//! Options arrive as `name=value` tokens. A value that does not parse, that is
//! negative for a count, or that exceeds the size limits leaves the default in
//! place and adds a notice for the report.

use crate::error::ConfigError;
use crate::tree::TreeParams;

pub const DEFAULT_BRANCHING: u32 = 2;
pub const DEFAULT_HEIGHT: u32 = 3;
pub const DEFAULT_VALUE: i64 = 100;
pub const DEFAULT_INACCURACY: u32 = 5;
pub const DEFAULT_SPREAD: u32 = 20;

/// Trees larger than this in either dimension are too big to trace readably
pub const MAX_TRACED_DIMENSION: u32 = 3;

/// Largest accepted branching factor
pub const MAX_BRANCHING: u32 = 1000;

/// Largest accepted height. Generation, search and drop all recurse once per
/// level, so this bounds stack depth.
pub const MAX_HEIGHT: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub branching: u32,
    pub height: u32,
    pub value: i64,
    pub inaccuracy: u32,
    pub spread: u32,
    pub debug: bool,
    /// One line per option that fell back to its default
    pub notices: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            branching: DEFAULT_BRANCHING,
            height: DEFAULT_HEIGHT,
            value: DEFAULT_VALUE,
            inaccuracy: DEFAULT_INACCURACY,
            spread: DEFAULT_SPREAD,
            debug: true,
            notices: Vec::new(),
        }
    }
}

impl SearchConfig {
    /// Parse `name=value` tokens in order, starting from the defaults.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = SearchConfig::default();
        for arg in args {
            let token = arg.as_ref();
            let (name, value) = token
                .split_once('=')
                .ok_or_else(|| ConfigError::MalformedOption {
                    token: token.to_string(),
                })?;
            config.apply_option(name, value)?;
        }
        Ok(config)
    }

    /// Apply one option. Unparseable or out-of-range values keep the default.
    pub fn apply_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let normalized = name.trim().to_ascii_lowercase();
        let value = value.trim();
        match normalized.as_str() {
            "b" | "branching" => {
                self.branching =
                    self.parse_count(&normalized, value, DEFAULT_BRANCHING, MAX_BRANCHING);
            }
            "h" | "height" => {
                self.height = self.parse_count(&normalized, value, DEFAULT_HEIGHT, MAX_HEIGHT);
            }
            "v" | "value" => {
                self.value = match value.parse::<i64>() {
                    Ok(v) => v,
                    Err(_) => {
                        self.notice(format!(
                            "invalid value '{value}' for {normalized}, using {DEFAULT_VALUE}"
                        ));
                        DEFAULT_VALUE
                    }
                };
            }
            "i" | "inaccuracy" => {
                self.inaccuracy =
                    self.parse_count(&normalized, value, DEFAULT_INACCURACY, u32::MAX);
            }
            "s" | "spread" => {
                self.spread = self.parse_count(&normalized, value, DEFAULT_SPREAD, u32::MAX);
            }
            "debug" => {
                self.debug = match value.to_ascii_lowercase().as_str() {
                    "true" | "on" | "1" | "yes" => true,
                    "false" | "off" | "0" | "no" => false,
                    _ => {
                        let current = self.debug;
                        self.notice(format!("invalid debug switch '{value}', leaving it {current}"));
                        current
                    }
                };
            }
            _ => {
                return Err(ConfigError::UnknownOption {
                    name: name.trim().to_string(),
                })
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn tree_params(&self) -> TreeParams {
        TreeParams {
            branching: self.branching,
            height: self.height,
            value: self.value,
            inaccuracy: self.inaccuracy,
            spread: self.spread,
        }
    }

    /// Whether traces and the tree dump are printed.
    ///
    /// Switched off for trees wider or deeper than [`MAX_TRACED_DIMENSION`].
    #[must_use]
    pub fn tracing(&self) -> bool {
        self.debug
            && self.branching <= MAX_TRACED_DIMENSION
            && self.height <= MAX_TRACED_DIMENSION
    }

    /// Lines printed under the `TOP NODE VALUES` title
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        vec![
            format!("b: {}", self.branching),
            format!("h: {}", self.height),
            format!("v: {}", self.value),
            format!("i: {}", self.inaccuracy),
            format!("s: {}", self.spread),
        ]
    }

    /// Parse a count in `0..=max`, falling back to `default` on anything else
    fn parse_count(&mut self, name: &str, value: &str, default: u32, max: u32) -> u32 {
        match value.parse::<i64>() {
            Ok(v) if v >= 0 => match u32::try_from(v) {
                Ok(v) if v <= max => v,
                _ => {
                    self.notice(format!(
                        "{name}={value} is out of range (max {max}), using {default}"
                    ));
                    default
                }
            },
            _ => {
                self.notice(format!("invalid value '{value}' for {name}, using {default}"));
                default
            }
        }
    }

    fn notice(&mut self, message: String) {
        log::warn!("{message}");
        self.notices.push(message);
    }
}
