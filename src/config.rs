use log::warn;
use std::env;

use crate::ledger::{DEFAULT_DIFFICULTY, DIFF_MAX, DIFF_MIN};

/// Runtime settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub difficulty: i32,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port: u16 = lookup("PORT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);

        let difficulty = match lookup("DIFFICULTY") {
            None => DEFAULT_DIFFICULTY,
            Some(raw) => match raw.trim().parse::<i32>() {
                Ok(d) if (DIFF_MIN..=DIFF_MAX).contains(&d) => d,
                Ok(d) => {
                    let clamped = d.clamp(DIFF_MIN, DIFF_MAX);
                    warn!("DIFFICULTY={} out of range, using {}", d, clamped);
                    clamped
                }
                Err(_) => {
                    warn!(
                        "DIFFICULTY={:?} is not a number, using {}",
                        raw, DEFAULT_DIFFICULTY
                    );
                    DEFAULT_DIFFICULTY
                }
            },
        };

        Self {
            host,
            port,
            difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.difficulty, 3);
    }

    #[test]
    fn overrides() {
        let cfg = config(&[("HOST", "0.0.0.0"), ("PORT", "9000"), ("DIFFICULTY", "5")]);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.difficulty, 5);
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = config(&[("PORT", "nope"), ("DIFFICULTY", "hard")]);
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.difficulty, 3);
    }

    #[test]
    fn difficulty_is_clamped() {
        assert_eq!(config(&[("DIFFICULTY", "12")]).difficulty, 6);
        assert_eq!(config(&[("DIFFICULTY", "-2")]).difficulty, 0);
    }
}
