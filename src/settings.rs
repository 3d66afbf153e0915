use std::sync::OnceLock;
use std::time::Duration;

/// Process-wide knobs, read from the environment once.
///
/// - `PATTERNS_NO_PAUSE=1` skips the "press Enter to exit" prompt.
/// - `PATTERNS_NO_DELAY=1` turns simulated latencies into no-ops.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub pause_on_exit: bool,
    pub simulate_latency: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pause_on_exit: true,
            simulate_latency: true,
        }
    }
}

impl Settings {
    pub fn global() -> &'static Settings {
        static SETTINGS: OnceLock<Settings> = OnceLock::new();
        SETTINGS.get_or_init(|| Settings::from_lookup(|key| std::env::var(key).ok()))
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            pause_on_exit: !flag_enabled(lookup("PATTERNS_NO_PAUSE")).unwrap_or(false),
            simulate_latency: !flag_enabled(lookup("PATTERNS_NO_DELAY")).unwrap_or(false),
        }
    }

    /// Scales a simulated delay down to zero when latency is disabled.
    pub fn latency(&self, nominal: Duration) -> Duration {
        if self.simulate_latency {
            nominal
        } else {
            Duration::ZERO
        }
    }
}

fn flag_enabled(value: Option<String>) -> Option<bool> {
    let value = value?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings, Settings::default());
        assert!(settings.pause_on_exit);
        assert!(settings.simulate_latency);
    }

    #[test]
    fn test_flags_disable_pause_and_delay() {
        let settings =
            Settings::from_lookup(lookup_from(&[("PATTERNS_NO_PAUSE", "1"), ("PATTERNS_NO_DELAY", "true")]));
        assert!(!settings.pause_on_exit);
        assert!(!settings.simulate_latency);
    }

    #[test]
    fn test_unrecognized_value_keeps_default() {
        let settings = Settings::from_lookup(lookup_from(&[("PATTERNS_NO_PAUSE", "maybe")]));
        assert!(settings.pause_on_exit);
    }

    #[test]
    fn test_latency_scaling() {
        let nominal = Duration::from_millis(1500);
        let live = Settings::default();
        let fast = Settings {
            simulate_latency: false,
            ..Settings::default()
        };
        assert_eq!(live.latency(nominal), nominal);
        assert_eq!(fast.latency(nominal), Duration::ZERO);
    }

    #[test]
    fn test_global_is_single_instance() {
        assert!(std::ptr::eq(Settings::global(), Settings::global()));
    }
}
