//! Property-test run profile parsing for CI and local overrides.
//!
//! Every property suite in the workspace reads its case count and fork
//! mode through [`ProptestRunProfile`], so one environment change tunes
//! them all.

use std::env;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const GRAPHE_PBT_FORK_ENV_KEY: &str = "GRAPHE_PBT_FORK";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Load a profile from environment variables with provided defaults.
    /// Unparseable overrides are logged and ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphe_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROGTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(GRAPHE_PBT_FORK_ENV_KEY, default_fork, parse_switch),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or<T: Copy>(
    key: &'static str,
    default: T,
    parse: impl Fn(&str) -> Result<T, String>,
) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "ignoring invalid property-test override",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("parse error: {error}")),
    }
}

fn parse_switch(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::{Mutex, MutexGuard};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Holds the environment lock and restores both keys on drop.
    struct ScopedEnv {
        saved: Vec<(&'static str, Option<String>)>,
        _lock: MutexGuard<'static, ()>,
    }

    impl ScopedEnv {
        fn new(cases: Option<&str>, fork: Option<&str>) -> Self {
            let lock = ENV_LOCK.lock().expect("env lock");
            let mut saved = Vec::new();
            for (key, value) in [
                (PROGTEST_CASES_ENV_KEY, cases),
                (GRAPHE_PBT_FORK_ENV_KEY, fork),
            ] {
                saved.push((key, env::var(key).ok()));
                // SAFETY: tests serialize access with ENV_LOCK.
                unsafe {
                    match value {
                        Some(value) => env::set_var(key, value),
                        None => env::remove_var(key),
                    }
                }
            }
            Self { saved, _lock: lock }
        }
    }

    impl Drop for ScopedEnv {
        fn drop(&mut self) {
            for (key, original) in &self.saved {
                // SAFETY: tests serialize access with ENV_LOCK.
                unsafe {
                    match original {
                        Some(value) => env::set_var(key, value),
                        None => env::remove_var(key),
                    }
                }
            }
        }
    }

    #[test]
    fn load_defaults_when_no_overrides_exist() {
        let _env = ScopedEnv::new(None, None);
        let profile = ProptestRunProfile::load(64, false);
        assert_eq!(profile.cases(), 64);
        assert!(!profile.fork());
    }

    #[rstest]
    #[case("1", 1)]
    #[case(" 250 ", 250)]
    #[case("25000", 25_000)]
    fn load_accepts_valid_case_overrides(#[case] raw: &str, #[case] expected: u32) {
        let _env = ScopedEnv::new(Some(raw), None);
        assert_eq!(ProptestRunProfile::load(64, false).cases(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("abc")]
    fn load_ignores_invalid_case_overrides(#[case] raw: &str) {
        let _env = ScopedEnv::new(Some(raw), None);
        assert_eq!(ProptestRunProfile::load(64, false).cases(), 64);
    }

    #[rstest]
    #[case("true", true)]
    #[case("ON", true)]
    #[case("1", true)]
    #[case("no", false)]
    #[case("0", false)]
    fn load_accepts_valid_fork_overrides(#[case] raw: &str, #[case] expected: bool) {
        let _env = ScopedEnv::new(None, Some(raw));
        assert_eq!(ProptestRunProfile::load(64, !expected).fork(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("maybe")]
    #[case("2")]
    fn load_ignores_invalid_fork_overrides(#[case] raw: &str) {
        let _env = ScopedEnv::new(None, Some(raw));
        assert!(ProptestRunProfile::load(64, true).fork());
    }
}
