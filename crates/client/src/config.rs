//! Environment overrides for the simulation binary.
use std::env;

/// Settings read from the process environment.
#[derive(Clone, Debug, Default)]
pub struct SimEnv {
    pub seed: Option<u64>,
}

impl SimEnv {
    /// Environment variables:
    /// - `DUEL_SEED` - seed for the session's random source (default: entropy)
    pub fn from_env() -> Self {
        Self {
            seed: read_env::<u64>("DUEL_SEED"),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
