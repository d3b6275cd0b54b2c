use config::{Config, ConfigError, Environment};
use serde::Deserialize;

pub const NOTES_WINDOW: usize = 100;
pub const RECONCILE_THRESHOLD: usize = 3;
const ENV_PREFIX: &str = "COURSE_EXTRACT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Characters scanned after a semester for a `PR:` note.
    pub notes_window: usize,
    /// Primary results with fewer records than this get local backfill.
    pub reconcile_threshold: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            notes_window: NOTES_WINDOW,
            reconcile_threshold: RECONCILE_THRESHOLD,
        }
    }
}

impl Settings {
    /// Defaults, overridden by `COURSE_EXTRACT_*` environment variables.
    pub fn load() -> Result<Settings, ConfigError> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    fn from_env(env: Environment) -> Result<Settings, ConfigError> {
        Config::builder()
            .set_default("notes_window", NOTES_WINDOW as u64)?
            .set_default("reconcile_threshold", RECONCILE_THRESHOLD as u64)?
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}
