use std::{
    path::Path,
    sync::{Mutex, MutexGuard, OnceLock},
};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const CONFIG_HOME: &str = "SENTISCOPE_CONFIG_HOME";
const API_URL: &str = "SENTISCOPE_API_URL";

/// Holds the process-wide env lock and restores the touched variables on drop.
pub struct SentiscopeEnvGuard {
    previous: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl SentiscopeEnvGuard {
    pub fn set(config_home: &Path, api_url: Option<&str>) -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|err| err.into_inner());
        let previous = vec![
            (CONFIG_HOME, std::env::var(CONFIG_HOME).ok()),
            (API_URL, std::env::var(API_URL).ok()),
        ];
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            std::env::set_var(CONFIG_HOME, config_home);
            match api_url {
                Some(url) => std::env::set_var(API_URL, url),
                None => std::env::remove_var(API_URL),
            }
        }
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for SentiscopeEnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            // SAFETY: tests run under a global lock to prevent concurrent env mutations.
            unsafe {
                match value {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
