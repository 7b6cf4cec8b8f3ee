// src/core/retry.rs

// Opt-in retry around network calls. Parsing never goes through here.

use std::{error::Error, thread, time::Duration};

use log::warn;

use crate::config::consts::{DEFAULT_ATTEMPTS, REQUEST_PAUSE_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total tries, first one included. 0 is treated as 1.
    pub attempts: u32,
    pub pause: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

impl RetryPolicy {
    pub fn with_attempts(attempts: u32) -> Self {
        Self { attempts, ..Self::default() }
    }

    /// Run `op` until it succeeds or the attempts are used up.
    /// The last error is returned unchanged.
    pub fn run<T, F>(&self, what: &str, mut op: F) -> Result<T, Box<dyn Error>>
    where
        F: FnMut() -> Result<T, Box<dyn Error>>,
    {
        let attempts = self.attempts.max(1);
        let mut attempt = 1;
        loop {
            match op() {
                Ok(v) => return Ok(v),
                Err(e) if attempt < attempts => {
                    warn!("{what}: attempt {attempt}/{attempts} failed: {e}");
                    thread::sleep(self.pause);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
