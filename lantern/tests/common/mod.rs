#![allow(dead_code)]

use lantern::{BoxError, Launcher, Router, ServerConfig};
use std::sync::Mutex;

#[allow(unused_imports)]
pub use lantern::testing::{html_response_for, request_for};

// ============================================================================
// Test Launchers
// ============================================================================

/// Records what it was asked to launch instead of listening.
#[derive(Default)]
pub struct RecordingLauncher {
    pub launched: Mutex<Vec<(String, u16, usize)>>,
}

impl RecordingLauncher {
    pub fn launches(&self) -> Vec<(String, u16, usize)> {
        self.launched.lock().unwrap().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&self, router: Router, config: &ServerConfig) -> Result<(), BoxError> {
        self.launched
            .lock()
            .unwrap()
            .push((config.ip.clone(), config.port, router.len()));
        Ok(())
    }
}

/// Fails every launch.
pub struct FailingLauncher;

impl Launcher for FailingLauncher {
    fn launch(&self, _router: Router, _config: &ServerConfig) -> Result<(), BoxError> {
        Err("address already in use".into())
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub fn get(path: &str) -> lantern::Request {
    request_for(path, Some("localhost:2000"), "GET")
}
