//! Recording Implementation
//!
//! Captures the bracketing protocol as a list of events instead of rendering
//! it. Handy for asserting call order in tests and for previewing output.

use bridge_traits::{
    error::{BridgeError, Result},
    DisplayImpl,
};
use std::sync::{Mutex, MutexGuard};

/// One call received by a [`RecordingDisplay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    Open,
    Print(String),
    Close,
}

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    events: Mutex<Vec<RenderEvent>>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far, in call order.
    pub fn events(&self) -> Result<Vec<RenderEvent>> {
        Ok(self.lock()?.clone())
    }

    pub fn clear(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<RenderEvent>>> {
        self.events
            .lock()
            .map_err(|_| BridgeError::OperationFailed("recording lock poisoned".into()))
    }

    fn push(&self, event: RenderEvent) -> Result<()> {
        self.lock()?.push(event);
        Ok(())
    }
}

impl DisplayImpl for RecordingDisplay {
    fn raw_open(&self) -> Result<()> {
        self.push(RenderEvent::Open)
    }

    fn raw_print(&self, text: &str) -> Result<()> {
        self.push(RenderEvent::Print(text.to_string()))
    }

    fn raw_close(&self) -> Result<()> {
        self.push(RenderEvent::Close)
    }
}
