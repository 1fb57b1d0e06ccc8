//! Counting Display
//!
//! Extends [`Display`] with repeated output. Nothing on the implementation
//! side changes to support it.

use crate::display::Display;
use crate::error::{DisplayError, Result};
use bridge_traits::DisplayImpl;
use std::ops::Deref;
use std::sync::Arc;
use tracing::{instrument, warn};

/// Display with an extra `multi_show` operation.
///
/// Dereferences to [`Display`], so `open`, `print`, `close` and `show` are
/// all available on a `CountDisplay` as well.
#[derive(Debug, Clone)]
pub struct CountDisplay {
    display: Display,
}

impl CountDisplay {
    pub fn new(implementation: Arc<dyn DisplayImpl>) -> Self {
        Self {
            display: Display::new(implementation),
        }
    }

    /// Open once, print `text` `times` times, close once.
    ///
    /// `times == 0` still opens and closes. A negative count is rejected with
    /// [`DisplayError::InvalidArgument`] before anything reaches the
    /// implementation.
    #[instrument(level = "debug", skip(self))]
    pub fn multi_show(&self, times: i64, text: &str) -> Result<()> {
        let times = usize::try_from(times).map_err(|_| {
            warn!(times, "Rejected negative repetition count");
            DisplayError::InvalidArgument {
                name: "times".to_string(),
                value: times.to_string(),
                reason: "repetition count must not be negative".to_string(),
            }
        })?;

        self.display.bracket(times, text)
    }

    pub fn as_display(&self) -> &Display {
        &self.display
    }
}

impl From<Display> for CountDisplay {
    fn from(display: Display) -> Self {
        Self { display }
    }
}

impl Deref for CountDisplay {
    type Target = Display;

    fn deref(&self) -> &Display {
        &self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_console::{RecordingDisplay, RenderEvent};

    fn setup() -> (Arc<RecordingDisplay>, CountDisplay) {
        let recorder = Arc::new(RecordingDisplay::new());
        let display = CountDisplay::new(recorder.clone());
        (recorder, display)
    }

    #[test]
    fn test_multi_show_repeats_print() {
        let (recorder, display) = setup();
        display.multi_show(3, "hogahoga").unwrap();

        let events = recorder.events().unwrap();
        assert_eq!(events.len(), 5);
        assert_eq!(events.first(), Some(&RenderEvent::Open));
        assert_eq!(events.last(), Some(&RenderEvent::Close));
        assert!(events[1..4]
            .iter()
            .all(|event| *event == RenderEvent::Print("hogahoga".into())));
    }

    #[test]
    fn test_multi_show_zero_times() {
        let (recorder, display) = setup();
        display.multi_show(0, "never").unwrap();

        assert_eq!(
            recorder.events().unwrap(),
            vec![RenderEvent::Open, RenderEvent::Close]
        );
    }

    #[test]
    fn test_multi_show_negative_is_rejected() {
        let (recorder, display) = setup();
        let err = display.multi_show(-1, "nope").unwrap_err();

        match err {
            DisplayError::InvalidArgument { name, value, .. } => {
                assert_eq!(name, "times");
                assert_eq!(value, "-1");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(recorder.events().unwrap().is_empty());
    }

    #[test]
    fn test_show_available_through_deref() {
        let (recorder, display) = setup();
        display.show("once").unwrap();

        assert_eq!(
            recorder.events().unwrap(),
            vec![
                RenderEvent::Open,
                RenderEvent::Print("once".into()),
                RenderEvent::Close,
            ]
        );
    }

    #[test]
    fn test_from_display_keeps_binding() {
        let recorder: Arc<dyn DisplayImpl> = Arc::new(RecordingDisplay::new());
        let display = Display::new(recorder.clone());
        let counting = CountDisplay::from(display);

        assert!(Arc::ptr_eq(counting.as_display().implementation(), &recorder));
    }
}
