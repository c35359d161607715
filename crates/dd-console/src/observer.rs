//! `ConsoleObserver<W>` — narrates a delivery day to any `Write` sink.

use std::io::{self, Write};

use dd_sim::{DaySummary, DeliveryObserver, DeliveryOutcome};

use crate::render;

/// A [`DeliveryObserver`] that prints each attempt and the closing summary.
///
/// Write errors are stored internally because observer hooks have no return
/// value.  After `run_day` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct ConsoleObserver<W: Write> {
    out:        W,
    last_error: Option<io::Error>,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn store_err(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> DeliveryObserver for ConsoleObserver<W> {
    fn on_attempt_start(&mut self, location: &str) {
        let result = render::write_attempt_header(&mut self.out, location);
        self.store_err(result);
    }

    fn on_outcome(&mut self, outcome: &DeliveryOutcome) {
        let result = render::write_outcome(&mut self.out, outcome);
        self.store_err(result);
    }

    fn on_day_end(&mut self, summary: &DaySummary) {
        let result = render::write_summary(&mut self.out, summary).and_then(|()| self.out.flush());
        self.store_err(result);
    }
}
