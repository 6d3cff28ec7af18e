//! Phase execution timing with optional live console output
//!
//! The timer is an instrumentation context owned by whoever drives a
//! runner; independent runners can each hold their own. While a
//! measurement is in flight and live printing is enabled, a background
//! ticker rewrites the phase label and elapsed time in place. Stopping
//! joins that ticker before anything else is written, so timing output
//! never interleaves with a unit's own console output that follows.

use chrono::TimeDelta;
use std::fmt;
use std::io::{self, Write};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// Label column width shared by all phase lines.
const LABEL_WIDTH: usize = 20;

/// How often the live ticker redraws the elapsed time.
const LIVE_TICK: Duration = Duration::from_millis(50);

/// A timed phase of one runner invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Loading and parsing the raw puzzle input
    Input,
    /// Solving the numbered part
    Part(u8),
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Input => write!(f, "{:>width$}", "Input", width = LABEL_WIDTH),
            Phase::Part(number) => {
                let label = format!("Part {number}");
                write!(f, "{label:>width$}", width = LABEL_WIDTH)
            }
        }
    }
}

/// Execution timer context: a live-printing flag plus at most one
/// in-flight measurement.
///
/// Starting a measurement while one is running is a programming error in
/// the driving code and panics rather than being silently ignored.
pub struct ExecutionTimer {
    live_printing: bool,
    in_flight: Option<Measurement>,
}

struct Measurement {
    phase: Phase,
    started: Instant,
    ticker: Option<Ticker>,
}

struct Ticker {
    stop: Sender<()>,
    handle: JoinHandle<()>,
}

impl ExecutionTimer {
    /// New timer with live printing enabled.
    pub fn new() -> Self {
        Self {
            live_printing: true,
            in_flight: None,
        }
    }

    /// Whether incremental timing output is emitted while measuring.
    pub fn live_printing(&self) -> bool {
        self.live_printing
    }

    /// Enable or disable incremental timing output. The final duration is
    /// still printed when a measurement stops.
    pub fn set_live_printing(&mut self, enabled: bool) {
        self.live_printing = enabled;
    }

    /// Whether a measurement is currently in flight.
    pub fn is_measuring(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start measuring a phase.
    ///
    /// # Panics
    /// Panics if a measurement is already in flight.
    pub fn begin(&mut self, phase: Phase) {
        assert!(
            self.in_flight.is_none(),
            "execution measurement already in flight; stop the current phase first"
        );
        let started = Instant::now();
        let ticker = self.live_printing.then(|| spawn_ticker(phase, started));
        self.in_flight = Some(Measurement {
            phase,
            started,
            ticker,
        });
    }

    /// Stop the in-flight measurement, print the final labeled duration and
    /// return the elapsed wall-clock time.
    ///
    /// Returns only after the live ticker has been joined, so no timing
    /// output can trail into whatever the caller writes next.
    ///
    /// # Panics
    /// Panics if no measurement is in flight.
    pub fn stop(&mut self) -> Duration {
        let measurement = self
            .in_flight
            .take()
            .expect("stop called with no measurement in flight");
        let elapsed = measurement.started.elapsed();

        if let Some(ticker) = measurement.ticker {
            // Disconnect the channel; the ticker exits on its next wakeup.
            drop(ticker.stop);
            let _ = ticker.handle.join();
        }

        println!("\r{}: {}", measurement.phase, format_duration(elapsed));
        elapsed
    }

    /// Run `f` with live printing forced off when `suppress` is set,
    /// restoring the previous setting afterwards.
    ///
    /// Used for phases whose unit writes its own console output; the
    /// duration is still measured and reported once at the end.
    pub fn with_live_suppressed<T>(&mut self, suppress: bool, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.live_printing;
        if suppress {
            self.live_printing = false;
        }
        let out = f(self);
        self.live_printing = saved;
        out
    }

    /// Run one phase: measured and labeled when `display` is set, with
    /// live printing suppressed when the phase writes its own output.
    pub fn time_phase<T>(
        &mut self,
        display: bool,
        suppress_live: bool,
        phase: Phase,
        run: impl FnOnce() -> T,
    ) -> T {
        self.with_live_suppressed(suppress_live, |timer| {
            if display {
                timer.begin(phase);
            }
            let out = run();
            if display {
                timer.stop();
            }
            out
        })
    }
}

impl Default for ExecutionTimer {
    fn default() -> Self {
        Self::new()
    }
}

fn spawn_ticker(phase: Phase, started: Instant) -> Ticker {
    let (stop, ticks) = mpsc::channel::<()>();
    let handle = std::thread::spawn(move || {
        let mut stdout = io::stdout();
        loop {
            match ticks.recv_timeout(LIVE_TICK) {
                Err(RecvTimeoutError::Timeout) => {
                    let _ = write!(stdout, "\r{}: {}", phase, format_duration(started.elapsed()));
                    let _ = stdout.flush();
                }
                _ => break,
            }
        }
    });
    Ticker { stop, handle }
}

/// Format a duration for display, autoscaling between µs, ms and s.
pub fn format_duration(duration: Duration) -> String {
    let Ok(delta) = TimeDelta::from_std(duration) else {
        return "N/A".to_string();
    };
    let Some(micros) = delta.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
