//! Stats counters that count up once their container becomes visible.

/// Interval of the percentage counter timer.
pub const PERCENT_STEP_MS: u64 = 16;

/// Total duration of a percentage count.
pub const PERCENT_DURATION_MS: u64 = 2000;

/// Interval of the "N+" counter timer.
pub const PLUS_STEP_MS: u64 = 200;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Kind {
    /// `0%` up to `target%` in fixed increments.
    Percent { target: u32, current: f64, increment: f64 },
    /// `0`, `1+`, ... up to `target+`, one per step.
    Plus { target: u32, current: u32 },
    /// Labels that do not animate.
    Static,
}

/// A counter driven by a repeating timer.
///
/// The host calls [`step`](Self::step) every [`interval_ms`](Self::interval_ms)
/// and cancels its timer once [`is_finished`](Self::is_finished) returns true.
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    kind: Kind,
    label: String,
    finished: bool,
}

impl Counter {
    /// Build a counter for a stat label such as `40%` or `3+`.
    ///
    /// The returned counter already shows its starting label. Any other
    /// label is kept as is and reports finished immediately.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        if let Some(target) = trimmed.strip_suffix('%').and_then(|n| n.parse::<u32>().ok()) {
            let increment = target as f64 / (PERCENT_DURATION_MS as f64 / PERCENT_STEP_MS as f64);
            return Self {
                kind: Kind::Percent {
                    target,
                    current: 0.0,
                    increment,
                },
                label: "0%".to_string(),
                finished: false,
            };
        }
        if let Some(target) = trimmed.strip_suffix('+').and_then(|n| n.parse::<u32>().ok()) {
            return Self {
                kind: Kind::Plus { target, current: 0 },
                label: "0".to_string(),
                finished: false,
            };
        }
        Self {
            kind: Kind::Static,
            label: trimmed.to_string(),
            finished: true,
        }
    }

    /// Timer interval for this counter.
    pub fn interval_ms(&self) -> u64 {
        match self.kind {
            Kind::Percent { .. } => PERCENT_STEP_MS,
            Kind::Plus { .. } => PLUS_STEP_MS,
            Kind::Static => 0,
        }
    }

    /// Text to display right now.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by one timer tick. Does nothing once finished.
    pub fn step(&mut self) {
        if self.finished {
            return;
        }
        match &mut self.kind {
            Kind::Percent {
                target,
                current,
                increment,
            } => {
                *current += *increment;
                if *current >= *target as f64 {
                    self.label = format!("{target}%");
                    self.finished = true;
                } else {
                    self.label = format!("{}%", current.floor() as u32);
                }
            }
            Kind::Plus { target, current } => {
                *current += 1;
                self.label = format!("{current}+");
                if *current >= *target {
                    self.finished = true;
                }
            }
            Kind::Static => self.finished = true,
        }
    }
}

/// Drives a [`Counter`] from elapsed time, firing one step per interval.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTimer {
    counter: Counter,
    /// Time accumulated toward the next step.
    pending_ms: u64,
}

impl CounterTimer {
    pub fn new(counter: Counter) -> Self {
        Self {
            counter,
            pending_ms: 0,
        }
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    /// Feed `delta_ms` of elapsed time. Returns true while the timer is
    /// still running.
    pub fn advance(&mut self, delta_ms: u64) -> bool {
        let interval = self.counter.interval_ms();
        if self.counter.is_finished() || interval == 0 {
            return false;
        }
        self.pending_ms += delta_ms;
        while self.pending_ms >= interval && !self.counter.is_finished() {
            self.pending_ms -= interval;
            self.counter.step();
        }
        !self.counter.is_finished()
    }
}
