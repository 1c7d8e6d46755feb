#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ClockState {
    #[default]
    Idle,
    Running,
    Stopped,
}

/// Whether a change to the clock made it run out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockSignal {
    Running,
    Expired,
}

/// Round countdown in whole seconds. Reports `Expired` exactly once, on the
/// change that takes it to zero or below, and stops there.
#[derive(Debug, Clone, Default)]
pub struct Countdown {
    remaining: i64,
    state: ClockState,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, seconds: i64) {
        self.remaining = seconds;
        self.state = ClockState::Running;
    }

    pub fn tick(&mut self) -> Option<ClockSignal> {
        self.adjust(-1)
    }

    /// Moves the clock by `delta` seconds. Ignored unless running.
    pub fn adjust(&mut self, delta: i64) -> Option<ClockSignal> {
        if self.state != ClockState::Running {
            return None;
        }
        self.remaining += delta;
        if self.remaining <= 0 {
            self.state = ClockState::Stopped;
            Some(ClockSignal::Expired)
        } else {
            Some(ClockSignal::Running)
        }
    }

    pub fn stop(&mut self) {
        if self.state == ClockState::Running {
            self.state = ClockState::Stopped;
        }
    }

    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }
}
