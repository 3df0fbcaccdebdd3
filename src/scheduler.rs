use crate::config::TimerConfig;

const WORK_CAPTION: &str = "YOU HAVE TO BE WILLING TO GO TO WAR WITH YOURSELF";
const BREAK_CAPTION: &str = "TAKE A WELL DESERVED BREAK!";

/// One timed interval of the pomodoro cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No phase has started yet
    #[default]
    Idle,
    Work,
    ShortBreak,
    LongBreak,
}

impl Phase {
    pub fn is_break(&self) -> bool {
        matches!(self, Phase::ShortBreak | Phase::LongBreak)
    }

    /// Heading shown above the countdown.
    pub fn title(&self) -> &'static str {
        match self {
            Phase::Idle => "Pomodoro",
            Phase::Work => "Work Time",
            Phase::ShortBreak | Phase::LongBreak => "Break Time",
        }
    }

    /// Motivational line for the caption label.
    pub fn caption(&self) -> &'static str {
        match self {
            Phase::Idle => "",
            Phase::Work => WORK_CAPTION,
            Phase::ShortBreak | Phase::LongBreak => BREAK_CAPTION,
        }
    }
}

/// Snapshot of everything the surface is asked to display.
///
/// The surface renders exactly this text; it never reads scheduler fields to
/// invent its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFrame {
    pub countdown: String,
    pub caption: &'static str,
    pub button_label: &'static str,
}

/// The session state machine: session counting, phase classification and the
/// per-second countdown.
///
/// Pure and synchronous. It owns no clock; the event loop feeds it `tick()`
/// once per second while running, and `toggle()` on user input.
#[derive(Debug)]
pub struct SessionScheduler {
    config: TimerConfig,
    session_count: u32,
    remaining_seconds: u32,
    phase: Phase,
    running: bool,
}

impl SessionScheduler {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            session_count: 0,
            remaining_seconds: 0,
            phase: Phase::Idle,
            running: false,
        }
    }

    /// Pick the phase and duration (minutes) for the session count as it
    /// stands when a new phase begins.
    ///
    /// The odd-count arm claims every odd count, and `cycle - 1` is always
    /// odd, so the long-break arm never fires. The rule is kept verbatim
    /// anyway; its observable schedule is what the program has always done.
    fn select_phase(&self) -> (Phase, u32) {
        let cycle = self.config.sessions_per_cycle * 2;
        if self.session_count % cycle == 0 {
            (Phase::Work, self.config.work_minutes)
        } else if self.session_count % 2 == 1 {
            (Phase::ShortBreak, self.config.short_break_minutes)
        } else if self.session_count % cycle == cycle - 1 {
            (Phase::LongBreak, self.config.long_break_minutes)
        } else {
            (Phase::ShortBreak, self.config.short_break_minutes)
        }
    }

    /// Start/stop button behavior.
    ///
    /// Running: pause in place. Paused mid-phase: resume with the remaining
    /// time untouched. Idle or at a phase boundary: select the next phase and
    /// arm its full countdown.
    pub fn toggle(&mut self) {
        if self.running {
            self.running = false;
            return;
        }
        if self.phase == Phase::Idle || self.remaining_seconds == 0 {
            let (phase, minutes) = self.select_phase();
            self.phase = phase;
            // minutes <= MAX_MINUTES, so the conversion fits in u32
            self.remaining_seconds = minutes * 60;
        }
        self.running = true;
    }

    /// One second elapsed. No-op unless running.
    ///
    /// Hitting zero completes the phase: the session counter moves by exactly
    /// one and the next phase starts immediately, within this same call.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.running = false;
            self.session_count += 1;
            self.toggle();
        }
    }

    pub fn render(&self) -> RenderFrame {
        RenderFrame {
            countdown: format_mmss(self.remaining_seconds),
            caption: self.phase.caption(),
            button_label: if self.running { "Stop" } else { "Start" },
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn session_count(&self) -> u32 {
        self.session_count
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Work sessions completed so far (every other completed phase).
    pub fn completed_work_sessions(&self) -> u32 {
        self.session_count.div_ceil(2)
    }
}

/// Format seconds as zero-padded MM:SS.
pub fn format_mmss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
