use crate::config::TimerConfig;
use crate::scheduler::SessionScheduler;

/// Running state of the application
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RunningState {
    #[default]
    Running,
    Done,
}

/// All possible application messages/events
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The start/stop button
    Toggle,
    /// One second of wall clock elapsed
    Tick,
    ToggleHelp,
    Quit,
}

/// Main application state
pub struct App {
    pub running_state: RunningState,
    pub scheduler: SessionScheduler,
    pub show_help: bool,
}

impl App {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            running_state: RunningState::default(),
            scheduler: SessionScheduler::new(config),
            show_help: false,
        }
    }

    /// Core update function
    pub fn update(&mut self, msg: Message) -> Option<Message> {
        match msg {
            Message::Toggle => {
                self.scheduler.toggle();
                None
            }
            Message::Tick => {
                self.scheduler.tick();
                None
            }
            Message::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            Message::Quit => {
                self.running_state = RunningState::Done;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::Phase;

    fn app() -> App {
        App::new(TimerConfig::new(4, 30, 5, 30).unwrap())
    }

    #[test]
    fn toggle_message_starts_the_scheduler() {
        let mut app = app();
        app.update(Message::Toggle);
        assert!(app.scheduler.is_running());
        assert_eq!(app.scheduler.phase(), Phase::Work);
    }

    #[test]
    fn tick_message_advances_the_countdown() {
        let mut app = app();
        app.update(Message::Toggle);
        app.update(Message::Tick);
        assert_eq!(app.scheduler.remaining_seconds(), 30 * 60 - 1);
    }

    #[test]
    fn quit_message_ends_the_loop() {
        let mut app = app();
        app.update(Message::Quit);
        assert_eq!(app.running_state, RunningState::Done);
    }

    #[test]
    fn help_toggles_on_and_off() {
        let mut app = app();
        app.update(Message::ToggleHelp);
        assert!(app.show_help);
        app.update(Message::ToggleHelp);
        assert!(!app.show_help);
    }
}
