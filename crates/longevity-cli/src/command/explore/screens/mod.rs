use crossterm::event::Event;
use ratatui::Frame;

use crate::command::explore::{app::AppData, screens::dashboard::DashboardScreen};

mod dashboard;

#[derive(Debug)]
pub enum Screen {
    Dashboard(DashboardScreen),
}

impl Screen {
    #[must_use]
    pub fn dashboard(data: AppData) -> Self {
        Self::Dashboard(DashboardScreen::new(data))
    }

    pub fn should_exit(&self) -> bool {
        match self {
            Self::Dashboard(screen) => screen.should_exit(),
        }
    }

    pub fn handle_event(&mut self, event: &Event) {
        match self {
            Self::Dashboard(screen) => screen.handle_event(event),
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        match self {
            Self::Dashboard(screen) => screen.draw(frame),
        }
    }
}
