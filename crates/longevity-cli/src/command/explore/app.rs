use crossterm::event::Event;
use longevity_data::ranking::RankedView;
use longevity_stats::{frequency::FrequencyTable, summary::LifespanSummary};
use ratatui::Frame;

use crate::{command::explore::screens::Screen, tui::App};

#[derive(Debug)]
pub struct ExploreApp {
    screen: Screen,
}

/// Everything the screens render; computed once before the TUI starts.
#[derive(Debug)]
pub struct AppData {
    pub oldest: RankedView,
    pub youngest: RankedView,
    pub summary: LifespanSummary,
    pub frequency: FrequencyTable,
}

impl ExploreApp {
    pub fn new(data: AppData) -> Self {
        Self {
            screen: Screen::dashboard(data),
        }
    }
}

impl App for ExploreApp {
    fn should_exit(&self) -> bool {
        self.screen.should_exit()
    }

    fn handle_event(&mut self, event: Event) {
        self.screen.handle_event(&event);
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }
}
