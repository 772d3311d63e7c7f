use crossterm::event::{Event, KeyCode};
use longevity_data::ranking::RankedView;
use longevity_stats::{frequency::FrequencyTable, summary::LifespanSummary};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Text,
    widgets::{Axis, Bar, BarChart, Block, Chart, Dataset, GraphType, Row, Table, Widget},
};

use crate::command::explore::app::AppData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Oldest,
    Youngest,
    StatsChart,
    AgeHistogram,
}

impl Page {
    const ALL: [Self; 4] = [
        Self::Oldest,
        Self::Youngest,
        Self::StatsChart,
        Self::AgeHistogram,
    ];

    fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug)]
pub struct DashboardScreen {
    data: AppData,
    page: Page,
    should_exit: bool,
}

impl DashboardScreen {
    #[must_use]
    pub fn new(data: AppData) -> Self {
        Self {
            data,
            page: Page::Oldest,
            should_exit: false,
        }
    }

    pub(crate) fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn draw(&self, frame: &mut Frame) {
        // Layout: main area + help line at bottom
        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

        match self.page {
            Page::Oldest => frame.render_widget(
                RankedTable {
                    view: &self.data.oldest,
                },
                main_area,
            ),
            Page::Youngest => frame.render_widget(
                RankedTable {
                    view: &self.data.youngest,
                },
                main_area,
            ),
            Page::StatsChart => frame.render_widget(
                StatsChart {
                    summary: &self.data.summary,
                },
                main_area,
            ),
            Page::AgeHistogram => frame.render_widget(
                AgeHistogram {
                    frequency: &self.data.frequency,
                },
                main_area,
            ),
        }

        let help_text = Text::from("Tab/→: Next | ←: Previous | q/Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        frame.render_widget(help_text, help_area);
    }

    pub(crate) fn handle_event(&mut self, event: &Event) {
        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
                KeyCode::Tab | KeyCode::Right => self.page = self.page.next(),
                KeyCode::BackTab | KeyCode::Left => self.page = self.page.prev(),
                _ => {}
            }
        }
    }
}

struct RankedTable<'a> {
    view: &'a RankedView,
}

impl Widget for RankedTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let header = Row::new(["LEADER", "BIRTH DATE", "DEATH DATE", "LOCATION OF DEATH", "AGE"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = self.view.rows.iter().map(|row| {
            let table_row = Row::new([
                row.name.clone(),
                row.birth_date.clone(),
                row.death_date.clone(),
                row.location_of_death.clone(),
                row.age.to_string(),
            ]);
            if row.living {
                // Green rows for living subjects, as in the source table styling.
                table_row.style(Style::default().fg(Color::Black).bg(Color::Green))
            } else {
                table_row
            }
        });

        let widths = [
            Constraint::Fill(2),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Fill(2),
            Constraint::Length(5),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::bordered().title(self.view.caption.clone()));

        Widget::render(table, area, buf);
    }
}

struct StatsChart<'a> {
    summary: &'a LifespanSummary,
}

impl StatsChart<'_> {
    const X_BOUNDS: [f64; 2] = [-0.5, 4.5];
}

impl Widget for StatsChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let summary = self.summary;
        let bars = [
            (0.0, summary.mean),
            (1.0, summary.weighted_mean),
            (2.0, summary.median),
            (3.0, summary.max),
            (4.0, summary.min),
        ];

        let upper_y = summary.mean + summary.std_dev;
        let lower_y = summary.mean - summary.std_dev;
        let upper = [(Self::X_BOUNDS[0], upper_y), (Self::X_BOUNDS[1], upper_y)];
        let lower = [(Self::X_BOUNDS[0], lower_y), (Self::X_BOUNDS[1], lower_y)];
        let mean_line = [
            (Self::X_BOUNDS[0], summary.mean),
            (Self::X_BOUNDS[1], summary.mean),
        ];

        let y_max = upper_y.max(summary.max) * 1.05;

        let datasets = vec![
            Dataset::default()
                .marker(Marker::HalfBlock)
                .graph_type(GraphType::Bar)
                .style(Style::default().fg(Color::Cyan))
                .data(&bars),
            Dataset::default()
                .name("Standard Deviation")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Red))
                .data(&upper),
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Red))
                .data(&lower),
            Dataset::default()
                .name("Mean")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Gray))
                .data(&mean_line),
        ];

        let x_axis = Axis::default().bounds(Self::X_BOUNDS).labels([
            "Mean",
            "Weighted Mean",
            "Median",
            "Maximum",
            "Minimum",
        ]);
        let y_axis = Axis::default()
            .title("Age (in Days)")
            .bounds([0.0, y_max])
            .labels(["0".to_owned(), format!("{:.0}", y_max / 2.0), format!("{y_max:.0}")]);

        let chart = Chart::new(datasets)
            .block(Block::bordered().title("Statistics of Lifespans"))
            .x_axis(x_axis)
            .y_axis(y_axis);

        Widget::render(chart, area, buf);
    }
}

struct AgeHistogram<'a> {
    frequency: &'a FrequencyTable,
}

impl Widget for AgeHistogram<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let bars = self
            .frequency
            .entries()
            .iter()
            .map(|&(year, count)| {
                Bar::with_label(year.to_string(), count).text_value(count.to_string())
            })
            .collect::<Vec<_>>();

        let chart = BarChart::new(bars)
            .block(Block::bordered().title("Frequency of Ages (years lived)"))
            .bar_width(4)
            .bar_gap(1)
            .max(self.frequency.max_count());

        Widget::render(chart, area, buf);
    }
}
