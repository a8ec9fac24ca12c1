//! # Date Picker Example
//!
//! Single-select calendar demonstrating the host wiring:
//! - Embedding the [`Calendar`] component in a [`Model`]
//! - Forwarding key events to the component with `Command::map`
//! - Intercepting the `DatesSelected` report in the host's `update`
//!
//! Run with: `cargo run --example date_picker`

use datil::chrono::NaiveDate;
use datil::crossterm::event::KeyCode;
use datil::ratatui::layout::{Constraint, Layout};
use datil::ratatui::style::{Color, Style};
use datil::ratatui::text::{Line, Span};
use datil::ratatui::widgets::{Block, Borders, Paragraph};
use datil::ratatui::Frame;
use datil::widgets::calendar::{self, Calendar};
use datil::{Command, Component, Model, TerminalEvent};

struct DatePicker {
    calendar: Calendar,
    picked: Option<NaiveDate>,
}

enum Msg {
    Calendar(calendar::Message),
    Quit,
}

impl Model for DatePicker {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let calendar = Calendar::new().with_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Pick a date "),
        );
        (
            DatePicker {
                calendar,
                picked: None,
            },
            Command::none(),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            // In single-select mode the calendar reports every pick
            // immediately; the host consumes the report instead of
            // forwarding it back.
            Msg::Calendar(calendar::Message::DatesSelected(dates)) => {
                self.picked = dates.first().copied();
                Command::none()
            }
            Msg::Calendar(m) => self.calendar.update(m).map(Msg::Calendar),
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [cal_area, status] =
            Layout::vertical([Constraint::Length(12), Constraint::Length(1)]).areas(frame.area());

        self.calendar.view(frame, cal_area);

        let status_line = match self.picked {
            Some(date) => Line::from(vec![
                Span::raw(" picked: "),
                Span::styled(date.format("%Y-%m-%d").to_string(), Style::default().fg(Color::Green)),
                Span::raw("   q quit"),
            ]),
            None => Line::raw(" arrows move, enter picks, q quits"),
        };
        frame.render_widget(Paragraph::new(status_line), status);
    }

    fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
        match event {
            TerminalEvent::Key(key) => match key.code {
                KeyCode::Char('q') => Some(Msg::Quit),
                _ => Some(Msg::Calendar(calendar::Message::KeyPress(key))),
            },
            _ => None,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let model = datil::run::<DatePicker>(())?;
    match model.picked {
        Some(date) => println!("Picked {}", date.format("%Y-%m-%d")),
        None => println!("No date picked"),
    }
    Ok(())
}
