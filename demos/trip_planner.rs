//! # Trip Planner Example
//!
//! Multi-select calendar with disabled dates. Days already booked cannot be
//! selected; toggled days accumulate until `d` confirms them as one report.
//! Demonstrates seeding a selection from the host via `set_selected_dates`
//! (press `r`), the resynchronization path an externally owned selection
//! would use.
//!
//! Run with: `cargo run --example trip_planner`

use datil::chrono::{Days, Local, NaiveDate};
use datil::crossterm::event::KeyCode;
use datil::ratatui::layout::{Constraint, Layout};
use datil::ratatui::style::{Color, Style};
use datil::ratatui::text::{Line, Span};
use datil::ratatui::widgets::{Block, Borders, Paragraph};
use datil::ratatui::Frame;
use datil::widgets::calendar::{self, Calendar};
use datil::{Command, Component, Model, TerminalEvent};

struct TripPlanner {
    calendar: Calendar,
    confirmed: Vec<NaiveDate>,
}

enum Msg {
    Calendar(calendar::Message),
    ResetToNextWeekend,
    Quit,
}

/// Days that are already booked, relative to today.
fn booked_dates(today: NaiveDate) -> Vec<NaiveDate> {
    [2u64, 9, 16]
        .iter()
        .filter_map(|offset| today.checked_add_days(Days::new(*offset)))
        .collect()
}

impl Model for TripPlanner {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let today = Local::now().date_naive();
        let calendar = Calendar::new()
            .with_multi_select(true)
            .with_disabled_dates(booked_dates(today))
            .with_block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Trip days "),
            );
        (
            TripPlanner {
                calendar,
                confirmed: Vec::new(),
            },
            Command::none(),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Calendar(calendar::Message::DatesSelected(dates)) => {
                self.confirmed = dates;
                Command::none()
            }
            Msg::Calendar(m) => self.calendar.update(m).map(Msg::Calendar),
            Msg::ResetToNextWeekend => {
                // The host owns this selection; pushing a replacement moves
                // the calendar to the month of its first date.
                let today = Local::now().date_naive();
                let weekend: Vec<_> = [5u64, 6]
                    .iter()
                    .filter_map(|offset| today.checked_add_days(Days::new(*offset)))
                    .collect();
                self.calendar.set_selected_dates(weekend);
                Command::none()
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [cal_area, status] =
            Layout::vertical([Constraint::Length(14), Constraint::Length(1)]).areas(frame.area());

        self.calendar.view(frame, cal_area);

        let status_line = if self.confirmed.is_empty() {
            Line::raw(" enter toggles, d confirms, r seeds next weekend, q quits")
        } else {
            let dates = self
                .confirmed
                .iter()
                .map(|d| d.format("%m-%d").to_string())
                .collect::<Vec<_>>()
                .join(", ");
            Line::from(vec![
                Span::raw(" planned: "),
                Span::styled(dates, Style::default().fg(Color::Green)),
            ])
        };
        frame.render_widget(Paragraph::new(status_line), status);
    }

    fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
        match event {
            TerminalEvent::Key(key) => match key.code {
                KeyCode::Char('q') => Some(Msg::Quit),
                KeyCode::Char('r') => Some(Msg::ResetToNextWeekend),
                _ => Some(Msg::Calendar(calendar::Message::KeyPress(key))),
            },
            _ => None,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let model = datil::run::<TripPlanner>(())?;
    if model.confirmed.is_empty() {
        println!("No trip days confirmed");
    } else {
        for date in &model.confirmed {
            println!("{}", date.format("%Y-%m-%d"));
        }
    }
    Ok(())
}
