//! Month-grid date picker.
//!
//! Renders a navigable month of Sunday-first weeks and lets the user pick a
//! single date (reported immediately) or toggle several dates (reported on
//! an explicit confirm). Disabled dates are externally supplied and inert.
//! The host observes picks through the [`Message::DatesSelected`] command,
//! mapped into its own message type. See the `date_picker` and
//! `trip_planner` demos for composing this into a
//! [`Model`](datil_core::Model).

use crate::date;
use crate::selection::{DateSelection, Toggle};
use chrono::{Datelike, Duration, Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use datil_core::command::Command;
use datil_core::component::Component;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use std::ops::RangeInclusive;

/// Style configuration for the calendar.
#[derive(Debug, Clone)]
pub struct CalendarStyle {
    /// Month name and year in the header.
    pub header: Style,
    /// Enabled navigation arrows.
    pub nav: Style,
    /// Arrows suppressed at a year-range bound.
    pub nav_disabled: Style,
    /// The weekday header row.
    pub weekday: Style,
    /// Ordinary day cells.
    pub day: Style,
    /// Days currently in the selection.
    pub selected_day: Style,
    /// Externally disabled days.
    pub disabled_day: Style,
    /// The real current date (when its month is displayed).
    pub today: Style,
    /// Key hints in the header and footer.
    pub hint: Style,
}

impl Default for CalendarStyle {
    fn default() -> Self {
        Self {
            header: Style::default().add_modifier(Modifier::BOLD),
            nav: Style::default().fg(Color::Cyan),
            nav_disabled: Style::default().fg(Color::DarkGray),
            weekday: Style::default().fg(Color::DarkGray),
            day: Style::default(),
            selected_day: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            disabled_day: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            today: Style::default().add_modifier(Modifier::UNDERLINED),
            hint: Style::default().fg(Color::Cyan),
        }
    }
}

/// Messages for the calendar component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press forwarded to the calendar.
    KeyPress(KeyEvent),
    /// Show the previous month (suppressed at the min-year January bound).
    PrevMonth,
    /// Show the next month (suppressed at the max-year December bound).
    NextMonth,
    /// Show the previous year (suppressed at the min year).
    PrevYear,
    /// Show the next year (suppressed at the max year).
    NextYear,
    /// Jump straight to a month of the displayed year (0-based index).
    JumpToMonth(u32),
    /// Jump straight to a year; out-of-range years are clamped in.
    JumpToYear(i32),
    /// Toggle the given day of the displayed month in the selection.
    SelectDay(u32),
    /// Report the selection (multi-select; no-op while it is empty).
    Confirm,
    /// Discard the selection without reporting it (multi-select).
    Cancel,
    /// Move the cursor back to the real current date.
    GoToToday,
    /// The selection report, emitted for the host to consume.
    DatesSelected(Vec<NaiveDate>),
}

/// A month-grid date picker.
///
/// # Example
///
/// ```ignore
/// use chrono::NaiveDate;
/// use datil_widgets::calendar::Calendar;
///
/// let picker = Calendar::new()
///     .with_multi_select(true)
///     .with_min_year(1992)
///     .with_max_year(2025)
///     .with_disabled_dates(vec![NaiveDate::from_ymd_opt(2019, 10, 17).unwrap()]);
/// ```
pub struct Calendar {
    /// Displayed year/month; the day field tracks the last-touched day.
    cursor: NaiveDate,
    selection: DateSelection,
    disabled: Vec<NaiveDate>,
    multi: bool,
    min_year: i32,
    max_year: i32,
    today: NaiveDate,
    style: CalendarStyle,
    block: Option<Block<'static>>,
}

impl Calendar {
    /// Create a calendar showing the current month, nothing selected.
    ///
    /// The navigable year range defaults to 2015 through the current year
    /// plus five.
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            cursor: today,
            selection: DateSelection::new(false),
            disabled: Vec::new(),
            multi: false,
            min_year: 2015,
            max_year: today.year() + 5,
            today,
            style: CalendarStyle::default(),
            block: None,
        }
    }

    /// Allow several dates to be picked and reported together.
    ///
    /// In multi-select, toggling days accumulates a selection that is only
    /// reported on [`Message::Confirm`]. In single-select (the default),
    /// each successful pick replaces the selection and is reported at once.
    pub fn with_multi_select(mut self, multi: bool) -> Self {
        self.multi = multi;
        self.selection.set_multi(multi);
        self
    }

    /// Set the first navigable year (default 2015).
    ///
    /// A min year above the configured max year drags the max year up with
    /// it; the range is never allowed to invert.
    pub fn with_min_year(mut self, year: i32) -> Self {
        self.min_year = year;
        self.max_year = self.max_year.max(year);
        self
    }

    /// Set the last navigable year (default: current year + 5).
    ///
    /// Values below the configured min year are clamped up to it.
    pub fn with_max_year(mut self, year: i32) -> Self {
        self.max_year = year.max(self.min_year);
        self
    }

    /// Set the dates that cannot be selected.
    pub fn with_disabled_dates(mut self, dates: Vec<NaiveDate>) -> Self {
        self.disabled = dates;
        self
    }

    /// Set the initial selection, moving the cursor to the first date's month.
    pub fn with_selected_dates(mut self, dates: Vec<NaiveDate>) -> Self {
        self.set_selected_dates(dates);
        self
    }

    /// Set the style configuration.
    pub fn with_style(mut self, style: CalendarStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the block (border/title container) for the calendar.
    pub fn with_block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    /// Replace the selection from the host, as one atomic update.
    ///
    /// This is the resynchronization hook: a host that owns the selection
    /// externally calls this whenever it swaps in a new value. Duplicates
    /// are dropped, order is kept, and when the new selection is non-empty
    /// the cursor moves to the first date so its month is displayed.
    pub fn set_selected_dates(&mut self, dates: Vec<NaiveDate>) {
        self.selection.replace(dates);
        if let Some(first) = self.selection.dates().first() {
            self.cursor = *first;
        }
    }

    /// The displayed year/month (the day field is the last-touched day).
    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    /// The date the calendar considers "today", captured at construction.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// The current selection, in pick order.
    pub fn selected_dates(&self) -> &[NaiveDate] {
        self.selection.dates()
    }

    /// Whether multi-select is enabled.
    pub fn multi_select(&self) -> bool {
        self.multi
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selection.contains(date)
    }

    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.disabled.contains(&date)
    }

    /// The closed range of navigable years.
    pub fn year_range(&self) -> RangeInclusive<i32> {
        self.min_year..=self.max_year
    }

    /// Every year a host-side year selector may offer.
    pub fn years(&self) -> Vec<i32> {
        self.year_range().collect()
    }

    /// Every month name a host-side month selector may offer.
    pub fn month_names(&self) -> [&'static str; 12] {
        date::MONTH_NAMES
    }

    pub fn can_prev_month(&self) -> bool {
        !(self.cursor.year() == self.min_year && self.cursor.month() == 1)
    }

    pub fn can_next_month(&self) -> bool {
        !(self.cursor.year() == self.max_year && self.cursor.month() == 12)
    }

    pub fn can_prev_year(&self) -> bool {
        self.cursor.year() > self.min_year
    }

    pub fn can_next_year(&self) -> bool {
        self.cursor.year() < self.max_year
    }

    fn nav_month(&mut self, forward: bool) {
        let allowed = if forward {
            self.can_next_month()
        } else {
            self.can_prev_month()
        };
        if allowed {
            self.cursor = date::step_month(self.cursor, forward);
        }
    }

    fn nav_year(&mut self, forward: bool) {
        let allowed = if forward {
            self.can_next_year()
        } else {
            self.can_prev_year()
        };
        if allowed {
            self.cursor = date::step_year(self.cursor, forward);
        }
    }

    /// Move the day cursor by whole days, staying inside the year range.
    fn move_cursor(&mut self, days: i64) {
        if let Some(next) = self.cursor.checked_add_signed(Duration::days(days)) {
            if self.year_range().contains(&next.year()) {
                self.cursor = next;
            }
        }
    }

    /// Toggle the given day of the displayed month.
    ///
    /// The cursor's day field follows the touched day. A successful pick in
    /// single-select mode emits [`Message::DatesSelected`] with exactly that
    /// date; a deselect emits nothing in either mode.
    fn toggle_day(&mut self, day: u32) -> Command<Message> {
        let candidate = date::rolled_ymd(self.cursor.year(), self.cursor.month(), day);
        self.cursor = candidate;
        match self.selection.toggle(candidate) {
            Toggle::Added if !self.multi => {
                Command::message(Message::DatesSelected(vec![candidate]))
            }
            _ => Command::none(),
        }
    }

    fn confirm(&mut self) -> Command<Message> {
        if self.multi && !self.selection.is_empty() {
            Command::message(Message::DatesSelected(self.selection.dates().to_vec()))
        } else {
            Command::none()
        }
    }

    fn cancel(&mut self) {
        if self.multi {
            self.selection.clear();
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        match key.code {
            KeyCode::Left => self.move_cursor(-1),
            KeyCode::Right => self.move_cursor(1),
            KeyCode::Up => self.move_cursor(-7),
            KeyCode::Down => self.move_cursor(7),
            KeyCode::PageUp => self.nav_month(false),
            KeyCode::PageDown => self.nav_month(true),
            KeyCode::Char('[') => self.nav_year(false),
            KeyCode::Char(']') => self.nav_year(true),
            KeyCode::Char('t') => self.cursor = self.today,
            KeyCode::Enter | KeyCode::Char(' ') => {
                // Disabled cells are inert. The guard lives here at the
                // interaction site; the SelectDay arm trusts its caller,
                // the same split the click handler of a mouse UI would have.
                if !self.is_disabled(self.cursor) {
                    return self.toggle_day(self.cursor.day());
                }
            }
            KeyCode::Char('d') => return self.confirm(),
            KeyCode::Char('c') | KeyCode::Esc => self.cancel(),
            _ => {}
        }
        Command::none()
    }

    fn footer_visible(&self) -> bool {
        self.multi && !self.selection.is_empty()
    }

    fn header_line(&self) -> Line<'_> {
        let nav = |enabled: bool| {
            if enabled {
                self.style.nav
            } else {
                self.style.nav_disabled
            }
        };
        let month_name = date::MONTH_NAMES[self.cursor.month0() as usize];
        Line::from(vec![
            Span::styled("◀", nav(self.can_prev_month())),
            Span::styled(format!(" {:<9} ", month_name), self.style.header),
            Span::styled("▶", nav(self.can_next_month())),
            Span::raw("  "),
            Span::styled("◀", nav(self.can_prev_year())),
            Span::styled(format!(" {} ", self.cursor.year()), self.style.header),
            Span::styled("▶", nav(self.can_next_year())),
            Span::raw("  "),
            Span::styled("[t]", self.style.hint),
            Span::raw(" today"),
        ])
    }

    fn weekday_line(&self) -> Line<'_> {
        let row = date::WEEKDAYS_SHORT
            .iter()
            .map(|wd| format!(" {}", wd))
            .collect::<String>();
        Line::from(Span::styled(row, self.style.weekday))
    }

    fn week_line(&self, week: &[Option<u32>]) -> Line<'static> {
        let mut spans = Vec::with_capacity(week.len());
        for cell in week {
            match cell {
                None => spans.push(Span::raw("   ")),
                Some(day) => {
                    let cell_date =
                        date::clamped_ymd(self.cursor.year(), self.cursor.month(), *day);
                    let mut style = if self.is_disabled(cell_date) {
                        self.style.disabled_day
                    } else if self.is_selected(cell_date) {
                        self.style.selected_day
                    } else if cell_date == self.today {
                        self.style.today
                    } else {
                        self.style.day
                    };
                    if cell_date == self.cursor {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    spans.push(Span::styled(format!("{:>3}", day), style));
                }
            }
        }
        Line::from(spans)
    }

    fn footer_line(&self) -> Line<'_> {
        Line::from(vec![
            Span::styled("[d]", self.style.hint),
            Span::raw(" done   "),
            Span::styled("[c]", self.style.hint),
            Span::raw(" cancel"),
        ])
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Calendar {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => return self.handle_key(key),
            Message::PrevMonth => self.nav_month(false),
            Message::NextMonth => self.nav_month(true),
            Message::PrevYear => self.nav_year(false),
            Message::NextYear => self.nav_year(true),
            Message::JumpToMonth(month0) => {
                if month0 < 12 {
                    self.cursor = date::with_month_rolled(self.cursor, month0);
                }
            }
            Message::JumpToYear(year) => {
                let year = year.clamp(self.min_year, self.max_year);
                self.cursor = date::with_year_rolled(self.cursor, year);
            }
            Message::SelectDay(day) => {
                // Disabled cells are inert in the rendered grid; a host
                // driving the widget by message gets the same guard.
                let candidate =
                    date::rolled_ymd(self.cursor.year(), self.cursor.month(), day);
                if !self.is_disabled(candidate) {
                    return self.toggle_day(day);
                }
            }
            Message::Confirm => return self.confirm(),
            Message::Cancel => self.cancel(),
            Message::GoToToday => self.cursor = self.today,
            Message::DatesSelected(_) => {}
        }
        Command::none()
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        // 7 cells of 3 columns.
        if area.width < 21 || area.height == 0 {
            return;
        }

        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            frame.render_widget(block.clone(), area);
            inner
        } else {
            area
        };

        let mut lines = vec![self.header_line(), self.weekday_line()];
        for week in date::month_grid(self.cursor.year(), self.cursor.month()) {
            lines.push(self.week_line(&week));
        }
        if self.footer_visible() {
            lines.push(Line::raw(""));
            lines.push(self.footer_line());
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn focused(&self) -> bool {
        true
    }
}
