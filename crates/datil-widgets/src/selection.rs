//! Ordered date-selection state shared by the calendar widget.
//!
//! `DateSelection` keeps the dates in the order the user picked them, with
//! each calendar day present at most once. In single-select mode the set
//! never holds more than one date.

use chrono::NaiveDate;

/// Outcome of a [`DateSelection::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The date was not present and has been added.
    Added,
    /// The date was present and has been removed.
    Removed,
}

/// An ordered, duplicate-free set of picked calendar days.
#[derive(Debug, Clone)]
pub struct DateSelection {
    dates: Vec<NaiveDate>,
    multi: bool,
}

impl DateSelection {
    pub fn new(multi: bool) -> Self {
        Self {
            dates: Vec::new(),
            multi,
        }
    }

    /// Switch between single- and multi-select. Dropping to single-select
    /// keeps only the earliest-picked date.
    pub fn set_multi(&mut self, multi: bool) {
        self.multi = multi;
        if !multi {
            self.dates.truncate(1);
        }
    }

    pub fn multi(&self) -> bool {
        self.multi
    }

    /// Toggle membership of a day.
    ///
    /// Adding in multi-select appends; adding in single-select replaces the
    /// whole selection.
    pub fn toggle(&mut self, date: NaiveDate) -> Toggle {
        if let Some(index) = self.dates.iter().position(|d| *d == date) {
            self.dates.remove(index);
            Toggle::Removed
        } else {
            if self.multi {
                self.dates.push(date);
            } else {
                self.dates = vec![date];
            }
            Toggle::Added
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Replace the selection wholesale (the host resync path).
    ///
    /// Order is preserved; repeated days after the first occurrence are
    /// dropped. Single-select keeps only the first date.
    pub fn replace(&mut self, dates: impl IntoIterator<Item = NaiveDate>) {
        self.dates.clear();
        for date in dates {
            if !self.dates.contains(&date) {
                self.dates.push(date);
            }
        }
        if !self.multi {
            self.dates.truncate(1);
        }
    }

    pub fn clear(&mut self) {
        self.dates.clear();
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn toggle_twice_restores_prior_state() {
        let mut sel = DateSelection::new(true);
        sel.toggle(ymd(2019, 10, 4));
        let before: Vec<_> = sel.dates().to_vec();

        assert_eq!(sel.toggle(ymd(2019, 10, 15)), Toggle::Added);
        assert_eq!(sel.toggle(ymd(2019, 10, 15)), Toggle::Removed);
        assert_eq!(sel.dates(), &before[..]);
    }

    #[test]
    fn multi_appends_in_pick_order() {
        let mut sel = DateSelection::new(true);
        sel.toggle(ymd(2019, 10, 20));
        sel.toggle(ymd(2019, 10, 3));
        sel.toggle(ymd(2019, 10, 11));
        assert_eq!(
            sel.dates(),
            &[ymd(2019, 10, 20), ymd(2019, 10, 3), ymd(2019, 10, 11)]
        );
    }

    #[test]
    fn single_replaces_previous_pick() {
        let mut sel = DateSelection::new(false);
        sel.toggle(ymd(2019, 10, 20));
        assert_eq!(sel.toggle(ymd(2019, 10, 3)), Toggle::Added);
        assert_eq!(sel.dates(), &[ymd(2019, 10, 3)]);
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn single_toggle_off_empties() {
        let mut sel = DateSelection::new(false);
        sel.toggle(ymd(2019, 10, 3));
        assert_eq!(sel.toggle(ymd(2019, 10, 3)), Toggle::Removed);
        assert!(sel.is_empty());
    }

    #[test]
    fn replace_deduplicates_keeping_order() {
        let mut sel = DateSelection::new(true);
        sel.replace(vec![
            ymd(2020, 3, 5),
            ymd(2020, 3, 7),
            ymd(2020, 3, 5),
            ymd(2020, 3, 1),
        ]);
        assert_eq!(
            sel.dates(),
            &[ymd(2020, 3, 5), ymd(2020, 3, 7), ymd(2020, 3, 1)]
        );
    }

    #[test]
    fn replace_in_single_mode_keeps_first() {
        let mut sel = DateSelection::new(false);
        sel.replace(vec![ymd(2020, 3, 5), ymd(2020, 3, 7)]);
        assert_eq!(sel.dates(), &[ymd(2020, 3, 5)]);
    }

    #[test]
    fn set_multi_false_truncates() {
        let mut sel = DateSelection::new(true);
        sel.toggle(ymd(2020, 3, 5));
        sel.toggle(ymd(2020, 3, 7));
        sel.set_multi(false);
        assert_eq!(sel.dates(), &[ymd(2020, 3, 5)]);
    }

    #[test]
    fn clear_empties_without_mode_change() {
        let mut sel = DateSelection::new(true);
        sel.toggle(ymd(2020, 3, 5));
        sel.clear();
        assert!(sel.is_empty());
        assert!(sel.multi());
    }
}
