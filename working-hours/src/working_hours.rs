use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{Datelike, Days, Local, NaiveDateTime, Weekday};
use once_cell::sync::OnceCell;

use working_hours_syntax::{HoursRange, RangePair};

use crate::error::ParserError;
use crate::format::{FormatOptions, ScheduleDisplay};
use crate::schedule::{DayTable, Schedule};

/// Working hours extracted from some text.
///
/// The schedule is only computed once it is needed, which means that
/// inspecting parsed blocks doesn't require interpreting the hours.
///
/// Parsed blocks are immutable and wrapped by an `Arc` so this is cheap to
/// clone.
#[derive(Clone, Debug)]
pub struct WorkingHours {
    /// Blocks of days and hours, in order of appearance
    ranges: Arc<[RangePair]>,
    /// Raw hours of each day
    days: DayTable,
    /// Interpreted hours of each day
    schedule: OnceCell<Schedule>,
}

impl WorkingHours {
    /// Extract working hours from raw text.
    ///
    /// ```
    /// use working_hours::WorkingHours;
    ///
    /// assert!(WorkingHours::parse("Пн-Пт: 9.00-19.00").is_ok());
    /// assert!(WorkingHours::parse("nothing relevant").unwrap().ranges().is_empty());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParserError> {
        Ok(Self::from_ranges(working_hours_syntax::parse(text)?))
    }

    /// Build working hours from already parsed blocks.
    pub fn from_ranges(ranges: Vec<RangePair>) -> Self {
        let days = DayTable::from_pairs(&ranges);

        Self {
            ranges: ranges.into(),
            days,
            schedule: OnceCell::new(),
        }
    }

    // --
    // -- Inspection
    // --

    /// Blocks of days and hours found in the text.
    pub fn ranges(&self) -> &[RangePair] {
        &self.ranges
    }

    /// Raw hours of a day, as written in the text.
    pub fn hours_on(&self, wday: Weekday) -> Option<&HoursRange> {
        self.days.hours(wday)
    }

    /// Opening times of each day of the week.
    pub fn schedule(&self) -> &Schedule {
        self.schedule.get_or_init(|| Schedule::from_table(&self.days))
    }

    // --
    // -- Queries
    // --

    /// Check if this is open at a given time.
    ///
    /// If the hours of current day can't be understood, this is considered
    /// open.
    ///
    /// ```
    /// use chrono::NaiveDateTime;
    /// use working_hours::WorkingHours;
    ///
    /// let wh = WorkingHours::parse("Ежедневно с 8.00 до 21.00").unwrap();
    /// let date_1 = NaiveDateTime::parse_from_str("2017-03-23 16:00", "%Y-%m-%d %H:%M").unwrap();
    /// let date_2 = NaiveDateTime::parse_from_str("2017-03-23 22:00", "%Y-%m-%d %H:%M").unwrap();
    /// assert!(wh.is_open(date_1));
    /// assert!(!wh.is_open(date_2));
    /// ```
    pub fn is_open(&self, datetime: NaiveDateTime) -> bool {
        self.schedule()
            .get(datetime.weekday())
            .is_some_and(|times| times.contains(datetime.time()))
    }

    /// Check if this is closed at a given time.
    pub fn is_closed(&self, datetime: NaiveDateTime) -> bool {
        !self.is_open(datetime)
    }

    /// Check if this is open right now, in local time.
    pub fn is_open_now(&self) -> bool {
        self.is_open(Local::now().naive_local())
    }

    /// Get the next day with working hours, strictly after the day of given
    /// time and within a week.
    ///
    /// ```
    /// use chrono::{NaiveDateTime, Weekday};
    /// use working_hours::WorkingHours;
    ///
    /// let wh = WorkingHours::parse("Пн-Пт: 9.00-19.00").unwrap();
    /// let friday = NaiveDateTime::parse_from_str("2017-03-24 10:00", "%Y-%m-%d %H:%M").unwrap();
    /// assert_eq!(wh.next_open_day(friday), Some(Weekday::Mon));
    /// ```
    pub fn next_open_day(&self, datetime: NaiveDateTime) -> Option<Weekday> {
        let current = datetime.weekday();

        std::iter::successors(Some(current.succ()), |wday| Some(wday.succ()))
            .take_while(|wday| *wday != current)
            .find(|wday| self.days.hours(*wday).is_some())
    }

    /// Get the opening and closing time of the next day with working hours.
    ///
    /// Both are `None` if there is no such day, and each of them is `None`
    /// if it can't be understood.
    ///
    /// ```
    /// use chrono::NaiveDateTime;
    /// use working_hours::WorkingHours;
    ///
    /// let wh = WorkingHours::parse("Сб.:10.00-18.00").unwrap();
    /// let date = NaiveDateTime::parse_from_str("2017-03-23 16:00", "%Y-%m-%d %H:%M").unwrap();
    /// let open = NaiveDateTime::parse_from_str("2017-03-25 10:00", "%Y-%m-%d %H:%M").unwrap();
    /// let close = NaiveDateTime::parse_from_str("2017-03-25 18:00", "%Y-%m-%d %H:%M").unwrap();
    /// assert_eq!(wh.next_open_window(date), (Some(open), Some(close)));
    /// ```
    pub fn next_open_window(
        &self,
        datetime: NaiveDateTime,
    ) -> (Option<NaiveDateTime>, Option<NaiveDateTime>) {
        let Some(wday) = self.next_open_day(datetime) else {
            return (None, None);
        };

        let delta = (7 + wday.num_days_from_monday() - datetime.weekday().num_days_from_monday()) % 7;

        let Some(date) = datetime.date().checked_add_days(Days::new(delta.into())) else {
            return (None, None);
        };

        let times = self.schedule().get(wday).unwrap_or_default();

        (
            times.open.map(|time| date.and_time(time)),
            times.close.map(|time| date.and_time(time)),
        )
    }

    // --
    // -- Formatting
    // --

    /// Render the schedule of the week with custom settings.
    pub fn display_schedule<'a>(&'a self, options: &'a FormatOptions) -> ScheduleDisplay<'a> {
        ScheduleDisplay { working_hours: self, options }
    }

    /// Render the schedule of the week as a string.
    pub fn format_schedule(&self, options: &FormatOptions) -> String {
        self.display_schedule(options).to_string()
    }
}

impl FromStr for WorkingHours {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for WorkingHours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_schedule(&FormatOptions::default()))
    }
}
