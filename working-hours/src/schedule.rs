use std::iter;

use chrono::{NaiveTime, Weekday};

use working_hours_syntax::{HoursRange, RangePair};

/// Formats accepted for hours with minutes, tried in order.
const HOUR_MINUTE_FORMATS: [&str; 3] = ["%H:%M", "%H.%M", "%H-%M"];

/// Iterate over the days of a week, starting on monday.
pub(crate) fn week() -> impl Iterator<Item = Weekday> {
    iter::successors(Some(Weekday::Mon), |wday| Some(wday.succ())).take(7)
}

#[inline]
fn day_index(wday: Weekday) -> usize {
    wday.num_days_from_monday() as usize
}

/// Interpret raw hour text from a parsed block.
///
/// ```
/// use chrono::NaiveTime;
/// use working_hours::schedule::parse_hour;
///
/// assert_eq!(parse_hour("9.30"), NaiveTime::from_hms_opt(9, 30, 0));
/// assert_eq!(parse_hour("19-00"), NaiveTime::from_hms_opt(19, 0, 0));
/// assert_eq!(parse_hour("8"), NaiveTime::from_hms_opt(8, 0, 0));
/// assert_eq!(parse_hour("24:00"), None);
/// ```
pub fn parse_hour(raw: &str) -> Option<NaiveTime> {
    HOUR_MINUTE_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            if raw.is_empty() || raw.len() > 2 || !raw.bytes().all(|c| c.is_ascii_digit()) {
                return None;
            }

            NaiveTime::from_hms_opt(raw.parse().ok()?, 0, 0)
        })
}

// OpeningTimes

/// Opening and closing time of a day.
///
/// A bound is missing if it was not written or could not be understood, in
/// which case the place is considered open all day long.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct OpeningTimes {
    pub open: Option<NaiveTime>,
    pub close: Option<NaiveTime>,
}

impl OpeningTimes {
    pub fn from_hours(hours: &HoursRange) -> Self {
        Self {
            open: parse_hour(&hours.start),
            close: hours.end.as_deref().and_then(parse_hour),
        }
    }

    /// Check if a time of the day is in the opening period, which includes
    /// the opening time but not the closing time.
    ///
    /// ```
    /// use chrono::NaiveTime;
    /// use working_hours::OpeningTimes;
    ///
    /// let times = OpeningTimes {
    ///     open: NaiveTime::from_hms_opt(9, 0, 0),
    ///     close: NaiveTime::from_hms_opt(18, 0, 0),
    /// };
    ///
    /// assert!(times.contains(NaiveTime::from_hms_opt(9, 0, 0).unwrap()));
    /// assert!(!times.contains(NaiveTime::from_hms_opt(18, 0, 0).unwrap()));
    /// assert!(OpeningTimes::default().contains(NaiveTime::MIN));
    /// ```
    pub fn contains(&self, time: NaiveTime) -> bool {
        match (self.open, self.close) {
            (Some(open), Some(close)) => open <= time && time < close,
            _ => true,
        }
    }
}

// DayTable

/// Raw hours assigned to a day while folding parsed blocks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum DayEntry {
    #[default]
    Unset,
    /// Hours explicitly given to this day, `None` for a day off
    Assigned(Option<HoursRange>),
}

/// Raw hours of each day of the week.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct DayTable {
    days: [DayEntry; 7],
}

impl DayTable {
    /// Assign hours of parsed blocks to the days of the week.
    ///
    /// Blocks with days always overwrite previous assignments, while blocks
    /// without days only fill days that were not assigned yet. A day off
    /// counts as assigned and is never filled.
    pub(crate) fn from_pairs(pairs: &[RangePair]) -> Self {
        let mut table = Self::default();

        for pair in pairs {
            let hours = pair.hours();

            let Some(days) = pair.days() else {
                for entry in &mut table.days {
                    if *entry == DayEntry::Unset {
                        *entry = DayEntry::Assigned(hours.cloned());
                    }
                }

                continue;
            };

            let (start, end) = (days.start.number_from_monday(), days.last().number_from_monday());

            if start > end {
                #[cfg(feature = "log")]
                log::warn!("ignoring working hours for reversed days range {days}");
            }

            for wday in week().filter(|wday| (start..=end).contains(&wday.number_from_monday())) {
                table.days[day_index(wday)] = DayEntry::Assigned(hours.cloned());
            }
        }

        table
    }

    /// Raw hours of a day, `None` if the day is closed.
    pub(crate) fn hours(&self, wday: Weekday) -> Option<&HoursRange> {
        match &self.days[day_index(wday)] {
            DayEntry::Assigned(hours) => hours.as_ref(),
            DayEntry::Unset => None,
        }
    }
}

// Schedule

/// Opening times of each day of the week.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Schedule {
    days: [Option<OpeningTimes>; 7],
}

impl Schedule {
    pub(crate) fn from_table(table: &DayTable) -> Self {
        let mut days = [None; 7];

        for wday in week() {
            days[day_index(wday)] = table.hours(wday).map(OpeningTimes::from_hours);
        }

        Self { days }
    }

    /// Opening times of a day, `None` if the day is closed.
    pub fn get(&self, wday: Weekday) -> Option<OpeningTimes> {
        self.days[day_index(wday)]
    }

    /// Iterate over the days of the week, starting on monday.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, Option<OpeningTimes>)> + '_ {
        week().map(|wday| (wday, self.get(wday)))
    }

    /// Check if no day is open.
    pub fn is_always_closed(&self) -> bool {
        self.days.iter().all(Option::is_none)
    }
}
