use std::fmt;

use chrono::Weekday;

// Range

/// Bounds of a range of days or hours, as written in the text.
///
/// The end of a range may be missing when the text only mentions a single
/// value, such as `"с 9:00"`.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Range<T> {
    pub start: T,
    pub end: Option<T>,
}

impl<T> Range<T> {
    /// A range with no explicit end.
    #[inline]
    pub fn new(start: T) -> Self {
        Self { start, end: None }
    }

    #[inline]
    pub fn with_end(start: T, end: T) -> Self {
        Self { start, end: Some(end) }
    }
}

/// Inclusive range of weekdays.
pub type DaysRange = Range<Weekday>;

/// Raw opening and closing hours, not interpreted yet.
pub type HoursRange = Range<String>;

impl DaysRange {
    /// Last day of the range, which is the first one if no end is specified.
    #[inline]
    pub fn last(&self) -> Weekday {
        self.end.unwrap_or(self.start)
    }
}

fn write_bound(f: &mut fmt::Formatter<'_>, bound: Option<impl fmt::Display>) -> fmt::Result {
    match bound {
        Some(bound) => write!(f, "{bound}"),
        None => write!(f, "None"),
    }
}

impl fmt::Display for DaysRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ", self.start.number_from_monday())?;
        write_bound(f, self.end.map(|wday| wday.number_from_monday()))
    }
}

impl fmt::Display for HoursRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ", self.start)?;
        write_bound(f, self.end.as_deref())
    }
}

// RangePair

/// A block of working hours: some days, some hours or both.
///
/// ```
/// use working_hours_syntax::{HoursRange, RangePair};
///
/// assert!(RangePair::from_parts(None, None).is_none());
///
/// let pair = RangePair::from_parts(None, Some(HoursRange::new("9".to_string()))).unwrap();
/// assert_eq!(pair.to_string(), "(None, 9 - None)");
/// ```
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum RangePair {
    /// Days with no hours, usually days off such as `"Сб, вс - выходной"`
    Days(DaysRange),
    /// Hours that apply to any day not mentioned elsewhere
    Hours(HoursRange),
    DaysAndHours(DaysRange, HoursRange),
}

impl RangePair {
    /// Build a pair from its optional components, return `None` if both are
    /// missing.
    pub fn from_parts(days: Option<DaysRange>, hours: Option<HoursRange>) -> Option<Self> {
        match (days, hours) {
            (Some(days), Some(hours)) => Some(Self::DaysAndHours(days, hours)),
            (Some(days), None) => Some(Self::Days(days)),
            (None, Some(hours)) => Some(Self::Hours(hours)),
            (None, None) => None,
        }
    }

    pub fn days(&self) -> Option<&DaysRange> {
        match self {
            Self::Days(days) | Self::DaysAndHours(days, _) => Some(days),
            Self::Hours(_) => None,
        }
    }

    pub fn hours(&self) -> Option<&HoursRange> {
        match self {
            Self::Hours(hours) | Self::DaysAndHours(_, hours) => Some(hours),
            Self::Days(_) => None,
        }
    }

    pub fn into_parts(self) -> (Option<DaysRange>, Option<HoursRange>) {
        match self {
            Self::Days(days) => (Some(days), None),
            Self::Hours(hours) => (None, Some(hours)),
            Self::DaysAndHours(days, hours) => (Some(days), Some(hours)),
        }
    }
}

impl fmt::Display for RangePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        write_bound(f, self.days())?;
        write!(f, ", ")?;
        write_bound(f, self.hours())?;
        write!(f, ")")
    }
}
