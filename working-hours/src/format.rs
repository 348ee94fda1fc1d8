use std::fmt::{self, Write};

use chrono::format::StrftimeItems;
use chrono::NaiveTime;

use working_hours_syntax::lexicon::short_name;

use crate::error::InvalidTimeFormat;
use crate::schedule::week;
use crate::WorkingHours;

/// Settings used to render a schedule as text.
///
/// ```
/// use working_hours::{FormatOptions, WorkingHours};
///
/// let options = FormatOptions::default()
///     .with_time_format("%-H:%M")
///     .unwrap()
///     .with_separator("; ")
///     .with_closed_label("закрыто");
///
/// let wh = WorkingHours::parse("Пн-Пт: 9.00-19.00").unwrap();
///
/// assert_eq!(
///     wh.format_schedule(&options),
///     "пн: 9:00 - 19:00; вт: 9:00 - 19:00; ср: 9:00 - 19:00; чт: 9:00 - 19:00; \
///      пт: 9:00 - 19:00; сб: закрыто; вс: закрыто",
/// );
/// ```
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct FormatOptions {
    time_format: String,
    separator: String,
    closed_label: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            time_format: "%H:%M".to_string(),
            separator: "\n".to_string(),
            closed_label: "выходной".to_string(),
        }
    }
}

impl FormatOptions {
    /// Use a custom strftime-like format to render opening and closing times.
    ///
    /// The format is rejected if it can't be parsed or if it refers to a
    /// date or a timezone, which a time of the day can't provide.
    pub fn with_time_format(self, time_format: &str) -> Result<Self, InvalidTimeFormat> {
        let items = StrftimeItems::new(time_format);

        write!(String::new(), "{}", NaiveTime::MIN.format_with_items(items))
            .map_err(|_| InvalidTimeFormat(time_format.to_string()))?;

        Ok(Self { time_format: time_format.to_string(), ..self })
    }

    /// Set the text inserted between two days.
    pub fn with_separator(self, separator: &str) -> Self {
        Self { separator: separator.to_string(), ..self }
    }

    /// Set the text displayed for days off.
    pub fn with_closed_label(self, closed_label: &str) -> Self {
        Self { closed_label: closed_label.to_string(), ..self }
    }

    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn closed_label(&self) -> &str {
        &self.closed_label
    }
}

/// Lazy rendering of a weekly schedule, returned by
/// [`WorkingHours::display_schedule`].
#[derive(Clone, Copy, Debug)]
pub struct ScheduleDisplay<'a> {
    pub(crate) working_hours: &'a WorkingHours,
    pub(crate) options: &'a FormatOptions,
}

impl ScheduleDisplay<'_> {
    /// Write a bound of the opening period, falling back to the raw text if
    /// it could not be understood.
    fn write_time(
        &self,
        f: &mut fmt::Formatter<'_>,
        time: Option<NaiveTime>,
        raw: Option<&str>,
    ) -> fmt::Result {
        match (time, raw) {
            (Some(time), _) => write!(f, "{}", time.format(&self.options.time_format)),
            (None, Some(raw)) => write!(f, "{raw}"),
            (None, None) => write!(f, "?"),
        }
    }
}

impl fmt::Display for ScheduleDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schedule = self.working_hours.schedule();

        for (i, wday) in week().enumerate() {
            if i > 0 {
                write!(f, "{}", self.options.separator)?;
            }

            write!(f, "{}: ", short_name(wday))?;

            let (Some(times), Some(raw)) = (schedule.get(wday), self.working_hours.hours_on(wday))
            else {
                write!(f, "{}", self.options.closed_label)?;
                continue;
            };

            self.write_time(f, times.open, Some(&raw.start))?;
            write!(f, " - ")?;
            self.write_time(f, times.close, raw.end.as_deref())?;
        }

        Ok(())
    }
}
