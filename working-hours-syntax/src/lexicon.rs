//! Static tables of weekday names and weekday range phrases.
//!
//! Names are looked up after the input has been lowercased, so all entries
//! are written in lowercase.

use chrono::Weekday;
use once_cell::sync::Lazy;

/// Full names and abbreviations of weekdays.
const WEEKDAYS: &[(&str, Weekday)] = &[
    ("понедельник", Weekday::Mon),
    ("пн", Weekday::Mon),
    ("вторник", Weekday::Tue),
    ("вт", Weekday::Tue),
    ("среда", Weekday::Wed),
    ("ср", Weekday::Wed),
    ("четверг", Weekday::Thu),
    ("чт", Weekday::Thu),
    ("пятница", Weekday::Fri),
    ("пт", Weekday::Fri),
    ("суббота", Weekday::Sat),
    ("сб", Weekday::Sat),
    ("воскресенье", Weekday::Sun),
    ("воскр", Weekday::Sun),
    ("вс", Weekday::Sun),
];

/// Phrases that stand for a whole range of weekdays.
const WEEKDAY_RANGES: &[(&str, Weekday, Weekday)] = &[
    ("будни", Weekday::Mon, Weekday::Fri),
    ("без перерыва и выходных", Weekday::Mon, Weekday::Sun),
    ("выходные", Weekday::Sat, Weekday::Sun),
    ("ежедневно", Weekday::Mon, Weekday::Sun),
    ("ежеднено", Weekday::Mon, Weekday::Sun),
    ("режим работы", Weekday::Mon, Weekday::Sun),
];

static WEEKDAY_NAMES: Lazy<Vec<&'static str>> =
    Lazy::new(|| longest_first(WEEKDAYS.iter().map(|(name, _)| *name)));

static WEEKDAY_RANGE_PHRASES: Lazy<Vec<&'static str>> =
    Lazy::new(|| longest_first(WEEKDAY_RANGES.iter().map(|(phrase, _, _)| *phrase)));

/// Alternatives are tried in order: "воскресенье" must come before "воскр",
/// which itself must come before "вс".
fn longest_first(names: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
    let mut names: Vec<_> = names.collect();

    names.sort_unstable_by(|x, y| {
        (y.chars().count())
            .cmp(&x.chars().count())
            .then_with(|| x.cmp(y))
    });

    names
}

/// All weekday names, sorted by descending length.
///
/// ```
/// use working_hours_syntax::lexicon::weekday_names;
///
/// let names = weekday_names();
/// let pos = |name| names.iter().position(|x| *x == name).unwrap();
/// assert!(pos("воскресенье") < pos("воскр"));
/// assert!(pos("воскр") < pos("вс"));
/// ```
pub fn weekday_names() -> &'static [&'static str] {
    &WEEKDAY_NAMES
}

/// All weekday range phrases, sorted by descending length.
pub fn weekday_range_phrases() -> &'static [&'static str] {
    &WEEKDAY_RANGE_PHRASES
}

/// Find the weekday designated by a lowercase name or abbreviation.
///
/// ```
/// use chrono::Weekday;
/// use working_hours_syntax::lexicon::weekday_from_name;
///
/// assert_eq!(weekday_from_name("сб"), Some(Weekday::Sat));
/// assert_eq!(weekday_from_name("пятница"), Some(Weekday::Fri));
/// assert_eq!(weekday_from_name("friday"), None);
/// ```
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    WEEKDAYS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, wday)| *wday)
}

/// Find the first and last weekday designated by a lowercase range phrase.
pub fn weekday_range_from_phrase(phrase: &str) -> Option<(Weekday, Weekday)> {
    WEEKDAY_RANGES
        .iter()
        .find(|(candidate, _, _)| *candidate == phrase)
        .map(|(_, start, end)| (*start, *end))
}

/// Two letters label of a weekday, as used in printed schedules.
pub fn short_name(wday: Weekday) -> &'static str {
    match wday {
        Weekday::Mon => "пн",
        Weekday::Tue => "вт",
        Weekday::Wed => "ср",
        Weekday::Thu => "чт",
        Weekday::Fri => "пт",
        Weekday::Sat => "сб",
        Weekday::Sun => "вс",
    }
}
