//! Development module that shares the fuzzing logic between unit tests and
//! the actual fuzzing.
use arbitrary::Arbitrary;
use chrono::{DateTime, Datelike};

use std::fmt::Debug;

use working_hours::{FormatOptions, WorkingHours};

/// A fuzzing example
#[derive(Arbitrary, Clone)]
pub struct Data {
    pub date_secs: i64,
    pub text: String,
}

impl Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Data");

        if let Some(date) = DateTime::from_timestamp(self.date_secs, 0) {
            debug.field("date", &date.naive_utc());
        }

        debug.field("text", &self.text);
        debug.finish()
    }
}

/// Run a fuzzing test and return `true` if the example should be kept in
/// corpus.
pub fn run_fuzz_wh(data: Data) -> bool {
    let Some(date) = DateTime::from_timestamp(data.date_secs, 0) else {
        return false;
    };

    let date = date.naive_utc();

    if date.year() < 1900 || date.year() > 9999 {
        return false;
    }

    let wh = WorkingHours::parse(&data.text).unwrap_or_else(|err| {
        eprintln!("[ERR] Text: {:?}", data.text);
        panic!("{err}")
    });

    if wh.schedule().get(date.weekday()).is_none() {
        assert!(wh.is_closed(date));
    }

    if let Some(wday) = wh.next_open_day(date) {
        assert_ne!(wday, date.weekday());
        assert!(wh.schedule().get(wday).is_some());

        let (open, close) = wh.next_open_window(date);

        for bound in [open, close].into_iter().flatten() {
            assert!(bound.date() > date.date());
            assert_eq!(bound.weekday(), wday);
        }
    } else {
        assert_eq!(wh.next_open_window(date), (None, None));
    }

    let _ = wh.format_schedule(&FormatOptions::default());
    !wh.ranges().is_empty()
}

#[cfg(test)]
mod tests {
    use super::{run_fuzz_wh, Data};

    fn run(text: &str) -> bool {
        run_fuzz_wh(Data { date_secs: 1_490_284_800, text: text.to_string() })
    }

    #[test]
    fn fuzz_known_texts() {
        assert!(run("Пн-Пт: 9-00-19-00 Сб.:10-00 - 18-00"));
        assert!(run("Ежедневно с 8.00 до 21.00"));
        assert!(run("с 9:00 Пн - вс"));
        assert!(!run(""));
        assert!(!run("- , до"));
    }

    #[test]
    fn fuzz_out_of_range_date() {
        assert!(!run_fuzz_wh(Data { date_secs: i64::MAX, text: "пн".to_string() }));
    }

    #[test]
    fn fuzz_odd_hours() {
        run("99:99 - 0.00 вс - пн");
        run("ЧТ - ВТ: 25");
        run("до до - - вс вс");
    }
}
