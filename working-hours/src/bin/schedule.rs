use std::env;

use chrono::Local;

use working_hours::{FormatOptions, WorkingHours};

fn main() {
    let text = env::args().nth(1).expect("Usage: ./schedule <TEXT>");
    let now = Local::now().naive_local();
    println!(" - text: {text}");

    let wh = match text.parse::<WorkingHours>() {
        Ok(val) => val,
        Err(err) => {
            panic!("{err}");
        }
    };

    if wh.ranges().is_empty() {
        println!(" - ranges: (none)");
    }

    for pair in wh.ranges() {
        println!(" - range: {pair}");
    }

    println!(" - date: {now:?}");
    println!(" - open: {}", wh.is_open(now));

    if wh.is_closed(now) {
        match wh.next_open_window(now) {
            (Some(open), Some(close)) => println!(" - next opening: {open:?} until {close:?}"),
            (Some(open), None) => println!(" - next opening: {open:?}"),
            _ => {
                if let Some(wday) = wh.next_open_day(now) {
                    println!(" - next opening: {wday}");
                }
            }
        }
    }

    println!("---");
    println!("{}", wh.display_schedule(&FormatOptions::default()));
}
