use working_hours_syntax::error::Error;
use working_hours_syntax::{HoursRange, RangePair};

use crate::error::InvalidTimeFormat;
use crate::{FormatOptions, WorkingHours};

#[test]
fn default_format() -> Result<(), Error> {
    let wh = WorkingHours::parse("Пн-Пт: 9-00-19-00 Сб.:10-00 - 18-00")?;

    assert_eq!(
        wh.to_string(),
        "пн: 09:00 - 19:00\n\
         вт: 09:00 - 19:00\n\
         ср: 09:00 - 19:00\n\
         чт: 09:00 - 19:00\n\
         пт: 09:00 - 19:00\n\
         сб: 10:00 - 18:00\n\
         вс: выходной",
    );

    Ok(())
}

#[test]
fn custom_format() -> Result<(), Error> {
    let wh = WorkingHours::parse("Сб.:10.00-18.00")?;

    let options = FormatOptions::default()
        .with_time_format("%Hh%M")
        .expect("valid time format")
        .with_separator(" | ")
        .with_closed_label("-");

    assert_eq!(
        wh.format_schedule(&options),
        "пн: - | вт: - | ср: - | чт: - | пт: - | сб: 10h00 - 18h00 | вс: -",
    );

    assert_eq!(wh.display_schedule(&options).to_string(), wh.format_schedule(&options));
    Ok(())
}

#[test]
fn unparsable_bounds_keep_raw_text() {
    let wh = WorkingHours::from_ranges(vec![RangePair::Hours(HoursRange::new(
        "10:00".to_string(),
    ))]);

    let options = FormatOptions::default().with_separator(", ");

    assert_eq!(
        wh.format_schedule(&options),
        "пн: 10:00 - ?, вт: 10:00 - ?, ср: 10:00 - ?, чт: 10:00 - ?, \
         пт: 10:00 - ?, сб: 10:00 - ?, вс: 10:00 - ?",
    );

    let wh = WorkingHours::from_ranges(vec![RangePair::Hours(HoursRange::with_end(
        "10:00".to_string(),
        "24:00".to_string(),
    ))]);

    assert!(wh.to_string().starts_with("пн: 10:00 - 24:00\nвт: 10:00 - 24:00\n"));
}

#[test]
fn invalid_time_format() {
    assert_eq!(
        FormatOptions::default().with_time_format("%H:%Q"),
        Err(InvalidTimeFormat("%H:%Q".to_string())),
    );

    let options = FormatOptions::default();
    assert_eq!(options.time_format(), "%H:%M");
    assert_eq!(options.separator(), "\n");
    assert_eq!(options.closed_label(), "выходной");
}

#[test]
fn time_format_without_date() -> Result<(), Error> {
    for fmt in ["%Y-%m-%d %H:%M", "%d/%m", "%H:%M %Z", "%a %H:%M"] {
        assert_eq!(
            FormatOptions::default().with_time_format(fmt),
            Err(InvalidTimeFormat(fmt.to_string())),
            "format `{fmt}` should be rejected",
        );
    }

    let options = FormatOptions::default().with_time_format("%I:%M %p").expect("valid time format");
    let wh = WorkingHours::parse("Сб.:10.00-18.00")?;
    assert!(wh.format_schedule(&options).contains("сб: 10:00 AM - 06:00 PM"));
    Ok(())
}
