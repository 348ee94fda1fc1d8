use working_hours::WorkingHours;

use chrono::NaiveDateTime;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SCH_SIMPLE: &str = "Пн-Пт: 9.00-19.00";
const SCH_TWO_BLOCKS: &str = "Пн-Пт: 9-00-19-00 Сб.:10-00 - 18-00";

const SCH_DEPARTMENTS: &str = "
    - Отдел продаж:
    будни 08:30-20:30,
    выходные 10:00-18:00
    - Отдел сервиса:
    08:30 - 20:30, ежедневно
    - Отдел запчастей:
    08:30 - 20:30, ежедневно
";

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("simple", |b| {
        b.iter(|| WorkingHours::parse(black_box(SCH_SIMPLE)).unwrap())
    });

    group.bench_function("two_blocks", |b| {
        b.iter(|| WorkingHours::parse(black_box(SCH_TWO_BLOCKS)).unwrap())
    });

    group.bench_function("departments", |b| {
        b.iter(|| WorkingHours::parse(black_box(SCH_DEPARTMENTS)).unwrap())
    });
}

fn bench_eval(c: &mut Criterion) {
    let date_time = NaiveDateTime::parse_from_str("2021-02-01 12:03", "%Y-%m-%d %H:%M").unwrap();

    let expressions = [
        ("simple", WorkingHours::parse(SCH_SIMPLE).unwrap()),
        ("two_blocks", WorkingHours::parse(SCH_TWO_BLOCKS).unwrap()),
        ("departments", WorkingHours::parse(SCH_DEPARTMENTS).unwrap()),
    ];

    {
        let mut group = c.benchmark_group("is_open");

        for (name, wh) in &expressions {
            group.bench_function(*name, |b| b.iter(|| black_box(wh).is_open(date_time)));
        }
    }

    {
        let mut group = c.benchmark_group("next_open_window");

        for (name, wh) in &expressions {
            group.bench_function(*name, |b| {
                b.iter(|| black_box(wh).next_open_window(date_time))
            });
        }
    }
}

criterion_group!(benches, bench_parse, bench_eval);
criterion_main!(benches);
