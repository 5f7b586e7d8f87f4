use chrono::{NaiveDate, Utc};
use sunlap::{compare_sites, format_duration, Phase, Site};

fn main() -> sunlap::Result<()> {
    let date = std::env::args()
        .nth(1)
        .and_then(|arg| NaiveDate::parse_from_str(&arg, "%Y-%m-%d").ok())
        .unwrap_or_else(|| Utc::now().date_naive());

    let dubai = Site::new(25.25, 55.37, "Asia/Dubai")?;
    let sydney = Site::new(-33.87, 151.21, "Australia/Sydney")?;
    let day = compare_sites(&dubai, &sydney, date)?;

    println!("Dubai ↔ Sydney, {date} (UTC day)");
    for phase in [Phase::Daylight, Phase::Night] {
        let result = day.overlap(phase);
        println!("Shared {phase}: {}", format_duration(result.total_minutes));
        let in_dubai = day.local_segments(phase, &dubai.timezone)?;
        let in_sydney = day.local_segments(phase, &sydney.timezone)?;
        for (a, b) in in_dubai.iter().zip(&in_sydney) {
            println!(
                "  {}  | Dubai {}–{} | Sydney {}–{}",
                a.segment, a.start_local, a.end_local, b.start_local, b.end_local
            );
        }
    }
    Ok(())
}
