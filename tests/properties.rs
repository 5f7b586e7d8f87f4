use chrono::NaiveDate;
use proptest::prelude::*;
use sunlap::{
    build_day_intervals, find_overlap, merge_segments, solar_event, Interval, Phase, SunTime,
};

fn interval_strategy() -> impl Strategy<Value = Interval> {
    (-1440i64..2880, 1i64..1440).prop_map(|(start, len)| Interval::new(start, start + len))
}

fn interval_set_strategy() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec(interval_strategy(), 0..8)
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=365).prop_map(|(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal).expect("ordinal 1..=365 is always valid")
    })
}

proptest! {
    /// Overlap is commutative.
    #[test]
    fn prop_find_overlap_symmetric(a in interval_set_strategy(), b in interval_set_strategy()) {
        prop_assert_eq!(find_overlap(&a, &b), find_overlap(&b, &a));
    }

    /// Merged segments stay inside the day, are sorted with real gaps, and
    /// add up to the reported total.
    #[test]
    fn prop_find_overlap_merge_invariants(a in interval_set_strategy(), b in interval_set_strategy()) {
        let result = find_overlap(&a, &b);
        prop_assert_eq!(result.overlap, !result.segments.is_empty());
        for seg in &result.segments {
            prop_assert!(seg.start >= 0 && seg.end <= 1440);
            prop_assert!(seg.end > seg.start);
            prop_assert_eq!(seg.minutes, seg.end - seg.start);
        }
        for pair in result.segments.windows(2) {
            prop_assert!(pair[0].end < pair[1].start);
        }
        let sum: i64 = result.segments.iter().map(|s| s.minutes).sum();
        prop_assert_eq!(result.total_minutes, sum);
    }

    /// Merging merged output changes nothing.
    #[test]
    fn prop_merge_idempotent(set in interval_set_strategy()) {
        let once = merge_segments(set);
        prop_assert_eq!(merge_segments(once.clone()), once);
    }

    /// Every minute covered by both inputs inside the day is covered by the
    /// result, and no other minute is.
    #[test]
    fn prop_find_overlap_matches_minute_scan(a in interval_set_strategy(), b in interval_set_strategy()) {
        let result = find_overlap(&a, &b);
        for minute in (0..1440).step_by(7) {
            let expected = a.iter().any(|iv| iv.contains(minute)) && b.iter().any(|iv| iv.contains(minute));
            let actual = result.segments.iter().any(|s| s.interval().contains(minute));
            prop_assert_eq!(expected, actual, "minute {}", minute);
        }
    }

    /// Daylight and night of any finite day partition [0, 1440).
    #[test]
    fn prop_day_partition(rise in 0.0f64..1440.0, set in 0.0f64..1440.0) {
        let day = build_day_intervals(SunTime::At(rise), SunTime::At(set));
        prop_assert_eq!(
            day.total_minutes(Phase::Daylight) + day.total_minutes(Phase::Night),
            1440
        );
        for iv in day.daylight.iter().chain(&day.night) {
            prop_assert!(iv.end > iv.start);
        }
    }

    /// The ephemeris is deterministic and its daylight length is consistent
    /// with the reported rise and set times.
    #[test]
    fn prop_solar_event_consistent(
        lat in -89.0f64..=89.0,
        lon in -180.0f64..=180.0,
        date in date_strategy()
    ) {
        let ev = solar_event(lat, lon, date).unwrap();
        prop_assert_eq!(ev, solar_event(lat, lon, date).unwrap());
        match (ev.sunrise, ev.sunset) {
            (SunTime::At(rise), SunTime::At(set)) => {
                prop_assert!((0.0..1440.0).contains(&rise));
                prop_assert!((0.0..1440.0).contains(&set));
                let wrapped = (set - rise + 1440.0) % 1440.0;
                let diff = (wrapped - ev.daylight_minutes).abs();
                prop_assert!(diff < 1e-6 || (1440.0 - diff) < 1e-6);
            }
            (SunTime::NoSunrise, _) => prop_assert_eq!(ev.daylight_minutes, 0.0),
            (SunTime::NoSunset, _) => prop_assert_eq!(ev.daylight_minutes, 1440.0),
            (SunTime::At(_), _) => prop_assert!(false, "mixed polar marker: {:?}", ev),
        }
    }
}
