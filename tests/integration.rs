use chrono::NaiveDate;
use sunlap::{
    build_continuous_intervals, build_day_intervals, compare_sites, find_overlap,
    merge_segments, minute_to_local_clock, minutes_to_clock, solar_event, Error, Interval,
    Phase, Site, SunTime,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn equinox_london_is_twelve_hours() {
    let ev = solar_event(51.5, 0.0, date(2025, 3, 20)).unwrap();
    assert!((ev.daylight_minutes - 720.0).abs() < 10.0);
    assert!((ev.sunrise.minutes().unwrap() - 360.0).abs() < 10.0);
    assert_eq!(minutes_to_clock(ev.sunrise.minute_of_day().unwrap()), "06:05");
    assert_eq!(minutes_to_clock(ev.sunset.minute_of_day().unwrap()), "18:13");
}

#[test]
fn svalbard_polar_night_and_day() {
    let winter = solar_event(78.0, 15.0, date(2025, 12, 21)).unwrap();
    assert_eq!(winter.sunrise, SunTime::NoSunrise);
    assert_eq!(winter.daylight_minutes, 0.0);

    let summer = solar_event(78.0, 15.0, date(2025, 6, 21)).unwrap();
    assert_eq!(summer.sunset, SunTime::NoSunset);
    assert_eq!(summer.daylight_minutes, 1440.0);
}

#[test]
fn out_of_range_coordinates_are_rejected() {
    assert_eq!(
        solar_event(90.1, 0.0, date(2025, 1, 1)),
        Err(Error::InvalidLatitude { value: 90.1 })
    );
    assert!(Site::new(0.0, -180.5, "UTC").is_err());
}

#[test]
fn continuous_timeline_recovers_window_lost_by_same_day_overlap() {
    let d = date(2025, 6, 1);
    let dubai = [d.pred_opt().unwrap(), d, d.succ_opt().unwrap()]
        .map(|day| solar_event(25.25, 55.37, day).unwrap());
    let sydney = [d.pred_opt().unwrap(), d, d.succ_opt().unwrap()]
        .map(|day| solar_event(-33.87, 151.21, day).unwrap());

    // Treating each day's sunrise→sunset as a plain interval loses Sydney's
    // daylight entirely, since it crosses UTC midnight.
    let naive = |ev: &sunlap::SolarEvent| -> Vec<Interval> {
        Interval::try_new(
            ev.sunrise.minute_of_day().unwrap(),
            ev.sunset.minute_of_day().unwrap(),
        )
        .into_iter()
        .collect()
    };
    let same_day = find_overlap(&naive(&dubai[1]), &naive(&sydney[1]));
    assert!(!same_day.overlap);

    let a = build_continuous_intervals(&dubai[0], &dubai[1], &dubai[2]);
    let b = build_continuous_intervals(&sydney[0], &sydney[1], &sydney[2]);
    let continuous = find_overlap(&a.daylight, &b.daylight);

    assert!(continuous.overlap);
    assert_eq!(continuous.total_minutes, 326);
    assert_ne!(continuous, same_day);
}

#[test]
fn overlap_segments_are_disjoint_and_totalled() {
    let d = date(2025, 1, 15);
    let tokyo = Site::new(35.68, 139.69, "Asia/Tokyo").unwrap();
    let new_york = Site::new(40.7128, -74.006, "America/New_York").unwrap();
    let day = compare_sites(&tokyo, &new_york, d).unwrap();

    for phase in [Phase::Daylight, Phase::Night] {
        let result = day.overlap(phase);
        for pair in result.segments.windows(2) {
            assert!(pair[0].end < pair[1].start);
        }
        let sum: i64 = result.segments.iter().map(|s| s.end - s.start).sum();
        assert_eq!(result.total_minutes, sum);
        assert_eq!(result.overlap, !result.segments.is_empty());
        assert_eq!(merge_segments(result.intervals()), result.intervals());
    }
}

#[test]
fn comparison_is_symmetric() {
    let d = date(2025, 6, 1);
    let dubai = Site::new(25.25, 55.37, "Asia/Dubai").unwrap();
    let sydney = Site::new(-33.87, 151.21, "Australia/Sydney").unwrap();

    let ab = compare_sites(&dubai, &sydney, d).unwrap();
    let ba = compare_sites(&sydney, &dubai, d).unwrap();
    assert_eq!(ab.daylight, ba.daylight);
    assert_eq!(ab.night, ba.night);
    assert_eq!(ab.first.event, ba.second.event);
}

#[test]
fn single_day_partitions_the_day() {
    let ev = solar_event(-33.87, 151.21, date(2025, 6, 1)).unwrap();
    let day = build_day_intervals(ev.sunrise, ev.sunset);
    let mut all: Vec<Interval> = day.daylight.iter().chain(&day.night).copied().collect();
    all.sort();
    assert_eq!(all.first().unwrap().start, 0);
    assert_eq!(all.last().unwrap().end, 1440);
    for pair in all.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}

#[test]
fn day_split_tracks_daylight_length_near_polar_night() {
    let d = date(2025, 12, 1);
    for step in 0..=3000 {
        let lat = 68.0 + f64::from(step) * 0.001;
        let ev = solar_event(lat, 0.1, d).unwrap();
        let day = build_day_intervals(ev.sunrise, ev.sunset);
        let built = day.total_minutes(Phase::Daylight) as f64;
        assert!(
            (built - ev.daylight_minutes).abs() <= 1.0,
            "lat {lat}: daylight {} min but {built} min built",
            ev.daylight_minutes
        );
    }
}

#[test]
fn segment_boundaries_label_in_local_time() {
    let d = date(2025, 6, 1);
    let dubai = Site::new(25.25, 55.37, "Asia/Dubai").unwrap();
    let sydney = Site::new(-33.87, 151.21, "Australia/Sydney").unwrap();
    let day = compare_sites(&dubai, &sydney, d).unwrap();

    let seg = day.daylight.segments[0];
    assert_eq!(seg.start_clock(), "01:28");
    assert_eq!(seg.end_clock(), "06:54");
    assert_eq!(minute_to_local_clock(d, seg.start, "Asia/Dubai").unwrap(), "05:28");
    assert_eq!(minute_to_local_clock(d, seg.end, "Australia/Sydney").unwrap(), "16:54");
}

#[cfg(feature = "serde")]
#[test]
fn serde_overlap_result_field_names() {
    let result = find_overlap(&[Interval::new(0, 100)], &[Interval::new(50, 200)]);
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"total_minutes\":50"));
    assert!(json.contains("\"segments\":[{\"start\":50,\"end\":100,\"minutes\":50}]"));

    let point = sunlap::GeoPoint::new(25.25, 55.37).unwrap();
    let json = serde_json::to_string(&point).unwrap();
    assert_eq!(json, "{\"latitude\":25.25,\"longitude\":55.37}");
}
