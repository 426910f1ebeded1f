use cadence_domain::recurrence::{Frequency, RecurrenceDescriptor, Weekday};
use cadence_engine::schedules::{build, describe, parse};

/// A spread of descriptors covering every structured shape.
fn structured_descriptors() -> Vec<RecurrenceDescriptor> {
    let mut out = Vec::new();
    for interval in [1, 2, 5, 15, 30, 59] {
        out.push(RecurrenceDescriptor {
            frequency: Frequency::Minute,
            minute_interval: interval,
            ..Default::default()
        });
    }
    for (interval, starting_minute) in [(1, 0), (2, 15), (6, 30), (23, 59)] {
        out.push(RecurrenceDescriptor {
            frequency: Frequency::Hourly,
            hour_interval: interval,
            starting_minute,
            ..Default::default()
        });
    }
    for (hour, minute) in [(0, 0), (2, 30), (12, 0), (23, 59)] {
        out.push(RecurrenceDescriptor {
            frequency: Frequency::Daily,
            hour,
            minute,
            ..Default::default()
        });
        out.push(RecurrenceDescriptor {
            frequency: Frequency::Monthly,
            hour,
            minute,
            day_of_month: hour + 1,
            ..Default::default()
        });
    }
    for days in [
        [true, false, false, false, false, false, false],
        [false, false, false, false, false, false, true],
        [true, false, true, false, true, false, false],
        [false, true, false, true, false, true, true],
        [true; 7],
    ] {
        out.push(RecurrenceDescriptor {
            frequency: Frequency::Weekly,
            hour: 9,
            minute: 5,
            selected_days: days,
            ..Default::default()
        });
    }
    out
}

#[test]
fn structured_shapes_roundtrip() {
    for d in structured_descriptors() {
        let cron = build(&d);
        let back = parse(&cron);
        assert_eq!(back.frequency, d.frequency, "{cron}");
        assert_eq!(back.view(), d.view(), "{cron}");
    }
}

#[test]
fn build_parse_build_is_stable() {
    for d in structured_descriptors() {
        let once = build(&d);
        assert_eq!(build(&parse(&once)), once);
    }
}

#[test]
fn unsupported_strings_roundtrip_verbatim() {
    for s in [
        "0 0 1,15 * *",
        "0 9-17 * * 1-5",
        "*/10 9 * * *",
        "0 0 * 6 *",
        "@weekly junk here x y",
        "* * * * *",
        "0 12 1 * 1",
    ] {
        let d = parse(s);
        assert_eq!(d.frequency, Frequency::Custom, "{s}");
        assert_eq!(build(&d), s);
    }
}

#[test]
fn weekly_day_order_is_normalized() {
    let d = parse("0 9 * * 5,0,3");
    assert_eq!(build(&d), "0 9 * * 0,3,5");
    assert_eq!(describe(&d), "Every Wed, Fri, Sun at 9:00 AM");
}

#[test]
fn all_days_selected() {
    let d = RecurrenceDescriptor {
        frequency: Frequency::Weekly,
        hour: 9,
        minute: 0,
        selected_days: [true; 7],
        ..Default::default()
    };
    assert_eq!(build(&d), "0 9 * * 0,1,2,3,4,5,6");
    assert_eq!(describe(&d), "Daily at 9:00 AM");
}

#[test]
fn empty_selection_never_emits_empty_day_field() {
    let d = RecurrenceDescriptor {
        frequency: Frequency::Weekly,
        hour: 4,
        selected_days: [false; 7],
        ..Default::default()
    };
    let cron = build(&d);
    assert_eq!(cron, "0 4 * * 1");
    assert_eq!(parse(&cron).days(), vec![Weekday::Mon]);
}

#[test]
fn pluralization_boundary() {
    assert_eq!(describe(&parse("*/1 * * * *")), "Every 1 minute");
    assert_eq!(describe(&parse("*/2 * * * *")), "Every 2 minutes");
}

#[test]
fn documented_scenarios() {
    let d = parse("*/5 * * * *");
    assert_eq!(d.frequency, Frequency::Minute);
    assert_eq!(d.minute_interval, 5);
    assert_eq!(describe(&d), "Every 5 minutes");

    let d = parse("30 */6 * * *");
    assert_eq!(d.frequency, Frequency::Hourly);
    assert_eq!((d.hour_interval, d.starting_minute), (6, 30));

    let d = parse("0 2 * * *");
    assert_eq!(d.frequency, Frequency::Daily);
    assert_eq!((d.hour, d.minute), (2, 0));
    assert_eq!(describe(&d), "Daily at 2:00 AM");

    let d = parse("0 9 * * 1,3,5");
    assert_eq!(d.frequency, Frequency::Weekly);
    assert_eq!((d.hour, d.minute), (9, 0));
    assert_eq!(d.days(), vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]);
    assert_eq!(describe(&d), "Every Mon, Wed, Fri at 9:00 AM");

    let d = parse("0 3 15 * *");
    assert_eq!(d.frequency, Frequency::Monthly);
    assert_eq!(d.day_of_month, 15);
    assert_eq!(describe(&d), "Monthly on the 15th at 3:00 AM");

    let d = parse("0 0 1,15 * *");
    assert_eq!(d.frequency, Frequency::Custom);
    assert_eq!(d.custom_cron, "0 0 1,15 * *");
}

#[test]
fn malformed_input_keeps_raw_text() {
    let d = parse("0 0 * *");
    assert_eq!(d.frequency, Frequency::Daily);
    assert_eq!(d.custom_cron, "0 0 * *");
    assert_eq!(build(&d), "0 0 * * *");
}
