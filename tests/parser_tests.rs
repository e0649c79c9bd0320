use rsleepchart::AppError;
use rsleepchart::core::parser::{CellPos, parse_cell, parse_timestamp};
use rsleepchart::models::{MISSING_SECONDS, ParsedEvent, RawCell, StateTag};
use rsleepchart::utils::time::{clock_label, parse_time_12h, seconds_of_day};

fn pos(slot: usize, day: usize) -> CellPos<'static> {
    CellPos {
        slot,
        day,
        label: "2024-01-02",
    }
}

#[test]
fn test_parse_midnight_and_early_morning() {
    let e = parse_timestamp("e12:00am").expect("midnight");
    assert_eq!(e.tag, StateTag::DAY_EDGE);
    assert_eq!(e.seconds, Some(0));

    let b = parse_timestamp("b1:00am").expect("1am");
    assert_eq!(b.tag, StateTag::IN_BED);
    assert_eq!(b.seconds, Some(3600));
}

#[test]
fn test_parse_afternoon_and_late_evening() {
    assert_eq!(parse_timestamp("a12:30pm").unwrap().seconds, Some(45_000));
    assert_eq!(parse_timestamp("s11:45pm").unwrap().seconds, Some(85_500));
    assert_eq!(parse_timestamp("a3:33am").unwrap().seconds, Some(12_780));
}

#[test]
fn test_parse_is_lenient_on_case_and_spacing() {
    let ev = parse_timestamp("  B03:30 PM ").expect("upper case, padded");
    assert_eq!(ev.tag.code(), 'B');
    assert_eq!(ev.seconds, Some(55_800));
}

#[test]
fn test_parse_single_digit_minutes() {
    assert_eq!(parse_timestamp("b1:5am").unwrap().seconds, Some(3900));
    assert_eq!(parse_timestamp("s11:7 pm").unwrap().seconds, Some(83_220));
}

#[test]
fn test_parse_rejects_malformed_cells() {
    for bad in ["3:30pm", "b", "b13:00pm", "b1:60am", "b1:00", "b1:00xm", "bb1:00am", "b1.00am"] {
        assert!(parse_timestamp(bad).is_none(), "expected '{bad}' to be rejected");
    }
}

#[test]
fn test_missing_cell_is_no_entry_not_error() {
    let ev = parse_cell(&RawCell::Missing, pos(0, 0)).expect("missing is not an error");
    assert_eq!(ev, ParsedEvent::missing());
    assert_eq!(ev.tag, StateTag::NO_ENTRY);
    assert!(ev.is_missing());
    assert_eq!(ev.seconds_or_sentinel(), MISSING_SECONDS);
}

#[test]
fn test_missing_is_distinct_from_midnight() {
    let midnight = parse_cell(&RawCell::Text("a12:00am".into()), pos(0, 0)).unwrap();
    assert_eq!(midnight.seconds_or_sentinel(), 0);
    assert_ne!(midnight.tag, StateTag::NO_ENTRY);
}

#[test]
fn test_malformed_cell_reports_position() {
    let err = parse_cell(&RawCell::Text("b25:00am".into()), pos(2, 1)).unwrap_err();

    match &err {
        AppError::InvalidTimestamp {
            slot,
            day,
            label,
            cell,
        } => {
            assert_eq!((*slot, *day), (2, 1));
            assert_eq!(label, "2024-01-02");
            assert_eq!(cell, "b25:00am");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let msg = err.to_string();
    assert!(msg.contains("row 3, column 2"), "message was: {msg}");
    assert!(msg.contains("b25:00am"));
}

#[test]
fn test_raw_cell_classification() {
    assert_eq!(RawCell::from_field(""), RawCell::Missing);
    assert_eq!(RawCell::from_field("   "), RawCell::Missing);
    assert_eq!(RawCell::from_field("NaN"), RawCell::Missing);
    assert_eq!(RawCell::from_field("nan"), RawCell::Missing);
    assert_eq!(RawCell::from_field("N/A"), RawCell::Missing);
    assert_eq!(
        RawCell::from_field(" b1:00am "),
        RawCell::Text("b1:00am".to_string())
    );
}

#[test]
fn test_clock_round_trip() {
    let t = parse_time_12h("3:30pm").expect("valid clock");
    let secs = seconds_of_day(t);
    assert_eq!(secs, 55_800);
    assert_eq!(clock_label(secs), "03:30PM");
    assert_eq!(clock_label(0), "12:00AM");
    assert_eq!(clock_label(43_200), "12:00PM");
}
