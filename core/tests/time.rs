use runlog_core::time::{format_seconds, parse_time_to_seconds, UNRANKED};

#[test]
fn parses_minutes_seconds_millis() {
    assert!((parse_time_to_seconds("1:23.456") - 83.456).abs() < 1e-9);
    assert!((parse_time_to_seconds("00:00.050") - 0.05).abs() < 1e-9);
    assert!((parse_time_to_seconds("12:00.000") - 720.0).abs() < 1e-9);
}

#[test]
fn unknown_and_malformed_times_are_unranked() {
    assert_eq!(parse_time_to_seconds("?"), UNRANKED);
    assert_eq!(parse_time_to_seconds(""), UNRANKED);
    assert_eq!(parse_time_to_seconds("83.456"), UNRANKED);
    assert_eq!(parse_time_to_seconds("1:23"), UNRANKED);
    assert_eq!(parse_time_to_seconds("a:bb.ccc"), UNRANKED);
    assert!(parse_time_to_seconds("abc").is_infinite());
}

/// Minutes too large for whole-second arithmetic are unranked, not wrapped.
#[test]
fn overflowing_minutes_are_unranked() {
    assert_eq!(parse_time_to_seconds("999999999999999999:00.000"), UNRANKED);
    assert_eq!(parse_time_to_seconds("307445734561825860:59.000"), UNRANKED);
    assert_eq!(parse_time_to_seconds("99999999999999999999:00.000"), UNRANKED);
}

#[test]
fn formats_seconds_as_game_time() {
    assert_eq!(format_seconds(83.456), "01:23.456");
    assert_eq!(format_seconds(0.0), "00:00.000");
    assert_eq!(format_seconds(6000.5), "100:00.500");
    assert_eq!(format_seconds(f64::INFINITY), "?");
}

#[test]
fn formatted_time_parses_back() {
    let secs = parse_time_to_seconds(&format_seconds(155.1));
    assert!((secs - 155.1).abs() < 1e-9);
}
