use std::time::Duration;

use clap::Parser;
use relaunch::cli::{CliArgs, LogLevel};
use relaunch::logging::filter_directive;
use relaunch::types::parse_duration;

#[test]
fn config_defaults_to_empty_for_discovery() {
    let args = CliArgs::try_parse_from(["relaunch"]).unwrap();
    assert_eq!(args.config, "");
    assert!(args.log_level.is_none());
    assert!(!args.json);
}

#[test]
fn explicit_config_and_flags_parse() {
    let args =
        CliArgs::try_parse_from(["relaunch", "-c", "dev.toml", "--log-level", "debug", "--json"])
            .unwrap();
    assert_eq!(args.config, "dev.toml");
    assert!(matches!(args.log_level, Some(LogLevel::Debug)));
    assert!(args.json);
}

#[test]
fn log_filter_prefers_flag_then_env_then_info() {
    assert_eq!(filter_directive(Some(LogLevel::Warn), Some("trace")), "warn");
    assert_eq!(
        filter_directive(None, Some(" relaunch::config=debug ")),
        "relaunch::config=debug"
    );
    assert_eq!(filter_directive(None, Some("  ")), "info");
    assert_eq!(filter_directive(None, None), "info");
}

#[test]
fn durations_parse_with_units() {
    assert_eq!(parse_duration("250ms"), Ok(Duration::from_millis(250)));
    assert_eq!(parse_duration("3s"), Ok(Duration::from_secs(3)));
    assert_eq!(parse_duration("2m"), Ok(Duration::from_secs(120)));
    assert_eq!(parse_duration("1h"), Ok(Duration::from_secs(3600)));
    assert_eq!(parse_duration("10us"), Ok(Duration::from_micros(10)));
    assert_eq!(parse_duration("500"), Ok(Duration::from_nanos(500)));
}

#[test]
fn bad_durations_are_rejected() {
    assert!(parse_duration("").is_err());
    assert!(parse_duration("ms").is_err());
    assert!(parse_duration("5 fortnights").is_err());
}

#[test]
fn compound_and_fractional_durations_parse() {
    assert_eq!(parse_duration("1m30s"), Ok(Duration::from_secs(90)));
    assert_eq!(parse_duration("1.5s"), Ok(Duration::from_millis(1500)));
    assert_eq!(parse_duration("1h2m3s"), Ok(Duration::from_secs(3723)));
    assert_eq!(parse_duration(".5ms"), Ok(Duration::from_micros(500)));
    assert_eq!(parse_duration("2µs300ns"), Ok(Duration::from_nanos(2300)));
}

#[test]
fn malformed_compound_durations_are_rejected() {
    assert!(parse_duration("1m30").is_err());
    assert!(parse_duration("1..5s").is_err());
    assert!(parse_duration("s5").is_err());
}

#[test]
fn oversized_durations_are_errors_not_panics() {
    assert!(parse_duration("18446744073709551615h").is_err());
    assert!(parse_duration("18446744073709551615m").is_err());
    assert!(parse_duration("6000000h").is_err());
    assert!(parse_duration("99999999999999999999999999999999999999999s").is_err());
}
