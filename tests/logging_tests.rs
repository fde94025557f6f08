use broadside::{init_logging, log_level_from};
use log::LevelFilter;

#[test]
fn level_names_are_case_insensitive() {
    assert_eq!(log_level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(log_level_from(Some("INFO")), LevelFilter::Info);
    assert_eq!(log_level_from(Some(" trace ")), LevelFilter::Trace);
    assert_eq!(log_level_from(Some("off")), LevelFilter::Off);
}

#[test]
fn missing_or_unknown_levels_default_to_warn() {
    assert_eq!(log_level_from(None), LevelFilter::Warn);
    assert_eq!(log_level_from(Some("loud")), LevelFilter::Warn);
    assert_eq!(log_level_from(Some("")), LevelFilter::Warn);
}

#[test]
fn init_can_be_called_twice() {
    init_logging();
    init_logging();
    log::warn!("logger installed");
}
