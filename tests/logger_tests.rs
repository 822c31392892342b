//! Integration tests for logger behavior.

use cgpa_calc::logger::{level, set_level, set_level_from_str, Level};
use cgpa_calc::{debug, error, info, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("WARNING"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn level_round_trips_through_display() {
    for lvl in [Level::Error, Level::Warn, Level::Info, Level::Debug] {
        assert_eq!(lvl.to_string().parse::<Level>(), Ok(lvl));
    }
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
    assert!(matches!(
        level(),
        Level::Error | Level::Warn | Level::Info | Level::Debug
    ));
}
