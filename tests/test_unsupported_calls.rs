//! Integration tests for the uniform failure contract across the
//! whole stubbed surface.

use oracle_occi_stub::{
    Clob, Connection, Date, DateParts, Environment, Error, LobOpenMode, Mode, Number,
    SqlException, Stream, Timestamp,
};

/// Assert that a call failed and that the failure names the entry point.
fn assert_unsupported<T: std::fmt::Debug>(result: Result<T, Error>, function: &str) {
    let err = result.expect_err(function);
    assert_eq!(err.function(), function);
    assert_eq!(
        err.to_string(),
        format!("Unsupported call to Oracle library, function: {}", function)
    );
}

#[test]
fn test_environment_surface() {
    assert_unsupported(Environment::create(), "Environment::create");
    assert_unsupported(
        Environment::create_with_mode(Mode::ThreadedMutexed),
        "Environment::create_with_mode",
    );
    assert_unsupported(Environment::terminate(None), "Environment::terminate");
}

#[test]
fn test_environment_create_then_terminate_null_handle() {
    // The two calls are independent: the failed creation does not
    // change what the teardown reports.
    let create_err = Environment::create().unwrap_err();
    assert!(create_err.to_string().contains("Environment::create"));

    let terminate_err = Environment::terminate(None).unwrap_err();
    assert!(terminate_err.to_string().contains("Environment::terminate"));
}

#[test]
fn test_date_surface() {
    assert_unsupported(Date::new(), "Date::new");
    assert_unsupported(
        Date::from_parts(None, DateParts::default()),
        "Date::from_parts",
    );

    let mut date = Date::default();
    assert_unsupported(date.parts(), "Date::parts");
    assert_unsupported(date.to_text(), "Date::to_text");
    assert_unsupported(date.to_text_with("DD-MON-YYYY", ""), "Date::to_text_with");
    assert_unsupported(date.is_null(), "Date::is_null");
    assert_unsupported(date.to_datetime(), "Date::to_datetime");

    let source = Date::default();
    assert_unsupported(date.try_clone_from(&source), "Date::try_clone_from");
}

#[test]
fn test_timestamp_surface() {
    let ts = Timestamp::default();
    assert_unsupported(ts.to_text("YYYY-MM-DD", 6), "Timestamp::to_text");
    assert_unsupported(
        ts.to_text_with_nls("YYYY-MM-DD", 6, ""),
        "Timestamp::to_text_with_nls",
    );
    assert_unsupported(ts.date(), "Timestamp::date");
    assert_unsupported(ts.time(), "Timestamp::time");
    assert_unsupported(ts.to_datetime(), "Timestamp::to_datetime");
}

#[test]
fn test_number_surface() {
    let n = Number::default();
    assert_unsupported(n.to_u64(), "Number::to_u64");
    assert_unsupported(u64::try_from(&n), "Number::to_u64");
    assert_unsupported(u64::try_from(n), "Number::to_u64");
}

#[test]
fn test_clob_surface() {
    let conn = Connection;
    assert_unsupported(Clob::new(&conn), "Clob::new");

    let mut clob = Clob::default();
    assert_unsupported(clob.try_clone(), "Clob::try_clone");
    assert_unsupported(clob.length(), "Clob::length");
    assert_unsupported(clob.set_empty(), "Clob::set_empty");
    assert_unsupported(clob.open(), "Clob::open");
    assert_unsupported(
        clob.open_with_mode(LobOpenMode::AppendOnly),
        "Clob::open_with_mode",
    );
    assert_unsupported(clob.close(), "Clob::close");
    assert_unsupported(clob.stream(), "Clob::stream");
    assert_unsupported(clob.stream_with(1, 0), "Clob::stream_with");
    assert_unsupported(clob.close_stream(Stream), "Clob::close_stream");
}

#[test]
fn test_sql_exception_surface() {
    let e = SqlException::default();
    assert_unsupported(e.try_clone(), "SqlException::try_clone");
    assert_unsupported(e.error_code(), "SqlException::error_code");
    assert_unsupported(e.message(), "SqlException::message");
}

#[test]
fn test_error_is_catchable_as_std_error() {
    let err = Environment::create().unwrap_err();
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.to_string().contains("Environment::create"));
}

#[test]
fn test_sql_exception_is_catchable_as_std_error() {
    // Consumer code written to catch the native client's exception base
    // keeps working against the stub type.
    fn takes_any_error(e: &dyn std::error::Error) -> String {
        e.to_string()
    }
    let e = SqlException::default();
    assert!(!takes_any_error(&e).is_empty());
}

#[test]
fn test_open_mode_variants_pick_the_same_failure() {
    // Whichever overload or mode a call site resolves to, the body is
    // the same: fail with the entry point's identity.
    let mut clob = Clob::default();
    for mode in [
        LobOpenMode::ReadOnly,
        LobOpenMode::ReadWrite,
        LobOpenMode::WriteOnly,
        LobOpenMode::AppendOnly,
        LobOpenMode::FullOverwrite,
        LobOpenMode::FullRead,
    ] {
        let err = clob.open_with_mode(mode).unwrap_err();
        assert_eq!(err.function(), "Clob::open_with_mode");
    }
}
