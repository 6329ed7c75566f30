//! Tests for the connection helpers

mod common;

use common::*;
use myclient_core::server_version;
use pretty_assertions::assert_eq;

const VERSION_SQL: &str = "SELECT VERSION();";

#[test]
fn test_server_version_reported() {
    let mut conn = MockConnection::new().with_scalar(VERSION_SQL, Some("8.0.36"));
    assert_eq!(server_version(&mut conn).as_deref(), Some("8.0.36"));
    assert_eq!(conn.calls, vec![Call::Scalar(VERSION_SQL.to_string())]);
}

#[test]
fn test_server_version_null() {
    let mut conn = MockConnection::new().with_scalar(VERSION_SQL, None);
    assert_eq!(server_version(&mut conn), None);
}

#[test]
fn test_server_version_query_failure() {
    // No scalar configured, so the query fails
    let mut conn = MockConnection::new();
    assert_eq!(server_version(&mut conn), None);
    assert_eq!(conn.calls.len(), 1);
}

#[test]
fn test_ping_failure_is_recorded() {
    use myclient_core::Connection;

    let mut conn = MockConnection::new().with_ping_error("Lost connection to MySQL server");
    let err = conn.ping().unwrap_err();
    assert_eq!(err.message, "Lost connection to MySQL server");
    assert_eq!(conn.calls, vec![Call::Ping]);
}
