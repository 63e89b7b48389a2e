//! Column introspection against an in-memory connection.
//!
//! Run with: cargo test --test test_describe

mod common;

use common::MockConnection;
use hive_env_rs::{DbEnvironment, Error, HiveEnvironment, RelationalType, ValueClass};
use std::error::Error as _;

#[tokio::test]
async fn test_describe_columns() {
    let env = HiveEnvironment::new();
    let mut conn = MockConnection::with_describe(&[
        (Some("id"), Some("INT")),
        (Some("name"), Some("STRING")),
    ]);

    let columns = env.describe_columns(&mut conn, "t").await.unwrap();

    assert_eq!(conn.queries, vec!["describe t"]);
    assert_eq!(columns.len(), 2);

    let id = &columns["id"];
    assert_eq!(id.position(), 0);
    assert_eq!(id.relational_type(), RelationalType::Integer);
    assert_eq!(id.value_class(), ValueClass::Integer);

    let name = &columns["name"];
    assert_eq!(name.position(), 1);
    assert_eq!(name.relational_type(), RelationalType::Varchar);
    assert_eq!(name.value_class(), ValueClass::Text);

    assert_eq!(conn.leaked(), 0);
}

#[tokio::test]
async fn test_describe_keeps_result_order() {
    let env = HiveEnvironment::new();
    let mut conn = MockConnection::with_describe(&[
        (Some("Zeta"), Some("bigint")),
        (Some("alpha"), Some("decimal(10,2)")),
        (Some("Mid"), Some("timestamp")),
        (Some("tags"), Some("array<string>")),
    ]);

    let columns = env.describe_columns(&mut conn, "db1.events").await.unwrap();

    let keys: Vec<&str> = columns.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid", "tags"]);
    let positions: Vec<usize> = columns.values().map(|c| c.position()).collect();
    assert_eq!(positions, vec![0, 1, 2, 3]);

    assert_eq!(columns["zeta"].name(), "Zeta");
    assert_eq!(columns["alpha"].relational_type(), RelationalType::Numeric);
    assert_eq!(columns["mid"].value_class(), ValueClass::Timestamp);
    assert_eq!(columns["tags"].value_class(), ValueClass::Array);
    assert!(columns.values().all(|c| c.is_input()));
}

#[tokio::test]
async fn test_describe_null_column_name() {
    let env = HiveEnvironment::new();
    let mut conn = MockConnection::with_describe(&[(None, Some("string"))]);

    let columns = env.describe_columns(&mut conn, "t").await.unwrap();

    assert_eq!(columns.len(), 1);
    assert_eq!(columns[""].name(), "");
    assert_eq!(columns[""].position(), 0);
}

#[tokio::test]
async fn test_describe_empty_result() {
    let env = HiveEnvironment::new();
    let mut conn = MockConnection::with_describe(&[]);

    let columns = env.describe_columns(&mut conn, "empty_view").await.unwrap();

    assert!(columns.is_empty());
    assert_eq!(conn.leaked(), 0);
}

#[tokio::test]
async fn test_describe_unsupported_type_releases_cursor() {
    let env = HiveEnvironment::new();
    let mut conn = MockConnection::with_describe(&[
        (Some("id"), Some("int")),
        (Some("attrs"), Some("map<string,string>")),
    ]);

    match env.describe_columns(&mut conn, "t").await {
        Err(Error::UnsupportedType { type_name }) => {
            assert_eq!(type_name, "MAP<STRING,STRING>")
        }
        other => panic!("Expected UnsupportedType, got {:?}", other),
    }
    assert_eq!(conn.opened, 1);
    assert_eq!(conn.leaked(), 0);
}

#[tokio::test]
async fn test_describe_null_type() {
    let env = HiveEnvironment::new();
    let mut conn = MockConnection::with_describe(&[(Some("c"), None)]);

    let result = env.describe_columns(&mut conn, "t").await;

    assert!(matches!(result, Err(Error::NullType)));
    assert_eq!(conn.leaked(), 0);
}

#[tokio::test]
async fn test_describe_open_failure() {
    let env = HiveEnvironment::new();
    let mut conn = MockConnection {
        fail_open: true,
        ..MockConnection::default()
    };

    match env.describe_columns(&mut conn, "missing").await {
        Err(Error::Database { message, .. }) => {
            assert_eq!(message, "Table not found: describe missing")
        }
        other => panic!("Expected Database error, got {:?}", other),
    }
    assert_eq!(conn.opened, 0);
}

#[tokio::test]
async fn test_describe_fetch_failure_is_unmodified() {
    let env = HiveEnvironment::new();
    let mut conn = MockConnection::with_describe(&[
        (Some("id"), Some("int")),
        (Some("name"), Some("string")),
    ]);
    conn.fail_at = Some(1);

    let err = env.describe_columns(&mut conn, "t").await.unwrap_err();

    assert_eq!(err.to_string(), "Database access error: fetch failed");
    assert_eq!(err.source().unwrap().to_string(), "connection reset");
    assert_eq!(conn.leaked(), 0);
}

#[tokio::test]
async fn test_describe_fetch_failure_wins_over_close_failure() {
    let env = HiveEnvironment::new();
    let mut conn = MockConnection::with_describe(&[(Some("id"), Some("int"))]);
    conn.fail_at = Some(0);
    conn.fail_close = true;

    let err = env.describe_columns(&mut conn, "t").await.unwrap_err();

    assert_eq!(err.to_string(), "Database access error: fetch failed");
    assert_eq!(conn.leaked(), 0);
}

#[tokio::test]
async fn test_describe_close_failure() {
    let env = HiveEnvironment::new();
    let mut conn = MockConnection::with_describe(&[(Some("id"), Some("int"))]);
    conn.fail_close = true;

    let err = env.describe_columns(&mut conn, "t").await.unwrap_err();

    assert_eq!(err.to_string(), "Database access error: close failed");
}

#[tokio::test]
async fn test_describe_procedure_parameters_is_unsupported() {
    let env = HiveEnvironment::new();
    let mut conn = MockConnection::default();

    for proc_name in ["any_proc", "", "db1.p; drop table t"] {
        let params = env
            .describe_procedure_parameters(&mut conn, proc_name)
            .await
            .unwrap();
        assert!(params.is_none());
    }
    assert!(conn.queries.is_empty());
}

#[tokio::test]
async fn test_describe_malformed_type_is_unsupported() {
    let env = HiveEnvironment::new();
    let mut conn = MockConnection::with_describe(&[(Some("id"), Some("int("))]);

    match env.describe_columns(&mut conn, "t").await {
        Err(Error::UnsupportedType { type_name }) => assert_eq!(type_name, "INT("),
        other => panic!("Expected UnsupportedType, got {:?}", other),
    }
    assert_eq!(conn.leaked(), 0);
}
