//! Output tests

use super::*;

#[test]
fn test_trailing_newline() {
    assert_eq!(with_trailing_newline("type A {\n\n}"), "type A {\n\n}\n");
    assert_eq!(with_trailing_newline("x\n"), "x\n");
}

#[tokio::test]
async fn test_write_schema_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("schema.graphql");

    write_schema(Some(&path), "type Query {\n\n}").await.unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "type Query {\n\n}\n");
}

#[tokio::test]
async fn test_write_schema_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.graphql");
    std::fs::write(&path, "old contents that are longer").unwrap();

    write_schema(Some(&path), "new").await.unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\n");
}
