//! Renderer tests

use super::*;
use crate::schema::{FieldSchema, Scalar, TypeRef};
use pretty_assertions::assert_eq;

fn fields(entries: Vec<(&str, FieldSchema)>) -> FieldMap {
    entries
        .into_iter()
        .map(|(name, field)| (name.to_string(), field))
        .collect()
}

#[test]
fn test_render_type() {
    let fields = fields(vec![
        ("id", FieldSchema::required(TypeRef::scalar(Scalar::ID))),
        ("title", FieldSchema::optional(TypeRef::scalar(Scalar::String))),
        (
            "tags",
            FieldSchema::required(TypeRef::list(TypeRef::scalar(Scalar::String))),
        ),
    ]);

    assert_eq!(
        render_type("Post", &fields),
        "type Post {\n  id: ID!\n  title: String\n  tags: [String!]!\n}"
    );
}

#[test]
fn test_render_type_preserves_given_order() {
    let fields = fields(vec![
        ("zeta", FieldSchema::optional(TypeRef::scalar(Scalar::Int))),
        ("alpha", FieldSchema::optional(TypeRef::scalar(Scalar::Int))),
    ]);

    let rendered = render_type("Order", &fields);
    let zeta = rendered.find("zeta").unwrap();
    let alpha = rendered.find("alpha").unwrap();
    assert!(zeta < alpha);
}

#[test]
fn test_render_empty_type() {
    assert_eq!(render_type("Empty", &FieldMap::new()), "type Empty {\n\n}");
}

#[test]
fn test_render_query() {
    let query = vec![
        QueryField::list_accessor("posts", "Post"),
        QueryField::by_id_accessor("post", "Post"),
    ];

    assert_eq!(
        render_query(&query),
        "type Query {\n  posts: [Post!]!\n  post(id: ID!): Post\n}"
    );
}

#[test]
fn test_render_document() {
    let doc = render_document(["type A {\n\n}", "type Query {\n\n}"]);
    assert_eq!(doc, "type A {\n\n}\n\ntype Query {\n\n}");

    let empty: Vec<String> = Vec::new();
    assert_eq!(render_document(empty), "");
}
