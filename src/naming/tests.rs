//! Naming rule tests

use super::*;
use test_case::test_case;

// ============================================================================
// Collection → Type Name
// ============================================================================

#[test_case("Users", "User" ; "capitalized plural")]
#[test_case("users", "User" ; "lower plural")]
#[test_case("cats", "Cat" ; "simple plural")]
#[test_case("categories", "Categorie" ; "naive ies strip")]
#[test_case("companies", "Companie" ; "naive strip keeps ie")]
#[test_case("person", "Person" ; "no trailing s")]
#[test_case("address", "Addres" ; "double s loses one")]
#[test_case("s", "S" ; "lone s kept")]
#[test_case("", "" ; "empty")]
fn test_type_name_for_collection(collection: &str, expected: &str) {
    assert_eq!(type_name_for_collection(collection), expected);
}

#[test]
fn test_singularize_strips_only_one_s() {
    assert_eq!(singularize("classes"), "classe");
    assert_eq!(singularize("bus"), "bu");
    assert_eq!(singularize("data"), "data");
}

#[test]
fn test_capitalize_first() {
    assert_eq!(capitalize_first("post"), "Post");
    assert_eq!(capitalize_first("Post"), "Post");
    assert_eq!(capitalize_first("éclair"), "Éclair");
    assert_eq!(capitalize_first(""), "");
}

// ============================================================================
// Nested Type Names
// ============================================================================

#[test_case("address", "Address" ; "single word")]
#[test_case("homeAddress", "HomeAddress" ; "camel case")]
#[test_case("home_address", "HomeAddress" ; "snake case")]
#[test_case("home-address", "HomeAddress" ; "kebab case")]
#[test_case("geo.point", "GeoPoint" ; "dotted")]
#[test_case("__meta", "Meta" ; "leading separators")]
fn test_pascal_case(field: &str, expected: &str) {
    assert_eq!(pascal_case(field), expected);
}

#[test]
fn test_nested_type_name() {
    assert_eq!(nested_type_name("User", "address"), "UserAddress");
    assert_eq!(
        nested_type_name("UserAddress", "geo_point"),
        "UserAddressGeoPoint"
    );
}

#[test_case("_", "User_" ; "underscore")]
#[test_case("__", "User__" ; "double underscore")]
#[test_case("-", "User-" ; "dash")]
fn test_nested_type_name_for_separator_only_field(field: &str, expected: &str) {
    assert_eq!(nested_type_name("User", field), expected);
}

// ============================================================================
// Snake Case
// ============================================================================

#[test_case("Post", "post" ; "single word")]
#[test_case("UserProfile", "user_profile" ; "two words")]
#[test_case("HTTPLog", "http_log" ; "acronym run")]
#[test_case("Order2Item", "order2_item" ; "digit boundary")]
#[test_case("User_profile", "user_profile" ; "existing separator")]
#[test_case("Categorie", "categorie" ; "naive singular")]
fn test_to_snake_case(word: &str, expected: &str) {
    assert_eq!(to_snake_case(word), expected);
}

// ============================================================================
// Pluralization Rule Table
// ============================================================================

#[test_case("box", "boxes" ; "ends with x")]
#[test_case("bus", "buses" ; "ends with s")]
#[test_case("wish", "wishes" ; "ends with sh")]
#[test_case("match", "matches" ; "ends with ch")]
#[test_case("category", "categories" ; "consonant y")]
#[test_case("day", "days" ; "vowel y")]
#[test_case("y", "ys" ; "lone y")]
#[test_case("post", "posts" ; "default rule")]
#[test_case("categorie", "categories" ; "round trip of naive singular")]
#[test_case("user_profile", "user_profiles" ; "snake case word")]
fn test_pluralize(word: &str, expected: &str) {
    assert_eq!(pluralize(word), expected);
}

#[test]
fn test_plural_rules_are_ordered() {
    // "ss" hits the sibilant rule before anything else
    assert_eq!(pluralize("address"), "addresses");
    // consonant-y is checked before the default append
    assert_eq!(pluralize("story"), "stories");
}

// ============================================================================
// Query Names
// ============================================================================

#[test]
fn test_query_names_for_collection() {
    let names = QueryNames::for_collection("posts");
    assert_eq!(names.type_name, "Post");
    assert_eq!(names.singular, "post");
    assert_eq!(names.plural, "posts");

    let names = QueryNames::for_collection("userProfiles");
    assert_eq!(names.type_name, "UserProfile");
    assert_eq!(names.singular, "user_profile");
    assert_eq!(names.plural, "user_profiles");

    let names = QueryNames::for_collection("boxes");
    assert_eq!(names.type_name, "Boxe");
    assert_eq!(names.plural, "boxes");
}

#[test]
fn test_is_valid_graphql_name() {
    assert!(is_valid_graphql_name("User"));
    assert!(is_valid_graphql_name("_Internal2"));
    assert!(!is_valid_graphql_name("User-log"));
    assert!(!is_valid_graphql_name("2fa"));
    assert!(!is_valid_graphql_name(""));
}
