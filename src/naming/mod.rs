//! Naming conventions
//!
//! Pure, rule-based string transforms that derive schema names from
//! collection and field names:
//!
//! - collection → type name (`"users"` → `User`)
//! - owner + field → nested type name (`User` + `"home_address"` → `UserHomeAddress`)
//! - type name → singular query field (`UserProfile` → `user_profile`)
//! - singular → plural query field (`category` → `categories`)
//!
//! These are deliberately naive suffix rules, not linguistics. `"categories"`
//! singularizes to `Categorie` and that is the expected output.

use regex::Regex;
use std::sync::LazyLock;

/// GraphQL `Name` production
static GRAPHQL_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[_A-Za-z][_0-9A-Za-z]*$").expect("Invalid GraphQL name regex"));

/// Names derived for one collection's root query accessors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryNames {
    /// Object type name (`Post`)
    pub type_name: String,
    /// By-identifier accessor (`post`)
    pub singular: String,
    /// List accessor (`posts`)
    pub plural: String,
}

impl QueryNames {
    /// Derive all query names for a collection
    pub fn for_collection(collection: &str) -> Self {
        let type_name = type_name_for_collection(collection);
        let singular = to_snake_case(&type_name);
        let plural = pluralize(&singular);
        Self {
            type_name,
            singular,
            plural,
        }
    }
}

/// Derive the object type name for a collection: drop one trailing `s`,
/// then upper-case the first letter.
pub fn type_name_for_collection(collection: &str) -> String {
    capitalize_first(singularize(collection))
}

/// Strip a single trailing `s`. A lone `"s"` is left alone.
pub fn singularize(word: &str) -> &str {
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem,
        _ => word,
    }
}

/// Upper-case the first character, leave the rest untouched
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Join `_`, `-`, `.` and space separated segments, capitalizing each
pub fn pascal_case(word: &str) -> String {
    word.split(['_', '-', '.', ' '])
        .filter(|segment| !segment.is_empty())
        .map(capitalize_first)
        .collect()
}

/// Name of the nested type discovered under `field_name` of `owner_type`.
///
/// A field made only of separators keeps its raw text so the result never
/// collapses onto the owner's own name.
pub fn nested_type_name(owner_type: &str, field_name: &str) -> String {
    let suffix = match pascal_case(field_name) {
        joined if joined.is_empty() => capitalize_first(field_name),
        joined => joined,
    };
    format!("{owner_type}{suffix}")
}

/// Convert PascalCase to lower_snake_case.
///
/// A separator goes before an upper-case letter that follows a lower-case
/// letter or digit, and before the last capital of an acronym run
/// (`HTTPLog` → `http_log`).
pub fn to_snake_case(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut out = String::with_capacity(word.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                if prev.is_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_uppercase() && next_is_lower)
                {
                    out.push('_');
                }
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// One English pluralization rule: when `matches`, produce `apply(word)`
struct PluralRule {
    matches: fn(&str) -> bool,
    apply: fn(&str) -> String,
}

/// Ordered rule table; the first matching rule wins
const PLURAL_RULES: &[PluralRule] = &[
    PluralRule {
        matches: ends_with_sibilant,
        apply: append_es,
    },
    PluralRule {
        matches: ends_with_consonant_y,
        apply: replace_y_with_ies,
    },
    PluralRule {
        matches: always,
        apply: append_s,
    },
];

/// Pluralize with the ordered suffix rules:
/// `x`/`s`/`sh`/`ch` → `+es`, consonant + `y` → `ies`, otherwise `+s`
pub fn pluralize(word: &str) -> String {
    PLURAL_RULES
        .iter()
        .find(|rule| (rule.matches)(word))
        .map_or_else(|| append_s(word), |rule| (rule.apply)(word))
}

fn ends_with_sibilant(word: &str) -> bool {
    word.ends_with('x') || word.ends_with('s') || word.ends_with("sh") || word.ends_with("ch")
}

fn ends_with_consonant_y(word: &str) -> bool {
    let mut rev = word.chars().rev();
    match (rev.next(), rev.next()) {
        (Some('y'), Some(before)) => before.is_ascii_alphabetic() && !is_vowel(before),
        _ => false,
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

fn always(_: &str) -> bool {
    true
}

fn append_es(word: &str) -> String {
    format!("{word}es")
}

fn replace_y_with_ies(word: &str) -> String {
    format!("{}ies", &word[..word.len() - 1])
}

fn append_s(word: &str) -> String {
    format!("{word}s")
}

/// Whether `name` is a legal GraphQL name (`/[_A-Za-z][_0-9A-Za-z]*/`)
pub fn is_valid_graphql_name(name: &str) -> bool {
    GRAPHQL_NAME.is_match(name)
}

#[cfg(test)]
mod tests;
