//! SDL rendering
//!
//! Formatting only: field order is preserved exactly as given.
//!
//! ```text
//! type Post {
//!   id: ID!
//!   title: String!
//! }
//! ```

use crate::schema::{FieldMap, QueryField};
use crate::types::QUERY_TYPE_NAME;

const INDENT: &str = "  ";

/// Separator between top-level blocks of the document
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Render one object type definition
pub fn render_type(type_name: &str, fields: &FieldMap) -> String {
    let lines: Vec<String> = fields
        .iter()
        .map(|(name, field)| format!("{INDENT}{name}: {}", field.ty))
        .collect();
    render_block(type_name, &lines)
}

/// Render the root query type
pub fn render_query(fields: &[QueryField]) -> String {
    let lines: Vec<String> = fields.iter().map(render_query_field).collect();
    render_block(QUERY_TYPE_NAME, &lines)
}

/// Join rendered blocks into one document
pub fn render_document<I, S>(blocks: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for block in blocks {
        if !out.is_empty() {
            out.push_str(BLOCK_SEPARATOR);
        }
        out.push_str(block.as_ref());
    }
    out
}

fn render_query_field(field: &QueryField) -> String {
    if field.arguments.is_empty() {
        return format!("{INDENT}{}: {}", field.name, field.ty);
    }
    let args: Vec<String> = field
        .arguments
        .iter()
        .map(|arg| format!("{}: {}", arg.name, arg.ty))
        .collect();
    format!("{INDENT}{}({}): {}", field.name, args.join(", "), field.ty)
}

/// An empty body still gets its own (blank) line
fn render_block(type_name: &str, lines: &[String]) -> String {
    format!("type {type_name} {{\n{}\n}}", lines.join("\n"))
}

#[cfg(test)]
mod tests;
