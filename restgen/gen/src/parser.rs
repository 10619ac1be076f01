//! Path template parsing.
//!
//! Resource paths use `{name}` placeholders, e.g.
//! `/contacts/{id}/notes/{noteId}`.

/// One piece of a path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment<'a> {
    /// Text copied verbatim into the URL.
    Literal(&'a str),
    /// A `{name}` placeholder.
    Param(&'a str),
}

/// Splits a path template into literal text and placeholders.
///
/// An unterminated `{` and an empty `{}` are kept as literal text.
///
/// ## Examples
///
/// ```
/// use restgen_gen::parser::{PathSegment, parse_path_template};
///
/// assert_eq!(
///     parse_path_template("/contacts/{id}/notes"),
///     vec![
///         PathSegment::Literal("/contacts/"),
///         PathSegment::Param("id"),
///         PathSegment::Literal("/notes"),
///     ]
/// );
/// ```
pub fn parse_path_template(path: &str) -> Vec<PathSegment<'_>> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut open: Option<usize> = None;

    for (idx, c) in path.char_indices() {
        match c {
            '{' => open = Some(idx),
            '}' => {
                if let Some(start) = open.take()
                    && idx > start + 1
                {
                    if start > literal_start {
                        segments.push(PathSegment::Literal(&path[literal_start..start]));
                    }
                    segments.push(PathSegment::Param(&path[start + 1..idx]));
                    literal_start = idx + 1;
                }
            }
            _ => {}
        }
    }
    if literal_start < path.len() {
        segments.push(PathSegment::Literal(&path[literal_start..]));
    }
    segments
}

/// Extracts placeholder names from a path template, in order.
///
/// ## Examples
///
/// ```
/// use restgen_gen::parser::extract_path_params;
///
/// assert_eq!(extract_path_params("/contacts"), Vec::<&str>::new());
/// assert_eq!(
///     extract_path_params("/contacts/{id}/notes/{noteId}"),
///     vec!["id", "noteId"]
/// );
/// ```
pub fn extract_path_params(path: &str) -> Vec<&str> {
    parse_path_template(path)
        .into_iter()
        .filter_map(|segment| match segment {
            PathSegment::Param(name) => Some(name),
            PathSegment::Literal(_) => None,
        })
        .collect()
}
