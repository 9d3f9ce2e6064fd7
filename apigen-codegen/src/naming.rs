//! Operation identifiers.

use apigen_core::{HttpMethod, to_pascal_case};

/// Identifier of an operation: the explicit `operationId`, or one derived
/// from the method and path.
///
/// Derived ids replace every `{param}` placeholder with `By`, drop every
/// character outside `[A-Za-z0-9]` and PascalCase the rest, so
/// `GET /users/{id}/posts` becomes `getUsersByposts`.
///
/// An explicit id with no ASCII letters or digits can't name anything and
/// falls back to the derived one.
pub fn operation_id(method: HttpMethod, path: &str, explicit: Option<&str>) -> String {
    if let Some(id) = explicit
        .map(str::trim)
        .filter(|id| !to_pascal_case(id).is_empty())
    {
        return id.to_string();
    }

    format!("{}{}", method.as_str(), to_pascal_case(&replace_placeholders(path)))
}

fn replace_placeholders(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut rest = path;

    while let Some(start) = rest.find('{') {
        match rest[start..].find('}') {
            Some(len) => {
                out.push_str(&rest[..start]);
                out.push_str("By");
                rest = &rest[start + len + 1..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out.retain(|c| c.is_ascii_alphanumeric());
    out
}
