use super::template::resolve_template;
use crate::models::{HeaderDeclaration, VariableMapping};
use indexmap::IndexMap;

pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Resolve declared headers and inject a bearer token when appropriate.
///
/// Declarations resolving to the same key keep the first position and the
/// last value. `Authorization: Bearer <token>` is appended only when the
/// variables carry a non-empty access token and no declared key matches
/// `authorization` case-insensitively.
pub fn resolve_headers(
    declarations: &[HeaderDeclaration],
    vars: &VariableMapping,
) -> IndexMap<String, String> {
    let mut headers = IndexMap::with_capacity(declarations.len() + 1);

    for declaration in declarations {
        headers.insert(
            resolve_template(&declaration.key, vars),
            resolve_template(&declaration.value, vars),
        );
    }

    if let Some(token) = vars.access_token() {
        let declared = headers
            .keys()
            .any(|key| key.eq_ignore_ascii_case(AUTHORIZATION_HEADER));
        if !declared {
            headers.insert(AUTHORIZATION_HEADER.to_string(), format!("Bearer {}", token));
        }
    }

    headers
}
