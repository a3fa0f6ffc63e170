//! # Identifier Deriver
//!
//! Maps an HTTP path template and verb to the logical id under which the
//! upstream generator filed the `AWS::ApiGateway::Method` resource.
//!
//! ```
//! use multiple_responses::identifier::derive_identifier;
//!
//! assert_eq!(derive_identifier("ping", "GET"), "ApiGatewayMethodPingGet");
//! assert_eq!(
//!     derive_identifier("users/{id}/pets", "post"),
//!     "ApiGatewayMethodUsersIdVarPetsPost"
//! );
//! ```

/// Prefix shared by every method resource id.
pub const METHOD_PREFIX: &str = "ApiGatewayMethod";

/// Suffix appended to segments that are path parameters (`{id}`).
pub const PATH_VARIABLE_SUFFIX: &str = "Var";

/// Derives the method resource id for `path` and `method`.
///
/// Pure and deterministic. Segments or methods that normalize to nothing
/// contribute nothing; see [`is_unresolved`].
pub fn derive_identifier(path: &str, method: &str) -> String {
    let mut id = String::from(METHOD_PREFIX);
    id.push_str(&path_component(path));
    if let Some(method) = normalize(method, true) {
        id.push_str(&method);
    }
    id
}

/// True when neither the path nor the method contributed to `identifier`.
///
/// Such ids can never name a generated resource and are treated as not found.
pub fn is_unresolved(identifier: &str) -> bool {
    identifier.is_empty() || identifier == METHOD_PREFIX
}

/// Concatenates the normalized form of every `/`-separated segment.
pub fn path_component(path: &str) -> String {
    path.split('/')
        .filter_map(|segment| {
            let alphanumeric: String = segment
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .collect();
            let mut normalized = normalize(&alphanumeric, true)?;
            if segment.starts_with('{') {
                normalized.push_str(PATH_VARIABLE_SUFFIX);
            }
            Some(normalized)
        })
        .collect()
}

/// Upper-cases the first character and, when `lowercase_rest` is set,
/// lower-cases the remainder. Returns `None` for an empty input.
pub fn normalize(s: &str, lowercase_rest: bool) -> Option<String> {
    let mut chars = s.chars();
    let first = chars.next()?;

    let mut out = String::with_capacity(s.len());
    out.push(first.to_ascii_uppercase());
    let rest = chars.as_str();
    if lowercase_rest {
        out.push_str(&rest.to_ascii_lowercase());
    } else {
        out.push_str(rest);
    }
    Some(out)
}
