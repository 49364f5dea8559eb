//! IRI decomposition helpers
//!
//! Local-name and namespace splitting plus a display helper for local names.
//! The `#` delimiter always wins over `/`: everything after the last `#` is
//! the local name even when slashes follow it.

/// Local name of an IRI: the part after the last `#`, else after the last
/// `/`, else the IRI unchanged.
pub fn local_name(iri: &str) -> &str {
    if let Some(pos) = iri.rfind('#') {
        return &iri[pos + 1..];
    }
    if let Some(pos) = iri.rfind('/') {
        return &iri[pos + 1..];
    }
    iri
}

/// Namespace of an IRI: everything up to and including the delimiter that
/// starts the local name; empty when the IRI has no delimiter.
///
/// Invariant: `namespace(iri) + local_name(iri) == iri` whenever a delimiter
/// exists.
pub fn namespace(iri: &str) -> &str {
    let local = local_name(iri);
    if local.len() == iri.len() {
        ""
    } else {
        &iri[..iri.len() - local.len()]
    }
}

/// Human-readable rendering of a local name: splits camelCase and
/// snake_case into words and title-cases them.
pub fn humanize_local_name(local: &str) -> String {
    let mut spaced = String::with_capacity(local.len() + 8);
    let mut prev_lower = false;
    for c in local.chars() {
        if c == '_' {
            spaced.push(' ');
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower {
            spaced.push(' ');
        }
        prev_lower = c.is_lowercase();
        spaced.push(c);
    }

    spaced
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_name_after_hash() {
        assert_eq!(local_name("http://example.org/ns#Person"), "Person");
        assert_eq!(
            local_name("http://www.w3.org/1999/02/22-rdf-syntax-ns#type"),
            "type"
        );
    }

    #[test]
    fn local_name_after_last_slash() {
        assert_eq!(local_name("http://example.org/ontology/Person"), "Person");
    }

    #[test]
    fn hash_wins_over_following_slashes() {
        assert_eq!(local_name("http://ex.org/ns#local/part"), "local/part");
    }

    #[test]
    fn local_name_without_delimiter_is_identity() {
        assert_eq!(local_name("justAString"), "justAString");
        assert_eq!(local_name("urn:example:person"), "urn:example:person");
    }

    #[test]
    fn namespace_includes_delimiter() {
        assert_eq!(
            namespace("http://example.org/ns#Person"),
            "http://example.org/ns#"
        );
        assert_eq!(
            namespace("http://example.org/ontology/Person"),
            "http://example.org/ontology/"
        );
    }

    #[test]
    fn namespace_empty_without_delimiter() {
        assert_eq!(namespace("justAString"), "");
    }

    #[test]
    fn humanize_splits_camel_and_snake_case() {
        assert_eq!(humanize_local_name("firstName"), "First Name");
        assert_eq!(humanize_local_name("PersonName"), "Person Name");
        assert_eq!(humanize_local_name("has_member"), "Has Member");
        assert_eq!(humanize_local_name("person"), "Person");
        assert_eq!(humanize_local_name("URI"), "Uri");
    }
}
