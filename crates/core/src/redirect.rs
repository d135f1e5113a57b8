//! Sanitizing of caller-supplied redirect targets (`?redirect_url=`).
//!
//! Only local absolute paths are followed. Anything that could leave the
//! site (scheme-qualified URLs, protocol-relative `//host` forms, backslash
//! tricks browsers normalize to `//`) falls back to the given default.

/// Return `candidate` if it is a safe local path, otherwise `fallback`.
pub fn safe_redirect_target(candidate: Option<&str>, fallback: &str) -> String {
    match candidate.map(str::trim) {
        Some(target) if is_local_path(target) => target.to_string(),
        _ => fallback.to_string(),
    }
}

/// Whether `target` is an absolute path on this site.
pub fn is_local_path(target: &str) -> bool {
    let mut chars = target.chars();
    if chars.next() != Some('/') {
        return false;
    }
    if matches!(chars.next(), Some('/') | Some('\\')) {
        return false;
    }
    !target.chars().any(|c| c == '\\' || c.is_control())
}

/// Append `?redirect_url=<target>` to `path`, percent-encoding the target.
pub fn with_redirect_url(path: &str, target: Option<&str>) -> String {
    match target {
        Some(target) => format!("{path}?redirect_url={}", encode_query_value(target)),
        None => path.to_string(),
    }
}

/// Percent-encode a query-string value. RFC 3986 unreserved characters and
/// `/` pass through unchanged.
pub fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: &str = "/dashboard/items/";

    #[test]
    fn local_paths_are_kept() {
        assert_eq!(
            safe_redirect_target(Some("/dashboard/items/?page=3"), LIST),
            "/dashboard/items/?page=3"
        );
        assert_eq!(safe_redirect_target(Some("/"), LIST), "/");
    }

    #[test]
    fn missing_or_blank_falls_back() {
        assert_eq!(safe_redirect_target(None, LIST), LIST);
        assert_eq!(safe_redirect_target(Some("  "), LIST), LIST);
    }

    #[test]
    fn external_targets_fall_back() {
        for target in [
            "https://evil.example/",
            "//evil.example/",
            "/\\evil.example/",
            "javascript:alert(1)",
            "dashboard/items/",
            "/dash\\board",
            "/dashboard/\nitems",
        ] {
            assert_eq!(safe_redirect_target(Some(target), LIST), LIST, "{target}");
        }
    }

    #[test]
    fn query_values_are_percent_encoded() {
        assert_eq!(
            encode_query_value("/dashboard/items/?page=2&x=a b"),
            "/dashboard/items/%3Fpage%3D2%26x%3Da%20b"
        );
        assert_eq!(encode_query_value("/caf\u{e9}"), "/caf%C3%A9");
    }

    #[test]
    fn redirect_url_is_appended_only_when_present() {
        assert_eq!(
            with_redirect_url("/dashboard/items/1/edit/", Some("/dashboard/items/?page=2")),
            "/dashboard/items/1/edit/?redirect_url=/dashboard/items/%3Fpage%3D2"
        );
        assert_eq!(
            with_redirect_url("/dashboard/items/1/edit/", None),
            "/dashboard/items/1/edit/"
        );
    }
}
