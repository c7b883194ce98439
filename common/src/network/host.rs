//! # Hostname Helpers

/// Keeps only the last `depth` dot-separated labels of `host`.
///
/// A depth of `0` disables the transform. Hosts with fewer labels than
/// `depth` are returned unchanged.
///
/// ```
/// use bugscan_common::network::host::trim_to_depth;
///
/// assert_eq!(trim_to_depth("a.b.example.com", 2), "example.com");
/// assert_eq!(trim_to_depth("a.b.example.com", 0), "a.b.example.com");
/// ```
pub fn trim_to_depth(host: &str, depth: usize) -> String {
    if depth == 0 {
        return host.to_string();
    }

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < depth {
        return host.to_string();
    }

    labels[labels.len() - depth..].join(".")
}
