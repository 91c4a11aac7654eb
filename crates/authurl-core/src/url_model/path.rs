//! Slash trimming and POSIX-style path joining.

/// Removes every leading `/`.
pub fn trim_leading_slash(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Removes every trailing `/`.
pub fn trim_trailing_slash(path: &str) -> &str {
    path.trim_end_matches('/')
}

/// Joins two paths, resolving `.` and `..` and collapsing repeated slashes.
///
/// The result is always absolute. A trailing slash on the last non-empty
/// argument is kept, and a join that resolves to nothing yields `/`.
pub fn join_paths(base: &str, extra: &str) -> String {
    let last = if extra.is_empty() { base } else { extra };
    let trailing = last.ends_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in base.split('/').chain(extra.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    let mut out = format!("/{}", segments.join("/"));
    if trailing && !segments.is_empty() {
        out.push('/');
    }
    out
}
