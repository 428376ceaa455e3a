//! Hosts-file reconciliation: pure functions over the file's text.

/// Format the hosts line for `hostname`, without the trailing newline.
#[must_use]
pub fn hosts_line(loopback: &str, hostname: &str) -> String {
    format!("{loopback}    {hostname}")
}

/// Returns `true` if any non-comment line already maps `hostname`.
#[must_use]
pub fn has_hostname(contents: &str, hostname: &str) -> bool {
    contents.lines().any(|line| {
        let entry = line.split('#').next().unwrap_or_default();
        entry
            .split_whitespace()
            .skip(1)
            .any(|name| name.eq_ignore_ascii_case(hostname))
    })
}

/// Text to append so that `contents` maps `hostname` to `loopback`.
///
/// Returns `None` when the hostname is already present. A newline is
/// prepended when the existing text does not end with one.
#[must_use]
pub fn entry_to_append(contents: &str, loopback: &str, hostname: &str) -> Option<String> {
    if has_hostname(contents, hostname) {
        return None;
    }
    let separator = if contents.is_empty() || contents.ends_with('\n') {
        ""
    } else {
        "\n"
    };
    Some(format!("{separator}{}\n", hosts_line(loopback, hostname)))
}
