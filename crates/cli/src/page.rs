use reqwest::Url;

/// Hostname of a page URL. Anything that is not an absolute URL with a host is
/// returned trimmed but otherwise untouched, so bare hostnames pass through.
pub fn extract_hostname(target: &str) -> String {
    let target = target.trim();
    Url::parse(target)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| target.to_string())
}
