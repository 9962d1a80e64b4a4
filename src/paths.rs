use chrono::{Local, TimeZone};

// Note paths come from the native host and may use either separator.
fn split_separators(path: &str) -> impl DoubleEndedIterator<Item = &str> {
    path.split(['/', '\\'])
}

pub fn file_name(path: &str) -> &str {
    split_separators(path).next_back().unwrap_or("")
}

pub fn parent_dir(path: &str) -> String {
    let mut parts: Vec<&str> = split_separators(path).collect();
    parts.pop();
    parts.join("/")
}

pub fn is_markdown_file(path: &str) -> bool {
    let extension = path.rsplit('.').next().map(str::to_lowercase);
    matches!(extension.as_deref(), Some("md") | Some("markdown"))
}

pub fn ensure_markdown_extension(path: &str) -> String {
    if is_markdown_file(path) {
        path.to_string()
    } else {
        format!("{path}.md")
    }
}

/// Derives a safe file name from a note title: strip anything outside
/// `[a-zA-Z0-9 _-]`, collapse whitespace runs into single hyphens, lowercase.
pub fn title_to_file_name(title: &str) -> String {
    let cleaned: String = title
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '_')
        .collect();
    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

pub fn format_file_size(bytes: u64) -> String {
    const SIZES: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(SIZES.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZES[exponent])
}

/// Renders a unix-seconds timestamp string as local date-time; absent or
/// unparseable input renders as "Unknown".
pub fn format_timestamp(timestamp: Option<&str>) -> String {
    let Some(raw) = timestamp else {
        return "Unknown".to_string();
    };
    let Ok(secs) = raw.parse::<i64>() else {
        return "Unknown".to_string();
    };
    match Local.timestamp_opt(secs, 0).single() {
        Some(moment) => moment.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "Unknown".to_string(),
    }
}
