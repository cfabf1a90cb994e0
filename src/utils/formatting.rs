pub fn format_ms(ms: f64) -> String {
    if ms.fract() == 0.0 && ms.abs() < 1e15 {
        format!("{}ms", ms as i64)
    } else {
        format!("{:.2}ms", ms)
    }
}

pub fn format_rate(per_sec: f64) -> String {
    format!("{:.2}/s", per_sec)
}

pub fn format_kbps(kbps: f64) -> String {
    if kbps >= 1024.0 {
        format!("{:.2} MB/s", kbps / 1024.0)
    } else {
        format!("{:.2} KB/s", kbps)
    }
}

/// Shorten a label to at most `max` characters, marking the cut with `…`.
pub fn truncate_label(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        label.to_string()
    } else {
        let kept: String = label.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ms() {
        assert_eq!(format_ms(12.0), "12ms");
        assert_eq!(format_ms(12.346), "12.35ms");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(48.2), "48.20/s");
    }

    #[test]
    fn test_format_kbps() {
        assert_eq!(format_kbps(120.4), "120.40 KB/s");
        assert_eq!(format_kbps(2048.0), "2.00 MB/s");
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("GET /tasks", 20), "GET /tasks");
        assert_eq!(truncate_label("GET /tasks/123/comments", 10), "GET /task…");
        assert_eq!(truncate_label("ÄÖÜäöü", 4), "ÄÖÜ…");
    }
}
