//! Small shared helpers.

/// Humanize a byte count with 1024-based units.
///
/// The value is rounded to at most two decimals; trailing zeros are not
/// printed (`1536` becomes `1.5 KB`, not `1.50 KB`).
pub fn humanize_size(size: u64) -> String {
    const UNITS: [&str; 9] = ["bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes() {
        assert_eq!(humanize_size(0), "0 bytes");
        assert_eq!(humanize_size(512), "512 bytes");
        assert_eq!(humanize_size(1023), "1023 bytes");
    }

    #[test]
    fn test_kilobytes() {
        assert_eq!(humanize_size(1024), "1 KB");
        assert_eq!(humanize_size(1536), "1.5 KB");
        assert_eq!(humanize_size(1234), "1.21 KB");
    }

    #[test]
    fn test_megabytes() {
        assert_eq!(humanize_size(1024 * 1024), "1 MB");
        assert_eq!(humanize_size(5 * 1024 * 1024 + 256 * 1024), "5.25 MB");
    }

    #[test]
    fn test_caps_at_largest_unit() {
        assert!(humanize_size(u64::MAX).ends_with(" EB"));
    }
}
