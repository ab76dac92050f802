/// Human-readable byte counts for log lines and the CLI summary.
///
/// Sizes stay `u64` bytes everywhere else; floating point only appears here.

const UNITS: [&str; 5] = ["KB", "MB", "GB", "TB", "PB"];

/// Format a byte count with binary (1024) steps and short unit labels.
///
/// One decimal below a gigabyte, two from there up.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit >= 2 {
        format!("{value:.2} {}", UNITS[unit])
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

/// One-line description of a finished scan, e.g. `3 files, 1.5 KB, 1 skipped`.
pub fn describe_totals(files: u64, bytes: u64, skipped: usize) -> String {
    format!("{files} files, {}, {skipped} skipped", format_size(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_units() {
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1_048_576), "1.0 MB");
        assert_eq!(format_size(1_073_741_824), "1.00 GB");
        assert_eq!(format_size(1_099_511_627_776), "1.00 TB");
    }

    #[test]
    fn test_describe_totals() {
        assert_eq!(describe_totals(3, 600, 1), "3 files, 600 B, 1 skipped");
    }
}
