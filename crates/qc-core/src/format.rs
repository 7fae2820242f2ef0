//! Human-readable byte formatting.

/// Format a byte count with binary units, two decimals from KiB up.
pub fn format_bytes(bytes: i64) -> String {
    const UNIT: i64 = 1024;
    if bytes < UNIT {
        return format!("{} B", bytes);
    }

    let mut div = UNIT;
    let mut exp = 0usize;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    let units = ['K', 'M', 'G', 'T', 'P', 'E'];
    format!("{:.2} {}iB", bytes as f64 / div as f64, units[exp])
}
