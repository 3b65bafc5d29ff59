//! Human-readable file size labels.

/// Binary multiples, starting at 1024 bytes.
const MULTIPLES: [&str; 8] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];

/// Format a byte count for display next to the file picker.
///
/// Sizes up to and including 1024 bytes are shown as `"<n> bytes"`. Larger
/// sizes use the largest multiple whose value stays above 1, with three
/// decimals and the exact count in parentheses, e.g. `"1.001 KiB (1025 bytes)"`.
pub fn format_size(bytes: u64) -> String {
    let mut output = format!("{} bytes", bytes);

    let mut approx = bytes as f64 / 1024.0;
    let mut multiple = 0;
    while approx > 1.0 {
        let Some(unit) = MULTIPLES.get(multiple) else {
            break;
        };
        // Ties round up
        let rounded = (approx * 1000.0).round() / 1000.0;
        output = format!("{:.3} {} ({} bytes)", rounded, unit, bytes);
        approx /= 1024.0;
        multiple += 1;
    }

    output
}
