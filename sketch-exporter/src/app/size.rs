/*!
 Human readable file sizes.
*/

const DIVISOR: f64 = 1024.;
const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count using the largest unit that keeps the value at or above `1`
pub fn format_file_size(total_bytes: u64) -> String {
    let mut index: usize = 0;
    let mut bytes = total_bytes as f64;
    while index < UNITS.len() - 1 && bytes >= DIVISOR {
        index += 1;
        bytes /= DIVISOR;
    }

    format!("{bytes:.2} {}", UNITS[index])
}
