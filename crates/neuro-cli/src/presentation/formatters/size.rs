const UNITS: [&str; 8] = ["K", "M", "G", "T", "P", "E", "Z", "Y"];

/// `ls -h` style size. Values under 1024 are printed as-is.
pub fn format_human_size(bytes: u64) -> String {
    if bytes < 1024 {
        return bytes.to_string();
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1}{}", value, UNITS[unit])
}
