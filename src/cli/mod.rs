pub mod force;
pub mod miniature;
pub mod template;

use chrono::Local;

/// Local time stamp used in export file names
pub fn export_timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Replaces every character other than ASCII letters, digits, `-` and `_` with `_`
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::sanitize_file_name;

    #[test]
    fn sanitizes_force_names() {
        assert_eq!(sanitize_file_name("Strike Lance #2"), "Strike_Lance__2");
        assert_eq!(sanitize_file_name("alpha-1_b"), "alpha-1_b");
        assert_eq!(sanitize_file_name("../etc"), "___etc");
    }
}
