//! Utility functions for markup generation

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    v_htmlescape::escape(text).to_string()
}
