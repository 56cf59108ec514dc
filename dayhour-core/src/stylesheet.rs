use std::fmt::Write;

use crate::{FilterConfig, FilterRule};

/// Sinh toàn bộ nội dung stylesheet cho một quy tắc.
///
/// Quy tắc xóa lọc cho ra chuỗi rỗng. Các quy tắc còn lại gồm một khối ẩn
/// hàng (`display: none`) và một khối làm mờ/gạch mốc giờ không khớp.
pub fn render_stylesheet(rule: &FilterRule, config: &FilterConfig) -> String {
    let (Some(attribute), Some(token)) = (rule.attribute(), rule.token()) else {
        return String::new();
    };

    let condition = format!(r#":not([{attribute}~="{}"])"#, escape_css_string(&token));
    let mut css = String::new();

    let _ = writeln!(css, "{}{condition} {{", config.row_selector);
    css.push_str("  display: none;\n");
    css.push_str("}\n");

    let _ = writeln!(css, "{}{condition} {{", config.marker_selector);
    for (property, value) in &config.muted_declarations {
        let _ = writeln!(css, "  {property}: {value};");
    }
    css.push_str("}\n");

    css
}

/// Escape giá trị để đặt trong chuỗi CSS có dấu nháy kép.
pub fn escape_css_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\0' => out.push('\u{FFFD}'),
            '\u{1}'..='\u{1f}' | '\u{7f}' => {
                let _ = write!(out, "\\{:x} ", ch as u32);
            }
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_tokens_pass_through() {
        assert_eq!(escape_css_string("mon-18"), "mon-18");
        assert_eq!(escape_css_string("thứ hai"), "thứ hai");
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        assert_eq!(escape_css_string(r#"a"b"#), r#"a\"b"#);
        assert_eq!(escape_css_string(r"a\b"), r"a\\b");
        assert_eq!(escape_css_string("\"]) * { x"), "\\\"]) * { x");
    }

    #[test]
    fn control_characters_use_hex_escapes() {
        assert_eq!(escape_css_string("a\nb"), "a\\a b");
        assert_eq!(escape_css_string("\u{7f}"), "\\7f ");
        assert_eq!(escape_css_string("\0"), "\u{FFFD}");
    }

    #[test]
    fn custom_muted_declarations_are_rendered_in_order() {
        let config = FilterConfig {
            muted_declarations: vec![("opacity".into(), "0.4".into())],
            ..FilterConfig::default()
        };
        let css = render_stylesheet(&FilterRule::Hour("9".into()), &config);
        assert_eq!(
            css,
            "tr.restaurant:not([data-hours~=\"9\"]) {\n  display: none;\n}\n\
             time.dayhour:not([data-hours~=\"9\"]) {\n  opacity: 0.4;\n}\n"
        );
    }
}
