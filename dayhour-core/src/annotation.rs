use serde::{Deserialize, Serialize};

/// Danh sách token gắn trên hàng/mốc giờ, khớp với selector của stylesheet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RowAnnotation {
    pub days: Vec<String>,
    pub hours: Vec<String>,
    pub daytimes: Vec<String>,
}

impl RowAnnotation {
    pub fn new<D, H, T>(days: D, hours: H, daytimes: T) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        H: IntoIterator,
        H::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            days: days.into_iter().map(Into::into).collect(),
            hours: hours.into_iter().map(Into::into).collect(),
            daytimes: daytimes.into_iter().map(Into::into).collect(),
        }
    }

    /// Chuỗi thuộc tính HTML: `data-days="..." data-hours="..." data-daytimes="..."`.
    pub fn to_html_attributes(&self) -> String {
        format!(
            r#"data-days="{}" data-hours="{}" data-daytimes="{}""#,
            escape_attribute(&self.days.join(" ")),
            escape_attribute(&self.hours.join(" ")),
            escape_attribute(&self.daytimes.join(" ")),
        )
    }
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}
