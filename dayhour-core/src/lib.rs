//! Logic lõi lọc bảng nhà hàng theo ngày/giờ bằng stylesheet sinh động.

mod annotation;
mod controller;
mod state;
mod stylesheet;

pub use annotation::RowAnnotation;
pub use controller::{ControlSource, FilterController, StyleSink};
pub use state::{FilterRule, FilterState};
pub use stylesheet::{escape_css_string, render_stylesheet};

use serde::{Deserialize, Serialize};

/// Cấu hình selector, id control và kiểu hiển thị khi lọc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterConfig {
    /// Id của control chọn ngày.
    pub day_control_id: String,
    /// Id của control chọn giờ.
    pub hour_control_id: String,
    /// Selector cho hàng bị ẩn khi không khớp.
    pub row_selector: String,
    /// Selector cho mốc giờ inline bị gạch khi không khớp.
    pub marker_selector: String,
    /// Các khai báo CSS áp dụng cho mốc giờ không khớp.
    pub muted_declarations: Vec<(String, String)>,
    /// Ghi giá trị đang chọn lên `data-selected-*` của phần tử gốc.
    pub mirror_dataset: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            day_control_id: "day".to_string(),
            hour_control_id: "hour".to_string(),
            row_selector: "tr.restaurant".to_string(),
            marker_selector: "time.dayhour".to_string(),
            muted_declarations: vec![
                ("background-color".to_string(), "#e5e7eb".to_string()),
                ("text-decoration".to_string(), "line-through".to_string()),
            ],
            mirror_dataset: false,
        }
    }
}

/// Lỗi chung của bộ lọc.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("Không tìm thấy control #{0}")]
    MissingControl(String),
    #[error("Giờ không hợp lệ: {0} (cần giờ 0-23 và phút 0-59)")]
    InvalidHours(u16),
    #[error("Không đọc được dữ liệu: {0}")]
    Parse(String),
    #[error("Lỗi khác: {0}")]
    Other(String),
}
