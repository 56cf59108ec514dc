use serde::{Deserialize, Serialize};

use crate::RowAnnotation;

/// Giá trị hiện tại của hai control; chuỗi rỗng nghĩa là không lọc.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterState {
    pub day: String,
    pub hour: String,
}

impl FilterState {
    pub fn new(day: impl Into<String>, hour: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            hour: hour.into(),
        }
    }

    /// Không có chiều nào đang được lọc.
    pub fn is_clear(&self) -> bool {
        self.day.is_empty() && self.hour.is_empty()
    }

    /// Khóa `"<day>-<hour>"`, giữ nguyên cả phần rỗng (ví dụ `"-18"`).
    pub fn dayhour_key(&self) -> String {
        format!("{}-{}", self.day, self.hour)
    }

    pub fn rule(&self) -> FilterRule {
        FilterRule::from(self)
    }
}

/// Một trong bốn quy tắc loại trừ lẫn nhau, chọn theo `(day rỗng, hour rỗng)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRule {
    Clear,
    Day(String),
    Hour(String),
    DayHour { day: String, hour: String },
}

impl From<&FilterState> for FilterRule {
    fn from(state: &FilterState) -> Self {
        match (state.day.is_empty(), state.hour.is_empty()) {
            (true, true) => FilterRule::Clear,
            (false, true) => FilterRule::Day(state.day.clone()),
            (true, false) => FilterRule::Hour(state.hour.clone()),
            (false, false) => FilterRule::DayHour {
                day: state.day.clone(),
                hour: state.hour.clone(),
            },
        }
    }
}

impl FilterRule {
    /// Thuộc tính `data-*` được so khớp, `None` với quy tắc xóa lọc.
    pub fn attribute(&self) -> Option<&'static str> {
        match self {
            FilterRule::Clear => None,
            FilterRule::Day(_) => Some("data-days"),
            FilterRule::Hour(_) => Some("data-hours"),
            FilterRule::DayHour { .. } => Some("data-daytimes"),
        }
    }

    /// Token cần có trong danh sách của thuộc tính.
    pub fn token(&self) -> Option<String> {
        match self {
            FilterRule::Clear => None,
            FilterRule::Day(day) => Some(day.clone()),
            FilterRule::Hour(hour) => Some(hour.clone()),
            FilterRule::DayHour { day, hour } => Some(format!("{day}-{hour}")),
        }
    }

    /// Đánh giá giống selector `[attr~="token"]`: token có khoảng trắng không khớp gì.
    pub fn matches(&self, annotation: &RowAnnotation) -> bool {
        let tokens = match self {
            FilterRule::Clear => return true,
            FilterRule::Day(_) => &annotation.days,
            FilterRule::Hour(_) => &annotation.hours,
            FilterRule::DayHour { .. } => &annotation.daytimes,
        };
        let Some(token) = self.token() else {
            return true;
        };
        if token.chars().any(char::is_whitespace) {
            return false;
        }
        tokens.iter().any(|candidate| *candidate == token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_cases_partition_the_input_space() {
        let values = ["", "mon"];
        let hours = ["", "18"];
        let mut seen = Vec::new();
        for day in values {
            for hour in hours {
                let rule = FilterState::new(day, hour).rule();
                let expected = match (day.is_empty(), hour.is_empty()) {
                    (true, true) => matches!(rule, FilterRule::Clear),
                    (false, true) => matches!(rule, FilterRule::Day(_)),
                    (true, false) => matches!(rule, FilterRule::Hour(_)),
                    (false, false) => matches!(rule, FilterRule::DayHour { .. }),
                };
                assert!(expected, "unexpected rule {rule:?} for ({day:?}, {hour:?})");
                seen.push(rule.attribute());
            }
        }
        assert_eq!(
            seen,
            vec![
                None,
                Some("data-hours"),
                Some("data-days"),
                Some("data-daytimes")
            ]
        );
    }

    #[test]
    fn combined_token_joins_day_and_hour() {
        let rule = FilterState::new("mon", "18").rule();
        assert_eq!(rule.token().as_deref(), Some("mon-18"));
    }

    #[test]
    fn dayhour_key_keeps_empty_parts() {
        assert_eq!(FilterState::new("", "").dayhour_key(), "-");
        assert_eq!(FilterState::new("3", "").dayhour_key(), "3-");
        assert!(FilterState::default().is_clear());
    }

    #[test]
    fn matches_uses_whole_tokens_only() {
        let row = RowAnnotation::new(["1", "3"], ["16", "17"], ["1-16", "1-17", "3-16"]);
        assert!(FilterRule::Day("3".into()).matches(&row));
        assert!(!FilterRule::Day("2".into()).matches(&row));
        assert!(!FilterRule::Hour("1".into()).matches(&row));
        assert!(FilterRule::DayHour {
            day: "3".into(),
            hour: "16".into()
        }
        .matches(&row));
        assert!(!FilterRule::DayHour {
            day: "3".into(),
            hour: "17".into()
        }
        .matches(&row));
        assert!(!FilterRule::Day("1 3".into()).matches(&row));
        assert!(FilterRule::Clear.matches(&RowAnnotation::default()));
    }
}
