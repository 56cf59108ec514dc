use std::convert::Infallible;

use crate::{render_stylesheet, FilterConfig, FilterRule, FilterState};

/// Nguồn giá trị của một control (select/input, hoặc mock khi test).
pub trait ControlSource {
    fn current_value(&self) -> String;
}

impl<F> ControlSource for F
where
    F: Fn() -> String,
{
    fn current_value(&self) -> String {
        self()
    }
}

/// Đích ghi stylesheet; mỗi lần ghi thay thế toàn bộ nội dung.
pub trait StyleSink {
    type Error;

    fn replace_text(&mut self, css: &str) -> Result<(), Self::Error>;
}

impl StyleSink for String {
    type Error = Infallible;

    fn replace_text(&mut self, css: &str) -> Result<(), Self::Error> {
        self.clear();
        self.push_str(css);
        Ok(())
    }
}

/// Giữ hai nguồn đầu vào và stylesheet duy nhất, tính lại khi có sự kiện `change`.
pub struct FilterController<C, S> {
    day: C,
    hour: C,
    sink: S,
    config: FilterConfig,
}

impl<C, S> FilterController<C, S>
where
    C: ControlSource,
    S: StyleSink,
{
    pub fn new(day: C, hour: C, sink: S, config: FilterConfig) -> Self {
        Self {
            day,
            hour,
            sink,
            config,
        }
    }

    /// Đọc giá trị hiện tại của cả hai control.
    pub fn state(&self) -> FilterState {
        FilterState::new(self.day.current_value(), self.hour.current_value())
    }

    /// Tính lại và thay toàn bộ stylesheet; trả về trạng thái vừa áp dụng.
    pub fn handle_change(&mut self) -> Result<FilterState, S::Error> {
        let state = self.state();
        let css = render_stylesheet(&FilterRule::from(&state), &self.config);
        self.sink.replace_text(&css)?;
        Ok(state)
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
