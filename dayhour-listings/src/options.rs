use serde::{Deserialize, Serialize};

use crate::hours::round_up_hour;
use crate::{Day, Hours};

/// `<option value="...">label</option>` for the day/hour selects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

pub fn day_options() -> Vec<SelectOption> {
    Day::iter()
        .map(|day| SelectOption::new(day.token(), day.to_string()))
        .collect()
}

pub(crate) fn hour_options(spans: impl Iterator<Item = Hours>) -> Vec<SelectOption> {
    let mut bounds: Option<(u16, u16)> = None;
    for hours in spans {
        bounds = Some(match bounds {
            None => (hours.start(), hours.end()),
            Some((min, max)) => (min.min(hours.start()), max.max(hours.end())),
        });
    }
    let Some((min, max)) = bounds else {
        return Vec::new();
    };

    (min / 100..round_up_hour(max))
        .map(|hour| SelectOption::new(hour.to_string(), hour_label(hour)))
        .collect()
}

fn hour_label(hour: u16) -> String {
    match hour {
        0 | 24 => "12am".to_string(),
        12 => "12pm".to_string(),
        1..=11 => format!("{hour}am"),
        13..=23 => format!("{}pm", hour - 12),
        _ => format!("{}am", hour - 24),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_use_numeric_tokens() {
        let options = day_options();
        assert_eq!(options.len(), 7);
        assert_eq!(options[0], SelectOption::new("0", "Sun"));
        assert_eq!(options[4], SelectOption::new("4", "Thurs"));
    }

    #[test]
    fn hours_span_earliest_start_to_latest_end() {
        let spans = [
            Hours::new(1600, 1830).unwrap(),
            Hours::new(1500, 1700).unwrap(),
            Hours::new(2200, 2500).unwrap(),
        ];
        let options = hour_options(spans.into_iter());
        let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["3pm", "4pm", "5pm", "6pm", "7pm", "8pm", "9pm", "10pm", "11pm", "12am"]
        );
        assert_eq!(options[0].value, "15");
        assert_eq!(options[9].value, "24");
    }

    #[test]
    fn no_happy_hours_means_no_hour_options() {
        assert!(hour_options(std::iter::empty()).is_empty());
    }
}
