//! Restaurant listings JSON to table annotations and select options.

mod hours;
mod options;

use std::collections::BTreeSet;
use std::fmt::{self, Display};

use chrono::NaiveDate;
use dayhour_core::{FilterError, RowAnnotation};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use hours::Hours;
pub use options::{day_options, SelectOption};

/// Parse listings from a JSON string.
pub fn parse_listings_str(listings_json: &str) -> Result<Listings, FilterError> {
    let value: Value =
        serde_json::from_str(listings_json).map_err(|err| FilterError::Parse(err.to_string()))?;
    parse_listings_value(&value)
}

/// Parse listings from a `serde_json::Value`.
pub fn parse_listings_value(listings: &Value) -> Result<Listings, FilterError> {
    if listings.get("restaurants").is_none() {
        return Err(FilterError::Parse(
            "Expected a top-level `restaurants` array".to_string(),
        ));
    }
    Listings::deserialize(listings).map_err(|err| FilterError::Parse(err.to_string()))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listings {
    pub restaurants: Vec<Restaurant>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    pub name: String,
    pub url: String,
    /// Use with `https://maps.app.goo.gl/{map_id}`.
    #[serde(default)]
    pub map_id: Option<String>,
    #[serde(default)]
    pub instagram_id: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub verified: NaiveDate,
    pub kind: Kind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Byob,
    Other,
    Closed,
    HappyHour {
        description: Vec<String>,
        #[serde(default)]
        menu_url: Option<String>,
        happytimes: HappyTimes,
    },
}

/// Restaurants grouped the way the listing page shows them.
#[derive(Debug, Default)]
pub struct ListingGroups<'a> {
    pub happy_hour: Vec<&'a Restaurant>,
    pub byob: Vec<&'a Restaurant>,
    pub other: Vec<&'a Restaurant>,
    pub closed: Vec<&'a Restaurant>,
}

impl Listings {
    pub fn by_kind(&self) -> ListingGroups<'_> {
        let mut groups = ListingGroups::default();
        for restaurant in &self.restaurants {
            match restaurant.kind {
                Kind::HappyHour { .. } => groups.happy_hour.push(restaurant),
                Kind::Byob => groups.byob.push(restaurant),
                Kind::Other => groups.other.push(restaurant),
                Kind::Closed => groups.closed.push(restaurant),
            }
        }
        groups
    }

    /// Hour select options spanning the earliest start to the latest end.
    pub fn hour_options(&self) -> Vec<SelectOption> {
        let spans = self
            .restaurants
            .iter()
            .filter_map(Restaurant::happytimes)
            .flat_map(|times| times.0.iter().map(|entry| entry.hours));
        options::hour_options(spans)
    }
}

impl Restaurant {
    pub fn happytimes(&self) -> Option<&HappyTimes> {
        match &self.kind {
            Kind::HappyHour { happytimes, .. } => Some(happytimes),
            _ => None,
        }
    }

    /// Row annotation; restaurants without happy hours carry empty token lists.
    pub fn annotation(&self) -> RowAnnotation {
        self.happytimes()
            .map(HappyTimes::annotation)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HappyTimes(pub Vec<DayHours>);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayHours {
    pub days: DaySpan,
    pub hours: Hours,
}

/// A single day, or an inclusive range that wraps past Saturday.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DaySpan {
    Single(Day),
    Range(Day, Day),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Sun = 0,
    Mon = 1,
    Tues = 2,
    Wed = 3,
    Thurs = 4,
    Fri = 5,
    Sat = 6,
}

/// One inline time marker: its label and its own token lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeMarker {
    pub label: String,
    pub annotation: RowAnnotation,
}

impl HappyTimes {
    /// Sorted, deduplicated tokens for the whole restaurant row.
    pub fn annotation(&self) -> RowAnnotation {
        annotate(self.0.iter())
    }

    pub fn markers(&self) -> Vec<TimeMarker> {
        self.0
            .iter()
            .map(|entry| TimeMarker {
                label: entry.to_string(),
                annotation: annotate(std::iter::once(entry)),
            })
            .collect()
    }

    pub fn human_daytimes(&self) -> String {
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn annotate<'a>(entries: impl Iterator<Item = &'a DayHours> + Clone) -> RowAnnotation {
    let days = entries
        .clone()
        .flat_map(|entry| entry.days.days())
        .collect::<BTreeSet<_>>();
    let hours = entries
        .clone()
        .flat_map(|entry| entry.hours.to_range())
        .collect::<BTreeSet<_>>();
    let daytimes = entries
        .flat_map(|entry| {
            let range = entry.hours.to_range();
            entry
                .days
                .days()
                .into_iter()
                .flat_map(move |day| range.clone().map(move |hour| (day, hour)))
        })
        .collect::<BTreeSet<_>>();

    RowAnnotation::new(
        days.into_iter().map(Day::token),
        hours.into_iter().map(|hour| hour.to_string()),
        daytimes
            .into_iter()
            .map(|(day, hour)| format!("{}-{hour}", day.token())),
    )
}

impl DaySpan {
    pub fn days(&self) -> Vec<Day> {
        match *self {
            DaySpan::Single(day) => vec![day],
            DaySpan::Range(from, to) if from == to => vec![from],
            DaySpan::Range(from, to) if from < to => Day::iter()
                .skip(from as usize)
                .take_while(|day| *day <= to)
                .collect(),
            DaySpan::Range(from, to) => Day::iter()
                .skip(from as usize)
                .chain(Day::iter().take_while(|day| *day <= to))
                .collect(),
        }
    }
}

impl Day {
    pub fn iter() -> impl Iterator<Item = Day> + Clone {
        [
            Day::Sun,
            Day::Mon,
            Day::Tues,
            Day::Wed,
            Day::Thurs,
            Day::Fri,
            Day::Sat,
        ]
        .into_iter()
    }

    /// Token used in `data-days`/`data-daytimes` and as the select value.
    pub fn token(self) -> String {
        (self as u8).to_string()
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Day::Sun => "Sun",
            Day::Mon => "Mon",
            Day::Tues => "Tues",
            Day::Wed => "Wed",
            Day::Thurs => "Thurs",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
        };
        f.write_str(label)
    }
}

impl Display for DayHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.days {
            DaySpan::Single(day) => write!(f, "{day} {}", self.hours),
            DaySpan::Range(from, to) => write!(f, "{from}-{to} {}", self.hours),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(day: Day, start: u16, end: u16) -> DayHours {
        DayHours {
            days: DaySpan::Single(day),
            hours: Hours::new(start, end).unwrap(),
        }
    }

    fn range(from: Day, to: Day, start: u16, end: u16) -> DayHours {
        DayHours {
            days: DaySpan::Range(from, to),
            hours: Hours::new(start, end).unwrap(),
        }
    }

    #[test]
    fn happytimes_attributes() {
        assert_eq!(
            HappyTimes(vec![single(Day::Wed, 1300, 1500)])
                .annotation()
                .to_html_attributes(),
            r#"data-days="3" data-hours="13 14" data-daytimes="3-13 3-14""#
        );
        assert_eq!(
            HappyTimes(vec![
                single(Day::Wed, 1300, 1500),
                range(Day::Wed, Day::Fri, 1400, 1600),
            ])
            .annotation()
            .to_html_attributes(),
            r#"data-days="3 4 5" data-hours="13 14 15" data-daytimes="3-13 3-14 3-15 4-14 4-15 5-14 5-15""#
        );
        assert_eq!(
            HappyTimes(vec![single(Day::Mon, 1330, 1530)])
                .annotation()
                .to_html_attributes(),
            r#"data-days="1" data-hours="14 15" data-daytimes="1-14 1-15""#
        );
    }

    #[test]
    fn day_ranges_wrap_past_saturday() {
        assert_eq!(
            DaySpan::Range(Day::Mon, Day::Thurs).days(),
            vec![Day::Mon, Day::Tues, Day::Wed, Day::Thurs]
        );
        assert_eq!(
            DaySpan::Range(Day::Sat, Day::Sun).days(),
            vec![Day::Sat, Day::Sun]
        );
        assert_eq!(
            DaySpan::Range(Day::Fri, Day::Sun).days(),
            vec![Day::Fri, Day::Sat, Day::Sun]
        );
        assert_eq!(DaySpan::Range(Day::Mon, Day::Mon).days(), vec![Day::Mon]);
    }

    #[test]
    fn markers_carry_their_own_tokens() {
        let times = HappyTimes(vec![
            single(Day::Mon, 1600, 1800),
            range(Day::Wed, Day::Fri, 1600, 1700),
        ]);
        let markers = times.markers();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].label, "Mon 4:00pm-6:00pm");
        assert_eq!(markers[0].annotation.daytimes, vec!["1-16", "1-17"]);
        assert_eq!(markers[1].label, "Wed-Fri 4:00pm-5:00pm");
        assert_eq!(markers[1].annotation.days, vec!["3", "4", "5"]);
        assert_eq!(
            times.human_daytimes(),
            "Mon 4:00pm-6:00pm, Wed-Fri 4:00pm-5:00pm"
        );
    }

    #[test]
    fn day_spans_deserialize_from_string_or_pair() {
        let entry: DayHours =
            serde_json::from_str(r#"{"days": ["fri", "sun"], "hours": [2300, 2500]}"#).unwrap();
        assert_eq!(entry.days, DaySpan::Range(Day::Fri, Day::Sun));
        let entry: DayHours =
            serde_json::from_str(r#"{"days": "tues", "hours": [1600, 1800]}"#).unwrap();
        assert_eq!(entry.days, DaySpan::Single(Day::Tues));
    }

    #[test]
    fn missing_restaurants_is_a_parse_error() {
        assert!(matches!(
            parse_listings_str(r#"{"places": []}"#),
            Err(FilterError::Parse(_))
        ));
        assert!(matches!(
            parse_listings_str("not json"),
            Err(FilterError::Parse(_))
        ));
    }
}
