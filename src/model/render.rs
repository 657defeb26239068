//! Render Binding
//!
//! Pure translation from a raw `DashboardPayload` into a fully-resolved
//! `RenderModel` with every loading/absent case made explicit. Components
//! render the model verbatim; nothing downstream touches the payload.

use crate::model::payload::{DashboardPayload, Indicator, IndicatorValue, TimePoint};
use crate::theme;

/// Maximum number of points a trend chart ever shows.
pub const MAX_TREND_POINTS: usize = 10;

/// The fixed trend series, in display order. Colors belong to the series
/// identity, not the data.
const TREND_SERIES: [(&str, &str); 4] = [
    ("ZAR/USD Rate", theme::GOLD),
    ("Repo Rate %", theme::GREEN),
    ("Inflation %", theme::AMBER),
    ("GDP Growth %", theme::BLUE),
];

/// Presentation-ready view of the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderModel {
    /// Payload not yet loaded; show a single loading indicator.
    Loading,
    Ready(DashboardView),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardView {
    /// One card per indicator, in server order.
    pub indicators: Vec<IndicatorView>,
    /// Exactly four entries, in the fixed declared order.
    pub trends: Vec<TrendView>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorView {
    pub name: String,
    /// Already formatted: numbers with two decimals, strings verbatim.
    pub value_text: String,
    pub unit: String,
    pub icon: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrendView {
    pub title: &'static str,
    pub color: &'static str,
    pub data: TrendData,
}

/// A bound series or an explicit empty-state marker. A chart with zero
/// points is never produced.
#[derive(Clone, Debug, PartialEq)]
pub enum TrendData {
    Series(Vec<TimePoint>),
    NoData,
}

/// Bind a payload to its render model.
///
/// `None` means "not loaded" and always yields `RenderModel::Loading`.
/// Binding borrows the payload and never mutates it, so it is idempotent.
pub fn bind(payload: Option<&DashboardPayload>) -> RenderModel {
    let payload = match payload {
        Some(p) => p,
        None => return RenderModel::Loading,
    };

    let indicators = payload.indicators.iter().map(bind_indicator).collect();

    let sources = [
        payload.exchange_history(),
        payload.repo_rate_history(),
        payload.cpi_history(),
        payload.gdp_growth_history(),
    ];
    let trends = TREND_SERIES
        .iter()
        .zip(sources)
        .map(|(&(title, color), source)| TrendView {
            title,
            color,
            data: bind_series(source),
        })
        .collect();

    RenderModel::Ready(DashboardView { indicators, trends })
}

fn bind_indicator(indicator: &Indicator) -> IndicatorView {
    IndicatorView {
        name: indicator.name.clone(),
        value_text: format_value(&indicator.value),
        unit: indicator.unit.clone(),
        icon: indicator.icon.clone(),
        description: indicator.description.clone(),
    }
}

/// Numbers get exactly two decimal places; strings pass through unchanged.
pub fn format_value(value: &IndicatorValue) -> String {
    match value {
        IndicatorValue::Number(n) => format!("{:.2}", n),
        IndicatorValue::Text(s) => s.clone(),
    }
}

/// Sort ascending by raw string comparison of the date field, then keep the
/// last `MAX_TREND_POINTS`. The lexicographic rule is load-bearing: dates
/// are opaque strings here, never parsed calendars.
fn bind_series(source: Option<&[TimePoint]>) -> TrendData {
    let points = match source {
        Some(points) if !points.is_empty() => points,
        _ => return TrendData::NoData,
    };

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));
    if sorted.len() > MAX_TREND_POINTS {
        sorted.drain(..sorted.len() - MAX_TREND_POINTS);
    }
    TrendData::Series(sorted)
}

/// Shorten a date label for the x-axis by dropping the century digits,
/// e.g. `2024-01-01` → `24-01-01`.
pub fn short_date(date: &str) -> &str {
    date.get(2..).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, value: f64) -> TimePoint {
        TimePoint {
            date: date.to_string(),
            value,
        }
    }

    #[test]
    fn test_none_payload_is_loading() {
        assert_eq!(bind(None), RenderModel::Loading);
    }

    #[test]
    fn test_empty_payload_binds_four_empty_trends() {
        let payload = DashboardPayload::default();
        let view = match bind(Some(&payload)) {
            RenderModel::Ready(view) => view,
            RenderModel::Loading => panic!("expected ready"),
        };
        assert!(view.indicators.is_empty());
        assert_eq!(view.trends.len(), 4);
        assert!(view.trends.iter().all(|t| t.data == TrendData::NoData));
        assert_eq!(view.trends[0].title, "ZAR/USD Rate");
        assert_eq!(view.trends[3].title, "GDP Growth %");
    }

    #[test]
    fn test_numeric_value_formats_two_decimals() {
        assert_eq!(format_value(&IndicatorValue::Number(42.5)), "42.50");
        assert_eq!(format_value(&IndicatorValue::Number(8.0)), "8.00");
    }

    #[test]
    fn test_string_value_passes_through() {
        assert_eq!(
            format_value(&IndicatorValue::Text("N/A".to_string())),
            "N/A"
        );
    }

    #[test]
    fn test_formatting_is_idempotent_on_payload() {
        let payload: DashboardPayload = serde_json::from_str(
            r#"{"indicators":[{"name":"Inflation","value":5.1,"unit":"%","icon":"📈","description":"CPI YoY"}]}"#,
        )
        .unwrap();
        let first = bind(Some(&payload));
        let second = bind(Some(&payload));
        assert_eq!(first, second);
        // Source model untouched.
        assert_eq!(payload.indicators[0].value, IndicatorValue::Number(5.1));
    }

    #[test]
    fn test_long_series_keeps_ten_greatest_dates() {
        let points: Vec<TimePoint> = (1..=14)
            .map(|d| point(&format!("2024-01-{:02}", d), d as f64))
            .collect();
        match bind_series(Some(&points)) {
            TrendData::Series(bound) => {
                assert_eq!(bound.len(), MAX_TREND_POINTS);
                assert_eq!(bound[0].date, "2024-01-05");
                assert_eq!(bound[9].date, "2024-01-14");
            }
            TrendData::NoData => panic!("expected series"),
        }
    }

    #[test]
    fn test_unsorted_series_sorts_ascending() {
        let points = vec![
            point("2024-03-01", 3.0),
            point("2024-01-01", 1.0),
            point("2024-02-01", 2.0),
        ];
        match bind_series(Some(&points)) {
            TrendData::Series(bound) => {
                let dates: Vec<&str> = bound.iter().map(|p| p.date.as_str()).collect();
                assert_eq!(dates, vec!["2024-01-01", "2024-02-01", "2024-03-01"]);
            }
            TrendData::NoData => panic!("expected series"),
        }
    }

    #[test]
    fn test_sort_is_raw_string_comparison() {
        // Bare years sort before full ISO dates of an earlier year; the
        // string rule is intentional, not a bug to fix with date parsing.
        let points = vec![point("2024-06-01", 1.0), point("2023", 2.0)];
        match bind_series(Some(&points)) {
            TrendData::Series(bound) => {
                assert_eq!(bound[0].date, "2023");
                assert_eq!(bound[1].date, "2024-06-01");
            }
            TrendData::NoData => panic!("expected series"),
        }
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let points = vec![
            point("2024-01-01", 1.0),
            point("2024-01-01", 2.0),
            point("2024-01-01", 3.0),
        ];
        match bind_series(Some(&points)) {
            TrendData::Series(bound) => {
                let values: Vec<f64> = bound.iter().map(|p| p.value).collect();
                assert_eq!(values, vec![1.0, 2.0, 3.0]);
            }
            TrendData::NoData => panic!("expected series"),
        }
    }

    #[test]
    fn test_absent_and_empty_series_are_no_data() {
        assert_eq!(bind_series(None), TrendData::NoData);
        assert_eq!(bind_series(Some(&[])), TrendData::NoData);
    }

    #[test]
    fn test_example_payload_scenario() {
        let payload: DashboardPayload = serde_json::from_str(
            r#"{
                "indicators": [
                    {"name":"Inflation","value":5.1,"unit":"%","icon":"📈","description":"CPI YoY"}
                ],
                "exchange_rate": {
                    "history": [
                        {"date":"2024-01-01","value":18.2},
                        {"date":"2024-02-01","value":18.5}
                    ]
                }
            }"#,
        )
        .unwrap();

        let view = match bind(Some(&payload)) {
            RenderModel::Ready(view) => view,
            RenderModel::Loading => panic!("expected ready"),
        };

        assert_eq!(view.indicators.len(), 1);
        assert_eq!(view.indicators[0].value_text, "5.10");
        assert_eq!(view.indicators[0].unit, "%");

        match &view.trends[0].data {
            TrendData::Series(points) => {
                assert_eq!(points.len(), 2);
                assert_eq!(points[0].date, "2024-01-01");
                assert_eq!(points[1].date, "2024-02-01");
            }
            TrendData::NoData => panic!("expected exchange-rate series"),
        }
        for trend in &view.trends[1..] {
            assert_eq!(trend.data, TrendData::NoData);
        }
    }

    #[test]
    fn test_short_date_drops_century() {
        assert_eq!(short_date("2024-01-15"), "24-01-15");
        assert_eq!(short_date("24"), "");
        assert_eq!(short_date("9"), "9");
    }
}
