//! Dashboard Payload Model
//!
//! serde types for the aggregate JSON returned by `GET /dashboard`. Every
//! sub-path the backend may omit is defaulted so absence deserializes to an
//! explicit `None`/empty value instead of failing the whole payload.

use serde::Deserialize;

/// Aggregate dashboard payload.
///
/// The four trend series live at fixed paths mirroring the backend's shape:
/// `exchange_rate.history`, `sarb.repo_rate.history`, `inflation.cpi.history`
/// and `gdp.gdp_growth.history`. Any of them may be missing or `{}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DashboardPayload {
    #[serde(default)]
    pub indicators: Vec<Indicator>,
    #[serde(default)]
    pub exchange_rate: Option<SeriesNode>,
    #[serde(default)]
    pub sarb: Option<SarbNode>,
    #[serde(default)]
    pub inflation: Option<InflationNode>,
    #[serde(default)]
    pub gdp: Option<GdpNode>,
}

/// A single named economic metric with its current reading.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Indicator {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: IndicatorValue,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
}

/// An indicator value is either a number or a pass-through string
/// (the backend sends `"N/A"` when an upstream source is down).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IndicatorValue {
    Number(f64),
    Text(String),
}

impl Default for IndicatorValue {
    fn default() -> Self {
        IndicatorValue::Text("—".to_string())
    }
}

/// One observation in a trend series. `date` is an opaque, lexicographically
/// sortable string; the UI never parses it as a calendar date.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TimePoint {
    pub date: String,
    pub value: f64,
}

/// A node holding a `history` sequence, e.g. `exchange_rate`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SeriesNode {
    #[serde(default)]
    pub history: Vec<TimePoint>,
}

/// Central-bank sub-object carrying the policy rate series.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SarbNode {
    #[serde(default)]
    pub repo_rate: Option<SeriesNode>,
}

/// Inflation sub-object carrying the consumer price index series.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct InflationNode {
    #[serde(default)]
    pub cpi: Option<SeriesNode>,
}

/// GDP sub-object carrying the growth series.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GdpNode {
    #[serde(default)]
    pub gdp_growth: Option<SeriesNode>,
}

impl DashboardPayload {
    /// `exchange_rate.history`, if present.
    pub fn exchange_history(&self) -> Option<&[TimePoint]> {
        self.exchange_rate.as_ref().map(|n| n.history.as_slice())
    }

    /// `sarb.repo_rate.history`, if present.
    pub fn repo_rate_history(&self) -> Option<&[TimePoint]> {
        self.sarb
            .as_ref()
            .and_then(|n| n.repo_rate.as_ref())
            .map(|n| n.history.as_slice())
    }

    /// `inflation.cpi.history`, if present.
    pub fn cpi_history(&self) -> Option<&[TimePoint]> {
        self.inflation
            .as_ref()
            .and_then(|n| n.cpi.as_ref())
            .map(|n| n.history.as_slice())
    }

    /// `gdp.gdp_growth.history`, if present.
    pub fn gdp_growth_history(&self) -> Option<&[TimePoint]> {
        self.gdp
            .as_ref()
            .and_then(|n| n.gdp_growth.as_ref())
            .map(|n| n.history.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_deserializes_number_or_string() {
        let n: IndicatorValue = serde_json::from_str("18.25").unwrap();
        assert_eq!(n, IndicatorValue::Number(18.25));

        let s: IndicatorValue = serde_json::from_str("\"N/A\"").unwrap();
        assert_eq!(s, IndicatorValue::Text("N/A".to_string()));
    }

    #[test]
    fn test_empty_object_deserializes() {
        let payload: DashboardPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.indicators.is_empty());
        assert!(payload.exchange_history().is_none());
        assert!(payload.repo_rate_history().is_none());
        assert!(payload.cpi_history().is_none());
        assert!(payload.gdp_growth_history().is_none());
    }

    #[test]
    fn test_partial_sub_objects_default() {
        // The backend replaces a failed upstream fetch with `{}`.
        let payload: DashboardPayload =
            serde_json::from_str(r#"{"exchange_rate":{},"sarb":{}}"#).unwrap();
        assert_eq!(payload.exchange_history(), Some(&[][..]));
        assert!(payload.repo_rate_history().is_none());
    }

    #[test]
    fn test_nested_history_path() {
        let payload: DashboardPayload = serde_json::from_str(
            r#"{"sarb":{"repo_rate":{"current":8.0,"history":[{"date":"2024-11-21","value":8.0}]}}}"#,
        )
        .unwrap();
        let history = payload.repo_rate_history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].date, "2024-11-21");
        assert_eq!(history[0].value, 8.0);
    }

    #[test]
    fn test_indicator_missing_fields_default() {
        let ind: Indicator = serde_json::from_str(r#"{"name":"Repo Rate"}"#).unwrap();
        assert_eq!(ind.name, "Repo Rate");
        assert_eq!(ind.value, IndicatorValue::Text("—".to_string()));
        assert!(ind.unit.is_empty());
    }
}
