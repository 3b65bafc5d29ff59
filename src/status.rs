//! Device status report (`GET /data.json`).

use serde::Deserialize;

use crate::constants::scenarios;
use crate::error::PageError;

/// Top-level body of the status endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StatusResponse {
    pub data: StatusData,
}

/// Firmware metadata reported by the device.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StatusData {
    /// Running firmware version, shown as-is
    #[serde(default)]
    pub version: String,
    /// Scenario tag; the firmware sends either a number or a string
    #[serde(default)]
    pub scenario: Option<ScenarioField>,
    /// Page background color, applied verbatim
    #[serde(default)]
    pub color: Option<String>,
}

/// Raw scenario value as found in the JSON body.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ScenarioField {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl ScenarioField {
    /// Integer value of the field, if it has one.
    ///
    /// Numbers are truncated toward zero; strings use their leading integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ScenarioField::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            ScenarioField::Number(_) => None,
            ScenarioField::Text(s) => parse_leading_int(s),
            ScenarioField::Other(_) => None,
        }
    }
}

/// Parse the integer at the start of a string.
///
/// Leading whitespace is skipped, one sign is allowed, and parsing stops at
/// the first non-digit. Returns `None` when no digit follows.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digit_count = digits.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return None;
    }

    let value = digits[..digit_count].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });

    Some(if negative { -value } else { value })
}

/// Firmware build scenario running on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scenario {
    /// Plain binary with an integrity tag
    #[default]
    Plain,
    /// Encrypted binary with an authentication tag
    Encrypted,
    /// Encrypted binary with a signature
    Signed,
}

impl Scenario {
    /// Map a scenario tag to a scenario. Anything but 2 or 3 is `Plain`.
    pub fn from_tag(tag: Option<i64>) -> Self {
        match tag {
            Some(2) => Scenario::Encrypted,
            Some(3) => Scenario::Signed,
            _ => Scenario::Plain,
        }
    }

    /// Description shown in the scenario paragraph.
    pub fn description(&self) -> &'static str {
        match self {
            Scenario::Plain => scenarios::PLAIN,
            Scenario::Encrypted => scenarios::ENCRYPTED,
            Scenario::Signed => scenarios::SIGNED,
        }
    }
}

impl StatusData {
    /// Scenario selected by the reported tag.
    pub fn scenario(&self) -> Scenario {
        Scenario::from_tag(self.scenario.as_ref().and_then(ScenarioField::as_int))
    }
}

impl StatusResponse {
    /// Parse a status body.
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert an already parsed JSON body.
    pub fn from_value(value: serde_json::Value) -> Result<Self, PageError> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Whether an HTTP status counts as success (2xx or 3xx).
pub fn is_success(status: u16) -> bool {
    (200..400).contains(&status)
}

/// Success check for the status request, which also accepts status 0
/// reported by local file loads.
pub fn is_status_fetch_success(status: u16) -> bool {
    status == 0 || is_success(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_scenario() {
        let status =
            StatusResponse::from_json(r##"{"data":{"version":"1.2.0","scenario":2,"color":"#336699"}}"##)
                .unwrap();
        assert_eq!(status.data.version, "1.2.0");
        assert_eq!(status.data.color.as_deref(), Some("#336699"));
        assert_eq!(status.data.scenario(), Scenario::Encrypted);
    }

    #[test]
    fn test_parse_string_scenario() {
        let status =
            StatusResponse::from_json(r##"{"data":{"version":"1.0","scenario":"3","color":"red"}}"##)
                .unwrap();
        assert_eq!(status.data.scenario(), Scenario::Signed);
    }

    #[test]
    fn test_unknown_scenario_falls_back_to_plain() {
        for body in [
            r##"{"data":{"version":"1","scenario":1}}"##,
            r##"{"data":{"version":"1","scenario":7}}"##,
            r##"{"data":{"version":"1","scenario":"abc"}}"##,
            r##"{"data":{"version":"1","scenario":null}}"##,
            r##"{"data":{"version":"1","scenario":true}}"##,
            r##"{"data":{"version":"1"}}"##,
        ] {
            let status = StatusResponse::from_json(body).unwrap();
            assert_eq!(status.data.scenario(), Scenario::Plain, "body: {}", body);
        }
    }

    #[test]
    fn test_fractional_scenario_truncates() {
        let status = StatusResponse::from_json(r##"{"data":{"scenario":2.9}}"##).unwrap();
        assert_eq!(status.data.scenario(), Scenario::Encrypted);
    }

    #[test]
    fn test_missing_data_is_an_error() {
        assert!(StatusResponse::from_json(r##"{"version":"1"}"##).is_err());
        assert!(StatusResponse::from_json("not json").is_err());
    }

    #[test]
    fn test_from_value_matches_from_json() {
        let body = r##"{"data":{"version":"2.0","scenario":"2","color":"#000"}}"##;
        let value: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(
            StatusResponse::from_value(value).unwrap(),
            StatusResponse::from_json(body).unwrap()
        );
        assert!(StatusResponse::from_value(serde_json::json!({"version": "1"})).is_err());
    }

    #[test]
    fn test_missing_version_is_empty() {
        let status = StatusResponse::from_json(r##"{"data":{"scenario":3}}"##).unwrap();
        assert_eq!(status.data.version, "");
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("2"), Some(2));
        assert_eq!(parse_leading_int("  3px"), Some(3));
        assert_eq!(parse_leading_int("+2"), Some(2));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("x2"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_scenario_descriptions() {
        assert_eq!(Scenario::from_tag(Some(2)).description(), scenarios::ENCRYPTED);
        assert_eq!(Scenario::from_tag(Some(3)).description(), scenarios::SIGNED);
        assert_eq!(Scenario::from_tag(None).description(), scenarios::PLAIN);
    }

    #[test]
    fn test_http_status_ranges() {
        assert!(is_success(200));
        assert!(is_success(302));
        assert!(!is_success(404));
        assert!(!is_success(0));
        assert!(is_status_fetch_success(0));
        assert!(!is_status_fetch_success(500));
    }
}
