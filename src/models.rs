use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One scheduled clinical adjustment, as stored in the remote `adjustments`
/// table. Rows are created by an external process; this app only reads them
/// and flips `completed`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Adjustment {
    pub id: i64,
    pub scheduled_at: DateTime<Utc>,
    pub method: Method,
    pub red: u32,
    pub orange: u32,
    pub yellow: u32,
    pub green: u32,
    pub blue: u32,
    pub purple: u32,
    pub completed: bool,
}

/// Latest row of the remote `patients` table; read-only snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: i64,
    pub patient_id: String,
    pub case_id: String,
    pub case_description: String,
    pub bone_type: String,
    pub side: String,
    pub created_at: DateTime<Utc>,
}

/// Categorical tag stored on every adjustment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Method {
    Clicks,
    Length,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Clicks => "Clicks",
            Method::Length => "Length",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active method filter for the board. `All` is a view-only wildcard and is
/// never stored on a row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MethodFilter {
    #[default]
    #[serde(rename = "all")]
    All,
    Clicks,
    Length,
}

impl MethodFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            MethodFilter::All => "all",
            MethodFilter::Clicks => "Clicks",
            MethodFilter::Length => "Length",
        }
    }

    /// The stored method this filter narrows to, or `None` for the wildcard.
    pub fn method(self) -> Option<Method> {
        match self {
            MethodFilter::All => None,
            MethodFilter::Clicks => Some(Method::Clicks),
            MethodFilter::Length => Some(Method::Length),
        }
    }

    pub fn matches(self, method: Method) -> bool {
        self.method().is_none_or(|wanted| wanted == method)
    }
}

impl fmt::Display for MethodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MethodFilter {
    type Err = UnknownFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" => Ok(MethodFilter::All),
            "Clicks" => Ok(MethodFilter::Clicks),
            "Length" => Ok(MethodFilter::Length),
            other => Err(UnknownFilter(other.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct UnknownFilter(pub String);

impl fmt::Display for UnknownFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown filter '{}'", self.0)
    }
}

impl std::error::Error for UnknownFilter {}

#[derive(Debug, Deserialize)]
pub struct FilterForm {
    pub method: String,
}

#[derive(Debug, Deserialize)]
pub struct CompleteRequest {
    pub id: i64,
}

/// JSON mirror of the rendered board.
#[derive(Debug, Serialize, Deserialize)]
pub struct BoardResponse {
    pub filter: MethodFilter,
    pub patient: Option<Patient>,
    pub pending: Vec<Adjustment>,
    pub completed: Vec<Adjustment>,
    pub tomorrow: Vec<Adjustment>,
    pub show_tomorrow: bool,
    pub notices: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_parses_known_values_only() {
        assert_eq!("all".parse::<MethodFilter>().unwrap(), MethodFilter::All);
        assert_eq!(
            "Clicks".parse::<MethodFilter>().unwrap(),
            MethodFilter::Clicks
        );
        assert_eq!(
            "Length".parse::<MethodFilter>().unwrap(),
            MethodFilter::Length
        );
        assert!("clicks".parse::<MethodFilter>().is_err());
        assert!("everything".parse::<MethodFilter>().is_err());
    }

    #[test]
    fn wildcard_matches_every_method() {
        assert!(MethodFilter::All.matches(Method::Clicks));
        assert!(MethodFilter::All.matches(Method::Length));
        assert!(MethodFilter::Clicks.matches(Method::Clicks));
        assert!(!MethodFilter::Clicks.matches(Method::Length));
    }

    #[test]
    fn filter_serializes_like_the_form_values() {
        assert_eq!(
            serde_json::to_string(&MethodFilter::All).unwrap(),
            "\"all\""
        );
        assert_eq!(
            serde_json::to_string(&MethodFilter::Clicks).unwrap(),
            "\"Clicks\""
        );
    }
}
