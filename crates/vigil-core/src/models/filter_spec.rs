//! Filter specification applied by the aggregation engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Filters applied to a record snapshot before aggregation.
///
/// The default spec passes every record through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Inclusive lower bound on `deviation_time`, date granularity.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on `deviation_time`, date granularity.
    pub date_to: Option<NaiveDate>,
    pub system: SystemFilter,
    pub month: MonthFilter,
    pub category: CategoryFilter,
    /// Keep only records whose status contains `pending`
    /// (case-insensitive).
    pub pending_only: bool,
}

impl FilterSpec {
    /// True when any time-based constraint is active, in which case
    /// records without a parsed `deviation_time` are excluded.
    pub fn is_time_windowed(&self) -> bool {
        self.date_from.is_some()
            || self.date_to.is_some()
            || !matches!(self.month, MonthFilter::All)
    }
}

/// System (affiliate) selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemFilter {
    #[default]
    All,
    /// Exact match on the normalized system name.
    Only(String),
}

/// Month bucket selection, keyed as `"<FullMonthName> <FourDigitYear>"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthFilter {
    #[default]
    All,
    Month(String),
}

/// Keyword classes over the cause tag name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Energy,
    Production,
    Environment,
}

impl CategoryFilter {
    /// Case-insensitive keyword match against a cause tag name.
    pub fn matches(self, cause_tag_name: &str) -> bool {
        let keywords: &[&str] = match self {
            CategoryFilter::All => return true,
            CategoryFilter::Energy => &["energy"],
            CategoryFilter::Production => {
                &["production", "throughput", "rate", "capacity", "output"]
            }
            CategoryFilter::Environment => {
                &["environment", "emission", "flare", "co2", "pollution"]
            }
        };
        let tag = cause_tag_name.to_lowercase();
        keywords.iter().any(|k| tag.contains(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_is_all_pass() {
        let spec = FilterSpec::default();
        assert_eq!(spec.system, SystemFilter::All);
        assert_eq!(spec.month, MonthFilter::All);
        assert!(!spec.pending_only);
        assert!(!spec.is_time_windowed());
    }

    #[test]
    fn month_selection_makes_spec_time_windowed() {
        let spec = FilterSpec {
            month: MonthFilter::Month("March 2024".to_string()),
            ..FilterSpec::default()
        };
        assert!(spec.is_time_windowed());
    }

    #[test]
    fn category_keywords_match_case_insensitively() {
        assert!(CategoryFilter::Energy.matches("Energy Consumption High"));
        assert!(CategoryFilter::Production.matches("throughput drop"));
        assert!(CategoryFilter::Environment.matches("CO2 Emission"));
        assert!(!CategoryFilter::Energy.matches("Throughput"));
        assert!(CategoryFilter::All.matches("anything"));
    }
}
