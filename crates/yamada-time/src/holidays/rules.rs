//! Policy switches for the holiday computation.
//!
//! Both switches default to the behaviour the holiday checker has always
//! shown: every fixed holiday applies to every year, and a Sunday holiday
//! only ever pushes its substitute onto the very next day.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use yamada_core::errors::{Error, Result};

/// How 振替休日 (substitute holidays) are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubstituteRule {
    /// Look at the day after the Sunday holiday only.  If that day is itself
    /// a holiday, no substitute is granted.
    #[default]
    NextDayOnly,
    /// Walk forward one day at a time until a day that is neither a holiday
    /// nor a Sunday is found (the rule in the national holiday act).
    Cascade,
}

/// Whether fixed holidays respect the year they were enacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HistoricalGating {
    /// Apply every fixed holiday to every year.
    #[default]
    Uniform,
    /// Drop holidays before their effective year (天皇誕生日 on Feb 23 from
    /// 2020, 山の日 from 2016).
    EffectiveFrom,
}

/// The full set of policy switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HolidayRules {
    /// Substitute-holiday placement.
    #[serde(rename = "substitute_rule")]
    pub substitute: SubstituteRule,
    /// Historical gating of fixed holidays.
    #[serde(rename = "historical_gating")]
    pub gating: HistoricalGating,
}

impl HolidayRules {
    /// Rules matching the national holiday act as closely as the tables
    /// allow: cascading substitutes and effective-year gating.
    pub fn statutory() -> Self {
        HolidayRules {
            substitute: SubstituteRule::Cascade,
            gating: HistoricalGating::EffectiveFrom,
        }
    }
}

impl FromStr for SubstituteRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "next-day-only" => Ok(SubstituteRule::NextDayOnly),
            "cascade" => Ok(SubstituteRule::Cascade),
            _ => Err(Error::parse(s, "substitute rule (next-day-only | cascade)")),
        }
    }
}

impl FromStr for HistoricalGating {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "uniform" => Ok(HistoricalGating::Uniform),
            "effective-from" => Ok(HistoricalGating::EffectiveFrom),
            _ => Err(Error::parse(s, "historical gating (uniform | effective-from)")),
        }
    }
}
