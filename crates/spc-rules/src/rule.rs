//! The eight run rules and their fixed window geometry

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Western Electric / Nelson pattern rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// A single point strictly outside the control limits
    BeyondLimits,
    /// 2 of 3 consecutive points in zone A or beyond, either side
    ZoneA,
    /// 4 of 5 consecutive points in zone B or beyond
    ZoneB,
    /// 7 consecutive points strictly on one side of the center line
    ZoneC,
    /// 7 consecutive points steadily increasing or decreasing
    Trend,
    /// 8 consecutive points with none inside zone C
    Mixture,
    /// 15 consecutive points inside zone C
    Stratification,
    /// 14 consecutive points alternating about the center line
    Overcontrol,
}

impl Rule {
    /// Every rule, in evaluation order
    pub const ALL: [Rule; 8] = [
        Rule::BeyondLimits,
        Rule::ZoneA,
        Rule::ZoneB,
        Rule::ZoneC,
        Rule::Trend,
        Rule::Mixture,
        Rule::Stratification,
        Rule::Overcontrol,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Rule::BeyondLimits => "beyond_limits",
            Rule::ZoneA => "zone_a",
            Rule::ZoneB => "zone_b",
            Rule::ZoneC => "zone_c",
            Rule::Trend => "trend",
            Rule::Mixture => "mixture",
            Rule::Stratification => "stratification",
            Rule::Overcontrol => "overcontrol",
        }
    }

    /// Number of consecutive points one evaluation of the rule looks at
    pub fn window_size(&self) -> usize {
        match self {
            Rule::BeyondLimits => 1,
            Rule::ZoneA => 3,
            Rule::ZoneB => 5,
            Rule::ZoneC => 7,
            Rule::Trend => 7,
            Rule::Mixture => 8,
            Rule::Stratification => 15,
            Rule::Overcontrol => 14,
        }
    }

    /// Whether the rule is defined relative to control limits
    pub fn needs_limits(&self) -> bool {
        !matches!(self, Rule::Trend)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Rule::BeyondLimits => "point beyond the control limits",
            Rule::ZoneA => "2 of 3 points in zone A or beyond",
            Rule::ZoneB => "4 of 5 points in zone B or beyond",
            Rule::ZoneC => "7 consecutive points on one side of the center line",
            Rule::Trend => "7 points trending up or down",
            Rule::Mixture => "8 consecutive points outside zone C",
            Rule::Stratification => "15 consecutive points inside zone C",
            Rule::Overcontrol => "14 points alternating about the center line",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
