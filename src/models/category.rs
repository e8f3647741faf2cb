//! Expense categories
//!
//! The category set is closed: every expense carries exactly one of these
//! eleven labels, and aggregation always walks them in this order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed set of expense categories for creative projects and campaigns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpenseCategory {
    #[serde(rename = "Video Production")]
    VideoProduction,
    #[serde(rename = "Creative Services")]
    CreativeServices,
    #[serde(rename = "Equipment Rental")]
    EquipmentRental,
    #[serde(rename = "Software & Licenses")]
    SoftwareLicenses,
    #[serde(rename = "Talent & Crew")]
    TalentCrew,
    #[serde(rename = "Location & Studio")]
    LocationStudio,
    #[serde(rename = "Post-Production")]
    PostProduction,
    #[serde(rename = "Marketing & Advertising")]
    MarketingAdvertising,
    #[serde(rename = "Travel & Transportation")]
    TravelTransportation,
    #[serde(rename = "Client Entertainment")]
    ClientEntertainment,
    #[serde(rename = "Other")]
    Other,
}

impl ExpenseCategory {
    /// All categories, in display and aggregation order
    pub const ALL: [ExpenseCategory; 11] = [
        Self::VideoProduction,
        Self::CreativeServices,
        Self::EquipmentRental,
        Self::SoftwareLicenses,
        Self::TalentCrew,
        Self::LocationStudio,
        Self::PostProduction,
        Self::MarketingAdvertising,
        Self::TravelTransportation,
        Self::ClientEntertainment,
        Self::Other,
    ];

    /// Human-readable label, also used in persisted records
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VideoProduction => "Video Production",
            Self::CreativeServices => "Creative Services",
            Self::EquipmentRental => "Equipment Rental",
            Self::SoftwareLicenses => "Software & Licenses",
            Self::TalentCrew => "Talent & Crew",
            Self::LocationStudio => "Location & Studio",
            Self::PostProduction => "Post-Production",
            Self::MarketingAdvertising => "Marketing & Advertising",
            Self::TravelTransportation => "Travel & Transportation",
            Self::ClientEntertainment => "Client Entertainment",
            Self::Other => "Other",
        }
    }

    /// Position in [`ExpenseCategory::ALL`]
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    /// The next category in the fixed order, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous category in the fixed order, wrapping around
    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when a string names no category in the fixed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    /// Exact label match only
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
