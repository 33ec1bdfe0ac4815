use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Purchasable visibility window for a listing.
///
/// The wire labels are fixed strings the pricing page, the extension
/// endpoint and the stored `duration_label` column all agree on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibilityWindow {
    #[serde(rename = "3_days")]
    ThreeDays,
    #[serde(rename = "7_days")]
    SevenDays,
    #[serde(rename = "2_weeks")]
    TwoWeeks,
    #[serde(rename = "3_weeks")]
    ThreeWeeks,
    #[serde(rename = "4_weeks")]
    FourWeeks,
}

#[derive(Error, Debug)]
#[error("Unknown visibility window: {0}")]
pub struct UnknownWindow(String);

impl VisibilityWindow {
    /// Window length in whole days.
    pub fn days(&self) -> i32 {
        match self {
            VisibilityWindow::ThreeDays => 3,
            VisibilityWindow::SevenDays => 7,
            VisibilityWindow::TwoWeeks => 14,
            VisibilityWindow::ThreeWeeks => 21,
            VisibilityWindow::FourWeeks => 28,
        }
    }

    /// The wire label stored on the listing row.
    pub fn label(&self) -> &'static str {
        match self {
            VisibilityWindow::ThreeDays => "3_days",
            VisibilityWindow::SevenDays => "7_days",
            VisibilityWindow::TwoWeeks => "2_weeks",
            VisibilityWindow::ThreeWeeks => "3_weeks",
            VisibilityWindow::FourWeeks => "4_weeks",
        }
    }
}

impl fmt::Display for VisibilityWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VisibilityWindow {
    type Err = UnknownWindow;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "3_days" => Ok(VisibilityWindow::ThreeDays),
            "7_days" => Ok(VisibilityWindow::SevenDays),
            "2_weeks" => Ok(VisibilityWindow::TwoWeeks),
            "3_weeks" => Ok(VisibilityWindow::ThreeWeeks),
            "4_weeks" => Ok(VisibilityWindow::FourWeeks),
            other => Err(UnknownWindow(other.to_string())),
        }
    }
}
