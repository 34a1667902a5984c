// File: crates/case-chart-core/src/region.rs
// Summary: The three charted regions, their data files and page containers.

use std::fmt;

/// Container that holds the overlay chart of all regions.
pub const COMBINED_CONTAINER: &str = "chart-container-combined";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Ny,
    Nj,
    Pa,
}

impl Region {
    /// Fixed order used by the combined chart and its palette.
    pub const ALL: [Region; 3] = [Region::Ny, Region::Nj, Region::Pa];

    pub const fn code(&self) -> &'static str {
        match self {
            Region::Ny => "NY",
            Region::Nj => "NJ",
            Region::Pa => "PA",
        }
    }

    /// Codes are matched exactly; anything else is not a region.
    pub fn from_code(code: &str) -> Option<Region> {
        Self::ALL.into_iter().find(|r| r.code() == code)
    }

    pub const fn data_file(&self) -> &'static str {
        match self {
            Region::Ny => "ny_data.json",
            Region::Nj => "nj_data.json",
            Region::Pa => "pa_data.json",
        }
    }

    pub fn container_id(&self) -> String {
        format!("chart-container-{}", self.code())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
