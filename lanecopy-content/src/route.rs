//! Route identity supplied by the rendering layer.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::seed::route_seed;

/// The two supported shipping modalities. Each country entry carries an
/// independent rule list per mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FreightMode {
    Sea,
    Air,
}

impl FreightMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sea => "sea",
            Self::Air => "air",
        }
    }
}

impl std::fmt::Display for FreightMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a mode string that is neither `"sea"` nor `"air"`.
///
/// An unrecognized mode is a caller bug, surfaced at the string boundary
/// instead of silently defaulting to one of the lists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown freight mode {0:?}, expected \"sea\" or \"air\"")]
pub struct ParseFreightModeError(pub String);

impl FromStr for FreightMode {
    type Err = ParseFreightModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("sea") {
            Ok(Self::Sea)
        } else if s.eq_ignore_ascii_case("air") {
            Ok(Self::Air)
        } else {
            Err(ParseFreightModeError(s.to_string()))
        }
    }
}

/// A route as the page layer hands it over. Borrowed and throwaway: routes
/// only derive seeds and resolve tables, they are never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route<'a> {
    pub origin_city: &'a str,
    pub destination_city: &'a str,
    pub destination_country: &'a str,
    pub mode: FreightMode,
}

impl<'a> Route<'a> {
    #[must_use]
    pub const fn new(
        origin_city: &'a str,
        destination_city: &'a str,
        destination_country: &'a str,
        mode: FreightMode,
    ) -> Self {
        Self {
            origin_city,
            destination_city,
            destination_country,
            mode,
        }
    }

    /// Seed for one content surface of this route.
    #[must_use]
    pub fn seed(&self, salt: &str) -> u32 {
        route_seed(self.origin_city, self.destination_city, salt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_both_cases() {
        assert_eq!("sea".parse::<FreightMode>().unwrap(), FreightMode::Sea);
        assert_eq!("AIR".parse::<FreightMode>().unwrap(), FreightMode::Air);
    }

    #[test]
    fn mode_rejects_anything_else() {
        let err = "rail".parse::<FreightMode>().unwrap_err();
        assert_eq!(err, ParseFreightModeError("rail".to_string()));
        assert!(err.to_string().contains("rail"));
    }

    #[test]
    fn mode_serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&FreightMode::Sea).unwrap(), "\"sea\"");
        let parsed: FreightMode = serde_json::from_str("\"air\"").unwrap();
        assert_eq!(parsed, FreightMode::Air);
    }

    #[test]
    fn route_seed_ignores_country_and_mode() {
        let sea = Route::new("Shanghai", "Los Angeles", "United States", FreightMode::Sea);
        let air = Route::new("Shanghai", "Los Angeles", "Atlantis", FreightMode::Air);
        assert_eq!(sea.seed("risks"), air.seed("risks"));
        assert_eq!(sea.seed("risks"), 1_246_129_292);
    }
}
