//! Country rule tables and the selection pipeline shared by every content
//! domain.
//!
//! A domain owns one [`RuleTable`]: explicit country entries in authoring
//! order plus a fallback entry. Selection is a pure function of the route
//! and the table, so identical routes always render identical content with
//! no persistence behind them.

use serde::{Deserialize, Serialize};

#[cfg(debug_assertions)]
use crate::constants::DEBUG_ENV_VAR;
use crate::route::{FreightMode, Route};
use crate::shuffle::shuffle_with_seed;

#[cfg(debug_assertions)]
fn debug_log_enabled() -> bool {
    matches!(std::env::var(DEBUG_ENV_VAR), Ok(val) if val != "0")
}

#[cfg(not(debug_assertions))]
const fn debug_log_enabled() -> bool {
    false
}

/// Severity attached to shipping-risk rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    /// Display label for badges on the rendered page.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

/// A titled unit of route content with interchangeable phrasings.
///
/// Variants are fixed at authoring time and semantically equivalent;
/// selection among them is the only dynamic behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRule {
    pub title: String,
    pub variants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub restricted: bool,
}

impl ContentRule {
    #[must_use]
    pub fn new(title: &str, variants: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            variants: variants.iter().map(|v| (*v).to_string()).collect(),
            severity: None,
            restricted: false,
        }
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    #[must_use]
    pub fn restricted(mut self) -> Self {
        self.restricted = true;
        self
    }
}

/// Rule lists for one destination country.
///
/// Sea and air lists are independent; focus points are shared across modes
/// and empty for domains that have none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CountryRules {
    /// Lowercase match key, e.g. `"united states"`.
    pub country: String,
    #[serde(default)]
    pub sea: Vec<ContentRule>,
    #[serde(default)]
    pub air: Vec<ContentRule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub focus_points: Vec<String>,
}

impl CountryRules {
    #[must_use]
    pub fn rules_for(&self, mode: FreightMode) -> &[ContentRule] {
        match mode {
            FreightMode::Sea => &self.sea,
            FreightMode::Air => &self.air,
        }
    }
}

/// A resolved content block ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRule {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub restricted: bool,
}

/// Ordered output of one domain selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RuleSet {
    pub rules: Vec<ResolvedRule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub focus_points: Vec<String>,
}

/// Validation failures for a content table.
///
/// The built-in library satisfies these by construction; the checks guard
/// host-supplied JSON libraries at the engine seam.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("rule {title:?} in the {table} table has no variants")]
    EmptyVariants { table: String, title: String },
    #[error("the {table} default entry has an empty {mode} rule list")]
    EmptyDefault { table: String, mode: FreightMode },
    #[error("content library JSON did not parse")]
    Json(#[from] serde_json::Error),
}

/// One content domain's table: explicit country entries in authoring order
/// plus the fallback entry used when nothing matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RuleTable {
    pub countries: Vec<CountryRules>,
    pub default: CountryRules,
}

impl RuleTable {
    /// Load a table from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a valid table.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve a destination country to its entry.
    ///
    /// Lowercase bidirectional substring match: an entry wins if its key
    /// occurs in the country, or if the key contains the country's first
    /// word. First match in authoring order wins, so reordering entries is a
    /// content change, not a cleanup. Unmatched countries fall through to
    /// the default entry.
    #[must_use]
    pub fn resolve_country(&self, destination_country: &str) -> &CountryRules {
        let normalized = destination_country.trim().to_lowercase();
        let first_word = normalized.split_whitespace().next().unwrap_or("");
        for entry in &self.countries {
            if normalized.contains(&entry.country)
                || (!first_word.is_empty() && entry.country.contains(first_word))
            {
                return entry;
            }
        }
        if debug_log_enabled() {
            println!("Country resolution | {destination_country:?} fell through to default");
        }
        &self.default
    }

    /// Run the full selection pipeline for a route.
    ///
    /// Country resolution, then one phrasing per rule at
    /// `(seed + index) % variants.len()`, then the seeded shuffle over the
    /// resolved blocks and, independently, over the entry's focus points.
    #[must_use]
    pub fn select(&self, route: &Route<'_>, salt: &str) -> RuleSet {
        let seed = route.seed(salt);
        let entry = self.resolve_country(route.destination_country);
        let rules = entry.rules_for(route.mode);

        let mut resolved = Vec::with_capacity(rules.len());
        for (index, rule) in rules.iter().enumerate() {
            // Authored rules always carry at least one variant; an empty
            // list can only come from unvalidated external data.
            let Some(description) = pick_variant(&rule.variants, seed, index) else {
                continue;
            };
            resolved.push(ResolvedRule {
                title: rule.title.clone(),
                description: description.clone(),
                severity: rule.severity,
                restricted: rule.restricted,
            });
        }

        RuleSet {
            rules: shuffle_with_seed(&resolved, seed),
            focus_points: shuffle_with_seed(&entry.focus_points, seed),
        }
    }

    /// Check the invariants selection relies on.
    ///
    /// # Errors
    ///
    /// Returns an error if the default entry is missing a mode list or any
    /// rule has no variants.
    pub fn validate(&self, table: &str) -> Result<(), ContentError> {
        for mode in [FreightMode::Sea, FreightMode::Air] {
            if self.default.rules_for(mode).is_empty() {
                return Err(ContentError::EmptyDefault {
                    table: table.to_string(),
                    mode,
                });
            }
        }
        for entry in self.countries.iter().chain(std::iter::once(&self.default)) {
            for rule in entry.sea.iter().chain(entry.air.iter()) {
                if rule.variants.is_empty() {
                    return Err(ContentError::EmptyVariants {
                        table: table.to_string(),
                        title: rule.title.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Phrasing for the rule at `index`, offsetting the seed per rule so
/// adjacent rules don't land on the same variant slot.
fn pick_variant(variants: &[String], seed: u32, index: usize) -> Option<&String> {
    if variants.is_empty() {
        return None;
    }
    let slot = ((u64::from(seed) + index as u64) % variants.len() as u64) as usize;
    variants.get(slot)
}
