//! Lanecopy Content Engine
//!
//! Platform-agnostic content selection for the Lanecopy freight-forwarding
//! site. Given a route (origin city, destination city, destination country,
//! freight mode), the engine deterministically phrases and orders authored
//! content - goods lists, customs rules, dangerous goods rules, shipping
//! risks - so thousands of generated lane pages stay varied without any
//! persistence behind them. Every function here is pure over static tables;
//! identical routes always render identical content.

pub mod constants;
pub mod customs;
pub mod dangerous_goods;
pub mod goods;
pub mod risks;
pub mod route;
pub mod rules;
pub mod seed;
pub mod shuffle;

// Re-export commonly used types
pub use customs::{clearance_intro_text, customs_clearance};
pub use dangerous_goods::{dangerous_goods, dg_intro_text};
pub use goods::{common_goods, goods_section_title};
pub use risks::{risks_cta_text, shipping_risks};
pub use route::{FreightMode, ParseFreightModeError, Route};
pub use rules::{
    ContentError, ContentRule, CountryRules, ResolvedRule, RuleSet, RuleTable, Severity,
};
pub use seed::{route_seed, simple_hash};
pub use shuffle::shuffle_with_seed;

use crate::constants::{TABLE_CUSTOMS, TABLE_DANGEROUS_GOODS, TABLE_GOODS, TABLE_RISKS};

/// The four content domains of a lane page, held together so a host can
/// load, validate and query them as one unit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Default)]
pub struct ContentLibrary {
    pub goods: RuleTable,
    pub customs: RuleTable,
    pub dangerous_goods: RuleTable,
    pub risks: RuleTable,
}

impl ContentLibrary {
    /// The authored library compiled into the crate.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            goods: goods::table(),
            customs: customs::table(),
            dangerous_goods: dangerous_goods::table(),
            risks: risks::table(),
        }
    }

    /// Load a library from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid tables.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the invariants selection relies on, across all four tables.
    ///
    /// # Errors
    ///
    /// Returns the first table violation found.
    pub fn validate(&self) -> Result<(), ContentError> {
        self.goods.validate(TABLE_GOODS)?;
        self.customs.validate(TABLE_CUSTOMS)?;
        self.dangerous_goods.validate(TABLE_DANGEROUS_GOODS)?;
        self.risks.validate(TABLE_RISKS)?;
        Ok(())
    }

    /// Commonly shipped goods for a route.
    #[must_use]
    pub fn common_goods(&self, route: &Route<'_>) -> RuleSet {
        self.goods.select(route, constants::SALT_GOODS)
    }

    /// Customs clearance rules and focus points for a route.
    #[must_use]
    pub fn customs_clearance(&self, route: &Route<'_>) -> RuleSet {
        self.customs.select(route, constants::SALT_CUSTOMS)
    }

    /// Dangerous goods rules and key considerations for a route.
    #[must_use]
    pub fn dangerous_goods(&self, route: &Route<'_>) -> RuleSet {
        self.dangerous_goods
            .select(route, constants::SALT_DANGEROUS_GOODS)
    }

    /// Shipping risks for a route.
    #[must_use]
    pub fn shipping_risks(&self, route: &Route<'_>) -> RuleSet {
        self.risks.select(route, constants::SALT_RISKS)
    }
}

/// Trait for abstracting content library loading.
/// Platform-specific implementations should provide this when the authored
/// library is replaced or extended at deploy time.
pub trait ContentSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the content library from the platform-specific source.
    ///
    /// # Errors
    ///
    /// Returns an error if the library cannot be loaded.
    fn load_library(&self) -> Result<ContentLibrary, Self::Error>;
}

/// Source returning the library compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinContent;

impl ContentSource for BuiltinContent {
    type Error = std::convert::Infallible;

    fn load_library(&self) -> Result<ContentLibrary, Self::Error> {
        Ok(ContentLibrary::builtin())
    }
}

/// Engine wrapping a content source with validation at the load boundary.
pub struct ContentEngine<S>
where
    S: ContentSource,
{
    source: S,
}

impl<S> ContentEngine<S>
where
    S: ContentSource,
{
    /// Create a new engine over the provided source.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Load the library and check its invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails or the loaded library violates
    /// a selection invariant.
    pub fn load_library(&self) -> Result<ContentLibrary, anyhow::Error>
    where
        S::Error: Into<anyhow::Error>,
    {
        let library = self.source.load_library().map_err(Into::into)?;
        library.validate()?;
        Ok(library)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct JsonSource(&'static str);

    impl ContentSource for JsonSource {
        type Error = ContentError;

        fn load_library(&self) -> Result<ContentLibrary, Self::Error> {
            ContentLibrary::from_json(self.0)
        }
    }

    #[test]
    fn builtin_library_validates() {
        let engine = ContentEngine::new(BuiltinContent);
        let library = engine.load_library().unwrap();
        assert!(!library.goods.countries.is_empty());
    }

    #[test]
    fn library_selectors_match_free_functions() {
        let library = ContentLibrary::builtin();
        let route = Route::new("Shanghai", "Los Angeles", "United States", FreightMode::Sea);
        assert_eq!(
            library.shipping_risks(&route),
            shipping_risks("Shanghai", "Los Angeles", "United States", FreightMode::Sea)
        );
        assert_eq!(
            library.common_goods(&route),
            common_goods("Shanghai", "Los Angeles", "United States", FreightMode::Sea)
        );
        assert_eq!(
            library.customs_clearance(&route),
            customs_clearance("Shanghai", "Los Angeles", "United States", FreightMode::Sea)
        );
        assert_eq!(
            library.dangerous_goods(&route),
            dangerous_goods("Shanghai", "Los Angeles", "United States", FreightMode::Sea)
        );
    }

    #[test]
    fn engine_rejects_invalid_custom_library() {
        // A library whose goods default has no air rules.
        let json = r#"{
            "goods": {
                "countries": [],
                "default": {
                    "country": "default",
                    "sea": [{"title": "General Cargo", "variants": ["mixed goods"]}],
                    "air": []
                }
            },
            "customs": {"countries": [], "default": {"country": "default",
                "sea": [{"title": "Entry", "variants": ["declare"]}],
                "air": [{"title": "Entry", "variants": ["declare"]}]}},
            "dangerous_goods": {"countries": [], "default": {"country": "default",
                "sea": [{"title": "IMDG", "variants": ["declare"]}],
                "air": [{"title": "DGR", "variants": ["declare"]}]}},
            "risks": {"countries": [], "default": {"country": "default",
                "sea": [{"title": "Congestion", "variants": ["queues"]}],
                "air": [{"title": "Capacity", "variants": ["tight"]}]}}
        }"#;
        let engine = ContentEngine::new(JsonSource(json));
        let err = engine.load_library().unwrap_err();
        assert!(err.to_string().contains("goods"));
    }

    #[test]
    fn library_round_trips_through_json() {
        let library = ContentLibrary::builtin();
        let json = serde_json::to_string(&library).unwrap();
        let restored = ContentLibrary::from_json(&json).unwrap();
        assert_eq!(restored, library);
    }
}
