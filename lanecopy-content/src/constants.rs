//! Centralized salts and tuning values for Lanecopy content selection.
//!
//! Every salt below is mixed into the route seed for exactly one content
//! surface. Changing a salt re-phrases and re-orders that surface on every
//! generated page, which invalidates already-indexed copy; treat any edit
//! here as a content migration, not a refactor.

// Logging keys -------------------------------------------------------------
pub(crate) const DEBUG_ENV_VAR: &str = "LANECOPY_DEBUG_LOGS";

// Domain salts -------------------------------------------------------------
pub(crate) const SALT_GOODS: &str = "goods";
pub(crate) const SALT_CUSTOMS: &str = "customs";
pub(crate) const SALT_DANGEROUS_GOODS: &str = "dg";
pub(crate) const SALT_RISKS: &str = "risks";

// Picker salts -------------------------------------------------------------
pub(crate) const SALT_GOODS_TITLE: &str = "goods-title";
pub(crate) const SALT_CUSTOMS_INTRO: &str = "customs-intro";
pub(crate) const SALT_DG_INTRO: &str = "dg-intro";
pub(crate) const SALT_RISKS_CTA: &str = "risks-cta";

// Table names used in validation errors ------------------------------------
pub(crate) const TABLE_GOODS: &str = "goods";
pub(crate) const TABLE_CUSTOMS: &str = "customs";
pub(crate) const TABLE_DANGEROUS_GOODS: &str = "dangerous goods";
pub(crate) const TABLE_RISKS: &str = "shipping risks";
