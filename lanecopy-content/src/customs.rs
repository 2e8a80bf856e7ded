//! Customs clearance rules per destination country.

use once_cell::sync::Lazy;

use crate::constants::{SALT_CUSTOMS, SALT_CUSTOMS_INTRO};
use crate::route::{FreightMode, Route};
use crate::rules::{ContentRule, CountryRules, RuleSet, RuleTable};
use crate::seed::route_seed;

static TABLE: Lazy<RuleTable> = Lazy::new(table);

fn rule(title: &str, variants: &[&str]) -> ContentRule {
    ContentRule::new(title, variants)
}

fn entry(
    country: &str,
    sea: Vec<ContentRule>,
    air: Vec<ContentRule>,
    focus_points: &[&str],
) -> CountryRules {
    CountryRules {
        country: country.to_string(),
        sea,
        air,
        focus_points: focus_points.iter().map(|p| (*p).to_string()).collect(),
    }
}

/// Authored customs table. `kingdom` and `emirates` precede `united states`
/// so the first-word match cannot capture their routes.
pub(crate) fn table() -> RuleTable {
    RuleTable {
        countries: vec![
            entry(
                "kingdom",
                vec![
                    rule(
                        "Customs Declaration Service (CDS)",
                        &[
                            "All UK import entries lodge through CDS; your broker needs your EORI and commodity codes before arrival.",
                            "UK clearance runs on the Customs Declaration Service, so have your GB EORI and classification ready ahead of the vessel.",
                        ],
                    ),
                    rule(
                        "Postponed VAT Accounting",
                        &[
                            "Import VAT can be postponed to your VAT return instead of paid at the border, which protects cash flow on every shipment.",
                            "Most UK importers elect postponed VAT accounting, settling import VAT through the return rather than at clearance.",
                        ],
                    ),
                    rule(
                        "UKCA Marking",
                        &[
                            "Regulated products need UKCA (or still-accepted CE) conformity marking before they can be sold in Great Britain.",
                            "Check UKCA marking requirements early; non-conforming goods can be held or refused at the border.",
                        ],
                    ),
                ],
                vec![
                    rule(
                        "CDS Air Entry",
                        &[
                            "Airfreight clears through the same CDS platform, usually pre-lodged so goods release within hours of landing.",
                            "Pre-lodged CDS entries let UK air imports clear before the aircraft is even unloaded.",
                        ],
                    ),
                    rule(
                        "Duty & VAT at the Border",
                        &[
                            "Duty and any non-postponed VAT are settled against your deferment account before release.",
                            "A duty deferment account speeds UK air clearances by removing payment from the critical path.",
                        ],
                    ),
                ],
                &[
                    "Hold a GB EORI number before the goods ship",
                    "Classify every line under the UK Global Tariff",
                    "Elect postponed VAT accounting where eligible",
                    "Keep commercial invoices consistent with the packing list",
                ],
            ),
            entry(
                "emirates",
                vec![
                    rule(
                        "Importer Code Registration",
                        &[
                            "UAE consignees must hold an importer code with the relevant customs authority before cargo can clear.",
                            "Register your importer code with Dubai or Abu Dhabi customs ahead of arrival; without it the entry cannot be filed.",
                        ],
                    ),
                    rule(
                        "5% Customs Duty",
                        &[
                            "Most goods attract a flat 5% duty on CIF value, with exemptions inside free zones and for GCC-origin cargo.",
                            "Budget a 5% duty on CIF value for mainland imports; free-zone moves defer it until goods enter the local market.",
                        ],
                    ),
                    rule(
                        "Certificate of Origin",
                        &[
                            "A legalized certificate of origin accompanies the entry; missing or inconsistent origin paperwork is the top cause of holds.",
                            "UAE customs expects a certificate of origin aligned with the invoice; discrepancies trigger manual review.",
                        ],
                    ),
                ],
                vec![
                    rule(
                        "Importer Code",
                        &[
                            "Air shipments need the same importer code as sea freight; confirm it is active before uplift.",
                            "Verify the consignee's importer code is current - expired codes strand airfreight at the terminal.",
                        ],
                    ),
                    rule(
                        "Duty Exemptions",
                        &[
                            "Free-zone consignees and certain categories clear duty-free; mainland deliveries pay the standard 5%.",
                            "Check exemption eligibility before arrival; re-routing a cleared shipment into a free zone afterwards is costly.",
                        ],
                    ),
                ],
                &[
                    "Confirm the importer code is registered and active",
                    "Legalize the certificate of origin before shipping",
                    "Decide free zone versus mainland entry up front",
                    "Match invoice, packing list and origin documents exactly",
                ],
            ),
            entry(
                "united states",
                vec![
                    rule(
                        "ISF 10+2 Filing",
                        &[
                            "The Importer Security Filing must reach CBP at least 24 hours before vessel loading; late filings draw four-figure penalties.",
                            "File ISF 10+2 a full day before the container is laden - it is the single most penalty-prone step on US-bound sea freight.",
                            "US sea imports start with the ISF: ten importer data elements filed before loading, or CBP issues liquidated damages.",
                        ],
                    ),
                    rule(
                        "Customs Bond",
                        &[
                            "A continuous customs bond covers all your entries for a year and is required before CBP releases commercial cargo.",
                            "Most regular importers hold a continuous bond; single-entry bonds work for one-off shipments but cost more per entry.",
                        ],
                    ),
                    rule(
                        "Section 301 Tariffs",
                        &[
                            "China-origin goods may carry Section 301 duties on top of the base rate; classify carefully and check exclusions.",
                            "Review Section 301 exposure line by line - the additional duty often exceeds the base tariff itself.",
                        ],
                    ),
                    rule(
                        "FDA & USDA Holds",
                        &[
                            "Food, medical and agricultural products face partner-agency review; prior notice and registration prevent most holds.",
                            "PGA-regulated cargo needs its FDA or USDA paperwork filed before arrival, or the container waits while the agency catches up.",
                        ],
                    ),
                ],
                vec![
                    rule(
                        "Air AMS Filing",
                        &[
                            "Air shipment data transmits to CBP before wheels-up; your forwarder files AMS from the master and house waybills.",
                            "AMS security filing happens pre-departure on US-bound air; inaccurate house data is the usual cause of holds.",
                        ],
                    ),
                    rule(
                        "Customs Bond",
                        &[
                            "The same bond requirement applies to airfreight; continuous bonds cover both modes.",
                            "Commercial air imports need a bond on file before release, identical to sea entries.",
                        ],
                    ),
                    rule(
                        "De Minimis Changes",
                        &[
                            "Low-value entry rules are tightening; do not build a US airfreight model on the de minimis exemption.",
                            "Recent enforcement narrows de minimis eligibility for e-commerce; formal entry is the safe assumption.",
                        ],
                    ),
                ],
                &[
                    "File ISF at least 24 hours before vessel loading",
                    "Keep a continuous customs bond active",
                    "Verify HTS classification and Section 301 exposure",
                    "Pre-file partner-agency data for regulated goods",
                    "Retain entry records for five years",
                ],
            ),
            entry(
                "netherlands",
                vec![
                    rule(
                        "EU Import Declaration",
                        &[
                            "Entries lodge in the Dutch DMS system against your EU EORI; most consignments release on conformity checks alone.",
                            "Dutch customs clears the majority of declarations automatically; accurate HS codes keep you in the green lane.",
                        ],
                    ),
                    rule(
                        "Article 23 VAT Deferment",
                        &[
                            "An Article 23 licence shifts import VAT to the periodic return - the main reason importers clear the EU through the Netherlands.",
                            "With Article 23 deferment, no VAT is paid at the border; it is accounted for on the VAT return instead.",
                        ],
                    ),
                    rule(
                        "CE Marking & Product Compliance",
                        &[
                            "CE-regulated products must conform before release into free circulation; market surveillance checks happen at the port.",
                            "Verify CE conformity files before shipping; Dutch authorities spot-check consumer and electrical goods.",
                        ],
                    ),
                ],
                vec![
                    rule(
                        "Import Declaration",
                        &[
                            "Schiphol clearances pre-lodge through DMS and typically release before breakdown of the ULD.",
                            "Air imports clear the same Dutch declaration system, usually within hours of landing.",
                        ],
                    ),
                    rule(
                        "VAT & Duty Settlement",
                        &[
                            "Article 23 deferment applies equally to airfreight, keeping cash at the border to zero.",
                            "Without deferment, VAT and duty settle through your broker's account before release.",
                        ],
                    ),
                ],
                &[
                    "Hold an EU EORI registered in the Netherlands",
                    "Apply for the Article 23 VAT deferment licence",
                    "Keep CE conformity documentation with the entry file",
                    "Use the first port of entry for EU-wide free circulation",
                ],
            ),
            entry(
                "germany",
                vec![
                    rule(
                        "EORI Registration",
                        &[
                            "German entries require an EU EORI; register before the first shipment as processing takes several days.",
                            "Your EORI links every German customs entry to your business - no number, no clearance.",
                        ],
                    ),
                    rule(
                        "Import VAT",
                        &[
                            "Germany levies 19% import VAT at clearance; unlike the Dutch model, deferment options are limited.",
                            "Plan cash flow around import VAT at the German border; many importers clear via the Netherlands to defer it.",
                        ],
                    ),
                    rule(
                        "Product Compliance",
                        &[
                            "German market surveillance is strict on CE, WEEE and packaging registration; non-compliant goods are blocked at entry.",
                            "Register packaging under LUCID and verify CE conformity before shipping consumer goods into Germany.",
                        ],
                    ),
                ],
                vec![
                    rule(
                        "ATLAS Declaration",
                        &[
                            "Air entries file through the ATLAS system, normally pre-lodged by the handling broker at Frankfurt.",
                            "Germany's ATLAS platform handles air imports; pre-lodgement keeps dwell under a day.",
                        ],
                    ),
                    rule(
                        "EORI & Fiscal Representation",
                        &[
                            "Non-EU shippers importing into Germany by air typically appoint a fiscal representative to handle VAT.",
                            "An EORI plus fiscal representation covers the usual airfreight entry setup for overseas sellers.",
                        ],
                    ),
                ],
                &[
                    "Register an EU EORI before first shipment",
                    "Budget 19% import VAT at clearance",
                    "Complete LUCID packaging registration for consumer goods",
                    "Keep conformity documents ready for spot checks",
                ],
            ),
        ],
        default: entry(
            "default",
            vec![
                rule(
                    "Import Declaration",
                    &[
                        "A local customs entry is filed against the commercial invoice and packing list; your broker handles lodgement and release.",
                        "Clearance starts with the import declaration; complete, consistent documents are what keep it routine.",
                    ],
                ),
                rule(
                    "Duties & Taxes",
                    &[
                        "Duty and import tax assess on customs value; confirm rates against the destination tariff before quoting landed cost.",
                        "Expect duty plus local import tax at clearance; the HS classification drives both.",
                    ],
                ),
                rule(
                    "Restricted Goods Screening",
                    &[
                        "Certain categories need permits or licences at destination; screen the commodity list before booking.",
                        "Check destination restrictions early - permit-controlled goods clear slowly when paperwork starts late.",
                    ],
                ),
            ],
            vec![
                rule(
                    "Import Declaration",
                    &[
                        "Air entries pre-lodge where the destination allows it, releasing shortly after arrival.",
                        "The air clearance follows the same declaration process on a compressed clock.",
                    ],
                ),
                rule(
                    "Duties & Taxes",
                    &[
                        "Duty and tax settle before release; a broker deferment account removes the payment delay.",
                        "Have funds or a deferment arrangement ready - unpaid assessments hold airfreight at the terminal.",
                    ],
                ),
            ],
            &[
                "Confirm importer registration at destination",
                "Classify goods before booking, not at arrival",
                "Align invoice, packing list and transport documents",
                "Screen for permits and restricted categories early",
            ],
        ),
    }
}

/// Customs clearance rules and key focus points for a route.
#[must_use]
pub fn customs_clearance(
    origin_city: &str,
    destination_city: &str,
    destination_country: &str,
    mode: FreightMode,
) -> RuleSet {
    let route = Route::new(origin_city, destination_city, destination_country, mode);
    TABLE.select(&route, SALT_CUSTOMS)
}

/// Intro paragraph for the clearance section of a lane page.
#[must_use]
pub fn clearance_intro_text(
    origin_city: &str,
    destination_city: &str,
    destination_country: &str,
) -> String {
    let seed = route_seed(origin_city, destination_city, SALT_CUSTOMS_INTRO);
    match seed % 3 {
        0 => format!(
            "Customs clearance in {destination_country} is where shipments from {origin_city} are most often delayed. Here is what to have in order before your cargo reaches {destination_city}."
        ),
        1 => format!(
            "Before freight from {origin_city} can deliver in {destination_city}, it has to clear {destination_country} customs. These are the rules that matter on this lane."
        ),
        _ => format!(
            "Every shipment on the {origin_city} to {destination_city} lane passes through {destination_country} customs. The requirements below decide whether that takes hours or weeks."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_entry_includes_isf_and_focus_points() {
        let selected = customs_clearance("Shanghai", "Los Angeles", "United States", FreightMode::Sea);
        assert!(selected.rules.iter().any(|r| r.title == "ISF 10+2 Filing"));
        assert_eq!(selected.focus_points.len(), 5);
        assert!(
            selected
                .focus_points
                .iter()
                .any(|p| p.contains("ISF at least 24 hours"))
        );
    }

    #[test]
    fn emirates_and_kingdom_resolve_before_united_states() {
        let uae = customs_clearance("Shanghai", "Dubai", "United Arab Emirates", FreightMode::Sea);
        assert!(uae.rules.iter().any(|r| r.title == "5% Customs Duty"));

        let uk = customs_clearance("Shanghai", "London", "United Kingdom", FreightMode::Air);
        assert!(uk.rules.iter().any(|r| r.title == "CDS Air Entry"));
    }

    #[test]
    fn focus_points_shuffle_with_the_same_seed() {
        let sea = customs_clearance("Shanghai", "Los Angeles", "United States", FreightMode::Sea);
        let air = customs_clearance("Shanghai", "Los Angeles", "United States", FreightMode::Air);
        // Focus points are mode-independent: same entry, same seed, same order.
        assert_eq!(sea.focus_points, air.focus_points);
    }

    #[test]
    fn unknown_country_gets_default_guidance() {
        let selected = customs_clearance("Ningbo", "Nowhere", "Atlantis", FreightMode::Sea);
        assert!(selected.rules.iter().any(|r| r.title == "Import Declaration"));
        assert_eq!(selected.focus_points.len(), 4);
    }

    #[test]
    fn intro_interpolates_route_fields() {
        let intro = clearance_intro_text("Shanghai", "Los Angeles", "United States");
        assert_eq!(
            intro,
            clearance_intro_text("Shanghai", "Los Angeles", "United States")
        );
        assert!(intro.contains("United States"));
        assert!(intro.contains("Shanghai") && intro.contains("Los Angeles"));
    }

    #[test]
    fn table_passes_validation() {
        table().validate("customs").unwrap();
    }
}
