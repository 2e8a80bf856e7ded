//! Dangerous goods rules per destination country.

use once_cell::sync::Lazy;

use crate::constants::{SALT_DANGEROUS_GOODS, SALT_DG_INTRO};
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

pub(crate) fn table() -> RuleTable {
    RuleTable {
        countries: vec![
            entry(
                "united states",
                vec![
                    rule(
                        "IMDG Declaration",
                        &[
                            "US-bound hazardous cargo ships under a shipper's IMDG declaration; carriers reject bookings without it at the gate.",
                            "Every DG container needs its IMDG dangerous goods declaration matched to the booking before the terminal accepts it.",
                        ],
                    ),
                    rule(
                        "Lithium Batteries",
                        &[
                            "Lithium cells and battery-powered devices move under UN3480/UN3481 provisions with state-of-charge and packaging limits.",
                            "Battery shipments face the tightest scrutiny on this lane; misdeclared lithium cargo draws fines and carrier bans.",
                        ],
                    )
                    .restricted(),
                    rule(
                        "Hazmat Trucking",
                        &[
                            "Inland legs in the US need hazmat-endorsed drivers and placarded equipment; book the dray when you book the ocean leg.",
                            "US hazmat drayage capacity is thin in some ports - securing an endorsed trucker early avoids demurrage.",
                        ],
                    ),
                ],
                vec![
                    rule(
                        "IATA DGR Compliance",
                        &[
                            "Air DG ships under the current IATA Dangerous Goods Regulations, with shipper's declaration and UN packaging throughout.",
                            "US-bound dangerous goods by air follow IATA DGR to the letter; handlers refuse non-compliant pieces at acceptance.",
                        ],
                    ),
                    rule(
                        "Lithium Batteries",
                        &[
                            "Standalone lithium batteries are forbidden on passenger aircraft and capacity-limited on freighters into the US.",
                            "Battery airfreight is freighter-only for UN3480; plan capacity early because acceptance windows fill fast.",
                        ],
                    )
                    .restricted(),
                    rule(
                        "Limited Quantities",
                        &[
                            "Consumer-commodity quantities can move under limited-quantity provisions with reduced documentation.",
                            "Small retail-packaged DG may qualify as limited quantities, easing both paperwork and surcharges.",
                        ],
                    ),
                ],
                &[
                    "Book DG space early - acceptance is capacity-controlled",
                    "Provide the safety data sheet with every booking",
                    "Use certified UN packaging and current labels",
                    "Declare state of charge on lithium shipments",
                ],
            ),
            entry(
                "netherlands",
                vec![
                    rule(
                        "IMDG Declaration",
                        &[
                            "Rotterdam accepts most IMDG classes with standard pre-notification through the port community system.",
                            "DG cargo into the Netherlands rides on the IMDG declaration plus the port's electronic pre-arrival notice.",
                        ],
                    ),
                    rule(
                        "Port DG Notification",
                        &[
                            "Hazardous containers are notified to the harbour master before arrival; late notice can hold the box on the quay.",
                            "The Dutch ports run strict DG windows - your forwarder files the notification as soon as the stowage confirms.",
                        ],
                    ),
                    rule(
                        "ADR Onward Carriage",
                        &[
                            "Road legs across the Benelux move under ADR with certified drivers and orange-plated equipment.",
                            "Plan the ADR trucking leg with the ocean booking; Benelux DG drayage books out during peak season.",
                        ],
                    ),
                ],
                vec![
                    rule(
                        "IATA DGR Compliance",
                        &[
                            "Schiphol handles most DG classes under IATA DGR with experienced acceptance staff.",
                            "Air DG into the Netherlands is routine when the declaration, packing and labels agree.",
                        ],
                    ),
                    rule(
                        "Lithium Batteries",
                        &[
                            "Battery cargo follows the freighter-only rules for standalone cells, with Schiphol enforcing acceptance checks.",
                            "UN3480 shipments need freighter capacity into Amsterdam; equipment-contained batteries are more flexible.",
                        ],
                    )
                    .restricted(),
                ],
                &[
                    "File the port DG notification before arrival",
                    "Match declaration, SDS and labels exactly",
                    "Arrange ADR-certified onward trucking",
                    "Check class-specific stack and segregation rules",
                ],
            ),
            entry(
                "germany",
                vec![
                    rule(
                        "IMDG Declaration",
                        &[
                            "Hamburg and Bremerhaven require the IMDG declaration at booking, with the stowage plan vetted before loading.",
                            "German terminals audit DG paperwork rigorously; a clean IMDG file keeps the container moving.",
                        ],
                    ),
                    rule(
                        "Water-Hazard Classification",
                        &[
                            "Germany's water-hazard classes add a national layer on top of IMDG for certain chemicals; confirm WGK status early.",
                            "Chemical imports may need German water-hazard classification documents alongside the standard DG set.",
                        ],
                    ),
                    rule(
                        "ADR Onward Carriage",
                        &[
                            "Inland DG moves under ADR; German enforcement of driver certification and equipment checks is rigorous.",
                            "Expect roadside ADR inspections in Germany - compliant placarding and documents are non-negotiable.",
                        ],
                    ),
                ],
                vec![
                    rule(
                        "IATA DGR Compliance",
                        &[
                            "Frankfurt's DG acceptance works strictly to IATA DGR; discrepancies bounce cargo to the next flight at best.",
                            "German air DG clears smoothly when declaration and packaging are exact; there is no tolerance for improvisation.",
                        ],
                    ),
                    rule(
                        "Lithium Batteries",
                        &[
                            "Standalone lithium batteries fly freighter-only into Germany with capacity booked well ahead.",
                            "Battery shipments into Frankfurt need early booking against limited freighter DG allotments.",
                        ],
                    )
                    .restricted(),
                ],
                &[
                    "Confirm water-hazard (WGK) status for chemicals",
                    "Submit the IMDG declaration with the booking",
                    "Book ADR trucking alongside the main leg",
                    "Keep emergency contact details on every document",
                ],
            ),
            entry(
                "australia",
                vec![
                    rule(
                        "IMDG Declaration",
                        &[
                            "Australian ports require the IMDG declaration plus AMSA-aligned documentation before DG containers discharge.",
                            "DG into Australia clears smoothly when the IMDG file is complete and the consignee holds the right permits.",
                        ],
                    ),
                    rule(
                        "Import Permits",
                        &[
                            "Several DG categories need import permits from Australian authorities; lead times run to weeks, not days.",
                            "Check permit requirements before shipping - unpermitted hazardous cargo is re-exported at the shipper's cost.",
                        ],
                    )
                    .restricted(),
                    rule(
                        "Biosecurity Overlap",
                        &[
                            "DG consignments still face biosecurity screening; timber packaging and container cleanliness rules apply in full.",
                            "Australia inspects DG cargo for biosecurity risk like any other freight - compliant packaging avoids double holds.",
                        ],
                    ),
                ],
                vec![
                    rule(
                        "IATA DGR Compliance",
                        &[
                            "Air DG into Australia follows IATA DGR with CASA oversight; acceptance checks are thorough.",
                            "Australian DG airfreight runs on exact IATA compliance, from packing instruction to label placement.",
                        ],
                    ),
                    rule(
                        "Lithium Batteries",
                        &[
                            "Battery imports ride freighter capacity into Sydney and Melbourne under the standard UN3480 restrictions.",
                            "Plan lithium shipments against Australia's limited freighter schedule; passenger uplift is not an option.",
                        ],
                    )
                    .restricted(),
                ],
                &[
                    "Verify import permits before booking",
                    "Use biosecurity-compliant packaging throughout",
                    "Book freighter capacity early for batteries",
                    "Keep the SDS current and attached to the file",
                ],
            ),
        ],
        default: entry(
            "default",
            vec![
                rule(
                    "IMDG Declaration",
                    &[
                        "Hazardous sea freight moves under a shipper's IMDG dangerous goods declaration matched to certified UN packaging.",
                        "The IMDG declaration is the foundation of any DG booking; carriers verify it before accepting the container.",
                    ],
                ),
                rule(
                    "Carrier Acceptance",
                    &[
                        "Each carrier approves DG bookings class by class; secure acceptance before committing to a sailing.",
                        "DG space is approval-controlled - the booking is not firm until the carrier's DG desk confirms it.",
                    ],
                ),
                rule(
                    "Destination Restrictions",
                    &[
                        "Destination ports and authorities may restrict specific classes; screen the routing before the cargo ships.",
                        "Confirm the destination accepts your DG class and packing group - transshipment hubs add their own rules.",
                    ],
                ),
            ],
            vec![
                rule(
                    "IATA DGR Compliance",
                    &[
                        "Air DG ships under the current IATA Dangerous Goods Regulations with a shipper's declaration throughout.",
                        "Dangerous goods fly only with exact IATA DGR compliance; acceptance staff check every detail.",
                    ],
                ),
                rule(
                    "Lithium Batteries",
                    &[
                        "Standalone lithium batteries are freighter-only worldwide; batteries packed with equipment have more options.",
                        "Battery shipments face universal air restrictions - declare chemistry, watt-hours and state of charge up front.",
                    ],
                )
                .restricted(),
            ],
            &[
                "Provide the safety data sheet at booking",
                "Use certified UN packaging and current labels",
                "Secure carrier DG acceptance before cargo readiness",
                "Screen destination and transshipment restrictions",
            ],
        ),
    }
}

/// Dangerous goods rules and key considerations for a route.
#[must_use]
pub fn dangerous_goods(
    origin_city: &str,
    destination_city: &str,
    destination_country: &str,
    mode: FreightMode,
) -> RuleSet {
    let route = Route::new(origin_city, destination_city, destination_country, mode);
    TABLE.select(&route, SALT_DANGEROUS_GOODS)
}

/// Intro paragraph for the dangerous goods section of a lane page.
#[must_use]
pub fn dg_intro_text(origin_city: &str, destination_city: &str) -> String {
    let seed = route_seed(origin_city, destination_city, SALT_DG_INTRO);
    match seed % 3 {
        0 => format!(
            "Shipping hazardous cargo from {origin_city} to {destination_city} is routine with the right preparation - and expensive without it."
        ),
        1 => format!(
            "Dangerous goods move on the {origin_city} to {destination_city} lane every week. The rules below decide whether yours move with them."
        ),
        _ => format!(
            "From classification to final delivery, here is what hazardous shipments from {origin_city} to {destination_city} must get right."
        ),
    }
}
