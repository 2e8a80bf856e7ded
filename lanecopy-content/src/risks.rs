//! Shipping risks per destination country.

use once_cell::sync::Lazy;

use crate::constants::{SALT_RISKS, SALT_RISKS_CTA};
use crate::route::{FreightMode, Route};
use crate::rules::{ContentRule, CountryRules, RuleSet, RuleTable, Severity};
use crate::seed::route_seed;

static TABLE: Lazy<RuleTable> = Lazy::new(table);

fn risk(title: &str, severity: Severity, variants: &[&str]) -> ContentRule {
    ContentRule::new(title, variants).with_severity(severity)
}

fn entry(country: &str, sea: Vec<ContentRule>, air: Vec<ContentRule>) -> CountryRules {
    CountryRules {
        country: country.to_string(),
        sea,
        air,
        focus_points: Vec::new(),
    }
}

pub(crate) fn table() -> RuleTable {
    RuleTable {
        countries: vec![
            entry(
                "kingdom",
                vec![
                    risk(
                        "Felixstowe Backlogs",
                        Severity::Moderate,
                        &[
                            "The UK's largest box port runs hot in peak season; berth queues add days to discharge when volumes spike.",
                            "Felixstowe congestion flares periodically, pushing carriers to divert to London Gateway at short notice.",
                        ],
                    ),
                    risk(
                        "Post-Brexit Border Checks",
                        Severity::High,
                        &[
                            "Evolving UK border controls still catch importers out; incomplete entries hold containers at the port.",
                            "Border formalities remain the biggest schedule risk on UK-bound freight - paperwork errors cost days.",
                        ],
                    ),
                    risk(
                        "Winter Storm Disruption",
                        Severity::Low,
                        &[
                            "North Atlantic winter weather periodically delays arrivals and closes terminals for high winds.",
                            "Winter storm systems can shut UK terminal cranes for hours at a time, rippling through the berth schedule.",
                        ],
                    ),
                ],
                vec![
                    risk(
                        "Heathrow Capacity",
                        Severity::Moderate,
                        &[
                            "Heathrow's cargo capacity tightens in Q4; guaranteed-uplift products cost more but hold schedule.",
                            "Slot constraints at Heathrow can push freight onto later flights during peak weeks.",
                        ],
                    ),
                    risk(
                        "Customs System Outages",
                        Severity::Low,
                        &[
                            "Occasional CDS outages delay releases; pre-lodged entries recover fastest when the system returns.",
                            "UK clearance platforms have had availability wobbles - pre-lodgement is the practical hedge.",
                        ],
                    ),
                ],
            ),
            entry(
                "united states",
                vec![
                    risk(
                        "West Coast Port Congestion",
                        Severity::High,
                        &[
                            "Los Angeles and Long Beach remain chronically congested in peak season, with vessel queues adding one to three weeks.",
                            "West Coast gateway congestion is the defining schedule risk on transpacific freight; berth waits stretch badly when volumes surge.",
                            "Expect berthing delays at the San Pedro Bay complex during peak months - congestion there cascades through rail and drayage.",
                        ],
                    ),
                    risk(
                        "UFLPA Seizure Risk",
                        Severity::High,
                        &[
                            "CBP detains goods with any suspected Xinjiang content under UFLPA; supply-chain tracing documents are the only fast way out.",
                            "UFLPA enforcement has widened beyond apparel and solar - importers need origin evidence ready before a detention, not after.",
                        ],
                    ),
                    risk(
                        "Panama Canal Restrictions",
                        Severity::Moderate,
                        &[
                            "Draft and transit-slot limits at the Panama Canal periodically squeeze all-water services to the US East Coast.",
                            "Canal capacity restrictions reroute some services and add transit days when water levels run low.",
                        ],
                    ),
                ],
                vec![
                    risk(
                        "Peak Season Capacity Crunch",
                        Severity::Moderate,
                        &[
                            "Transpacific air capacity sells out around Q4 launches and e-commerce events; block space agreements protect uplift.",
                            "Air capacity into the US tightens sharply in peak weeks - book early or pay the spot premium.",
                        ],
                    ),
                    risk(
                        "CBP Airfreight Exams",
                        Severity::Low,
                        &[
                            "Random and targeted CBP exams add one to three days; clean, consistent documentation keeps exam rates down.",
                            "US air imports see periodic intensive exams; the delay is short but unpredictable.",
                        ],
                    ),
                ],
            ),
            entry(
                "netherlands",
                vec![
                    risk(
                        "Rotterdam Congestion",
                        Severity::Low,
                        &[
                            "Rotterdam absorbs surges better than most ports, but barge and rail connections queue when terminals run full.",
                            "Terminal congestion at Rotterdam is usually mild; the knock-on barge delays are the real schedule risk.",
                        ],
                    ),
                    risk(
                        "Rhine Low Water",
                        Severity::Moderate,
                        &[
                            "Dry summers cut Rhine barge drafts, squeezing inland capacity and pushing cargo to rail and road at higher cost.",
                            "Low Rhine water levels periodically halve barge payloads, delaying inland distribution from the seaports.",
                        ],
                    ),
                    risk(
                        "EU ETS Surcharges",
                        Severity::Low,
                        &[
                            "Emissions-trading surcharges now apply on voyages into the EU and adjust quarterly; budget for the pass-through.",
                            "Carriers pass EU ETS costs into surcharges on European trades - small, but they move every quarter.",
                        ],
                    ),
                ],
                vec![
                    risk(
                        "Schiphol Slot Constraints",
                        Severity::Moderate,
                        &[
                            "Flight caps at Schiphol limit freighter slots; peak-period capacity needs booking well in advance.",
                            "Schiphol's movement restrictions squeeze freighter capacity, particularly for weekend departures.",
                        ],
                    ),
                    risk(
                        "Night Flight Restrictions",
                        Severity::Low,
                        &[
                            "Night-operation limits compress the cargo arrival window and can push freight to morning flights.",
                            "Dutch night-flight rules occasionally bump cargo uplift to the next daylight rotation.",
                        ],
                    ),
                ],
            ),
            entry(
                "germany",
                vec![
                    risk(
                        "North Sea Port Strikes",
                        Severity::Moderate,
                        &[
                            "Periodic industrial action at Hamburg and Bremerhaven stops the quay for days and backs up the berth line.",
                            "German port labour disputes flare around wage rounds; build buffer into arrivals during negotiation seasons.",
                        ],
                    ),
                    risk(
                        "Rail Connection Delays",
                        Severity::Moderate,
                        &[
                            "German rail works programmes disrupt hinterland container trains, delaying inland deliveries from the ports.",
                            "Ongoing rail infrastructure works make German inland rail timings less dependable than the ocean leg.",
                        ],
                    ),
                    risk(
                        "Elbe Draft Limits",
                        Severity::Low,
                        &[
                            "The largest vessels work Hamburg against tidal draft windows; missed windows slip berthing by half a day.",
                            "Tide-dependent access on the Elbe occasionally delays mega-vessel arrivals into Hamburg.",
                        ],
                    ),
                ],
                vec![
                    risk(
                        "Frankfurt Capacity",
                        Severity::Low,
                        &[
                            "Frankfurt's cargo throughput is robust; only extreme peaks or weather push freight to the next rotation.",
                            "Capacity at Frankfurt rarely binds, but peak-season backlogs do happen at the handling sheds.",
                        ],
                    ),
                    risk(
                        "Handler Strikes",
                        Severity::Moderate,
                        &[
                            "Ground-handling strikes periodically stop acceptance and breakdown at German hubs for a shift or two.",
                            "Short warning strikes in German aviation ripple into cargo backlogs that take days to clear.",
                        ],
                    ),
                ],
            ),
            entry(
                "australia",
                vec![
                    risk(
                        "Biosecurity Inspections",
                        Severity::High,
                        &[
                            "Australian biosecurity holds are the top delay on this trade; BMSB-season treatments and clean packaging are essential.",
                            "Expect rigorous biosecurity screening - untreated timber packaging or contaminated containers trigger fumigation and long holds.",
                        ],
                    ),
                    risk(
                        "Cyclone Season Disruption",
                        Severity::Moderate,
                        &[
                            "Northern Australian ports close ahead of cyclones between November and April, shifting schedules at short notice.",
                            "Cyclone-season weather routinely reshuffles arrivals at Queensland and northern ports.",
                        ],
                    ),
                    risk(
                        "Industrial Action",
                        Severity::Moderate,
                        &[
                            "Waterfront enterprise bargaining rounds periodically slow Australian terminals with work bans and stoppages.",
                            "Terminal industrial action is a recurring theme in Australian ports; buffer critical deliveries accordingly.",
                        ],
                    ),
                ],
                vec![
                    risk(
                        "Limited Freighter Capacity",
                        Severity::Moderate,
                        &[
                            "Australia relies heavily on belly capacity; freighter space is thin and sells out around peak events.",
                            "Dedicated freighter options into Australia are limited - urgent heavy cargo needs early booking.",
                        ],
                    ),
                    risk(
                        "Biosecurity Screening",
                        Severity::Low,
                        &[
                            "Airfreight faces the same biosecurity regime as sea cargo, with faster but still mandatory screening.",
                            "Biosecurity checks on air imports are quick when packaging is compliant, and painful when it is not.",
                        ],
                    ),
                ],
            ),
        ],
        default: entry(
            "default",
            vec![
                risk(
                    "Port Congestion",
                    Severity::Moderate,
                    &[
                        "Destination port congestion is the most common cause of schedule slip on this lane; monitor berth queues in peak months.",
                        "Berth waits at the destination port add days unpredictably during demand surges.",
                    ],
                ),
                risk(
                    "Weather Delays",
                    Severity::Moderate,
                    &[
                        "Seasonal weather systems periodically delay sailings and close terminals along this routing.",
                        "Weather-driven schedule changes are routine on this trade; carriers recover them within a rotation or two.",
                    ],
                ),
                risk(
                    "Rollover Risk",
                    Severity::Low,
                    &[
                        "Overbooked vessels roll cargo to the next sailing; priority bookings and realistic cargo-ready dates reduce the odds.",
                        "Rollovers cluster around peak season and blank sailings - book against confirmed allocations where possible.",
                    ],
                ),
            ],
            vec![
                risk(
                    "Capacity Constraints",
                    Severity::Moderate,
                    &[
                        "Air capacity on this corridor tightens during peak retail and holiday windows.",
                        "Spot airfreight space can evaporate in peak weeks; allocations and early booking hold the schedule.",
                    ],
                ),
                risk(
                    "Customs Delays",
                    Severity::Low,
                    &[
                        "Destination clearance exams add a day or two unpredictably; clean documentation keeps the rate low.",
                        "Random customs exams are the main air-side delay - short, but impossible to schedule around.",
                    ],
                ),
            ],
        ),
    }
}

/// Shipping risks for a route, phrased and ordered for that route.
#[must_use]
pub fn shipping_risks(
    origin_city: &str,
    destination_city: &str,
    destination_country: &str,
    mode: FreightMode,
) -> RuleSet {
    let route = Route::new(origin_city, destination_city, destination_country, mode);
    TABLE.select(&route, SALT_RISKS)
}

/// Call-to-action line under the risks section of a lane page.
#[must_use]
pub fn risks_cta_text(origin_city: &str, destination_city: &str) -> String {
    let seed = route_seed(origin_city, destination_city, SALT_RISKS_CTA);
    match seed % 3 {
        0 => format!(
            "Get a fixed quote for {origin_city} to {destination_city} and let us carry these risks for you."
        ),
        1 => format!(
            "Ready to ship from {origin_city} to {destination_city}? Request a quote and we will plan around every risk above."
        ),
        _ => format!(
            "Compare rates for the {origin_city} to {destination_city} lane - risk management included, surprises not."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_sea_risks_are_the_authored_triple() {
        let selected = shipping_risks("Shanghai", "Los Angeles", "United States", FreightMode::Sea);
        assert_eq!(selected.rules.len(), 3);
        let mut titles: Vec<_> = selected.rules.iter().map(|r| r.title.as_str()).collect();
        titles.sort_unstable();
        assert_eq!(
            titles,
            vec![
                "Panama Canal Restrictions",
                "UFLPA Seizure Risk",
                "West Coast Port Congestion",
            ]
        );
    }

    #[test]
    fn us_air_risks_are_the_two_item_list() {
        let selected = shipping_risks("Shanghai", "Los Angeles", "United States", FreightMode::Air);
        assert_eq!(selected.rules.len(), 2);
        assert!(
            selected
                .rules
                .iter()
                .all(|r| r.title != "West Coast Port Congestion")
        );
    }

    #[test]
    fn every_risk_carries_a_severity() {
        let selected = shipping_risks("Shanghai", "Los Angeles", "United States", FreightMode::Sea);
        assert!(selected.rules.iter().all(|r| r.severity.is_some()));
        let high = selected
            .rules
            .iter()
            .find(|r| r.title == "UFLPA Seizure Risk")
            .unwrap();
        assert_eq!(high.severity, Some(Severity::High));
        assert_eq!(high.severity.unwrap().label(), "High");
    }

    #[test]
    fn cta_is_deterministic_and_interpolated() {
        let cta = risks_cta_text("Shanghai", "Los Angeles");
        assert_eq!(cta, risks_cta_text("Shanghai", "Los Angeles"));
        assert!(cta.contains("Shanghai") && cta.contains("Los Angeles"));
    }

    #[test]
    fn table_passes_validation() {
        table().validate("shipping risks").unwrap();
    }
}
