//! Commonly shipped goods per destination country.

use once_cell::sync::Lazy;

use crate::constants::{SALT_GOODS, SALT_GOODS_TITLE};
use crate::route::{FreightMode, Route};
use crate::rules::{ContentRule, CountryRules, RuleSet, RuleTable};
use crate::seed::route_seed;

static TABLE: Lazy<RuleTable> = Lazy::new(table);

fn rule(title: &str, variants: &[&str]) -> ContentRule {
    ContentRule::new(title, variants)
}

fn entry(country: &str, sea: Vec<ContentRule>, air: Vec<ContentRule>) -> CountryRules {
    CountryRules {
        country: country.to_string(),
        sea,
        air,
        focus_points: Vec::new(),
    }
}

/// Authored goods table. Entry order is part of the content contract: the
/// `kingdom` key must precede `united states` or the first-word match
/// captures UK routes for the US entry.
pub(crate) fn table() -> RuleTable {
    RuleTable {
        countries: vec![
            entry(
                "netherlands",
                vec![
                    rule(
                        "High-Tech",
                        &[
                            "Servers, networking hardware and semiconductor tooling move in high volumes into the Dutch tech corridor around Eindhoven and Amsterdam.",
                            "The Netherlands is Europe's staging ground for IT hardware, with data-centre equipment and chip-making machinery arriving weekly.",
                            "Expect strong flows of electronics and semiconductor equipment feeding the Dutch high-tech manufacturing cluster.",
                        ],
                    ),
                    rule(
                        "Medical Equipment",
                        &[
                            "Imaging systems, lab instruments and hospital consumables clear through Rotterdam for distribution across the Benelux health sector.",
                            "The Dutch medtech market pulls in diagnostic devices and surgical equipment, most of it routed onward within 48 hours of discharge.",
                        ],
                    ),
                    rule(
                        "Chemicals & Plastics",
                        &[
                            "Polymers, resins and specialty chemicals are a staple of this lane, feeding the petrochemical complex in the port itself.",
                            "Chemical feedstocks and plastic granulate arrive in tank containers and bagged break-bulk for Dutch and German processors.",
                        ],
                    ),
                    rule(
                        "Consumer Goods",
                        &[
                            "Household products, furniture and seasonal retail stock transit the Netherlands on their way to European fulfilment centres.",
                            "E-commerce inventory bound for EU consumers lands here first; the Netherlands hosts several of the continent's largest distribution parks.",
                            "Retail containers dominate the spot market on this lane, from small appliances to toys and sporting goods.",
                        ],
                    ),
                    rule(
                        "Reefer Cargo",
                        &[
                            "Refrigerated produce, juice concentrate and floriculture inputs rely on the reefer plugs and cold stores clustered around Rotterdam.",
                            "The Netherlands is Europe's reefer hub, so temperature-controlled food and horticulture shipments find dense sailings and fast turnarounds.",
                        ],
                    ),
                    rule(
                        "Dangerous Goods",
                        &[
                            "Classified chemicals and lithium-battery products ship regularly on this lane under IMDG declarations handled at origin.",
                            "Hazardous cargo is routine here; Rotterdam's DG infrastructure accepts most classes with the right pre-notification.",
                        ],
                    ),
                ],
                vec![
                    rule(
                        "High-Tech",
                        &[
                            "Time-critical semiconductor parts and networking gear fly into Amsterdam Schiphol for same-day delivery to Dutch tech campuses.",
                            "Schiphol's handling capacity makes it the default gateway for urgent electronics bound for the Benelux market.",
                        ],
                    ),
                    rule(
                        "Pharmaceuticals",
                        &[
                            "Temperature-controlled pharma moves through Schiphol's GDP-certified facilities with active and passive cold-chain options.",
                            "Vaccines and biologics are a major airfreight commodity here, supported by dedicated pharma corridors at the airport.",
                        ],
                    ),
                    rule(
                        "Fashion & Apparel",
                        &[
                            "Fast-fashion replenishment flies this lane weekly to hit European store windows on schedule.",
                            "Apparel brands use airfreight into the Netherlands to shorten the gap between design and shelf.",
                        ],
                    ),
                    rule(
                        "Perishables",
                        &[
                            "Fresh produce and cut flowers land daily, feeding the Aalsmeer auction and European grocery chains.",
                            "The flower and fresh-food trade keeps perishables capacity on this lane deep and competitively priced.",
                        ],
                    ),
                ],
            ),
            entry(
                "germany",
                vec![
                    rule(
                        "Industrial Machinery",
                        &[
                            "Production lines, CNC equipment and plant machinery are the backbone of containerized imports into German industry.",
                            "German manufacturers import heavy machinery and tooling steadily, much of it as flat-rack and out-of-gauge cargo.",
                        ],
                    ),
                    rule(
                        "Automotive Parts",
                        &[
                            "OEM components and aftermarket parts flow into the German automotive supply chain through Hamburg and Bremerhaven.",
                            "Tier-1 suppliers keep a constant stream of automotive parts moving on this lane to feed just-in-time assembly.",
                            "Car parts dominate this trade, from stamped panels to wiring harnesses destined for German plants.",
                        ],
                    ),
                    rule(
                        "Chemicals",
                        &[
                            "Base and specialty chemicals arrive for Germany's chemical belt, mostly in tank containers and drums.",
                            "Chemical imports are steady year-round, supplying Ludwigshafen and the Rhine-side processing clusters.",
                        ],
                    ),
                    rule(
                        "Consumer Electronics",
                        &[
                            "Televisions, appliances and computing hardware ship in volume for Germany's large retail and B2B channels.",
                            "Electronics destined for German retailers ride this lane in peak quantities ahead of Q4.",
                        ],
                    ),
                ],
                vec![
                    rule(
                        "Automotive Parts",
                        &[
                            "Line-down emergencies make urgent automotive airfreight into Frankfurt a routine product on this lane.",
                            "When an assembly line is waiting, critical car parts fly - Frankfurt's cargo hub turns them around in hours.",
                        ],
                    ),
                    rule(
                        "Precision Instruments",
                        &[
                            "Measurement and optical equipment flies to protect calibration and shorten lead times for German engineering firms.",
                            "High-value instruments favour airfreight into Germany for the shock protection and speed it affords.",
                        ],
                    ),
                    rule(
                        "Pharmaceuticals",
                        &[
                            "Germany's pharma importers rely on temperature-managed airfreight through Frankfurt's extensive cool-chain network.",
                            "Clinical supplies and finished pharma move by air with full GDP documentation on this lane.",
                        ],
                    ),
                ],
            ),
            entry(
                "kingdom",
                vec![
                    rule(
                        "Consumer Goods",
                        &[
                            "Homeware, furniture and general merchandise make up the bulk of boxes landing at Felixstowe and Southampton.",
                            "UK retail supply chains pull consumer goods across this lane in volume, with peaks before Black Friday and Christmas.",
                        ],
                    ),
                    rule(
                        "Food & Beverage",
                        &[
                            "Ambient grocery, beverages and ingredients ship steadily to UK distributors and supermarket consolidation centres.",
                            "The UK imports a large share of its shelf-stable food by sea, and this lane carries its share of it.",
                        ],
                    ),
                    rule(
                        "Construction Materials",
                        &[
                            "Tiles, timber products and fittings supply UK construction, often as full-container loads direct to merchants.",
                            "Building products are a dependable base load on this trade, from sanitaryware to engineered stone.",
                        ],
                    ),
                    rule(
                        "Automotive Parts",
                        &[
                            "Parts for UK assembly plants and the aftermarket arrive weekly, balanced between OEM programmes and spot shipments.",
                            "The UK aftermarket keeps a steady flow of automotive components moving on this routing.",
                        ],
                    ),
                ],
                vec![
                    rule(
                        "E-commerce Parcels",
                        &[
                            "Cross-border e-commerce consolidations fly into the UK daily to keep marketplace delivery promises.",
                            "Parcel-freight consolidations are the fastest-growing airfreight product on this lane.",
                        ],
                    ),
                    rule(
                        "Fashion & Apparel",
                        &[
                            "UK fashion retailers fly seasonal drops to compress time-to-shelf on trend-sensitive lines.",
                            "Apparel replenishment by air is routine here, especially for fast-fashion and athleisure brands.",
                        ],
                    ),
                    rule(
                        "Pharmaceuticals",
                        &[
                            "Temperature-sensitive pharma flies into London Heathrow under full cool-chain custody.",
                            "The UK pharma trade uses this air corridor for launches, recalls and clinical resupply.",
                        ],
                    ),
                ],
            ),
            entry(
                "united states",
                vec![
                    rule(
                        "Furniture & Homeware",
                        &[
                            "Flat-packed furniture and home goods are the signature cargo of this trade, filling high-cube containers to the brim.",
                            "US importers of furniture and decor keep this lane busy year-round, with a surge ahead of the fall season.",
                        ],
                    ),
                    rule(
                        "Consumer Electronics",
                        &[
                            "Phones, accessories and smart-home devices ship in dense, high-value loads bound for US distribution centres.",
                            "Electronics remain among the top commodities on this lane by declared value.",
                            "US retail electronics programmes ride this routing, timed to product launches and holiday resets.",
                        ],
                    ),
                    rule(
                        "E-commerce Inventory",
                        &[
                            "Marketplace sellers restock US fulfilment centres over this lane, often under FBA-style delivery requirements.",
                            "Direct-to-consumer brands move container-loads of inventory here to stay ahead of US demand.",
                        ],
                    ),
                    rule(
                        "Machinery",
                        &[
                            "Industrial equipment and spare assemblies move in steadily for US manufacturing and energy projects.",
                            "Machinery imports are a reliable mid-weight commodity on this routing, much of it crated break-bulk in containers.",
                        ],
                    ),
                    rule(
                        "Garments",
                        &[
                            "Apparel and footwear fill a large share of capacity on this lane, cut to the US retail calendar.",
                            "US fashion importers book garments on this trade in volume, balancing speed against the air alternative.",
                        ],
                    ),
                ],
                vec![
                    rule(
                        "Consumer Electronics",
                        &[
                            "Product launches and warranty replacements keep high-value electronics flying this corridor weekly.",
                            "Electronics with launch-date pressure fly; everything else sails - this lane sees plenty of the former.",
                        ],
                    ),
                    rule(
                        "E-commerce Restock",
                        &[
                            "Sellers flying restock into US hubs use this corridor to recover from stockouts in days, not weeks.",
                            "Air restock programmes smooth US inventory positions when sea schedules slip.",
                        ],
                    ),
                    rule(
                        "Trade Show Freight",
                        &[
                            "Exhibition stands and demo units fly both directions around the US trade-show calendar.",
                            "Time-fixed event cargo is a steady niche on this air lane, moving under carnet where possible.",
                        ],
                    ),
                ],
            ),
            entry(
                "japan",
                vec![
                    rule(
                        "Automotive Components",
                        &[
                            "Components for Japanese vehicle production move on fixed weekly loops with tight transshipment windows.",
                            "The Japanese automotive sector anchors this trade with steady containerized part flows.",
                        ],
                    ),
                    rule(
                        "Industrial Robotics",
                        &[
                            "Robotics and automation cells ship to and from Japan's machine-builders, usually crated and shock-logged.",
                            "Japan's automation industry keeps precision robotics moving across this lane in both directions.",
                        ],
                    ),
                    rule(
                        "Consumer Electronics",
                        &[
                            "Gaming hardware, imaging gear and components round out the consumer-electronics flow on this routing.",
                            "Electronics shipments to Japan favour this lane for its schedule reliability.",
                        ],
                    ),
                    rule(
                        "Specialty Chemicals",
                        &[
                            "High-purity chemicals for Japanese electronics fabs travel in dedicated tank and ISO-container stock.",
                            "Specialty chemical flows supply Japan's semiconductor and display industries on this trade.",
                        ],
                    ),
                ],
                vec![
                    rule(
                        "Semiconductor Equipment",
                        &[
                            "Fab tools and spares fly into Japan under strict shock and tilt monitoring.",
                            "Semiconductor equipment moves by air on this lane when fab schedules leave no slack.",
                        ],
                    ),
                    rule(
                        "Precision Instruments",
                        &[
                            "Optics and metrology equipment take the air option for Japan's instrument makers.",
                            "Precision cargo flies this corridor to protect calibration and compress lead time.",
                        ],
                    ),
                    rule(
                        "Gaming Hardware",
                        &[
                            "Console launches and peripheral drops fly to hit Japanese street dates.",
                            "Launch-window gaming hardware is a recurring airfreight product on this lane.",
                        ],
                    ),
                ],
            ),
            entry(
                "australia",
                vec![
                    rule(
                        "Mining Equipment",
                        &[
                            "Spares and assemblies for Australian mining operations move as heavy, often out-of-gauge, container cargo.",
                            "The resources sector drives steady machinery imports into Australia over this lane.",
                        ],
                    ),
                    rule(
                        "Agricultural Machinery",
                        &[
                            "Tractors, implements and parts arrive ahead of the Australian planting and harvest windows.",
                            "Ag-machinery programmes book this lane seasonally, with units shipped broken-down to cube efficiently.",
                        ],
                    ),
                    rule(
                        "Consumer Goods",
                        &[
                            "Retail merchandise for Australian chains lands mostly into Sydney and Melbourne on fixed-day services.",
                            "Consumer imports dominate the eastbound boxes on this trade, keyed to the southern-hemisphere seasons.",
                        ],
                    ),
                    rule(
                        "Building Materials",
                        &[
                            "Construction products supply Australia's housing pipeline, from fixtures to engineered timber.",
                            "Building-material flows hold this lane's base load steady through the year.",
                        ],
                    ),
                ],
                vec![
                    rule(
                        "Medical Supplies",
                        &[
                            "Hospital consumables and devices fly into Australia where sea transit times are too long to risk.",
                            "The Australian health sector uses this air corridor for urgent clinical resupply.",
                        ],
                    ),
                    rule(
                        "E-commerce Parcels",
                        &[
                            "Cross-border parcel consolidations fly daily to keep Australian marketplace promises.",
                            "E-commerce consolidations anchor airfreight demand on this corridor.",
                        ],
                    ),
                    rule(
                        "Perishables",
                        &[
                            "Premium perishables ride this air lane in both directions, matched to tight shelf-life windows.",
                            "Fresh and chilled goods fly where the voyage would consume their shelf life.",
                        ],
                    ),
                ],
            ),
        ],
        default: entry(
            "default",
            vec![
                rule(
                    "General Cargo",
                    &[
                        "Mixed manufactured goods make up the bulk of containers on this lane, from components to finished product.",
                        "This trade carries a broad mix of general cargo, consolidated or as full-container loads.",
                    ],
                ),
                rule(
                    "Consumer Goods",
                    &[
                        "Retail merchandise and household products are a consistent commodity on this routing.",
                        "Consumer imports hold the base load on this lane through the retail calendar.",
                    ],
                ),
                rule(
                    "Machinery & Parts",
                    &[
                        "Capital equipment and spare parts move steadily, much of it crated for break-bulk stowage in containers.",
                        "Industrial machinery is a regular mid-weight commodity here.",
                    ],
                ),
                rule(
                    "Textiles & Garments",
                    &[
                        "Apparel and fabrics ship in volume, timed against the destination retail seasons.",
                        "Garment flows give this lane a dependable, high-cube cargo base.",
                    ],
                ),
            ],
            vec![
                rule(
                    "Electronics",
                    &[
                        "High-value electronics take the air option on this lane when launch dates or stockouts demand it.",
                        "Urgent electronics are the most common airfreight booking on this corridor.",
                    ],
                ),
                rule(
                    "Urgent Spare Parts",
                    &[
                        "Line-down and AOG-style emergencies keep a steady trickle of critical spares flying this route.",
                        "When equipment is down, spares fly - this lane handles them with priority uplift.",
                    ],
                ),
                rule(
                    "Commercial Samples",
                    &[
                        "Product samples and pre-production runs fly ahead of bulk orders to close deals faster.",
                        "Sample shipments ride this air corridor ahead of every sourcing season.",
                    ],
                ),
            ],
        ),
    }
}

/// Commonly shipped goods for a route, phrased and ordered for that route.
#[must_use]
pub fn common_goods(
    origin_city: &str,
    destination_city: &str,
    destination_country: &str,
    mode: FreightMode,
) -> RuleSet {
    let route = Route::new(origin_city, destination_city, destination_country, mode);
    TABLE.select(&route, SALT_GOODS)
}

/// Section heading for the goods block of a lane page.
#[must_use]
pub fn goods_section_title(origin_city: &str, destination_city: &str) -> String {
    let seed = route_seed(origin_city, destination_city, SALT_GOODS_TITLE);
    match seed % 4 {
        0 => format!("Commonly Shipped Goods from {origin_city} to {destination_city}"),
        1 => format!("What Ships from {origin_city} to {destination_city}?"),
        2 => format!("Typical Cargo on the {origin_city} to {destination_city} Lane"),
        _ => format!("Freight Moving from {origin_city} to {destination_city}"),
    }
}
