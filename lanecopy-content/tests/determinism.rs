use std::hash::Hasher;

use lanecopy_content::{
    ContentLibrary, FreightMode, Route, RuleSet, common_goods, shipping_risks, simple_hash,
};
use serde_json::{Map, Value};
use twox_hash::XxHash64;

#[test]
fn us_sea_risks_scenario_is_stable_over_repeated_calls() {
    let first = shipping_risks("Shanghai", "Los Angeles", "United States", FreightMode::Sea);
    for _ in 0..100 {
        let again = shipping_risks("Shanghai", "Los Angeles", "United States", FreightMode::Sea);
        assert_eq!(again, first, "identical route must render identical content");
    }

    // Pinned presentation order for this route's seed; a change here means
    // the hash, the shuffle or the authored table moved underneath live
    // pages.
    let titles: Vec<_> = first.rules.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "West Coast Port Congestion",
            "Panama Canal Restrictions",
            "UFLPA Seizure Risk",
        ]
    );

    // One phrasing chosen per rule, always a valid slot of that rule.
    let library = ContentLibrary::builtin();
    let entry = library.risks.resolve_country("United States");
    let seed = Route::new("Shanghai", "Los Angeles", "United States", FreightMode::Sea)
        .seed("risks");
    for resolved in &first.rules {
        let index = entry
            .sea
            .iter()
            .position(|r| r.title == resolved.title)
            .expect("title comes from the authored table");
        let rule = &entry.sea[index];
        let expected = &rule.variants[((seed as u64 + index as u64) % rule.variants.len() as u64) as usize];
        assert_eq!(&resolved.description, expected);
    }
}

#[test]
fn us_air_risks_swap_in_the_two_item_list() {
    let air = shipping_risks("Shanghai", "Los Angeles", "United States", FreightMode::Air);
    let titles: Vec<_> = air.rules.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Peak Season Capacity Crunch", "CBP Airfreight Exams"]
    );

    // Mode isolation: same seed derivation, different authored list.
    let sea = shipping_risks("Shanghai", "Los Angeles", "United States", FreightMode::Sea);
    assert_ne!(
        sea.rules.iter().map(|r| &r.title).collect::<Vec<_>>(),
        air.rules.iter().map(|r| &r.title).collect::<Vec<_>>()
    );
}

#[test]
fn netherlands_goods_scenario_matches_the_country_table() {
    let selected = common_goods("Shenzhen", "Rotterdam", "Netherlands", FreightMode::Sea);
    let titles: Vec<_> = selected.rules.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Medical Equipment",
            "Consumer Goods",
            "Dangerous Goods",
            "Chemicals & Plastics",
            "Reefer Cargo",
            "High-Tech",
        ]
    );
}

#[test]
fn hash_and_seed_are_stable_across_processes() {
    // Values pinned against the reference recurrence; nothing here may vary
    // by platform, process or run.
    assert_eq!(simple_hash("shanghai-losangeles-customs"), 197_641_610);
    assert_eq!(simple_hash("Shenzhen-Rotterdam-goods"), 279_489_655);
    assert_eq!(simple_hash("Shanghai-Los Angeles-risks"), 1_246_129_292);
}

#[test]
fn full_route_snapshot_digest_is_reproducible() {
    let routes = [
        ("Shanghai", "Los Angeles", "United States"),
        ("Shenzhen", "Rotterdam", "Netherlands"),
        ("Ningbo", "Hamburg", "Germany"),
        ("Qingdao", "Sydney", "Australia"),
        ("Shanghai", "Nowhere", "Atlantis"),
    ];
    let first = snapshot_digest(&ContentLibrary::builtin(), &routes);
    let second = snapshot_digest(&ContentLibrary::builtin(), &routes);
    assert_eq!(first, second, "snapshot digest must not vary between loads");
}

#[test]
fn rule_sets_round_trip_through_json() {
    let selected = shipping_risks("Shanghai", "Los Angeles", "United States", FreightMode::Sea);
    let json = serde_json::to_string(&selected).unwrap();
    let restored: RuleSet = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, selected);
}

fn snapshot_digest(library: &ContentLibrary, routes: &[(&str, &str, &str)]) -> u64 {
    let mut snapshot = Vec::new();
    for &(origin, destination, country) in routes {
        for mode in [FreightMode::Sea, FreightMode::Air] {
            let route = Route::new(origin, destination, country, mode);
            snapshot.push(serde_json::json!({
                "route": format!("{origin}-{destination}-{country}-{mode}"),
                "goods": library.common_goods(&route),
                "customs": library.customs_clearance(&route),
                "dangerous_goods": library.dangerous_goods(&route),
                "risks": library.shipping_risks(&route),
            }));
        }
    }
    let canonical =
        serde_json::to_string(&canonicalize_value(serde_json::to_value(snapshot).unwrap()))
            .unwrap();
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(canonical.as_bytes());
    hasher.finish()
}

fn canonicalize_value(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(canonicalize_value)
                .collect::<Vec<_>>(),
        ),
        Value::Object(map) => {
            let mut result = Map::with_capacity(map.len());
            let mut entries: Vec<_> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            for (key, value) in entries {
                result.insert(key, canonicalize_value(value));
            }
            Value::Object(result)
        }
        other => other,
    }
}
