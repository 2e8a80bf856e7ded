use lanecopy_content::{ContentLibrary, FreightMode, Route, RuleTable};

fn tables(library: &ContentLibrary) -> [(&'static str, &RuleTable); 4] {
    [
        ("goods", &library.goods),
        ("customs", &library.customs),
        ("dangerous_goods", &library.dangerous_goods),
        ("risks", &library.risks),
    ]
}

#[test]
fn builtin_library_passes_validation() {
    ContentLibrary::builtin().validate().unwrap();
}

#[test]
fn every_authored_rule_has_variants_and_lowercase_keys() {
    let library = ContentLibrary::builtin();
    for (name, table) in tables(&library) {
        for entry in table.countries.iter().chain(std::iter::once(&table.default)) {
            assert!(!entry.country.is_empty(), "{name}: empty country key");
            assert_eq!(
                entry.country,
                entry.country.to_lowercase(),
                "{name}: match keys are lowercase by contract"
            );
            for rule in entry.sea.iter().chain(entry.air.iter()) {
                assert!(
                    !rule.variants.is_empty(),
                    "{name}/{}: rule {:?} has no variants",
                    entry.country,
                    rule.title
                );
            }
        }
    }
}

#[test]
fn defaults_cover_both_modes() {
    let library = ContentLibrary::builtin();
    for (name, table) in tables(&library) {
        assert!(!table.default.sea.is_empty(), "{name}: default sea empty");
        assert!(!table.default.air.is_empty(), "{name}: default air empty");
    }
}

#[test]
fn every_country_entry_resolves_to_itself() {
    // First-match-wins fuzzy search is order-sensitive; this sweep catches
    // an entry that another key's first-word match shadows completely.
    let library = ContentLibrary::builtin();
    for (name, table) in tables(&library) {
        for entry in &table.countries {
            let resolved = table.resolve_country(&entry.country);
            assert_eq!(
                resolved.country, entry.country,
                "{name}: entry {:?} is shadowed by an earlier key",
                entry.country
            );
        }
    }
}

#[test]
fn selection_is_a_bijection_over_the_authored_rules() {
    let library = ContentLibrary::builtin();
    for (name, table) in tables(&library) {
        for entry in table.countries.iter().chain(std::iter::once(&table.default)) {
            for mode in [FreightMode::Sea, FreightMode::Air] {
                let route = Route::new("Shanghai", "Rotterdam", &entry.country, mode);
                let resolved = table.resolve_country(&entry.country);
                let selected = table.select(&route, name);

                let mut got: Vec<_> = selected.rules.iter().map(|r| r.title.clone()).collect();
                let mut expected: Vec<_> =
                    resolved.rules_for(mode).iter().map(|r| r.title.clone()).collect();
                got.sort_unstable();
                expected.sort_unstable();
                assert_eq!(
                    got, expected,
                    "{name}/{}/{mode}: shuffle must neither drop nor duplicate rules",
                    entry.country
                );

                let mut focus_got = selected.focus_points.clone();
                let mut focus_expected = resolved.focus_points.clone();
                focus_got.sort_unstable();
                focus_expected.sort_unstable();
                assert_eq!(focus_got, focus_expected);
            }
        }
    }
}

#[test]
fn every_description_is_an_authored_variant() {
    let library = ContentLibrary::builtin();
    for (name, table) in tables(&library) {
        for entry in &table.countries {
            for mode in [FreightMode::Sea, FreightMode::Air] {
                let route = Route::new("Xiamen", "Melbourne", &entry.country, mode);
                let selected = table.select(&route, name);
                for resolved in &selected.rules {
                    let rule = table
                        .resolve_country(&entry.country)
                        .rules_for(mode)
                        .iter()
                        .find(|r| r.title == resolved.title)
                        .expect("selected title exists in authored list");
                    assert!(
                        rule.variants.contains(&resolved.description),
                        "{name}/{}/{mode}: {:?} picked an unauthored phrasing",
                        entry.country,
                        resolved.title
                    );
                    assert_eq!(rule.severity, resolved.severity);
                    assert_eq!(rule.restricted, resolved.restricted);
                }
            }
        }
    }
}

#[test]
fn unknown_countries_always_fall_back_without_panicking() {
    let library = ContentLibrary::builtin();
    for (name, table) in tables(&library) {
        for country in ["Atlantis", "Wakanda", "", "  ", "Zzz-123"] {
            for mode in [FreightMode::Sea, FreightMode::Air] {
                let route = Route::new("Shanghai", "Nowhere", country, mode);
                let selected = table.select(&route, name);
                assert!(
                    !selected.rules.is_empty(),
                    "{name}: default table must answer for {country:?} {mode}"
                );
            }
        }
    }
}

#[test]
fn risks_carry_severity_and_other_domains_do_not() {
    let library = ContentLibrary::builtin();
    for entry in library
        .risks
        .countries
        .iter()
        .chain(std::iter::once(&library.risks.default))
    {
        for rule in entry.sea.iter().chain(entry.air.iter()) {
            assert!(
                rule.severity.is_some(),
                "risk {:?} is missing a severity",
                rule.title
            );
        }
    }
    for entry in library
        .goods
        .countries
        .iter()
        .chain(std::iter::once(&library.goods.default))
    {
        for rule in entry.sea.iter().chain(entry.air.iter()) {
            assert!(rule.severity.is_none());
        }
    }
}
