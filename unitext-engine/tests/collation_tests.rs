//! Collation behaviour over real ICU4X data

use std::cmp::Ordering;

use proptest::prelude::*;
use unitext_engine::collate::{compare, sort};
use unitext_engine::*;

fn opts(strength: Strength) -> CollationOptions {
    CollationOptions::with_strength(strength)
}

#[test]
fn test_primary_ignores_case() {
    let collator = Collator::new("en-US", opts(Strength::Primary)).unwrap();
    assert_eq!(collator.compare("a", "A"), Ordering::Equal);
    assert!(collator.is_equal("e", "\u{00E9}"));
}

#[test]
fn test_tertiary_distinguishes_case() {
    let collator = Collator::new("en-US", opts(Strength::Tertiary)).unwrap();
    assert_ne!(collator.compare("a", "A"), Ordering::Equal);
    assert!(collator.is_less("a", "A"));
    assert!(collator.is_greater("A", "a"));
}

#[test]
fn test_secondary_distinguishes_accents_not_case() {
    let collator = Collator::new("en", opts(Strength::Secondary)).unwrap();
    assert!(collator.is_less("e", "\u{00E9}"));
    assert!(collator.is_equal("e", "E"));
}

#[test]
fn test_numeric_ordering() {
    let items = ["item10", "item2", "item1"];
    let numeric = CollationOptions::default().numeric(true);
    assert_eq!(
        sort(items, "en", numeric).unwrap(),
        ["item1", "item2", "item10"]
    );
    assert_eq!(
        sort(items, "en", CollationOptions::default()).unwrap(),
        ["item1", "item10", "item2"]
    );
}

#[test]
fn test_case_first() {
    let upper = CollationOptions::default().case_first(CaseFirst::Upper);
    assert_eq!(sort(["a", "A"], "en", upper).unwrap(), ["A", "a"]);

    let lower = CollationOptions::default().case_first(CaseFirst::Lower);
    assert_eq!(sort(["A", "a"], "en", lower).unwrap(), ["a", "A"]);
}

#[test]
fn test_case_level_with_primary_strength() {
    let options = opts(Strength::Primary).case_level(true);
    let collator = Collator::new("en", options).unwrap();
    assert!(!collator.is_equal("a", "A"));
    // accents stay ignored at primary strength
    assert!(collator.is_equal("e", "\u{00E9}"));
}

#[test]
fn test_french_accent_order() {
    let sorted = sort(
        ["c\u{00F4}te", "cote", "caf\u{00E9}", "cot\u{00E9}"],
        "fr-FR",
        CollationOptions::default(),
    )
    .unwrap();
    assert_eq!(
        sorted,
        ["caf\u{00E9}", "cote", "cot\u{00E9}", "c\u{00F4}te"]
    );
}

#[test]
fn test_one_off_compare() {
    assert_eq!(
        compare("apple", "banana", "en", CollationOptions::default()).unwrap(),
        Ordering::Less
    );
    assert_eq!(
        compare("x", "x", "", CollationOptions::default()).unwrap(),
        Ordering::Equal
    );
    assert!(compare("a", "b", "!!", CollationOptions::default()).is_err());
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let collator = Collator::new("en", opts(Strength::Primary)).unwrap();
    let sorted = collator.sort(["b", "A", "a", "B"]).unwrap();
    assert_eq!(sorted, ["A", "a", "b", "B"]);
}

#[test]
fn test_large_sort_matches_numeric_order() {
    let collator = Collator::new("en", CollationOptions::default().numeric(true)).unwrap();
    let items: Vec<String> = (0..5000).rev().map(|i| format!("row {i}")).collect();
    let sorted = collator.sort(items).unwrap();
    let expected: Vec<String> = (0..5000).map(|i| format!("row {i}")).collect();
    assert_eq!(sorted, expected);
}

#[test]
fn test_sort_empty_input() {
    let collator = Collator::new("en", CollationOptions::default()).unwrap();
    assert!(collator.sort(Vec::<String>::new()).unwrap().is_empty());
}

#[test]
fn test_sort_by_key_on_records() {
    #[derive(Debug, PartialEq)]
    struct City {
        name: &'static str,
        id: u32,
    }

    let collator = Collator::new("de", CollationOptions::default()).unwrap();
    let mut cities = vec![
        City { name: "Zürich", id: 1 },
        City { name: "Berlin", id: 2 },
        City { name: "Äschach", id: 3 },
    ];
    collator.sort_by_key(&mut cities, |c| c.name).unwrap();
    let ids: Vec<u32> = cities.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[test]
fn test_comparator_with_std_sort() {
    let collator = Collator::new("en", CollationOptions::default()).unwrap();
    let cmp = collator.comparator();
    let mut words = vec!["pear", "Apple", "banana"];
    words.sort_by(|a, b| cmp(a, b));
    assert_eq!(words, ["Apple", "banana", "pear"]);
}

#[test]
fn test_accessors_and_debug() {
    let options = CollationOptions::default()
        .strength(Strength::Secondary)
        .numeric(true);
    let collator = Collator::new("en_US", options).unwrap();
    assert_eq!(collator.strength(), Strength::Secondary);
    assert!(collator.numeric());
    assert_eq!(collator.case_first(), CaseFirst::Off);
    assert!(!collator.case_level());
    assert_eq!(
        format!("{collator:?}"),
        "Collator(locale='en-US', strength='secondary', numeric=true)"
    );
}

#[test]
fn test_collator_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Collator>();

    let collator = Collator::new("en", CollationOptions::default()).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let collator = collator.clone();
            std::thread::spawn(move || collator.compare("a", "b"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ordering::Less);
    }
}

#[test]
fn test_keys_order_like_compare_for_every_option_set() {
    let samples = [
        "", "a", "A", "\u{00E9}", "e\u{0301}", "E", "\u{00DF}", "ss", "SS", "item2", "item10",
        "\u{30AB}", "\u{FF76}", "\u{304B}", "\u{FFFE}", "\u{0000}", "a\u{0000}b", "-a", "a-",
        "co-op", "coop", "\u{00C5}", "A\u{030A}", "z", "\u{1F600}",
    ];
    let case_firsts = [CaseFirst::Off, CaseFirst::Upper, CaseFirst::Lower];
    for strength in Strength::ALL {
        for case_first in case_firsts {
            for numeric in [false, true] {
                for case_level in [false, true] {
                    let options = CollationOptions::with_strength(strength)
                        .numeric(numeric)
                        .case_first(case_first)
                        .case_level(case_level);
                    let collator = Collator::new("en", options).unwrap();
                    let keys: Vec<_> = samples.iter().map(|s| collator.key(s).unwrap()).collect();
                    for (i, a) in samples.iter().enumerate() {
                        for (j, b) in samples.iter().enumerate() {
                            assert_eq!(
                                keys[i].cmp(&keys[j]),
                                collator.compare(a, b),
                                "{a:?} vs {b:?} with {options:?}"
                            );
                        }
                    }
                }
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_keys_order_like_compare(
        a in "[a-cA-C0-9\u{00E9}\u{00C9}\u{00DF} s\u{0301}]{0,6}",
        b in "[a-cA-C0-9\u{00E9}\u{00C9}\u{00DF} s\u{0301}]{0,6}",
        strength in proptest::sample::select(Strength::ALL.to_vec()),
        case_first in proptest::sample::select(vec![CaseFirst::Off, CaseFirst::Upper, CaseFirst::Lower]),
        numeric in any::<bool>(),
        case_level in any::<bool>(),
    ) {
        let options = CollationOptions::with_strength(strength)
            .numeric(numeric)
            .case_first(case_first)
            .case_level(case_level);
        let collator = Collator::new("en", options).unwrap();
        let by_keys = collator.key(&a).unwrap().cmp(&collator.key(&b).unwrap());
        prop_assert_eq!(by_keys, collator.compare(&a, &b));
    }

    #[test]
    fn prop_compare_is_antisymmetric(a in "\\PC{0,8}", b in "\\PC{0,8}") {
        let collator = Collator::new("en", CollationOptions::default()).unwrap();
        prop_assert_eq!(collator.compare(&a, &b), collator.compare(&b, &a).reverse());
    }
}
