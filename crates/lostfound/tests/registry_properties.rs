//! End-to-end behaviour of the registry, search and statistics together.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use lostfound::{
    compute_statistics, list_categories, list_locations, search, ItemKind, Registry,
    RegistrationForm, SearchQuery, TypeFilter, ValidationReason,
};

fn seeded() -> Registry {
    let registry = Registry::new();
    registry
        .register(&RegistrationForm::new(
            "lost", "黑色钱包", "wallet", "library", "2025-09-10",
        ))
        .unwrap();
    registry
        .register(&RegistrationForm::new(
            "lost",
            "iPhone 13",
            "electronics",
            "canteen",
            "2025-09-11",
        ))
        .unwrap();
    registry
        .register(&RegistrationForm::new(
            "found",
            "一串钥匙",
            "keys",
            "teaching-building",
            "2025-09-12",
        ))
        .unwrap();
    registry
}

#[test]
fn seed_scenario() {
    let registry = seeded();

    let stats = compute_statistics(&registry);
    assert_eq!(stats.total_lost, 2);
    assert_eq!(stats.total_found, 1);

    let iphone = search(&registry, &SearchQuery::new().keyword("iPhone"));
    assert_eq!(iphone.total_count, 1);
    assert_eq!(iphone.items[0].type_class, ItemKind::Lost);

    let wallets = search(
        &registry,
        &SearchQuery::new()
            .category("wallet")
            .type_filter(TypeFilter::Lost),
    );
    assert_eq!(wallets.total_count, 1);
    assert_eq!(wallets.items[0].record.name, "黑色钱包");
}

#[test]
fn sample_data_matches_scenario() {
    let registry = Registry::with_sample_data().unwrap();
    let everything = search(&registry, &SearchQuery::new());
    assert_eq!(everything.ids(), vec![3, 2, 1]);
    assert_eq!(
        search(&registry, &SearchQuery::new().keyword("iphone")).ids(),
        vec![2]
    );
}

#[test]
fn ids_are_unique_and_dense() {
    let registry = Registry::new();
    let mut ids = HashSet::new();
    let mut successes = 0;

    for i in 0..40 {
        let kind = if i % 3 == 0 { "found" } else { "lost" };
        let category = list_categories()[i % list_categories().len()];
        let place = list_locations()[i % list_locations().len()];
        let mut form = RegistrationForm::new(kind, format!("item {i}"), category, place, "d");
        if i % 7 == 0 {
            form.place = "nowhere".to_string();
        }
        if let Ok(record) = registry.register(&form) {
            successes += 1;
            assert!(ids.insert(record.id), "duplicate id {}", record.id);
        }
    }

    assert_eq!(ids.len(), successes);
    assert_eq!(registry.len(), successes);
    assert_eq!(ids, (1..=successes as u64).collect::<HashSet<_>>());
}

#[test]
fn concurrent_registrations_get_distinct_ids() {
    let registry = Arc::new(Registry::new());
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                (0..25)
                    .map(|i| {
                        let kind = if (t + i) % 2 == 0 { "lost" } else { "found" };
                        registry
                            .register(&RegistrationForm::new(
                                kind,
                                format!("t{t}-{i}"),
                                "other",
                                "library",
                                "d",
                            ))
                            .unwrap()
                            .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "duplicate id {id}");
        }
    }
    assert_eq!(ids.len(), 200);
    assert_eq!(registry.len(), 200);
}

#[test]
fn concurrent_reads_see_whole_registrations() {
    let registry = Arc::new(seeded());
    let writer = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || {
            for i in 0..100 {
                registry
                    .register(&RegistrationForm::new(
                        "lost",
                        format!("w{i}"),
                        "book",
                        "gymnasium",
                        "d",
                    ))
                    .unwrap();
            }
        })
    };

    for _ in 0..50 {
        let stats = compute_statistics(&registry);
        let results = search(&registry, &SearchQuery::new());
        assert_eq!(
            stats.per_category_lost.iter().map(|c| c.count).sum::<usize>(),
            stats.total_lost
        );
        assert!(results.total_count >= 3);
    }
    writer.join().unwrap();
    assert_eq!(registry.lost_count(), 102);
}

#[test]
fn unknown_category_always_rejected() {
    let registry = Registry::new();
    for kind in ["lost", "found"] {
        for place in list_locations() {
            let err = registry
                .register(&RegistrationForm::new(kind, "x", "umbrella", *place, "d"))
                .unwrap_err();
            assert_eq!(
                err.validation_reason(),
                Some(ValidationReason::InvalidCategory)
            );
        }
    }
    assert!(registry.is_empty());
}

#[test]
fn empty_search_returns_everything_sorted() {
    let registry = seeded();
    let results = search(&registry, &SearchQuery::new());
    let collections = registry.snapshot();

    assert_eq!(results.total_count, collections.len());
    for pair in results.items.windows(2) {
        assert!(pair[0].record.created_at >= pair[1].record.created_at);
    }
}

#[test]
fn filtered_results_are_subsets() {
    let registry = seeded();
    let everything: HashSet<u64> = search(&registry, &SearchQuery::new())
        .ids()
        .into_iter()
        .collect();

    for keyword in ["", "i", "钥匙", "LIBRARY", "nothing"] {
        for category in ["", "wallet", "keys", "Wallet"] {
            for type_filter in [
                TypeFilter::All,
                TypeFilter::Lost,
                TypeFilter::Found,
                TypeFilter::Unmatched,
            ] {
                let query = SearchQuery::new()
                    .keyword(keyword)
                    .category(category)
                    .type_filter(type_filter);
                for id in search(&registry, &query).ids() {
                    assert!(everything.contains(&id));
                }
            }
        }
    }
}

#[test]
fn search_is_case_insensitive() {
    let registry = seeded();
    assert_eq!(
        search(&registry, &SearchQuery::new().keyword("IPHONE")),
        search(&registry, &SearchQuery::new().keyword("iphone"))
    );
}

#[test]
fn category_statistics_are_dense() {
    let stats = compute_statistics(&Registry::new());
    let categories: Vec<_> = stats.per_category_lost.iter().map(|c| c.category).collect();
    assert_eq!(categories, list_categories());
    assert!(stats.per_category_lost.iter().all(|c| c.count == 0));
}

#[test]
fn location_statistics_are_sparse() {
    let stats = compute_statistics(&seeded());
    let locations: Vec<_> = stats.per_location.iter().map(|l| l.location).collect();
    assert_eq!(locations, vec!["library", "canteen", "teaching-building"]);
}

#[test]
fn reads_do_not_mutate() {
    let registry = seeded();
    let before = registry.snapshot();

    for _ in 0..5 {
        let _ = search(&registry, &SearchQuery::new().keyword("a"));
        let _ = compute_statistics(&registry);
    }

    assert_eq!(registry.snapshot(), before);
    let next = registry
        .register(&RegistrationForm::new("found", "Pen", "other", "playground", "d"))
        .unwrap();
    assert_eq!(next.id, 4);
}
