mod common;

use common::{create_test_environment, open_lists, TWO_ITEM_CATALOG};
use lovelists_core::{CatalogQuery, ToggleStep};

fn ids(cards: &lovelists_core::Cards<'_>) -> Vec<String> {
    cards.iter().map(|c| c.template.id.clone()).collect()
}

#[test]
fn test_progress_survives_reopen() {
    let env = create_test_environment(TWO_ITEM_CATALOG);

    {
        let mut lists = open_lists(&env);
        lists
            .toggle_step(&ToggleStep {
                id: "1".to_string(),
                index: 0,
            })
            .expect("Failed to toggle step");
        lists
            .toggle_step(&ToggleStep {
                id: "1".to_string(),
                index: 2,
            })
            .expect("Failed to toggle step");
    }

    let lists = open_lists(&env);
    let checklist = lists.show("1").expect("Failed to show list");
    assert_eq!(checklist.progress, vec![true, false, true, false]);
    assert_eq!(checklist.stats.done, 2);
    assert_eq!(checklist.stats.pct, 50);
}

#[test]
fn test_progress_reconciles_after_catalog_update() {
    let env = create_test_environment(TWO_ITEM_CATALOG);
    {
        let mut lists = open_lists(&env);
        for index in [1, 3] {
            lists
                .toggle_step(&ToggleStep {
                    id: "1".to_string(),
                    index,
                })
                .expect("Failed to toggle step");
        }
    }

    // A newer catalog drops the last two steps of list 1
    std::fs::write(
        env.path().join("catalog.json"),
        r#"[{"id": "1", "title": "Declutter", "steps": ["Counters", "Cupboards"]}]"#,
    )
    .expect("Failed to rewrite catalog");

    let mut lists = open_lists(&env);
    let checklist = lists.show("1").expect("Failed to show list");
    assert_eq!(checklist.progress, vec![false, true]);
    assert_eq!(checklist.stats.pct, 50);

    // The next write stores the reconciled shape
    let checklist = lists
        .toggle_step(&ToggleStep {
            id: "1".to_string(),
            index: 0,
        })
        .expect("Failed to toggle step");
    assert_eq!(checklist.progress, vec![true, true]);
    assert!(checklist.stats.is_complete());
}

#[test]
fn test_saved_and_recent_survive_reopen() {
    let env = create_test_environment(TWO_ITEM_CATALOG);
    {
        let mut lists = open_lists(&env);
        lists.toggle_saved("2").expect("Failed to save");
        lists.open_list("2").expect("Failed to open");
        lists.open_list("1").expect("Failed to open");
    }

    let lists = open_lists(&env);
    assert_eq!(ids(&lists.saved_lists().unwrap()), vec!["2"]);
    assert_eq!(ids(&lists.recent_lists().unwrap()), vec!["1", "2"]);
}

#[test]
fn test_two_item_catalog_queries() {
    let env = create_test_environment(TWO_ITEM_CATALOG);
    let lists = open_lists(&env);

    assert_eq!(
        ids(&lists.search(&CatalogQuery::category("Home")).unwrap()),
        vec!["1"]
    );
    assert_eq!(
        ids(&lists.search(&CatalogQuery::text("wed")).unwrap()),
        vec!["2"]
    );
    assert_eq!(
        ids(&lists.search(&CatalogQuery::tag("HOME")).unwrap()),
        vec!["1"]
    );

    let grouped = lists.browse(&CatalogQuery::default()).unwrap();
    let summary: Vec<(String, Vec<String>)> = grouped
        .0
        .iter()
        .map(|g| {
            (
                g.category.clone(),
                g.cards.iter().map(|c| c.template.id.clone()).collect(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Events".to_string(), vec!["2".to_string()]),
            ("Home".to_string(), vec!["1".to_string()]),
        ]
    );
}

#[test]
fn test_browse_output_renders_cards() {
    let env = create_test_environment(TWO_ITEM_CATALOG);
    let mut lists = open_lists(&env);
    lists
        .toggle_step(&ToggleStep {
            id: "2".to_string(),
            index: 0,
        })
        .unwrap();

    let output = lists.browse(&CatalogQuery::default()).unwrap().to_string();
    assert!(output.contains("## Events (1)"));
    assert!(output.contains("## Home (1)"));
    assert!(output.contains("- **Progress**: 1/2 (50%)"));
    assert!(!output.contains("Home & Life Admin"));
}
