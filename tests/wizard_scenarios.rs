//! Integration tests for the question flow.
//!
//! Covers the reference scenarios for filtering, stopping and scoring, and
//! drives complete sessions through the public API, from a catalog file on
//! disk to the final result list.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use product_wizard::adapters::{FileCatalogSource, InMemoryCatalogSource, TokioAdvanceScheduler};
use product_wizard::application::{WizardSessionHandler, WizardTiming};
use product_wizard::domain::analysis::PowerCalculator;
use product_wizard::domain::catalog::{AttributeValue, Catalog, Item, QuestionSet, QuestionSpec};
use product_wizard::domain::filter::FilterEngine;
use product_wizard::domain::selection::{Answer, QuestionHistory, SelectionState};
use product_wizard::domain::wizard::{
    decide_next, should_stop_now, AdvanceMode, WizardSnapshot, WizardStatus,
};
use product_wizard::ports::CatalogSource;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn questions() -> QuestionSet {
    QuestionSet::new(vec![
        QuestionSpec::contains_or_catch_all("loc", "loc", "global").at(1),
        QuestionSpec::boolean("fragranceFree", "fragranceFree").at(2),
        QuestionSpec::contains_all("specialFeatures", "specialFeatures").at(3),
    ])
    .unwrap()
}

/// The two-item catalog used by scenarios A to C.
fn two_items() -> Vec<Item> {
    vec![
        Item::new(1)
            .with("loc", AttributeValue::list(["US"]))
            .with("fragranceFree", true),
        Item::new(2)
            .with("loc", AttributeValue::list(["EU"]))
            .with("fragranceFree", false),
    ]
}

fn ids(items: &[&Item]) -> Vec<u32> {
    items.iter().map(|item| item.id.value()).collect()
}

fn active(snapshot: &WizardSnapshot) -> Option<&str> {
    snapshot.active_question.as_ref().map(|q| q.key.as_str())
}

fn handler(catalog: Catalog, mode: AdvanceMode) -> WizardSessionHandler {
    let timing = WizardTiming {
        advance_delay: Duration::from_millis(15),
        ..WizardTiming::default()
    };
    WizardSessionHandler::new(
        Arc::new(catalog),
        mode,
        timing,
        Arc::new(TokioAdvanceScheduler::new()),
    )
}

// =============================================================================
// Reference scenarios
// =============================================================================

#[test]
fn scenario_a_no_answers_keeps_everything_and_picks_first_tied_question() {
    let questions = questions();
    let items = two_items();
    let selections = SelectionState::new();

    let matching = FilterEngine::filter(&questions, &items, &selections);
    assert_eq!(ids(&matching), vec![1, 2]);

    let next = decide_next(&questions, &selections, &QuestionHistory::new(), &matching);
    assert_eq!(next.as_deref(), Some("loc"));
}

#[test]
fn scenario_b_singleton_result_stops() {
    let questions = questions();
    let items = two_items();
    let selections = SelectionState::new().with("loc", Answer::parse("US"));

    let matching = FilterEngine::filter(&questions, &items, &selections);

    assert_eq!(ids(&matching), vec![1]);
    assert!(should_stop_now(
        &questions,
        &selections,
        &QuestionHistory::new(),
        &matching
    ));
}

#[test]
fn scenario_c_any_keeps_all_items_but_counts_as_answered() {
    let questions = questions();
    let items = two_items();
    let selections = SelectionState::new().with("loc", Answer::parse("any"));

    let matching = FilterEngine::filter(&questions, &items, &selections);
    assert_eq!(ids(&matching), vec![1, 2]);

    let next = decide_next(&questions, &selections, &QuestionHistory::new(), &matching);
    assert_eq!(next.as_deref(), Some("fragranceFree"));
}

#[test]
fn scenario_d_multi_select_excludes_items_without_the_attribute() {
    let questions = questions();
    let items = vec![
        Item::new(1).with("specialFeatures", AttributeValue::list(["eco", "vegan"])),
        Item::new(2).with("loc", AttributeValue::list(["US"])),
    ];
    let selections = SelectionState::new().with("specialFeatures", Answer::values(["eco"]));

    let matching = FilterEngine::filter(&questions, &items, &selections);

    assert_eq!(ids(&matching), vec![1]);
}

#[test]
fn scenario_e_uniform_attribute_has_no_power() {
    let questions =
        QuestionSet::new(vec![QuestionSpec::category("skinType", "skinType", "universal")])
            .unwrap();
    let items: Vec<Item> = (1..=3)
        .map(|id| Item::new(id).with("skinType", "oily"))
        .collect();
    let refs: Vec<&Item> = items.iter().collect();

    assert_eq!(PowerCalculator::compute(&questions, "skinType", &refs), 0.0);
}

#[test]
fn unknown_question_key_has_no_power() {
    let items = two_items();
    let refs: Vec<&Item> = items.iter().collect();
    assert_eq!(PowerCalculator::compute(&questions(), "colour", &refs), 0.0);
}

#[test]
fn option_probe_reports_dead_ends() {
    let questions = questions();
    let items = two_items();
    let selections = SelectionState::new().with("fragranceFree", Answer::parse("true"));

    assert!(FilterEngine::would_match_anything(
        &questions,
        &items,
        &selections,
        "loc",
        &Answer::parse("US")
    ));
    assert!(!FilterEngine::would_match_anything(
        &questions,
        &items,
        &selections,
        "loc",
        &Answer::parse("EU")
    ));
}

// =============================================================================
// Full sessions
// =============================================================================

const YAML_CATALOG: &str = r#"
questions:
  - key: skinType
    attribute: skinType
    isMultiValued: false
    predicate: { kind: category_or_catch_all, catch_all: universal }
  - key: fragranceFree
    attribute: fragranceFree
    isMultiValued: false
    predicate: { kind: boolean }
  - key: specialFeatures
    attribute: specialFeatures
    isMultiValued: true
    optional: true
    predicate: { kind: contains_all }
items:
  - { id: 1, name: Gel, skinType: oily, fragranceFree: true, specialFeatures: [eco] }
  - { id: 2, name: Cream, skinType: dry, fragranceFree: true }
  - { id: 3, name: Mist, skinType: universal, fragranceFree: false, specialFeatures: [vegan] }
  - { id: 4, name: Tonic, skinType: oily, fragranceFree: false, specialFeatures: [eco, vegan] }
"#;

async fn load_yaml_catalog() -> Catalog {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    file.write_all(YAML_CATALOG.as_bytes()).unwrap();

    FileCatalogSource::new(file.path()).load().await.unwrap()
}

#[tokio::test]
async fn manual_session_from_file_to_results() {
    let handler = handler(load_yaml_catalog().await, AdvanceMode::Manual);

    let snapshot = handler.start(Vec::<(String, String)>::new()).await.unwrap();
    assert_eq!(active(&snapshot), Some("skinType"));

    // universal items match every skin type
    handler.answer(Answer::parse("oily")).await.unwrap();
    let snapshot = handler.next().await.unwrap();
    assert_eq!(snapshot.matching_item_ids.len(), 3);
    assert_eq!(active(&snapshot), Some("fragranceFree"));

    handler.answer(Answer::parse("false")).await.unwrap();
    let snapshot = handler.next().await.unwrap();
    assert_eq!(active(&snapshot), Some("specialFeatures"));
    assert!(snapshot.should_stop);

    handler.toggle("eco").await.unwrap();
    let snapshot = handler.next().await.unwrap();
    assert_eq!(snapshot.status, WizardStatus::Exhausted);

    let names: Vec<String> = handler
        .results()
        .await
        .iter()
        .map(Item::label)
        .collect();
    assert_eq!(names, vec!["Tonic"]);
}

#[tokio::test]
async fn auto_session_advances_without_next() {
    let handler = handler(load_yaml_catalog().await, AdvanceMode::Auto);
    let mut updates = handler.subscribe();

    handler.start(Vec::<(String, String)>::new()).await.unwrap();
    handler.answer(Answer::parse("dry")).await.unwrap();

    // dry keeps the dry item and the universal one, which differ on fragrance
    tokio::time::timeout(Duration::from_secs(1), async {
        loop {
            updates.changed().await.unwrap();
            if active(&updates.borrow_and_update()) == Some("fragranceFree") {
                break;
            }
        }
    })
    .await
    .unwrap();

    let snapshot = handler.snapshot().await;
    assert_eq!(snapshot.matching_item_ids.len(), 2);
    assert_eq!(snapshot.history, vec!["skinType", "fragranceFree"]);
    assert!(!snapshot.should_stop);
}

#[tokio::test]
async fn prefilled_session_skips_to_results_and_back_reopens() {
    let source = InMemoryCatalogSource::new(load_yaml_catalog().await);
    let handler = handler(source.load().await.unwrap(), AdvanceMode::Manual);

    let snapshot = handler
        .start([
            ("skinType", "oily"),
            ("fragranceFree", "true"),
            ("unknown", "ignored"),
        ])
        .await
        .unwrap();
    assert_eq!(active(&snapshot), Some("specialFeatures"));

    let snapshot = handler.next().await.unwrap();
    assert_eq!(snapshot.status, WizardStatus::Exhausted);
    assert_eq!(handler.results().await.len(), 1);

    let snapshot = handler.back().await.unwrap();
    assert_eq!(snapshot.status, WizardStatus::QuestionActive);
    assert_eq!(active(&snapshot), Some("specialFeatures"));
}

#[tokio::test]
async fn contradictory_answers_yield_no_results() {
    let handler = handler(load_yaml_catalog().await, AdvanceMode::Manual);
    let snapshot = handler.start([("skinType", "dry")]).await.unwrap();
    assert_eq!(active(&snapshot), Some("fragranceFree"));

    handler.answer(Answer::parse("true")).await.unwrap();
    let snapshot = handler.next().await.unwrap();
    assert_eq!(active(&snapshot), Some("specialFeatures"));

    // the cream has no special features at all
    handler.answer(Answer::values(["vegan"])).await.unwrap();
    let snapshot = handler.next().await.unwrap();

    assert_eq!(snapshot.status, WizardStatus::Exhausted);
    assert!(snapshot.matching_item_ids.is_empty());
    assert!(handler.results().await.is_empty());
}

#[tokio::test]
async fn bundled_demo_catalog_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/skincare.yaml");
    let catalog = FileCatalogSource::new(path).load().await.unwrap();

    assert_eq!(catalog.items().len(), 6);
    assert_eq!(
        catalog.questions().optional().map(|q| q.key.as_str()),
        Some("specialFeatures")
    );
}
