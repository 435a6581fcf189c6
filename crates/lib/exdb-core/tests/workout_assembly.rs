use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use exdb_core::catalog::ExerciseCatalog;
use exdb_core::fetch::{ExerciseDbFetcher, FetchError};
use exdb_core::plan::WorkoutPlanner;
use reqwest::StatusCode;
use serde_json::Value;

/// Serves canned upstream payloads from the fixture file and counts how
/// often each endpoint is actually hit.
struct StubFetcher {
    routes: HashMap<String, Value>,
    hits: AtomicUsize,
}

impl StubFetcher {
    fn from_fixture() -> Self {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("data")
            .join("exercises.json");
        let raw = std::fs::read_to_string(&path).unwrap_or_else(|err| {
            let path_display = path.display();
            panic!("failed to read exercise fixture at {path_display}: {err}")
        });
        let routes: HashMap<String, Value> =
            serde_json::from_str(&raw).expect("fixture should be a map of endpoint to payload");
        Self {
            routes,
            hits: AtomicUsize::new(0),
        }
    }

    fn upstream_hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl ExerciseDbFetcher for StubFetcher {
    async fn fetch_json(
        &self,
        endpoint: &str,
        _params: &[(String, String)],
    ) -> Result<Value, FetchError> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        self.routes
            .get(endpoint)
            .cloned()
            .ok_or(FetchError::Status(StatusCode::NOT_FOUND))
    }
}

fn build_planner() -> (WorkoutPlanner<StubFetcher>, Arc<StubFetcher>) {
    let fetcher = Arc::new(StubFetcher::from_fixture());
    let catalog = ExerciseCatalog::with_fetcher(fetcher.clone());
    (WorkoutPlanner::new(catalog), fetcher)
}

#[tokio::test]
async fn chest_with_dumbbell_limit_three() {
    let (planner, _) = build_planner();
    let exercises = planner.gather_for_workout_type("chest", "dumbbell", 3).await;

    assert!(exercises.len() <= 3);
    assert!(!exercises.is_empty());
    for exercise in &exercises {
        assert!(
            exercise.equipment.to_lowercase().contains("dumbbell"),
            "{} should use dumbbells",
            exercise.name
        );
    }
}

#[tokio::test]
async fn any_equipment_keeps_upstream_order_unfiltered() {
    let (planner, _) = build_planner();
    let exercises = planner.gather_for_workout_type("chest", "any", 5).await;

    let ids: Vec<&str> = exercises.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["0101", "0102", "0103", "0104", "0105"]);
}

#[tokio::test]
async fn full_body_draws_from_each_body_part() {
    let (planner, _) = build_planner();
    let exercises = planner.gather_for_workout_type("full body", "dumbbell", 6).await;

    let parts: Vec<&str> = exercises.iter().map(|e| e.body_part.as_str()).collect();
    assert!(parts.contains(&"chest"));
    assert!(parts.contains(&"back"));
    assert!(parts.contains(&"shoulders"));
    // Waist has no dumbbell exercises in the fixture, so it contributes
    // nothing instead of failing the whole build.
    assert!(!parts.contains(&"waist"));
}

#[tokio::test]
async fn unknown_workout_type_with_specific_equipment_falls_back() {
    let (planner, fetcher) = build_planner();
    let rendered = planner
        .personalized_workout("calisthenics hour", "laser sword", 30, "intermediate")
        .await;

    assert!(rendered.starts_with("❌ Unable to create workout plan for 'calisthenics hour'"));
    assert!(fetcher.upstream_hits() > 0);
}

#[tokio::test]
async fn repeated_queries_are_served_from_cache() {
    let (planner, fetcher) = build_planner();
    let catalog = planner.catalog();

    let first = catalog.by_body_part("chest").await.expect("chest should resolve");
    let second = catalog.by_body_part("chest").await.expect("chest should resolve");

    assert_eq!(first, second);
    assert_eq!(fetcher.upstream_hits(), 1);
}

#[tokio::test]
async fn disabled_cache_hits_upstream_every_time() {
    let fetcher = Arc::new(StubFetcher::from_fixture());
    let catalog = ExerciseCatalog::with_fetcher(fetcher.clone()).without_cache();

    let _ = catalog.by_body_part("chest").await.expect("chest should resolve");
    let _ = catalog.by_body_part("chest").await.expect("chest should resolve");

    assert_eq!(fetcher.upstream_hits(), 2);
}

#[tokio::test]
async fn unknown_exercise_id_yields_not_found_message() {
    let (planner, _) = build_planner();

    let alternatives = planner.alternatives("9999", 5).await;
    assert_eq!(alternatives, "❌ Unable to find exercise with ID: 9999");

    let modifications = planner.modifications("9999").await;
    assert_eq!(modifications, "❌ Unable to find exercise with ID: 9999");
}

#[tokio::test]
async fn alternatives_exclude_the_original_exercise() {
    let (planner, _) = build_planner();
    let rendered = planner.alternatives("0101", 5).await;

    assert!(rendered.contains("Alternative Exercises for: dumbbell bench press"));
    assert!(rendered.contains("barbell bench press"));
    assert!(rendered.contains("push-up"));
    assert!(!rendered.contains("- **ID:** 0101"));
}

#[tokio::test]
async fn modifications_split_by_equipment_complexity() {
    let (planner, _) = build_planner();
    let rendered = planner.modifications("0101").await;

    let easier_section = rendered
        .split("## ⚡ Harder Modifications")
        .next()
        .expect("easier section should exist");
    assert!(easier_section.contains("push-up"));
    assert!(!easier_section.contains("barbell bench press"));
    assert!(rendered.contains("barbell bench press"));
}

#[tokio::test]
async fn hiit_mixes_cardio_and_compound_movements() {
    let (planner, _) = build_planner();
    let exercises = planner.gather_hiit("any").await;

    assert!(exercises.len() <= 6);
    let parts: Vec<&str> = exercises.iter().map(|e| e.body_part.as_str()).collect();
    assert!(parts.contains(&"cardio"));
    assert!(parts.iter().any(|part| *part != "cardio"));
}

#[tokio::test]
async fn circuit_for_core_uses_waist_exercises() {
    let (planner, _) = build_planner();
    let rendered = planner.circuit_training("core", "body weight", 3, 5, 45, 15).await;

    assert!(rendered.contains("crunch"));
    assert!(rendered.contains("### Round 3"));
}

#[tokio::test]
async fn circuit_total_time_budgets_the_requested_round_size() {
    let (planner, _) = build_planner();
    // The fixture has one waist exercise; the time budget still assumes the
    // five requested per round: 3 * (5*45 + 4*15 + 120) = 1215s.
    let rendered = planner.circuit_training("core", "body weight", 3, 5, 45, 15).await;

    assert!(rendered.contains("**⏱️ Total Duration:** ~20 minutes"));
}

#[tokio::test]
async fn taxonomy_lists_decode_as_strings() {
    let (planner, _) = build_planner();
    let catalog = planner.catalog();

    let body_parts = catalog.body_part_list().await.expect("list should resolve");
    assert!(body_parts.contains(&"chest".to_string()));

    let equipment = catalog.equipment_list().await.expect("list should resolve");
    assert!(equipment.contains(&"dumbbell".to_string()));
}
