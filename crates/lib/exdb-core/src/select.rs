//! Selection recipes shared by the workout builders.
//!
//! Every tool-level operation follows the same shape: filter by equipment
//! when a specific value is given, deduplicate by identifier preserving
//! first-seen order, and truncate to a target count. Ordering is whatever
//! the upstream returned; nothing here sorts.

use std::collections::HashSet;

use crate::model::Exercise;

/// Equipment values that disable filtering entirely.
const UNFILTERED_EQUIPMENT: [&str; 2] = ["any", "all"];

/// Whether an equipment value means "no equipment filter".
#[must_use]
pub fn is_unfiltered_equipment(equipment: &str) -> bool {
    let lowered = equipment.trim().to_lowercase();
    UNFILTERED_EQUIPMENT.contains(&lowered.as_str())
}

/// Keeps records whose equipment field contains the requested value,
/// case-insensitively. `any`/`all` pass everything through.
#[must_use]
pub fn filter_by_equipment(exercises: Vec<Exercise>, equipment: &str) -> Vec<Exercise> {
    if is_unfiltered_equipment(equipment) {
        return exercises;
    }

    let needle = equipment.to_lowercase();
    exercises
        .into_iter()
        .filter(|exercise| exercise.equipment.to_lowercase().contains(&needle))
        .collect()
}

/// Deduplicates by exercise id, preserving first-occurrence order.
#[must_use]
pub fn dedupe_by_id(exercises: Vec<Exercise>) -> Vec<Exercise> {
    let mut seen: HashSet<String> = HashSet::new();
    exercises
        .into_iter()
        .filter(|exercise| seen.insert(exercise.id.clone()))
        .collect()
}

/// Deduplicates and truncates in one pass, the tail of every builder.
#[must_use]
pub fn dedupe_and_take(exercises: Vec<Exercise>, count: usize) -> Vec<Exercise> {
    let mut unique = dedupe_by_id(exercises);
    unique.truncate(count);
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(id: &str, equipment: &str) -> Exercise {
        Exercise {
            id: id.to_string(),
            name: format!("exercise {id}"),
            equipment: equipment.to_string(),
            ..Exercise::default()
        }
    }

    #[test]
    fn equipment_filter_is_case_insensitive_substring() {
        let input = vec![
            exercise("1", "dumbbell"),
            exercise("2", "Barbell"),
            exercise("3", "body weight"),
        ];

        let filtered = filter_by_equipment(input, "BELL");
        let ids: Vec<&str> = filtered.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn any_and_all_disable_filtering() {
        let input = vec![exercise("1", "dumbbell"), exercise("2", "cable")];
        assert_eq!(filter_by_equipment(input.clone(), "any").len(), 2);
        assert_eq!(filter_by_equipment(input.clone(), "ALL").len(), 2);
        assert_eq!(filter_by_equipment(input, " any ").len(), 2);
    }

    #[test]
    fn dedupe_preserves_first_occurrence_order() {
        let input = vec![
            exercise("b", "cable"),
            exercise("a", "dumbbell"),
            exercise("b", "cable"),
            exercise("c", "barbell"),
            exercise("a", "dumbbell"),
        ];

        let unique = dedupe_by_id(input);
        let ids: Vec<&str> = unique.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn dedupe_and_take_truncates_after_dedup() {
        let input = vec![
            exercise("1", "cable"),
            exercise("1", "cable"),
            exercise("2", "cable"),
            exercise("3", "cable"),
        ];

        let picked = dedupe_and_take(input, 2);
        let ids: Vec<&str> = picked.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
