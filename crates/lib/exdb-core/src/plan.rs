//! Workout assembly recipes.
//!
//! Each builder constructs one or more catalog queries from free-text
//! parameters, filters by equipment, deduplicates, truncates, and renders a
//! plan template. Free-text routing is keyword matching against a fixed
//! vocabulary; inputs outside it fall through to a default or "not found"
//! branch. A failed upstream query for one body part contributes nothing
//! and the build continues, so callers see the flat not-found message
//! rather than a transport error.

use tracing::warn;

use crate::catalog::{CatalogError, ExerciseCatalog};
use crate::fetch::ExerciseDbFetcher;
use crate::model::Exercise;
use crate::render::{
    DifficultyGuidelines,
    format_beginner_plan,
    format_circuit_plan,
    format_difficulty_plan,
    format_exercise_list,
    format_hiit_plan,
    format_workout_plan,
    title_case,
};
use crate::select::{dedupe_and_take, dedupe_by_id, filter_by_equipment, is_unfiltered_equipment};

/// Body parts combined for a full-body session.
pub const FULL_BODY_PARTS: [&str; 6] =
    ["chest", "back", "upper legs", "shoulders", "upper arms", "waist"];

/// Body parts combined for an upper-body session.
pub const UPPER_BODY_PARTS: [&str; 4] = ["chest", "back", "shoulders", "upper arms"];

/// Body parts combined for a lower-body session.
pub const LOWER_BODY_PARTS: [&str; 2] = ["upper legs", "lower legs"];

/// Body parts mined for compound movements in HIIT sessions.
const HIIT_COMPOUND_PARTS: [&str; 4] = ["chest", "back", "upper legs", "shoulders"];

const HIIT_MAX_EXERCISES: usize = 6;
const BEGINNER_MAX_EXERCISES: usize = 8;
const BETWEEN_ROUND_REST_SECS: u32 = 120;

/// Number of exercises for a personalized workout, sized by duration and
/// adjusted for fitness level.
#[must_use]
pub fn personalized_exercise_count(duration_minutes: u32, fitness_level: &str) -> usize {
    let base: usize = if duration_minutes <= 20 {
        4
    } else if duration_minutes <= 40 {
        6
    } else {
        8
    };

    match fitness_level.to_lowercase().as_str() {
        "beginner" => base.saturating_sub(1).max(3),
        "advanced" => (base + 2).min(12),
        _ => base,
    }
}

/// Number of exercises for a difficulty-tailored workout.
#[must_use]
pub fn difficulty_exercise_count(difficulty: &str) -> usize {
    match difficulty.to_lowercase().as_str() {
        "beginner" => 5,
        "intermediate" => 7,
        _ => 9,
    }
}

/// Assembles workout plans from catalog queries.
pub struct WorkoutPlanner<F: ExerciseDbFetcher> {
    catalog: ExerciseCatalog<F>,
}

impl<F: ExerciseDbFetcher> Clone for WorkoutPlanner<F> {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
        }
    }
}

impl<F: ExerciseDbFetcher> WorkoutPlanner<F> {
    pub const fn new(catalog: ExerciseCatalog<F>) -> Self {
        Self { catalog }
    }

    pub const fn catalog(&self) -> &ExerciseCatalog<F> {
        &self.catalog
    }

    /// Body-part query that contributes nothing on failure.
    async fn part_or_empty(&self, body_part: &str) -> Vec<Exercise> {
        or_empty(self.catalog.by_body_part(body_part).await, body_part)
    }

    /// Filtered exercises for one body part.
    async fn part_filtered(&self, body_part: &str, equipment: &str) -> Vec<Exercise> {
        filter_by_equipment(self.part_or_empty(body_part).await, equipment)
    }

    /// Filtered exercises gathered across a group of body parts, taking up
    /// to `per_part` from each.
    async fn group_filtered(
        &self,
        body_parts: &[&str],
        equipment: &str,
        per_part: usize,
    ) -> Vec<Exercise> {
        let mut gathered = Vec::new();
        for body_part in body_parts {
            let mut part = self.part_filtered(body_part, equipment).await;
            part.truncate(per_part);
            gathered.append(&mut part);
        }
        gathered
    }

    /// Routes a free-text workout type to catalog queries and returns the
    /// deduplicated, truncated selection.
    pub async fn gather_for_workout_type(
        &self,
        workout_type: &str,
        equipment: &str,
        count: usize,
    ) -> Vec<Exercise> {
        let lowered = workout_type.to_lowercase();
        let mut exercises = if lowered.contains("chest") {
            let mut chest = self.part_filtered("chest", equipment).await;
            chest.truncate(count);
            chest
        } else if lowered.contains("full body") || lowered.contains("full-body") {
            let per_part = (count / FULL_BODY_PARTS.len()).max(1);
            self.group_filtered(&FULL_BODY_PARTS, equipment, per_part).await
        } else if lowered.contains("leg") || lowered.contains("lower body") {
            let mut combined = self.part_or_empty("upper legs").await;
            combined.extend(self.part_or_empty("lower legs").await);
            let mut combined = filter_by_equipment(combined, equipment);
            combined.truncate(count);
            combined
        } else if lowered.contains("upper body") {
            let per_part = (count / UPPER_BODY_PARTS.len()).max(1);
            self.group_filtered(&UPPER_BODY_PARTS, equipment, per_part).await
        } else if lowered.contains("cardio") || lowered.contains("hiit") {
            let mut cardio = self.part_filtered("cardio", equipment).await;
            cardio.truncate(count);
            cardio
        } else {
            // Outside the keyword vocabulary: try the input verbatim as a
            // body part.
            let mut fallback = self.part_filtered(&lowered, equipment).await;
            fallback.truncate(count);
            fallback
        };

        // Last resort: an equipment-only search when a specific equipment
        // was requested.
        if exercises.is_empty() && !is_unfiltered_equipment(equipment) {
            let mut by_equipment = or_empty(self.catalog.by_equipment(equipment).await, equipment);
            by_equipment.truncate(count);
            exercises = by_equipment;
        }

        dedupe_and_take(exercises, count)
    }

    /// Builds and renders a personalized workout plan.
    pub async fn personalized_workout(
        &self,
        workout_type: &str,
        equipment: &str,
        duration_minutes: u32,
        fitness_level: &str,
    ) -> String {
        let count = personalized_exercise_count(duration_minutes, fitness_level);
        let exercises = self
            .gather_for_workout_type(workout_type, equipment, count)
            .await;

        if exercises.is_empty() {
            return format!(
                "❌ Unable to create workout plan for '{workout_type}' with '{equipment}' equipment. Try different parameters."
            );
        }

        format_workout_plan(&exercises, workout_type, equipment, duration_minutes)
    }

    /// Routes a free-text target area to catalog queries for circuits.
    pub async fn gather_for_target_areas(
        &self,
        target_areas: &str,
        equipment: &str,
        exercises_per_round: usize,
    ) -> Vec<Exercise> {
        let lowered = target_areas.to_lowercase();
        let gathered = if lowered.contains("full body") {
            let per_part = (exercises_per_round / FULL_BODY_PARTS.len()).max(1);
            self.group_filtered(&FULL_BODY_PARTS, equipment, per_part).await
        } else if lowered.contains("upper body") {
            let per_part = (exercises_per_round / UPPER_BODY_PARTS.len()).max(1);
            self.group_filtered(&UPPER_BODY_PARTS, equipment, per_part).await
        } else if lowered.contains("lower body") {
            let per_part = (exercises_per_round / LOWER_BODY_PARTS.len()).max(1);
            self.group_filtered(&LOWER_BODY_PARTS, equipment, per_part).await
        } else if lowered.contains("core") || lowered.contains("abs") {
            let mut core = self.part_filtered("waist", equipment).await;
            core.truncate(exercises_per_round);
            core
        } else if lowered.contains("cardio") {
            let mut cardio = self.part_filtered("cardio", equipment).await;
            cardio.truncate(exercises_per_round);
            cardio
        } else {
            Vec::new()
        };

        dedupe_and_take(gathered, exercises_per_round)
    }

    /// Builds and renders a multi-round circuit.
    pub async fn circuit_training(
        &self,
        target_areas: &str,
        equipment: &str,
        rounds: u32,
        exercises_per_round: usize,
        work_time: u32,
        rest_time: u32,
    ) -> String {
        let exercises = self
            .gather_for_target_areas(target_areas, equipment, exercises_per_round)
            .await;

        if exercises.is_empty() {
            return format!(
                "❌ Unable to create circuit workout for '{target_areas}' with '{equipment}' equipment."
            );
        }

        // Total time is budgeted from the requested round size even when
        // the catalog yields fewer exercises.
        let total_minutes =
            circuit_total_secs(rounds, exercises_per_round, work_time, rest_time) / 60;
        format_circuit_plan(
            &exercises,
            target_areas,
            equipment,
            rounds,
            work_time,
            rest_time,
            total_minutes,
        )
    }

    /// Cardio plus compound movements, capped for interval work.
    pub async fn gather_hiit(&self, equipment: &str) -> Vec<Exercise> {
        let mut cardio = self.part_filtered("cardio", equipment).await;
        cardio.truncate(3);

        let mut gathered = cardio;
        gathered.extend(self.group_filtered(&HIIT_COMPOUND_PARTS, equipment, 2).await);
        dedupe_and_take(gathered, HIIT_MAX_EXERCISES)
    }

    /// Builds and renders a HIIT session.
    pub async fn hiit_workout(
        &self,
        intensity: &str,
        equipment: &str,
        rounds: u32,
        work_time: u32,
        rest_time: u32,
    ) -> String {
        let exercises = self.gather_hiit(equipment).await;

        if exercises.is_empty() {
            return format!("❌ Unable to create HIIT workout with '{equipment}' equipment.");
        }

        let total_minutes = hiit_total_secs(rounds, exercises.len(), work_time, rest_time) / 60;
        format_hiit_plan(
            &exercises,
            intensity,
            equipment,
            rounds,
            work_time,
            rest_time,
            total_minutes,
        )
    }

    /// Focus-area routing for the progressive beginner plan.
    pub async fn gather_beginner(&self, focus_area: &str, equipment: &str) -> Vec<Exercise> {
        let lowered = focus_area.to_lowercase();
        let gathered = if lowered.contains("full body") {
            // Beginners get a reduced slice of the full-body group.
            self.group_filtered(&FULL_BODY_PARTS[..4], equipment, 2).await
        } else if lowered.contains("upper body") {
            self.group_filtered(&UPPER_BODY_PARTS, equipment, 2).await
        } else if lowered.contains("lower body") {
            self.group_filtered(&LOWER_BODY_PARTS, equipment, 3).await
        } else if lowered.contains("core") {
            let mut core = self.part_filtered("waist", equipment).await;
            core.truncate(6);
            core
        } else {
            Vec::new()
        };

        dedupe_by_id(gathered)
    }

    /// Builds and renders the progressive beginner plan.
    pub async fn beginner_plan(&self, focus_area: &str, equipment: &str, weeks: u32) -> String {
        let mut exercises = self.gather_beginner(focus_area, equipment).await;

        if exercises.is_empty() {
            return format!(
                "❌ Unable to create beginner plan for '{focus_area}' with '{equipment}' equipment."
            );
        }

        exercises.truncate(BEGINNER_MAX_EXERCISES);
        format_beginner_plan(&exercises, focus_area, equipment, weeks)
    }

    /// Body-focus routing for the difficulty-tailored workout.
    pub async fn gather_for_difficulty(
        &self,
        body_focus: &str,
        equipment: &str,
        count: usize,
    ) -> Vec<Exercise> {
        let lowered = body_focus.to_lowercase();
        let gathered = if lowered.contains("full body") {
            let per_part = (count / FULL_BODY_PARTS.len()).max(1);
            self.group_filtered(&FULL_BODY_PARTS, equipment, per_part).await
        } else {
            let mut single = self.part_filtered(&lowered, equipment).await;
            single.truncate(count);
            single
        };

        dedupe_and_take(gathered, count)
    }

    /// Builds and renders a difficulty-tailored workout.
    pub async fn difficulty_workout(
        &self,
        difficulty: &str,
        body_focus: &str,
        equipment: &str,
        duration_minutes: u32,
    ) -> String {
        let count = difficulty_exercise_count(difficulty);
        let exercises = self.gather_for_difficulty(body_focus, equipment, count).await;

        if exercises.is_empty() {
            return format!(
                "❌ Unable to create {difficulty} workout for '{body_focus}' with '{equipment}' equipment."
            );
        }

        let guidelines = DifficultyGuidelines::for_level(difficulty);
        format_difficulty_plan(
            &exercises,
            difficulty,
            body_focus,
            equipment,
            duration_minutes,
            &guidelines,
        )
    }

    /// Alternatives targeting the same muscle, falling back to the same
    /// body part.
    pub async fn alternatives(&self, exercise_id: &str, limit: usize) -> String {
        let Ok(original) = self.catalog.exercise_by_id(exercise_id).await else {
            return format!("❌ Unable to find exercise with ID: {exercise_id}");
        };

        let mut alternatives = Vec::new();
        if !original.target.is_empty() {
            alternatives = exclude_id(
                or_empty(self.catalog.by_target(&original.target).await, &original.target),
                exercise_id,
            );
        }
        if alternatives.is_empty() && !original.body_part.is_empty() {
            alternatives = exclude_id(
                self.part_or_empty(&original.body_part).await,
                exercise_id,
            );
        }

        if alternatives.is_empty() {
            return format!("❌ No alternatives found for exercise ID: {exercise_id}");
        }

        format!(
            "**🔄 Alternative Exercises for: {name}**\n\
             *(Original targets: {target} - {body_part})*\n\n\
             **📋 Suggested Alternatives:**\n\n\
             {list}",
            name = original.name,
            target = title_case(&original.target),
            body_part = title_case(&original.body_part),
            list = format_exercise_list(&alternatives, limit),
        )
    }

    /// Easier and harder variations of an exercise, split by equipment.
    pub async fn modifications(&self, exercise_id: &str) -> String {
        let Ok(original) = self.catalog.exercise_by_id(exercise_id).await else {
            return format!("❌ Unable to find exercise with ID: {exercise_id}");
        };

        let related = if original.target.is_empty() {
            Vec::new()
        } else {
            exclude_id(
                or_empty(self.catalog.by_target(&original.target).await, &original.target),
                exercise_id,
            )
        };

        let (bodyweight, with_equipment): (Vec<Exercise>, Vec<Exercise>) = related
            .into_iter()
            .partition(|exercise| exercise.equipment.to_lowercase().contains("body weight"));

        let mut result = format!(
            "**🔧 Exercise Modifications for: {name}**\n\n\
             **📋 Original Exercise Details:**\n\
             - **Target:** {target}\n\
             - **Equipment:** {equipment}\n\
             - **🎬 Original Demo:** {demo}\n\n\
             ## 🌱 Easier Modifications (Beginner-Friendly)\n\n",
            name = original.name,
            target = title_case(&original.target),
            equipment = title_case(&original.equipment),
            demo = original.gif_url.as_deref().unwrap_or("N/A"),
        );

        if bodyweight.is_empty() {
            result.push_str("No easier bodyweight alternatives found for this exercise.\n\n");
        } else {
            result.push_str(&modification_entries(
                &bodyweight,
                "Why Easier",
                "Requires less equipment and resistance",
                "Focus on proper form",
            ));
        }

        result.push_str("## ⚡ Harder Modifications (Advanced Challenges)\n\n");
        if with_equipment.is_empty() {
            result.push_str("No harder equipment-based alternatives found.\n\n");
        } else {
            result.push_str(&modification_entries(
                &with_equipment,
                "Why Harder",
                "Requires additional equipment or resistance",
                "Focus on controlled movement",
            ));
        }

        result.push_str(
            "## 💡 Modification Tips\n\
             - **Progression:** Start with easier versions and gradually work up\n\
             - **Listen to Your Body:** Choose modifications based on your current ability\n\
             - **Form Priority:** Perfect easier versions before attempting harder ones\n\
             - **Use GIFs:** Study the demonstrations to understand proper technique\n\
             - **Consistency:** Regular practice with appropriate modifications beats sporadic advanced attempts\n",
        );
        result
    }
}

fn modification_entries(
    exercises: &[Exercise],
    reason_label: &str,
    reason: &str,
    instruction_fallback: &str,
) -> String {
    let mut entries = String::new();
    for (index, exercise) in exercises.iter().take(3).enumerate() {
        entries.push_str(&format!(
            "**{number}. {name}**\n\
             - **Equipment:** {equipment}\n\
             - **{reason_label}:** {reason}\n\
             - **Instructions:** {summary}",
            number = index + 1,
            name = exercise.name,
            equipment = title_case(&exercise.equipment),
            summary = modification_summary(exercise, instruction_fallback),
        ));
        if let Some(gif_url) = exercise.gif_url.as_deref() {
            entries.push_str(&format!("\n- **🎬 Demo:** {gif_url}"));
        }
        entries.push_str("\n\n");
    }
    entries
}

/// First instruction line clipped to 100 characters, no ellipsis.
fn modification_summary(exercise: &Exercise, fallback: &str) -> String {
    exercise.first_instruction().map_or_else(
        || fallback.to_string(),
        |instruction| instruction.chars().take(100).collect(),
    )
}

/// Total circuit length including the fixed 2-minute between-round rest.
///
/// Saturates instead of overflowing; the inputs come straight from the
/// client.
#[must_use]
pub fn circuit_total_secs(rounds: u32, exercises: usize, work_time: u32, rest_time: u32) -> u32 {
    let exercises = u32::try_from(exercises).unwrap_or(u32::MAX);
    let round_secs = exercises
        .saturating_mul(work_time)
        .saturating_add(exercises.saturating_sub(1).saturating_mul(rest_time))
        .saturating_add(BETWEEN_ROUND_REST_SECS);
    rounds.saturating_mul(round_secs)
}

/// Total interval time across all HIIT rounds, saturating on overflow.
#[must_use]
pub fn hiit_total_secs(rounds: u32, exercises: usize, work_time: u32, rest_time: u32) -> u32 {
    let exercises = u32::try_from(exercises).unwrap_or(u32::MAX);
    rounds
        .saturating_mul(exercises)
        .saturating_mul(work_time.saturating_add(rest_time))
}

fn or_empty(result: Result<Vec<Exercise>, CatalogError>, context: &str) -> Vec<Exercise> {
    match result {
        Ok(exercises) => exercises,
        Err(err) => {
            warn!(context, "catalog query failed, contributing no exercises: {err}");
            Vec::new()
        }
    }
}

fn exclude_id(exercises: Vec<Exercise>, exercise_id: &str) -> Vec<Exercise> {
    exercises
        .into_iter()
        .filter(|exercise| exercise.id != exercise_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_scales_with_duration() {
        assert_eq!(personalized_exercise_count(15, "intermediate"), 4);
        assert_eq!(personalized_exercise_count(30, "intermediate"), 6);
        assert_eq!(personalized_exercise_count(60, "intermediate"), 8);
    }

    #[test]
    fn count_adjusts_for_fitness_level() {
        assert_eq!(personalized_exercise_count(15, "beginner"), 3);
        assert_eq!(personalized_exercise_count(15, "Beginner"), 3);
        assert_eq!(personalized_exercise_count(60, "advanced"), 10);
        assert_eq!(personalized_exercise_count(60, "unknown"), 8);
    }

    #[test]
    fn difficulty_counts_follow_presets() {
        assert_eq!(difficulty_exercise_count("beginner"), 5);
        assert_eq!(difficulty_exercise_count("intermediate"), 7);
        assert_eq!(difficulty_exercise_count("advanced"), 9);
        assert_eq!(difficulty_exercise_count("elite"), 9);
    }

    #[test]
    fn circuit_total_includes_between_round_rest() {
        // 3 rounds of 5 exercises, 45s work, 15s rest:
        // 3 * (5*45 + 4*15 + 120) = 3 * 405 = 1215 seconds.
        assert_eq!(circuit_total_secs(3, 5, 45, 15), 1215);
    }

    #[test]
    fn single_exercise_round_has_no_inner_rest() {
        assert_eq!(circuit_total_secs(1, 1, 30, 10), 150);
    }

    #[test]
    fn extreme_intervals_saturate_instead_of_overflowing() {
        assert_eq!(circuit_total_secs(u32::MAX, 5, 45, 15), u32::MAX);
        assert_eq!(circuit_total_secs(3, usize::MAX, u32::MAX, u32::MAX), u32::MAX);
        assert_eq!(hiit_total_secs(u32::MAX, 6, 30, 30), u32::MAX);
        assert_eq!(hiit_total_secs(4, 6, u32::MAX, u32::MAX), u32::MAX);
    }

    #[test]
    fn modification_summaries_clip_without_ellipsis() {
        let mut exercise = Exercise {
            id: "0001".to_string(),
            name: "barbell bench press".to_string(),
            equipment: "barbell".to_string(),
            instructions: vec!["x".repeat(150)],
            ..Exercise::default()
        };

        let entries = modification_entries(
            std::slice::from_ref(&exercise),
            "Why Harder",
            "Requires additional equipment or resistance",
            "Focus on controlled movement",
        );
        assert!(entries.contains(&"x".repeat(100)));
        assert!(!entries.contains(&"x".repeat(101)));
        assert!(!entries.contains("..."));

        exercise.instructions.clear();
        let entries = modification_entries(
            &[exercise],
            "Why Harder",
            "Requires additional equipment or resistance",
            "Focus on controlled movement",
        );
        assert!(entries.contains("- **Instructions:** Focus on controlled movement"));
    }
}
