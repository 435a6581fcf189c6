//! Markdown rendering for exercise records and workout plans.
//!
//! Rendering is pure: the same records always produce byte-identical text.
//! Upstream fields arrive lowercase and are title-cased for display; empty
//! fields render as `N/A`.

use std::fmt::Write;

use crate::model::Exercise;

const NO_EXERCISES: &str = "No exercises found.";
const INSTRUCTION_FALLBACK: &str = "No instructions available";
const INSTRUCTION_SUMMARY_CHARS: usize = 100;

/// Capitalizes the first letter of each whitespace-separated word.
#[must_use]
pub fn title_case(value: &str) -> String {
    if value.trim().is_empty() {
        return "N/A".to_string();
    }

    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// First instruction line, truncated for list display.
#[must_use]
pub fn instruction_summary(exercise: &Exercise) -> String {
    exercise.first_instruction().map_or_else(
        || INSTRUCTION_FALLBACK.to_string(),
        |instruction| {
            if instruction.chars().count() > INSTRUCTION_SUMMARY_CHARS {
                let truncated: String = instruction.chars().take(INSTRUCTION_SUMMARY_CHARS).collect();
                format!("{truncated}...")
            } else {
                instruction.to_string()
            }
        },
    )
}

/// First instruction line in full, with a caller-chosen fallback.
#[must_use]
pub fn main_instruction<'a>(exercise: &'a Exercise, fallback: &'a str) -> &'a str {
    exercise.first_instruction().unwrap_or(fallback)
}

/// Numbered exercise list with per-record summaries and GIF links.
#[must_use]
pub fn format_exercise_list(exercises: &[Exercise], limit: usize) -> String {
    if exercises.is_empty() {
        return NO_EXERCISES.to_string();
    }

    let display: Vec<String> = exercises
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, exercise)| {
            let mut entry = format!(
                "**{number}. {name}**\n\
                 - **ID:** {id}\n\
                 - **Body Part:** {body_part}\n\
                 - **Target Muscle:** {target}\n\
                 - **Equipment:** {equipment}\n\
                 - **Instructions:** {summary}",
                number = index + 1,
                name = exercise.name,
                id = exercise.id,
                body_part = title_case(&exercise.body_part),
                target = title_case(&exercise.target),
                equipment = title_case(&exercise.equipment),
                summary = instruction_summary(exercise),
            );
            if let Some(gif_url) = exercise.gif_url.as_deref() {
                let _ = write!(entry, "\n- **Visual Guide (GIF):** {gif_url}");
            }
            entry
        })
        .collect();

    let mut result = display.join("\n\n");
    if exercises.len() > limit {
        let remaining = exercises.len() - limit;
        let _ = write!(
            result,
            "\n\n... and {remaining} more exercises available. Use specific filters to narrow down results."
        );
    }
    result
}

/// Full detail view for a single exercise.
#[must_use]
pub fn format_exercise_detail(exercise: &Exercise) -> String {
    let instructions_text = if exercise.instructions.is_empty() {
        "No detailed instructions available".to_string()
    } else {
        exercise
            .instructions
            .iter()
            .enumerate()
            .map(|(index, instruction)| format!("{}. {instruction}", index + 1))
            .collect::<Vec<String>>()
            .join("\n")
    };

    let secondary_text = if exercise.secondary_muscles.is_empty() {
        "None".to_string()
    } else {
        exercise
            .secondary_muscles
            .iter()
            .map(|muscle| title_case(muscle))
            .collect::<Vec<String>>()
            .join(", ")
    };

    let gif_section = exercise.gif_url.as_deref().map_or_else(String::new, |url| {
        format!("\n**🎬 Exercise Demonstration (GIF):** {url}")
    });

    format!(
        "**{name}**\n\n\
         **📋 Basic Information:**\n\
         - **ID:** {id}\n\
         - **Body Part:** {body_part}\n\
         - **Primary Target:** {target}\n\
         - **Secondary Muscles:** {secondary_text}\n\
         - **Equipment:** {equipment}\n\n\
         **📝 Step-by-Step Instructions:**\n\
         {instructions_text}\
         {gif_section}\n\n\
         **ℹ️ Additional Information:**\n\
         - **Category:** {category}\n\
         - **Difficulty:** {difficulty}",
        name = exercise.name,
        id = exercise.id,
        body_part = title_case(&exercise.body_part),
        target = title_case(&exercise.target),
        equipment = title_case(&exercise.equipment),
        category = exercise.category.as_deref().unwrap_or("N/A"),
        difficulty = exercise.difficulty.as_deref().unwrap_or("N/A"),
    )
}

/// Suggested sets/reps line for a record, keyed off its body part and target.
#[must_use]
pub fn sets_reps_for(exercise: &Exercise) -> &'static str {
    let body_part = exercise.body_part.to_lowercase();
    let target = exercise.target.to_lowercase();
    if body_part.contains("cardio") {
        "3 sets of 30-45 seconds"
    } else if target.contains("abs") || target.contains("core") {
        "3 sets of 12-20 reps"
    } else {
        "3 sets of 8-12 reps"
    }
}

/// Structured workout plan with per-exercise demo links.
#[must_use]
pub fn format_workout_plan(
    exercises: &[Exercise],
    workout_type: &str,
    equipment: &str,
    duration_minutes: u32,
) -> String {
    if exercises.is_empty() {
        return "No exercises found for this workout plan.".to_string();
    }

    let mut plan = format!(
        "# 🏋️ {workout_type} Workout Plan\n\n\
         **⏱️ Duration:** ~{duration_minutes} minutes\n\
         **🛠️ Equipment:** {equipment}\n\
         **💪 Total Exercises:** {count}\n\n\
         ## 🎯 Workout Structure\n\n",
        workout_type = title_case(workout_type),
        equipment = title_case(equipment),
        count = exercises.len(),
    );

    for (index, exercise) in exercises.iter().enumerate() {
        plan.push_str(&exercise_block(
            index + 1,
            exercise,
            "📝 Key Instruction",
            "Follow proper form and controlled movement",
            &format!("- **📊 Sets/Reps:** {}\n- **⏰ Rest:** 60-90 seconds between sets", sets_reps_for(exercise)),
            "🎬 Exercise Demo",
        ));
    }

    plan.push_str(
        "\n## 💡 Workout Guidelines:\n\
         - **Warm-up:** 5-10 minutes of light cardio and dynamic stretching\n\
         - **Form Focus:** Quality over quantity - maintain proper form throughout\n\
         - **Progressive Overload:** Gradually increase intensity as you get stronger\n\
         - **Rest Periods:** Allow adequate rest between exercises and sets\n\
         - **Cool-down:** 5-10 minutes of stretching and breathing exercises\n\
         - **Hydration:** Keep water nearby and stay hydrated\n\
         - **Listen to Your Body:** Stop if you feel pain or excessive fatigue\n\n\
         ## 🎬 Visual Guides:\n\
         All exercises include animated GIF demonstrations to help you maintain proper form and technique.\n",
    );
    plan
}

/// One `### Exercise N` block shared by the plan templates.
fn exercise_block(
    number: usize,
    exercise: &Exercise,
    instruction_label: &str,
    instruction_fallback: &str,
    protocol_lines: &str,
    demo_label: &str,
) -> String {
    let mut block = format!(
        "### Exercise {number}: {name}\n\
         - **🎯 Target:** {target}\n\
         - **🛠️ Equipment:** {equipment}\n\
         - **{instruction_label}:** {instruction}\n\
         {protocol_lines}",
        name = exercise.name,
        target = title_case(&exercise.target),
        equipment = title_case(&exercise.equipment),
        instruction = main_instruction(exercise, instruction_fallback),
    );
    if let Some(gif_url) = exercise.gif_url.as_deref() {
        let _ = write!(block, "\n- **{demo_label}:** {gif_url}");
    }
    block.push_str("\n\n");
    block
}

/// Compact `**Exercise N**` block used inside circuit and HIIT rounds.
fn round_exercise_block(
    number: usize,
    exercise: &Exercise,
    instruction_label: &str,
    instruction_fallback: &str,
    duration_line: &str,
    demo_label: &str,
) -> String {
    let mut block = format!(
        "**Exercise {number}: {name}**\n\
         - **🎯 Target:** {target}\n\
         - **🛠️ Equipment:** {equipment}\n\
         - **{instruction_label}:** {instruction}\n\
         - **⏰ Duration:** {duration_line}",
        name = exercise.name,
        target = title_case(&exercise.target),
        equipment = title_case(&exercise.equipment),
        instruction = main_instruction(exercise, instruction_fallback),
    );
    if let Some(gif_url) = exercise.gif_url.as_deref() {
        let _ = write!(block, "\n- **{demo_label}:** {gif_url}");
    }
    block.push_str("\n\n");
    block
}

/// Multi-round circuit plan.
#[must_use]
pub fn format_circuit_plan(
    exercises: &[Exercise],
    target_areas: &str,
    equipment: &str,
    rounds: u32,
    work_time: u32,
    rest_time: u32,
    total_minutes: u32,
) -> String {
    let mut plan = format!(
        "# 🔥 {target_areas} Circuit Training\n\n\
         **⏱️ Total Duration:** ~{total_minutes} minutes\n\
         **🛠️ Equipment:** {equipment}\n\
         **🔄 Rounds:** {rounds}\n\
         **💪 Exercises per Round:** {count}\n\
         **⏰ Work Time:** {work_time} seconds\n\
         **😴 Rest Time:** {rest_time} seconds\n\
         **🔄 Rest Between Rounds:** 2 minutes\n\n\
         ## 🎯 Circuit Structure\n\n",
        target_areas = title_case(target_areas),
        equipment = title_case(equipment),
        count = exercises.len(),
    );

    for round in 1..=rounds {
        let _ = write!(plan, "### Round {round}\n\n");
        for (index, exercise) in exercises.iter().enumerate() {
            plan.push_str(&round_exercise_block(
                index + 1,
                exercise,
                "📝 Focus",
                "Maintain proper form throughout",
                &format!("{work_time} seconds work, {rest_time} seconds rest"),
                "🎬 Form Guide",
            ));
        }
        if round < rounds {
            plan.push_str("**🔄 Rest 2 minutes before next round**\n\n");
        }
    }

    plan.push_str(
        "\n## 💡 Circuit Training Tips:\n\
         - **Warm-up:** 5-10 minutes of light movement and dynamic stretching\n\
         - **Intensity:** Maintain high intensity during work periods\n\
         - **Form Priority:** Never sacrifice form for speed\n\
         - **Modifications:** Adjust work/rest ratios based on fitness level\n\
         - **Hydration:** Stay hydrated throughout the circuit\n\
         - **Cool-down:** 5-10 minutes of stretching and breathing exercises\n\n\
         ## 🎬 Visual Demonstrations:\n\
         Each exercise includes an animated GIF to help you maintain perfect form and maximize results.\n",
    );
    plan
}

/// Interval-training plan with intensity-specific guidance.
#[must_use]
pub fn format_hiit_plan(
    exercises: &[Exercise],
    intensity: &str,
    equipment: &str,
    rounds: u32,
    work_time: u32,
    rest_time: u32,
    total_minutes: u32,
) -> String {
    let mut plan = format!(
        "# 🔥 HIIT Workout - {intensity} Intensity\n\n\
         **⚡ Intensity Level:** {intensity}\n\
         **🛠️ Equipment:** {equipment}\n\
         **🔄 Rounds:** {rounds}\n\
         **💪 Exercises:** {count}\n\
         **⏰ Work Time:** {work_time} seconds\n\
         **😴 Rest Time:** {rest_time} seconds\n\
         **⏱️ Total Time:** ~{total_minutes} minutes\n\n\
         ## 🎯 HIIT Structure\n\n\
         Perform each exercise for {work_time} seconds, rest for {rest_time} seconds, then move to \
         the next exercise. Complete all exercises for one round, then repeat for {rounds} total rounds.\n\n",
        intensity = title_case(intensity),
        equipment = title_case(equipment),
        count = exercises.len(),
    );

    for round in 1..=rounds {
        let _ = write!(plan, "### Round {round}\n\n");
        for (index, exercise) in exercises.iter().enumerate() {
            plan.push_str(&round_exercise_block(
                index + 1,
                exercise,
                "📝 HIIT Focus",
                "Maintain high intensity",
                &format!("{work_time}s work → {rest_time}s rest"),
                "🎬 Form Demo",
            ));
        }
        if round < rounds {
            plan.push_str("**🔄 Complete rest, then start next round**\n\n");
        }
    }

    plan.push_str(hiit_intensity_guide(intensity));
    plan.push_str(
        "\n## 💡 HIIT Success Tips\n\
         - **Warm-up:** 5-10 minutes of light cardio and dynamic stretching\n\
         - **Form First:** Never sacrifice form for speed, even in HIIT\n\
         - **Use the GIFs:** Study proper technique before starting\n\
         - **Listen to Your Body:** Adjust intensity based on how you feel\n\
         - **Stay Hydrated:** Keep water nearby throughout the workout\n\
         - **Cool-down:** 5-10 minutes of walking and stretching\n\n\
         ## 🎬 Visual Technique Guides\n\
         Each exercise includes animated demonstrations to help you maintain proper form even at high intensity.\n",
    );
    plan
}

fn hiit_intensity_guide(intensity: &str) -> &'static str {
    match intensity.to_lowercase().as_str() {
        "low" => {
            "## 🌱 Low Intensity Guidelines\n\
             - Work at 60-70% of maximum effort\n\
             - Focus on maintaining good form throughout\n\
             - This is great for beginners or recovery days\n\
             - You should be able to maintain a conversation during rest periods\n"
        }
        "moderate" => {
            "## 🔥 Moderate Intensity Guidelines\n\
             - Work at 70-85% of maximum effort\n\
             - Push yourself but maintain control\n\
             - You should feel challenged but not completely exhausted\n\
             - Brief conversations possible during rest periods\n"
        }
        _ => {
            "## ⚡ High Intensity Guidelines\n\
             - Work at 85-95% of maximum effort\n\
             - Give everything you have during work periods\n\
             - You should feel significantly challenged\n\
             - Focus on recovery during rest periods - minimal talking\n"
        }
    }
}

/// Progressive multi-week beginner plan.
#[must_use]
pub fn format_beginner_plan(
    exercises: &[Exercise],
    focus_area: &str,
    equipment: &str,
    weeks: u32,
) -> String {
    let mut plan = format!(
        "# 🌟 Beginner {focus_area} Workout Plan ({weeks} Weeks)\n\n\
         **🎯 Focus:** {focus_area}\n\
         **🛠️ Equipment:** {equipment}\n\
         **📅 Duration:** {weeks} weeks\n\
         **📊 Frequency:** 3 times per week\n\
         **⏱️ Session Duration:** 20-30 minutes\n\n\
         ## 📈 Progressive Plan Overview\n\n\
         **Week 1-2: Foundation Phase**\n\
         - Focus on form and movement patterns\n\
         - 2 sets of 8-10 reps for each exercise\n\
         - 90-120 seconds rest between sets\n\n\
         **Week 3-4: Building Phase**\n\
         - Increase to 3 sets of 10-12 reps\n\
         - 60-90 seconds rest between sets\n\
         - Add more challenging variations\n\n\
         ## 💪 Core Exercises with Visual Guides\n\n",
        focus_area = title_case(focus_area),
        equipment = title_case(equipment),
    );

    for (index, exercise) in exercises.iter().enumerate() {
        plan.push_str(&exercise_block(
            index + 1,
            exercise,
            "📝 Beginner Focus",
            "Focus on controlled movement",
            "- **📊 Week 1-2:** 2 sets × 8-10 reps\n- **📊 Week 3-4:** 3 sets × 10-12 reps",
            "🎬 Form Tutorial",
        ));
    }

    plan.push_str(
        "\n## 🗓️ Sample Weekly Schedule\n\n\
         **Monday:** Full routine\n\
         **Tuesday:** Rest or light walking\n\
         **Wednesday:** Full routine\n\
         **Thursday:** Rest or light stretching\n\
         **Friday:** Full routine\n\
         **Saturday:** Rest or light activity\n\
         **Sunday:** Rest\n\n\
         ## 🌟 Beginner Success Tips\n\n\
         1. **Start Slow:** Master the movement before adding intensity\n\
         2. **Listen to Your Body:** Some muscle soreness is normal, sharp pain is not\n\
         3. **Consistency Over Intensity:** Regular moderate workouts beat sporadic intense ones\n\
         4. **Use the GIFs:** Study the visual demonstrations before each exercise\n\
         5. **Progress Gradually:** Add weight/reps only when current level feels easy\n\
         6. **Rest is Important:** Allow 48 hours between training the same muscle groups\n\
         7. **Stay Hydrated:** Drink water before, during, and after workouts\n\
         8. **Track Progress:** Keep a simple log of sets, reps, and how you feel\n\n\
         ## 🎬 Visual Learning\n\
         Each exercise includes an animated GIF demonstration. Study these carefully to:\n\
         - Learn proper form and technique\n\
         - Understand the full range of motion\n\
         - See the exercise pace and rhythm\n\
         - Identify common mistakes to avoid\n",
    );
    plan
}

/// Presentation strings attached to a difficulty level.
#[derive(Debug, Clone, Copy)]
pub struct DifficultyGuidelines {
    pub sets_info: &'static str,
    pub rest_info: &'static str,
    pub intensity_note: &'static str,
    pub tips: &'static str,
}

impl DifficultyGuidelines {
    /// Guidelines for a free-text difficulty level; anything outside the
    /// vocabulary falls through to the advanced block.
    #[must_use]
    pub fn for_level(difficulty: &str) -> Self {
        match difficulty.to_lowercase().as_str() {
            "beginner" => Self {
                sets_info: "2-3 sets of 8-12 reps",
                rest_info: "90-120 seconds",
                intensity_note: "Focus on learning proper form. Start with bodyweight or light weights.",
                tips: "## 🌟 Beginner Tips\n\
                       - Study the GIF demonstrations before starting each exercise\n\
                       - Start with lighter weights or easier variations\n\
                       - Focus on learning the movement pattern first\n\
                       - Don't rush - quality over quantity\n\
                       - It's okay to take longer rest periods initially\n",
            },
            "intermediate" => Self {
                sets_info: "3-4 sets of 10-15 reps",
                rest_info: "60-90 seconds",
                intensity_note: "Moderate intensity. Challenge yourself while maintaining good form.",
                tips: "## 🔥 Intermediate Progression\n\
                       - Use the GIFs to refine your technique\n\
                       - Gradually increase weight when you can complete all sets easily\n\
                       - Focus on mind-muscle connection\n\
                       - Consider adding drop sets or supersets for extra challenge\n\
                       - Track your progress to ensure continuous improvement\n",
            },
            _ => Self {
                sets_info: "4-5 sets of 12-20 reps",
                rest_info: "45-75 seconds",
                intensity_note: "High intensity. Push your limits with perfect form and controlled movements.",
                tips: "## ⚡ Advanced Techniques\n\
                       - Use the GIFs to perfect your form even at high intensities\n\
                       - Implement advanced techniques like rest-pause, drop sets, or tempo work\n\
                       - Focus on progressive overload and periodization\n\
                       - Consider adding plyometric or explosive movements\n\
                       - Push intensity while never compromising form\n",
            },
        }
    }
}

/// Difficulty-tailored workout plan.
#[must_use]
pub fn format_difficulty_plan(
    exercises: &[Exercise],
    difficulty: &str,
    body_focus: &str,
    equipment: &str,
    duration_minutes: u32,
    guidelines: &DifficultyGuidelines,
) -> String {
    let difficulty_title = title_case(difficulty);
    let mut plan = format!(
        "# 🎯 {difficulty_title} {body_focus} Workout\n\n\
         **📊 Difficulty Level:** {difficulty_title}\n\
         **🎯 Focus Area:** {body_focus}\n\
         **🛠️ Equipment:** {equipment}\n\
         **⏱️ Duration:** ~{duration_minutes} minutes\n\
         **💪 Exercises:** {count}\n\n\
         ## 📋 {difficulty_title} Guidelines\n\
         - **Sets/Reps:** {sets_info}\n\
         - **Rest Between Sets:** {rest_info}\n\
         - **Intensity:** {intensity_note}\n\n\
         ## 💪 Workout Exercises\n\n",
        body_focus = title_case(body_focus),
        equipment = title_case(equipment),
        count = exercises.len(),
        sets_info = guidelines.sets_info,
        rest_info = guidelines.rest_info,
        intensity_note = guidelines.intensity_note,
    );

    for (index, exercise) in exercises.iter().enumerate() {
        plan.push_str(&exercise_block(
            index + 1,
            exercise,
            "📝 Key Points",
            "Maintain proper form throughout",
            &format!(
                "- **📊 {difficulty_title} Protocol:** {}\n- **⏰ Rest:** {}",
                guidelines.sets_info, guidelines.rest_info
            ),
            "🎬 Technique Guide",
        ));
    }

    plan.push_str(guidelines.tips);
    plan.push_str(
        "\n## 🎬 Visual Form Guides\n\
         Every exercise includes an animated demonstration to help you:\n\
         - Master proper technique at your skill level\n\
         - Understand the optimal range of motion\n\
         - Maintain consistent form throughout your sets\n\
         - Progress safely to more advanced variations\n",
    );
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Exercise {
        Exercise {
            id: "0042".to_string(),
            name: "dumbbell bench press".to_string(),
            body_part: "chest".to_string(),
            target: "pectorals".to_string(),
            secondary_muscles: vec!["triceps".to_string(), "deltoids".to_string()],
            equipment: "dumbbell".to_string(),
            instructions: vec!["Lie on a flat bench holding a dumbbell in each hand.".to_string()],
            category: None,
            difficulty: None,
            gif_url: Some("https://v2.exercisedb.io/image/0042".to_string()),
        }
    }

    #[test]
    fn title_cases_multi_word_values() {
        assert_eq!(title_case("upper legs"), "Upper Legs");
        assert_eq!(title_case("body weight"), "Body Weight");
        assert_eq!(title_case(""), "N/A");
    }

    #[test]
    fn empty_list_renders_not_found_text() {
        assert_eq!(format_exercise_list(&[], 10), "No exercises found.");
    }

    #[test]
    fn list_respects_limit_and_reports_remainder() {
        let exercises = vec![sample(); 5];
        let rendered = format_exercise_list(&exercises, 2);
        assert_eq!(rendered.matches("dumbbell bench press").count(), 2);
        assert!(rendered.contains("... and 3 more exercises available"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let exercises = vec![sample(), sample()];
        assert_eq!(
            format_exercise_list(&exercises, 10),
            format_exercise_list(&exercises, 10)
        );
        assert_eq!(format_exercise_detail(&sample()), format_exercise_detail(&sample()));
    }

    #[test]
    fn long_instructions_are_truncated_in_lists() {
        let mut exercise = sample();
        exercise.instructions = vec!["x".repeat(150)];
        let summary = instruction_summary(&exercise);
        assert_eq!(summary.chars().count(), 103);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn detail_includes_secondary_muscles_and_gif() {
        let rendered = format_exercise_detail(&sample());
        assert!(rendered.contains("Triceps, Deltoids"));
        assert!(rendered.contains("🎬 Exercise Demonstration (GIF):"));
        assert!(rendered.contains("- **Category:** N/A"));
    }

    #[test]
    fn sets_reps_keyed_by_record_kind() {
        let mut cardio = sample();
        cardio.body_part = "cardio".to_string();
        assert_eq!(sets_reps_for(&cardio), "3 sets of 30-45 seconds");

        let mut core = sample();
        core.target = "abs".to_string();
        assert_eq!(sets_reps_for(&core), "3 sets of 12-20 reps");

        assert_eq!(sets_reps_for(&sample()), "3 sets of 8-12 reps");
    }

    #[test]
    fn workout_plan_counts_exercises() {
        let exercises = vec![sample(), sample()];
        let plan = format_workout_plan(&exercises, "chest", "dumbbell", 30);
        assert!(plan.contains("**💪 Total Exercises:** 2"));
        assert!(plan.contains("### Exercise 2:"));
        assert!(plan.contains("# 🏋️ Chest Workout Plan"));
    }

    #[test]
    fn circuit_plan_repeats_rounds() {
        let exercises = vec![sample()];
        let plan = format_circuit_plan(&exercises, "full body", "dumbbell", 3, 45, 15, 12);
        assert!(plan.contains("### Round 3"));
        assert_eq!(plan.matches("**🔄 Rest 2 minutes before next round**").count(), 2);
    }

    #[test]
    fn hiit_plan_picks_intensity_guide() {
        let exercises = vec![sample()];
        let low = format_hiit_plan(&exercises, "low", "body weight", 4, 30, 30, 8);
        assert!(low.contains("🌱 Low Intensity Guidelines"));
        let high = format_hiit_plan(&exercises, "maximal", "body weight", 4, 30, 30, 8);
        assert!(high.contains("⚡ High Intensity Guidelines"));
    }

    #[test]
    fn difficulty_plan_carries_protocol_lines() {
        let guidelines = DifficultyGuidelines::for_level("beginner");
        let plan =
            format_difficulty_plan(&[sample()], "beginner", "full body", "dumbbell", 30, &guidelines);
        assert!(plan.contains("**📊 Beginner Protocol:** 2-3 sets of 8-12 reps"));
        assert!(plan.contains("🌟 Beginner Tips"));
    }

    #[test]
    fn unknown_difficulty_falls_through_to_advanced() {
        let guidelines = DifficultyGuidelines::for_level("elite");
        assert_eq!(guidelines.sets_info, "4-5 sets of 12-20 reps");
    }
}
