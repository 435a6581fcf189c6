use exdb_core::fetch::ExerciseDbFetcher;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::ExdbMcp;
use crate::helpers;

/// Parameters for building a personalized workout plan.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PersonalizedWorkoutParams {
    /// Workout type, e.g. "chest", "full body", "leg day", "upper body",
    /// "cardio", "strength", "hiit".
    pub workout_type: String,
    /// Available equipment ("dumbbell", "barbell", "body weight",
    /// "machine", "kettlebell", "any"). Defaults to "body weight".
    pub equipment: Option<String>,
    /// Target duration in minutes (15-60). Defaults to 30.
    pub duration_minutes: Option<u32>,
    /// "beginner", "intermediate", or "advanced". Defaults to "beginner".
    pub fitness_level: Option<String>,
    /// Training emphasis such as "strength", "endurance", "muscle
    /// building", "fat loss", or "balanced". Currently informational.
    pub focus_areas: Option<String>,
}

/// Parameters for building a circuit-training session.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CircuitTrainingParams {
    /// "full body", "upper body", "lower body", "core", or "cardio".
    pub target_areas: Option<String>,
    pub equipment: Option<String>,
    pub rounds: Option<u32>,
    pub exercises_per_round: Option<usize>,
    /// Work duration in seconds.
    pub work_time: Option<u32>,
    /// Rest duration in seconds.
    pub rest_time: Option<u32>,
}

/// Parameters for building a HIIT session.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct HiitWorkoutParams {
    /// "low", "moderate", or "high". Defaults to "moderate".
    pub intensity: Option<String>,
    pub equipment: Option<String>,
    pub rounds: Option<u32>,
    pub work_time: Option<u32>,
    pub rest_time: Option<u32>,
}

/// Parameters for building a progressive beginner plan.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct BeginnerPlanParams {
    /// "full body", "upper body", "lower body", or "core strength".
    pub focus_area: Option<String>,
    pub equipment: Option<String>,
    /// Number of weeks for progression (2-8). Defaults to 4.
    pub weeks: Option<u32>,
}

/// Parameters for building a difficulty-tailored workout.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DifficultyWorkoutParams {
    /// "beginner", "intermediate", or "advanced". Defaults to "beginner".
    pub difficulty: Option<String>,
    /// Target body area. Defaults to "full body".
    pub body_focus: Option<String>,
    pub equipment: Option<String>,
    /// Workout duration in minutes. Defaults to 30.
    pub duration: Option<u32>,
}

#[tool_router(router = tool_router_workouts, vis = "pub")]
impl<F: ExerciseDbFetcher> ExdbMcp<F> {
    #[tool(
        description = "Create a personalized workout plan with GIF demonstrations for each exercise, sized by duration and fitness level."
    )]
    async fn create_personalized_workout(
        &self,
        Parameters(params): Parameters<PersonalizedWorkoutParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let equipment = params.equipment.as_deref().unwrap_or("body weight");
        let duration_minutes = params.duration_minutes.unwrap_or(30);
        let fitness_level = params.fitness_level.as_deref().unwrap_or("beginner");
        let plan = self
            .planner()
            .personalized_workout(&params.workout_type, equipment, duration_minutes, fitness_level)
            .await;
        Ok(helpers::text_block(plan))
    }

    #[tool(
        description = "Create a circuit training workout with multiple rounds and GIF demonstrations."
    )]
    async fn create_circuit_training(
        &self,
        Parameters(params): Parameters<CircuitTrainingParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let target_areas = params.target_areas.as_deref().unwrap_or("full body");
        let equipment = params.equipment.as_deref().unwrap_or("body weight");
        let plan = self
            .planner()
            .circuit_training(
                target_areas,
                equipment,
                params.rounds.unwrap_or(3),
                params.exercises_per_round.unwrap_or(5),
                params.work_time.unwrap_or(45),
                params.rest_time.unwrap_or(15),
            )
            .await;
        Ok(helpers::text_block(plan))
    }

    #[tool(
        description = "Create a High-Intensity Interval Training (HIIT) workout with GIF demonstrations."
    )]
    async fn create_hiit_workout(
        &self,
        Parameters(params): Parameters<HiitWorkoutParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let intensity = params.intensity.as_deref().unwrap_or("moderate");
        let equipment = params.equipment.as_deref().unwrap_or("body weight");
        let plan = self
            .planner()
            .hiit_workout(
                intensity,
                equipment,
                params.rounds.unwrap_or(4),
                params.work_time.unwrap_or(30),
                params.rest_time.unwrap_or(30),
            )
            .await;
        Ok(helpers::text_block(plan))
    }

    #[tool(
        description = "Create a progressive beginner workout plan with GIF demonstrations for each exercise."
    )]
    async fn get_beginner_workout_plan(
        &self,
        Parameters(params): Parameters<BeginnerPlanParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let focus_area = params.focus_area.as_deref().unwrap_or("full body");
        let equipment = params.equipment.as_deref().unwrap_or("body weight");
        let plan = self
            .planner()
            .beginner_plan(focus_area, equipment, params.weeks.unwrap_or(4))
            .await;
        Ok(helpers::text_block(plan))
    }

    #[tool(
        description = "Create a workout plan tailored to a specific difficulty level with GIF demonstrations."
    )]
    async fn get_workout_by_difficulty(
        &self,
        Parameters(params): Parameters<DifficultyWorkoutParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let difficulty = params.difficulty.as_deref().unwrap_or("beginner");
        let body_focus = params.body_focus.as_deref().unwrap_or("full body");
        let equipment = params.equipment.as_deref().unwrap_or("body weight");
        let plan = self
            .planner()
            .difficulty_workout(difficulty, body_focus, equipment, params.duration.unwrap_or(30))
            .await;
        Ok(helpers::text_block(plan))
    }
}
