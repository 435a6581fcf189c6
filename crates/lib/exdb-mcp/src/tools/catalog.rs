use exdb_core::fetch::ExerciseDbFetcher;
use exdb_core::render::{format_exercise_detail, format_exercise_list, title_case};
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

/// Parameters for listing the whole exercise database.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetAllExercisesParams {
    pub limit: Option<usize>,
}

/// Parameters for fetching one exercise by id.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetExerciseByIdParams {
    pub exercise_id: String,
}

/// Parameters for filtering exercises by body part.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetByBodyPartParams {
    pub body_part: String,
    pub limit: Option<usize>,
}

/// Parameters for filtering exercises by target muscle.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetByTargetMuscleParams {
    pub target_muscle: String,
    pub limit: Option<usize>,
}

/// Parameters for filtering exercises by equipment.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetByEquipmentParams {
    pub equipment: String,
    pub limit: Option<usize>,
}

/// Parameters for searching exercises by name.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SearchByNameParams {
    pub name: String,
    pub limit: Option<usize>,
}

#[tool_router(router = tool_router_catalog, vis = "pub")]
impl<F: ExerciseDbFetcher> ExdbMcp<F> {
    #[tool(
        description = "Get a comprehensive list of all exercises in the database with GIF demonstrations. Use limit to control results (max 50 recommended)."
    )]
    async fn get_all_exercises(
        &self,
        Parameters(params): Parameters<GetAllExercisesParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let limit = params.limit.unwrap_or(20);
        let text = match self.catalog().all_exercises().await {
            Ok(exercises) if !exercises.is_empty() => format!(
                "**📚 Exercise Database (Showing {shown} of {total} exercises):**\n\n{list}",
                shown = limit.min(exercises.len()),
                total = exercises.len(),
                list = format_exercise_list(&exercises, limit),
            ),
            _ => "❌ Unable to fetch exercises data. Please check your API connection.".to_string(),
        };
        Ok(helpers::text_block(text))
    }

    #[tool(
        description = "Get detailed information about a specific exercise by its ID, including full instructions and GIF demonstration."
    )]
    async fn get_exercise_by_id(
        &self,
        Parameters(params): Parameters<GetExerciseByIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let text = match self.catalog().exercise_by_id(&params.exercise_id).await {
            Ok(exercise) => format_exercise_detail(&exercise),
            Err(_) => format!(
                "❌ Unable to fetch exercise with ID: {}. Please verify the ID is correct.",
                params.exercise_id
            ),
        };
        Ok(helpers::text_block(text))
    }

    #[tool(
        description = "Get exercises targeting a specific body part with GIF demonstrations. Available body parts: back, cardio, chest, lower arms, lower legs, neck, shoulders, upper arms, upper legs, waist."
    )]
    async fn get_exercises_by_body_part(
        &self,
        Parameters(params): Parameters<GetByBodyPartParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let limit = params.limit.unwrap_or(15);
        let text = match self.catalog().by_body_part(&params.body_part).await {
            Ok(exercises) if !exercises.is_empty() => format!(
                "**🎯 {title} Exercises (Showing {shown} of {total} exercises):**\n\n{list}",
                title = title_case(&params.body_part),
                shown = limit.min(exercises.len()),
                total = exercises.len(),
                list = format_exercise_list(&exercises, limit),
            ),
            _ => format!(
                "❌ Unable to fetch exercises for body part: {}. Please check the body part name.",
                params.body_part
            ),
        };
        Ok(helpers::text_block(text))
    }

    #[tool(
        description = "Get exercises targeting a specific muscle with GIF demonstrations. Popular targets: abs, biceps, calves, glutes, hamstrings, lats, pectorals, quads, delts, triceps."
    )]
    async fn get_exercises_by_target_muscle(
        &self,
        Parameters(params): Parameters<GetByTargetMuscleParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let limit = params.limit.unwrap_or(15);
        let text = match self.catalog().by_target(&params.target_muscle).await {
            Ok(exercises) if !exercises.is_empty() => format!(
                "**🎯 {title} Targeted Exercises (Showing {shown} of {total} exercises):**\n\n{list}",
                title = title_case(&params.target_muscle),
                shown = limit.min(exercises.len()),
                total = exercises.len(),
                list = format_exercise_list(&exercises, limit),
            ),
            _ => format!(
                "❌ Unable to fetch exercises for target muscle: {}. Please check the muscle name.",
                params.target_muscle
            ),
        };
        Ok(helpers::text_block(text))
    }

    #[tool(
        description = "Get exercises using specific equipment with GIF demonstrations. Available equipment: barbell, dumbbell, cable, body weight, machine, resistance band, kettlebell, medicine ball, etc."
    )]
    async fn get_exercises_by_equipment(
        &self,
        Parameters(params): Parameters<GetByEquipmentParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let limit = params.limit.unwrap_or(15);
        let text = match self.catalog().by_equipment(&params.equipment).await {
            Ok(exercises) if !exercises.is_empty() => format!(
                "**🛠️ {title} Exercises (Showing {shown} of {total} exercises):**\n\n{list}",
                title = title_case(&params.equipment),
                shown = limit.min(exercises.len()),
                total = exercises.len(),
                list = format_exercise_list(&exercises, limit),
            ),
            _ => format!(
                "❌ Unable to fetch exercises for equipment: {}. Please check the equipment name.",
                params.equipment
            ),
        };
        Ok(helpers::text_block(text))
    }

    #[tool(
        description = "Search for exercises by name with GIF demonstrations. Returns exercises that match the search term."
    )]
    async fn search_exercises_by_name(
        &self,
        Parameters(params): Parameters<SearchByNameParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let limit = params.limit.unwrap_or(10);
        let Ok(exercises) = self.catalog().all_exercises().await else {
            return Ok(helpers::text_block(
                "❌ Unable to search exercises. Please check your connection.",
            ));
        };

        let needle = params.name.to_lowercase();
        let matches: Vec<_> = exercises
            .into_iter()
            .filter(|exercise| exercise.name.to_lowercase().contains(&needle))
            .collect();

        let text = if matches.is_empty() {
            format!(
                "❌ No exercises found matching '{}'. Try different keywords or check spelling.",
                params.name
            )
        } else {
            format!(
                "**🔍 Search Results for '{name}' ({found} found):**\n\n{list}",
                name = params.name,
                found = matches.len(),
                list = format_exercise_list(&matches, limit),
            )
        };
        Ok(helpers::text_block(text))
    }
}
