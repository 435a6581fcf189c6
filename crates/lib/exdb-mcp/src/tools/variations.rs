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

/// Parameters for listing alternative exercises.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct AlternativesParams {
    pub exercise_id: String,
    pub limit: Option<usize>,
}

/// Parameters for listing easier and harder modifications.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ModificationsParams {
    pub exercise_id: String,
}

#[tool_router(router = tool_router_variations, vis = "pub")]
impl<F: ExerciseDbFetcher> ExdbMcp<F> {
    #[tool(
        description = "Find alternative exercises that target the same muscle groups with GIF demonstrations."
    )]
    async fn get_exercise_alternatives(
        &self,
        Parameters(params): Parameters<AlternativesParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let limit = params.limit.unwrap_or(5);
        let text = self.planner().alternatives(&params.exercise_id, limit).await;
        Ok(helpers::text_block(text))
    }

    #[tool(
        description = "Get easier and harder modifications for a specific exercise with GIF demonstrations."
    )]
    async fn get_exercise_modifications(
        &self,
        Parameters(params): Parameters<ModificationsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let text = self.planner().modifications(&params.exercise_id).await;
        Ok(helpers::text_block(text))
    }
}
