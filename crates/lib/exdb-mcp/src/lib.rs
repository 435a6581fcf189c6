//! MCP server implementation for exdb-mcp.
//!
//! This crate wires the exercise catalog and workout planner into rmcp tool
//! handlers and exposes the MCP-facing API surface for querying the
//! exercise database and building workout plans.

mod helpers;
mod tools;
pub mod server;

use std::sync::Arc;

use exdb_core::catalog::ExerciseCatalog;
use exdb_core::fetch::ExerciseDbFetcher;
use exdb_core::plan::WorkoutPlanner;
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};

const SERVER_INSTRUCTIONS: &str = r"exdb-mcp provides MCP tools over the ExerciseDB exercise database.

Workflow:
1. Discover the filter vocabulary with `get_body_parts_list`, `get_target_muscles_list`,
   and `get_equipment_list`.
2. Browse or search exercises:
   - `get_all_exercises`, `search_exercises_by_name`.
   - `get_exercises_by_body_part`, `get_exercises_by_target_muscle`, `get_exercises_by_equipment`.
   - `get_exercise_by_id` for full instructions and the demonstration GIF.
3. Build workout plans:
   - `create_personalized_workout` for a single session sized by duration and fitness level.
   - `create_circuit_training` and `create_hiit_workout` for interval formats.
   - `get_beginner_workout_plan` for a progressive multi-week plan.
   - `get_workout_by_difficulty` for difficulty-tailored sessions.
4. Vary an exercise with `get_exercise_alternatives` and `get_exercise_modifications`.

Notes:
- Every tool returns a single formatted Markdown block; failures are reported in the
  text with a leading ❌ marker rather than as protocol errors.
- Equipment filters are case-insensitive substrings; pass `any` or `all` to disable them.
- Body parts: back, cardio, chest, lower arms, lower legs, neck, shoulders, upper arms,
  upper legs, waist.
- `health` returns `ok`.";

/// MCP server wrapper around the exercise catalog and tool routers.
#[derive(Clone)]
pub struct ExdbMcp<F: ExerciseDbFetcher> {
    tool_router: ToolRouter<Self>,
    catalog: ExerciseCatalog<F>,
    planner: WorkoutPlanner<F>,
}

impl<F: ExerciseDbFetcher> ExdbMcp<F> {
    /// Creates a new server owning its fetcher.
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        Self::with_catalog(ExerciseCatalog::new(fetcher))
    }

    /// Creates a new server over a shared fetcher handle.
    #[must_use]
    pub fn with_fetcher(fetcher: Arc<F>) -> Self {
        Self::with_catalog(ExerciseCatalog::with_fetcher(fetcher))
    }

    /// Creates a new server reusing an existing catalog (and its cache).
    #[must_use]
    pub fn with_catalog(catalog: ExerciseCatalog<F>) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_catalog()
            + Self::tool_router_taxonomy()
            + Self::tool_router_workouts()
            + Self::tool_router_variations();
        let planner = WorkoutPlanner::new(catalog.clone());
        Self {
            tool_router,
            catalog,
            planner,
        }
    }

    pub(crate) const fn catalog(&self) -> &ExerciseCatalog<F> {
        &self.catalog
    }

    pub(crate) const fn planner(&self) -> &WorkoutPlanner<F> {
        &self.planner
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl<F: ExerciseDbFetcher> ExdbMcp<F> {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl<F: ExerciseDbFetcher> ServerHandler for ExdbMcp<F> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
