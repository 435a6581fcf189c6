use exdb_core::fetch::ExerciseDbFetcher;
use exdb_core::render::title_case;
use rmcp::{ErrorData, model::CallToolResult, tool, tool_router};

use crate::ExdbMcp;
use crate::helpers;

fn bullet_list(header: &str, values: &[String]) -> String {
    let bullets: Vec<String> = values
        .iter()
        .map(|value| format!("• {}", title_case(value)))
        .collect();
    format!("{header}\n\n{}", bullets.join("\n"))
}

#[tool_router(router = tool_router_taxonomy, vis = "pub")]
impl<F: ExerciseDbFetcher> ExdbMcp<F> {
    #[tool(description = "Get a comprehensive list of all available body parts in the database.")]
    async fn get_body_parts_list(&self) -> Result<CallToolResult, ErrorData> {
        let text = match self.catalog().body_part_list().await {
            Ok(parts) if !parts.is_empty() => bullet_list(
                "**📍 Available Body Parts for Exercise Filtering:**",
                &parts,
            ),
            _ => "❌ Unable to fetch body parts list.".to_string(),
        };
        Ok(helpers::text_block(text))
    }

    #[tool(description = "Get a comprehensive list of all available target muscles in the database.")]
    async fn get_target_muscles_list(&self) -> Result<CallToolResult, ErrorData> {
        let text = match self.catalog().target_list().await {
            Ok(muscles) if !muscles.is_empty() => bullet_list(
                "**🎯 Available Target Muscles for Exercise Filtering:**",
                &muscles,
            ),
            _ => "❌ Unable to fetch target muscles list.".to_string(),
        };
        Ok(helpers::text_block(text))
    }

    #[tool(description = "Get a comprehensive list of all available equipment types in the database.")]
    async fn get_equipment_list(&self) -> Result<CallToolResult, ErrorData> {
        let text = match self.catalog().equipment_list().await {
            Ok(equipment) if !equipment.is_empty() => bullet_list(
                "**🛠️ Available Equipment for Exercise Filtering:**",
                &equipment,
            ),
            _ => "❌ Unable to fetch equipment list.".to_string(),
        };
        Ok(helpers::text_block(text))
    }
}
