use rmcp::model::{CallToolResult, Content};

/// Wraps a formatted text block as a successful tool result.
///
/// Upstream failures are reported inside the text with a ❌ marker, never
/// as protocol errors, so every tool goes through this one path.
pub(crate) fn text_block(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}
