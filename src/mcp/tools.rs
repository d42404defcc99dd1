/// MCP Tool handlers for the field schema server.
///
/// 1. get_field_schema        – fused static + dynamic field schema
/// 2. suggest_fields          – ranked field-name suggestions
/// 3. suggest_fields_detailed – suggestions with score breakdowns
/// 4. list_entity_types       – enumerate supported entity types
/// 5. invalidate_field_cache  – drop cached custom-field discoveries
/// 6. field_cache_stats       – cache introspection
use crate::catalog::{self, EntityType};
use crate::fields::suggest::SuggestError;
use crate::mcp::server::McpContext;
use rmcp::handler::server::ServerHandler;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{ErrorData as McpError, handler::server::tool::ToolRouter, model::*, tool, tool_router};
use schemars::JsonSchema;
use serde::Deserialize;

// ── Parameter structs ────────────────────────────────────────────────

#[derive(Deserialize, JsonSchema)]
struct EntityTypeParam {
    /// Entity type: issue | project | user | agile
    entity_type: String,
}

#[derive(Deserialize, JsonSchema)]
struct SuggestParams {
    /// Entity type: issue | project | user | agile
    entity_type: String,
    /// Field name or fragment to resolve (e.g. 'statu', 'asignee')
    query: String,
    /// Max suggestions to return (default: 5)
    max_suggestions: Option<usize>,
}

#[derive(Deserialize, JsonSchema)]
struct InvalidateParams {
    /// Entity type to invalidate (all entries if omitted)
    entity_type: Option<String>,
}

// ── Response helpers ─────────────────────────────────────────────────

fn json_result(value: serde_json::Value) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&value).unwrap_or_default(),
    )]))
}

fn error_result(msg: &str) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::error(vec![Content::text(msg.to_string())]))
}

fn suggest_error_result(err: &SuggestError) -> Result<CallToolResult, McpError> {
    error_result(&err.to_string())
}

// ── Tool implementations ─────────────────────────────────────────────

#[derive(Clone)]
pub struct AppTools {
    pub ctx: McpContext,
    pub tool_router: ToolRouter<Self>,
}

impl ServerHandler for AppTools {}

#[tool_router]
impl AppTools {
    pub fn new(ctx: McpContext) -> Self {
        Self {
            ctx,
            tool_router: Self::tool_router(),
        }
    }

    // ── Tool 1: get_field_schema ────────────────────────────────────

    #[tool(
        description = "Get the fused field schema for an entity type: compiled-in fields merged with custom fields discovered from the live tracker, plus a flattened access-path index."
    )]
    async fn get_field_schema(
        &self,
        params: Parameters<EntityTypeParam>,
    ) -> Result<CallToolResult, McpError> {
        let entity_type = params.0.entity_type;
        if entity_type.trim().is_empty() {
            return error_result("entity_type is required");
        }

        let doc = self
            .ctx
            .fusion
            .build_resource_document(&entity_type, self.ctx.config.dynamic_discovery_enabled)
            .await;

        let value = serde_json::to_value(&doc)
            .map_err(|e| McpError::internal_error(format!("serialize failed: {e}"), None))?;
        json_result(value)
    }

    // ── Tool 2: suggest_fields ──────────────────────────────────────

    #[tool(
        description = "Suggest valid field names for a possibly misspelled or guessed field token. Returns a ranked list; known typos resolve to their correction first."
    )]
    async fn suggest_fields(
        &self,
        params: Parameters<SuggestParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let max = p.max_suggestions.unwrap_or(5);

        match self.ctx.engine.suggest(&p.entity_type, &p.query, max) {
            Ok(suggestions) => json_result(serde_json::json!({
                "query": p.query,
                "entityType": p.entity_type,
                "suggestions": suggestions,
            })),
            Err(e) => suggest_error_result(&e),
        }
    }

    // ── Tool 3: suggest_fields_detailed ─────────────────────────────

    #[tool(
        description = "Suggest field names with per-candidate score breakdowns (similarity, usage frequency, availability) and custom-field id pattern hints."
    )]
    async fn suggest_fields_detailed(
        &self,
        params: Parameters<SuggestParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let max = p.max_suggestions.unwrap_or(5);

        let suggestions = match self.ctx.engine.suggest_detailed(&p.entity_type, &p.query, max) {
            Ok(s) => s,
            Err(e) => return suggest_error_result(&e),
        };
        let hints = self
            .ctx
            .engine
            .custom_field_hints(&p.entity_type, &p.query)
            .unwrap_or_default();

        // Entity type is known valid here, suggest_detailed checked it.
        let last_analyzed = EntityType::from_name(&p.entity_type)
            .map(|entity| catalog::suggestion_data(entity).last_analyzed);

        json_result(serde_json::json!({
            "query": p.query,
            "entityType": p.entity_type,
            "suggestions": suggestions,
            "customFieldHints": hints,
            "lastAnalyzed": last_analyzed,
        }))
    }

    // ── Tool 4: list_entity_types ───────────────────────────────────

    #[tool(description = "List the entity types this server can describe, with static field counts.")]
    async fn list_entity_types(&self) -> Result<CallToolResult, McpError> {
        let entity_types: Vec<serde_json::Value> = EntityType::ALL
            .iter()
            .map(|&entity| {
                serde_json::json!({
                    "name": entity.as_str(),
                    "staticFields": catalog::static_fields(entity).len(),
                    "contextualSuggestions": catalog::suggestion_data(entity).contextual_suggestions,
                })
            })
            .collect();

        json_result(serde_json::json!({ "entityTypes": entity_types }))
    }

    // ── Tool 5: invalidate_field_cache ──────────────────────────────

    #[tool(
        description = "Drop cached custom-field discoveries so the next read re-queries the tracker. Pass entity_type to invalidate one entry, omit it to clear everything."
    )]
    async fn invalidate_field_cache(
        &self,
        params: Parameters<InvalidateParams>,
    ) -> Result<CallToolResult, McpError> {
        match params.0.entity_type {
            Some(entity_type) if !entity_type.trim().is_empty() => {
                let removed = self.ctx.cache.invalidate(&entity_type).await;
                json_result(serde_json::json!({
                    "success": true,
                    "invalidated": if removed { 1 } else { 0 },
                    "entityType": entity_type,
                }))
            }
            _ => {
                let removed = self.ctx.cache.clear().await;
                json_result(serde_json::json!({
                    "success": true,
                    "invalidated": removed,
                }))
            }
        }
    }

    // ── Tool 6: field_cache_stats ───────────────────────────────────

    #[tool(description = "Inspect the dynamic field cache: entries, ages, and pending discoveries.")]
    async fn field_cache_stats(&self) -> Result<CallToolResult, McpError> {
        let stats = self.ctx.cache.stats().await;
        let value = serde_json::to_value(&stats)
            .map_err(|e| McpError::internal_error(format!("serialize failed: {e}"), None))?;
        json_result(value)
    }
}
