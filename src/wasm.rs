//! WASM entry points for browser use.
//!
//! Stateless functions: the editor passes the template catalog, the
//! accepted-edge snapshot, and the candidate as JSON on every call, so no
//! hidden state lives on either side of the boundary.

use wasm_bindgen::prelude::*;

use crate::batch::BatchReport;
use crate::catalog::NodeTemplateCatalog;
use crate::engine::CycleReport;
use crate::graph::cycle;
use crate::model::{EdgeCandidate, GraphSnapshot, NodeTemplate};
use crate::suggest::{self, AutoFix, Suggestion};
use crate::validate::ValidationResult;
use crate::{batch, validate};

/// Validate one proposed edge. Returns a ValidationResult object, or an
/// error reply when the JSON inputs fail to parse.
#[wasm_bindgen]
pub fn validate_connection(catalog_json: &str, snapshot_json: &str, candidate_json: &str) -> JsValue {
    let reply = validate_connection_inner(catalog_json, snapshot_json, candidate_json);
    serde_wasm_bindgen::to_value(&reply).unwrap_or(JsValue::NULL)
}

fn validate_connection_inner(
    catalog_json: &str,
    snapshot_json: &str,
    candidate_json: &str,
) -> WasmReply<ValidationResult> {
    let (catalog, snapshot) = match parse_context(catalog_json, snapshot_json) {
        Ok(ctx) => ctx,
        Err(message) => return WasmReply::Error { message },
    };
    let candidate = match serde_json::from_str::<EdgeCandidate>(candidate_json) {
        Ok(c) => c,
        Err(e) => {
            return WasmReply::Error {
                message: format!("Failed to parse edge candidate JSON: {}", e),
            };
        }
    };
    WasmReply::Ok {
        result: validate::validate_connection(&candidate, &catalog, &snapshot),
    }
}

/// Validate a whole workflow's edges at once. Returns a BatchReport.
#[wasm_bindgen]
pub fn validate_workflow_connections(
    catalog_json: &str,
    snapshot_json: &str,
    edges_json: &str,
) -> JsValue {
    let reply = validate_workflow_inner(catalog_json, snapshot_json, edges_json);
    serde_wasm_bindgen::to_value(&reply).unwrap_or(JsValue::NULL)
}

fn validate_workflow_inner(
    catalog_json: &str,
    snapshot_json: &str,
    edges_json: &str,
) -> WasmReply<BatchReport> {
    let (catalog, snapshot) = match parse_context(catalog_json, snapshot_json) {
        Ok(ctx) => ctx,
        Err(message) => return WasmReply::Error { message },
    };
    let edges = match serde_json::from_str::<Vec<EdgeCandidate>>(edges_json) {
        Ok(e) => e,
        Err(e) => {
            return WasmReply::Error {
                message: format!("Failed to parse edges JSON: {}", e),
            };
        }
    };
    WasmReply::Ok {
        result: batch::validate_all(&edges, &catalog, &snapshot),
    }
}

/// Rank target ports for a source port over the snapshot's nodes.
#[wasm_bindgen]
pub fn suggest_connections(
    catalog_json: &str,
    snapshot_json: &str,
    source_node: &str,
    source_port: &str,
) -> JsValue {
    let reply = suggest_inner(catalog_json, snapshot_json, source_node, source_port);
    serde_wasm_bindgen::to_value(&reply).unwrap_or(JsValue::NULL)
}

fn suggest_inner(
    catalog_json: &str,
    snapshot_json: &str,
    source_node: &str,
    source_port: &str,
) -> WasmReply<Vec<Suggestion>> {
    let (catalog, snapshot) = match parse_context(catalog_json, snapshot_json) {
        Ok(ctx) => ctx,
        Err(message) => return WasmReply::Error { message },
    };
    WasmReply::Ok {
        result: suggest::suggest_targets(
            source_node,
            source_port,
            &snapshot.nodes,
            &catalog,
            &snapshot,
        ),
    }
}

/// Attempt to repair a rejected edge candidate.
#[wasm_bindgen]
pub fn auto_fix_connection(catalog_json: &str, snapshot_json: &str, candidate_json: &str) -> JsValue {
    let reply = auto_fix_inner(catalog_json, snapshot_json, candidate_json);
    serde_wasm_bindgen::to_value(&reply).unwrap_or(JsValue::NULL)
}

fn auto_fix_inner(
    catalog_json: &str,
    snapshot_json: &str,
    candidate_json: &str,
) -> WasmReply<AutoFix> {
    let (catalog, snapshot) = match parse_context(catalog_json, snapshot_json) {
        Ok(ctx) => ctx,
        Err(message) => return WasmReply::Error { message },
    };
    let candidate = match serde_json::from_str::<EdgeCandidate>(candidate_json) {
        Ok(c) => c,
        Err(e) => {
            return WasmReply::Error {
                message: format!("Failed to parse edge candidate JSON: {}", e),
            };
        }
    };
    WasmReply::Ok {
        result: suggest::auto_fix(&candidate, &catalog, &snapshot),
    }
}

/// Enumerate cycles in the snapshot's non-feedback edges.
#[wasm_bindgen]
pub fn detect_circular_dependencies(snapshot_json: &str) -> JsValue {
    let reply = detect_cycles_inner(snapshot_json);
    serde_wasm_bindgen::to_value(&reply).unwrap_or(JsValue::NULL)
}

fn detect_cycles_inner(snapshot_json: &str) -> WasmReply<CycleReport> {
    let snapshot = match serde_json::from_str::<GraphSnapshot>(snapshot_json) {
        Ok(s) => s,
        Err(e) => {
            return WasmReply::Error {
                message: format!("Failed to parse snapshot JSON: {}", e),
            };
        }
    };
    let cycles = cycle::find_cycles(&snapshot.nodes, &snapshot.edges);
    WasmReply::Ok {
        result: CycleReport {
            has_cycle: !cycles.is_empty(),
            cycles,
        },
    }
}

fn parse_context(
    catalog_json: &str,
    snapshot_json: &str,
) -> Result<(NodeTemplateCatalog, GraphSnapshot), String> {
    let templates = serde_json::from_str::<Vec<NodeTemplate>>(catalog_json)
        .map_err(|e| format!("Failed to parse template catalog JSON: {}", e))?;
    let snapshot = serde_json::from_str::<GraphSnapshot>(snapshot_json)
        .map_err(|e| format!("Failed to parse snapshot JSON: {}", e))?;
    Ok((templates.into_iter().collect(), snapshot))
}

// ---------------------------------------------------------------------------
// Reply envelope for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
enum WasmReply<T> {
    #[serde(rename = "ok")]
    Ok { result: T },
    #[serde(rename = "error")]
    Error { message: String },
}
