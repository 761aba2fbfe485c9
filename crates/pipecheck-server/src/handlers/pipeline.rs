//! Pipeline parse HTTP handler.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use pipecheck_core::{PipelineData, PipelineSummary};
use tracing::{debug, info, warn};

use crate::error::AppError;

/// Counts the submitted nodes and edges and checks the graph for cycles.
pub async fn parse(
    payload: Result<Json<PipelineData>, JsonRejection>,
) -> Result<Json<PipelineSummary>, AppError> {
    let Json(data) = payload.map_err(|e| {
        warn!("Rejected pipeline body: {}", e.body_text());
        AppError::from(e)
    })?;

    info!("Parsing pipeline: {} nodes, {} edges", data.nodes.len(), data.edges.len());

    let summary = pipecheck_core::analyze(&data).map_err(|e| {
        warn!("Failed to parse pipeline: {}", e);
        AppError::from(e)
    })?;

    debug!("Pipeline parsed: is_dag={}", summary.is_dag);
    Ok(Json(summary))
}
