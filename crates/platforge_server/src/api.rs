//! Router and request handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use platforge_cloud::PlatformPlan;
use platforge_templates::{GeneratedFile, TemplateGenerator};
use serde_json::{json, Map, Value};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::models::{
    FamilyPreview, GenerateRequest, PlatformGenerateRequest, PlatformPreviewResponse,
    PreviewResponse,
};

/// Shared handler state: the generator over the template store.
pub type AppState = Arc<TemplateGenerator>;

/// Build the service router over a template generator.
pub fn router(generator: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/generate/terraform/preview", post(terraform_preview))
        .route("/generate/terraform/download", post(terraform_download))
        .route("/generate/helm/preview", post(helm_preview))
        .route("/generate/helm/download", post(helm_download))
        .route("/generate/platform/preview", post(platform_preview))
        .route("/generate/platform/download", post(platform_download))
        .layer(TraceLayer::new_for_http())
        .with_state(generator)
}

async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

async fn terraform_preview(
    State(generator): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<PreviewResponse>, ApiError> {
    let files = generator.generate("terraform", &req.template, &req.context)?;
    Ok(Json(PreviewResponse { files }))
}

async fn terraform_download(
    State(generator): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Response, ApiError> {
    let files = generator.generate("terraform", &req.template, &req.context)?;
    zip_response(&format!("terraform-{}", req.template), &files)
}

async fn helm_preview(
    State(generator): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<PreviewResponse>, ApiError> {
    let files = generator.generate("helm", &req.template, &req.context)?;
    Ok(Json(PreviewResponse { files }))
}

async fn helm_download(
    State(generator): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Response, ApiError> {
    let files = generator.generate("helm", &req.template, &req.context)?;
    zip_response(&format!("helm-{}", req.template), &files)
}

async fn platform_preview(
    State(generator): State<AppState>,
    Json(req): Json<PlatformGenerateRequest>,
) -> Result<Json<PlatformPreviewResponse>, ApiError> {
    let plan = resolve_plan(&req);

    let terraform_files = match &plan.terraform_template {
        Some(template) => generate_family(&generator, "terraform", template, &req.terraform_context)?,
        None => Vec::new(),
    };
    let helm_files = generate_family(&generator, "helm", &plan.helm_template, &req.helm_context)?;

    Ok(Json(PlatformPreviewResponse {
        cloud: req.cloud,
        existing_cluster: req.existing_cluster,
        terraform: FamilyPreview {
            template: plan.terraform_template,
            files: terraform_files,
        },
        helm: FamilyPreview {
            template: Some(plan.helm_template),
            files: helm_files,
        },
    }))
}

async fn platform_download(
    State(generator): State<AppState>,
    Json(req): Json<PlatformGenerateRequest>,
) -> Result<Response, ApiError> {
    let plan = resolve_plan(&req);

    let mut combined = Vec::new();
    if let Some(template) = &plan.terraform_template {
        let files = generate_family(&generator, "terraform", template, &req.terraform_context)?;
        combined.extend(files.iter().map(|f| f.with_prefix("terraform")));
    }
    let helm_files = generate_family(&generator, "helm", &plan.helm_template, &req.helm_context)?;
    combined.extend(helm_files.iter().map(|f| f.with_prefix("helm")));

    zip_response(&plan.bundle_stem(req.cloud), &combined)
}

fn resolve_plan(req: &PlatformGenerateRequest) -> PlatformPlan {
    PlatformPlan::resolve(
        req.cloud,
        req.existing_cluster,
        req.terraform_template.as_deref(),
        req.helm_template.as_deref(),
    )
}

fn generate_family(
    generator: &TemplateGenerator,
    family: &str,
    template: &str,
    context: &Map<String, Value>,
) -> Result<Vec<GeneratedFile>, ApiError> {
    Ok(generator.generate(family, template, context)?)
}

/// Archive response with attachment headers, filename `<stem>.zip`.
fn zip_response(stem: &str, files: &[GeneratedFile]) -> Result<Response, ApiError> {
    let bytes = platforge_archive::pack(files)?;
    let headers = [
        (header::CONTENT_TYPE, "application/zip".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={stem}.zip"),
        ),
    ];
    Ok((headers, bytes).into_response())
}
