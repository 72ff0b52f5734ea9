//! Request and response bodies.

use platforge_cloud::CloudProvider;
use platforge_templates::GeneratedFile;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a single-family generation request.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    /// Template name under `<store>/<family>/`.
    pub template: String,
    /// Variables substituted into template files.
    #[serde(default)]
    pub context: Map<String, Value>,
}

/// Body of a combined infra + workload generation request.
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformGenerateRequest {
    /// Target cloud provider.
    pub cloud: CloudProvider,
    /// Skip terraform generation when the cluster already exists.
    #[serde(default)]
    pub existing_cluster: bool,
    #[serde(default)]
    pub terraform_context: Map<String, Value>,
    #[serde(default)]
    pub helm_context: Map<String, Value>,
    /// Optional override of the per-cloud terraform default.
    #[serde(default)]
    pub terraform_template: Option<String>,
    /// Optional override of the per-cloud helm default.
    #[serde(default)]
    pub helm_template: Option<String>,
}

/// Preview response for a single-family generation.
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub files: Vec<GeneratedFile>,
}

/// One family's slice of a platform preview.
#[derive(Debug, Serialize)]
pub struct FamilyPreview {
    /// Resolved template name, `None` when the family was skipped.
    pub template: Option<String>,
    pub files: Vec<GeneratedFile>,
}

/// Preview response for a platform generation.
#[derive(Debug, Serialize)]
pub struct PlatformPreviewResponse {
    pub cloud: CloudProvider,
    pub existing_cluster: bool,
    pub terraform: FamilyPreview,
    pub helm: FamilyPreview,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generate_request_context_defaults_empty() {
        let req: GenerateRequest = serde_json::from_value(json!({"template": "aws-eks"})).unwrap();
        assert_eq!(req.template, "aws-eks");
        assert!(req.context.is_empty());
    }

    #[test]
    fn test_platform_request_defaults() {
        let req: PlatformGenerateRequest =
            serde_json::from_value(json!({"cloud": "azure"})).unwrap();
        assert_eq!(req.cloud, CloudProvider::Azure);
        assert!(!req.existing_cluster);
        assert!(req.terraform_context.is_empty());
        assert!(req.helm_context.is_empty());
        assert_eq!(req.terraform_template, None);
        assert_eq!(req.helm_template, None);
    }

    #[test]
    fn test_preview_response_shape() {
        let response = PreviewResponse {
            files: vec![GeneratedFile::new("main.tf", "resource {}\n")],
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({"files": [{"path": "main.tf", "content": "resource {}\n"}]})
        );
    }
}
