//! Cloud provider definitions and default template names.

use serde::{Deserialize, Serialize};

/// Supported cloud providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudProvider {
    Aws,
    Azure,
    Gcp,
}

impl CloudProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "aws",
            CloudProvider::Azure => "azure",
            CloudProvider::Gcp => "gcp",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "aws" => Some(CloudProvider::Aws),
            "azure" => Some(CloudProvider::Azure),
            "gcp" => Some(CloudProvider::Gcp),
            _ => None,
        }
    }

    pub fn all() -> Vec<Self> {
        vec![CloudProvider::Aws, CloudProvider::Azure, CloudProvider::Gcp]
    }

    /// Default infrastructure template for this provider.
    pub fn default_terraform_template(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "aws-eks",
            CloudProvider::Azure => "azure-aks",
            CloudProvider::Gcp => "gcp-gke",
        }
    }

    /// Default workload chart template for this provider.
    pub fn default_helm_template(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "basic",
            CloudProvider::Azure => "aks-basic",
            CloudProvider::Gcp => "gke-basic",
        }
    }
}

impl std::fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
