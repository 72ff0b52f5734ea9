//! Platform generation planning.

use crate::provider::CloudProvider;

/// Template choices resolved for one platform request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformPlan {
    /// Infrastructure template, `None` when the target cluster already exists.
    pub terraform_template: Option<String>,
    /// Workload chart template, always present.
    pub helm_template: String,
}

impl PlatformPlan {
    /// Resolve template choices for a cloud.
    ///
    /// An existing cluster skips infrastructure generation entirely;
    /// otherwise an explicit override wins over the per-cloud default.
    pub fn resolve(
        cloud: CloudProvider,
        existing_cluster: bool,
        terraform_override: Option<&str>,
        helm_override: Option<&str>,
    ) -> Self {
        let terraform_template = if existing_cluster {
            None
        } else {
            Some(
                terraform_override
                    .unwrap_or_else(|| cloud.default_terraform_template())
                    .to_string(),
            )
        };
        let helm_template = helm_override
            .unwrap_or_else(|| cloud.default_helm_template())
            .to_string();
        Self {
            terraform_template,
            helm_template,
        }
    }

    /// Stem of the archive filename for this plan.
    pub fn bundle_stem(&self, cloud: CloudProvider) -> String {
        if self.terraform_template.is_some() {
            format!("platform-{}", cloud)
        } else {
            format!("workload-{}", cloud)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_cluster_skips_terraform() {
        let plan = PlatformPlan::resolve(CloudProvider::Aws, true, None, None);
        assert_eq!(plan.terraform_template, None);
        assert_eq!(plan.helm_template, "basic");
    }

    #[test]
    fn test_defaults_resolved_per_cloud() {
        let plan = PlatformPlan::resolve(CloudProvider::Aws, false, None, None);
        assert_eq!(plan.terraform_template.as_deref(), Some("aws-eks"));
        assert_eq!(plan.helm_template, "basic");

        let plan = PlatformPlan::resolve(CloudProvider::Gcp, false, None, None);
        assert_eq!(plan.terraform_template.as_deref(), Some("gcp-gke"));
        assert_eq!(plan.helm_template, "gke-basic");
    }

    #[test]
    fn test_overrides_win_over_defaults() {
        let plan = PlatformPlan::resolve(
            CloudProvider::Azure,
            false,
            Some("azure-aks-private"),
            Some("aks-ingress"),
        );
        assert_eq!(plan.terraform_template.as_deref(), Some("azure-aks-private"));
        assert_eq!(plan.helm_template, "aks-ingress");
    }

    #[test]
    fn test_terraform_override_ignored_for_existing_cluster() {
        let plan = PlatformPlan::resolve(CloudProvider::Aws, true, Some("aws-eks-spot"), None);
        assert_eq!(plan.terraform_template, None);
    }

    #[test]
    fn test_bundle_stem() {
        let full = PlatformPlan::resolve(CloudProvider::Aws, false, None, None);
        assert_eq!(full.bundle_stem(CloudProvider::Aws), "platform-aws");

        let workload = PlatformPlan::resolve(CloudProvider::Gcp, true, None, None);
        assert_eq!(workload.bundle_stem(CloudProvider::Gcp), "workload-gcp");
    }
}
