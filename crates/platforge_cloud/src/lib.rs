//! # platforge_cloud
//!
//! Cloud provider definitions and platform planning for PlatForge.
//!
//! A platform request names a cloud and optionally overrides the template
//! choices; this crate resolves that into a concrete plan: which terraform
//! template to render (if any) and which helm template to render.

pub mod plan;
pub mod provider;

pub use plan::PlatformPlan;
pub use provider::CloudProvider;
