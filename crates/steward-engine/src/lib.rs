//! # steward-engine
//!
//! Desired-state convergence for declared Jenkins instances.
//!
//! Given an [`Instance`](steward_core::Instance), the engine derives the
//! platform resources the instance needs - a workload definition and a
//! network endpoint - and drives each through the idempotent
//! get-or-create-or-update algorithm against a
//! [`PlatformStore`](steward_platform::PlatformStore):
//!
//! - absent resources are created, owned by the instance for cascading
//!   deletion
//! - drifted resources are folded back to the desired shape in place
//! - converged resources are left alone; no write is issued when nothing
//!   changed
//!
//! The endpoint is reconciled before the workload because the workload's
//! desired spec embeds the endpoint's externally visible URL. Retries,
//! backoff and re-triggering on transient failure belong to the outer
//! control loop calling [`ConvergenceEngine::converge`]; the engine's
//! contribution to resilience is being safe to call again at any time.

pub mod build;
pub mod defaults;
mod engine;
mod error;
mod resolver;

pub use engine::{Applied, ConvergeReport, ConvergenceEngine};
pub use error::EngineError;
pub use resolver::{EndpointResolver, Protocol, ResolvedEndpoint};
