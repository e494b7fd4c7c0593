use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use steward_core::Instance;
use steward_engine::build::{desired_endpoint, desired_workload};
use steward_engine::{ConvergenceEngine, Protocol, ResolvedEndpoint};
use steward_platform::DerivedResource;
use steward_platform_memory::InMemoryPlatform;

use crate::cli::{BuildArgs, ConvergeArgs};
use crate::output::print_success;

/// Load an instance manifest, assigning a uid when the manifest carries
/// none (the platform would have done so at admission).
fn load_instance(path: &Path) -> Result<Instance> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading manifest {}", path.display()))?;
    let mut instance: Instance = serde_json::from_str(&raw)
        .with_context(|| format!("parsing manifest {}", path.display()))?;
    if instance.uid.is_none() {
        instance = instance.with_uid(uuid::Uuid::new_v4().to_string());
    }
    Ok(instance)
}

pub async fn converge(args: &ConvergeArgs) -> Result<()> {
    let instance = load_instance(&args.manifest)?;

    let store = Arc::new(InMemoryPlatform::new());
    if let Some(host) = &args.endpoint_host {
        let mut endpoint = desired_endpoint(&instance);
        endpoint.spec.host = Some(host.clone());
        if args.plain {
            endpoint.spec.tls = None;
        }
        store.seed(DerivedResource::from(endpoint));
        print_success(&format!("staged pre-existing endpoint with host {host}"));
    }

    let engine = ConvergenceEngine::new(store);
    for pass in 1..=args.passes {
        let report = engine.converge(&instance).await?;
        print_success(&format!(
            "pass {pass}: endpoint {}, workload {}",
            report.endpoint, report.workload
        ));
    }

    Ok(())
}

pub fn build(args: &BuildArgs) -> Result<()> {
    let instance = load_instance(&args.manifest)?;

    let protocol = if args.plain {
        Protocol::Http
    } else {
        Protocol::Https
    };
    let resolved = ResolvedEndpoint {
        host: args.endpoint_host.clone(),
        protocol,
    };

    let manifests = serde_json::json!({
        "workload": desired_workload(&instance, &resolved),
        "endpoint": desired_endpoint(&instance),
    });
    println!("{}", serde_json::to_string_pretty(&manifests)?);

    Ok(())
}
