use dsd_model::{
    ContainerInspection, ENABLED_VALUE, FALLBACK_HOST, LABEL_COMPOSE_PROJECT,
    LABEL_COMPOSE_SERVICE, LABEL_ENABLED, LABEL_HOSTNAME, LABEL_JOB_NAME, LABEL_METRICS_PATH,
    LABEL_PORT, LABEL_SCHEME,
};
use tracing::{info, warn};

use crate::config::HostnameMode;
use crate::extract::builder::TargetBuilder;

/// What a step may read.
pub(crate) struct StepInput<'a> {
    pub container: &'a ContainerInspection,
    pub name: &'a str,
    pub mode: HostnameMode,
}

pub(crate) type Step = fn(TargetBuilder, &StepInput<'_>) -> TargetBuilder;

/// Overrides applied to an eligible container, in precedence order.
pub(crate) const STEPS: &[Step] = &[job, port, host, scheme, metrics_path, compose];

/// Why a container is (not) published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Eligibility<'a> {
    NoLabels,
    NotLabelled,
    Disabled(&'a str),
    Enabled,
}

pub(crate) fn eligibility(container: &ContainerInspection) -> Eligibility<'_> {
    let Some(labels) = container.labels.as_ref() else {
        return Eligibility::NoLabels;
    };
    match labels.get(LABEL_ENABLED).map(String::as_str) {
        None => Eligibility::NotLabelled,
        Some(ENABLED_VALUE) => Eligibility::Enabled,
        Some(other) => Eligibility::Disabled(other),
    }
}

fn job(b: TargetBuilder, input: &StepInput<'_>) -> TargetBuilder {
    match input.container.label(LABEL_JOB_NAME) {
        Some(job) => {
            info!(container = input.name, job, "job name overridden");
            b.job(job)
        }
        None => b,
    }
}

fn port(b: TargetBuilder, input: &StepInput<'_>) -> TargetBuilder {
    match input.container.label(LABEL_PORT) {
        Some(port) => {
            info!(container = input.name, port, "port set from label");
            b.port(port)
        }
        None => {
            info!(container = input.name, port = b.current_port(), "using default port");
            b
        }
    }
}

fn host(b: TargetBuilder, input: &StepInput<'_>) -> TargetBuilder {
    let c = input.container;
    match input.mode {
        HostnameMode::Configured => {
            let host = c.label(LABEL_HOSTNAME).unwrap_or(c.hostname.as_str());
            b.host(host)
        }
        HostnameMode::IpOnly => {
            let Some(networks) = c.networks.as_ref() else {
                return b.host(FALLBACK_HOST);
            };
            match networks.values().next() {
                Some(net) => b.host(net.ip_address.as_str()),
                None => {
                    warn!(
                        container = input.name,
                        "container has no networks, it will not be reachable"
                    );
                    b.host(FALLBACK_HOST)
                }
            }
        }
    }
}

fn scheme(b: TargetBuilder, input: &StepInput<'_>) -> TargetBuilder {
    match input.container.label(LABEL_SCHEME) {
        Some(scheme) => {
            info!(container = input.name, scheme, "scheme set");
            b.scheme(scheme)
        }
        None => b,
    }
}

fn metrics_path(b: TargetBuilder, input: &StepInput<'_>) -> TargetBuilder {
    match input.container.label(LABEL_METRICS_PATH) {
        Some(path) => {
            info!(container = input.name, path, "metrics path set");
            b.metrics_path(path)
        }
        None => b,
    }
}

fn compose(b: TargetBuilder, input: &StepInput<'_>) -> TargetBuilder {
    let c = input.container;
    let Some(service) = c.label(LABEL_COMPOSE_SERVICE) else {
        return b;
    };
    match c.label(LABEL_COMPOSE_PROJECT) {
        Some(project) => {
            info!(container = input.name, project, service, "docker compose labels set");
            b.compose(project, service)
        }
        None => {
            warn!(
                container = input.name,
                service, "compose service label without project label, compose labels skipped"
            );
            b
        }
    }
}
