mod builder;
mod steps;

pub use builder::TargetBuilder;

use dsd_model::{ContainerInspection, ScrapeTarget};
use tracing::{debug, info};

use crate::config::HostnameMode;
use steps::{Eligibility, STEPS, StepInput, eligibility};

/// Maps one container inspection to at most one scrape target.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    mode: HostnameMode,
}

impl Extractor {
    pub fn new(mode: HostnameMode) -> Self {
        Self { mode }
    }

    /// `None` unless the container carries `prometheus-scrape.enabled=true`.
    pub fn convert(&self, container: &ContainerInspection) -> Option<ScrapeTarget> {
        let name = container.container_name();

        match eligibility(container) {
            Eligibility::NoLabels => {
                debug!(container = name, "container has no labels, ignored");
                return None;
            }
            Eligibility::NotLabelled => {
                debug!(container = name, "container has no prometheus-scrape.enabled label, ignored");
                return None;
            }
            Eligibility::Disabled(value) => {
                debug!(container = name, value, "prometheus-scrape.enabled is not \"true\", ignored");
                return None;
            }
            Eligibility::Enabled => {
                info!(container = name, "container is enabled for prometheus");
            }
        }

        let input = StepInput {
            container,
            name,
            mode: self.mode,
        };
        let builder = STEPS
            .iter()
            .fold(TargetBuilder::new(name), |b, step| step(b, &input));

        if let Some(target) = builder.address() {
            info!(container = name, target = %target, "scrape target added");
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use dsd_model::{
        LABEL_COMPOSE_PROJECT, LABEL_COMPOSE_SERVICE, LABEL_ENABLED, LABEL_JOB_NAME,
        LABEL_METRICS_PATH, LABEL_PORT, LABEL_SCHEME, TargetLabels,
    };

    use super::*;

    fn enabled(name: &str, hostname: &str) -> ContainerInspection {
        ContainerInspection::new(name, hostname).with_label(LABEL_ENABLED, "true")
    }

    #[test]
    fn ineligible_containers_yield_nothing() {
        let ex = Extractor::default();
        assert!(ex.convert(&ContainerInspection::new("/a", "h")).is_none());
        assert!(ex
            .convert(&ContainerInspection::new("/a", "h").with_label("other", "x"))
            .is_none());
        for value in ["false", "TRUE", "1", "", "yes"] {
            let c = ContainerInspection::new("/a", "h").with_label(LABEL_ENABLED, value);
            assert!(ex.convert(&c).is_none(), "value {value:?} must not enable");
        }
    }

    #[test]
    fn minimal_container() {
        let t = Extractor::default().convert(&enabled("/web1", "h1")).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(
            json,
            r#"{"labels":{"job":"web1","instance":"web1","container_name":"web1"},"targets":["h1:9090"]}"#
        );
    }

    #[test]
    fn compose_container_with_port() {
        let c = enabled("/web1", "h1")
            .with_label(LABEL_PORT, "8080")
            .with_label(LABEL_COMPOSE_SERVICE, "web")
            .with_label(LABEL_COMPOSE_PROJECT, "myapp");
        let t = Extractor::default().convert(&c).unwrap();

        assert_eq!(t.targets(), ["h1:8080"]);
        assert_eq!(t.labels().instance, "myapp_web");
        assert_eq!(t.labels().job, "web1");
        assert_eq!(t.labels().container_name, "web1");
        assert_eq!(t.labels().compose_project.as_deref(), Some("myapp"));
        assert_eq!(t.labels().compose_service.as_deref(), Some("web"));
    }

    #[test]
    fn all_overrides() {
        let c = enabled("/api", "h1")
            .with_label(LABEL_JOB_NAME, "backend")
            .with_label(LABEL_PORT, "not-a-number")
            .with_label(LABEL_SCHEME, "https")
            .with_label(LABEL_METRICS_PATH, "/internal/metrics");
        let t = Extractor::default().convert(&c).unwrap();

        let mut expected = TargetLabels::for_container("api");
        expected.job = "backend".into();
        expected.scheme = Some("https".into());
        expected.metrics_path = Some("/internal/metrics".into());
        assert_eq!(t.labels(), &expected);
        assert_eq!(t.targets(), ["h1:not-a-number"]);
    }

    #[test]
    fn ip_mode_uses_first_network() {
        let c = enabled("/db", "h1")
            .with_label(LABEL_PORT, "9187")
            .with_network("backend", "172.20.0.5")
            .with_network("frontend", "172.21.0.5");
        let t = Extractor::new(HostnameMode::IpOnly).convert(&c).unwrap();
        assert_eq!(t.targets(), ["172.20.0.5:9187"]);
    }

    #[test]
    fn ip_mode_without_networks_publishes_localhost() {
        let mut c = enabled("/db", "h1");
        c.networks = Some(Default::default());
        let t = Extractor::new(HostnameMode::IpOnly).convert(&c).unwrap();
        assert_eq!(t.targets(), ["localhost:9090"]);
    }

    #[test]
    fn exactly_one_target_per_container() {
        let ex = Extractor::new(HostnameMode::IpOnly);
        let c = enabled("/x", "h")
            .with_network("a", "10.0.0.1")
            .with_network("b", "10.0.0.2");
        assert_eq!(ex.convert(&c).unwrap().targets().len(), 1);
    }
}
