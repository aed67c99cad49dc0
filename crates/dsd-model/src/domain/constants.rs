/// Opt-in label; only the literal value `"true"` enables scraping.
pub const LABEL_ENABLED: &str = "prometheus-scrape.enabled";
/// Overrides the `job` label.
pub const LABEL_JOB_NAME: &str = "prometheus-scrape.job_name";
/// Overrides the scrape port (used verbatim).
pub const LABEL_PORT: &str = "prometheus-scrape.port";
/// Overrides the configured container hostname.
pub const LABEL_HOSTNAME: &str = "prometheus-scrape.hostname";
/// Sets `__scheme__`.
pub const LABEL_SCHEME: &str = "prometheus-scrape.scheme";
/// Sets `__metrics_path__`.
pub const LABEL_METRICS_PATH: &str = "prometheus-scrape.metrics_path";

pub const LABEL_COMPOSE_PROJECT: &str = "com.docker.compose.project";
pub const LABEL_COMPOSE_SERVICE: &str = "com.docker.compose.service";

/// Value [`LABEL_ENABLED`] must carry for a container to be published.
pub const ENABLED_VALUE: &str = "true";
pub const DEFAULT_PORT: &str = "9090";
/// Hostname used in IP-only mode when no network address can be found.
pub const FALLBACK_HOST: &str = "localhost";

/// Where Prometheus expects the discovery file by default.
pub const DEFAULT_TARGET_FILE: &str = "/prometheus-docker-sd/docker-targets.json";
