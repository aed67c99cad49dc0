//! Domain types shared by the discovery agent.
//!
//! Input side: [`ContainerInspection`], the subset of runtime metadata the extractor reads.
//! Output side: [`ScrapeTarget`] and [`DiscoveryDocument`], the Prometheus `file_sd` payload.
mod domain;
pub use domain::*;
