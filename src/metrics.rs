//! Validation metrics persistence.
//!
//! Counters keyed by rule id for warnings and failures, plus a gauge of
//! field counts per `(version, type)`, encoded in Prometheus text format and
//! written to a local file for the node exporter's textfile collector.
//! Metrics are observability, not the gate: a failed write logs a warning
//! and never changes the verdict.

use std::path::Path;

use prometheus::{Encoder, IntCounterVec, IntGaugeVec, Opts, Registry, TextEncoder};

use crate::error::Result;
use crate::protocol::Protocol;
use crate::report::Report;

/// Prometheus registry and metric families for one validation run.
pub struct ValidationMetrics {
    registry: Registry,
    fields_by_type: IntGaugeVec,
    warnings: IntCounterVec,
    failures: IntCounterVec,
}

impl ValidationMetrics {
    /// Create a fresh registry with all metric families registered.
    pub fn new() -> Self {
        let fields_by_type = IntGaugeVec::new(
            Opts::new(
                "protogate_fields_by_type",
                "Number of fields declared per protocol type",
            ),
            &["version", "type"],
        )
        .expect("metric can be created");

        let warnings = IntCounterVec::new(
            Opts::new(
                "protogate_validation_warnings",
                "Validation warnings by rule",
            ),
            &["rule"],
        )
        .expect("metric can be created");

        let failures = IntCounterVec::new(
            Opts::new(
                "protogate_validation_failures",
                "Validation failures by rule",
            ),
            &["rule"],
        )
        .expect("metric can be created");

        let registry = Registry::new();
        registry
            .register(Box::new(fields_by_type.clone()))
            .expect("metric can be registered");
        registry
            .register(Box::new(warnings.clone()))
            .expect("metric can be registered");
        registry
            .register(Box::new(failures.clone()))
            .expect("metric can be registered");

        Self {
            registry,
            fields_by_type,
            warnings,
            failures,
        }
    }

    /// Record the candidate's field counts and the report's tallies.
    pub fn record(&self, candidate: &Protocol, report: &Report) {
        for (version, types) in &candidate.types {
            for (type_name, ty) in types {
                self.fields_by_type
                    .with_label_values(&[version, type_name])
                    .set(ty.fields.len() as i64);
            }
        }
        for warning in report.warnings() {
            self.warnings.with_label_values(&[&warning.rule_id.0]).inc();
        }
        for failure in report.failures() {
            self.failures.with_label_values(&[&failure.rule_id.0]).inc();
        }
    }

    /// Encode all families to Prometheus text format.
    pub fn encode(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder
            .encode(&self.registry.gather(), &mut buffer)
            .map_err(|e| anyhow::anyhow!("failed to encode metrics: {e}"))?;
        String::from_utf8(buffer)
            .map_err(|e| anyhow::anyhow!("metrics encoding produced invalid UTF-8: {e}").into())
    }

    /// Persist the encoded metrics to a text file.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.encode()?)?;
        Ok(())
    }
}

impl Default for ValidationMetrics {
    fn default() -> Self {
        Self::new()
    }
}
