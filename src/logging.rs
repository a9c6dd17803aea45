// ABOUTME: Logging configuration and structured logging setup for embedding applications
// ABOUTME: Configures log levels and formatters, and records engine outcomes as structured events
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Structured logging configuration
//!
//! The engines only emit `tracing` events; nothing in this crate installs a
//! subscriber on its own. Applications call [`LoggingConfig::init`] (or
//! [`init_from_env`]) once at startup.

use std::env;
use std::fmt::Display;
use std::io;

use anyhow::Result;
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::errors::ValidationError;
use crate::intelligence::{Decision, TrendResult};

/// Default service name for structured logs
pub const DEFAULT_SERVICE_NAME: &str = "rehab-progression-engine";

/// Crates whose events follow the configured level
const ENGINE_TARGETS: [&str; 3] = [
    "rehab_core",
    "rehab_intelligence",
    "rehab_progression_engine",
];

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            service_name: DEFAULT_SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// Reads `RUST_LOG`, `LOG_FORMAT` (`json`, `pretty`, `compact`),
    /// `LOG_INCLUDE_LOCATION`, `LOG_INCLUDE_THREAD` and `SERVICE_NAME`.
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        Self {
            level,
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| DEFAULT_SERVICE_NAME.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }

    /// Filter built from `level`
    ///
    /// A bare level name also pins the engine crates to that level. Anything
    /// else is treated as a full directive list and used unchanged.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let base = EnvFilter::new(&self.level);
        let Ok(level) = self.level.trim().parse::<LevelFilter>() else {
            return base;
        };

        ENGINE_TARGETS
            .iter()
            .filter_map(|target| format!("{target}={level}").parse::<Directive>().ok())
            .fold(base, EnvFilter::add_directive)
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stdout);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_target(false)
                    .with_writer(io::stdout);

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                }
            }
        });

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            config = %config_summary,
            "Rehabilitation engine logging initialized"
        );
    }
}

/// Initialize logging with default configuration
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_default() -> Result<()> {
    LoggingConfig::default().init()
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Structured audit events for engine outcomes
pub struct EngineLogger;

impl EngineLogger {
    /// Log a progression decision
    pub fn log_decision(subject_id: &dyn Display, decision: &Decision) {
        info!(
            subject.id = %subject_id,
            progression.action = %decision.action,
            progression.phase = %decision.current_phase,
            progression.next_phase = ?decision.next_phase,
            progression.failed = ?decision.failed_criteria(),
            progression.notes = decision.notes.len(),
            "Progression decision"
        );
    }

    /// Log a pain trend result
    pub fn log_trend(subject_id: &dyn Display, result: &TrendResult) {
        match result.analysis() {
            Some(analysis) => info!(
                subject.id = %subject_id,
                pain.trend = %analysis.trend,
                pain.slope = analysis.slope,
                pain.mean = analysis.mean_pain,
                pain.observations = analysis.observation_count,
                "Pain trend"
            ),
            None => info!(subject.id = %subject_id, "Pain trend: insufficient data"),
        }
    }

    /// Log a rejected pain check-in
    pub fn log_rejected_observation(subject_id: &dyn Display, error: &ValidationError) {
        warn!(
            subject.id = %subject_id,
            validation.field = error.field(),
            validation.code = ?error.code(),
            validation.message = %error,
            "Pain check-in rejected"
        );
    }
}
