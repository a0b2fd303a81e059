//! Process-wide configuration registry
//!
//! Holds the active formatter and (optionally) the active metadata
//! calculator. Configured exactly once at startup in normal operation and
//! re-configured freely in tests; every re-configuration fully replaces the
//! prior state. Reads observe either a fully built [`Registry`] or a
//! configuration error — never a partially initialized value.
//!
//! Two access patterns are supported:
//!
//! - the process-wide holder via [`configure`] / [`formatter`] /
//!   [`calculator`], for applications that want ambient access, and
//! - an explicit [`Registry`] value built from [`Options::build`], threaded
//!   through application state (e.g. axum `State`) for DI-style wiring.

use crate::envelope::{DefaultFormatter, ResponseFormatter};
use crate::error::{Error, Result};
use crate::pagination::{DefaultCalculator, MetadataCalculator};
use std::sync::{Arc, LazyLock, RwLock};

/// Read-heavy, write-rare: written at startup, read per request
static REGISTRY: LazyLock<RwLock<Option<Registry>>> = LazyLock::new(|| RwLock::new(None));

/// Immutable bundle of the active formatter and calculator.
///
/// Cheap to clone (two `Arc`s); suitable for storing in shared application
/// state when explicit threading is preferred over the global holder.
#[derive(Debug, Clone)]
pub struct Registry {
    formatter: Arc<dyn ResponseFormatter>,
    calculator: Option<Arc<dyn MetadataCalculator>>,
}

impl Registry {
    /// The active formatter
    pub fn formatter(&self) -> Arc<dyn ResponseFormatter> {
        Arc::clone(&self.formatter)
    }

    /// The active metadata calculator, if pagination was enabled
    pub fn calculator(&self) -> Result<Arc<dyn MetadataCalculator>> {
        self.calculator
            .as_ref()
            .map(Arc::clone)
            .ok_or(Error::PaginationNotConfigured)
    }

    /// Whether a metadata calculator has been configured
    pub fn is_pagination_enabled(&self) -> bool {
        self.calculator.is_some()
    }
}

/// Builder for a [`Registry`].
///
/// A formatter is mandatory; pagination is opt-in.
#[derive(Default)]
pub struct Options {
    formatter: Option<Arc<dyn ResponseFormatter>>,
    calculator: Option<Arc<dyn MetadataCalculator>>,
}

impl Options {
    /// Start an empty options builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the stock `{success, data, meta, timestamp}` formatter
    pub fn use_default_formatter(self) -> Self {
        self.use_formatter(DefaultFormatter)
    }

    /// Use a custom formatter implementation
    pub fn use_formatter<F: ResponseFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Enable pagination with the default metadata calculator
    pub fn use_pagination(self) -> Self {
        self.use_calculator(DefaultCalculator)
    }

    /// Enable pagination with a custom metadata calculator
    pub fn use_calculator<C: MetadataCalculator + 'static>(mut self, calculator: C) -> Self {
        self.calculator = Some(Arc::new(calculator));
        self
    }

    /// Build a registry, failing if no formatter was chosen
    pub fn build(self) -> Result<Registry> {
        let formatter = self.formatter.ok_or(Error::FormatterNotConfigured)?;

        Ok(Registry {
            formatter,
            calculator: self.calculator,
        })
    }
}

/// Install a registry into the process-wide holder, replacing any prior one
pub fn configure(options: Options) -> Result<()> {
    let registry = options.build()?;

    let mut guard = REGISTRY
        .write()
        .map_err(|_| Error::config("registry lock poisoned"))?;

    tracing::debug!(
        pagination = registry.is_pagination_enabled(),
        "wrapkit configured"
    );
    *guard = Some(registry);
    Ok(())
}

/// Clear the process-wide registry (test support)
pub fn reset() {
    if let Ok(mut guard) = REGISTRY.write() {
        *guard = None;
    }
}

/// Get the globally configured formatter
pub fn formatter() -> Result<Arc<dyn ResponseFormatter>> {
    let guard = REGISTRY
        .read()
        .map_err(|_| Error::config("registry lock poisoned"))?;

    guard
        .as_ref()
        .map(Registry::formatter)
        .ok_or(Error::FormatterNotConfigured)
}

/// Get the globally configured metadata calculator
pub fn calculator() -> Result<Arc<dyn MetadataCalculator>> {
    let guard = REGISTRY
        .read()
        .map_err(|_| Error::config("registry lock poisoned"))?;

    match guard.as_ref() {
        Some(registry) => registry.calculator(),
        None => Err(Error::PaginationNotConfigured),
    }
}

/// Whether pagination has been configured globally
pub fn is_pagination_enabled() -> bool {
    REGISTRY
        .read()
        .map(|guard| {
            guard
                .as_ref()
                .is_some_and(Registry::is_pagination_enabled)
        })
        .unwrap_or(false)
}
