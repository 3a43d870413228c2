//! Destinations for resolved configuration.
//!
//! Responsibilities:
//! - Define the `ConfigSink` seam the loader applies results through.
//! - Hold the process-wide AWS SDK configuration (`GlobalSdkConfig`).
//! - Provide an in-memory capture (`MemorySink`) for tests and embedding.
//!
//! Does NOT handle:
//! - Validation; the resolver only hands over complete configurations.
//!
//! Invariants:
//! - Applying replaces the previous value wholesale (last writer wins).
//! - Applying the same value twice leaves the same state as applying it once.
//! - Concurrent loads are not serialized here; callers own that.

use std::sync::{Mutex, OnceLock, PoisonError, RwLock};

use aws_credential_types::Credentials;
use aws_types::SdkConfig;
use aws_types::region::Region;

use crate::types::ResolvedConfig;

/// Receives the result of a successful load.
pub trait ConfigSink {
    fn apply(&self, config: &ResolvedConfig);
}

struct Applied {
    resolved: ResolvedConfig,
    sdk_config: SdkConfig,
    credentials: Credentials,
}

fn global() -> &'static RwLock<Option<Applied>> {
    static GLOBAL: OnceLock<RwLock<Option<Applied>>> = OnceLock::new();
    GLOBAL.get_or_init(|| RwLock::new(None))
}

/// The process-wide AWS SDK configuration.
///
/// Holds the shared region and a static credentials provider built from the
/// most recently applied `ResolvedConfig`. Clients read it through
/// [`GlobalSdkConfig::sdk_config`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalSdkConfig;

impl GlobalSdkConfig {
    /// SDK configuration from the last load, if any.
    pub fn sdk_config() -> Option<SdkConfig> {
        Self::read(|applied| applied.sdk_config.clone())
    }

    /// The last applied `ResolvedConfig`.
    pub fn current() -> Option<ResolvedConfig> {
        Self::read(|applied| applied.resolved.clone())
    }

    pub fn region() -> Option<Region> {
        Self::read(|applied| applied.resolved.sdk_region())
    }

    /// The static credentials object installed by the last load.
    pub fn credentials() -> Option<Credentials> {
        Self::read(|applied| applied.credentials.clone())
    }

    /// Forget the applied configuration.
    pub fn clear() {
        *global().write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn read<T>(f: impl FnOnce(&Applied) -> T) -> Option<T> {
        global()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(f)
    }
}

impl ConfigSink for GlobalSdkConfig {
    fn apply(&self, config: &ResolvedConfig) {
        let applied = Applied {
            resolved: config.clone(),
            sdk_config: config.to_sdk_config(),
            credentials: config.credentials.to_sdk_credentials(),
        };
        *global().write().unwrap_or_else(PoisonError::into_inner) = Some(applied);
        tracing::debug!(region = %config.region, "Applied AWS SDK configuration");
    }
}

/// Records applied configurations in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    applied: Mutex<Vec<ResolvedConfig>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently applied configuration.
    pub fn last(&self) -> Option<ResolvedConfig> {
        self.lock().last().cloned()
    }

    /// Number of times `apply` has been called.
    pub fn applied_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ResolvedConfig>> {
        self.applied.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ConfigSink for MemorySink {
    fn apply(&self, config: &ResolvedConfig) {
        self.lock().push(config.clone());
    }
}
