// Transaction-scoped, read-only inputs of the availability engine

use crate::arena::TransactionArena;
use crate::availability_map::TransactionAvailabilityMap;
use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::stats::{AvailabilityStats, AvailabilityStatsReport};

#[derive(Debug)]
pub struct TransactionContext {
    config: EngineConfig,
    availability: TransactionAvailabilityMap,
    arena: TransactionArena,
    stats: AvailabilityStats,
}

impl TransactionContext {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_availability(config, TransactionAvailabilityMap::new())
    }

    pub fn with_availability(
        config: EngineConfig,
        availability: TransactionAvailabilityMap,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            arena: TransactionArena::new(config.max_cos_records),
            config,
            availability,
            stats: AvailabilityStats::default(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn availability(&self) -> &TransactionAvailabilityMap {
        &self.availability
    }

    pub fn arena(&self) -> &TransactionArena {
        &self.arena
    }

    pub fn stats(&self) -> &AvailabilityStats {
        &self.stats
    }

    pub fn stats_report(&self) -> AvailabilityStatsReport {
        self.stats.snapshot()
    }
}
