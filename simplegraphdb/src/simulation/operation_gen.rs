//! Operation generator for deterministic simulation testing.
//!
//! This module generates random but reproducible sequences of store
//! operations: adds, removes and single-pattern queries over a small pool of
//! terms, so that the same triples are hit repeatedly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for operation generation.
#[derive(Debug, Clone)]
pub struct OperationGenConfig {
    /// Probability of a query (0.0 - 1.0).
    pub query_rate: f64,
    /// Probability of a remove, checked after the query roll.
    pub remove_rate: f64,
    /// Probability that a query or remove names a term outside the pool.
    pub unknown_term_rate: f64,
    /// Number of distinct entity terms.
    pub entity_pool_size: usize,
    /// Number of distinct predicate terms.
    pub predicate_pool_size: usize,
}

impl Default for OperationGenConfig {
    fn default() -> Self {
        Self {
            query_rate: 0.3,
            remove_rate: 0.2,
            unknown_term_rate: 0.05,
            entity_pool_size: 6,
            predicate_pool_size: 3,
        }
    }
}

/// A single generated operation. Terms are raw strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Add {
        subject: String,
        predicate: String,
        object: String,
        value: String,
    },
    Remove {
        subject: String,
        predicate: String,
        object: String,
    },
    /// A query pattern; `None` slots are variables.
    Query {
        subject: Option<String>,
        predicate: Option<String>,
        object: Option<String>,
    },
}

/// Generates reproducible operations from a seed.
pub struct OperationGenerator {
    rng: StdRng,
    config: OperationGenConfig,
    counter: u64,
}

impl OperationGenerator {
    /// Create a generator with the default configuration.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, OperationGenConfig::default())
    }

    #[must_use]
    pub fn with_config(seed: u64, config: OperationGenConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            config,
            counter: 0,
        }
    }

    /// Generate the next operation.
    pub fn next_operation(&mut self) -> Operation {
        self.counter += 1;

        if self.rng.random_bool(self.config.query_rate) {
            let subject = self.maybe_bound(Self::entity);
            let predicate = self.maybe_bound(Self::predicate);
            let object = self.maybe_bound(Self::entity);
            Operation::Query {
                subject,
                predicate,
                object,
            }
        } else if self.rng.random_bool(self.config.remove_rate) {
            Operation::Remove {
                subject: self.entity(),
                predicate: self.predicate(),
                object: self.entity(),
            }
        } else {
            Operation::Add {
                subject: self.known_entity(),
                predicate: self.known_predicate(),
                object: self.known_entity(),
                value: format!("v{}", self.counter),
            }
        }
    }

    fn maybe_bound(&mut self, term: fn(&mut Self) -> String) -> Option<String> {
        self.rng.random_bool(0.5).then(|| term(self))
    }

    /// An entity from the pool, or occasionally one never added.
    fn entity(&mut self) -> String {
        if self.rng.random_bool(self.config.unknown_term_rate) {
            return "unknown_entity".to_owned();
        }
        self.known_entity()
    }

    fn predicate(&mut self) -> String {
        if self.rng.random_bool(self.config.unknown_term_rate) {
            return "unknown_predicate".to_owned();
        }
        self.known_predicate()
    }

    fn known_entity(&mut self) -> String {
        format!("e{}", self.rng.random_range(0..self.config.entity_pool_size))
    }

    fn known_predicate(&mut self) -> String {
        format!(
            "p{}",
            self.rng.random_range(0..self.config.predicate_pool_size)
        )
    }
}
