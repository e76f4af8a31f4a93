//! Main simulator harness for deterministic simulation testing.
//!
//! This module drives a [`Hexastore`] with generated operations, mirrors each
//! mutation in a reference model and checks invariants after every step.

use super::invariants::{InvariantChecker, InvariantViolation, Model};
use super::operation_gen::{Operation, OperationGenConfig, OperationGenerator};
use crate::hexastore::Hexastore;

/// Configuration for the simulator.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Random seed for reproducibility.
    pub seed: u64,
    /// Operation generation configuration.
    pub operation_config: OperationGenConfig,
    /// Run the full store check after every operation rather than only at
    /// the end. Queries are always checked.
    pub check_every_step: bool,
}

impl SimulatorConfig {
    /// Create a new simulator config with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            operation_config: OperationGenConfig::default(),
            check_every_step: true,
        }
    }

    #[must_use]
    pub const fn with_operation_config(mut self, config: OperationGenConfig) -> Self {
        self.operation_config = config;
        self
    }

    /// Set the query probability.
    #[must_use]
    pub const fn with_query_rate(mut self, rate: f64) -> Self {
        self.operation_config.query_rate = rate;
        self
    }

    /// Only check the full store once the run ends (for faster testing).
    #[must_use]
    pub const fn with_final_check_only(mut self) -> Self {
        self.check_every_step = false;
        self
    }
}

/// Results from a simulation run.
#[derive(Debug)]
pub struct SimulationResult {
    /// The seed used for this simulation.
    pub seed: u64,
    /// Number of operations processed.
    pub operations_processed: u64,
    pub adds: u64,
    /// Removes that found their triple.
    pub removes: u64,
    /// Removes of absent triples.
    pub missed_removes: u64,
    pub queries: u64,
    /// Triples stored when the run ended.
    pub final_triple_count: usize,
    /// Invariant violations detected.
    pub invariant_violations: Vec<InvariantViolation>,
}

impl SimulationResult {
    /// Check if the simulation passed (no invariant violations).
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.invariant_violations.is_empty()
    }
}

/// The main simulator harness.
pub struct Simulator {
    config: SimulatorConfig,
    generator: OperationGenerator,
    checker: InvariantChecker,
    store: Hexastore,
    model: Model,
}

impl Simulator {
    /// Create a new simulator with an empty store.
    #[must_use]
    pub fn new(config: SimulatorConfig) -> Self {
        let generator =
            OperationGenerator::with_config(config.seed, config.operation_config.clone());

        Self {
            config,
            generator,
            checker: InvariantChecker::new(),
            store: Hexastore::new(),
            model: Model::new(),
        }
    }

    /// Run the simulation for a given number of operations.
    pub fn run(&mut self, operation_count: usize) -> SimulationResult {
        let mut result = SimulationResult {
            seed: self.config.seed,
            operations_processed: 0,
            adds: 0,
            removes: 0,
            missed_removes: 0,
            queries: 0,
            final_triple_count: 0,
            invariant_violations: Vec::new(),
        };

        for index in 0..operation_count {
            let operation = self.generator.next_operation();
            result.operations_processed += 1;

            match operation {
                Operation::Add {
                    subject,
                    predicate,
                    object,
                    value,
                } => {
                    self.store.add(&subject, &predicate, &object, value.as_str());
                    self.model.insert((subject, predicate, object), value);
                    result.adds += 1;
                }
                Operation::Remove {
                    subject,
                    predicate,
                    object,
                } => {
                    let removed = self.store.remove_terms(&subject, &predicate, &object);
                    let expected = self
                        .model
                        .remove(&(subject.clone(), predicate.clone(), object.clone()))
                        .is_some();
                    if removed != expected {
                        self.checker.add_violation(InvariantViolation {
                            description: "remove result differs from model".to_owned(),
                            operation_index: index,
                            context: format!("{subject} {predicate} {object}: {removed}"),
                        });
                    }
                    if removed {
                        result.removes += 1;
                    } else {
                        result.missed_removes += 1;
                    }
                }
                Operation::Query {
                    subject,
                    predicate,
                    object,
                } => {
                    self.checker.check_query(
                        &self.store,
                        &self.model,
                        [subject.as_deref(), predicate.as_deref(), object.as_deref()],
                        index,
                    );
                    result.queries += 1;
                }
            }

            if self.config.check_every_step {
                self.checker.check_store(&self.store, &self.model, index);
            }
        }

        if !self.config.check_every_step {
            self.checker
                .check_store(&self.store, &self.model, operation_count);
        }

        result.final_triple_count = self.store.len();
        result.invariant_violations = self.checker.violations().to_vec();
        if !result.passed() {
            tracing::warn!(
                "Simulation with seed {} found {} violations",
                result.seed,
                result.invariant_violations.len()
            );
        }
        result
    }

    /// The store under test.
    #[must_use]
    pub const fn store(&self) -> &Hexastore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulator_basic() {
        let mut simulator = Simulator::new(SimulatorConfig::new(12345));

        let result = simulator.run(100);

        assert_eq!(result.operations_processed, 100);
        assert_eq!(
            result.adds + result.removes + result.missed_removes + result.queries,
            100
        );
        assert_eq!(result.final_triple_count, simulator.store().len());
    }

    #[test]
    fn test_simulator_deterministic() {
        let result1 = Simulator::new(SimulatorConfig::new(12345)).run(200);
        let result2 = Simulator::new(SimulatorConfig::new(12345)).run(200);

        assert_eq!(result1.adds, result2.adds);
        assert_eq!(result1.removes, result2.removes);
        assert_eq!(result1.queries, result2.queries);
        assert_eq!(result1.final_triple_count, result2.final_triple_count);
    }

    #[test]
    fn test_simulator_no_invariant_violations() {
        let mut simulator = Simulator::new(SimulatorConfig::new(54321));

        let result = simulator.run(300);

        assert!(
            result.passed(),
            "Simulation should pass: {:?}",
            result.invariant_violations
        );
        assert!(result.removes > 0);
    }

    #[test]
    fn test_simulator_query_heavy() {
        let config = SimulatorConfig::new(7).with_query_rate(0.8);
        let result = Simulator::new(config).run(300);

        assert!(result.queries > result.adds);
        assert!(result.passed(), "{:?}", result.invariant_violations);
    }

    #[test]
    #[ignore] // Long running test
    fn test_simulator_stress() {
        for seed in 0..20 {
            let config = SimulatorConfig::new(seed).with_final_check_only();
            let result = Simulator::new(config).run(10_000);
            assert!(result.passed(), "seed {seed}: {:?}", result.invariant_violations);
        }
    }
}
