//! Deterministic Simulation Testing (DST) infrastructure.
//!
//! This module provides tools for testing the hexastore with:
//! - Reproducible random operation generation
//! - A reference model mirroring every mutation
//! - Invariant checking after each operation
//!
//! Given the same seed, execution is identical.
//!
//! # Usage
//!
//! ```
//! use simplegraphdb::simulation::{Simulator, SimulatorConfig};
//!
//! let mut sim = Simulator::new(SimulatorConfig::new(12345));
//! let result = sim.run(200);
//!
//! assert!(result.invariant_violations.is_empty());
//! ```

mod invariants;
mod operation_gen;
mod simulator;

pub use invariants::{InvariantChecker, InvariantViolation, Model};
pub use operation_gen::{Operation, OperationGenConfig, OperationGenerator};
pub use simulator::{SimulationResult, Simulator, SimulatorConfig};
