//! Test random operation sequences against the reference model.

use crate::simulation::{OperationGenConfig, Simulator, SimulatorConfig};

#[test]
fn test_simulation_several_seeds() {
    for seed in [1, 2, 3, 0xDEAD_BEEF] {
        let result = Simulator::new(SimulatorConfig::new(seed)).run(250);
        assert!(
            result.passed(),
            "seed {seed}: {:?}",
            result.invariant_violations
        );
    }
}

#[test]
fn test_simulation_remove_heavy() {
    let config = SimulatorConfig::new(99).with_operation_config(OperationGenConfig {
        remove_rate: 0.6,
        ..OperationGenConfig::default()
    });

    let result = Simulator::new(config).run(400);

    assert!(result.removes > 0);
    assert!(result.passed(), "{:?}", result.invariant_violations);
}
