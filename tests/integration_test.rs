use lightpath::network::TopologyKind;
use lightpath::scheduler::{self, SimulationConfiguration};
use lightpath::simulation::Simulation;
use lightpath::algorithm::RoutingKind;
use lightpath::utils::config::Parameters;

fn params(directory: &str) -> Parameters {
    Parameters {
        workstations: 28,
        output_dir: std::env::temp_dir()
            .join(directory).to_str().unwrap().to_owned(),
        ..Default::default()
    }
}

fn config(algorithm: RoutingKind, topology: TopologyKind)
    -> SimulationConfiguration {
    SimulationConfiguration {
        index: 0,
        topology,
        wavelengths: 21,
        algorithm,
        iteration: 0,
        iterations: 1,
        probes: 5,
        seed: 17,
    }
}

#[test]
fn it_runs_spf() {
    let params = params("lightpath-it-spf");
    let summary = Simulation::new(
        config(RoutingKind::SPF, TopologyKind::NSF), params)
        .run().unwrap();
    assert_eq!(summary.attempts, 28 * 5);
    assert!(summary.established > 0);
}

#[test]
fn it_runs_pwr() {
    let params = params("lightpath-it-pwr");
    let summary = Simulation::new(
        config(RoutingKind::PWR, TopologyKind::Mesh), params)
        .run().unwrap();
    assert_eq!(summary.attempts, 28 * 5);
    assert_eq!(summary.attempts, summary.established
        + summary.quality_blocked + summary.wave_blocked);
}

#[test]
fn it_runs_aco() {
    let params = params("lightpath-it-aco");
    let summary = Simulation::new(
        config(RoutingKind::ACO, TopologyKind::NSF), params)
        .run().unwrap();
    assert_eq!(summary.attempts, 28 * 5);
}

#[test]
fn it_fans_configurations_across_the_worker_pool() {
    let params = params("lightpath-it-pool");
    let configs = SimulationConfiguration::expand(
        TopologyKind::NSF, 21, 17, 2, 2);
    let summaries = scheduler::run_all(configs, 3, &params).unwrap();
    assert_eq!(summaries.len(), 6);
    for (nth, summary) in summaries.iter().enumerate() {
        assert_eq!(summary.configuration, nth);
        assert!(summary.attempts > 0);
    }
}
