use std::sync::{Arc, Mutex};
use std::thread;
use tracing::{error, info};
use crate::algorithm::RoutingKind;
use crate::network::TopologyKind;
use crate::simulation::{RunSummary, Simulation};
use crate::utils::config::Parameters;
use crate::utils::error::Error;


/// An opaque unit of work; ownership moves from the shared queue to the
/// worker that pops it, and it runs to completion there.
#[derive(Clone, Debug)]
pub struct SimulationConfiguration {
    pub index: usize,
    pub topology: TopologyKind,
    pub wavelengths: usize,
    pub algorithm: RoutingKind,
    pub iteration: usize,
    pub iterations: usize,
    pub probes: usize,
    pub seed: u64,
}

impl SimulationConfiguration {
    /// One configuration per algorithm per iteration.
    pub fn expand(topology: TopologyKind, wavelengths: usize, seed: u64,
                  iterations: usize, probes: usize) -> Vec<Self> {
        let mut configs = vec![];
        for iteration in 0..iterations {
            for &algorithm in RoutingKind::ALL.iter() {
                configs.push(SimulationConfiguration {
                    index: configs.len(),
                    topology,
                    wavelengths,
                    algorithm,
                    iteration,
                    iterations,
                    probes,
                    seed,
                });
            }
        }
        configs
    }
}

/// Fans the configurations out across a fixed worker pool. The queue is
/// the only shared state; a worker locks, pops one configuration or
/// observes the queue empty and exits, unlocks, then simulates without
/// further coordination. Returns after every worker has joined.
pub fn run_all(configs: Vec<SimulationConfiguration>, threads: usize,
               params: &Parameters) -> Result<Vec<RunSummary>, Error> {
    let workers = threads.min(configs.len());
    info!(workers, configurations = configs.len(), "created worker threads");

    let queue = Arc::new(Mutex::new(configs));
    let mut handles = Vec::with_capacity(workers);
    let mut spawn_fault = None;
    for nth in 0..workers {
        let queue = Arc::clone(&queue);
        let params = params.clone();
        let spawned = thread::Builder::new()
            .name(format!("worker-{}", nth))
            .spawn(move || drain(queue, params));
        match spawned {
            Ok(handle) => handles.push(handle),
            Err(fault) => {
                // join what already runs, then surface the fault instead
                // of silently dropping configurations
                error!(worker = nth, %fault, "worker thread creation failed");
                spawn_fault = Some(fault);
                break;
            }
        }
    }

    let mut summaries = vec![];
    for handle in handles {
        let worker = handle.join().map_err(|_| Error::WorkerPanicked)?;
        summaries.extend(worker?);
    }
    if let Some(fault) = spawn_fault {
        return Err(Error::Spawn(fault));
    }
    summaries.sort_by_key(|summary| summary.configuration);
    Ok(summaries)
}

fn drain(queue: Arc<Mutex<Vec<SimulationConfiguration>>>, params: Parameters)
    -> Result<Vec<RunSummary>, Error> {
    let mut summaries = vec![];
    loop {
        let config = {
            let mut queue = queue.lock().expect("configuration queue poisoned");
            queue.pop()
        };
        match config {
            Some(config) => {
                let simulation = Simulation::new(config, params.clone());
                summaries.push(simulation.run()?);
            }
            None => break,
        }
    }
    Ok(summaries)
}


#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use super::*;

    fn tiny_params(directory: &str) -> Parameters {
        Parameters {
            workstations: 5,
            output_dir: std::env::temp_dir()
                .join(directory).to_str().unwrap().to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn it_executes_every_configuration_exactly_once() {
        let configs = SimulationConfiguration::expand(
            TopologyKind::NSF, 21, 13, 2, 2);
        assert_eq!(configs.len(), 6);
        let params = tiny_params("lightpath-sched-once");
        let summaries = run_all(configs, 2, &params).unwrap();
        let indices: Vec<usize> = summaries.iter()
            .map(|summary| summary.configuration)
            .collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
        assert!(indices.iter().all_unique());
    }
    #[test]
    fn it_clamps_workers_to_the_queue_length() {
        let configs = SimulationConfiguration::expand(
            TopologyKind::NSF, 21, 13, 1, 1);
        let params = tiny_params("lightpath-sched-clamp");
        let summaries = run_all(configs, 64, &params).unwrap();
        assert_eq!(summaries.len(), 3);
    }
}
