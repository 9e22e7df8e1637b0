use std::fs;
use std::fmt::Write as _;
use std::io::Write as _;
use crate::network::Topology;
use crate::scheduler::SimulationConfiguration;
use crate::utils::error::Error;


/// Appends the per-run flat record and resets the counters it drained:
/// per router, the five counter lines each terminated by `|`, the two
/// average-Q lines, then one pipe-delimited line per owned edge. The
/// record is byte-identical across reruns of the same configuration.
pub fn write(topology: &mut Topology, config: &SimulationConfiguration,
             directory: &str) -> Result<(), Error> {
    fs::create_dir_all(directory)?;
    let path = format!("{}/{}-w{}-{}-i{}.txt",
                       directory,
                       config.topology.name(),
                       config.wavelengths,
                       config.algorithm.name(),
                       config.iteration);
    let mut record = String::new();
    for router in topology.routers.iter() {
        writeln!(record, "{}|", router.workstations).unwrap();
        writeln!(record, "{}|", router.attempts_from).unwrap();
        writeln!(record, "{}|", router.attempts_to).unwrap();
        writeln!(record, "{}|", router.successes_from).unwrap();
        writeln!(record, "{}|", router.successes_to).unwrap();
        writeln!(record, "{:.6}", average(router.total_q_to,
                                          router.successes_to)).unwrap();
        writeln!(record, "{:.6}", average(router.total_q_from,
                                          router.successes_from)).unwrap();
        for edge in router.edges.iter() {
            writeln!(record, "{}|{}|{}|{}|",
                     edge.source, edge.destination,
                     edge.spans(), edge.carried()).unwrap();
        }
    }
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    file.write_all(record.as_bytes())?;

    // writing is a checkpoint
    for router in topology.routers.iter_mut() {
        router.reset_statistics();
        router.reset_failures();
    }
    Ok(())
}

fn average(total: f64, count: usize) -> f64 {
    match count {
        0 => 0.0,
        _ => total / count as f64,
    }
}
