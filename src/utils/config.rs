use serde::Deserialize;
use crate::network::{DestDistribution, TopologyKind};
use super::error::Error;

pub const WAVELENGTH_COUNTS: [usize; 7] = [21, 41, 81, 161, 321, 641, 1281];

pub const USAGE: &str = "
Routing and wavelength assignment simulator for transparent optical networks.

Usage:
  lightpath <topology> <wavelengths> <seed> <threads> <iterations> <probes>

Arguments:
  topology      one of NSF, Mesh, Mesh6x6, Mesh8x8, Mesh10x10
  wavelengths   one of 21, 41, 81, 161, 321, 641, 1281
  seed          any valid unsigned integer
  threads       maximum number of worker threads, 1 to n
  iterations    number of iterations, 1 to n
  probes        number of probes per workstation, 1 to n
";

/// The six positional CLI arguments, before validation.
#[derive(Deserialize, Debug)]
pub struct Arguments {
    pub arg_topology: String,
    pub arg_wavelengths: usize,
    pub arg_seed: u64,
    pub arg_threads: usize,
    pub arg_iterations: usize,
    pub arg_probes: usize,
}

impl Arguments {
    pub fn validate(&self) -> Result<TopologyKind, Error> {
        let topology: TopologyKind = self.arg_topology.parse()?;
        if !WAVELENGTH_COUNTS.contains(&self.arg_wavelengths) {
            return Err(Error::UnsupportedWavelengths(self.arg_wavelengths));
        }
        if self.arg_threads == 0 {
            return Err(Error::ZeroCount("thread"));
        }
        if self.arg_iterations == 0 {
            return Err(Error::ZeroCount("iteration"));
        }
        if self.arg_probes == 0 {
            return Err(Error::ZeroCount("probe"));
        }
        Ok(topology)
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub parameters: Parameters,
}

/// Simulation parameters, overridable through `data/quality.yaml`.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Parameters {
    pub workstations: usize,
    pub arrival_mean: f64,
    pub duration_mean: f64,
    pub sample_interval: f64,
    pub q_threshold: f64,
    pub q_jitter: f64,
    pub aco_alpha: f64,
    pub aco_beta: f64,
    pub aco_rho: f64,
    pub dest_dist: DestDistribution,
    pub output_dir: String,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            workstations: 100,
            arrival_mean: 10.0,
            duration_mean: 50.0,
            sample_interval: 5.0,
            q_threshold: 3.0,
            q_jitter: 0.05,
            aco_alpha: 1.0,
            aco_beta: 2.0,
            aco_rho: 0.02,
            dest_dist: DestDistribution::InverseDistance,
            output_dir: "results".to_owned(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn arguments() -> Arguments {
        Arguments {
            arg_topology: "NSF".to_owned(),
            arg_wavelengths: 21,
            arg_seed: 1,
            arg_threads: 4,
            arg_iterations: 5,
            arg_probes: 10,
        }
    }

    #[test]
    fn it_accepts_a_wellformed_invocation() {
        assert_eq!(arguments().validate().unwrap(), TopologyKind::NSF);
    }
    #[test]
    fn it_rejects_unknown_topologies_and_wavelengths() {
        let mut bad = arguments();
        bad.arg_topology = "Ring".to_owned();
        assert!(matches!(bad.validate(), Err(Error::UnknownTopology(_))));
        let mut bad = arguments();
        bad.arg_wavelengths = 20;
        assert!(matches!(bad.validate(),
                         Err(Error::UnsupportedWavelengths(20))));
    }
    #[test]
    fn it_rejects_zero_counts() {
        let mut bad = arguments();
        bad.arg_iterations = 0;
        assert!(matches!(bad.validate(), Err(Error::ZeroCount("iteration"))));
    }
}
