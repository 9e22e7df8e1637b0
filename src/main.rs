use std::process;
use docopt::Docopt;
use tracing_subscriber::EnvFilter;
use lightpath::scheduler::{self, SimulationConfiguration};
use lightpath::utils::config::{Arguments, USAGE};
use lightpath::utils::error::EXIT_INVALID_PARAMETERS;
use lightpath::utils::yaml;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let arguments: Arguments = Docopt::new(USAGE)
        .and_then(|docopt| docopt.deserialize())
        .unwrap_or_else(|_| {
            eprintln!("{}", USAGE);
            process::exit(EXIT_INVALID_PARAMETERS);
        });
    let topology = arguments.validate().unwrap_or_else(|error| {
        eprintln!("{}", error);
        eprintln!("{}", USAGE);
        process::exit(EXIT_INVALID_PARAMETERS);
    });

    let config = yaml::load_config("data/quality.yaml");
    let configs = SimulationConfiguration::expand(
        topology,
        arguments.arg_wavelengths,
        arguments.arg_seed,
        arguments.arg_iterations,
        arguments.arg_probes,
    );

    match scheduler::run_all(configs, arguments.arg_threads, &config.parameters) {
        Ok(summaries) => {
            for summary in summaries {
                println!(
                    "configuration #{:02}: {} attempts, {} established, \
                     {} quality-blocked, {} wavelength-blocked, mean Q {:.3}",
                    summary.configuration,
                    summary.attempts,
                    summary.established,
                    summary.quality_blocked,
                    summary.wave_blocked,
                    summary.mean_q,
                );
            }
        }
        Err(error) => {
            eprintln!("{}", error);
            process::exit(1);
        }
    }
}
