mod scheduler;

pub use scheduler::{run_all, SimulationConfiguration};
