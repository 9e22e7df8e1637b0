pub mod algorithm;
pub mod network;
pub mod resource;
pub mod scheduler;
pub mod simulation;
pub mod utils;

/// Upper bound on candidate routes kept per source-destination pair.
pub const MAX_K: usize = 10;
