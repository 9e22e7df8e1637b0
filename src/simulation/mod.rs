mod connection;
mod engine;
mod event;
mod report;

pub use connection::EstablishedConnection;
pub use engine::{RunSummary, Simulation};
pub use event::{Event, EventQueue};
