mod edge;
mod router;
mod topology;

pub use edge::Edge;
pub use router::Router;
pub use topology::{DestDistribution, Metric, Topology, TopologyKind};
