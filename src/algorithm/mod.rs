pub mod base;
mod aco;
mod pwr;
mod spf;

use enum_dispatch::enum_dispatch;
use rand_chacha::ChaChaRng;
use crate::network::Topology;
use crate::resource::ResourceManager;
use crate::utils::config::Parameters;

pub use aco::ACO;
pub use pwr::PWR;
pub use spf::SPF;


/// Route-selection strategies available to a simulation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoutingKind {
    SPF,
    PWR,
    ACO,
}

impl RoutingKind {
    pub const ALL: [RoutingKind; 3] =
        [RoutingKind::SPF, RoutingKind::PWR, RoutingKind::ACO];
    pub fn name(&self) -> &'static str {
        match self {
            RoutingKind::SPF => "SPF",
            RoutingKind::PWR => "PWR",
            RoutingKind::ACO => "ACO",
        }
    }
}

#[enum_dispatch]
pub enum SelectorEnum {
    SPF,
    PWR,
    ACO,
}

impl SelectorEnum {
    pub fn new(kind: RoutingKind, params: &Parameters) -> Self {
        match kind {
            RoutingKind::SPF => SPF::new().into(),
            RoutingKind::PWR => PWR::new().into(),
            RoutingKind::ACO => ACO::new(params).into(),
        }
    }
}

#[enum_dispatch(SelectorEnum)]
pub trait Selector {
    /// Picks a candidate route for one connection request, or `None`
    /// when the strategy finds no route.
    fn select(&mut self, source: usize, dest: usize, topology: &mut Topology,
              resource: &mut ResourceManager, rng: &mut ChaChaRng)
        -> Option<Vec<usize>>;
    /// Post-attempt hook; the ant colony updates pheromones here.
    fn reinforce(&mut self, topology: &mut Topology, path: &[usize],
                 established: bool);
}
