use hashbrown::HashMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use tracing::{debug, info};
use super::connection::EstablishedConnection;
use super::event::{Event, EventQueue};
use super::report;
use crate::algorithm::{Selector, SelectorEnum};
use crate::network::Topology;
use crate::resource::ResourceManager;
use crate::scheduler::SimulationConfiguration;
use crate::utils::config::Parameters;
use crate::utils::error::Error;


/// Per-run tallies handed back through the scheduler.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    pub configuration: usize,
    pub attempts: usize,
    pub established: usize,
    pub quality_blocked: usize,
    pub wave_blocked: usize,
    pub mean_q: f64,
}

/// One simulation run, exclusively owned by one worker: its own
/// topology, routing oracle, selector, RNG stream, logical clock, and
/// event queue. Nothing here is shared across threads.
pub struct Simulation {
    config: SimulationConfiguration,
    params: Parameters,
    topology: Topology,
    resource: ResourceManager,
    selector: SelectorEnum,
    rng: ChaChaRng,
    clock: f64,
    queue: EventQueue,
    live: HashMap<usize, EstablishedConnection>,
    next_connection: usize,
    summary: RunSummary,
    total_q: f64,
}

impl Simulation {
    pub fn new(config: SimulationConfiguration, params: Parameters) -> Self {
        let mut topology = Topology::build(config.topology, config.wavelengths);
        let resource = ResourceManager::new(&topology);
        topology.generate_probabilities(params.dest_dist, &resource);
        let selector = SelectorEnum::new(config.algorithm, &params);
        let rng = ChaChaRng::seed_from_u64(
            config.seed.wrapping_add(config.index as u64));
        let summary = RunSummary {
            configuration: config.index,
            ..Default::default()
        };
        Simulation {
            config,
            params,
            topology,
            resource,
            selector,
            rng,
            clock: 0.0,
            queue: EventQueue::new(),
            live: HashMap::new(),
            next_connection: 0,
            summary,
            total_q: 0.0,
        }
    }

    /// Runs the configuration to completion: drains the event queue,
    /// writes the per-run report, and returns the tallies.
    pub fn run(mut self) -> Result<RunSummary, Error> {
        self.seed_requests();
        while let Some((at, event)) = self.queue.pop() {
            debug_assert!(at >= self.clock);
            self.clock = at;
            match event {
                Event::Request { source }       => self.handle_request(source),
                Event::Sample { connection }    => self.handle_sample(connection),
                Event::Teardown { connection }  => self.handle_teardown(connection),
            }
        }
        debug_assert!(self.live.is_empty());
        if self.summary.established > 0 {
            self.summary.mean_q = self.total_q / self.summary.established as f64;
        }
        report::write(&mut self.topology, &self.config, &self.params.output_dir)?;
        info!(configuration = self.config.index,
              algorithm = self.config.algorithm.name(),
              attempts = self.summary.attempts,
              established = self.summary.established,
              "configuration finished");
        Ok(self.summary)
    }

    /// Ramps the active workstation pool with the iteration index, then
    /// schedules `probes` requests per workstation with exponential
    /// interarrival times.
    fn seed_requests(&mut self) {
        let total = self.params.workstations;
        let active = (total * (self.config.iteration + 1)
                      + self.config.iterations - 1) / self.config.iterations;
        self.topology.distribute_workstations(active);
        debug!(active, "workstations active this iteration");
        for source in 0..self.topology.routers() {
            for _ in 0..self.topology.router(source).workstations {
                let mut at = 0.0;
                for _ in 0..self.config.probes {
                    at += self.exponential(self.params.arrival_mean);
                    self.queue.schedule(at, Event::Request { source });
                }
            }
        }
    }

    fn handle_request(&mut self, source: usize) {
        self.summary.attempts += 1;
        let draw = self.rng.gen_range(0.0..1.0);
        let dest = self.topology.router(source).generate_destination(draw);
        self.topology.router_mut(source).attempts_from += 1;
        self.topology.router_mut(dest).attempts_to += 1;

        let chosen = self.selector.select(source, dest, &mut self.topology,
                                          &mut self.resource, &mut self.rng);
        let path = match chosen {
            Some(path) => path,
            None => {
                // no loopless route, counted as a resource-class failure
                self.topology.router_mut(source).wave_failures += 1;
                self.summary.wave_blocked += 1;
                self.selector.reinforce(&mut self.topology, &[], false);
                return;
            }
        };

        let spans = self.topology.path_spans(&path);
        let init_q = self.resource.initial_q(spans);
        if init_q < self.params.q_threshold {
            self.topology.router_mut(source).quality_failures += 1;
            self.summary.quality_blocked += 1;
            self.selector.reinforce(&mut self.topology, &path, false);
            return;
        }
        let wavelength = match self.topology.common_wavelength(&path) {
            Some(wavelength) => wavelength,
            None => {
                self.topology.router_mut(source).wave_failures += 1;
                self.summary.wave_blocked += 1;
                self.selector.reinforce(&mut self.topology, &path, false);
                return;
            }
        };

        self.topology.reserve(&path, wavelength);
        let id = self.next_connection;
        self.next_connection += 1;
        let end = self.clock + self.exponential(self.params.duration_mean);
        self.live.insert(id, EstablishedConnection::new(
            id, path.clone(), wavelength, self.clock, end, init_q));
        self.summary.established += 1;
        self.topology.router_mut(source).successes_from += 1;
        self.topology.router_mut(dest).successes_to += 1;
        if self.clock + self.params.sample_interval < end {
            self.queue.schedule(self.clock + self.params.sample_interval,
                                Event::Sample { connection: id });
        }
        self.queue.schedule(end, Event::Teardown { connection: id });
        self.selector.reinforce(&mut self.topology, &path, true);
    }

    fn handle_sample(&mut self, id: usize) {
        let jitter = self.jitter();
        let interval = self.params.sample_interval;
        let threshold = self.params.q_threshold;
        if let Some(connection) = self.live.get_mut(&id) {
            let elapsed = self.clock - connection.start_time;
            let q = self.resource.sampled_q(connection.init_q, elapsed, jitter);
            connection.sample(self.clock, q, threshold);
            let next = self.clock + interval;
            if next < connection.end_time {
                self.queue.schedule(next, Event::Sample { connection: id });
            }
        }
    }

    fn handle_teardown(&mut self, id: usize) {
        let jitter = self.jitter();
        let mut connection = self.live.remove(&id)
            .expect("teardown of unknown connection");
        let elapsed = connection.end_time - connection.start_time;
        let q = self.resource.sampled_q(connection.init_q, elapsed, jitter);
        connection.sample(connection.end_time, q, self.params.q_threshold);
        connection.finalize();
        self.topology.release(&connection.path, connection.wavelength);

        let source = connection.path[0];
        let dest = *connection.path.last().unwrap();
        self.topology.router_mut(source).total_q_from += connection.average_q;
        self.topology.router_mut(dest).total_q_to += connection.average_q;
        self.total_q += connection.average_q;
    }

    fn exponential(&mut self, mean: f64) -> f64 {
        let uniform: f64 = self.rng.gen_range(0.0..1.0);
        -mean * (1.0 - uniform).ln()
    }
    fn jitter(&mut self) -> f64 {
        match self.params.q_jitter > 0.0 {
            true  => self.rng.gen_range(-self.params.q_jitter..self.params.q_jitter),
            false => 0.0,
        }
    }
}
