/// One established lightpath: its route (vertex indices into the
/// topology arena), reserved wavelength, lifetime, and the Q-factor
/// series sampled over it. `below_q` latches on the first threshold
/// breach; a degrading connection still runs to its teardown time.
#[derive(Clone, Debug)]
pub struct EstablishedConnection {
    pub id: usize,
    pub path: Vec<usize>,
    pub wavelength: usize,
    pub start_time: f64,
    pub end_time: f64,
    pub init_q: f64,
    pub below_q: bool,
    pub average_q: f64,
    pub q_factors: Vec<f64>,
    pub q_times: Vec<f64>,
}

impl EstablishedConnection {
    pub fn new(id: usize, path: Vec<usize>, wavelength: usize,
               start_time: f64, end_time: f64, init_q: f64) -> Self {
        EstablishedConnection {
            id,
            path,
            wavelength,
            start_time,
            end_time,
            init_q,
            below_q: false,
            average_q: 0.0,
            q_factors: vec![init_q],
            q_times: vec![start_time],
        }
    }
    pub fn sample(&mut self, time: f64, q: f64, threshold: f64) {
        debug_assert!(self.q_times.last().map_or(true, |&last| time >= last));
        self.q_times.push(time);
        self.q_factors.push(q);
        if q < threshold {
            self.below_q = true;
        }
    }
    /// Finalizes `average_q` as the mean of the recorded samples.
    pub fn finalize(&mut self) {
        debug_assert!(!self.q_factors.is_empty());
        self.average_q = self.q_factors.iter().sum::<f64>()
            / self.q_factors.len() as f64;
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn it_averages_the_sample_series() {
        let mut connection =
            EstablishedConnection::new(0, vec![0, 1, 2], 3, 0.0, 10.0, 2.0);
        connection.sample(5.0, 1.8, 1.0);
        connection.sample(10.0, 1.5, 1.0);
        connection.finalize();
        assert!((connection.average_q - 1.766_666_666_666_666_7).abs() < 1e-12);
        assert_eq!(connection.q_times, vec![0.0, 5.0, 10.0]);
        assert!(!connection.below_q);
    }
    #[test]
    fn it_latches_below_threshold_without_ending_the_connection() {
        let mut connection =
            EstablishedConnection::new(0, vec![0, 1], 0, 0.0, 20.0, 3.0);
        connection.sample(5.0, 1.0, 2.0);
        assert!(connection.below_q);
        connection.sample(10.0, 2.5, 2.0);
        assert!(connection.below_q);
        assert_eq!(connection.q_factors.len(), 3);
    }
}
