pub const TAU0: f64 = 1.0;
pub const MIN_PH: f64 = 0.003;
pub const MAX_PH: f64 = 4.0;


/// One directed fiber link. Routers are referenced by index only; the
/// edge is owned by its source router.
#[derive(Clone, Debug)]
pub struct Edge {
    pub source: usize,
    pub destination: usize,
    spans: usize,
    wavelengths: Vec<bool>,
    pheromone: f64,
    carried: usize,
}

impl Edge {
    pub fn new(source: usize, destination: usize, spans: usize,
               wavelengths: usize) -> Self {
        debug_assert!(source != destination);
        Edge {
            source,
            destination,
            spans,
            wavelengths: vec![false; wavelengths],
            pheromone: TAU0,
            carried: 0,
        }
    }
    pub fn spans(&self) -> usize {
        self.spans
    }
    pub fn is_free(&self, wavelength: usize) -> bool {
        !self.wavelengths[wavelength]
    }
    pub fn reserve(&mut self, wavelength: usize) {
        debug_assert!(self.is_free(wavelength));
        self.wavelengths[wavelength] = true;
        self.carried += 1;
    }
    pub fn release(&mut self, wavelength: usize) {
        debug_assert!(!self.is_free(wavelength));
        self.wavelengths[wavelength] = false;
    }
    pub fn pheromone(&self) -> f64 {
        self.pheromone
    }
    pub fn evaporate(&mut self, rho: f64) {
        debug_assert!(rho <= 1.0);
        self.pheromone = num::clamp((1.0 - rho) * self.pheromone, MIN_PH, MAX_PH);
    }
    pub fn deposit(&mut self, amount: f64) {
        debug_assert!(amount.is_sign_positive());
        self.pheromone = num::clamp(self.pheromone + amount, MIN_PH, MAX_PH);
    }
    pub fn carried(&self) -> usize {
        self.carried
    }
    pub fn reset_usage(&mut self) {
        self.carried = 0;
    }
}
