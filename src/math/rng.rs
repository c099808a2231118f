/// Linear congruential generator used for particle placement.
///
/// Deterministic for a given seed so particle behavior can be replayed in tests;
/// the browser layer seeds it from `Math.random()`.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seed from a float in `[0, 1)`, as returned by `Math.random()`
    pub fn from_unit(seed: f64) -> Self {
        Self::new((seed.clamp(0.0, 1.0) * u32::MAX as f64) as u32)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform float in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Uniform float in `[min, max)`
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }
}
