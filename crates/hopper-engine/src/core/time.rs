/// Fixed-step accumulator.
/// Turns variable frame times into a whole number of simulation steps.
pub struct FixedTimestep {
    dt: f32,
    max_steps: u32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32, max_steps: u32) -> Self {
        Self {
            dt,
            max_steps: max_steps.max(1),
            accumulator: 0.0,
        }
    }

    /// Add frame time and return how many fixed steps to run now.
    /// Time beyond `max_steps` worth is dropped so a stalled tab does not
    /// replay seconds of simulation at once.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += frame_dt;
        }
        self.accumulator = self.accumulator.min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Fraction of a step left in the accumulator (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_frames_carry_over() {
        let mut ts = FixedTimestep::new(0.25, 10);
        assert_eq!(ts.accumulate(0.125), 0);
        assert_eq!(ts.accumulate(0.25), 1);
        assert_eq!(ts.alpha(), 0.5);
    }

    #[test]
    fn long_frames_are_capped() {
        let mut ts = FixedTimestep::new(1.0 / 60.0, 4);
        assert_eq!(ts.accumulate(2.0), 4);
        assert!(ts.alpha() < 1.0);
    }

    #[test]
    fn bad_frame_times_are_ignored() {
        let mut ts = FixedTimestep::new(0.5, 10);
        assert_eq!(ts.accumulate(-1.0), 0);
        assert_eq!(ts.accumulate(f32::NAN), 0);
        assert_eq!(ts.accumulate(0.5), 1);
        ts.accumulate(0.25);
        ts.reset();
        assert_eq!(ts.alpha(), 0.0);
    }
}
