use crate::GAIN_FLOOR;

/*
Exponential Gain Ramp
=====================

Voice starts and stops must not step the gain instantaneously - a step is
an audible click. The ramp interpolates between two gain levels over a
fixed window, multiplicatively:

    level[n+1] = level[n] * step,  step = (target / start)^(1 / total)

so after `total` samples the level lands exactly on the target. Loudness
perception is roughly logarithmic, which is why the interpolation is
geometric rather than linear; a linear ramp spends most of its window in
the perceptually-loud region and still clicks at the quiet end.

An exponential curve can never cross zero, so both endpoints are clamped
to GAIN_FLOOR. "Silent" in this module always means "at the floor".

Bookkeeping follows the snapshot approach: the start level and total
sample count are fixed when the ramp is (re)targeted, and the ramp
interpolates from that snapshot. Retargeting mid-flight snapshots the
current level as the new start, which is what keeps a stop issued during
a start click-free.
*/

pub struct GainRamp {
    start: f32,
    target: f32,
    // Per-sample multiplier, fixed at (re)target time
    step: f32,
    total_samples: u32,
    elapsed_samples: u32,
    level: f32,
}

impl GainRamp {
    pub fn new(start: f32, target: f32, seconds: f32, sample_rate: f32) -> Self {
        let start = start.max(GAIN_FLOOR);
        let target = target.max(GAIN_FLOOR);
        let total_samples = (seconds * sample_rate).round().max(1.0) as u32;

        Self {
            start,
            target,
            step: (target / start).powf(1.0 / total_samples as f32),
            total_samples,
            elapsed_samples: 0,
            level: start,
        }
    }

    /// Advance one sample and return the new level. Holds the target once
    /// the window has elapsed.
    pub fn next_sample(&mut self) -> f32 {
        if self.done() {
            return self.target;
        }

        self.level *= self.step;
        self.elapsed_samples += 1;

        if self.done() {
            // Land exactly on the target; float drift stops here.
            self.level = self.target;
        }

        self.level
    }

    /// Begin a new ramp from the current level toward `target`.
    pub fn retarget(&mut self, target: f32, seconds: f32, sample_rate: f32) {
        let target = target.max(GAIN_FLOOR);
        let total_samples = (seconds * sample_rate).round().max(1.0) as u32;

        self.start = self.level.max(GAIN_FLOOR);
        self.target = target;
        self.step = (target / self.start).powf(1.0 / total_samples as f32);
        self.total_samples = total_samples;
        self.elapsed_samples = 0;
        self.level = self.start;
    }

    pub fn done(&self) -> bool {
        self.elapsed_samples >= self.total_samples
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 1_000.0;

    #[test]
    fn rise_lands_on_target_within_window() {
        let mut ramp = GainRamp::new(GAIN_FLOOR, 0.03, 0.1, SAMPLE_RATE);

        for _ in 0..(0.1 * SAMPLE_RATE) as usize {
            ramp.next_sample();
        }

        assert!(ramp.done());
        assert!((ramp.level() - 0.03).abs() < 1e-6);
    }

    #[test]
    fn rise_is_monotone_and_geometric() {
        let mut ramp = GainRamp::new(GAIN_FLOOR, 0.03, 0.1, SAMPLE_RATE);

        let mut previous = ramp.level();
        let mut ratios = Vec::new();
        for _ in 0..50 {
            let level = ramp.next_sample();
            assert!(level > previous, "ramp must rise monotonically");
            ratios.push(level / previous);
            previous = level;
        }

        // Geometric interpolation: successive ratios are constant.
        for ratio in &ratios[1..] {
            assert!((ratio - ratios[0]).abs() < 1e-4);
        }
    }

    #[test]
    fn retarget_falls_back_to_floor() {
        let mut ramp = GainRamp::new(GAIN_FLOOR, 0.03, 0.1, SAMPLE_RATE);
        for _ in 0..30 {
            ramp.next_sample();
        }
        let mid_level = ramp.level();

        ramp.retarget(GAIN_FLOOR, 0.1, SAMPLE_RATE);
        assert!((ramp.level() - mid_level).abs() < 1e-6, "no gain step on retarget");

        for _ in 0..(0.1 * SAMPLE_RATE) as usize {
            ramp.next_sample();
        }
        assert!(ramp.done());
        assert!((ramp.level() - GAIN_FLOOR).abs() < 1e-6);
    }

    #[test]
    fn endpoints_clamp_to_the_floor() {
        let ramp = GainRamp::new(0.0, 0.0, 0.1, SAMPLE_RATE);
        assert!(ramp.level() >= GAIN_FLOOR);
        assert!(ramp.target() >= GAIN_FLOOR);
    }

    #[test]
    fn held_target_after_completion() {
        let mut ramp = GainRamp::new(GAIN_FLOOR, 0.05, 0.01, SAMPLE_RATE);
        for _ in 0..100 {
            ramp.next_sample();
        }
        assert_eq!(ramp.next_sample(), 0.05);
        assert_eq!(ramp.next_sample(), 0.05);
    }
}
