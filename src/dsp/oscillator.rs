use std::f32::consts::TAU;

/// Phase-accumulator sine oscillator.
///
/// Sample `n` from a fresh oscillator at fixed frequency `f` is
/// `sin(TAU * f * n / sample_rate)`; the accumulator wraps every cycle so
/// phase error does not grow over long sustains.
pub struct SineOsc {
    phase: f32,
}

impl SineOsc {
    pub fn new() -> Self {
        Self { phase: 0.0 }
    }

    pub fn next_sample(&mut self, frequency: f32, sample_rate: f32) -> f32 {
        let sample = self.phase.sin();
        self.phase += TAU * frequency / sample_rate;
        if self.phase >= TAU {
            self.phase -= TAU;
        }
        sample
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

impl Default for SineOsc {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_sine() {
        let sample_rate = 48_000.0;
        let frequency = 440.0;
        let mut osc = SineOsc::new();

        let buffer: Vec<f32> = (0..128)
            .map(|_| osc.next_sample(frequency, sample_rate))
            .collect();

        // sample n should be sin(2pi f n / sr)
        let sample_index = 12;
        let expected = (TAU * frequency * sample_index as f32 / sample_rate).sin();
        let actual = buffer[sample_index];
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn output_stays_bounded_over_many_cycles() {
        let mut osc = SineOsc::new();
        for _ in 0..500_000 {
            let s = osc.next_sample(261.6, 48_000.0);
            assert!(s.abs() <= 1.0 + 1e-6);
        }
    }
}
