//! Cymatic scope: low-band spectrum of the rendered harmony.
//!
//! The charted voices all sit between 100 and 300 Hz, so instead of a
//! full-range analyzer this scope watches a narrow low band: log-spaced
//! bands from 60 Hz upward, each bar showing the average power of the FFT
//! bins it covers.

use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

const BAND_COUNT: usize = 24;
const LOW_HZ: f32 = 60.0;
const HIGH_HZ: f32 = 960.0;
/// Display floor; bands quieter than this render as empty.
const FLOOR_DB: f32 = -80.0;

pub struct CymaticScope {
    fft: Arc<dyn Fft<f32>>,
    /// Hann coefficients
    window: Vec<f32>,
    scratch: Vec<Complex<f32>>,
    labels: Vec<String>,
    values: Vec<u64>,
    /// Per-band `[start, end)` FFT bin ranges
    bands: Vec<(usize, usize)>,
}

impl CymaticScope {
    pub fn new(window_len: usize, sample_rate: f32) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(window_len);

        let window: Vec<f32> = (0..window_len)
            .map(|i| {
                if window_len > 1 {
                    let denom = (window_len - 1) as f32;
                    0.5 * (1.0 - (std::f32::consts::TAU * i as f32 / denom).cos())
                } else {
                    1.0
                }
            })
            .collect();

        let half = (window_len / 2).max(1);
        let hz_per_bin = sample_rate / window_len.max(1) as f32;
        let ratio = (HIGH_HZ / LOW_HZ).powf(1.0 / BAND_COUNT as f32);

        let mut labels = Vec::with_capacity(BAND_COUNT);
        let mut bands = Vec::with_capacity(BAND_COUNT);
        let mut lower = LOW_HZ;
        for _ in 0..BAND_COUNT {
            let upper = lower * ratio;
            let start = ((lower / hz_per_bin).round() as usize).min(half - 1);
            let end = ((upper / hz_per_bin).round() as usize).clamp(start + 1, half);
            labels.push(format!("{lower:.0}"));
            bands.push((start, end));
            lower = upper;
        }

        Self {
            fft,
            window,
            scratch: vec![Complex::new(0.0, 0.0); window_len],
            labels,
            values: vec![0; BAND_COUNT],
            bands,
        }
    }

    /// Re-analyze one window of rendered samples. Ignores buffers that do
    /// not match the window length.
    pub fn update(&mut self, samples: &[f32]) {
        if samples.len() != self.window.len() {
            return;
        }

        for (i, (&sample, &coeff)) in samples.iter().zip(&self.window).enumerate() {
            self.scratch[i] = Complex::new(sample * coeff, 0.0);
        }
        self.fft.process(&mut self.scratch);

        for (slot, &(start, end)) in self.bands.iter().enumerate() {
            let mut power = 0.0f32;
            for bin in &self.scratch[start..end] {
                power += bin.re * bin.re + bin.im * bin.im;
            }
            power /= (end - start) as f32;

            let db = 10.0 * power.max(1e-12).log10();
            let height = ((db - FLOOR_DB) / -FLOOR_DB).clamp(0.0, 1.0);
            self.values[slot] = (height * 100.0) as u64;
        }
    }

    /// Bars for the chart: (band label, height 0..=100).
    pub fn data(&self) -> Vec<(&str, u64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
            .collect()
    }
}
