//! White Gaussian noise for simulator runs.

use rand_distr::{Distribution, Normal};

/// `n` samples of zero-mean Gaussian noise with standard deviation `sigma`.
pub fn white_gaussian(n: usize, sigma: f64) -> Vec<f64> {
    let normal = Normal::new(0.0, sigma.abs()).expect("sigma is finite");
    let mut rng = rand::rng();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

/// Adds noise in place so the result has the requested SNR in dB,
/// measured against the signal's own average power.
pub fn add_noise_for_snr(signal: &mut [f64], snr_db: f64) {
    if signal.is_empty() {
        return;
    }
    let signal_power: f64 =
        signal.iter().map(|&s| s * s).sum::<f64>() / signal.len() as f64;
    let snr_linear = 10f64.powf(snr_db / 10.0);
    let noise_sigma = (signal_power / snr_linear).sqrt();
    let noise = white_gaussian(signal.len(), noise_sigma);
    for (s, v) in signal.iter_mut().zip(noise) {
        *s += v;
    }
}
