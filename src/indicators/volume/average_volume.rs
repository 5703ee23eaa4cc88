//! Rolling volume baseline

/// Simple rolling mean of volume over the trailing `window` bars, current
/// bar included. Rows with fewer than `window` bars of history are `None`.
pub fn average_volume_series(volumes: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; volumes.len()];
    if window == 0 {
        return out;
    }

    for i in (window - 1)..volumes.len() {
        let sum: f64 = volumes[i + 1 - window..=i].iter().sum();
        out[i] = Some(sum / window as f64);
    }

    out
}
