//! Unit tests for the RSI column

use niftrix::indicators::momentum::rsi_series;

#[test]
fn insufficient_history_is_undefined() {
    let closes = vec![100.0, 101.0, 102.0];
    let rsi = rsi_series(&closes, 14);
    assert!(rsi.iter().all(|v| v.is_none()));
}

#[test]
fn first_defined_row_needs_a_full_delta_window() {
    let closes: Vec<f64> = (0..20).map(|i| 100.0 + (i % 3) as f64).collect();
    let rsi = rsi_series(&closes, 14);
    assert!(rsi[..14].iter().all(|v| v.is_none()));
    assert!(rsi[14].is_some());
}

#[test]
fn constant_series_is_undefined_not_fifty() {
    let closes = vec![500.0; 30];
    let rsi = rsi_series(&closes, 14);
    assert!(rsi.iter().all(|v| v.is_none()));
}

#[test]
fn zero_loss_window_is_undefined_not_hundred() {
    // Strictly rising closes: gains only, loss average is zero.
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let rsi = rsi_series(&closes, 14);
    assert!(rsi.iter().all(|v| v.is_none()));
}

#[test]
fn balanced_gains_and_losses_read_fifty() {
    let closes = [10.0, 11.0, 10.0, 11.0, 10.0, 11.0];
    let rsi = rsi_series(&closes, 2);
    for value in &rsi[2..] {
        let v = value.expect("window is full");
        assert!((v - 50.0).abs() < 1e-9);
    }
}

#[test]
fn known_small_window_values() {
    let closes = [100.0, 102.0, 101.0, 103.0, 102.0];
    let rsi = rsi_series(&closes, 3);
    // deltas +2, -1, +2: avg gain 4/3, avg loss 1/3, rs 4 -> 80
    let third = rsi[3].expect("defined");
    assert!((third - 80.0).abs() < 1e-9);
    // deltas -1, +2, -1: rs 1 -> 50
    let fourth = rsi[4].expect("defined");
    assert!((fourth - 50.0).abs() < 1e-9);
}

#[test]
fn values_stay_in_bounds() {
    let closes: Vec<f64> = (0..60)
        .map(|i| 100.0 + ((i * 7) % 13) as f64 - 6.0)
        .collect();
    for value in rsi_series(&closes, 14).into_iter().flatten() {
        assert!((0.0..=100.0).contains(&value));
    }
}
