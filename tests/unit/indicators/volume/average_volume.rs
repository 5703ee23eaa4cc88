//! Unit tests for the rolling volume baseline

use niftrix::indicators::volume::average_volume_series;

#[test]
fn undefined_until_the_window_fills() {
    let volumes = vec![1000.0; 25];
    let avg = average_volume_series(&volumes, 20);
    assert!(avg[..19].iter().all(|v| v.is_none()));
    assert!(avg[19].is_some());
}

#[test]
fn mean_includes_the_current_bar() {
    let volumes: Vec<f64> = (1..=20).map(|i| i as f64).collect();
    let avg = average_volume_series(&volumes, 20);
    assert_eq!(avg[19], Some(10.5));
}

#[test]
fn spike_moves_the_baseline() {
    let mut volumes = vec![1000.0; 20];
    volumes.push(21_000.0);
    let avg = average_volume_series(&volumes, 20);
    assert_eq!(avg[19], Some(1000.0));
    assert_eq!(avg[20], Some(2000.0));
}
