//! Statistical sanity checks for the hash noise field.

use dithergen_core::noise::noise;
use dithergen_core::XorShift32;
use rand::Rng;

const SEEDS: [u32; 4] = [1, 42, 0xDEAD_BEEF, 7_777_777];

fn correlation(pairs: &[(f64, f64)]) -> f64 {
    let n = pairs.len() as f64;
    let mean_a = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_b = pairs.iter().map(|p| p.1).sum::<f64>() / n;
    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for &(a, b) in pairs {
        cov += (a - mean_a) * (b - mean_b);
        var_a += (a - mean_a).powi(2);
        var_b += (b - mean_b).powi(2);
    }
    cov / (var_a.sqrt() * var_b.sqrt())
}

/// Horizontally adjacent samples are not correlated.
#[test]
fn test_adjacent_autocorrelation_is_low() {
    for seed in SEEDS {
        let pairs: Vec<(f64, f64)> = (0..64u32)
            .flat_map(|y| (0..127u32).map(move |x| (x, y)))
            .map(|(x, y)| (noise(x, y, seed) as f64, noise(x + 1, y, seed) as f64))
            .collect();
        let r = correlation(&pairs);
        assert!(r.abs() < 0.1, "seed {} autocorrelation {}", seed, r);
    }
}

/// Vertically adjacent samples are not correlated either.
#[test]
fn test_vertical_autocorrelation_is_low() {
    for seed in SEEDS {
        let pairs: Vec<(f64, f64)> = (0..63u32)
            .flat_map(|y| (0..128u32).map(move |x| (x, y)))
            .map(|(x, y)| (noise(x, y, seed) as f64, noise(x, y + 1, seed) as f64))
            .collect();
        let r = correlation(&pairs);
        assert!(r.abs() < 0.1, "seed {} autocorrelation {}", seed, r);
    }
}

/// Adjacent samples usually differ, and the field spans the byte range.
#[test]
fn test_adjacent_samples_differ_and_spread() {
    let seed = 42;
    let mut equal = 0;
    let mut histogram = [0u32; 16];
    for y in 0..64u32 {
        for x in 0..128u32 {
            let v = noise(x, y, seed);
            if v == noise(x + 1, y, seed) {
                equal += 1;
            }
            histogram[(v >> 4) as usize] += 1;
        }
    }
    assert!(equal < 8192 / 50, "too many equal neighbors: {}", equal);
    for (bucket, &count) in histogram.iter().enumerate() {
        assert!(
            (256..768).contains(&count),
            "bucket {} has {} samples",
            bucket,
            count
        );
    }
}

/// Mean over random coordinates sits near the middle of the byte range.
#[test]
fn test_mean_near_midpoint() {
    let mut rng = XorShift32::new(2024);
    let n = 20_000;
    let sum: u64 = (0..n)
        .map(|_| {
            let x = rng.gen_range(0..1024u32);
            let y = rng.gen_range(0..1024u32);
            noise(x, y, 42) as u64
        })
        .sum();
    let mean = sum as f64 / n as f64;
    assert!((117.5..137.5).contains(&mean), "mean {}", mean);
}
