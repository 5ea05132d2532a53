use rand::Rng;
use rand_distr::StandardNormal;

/// `n` evenly spaced values over `[start, end]`, both ends included.
pub(crate) fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// `sin(frequency * x)` plus gaussian noise with the given standard deviation.
pub(crate) fn noisy_sine<R: Rng + ?Sized>(
    xs: &[f64],
    frequency: f64,
    std_dev: f64,
    rng: &mut R,
) -> Vec<f64> {
    xs.iter()
        .map(|&x| {
            let noise: f64 = rng.sample(StandardNormal);
            (frequency * x).sin() + noise * std_dev
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn linspace_includes_endpoints() {
        let xs = linspace(0.0, 10.0, 100);
        assert_eq!(xs.len(), 100);
        assert_eq!(xs[0], 0.0);
        assert!((xs[99] - 10.0).abs() < 1e-12);
        assert!((xs[1] - 10.0 / 99.0).abs() < 1e-12);
    }

    #[test]
    fn linspace_small_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
    }

    #[test]
    fn zero_noise_is_pure_sine() {
        let mut rng = StdRng::seed_from_u64(1);
        let xs = linspace(0.0, 3.0, 7);
        let ys = noisy_sine(&xs, 2.0, 0.0, &mut rng);
        for (x, y) in xs.iter().zip(&ys) {
            assert!((y - (2.0 * x).sin()).abs() < 1e-12);
        }
    }

    #[test]
    fn same_seed_same_noise() {
        let xs = linspace(0.0, 10.0, 50);
        let a = noisy_sine(&xs, 1.0, 0.5, &mut StdRng::seed_from_u64(42));
        let b = noisy_sine(&xs, 1.0, 0.5, &mut StdRng::seed_from_u64(42));
        let c = noisy_sine(&xs, 1.0, 0.5, &mut StdRng::seed_from_u64(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn noise_is_bounded_in_practice() {
        let xs = linspace(0.0, 10.0, 1000);
        let ys = noisy_sine(&xs, 3.0, 0.5, &mut StdRng::seed_from_u64(7));
        // 1 + 8 sigma
        assert!(ys.iter().all(|y| y.abs() < 5.0));
    }
}
