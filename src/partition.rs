//! Batch placement of membership functions over a domain.
//!
//! Each generator returns the membership functions of a fuzzy partition, ordered
//! from the left end of the domain to the right one.

use std::f64::consts::LN_2;

use log::debug;

use crate::error::{FuzzyError, Result};
use crate::membership::{complex_gaussian, gaussian, trapezoidal, triangular, MembershipFunction};

/// Distance by which the outermost members of "full" partitions reach past the domain.
pub const EDGE_OFFSET: f64 = 0.001;

/// Crossing point of two equal-height Gaussians with the same sigma: the midpoint.
pub fn cross_point(first_mean: f64, second_mean: f64) -> f64 {
    (first_mean + second_mean) / 2.0
}

/// Sigma for which two equal-height Gaussians centred at `first_mean` and
/// `second_mean` cross at half of their height.
///
/// Solving `exp(-(x - m1)^2 / (2 sigma^2)) = exp(-(x - m2)^2 / (2 sigma^2)) = 1/2`
/// gives `x = (m1 + m2) / 2` and `sigma = |m2 - m1| / (2 sqrt(2 ln 2))`.
pub fn cross_point_sigma(first_mean: f64, second_mean: f64) -> Result<f64> {
    let distance = (second_mean - first_mean).abs();
    // Also rejects NaN.
    if !(distance > 0.0) {
        return Err(FuzzyError::InvalidParameter(format!(
            "Gaussians at {} and {} have no crossing point",
            first_mean, second_mean
        )));
    }
    Ok(distance / (2.0 * (2.0 * LN_2).sqrt()))
}

fn require(n: usize, at_least: usize, what: &str) -> Result<()> {
    if n < at_least {
        return Err(FuzzyError::InvalidParameter(format!(
            "Number of {} must be >= {}, got {}",
            what, at_least, n
        )));
    }
    Ok(())
}

/// Generates `n` Gaussians sharing one sigma, with means evenly spaced from `start`.
///
/// The means span `end - start`, or `2 * mid_ev` if given (so that the middle member
/// of an odd partition sits at `start + mid_ev`). Adjacent Gaussians cross at
/// `max_value / 2`.
pub fn generate_equal_gausses(
    n: usize,
    start: f64,
    end: f64,
    max_value: f64,
    mid_ev: Option<f64>,
) -> Result<Vec<MembershipFunction>> {
    require(n, 2, "gausses")?;
    let width = match mid_ev {
        Some(mid_ev) => mid_ev * 2.0,
        None => end - start,
    };
    let step = width / (n - 1) as f64;
    let sigma = cross_point_sigma(start, start + step)?;
    debug!(
        "generate_equal_gausses(n = {}, start = {}, width = {}): sigma = {}",
        n, start, width, sigma
    );

    Ok((0..n)
        .map(|i| gaussian(start + step * i as f64, sigma, max_value))
        .collect())
}

fn progressive_mean(x: f64, middle: f64) -> f64 {
    0.5 * x.sin() + middle
}

/// Generates asymmetric Gaussians whose means get denser around `middle`.
///
/// The means are `0`, `middle`, `1` and pairs `0.5 sin(±e^-(k - i)) + middle` for
/// `i < k = (n - 3) / 2`; an even `n` therefore yields `n - 1` functions.
/// Each pair of neighbours gets its own sigma, so that they cross at half height,
/// and every member is cut off at the means of its neighbours.
pub fn generate_progressive_gausses(
    n: usize,
    middle: f64,
    max_value: f64,
) -> Result<Vec<MembershipFunction>> {
    require(n, 3, "gausses for progressive distribution")?;

    let mut means = vec![0.0, middle, 1.0];
    let pairs = (n - 3) / 2;
    for i in 0..pairs {
        let arg = (-((pairs - i) as f64)).exp();
        means.push(progressive_mean(-arg, middle));
        means.push(progressive_mean(arg, middle));
    }
    means.sort_by(|a, b| a.total_cmp(b));

    let sigmas = means
        .windows(2)
        .map(|pair| cross_point_sigma(pair[0], pair[1]))
        .collect::<Result<Vec<f64>>>()?;
    let last_sigma = sigmas[sigmas.len() - 1];
    debug!(
        "generate_progressive_gausses(n = {}, middle = {}): means = {:?}, sigmas = {:?}",
        n, middle, means, sigmas
    );

    Ok(means
        .iter()
        .enumerate()
        .map(|(j, &mean)| {
            let left_sigma = if j == 0 { last_sigma } else { sigmas[j - 1] };
            let right_sigma = sigmas.get(j).copied().unwrap_or(last_sigma);
            let min = if j == 0 { f64::NEG_INFINITY } else { means[j - 1] };
            let max = means.get(j + 1).copied().unwrap_or(f64::INFINITY);
            complex_gaussian(mean, left_sigma, right_sigma, min, max, max_value)
        })
        .collect())
}

/// Generates `n` triangles of equal width; neighbours cross at half height and
/// the outer feet lie on `start` and `end`.
pub fn generate_even_triangulars(
    n: usize,
    start: f64,
    end: f64,
    max_value: f64,
) -> Result<Vec<MembershipFunction>> {
    require(n, 1, "triangles")?;
    let step = (end - start) / (n + 1) as f64;
    Ok((0..n)
        .map(|i| {
            let s = start + step * i as f64;
            triangular(s, s + step, s + 2.0 * step, max_value)
        })
        .collect())
}

/// Generates `n` triangles whose outer apexes lie on `start` and `end`.
pub fn generate_full_triangulars(
    n: usize,
    start: f64,
    end: f64,
    max_value: f64,
) -> Result<Vec<MembershipFunction>> {
    require(n, 2, "triangles")?;
    let step = (end - start) / (n - 1) as f64;

    let mut mfs = Vec::with_capacity(n);
    mfs.push(triangular(start - EDGE_OFFSET, start, start + step, max_value));
    for i in 0..n - 2 {
        let s = start + step * i as f64;
        mfs.push(triangular(s, s + step, s + 2.0 * step, max_value));
    }
    mfs.push(triangular(end - step, end, end + EDGE_OFFSET, max_value));
    Ok(mfs)
}

/// Generates `n` trapezoids; slopes and plateaus all have the same width.
pub fn generate_even_trapezoidals(
    n: usize,
    start: f64,
    end: f64,
    max_value: f64,
) -> Result<Vec<MembershipFunction>> {
    require(n, 1, "trapezoids")?;
    let step = (end - start) / (2 * n + 1) as f64;
    Ok((0..n)
        .map(|i| {
            let s = start + 2.0 * step * i as f64;
            trapezoidal(s, s + step, s + 2.0 * step, s + 3.0 * step, max_value)
        })
        .collect())
}

/// Generates a partition with trapezoids at both edges of the domain.
///
/// Only the two outer members are trapezoids: the interior members are triangles
/// advancing by a single step, so for `n > 3` the right end of the interior is
/// left uncovered.
pub fn generate_full_trapezoidals(
    n: usize,
    start: f64,
    end: f64,
    max_value: f64,
) -> Result<Vec<MembershipFunction>> {
    require(n, 2, "trapezoids")?;
    let step = (end - start) / (2 * n - 1) as f64;

    let mut mfs = Vec::with_capacity(n);
    mfs.push(trapezoidal(
        start - EDGE_OFFSET,
        start,
        start + step,
        start + 2.0 * step,
        max_value,
    ));
    for i in 0..n - 2 {
        let s = start + step * (i + 1) as f64;
        mfs.push(triangular(s, s + step, s + 2.0 * step, max_value));
    }
    mfs.push(trapezoidal(
        end - 2.0 * step,
        end - step,
        end,
        end + EDGE_OFFSET,
        max_value,
    ));
    Ok(mfs)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_cross_point_sigma() {
        let sigma = cross_point_sigma(0.0, 0.5).unwrap();
        assert!((sigma - 0.5 / (2.0 * (2.0 * LN_2).sqrt())).abs() < 1e-15);
        assert_eq!(cross_point_sigma(0.5, 0.0).unwrap(), sigma);
        assert!(cross_point_sigma(0.3, 0.3).is_err());
    }

    #[test]
    fn test_equal_gausses_cross_at_half_height() {
        let mfs = generate_equal_gausses(3, 0.0, 1.0, 1.0, None).unwrap();
        assert_eq!(mfs.len(), 3);
        for pair in mfs.windows(2) {
            let (m1, m2) = match (&pair[0], &pair[1]) {
                (
                    MembershipFunction::Gaussian { mean: m1, .. },
                    MembershipFunction::Gaussian { mean: m2, .. },
                ) => (*m1, *m2),
                _ => panic!("expected gaussians"),
            };
            let x = cross_point(m1, m2);
            assert!((pair[0].evaluate(x) - 0.5).abs() < EPS);
            assert!((pair[1].evaluate(x) - 0.5).abs() < EPS);
        }
        assert!((mfs[0].evaluate(0.0) - 1.0).abs() < EPS);
        assert!((mfs[1].evaluate(0.5) - 1.0).abs() < EPS);
        assert!((mfs[2].evaluate(1.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_equal_gausses_scaled_height() {
        let mfs = generate_equal_gausses(5, 0.0, 1.0, 0.8, None).unwrap();
        assert_eq!(mfs.len(), 5);
        // Neighbours at 0.25 and 0.5 cross at half of the height.
        assert!((mfs[1].evaluate(0.375) - 0.4).abs() < EPS);
        assert!((mfs[2].evaluate(0.375) - 0.4).abs() < EPS);
    }

    #[test]
    fn test_equal_gausses_mid_ev() {
        let mfs = generate_equal_gausses(3, 0.0, 1.0, 1.0, Some(0.3)).unwrap();
        assert!((mfs[1].evaluate(0.3) - 1.0).abs() < EPS);
        assert!((mfs[2].evaluate(0.6) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_equal_gausses_too_few() {
        assert!(generate_equal_gausses(1, 0.0, 1.0, 1.0, None).is_err());
        assert!(generate_equal_gausses(3, 1.0, 1.0, 1.0, None).is_err());
    }

    #[test]
    fn test_progressive_gausses() {
        let mfs = generate_progressive_gausses(5, 0.5, 1.0).unwrap();
        assert_eq!(mfs.len(), 5);

        let means: Vec<f64> = mfs
            .iter()
            .map(|mf| match mf {
                MembershipFunction::ComplexGaussian { mean, .. } => *mean,
                _ => panic!("expected complex gaussians"),
            })
            .collect();
        let offset = 0.5 * (-1.0f64).exp().sin();
        let expected = [0.0, 0.5 - offset, 0.5, 0.5 + offset, 1.0];
        for (mean, expected) in means.iter().zip(expected) {
            assert!((mean - expected).abs() < 1e-12);
        }

        // Neighbours cross at half height in the middle of their means.
        for j in 0..means.len() - 1 {
            let x = cross_point(means[j], means[j + 1]);
            assert!((mfs[j].evaluate(x) - 0.5).abs() < EPS);
            assert!((mfs[j + 1].evaluate(x) - 0.5).abs() < EPS);
        }

        // Support ends at the neighbouring means.
        assert_eq!(mfs[2].evaluate(means[0]), 0.0);
        assert_eq!(mfs[2].evaluate(means[4]), 0.0);
        assert!(mfs[0].evaluate(-1.0) > 0.0);
        assert!(mfs[4].evaluate(2.0) > 0.0);
    }

    #[test]
    fn test_progressive_gausses_even_count() {
        assert_eq!(generate_progressive_gausses(3, 0.5, 1.0).unwrap().len(), 3);
        assert_eq!(generate_progressive_gausses(4, 0.5, 1.0).unwrap().len(), 3);
        assert_eq!(generate_progressive_gausses(7, 0.5, 1.0).unwrap().len(), 7);
        assert!(generate_progressive_gausses(2, 0.5, 1.0).is_err());
    }

    #[test]
    fn test_even_triangulars() {
        let mfs = generate_even_triangulars(3, 0.0, 1.0, 1.0).unwrap();
        assert_eq!(mfs.len(), 3);
        for (i, mf) in mfs.iter().enumerate() {
            let center = 0.25 * (i + 1) as f64;
            assert!((mf.evaluate(center) - 1.0).abs() < EPS);
        }
        assert_eq!(mfs[0].evaluate(0.0), 0.0);
        assert_eq!(mfs[2].evaluate(1.0), 0.0);
        assert!((mfs[0].evaluate(0.375) - 0.5).abs() < EPS);
        assert!((mfs[1].evaluate(0.375) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_full_triangulars() {
        let mfs = generate_full_triangulars(3, 0.0, 1.0, 1.0).unwrap();
        assert_eq!(mfs.len(), 3);
        assert_eq!(mfs[0].evaluate(0.0), 1.0);
        assert!((mfs[1].evaluate(0.5) - 1.0).abs() < EPS);
        assert_eq!(mfs[2].evaluate(1.0), 1.0);
        assert!(generate_full_triangulars(1, 0.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_even_trapezoidals() {
        let mfs = generate_even_trapezoidals(2, 0.0, 1.0, 1.0).unwrap();
        assert_eq!(mfs.len(), 2);
        // step = 0.2: plateaus [0.2, 0.4] and [0.6, 0.8]
        assert!((mfs[0].evaluate(0.3) - 1.0).abs() < EPS);
        assert!((mfs[1].evaluate(0.7) - 1.0).abs() < EPS);
        assert!((mfs[0].evaluate(0.5) - 0.5).abs() < EPS);
        assert!((mfs[1].evaluate(0.5) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_full_trapezoidals_interior_triangles() {
        let mfs = generate_full_trapezoidals(4, 0.0, 1.0, 1.0).unwrap();
        assert_eq!(mfs.len(), 4);
        assert!(matches!(mfs[0], MembershipFunction::Trapezoidal { .. }));
        assert!(matches!(mfs[1], MembershipFunction::Triangular { .. }));
        assert!(matches!(mfs[2], MembershipFunction::Triangular { .. }));
        assert!(matches!(mfs[3], MembershipFunction::Trapezoidal { .. }));

        assert_eq!(mfs[0].evaluate(0.0), 1.0);
        assert_eq!(mfs[3].evaluate(1.0), 1.0);

        let step = 1.0 / 7.0;
        assert!((mfs[1].evaluate(2.0 * step) - 1.0).abs() < EPS);
        assert!((mfs[2].evaluate(3.0 * step) - 1.0).abs() < EPS);
    }
}
