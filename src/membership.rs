//! Membership functions.
//!
//! A membership function maps a crisp value to its membership degree.
//! Built-in shapes are plain data (so they can be inspected, cloned and printed);
//! any other function can be wrapped with [`MembershipFunction::custom`].
//!
//! ```
//! use fuzzy_rs::membership::{gaussian, triangular};
//!
//! let mf = gaussian(0.4, 0.15, 1.0);
//! assert_eq!(mf.evaluate(0.4), 1.0);
//!
//! let mf = triangular(0.2, 0.3, 0.7, 1.0);
//! assert!((mf.evaluate(0.5) - 0.5).abs() < 1e-12);
//! ```

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

#[derive(Clone)]
pub enum MembershipFunction {
    Gaussian {
        mean: f64,
        sigma: f64,
        max_value: f64,
    },
    /// Gaussian with different spreads left and right of the mean, zero outside `[min, max]`.
    ComplexGaussian {
        mean: f64,
        left_sigma: f64,
        right_sigma: f64,
        min: f64,
        max: f64,
        max_value: f64,
    },
    Sigmoid {
        offset: f64,
        magnitude: f64,
        scaling: f64,
    },
    SigmoidReversed {
        offset: f64,
        magnitude: f64,
        scaling: f64,
    },
    Triangular {
        l_end: f64,
        center: f64,
        r_end: f64,
        max_value: f64,
    },
    Trapezoidal {
        l_end: f64,
        l_center: f64,
        r_center: f64,
        r_end: f64,
        max_value: f64,
    },
    Linear {
        a: f64,
        b: f64,
        max_value: f64,
    },
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl MembershipFunction {
    /// Wraps an arbitrary function.
    pub fn custom(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        MembershipFunction::Custom(Arc::new(f))
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            MembershipFunction::Gaussian {
                mean,
                sigma,
                max_value,
            } => gauss(x, mean, sigma, max_value),
            MembershipFunction::ComplexGaussian {
                mean,
                left_sigma,
                right_sigma,
                min,
                max,
                max_value,
            } => {
                if x < min || x > max {
                    0.0
                } else if x < mean {
                    gauss(x, mean, left_sigma, max_value)
                } else {
                    gauss(x, mean, right_sigma, max_value)
                }
            }
            MembershipFunction::Sigmoid {
                offset,
                magnitude,
                scaling,
            } => scaling * logistic(x, offset, magnitude),
            MembershipFunction::SigmoidReversed {
                offset,
                magnitude,
                scaling,
            } => scaling * (1.0 - logistic(x, offset, magnitude)),
            MembershipFunction::Triangular {
                l_end,
                center,
                r_end,
                max_value,
            } => {
                let y = if x <= center {
                    max_value * (x - l_end) / (center - l_end)
                } else {
                    max_value * (r_end - x) / (r_end - center)
                };
                clip(y, max_value)
            }
            MembershipFunction::Trapezoidal {
                l_end,
                l_center,
                r_center,
                r_end,
                max_value,
            } => {
                let y = if x <= l_center {
                    max_value * (x - l_end) / (l_center - l_end)
                } else if x >= r_center {
                    max_value * (r_end - x) / (r_end - r_center)
                } else {
                    max_value
                };
                clip(y, max_value)
            }
            MembershipFunction::Linear { a, b, max_value } => {
                let y = a * x + b;
                if y > 0.0 {
                    y.min(max_value)
                } else {
                    0.0
                }
            }
            MembershipFunction::Custom(ref f) => f(x),
        }
    }

    pub fn evaluate_all(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}

fn gauss(x: f64, mean: f64, sigma: f64, max_value: f64) -> f64 {
    max_value * (-((mean - x).powi(2)) / (2.0 * sigma.powi(2))).exp()
}

fn logistic(x: f64, offset: f64, magnitude: f64) -> f64 {
    1.0 / (1.0 + (-magnitude * (x - offset)).exp())
}

// NaN from degenerate ramps (0/0) falls through both comparisons and is kept.
fn clip(y: f64, max_value: f64) -> f64 {
    if y < 0.0 {
        0.0
    } else if y > max_value {
        max_value
    } else {
        y
    }
}

impl Debug for MembershipFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MembershipFunction::Gaussian {
                mean,
                sigma,
                max_value,
            } => f
                .debug_struct("Gaussian")
                .field("mean", mean)
                .field("sigma", sigma)
                .field("max_value", max_value)
                .finish(),
            MembershipFunction::ComplexGaussian {
                mean,
                left_sigma,
                right_sigma,
                min,
                max,
                max_value,
            } => f
                .debug_struct("ComplexGaussian")
                .field("mean", mean)
                .field("left_sigma", left_sigma)
                .field("right_sigma", right_sigma)
                .field("min", min)
                .field("max", max)
                .field("max_value", max_value)
                .finish(),
            MembershipFunction::Sigmoid {
                offset,
                magnitude,
                scaling,
            } => f
                .debug_struct("Sigmoid")
                .field("offset", offset)
                .field("magnitude", magnitude)
                .field("scaling", scaling)
                .finish(),
            MembershipFunction::SigmoidReversed {
                offset,
                magnitude,
                scaling,
            } => f
                .debug_struct("SigmoidReversed")
                .field("offset", offset)
                .field("magnitude", magnitude)
                .field("scaling", scaling)
                .finish(),
            MembershipFunction::Triangular {
                l_end,
                center,
                r_end,
                max_value,
            } => f
                .debug_struct("Triangular")
                .field("l_end", l_end)
                .field("center", center)
                .field("r_end", r_end)
                .field("max_value", max_value)
                .finish(),
            MembershipFunction::Trapezoidal {
                l_end,
                l_center,
                r_center,
                r_end,
                max_value,
            } => f
                .debug_struct("Trapezoidal")
                .field("l_end", l_end)
                .field("l_center", l_center)
                .field("r_center", r_center)
                .field("r_end", r_end)
                .field("max_value", max_value)
                .finish(),
            MembershipFunction::Linear { a, b, max_value } => f
                .debug_struct("Linear")
                .field("a", a)
                .field("b", b)
                .field("max_value", max_value)
                .finish(),
            MembershipFunction::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Gaussian membership function, `max_value * exp(-(x - mean)^2 / (2 sigma^2))`.
pub fn gaussian(mean: f64, sigma: f64, max_value: f64) -> MembershipFunction {
    MembershipFunction::Gaussian {
        mean,
        sigma,
        max_value,
    }
}

/// Asymmetric Gaussian: `left_sigma` below the mean, `right_sigma` from the mean on,
/// and zero outside of `[min, max]`.
///
/// Pass infinite bounds for an unbounded support.
pub fn complex_gaussian(
    mean: f64,
    left_sigma: f64,
    right_sigma: f64,
    min: f64,
    max: f64,
    max_value: f64,
) -> MembershipFunction {
    MembershipFunction::ComplexGaussian {
        mean,
        left_sigma,
        right_sigma,
        min,
        max,
        max_value,
    }
}

/// Sigmoid membership function, `scaling / (1 + exp(-magnitude * (x - offset)))`.
///
/// The sign of `magnitude` decides which side of the function is open.
pub fn sigmoid(offset: f64, magnitude: f64, scaling: f64) -> MembershipFunction {
    MembershipFunction::Sigmoid {
        offset,
        magnitude,
        scaling,
    }
}

/// Mirror image of [`sigmoid`], `scaling * (1 - 1 / (1 + exp(-magnitude * (x - offset))))`.
pub fn sigmoid_reversed(offset: f64, magnitude: f64, scaling: f64) -> MembershipFunction {
    MembershipFunction::SigmoidReversed {
        offset,
        magnitude,
        scaling,
    }
}

/// Triangle with feet at `l_end`, `r_end` and apex `max_value` at `center`.
pub fn triangular(l_end: f64, center: f64, r_end: f64, max_value: f64) -> MembershipFunction {
    MembershipFunction::Triangular {
        l_end,
        center,
        r_end,
        max_value,
    }
}

/// Trapezoid with feet at `l_end`, `r_end` and plateau `max_value` over `[l_center, r_center]`.
pub fn trapezoidal(
    l_end: f64,
    l_center: f64,
    r_center: f64,
    r_end: f64,
    max_value: f64,
) -> MembershipFunction {
    MembershipFunction::Trapezoidal {
        l_end,
        l_center,
        r_center,
        r_end,
        max_value,
    }
}

/// Ramp `a * x + b`, capped at `max_value` and zero where it is not positive.
pub fn linear(a: f64, b: f64, max_value: f64) -> MembershipFunction {
    MembershipFunction::Linear { a, b, max_value }
}
