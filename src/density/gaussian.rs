//! Standard normal distribution helpers.

/// Standard normal density φ(x).
pub fn pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * std::f64::consts::PI).sqrt()
}

/// Standard normal CDF Φ(x).
///
/// Marsaglia's series Φ(x) = ½ + φ(x)·(x + x³/3 + x⁵/(3·5) + …), summed until
/// the next term no longer changes the total. Double precision on the
/// truncated profile's [-2, 2]; saturates outside [-8, 8].
pub fn cdf(x: f64) -> f64 {
    if x < -8.0 {
        return 0.0;
    }
    if x > 8.0 {
        return 1.0;
    }
    let mut sum = x;
    let mut term = x;
    let mut k = 1.0;
    loop {
        k += 2.0;
        term *= x * x / k;
        if sum + term == sum {
            break;
        }
        sum += term;
    }
    0.5 + pdf(x) * sum
}
