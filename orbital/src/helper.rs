use nalgebra::Vector3;

/// Guard added to r before dividing z by it, so the origin maps to theta = pi/2.
const RADIUS_GUARD: f64 = 1e-10;

/// Evenly spaced samples over [a, b], both ends included.
pub(crate) fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![a],
        _ => {
            let h = (b - a) / (n - 1) as f64;
            (0..n).map(|i| a + i as f64 * h).collect()
        }
    }
}

/// Cartesian point to (r, theta, phi), physics convention.
pub(crate) fn to_spherical(p: &Vector3<f64>) -> (f64, f64, f64) {
    let r = p.norm();
    let theta = (p.z / (r + RADIUS_GUARD)).clamp(-1.0, 1.0).acos();
    let phi = p.y.atan2(p.x);
    (r, theta, phi)
}

// Simpson's rule integration
#[cfg(test)]
pub(crate) fn simpson_integration<F>(f: F, a: f64, b: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let n = if n % 2 == 0 { n } else { n + 1 };
    let h = (b - a) / n as f64;

    let mut sum = f(a) + f(b);
    for i in 1..n {
        let x = a + i as f64 * h;
        sum += if i % 2 == 0 { 2.0 * f(x) } else { 4.0 * f(x) };
    }
    sum * h / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_linspace_endpoints() {
        let xs = linspace(-10.0, 10.0, 50);
        assert_eq!(xs.len(), 50);
        assert_relative_eq!(xs[0], -10.0);
        assert_relative_eq!(xs[49], 10.0, epsilon = 1e-12);
        assert_relative_eq!(xs[1] - xs[0], 20.0 / 49.0, epsilon = 1e-12);
    }

    #[test]
    fn test_spherical_axes() {
        let (r, theta, phi) = to_spherical(&Vector3::new(0.0, 2.0, 0.0));
        assert_relative_eq!(r, 2.0);
        assert_relative_eq!(theta, PI / 2.0, epsilon = 1e-9);
        assert_relative_eq!(phi, PI / 2.0, epsilon = 1e-12);

        let (_, theta, _) = to_spherical(&Vector3::new(0.0, 0.0, -3.0));
        assert_relative_eq!(theta, PI, epsilon = 1e-4);
    }

    #[test]
    fn test_spherical_origin_is_finite() {
        let (r, theta, phi) = to_spherical(&Vector3::zeros());
        assert_eq!(r, 0.0);
        assert!(theta.is_finite() && phi.is_finite());
    }

    #[test]
    fn test_simpson_polynomial() {
        // exact for cubics
        let integral = simpson_integration(|x| x.powi(3) - 2.0 * x, 0.0, 2.0, 10);
        assert_relative_eq!(integral, 0.0, epsilon = 1e-12);
    }
}
