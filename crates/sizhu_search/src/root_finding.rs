//! Longitude-aware bracketing and Brent root refinement.
//!
//! The residual of a longitude target is periodic; `find_bracket` works on
//! the wrapped difference so a crossing near 0/360 still changes sign.
//! `brentq` is the classic Brent method: inverse quadratic interpolation
//! when admissible, secant fallback, bisection safeguard.

use crate::error::SearchError;

/// Outward scan step from the seed, days.
const BRACKET_STEP_DAYS: f64 = 0.25;

/// Scan steps in each direction before giving up.
const BRACKET_MAX_STEPS: u32 = 30;

/// Wrap a longitude difference into (-180, +180].
pub fn normalize_longitude_difference(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Scan outward from `seed_jd_tt` for an interval whose wrapped longitude
/// residual changes sign: 30 quarter-day steps forward, then 30 backward.
pub fn find_bracket(
    target_longitude_deg: f64,
    seed_jd_tt: f64,
    longitude_fn: impl Fn(f64) -> f64,
) -> Result<(f64, f64), SearchError> {
    let f = |jd: f64| normalize_longitude_difference(longitude_fn(jd) - target_longitude_deg);

    let seed_value = f(seed_jd_tt);
    if seed_value == 0.0 {
        return Ok((
            seed_jd_tt - BRACKET_STEP_DAYS,
            seed_jd_tt + BRACKET_STEP_DAYS,
        ));
    }

    for i in 1..=BRACKET_MAX_STEPS {
        let jd_test = seed_jd_tt + f64::from(i) * BRACKET_STEP_DAYS;
        if f(jd_test) * seed_value < 0.0 {
            return Ok((seed_jd_tt + f64::from(i - 1) * BRACKET_STEP_DAYS, jd_test));
        }
    }

    for i in 1..=BRACKET_MAX_STEPS {
        let jd_test = seed_jd_tt - f64::from(i) * BRACKET_STEP_DAYS;
        if f(jd_test) * seed_value < 0.0 {
            return Ok((jd_test, seed_jd_tt - f64::from(i - 1) * BRACKET_STEP_DAYS));
        }
    }

    Err(SearchError::BracketingFailed {
        target_longitude_deg,
        seed_jd_tt,
        scan_span_days: f64::from(BRACKET_MAX_STEPS) * BRACKET_STEP_DAYS,
    })
}

/// Brent's method on a bracketed root.
///
/// Returns a root within `xtol` of truth, or fails after `max_iter`
/// iterations.
pub fn brentq(
    f: impl Fn(f64) -> f64,
    xa: f64,
    xb: f64,
    xtol: f64,
    max_iter: u32,
) -> Result<f64, SearchError> {
    let mut fa = f(xa);
    let mut fb = f(xb);

    if fa == 0.0 {
        return Ok(xa);
    }
    if fb == 0.0 {
        return Ok(xb);
    }
    if fa * fb > 0.0 {
        return Err(SearchError::RootNotBracketed);
    }

    let mut a = xa;
    let mut b = xb;
    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut e = d;

    for _ in 0..max_iter {
        if fb * fc > 0.0 {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }

        if fc.abs() < fb.abs() {
            (a, b, c) = (b, c, b);
            (fa, fb, fc) = (fb, fc, fb);
        }

        let tol = xtol;
        let midpoint = 0.5 * (c - b);

        if midpoint.abs() <= tol || fb == 0.0 {
            return Ok(b);
        }

        if e.abs() >= tol && fa.abs() > fb.abs() {
            // Interpolate: secant when a == c, inverse quadratic otherwise.
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                (2.0 * midpoint * s, 1.0 - s)
            } else {
                let q_ratio = fa / fc;
                let r_ratio = fb / fc;
                (
                    s * (2.0 * midpoint * q_ratio * (q_ratio - r_ratio)
                        - (b - a) * (r_ratio - 1.0)),
                    (q_ratio - 1.0) * (r_ratio - 1.0) * (s - 1.0),
                )
            };

            if p > 0.0 {
                q = -q;
            }
            p = p.abs();

            let min1 = 3.0 * midpoint * q - (tol * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                e = d;
                d = p / q;
            } else {
                d = midpoint;
                e = d;
            }
        } else {
            d = midpoint;
            e = d;
        }

        a = b;
        fa = fb;
        if d.abs() > tol {
            b += d;
        } else {
            b += if midpoint > 0.0 { tol } else { -tol };
        }
        fb = f(b);
    }

    Err(SearchError::IterationLimit { max_iter })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_basic() {
        assert!((normalize_longitude_difference(0.0)).abs() < 1e-12);
        assert!((normalize_longitude_difference(180.0) - 180.0).abs() < 1e-12);
        assert!((normalize_longitude_difference(-180.0) - 180.0).abs() < 1e-12);
        assert!((normalize_longitude_difference(270.0) + 90.0).abs() < 1e-12);
        assert!((normalize_longitude_difference(360.0)).abs() < 1e-12);
        assert!((normalize_longitude_difference(-350.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn bracket_forward_crossing() {
        // Longitude increases ~1 deg/day; target 3.3 deg ahead of seed value.
        let lam = |jd: f64| jd; // degenerate "longitude" for the scan
        let (a, b) = find_bracket(103.3, 100.0, lam).unwrap();
        assert!(a < 103.3 && 103.3 < b, "bracket ({a}, {b})");
        assert!((b - a - 0.25).abs() < 1e-12);
    }

    #[test]
    fn bracket_backward_crossing() {
        let lam = |jd: f64| jd;
        let (a, b) = find_bracket(97.4, 100.0, lam).unwrap();
        assert!(a < 97.4 && 97.4 < b, "bracket ({a}, {b})");
    }

    #[test]
    fn bracket_handles_wraparound() {
        // Crossing 0/360 between seed and target.
        let lam = |jd: f64| (355.0 + (jd - 100.0)).rem_euclid(360.0);
        let (a, b) = find_bracket(2.1, 100.0, lam).unwrap();
        assert!((100.0..107.25).contains(&a) && b <= 107.25);
        let residual_a = normalize_longitude_difference(lam(a) - 2.1);
        let residual_b = normalize_longitude_difference(lam(b) - 2.1);
        assert!(residual_a * residual_b < 0.0);
    }

    #[test]
    fn bracket_fails_without_crossing() {
        // Constant longitude never reaches the target.
        let lam = |_: f64| 10.0;
        let err = find_bracket(200.0, 100.0, lam).unwrap_err();
        assert!(matches!(err, SearchError::BracketingFailed { .. }));
    }

    #[test]
    fn brent_linear_root() {
        let root = brentq(|x| x - 10.3, 10.0, 11.0, 1e-12, 100).unwrap();
        assert!((root - 10.3).abs() < 1e-10, "got {root}");
    }

    #[test]
    fn brent_cubic_root() {
        let f = |x: f64| x * x * x - 2.0 * x - 5.0;
        // Known root of Wallis' cubic: 2.0945514815...
        let root = brentq(f, 2.0, 3.0, 1e-12, 100).unwrap();
        assert!((root - 2.094_551_481_5).abs() < 1e-9, "got {root}");
    }

    #[test]
    fn brent_endpoint_root() {
        assert_eq!(brentq(|x| x, 0.0, 1.0, 1e-12, 100).unwrap(), 0.0);
    }

    #[test]
    fn brent_rejects_unbracketed() {
        let err = brentq(|x| x * x + 1.0, -1.0, 1.0, 1e-12, 100).unwrap_err();
        assert_eq!(err, SearchError::RootNotBracketed);
    }

    #[test]
    fn brent_steep_function() {
        let f = |x: f64| (x - 0.123_456).exp() - 1.0;
        let root = brentq(f, -2.0, 2.0, 1e-13, 100).unwrap();
        assert!((root - 0.123_456).abs() < 1e-10, "got {root}");
    }
}
