//! Apparent geocentric ecliptic longitude of the Sun.
//!
//! Geometric longitude from the VSOP87 Earth series, reduced to the FK5
//! frame, then corrected for IAU 2000B nutation and annual aberration
//! (Meeus, *Astronomical Algorithms*, ch. 25 "higher accuracy").

use bazi_time::J2000_JD;

use crate::nutation::nutation_in_longitude;
use crate::vsop87::earth_heliocentric;

/// Julian centuries of TT since J2000.0.
pub fn jd_tt_to_centuries(jd_tt: f64) -> f64 {
    (jd_tt - J2000_JD) / 36_525.0
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Normalize an angle to [-180, 180) degrees.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r >= 180.0 { r - 360.0 } else { r }
}

/// Apparent solar longitude in degrees [0, 360) at a TT Julian Date.
pub fn apparent_solar_longitude(jd_tt: f64) -> f64 {
    let (l, b, r) = earth_heliocentric(jd_tt);
    let t = jd_tt_to_centuries(jd_tt);

    // Geocentric Sun is the heliocentric Earth reversed.
    let theta = l.to_degrees() + 180.0;
    let beta = -b;

    // VSOP87 dynamical ecliptic to FK5, in arcseconds.
    let lambda_p = (theta - 1.397 * t - 0.00031 * t * t).to_radians();
    let fk5 = -0.090_33 + 0.039_16 * (lambda_p.cos() + lambda_p.sin()) * beta.tan();

    let aberration = -20.4898 / r;
    normalize_360(theta + (fk5 + nutation_in_longitude(t) + aberration) / 3600.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_time::calendar_to_jd;

    #[test]
    fn meeus_example_25b() {
        // 1992 October 13.0 TD: apparent λ = 199°54'21.6" to 21.8"
        let jd = calendar_to_jd(1992, 10, 13.0);
        assert!((jd - 2_448_908.5).abs() < 1e-9);
        let lon = apparent_solar_longitude(jd);
        assert!((lon - 199.906_03).abs() < 3e-4, "λ = {lon}");
    }

    #[test]
    fn near_equinox_2000() {
        // March equinox 2000: 2000-03-20 07:35 UT
        let jd = calendar_to_jd(2000, 3, 20.0 + (7.0 + 35.0 / 60.0) / 24.0) + 64.0 / 86_400.0;
        let lon = normalize_to_pm180(apparent_solar_longitude(jd));
        // one minute of solar motion is about 0.0007°
        assert!(lon.abs() < 0.0007, "λ = {lon}");
    }

    #[test]
    fn pm180_wraps() {
        assert!((normalize_to_pm180(359.0) - (-1.0)).abs() < 1e-12);
        assert!((normalize_to_pm180(181.0) - (-179.0)).abs() < 1e-12);
        assert!((normalize_to_pm180(-10.0) - (-10.0)).abs() < 1e-12);
        assert!((normalize_to_pm180(720.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn advances_about_one_degree_per_day() {
        let jd = calendar_to_jd(2023, 2, 4.0);
        let step = normalize_to_pm180(apparent_solar_longitude(jd + 1.0) - apparent_solar_longitude(jd));
        assert!((1.00..1.03).contains(&step), "dλ = {step}");
    }
}
