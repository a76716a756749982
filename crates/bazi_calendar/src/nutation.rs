//! Nutation in longitude, IAU 2000B (77 lunisolar terms).
//!
//! Only Δψ is needed to turn a mean ecliptic longitude into an apparent
//! one. Coefficients are IERS Conventions 2010, tables 5.2e and 5.3b.

use std::f64::consts::TAU;

const ARCSEC_TO_RAD: f64 = TAU / 1_296_000.0;

/// Units of the Δψ amplitudes, arcseconds (0.1 μas).
const AMPLITUDE_UNIT_ARCSEC: f64 = 1e-7;

/// Fixed offset standing in for the planetary terms, arcseconds.
const DPSI_OFFSET_ARCSEC: f64 = -0.000_135;

/// Delaunay arguments `[l, l', F, D, Ω]` in radians at `t` Julian
/// centuries (TT) since J2000.0.
pub fn delaunay_arguments(t: f64) -> [f64; 5] {
    let poly =
        |c: [f64; 5]| (c[0] + t * (c[1] + t * (c[2] + t * (c[3] + t * c[4])))) * ARCSEC_TO_RAD;
    [
        poly([485_868.249036, 1_717_915_923.2178, 31.8792, 0.051635, -0.000_244_70]),
        poly([1_287_104.79305, 129_596_581.0481, -0.5532, 0.000136, -0.000_011_49]),
        poly([335_779.526232, 1_739_527_262.8478, -12.7512, -0.001037, 0.000_004_17]),
        poly([1_072_260.70369, 1_602_961_601.2090, -6.3706, 0.006593, -0.000_031_69]),
        poly([450_160.398036, -6_962_890.5431, 7.4722, 0.007702, -0.000_059_39]),
    ]
}

/// `(multipliers of [l, l', F, D, Ω], S, S')`: Δψ += (S + S'·t)·sin(arg).
#[rustfmt::skip]
static DPSI_TERMS: [([i8; 5], f64, f64); 77] = [
    ([ 0,  0,  0,  0,  1],  -172064161.0, -174666.0),
    ([ 0,  0,  2, -2,  2],   -13170906.0,   -1675.0),
    ([ 0,  0,  2,  0,  2],    -2276413.0,    -234.0),
    ([ 0,  0,  0,  0,  2],     2074554.0,     207.0),
    ([ 0,  1,  0,  0,  0],     1475877.0,   -3633.0),
    ([ 0,  1,  2, -2,  2],     -516821.0,    1226.0),
    ([ 1,  0,  0,  0,  0],      711159.0,      73.0),
    ([ 0,  0,  2,  0,  1],     -387298.0,    -367.0),
    ([ 1,  0,  2,  0,  2],     -301461.0,     -36.0),
    ([ 0, -1,  2, -2,  2],      215829.0,    -494.0),
    ([ 0,  0,  2, -2,  1],      128227.0,     137.0),
    ([-1,  0,  2,  0,  2],      123457.0,      11.0),
    ([-1,  0,  0,  2,  0],      156994.0,      10.0),
    ([ 1,  0,  0,  0,  1],       63110.0,      63.0),
    ([-1,  0,  0,  0,  1],      -57976.0,     -63.0),
    ([-1,  0,  2,  2,  2],      -59641.0,     -11.0),
    ([ 1,  0,  2,  0,  1],      -51613.0,     -42.0),
    ([-2,  0,  2,  0,  1],       45893.0,      50.0),
    ([ 0,  0,  0,  2,  0],       63384.0,      11.0),
    ([ 0,  0,  2,  2,  2],      -38571.0,      -1.0),
    ([ 0, -2,  2, -2,  2],       32481.0,       0.0),
    ([-2,  0,  0,  2,  0],      -47722.0,       0.0),
    ([ 2,  0,  2,  0,  2],      -31046.0,      -1.0),
    ([ 1,  0,  2, -2,  2],       28593.0,       0.0),
    ([-1,  0,  2,  0,  1],       20441.0,      21.0),
    ([ 2,  0,  0,  0,  0],       29243.0,       0.0),
    ([ 0,  0,  2,  0,  0],       25887.0,       0.0),
    ([ 0,  1,  0,  0,  1],      -14053.0,     -25.0),
    ([-1,  0,  0,  2,  1],       15164.0,      10.0),
    ([ 0,  2,  2, -2,  2],      -15794.0,      72.0),
    ([ 0,  0, -2,  2,  0],       21783.0,       0.0),
    ([ 1,  0,  0, -2,  1],      -12873.0,     -10.0),
    ([ 0, -1,  0,  0,  1],      -12654.0,      11.0),
    ([-1,  0,  2,  2,  1],      -10204.0,       0.0),
    ([ 0,  2,  0,  0,  0],       16707.0,     -85.0),
    ([ 1,  0,  2,  2,  2],       -7691.0,       0.0),
    ([-2,  0,  2,  0,  0],      -11024.0,       0.0),
    ([ 0,  1,  2,  0,  2],        7566.0,     -21.0),
    ([ 0,  0,  2,  2,  1],       -6637.0,     -11.0),
    ([ 0, -1,  2,  0,  2],       -7141.0,      21.0),
    ([ 0,  0,  0,  2,  1],       -6302.0,     -11.0),
    ([ 1,  0,  2, -2,  1],        5800.0,      10.0),
    ([ 2,  0,  2, -2,  2],        6443.0,       0.0),
    ([-2,  0,  0,  2,  1],       -5774.0,     -11.0),
    ([ 2,  0,  2,  0,  1],       -5350.0,       0.0),
    ([ 0, -1,  2, -2,  1],       -4752.0,     -11.0),
    ([ 0,  0,  0, -2,  1],       -4940.0,     -11.0),
    ([-1, -1,  0,  2,  0],        7350.0,       0.0),
    ([ 2,  0,  0, -2,  1],       -4803.0,     -11.0),
    ([ 1,  0,  0,  2,  0],       -7677.0,       0.0),
    ([ 0,  1,  2, -2,  1],        5417.0,       0.0),
    ([ 1, -1,  0,  0,  0],        6624.0,       0.0),
    ([-2,  0,  2,  0,  2],       -5433.0,       0.0),
    ([ 3,  0,  2,  0,  2],       -4632.0,       0.0),
    ([ 0, -1,  0,  2,  0],        6106.0,       0.0),
    ([ 1, -1,  2,  0,  2],       -3593.0,       0.0),
    ([ 0,  0,  0,  1,  0],       -4766.0,       0.0),
    ([-1, -1,  2,  2,  2],       -4095.0,       0.0),
    ([-1,  0,  2,  0,  0],        4229.0,       0.0),
    ([ 0, -1,  2,  2,  2],       -3372.0,       0.0),
    ([ 2,  0,  0,  0,  1],       -3353.0,       0.0),
    ([ 1,  0,  2,  0,  0],       -3523.0,       0.0),
    ([ 1,  1,  0,  0,  0],       -3613.0,       0.0),
    ([-1,  0,  2, -2,  1],        3522.0,       0.0),
    ([ 2,  0,  0,  0, -1],        3312.0,       0.0),
    ([ 0,  0, -2,  2,  1],       -3142.0,       0.0),
    ([ 0,  1,  0,  0, -1],       -2927.0,       0.0),
    ([ 0,  1,  2,  0,  1],       -2887.0,       0.0),
    ([ 0, -1,  2,  0,  1],        2451.0,       0.0),
    ([ 2,  0, -2,  0,  0],       -2790.0,       0.0),
    ([-1,  0,  0,  2, -1],        2145.0,       0.0),
    ([ 0,  0,  2, -2,  0],        2816.0,       0.0),
    ([ 0,  1,  0, -2,  0],        2700.0,       0.0),
    ([ 1,  0,  0, -1,  0],       -2330.0,       0.0),
    ([ 0,  0,  0,  0,  2],        2283.0,       0.0),
    ([ 1,  0, -2,  0,  0],       -2321.0,       0.0),
    ([-1,  0,  0,  1,  1],       -2049.0,       0.0),
];

/// Nutation in longitude Δψ, arcseconds, at `t` Julian centuries (TT)
/// since J2000.0.
pub fn nutation_in_longitude(t: f64) -> f64 {
    let args = delaunay_arguments(t);
    let sum: f64 = DPSI_TERMS
        .iter()
        .map(|(n, s, s_rate)| {
            let arg: f64 = n.iter().zip(args).map(|(&k, a)| f64::from(k) * a).sum();
            (s + s_rate * t) * arg.sin()
        })
        .sum();
    sum * AMPLITUDE_UNIT_ARCSEC + DPSI_OFFSET_ARCSEC
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10.0 TD: Δψ = -3.788″
        let t = (2_446_895.5 - 2_451_545.0) / 36_525.0;
        let dpsi = nutation_in_longitude(t);
        assert!((dpsi - (-3.788)).abs() < 0.05, "Δψ = {dpsi}");
    }

    #[test]
    fn bounded_over_supported_range() {
        for century in -4..=4 {
            let dpsi = nutation_in_longitude(century as f64);
            assert!(dpsi.abs() < 20.0, "Δψ = {dpsi} at T = {century}");
        }
    }

    #[test]
    fn dominated_by_node_term() {
        // Ω = 90° gives the -17.2″ node term its full weight.
        let t = (90.0 * 3600.0 - 450_160.398036) / -6_962_890.5431;
        let dpsi = nutation_in_longitude(t);
        assert!((-19.6..-14.8).contains(&dpsi), "Δψ = {dpsi}");
    }
}
