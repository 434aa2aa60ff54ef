//! Orbital geometry for the orbit diagram.
//!
//! Generates the ellipse polyline from physical orbital elements and the
//! current phase angle, and derives the perihelion/aphelion, equinox, and
//! solstice marker axes. All functions here are pure; the whole geometry is
//! regenerated on every recompute.

use nalgebra::Vector2;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Fixed shape of a Keplerian orbit. Distances share a unit (gigameters for
/// the Earth defaults); the longitude of periapsis is in radians.
#[derive(Clone, Copy, Debug)]
pub struct OrbitalParameters {
    pub aphelion: f64,
    pub perihelion: f64,
    pub longitude_of_periapsis: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum OrbitError {
    #[error("degenerate orbital parameters: aphelion={aphelion}, perihelion={perihelion}")]
    Degenerate { aphelion: f64, perihelion: f64 },
}

impl OrbitalParameters {
    /// Rejects aphelion < perihelion and non-positive distances, which would
    /// otherwise feed NaN or self-intersecting geometry to the plot.
    pub fn new(
        aphelion: f64,
        perihelion: f64,
        longitude_of_periapsis: f64,
    ) -> Result<Self, OrbitError> {
        if !(perihelion > 0.0 && aphelion >= perihelion) {
            return Err(OrbitError::Degenerate {
                aphelion,
                perihelion,
            });
        }
        Ok(Self {
            aphelion,
            perihelion,
            longitude_of_periapsis,
        })
    }

    pub fn semi_major_axis(&self) -> f64 {
        (self.aphelion + self.perihelion) / 2.0
    }

    pub fn eccentricity(&self) -> f64 {
        (self.aphelion - self.perihelion) / (self.aphelion + self.perihelion)
    }
}

/// Orbit polyline around the focus at the origin, where the sun sits.
///
/// Polar conic form: r(th) = a(1-e^2) / (1 + e*cos(th - rot)) with
/// rot = phase + longitude of periapsis, sampled at `n` equally spaced
/// angles in [0, 2pi). The focus-centered form keeps perihelion and
/// aphelion at the physically correct distances from the sun.
pub fn ellipse_points(params: &OrbitalParameters, phase: f64, n: usize) -> Vec<[f64; 2]> {
    let a = params.semi_major_axis();
    let e = params.eccentricity();
    let semi_latus = a * (1.0 - e * e);
    let rot = phase + params.longitude_of_periapsis;
    (0..n)
        .map(|i| {
            let th = TAU * i as f64 / n as f64;
            let r = semi_latus / (1.0 + e * (th - rot).cos());
            [r * th.cos(), r * th.sin()]
        })
        .collect()
}

/// Diametrical axis through the sun with a text label at each end. Label
/// anchors sit exactly on the endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerSegment {
    /// Endpoint at +arm along the axis direction.
    pub plus: [f64; 2],
    /// Endpoint at -arm along the axis direction.
    pub minus: [f64; 2],
    pub plus_label: &'static str,
    pub minus_label: &'static str,
}

fn axis(dir: f64, arm: f64, plus_label: &'static str, minus_label: &'static str) -> MarkerSegment {
    let u = Vector2::new(dir.cos(), dir.sin());
    MarkerSegment {
        plus: [arm * u.x, arm * u.y],
        minus: [-arm * u.x, -arm * u.y],
        plus_label,
        minus_label,
    }
}

/// The three cardinal axes for the current phase angle: perihelion/aphelion
/// at phase + longitude of periapsis, equinoxes at phase, solstices at
/// phase + pi/2. The +endpoint carries the perihelion/autumnal/northern
/// labels; swapping ends would mislabel the diagram.
pub fn marker_segments(params: &OrbitalParameters, phase: f64, arm: f64) -> [MarkerSegment; 3] {
    [
        axis(
            phase + params.longitude_of_periapsis,
            arm,
            "Perihelion",
            "Aphelion",
        ),
        axis(phase, arm, "Autumnal equinox", "Vernal equinox"),
        axis(
            phase + FRAC_PI_2,
            arm,
            "Northern solstice",
            "Southern solstice",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        EARTH_APHELION_GM, EARTH_LONGITUDE_OF_PERIAPSIS_DEG, EARTH_PERIHELION_GM,
    };
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    fn earth() -> OrbitalParameters {
        OrbitalParameters::new(
            EARTH_APHELION_GM,
            EARTH_PERIHELION_GM,
            EARTH_LONGITUDE_OF_PERIAPSIS_DEG.to_radians(),
        )
        .unwrap()
    }

    #[test]
    fn rejects_degenerate_parameters() {
        assert!(OrbitalParameters::new(1.0, 2.0, 0.0).is_err());
        assert!(OrbitalParameters::new(2.0, 0.0, 0.0).is_err());
        assert!(OrbitalParameters::new(2.0, -1.0, 0.0).is_err());
        assert!(OrbitalParameters::new(2.0, 2.0, 0.0).is_ok());
    }

    #[test]
    fn ellipse_has_requested_point_count() {
        let params = earth();
        assert_eq!(ellipse_points(&params, 0.0, 60).len(), 60);
        assert_eq!(ellipse_points(&params, 1.3, 7).len(), 7);
    }

    #[test]
    fn ellipse_radii_match_conic_formula() {
        let params = earth();
        let phase = 0.83;
        let a = params.semi_major_axis();
        let e = params.eccentricity();
        let rot = phase + params.longitude_of_periapsis;
        for (i, p) in ellipse_points(&params, phase, 60).iter().enumerate() {
            let th = TAU * i as f64 / 60.0;
            let expected = a * (1.0 - e * e) / (1.0 + e * (th - rot).cos());
            let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
            assert!((r - expected).abs() < EPS, "vertex {i}: {r} vs {expected}");
        }
    }

    #[test]
    fn focal_extremes_reproduce_perihelion_and_aphelion() {
        let params = earth();
        // Phase chosen so the apsidal line falls on sampled angles 0 and pi.
        let phase = -params.longitude_of_periapsis;
        let radii: Vec<f64> = ellipse_points(&params, phase, 60)
            .iter()
            .map(|p| (p[0] * p[0] + p[1] * p[1]).sqrt())
            .collect();
        let min = radii.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = radii.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!((min - params.perihelion).abs() < EPS);
        assert!((max - params.aphelion).abs() < EPS);
        assert!((radii[0] - params.perihelion).abs() < EPS);
        assert!((radii[30] - params.aphelion).abs() < EPS);
    }

    #[test]
    fn geometry_is_idempotent() {
        let params = earth();
        assert_eq!(
            ellipse_points(&params, 2.1, 60),
            ellipse_points(&params, 2.1, 60)
        );
        assert_eq!(
            marker_segments(&params, 2.1, 170.0),
            marker_segments(&params, 2.1, 170.0)
        );
    }

    #[test]
    fn markers_are_periodic_in_phase() {
        let params = earth();
        let a = marker_segments(&params, 0.37, 170.0);
        let b = marker_segments(&params, 0.37 + TAU, 170.0);
        for (s, t) in a.iter().zip(b.iter()) {
            for k in 0..2 {
                assert!((s.plus[k] - t.plus[k]).abs() < 1e-6);
                assert!((s.minus[k] - t.minus[k]).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn equinox_and_solstice_axes_are_orthogonal() {
        let params = earth();
        for phase in [0.0, 0.9, -4.2, 123.456] {
            let [_, equinox, solstice] = marker_segments(&params, phase, 170.0);
            let e = [
                equinox.plus[0] - equinox.minus[0],
                equinox.plus[1] - equinox.minus[1],
            ];
            let s = [
                solstice.plus[0] - solstice.minus[0],
                solstice.plus[1] - solstice.minus[1],
            ];
            let dot = e[0] * s[0] + e[1] * s[1];
            assert!(dot.abs() < 1e-6, "phase {phase}: dot {dot}");
        }
    }

    #[test]
    fn perihelion_marker_points_along_longitude_of_periapsis() {
        let params = earth();
        let lp = params.longitude_of_periapsis;
        let [apsides, _, _] = marker_segments(&params, 0.0, 170.0);
        assert_eq!(apsides.plus_label, "Perihelion");
        assert_eq!(apsides.minus_label, "Aphelion");
        let plus_dir = apsides.plus[1].atan2(apsides.plus[0]);
        let minus_dir = apsides.minus[1].atan2(apsides.minus[0]);
        assert!((plus_dir - lp).abs() < EPS);
        assert!((minus_dir - (lp - PI)).abs() < EPS);
    }
}
