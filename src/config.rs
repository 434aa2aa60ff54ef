//! Application configuration and Earth orbital constants.
//!
//! Defines AppConfig (time-authority endpoint, refresh interval, ellipse
//! resolution, marker sizing) and the fixed orbital elements used to build
//! the startup orbit.

/// Earth aphelion distance in gigameters.
pub const EARTH_APHELION_GM: f64 = 152.098_232;
/// Earth perihelion distance in gigameters.
pub const EARTH_PERIHELION_GM: f64 = 147.098_290;
/// Longitude of periapsis of Earth's orbit, degrees from the reference axis.
pub const EARTH_LONGITUDE_OF_PERIAPSIS_DEG: f64 = 102.947_19;

#[derive(Clone)]
pub struct AppConfig {
    /// Time-authority host passed to the SNTP client; a bare hostname uses
    /// the standard NTP port.
    pub ntp_server: String,
    /// Seconds between time-readout refreshes. Adjustable at runtime with
    /// the +/- keys, floored at 1 s.
    pub refresh_interval_s: f64,
    /// Number of vertices in the orbit ellipse polyline.
    pub ellipse_points: usize,
    /// Marker half-length as a multiple of the aphelion distance.
    pub marker_arm_scale: f64,
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ntp_server: "pool.ntp.org".to_string(),
            refresh_interval_s: 5.0,
            ellipse_points: 60,
            marker_arm_scale: 1.15,
            window_size: [800.0, 600.0],
        }
    }
}
