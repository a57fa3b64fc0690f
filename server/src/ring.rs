//! Synthetic burn perimeter: a jittered circle whose radius grows with elapsed time.
//!
//! There is no spread model behind this. Each point sits at a random fraction
//! (0.8 to 1.2) of the nominal radius so the ring reads as an irregular burn
//! scar instead of a perfect circle.

use rand::Rng;
use std::f64::consts::TAU;

use crate::geo::{km_to_deg_lat, km_to_deg_lon};
use crate::models::GeoPoint;

/// Perimeter expansion rate.
pub const RADIUS_KM_PER_HOUR: f64 = 0.5;

/// Smallest nominal radius, so zero or negative hours still draw a ring.
pub const MIN_RADIUS_KM: f64 = 0.1;

pub const JITTER_MIN: f64 = 0.8;
pub const JITTER_MAX: f64 = 1.2;

/// Supplies the per-point radius multiplier.
pub trait JitterSource {
    /// Next multiplier, expected within `[JITTER_MIN, JITTER_MAX]`.
    fn next_factor(&mut self) -> f64;
}

/// Uniform multipliers drawn from any `rand` generator.
pub struct UniformJitter<R> {
    rng: R,
}

impl<R: Rng> UniformJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> JitterSource for UniformJitter<R> {
    fn next_factor(&mut self) -> f64 {
        self.rng.random_range(JITTER_MIN..=JITTER_MAX)
    }
}

pub fn nominal_radius_km(hours: i64) -> f64 {
    (RADIUS_KM_PER_HOUR * hours as f64).max(MIN_RADIUS_KM)
}

/// Samples `point_count` points around `center`, in increasing angle order
/// starting due east.
///
/// The ring is left open: the last point is not a copy of the first.
/// Points near a pole or the antimeridian are not wrapped or clamped.
pub fn generate_ring<J>(center: GeoPoint, hours: i64, point_count: usize, jitter: &mut J) -> Vec<GeoPoint>
where
    J: JitterSource + ?Sized,
{
    let radius_km = nominal_radius_km(hours);

    (0..point_count)
        .map(|i| {
            let angle = TAU * i as f64 / point_count as f64;
            let r = jitter.next_factor() * radius_km;
            let dlat = km_to_deg_lat(r) * angle.sin();
            let dlon = km_to_deg_lon(r, center.lat) * angle.cos();
            GeoPoint::new(round6(center.lat + dlat), round6(center.lon + dlon))
        })
        .collect()
}

fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
        let dphi = (lat2 - lat1).to_radians();
        let dlambda = (lon2 - lon1).to_radians();
        let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
        2.0 * 6371.0 * a.sqrt().asin()
    }

    /// Replays a fixed list of factors, cycling when exhausted.
    struct Recorded {
        factors: Vec<f64>,
        next: usize,
    }

    impl Recorded {
        fn new(factors: Vec<f64>) -> Self {
            Self { factors, next: 0 }
        }
    }

    impl JitterSource for Recorded {
        fn next_factor(&mut self) -> f64 {
            let factor = self.factors[self.next % self.factors.len()];
            self.next += 1;
            factor
        }
    }

    fn seeded(seed: u64) -> UniformJitter<StdRng> {
        UniformJitter::new(StdRng::seed_from_u64(seed))
    }

    // =========================================================================
    // nominal_radius_km
    // =========================================================================

    #[test]
    fn test_nominal_radius_floor() {
        assert_eq!(nominal_radius_km(0), MIN_RADIUS_KM);
        assert_eq!(nominal_radius_km(-5), MIN_RADIUS_KM);
        assert_eq!(nominal_radius_km(1), 0.5);
        assert_eq!(nominal_radius_km(10), 5.0);
    }

    #[test]
    fn test_nominal_radius_monotonic() {
        let mut previous = nominal_radius_km(-10);
        for hours in -9..200 {
            let radius = nominal_radius_km(hours);
            assert!(radius >= previous, "radius shrank at hours={}", hours);
            previous = radius;
        }
    }

    // =========================================================================
    // generate_ring
    // =========================================================================

    #[test]
    fn test_generate_ring_exact_with_recorded_jitter() {
        let mut jitter = Recorded::new(vec![1.0]);
        // hours=2 -> 1 km radius
        let ring = generate_ring(GeoPoint::new(0.0, 0.0), 2, 4, &mut jitter);

        assert_eq!(
            ring,
            vec![
                GeoPoint::new(0.0, 0.008983),
                GeoPoint::new(0.009009, 0.0),
                GeoPoint::new(0.0, -0.008983),
                GeoPoint::new(-0.009009, 0.0),
            ]
        );
    }

    #[test]
    fn test_generate_ring_applies_each_factor_in_order() {
        let mut jitter = Recorded::new(vec![0.8, 1.2]);
        let ring = generate_ring(GeoPoint::new(0.0, 0.0), 2, 4, &mut jitter);

        // East point uses 0.8, north point uses 1.2
        assert_eq!(ring[0].lon, 0.007186);
        assert_eq!(ring[1].lat, 0.010811);
        assert_eq!(ring[2].lon, -0.007186);
        assert_eq!(ring[3].lat, -0.010811);
    }

    #[test]
    fn test_generate_ring_point_count() {
        let mut jitter = seeded(7);
        for count in [0, 1, 3, 80, 360] {
            let ring = generate_ring(GeoPoint::new(37.7749, -122.4194), 1, count, &mut jitter);
            assert_eq!(ring.len(), count);
        }
    }

    #[test]
    fn test_generate_ring_not_closed() {
        let mut jitter = Recorded::new(vec![1.0]);
        let ring = generate_ring(GeoPoint::new(10.0, 10.0), 4, 80, &mut jitter);
        assert_ne!(ring.first(), ring.last());
    }

    #[test]
    fn test_generate_ring_rounds_to_six_decimals() {
        let mut jitter = seeded(42);
        let ring = generate_ring(GeoPoint::new(37.7749, -122.4194), 3, 80, &mut jitter);
        for p in ring {
            assert!(((p.lat * 1e6).round() - p.lat * 1e6).abs() < 1e-6);
            assert!(((p.lon * 1e6).round() - p.lon * 1e6).abs() < 1e-6);
        }
    }

    #[test]
    fn test_generate_ring_same_seed_same_ring() {
        let center = GeoPoint::new(-33.86, 151.21);
        let a = generate_ring(center, 5, 80, &mut seeded(1234));
        let b = generate_ring(center, 5, 80, &mut seeded(1234));
        let c = generate_ring(center, 5, 80, &mut seeded(4321));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_generate_ring_distance_within_jitter_band() {
        let delta = 0.02;
        let mut jitter = seeded(99);
        for &(lat, lon) in &[(0.0, 0.0), (37.7749, -122.4194), (-45.0, 170.0), (65.0, 25.0)] {
            for hours in [0, 1, 6, 24] {
                let radius = nominal_radius_km(hours);
                let ring = generate_ring(GeoPoint::new(lat, lon), hours, 80, &mut jitter);
                for p in ring {
                    let d = haversine_km(lat, lon, p.lat, p.lon);
                    assert!(
                        d >= JITTER_MIN * radius * (1.0 - delta) && d <= JITTER_MAX * radius * (1.0 + delta),
                        "({}, {}) hours={} point {:?} at {} km",
                        lat,
                        lon,
                        hours,
                        p,
                        d
                    );
                }
            }
        }
    }

    #[test]
    fn test_generate_ring_zero_hours_stays_in_bounds() {
        let mut jitter = seeded(3);
        let ring = generate_ring(GeoPoint::new(0.0, 0.0), 0, 80, &mut jitter);
        assert!(ring.iter().all(GeoPoint::is_valid));
        assert!(ring.iter().all(|p| p.lat.abs() < 0.0011 && p.lon.abs() < 0.0011));
    }

    #[test]
    fn test_generate_ring_at_pole_stays_finite() {
        let mut jitter = seeded(5);
        let ring = generate_ring(GeoPoint::new(90.0, 0.0), 1, 80, &mut jitter);
        assert!(ring.iter().all(|p| p.lat.is_finite() && p.lon.is_finite()));
    }

    #[test]
    fn test_uniform_jitter_range() {
        let mut jitter = seeded(11);
        for _ in 0..10_000 {
            let factor = jitter.next_factor();
            assert!((JITTER_MIN..=JITTER_MAX).contains(&factor));
        }
    }
}
