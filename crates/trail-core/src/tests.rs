//! Unit tests for trail-core primitives.

#[cfg(test)]
mod point {
    use crate::Waypoint;

    #[test]
    fn distance_axis_aligned() {
        let a = Waypoint::new(0.0, 0.0, 0.0);
        let b = Waypoint::new(10.0, 0.0, 0.0);
        assert_eq!(a.distance(b), 10.0);
        assert_eq!(b.distance(a), 10.0);
    }

    #[test]
    fn distance_zero_for_same_point() {
        let p = Waypoint::new(3.2, -1.5, 8.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn length_is_origin_distance() {
        let p = Waypoint::new(3.0, 4.0, 0.0);
        assert!((p.length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Waypoint::new(0.0, 0.0, 0.0);
        let b = Waypoint::new(10.0, 2.0, -4.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert!((mid.x - 5.0).abs() < 1e-6);
        assert!((mid.y - 1.0).abs() < 1e-6);
        assert!((mid.z + 2.0).abs() < 1e-6);
    }

    #[test]
    fn with_y_keeps_horizontal() {
        let p = Waypoint::new(1.0, 2.0, 3.0).with_y(9.0);
        assert_eq!(p, Waypoint::new(1.0, 9.0, 3.0));
    }
}

#[cfg(test)]
mod handle {
    use crate::MarkerHandle;

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(MarkerHandle::INVALID.0, u64::MAX);
        assert_eq!(MarkerHandle::default(), MarkerHandle::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(MarkerHandle(7).to_string(), "MarkerHandle(7)");
    }
}

#[cfg(test)]
mod config {
    use crate::{TrailConfig, TrailError};

    #[test]
    fn defaults_are_valid() {
        let cfg = TrailConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.particle_spacing, 0.5);
        assert_eq!(cfg.poll_interval_secs, 0.3);
        assert_eq!(cfg.reach_threshold, 1.5);
        assert_eq!(cfg.vertical_offset, 0.5);
    }

    #[test]
    fn zero_spacing_rejected() {
        let cfg = TrailConfig { particle_spacing: 0.0, ..TrailConfig::default() };
        assert!(matches!(cfg.validate(), Err(TrailError::InvalidSpacing(_))));
    }

    #[test]
    fn negative_spacing_rejected() {
        let cfg = TrailConfig { particle_spacing: -0.5, ..TrailConfig::default() };
        assert!(matches!(cfg.validate(), Err(TrailError::InvalidSpacing(_))));
    }

    #[test]
    fn nan_spacing_rejected() {
        let cfg = TrailConfig { particle_spacing: f32::NAN, ..TrailConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_interval_rejected() {
        let cfg = TrailConfig { poll_interval_secs: 0.0, ..TrailConfig::default() };
        assert!(matches!(cfg.validate(), Err(TrailError::InvalidPollInterval(_))));
    }
}
