use std::f64::consts::PI;

/// Helper function to convert degrees to radians
pub fn degrees(deg: f64) -> f64 {
    PI * (deg / 180.0)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_degrees() {
        assert!((degrees(180.0) - PI).abs() < 1e-12);
        assert!((degrees(90.0) - PI / 2.0).abs() < 1e-12);
        assert_eq!(degrees(0.0), 0.0);
        assert!(degrees(-45.0) < 0.0);
    }
}
