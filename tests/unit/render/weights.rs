//! Tests for depth-to-weight strategies

#[cfg(test)]
mod tests {
    use skypattern::render::weights::{DepthWeight, LinearFalloff, SineFalloff};
    use std::f64::consts::FRAC_PI_2;

    // Tests the default sine falloff starts at full weight and dips near 500π/2
    #[test]
    fn test_sine_falloff_default() {
        let falloff = SineFalloff::default();

        assert!((falloff.weight(0) - 1.0).abs() < f64::EPSILON);

        let trough = (500.0 * FRAC_PI_2).round() as i64;
        assert!(falloff.weight(trough) < 1e-3);
        assert!(falloff.weight(trough * 2) > 0.9);
    }

    // Tests the sine falloff overshoots above 1 past half a period, left to the renderer to clamp
    #[test]
    fn test_sine_falloff_overshoots() {
        let Ok(falloff) = SineFalloff::new(10.0) else {
            unreachable!("valid period")
        };

        assert!(falloff.weight(47) > 1.9);
    }

    // Tests the linear falloff reaches zero at its span and goes negative beyond it
    #[test]
    fn test_linear_falloff() {
        let Ok(falloff) = LinearFalloff::new(16.0) else {
            unreachable!("valid span")
        };

        assert!((falloff.weight(0) - 1.0).abs() < f64::EPSILON);
        assert!((falloff.weight(8) - 0.5).abs() < f64::EPSILON);
        assert!(falloff.weight(16).abs() < f64::EPSILON);
        assert!((falloff.weight(32) + 1.0).abs() < f64::EPSILON);
    }

    // Tests non-positive and non-finite scales are rejected
    #[test]
    fn test_invalid_scales_rejected() {
        for scale in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(SineFalloff::new(scale).is_err());
            assert!(LinearFalloff::new(scale).is_err());
        }
    }

    // Tests plain closures act as weight strategies
    #[test]
    fn test_closure_strategy() {
        let halve = |depth: i64| depth as f64 / 2.0;

        assert!((halve.weight(3) - 1.5).abs() < f64::EPSILON);
    }
}
