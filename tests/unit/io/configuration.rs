//! Tests for default parameters and limits

#[cfg(test)]
mod tests {
    use skypattern::io::configuration::{
        DEFAULT_COLOR_A, DEFAULT_COLOR_B, DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_SEED,
        DEFAULT_SINE_PERIOD, DEFAULT_WIDTH, MAX_GRID_DIMENSION, PROGRESS_BAR_WIDTH,
    };

    // Tests the stock sky parameters
    #[test]
    fn test_pattern_defaults() {
        assert_eq!(DEFAULT_SEED, 0);
        assert_eq!((DEFAULT_WIDTH, DEFAULT_HEIGHT), (1024, 1024));
        assert_eq!(DEFAULT_COLOR_A, [70, 140, 200, 255]);
        assert_eq!(DEFAULT_COLOR_B, [230, 245, 255, 255]);
        assert!((DEFAULT_SINE_PERIOD - 500.0).abs() < f64::EPSILON);
    }

    // Tests the default size fits under the grid limit
    #[test]
    fn test_limits() {
        assert_eq!(MAX_GRID_DIMENSION, 10_000);
        assert!(DEFAULT_WIDTH <= MAX_GRID_DIMENSION);
        assert!(DEFAULT_HEIGHT <= MAX_GRID_DIMENSION);
        assert!(u32::try_from(MAX_GRID_DIMENSION).is_ok());
    }

    // Tests output settings
    #[test]
    fn test_output_settings() {
        assert_eq!(DEFAULT_OUTPUT, "image.png");
        assert!(PROGRESS_BAR_WIDTH > 0);
    }
}
