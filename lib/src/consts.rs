/// Filename for the device's maximum raw brightness (read-only)
pub const FILE_MAX_BRIGHTNESS: &str = "max_brightness";

/// Filename for the current raw brightness; also the write target
pub const FILE_BRIGHTNESS: &str = "brightness";

/// Percentage domain the brightness curve is fitted over
pub const PERCENT_DOMAIN: [f64; 2] = [0.0, 100.0];
