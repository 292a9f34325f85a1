#![warn(clippy::match_same_arms)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::unnecessary_wraps)]

#[macro_use]
mod util;
mod consts;
mod curve;
mod device;
mod errors;

use std::path::Path;

pub use crate::consts::PERCENT_DOMAIN;
pub use crate::curve::BrightnessCurve;
pub use crate::device::Device;
pub use crate::errors::{LightError, Result};

make_log_macro!(debug, "light");

/// High-level brightness operations on a single backlight device.
pub struct Backlight {
    device: Device,
}

impl Backlight {
    pub fn new(device_path: impl AsRef<Path>) -> Self {
        Self {
            device: Device::new(device_path),
        }
    }

    /// Current raw brightness.
    pub fn brightness(&self) -> Result<u32> {
        self.device.brightness()
    }

    /// Maximum raw brightness of the device.
    pub fn max_brightness(&self) -> Result<u32> {
        self.device.max_brightness()
    }

    /// Move brightness by `delta` percentage points along the perceptual
    /// curve fitted over `[min_brightness, max_brightness]`, clamping the
    /// percentage to the domain. Returns the raw value written, which is
    /// always within that range.
    pub fn adjust_percent(&self, delta: f64, min_brightness: u32) -> Result<u32> {
        let max_brightness = self.device.max_brightness()?;
        let current = self.device.brightness()?;
        let curve = BrightnessCurve::fit(PERCENT_DOMAIN, [min_brightness, max_brightness])?;

        // a device reading 0 sits below the curve; treat it as the lowest raw step
        let current = current.max(1);
        let percent = curve.raw_to_percent(current)?;
        let target = (percent + delta).clamp(PERCENT_DOMAIN[0], PERCENT_DOMAIN[1]);
        let raw = curve.percent_to_raw(target);
        debug!("{current} ({percent:.2}%) -> {raw} ({target:.2}%)");

        self.device.set_brightness(raw)?;
        Ok(raw)
    }
}
