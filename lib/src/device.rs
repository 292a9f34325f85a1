use crate::consts::*;
use crate::errors::*;
use crate::util::*;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

make_log_macro!(debug, "device");

/// A physical backlight device, addressed by the directory that holds its
/// `brightness` and `max_brightness` control files.
pub struct Device {
    brightness_file: PathBuf,
    max_brightness_file: PathBuf,
}

impl Device {
    pub fn new(device_path: impl AsRef<Path>) -> Self {
        let device_path = device_path.as_ref();
        Self {
            brightness_file: device_path.join(FILE_BRIGHTNESS),
            max_brightness_file: device_path.join(FILE_MAX_BRIGHTNESS),
        }
    }

    /// Current raw brightness of the device.
    pub fn brightness(&self) -> Result<u32> {
        self.read_raw(&self.brightness_file)
    }

    /// Maximum raw brightness the device accepts.
    pub fn max_brightness(&self) -> Result<u32> {
        self.read_raw(&self.max_brightness_file)
    }

    fn read_raw(&self, file: &Path) -> Result<u32> {
        let content =
            read_file(file).error(format!("Failed to read {}", file.display()))?;
        let value = leading_u32(&content)
            .error(format!("Failed to parse value from {}", file.display()))?;
        debug!("{} -> {}", file.display(), value);
        Ok(value)
    }

    /// Write a raw brightness value to the device.
    pub fn set_brightness(&self, raw: u32) -> Result<()> {
        debug!("writing {} to {}", raw, self.brightness_file.display());
        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.brightness_file)
            .error("Could not open brightness file to write")?;
        let mut payload = raw.to_string().into_bytes();
        // the device interface takes a NUL-terminated integer string
        payload.push(0);
        file.write_all(&payload)?;
        Ok(())
    }
}
