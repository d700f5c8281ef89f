use crate::error::{BitmapError, Result};

/// Resource limits applied while decoding, before the pixel buffer is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the decoded pixel buffer, in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Limits that reject anything wider or taller than `max_side`.
    pub fn max_side(max_side: u64) -> Self {
        Self {
            max_width: Some(max_side),
            max_height: Some(max_side),
            ..Self::default()
        }
    }

    pub fn with_max_pixels(mut self, max_pixels: u64) -> Self {
        self.max_pixels = Some(max_pixels);
        self
    }

    pub fn with_max_memory_bytes(mut self, bytes: u64) -> Self {
        self.max_memory_bytes = Some(bytes);
        self
    }

    /// Check header dimensions and the buffer they would need.
    pub(crate) fn check(&self, width: u32, height: u32, buffer_bytes: u64) -> Result<()> {
        let over = |what: &str, value: u64, limit: Option<u64>| match limit {
            Some(max) if value > max => Err(BitmapError::LimitExceeded(alloc::format!(
                "{what} {value} exceeds limit {max}"
            ))),
            _ => Ok(()),
        };
        over("width", u64::from(width), self.max_width)?;
        over("height", u64::from(height), self.max_height)?;
        over(
            "pixel count",
            u64::from(width) * u64::from(height),
            self.max_pixels,
        )?;
        over("buffer bytes", buffer_bytes, self.max_memory_bytes)
    }
}
