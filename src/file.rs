//! In-memory and file-system entry points for the BMP codec.

use alloc::vec::Vec;

use crate::bitmap::Bitmap;
use crate::decode::DecodeRequest;
use crate::encode::EncodeRequest;
use crate::error::Result;

impl Bitmap {
    /// Decode BMP bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        DecodeRequest::new(data).decode()
    }

    /// Encode as a 24-bit uncompressed BMP file image.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        EncodeRequest::new().encode(self)
    }
}

#[cfg(feature = "std")]
mod fs {
    use std::path::Path;

    use log::debug;

    use super::*;

    impl Bitmap {
        /// Read and decode a BMP file.
        pub fn open(path: impl AsRef<Path>) -> Result<Self> {
            let path = path.as_ref();
            let data = std::fs::read(path)?;
            let bitmap = Self::from_bytes(&data)?;
            debug!("loaded {} from {}", bitmap, path.display());
            Ok(bitmap)
        }

        /// Replace this bitmap with the contents of a BMP file.
        ///
        /// On error `self` is left as it was.
        pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
            *self = Self::open(path)?;
            Ok(())
        }

        /// Encode and write to `path`, creating or truncating the file.
        pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
            let path = path.as_ref();
            let data = self.to_bytes()?;
            std::fs::write(path, &data)?;
            debug!("saved {} to {} ({} bytes)", self, path.display(), data.len());
            Ok(())
        }
    }
}
