//! PNG export types

use std::fs;
use std::path::{Path, PathBuf};

use crate::digit_pipeline::common::error::{ConversionError, Result};

/// File name offered for download
pub const ARTIFACT_FILE_NAME: &str = "digit_28x28.png";

/// Media type declared for the download
pub const ARTIFACT_MEDIA_TYPE: &str = "image/png";

/// PNG compression levels; all of them are lossless
#[derive(Debug, Clone, Copy, Default)]
pub enum PngCompression {
    /// Fastest encode, larger file
    Fast,
    /// Balanced (default)
    #[default]
    Default,
    /// Smallest file, slower encode
    Best,
}

/// Encoded digit ready to hand to a download or export collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedArtifact {
    pub file_name: &'static str,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

impl EncodedArtifact {
    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            file_name: ARTIFACT_FILE_NAME,
            media_type: ARTIFACT_MEDIA_TYPE,
            bytes,
        }
    }

    /// Writes the artifact into `dir` under its file name and returns the path.
    pub fn write_to<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| {
            ConversionError::OutputWriteError(format!("{}: {}", dir.display(), e))
        })?;
        let path = dir.join(self.file_name);
        fs::write(&path, &self.bytes).map_err(|e| {
            ConversionError::OutputWriteError(format!("{}: {}", path.display(), e))
        })?;
        Ok(path)
    }
}
