//! JSON dumps of derived profile tables
//!
//! Enabled by the `diagnostics` feature. A dump records a profile's
//! parameters and its work chunk table so that chunk layouts can be
//! compared across builds.

use std::fs::File;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::profile::ResolvedProfile;
use crate::types::{PixelFormat, Rational, WorkChunk};

/// Snapshot of one resolved profile
#[derive(Debug, Clone, Serialize)]
pub struct ProfileDump {
    pub name: String,
    pub dsf: u8,
    pub video_stype: u8,
    pub frame_size: usize,
    pub width: u32,
    pub height: u32,
    pub pix_fmt: PixelFormat,
    pub time_base: Rational,
    pub work_chunks: Vec<WorkChunk>,
    pub idct_factor_count: usize,
    pub generated_at: DateTime<Utc>,
}

impl ProfileDump {
    pub fn new(resolved: &ResolvedProfile<'_>) -> Self {
        let p = resolved.profile;
        Self {
            name: p.name.to_string(),
            dsf: p.dsf,
            video_stype: p.video_stype,
            frame_size: p.frame_size,
            width: p.width,
            height: p.height,
            pix_fmt: p.pix_fmt,
            time_base: p.time_base,
            work_chunks: resolved.work_chunks().to_vec(),
            idct_factor_count: resolved.idct_factors().len(),
            generated_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the dump as pretty-printed JSON
    pub fn save_to_file(&self, filename: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = self.to_json()?;
        let mut file = File::create(filename)?;
        file.write_all(json.as_bytes())?;
        log::debug!("Wrote {} work chunks of {} to {}", self.work_chunks.len(), self.name, filename);
        Ok(())
    }
}
