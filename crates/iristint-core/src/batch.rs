//! Batch driver: run the effect cross-product and bundle the outputs.
//!
//! One kernel call per (palette, mode) pair, fanned out across the Rayon
//! pool — every call is pure and owns its output, so the pairs are fully
//! independent. Output order is deterministic (palette-major, then mode)
//! regardless of execution order.

use std::io::{Seek, Write};

use ndarray::Array2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::effects::{apply_effect, EffectMode, StyleParams};
use crate::emission::{build_emission, RingParams};
use crate::error::{IrisError, Result};
use crate::io::{encode_gray_png, encode_texture_png};
use crate::mask::BinaryMask;
use crate::palette::{self, PaletteEntry};
use crate::texture::Texture;

/// Filename of the color-independent emission entry in the archive.
pub const EMISSION_FILENAME: &str = "emission_mask.png";

/// One batch invocation: which palettes and modes to run, how to name the
/// outputs, and whether to include the emission mask.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BatchRequest {
    pub palettes: Vec<String>,
    pub modes: Vec<EffectMode>,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub style: StyleParams,
    #[serde(default)]
    pub emission: Option<RingParams>,
}

/// One recolored output with its archive filename and gallery caption.
#[derive(Clone, Debug)]
pub struct BatchEntry {
    pub filename: String,
    pub caption: String,
    pub texture: Texture,
}

#[derive(Clone, Debug)]
pub struct BatchOutput {
    pub entries: Vec<BatchEntry>,
    pub emission: Option<Array2<u8>>,
}

impl BatchOutput {
    /// Number of files the archive will contain.
    pub fn file_count(&self) -> usize {
        self.entries.len() + usize::from(self.emission.is_some())
    }
}

/// Replace every character that is not alphanumeric, `-` or `_` with `_`.
pub fn sanitize(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

/// Run every (palette, mode) combination over the texture.
///
/// Selections and palette names are validated up front; no pixel work
/// happens for an invalid request.
pub fn run_batch(texture: &Texture, mask: &BinaryMask, request: &BatchRequest) -> Result<BatchOutput> {
    if request.palettes.is_empty() {
        return Err(IrisError::EmptySelection("palette"));
    }
    if request.modes.is_empty() {
        return Err(IrisError::EmptySelection("effect mode"));
    }

    let entries: Vec<&'static PaletteEntry> = request
        .palettes
        .iter()
        .map(|name| palette::find(name).ok_or_else(|| IrisError::UnknownPalette(name.clone())))
        .collect::<Result<_>>()?;

    let prefix = {
        let s = sanitize(&request.prefix);
        if s.is_empty() {
            "eye".to_string()
        } else {
            s
        }
    };

    let jobs: Vec<(&PaletteEntry, EffectMode)> = entries
        .iter()
        .flat_map(|entry| request.modes.iter().map(move |&mode| (*entry, mode)))
        .collect();

    info!(
        palettes = request.palettes.len(),
        modes = request.modes.len(),
        jobs = jobs.len(),
        "Running batch"
    );

    let outputs: Vec<BatchEntry> = jobs
        .par_iter()
        .map(|&(entry, mode)| {
            let out = apply_effect(texture, mask, entry.hsv, mode, &request.style)?;
            Ok(BatchEntry {
                filename: format!("{}_{}_{}.png", prefix, entry.name, mode.key()),
                caption: format!("{} · {}", entry.label, mode),
                texture: out,
            })
        })
        .collect::<Result<_>>()?;

    let emission = request
        .emission
        .as_ref()
        .map(|ring| build_emission(mask, ring));

    Ok(BatchOutput {
        entries: outputs,
        emission,
    })
}

/// Encode every output as PNG into a deflate zip. The emission entry, when
/// present, goes in first.
pub fn write_archive<W: Write + Seek>(output: &BatchOutput, writer: W) -> Result<()> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    if let Some(ref emission) = output.emission {
        zip.start_file(EMISSION_FILENAME, options)?;
        zip.write_all(&encode_gray_png(emission)?)?;
    }

    for entry in &output.entries {
        zip.start_file(entry.filename.as_str(), options)?;
        zip.write_all(&encode_texture_png(&entry.texture)?)?;
    }

    zip.finish()?;
    info!(files = output.file_count(), "Archive written");
    Ok(())
}
