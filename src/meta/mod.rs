// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Code to read header attributes and the observation-array shape from a
filterbank capture's HDF5 file.
 */

mod error;
#[cfg(test)]
mod tests;

pub use error::CaptureError;

use ndarray::{Array3, Ix3};

use crate::constants::{DATA_DATASET, FCH1_ATTR, FOFF_ATTR};
use crate::freq::FrequencyAxis;

/// An open filterbank capture.
///
/// The underlying [`hdf5::File`] handle is closed when this struct is
/// dropped, so scoping a `FilterbankFile` to a block guarantees the handle is
/// released on every exit path out of that block.
#[derive(Debug)]
pub struct FilterbankFile {
    /// The [`hdf5::File`] struct associated with the opened HDF5 file.
    hdf5_file: hdf5::File,
}

impl FilterbankFile {
    /// Open a filterbank capture file.
    pub fn open<T: AsRef<std::path::Path>>(file: T) -> Result<FilterbankFile, CaptureError> {
        // so that libhdf5 doesn't print errors to stdout
        hdf5::silence_errors(true);

        // If the file doesn't exist, hdf5::File::open will handle it, but the
        // error message is horrendous.
        if !file.as_ref().exists() {
            return Err(CaptureError::CaptureFileDoesntExist(
                file.as_ref().display().to_string(),
            ));
        }
        let hdf5_file =
            hdf5::File::open(&file).map_err(|source| CaptureError::Unparseable {
                path: file.as_ref().display().to_string(),
                source,
            })?;
        Ok(FilterbankFile { hdf5_file })
    }

    /// All top-level attribute names in the capture, in the order the
    /// container exposes them. That order carries no meaning; don't rely on
    /// it.
    pub fn attr_names(&self) -> Result<Vec<String>, CaptureError> {
        Ok(self.hdf5_file.attr_names()?)
    }

    /// The scalar value of a top-level attribute, or `None` if the capture
    /// has no attribute with that name. A merely-missing attribute is not an
    /// error; whether that's fatal is the caller's call.
    pub fn attr(&self, name: &str) -> Result<Option<f64>, CaptureError> {
        match self.hdf5_file.attr(name) {
            Ok(attr) => Ok(Some(attr.read_scalar::<f64>()?)),
            Err(_) => Ok(None),
        }
    }

    /// The dimensions of a named dataset, without reading any of its data.
    pub fn dataset_shape(&self, name: &str) -> Result<Vec<usize>, CaptureError> {
        if !self.hdf5_file.link_exists(name) {
            return Err(CaptureError::MissingDataset(name.to_string()));
        }
        Ok(self.hdf5_file.dataset(name)?.shape())
    }

    /// Read the header values this crate cares about in one pass: `fch1`,
    /// `foff` and the channel count (the last axis of the `data` dataset's
    /// shape).
    pub fn metadata(&self) -> Result<FilterbankMeta, CaptureError> {
        let start_freq_mhz = self.attr(FCH1_ATTR)?;
        let freq_step_mhz = self.attr(FOFF_ATTR)?;
        let shape = self.dataset_shape(DATA_DATASET)?;
        let num_chans = match shape.as_slice() {
            // (time, beam, fine channel)
            [_, _, num_chans] => *num_chans,
            _ => {
                return Err(CaptureError::DataShape {
                    name: DATA_DATASET.to_string(),
                    ndim: shape.len(),
                })
            }
        };
        Ok(FilterbankMeta {
            start_freq_mhz,
            freq_step_mhz,
            num_chans,
        })
    }

    /// Read the whole observation array. Filterbank captures small enough to
    /// inspect interactively fit in memory; there is deliberately no partial
    /// read here.
    pub fn read_data(&self) -> Result<Array3<f32>, CaptureError> {
        if !self.hdf5_file.link_exists(DATA_DATASET) {
            return Err(CaptureError::MissingDataset(DATA_DATASET.to_string()));
        }
        let dataset = self.hdf5_file.dataset(DATA_DATASET)?;
        let data = dataset.read_dyn::<f32>()?;
        match data.into_dimensionality::<Ix3>() {
            Ok(data) => Ok(data),
            Err(_) => Err(CaptureError::DataShape {
                name: DATA_DATASET.to_string(),
                ndim: dataset.ndim(),
            }),
        }
    }
}

/// The header values needed to reconstruct a capture's frequency axis.
///
/// This is a plain snapshot; it stays valid after the [`FilterbankFile`] it
/// came from is closed.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterbankMeta {
    /// The centre frequency of the first fine channel (`fch1`) \[MHz\], if
    /// the capture recorded one.
    pub start_freq_mhz: Option<f64>,

    /// The signed frequency step between adjacent fine channels (`foff`)
    /// \[MHz\], if the capture recorded one.
    pub freq_step_mhz: Option<f64>,

    /// The number of fine channels, taken from the last axis of the `data`
    /// dataset's shape.
    pub num_chans: usize,
}

impl FilterbankMeta {
    /// Open a capture file, read its metadata and close it again.
    pub fn read<T: AsRef<std::path::Path>>(file: T) -> Result<FilterbankMeta, CaptureError> {
        let fb = FilterbankFile::open(file)?;
        fb.metadata()
        // fb drops here, closing the HDF5 handle.
    }

    /// Derive the frequency axis this metadata implies. Fails if the capture
    /// didn't record `fch1` or `foff`; no defaults are substituted.
    pub fn freq_axis(&self) -> Result<FrequencyAxis, CaptureError> {
        let fch1 = self
            .start_freq_mhz
            .ok_or(CaptureError::MissingAttribute(FCH1_ATTR))?;
        let foff = self
            .freq_step_mhz
            .ok_or(CaptureError::MissingAttribute(FOFF_ATTR))?;
        Ok(FrequencyAxis::new(fch1, foff, self.num_chans as i64)?)
    }
}
