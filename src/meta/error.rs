// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with reading filterbank captures.

use thiserror::Error;

use crate::freq::FreqAxisError;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Specified capture file '{0}' doesn't exist")]
    CaptureFileDoesntExist(String),

    #[error("Couldn't open '{path}' as HDF5: {source}")]
    Unparseable { path: String, source: hdf5::Error },

    #[error("Capture has no dataset '{0}'")]
    MissingDataset(String),

    #[error("Unexpected shape for dataset '{name}': expected 3 dimensions (time, beam, channel), got {ndim}")]
    DataShape { name: String, ndim: usize },

    #[error("Capture attribute '{0}' is missing; a frequency axis can't be derived without it")]
    MissingAttribute(&'static str),

    #[error(transparent)]
    FreqAxis(#[from] FreqAxisError),

    /// An error associated with the hdf5 crate.
    #[error("HDF5 error: {0}")]
    Hdf5(#[from] hdf5::Error),
}
