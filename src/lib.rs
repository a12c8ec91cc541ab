// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Metadata and frequency-axis access for HDF5 filterbank captures.

A filterbank capture stores its observation data as a 3D array (time, beam,
fine channel) alongside header attributes describing the band. This crate
reads those attributes and the array shape, and reconstructs the physical
frequency axis they imply: `freq[i] = fch1 + i * foff`.
 */

mod constants;
pub mod freq;
pub mod meta;

pub use freq::{FreqAxisError, FrequencyAxis};
pub use meta::{CaptureError, FilterbankFile, FilterbankMeta};
