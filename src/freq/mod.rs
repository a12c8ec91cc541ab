// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Reconstruction of a capture's frequency axis from its header values.
 */

mod error;

pub use error::FreqAxisError;

/// The centre frequencies of every fine channel in a capture, in channel
/// order [MHz].
///
/// The axis is linear: channel `i` sits at `fch1 + i * foff`. A negative
/// `foff` is normal for filterbank data and gives a descending axis.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyAxis {
    freqs: Vec<f64>,
}

impl FrequencyAxis {
    /// Derive the frequency axis for `num_chans` fine channels, where the
    /// first channel sits at `fch1` \[MHz\] and adjacent channels are
    /// separated by `foff` \[MHz\].
    ///
    /// `num_chans` is signed so that a nonsensical negative count from a
    /// caller's arithmetic is rejected rather than wrapped; 0 channels gives
    /// an empty axis. `foff` may be negative (descending axis) or zero
    /// (degenerate but valid); non-finite inputs are rejected.
    pub fn new(fch1: f64, foff: f64, num_chans: i64) -> Result<FrequencyAxis, FreqAxisError> {
        if num_chans < 0 {
            return Err(FreqAxisError::NegativeChannelCount(num_chans));
        }
        if !fch1.is_finite() {
            return Err(FreqAxisError::NonFiniteStartFreq(fch1));
        }
        if !foff.is_finite() {
            return Err(FreqAxisError::NonFiniteFreqStep(foff));
        }

        let freqs = (0..num_chans).map(|i| fch1 + i as f64 * foff).collect();
        Ok(FrequencyAxis { freqs })
    }

    /// All channel centre frequencies \[MHz\], in channel order.
    pub fn freqs(&self) -> &[f64] {
        &self.freqs
    }

    /// The first `n` channel frequencies, or the whole axis if it has fewer
    /// than `n` channels.
    pub fn first_n(&self, n: usize) -> &[f64] {
        &self.freqs[..n.min(self.freqs.len())]
    }

    /// The last `n` channel frequencies, or the whole axis if it has fewer
    /// than `n` channels.
    pub fn last_n(&self, n: usize) -> &[f64] {
        &self.freqs[self.freqs.len() - n.min(self.freqs.len())..]
    }

    /// The number of channels on the axis.
    pub fn len(&self) -> usize {
        self.freqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.freqs.is_empty()
    }

    /// Consume the axis, yielding the underlying frequencies.
    pub fn into_vec(self) -> Vec<f64> {
        self.freqs
    }
}

impl std::ops::Deref for FrequencyAxis {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.freqs
    }
}
