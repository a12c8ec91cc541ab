// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with deriving a frequency axis.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FreqAxisError {
    #[error("Can't make a frequency axis with {0} channels")]
    NegativeChannelCount(i64),

    #[error("The start frequency ({0}) isn't finite")]
    NonFiniteStartFreq(f64),

    #[error("The frequency step ({0}) isn't finite")]
    NonFiniteFreqStep(f64),
}
