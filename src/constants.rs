// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.
 */

/// The name of the dataset holding the observation array. Its axes are
/// (time, beam, fine channel).
pub(crate) const DATA_DATASET: &str = "data";

/// The header attribute giving the centre frequency of the first fine channel
/// [MHz].
pub(crate) const FCH1_ATTR: &str = "fch1";

/// The header attribute giving the frequency step between adjacent fine
/// channels [MHz]. Negative means the channels descend in frequency.
pub(crate) const FOFF_ATTR: &str = "foff";
