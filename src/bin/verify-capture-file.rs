// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! This program opens each filterbank capture given on the command line,
//! lists its header attributes and prints both ends of the reconstructed
//! frequency axis. Handy for eyeballing whether a capture's band metadata is
//! sane before doing anything expensive with the data.

use fbh5::{CaptureError, FilterbankFile};

fn main() {
    // Test each input file.
    for capture_file in std::env::args().skip(1) {
        if let Err(e) = inspect_file(&capture_file) {
            println!("File '{}' couldn't be inspected: {}", &capture_file, e);
        }
    }
}

fn inspect_file(capture_file: &str) -> Result<(), CaptureError> {
    println!("Inspecting file '{}'", capture_file);
    let fb = FilterbankFile::open(capture_file)?;
    println!("Attributes: {:?}", fb.attr_names()?);

    let meta = fb.metadata()?;
    let axis = meta.freq_axis()?;
    println!("{} fine channels", axis.len());
    // With a negative foff the first channels are the top of the band, so
    // don't label these "low" and "high".
    println!("First channels [MHz]: {:?}", axis.first_n(10));
    println!("Last channels [MHz]:  {:?}", axis.last_n(10));

    println!("File '{}' is all good!", capture_file);
    Ok(())
}
