// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests for capture metadata reading. These write their own small HDF5
//! fixtures rather than relying on a real telescope capture being around.

use std::io::Write;
use std::path::Path;

use approx::assert_abs_diff_eq;
use ndarray::Array3;

use super::*;

/// Write a minimal capture: optional `fch1`/`foff` attributes and a 3D
/// `data` dataset of the given shape.
fn write_capture(path: &Path, fch1: Option<f64>, foff: Option<f64>, shape: (usize, usize, usize)) {
    let file = hdf5::File::create(path).unwrap();
    if let Some(fch1) = fch1 {
        file.new_attr::<f64>()
            .create("fch1")
            .unwrap()
            .write_scalar(&fch1)
            .unwrap();
    }
    if let Some(foff) = foff {
        file.new_attr::<f64>()
            .create("foff")
            .unwrap()
            .write_scalar(&foff)
            .unwrap();
    }
    let data = Array3::<f32>::zeros(shape);
    file.new_dataset::<f32>()
        .shape(shape)
        .create("data")
        .unwrap()
        .write(data.view())
        .unwrap();
}

#[test]
fn open_and_list_attrs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cap.h5");
    write_capture(&path, Some(1419.8), Some(-0.5), (2, 1, 8));

    let fb = FilterbankFile::open(&path).unwrap();
    let mut names = fb.attr_names().unwrap();
    // The container doesn't guarantee an order, so impose one.
    names.sort();
    assert_eq!(names, ["fch1", "foff"]);
}

#[test]
fn present_and_absent_attrs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cap.h5");
    write_capture(&path, Some(1419.8), Some(-0.5), (2, 1, 8));

    let fb = FilterbankFile::open(&path).unwrap();
    assert_abs_diff_eq!(fb.attr("fch1").unwrap().unwrap(), 1419.8);
    assert_abs_diff_eq!(fb.attr("foff").unwrap().unwrap(), -0.5);
    // Missing attributes are not errors.
    assert!(fb.attr("tsamp").unwrap().is_none());
}

#[test]
fn dataset_shape_without_reading_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cap.h5");
    write_capture(&path, Some(1419.8), Some(-0.5), (16, 2, 4096));

    let fb = FilterbankFile::open(&path).unwrap();
    assert_eq!(fb.dataset_shape("data").unwrap(), [16, 2, 4096]);
}

#[test]
fn missing_dataset_names_the_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cap.h5");
    write_capture(&path, Some(1419.8), Some(-0.5), (2, 1, 8));

    let fb = FilterbankFile::open(&path).unwrap();
    let err = fb.dataset_shape("spectra").unwrap_err();
    assert!(matches!(err, CaptureError::MissingDataset(_)));
    assert!(err.to_string().contains("spectra"));
}

#[test]
fn metadata_to_freq_axis() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cap.h5");
    write_capture(&path, Some(1000.0), Some(-1.0), (2, 1, 5));

    let meta = FilterbankMeta::read(&path).unwrap();
    assert_eq!(meta.num_chans, 5);

    let axis = meta.freq_axis().unwrap();
    assert_eq!(axis.freqs(), &[1000.0, 999.0, 998.0, 997.0, 996.0]);
}

#[test]
fn missing_fch1_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cap.h5");
    write_capture(&path, None, Some(-1.0), (2, 1, 5));

    let meta = FilterbankMeta::read(&path).unwrap();
    assert!(meta.start_freq_mhz.is_none());

    let err = meta.freq_axis().unwrap_err();
    assert!(matches!(err, CaptureError::MissingAttribute("fch1")));
}

#[test]
fn missing_foff_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cap.h5");
    write_capture(&path, Some(1000.0), None, (2, 1, 5));

    let meta = FilterbankMeta::read(&path).unwrap();
    let err = meta.freq_axis().unwrap_err();
    assert!(matches!(err, CaptureError::MissingAttribute("foff")));
}

#[test]
fn non_3d_data_is_a_shape_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cap.h5");
    let file = hdf5::File::create(&path).unwrap();
    file.new_dataset::<f32>()
        .shape((32,))
        .create("data")
        .unwrap();
    drop(file);

    let fb = FilterbankFile::open(&path).unwrap();
    let err = fb.metadata().unwrap_err();
    assert!(matches!(err, CaptureError::DataShape { ndim: 1, .. }));
}

#[test]
fn read_data_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cap.h5");
    write_capture(&path, Some(1419.8), Some(-0.5), (2, 1, 8));

    let fb = FilterbankFile::open(&path).unwrap();
    let data = fb.read_data().unwrap();
    assert_eq!(data.dim(), (2, 1, 8));
    assert!(data.iter().all(|&v| v == 0.0));
}

#[test]
fn nonexistent_file() {
    let err = FilterbankFile::open("/definitely/not/here.h5").unwrap_err();
    assert!(matches!(err, CaptureError::CaptureFileDoesntExist(_)));
    assert!(err.to_string().contains("/definitely/not/here.h5"));
}

#[test]
fn garbage_file_is_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not-hdf5.h5");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(b"this is not an HDF5 file").unwrap();
    drop(f);

    let err = FilterbankFile::open(&path).unwrap_err();
    assert!(matches!(err, CaptureError::Unparseable { .. }));
}
