mod common;

use ndarray::Array2;
use turbid_core::error::TurbidError;
use turbid_core::io::image_io::load_image;
use turbid_core::pipeline::config::RestorationParameters;
use turbid_core::pipeline::{
    compute_restoration_outputs, compute_restoration_outputs_reported, restore_pair,
    restore_pair_reported, save_results, RestorationResults, RestorationStage,
};
use turbid_core::restore::{FrequencyFilter, RestorationMethod};

use common::{degrade, noise_image, smooth_pattern, uniform, RecordingReporter};

#[test]
fn results_reject_mismatched_shapes() {
    let err = RestorationResults::new(uniform(64, 64, 1), uniform(32, 32, 1)).unwrap_err();
    assert!(matches!(
        err,
        TurbidError::ShapeMismatch {
            left: (64, 64),
            right: (32, 32),
            ..
        }
    ));
}

#[test]
fn results_reject_empty_arrays() {
    let err =
        RestorationResults::from_arrays(Array2::zeros((0, 0)), Array2::zeros((0, 0))).unwrap_err();
    assert!(matches!(err, TurbidError::EmptyImage));
}

#[test]
fn results_lookup_by_method() {
    let results = RestorationResults::new(uniform(4, 5, 1), uniform(4, 5, 2)).unwrap();
    assert_eq!(results.dim(), (4, 5));
    assert_eq!(results.get(RestorationMethod::InverseFilter).data()[[0, 0]], 1);
    assert_eq!(results.get(RestorationMethod::Wiener).data()[[0, 0]], 2);
}

#[test]
fn outputs_preserve_input_shape() {
    let params = RestorationParameters::default();
    for &(h, w) in &[(64, 64), (37, 52), (300, 260)] {
        let results = compute_restoration_outputs(&noise_image(h, w, 5), &params).unwrap();
        assert_eq!(results.inverse_filtered().dim(), (h, w));
        assert_eq!(results.wiener_filtered().dim(), (h, w));
    }
}

#[test]
fn outputs_match_individual_operators() {
    let params = RestorationParameters::default();
    let degraded = degrade(&smooth_pattern(48, 48), params.k);
    let results = compute_restoration_outputs(&degraded, &params).unwrap();

    let inverse = params.inverse_filter().unwrap().apply(&degraded);
    let wiener = params.wiener_filter().unwrap().apply(&degraded);
    assert_eq!(results.inverse_filtered(), &inverse);
    assert_eq!(results.wiener_filtered(), &wiener);
}

#[test]
fn invalid_parameters_fail_before_computing() {
    let reporter = RecordingReporter::default();
    let params = RestorationParameters {
        k: -1.0,
        ..Default::default()
    };
    let err =
        compute_restoration_outputs_reported(&uniform(16, 16, 9), &params, &reporter).unwrap_err();
    assert!(matches!(err, TurbidError::InvalidParameter { name: "k", .. }));
    assert!(reporter.begun.lock().unwrap().is_empty());
}

#[test]
fn reporter_sees_every_stage() {
    let reporter = RecordingReporter::default();
    let original = smooth_pattern(32, 32);
    let degraded = degrade(&original, 0.0025);
    restore_pair_reported(
        &original,
        &degraded,
        &RestorationParameters::default(),
        &reporter,
    )
    .unwrap();

    let begun = reporter.begun.lock().unwrap();
    let finished = reporter.finished.lock().unwrap();
    for stage in [
        RestorationStage::InverseFilter,
        RestorationStage::WienerFilter,
        RestorationStage::Packaging,
        RestorationStage::Statistics,
    ] {
        assert!(begun.contains(&stage), "{stage} never began");
        assert!(finished.contains(&stage), "{stage} never finished");
    }
    assert_eq!(begun.last(), Some(&RestorationStage::Statistics));
}

#[test]
fn pair_report_scores_both_outputs() {
    let original = smooth_pattern(64, 64);
    let degraded = degrade(&original, 0.0025);
    let report = restore_pair(&original, &degraded, &RestorationParameters::default()).unwrap();

    assert!(report.psnr_inverse.is_finite() && report.psnr_inverse > 0.0);
    assert!(report.psnr_wiener.is_finite() && report.psnr_wiener > 0.0);
    assert!((report.stats.original_mean - original.mean()).abs() < 1e-12);
    assert!((report.stats.degraded_mean - degraded.mean()).abs() < 1e-12);
}

#[test]
fn saved_results_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let results = RestorationResults::new(noise_image(20, 30, 1), noise_image(20, 30, 2)).unwrap();
    let saved = save_results("moon_restored", &results, dir.path()).unwrap();

    assert_eq!(saved.inverse_filtered, dir.path().join("moon_restored_inverse.bmp"));
    assert_eq!(saved.wiener_filtered, dir.path().join("moon_restored_wiener.bmp"));
    assert_eq!(&load_image(&saved.inverse_filtered).unwrap(), results.inverse_filtered());
    assert_eq!(&load_image(&saved.wiener_filtered).unwrap(), results.wiener_filtered());
}
