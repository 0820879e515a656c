mod common;

use common::synthetic_image::{checkerboard_u8, ramp_u8, uniform_u8, vertical_stripes_u8};
use lbp_classifier::image::ImageU8;
use lbp_classifier::{compute_descriptor, nearest_neighbor, LbpHistogram, LbpOptions, TrainingIndex};

fn view(width: usize, height: usize, data: &[u8]) -> ImageU8<'_> {
    ImageU8 {
        w: width,
        h: height,
        stride: width,
        data,
    }
}

fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

#[test]
fn descriptor_length_is_two_to_the_points() {
    let data = checkerboard_u8(24, 24, 2);
    let img = view(24, 24, &data);
    for points in [1u32, 4, 8, 12] {
        let options = LbpOptions {
            points,
            ..LbpOptions::default()
        };
        let descriptor = compute_descriptor(&img, &options).expect("non-empty scan");
        assert_eq!(descriptor.len(), 1 << points);
    }
}

#[test]
fn descriptors_are_l1_normalized() {
    let data = vertical_stripes_u8(37, 23, 4);
    let img = view(37, 23, &data);
    let descriptor = compute_descriptor(&img, &LbpOptions::default()).expect("non-empty scan");
    let sum: f64 = descriptor.iter().sum();
    assert!((sum - 1.0).abs() < 1e-9, "descriptor mass {sum}");
    assert!(descriptor.iter().all(|&b| (0.0..=1.0).contains(&b)));
}

#[test]
fn uniform_texture_concentrates_in_the_all_ones_code() {
    let data = uniform_u8(30, 30, 77);
    let img = view(30, 30, &data);
    let descriptor = compute_descriptor(&img, &LbpOptions::default()).expect("non-empty scan");
    assert_eq!(descriptor[255], 1.0);
}

#[test]
fn different_textures_produce_distant_descriptors() {
    let checker = checkerboard_u8(48, 48, 2);
    let stripes = vertical_stripes_u8(48, 48, 4);
    let ramp = ramp_u8(48, 48);
    let options = LbpOptions::default();
    let d_checker = compute_descriptor(&view(48, 48, &checker), &options).expect("checker");
    let d_stripes = compute_descriptor(&view(48, 48, &stripes), &options).expect("stripes");
    let d_ramp = compute_descriptor(&view(48, 48, &ramp), &options).expect("ramp");
    assert!(l1_distance(&d_checker, &d_stripes) > 0.5);
    assert!(l1_distance(&d_checker, &d_ramp) > 0.5);
    assert!(l1_distance(&d_stripes, &d_ramp) > 0.5);
}

#[test]
fn same_texture_at_different_sizes_stays_close() {
    let options = LbpOptions::default();
    let small = checkerboard_u8(38, 38, 2);
    let large = checkerboard_u8(50, 50, 2);
    let d_small = compute_descriptor(&view(38, 38, &small), &options).expect("small");
    let d_large = compute_descriptor(&view(50, 50, &large), &options).expect("large");
    assert!(
        l1_distance(&d_small, &d_large) < 0.05,
        "same texture drifted: {}",
        l1_distance(&d_small, &d_large)
    );
}

#[test]
fn histogram_reports_its_sample_count() {
    let data = uniform_u8(32, 32, 10);
    let img = view(32, 32, &data);
    let hist = LbpHistogram::scan(&img, &LbpOptions::default());
    assert_eq!(hist.samples(), 100);
    assert_eq!(hist.total(), 100.0);
}

#[test]
fn nearest_neighbor_picks_the_matching_texture() {
    let options = LbpOptions::default();
    let checker = checkerboard_u8(48, 48, 2);
    let stripes = vertical_stripes_u8(48, 48, 4);
    let query_img = checkerboard_u8(40, 40, 2);

    let mut index = TrainingIndex::new();
    index.push(
        compute_descriptor(&view(48, 48, &checker), &options).expect("checker"),
        0,
    );
    index.push(
        compute_descriptor(&view(48, 48, &stripes), &options).expect("stripes"),
        1,
    );

    let query = compute_descriptor(&view(40, 40, &query_img), &options).expect("query");
    let found = nearest_neighbor(&query, &index);
    assert_eq!(index.label(found.index), 0);
    assert!(found.distance >= 0.0);
}
