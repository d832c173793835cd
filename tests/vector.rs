//! Tests for the fixed-point vector search

#![cfg(feature = "vector-find")]

use dsp_numbers::vector::*;

#[test]
fn find_equal_collects_all_matches() {
    let vec = [3, 7, -1, 7, 0, 7, 2];
    let mut idx = [0; 7];

    let count = find_equal_int16(&mut idx, &vec, 7, 0);
    assert_eq!(count, 3);
    assert_eq!(&idx[..count], &[1, 3, 5]);

    let count = find_equal_int16(&mut idx, &vec, 7, -4);
    assert_eq!(count, 3);
    assert_eq!(&idx[..count], &[1, 3, 5]);

    let count = find_equal_int16(&mut idx, &vec, 7, vec.len() as i32);
    assert_eq!(count, 3);
    assert_eq!(&idx[..count], &[1, 3, 5]);
}

#[test]
fn find_equal_limits_results() {
    let vec = [3, 7, -1, 7, 0, 7, 2];

    let mut first = [usize::MAX; 1];
    assert_eq!(find_equal_int16(&mut first, &vec, 7, 1), 1);
    assert_eq!(first, [1]);

    let mut two = [usize::MAX; 2];
    assert_eq!(find_equal_int16(&mut two, &vec, 7, 2), 2);
    assert_eq!(two, [1, 3]);
}

#[test]
fn find_equal_without_match() {
    let vec = [1, 2, 3];
    let mut idx = [usize::MAX; 3];

    assert_eq!(find_equal_int16(&mut idx, &vec, 4, 0), 0);
    assert_eq!(idx, [usize::MAX; 3]);
    assert_eq!(find_equal_int16(&mut idx, &[], 0, 0), 0);
}

#[test]
fn find_equal_extreme_values() {
    let vec = [i16::MIN, 0, i16::MAX, i16::MIN];
    let mut idx = [0; 4];

    let count = find_equal_int16(&mut idx, &vec, i16::MIN, 0);
    assert_eq!(&idx[..count], &[0, 3]);
}

#[test]
#[should_panic]
fn find_equal_undersized_output() {
    let vec = [5, 5, 5];
    let mut idx = [0; 2];

    find_equal_int16(&mut idx, &vec, 5, 0);
}

#[test]
fn find_min() {
    assert_eq!(find_min_int16(&[5, -3, 9, -3]), -3);
    assert_eq!(find_min_int16(&[42]), 42);
    assert_eq!(find_min_int16(&[i16::MAX, i16::MIN, 0]), i16::MIN);
    assert_eq!(find_min_int16(&[1, 2, 3, 4]), 1);
}

#[test]
#[should_panic]
fn find_min_empty() {
    find_min_int16(&[]);
}

#[test]
fn find_max_abs() {
    assert_eq!(find_max_abs_int32(&[3, -7, 2]), 7);
    assert_eq!(find_max_abs_int32(&[-3]), 3);
    assert_eq!(find_max_abs_int32(&[0, 0]), 0);
    assert_eq!(find_max_abs_int32(&[i32::MAX, -5]), i32::MAX);
    assert_eq!(find_max_abs_int32(&[-i32::MAX]), i32::MAX);
}

#[test]
fn find_max_abs_saturates() {
    assert_eq!(find_max_abs_int32(&[i32::MIN]), i32::MAX);
    assert_eq!(find_max_abs_int32(&[1, i32::MIN, 2]), i32::MAX);
}

#[test]
#[should_panic]
fn find_max_abs_empty() {
    find_max_abs_int32(&[]);
}
