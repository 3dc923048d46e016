use crate::{le, Entry, InvalidInputError};

/// Runs at or below this length are finished with insertion sort.
const INSERTION_THRESHOLD: usize = 20;

pub(crate) fn sort<T: PartialOrd>(v: &mut [Entry<'_, T>]) -> Result<(), InvalidInputError> {
    if v.len() < 2 || already_sorted(v)? {
        return Ok(());
    }
    let mut scratch = v.to_vec();
    sort_run(v, &mut scratch)
}

fn already_sorted<T: PartialOrd>(v: &[Entry<'_, T>]) -> Result<bool, InvalidInputError> {
    for w in v.windows(2) {
        if !le(w[0], w[1])? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// `scratch` must be exactly as long as `v`.
fn sort_run<'a, T: PartialOrd>(
    v: &mut [Entry<'a, T>],
    scratch: &mut [Entry<'a, T>],
) -> Result<(), InvalidInputError> {
    let len = v.len();
    if len <= INSERTION_THRESHOLD {
        return insertion_sort(v);
    }
    let mid = len / 2;
    sort_run(&mut v[..mid], &mut scratch[..mid])?;
    sort_run(&mut v[mid..], &mut scratch[mid..])?;
    if le(v[mid - 1], v[mid])? {
        return Ok(());
    }
    scratch.copy_from_slice(v);
    let (left, right) = scratch.split_at(mid);
    merge(left, right, v)
}

fn merge<'a, T: PartialOrd>(
    left: &[Entry<'a, T>],
    right: &[Entry<'a, T>],
    out: &mut [Entry<'a, T>],
) -> Result<(), InvalidInputError> {
    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        // Ties go to the left run.
        if le(left[i], right[j])? {
            out[k] = left[i];
            i += 1;
        } else {
            out[k] = right[j];
            j += 1;
        }
        k += 1;
    }
    let rest = left.len() - i;
    out[k..k + rest].copy_from_slice(&left[i..]);
    out[k + rest..].copy_from_slice(&right[j..]);
    Ok(())
}

fn insertion_sort<T: PartialOrd>(v: &mut [Entry<'_, T>]) -> Result<(), InvalidInputError> {
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && !le(v[j - 1], v[j])? {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
    Ok(())
}
