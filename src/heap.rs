use crate::{le, Entry, InvalidInputError};

pub(crate) fn sort<T: PartialOrd>(v: &mut [Entry<'_, T>]) -> Result<(), InvalidInputError> {
    let len = v.len();
    for node in (0..len / 2).rev() {
        sift_down(v, node, len)?;
    }
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(v, 0, end)?;
    }
    Ok(())
}

/// Restores the max-heap property for the subtree at `node` within `v[..end]`.
fn sift_down<T: PartialOrd>(
    v: &mut [Entry<'_, T>],
    mut node: usize,
    end: usize,
) -> Result<(), InvalidInputError> {
    loop {
        let mut child = 2 * node + 1;
        if child >= end {
            return Ok(());
        }
        if child + 1 < end && !le(v[child + 1], v[child])? {
            child += 1;
        }
        if le(v[child], v[node])? {
            return Ok(());
        }
        v.swap(node, child);
        node = child;
    }
}
