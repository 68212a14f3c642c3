//! Table-driven slice cases over small integer owners.

#[macro_use]
mod cases;

test_case! {
    name: one_two,
    owner: [0, 1, 2, 3, 4],
    range: 1..3,
    size: { 2 },
    elements: { vec![1, 2] },
    pointer: { vec![1, 2] },
    doubled: { vec![0, 2, 4, 3, 4] },
    sub_slice: { (1, 2) => vec![2] },
}

test_case! {
    name: three_four,
    owner: [0, 1, 2, 3, 4],
    range: 3..5,
    elements: { vec![3, 4] },
    pointer: { vec![3, 4] },
    doubled: { vec![0, 1, 2, 6, 8] },
}

test_case! {
    name: whole_owner,
    owner: [5, 6, 7],
    range: 0..3,
    size: { 3 },
    elements: { vec![5, 6, 7] },
    sub_slice: { (0, 3) => vec![5, 6, 7] },
}

test_case! {
    name: single_element,
    owner: [5, 6, 7],
    range: 2..3,
    size: { 1 },
    elements: { vec![7] },
    doubled: { vec![5, 6, 14] },
    sub_slice: { (1, 1) => Err(SliceError::SubRangeOutOfRange { begin: 1, end: 1, size: 1 }) },
}

test_case! {
    name: empty_range,
    owner: [0, 1, 2, 3, 4],
    range: 2..2,
    elements: { Err(SliceError::InvalidRange { begin: 2, end: 2 }) },
    pointer: { Err(SliceError::InvalidRange { begin: 2, end: 2 }) },
    doubled: { Err(SliceError::InvalidRange { .. }) },
}

test_case! {
    name: inverted_range,
    owner: [0, 1, 2, 3, 4],
    range: 4..1,
    size: { Err(SliceError::InvalidRange { begin: 4, end: 1 }) },
}

test_case! {
    name: end_past_owner,
    owner: [0, 1, 2, 3, 4],
    range: 0..6,
    elements: { Err(SliceError::EndExceedsOwnerSize { end: 6, size: 5 }) },
    doubled: { Err(SliceError::EndExceedsOwnerSize { end: 6, size: 5 }) },
}

test_case! {
    name: empty_owner,
    owner: [],
    range: 0..1,
    elements: { Err(SliceError::EndExceedsOwnerSize { end: 1, size: 0 }) },
}

test_case! {
    name: sub_slice_end_at_size,
    owner: [0, 1, 2, 3, 4],
    range: 1..4,
    sub_slice: { (1, 3) => vec![2, 3] },
}

test_case! {
    name: sub_slice_begin_at_size,
    owner: [0, 1, 2, 3, 4],
    range: 1..4,
    sub_slice: { (3, 3) => Err(SliceError::SubRangeOutOfRange { begin: 3, end: 3, size: 3 }) },
}

test_case! {
    name: sub_slice_end_past_size,
    owner: [0, 1, 2, 3, 4],
    range: 1..4,
    sub_slice: { (0, 4) => Err(SliceError::SubRangeOutOfRange { begin: 0, end: 4, size: 3 }) },
}

test_case! {
    name: sub_slice_inverted,
    owner: [0, 1, 2, 3, 4],
    range: 1..4,
    sub_slice: { (2, 1) => Err(SliceError::InvalidRange { begin: 3, end: 2 }) },
}
