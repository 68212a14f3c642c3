// Helper macro to distinguish between patterns and expressions
#[macro_export]
macro_rules! assert_case {
    // Guard patterns - patterns with if conditions
    ($result:expr, { $pattern:pat if $guard:expr }) => {
        match $result {
            $pattern if $guard => {},
            other => panic!("Expected {} if {} but got {:?}", stringify!($pattern), stringify!($guard), other),
        }
    };

    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    // Default case - treat as expression for equality comparison
    ($result:expr, { $expected:expr }) => {
        match $result {
            Ok(actual) => {
                pretty_assertions::assert_eq!($expected, actual, "Expected {:#?} but got {:#?}\n\n< expected / got >", $expected, actual);
            },
            other => panic!("Expected Ok(...) but got {:?}", other),
        }
    };
}

// Helper macro to generate test functions based on field names
#[macro_export]
macro_rules! handle_case {
    // Elements seen through a container-backed slice
    ([$($attrs:meta)*] elements, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_elements() {
            let owner = owner();
            let result = slicekit::make_slice(&owner, begin(), end())
                .map(|slice| slice.iter().copied().collect::<Vec<i32>>());
            assert_case!(result, $expected);
        }
    };

    // Elements seen through a pointer-backed slice over the same owner
    ([$($attrs:meta)*] pointer, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_pointer() {
            let owner = owner();
            // SAFETY: only ranges within `owner` are expected to succeed, and
            // those are the only ones the slice is read through.
            let raw = unsafe { slicekit::RawArray::new(owner.as_ptr()) };
            let result = if end() <= owner.len() {
                slicekit::make_slice(raw, begin(), end())
                    .map(|slice| slice.iter().copied().collect::<Vec<i32>>())
            } else {
                Err(slicekit::SliceError::EndExceedsOwnerSize { end: end(), size: owner.len() })
            };
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] size, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_size() {
            let owner = owner();
            let result = slicekit::make_slice(&owner, begin(), end()).map(|slice| slice.size());
            assert_case!(result, $expected);
        }
    };

    // The owner after every element of the slice was doubled through it
    ([$($attrs:meta)*] doubled, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_doubled() {
            let mut owner = owner();
            let result = slicekit::make_slice(&mut owner, begin(), end()).map(|mut slice| {
                for value in slice.iter_mut() {
                    *value *= 2;
                }
            });
            let result = result.map(|()| owner);
            assert_case!(result, $expected);
        }
    };

    // Elements of a sub-slice given in the slice's own index space
    ([$($attrs:meta)*] sub_slice, { ($sub_begin:expr, $sub_end:expr) => $($expected:tt)+ }) => {
        $(#[$attrs])*
        #[test]
        fn validate_sub_slice() {
            let owner = owner();
            let result = slicekit::make_slice(&owner, begin(), end())
                .and_then(|slice| slice.sub_slice($sub_begin, $sub_end))
                .map(|sub| sub.iter().copied().collect::<Vec<i32>>());
            assert_case!(result, { $($expected)+ });
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields (now correctly capturing braces)
#[macro_export]
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    // Parse assertion field with potential attributes (handles both cases)
    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name first, owner and range second, then any order for assertions
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        owner: $owner:expr,
        range: $range:expr,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code)]

            use super::*;
            use slicekit::prelude::*;

            // A fresh owner for every test function
            fn owner() -> Vec<i32> {
                Vec::from($owner)
            }

            #[allow(clippy::reversed_empty_ranges)]
            fn begin() -> usize {
                let range: core::ops::Range<usize> = $range;
                range.start
            }

            #[allow(clippy::reversed_empty_ranges)]
            fn end() -> usize {
                let range: core::ops::Range<usize> = $range;
                range.end
            }

            // Generate all test functions
            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };
}
