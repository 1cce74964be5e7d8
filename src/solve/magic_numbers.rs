//! Sum and length combinations with exactly one partition

use once_cell::sync::Lazy;

use crate::puzzle::Value;

/// Every `(total, values)` pair where the values are the only distinct
/// partition of the total with that length
pub(crate) static MAGIC_NUMBERS: Lazy<Vec<(u32, Vec<Value>)>> = Lazy::new(|| {
    vec![
        (3, vec![2, 1]),
        (4, vec![3, 1]),
        (16, vec![9, 7]),
        (17, vec![9, 8]),
        (6, vec![3, 2, 1]),
        (7, vec![4, 2, 1]),
        (23, vec![9, 8, 6]),
        (24, vec![9, 8, 7]),
        (10, vec![4, 3, 2, 1]),
        (11, vec![5, 3, 2, 1]),
        (29, vec![9, 8, 7, 5]),
        (30, vec![9, 8, 7, 6]),
        (15, vec![5, 4, 3, 2, 1]),
        (16, vec![6, 4, 3, 2, 1]),
        (34, vec![9, 8, 7, 6, 4]),
        (35, vec![9, 8, 7, 6, 5]),
        (21, vec![6, 5, 4, 3, 2, 1]),
        (22, vec![7, 5, 4, 3, 2, 1]),
        (38, vec![9, 8, 7, 6, 5, 3]),
        (39, vec![9, 8, 7, 6, 5, 4]),
        (28, vec![7, 6, 5, 4, 3, 2, 1]),
        (29, vec![8, 6, 5, 4, 3, 2, 1]),
        (41, vec![9, 8, 7, 6, 5, 4, 2]),
        (42, vec![9, 8, 7, 6, 5, 4, 3]),
        (36, vec![8, 7, 6, 5, 4, 3, 2, 1]),
        (37, vec![9, 7, 6, 5, 4, 3, 2, 1]),
        (38, vec![9, 8, 6, 5, 4, 3, 2, 1]),
        (39, vec![9, 8, 7, 5, 4, 3, 2, 1]),
        (40, vec![9, 8, 7, 6, 4, 3, 2, 1]),
        (41, vec![9, 8, 7, 6, 5, 3, 2, 1]),
        (42, vec![9, 8, 7, 6, 5, 4, 2, 1]),
        (43, vec![9, 8, 7, 6, 5, 4, 3, 1]),
        (44, vec![9, 8, 7, 6, 5, 4, 3, 2]),
        (45, vec![9, 8, 7, 6, 5, 4, 3, 2, 1]),
    ]
});
