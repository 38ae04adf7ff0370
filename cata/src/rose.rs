//! Rose trees: every node carries a payload and any number of ordered children.

use core::fmt::Display;
use core::iter::Sum;
use core::ops::Add;

use shapes::Sequence;

use crate::Annotated;
use crate::FoldError;
use crate::FoldErrors;

pub type Rose<T> = Annotated<Sequence, T>;

pub fn leaf<T>(head: T) -> Rose<T> {
    Rose::leaf(head)
}

pub fn node<T>(head: T, children: impl IntoIterator<Item = Rose<T>>) -> Rose<T> {
    Rose::new(head, children.into_iter().map(Box::new).collect())
}

/// `1` over `2` and `3`, each of which has a single `0` leaf below it.
pub fn example() -> Rose<i64> {
    node(1, [node(2, [leaf(0)]), node(3, [leaf(0)])])
}

pub fn sum<T: Copy + Add<Output = T> + Sum>(head: &T, children: Vec<T>) -> T {
    *head + children.into_iter().sum::<T>()
}

pub fn size<T>(_: &T, children: Vec<usize>) -> usize {
    1 + children.into_iter().sum::<usize>()
}

pub fn height<T>(_: &T, children: Vec<usize>) -> usize {
    1 + children.into_iter().max().unwrap_or(0)
}

/// `head(child,child,...)`, or just `head` for a leaf. Children appear in their original order.
pub fn render<T: Display>(head: &T, children: Vec<String>) -> String {
    if children.is_empty() {
        head.to_string()
    } else {
        format!("{head}({})", children.join(","))
    }
}

/// Sums the tree, reporting every subtree whose total does not fit in a `u64`.
pub fn checked_sum(tree: &Rose<u64>) -> Result<u64, FoldErrors> {
    tree.try_cata(&mut |head: &u64, children: Vec<u64>| -> Result<u64, FoldErrors> {
        children
            .into_iter()
            .try_fold(*head, u64::checked_add)
            .ok_or_else(|| {
                FoldError::Overflow {
                    head: head.to_string(),
                }
                .into()
            })
    })
}
