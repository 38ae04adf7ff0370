//! Non-empty singly linked lists.

use core::ops::Add;

use shapes::Optional;

use crate::Annotated;
use crate::FoldError;
use crate::FoldErrors;

pub type List<T> = Annotated<Optional, T>;

/// Wraps `inner` in a new outer node.
pub fn cons<T>(head: T, inner: List<T>) -> List<T> {
    List::new(head, Some(Box::new(inner)))
}

/// Builds the list with the first item innermost, so the last item ends up at the root. An empty
/// input has no list.
pub fn from_iter<T>(items: impl IntoIterator<Item = T>) -> Option<List<T>> {
    let mut items = items.into_iter();
    let innermost = List::leaf(items.next()?);
    Some(items.fold(innermost, |inner, item| cons(item, inner)))
}

pub fn sum<T: Copy + Add<Output = T>>(head: &T, rest: Option<T>) -> T {
    match rest {
        Some(rest) => *head + rest,
        None => *head,
    }
}

/// Recovers the items in the order `from_iter` saw them.
pub fn to_vec<T: Clone>(head: &T, rest: Option<Vec<T>>) -> Vec<T> {
    let mut items = rest.unwrap_or_default();
    items.push(head.clone());
    items
}

pub fn checked_sum(list: &List<u64>) -> Result<u64, FoldErrors> {
    list.try_cata(&mut |head: &u64, rest: Option<u64>| -> Result<u64, FoldErrors> {
        head.checked_add(rest.unwrap_or(0)).ok_or_else(|| {
            FoldError::Overflow {
                head: head.to_string(),
            }
            .into()
        })
    })
}
