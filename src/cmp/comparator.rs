use std::{cmp::Ordering, fmt::Display};

/// Comparator acting as an `FnMut(&T, &T) -> Ordering`.
///
/// Any such closure is a comparator. [`ByDisplay`] is the default one.
pub trait Comparator<T> {
    fn cmp(&mut self, a: &T, b: &T) -> Ordering;
}

/// The default comparator: orders values by their string representation.
///
/// This is a plain lexical comparison, so `10` sorts before `2`.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use fusefold::cmp::{ByDisplay, Comparator};
///
/// assert_eq!(ByDisplay.cmp(&10, &2), Ordering::Less);
/// assert_eq!(ByDisplay.cmp(&"b", &"a"), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ByDisplay;

impl<T> Comparator<T> for ByDisplay
where
    T: Display,
{
    #[inline]
    fn cmp(&mut self, a: &T, b: &T) -> Ordering {
        default_compare(a, b)
    }
}

impl<F, T> Comparator<T> for F
where
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline]
    fn cmp(&mut self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Compares two values by their string representation.
pub fn default_compare<T>(a: &T, b: &T) -> Ordering
where
    T: Display + ?Sized,
{
    a.to_string().cmp(&b.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_compare_is_lexical() {
        let mut nums = vec![10, 2, 1, 20];
        nums.sort_by(default_compare);
        assert_eq!(nums, [1, 10, 2, 20]);
    }

    #[test]
    fn closures_are_comparators() {
        let mut reversed = |a: &i32, b: &i32| b.cmp(a);
        assert_eq!(Comparator::cmp(&mut reversed, &1, &2), Ordering::Greater);
    }
}
