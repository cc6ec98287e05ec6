use crate::{Reducer, Step};

/// A [`Step`] that forwards every value untouched.
///
/// This is what an empty [`combine!`](crate::combine!) produces. Transducing
/// with it copies the source into the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<A, V, K, S> Step<A, V, K, S> for Identity
where
    S: ?Sized,
{
    type Output = V;

    type Wrapped<R>
        = R
    where
        R: Reducer<A, V, K, S>;

    #[inline]
    fn wrap<R>(self, next: R) -> R
    where
        R: Reducer<A, V, K, S>,
    {
        next
    }
}
