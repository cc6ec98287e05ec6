use std::fmt::Debug;

/// A step wrapped around the reducer of the next stage.
///
/// This is what every built-in [`Step`](crate::Step) becomes once a traversal
/// starts. It owns both the step (with any per-traversal state) and the
/// continuation.
#[derive(Clone)]
pub struct Stage<T, R> {
    pub(crate) step: T,
    pub(crate) next: R,
}

impl<T, R> Stage<T, R> {
    #[inline]
    pub(crate) fn new(step: T, next: R) -> Self {
        Self { step, next }
    }
}

impl<T: Debug, R: Debug> Debug for Stage<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("step", &self.step)
            .field("next", &self.next)
            .finish()
    }
}
