use std::ops::ControlFlow;

/// The "continue accumulating" callback of a pipeline.
///
/// A reducer receives the accumulator, one value, its key and the source being
/// traversed. It either forwards the value to the next reducer, drops it, or
/// writes it into the accumulator (the terminal inserter).
///
/// The returned [`ControlFlow`] is a promise about the rest of the traversal:
/// [`Break(())`] means every later element would be dropped anyway, so the fold
/// may stop right away. Reducers that merely skip some values (like a filter)
/// still return [`Continue(())`].
///
/// [`Break(())`]: ControlFlow::Break
/// [`Continue(())`]: ControlFlow::Continue
pub trait Reducer<A, V, K, S: ?Sized> {
    fn reduce(&mut self, acc: &mut A, value: V, key: K, source: &S) -> ControlFlow<()>;
}
