use crate::Reducer;

/// One transformation stage of a pipeline.
///
/// A step knows nothing about the destination container. It is turned into a
/// [`Reducer`] by wrapping the reducer of the next stage (or the terminal
/// inserter) with [`wrap`](Step::wrap).
///
/// Type parameters:
///
/// - `A`: the accumulator the pipeline writes into,
/// - `V`: the value type this step receives,
/// - `K`: the key type of the source,
/// - `S`: the source being traversed.
///
/// `wrap` consumes the step, so state a step keeps while running (like the
/// "already found" flag of [`find()`](crate::find())) belongs to exactly one
/// traversal.
///
/// # Composition
///
/// For a pipeline `[s1, s2, s3]`, `s1` wraps `s2` which wraps `s3` which wraps the
/// terminal inserter. Each element therefore flows through `s1` first and `s3`
/// last, in declaration order. [`Compose`](crate::Compose) and
/// [`combine!`](crate::combine!) build exactly that nesting.
pub trait Step<A, V, K, S: ?Sized> {
    /// The value type this step forwards.
    type Output;

    /// The reducer this step becomes once it wraps `R`.
    type Wrapped<R>: Reducer<A, V, K, S>
    where
        R: Reducer<A, Self::Output, K, S>;

    fn wrap<R>(self, next: R) -> Self::Wrapped<R>
    where
        R: Reducer<A, Self::Output, K, S>;
}
