use std::ops::ControlFlow;

use proptest::{prelude::*, test_runner::TestCaseResult};

use crate::{Insert, Reducer, Step, transduce};

/// Checks a pipeline over a slice of `i32` three ways: fed element by element,
/// through [`transduce`], and against the iterator equivalent.
///
/// `should_break` tells whether the pipeline is expected to stop the traversal
/// before the source is exhausted (or right at its last element).
pub fn proptest_steps<P>(
    mut steps_factory: impl FnMut() -> P,
    source: &[i32],
    should_break: bool,
    iter_way: impl FnOnce(&[i32]) -> Vec<i32>,
) -> TestCaseResult
where
    P: Step<Vec<i32>, i32, usize, [i32], Output = i32>,
{
    let expected = iter_way(source);

    // Fed by hand.
    let mut reducer = steps_factory().wrap(Insert);
    let mut acc: Vec<i32> = vec![];
    let mut visited = 0;
    let cf = source.iter().enumerate().try_for_each(|(index, &value)| {
        visited += 1;
        reducer.reduce(&mut acc, value, index, source)
    });
    prop_assert_eq!(
        cf.is_break(),
        should_break,
        "the pipeline didn't break correctly"
    );
    prop_assert_eq!(&acc, &expected, "fed by hand, the result mismatched");
    if cf == ControlFlow::Continue(()) {
        prop_assert_eq!(visited, source.len());
    }

    // Through the driver.
    prop_assert_eq!(
        transduce(steps_factory(), source),
        expected,
        "`transduce()`'s result mismatched"
    );

    Ok(())
}
