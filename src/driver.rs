//! The transduction driver: picks the seed, the terminal inserter and the
//! reduction strategy, then runs the fused pipeline once over the source.

use tracing::{debug, trace};

use crate::{Accumulator, Direction, Handler, Insert, Insertion, Reducer, Source, Step};

/// Run-time options of a [`Transducer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Direction the source is traversed in.
    ///
    /// [`take()`](crate::take()) and [`find()`](crate::find()) apply to the
    /// traversal order actually used: reversed, `take(n)` keeps the last `n`
    /// elements of the source, in reverse order.
    pub direction: Direction,
}

impl Options {
    /// Options for a forward traversal.
    #[inline]
    pub const fn new() -> Self {
        Self {
            direction: Direction::Forward,
        }
    }

    /// Options for a reverse traversal.
    #[inline]
    pub const fn reversed() -> Self {
        Self {
            direction: Direction::Reverse,
        }
    }
}

/// Runs `steps` once over `source` into an empty container of the same shape.
///
/// The destination is [`Source::empty_like`] and values are written with the
/// default insertion strategy of its shape: sequences append, maps set by key,
/// sets add unique values and records assign by stringified key.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use fusefold::{combine, filter, map, transduce};
///
/// let prices = IndexMap::from([("apple", 3), ("pear", 5), ("fig", 8)]);
/// let discounted = transduce(
///     combine![filter(|&p: &i32, _, _| p > 4), map(|p: i32, _, _| p - 1)],
///     &prices,
/// );
///
/// assert_eq!(discounted, IndexMap::from([("pear", 4), ("fig", 7)]));
/// ```
pub fn transduce<S, P, U>(steps: P, source: &S) -> S::Empty<U>
where
    S: Source + ?Sized,
    P: Step<S::Empty<U>, S::Value, S::Key, S, Output = U>,
    S::Empty<U>: Accumulator<S::Key, U>,
{
    run_default(steps, source, Direction::Forward)
}

/// Runs `steps` once over `source` into `seed`, with the default insertion
/// strategy of the seed's shape.
///
/// This is how a source is converted into another shape: any source can feed
/// any destination.
///
/// # Examples
///
/// ```
/// use fusefold::{Record, map, transduce_into};
///
/// let record = Record::from([("a", 1), ("b", 2)]);
/// let values = transduce_into(map(|x: i32, _, _| x * 100), &record, vec![]);
///
/// assert_eq!(values, [100, 200]);
/// ```
pub fn transduce_into<S, P, A>(steps: P, source: &S, seed: A) -> A
where
    S: Source + ?Sized,
    P: Step<A, S::Value, S::Key, S>,
    A: Accumulator<S::Key, P::Output>,
{
    run_into(steps, source, seed, Direction::Forward)
}

/// Runs `steps` once over `source` into `seed`, writing every value that reaches
/// the end of the pipeline with `handler` instead of the default insertion.
///
/// The seed can be anything, not only a container.
///
/// # Examples
///
/// ```
/// use fusefold::{filter, transduce_with};
///
/// let sum = transduce_with(
///     filter(|&x: &i32, _, _| x > 1),
///     &vec![1, 2, 3],
///     0,
///     |sum: &mut i32, x, _| *sum += x,
/// );
///
/// assert_eq!(sum, 5);
/// ```
pub fn transduce_with<S, P, A, H>(steps: P, source: &S, seed: A, handler: H) -> A
where
    S: Source + ?Sized,
    P: Step<A, S::Value, S::Key, S>,
    H: FnMut(&mut A, P::Output, S::Key),
{
    run_with(steps, source, seed, handler, Direction::Forward)
}

/// A pipeline waiting for its source.
///
/// This is the reusable form of [`transduce()`]: the steps are kept as a
/// prototype and cloned for every run, so stateful steps like
/// [`find()`](crate::find()) start afresh each time.
///
/// # Examples
///
/// ```
/// use fusefold::{Transducer, combine, map, take};
///
/// let last_two_doubled = Transducer::new(combine![take(2), map(|x: i32, _, _| x * 2)]).reversed();
///
/// assert_eq!(last_two_doubled.run(&vec![1, 2, 3]), [6, 4]);
/// assert_eq!(last_two_doubled.run(&vec![7]), [14]);
/// ```
#[derive(Debug, Clone)]
pub struct Transducer<P> {
    steps: P,
    options: Options,
}

impl<P> Transducer<P> {
    #[inline]
    pub const fn new(steps: P) -> Self {
        Self::with_options(steps, Options::new())
    }

    #[inline]
    pub const fn with_options(steps: P, options: Options) -> Self {
        Self { steps, options }
    }

    /// Makes every run traverse its source in reverse.
    #[inline]
    pub const fn reversed(mut self) -> Self {
        self.options.direction = Direction::Reverse;
        self
    }

    #[inline]
    pub const fn options(&self) -> Options {
        self.options
    }

    /// Consumes the transducer, returning its steps.
    #[inline]
    pub fn into_steps(self) -> P {
        self.steps
    }

    /// Runs the pipeline over `source`. See [`transduce()`].
    pub fn run<S, U>(&self, source: &S) -> S::Empty<U>
    where
        S: Source + ?Sized,
        P: Clone + Step<S::Empty<U>, S::Value, S::Key, S, Output = U>,
        S::Empty<U>: Accumulator<S::Key, U>,
    {
        run_default(self.steps.clone(), source, self.options.direction)
    }

    /// Runs the pipeline over `source` into `seed`. See [`transduce_into()`].
    pub fn run_into<S, A>(&self, source: &S, seed: A) -> A
    where
        S: Source + ?Sized,
        P: Clone + Step<A, S::Value, S::Key, S>,
        A: Accumulator<S::Key, P::Output>,
    {
        run_into(self.steps.clone(), source, seed, self.options.direction)
    }

    /// Runs the pipeline over `source` into `seed` with a custom terminal
    /// inserter. See [`transduce_with()`].
    pub fn run_with<S, A, H>(&self, source: &S, seed: A, handler: H) -> A
    where
        S: Source + ?Sized,
        P: Clone + Step<A, S::Value, S::Key, S>,
        H: FnMut(&mut A, P::Output, S::Key),
    {
        run_with(
            self.steps.clone(),
            source,
            seed,
            handler,
            self.options.direction,
        )
    }
}

fn run_default<S, P, U>(steps: P, source: &S, direction: Direction) -> S::Empty<U>
where
    S: Source + ?Sized,
    P: Step<S::Empty<U>, S::Value, S::Key, S, Output = U>,
    S::Empty<U>: Accumulator<S::Key, U>,
{
    run_into(steps, source, source.empty_like(), direction)
}

fn run_into<S, P, A>(steps: P, source: &S, seed: A, direction: Direction) -> A
where
    S: Source + ?Sized,
    P: Step<A, S::Value, S::Key, S>,
    A: Accumulator<S::Key, P::Output>,
{
    let result = execute(
        steps,
        source,
        seed,
        Insert,
        direction,
        Some(Insertion::for_shape(A::SHAPE)),
    );
    trace!(size = result.size(), "transduction finished");
    result
}

fn run_with<S, P, A, H>(steps: P, source: &S, seed: A, handler: H, direction: Direction) -> A
where
    S: Source + ?Sized,
    P: Step<A, S::Value, S::Key, S>,
    H: FnMut(&mut A, P::Output, S::Key),
{
    let result = execute(steps, source, seed, Handler::new(handler), direction, None);
    trace!("transduction finished with a custom handler");
    result
}

fn execute<S, P, A, R>(
    steps: P,
    source: &S,
    seed: A,
    terminal: R,
    direction: Direction,
    insertion: Option<Insertion>,
) -> A
where
    S: Source + ?Sized,
    P: Step<A, S::Value, S::Key, S>,
    R: Reducer<A, P::Output, S::Key, S>,
{
    debug!(
        shape = %S::SHAPE,
        size = source.size(),
        ?direction,
        ?insertion,
        "transducing"
    );

    let mut reducer = steps.wrap(terminal);
    source.fold_with(seed, direction, |acc, value, key| {
        reducer.reduce(acc, value, key, source)
    })
}

#[cfg(test)]
mod tests {
    use std::{
        cell::Cell,
        collections::{BTreeMap, HashSet, VecDeque},
    };

    use indexmap::{IndexMap, IndexSet};

    use super::*;
    use crate::{Record, combine, filter, find, map, sort_by, take};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("fusefold=trace")
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn empty_pipeline_copies_every_shape() {
        init_tracing();

        let seq = vec![3, 1, 2];
        assert_eq!(transduce(combine![], &seq), seq);

        let map = IndexMap::from([("b", 1), ("a", 2)]);
        assert_eq!(transduce(combine![], &map), map);

        let set = IndexSet::from([5, 4]);
        assert_eq!(transduce(combine![], &set), set);

        let record = Record::from([("x", 'x'), ("y", 'y')]);
        assert_eq!(transduce(combine![], &record), record);
    }

    #[test]
    fn slices_and_arrays_come_back_as_vecs() {
        let array = [1, 2, 3];
        let from_array: Vec<i32> = transduce(take(2), &array);
        let from_slice: Vec<i32> = transduce(take(2), &array[1..]);

        assert_eq!(from_array, [1, 2]);
        assert_eq!(from_slice, [2, 3]);
    }

    #[test]
    fn find_visits_up_to_the_match_only() {
        init_tracing();

        let visited = Cell::new(0);
        let inserted = Cell::new(0);
        let result = transduce_with(
            find(|&x: &i32, _, _| {
                visited.set(visited.get() + 1);
                x == 3
            }),
            &vec![1, 2, 3, 4, 5],
            vec![],
            |acc: &mut Vec<i32>, x, _| {
                inserted.set(inserted.get() + 1);
                acc.push(x);
            },
        );

        assert_eq!(result, [3]);
        assert_eq!(visited.get(), 3);
        assert_eq!(inserted.get(), 1);
    }

    #[test]
    fn mapping_into_a_sequence_drops_keys() {
        let record = Record::from([("one", 1), ("two", 2), ("three", 3)]);
        let values: VecDeque<i32> = transduce_into(combine![], &record, VecDeque::new());
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn sequence_into_a_map_uses_indices_as_keys() {
        let squares = transduce_into(
            map(|x: u32, _, _| x * x),
            &vec![2_u32, 3],
            BTreeMap::<usize, u32>::new(),
        );
        assert_eq!(squares, BTreeMap::from([(0, 4), (1, 9)]));
    }

    #[test]
    fn sequence_into_a_record_stringifies_indices() {
        let record = transduce_into(combine![], &vec!["a", "b"], Record::new());
        assert_eq!(record, Record::from([("0", "a"), ("1", "b")]));
    }

    #[test]
    fn seeded_destination_is_extended() {
        let mut seed = HashSet::new();
        seed.insert(1);

        let result = transduce_into(map(|x: i32, _, _| x % 3), &vec![3, 4, 5, 6], seed);
        assert_eq!(result, HashSet::from([0, 1, 2]));
    }

    #[test]
    fn take_limit_counts_the_seed() {
        let result = transduce_into(take(3), &vec![10, 20, 30], vec![1, 2]);
        assert_eq!(result, [1, 2, 10]);
    }

    #[test]
    fn reversed_runs_restart_stateful_steps() {
        let last_even =
            Transducer::with_options(find(|&x: &i32, _, _| x % 2 == 0), Options::reversed());

        assert_eq!(last_even.run(&vec![2, 4, 5]), [4]);
        assert_eq!(last_even.run(&vec![6, 1]), [6]);
        assert_eq!(last_even.options().direction, Direction::Reverse);
    }

    #[test]
    fn run_into_and_run_with() {
        let steps = Transducer::new(combine![
            filter(|&x: &i32, _, _| x > 0),
            sort_by(|a: &i32, b: &i32| b.cmp(a)),
        ]);
        let source = vec![3, -1, 7, 5];

        assert_eq!(steps.run_into(&source, Vec::<i32>::new()), [7, 5, 3]);
        assert_eq!(steps.run_into(&source, vec![4]), [7, 5, 4, 3]);

        let count = Transducer::new(filter(|&x: &i32, _, _| x > 0)).run_with(
            &source,
            0_usize,
            |count, _, _| *count += 1,
        );
        assert_eq!(count, 3);
    }
}
