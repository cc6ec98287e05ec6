use thiserror::Error;

use crate::Shape;

/// Errors reported by reductions.
///
/// Most misuse (a step that is not callable, a container of an unknown shape,
/// a comparator of the wrong type) is rejected at compile time, so the only
/// run-time failure left is seedless reduction of an empty source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A reduction without a seed found no first element to seed from.
    #[error("cannot reduce an empty {shape} without a seed")]
    EmptySourceNoSeed { shape: Shape },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PairKind;

    #[test]
    fn message_names_the_shape() {
        let err = Error::EmptySourceNoSeed {
            shape: Shape::PairIterable(PairKind::Valueless),
        };

        assert_eq!(
            err.to_string(),
            "cannot reduce an empty valueless pair-iterable without a seed"
        );

        let _: &dyn std::error::Error = &err;
    }
}
