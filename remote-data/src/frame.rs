use crate::RemoteData;

/// A type constructor that values can be mapped over via `map_frame` (a functor).
///
/// # Implementing this trait
///
/// Rust does not allow implementing a trait for a partially applied type: we can implement
/// a trait for `RemoteData<String, usize>` but not for `RemoteData<String, _>`. So the
/// trait is implemented for a marker token instead, by convention the type with its
/// mapped-over parameter set to the uninhabited [`PartiallyApplied`] enum:
///
/// ```rust
/// # use remote_data::{MappableFrame, PartiallyApplied, RemoteData};
/// type Token = RemoteData<String, PartiallyApplied>;
///
/// let frame: RemoteData<String, usize> = RemoteData::success(1);
/// let mapped = Token::map_frame(frame, |n| n + 10);
///
/// assert_eq!(mapped, RemoteData::success(11));
/// ```
pub trait MappableFrame {
    /// the frame type that is mapped over by `map_frame`
    type Frame<X>;

    /// Apply some function `f` to each element inside a frame
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B>;
}

/// A [`MappableFrame`] that can lift plain values and apply a frame of functions to a
/// frame of arguments (an applicative functor).
pub trait ApplicativeFrame: MappableFrame {
    fn pure<A>(a: A) -> Self::Frame<A>;

    fn apply<A, B, F: FnOnce(A) -> B>(f: Self::Frame<F>, a: Self::Frame<A>) -> Self::Frame<B>;
}

/// An [`ApplicativeFrame`] whose elements can produce whole new frames (a monad).
pub trait MonadFrame: ApplicativeFrame {
    fn flat_map<A, B>(
        input: Self::Frame<A>,
        f: impl FnOnce(A) -> Self::Frame<B>,
    ) -> Self::Frame<B>;
}

/// An uninhabited type used to define [`MappableFrame`] instances for partially-applied types.
///
/// For example: the MappableFrame instance for `RemoteData<E, A>` cannot be written over the
/// partially-applied type `RemoteData<E, _>`, so instead we write it over
/// `RemoteData<E, PartiallyApplied>`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartiallyApplied {}

impl<E> MappableFrame for RemoteData<E, PartiallyApplied> {
    type Frame<X> = RemoteData<E, X>;

    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B> {
        input.map(f)
    }
}

impl<E> ApplicativeFrame for RemoteData<E, PartiallyApplied> {
    fn pure<A>(a: A) -> Self::Frame<A> {
        RemoteData::of(a)
    }

    #[inline(always)]
    fn apply<A, B, F: FnOnce(A) -> B>(f: Self::Frame<F>, a: Self::Frame<A>) -> Self::Frame<B> {
        f.ap(a)
    }
}

impl<E> MonadFrame for RemoteData<E, PartiallyApplied> {
    #[inline(always)]
    fn flat_map<A, B>(
        input: Self::Frame<A>,
        f: impl FnOnce(A) -> Self::Frame<B>,
    ) -> Self::Frame<B> {
        input.chain(f)
    }
}
