//! Conversions from other optional and result-like values into a [`RemoteData`].
//!
use std::task::Poll;

use crate::{RemoteData, Unresolved};

/// `Some(a)` becomes `Success(a)`, `None` becomes `NotAsked`.
///
/// Note that an absent value is read as "not requested", not as "requested but empty".
/// Use [`from_option`] when absence should be a failure.
pub fn from_nullable<E, A>(value: Option<A>) -> RemoteData<E, A> {
    match value {
        Some(a) => RemoteData::Success(a),
        None => RemoteData::NotAsked,
    }
}

/// `Err(e)` becomes `Failure(e)`, `Ok(a)` becomes `Success(a)`
pub fn from_either<E, A>(value: Result<A, E>) -> RemoteData<E, A> {
    match value {
        Ok(a) => RemoteData::Success(a),
        Err(e) => RemoteData::Failure(e),
    }
}

/// `Some(a)` becomes `Success(a)`, `None` becomes `Failure(default_failure)`
pub fn from_option<E, A>(default_failure: E, value: Option<A>) -> RemoteData<E, A> {
    match value {
        Some(a) => RemoteData::Success(a),
        None => RemoteData::Failure(default_failure),
    }
}

/// Snapshot of a polled fallible computation: `Pending` becomes `Loading`.
///
/// This only converts the value, it never polls anything itself.
pub fn from_poll<E, A>(value: Poll<Result<A, E>>) -> RemoteData<E, A> {
    match value {
        Poll::Pending => RemoteData::Loading,
        Poll::Ready(res) => from_either(res),
    }
}

impl<E, A> From<Result<A, E>> for RemoteData<E, A> {
    fn from(value: Result<A, E>) -> Self {
        from_either(value)
    }
}

impl<E, A> TryFrom<RemoteData<E, A>> for Result<A, E> {
    type Error = Unresolved;

    fn try_from(value: RemoteData<E, A>) -> Result<Self, Self::Error> {
        match value {
            RemoteData::NotAsked => Err(Unresolved::NotAsked),
            RemoteData::Loading => Err(Unresolved::Loading),
            RemoteData::Failure(e) => Ok(Err(e)),
            RemoteData::Success(a) => Ok(Ok(a)),
        }
    }
}
