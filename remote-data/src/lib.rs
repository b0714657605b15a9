//! A value that is fetched from somewhere else, or computed asynchronously, goes through
//! a small lifecycle: nobody asked for it yet, it is loading, loading failed, or it arrived.
//! [`RemoteData`] tracks exactly those four states, and provides the functor / applicative /
//! monad operations needed to transform and combine such values without checking for
//! missing data or errors at every step.
//!
//! ```rust
//! use remote_data::{map2, RemoteData};
//!
//! let user: RemoteData<String, &str> = RemoteData::success("axel");
//! let unread: RemoteData<String, u32> = RemoteData::loading();
//!
//! let banner = map2(|name, n| format!("{}: {} unread", name, n), user, unread);
//! assert!(banner.is_loading());
//! ```
//!
//! Nothing here performs I/O or schedules work: every operation is a pure function of its
//! inputs. Deciding when a value moves from `Loading` to `Failure` or `Success`, and
//! discarding responses to superseded requests, is left to the caller.
mod adapters;
mod apply;
mod error;
mod frame;
mod remote;
#[cfg(feature = "serde")]
mod wire;

pub use adapters::{from_either, from_nullable, from_option, from_poll};
pub use apply::{ap, append, map2, map3};
pub use error::Unresolved;
pub use frame::{ApplicativeFrame, MappableFrame, MonadFrame, PartiallyApplied};
pub use remote::{chain, fold, map, RemoteData};
