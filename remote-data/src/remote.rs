/// The four possible states of a remotely fetched (or asynchronously computed) value.
///
/// 1. the value was not asked for yet, but eventually will be
/// 2. the value is being loaded
/// 3. loading or some later processing of the value failed
/// 4. the value was obtained
///
/// A caller's request usually moves `NotAsked -> Loading -> Failure | Success`, but
/// nothing here enforces that: any variant can be built directly at any time.
///
/// The payload of a `Failure` or `Success` is never modified in place, every operation
/// consumes its input and produces a new `RemoteData`. Use [`RemoteData::as_ref`] to
/// operate on a borrowed view instead.
///
/// ```rust
/// use remote_data::RemoteData;
///
/// let search: RemoteData<String, Vec<&str>> = RemoteData::success(vec!["result1", "result2"]);
///
/// let rendered = search.fold(
///     || "use the search button".to_string(),
///     || "searching...".to_string(),
///     |err| format!("oh no, {} happened, please retry", err),
///     |results| results.join(", "),
/// );
///
/// assert_eq!(rendered, "result1, result2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteData<E, A> {
    /// no request has been made
    NotAsked,
    /// a request is in flight
    Loading,
    /// the request or some subsequent computation failed
    Failure(E),
    /// a value was obtained
    Success(A),
}

impl<E, A> Default for RemoteData<E, A> {
    fn default() -> Self {
        RemoteData::NotAsked
    }
}

impl<E, A> RemoteData<E, A> {
    pub fn not_asked() -> Self {
        RemoteData::NotAsked
    }

    pub fn loading() -> Self {
        RemoteData::Loading
    }

    pub fn failure(e: E) -> Self {
        RemoteData::Failure(e)
    }

    pub fn success(a: A) -> Self {
        RemoteData::Success(a)
    }

    /// Lift a plain value, same as [`RemoteData::success`]
    pub fn of(a: A) -> Self {
        RemoteData::Success(a)
    }

    pub fn is_not_asked(&self) -> bool {
        matches!(self, RemoteData::NotAsked)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteData::Loading)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RemoteData::Failure(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RemoteData::Success(_))
    }

    pub fn as_ref(&self) -> RemoteData<&E, &A> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Failure(e) => RemoteData::Failure(e),
            RemoteData::Success(a) => RemoteData::Success(a),
        }
    }

    pub fn as_mut(&mut self) -> RemoteData<&mut E, &mut A> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Failure(e) => RemoteData::Failure(e),
            RemoteData::Success(a) => RemoteData::Success(a),
        }
    }

    /// Apply `f` to the payload of a `Success`. Every other variant is returned as-is,
    /// including the payload of a `Failure`.
    ///
    /// | f(a -> b)   | self        | result      |
    /// | ----------- | ----------- | ----------- |
    /// | f(a -> b)   | success(a)  | success(b)  |
    /// | f(a -> b)   | not_asked   | not_asked   |
    /// | f(a -> b)   | loading     | loading     |
    /// | f(a -> b)   | failure(c)  | failure(c)  |
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> RemoteData<E, B> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Failure(e) => RemoteData::Failure(e),
            RemoteData::Success(a) => RemoteData::Success(f(a)),
        }
    }

    /// Apply `f` to the payload of a `Failure`, leaving every other variant untouched
    pub fn map_failure<D>(self, f: impl FnOnce(E) -> D) -> RemoteData<D, A> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Failure(e) => RemoteData::Failure(f(e)),
            RemoteData::Success(a) => RemoteData::Success(a),
        }
    }

    /// Sequence a computation that may itself produce any variant. Only a `Success`
    /// payload is handed to `f`; whatever `f` returns is the result.
    ///
    /// ```rust
    /// use remote_data::RemoteData;
    ///
    /// fn parse(raw: String) -> RemoteData<String, i64> {
    ///     match raw.parse() {
    ///         Ok(n) => RemoteData::success(n),
    ///         Err(_) => RemoteData::failure(format!("not a number: {}", raw)),
    ///     }
    /// }
    ///
    /// fn check(n: i64) -> RemoteData<String, i64> {
    ///     if n < 0 {
    ///         RemoteData::failure("server returned a negative count".to_string())
    ///     } else {
    ///         RemoteData::success(n)
    ///     }
    /// }
    ///
    /// let validate = |data: RemoteData<String, String>| data.chain(parse).chain(check);
    ///
    /// assert_eq!(validate(RemoteData::success("12".to_string())), RemoteData::success(12));
    /// assert!(validate(RemoteData::success("{ : []}".to_string())).is_failure());
    /// assert!(validate(RemoteData::success("-3".to_string())).is_failure());
    /// assert_eq!(validate(RemoteData::loading()), RemoteData::loading());
    /// ```
    pub fn chain<B>(self, f: impl FnOnce(A) -> RemoteData<E, B>) -> RemoteData<E, B> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Failure(e) => RemoteData::Failure(e),
            RemoteData::Success(a) => f(a),
        }
    }

    /// Recover from a `Failure` by handing its payload to `f`
    pub fn or_else<D>(self, f: impl FnOnce(E) -> RemoteData<D, A>) -> RemoteData<D, A> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Failure(e) => f(e),
            RemoteData::Success(a) => RemoteData::Success(a),
        }
    }

    /// Collapse into a single value by handling all four variants. This is the
    /// only way to get at the payload without matching on the enum directly.
    pub fn fold<B>(
        self,
        on_not_asked: impl FnOnce() -> B,
        on_loading: impl FnOnce() -> B,
        on_failure: impl FnOnce(E) -> B,
        on_success: impl FnOnce(A) -> B,
    ) -> B {
        match self {
            RemoteData::NotAsked => on_not_asked(),
            RemoteData::Loading => on_loading(),
            RemoteData::Failure(e) => on_failure(e),
            RemoteData::Success(a) => on_success(a),
        }
    }
}

pub fn map<E, A, B>(value: RemoteData<E, A>, f: impl FnOnce(A) -> B) -> RemoteData<E, B> {
    value.map(f)
}

pub fn chain<E, A, B>(
    value: RemoteData<E, A>,
    f: impl FnOnce(A) -> RemoteData<E, B>,
) -> RemoteData<E, B> {
    value.chain(f)
}

pub fn fold<E, A, B>(
    on_not_asked: impl FnOnce() -> B,
    on_loading: impl FnOnce() -> B,
    on_failure: impl FnOnce(E) -> B,
    on_success: impl FnOnce(A) -> B,
    value: RemoteData<E, A>,
) -> B {
    value.fold(on_not_asked, on_loading, on_failure, on_success)
}
