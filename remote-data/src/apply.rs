use crate::RemoteData;

impl<E, F> RemoteData<E, F> {
    /// Apply a remote function to a remote argument.
    ///
    /// Only `Success(f)` applied to `Success(a)` runs `f`. Otherwise the result is picked
    /// by precedence: a `Failure` wins over everything (the function side's failure over the
    /// argument side's), then `NotAsked` wins over `Loading`, and both win over `Success`.
    ///
    /// | self (a -> b)    | arg          | result            |
    /// | ---------------- | ------------ | ----------------- |
    /// | success(a -> b)  | success(a)   | success(b)        |
    /// | success(a -> b)  | not_asked    | not_asked         |
    /// | success(a -> b)  | loading      | loading           |
    /// | success(a -> b)  | failure(c)   | failure(c)        |
    /// | not_asked        | failure(c)   | failure(c)        |
    /// | loading          | failure(c)   | failure(c)        |
    /// | failure(d)       | failure(c)   | failure(d)        |
    /// | not_asked        | any other    | not_asked         |
    /// | loading          | not_asked    | not_asked         |
    /// | loading          | loading      | loading           |
    /// | loading          | success(a)   | loading           |
    ///
    /// ```rust
    /// use remote_data::RemoteData;
    ///
    /// let f: RemoteData<&str, fn(&str) -> usize> = RemoteData::success(str::len);
    /// assert_eq!(f.ap(RemoteData::success("abc")), RemoteData::success(3));
    ///
    /// let f: RemoteData<&str, fn(&str) -> usize> = RemoteData::failure("d");
    /// assert_eq!(f.ap(RemoteData::<&str, &str>::failure("c")), RemoteData::failure("d"));
    /// ```
    pub fn ap<A, B>(self, arg: RemoteData<E, A>) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> B,
    {
        use RemoteData::*;

        // arm order is the precedence order
        match (self, arg) {
            (Success(f), Success(a)) => Success(f(a)),
            (Failure(e), _) => Failure(e),
            (_, Failure(e)) => Failure(e),
            (NotAsked, _) | (_, NotAsked) => NotAsked,
            (Loading, _) | (_, Loading) => Loading,
        }
    }
}

pub fn ap<E, A, B, F: FnOnce(A) -> B>(
    value_of_function: RemoteData<E, F>,
    value_of_argument: RemoteData<E, A>,
) -> RemoteData<E, B> {
    value_of_function.ap(value_of_argument)
}

/// Apply a two-argument function across two remote values, combining their states
/// with the same precedence as [`RemoteData::ap`]
pub fn map2<E, A, B, C>(
    f: impl FnOnce(A, B) -> C,
    value_a: RemoteData<E, A>,
    value_b: RemoteData<E, B>,
) -> RemoteData<E, C> {
    value_a.map(move |a: A| move |b: B| f(a, b)).ap(value_b)
}

/// Three-argument version of [`map2`], combining left to right
pub fn map3<E, A, B, C, D>(
    f: impl FnOnce(A, B, C) -> D,
    value_a: RemoteData<E, A>,
    value_b: RemoteData<E, B>,
    value_c: RemoteData<E, C>,
) -> RemoteData<E, D> {
    value_a
        .map(move |a: A| move |b: B| move |c: C| f(a, b, c))
        .ap(value_b)
        .ap(value_c)
}

pub fn append<E, A, B>(
    value_a: RemoteData<E, A>,
    value_b: RemoteData<E, B>,
) -> RemoteData<E, (A, B)> {
    map2(|a, b| (a, b), value_a, value_b)
}

/// Combine many remote values into one remote `Vec`, left to right, with the
/// precedence of [`RemoteData::ap`]. An empty iterator gives `Success(vec![])`.
impl<E, A> FromIterator<RemoteData<E, A>> for RemoteData<E, Vec<A>> {
    fn from_iter<I: IntoIterator<Item = RemoteData<E, A>>>(iter: I) -> Self {
        iter.into_iter().fold(RemoteData::Success(Vec::new()), |acc, next| {
            map2(
                |mut xs: Vec<A>, x: A| {
                    xs.push(x);
                    xs
                },
                acc,
                next,
            )
        })
    }
}
