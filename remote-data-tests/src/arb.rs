use std::fmt::Debug;

use proptest::prelude::*;
use remote_data::RemoteData;

/// plain functions, so remote functions can be cloned, printed and compared by result
pub type Fun = fn(i64) -> i64;

pub fn arb_remote<E, A>(
    failure: impl Strategy<Value = E>,
    success: impl Strategy<Value = A>,
) -> impl Strategy<Value = RemoteData<E, A>>
where
    E: Clone + Debug,
    A: Clone + Debug,
{
    prop_oneof![
        Just(RemoteData::NotAsked),
        Just(RemoteData::Loading),
        failure.prop_map(RemoteData::Failure),
        success.prop_map(RemoteData::Success),
    ]
}

pub fn arb_error() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

pub fn arb_value() -> impl Strategy<Value = RemoteData<String, i64>> {
    arb_remote(arb_error(), any::<i64>())
}

pub fn arb_fun() -> impl Strategy<Value = Fun> {
    prop_oneof![
        Just((|x: i64| x) as Fun),
        Just((|x: i64| x.wrapping_add(1)) as Fun),
        Just((|x: i64| x.wrapping_mul(3)) as Fun),
        Just((|x: i64| x.wrapping_neg()) as Fun),
        Just((|x: i64| x >> 2) as Fun),
    ]
}

pub fn arb_remote_fun() -> impl Strategy<Value = RemoteData<String, Fun>> {
    arb_remote(arb_error(), arb_fun())
}
