use std::cell::Cell;

use proptest::prelude::*;
use remote_data::{
    append, ApplicativeFrame, MappableFrame, MonadFrame, PartiallyApplied, RemoteData,
};

use crate::arb::{arb_fun, arb_remote_fun, arb_value, Fun};

type Token = RemoteData<String, PartiallyApplied>;
type R = RemoteData<String, i64>;

fn id<A>(a: A) -> A {
    a
}

// a kleisli arrow built from a template value: the template's variant, with the
// argument folded into any success payload
fn arrow(template: R) -> impl Fn(i64) -> R {
    move |x: i64| template.clone().map(|y| y.wrapping_add(x))
}

proptest! {
    #[test]
    fn functor_identity(v in arb_value()) {
        prop_assert_eq!(Token::map_frame(v.clone(), id), v);
    }

    #[test]
    fn functor_composition(v in arb_value(), f in arb_fun(), g in arb_fun()) {
        let twice = Token::map_frame(Token::map_frame(v.clone(), f), g);
        let fused = Token::map_frame(v, |x| g(f(x)));
        prop_assert_eq!(twice, fused);
    }

    #[test]
    fn map_leaves_non_success_alone(v in arb_value(), f in arb_fun()) {
        prop_assume!(!v.is_success());
        let calls = Cell::new(0);
        let mapped = v.clone().map(|x| {
            calls.set(calls.get() + 1);
            f(x)
        });
        prop_assert_eq!(mapped, v);
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn applicative_identity(v in arb_value()) {
        prop_assert_eq!(Token::apply(Token::pure(id::<i64>), v.clone()), v);
    }

    #[test]
    fn applicative_homomorphism(f in arb_fun(), x in any::<i64>()) {
        prop_assert_eq!(Token::apply(Token::pure(f), Token::pure(x)), Token::pure(f(x)));
    }

    #[test]
    fn applicative_interchange(u in arb_remote_fun(), y in any::<i64>()) {
        let left = Token::apply(u.clone(), Token::pure(y));
        let right = Token::apply(Token::pure(move |f: Fun| f(y)), u);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn applicative_composition(u in arb_remote_fun(), v in arb_remote_fun(), w in arb_value()) {
        let compose = |f: Fun| move |g: Fun| move |x: i64| f(g(x));
        let left = Token::apply(
            Token::apply(Token::apply(Token::pure(compose), u.clone()), v.clone()),
            w.clone(),
        );
        let right = Token::apply(u, Token::apply(v, w));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn ap_precedence(u in arb_remote_fun(), w in arb_value()) {
        let result = u.clone().ap(w.clone());

        match (&u, &w) {
            (RemoteData::Failure(left), _) => prop_assert_eq!(result, R::failure(left.clone())),
            (_, RemoteData::Failure(right)) => prop_assert_eq!(result, R::failure(right.clone())),
            _ if u.is_not_asked() || w.is_not_asked() => prop_assert!(result.is_not_asked()),
            _ if u.is_loading() || w.is_loading() => prop_assert!(result.is_loading()),
            (RemoteData::Success(f), RemoteData::Success(x)) => {
                prop_assert_eq!(result, R::success(f(*x)))
            }
            _ => unreachable!("every combination is covered above"),
        }
    }

    #[test]
    fn monad_left_identity(x in any::<i64>(), template in arb_value()) {
        let f = arrow(template);
        prop_assert_eq!(Token::flat_map(Token::pure(x), &f), f(x));
    }

    #[test]
    fn monad_right_identity(m in arb_value()) {
        prop_assert_eq!(Token::flat_map(m.clone(), Token::pure), m);
    }

    #[test]
    fn monad_associativity(m in arb_value(), t1 in arb_value(), t2 in arb_value()) {
        let f = arrow(t1);
        let g = arrow(t2);
        let left = Token::flat_map(Token::flat_map(m.clone(), &f), &g);
        let right = Token::flat_map(m, |x| Token::flat_map(f(x), &g));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn collect_agrees_with_append(a in arb_value(), b in arb_value()) {
        let collected: RemoteData<String, Vec<i64>> =
            vec![a.clone(), b.clone()].into_iter().collect();
        prop_assert_eq!(collected, append(a, b).map(|(x, y)| vec![x, y]));
    }

    #[test]
    fn fold_runs_exactly_one_branch(v in arb_value()) {
        let calls = Cell::new(0);
        let hit = |tag: &'static str| {
            calls.set(calls.get() + 1);
            tag
        };
        let tag = v.clone().fold(
            || hit("NotAsked"),
            || hit("Loading"),
            |_| hit("Failure"),
            |_| hit("Success"),
        );

        prop_assert_eq!(calls.get(), 1);
        let expected = match v {
            RemoteData::NotAsked => "NotAsked",
            RemoteData::Loading => "Loading",
            RemoteData::Failure(_) => "Failure",
            RemoteData::Success(_) => "Success",
        };
        prop_assert_eq!(tag, expected);
    }
}
