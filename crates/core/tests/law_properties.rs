//! Property-based tests for the functor and monad laws using proptest.
//!
//! Properties verified:
//! - `map` identity and composition
//! - `flat_map` left identity, right identity and associativity
//! - `flat_map` over a plain fallible transform agrees with `map`
//! - `zip` and `fallback` agree with their definitions in terms of `flat_map`
//! - Inspection is exclusive and does not change the attempt

use attempt::Attempt;
use proptest::prelude::*;

type Outcome = Attempt<i32, String>;

fn outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::Success),
        "[a-z]{1,8}".prop_map(Outcome::Failure),
    ]
}

/// Fallible step that fails on odd input.
fn halve(n: i32) -> Result<i32, String> {
    if n % 2 == 0 {
        Ok(n / 2)
    } else {
        Err(format!("odd: {n}"))
    }
}

/// Fallible step that fails on negative input.
fn non_negative(n: i32) -> Outcome {
    if n >= 0 {
        Attempt::Success(n)
    } else {
        Attempt::Failure(format!("negative: {n}"))
    }
}

// ==========================================================================
// PROPERTY: Functor laws
// ==========================================================================

proptest! {
    /// Property: mapping with an always-succeeding identity changes nothing.
    #[test]
    fn prop_map_identity(a in outcome()) {
        prop_assert_eq!(a.clone().map(Ok), a);
    }

    /// Property: two maps equal one map of the composed transform.
    #[test]
    fn prop_map_composition(a in outcome()) {
        let stepwise = a.clone().map(halve).map(|n| Ok(n.wrapping_add(1)));
        let composed = a.map(|n| halve(n).map(|h| h.wrapping_add(1)));
        prop_assert_eq!(stepwise, composed);
    }
}

// ==========================================================================
// PROPERTY: Monad laws
// ==========================================================================

proptest! {
    /// Property: wrapping a value then flat-mapping equals applying directly.
    #[test]
    fn prop_left_identity(n in any::<i32>()) {
        prop_assert_eq!(Outcome::success(n).flat_map(non_negative), non_negative(n));
    }

    /// Property: flat-mapping the success constructor changes nothing.
    #[test]
    fn prop_right_identity(a in outcome()) {
        prop_assert_eq!(a.clone().flat_map(Attempt::success), a);
    }

    /// Property: nesting of flat_map does not matter.
    #[test]
    fn prop_associativity(a in outcome()) {
        let left = a.clone().flat_map(non_negative).flat_map(halve);
        let right = a.flat_map(|n| non_negative(n).flat_map(halve));
        prop_assert_eq!(left, right);
    }

    /// Property: both call shapes of flat_map agree with map.
    #[test]
    fn prop_flat_map_plain_fallible_is_map(a in outcome()) {
        prop_assert_eq!(a.clone().flat_map(halve), a.map(halve));
    }
}

// ==========================================================================
// PROPERTY: Derived combinators
// ==========================================================================

proptest! {
    /// Property: zip equals flat_map over the second operand.
    #[test]
    fn prop_zip_definition(a in outcome(), b in outcome()) {
        let zipped = a.clone().zip(|| b.clone());
        let defined = a.flat_map(|x| b.map(|y| Ok((x, y))));
        prop_assert_eq!(zipped, defined);
    }

    /// Property: zip_with equals zip followed by the combiner.
    #[test]
    fn prop_zip_with_definition(a in outcome(), b in outcome()) {
        let combined = a.clone().zip_with(|| b.clone(), i32::wrapping_sub);
        let via_zip = a.zip(|| b).map(|(x, y)| Ok(x.wrapping_sub(y)));
        prop_assert_eq!(combined, via_zip);
    }

    /// Property: fallback keeps a success and otherwise yields the alternative.
    #[test]
    fn prop_fallback_definition(a in outcome(), b in outcome()) {
        let expected = if a.is_success() { a.clone() } else { b.clone() };
        prop_assert_eq!(a.fallback(|| b), expected);
    }

    /// Property: perform never changes a success payload.
    #[test]
    fn prop_perform_preserves_value(a in outcome()) {
        let performed = a.clone().perform(|_| Ok(()));
        prop_assert_eq!(performed, a);
    }
}

// ==========================================================================
// PROPERTY: Inspection
// ==========================================================================

proptest! {
    /// Property: exactly one side is present, and looking twice changes nothing.
    #[test]
    fn prop_inspection_exclusive_and_stable(a in outcome()) {
        prop_assert_ne!(a.is_success(), a.is_failure());
        prop_assert_eq!(a.value().is_some(), a.is_success());
        prop_assert_eq!(a.error().is_some(), a.is_failure());
        prop_assert_eq!(a.value(), a.value());
        prop_assert_eq!(a.error(), a.error());
    }

    /// Property: into_result and From<Result> are inverse.
    #[test]
    fn prop_result_round_trip(a in outcome()) {
        prop_assert_eq!(Attempt::from(a.clone().into_result()), a);
    }
}
