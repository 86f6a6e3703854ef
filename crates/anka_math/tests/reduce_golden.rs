//! Integration tests for the reduction primitives.
//!
//! Exhaustive sweeps over integer ranges rather than sampled inputs.

use anka_math::{
    BirthDate, MASTER_NUMBERS, SpecialPolicy, digit_sum, is_master, reduce_digit, reduce_matrix,
    reduction_chain,
};

// ---------------------------------------------------------------------------
// 1..=9 reducer
// ---------------------------------------------------------------------------

#[test]
fn collapse_always_single_digit_and_idempotent() {
    for n in 0..200_000u32 {
        let r = reduce_digit(n, SpecialPolicy::Collapse);
        assert!(r <= 9, "reduce({n}) = {r}");
        assert_eq!(reduce_digit(r, SpecialPolicy::Collapse), r, "n = {n}");
    }
}

#[test]
fn preserve_yields_digit_or_master() {
    for n in 1..200_000u32 {
        let r = reduce_digit(n, SpecialPolicy::Preserve);
        if is_master(n) {
            assert_eq!(r, n);
        } else {
            assert!((1..=9).contains(&r) || is_master(r), "reduce({n}) = {r}");
        }
        assert_eq!(reduce_digit(r, SpecialPolicy::Preserve), r, "n = {n}");
    }
}

#[test]
fn collapse_matches_digital_root() {
    // Digital root: 1 + (n - 1) mod 9 for n > 0.
    for n in 1..50_000u32 {
        assert_eq!(reduce_digit(n, SpecialPolicy::Collapse), 1 + (n - 1) % 9);
    }
}

#[test]
fn masters_listed() {
    assert_eq!(MASTER_NUMBERS, [11, 22, 33]);
    let found: Vec<u32> = (0..100).filter(|&n| is_master(n)).collect();
    assert_eq!(found, vec![11, 22, 33]);
}

#[test]
fn chain_value_matches_reduce() {
    for n in 0..20_000u32 {
        for policy in [SpecialPolicy::Preserve, SpecialPolicy::Collapse] {
            let chain = reduction_chain(n, policy);
            assert_eq!(chain.value, reduce_digit(n, policy));
            assert_eq!(chain.steps.first(), Some(&n));
            assert_eq!(chain.steps.last(), Some(&chain.value));
        }
    }
}

// ---------------------------------------------------------------------------
// 1..=22 matrix reducer
// ---------------------------------------------------------------------------

#[test]
fn matrix_always_in_1_to_22() {
    for n in 0..200_000u32 {
        let a = reduce_matrix(n).get();
        assert!((1..=22).contains(&a), "reduce_matrix({n}) = {a}");
    }
}

#[test]
fn matrix_idempotent() {
    for n in 0..10_000u32 {
        let a = reduce_matrix(n).get();
        assert_eq!(reduce_matrix(a).get(), a);
    }
}

#[test]
fn matrix_zero_never_zero() {
    assert_eq!(reduce_matrix(0).get(), 22);
    // 22 mod 22 style results
    assert_eq!(reduce_matrix(44 % 22).get(), 22);
}

#[test]
fn matrix_and_digit_reducers_disagree_somewhere_in_range() {
    // Guard against one reducer being implemented via the other.
    let differing = (10..=22u32)
        .filter(|&n| reduce_matrix(n).get() != reduce_digit(n, SpecialPolicy::Preserve))
        .count();
    assert!(differing > 0);
    assert_eq!(reduce_matrix(0).get(), 22);
    assert_eq!(reduce_digit(0, SpecialPolicy::Collapse), 0);
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

#[test]
fn life_path_scenario_digit_sum() {
    let d = BirthDate::parse("1990-03-15").unwrap();
    let total: u32 = d.digits().iter().sum();
    assert_eq!(total, 28);
    assert_eq!(reduce_digit(total, SpecialPolicy::Preserve), 1);
}

#[test]
fn digit_sum_commutes_with_permutation() {
    // 1990-03-15 and 1950-01-39 do not both exist, so compare against a
    // real date with the same digit multiset: 1951-09-30.
    let a = BirthDate::parse("1990-03-15").unwrap();
    let b = BirthDate::parse("1951-09-30").unwrap();
    let mut da = a.digits();
    let mut db = b.digits();
    da.sort_unstable();
    db.sort_unstable();
    assert_eq!(da, db);
    assert_eq!(da.iter().sum::<u32>(), db.iter().sum::<u32>());
}

#[test]
fn every_date_in_range_parses_and_round_trips() {
    let mut count = 0;
    for year in [1900u32, 1999, 2000, 2024, 2100] {
        for month in 1..=12u32 {
            for day in 1..=31u32 {
                if let Ok(d) = BirthDate::new(day, month, year) {
                    let parsed = BirthDate::parse(&d.canonical()).unwrap();
                    assert_eq!(parsed, d);
                    assert_eq!(
                        d.digits().iter().sum::<u32>(),
                        digit_sum(year) + digit_sum(month) + digit_sum(day)
                    );
                    count += 1;
                }
            }
        }
    }
    // 1900 and 2100 are not leap years; 2000 and 2024 are.
    assert_eq!(count, 365 * 3 + 366 * 2);
}
