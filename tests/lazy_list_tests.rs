//! Unit tests for LazyList and the list free functions.
//!
//! Tests cover:
//! - Construction, head and tail
//! - Empty-list failures
//! - Lazy elements and generated tails
//! - Arithmetic progressions
//! - Structural sharing and standard traits

use functoid::compose;
use functoid::compose::curry;
use functoid::error::FunctoidError;
use functoid::persistent::{
    Generator, LazyList, cons, enum_from, enum_from_to, head, is_empty, tail,
};
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn counted_powers_of_two(calls: Arc<AtomicUsize>) -> LazyList<u64> {
    LazyList::generate(1, move |previous: &LazyList<u64>| {
        calls.fetch_add(1, Ordering::SeqCst);
        match (previous.head(), previous.generator()) {
            (Ok(value), Some(generator)) => LazyList::with_generator(value * 2, generator),
            _ => LazyList::new(),
        }
    })
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn new_list_is_empty() {
    let list: LazyList<i32> = LazyList::new();
    assert!(list.is_empty());
    assert!(is_empty(&list));
    assert_eq!(list.iter().count(), 0);
}

#[rstest]
fn default_list_is_empty() {
    let list: LazyList<String> = LazyList::default();
    assert!(list.is_empty());
}

#[rstest]
fn cons_builds_in_reverse_order() {
    let list = LazyList::new().cons(3).cons(2).cons(1);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[rstest]
fn free_cons_prepends() {
    let list = cons("a", cons("b", LazyList::new()));
    assert_eq!(head(&list), Ok(&"a"));
    assert_eq!(head(&tail(&list).unwrap()), Ok(&"b"));
}

#[rstest]
fn singleton_has_one_element() {
    let list = LazyList::singleton('x');
    assert_eq!(list.iter().collect::<Vec<_>>(), vec![&'x']);
}

#[rstest]
fn collect_preserves_order() {
    let list: LazyList<usize> = (0..10).collect();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());
}

#[rstest]
fn for_loop_over_reference() {
    let list: LazyList<i32> = vec![1, 2, 3].into_iter().collect();
    let mut total = 0;
    for value in &list {
        total += value;
    }
    assert_eq!(total, 6);
}

// =============================================================================
// Empty-list failures
// =============================================================================

#[rstest]
fn head_of_empty_fails() {
    let list: LazyList<i32> = LazyList::new();
    assert_eq!(
        head(&list),
        Err(FunctoidError::EmptyContainerAccess { operation: "head" })
    );
}

#[rstest]
fn tail_of_empty_fails() {
    let list: LazyList<i32> = LazyList::new();
    assert_eq!(
        tail(&list).map(|_| ()),
        Err(FunctoidError::EmptyContainerAccess { operation: "tail" })
    );
}

#[rstest]
#[case(0, Ok(10))]
#[case(2, Ok(30))]
#[case(3, Err(FunctoidError::EmptyContainerAccess { operation: "nth" }))]
#[case(100, Err(FunctoidError::EmptyContainerAccess { operation: "nth" }))]
fn nth_on_finite_list(#[case] index: usize, #[case] expected: Result<i32, FunctoidError>) {
    let list: LazyList<i32> = vec![10, 20, 30].into_iter().collect();
    assert_eq!(list.nth(index).copied(), expected);
}

#[rstest]
fn empty_access_error_display() {
    let list: LazyList<i32> = LazyList::new();
    assert_eq!(list.head().unwrap_err().to_string(), "head: empty container");
    assert_eq!(
        list.tail().map(|_| ()).unwrap_err().to_string(),
        "tail: empty container"
    );
}

// =============================================================================
// Lazy elements
// =============================================================================

#[rstest]
fn cons_lazy_forces_on_first_head() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = Arc::clone(&calls);
    let list = LazyList::new().cons_lazy(move || {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        "computed"
    });

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(!list.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(list.head(), Ok(&"computed"));
    assert_eq!(list.clone().head(), Ok(&"computed"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
fn tail_does_not_force_head() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = Arc::clone(&calls);
    let list = LazyList::singleton(2).cons_lazy(move || {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        1
    });

    assert_eq!(list.tail().and_then(|rest| rest.head().copied()), Ok(2));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Generated tails
// =============================================================================

#[rstest]
fn generator_is_not_run_at_construction() {
    let calls = Arc::new(AtomicUsize::new(0));
    let powers = counted_powers_of_two(Arc::clone(&calls));
    assert_eq!(powers.head(), Ok(&1));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
fn generated_tail_is_cached_and_shared() {
    let calls = Arc::new(AtomicUsize::new(0));
    let powers = counted_powers_of_two(Arc::clone(&calls));
    let alias = powers.clone();

    assert_eq!(powers.nth(10), Ok(&1024));
    assert_eq!(calls.load(Ordering::SeqCst), 10);

    assert_eq!(alias.nth(10), Ok(&1024));
    assert_eq!(alias.nth(5), Ok(&32));
    assert_eq!(calls.load(Ordering::SeqCst), 10);

    assert!(powers.tail().unwrap().ptr_eq(&alias.tail().unwrap()));
}

#[rstest]
fn fresh_generation_starts_new_chain() {
    let calls = Arc::new(AtomicUsize::new(0));
    let first = counted_powers_of_two(Arc::clone(&calls));
    let second = counted_powers_of_two(Arc::clone(&calls));

    let _ = first.nth(3);
    let _ = second.nth(3);
    assert_eq!(calls.load(Ordering::SeqCst), 6);
    assert!(!first.ptr_eq(&second));
}

#[rstest]
fn generator_is_shared_along_the_chain() {
    let powers = counted_powers_of_two(Arc::new(AtomicUsize::new(0)));
    let first: Generator<u64> = powers.generator().unwrap();
    let third: Generator<u64> = powers.drop_first(2).generator().unwrap();
    assert!(same_generator(&first, &third));
}

#[cfg(not(feature = "sync"))]
fn same_generator(left: &Generator<u64>, right: &Generator<u64>) -> bool {
    std::rc::Rc::ptr_eq(left, right)
}

#[cfg(feature = "sync")]
fn same_generator(left: &Generator<u64>, right: &Generator<u64>) -> bool {
    Arc::ptr_eq(left, right)
}

#[rstest]
fn cons_nodes_have_no_generator() {
    let list = LazyList::new().cons(1);
    assert!(list.generator().is_none());
    assert!(LazyList::<i32>::new().generator().is_none());
}

#[rstest]
fn finite_generator_ends_list() {
    let countdown = LazyList::generate(3_u32, |previous: &LazyList<u32>| {
        match (previous.head(), previous.generator()) {
            (Ok(&value), Some(generator)) if value > 0 => {
                LazyList::with_generator(value - 1, generator)
            }
            _ => LazyList::new(),
        }
    });
    assert_eq!(countdown.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1, 0]);
}

#[rstest]
fn cons_in_front_of_infinite_list() {
    let naturals = enum_from(1, 2);
    let with_zero = cons(0, naturals.clone());
    assert_eq!(
        with_zero.iter().copied().take(4).collect::<Vec<_>>(),
        vec![0, 1, 2, 3]
    );
    assert!(with_zero.tail().unwrap().ptr_eq(&naturals));
}

// =============================================================================
// Arithmetic progressions
// =============================================================================

#[rstest]
#[case(1, 3, 4, 9)]
#[case(1, 2, 4, 5)]
#[case(0, 10, 3, 30)]
#[case(5, 5, 100, 5)]
#[case(10, 7, 2, 4)]
fn enum_from_nth(#[case] x1: i64, #[case] x2: i64, #[case] index: usize, #[case] expected: i64) {
    assert_eq!(enum_from(x1, x2).nth(index), Ok(&expected));
}

#[rstest]
#[case(1, 3, 10, vec![1, 3, 5, 7, 9])]
#[case(1, 2, 5, vec![1, 2, 3, 4, 5])]
#[case(2, 4, 10, vec![2, 4, 6, 8, 10])]
#[case(0, 100, 50, vec![0])]
#[case(7, 8, 0, vec![7])]
fn enum_from_to_bounds(
    #[case] x1: i32,
    #[case] x2: i32,
    #[case] xn: i32,
    #[case] expected: Vec<i32>,
) {
    assert_eq!(enum_from_to(x1, x2, xn).iter().copied().collect::<Vec<_>>(), expected);
}

#[rstest]
fn enum_from_to_non_positive_step_is_unbounded() {
    let constant = enum_from_to(4, 4, 10);
    assert_eq!(constant.iter().copied().take(3).collect::<Vec<_>>(), vec![4, 4, 4]);
    assert_eq!(constant.nth(1000), Ok(&4));
}

#[rstest]
fn enum_from_to_is_restartable() {
    let first = enum_from_to(1, 3, 10);
    let second = enum_from_to(1, 3, 10);
    assert_eq!(first, second);
    assert!(!first.ptr_eq(&second));
}

// =============================================================================
// drop_first
// =============================================================================

#[rstest]
#[case(0, vec![1, 2, 3])]
#[case(1, vec![2, 3])]
#[case(3, vec![])]
#[case(7, vec![])]
fn drop_first_saturates(#[case] count: usize, #[case] expected: Vec<i32>) {
    let list: LazyList<i32> = (1..=3).collect();
    assert_eq!(list.drop_first(count).iter().copied().collect::<Vec<_>>(), expected);
}

#[rstest]
fn drop_first_on_infinite_list() {
    let odd = enum_from(1, 3);
    assert_eq!(odd.drop_first(100).head(), Ok(&201));
}

// =============================================================================
// Structural sharing
// =============================================================================

#[rstest]
fn cons_shares_existing_list() {
    let base: LazyList<i32> = (1..=3).collect();
    let left = base.cons(10);
    let right = base.cons(20);

    assert!(left.tail().unwrap().ptr_eq(&base));
    assert!(right.tail().unwrap().ptr_eq(&base));
    assert_eq!(base.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[rstest]
fn equality_compares_elements() {
    let left: LazyList<i32> = (1..=3).collect();
    let right = cons(1, cons(2, cons(3, LazyList::new())));
    let longer: LazyList<i32> = (1..=4).collect();

    assert_eq!(left, right);
    assert_ne!(left, longer);
    assert_ne!(longer, left);
    assert_eq!(LazyList::<i32>::new(), LazyList::new());
}

#[rstest]
fn equality_of_generated_and_cons_lists() {
    let generated = enum_from_to(1, 2, 4);
    let explicit: LazyList<i32> = (1..=4).collect();
    assert_eq!(generated, explicit);
}

#[rstest]
fn debug_shows_materialized_prefix() {
    let naturals = enum_from(0, 1);
    assert_eq!(format!("{naturals:?}"), "[0, ..]");
    let _ = naturals.nth(3);
    assert_eq!(format!("{naturals:?}"), "[0, 1, 2, 3, ..]");

    let finite: LazyList<i32> = (1..=2).collect();
    assert_eq!(format!("{finite:?}"), "[1, 2]");
    assert_eq!(format!("{:?}", LazyList::<i32>::new()), "[]");
}

#[rstest]
fn long_list_drops_without_overflow() {
    let naturals = enum_from(0_u64, 1);
    assert_eq!(naturals.nth(300_000), Ok(&300_000));
    drop(naturals);
}

// =============================================================================
// With curried callables
// =============================================================================

#[rstest]
fn curried_cons_prepends() {
    let prepend = curry(cons::<&str>);
    let list = prepend.call("first", prepend.call("second", LazyList::new()));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["first", "second"]);
}

#[rstest]
fn accessors_chain_through_composition() {
    let rest = |list: LazyList<i64>| tail(&list).unwrap_or_default();
    let first = |list: LazyList<i64>| head(&list).copied();
    let fifth = compose!(first, rest, rest, rest, rest);

    assert_eq!(fifth.call(enum_from(1, 3)), Ok(9));
    assert_eq!(
        fifth.call((1..=3).collect()),
        Err(FunctoidError::EmptyContainerAccess { operation: "head" })
    );
}

#[rstest]
fn curried_cons_chain_through_composition() {
    let prepend = curry(cons::<i32>);
    let counted = compose!(prepend.apply(0), prepend.apply(1), prepend.apply(2));
    let tail_of_naturals = enum_from(3, 4);

    let list = counted.call(tail_of_naturals.clone());
    assert_eq!(list.iter().copied().take(6).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
    assert!(list.drop_first(3).ptr_eq(&tail_of_naturals));
}
