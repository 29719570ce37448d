use super::code::*;

#[test]
fn test_bubble_sort_basic() {
    let (sorted, _) = bubble_sort(&[5, 1, 4, 2, 8]);
    assert_eq!(sorted, vec![1, 2, 4, 5, 8]);
}

#[test]
fn test_bubble_sort_empty_and_single() {
    assert_eq!(bubble_sort(&[]), (vec![], 0));
    assert_eq!(bubble_sort(&[7]), (vec![7], 0));
}

#[test]
fn test_bubble_sort_already_sorted_counts_only_comparisons() {
    for n in [2usize, 10, 100] {
        let input: Vec<u32> = (0..n as u32).collect();
        let (sorted, accesses) = bubble_sort(&input);

        assert_eq!(sorted, input, "sorted input must come back unchanged");
        // n*(n-1)/2 comparisons, 2 accesses each, no swaps
        let expected = 2 * (n * (n - 1) / 2) as u64;
        assert_eq!(accesses, expected, "access count for n = {}", n);
    }
}

#[test]
fn test_bubble_sort_reversed_swaps_every_comparison() {
    // Worst case: every comparison swaps
    let n = 50usize;
    let input: Vec<u32> = (0..n as u32).rev().collect();
    let (sorted, accesses) = bubble_sort(&input);

    let comparisons = (n * (n - 1) / 2) as u64;
    assert_eq!(sorted, (0..n as u32).collect::<Vec<_>>());
    assert_eq!(
        accesses,
        comparisons * (ACCESSES_PER_COMPARISON + ACCESSES_PER_SWAP)
    );
}

#[test]
fn test_bubble_sort_duplicates_do_not_swap() {
    let (sorted, accesses) = bubble_sort(&[3, 3, 3]);
    assert_eq!(sorted, vec![3, 3, 3]);
    assert_eq!(accesses, 3 * ACCESSES_PER_COMPARISON);
}

#[test]
fn test_bubble_sort_leaves_input_untouched() {
    let input = vec![9, 4, 6];
    let _ = bubble_sort(&input);
    assert_eq!(input, vec![9, 4, 6]);
}
