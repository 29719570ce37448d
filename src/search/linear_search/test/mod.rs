use super::code::*;

#[test]
fn test_linear_search_first_match_short_circuits() {
    assert_eq!(linear_search(&[5, 3, 5], 5), (Some(0), 1));
}

#[test]
fn test_linear_search_middle() {
    // Accesses are index + 1 on a hit
    assert_eq!(linear_search(&[1, 2, 3, 4], 3), (Some(2), 3));
}

#[test]
fn test_linear_search_absent_scans_everything() {
    for n in [0usize, 1, 17, 1000] {
        let input: Vec<u32> = (0..n as u32).map(|v| v * 2).collect();
        let (index, accesses) = linear_search(&input, 1);
        assert_eq!(index, None, "odd target cannot be found (n = {})", n);
        assert_eq!(accesses, n as u64);
    }
}

#[test]
fn test_linear_search_matches_position() {
    let input = [8, 1, 9, 1, 4, 9];
    for target in 0..12 {
        let (index, _) = linear_search(&input, target);
        assert_eq!(index, input.iter().position(|&v| v == target));
    }
}
