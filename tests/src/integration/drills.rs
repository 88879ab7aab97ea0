//! # Drills Together
//!
//! The drills share no code, but their outputs compose: sequences from
//! `dr-03` and traversals from `dr-02` feed the pair search in `dr-01`.

#[cfg(test)]
mod tests {
    use dr_01_two_sum::{find_pair_indices, PairIndices};
    use dr_02_binary_tree::BinaryTree;
    use dr_03_int_sequence::{int_seq, IntSeq};

    #[test]
    fn test_pair_search_over_generated_sequence() {
        // 1..=10: the first j with an earlier complement for 11 is j=5 (value 6, pairs with 5)
        let sequence: Vec<i64> = IntSeq::new().take(10).collect();
        assert_eq!(find_pair_indices(&sequence, 11), Some(PairIndices::new(4, 5)));
        assert_eq!(find_pair_indices(&sequence, 2), None);
    }

    #[test]
    fn test_pair_search_over_closure_output() {
        let mut next = int_seq();
        let sequence: Vec<i64> = std::iter::repeat_with(|| next()).take(5).collect();
        assert_eq!(sequence, vec![1, 2, 3, 4, 5]);
        assert_eq!(find_pair_indices(&sequence, 9), Some(PairIndices::new(3, 4)));
    }

    #[test]
    fn test_pair_search_over_tree_traversal() {
        let tree: BinaryTree = [5, 3, 3, 8, 8, 9].into_iter().collect();
        let sorted = tree.in_order();
        assert_eq!(sorted, vec![3, 5, 8, 9]);

        // Duplicates were dropped by the tree, so 3 + 3 cannot pair
        assert_eq!(find_pair_indices(&sorted, 6), None);
        assert_eq!(find_pair_indices(&sorted, 13), Some(PairIndices::new(1, 2)));
    }

    #[test]
    fn test_tree_built_from_found_indices() {
        let sequence = [4, 1, 7, 3, 6];
        let mut tree = BinaryTree::new();
        for target in 0..20 {
            if let Some(pair) = find_pair_indices(&sequence, target) {
                tree.insert(pair.second as i64);
            }
        }
        assert!(tree.size() > 0);
        assert!(tree.in_order().windows(2).all(|w| w[0] < w[1]));
    }
}
