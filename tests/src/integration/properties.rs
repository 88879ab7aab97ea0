//! # Randomised Properties
//!
//! The single-pass finder is checked against a brute-force oracle on seeded
//! random inputs, and the service is checked against the bare finder.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use dr_01_two_sum::domain::find_pair_indices_brute_force;
    use dr_01_two_sum::{find_pair_indices, PairSumApi, PairSumService};

    fn random_sequence(rng: &mut StdRng, max_len: usize, bound: i64) -> Vec<i64> {
        let len = rng.gen_range(0..=max_len);
        (0..len).map(|_| rng.gen_range(-bound..=bound)).collect()
    }

    #[test]
    fn test_agrees_with_brute_force_on_seeded_inputs() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..2_000 {
            let sequence = random_sequence(&mut rng, 40, 25);
            let target = rng.gen_range(-50..=50);

            assert_eq!(
                find_pair_indices(&sequence, target),
                find_pair_indices_brute_force(&sequence, target),
                "sequence {:?}, target {}",
                sequence,
                target
            );
        }
    }

    #[test]
    fn test_returned_pairs_are_valid() {
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..2_000 {
            let sequence = random_sequence(&mut rng, 64, 1_000);
            let target = rng.gen_range(-2_000..=2_000);

            match find_pair_indices(&sequence, target) {
                Some(pair) => {
                    assert!(pair.first < pair.second);
                    assert!(pair.second < sequence.len());
                    assert_eq!(sequence[pair.first] + sequence[pair.second], target);
                }
                None => {
                    for j in 0..sequence.len() {
                        for i in 0..j {
                            assert_ne!(sequence[i] + sequence[j], target);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_idempotent_on_seeded_inputs() {
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..500 {
            let sequence = random_sequence(&mut rng, 32, 10);
            let target = rng.gen_range(-20..=20);
            assert_eq!(
                find_pair_indices(&sequence, target),
                find_pair_indices(&sequence, target)
            );
        }
    }

    proptest! {
        #[test]
        fn prop_service_matches_finder(
            sequence in prop::collection::vec(-100i64..100, 0..48),
            target in -200i64..200,
        ) {
            let service = PairSumService::without_metrics();
            prop_assert_eq!(
                service.find_pair(&sequence, target).unwrap(),
                find_pair_indices(&sequence, target)
            );
        }
    }
}
