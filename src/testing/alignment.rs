use crate::testing::naivecalculations;
use crate::testing::testdata::{random_alignment_rng, RandomAlignmentOptions};
use crate::{pi_estimator, tajimas_d, watterson_estimator, Alignment, InvalidInput, PopgenError};

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn assert_invalid<T: std::fmt::Debug>(result: crate::PopgenResult<T>, expected: InvalidInput) {
    match result {
        Err(PopgenError::InvalidInput(e)) => assert_eq!(e, expected),
        other => panic!("expected {expected:?}, got {other:?}"),
    }
}

#[test]
fn every_estimator_rejects_unequal_lengths() {
    let sequences = ["AAAA", "AAAB", "AAA"];
    let expected = InvalidInput::MismatchedLength {
        index: 2,
        expected: 4,
        found: 3,
    };
    assert_invalid(pi_estimator(&sequences), expected);
    assert_invalid(watterson_estimator(&sequences), expected);
    assert_invalid(tajimas_d(&sequences), expected);
}

#[test]
fn every_estimator_rejects_a_single_sequence() {
    let sequences = ["ACGTTGCA"];
    let expected = InvalidInput::TooFewSequences { found: 1 };
    assert_invalid(pi_estimator(&sequences), expected);
    assert_invalid(watterson_estimator(&sequences), expected);
    assert_invalid(tajimas_d(&sequences), expected);
}

#[test]
fn every_estimator_rejects_no_sequences() {
    let sequences: Vec<String> = vec![];
    let expected = InvalidInput::TooFewSequences { found: 0 };
    assert_invalid(pi_estimator(&sequences), expected);
    assert_invalid(watterson_estimator(&sequences), expected);
    assert_invalid(tajimas_d(&sequences), expected);
}

#[test]
fn segregating_sites_independent_of_which_haplotype_is_first() {
    // two haplotypes; any ordering puts one of them first
    let haplotypes = ["ACGTACGTAC", "ACCTACGAAT"];
    let mut sequences = (0..9).map(|i| haplotypes[i % 2]).collect::<Vec<_>>();
    let mut rng = StdRng::seed_from_u64(1989);
    for _ in 0..20 {
        sequences.shuffle(&mut rng);
        let alignment = Alignment::new(&sequences).unwrap();
        assert_eq!(alignment.segregating_sites(), 3);
    }
}

proptest!(
// "differs from the first sequence" and "carries two or more symbols"
// are the same condition, so shuffling can never change the count
#[test]
fn segregating_sites_from_random_data(seed in 0..u64::MAX,
                                      num_sequences in 2_usize..30,
                                      length in 1_usize..200,
                                      mutation_rate in 0_f64..0.5) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sequences = random_alignment_rng(
        num_sequences,
        length,
        Some(RandomAlignmentOptions { mutation_rate }),
        &mut rng,
    );
    let naive = naivecalculations::segregating_sites(&sequences);
    let alignment = Alignment::new(&sequences).unwrap();
    prop_assert_eq!(alignment.segregating_sites(), naive);
    prop_assert!(alignment.segregating_sites() <= length);

    sequences.shuffle(&mut rng);
    prop_assert_eq!(Alignment::new(&sequences).unwrap().segregating_sites(), naive);
}

#[test]
fn pairwise_differences_cover_every_pair(seed in 0..u64::MAX,
                                         num_sequences in 2_usize..20,
                                         length in 1_usize..50) {
    let mut rng = StdRng::seed_from_u64(seed);
    let sequences = random_alignment_rng(num_sequences, length, None, &mut rng);
    let alignment = Alignment::new(&sequences).unwrap();
    let pairs = alignment.pairwise_differences().collect::<Vec<_>>();
    prop_assert_eq!(pairs.len(), num_sequences * (num_sequences - 1) / 2);
    for pd in pairs {
        prop_assert!(pd.pair.0 < pd.pair.1);
        prop_assert!(pd.differences <= length);
    }
}
);
