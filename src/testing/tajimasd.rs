use crate::stats::GlobalStatistic;
use crate::stats::TajimaD;
use crate::testing::testdata::{
    alignment_from_derived_counts, all_a, random_alignment_rng, round6, RandomAlignmentOptions,
    MIT_EXAMPLE,
};
use crate::{tajimas_d, Alignment, PopgenError};
use rand::rng;
use rand::seq::SliceRandom;

#[test]
fn tajima_d_mit_example() {
    assert_eq!(round6(tajimas_d(&MIT_EXAMPLE).unwrap()), -1.446172);
}

#[test]
fn tajima_d_all_identical() {
    assert_eq!(tajimas_d(&all_a()).unwrap(), 0.);
}

#[test]
fn tajima_d() {
    // one common and two rare mutations among 18 sequences
    let mut sequences = alignment_from_derived_counts(18, &[7, 2, 17]);
    sequences.shuffle(&mut rng());

    let alignment = Alignment::new(&sequences).unwrap();
    let tajima = TajimaD::from_alignment(&alignment).unwrap();
    assert_eq!(tajima.segregating_sites(), 3);
    assert!((tajima.as_raw() - -0.15474069911037955).abs() < 1e-12);
}

#[test]
fn tajima_d_sign_follows_frequency_spectrum() {
    // singletons only: an excess of rare variants
    let rare = alignment_from_derived_counts(10, &[1; 8]);
    assert!(tajimas_d(&rare).unwrap() < 0.);

    // every site at 5/10: an excess of intermediate-frequency variants
    let intermediate = alignment_from_derived_counts(10, &[5; 4]);
    assert!(tajimas_d(&intermediate).unwrap() > 0.);
}

#[test]
fn tajima_d_from_random_data() {
    use rand::prelude::*;

    let mut rng = StdRng::seed_from_u64(54321);
    for num_sequences in [2, 3, 4, 10, 40] {
        for rate in [0.0, 0.01, 0.1, 0.5] {
            let sequences = random_alignment_rng(
                num_sequences,
                100,
                Some(RandomAlignmentOptions {
                    mutation_rate: rate,
                }),
                &mut rng,
            );
            let naive = crate::testing::naivecalculations::tajimas_d(&sequences);
            match (tajimas_d(&sequences), naive) {
                (Ok(d), Some(d_naive)) => assert!(
                    (d - d_naive).abs() <= 1e-10,
                    "{d} != {d_naive} for n = {num_sequences}, rate = {rate}"
                ),
                (Err(PopgenError::UndefinedStatistic { .. }), None) => {
                    assert!(num_sequences <= 3)
                }
                (d, d_naive) => panic!("{d:?} disagrees with {d_naive:?}"),
            }
        }
    }
}
