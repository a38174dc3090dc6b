use crate::util::{harmonic, harmonic_squares};
use crate::{Alignment, PopgenError, PopgenResult};

/// A statistic calculable from a whole [`Alignment`].
pub trait GlobalStatistic: Sized {
    fn from_alignment<S: AsRef<[u8]>>(alignment: &Alignment<'_, S>) -> PopgenResult<Self>;
    fn as_raw(&self) -> f64;
}

/// The mean number of differences between two sequences, Θ_π or the "expected pairwise diversity".
///
/// Summed over every position, not normalized by sequence length.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[repr(transparent)]
pub struct GlobalPi(f64);

impl<S: AsRef<[u8]>> From<&Alignment<'_, S>> for GlobalPi {
    fn from(alignment: &Alignment<'_, S>) -> Self {
        let total_differences = alignment.total_pairwise_differences();
        let num_pairs = alignment.num_pairs();
        log::debug!("{total_differences} pairwise differences over {num_pairs} pairs");

        Self(total_differences as f64 / num_pairs as f64)
    }
}

impl GlobalStatistic for GlobalPi {
    fn from_alignment<S: AsRef<[u8]>>(alignment: &Alignment<'_, S>) -> PopgenResult<Self> {
        Ok(Self::from(alignment))
    }

    fn as_raw(&self) -> f64 {
        self.0
    }
}

/// Watterson's theta: see [Watterson's article](https://doi.org/10.1016%2F0040-5809%2875%2990020-9) and [Wikipedia](https://en.wikipedia.org/wiki/Watterson_estimator)
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[repr(transparent)]
pub struct WattersonTheta(f64);

impl WattersonTheta {
    fn from_segregating_sites(segregating_sites: usize, a_1: f64) -> Self {
        Self(segregating_sites as f64 / a_1)
    }
}

impl<S: AsRef<[u8]>> From<&Alignment<'_, S>> for WattersonTheta {
    fn from(alignment: &Alignment<'_, S>) -> Self {
        let segregating_sites = alignment.segregating_sites();
        log::debug!(
            "{segregating_sites} segregating sites over {} positions",
            alignment.sequence_length()
        );

        Self::from_segregating_sites(segregating_sites, harmonic(alignment.num_sequences()))
    }
}

impl GlobalStatistic for WattersonTheta {
    fn from_alignment<S: AsRef<[u8]>>(alignment: &Alignment<'_, S>) -> PopgenResult<Self> {
        Ok(Self::from(alignment))
    }

    fn as_raw(&self) -> f64 {
        self.0
    }
}

/// The sample-size dependent constants of [Tajima 1989](https://academic.oup.com/genetics/article/123/3/585/5998755?login=false).
/// Field names follow the paper.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TajimaConstants {
    pub a_1: f64,
    pub a_2: f64,
    pub b_1: f64,
    pub b_2: f64,
    pub c_1: f64,
    pub c_2: f64,
    pub e_1: f64,
    pub e_2: f64,
}

impl TajimaConstants {
    pub fn new(num_samples: usize) -> Self {
        // eqn 3
        let a_1 = harmonic(num_samples);
        // eqn 4
        let a_2 = harmonic_squares(num_samples);

        let n = num_samples as f64;

        // eqn 8
        let b_1 = (n + 1.) / (3. * (n - 1.));
        // eqn 9
        let b_2 = (2. * (n * n + n + 3.)) / (9. * n * (n - 1.));

        // eqn 31
        let c_1 = b_1 - 1. / a_1;
        // eqn 32
        let c_2 = b_2 - (n + 2.) / (a_1 * n) + (a_2 / (a_1 * a_1));

        // eqn 36
        let e_1 = c_1 / a_1;
        // eqn 37
        let e_2 = c_2 / (a_1 * a_1 + a_2);

        Self {
            a_1,
            a_2,
            b_1,
            b_2,
            c_1,
            c_2,
            e_1,
            e_2,
        }
    }

    /// The variance of Θ_π - Θ_W given `segregating_sites`, the denominator of eqn 38 squared.
    pub fn variance(&self, segregating_sites: usize) -> f64 {
        #[allow(non_snake_case)]
        let S = segregating_sites as f64;
        self.e_1 * S + self.e_2 * S * (S - 1.)
    }
}

/// Tajima's D, as proposed in [Tajima 1989](https://academic.oup.com/genetics/article/123/3/585/5998755?login=false).
/// See also [Wikipedia](https://en.wikipedia.org/wiki/Tajima%27s_D#Mathematical_details) for the equations restated.
///
/// An alignment without segregating sites has D = 0 by convention.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TajimaD {
    k_hat: GlobalPi,
    theta: WattersonTheta,
    num_samples: usize,
    segregating_sites: usize,
    d: f64,
}

impl GlobalStatistic for TajimaD {
    /// # Errors
    ///
    /// [`PopgenError::UndefinedStatistic`] if there is variation but the variance term is not
    /// positive. This is always the case for two or three sequences.
    fn from_alignment<S: AsRef<[u8]>>(alignment: &Alignment<'_, S>) -> PopgenResult<Self> {
        let num_samples = alignment.num_sequences();
        let segregating_sites = alignment.segregating_sites();

        if segregating_sites == 0 {
            log::debug!("no segregating sites; Tajima's D is 0");
            return Ok(Self {
                num_samples,
                ..Self::default()
            });
        }

        let k_hat = GlobalPi::from(alignment);
        let constants = TajimaConstants::new(num_samples);
        let theta = WattersonTheta::from_segregating_sites(segregating_sites, constants.a_1);

        // eqn 38
        let variance = constants.variance(segregating_sites);
        log::debug!("{segregating_sites} segregating sites, variance term {variance}");
        // also catches NaN
        if !(variance > 0.) {
            return Err(PopgenError::UndefinedStatistic {
                segregating_sites,
                num_samples,
            });
        }

        // eqn 28 over the square root of eqn 38's denominator
        let d = (k_hat.as_raw() - theta.as_raw()) / variance.sqrt();

        Ok(Self {
            k_hat,
            theta,
            num_samples,
            segregating_sites,
            d,
        })
    }

    fn as_raw(&self) -> f64 {
        self.d
    }
}

impl TajimaD {
    /// Θ_π as used in the numerator.
    pub fn k_hat(&self) -> GlobalPi {
        self.k_hat
    }

    /// Θ_W as used in the numerator.
    pub fn theta(&self) -> WattersonTheta {
        self.theta
    }

    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    pub fn segregating_sites(&self) -> usize {
        self.segregating_sites
    }
}

/// Θ_π of `sequences`: the total of pairwise differences divided by `n choose 2`.
///
/// # Errors
///
/// [`PopgenError::InvalidInput`] unless `sequences` form an [`Alignment`].
pub fn pi_estimator<S: AsRef<[u8]>>(sequences: &[S]) -> PopgenResult<f64> {
    GlobalPi::from_alignment(&Alignment::new(sequences)?).map(|pi| pi.as_raw())
}

/// [`pi_estimator`] for sequences already known to be valid.
pub fn pi_estimator_unchecked<S: AsRef<[u8]>>(sequences: &[S]) -> f64 {
    GlobalPi::from(&Alignment::new_unchecked(sequences)).as_raw()
}

/// Θ_W of `sequences`: segregating sites divided by the (n-1)th harmonic number.
///
/// # Errors
///
/// [`PopgenError::InvalidInput`] unless `sequences` form an [`Alignment`].
pub fn watterson_estimator<S: AsRef<[u8]>>(sequences: &[S]) -> PopgenResult<f64> {
    WattersonTheta::from_alignment(&Alignment::new(sequences)?).map(|theta| theta.as_raw())
}

/// [`watterson_estimator`] for sequences already known to be valid.
pub fn watterson_estimator_unchecked<S: AsRef<[u8]>>(sequences: &[S]) -> f64 {
    WattersonTheta::from(&Alignment::new_unchecked(sequences)).as_raw()
}

/// Tajima's D of `sequences`; see [`TajimaD`].
///
/// # Errors
///
/// - [`PopgenError::InvalidInput`] unless `sequences` form an [`Alignment`].
/// - [`PopgenError::UndefinedStatistic`] if the variance term vanishes despite variation.
pub fn tajimas_d<S: AsRef<[u8]>>(sequences: &[S]) -> PopgenResult<f64> {
    TajimaD::from_alignment(&Alignment::new(sequences)?).map(|d| d.as_raw())
}
