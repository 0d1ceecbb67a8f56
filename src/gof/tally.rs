use super::{chi_test_with, ChiTestResult, GofError, WarningThresholds};
use crate::data::{parse_observations, Category, ObservationCounts, WeightMap};
use log::debug;

/// Running collection of answers that is re-tested as it grows
///
/// Holds a fixed set of weighted categories and the answers seen so far.
/// Every change re-runs [`chi_test`](crate::gof::chi_test) over the whole
/// sample.
///
/// # Example
///
/// ```
/// use chi2fit::gof::Tally;
///
/// let mut tally = Tally::uniform(vec!["heads", "tails"]).unwrap();
///
/// tally.record("heads").unwrap();
/// tally.record("tails").unwrap();
/// let res = tally.record("heads").unwrap();
///
/// assert_eq!(tally.len(), 3);
/// assert!(res.p > 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tally<K> {
    weights: WeightMap<K>,
    observations: Vec<K>,
    thresholds: WarningThresholds,
}

impl<K: Category> Tally<K> {
    /// Start an empty tally over `weights`
    ///
    /// Fails if `weights` has fewer than two categories.
    pub fn new(weights: WeightMap<K>) -> Result<Self, GofError> {
        match weights.len() {
            0 => Err(GofError::EmptyWeights),
            1 => Err(GofError::TooFewCategories { n_categories: 1 }),
            _ => Ok(Tally {
                weights,
                observations: Vec::new(),
                thresholds: WarningThresholds::default(),
            }),
        }
    }

    /// Start an empty tally where every category is equally likely
    pub fn uniform<I>(categories: I) -> Result<Self, GofError>
    where
        I: IntoIterator<Item = K>,
    {
        Self::new(WeightMap::uniform(categories))
    }

    /// Use `thresholds` for the data-quality warnings
    pub fn with_thresholds(mut self, thresholds: WarningThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Add one answer and re-test
    pub fn record(&mut self, answer: K) -> Result<ChiTestResult, GofError> {
        self.observations.push(answer);
        self.evaluate()
    }

    /// Replace every answer and re-test
    pub fn replace(
        &mut self,
        answers: Vec<K>,
    ) -> Result<ChiTestResult, GofError> {
        self.observations = answers;
        self.evaluate()
    }

    /// Test the current answers
    pub fn evaluate(&self) -> Result<ChiTestResult, GofError> {
        let res = chi_test_with(
            &self.observations,
            &self.weights,
            &self.thresholds,
        )?;
        debug!("{} answers: {:?}", self.observations.len(), res);
        Ok(res)
    }

    /// Answers in the order they were recorded
    pub fn observations(&self) -> &[K] {
        &self.observations
    }

    pub fn weights(&self) -> &WeightMap<K> {
        &self.weights
    }

    pub fn counts(&self) -> ObservationCounts<K> {
        ObservationCounts::from_observations(&self.observations)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

impl Tally<String> {
    /// Replace every answer with those parsed from free-form text and re-test
    ///
    /// # Example
    ///
    /// ```
    /// use chi2fit::gof::Tally;
    ///
    /// let sides = (1..=6).map(|x: u8| x.to_string());
    /// let mut tally = Tally::uniform(sides).unwrap();
    ///
    /// tally.replace_from_text("1, 2, 3, 4, 5, 6").unwrap();
    /// assert_eq!(tally.len(), 6);
    /// ```
    pub fn replace_from_text(
        &mut self,
        text: &str,
    ) -> Result<ChiTestResult, GofError> {
        self.replace(parse_observations(text))
    }
}
