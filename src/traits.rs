//! Provide traits for different classes of algorithms
//!

use crate::error::Error;

/// Fittable algorithms
///
/// A fittable algorithm takes a data set and creates a concept of some kind about it. A decision
/// tree, for example, grows its nodes from an example table.
pub trait Fit<D, E: std::error::Error + From<Error>> {
    type Object;

    fn fit(&self, data: &D) -> Result<Self::Object, E>;
}

/// Predict with model into a mutable reference of targets.
///
/// Prediction fails as a whole when a single record cannot be predicted, the already written
/// targets are then unspecified.
pub trait PredictInplace<R, T> {
    type Error: std::error::Error;

    /// Predict something in place
    fn predict_inplace(&self, x: &R, y: &mut T) -> Result<(), Self::Error>;

    /// Create targets that `predict_inplace` works with.
    fn default_target(&self, x: &R) -> T;
}

/// Predict with model
///
/// This trait assumes the `PredictInplace` implementation and provides additional input/output
/// combinations.
pub trait Predict<R, T, E> {
    fn predict(&self, x: R) -> Result<T, E>;
}

impl<'a, R, T, O> Predict<&'a R, T, <O as PredictInplace<R, T>>::Error> for O
where
    O: PredictInplace<R, T>,
{
    fn predict(&self, records: &'a R) -> Result<T, <O as PredictInplace<R, T>>::Error> {
        let mut targets = self.default_target(records);
        self.predict_inplace(records, &mut targets)?;

        Ok(targets)
    }
}
