use thiserror::Error;

/// Simplified `Result` using [`DecisionTreeError`](crate::DecisionTreeError) as error type
pub type Result<T> = std::result::Result<T, DecisionTreeError>;

/// Error variants from hyperparameter checking, tree induction and inference
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecisionTreeError {
    /// Empty table or example, or an example not matching the tree
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The stopping rule did not fire, but no nominal non-class attribute splits the examples
    #[error("no nominal attribute left to split on")]
    NoSplittableAttribute,
    /// Inference reached a leaf without any training examples
    #[error("leaf without examples has an undefined class distribution")]
    DivideByZero,
    /// The value of an example at a splitting attribute selects no child
    #[error("value {value} of attribute {attribute} selects no child of {n_children}")]
    OutOfRangeDomainValue {
        attribute: usize,
        value: f64,
        n_children: usize,
    },
    #[error("invalid hyperparameter {0}")]
    Parameters(String),
    #[error(transparent)]
    BaseCrate(#[from] sylva::Error),
}
