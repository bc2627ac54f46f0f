//! Information-theoretic statistics used to choose splitting attributes
//!
use log::trace;
use sylva::dataset::domain_index;
use sylva::{AttributeKind, ExampleTable, Float};

use crate::error::{DecisionTreeError, Result};

/// Entropy of the class labels of `table` in bits
///
/// Labels without examples contribute nothing, the entropy of an empty table is zero.
pub fn entropy<F: Float>(table: &ExampleTable<F>) -> f64 {
    entropy_of_counts(table.class_counts())
}

/// Given the class counts calculates the entropy of the subset.
pub(crate) fn entropy_of_counts(class_counts: &[usize]) -> f64 {
    let n_samples = class_counts.iter().sum::<usize>();
    if n_samples == 0 {
        return 0.0;
    }
    let n_samples = n_samples as f64;

    class_counts
        .iter()
        .map(|count| *count as f64 / n_samples)
        .map(|p| if p > 0.0 { -p * p.log2() } else { 0.0 })
        .sum()
}

/// Gain ratio of splitting `table` on the nominal attribute `attribute`
///
/// The information gain of the split is normalized by its split information. Domain values
/// without examples are left out of both sums. A split without split information, i.e. one that
/// keeps all examples together, has a gain ratio of zero.
pub fn gain_ratio<F: Float>(table: &ExampleTable<F>, attribute: usize) -> Result<f64> {
    let catalog = table.catalog();
    if attribute == catalog.class_index() {
        return Err(DecisionTreeError::InvalidInput(format!(
            "attribute {} is the class attribute",
            attribute
        )));
    }
    let domain_size = catalog.nominal_domain_size(attribute)?;
    if table.is_empty() {
        return Err(DecisionTreeError::InvalidInput(
            "gain ratio of a table without examples".to_string(),
        ));
    }

    // class counts of the examples taking each value of the attribute
    let mut value_class_counts = vec![vec![0; table.n_classes()]; domain_size];
    for (row_idx, row) in table.rows().enumerate() {
        let value = domain_index(row[attribute], domain_size).ok_or_else(|| {
            sylva::Error::InvalidDomainValue {
                attribute,
                value: row[attribute].to_f64().unwrap_or(f64::NAN),
            }
        })?;
        let label = table.label_of(row_idx).ok_or_else(|| {
            sylva::Error::InvalidInput(format!("example {} has no valid class label", row_idx))
        })?;
        value_class_counts[value][label] += 1;
    }

    let n_samples = table.len() as f64;
    let (weighted_entropy, split_information) = value_class_counts
        .iter()
        .map(|counts| (counts.iter().sum::<usize>(), counts))
        .filter(|(n_value, _)| *n_value > 0)
        .fold((0.0, 0.0), |(weighted, split), (n_value, counts)| {
            let w = n_value as f64 / n_samples;
            (
                weighted + w * entropy_of_counts(counts),
                split - w * w.log2(),
            )
        });

    let gain = entropy(table) - weighted_entropy;

    if split_information == 0.0 {
        Ok(0.0)
    } else {
        Ok(gain / split_information)
    }
}

/// Selects the nominal attribute with the greatest gain ratio
///
/// Numeric attributes and the class attribute are never candidates. The first nominal attribute
/// is taken even if its gain ratio is zero and only replaced by a strictly greater gain ratio,
/// so the lowest index wins ties.
pub fn best_splitting_attribute<F: Float>(table: &ExampleTable<F>) -> Result<usize> {
    let catalog = table.catalog();
    let mut best = None;

    for (idx, attribute) in catalog.iter().enumerate().take(catalog.class_index()) {
        match attribute.kind() {
            AttributeKind::Numeric => continue,
            AttributeKind::Nominal(_) => {}
        }

        let ratio = gain_ratio(table, idx)?;
        trace!("gain ratio of `{}`: {:.5}", attribute.name(), ratio);

        // override best attribute only when the ratio improved
        best = match best.take() {
            None => Some((idx, ratio)),
            Some((_, best_ratio)) if ratio > best_ratio => Some((idx, ratio)),
            x => x,
        };
    }

    best.map(|(idx, _)| idx)
        .ok_or(DecisionTreeError::NoSplittableAttribute)
}
