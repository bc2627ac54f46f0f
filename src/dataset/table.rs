use std::sync::Arc;

use log::debug;
use ndarray::{Array2, ArrayBase, ArrayView1, Axis, Data, Ix1};

use super::{domain_index, AttributeCatalog, AttributeKind, Float};
use crate::error::{Error, Result};

/// Rows of numeric-encoded values sharing one attribute catalog
///
/// Nominal values are stored as the index of the value in the attribute domain, numeric values
/// verbatim. Alongside the records the table maintains the number of rows per class label, which
/// is updated by [`record_add`](ExampleTable::record_add) for every inserted row.
#[derive(Debug, Clone)]
pub struct ExampleTable<F> {
    catalog: Arc<AttributeCatalog>,
    records: Array2<F>,
    class_counts: Vec<usize>,
}

impl<F: Float> ExampleTable<F> {
    /// Creates an empty table over `catalog`
    pub fn new(catalog: Arc<AttributeCatalog>) -> Self {
        let class_counts = vec![0; catalog.n_classes()];
        let records = Array2::zeros((0, catalog.len()));

        ExampleTable {
            catalog,
            records,
            class_counts,
        }
    }

    /// Creates a table from a matrix with one row per example
    ///
    /// Rows are added in order with [`record_add`](ExampleTable::record_add); the first invalid
    /// row aborts the construction.
    pub fn from_rows<D: Data<Elem = F>>(
        catalog: Arc<AttributeCatalog>,
        rows: &ArrayBase<D, ndarray::Ix2>,
    ) -> Result<Self> {
        let mut table = ExampleTable::new(catalog);
        for row in rows.rows() {
            table.record_add(row)?;
        }

        Ok(table)
    }

    /// Validates `example` against the catalog, appends it and increments the count of its class
    ///
    /// The example must hold one value per attribute. Nominal values have to be integral indices
    /// into their domain and numeric values finite. Nothing is modified when validation fails.
    pub fn record_add<D: Data<Elem = F>>(&mut self, example: ArrayBase<D, Ix1>) -> Result<()> {
        if example.len() != self.catalog.len() {
            return Err(Error::WrongExampleLength {
                expected: self.catalog.len(),
                found: example.len(),
            });
        }

        let mut label = 0;
        for (index, (attribute, value)) in self.catalog.iter().zip(example.iter()).enumerate() {
            match attribute.kind() {
                AttributeKind::Nominal(domain) => {
                    let value_idx = domain_index(*value, domain.len()).ok_or_else(|| {
                        Error::InvalidDomainValue {
                            attribute: index,
                            value: value.to_f64().unwrap_or(f64::NAN),
                        }
                    })?;
                    if index == self.catalog.class_index() {
                        label = value_idx;
                    }
                }
                AttributeKind::Numeric => {
                    if !value.is_finite() {
                        return Err(Error::InvalidInput(format!(
                            "non-finite value {} for numeric attribute `{}`",
                            value,
                            attribute.name()
                        )));
                    }
                }
            }
        }

        self.records
            .push_row(example.view())
            .map_err(|err| Error::InvalidInput(err.to_string()))?;
        self.class_counts[label] += 1;

        Ok(())
    }

    pub fn catalog(&self) -> &Arc<AttributeCatalog> {
        &self.catalog
    }

    pub fn records(&self) -> &Array2<F> {
        &self.records
    }

    /// Number of examples
    pub fn len(&self) -> usize {
        self.records.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn n_classes(&self) -> usize {
        self.class_counts.len()
    }

    /// Number of examples per class label
    pub fn class_counts(&self) -> &[usize] {
        &self.class_counts
    }

    /// Returns the example at `index`
    pub fn example(&self, index: usize) -> Option<ArrayView1<F>> {
        if index < self.len() {
            Some(self.records.row(index))
        } else {
            None
        }
    }

    /// Iterates over the examples in insertion order
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, F>> {
        self.records.rows().into_iter()
    }

    /// Returns the class label of the example at `index`
    pub fn label_of(&self, index: usize) -> Option<usize> {
        self.example(index).and_then(|row| {
            domain_index(row[self.catalog.class_index()], self.n_classes())
        })
    }

    /// True if all examples share one class label, also true for an empty table
    pub fn is_homogeneous(&self) -> bool {
        self.class_counts.iter().filter(|count| **count > 0).count() <= 1
    }

    /// The class label with the highest count, the lowest label on ties
    pub fn majority_class(&self) -> usize {
        self.class_counts
            .iter()
            .enumerate()
            .fold((0, 0), |(best, best_count), (label, count)| {
                if *count > best_count {
                    (label, *count)
                } else {
                    (best, best_count)
                }
            })
            .0
    }

    /// Splits the table into one sub-table per domain value of the nominal attribute `index`
    ///
    /// Every example ends up in exactly one sub-table, sub-tables are ordered by domain index and
    /// keep the relative order of their examples. Values without examples yield empty tables.
    pub fn partition_by_attribute(&self, index: usize) -> Result<Vec<ExampleTable<F>>> {
        if index == self.catalog.class_index() {
            return Err(Error::InvalidInput(format!(
                "cannot partition on the class attribute {}",
                index
            )));
        }
        let domain_size = self.catalog.nominal_domain_size(index)?;

        let mut members = vec![Vec::new(); domain_size];
        for (row_idx, value) in self.records.column(index).iter().enumerate() {
            let value_idx =
                domain_index(*value, domain_size).ok_or_else(|| Error::InvalidDomainValue {
                    attribute: index,
                    value: value.to_f64().unwrap_or(f64::NAN),
                })?;
            members[value_idx].push(row_idx);
        }

        debug!(
            "partitioned {} examples on attribute {} into {:?}",
            self.len(),
            index,
            members.iter().map(Vec::len).collect::<Vec<_>>()
        );

        Ok(members
            .into_iter()
            .map(|rows| self.subset(&rows))
            .collect())
    }

    /// Copies the examples at `rows` into a new table
    fn subset(&self, rows: &[usize]) -> ExampleTable<F> {
        let mut class_counts = vec![0; self.n_classes()];
        for row in rows {
            if let Some(label) = self.label_of(*row) {
                class_counts[label] += 1;
            }
        }

        ExampleTable {
            catalog: Arc::clone(&self.catalog),
            records: self.records.select(Axis(0), rows),
            class_counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Attribute;
    use ndarray::array;

    fn catalog() -> Arc<AttributeCatalog> {
        Arc::new(
            AttributeCatalog::new(vec![
                Attribute::nominal("outlook", vec!["sunny", "overcast", "rainy"]),
                Attribute::numeric("humidity"),
                Attribute::nominal("play", vec!["yes", "no"]),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn class_counts_follow_inserts() -> Result<()> {
        let mut table = ExampleTable::new(catalog());
        assert!(table.is_empty());
        assert_eq!(table.class_counts(), &[0, 0]);

        table.record_add(array![0., 85., 1.])?;
        table.record_add(array![1., 90., 0.])?;
        table.record_add(array![2., 70., 0.])?;

        assert_eq!(table.len(), 3);
        assert_eq!(table.class_counts(), &[2, 1]);
        assert_eq!(table.majority_class(), 0);
        assert!(!table.is_homogeneous());
        assert_eq!(table.label_of(0), Some(1));
        assert_eq!(table.rows().count(), 3);
        let expected = array![1., 90., 0.];
        assert_eq!(table.rows().nth(1), Some(expected.view()));

        Ok(())
    }

    #[test]
    fn invalid_examples_leave_table_untouched() -> Result<()> {
        let mut table = ExampleTable::new(catalog());
        table.record_add(array![0., 85., 1.])?;

        assert_eq!(
            table.record_add(array![0., 1.]),
            Err(Error::WrongExampleLength {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            table.record_add(array![3., 85., 1.]),
            Err(Error::InvalidDomainValue {
                attribute: 0,
                value: 3.0
            })
        );
        assert_eq!(
            table.record_add(array![0., 85., 0.5]),
            Err(Error::InvalidDomainValue {
                attribute: 2,
                value: 0.5
            })
        );
        assert!(matches!(
            table.record_add(array![0., f64::NAN, 0.]),
            Err(Error::InvalidInput(_))
        ));

        assert_eq!(table.len(), 1);
        assert_eq!(table.class_counts(), &[0, 1]);

        Ok(())
    }

    #[test]
    fn majority_class_prefers_lowest_label() -> Result<()> {
        let table = ExampleTable::from_rows(
            catalog(),
            &array![[0., 1., 1.], [0., 1., 0.], [1., 1., 1.], [2., 1., 0.]],
        )?;

        assert_eq!(table.class_counts(), &[2, 2]);
        assert_eq!(table.majority_class(), 0);

        let empty = ExampleTable::<f64>::new(catalog());
        assert_eq!(empty.majority_class(), 0);
        assert!(empty.is_homogeneous());

        Ok(())
    }

    #[test]
    fn partition_is_ordered_and_complete() -> Result<()> {
        let table = ExampleTable::from_rows(
            catalog(),
            &array![
                [2., 70., 0.],
                [0., 85., 1.],
                [2., 65., 1.],
                [0., 95., 1.],
                [2., 75., 0.]
            ],
        )?;

        let parts = table.partition_by_attribute(0)?;
        assert_eq!(parts.len(), 3);
        assert_eq!(parts.iter().map(ExampleTable::len).sum::<usize>(), 5);

        assert_eq!(parts[0].records(), &array![[0., 85., 1.], [0., 95., 1.]]);
        assert_eq!(parts[0].class_counts(), &[0, 2]);
        assert!(parts[1].is_empty());
        assert_eq!(parts[1].class_counts(), &[0, 0]);
        assert_eq!(
            parts[2].records(),
            &array![[2., 70., 0.], [2., 65., 1.], [2., 75., 0.]]
        );
        assert_eq!(parts[2].class_counts(), &[2, 1]);

        assert_eq!(
            table.partition_by_attribute(1).unwrap_err(),
            Error::NotNominal { index: 1 }
        );
        assert!(matches!(
            table.partition_by_attribute(2),
            Err(Error::InvalidInput(_))
        ));

        Ok(())
    }
}
