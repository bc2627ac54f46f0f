use super::{DecisionTree, TreeNode};
use std::fmt;

/// Struct to print a fitted decision tree in LaTex using tikz and forest.
///
/// Internal nodes show the name of their splitting attribute, edges the domain value leading to
/// the child, and leaves the predicted class with the class counts of their training examples.
///
/// ### Usage
///
/// ```rust
/// use std::sync::Arc;
/// use ndarray::array;
/// use sylva::prelude::*;
/// use sylva_trees::DecisionTree;
///
/// let catalog = AttributeCatalog::new(vec![
///     Attribute::nominal("windy", vec!["false", "true"]),
///     Attribute::nominal("play", vec!["yes", "no"]),
/// ])
/// .unwrap();
/// let table = ExampleTable::from_rows(
///     Arc::new(catalog),
///     &array![[0., 0.], [0., 0.], [1., 1.], [1., 1.]],
/// )
/// .unwrap();
/// // Fit the tree
/// let tree = DecisionTree::params().prune(false).fit(&table).unwrap();
/// // Export to tikz
/// let tikz = tree.export_to_tikz();
/// let latex_tree = tikz.to_string();
/// // Now you can write latex_tree to the preferred destination
/// assert!(latex_tree.contains("windy"));
/// ```
pub struct Tikz<'a> {
    max_classes: usize,
    complete: bool,
    tree: &'a DecisionTree,
}

impl<'a> Tikz<'a> {
    pub fn new(tree: &'a DecisionTree) -> Self {
        Tikz {
            max_classes: 4,
            complete: true,
            tree,
        }
    }

    fn format_node(&self, node: &'a TreeNode, edge: Option<&str>) -> String {
        let depth = vec![""; node.depth() + 1].join("\t");
        let edge = edge
            .map(|value| format!(", edge label={{node[midway, fill=white] {{{}}}}}", value))
            .unwrap_or_default();
        let catalog = self.tree.catalog();

        match node.attribute() {
            Some(attribute) if !node.is_leaf() => {
                let split_attribute = catalog.attribute(attribute).ok();
                let name = split_attribute.map(|attr| attr.name()).unwrap_or("?");

                let mut out = format!("{}[{}{}", depth, name, edge);
                for (value_idx, child) in node.children().iter().enumerate() {
                    let value = split_attribute
                        .and_then(|attr| attr.value_at(value_idx))
                        .map(str::to_string)
                        .unwrap_or_else(|| value_idx.to_string());
                    out.push('\n');
                    out.push_str(&self.format_node(child, Some(&value)));
                }
                out.push(']');

                out
            }
            _ => {
                let label = catalog
                    .class_attribute()
                    .value_at(node.label())
                    .map(str::to_string)
                    .unwrap_or_else(|| node.label().to_string());
                let mut counts = node
                    .class_counts()
                    .iter()
                    .take(self.max_classes)
                    .map(|count| count.to_string())
                    .collect::<Vec<_>>();
                if node.class_counts().len() > self.max_classes {
                    counts.push("\\dots".to_string());
                }

                format!(
                    "{}[Label: {} \\\\ ({}){}]",
                    depth,
                    label,
                    counts.join(", "),
                    edge
                )
            }
        }
    }

    /// Whether a complete Tex document should be generated
    pub fn complete(mut self, complete: bool) -> Self {
        self.complete = complete;

        self
    }

    /// The maximal number of class counts printed in each leaf
    pub fn max_classes(mut self, max_classes: usize) -> Self {
        self.max_classes = max_classes;

        self
    }
}

impl<'a> fmt::Display for Tikz<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut out = String::new();
        if self.complete {
            out.push_str(
                r#"
\documentclass[margin=10pt]{standalone}
\usepackage{tikz,forest}
\usetikzlibrary{arrows.meta}

\forestset{
default preamble={
before typesetting nodes={
  !r.replace by={[, coordinate, append]}
},
where n children=0{
  tier=word,
}{
},
for tree={
  edge+={thick, -Latex},
  s sep'+=1cm,
  draw,
  thick,
  edge path'={ (!u) -| (.parent)},
  align=center,
}
}
}

\begin{document}
"#,
            );
        }
        out.push_str("\\begin{forest}\n");
        out.push_str(&self.format_node(self.tree.root_node(), None));
        out.push_str("\n\\end{forest}");
        if self.complete {
            out.push_str("\n\\end{document}");
        }

        write!(f, "{}", out)
    }
}
