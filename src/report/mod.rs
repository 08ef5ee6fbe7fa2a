pub mod json;
pub mod text;

use crate::model::Attribute;

pub fn format_2(v: f64) -> String {
    format!("{:.2}", v)
}

/// Attributes appearing in any of the given vectors, in attribute order.
pub fn attribute_columns<'a>(
    vectors: impl IntoIterator<Item = &'a crate::model::WeightVector>,
) -> Vec<Attribute> {
    let mut present = vec![false; Attribute::ALL.len()];
    for weights in vectors {
        for (attribute, _) in weights.iter() {
            if let Some(i) = Attribute::ALL.iter().position(|a| *a == attribute) {
                present[i] = true;
            }
        }
    }
    Attribute::ALL
        .into_iter()
        .zip(present)
        .filter_map(|(a, p)| p.then_some(a))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
