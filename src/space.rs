use std::collections::HashMap;

use crate::vocabulary::Vocabulary;

/* The vector space spanned by the vocabulary's terms. Vectors are dense,
 * aligned to the vocabulary's axis order, and compared by the cosine of
 * the angle between them.
 */
pub struct VectorSpace<'a> {
    axes: &'a Vocabulary,
}

impl<'a> VectorSpace<'a> {
    pub fn new(axes: &'a Vocabulary) -> Self {
        Self { axes }
    }

    // dense head of the vector pointing at `point`; axes missing from the
    // map read as zero
    pub fn project(&self, point: &HashMap<String, f64>) -> Vec<f64> {
        self.axes
            .axes()
            .iter()
            .map(|axis| point.get(axis).copied().unwrap_or(0.0))
            .collect()
    }

    // unit vector with the same direction; the zero vector stays zero
    pub fn normalized(&self, head: Vec<f64>) -> Vec<f64> {
        let modulus = modulus(&head);
        if modulus == 0.0 {
            return head;
        }
        head.into_iter().map(|x| x / modulus).collect()
    }

    pub fn cosine(&self, a: &[f64], b: &[f64]) -> f64 {
        // a vector of the wrong dimensionality was built against a
        // different vocabulary, which the caller must never allow
        assert!(
            a.len() == self.axes.len() && b.len() == self.axes.len(),
            "dimension mismatch: vectors must be built against this space's vocabulary"
        );
        let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
        let modulus_product = modulus(a) * modulus(b);
        if modulus_product == 0.0 {
            0.0
        } else {
            dot / modulus_product
        }
    }
}

fn modulus(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}
