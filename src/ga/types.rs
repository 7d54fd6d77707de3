//! Data model: gene vectors, compounds, populations and snapshots.
//!
//! A [`Compound`] is one candidate solution, an ordered list of
//! [`GeneVector`]s. Each gene vector holds the attributes of one compound
//! row, all in `[0, 1)`: efficacy, toxicity, bioavailability, and any
//! extra attributes the configuration asks for.

use std::fmt;

/// Index of the efficacy attribute within a gene vector.
pub const EFFICACY: usize = 0;
/// Index of the toxicity attribute within a gene vector.
pub const TOXICITY: usize = 1;
/// Index of the bioavailability attribute within a gene vector.
pub const BIOAVAILABILITY: usize = 2;

/// Attribute values for one compound row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneVector {
    values: Vec<f64>,
}

impl GeneVector {
    /// Wraps raw attribute values.
    ///
    /// Generated vectors always have at least two attributes; vectors built
    /// by hand with fewer read missing attributes as `0.0`.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// All attribute values in order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn efficacy(&self) -> f64 {
        self.attribute(EFFICACY)
    }

    pub fn toxicity(&self) -> f64 {
        self.attribute(TOXICITY)
    }

    /// Bioavailability, or `0.0` when configured with only two attributes.
    pub fn bioavailability(&self) -> f64 {
        self.attribute(BIOAVAILABILITY)
    }

    fn attribute(&self, index: usize) -> f64 {
        self.values.get(index).copied().unwrap_or(0.0)
    }
}

impl From<Vec<f64>> for GeneVector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl fmt::Display for GeneVector {
    /// Honors the formatter precision, defaulting to two decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(2);
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match i {
                EFFICACY => write!(f, "efficacy={v:.p$}")?,
                TOXICITY => write!(f, "toxicity={v:.p$}")?,
                BIOAVAILABILITY => write!(f, "bioavailability={v:.p$}")?,
                _ => write!(f, "attribute{i}={v:.p$}")?,
            }
        }
        Ok(())
    }
}

/// One candidate solution: a fixed-length list of gene vectors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Compound {
    genes: Vec<GeneVector>,
}

impl Compound {
    pub fn new(genes: Vec<GeneVector>) -> Self {
        Self { genes }
    }

    pub fn genes(&self) -> &[GeneVector] {
        &self.genes
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [GeneVector] {
        &mut self.genes
    }

    /// Number of gene vectors (compound rows).
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn total_efficacy(&self) -> f64 {
        self.genes.iter().map(GeneVector::efficacy).sum()
    }

    pub fn total_toxicity(&self) -> f64 {
        self.genes.iter().map(GeneVector::toxicity).sum()
    }

    pub fn total_bioavailability(&self) -> f64 {
        self.genes.iter().map(GeneVector::bioavailability).sum()
    }
}

impl FromIterator<GeneVector> for Compound {
    fn from_iter<T: IntoIterator<Item = GeneVector>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Compound {
    /// One line per gene vector, numbered from 1.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(2);
        for (i, gene) in self.genes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "compound {}: {gene:.p$}", i + 1)?;
        }
        Ok(())
    }
}

/// A population of candidate compounds.
///
/// Order is only meaningful right after ranking (best first).
pub type Population = Vec<Compound>;

/// Immutable per-generation record handed to consumers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// 0-based generation index.
    pub generation: usize,

    /// Best fitness of every generation so far; length is `generation + 1`.
    pub fitness_history: Vec<f64>,

    /// Top-ranked compound of this generation.
    pub best: Compound,
}

impl Snapshot {
    /// Best fitness of this generation.
    pub fn best_fitness(&self) -> f64 {
        self.fitness_history.last().copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Compound {
        Compound::new(vec![
            GeneVector::new(vec![0.5, 0.25, 0.125]),
            GeneVector::new(vec![0.25, 0.5, 0.75]),
        ])
    }

    #[test]
    fn test_attribute_accessors() {
        let g = GeneVector::new(vec![0.1, 0.2, 0.3]);
        assert_eq!(g.efficacy(), 0.1);
        assert_eq!(g.toxicity(), 0.2);
        assert_eq!(g.bioavailability(), 0.3);
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn test_missing_bioavailability_reads_zero() {
        let g = GeneVector::new(vec![0.1, 0.2]);
        assert_eq!(g.bioavailability(), 0.0);
    }

    #[test]
    fn test_compound_totals() {
        let c = sample();
        assert_eq!(c.len(), 2);
        assert!((c.total_efficacy() - 0.75).abs() < 1e-12);
        assert!((c.total_toxicity() - 0.75).abs() < 1e-12);
        assert!((c.total_bioavailability() - 0.875).abs() < 1e-12);
    }

    #[test]
    fn test_gene_display_default_precision() {
        let g = GeneVector::new(vec![0.5, 0.25, 0.3]);
        assert_eq!(
            g.to_string(),
            "efficacy=0.50, toxicity=0.25, bioavailability=0.30"
        );
    }

    #[test]
    fn test_gene_display_extra_attributes() {
        let g = GeneVector::new(vec![0.0, 0.0, 0.0, 0.5]);
        assert!(g.to_string().ends_with("attribute3=0.50"));
    }

    #[test]
    fn test_compound_display_numbered_rows() {
        let text = format!("{:.3}", sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "compound 1: efficacy=0.500, toxicity=0.250, bioavailability=0.125"
        );
        assert!(lines[1].starts_with("compound 2: "));
    }

    #[test]
    fn test_snapshot_best_fitness() {
        let snap = Snapshot {
            generation: 2,
            fitness_history: vec![1.0, 1.5, 1.25],
            best: sample(),
        };
        assert_eq!(snap.best_fitness(), 1.25);
    }
}
