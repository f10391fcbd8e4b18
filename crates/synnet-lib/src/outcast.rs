//! Outcast detection: the noun least related to the others in a list.

use synnet_core::Result;

use crate::ConceptIndex;

/// Finds the noun whose summed distance to every listed noun is greatest.
#[derive(Debug, Clone, Copy)]
pub struct Outcast<'a> {
    index: &'a ConceptIndex,
}

impl<'a> Outcast<'a> {
    pub fn new(index: &'a ConceptIndex) -> Self {
        Self { index }
    }

    /// The outcast of `nouns`.
    ///
    /// Ties go to the noun listed first. Returns `None` for an empty list,
    /// or when every total is zero (all nouns share a synset).
    pub fn outcast<'n, S: AsRef<str>>(&self, nouns: &'n [S]) -> Result<Option<&'n str>> {
        let senses = nouns
            .iter()
            .map(|noun| self.index.resolve(noun.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let search = self.index.search();
        let mut totals = vec![0u64; nouns.len()];
        for i in 0..senses.len() {
            for j in i + 1..senses.len() {
                let distance = u64::from(search.length_of_subsets(senses[i], senses[j])?);
                totals[i] += distance;
                totals[j] += distance;
            }
        }

        let mut champion = None;
        let mut greatest = 0;
        for (noun, &total) in nouns.iter().zip(&totals) {
            if total > greatest {
                greatest = total;
                champion = Some(noun.as_ref());
            }
        }

        tracing::debug!(nouns = nouns.len(), greatest, ?champion, "outcast computed");
        Ok(champion)
    }
}
