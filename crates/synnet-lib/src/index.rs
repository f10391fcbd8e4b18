//! Noun index over a validated synset hierarchy.
//!
//! Maps every noun to the set of synsets it appears in, keeps each synset's
//! text for reporting ancestors, and owns the hypernym graph. Word-level
//! queries resolve both nouns to synset sets and run one subset search.

use indexmap::IndexMap;
use serde::Serialize;
use synnet_core::{
    AncestorSearch, AncestralPath, ConceptGraph, Error, Result, Vertex, VertexSet,
};

use crate::records::{HypernymRecord, SynsetRecord};

/// The stored part of a synset record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Concept {
    /// Space-separated synonyms, reported as the synset's name.
    pub synonyms: String,
    pub definition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    #[error("duplicate synset id {0}")]
    DuplicateConcept(u32),

    #[error("synset id {id} out of range (expected ids below {count})")]
    ConceptOutOfRange { id: u32, count: usize },

    #[error(transparent)]
    Graph(#[from] Error),
}

/// Immutable noun index. Built once; every query borrows it read-only.
#[derive(Debug, Clone)]
pub struct ConceptIndex {
    /// Indexed by `Vertex::index`; one entry per graph vertex.
    concepts: Vec<Concept>,
    /// Noun -> synsets containing it, sorted by noun.
    nouns: IndexMap<String, VertexSet>,
    graph: ConceptGraph,
}

impl ConceptIndex {
    /// Build from parsed records.
    ///
    /// Synset ids must be exactly `0..n` for `n` records (in any order).
    /// The hypernym edges must form a rooted DAG over those ids.
    pub fn build(
        synsets: impl IntoIterator<Item = SynsetRecord>,
        hypernyms: impl IntoIterator<Item = HypernymRecord>,
    ) -> std::result::Result<Self, IndexError> {
        let synsets: Vec<SynsetRecord> = synsets.into_iter().collect();
        let count = synsets.len();

        let mut slots: Vec<Option<Concept>> = vec![None; count];
        let mut senses: IndexMap<String, Vec<Vertex>> = IndexMap::new();
        for record in synsets {
            let slot = slots
                .get_mut(record.id as usize)
                .ok_or(IndexError::ConceptOutOfRange {
                    id: record.id,
                    count,
                })?;
            if slot.is_some() {
                return Err(IndexError::DuplicateConcept(record.id));
            }

            let vertex = Vertex::new(record.id);
            for noun in record.nouns() {
                senses.entry(noun.to_owned()).or_default().push(vertex);
            }
            *slot = Some(Concept {
                synonyms: record.synonyms,
                definition: record.definition,
            });
        }
        // Every id is unique and below `count`, so every slot is filled.
        let concepts: Vec<Concept> = slots.into_iter().flatten().collect();

        let graph = ConceptGraph::from_records(
            count,
            hypernyms.into_iter().map(|record| {
                let parents = record.parents.into_iter().map(Vertex::new);
                (Vertex::new(record.id), parents)
            }),
        )?;

        let mut nouns = senses
            .into_iter()
            .map(|(noun, ids)| VertexSet::new(ids).map(|set| (noun, set)))
            .collect::<Result<IndexMap<_, _>>>()?;
        nouns.sort_keys();

        tracing::debug!(
            concepts = concepts.len(),
            nouns = nouns.len(),
            edges = graph.edge_count(),
            "concept index built"
        );

        Ok(Self {
            concepts,
            nouns,
            graph,
        })
    }

    /// Every distinct noun, in lexicographic (byte) order.
    ///
    /// Each call starts a fresh pass; the iterator itself is `Clone`.
    pub fn nouns(&self) -> impl ExactSizeIterator<Item = &str> + Clone + '_ {
        self.nouns.keys().map(String::as_str)
    }

    pub fn is_noun(&self, word: &str) -> bool {
        self.nouns.contains_key(word)
    }

    /// Synsets containing `word`, if it is a known noun.
    pub fn synsets(&self, word: &str) -> Option<&VertexSet> {
        self.nouns.get(word)
    }

    /// Length of the shortest ancestral path between any sense of `noun1`
    /// and any sense of `noun2`.
    pub fn distance(&self, noun1: &str, noun2: &str) -> Result<u32> {
        Ok(self.shortest_common_ancestor(noun1, noun2)?.length)
    }

    /// Synonym text of a shortest common ancestor of `noun1` and `noun2`.
    pub fn sca(&self, noun1: &str, noun2: &str) -> Result<&str> {
        let path = self.shortest_common_ancestor(noun1, noun2)?;
        Ok(self.concepts[path.ancestor.index()].synonyms.as_str())
    }

    /// Ancestor vertex and path length of one word-level query.
    pub fn shortest_common_ancestor(&self, noun1: &str, noun2: &str) -> Result<AncestralPath> {
        let senses1 = self.resolve(noun1)?;
        let senses2 = self.resolve(noun2)?;
        self.search().common_ancestor(senses1, senses2)
    }

    pub fn concept(&self, vertex: Vertex) -> Option<&Concept> {
        self.concepts.get(vertex.index())
    }

    pub fn concept_count(&self) -> usize {
        self.concepts.len()
    }

    pub fn noun_count(&self) -> usize {
        self.nouns.len()
    }

    pub fn graph(&self) -> &ConceptGraph {
        &self.graph
    }

    pub fn search(&self) -> AncestorSearch<'_> {
        AncestorSearch::new(&self.graph)
    }

    pub(crate) fn resolve(&self, noun: &str) -> Result<&VertexSet> {
        self.nouns
            .get(noun)
            .ok_or_else(|| Error::UnknownWord(noun.to_owned()))
    }
}
