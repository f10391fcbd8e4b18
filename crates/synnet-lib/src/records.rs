//! Parsers for the line-oriented synset, hypernym and digraph inputs.
//!
//! - synsets: `id,synonym synonym ...,definition` (definition may contain commas)
//! - hypernyms: `id,parent,parent,...`
//! - digraph: vertex count, edge count, then `v w` pairs, all whitespace separated
//!
//! Blank lines are skipped. Line numbers in errors are 1-based.

use synnet_core::{ConceptGraph, Vertex};

/// One synset: a concept id and its space-separated synonyms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynsetRecord {
    pub id: u32,
    pub synonyms: String,
    pub definition: Option<String>,
}

impl SynsetRecord {
    /// The individual nouns of this synset.
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        self.synonyms.split_whitespace()
    }
}

/// Hypernym edges of one synset: `id` is more specific than each parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HypernymRecord {
    pub id: u32,
    pub parents: Vec<u32>,
}

/// A plain digraph as read from text, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph {
    pub vertex_count: usize,
    pub edges: Vec<(u32, u32)>,
}

impl Digraph {
    /// Validate as a rooted DAG.
    pub fn into_graph(self) -> synnet_core::Result<ConceptGraph> {
        ConceptGraph::build(
            self.vertex_count,
            self.edges
                .into_iter()
                .map(|(v, w)| (Vertex::new(v), Vertex::new(w))),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("missing {0} field")]
    MissingField(&'static str),

    #[error("invalid id `{0}`")]
    InvalidId(String),

    #[error("invalid count `{0}`")]
    InvalidCount(String),

    #[error("missing vertex or edge count")]
    MissingHeader,

    #[error("expected {expected} edges, found {found}")]
    EdgeCountMismatch { expected: usize, found: usize },
}

impl ParseErrorKind {
    fn at(self, line: usize) -> ParseError {
        ParseError { line, kind: self }
    }
}

/// Non-blank lines with their 1-based numbers.
fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

fn parse_id(field: &str, line: usize) -> Result<u32, ParseError> {
    let field = field.trim();
    field
        .parse()
        .map_err(|_| ParseErrorKind::InvalidId(field.to_owned()).at(line))
}

pub fn parse_synsets(text: &str) -> Result<Vec<SynsetRecord>, ParseError> {
    numbered_lines(text)
        .map(|(line_no, line)| {
            let mut fields = line.splitn(3, ',');
            let id = parse_id(fields.next().unwrap_or_default(), line_no)?;
            let synonyms = fields
                .next()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or_else(|| ParseErrorKind::MissingField("synonyms").at(line_no))?;
            let definition = fields.next().map(str::to_owned);

            Ok(SynsetRecord {
                id,
                synonyms: synonyms.to_owned(),
                definition,
            })
        })
        .collect()
}

pub fn parse_hypernyms(text: &str) -> Result<Vec<HypernymRecord>, ParseError> {
    numbered_lines(text)
        .map(|(line_no, line)| {
            let mut fields: Vec<&str> = line.split(',').collect();
            // Trailing empty fields (`1,0,`) carry no parent.
            while fields.len() > 1 && fields.last().is_some_and(|f| f.trim().is_empty()) {
                fields.pop();
            }
            let id = parse_id(fields[0], line_no)?;
            let parents = fields[1..]
                .iter()
                .map(|field| parse_id(field, line_no))
                .collect::<Result<Vec<_>, _>>()?;

            Ok(HypernymRecord { id, parents })
        })
        .collect()
}

/// Parse the algs4 digraph layout: `V`, `E`, then `E` pairs.
pub fn parse_digraph(text: &str) -> Result<Digraph, ParseError> {
    let mut tokens = numbered_lines(text)
        .flat_map(|(line_no, line)| line.split_whitespace().map(move |tok| (line_no, tok)));

    let (_, vertex_count) = next_count(&mut tokens)?;
    let (mut last_line, edge_count) = next_count(&mut tokens)?;

    let mut edges = Vec::with_capacity(edge_count);
    while let Some((line_no, tok)) = tokens.next() {
        last_line = line_no;
        let v = parse_id(tok, line_no)?;
        let (line_no, tok) = tokens
            .next()
            .ok_or_else(|| ParseErrorKind::MissingField("edge endpoint").at(line_no))?;
        let w = parse_id(tok, line_no)?;
        edges.push((v, w));
    }

    if edges.len() != edge_count {
        return Err(ParseErrorKind::EdgeCountMismatch {
            expected: edge_count,
            found: edges.len(),
        }
        .at(last_line));
    }

    Ok(Digraph {
        vertex_count,
        edges,
    })
}

fn next_count<'a>(
    tokens: &mut impl Iterator<Item = (usize, &'a str)>,
) -> Result<(usize, usize), ParseError> {
    let (line_no, tok) = tokens
        .next()
        .ok_or_else(|| ParseErrorKind::MissingHeader.at(1))?;
    let count = tok
        .parse()
        .map_err(|_| ParseErrorKind::InvalidCount(tok.to_owned()).at(line_no))?;
    Ok((line_no, count))
}
