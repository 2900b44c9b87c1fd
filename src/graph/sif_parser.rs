//! With Graph::new_from_str(), creates a new graph from a line oriented graph description.
//!
//! Each non-blank line is `sourceId<TAB>sourceClass-tag-targetClass<TAB>targetId`.
//! Node identifiers are kept verbatim (trimmed), including any `@class` suffix a
//! generator may have written.  The link is stored reversed, so the target of the
//! line depends on its source.
use pest::error::LineColLocation;
use pest::iterators::Pair;

use crate::error::{LayoutError, Result};
use crate::graph::Graph;

#[derive(Parser)]
#[grammar = "sif.pest"]
pub struct SifParser;

use pest::Parser;
use pest_derive::Parser;

/// One parsed line, before it is added to a graph.
#[derive(Debug, Clone, Eq, PartialEq)]
struct Link {
    line: usize,
    src_node: String,
    src_class: u32,
    dst_node: String,
    dst_class: u32,
}

impl Graph {
    /// Given a graph description, build a graph.
    ///
    /// Uses the Pest crate to do all the parsing.
    /// * An unsuccessful parse returns LayoutError::Parse with the offending line.
    /// * A node whose class disagrees with an earlier line returns LayoutError::ClassConflict.
    pub fn new_from_str(sif_str: &str) -> Result<Self> {
        let sif = SifParser::parse(Rule::sif, sif_str)
            .map_err(|err| parse_error(&err))?
            .next();

        let mut graph = Graph::new();

        let Some(sif) = sif else {
            return Ok(graph);
        };

        for record in sif.into_inner() {
            match record.as_rule() {
                Rule::link => {
                    let link = get_link(record)?;
                    add_link_node(&mut graph, &link.src_node, link.src_class, link.line)?;
                    add_link_node(&mut graph, &link.dst_node, link.dst_class, link.line)?;
                    graph.add_link(&link.src_node, &link.dst_node);
                }
                Rule::EOI => (),
                _ => unreachable!(),
            }
        }

        Ok(graph)
    }
}

impl TryFrom<&str> for Graph {
    type Error = LayoutError;

    fn try_from(str: &str) -> Result<Self> {
        Self::new_from_str(str)
    }
}

impl TryFrom<&String> for Graph {
    type Error = LayoutError;

    fn try_from(string: &String) -> Result<Self> {
        Self::new_from_str(string)
    }
}

fn parse_error(err: &pest::error::Error<Rule>) -> LayoutError {
    let line = match err.line_col {
        LineColLocation::Pos((line, _)) => line,
        LineColLocation::Span((line, _), _) => line,
    };

    LayoutError::Parse {
        line,
        message: err.variant.message().to_string(),
    }
}

fn add_link_node(graph: &mut Graph, node: &str, class: u32, line: usize) -> Result<()> {
    graph
        .add_node(node, class)
        .map_err(|existing| LayoutError::ClassConflict {
            node: node.to_string(),
            line,
            existing,
            found: class,
        })
}

/// Given a link (e.g. `a<TAB>0-to-1<TAB>b`), get the node names and classes.
fn get_link(link: Pair<'_, Rule>) -> Result<Link> {
    let line = link.line_col().0;
    let mut fields = link.into_inner();

    let (Some(src), Some(relation), Some(dst)) = (fields.next(), fields.next(), fields.next())
    else {
        unreachable!("grammar guarantees three fields");
    };

    let classes = relation
        .into_inner()
        .filter(|pair| pair.as_rule() == Rule::class)
        .map(|pair| parse_class(pair.as_str(), line))
        .collect::<Result<Vec<u32>>>()?;

    let (Some(src_class), Some(dst_class)) = (classes.first(), classes.last()) else {
        unreachable!("grammar guarantees two classes");
    };

    Ok(Link {
        line,
        src_node: node_id(src.as_str(), line)?,
        src_class: *src_class,
        dst_node: node_id(dst.as_str(), line)?,
        dst_class: *dst_class,
    })
}

fn node_id(text: &str, line: usize) -> Result<String> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        Err(LayoutError::EmptyNodeId { line })
    } else {
        Ok(trimmed.to_string())
    }
}

fn parse_class(token: &str, line: usize) -> Result<u32> {
    token.parse::<u32>().map_err(|_| LayoutError::InvalidClass {
        line,
        token: token.to_string(),
    })
}
