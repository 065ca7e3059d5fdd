// crates/infra/src/frontend/tree.rs
use std::path::{Path, PathBuf};

use count_loops_domain::{LoopKind, LoopSite, LoopVisitor};
use count_loops_ports::frontend::{CFrontend, SyntaxTree};
use count_loops_shared_kernel::{InfraResult, InfrastructureError, Result};
use log::{debug, warn};
use tree_sitter::{Node, Parser, Tree};

use super::{
    FrontendConfig, Preprocessor,
    line_map::{LineMap, strip_line_markers},
    sanitize::sanitize,
};
use crate::persistence::FileReader;

/// Longest excerpt of offending text quoted in a syntax error.
const EXCERPT_CHARS: usize = 40;

/// Text handed to the grammar, with the origin of each of its lines.
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub text: String,
    pub lines: LineMap,
}

impl LoadedSource {
    /// `text` is the content of `unit` as written.
    pub fn unprocessed(unit: &Path, text: String) -> Self {
        Self { text, lines: LineMap::identity(unit) }
    }
}

/// `CFrontend` backed by the system preprocessor and tree-sitter-c.
#[derive(Debug, Clone, Default)]
pub struct TreeSitterFrontend {
    config: FrontendConfig,
}

impl TreeSitterFrontend {
    pub fn new(config: FrontendConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }

    /// Produces the text handed to the grammar: preprocessed when configured,
    /// then sanitized when configured.
    pub fn load_source(&self, path: &Path) -> InfraResult<LoadedSource> {
        let source = if self.config.use_cpp {
            // Surface unreadable files as read errors rather than preprocessor failures.
            FileReader::open(path).map_err(|err| read_error(path, err))?;
            let expanded = Preprocessor::new(&self.config).run(path)?;
            let (text, lines) = strip_line_markers(&expanded, path);
            LoadedSource { text, lines }
        } else {
            let text = FileReader::read_lossy(path).map_err(|err| read_error(path, err))?;
            LoadedSource::unprocessed(path, text)
        };

        Ok(if self.config.sanitize_gnu {
            LoadedSource { text: sanitize(&source.text), ..source }
        } else {
            source
        })
    }

    /// Parses already-loaded text. Diagnostics name the original file and line.
    pub fn parse_source(&self, source: LoadedSource) -> InfraResult<CTree> {
        let LoadedSource { text, lines } = source;
        let mut parser = new_parser()?;
        let tree = parser.parse(&text, None).ok_or_else(|| InfrastructureError::Parse {
            path: lines.unit().to_path_buf(),
            line: 0,
            column: 0,
            message: "parser produced no tree".to_string(),
        })?;

        let root = tree.root_node();
        if root.has_error() {
            let diag = describe_first_error(root, &text, &lines);
            if !self.config.lenient {
                return Err(InfrastructureError::Parse {
                    path: diag.file,
                    line: diag.line,
                    column: diag.column,
                    message: diag.message,
                });
            }
            warn!("{}:{}:{}: {} (counting anyway)", diag.file.display(), diag.line, diag.column, diag.message);
        }
        debug!("parsed {} ({} bytes)", lines.unit().display(), text.len());
        Ok(CTree { tree, text, lines })
    }
}

impl CFrontend for TreeSitterFrontend {
    fn parse(&self, path: &Path) -> Result<Box<dyn SyntaxTree>> {
        let source = self.load_source(path)?;
        Ok(Box::new(self.parse_source(source)?))
    }
}

fn read_error(path: &Path, source: std::io::Error) -> InfrastructureError {
    InfrastructureError::FileRead { path: path.to_path_buf(), source }
}

fn new_parser() -> InfraResult<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_c::LANGUAGE.into())
        .map_err(|err| InfrastructureError::GrammarInit { details: err.to_string() })?;
    Ok(parser)
}

struct Diagnostic {
    file: PathBuf,
    line: usize,
    column: usize,
    message: String,
}

/// Original position (1-based) and a short description of the first error node.
fn describe_first_error(root: Node<'_>, text: &str, lines: &LineMap) -> Diagnostic {
    let node = first_node_where(root, |n| n.is_error() || n.is_missing()).unwrap_or(root);
    let pos = node.start_position();
    let origin = lines.locate(pos.row);
    let message = if node.is_missing() {
        format!("missing `{}`", node.kind())
    } else if node.is_error() {
        let snippet = node.utf8_text(text.as_bytes()).unwrap_or_default();
        let excerpt: String =
            snippet.split_whitespace().collect::<Vec<_>>().join(" ").chars().take(EXCERPT_CHARS).collect();
        if excerpt.is_empty() { "unexpected input".to_string() } else { format!("unexpected `{excerpt}`") }
    } else {
        "syntax error".to_string()
    };
    Diagnostic { file: origin.file.to_path_buf(), line: origin.line, column: pos.column + 1, message }
}

/// Pre-order search using a cursor, so deep trees do not recurse.
fn first_node_where<'t>(root: Node<'t>, pred: impl Fn(&Node<'t>) -> bool) -> Option<Node<'t>> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if pred(&node) {
            return Some(node);
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

fn loop_kind(node: &Node<'_>) -> Option<LoopKind> {
    if !node.is_named() {
        return None;
    }
    match node.kind() {
        "while_statement" => Some(LoopKind::While),
        "do_statement" => Some(LoopKind::DoWhile),
        "for_statement" => Some(LoopKind::For),
        _ => None,
    }
}

/// A parsed C translation unit together with the text it was parsed from.
pub struct CTree {
    tree: Tree,
    text: String,
    lines: LineMap,
}

impl CTree {
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    fn site<'s>(&'s self, node: &Node<'_>) -> LoopSite<'s> {
        let condition = node
            .child_by_field_name("condition")
            .and_then(|cond| cond.utf8_text(self.text.as_bytes()).ok());
        let origin = self.lines.locate(node.start_position().row);
        LoopSite { file: Some(origin.file), line: origin.line, condition }
    }
}

impl SyntaxTree for CTree {
    fn accept(&self, visitor: &mut dyn LoopVisitor) {
        let mut cursor = self.tree.walk();
        loop {
            let node = cursor.node();
            if let Some(kind) = loop_kind(&node) {
                visitor.visit_loop(kind, self.site(&node));
            }
            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return;
                }
            }
        }
    }
}
