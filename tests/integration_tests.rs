//! Integration tests for the C-Minus front end

use std::fs;
use std::path::{Path, PathBuf};

use cminus::parser::{self, ParseOutput};
use cminus::{ast, diagnostics::CompileError, printer};

fn fixtures(kind: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(kind);
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("missing fixture dir {}: {e}", dir.display()))
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|e| e == "cm"))
        .collect();
    paths.sort();
    assert!(!paths.is_empty(), "no fixtures in {}", dir.display());
    paths
}

/// Helper to run the front end on a source file
fn parse_file(path: &Path) -> Result<ParseOutput, Vec<CompileError>> {
    let file = fs::File::open(path).unwrap();
    parser::parse_reader(std::io::BufReader::new(file))
}

/// Test that all valid fixtures parse without diagnostics
#[test]
fn test_valid_fixtures() {
    for path in fixtures("valid") {
        match parse_file(&path) {
            Ok(output) => assert!(
                output.errors.is_empty(),
                "Expected {} to parse cleanly, got {:?}",
                path.display(),
                output.errors
            ),
            Err(errs) => panic!("Expected {} to parse, got errors: {errs:?}", path.display()),
        }
    }
}

/// Test that invalid fixtures are rejected
#[test]
fn test_invalid_fixtures() {
    for path in fixtures("invalid") {
        let errs = parse_file(&path).expect_err(&format!("Expected {} to fail parsing", path.display()));
        assert!(!errs.is_empty());
        assert!(errs.iter().all(CompileError::is_syntax), "{errs:?}");
    }
}

/// Test that each recovered fixture keeps its declarations and reports exactly one error
#[test]
fn test_recovered_fixtures() {
    for path in fixtures("recovered") {
        let output = parse_file(&path).unwrap_or_else(|errs| panic!("{}: {errs:?}", path.display()));
        assert_eq!(output.errors.len(), 1, "{}: {:?}", path.display(), output.errors);
        assert!(!output.program.declarations.is_empty());
    }
}

#[test]
fn test_reader_and_string_entrypoints_agree() {
    for path in fixtures("valid") {
        let source = fs::read_to_string(&path).unwrap();
        assert_eq!(parse_file(&path), parser::parse(&source), "{}", path.display());
    }
}

#[test]
fn test_sort_program_shape() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/valid/sort.cm");
    let program = parse_file(&path).unwrap().program;
    let kinds: Vec<_> = program.declarations.iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ast::NodeKind::ArrayDecl,
            ast::NodeKind::FunDecl,
            ast::NodeKind::FunDecl,
            ast::NodeKind::FunDecl
        ]
    );
    assert_eq!(program.declarations[1].line, 6);
}

/// Statement kinds visited by an [`ast::Visitor`], in source order.
#[derive(Default)]
struct StatementCollector {
    kinds: Vec<ast::NodeKind>,
}

impl ast::Visitor for StatementCollector {
    fn visit_statement(&mut self, stmt: &ast::Node<ast::Stmt>) {
        self.kinds.push(stmt.kind());
        // Keep walking into nested statements.
        match &stmt.node {
            ast::Stmt::Compound(block) => self.visit_compound(block),
            ast::Stmt::If {
                then_branch,
                else_branch,
                ..
            } => {
                for branch in [then_branch, else_branch].into_iter().flatten() {
                    self.visit_statement(branch);
                }
            }
            ast::Stmt::While { body: Some(body), .. } => self.visit_statement(body),
            _ => {}
        }
    }
}

#[test]
fn test_visitor_walks_nested_statements() {
    use ast::Visitor;

    let source = "void main(void) { while (i) { if (i) i = 0; else return; } }";
    let program = parser::parse(source).unwrap().program;
    let mut collector = StatementCollector::default();
    collector.visit_program(&program);
    assert_eq!(
        collector.kinds,
        vec![
            ast::NodeKind::IterationStmt,
            ast::NodeKind::CompoundStmt,
            ast::NodeKind::SelectionStmt,
            ast::NodeKind::Assign,
            ast::NodeKind::ReturnStmt,
        ]
    );
}

/// Tree dumps of whole fixture programs
mod tree_dump_tests {
    use super::*;

    fn dump_fixture(name: &str) -> String {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
        let output = parse_file(&path).unwrap_or_else(|errs| panic!("{name}: {errs:?}"));
        printer::dump(&output.program)
    }

    #[test]
    fn test_gcd_tree() {
        insta::assert_snapshot!(dump_fixture("valid/gcd.cm"), @r"
Fun-Declaration
  Int
  Id: gcd
  Params
    Param
      Int
      Id: u
    Param
      Int
      Id: v
  CompStmt
    if
      Op: ==
        Id: v
        Const: 0
      return
        Id: u
      return
        Call
          Id: gcd
          Args
            Id: v
            Op: -
              Id: u
              Op: *
                Op: /
                  Id: u
                  Id: v
                Id: v
Fun-Declaration
  Void
  Id: main
  Params
    Void
  CompStmt
    Var-Declaration
      Int
      Id: x
    Var-Declaration
      Int
      Id: y
    Assign
      Id: x
      Call
        Id: input
    Assign
      Id: y
      Call
        Id: input
    Call
      Id: output
      Args
        Call
          Id: gcd
          Args
            Id: x
            Id: y
");
    }

    #[test]
    fn test_recovered_tree_keeps_later_declarations() {
        insta::assert_snapshot!(dump_fixture("recovered/leading_junk.cm"), @r"
Fun-Declaration
  Int
  Id: main
  Params
    Void
  CompStmt
");
    }
}
