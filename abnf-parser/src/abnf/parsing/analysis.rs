//! Grammar self-check
//!
//! The line grammar in [`grammar`](super::grammar) is built from chumsky
//! combinators, which cannot be inspected. This module describes the same
//! productions as data and checks them for the problems that make a PEG
//! misbehave:
//!
//! - a reference to a production that does not exist;
//! - a repetition whose body can succeed without consuming a token (it would
//!   loop forever);
//! - left recursion (the production would call itself without consuming).
//!
//! [`analyze`] runs the checks on the shipped grammar. The command line tool
//! runs it when it is invoked without a source file.

use crate::abnf::lexing::Token;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::debug;

/// A parsing expression over tokens
#[derive(Debug, Clone, PartialEq)]
pub enum GrammarExpr {
    Terminal(Token),
    Ref(&'static str),
    Seq(Vec<GrammarExpr>),
    Choice(Vec<GrammarExpr>),
    Optional(Box<GrammarExpr>),
    ZeroOrMore(Box<GrammarExpr>),
    OneOrMore(Box<GrammarExpr>),
    /// End of the line's token stream
    End,
}

use GrammarExpr::*;

fn tokens(kinds: &[Token]) -> GrammarExpr {
    Choice(kinds.iter().map(|t| Terminal(*t)).collect())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Production {
    pub name: &'static str,
    pub expr: GrammarExpr,
}

impl Production {
    pub fn new(name: &'static str, expr: GrammarExpr) -> Self {
        Self { name, expr }
    }
}

/// The productions of the line grammar, `line` first.
pub fn line_grammar() -> Vec<Production> {
    vec![
        Production::new("line", Seq(vec![Choice(vec![Ref("line-end"), Ref("rule")]), End])),
        Production::new(
            "rule",
            Seq(vec![
                Terminal(Token::Rulename),
                Ref("defined-as"),
                Ref("alternation"),
                Ref("line-end"),
            ]),
        ),
        Production::new("defined-as", tokens(&[Token::DefinedAs, Token::IncrementalAs])),
        Production::new("line-end", tokens(&[Token::Newline, Token::Comment])),
        Production::new(
            "alternation",
            Seq(vec![
                Ref("concatenation"),
                ZeroOrMore(Box::new(Seq(vec![Terminal(Token::Slash), Ref("concatenation")]))),
            ]),
        ),
        Production::new("concatenation", OneOrMore(Box::new(Ref("predicate")))),
        Production::new(
            "predicate",
            Choice(vec![
                Seq(vec![tokens(&[Token::And, Token::Not]), Ref("repetition")]),
                Ref("repetition"),
            ]),
        ),
        Production::new(
            "repetition",
            Seq(vec![Optional(Box::new(Terminal(Token::Repeat))), Ref("element")]),
        ),
        Production::new(
            "element",
            Choice(vec![
                Terminal(Token::Rulename),
                Ref("group"),
                Ref("option"),
                Ref("char-val"),
                Ref("num-val"),
                Terminal(Token::Prose),
            ]),
        ),
        Production::new(
            "group",
            Seq(vec![Terminal(Token::OpenParen), Ref("alternation"), Terminal(Token::CloseParen)]),
        ),
        Production::new(
            "option",
            Seq(vec![
                Terminal(Token::OpenBracket),
                Ref("alternation"),
                Terminal(Token::CloseBracket),
            ]),
        ),
        Production::new(
            "char-val",
            tokens(&[Token::QuotedString, Token::CaseSensitiveString]),
        ),
        Production::new(
            "num-val",
            tokens(&[Token::BinaryValue, Token::DecimalValue, Token::HexValue]),
        ),
    ]
}

/// A problem found in a grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UndefinedReference {
        production: &'static str,
        reference: &'static str,
    },
    /// A repetition in `production` whose body can match the empty input
    NullableRepetition { production: &'static str },
    LeftRecursion { production: &'static str },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::UndefinedReference {
                production,
                reference,
            } => write!(f, "{}: reference to undefined production '{}'", production, reference),
            Issue::NullableRepetition { production } => {
                write!(f, "{}: repetition body can match without consuming input", production)
            }
            Issue::LeftRecursion { production } => {
                write!(f, "{}: production is left recursive", production)
            }
        }
    }
}

/// Check the shipped line grammar.
pub fn analyze() -> Vec<Issue> {
    analyze_grammar(&line_grammar())
}

/// Check a set of productions.
pub fn analyze_grammar(productions: &[Production]) -> Vec<Issue> {
    let defined: HashMap<&'static str, &GrammarExpr> =
        productions.iter().map(|p| (p.name, &p.expr)).collect();
    let nullable = nullable_productions(productions);
    let mut issues = Vec::new();

    for production in productions {
        let mut references = Vec::new();
        collect_references(&production.expr, &mut references);
        for reference in references {
            if !defined.contains_key(reference) {
                issues.push(Issue::UndefinedReference {
                    production: production.name,
                    reference,
                });
            }
        }

        if has_nullable_repetition(&production.expr, &nullable) {
            issues.push(Issue::NullableRepetition {
                production: production.name,
            });
        }

        if is_left_recursive(production.name, &defined, &nullable) {
            issues.push(Issue::LeftRecursion {
                production: production.name,
            });
        }
    }

    debug!(
        productions = productions.len(),
        issues = issues.len(),
        "analyzed grammar"
    );
    issues
}

/// Productions that can succeed without consuming a token (least fixpoint).
fn nullable_productions(productions: &[Production]) -> HashSet<&'static str> {
    let mut nullable = HashSet::new();
    loop {
        let before = nullable.len();
        for production in productions {
            if is_nullable(&production.expr, &nullable) {
                nullable.insert(production.name);
            }
        }
        if nullable.len() == before {
            return nullable;
        }
    }
}

fn is_nullable(expr: &GrammarExpr, nullable: &HashSet<&'static str>) -> bool {
    match expr {
        Terminal(_) => false,
        Ref(name) => nullable.contains(name),
        Seq(items) => items.iter().all(|e| is_nullable(e, nullable)),
        Choice(items) => items.iter().any(|e| is_nullable(e, nullable)),
        Optional(_) | ZeroOrMore(_) | End => true,
        OneOrMore(inner) => is_nullable(inner, nullable),
    }
}

fn collect_references(expr: &GrammarExpr, out: &mut Vec<&'static str>) {
    match expr {
        Ref(name) => out.push(*name),
        Seq(items) | Choice(items) => items.iter().for_each(|e| collect_references(e, out)),
        Optional(inner) | ZeroOrMore(inner) | OneOrMore(inner) => collect_references(inner, out),
        Terminal(_) | End => {}
    }
}

fn has_nullable_repetition(expr: &GrammarExpr, nullable: &HashSet<&'static str>) -> bool {
    match expr {
        ZeroOrMore(inner) | OneOrMore(inner) => {
            is_nullable(inner, nullable) || has_nullable_repetition(inner, nullable)
        }
        Optional(inner) => has_nullable_repetition(inner, nullable),
        Seq(items) | Choice(items) => items.iter().any(|e| has_nullable_repetition(e, nullable)),
        Terminal(_) | Ref(_) | End => false,
    }
}

/// References that can be reached before any token is consumed.
fn left_references(expr: &GrammarExpr, nullable: &HashSet<&'static str>, out: &mut Vec<&'static str>) {
    match expr {
        Ref(name) => out.push(*name),
        Seq(items) => {
            for item in items {
                left_references(item, nullable, out);
                if !is_nullable(item, nullable) {
                    break;
                }
            }
        }
        Choice(items) => items.iter().for_each(|e| left_references(e, nullable, out)),
        Optional(inner) | ZeroOrMore(inner) | OneOrMore(inner) => {
            left_references(inner, nullable, out)
        }
        Terminal(_) | End => {}
    }
}

fn is_left_recursive(
    start: &'static str,
    defined: &HashMap<&'static str, &GrammarExpr>,
    nullable: &HashSet<&'static str>,
) -> bool {
    let mut visited = HashSet::new();
    let mut pending = vec![start];

    while let Some(name) = pending.pop() {
        let Some(expr) = defined.get(name) else {
            continue;
        };
        let mut next = Vec::new();
        left_references(expr, nullable, &mut next);
        for reference in next {
            if reference == start {
                return true;
            }
            if visited.insert(reference) {
                pending.push(reference);
            }
        }
    }
    false
}
