//! End-to-end compilation of whole grammars

use abnf_parser::abnf::transforms::TransformError;
use abnf_parser::abnf::{CompileError, GeneratorOptions, GrammarLoader};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn compile(source: &str) -> Result<String, TransformError> {
    GrammarLoader::from_string(source)
        .compile(&GeneratorOptions::default())
        .map(|lines| lines.join("\n"))
}

fn error_of(source: &str) -> String {
    compile(source).unwrap_err().to_string()
}

#[test]
fn test_core_rules() {
    let loader = GrammarLoader::from_path(fixture("core.abnf")).unwrap();
    let output = loader.compile(&GeneratorOptions::default()).unwrap().join("\n");
    insta::assert_snapshot!(output, @r###"
    struct ALPHA : tao::pegtl::sor< tao::pegtl::range< 0x41, 0x5A >, tao::pegtl::range< 0x61, 0x7A > > {};
    struct BIT : tao::pegtl::sor< tao::pegtl::one< '0' >, tao::pegtl::one< '1' > > {};
    struct CR : tao::pegtl::one< 0x0D > {};
    struct LF;
    struct CRLF : tao::pegtl::seq< CR, LF > {};
    struct DIGIT : tao::pegtl::range< 0x30, 0x39 > {};
    struct DQUOTE : tao::pegtl::one< 0x22 > {};
    struct HEXDIG : tao::pegtl::sor< DIGIT, tao::pegtl::istring< 'A' >, tao::pegtl::istring< 'B' >, tao::pegtl::istring< 'C' >, tao::pegtl::istring< 'D' >, tao::pegtl::istring< 'E' >, tao::pegtl::istring< 'F' > > {};
    struct HTAB : tao::pegtl::one< 0x09 > {};
    struct LF : tao::pegtl::one< 0x0A > {};
    struct WSP;
    struct LWSP : tao::pegtl::star< tao::pegtl::sor< WSP, tao::pegtl::seq< CRLF, WSP > > > {};
    struct SP : tao::pegtl::one< 0x20 > {};
    struct WSP : tao::pegtl::sor< SP, HTAB > {};
    "###);
}

#[test]
fn test_alternation_with_crlf() {
    assert_eq!(
        compile("rule1 = \"ab\" / %x41\r\n").unwrap(),
        "struct rule1 : tao::pegtl::sor< tao::pegtl::istring< 'a', 'b' >, tao::pegtl::one< 0x41 > > {};"
    );
}

#[test]
fn test_continuation_lines() {
    let source = "request = method SP uri ; the request line\n          CRLF\nmethod  = %s\"GET\" / %s\"POST\"\n";
    insta::assert_snapshot!(compile(source).unwrap(), @r###"
    struct method;
    struct request : tao::pegtl::seq< method, SP, uri, CRLF > {};
    struct method : tao::pegtl::sor< tao::pegtl::string< 'G', 'E', 'T' >, tao::pegtl::string< 'P', 'O', 'S', 'T' > > {};
    "###);
}

#[test]
fn test_incremental_alternatives_keep_rule_position() {
    let source = "ruleset = alt1 / alt2\nalt1 = \"1\"\nruleset =/ alt3\nalt2 = \"2\"\nalt3 = \"3\"\n";
    insta::assert_snapshot!(compile(source).unwrap(), @r###"
    struct alt1;
    struct alt2;
    struct alt3;
    struct ruleset : tao::pegtl::sor< alt1, alt2, alt3 > {};
    struct alt1 : tao::pegtl::one< '1' > {};
    struct alt2 : tao::pegtl::one< '2' > {};
    struct alt3 : tao::pegtl::one< '3' > {};
    "###);
}

#[test]
fn test_dashes_become_underscores() {
    assert_eq!(
        compile("quoted-string = DQUOTE *qchar DQUOTE\nQCHAR = %x23-7E\n").unwrap(),
        "struct qchar;\n\
         struct quoted_string : tao::pegtl::seq< DQUOTE, tao::pegtl::star< qchar >, DQUOTE > {};\n\
         struct qchar : tao::pegtl::range< 0x23, 0x7E > {};"
    );
}

#[test]
fn test_empty_grammar() {
    assert_eq!(compile("; nothing here\n\n").unwrap(), "");
}

#[test]
fn test_syntax_errors() {
    assert_eq!(error_of("a = [b\n"), "1:7: unterminated option (missing ']')");
    assert_eq!(error_of("a = b /\n"), "1:8: expected element");
    assert_eq!(error_of("a = %x4G\n"), "1:8: unterminated rule");
    assert_eq!(error_of("a = (b)[c]\n"), "1:8: unterminated rule");
}

#[test]
fn test_operators_bind_to_the_next_element() {
    assert_eq!(error_of("a = 3 b\n"), "1:6: expected element");
    assert_eq!(error_of("a = 1* b\n"), "1:7: expected element");
    assert_eq!(error_of("a = x & b\n"), "1:8: expected element");
    assert_eq!(error_of("a = !  b\n"), "1:6: expected element");
    // A continuation line does not join a repeat count to its element either
    assert_eq!(error_of("a = *\n  b\n"), "1:6: expected element");
    assert_eq!(
        compile("a = 3b &c !*d\n").unwrap(),
        "struct a : tao::pegtl::seq< tao::pegtl::rep< 3, b >, tao::pegtl::at< c >, \
         tao::pegtl::not_at< tao::pegtl::star< d > > > {};"
    );
}

#[test]
fn test_semantic_errors() {
    assert_eq!(error_of("CHAR = %x01-7F\n"), "1:1: 'CHAR' is a reserved rulename");
    assert_eq!(
        error_of("a = b\na =/ c\nd =/ e\n"),
        "3:1: incremental alternation 'd' without previous rule definition"
    );
    assert_eq!(
        error_of("a = 4*2b\n"),
        "1:5: repetition minimum which is greater than the repetition maximum not allowed"
    );
}

#[test]
fn test_first_error_wins() {
    // The duplicate on line 2 is found before the syntax error on line 3
    assert_eq!(error_of("a = b\nA = c\nd = (\n"), "2:1: rule 'A' is already defined");
    // Parsing completes before generation starts
    assert_eq!(error_of("a = 0b\nc = (\n"), "2:6: expected element");
}

#[test]
fn test_missing_file() {
    let err = GrammarLoader::from_path(fixture("missing.abnf")).err().unwrap();
    assert!(matches!(err, CompileError::Io(_)));
}
