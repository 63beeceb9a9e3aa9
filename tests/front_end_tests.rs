/// End-to-end tests for the front end
/// Demonstrates: Scanner → Parser working together
use minnow::lexer::{tokenize, TokenKind, TokenValue};
use minnow::parser::{parse, Expression, Parser, Program, Statement};
use minnow::{parse_source, Error, LexError, SyntaxError, Token};

fn program(source: &str) -> Program {
    parse_source(source).unwrap()
}

fn expression(source: &str) -> Expression {
    Parser::new(tokenize(source).unwrap())
        .parse_expression()
        .unwrap()
}

fn assert_identifier(expr: &Expression, name: &str) {
    match expr {
        Expression::Identifier(token) => assert_eq!(token.text(), Some(name)),
        other => panic!("Expected identifier {}, got {:?}", name, other),
    }
}

fn assert_number(expr: &Expression, value: u64) {
    match expr {
        Expression::Number(token) => assert_eq!(token.integer(), Some(value)),
        other => panic!("Expected number {}, got {:?}", value, other),
    }
}

fn assert_binary<'a>(
    expr: &'a Expression,
    kind: TokenKind,
) -> (&'a Expression, &'a Expression) {
    match expr {
        Expression::BinaryOperation {
            left,
            operator,
            right,
        } => {
            assert_eq!(operator.kind, kind);
            (left.as_ref(), right.as_ref())
        }
        other => panic!("Expected {} operation, got {:?}", kind, other),
    }
}

#[test]
fn test_tokens_end_with_single_eof() {
    let tokens = tokenize("x = 1\nwhile x < 10:\n  x = x + 1\n").unwrap();
    let eofs = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Eof)
        .count();
    assert_eq!(eofs, 1);
    assert_eq!(tokens.last().unwrap(), &Token::eof(32, 4, 1));
}

#[test]
fn test_spellings_reconstruct_source() {
    let source = "if  count!=10 :\n\tcall(a,b)\nelse:\n  x=(y*2)/z==w";
    let spelled: String = tokenize(source)
        .unwrap()
        .iter()
        .map(|token| token.spelling().into_owned())
        .collect();
    let significant: String = source.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(spelled, significant);
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let tokens = tokenize("ifx").unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, Some(TokenValue::Text("ifx".to_string())));
}

#[test]
fn test_operator_disambiguation() {
    let kinds = |source: &str| -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    };

    assert_eq!(kinds("=="), vec![TokenKind::Eq, TokenKind::Eof]);
    assert_eq!(kinds("= 1"), vec![TokenKind::Equals, TokenKind::Number, TokenKind::Eof]);
    assert_eq!(kinds("!="), vec![TokenKind::Neq, TokenKind::Eof]);
    assert!(matches!(
        tokenize("!"),
        Err(LexError::IllegalCharacter { character: '!', .. })
    ));
}

#[test]
fn test_subtraction_is_left_associative() {
    let expr = expression("a - b - c");
    let (left, right) = assert_binary(&expr, TokenKind::Minus);
    assert_identifier(right, "c");

    let (inner_left, inner_right) = assert_binary(left, TokenKind::Minus);
    assert_identifier(inner_left, "a");
    assert_identifier(inner_right, "b");
}

#[test]
fn test_multiplication_binds_tighter() {
    let expr = expression("a + b * c");
    let (left, right) = assert_binary(&expr, TokenKind::Plus);
    assert_identifier(left, "a");

    let (product_left, product_right) = assert_binary(right, TokenKind::Multiply);
    assert_identifier(product_left, "b");
    assert_identifier(product_right, "c");
}

#[test]
fn test_chained_comparison_is_rejected() {
    let err = Parser::new(tokenize("a < b < c").unwrap())
        .parse_condition()
        .unwrap_err();
    assert_eq!(err.token().kind, TokenKind::Less);
    assert_eq!(err.token().column, 7);

    assert!(matches!(
        parse_source("while a < b < c:\n  a = a + 1"),
        Err(Error::Syntax(SyntaxError::Expected {
            expected: TokenKind::Colon,
            ..
        }))
    ));
    assert!(matches!(parse_source("a < b < c"), Err(Error::Syntax(_))));
}

#[test]
fn test_if_else_round_trip_scenario() {
    let program = program("x = 1\nif x < 2:\n  y = x + 1\nelse:\n  y = x - 1\n");
    assert_eq!(program.statements.len(), 2);

    match &program.statements[0] {
        Statement::Assignment { target, value } => {
            assert_eq!(target.text(), Some("x"));
            assert_number(value, 1);
        }
        other => panic!("Expected Assignment, got {:?}", other),
    }

    let Statement::If {
        condition,
        then_block,
        else_block,
    } = &program.statements[1]
    else {
        panic!("Expected If");
    };

    match condition {
        Expression::BooleanExpression {
            left,
            operator,
            right,
        } => {
            assert_identifier(left, "x");
            assert_eq!(operator.kind, TokenKind::Less);
            assert_number(right, 2);
        }
        other => panic!("Expected BooleanExpression, got {:?}", other),
    }

    let branches = [
        (then_block, TokenKind::Plus),
        (else_block.as_ref().expect("else block"), TokenKind::Minus),
    ];
    for (block, kind) in branches {
        assert_eq!(block.statements.len(), 1);
        match &block.statements[0] {
            Statement::Assignment { target, value } => {
                assert_eq!(target.text(), Some("y"));
                let (left, right) = assert_binary(value, kind);
                assert_identifier(left, "x");
                assert_number(right, 1);
            }
            other => panic!("Expected Assignment, got {:?}", other),
        }
    }
}

#[test]
fn test_function_call_scenario() {
    let program = program("f(a, b+1)");
    assert_eq!(program.statements.len(), 1);

    let Statement::FunctionCall(call) = &program.statements[0] else {
        panic!("Expected FunctionCall");
    };
    assert_eq!(call.name.text(), Some("f"));
    assert_eq!(call.arguments.len(), 2);
    assert_identifier(&call.arguments[0], "a");

    let (left, right) = assert_binary(&call.arguments[1], TokenKind::Plus);
    assert_identifier(left, "b");
    assert_number(right, 1);
}

#[test]
fn test_empty_argument_list() {
    let program = program("f()");
    let Statement::FunctionCall(call) = &program.statements[0] else {
        panic!("Expected FunctionCall");
    };
    assert_eq!(call.name.text(), Some("f"));
    assert!(call.arguments.is_empty());
}

#[test]
fn test_dangling_operator() {
    let err = parse(tokenize("x +").unwrap()).unwrap_err();
    assert_eq!(err.token().kind, TokenKind::Plus);

    let err = parse(tokenize("x = x +").unwrap()).unwrap_err();
    assert!(matches!(err, SyntaxError::Unexpected { .. }));
    assert_eq!(err.token().kind, TokenKind::Eof);
    assert_eq!(err.token().offset, 7);
}

#[test]
fn test_nested_loops_and_calls() {
    let source = r#"
i = 0
while i < 10:
  j = 0
  while j != i:
    print(i, j, i * j)
    j = j + 1
  i = i + 1
"#;
    let program = program(source);
    assert_eq!(program.statements.len(), 2);

    // `i = i + 1` follows the inner loop, so it lands in the inner body
    let Statement::While { body, .. } = &program.statements[1] else {
        panic!("Expected While");
    };
    assert_eq!(body.statements.len(), 2);
    let Statement::While { body: inner, .. } = &body.statements[1] else {
        panic!("Expected inner While");
    };
    assert_eq!(inner.statements.len(), 3);
}

#[test]
fn test_display_reparses_to_same_rendering() {
    let source = "x = 1\nif x < 2:\n  y = (x + 1) * 3\n  while y > 0:\n    y = y - 1\n    show(y, x / 2)\nelse:\n  y = x - 1 - 2\n";
    let first = program(source).to_string();
    let second = program(&first).to_string();
    assert_eq!(first, second);
    assert_eq!(
        first,
        "x = 1\nif x < 2:\n  y = (x + 1) * 3\n  while y > 0:\n    y = y - 1\n    show(y, x / 2)\nelse:\n  y = (x - 1) - 2\n"
    );
}

#[test]
fn test_token_kind_names_are_stable() {
    let names: Vec<String> = tokenize("a 1 if else while + - * / = == != < > , : ( )")
        .unwrap()
        .iter()
        .map(|token| serde_json::to_value(token.kind).unwrap().as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "IDENTIFIER", "NUMBER", "IF", "ELSE", "WHILE", "PLUS", "MINUS", "MULTIPLY", "DIVIDE",
            "EQUALS", "EQ", "NEQ", "LESS", "GREATER", "COMMA", "COLON", "LPAREN", "RPAREN", "EOF",
        ]
    );

    let display: Vec<String> = tokenize("( )")
        .unwrap()
        .iter()
        .map(|token| token.kind.to_string())
        .collect();
    assert_eq!(display, vec!["LPAREN", "RPAREN", "EOF"]);
}

#[test]
fn test_token_json_shape() {
    let tokens = tokenize("n = 7").unwrap();
    let json = serde_json::to_value(&tokens).unwrap();

    assert_eq!(json[0]["kind"], "IDENTIFIER");
    assert_eq!(json[0]["value"], "n");
    assert_eq!(json[1]["kind"], "EQUALS");
    assert!(json[1]["value"].is_null());
    assert_eq!(json[2]["value"], 7);
    assert_eq!(json[3]["kind"], "EOF");

    let back: Vec<Token> = serde_json::from_value(json).unwrap();
    assert_eq!(back, tokens);
}

#[test]
fn test_ast_serializes() {
    let program = program("while a > 0:\n  a = a - 1");
    let json = serde_json::to_string(&program).unwrap();
    let back: Program = serde_json::from_str(&json).unwrap();
    assert_eq!(back, program);
}

#[test]
fn test_error_reports_position() {
    let err = parse_source("x = 1\ny = 2 @").unwrap_err();
    assert_eq!(err.position(), (2, 7));
    assert!(err.to_string().contains("'@'"));

    let err = parse_source("x = 1\nwhile x\n  x = 2").unwrap_err();
    assert_eq!(err.position(), (3, 3));
    assert!(err
        .to_string()
        .contains("expected COLON, found IDENTIFIER `x`"));
}
