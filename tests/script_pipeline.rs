//! Script pipeline integration tests: source text to definition to a played session.

use cgscript::dsl::lexer::Lexer;
use cgscript::dsl::token::TokenKind;
use cgscript::dsl::{Compiler, ErrorKind, ExecutionMode, Parser};
use cgscript::runtime::{Outcome, Session};

fn sample_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("game.cgs")
}

#[test]
fn bundled_sample_parses() {
    let text = cgscript::source::load_script(&sample_path()).unwrap();
    let def = Compiler::parse(&text).unwrap();
    assert_eq!(def.title, "World Explorer");
    assert_eq!(def.max_lives, 3);
    let targets: Vec<_> = def.levels.iter().map(|l| l.target.as_deref()).collect();
    assert_eq!(targets, vec![Some("FRANCE"), Some("JAPAN")]);
}

#[test]
fn bundled_sample_plays_to_victory() {
    let text = cgscript::source::load_script(&sample_path()).unwrap();
    let mut session = Session::new(Compiler::parse(&text).unwrap());

    assert_eq!(session.submit_guess("germany"), Outcome::InProgress);
    assert_eq!(session.lives_remaining(), 2);
    assert_eq!(session.submit_guess("France"), Outcome::LevelWon);
    assert_eq!(session.advance(), Outcome::InProgress);
    assert_eq!(session.lives_remaining(), 3);
    assert_eq!(session.current_hint(), Some("Land of the rising sun"));
    assert_eq!(session.submit_guess("  japan"), Outcome::LevelWon);
    assert_eq!(session.advance(), Outcome::AllLevelsWon);
}

#[test]
fn two_level_scenario() {
    let src = r#"GAME "X";MAX_LIVES 2;LEVEL 1;TARGET "A";HINT "h";LEVEL 2;TARGET "B";HINT "h2";"#;
    let def = Compiler::parse(src).unwrap();
    assert_eq!(def.max_lives, 2);
    assert_eq!(def.levels[0].target.as_deref(), Some("A"));
    assert_eq!(def.levels[1].target.as_deref(), Some("B"));

    let mut session = Session::new(def);
    assert_eq!(session.submit_guess("a"), Outcome::LevelWon);
    session.advance();
    assert_eq!(session.submit_guess("z"), Outcome::InProgress);
    assert_eq!(session.submit_guess("z"), Outcome::GameOver);
    assert_eq!(session.submit_guess("b"), Outcome::GameOver);
    assert_eq!(session.lives_remaining(), 0);
}

#[test]
fn level_count_matches_declarations() {
    let numbers = [3u64, 1, 3, 10, 2];
    let src: String = numbers.iter().map(|n| format!("LEVEL {n};\n")).collect();
    let def = Compiler::parse(&src).unwrap();
    assert_eq!(def.levels.len(), numbers.len());
    for (level, n) in def.levels.iter().zip(numbers) {
        assert_eq!(level.level_number, n);
    }
}

#[test]
fn errors_carry_positions() {
    let err = Compiler::parse("GAME \"X\";\nLEVEL \"one\";").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::Syntax {
            expected: vec![TokenKind::IntLiteral],
            found: TokenKind::StringLiteral,
        }
    );
    assert_eq!((err.line, err.col), (2, 7));

    let err = Compiler::parse("GAME \"X\";\n  FOO;").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownKeyword("FOO".into()));
    assert_eq!((err.line, err.col), (2, 3));
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let src = "\n// header comment\n\nGAME \"C\"; // trailing\n// LEVEL 9;\nLEVEL 1;\n";
    let def = Compiler::parse(src).unwrap();
    assert_eq!(def.title, "C");
    assert_eq!(def.levels.len(), 1);
    assert_eq!(def.levels[0].level_number, 1);
}

#[test]
fn lexer_stream_ends_once() {
    let tokens = Lexer::new("SOLVE;").tokenize().unwrap();
    let eofs = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::EndOfInput)
        .count();
    assert_eq!(eofs, 1);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfInput));
}

#[test]
fn partial_definition_is_queryable_after_error() {
    let mut parser = Parser::new(
        "GAME \"Half\";\nMAX_LIVES 4;\nLEVEL 1;\nTARGET \"A\";\nHINT 5;",
        ExecutionMode::ParseOnly,
    )
    .unwrap();
    let err = parser.parse().unwrap_err();
    assert!(err.is_syntax());
    let def = parser.definition();
    assert_eq!(def.title, "Half");
    assert_eq!(def.max_lives, 4);
    assert_eq!(def.levels[0].target.as_deref(), Some("A"));
    assert_eq!(def.levels[0].hint, None);
}

#[test]
fn definition_exports_as_json() {
    let def = Compiler::parse("GAME \"J\"; TARGET \"PERU\";").unwrap();
    let json = serde_json::to_value(&def).unwrap();
    assert_eq!(json["title"], "J");
    assert_eq!(json["max_lives"], 1);
    assert_eq!(json["loose_target"], "PERU");
    assert!(json["levels"].as_array().unwrap().is_empty());
}
