use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::*;

#[test]
fn test_tokenize() {
    assert_eq!(tokenize("R U R' U'"), ["R", "U", "R'", "U'"]);
    assert_eq!(tokenize("RUR'U'"), ["R", "U", "R'", "U'"]);
    assert_eq!(tokenize("  M2\tE'\nS  "), ["M2", "E'", "S"]);
    assert_eq!(tokenize(""), Vec::<String>::new());
    assert_eq!(tokenize("   "), Vec::<String>::new());

    // unknown letters still tokenize
    assert_eq!(tokenize("Rw2 R2"), ["R", "w2", "R2"]);
    assert_eq!(tokenize("Q'"), ["Q'"]);

    // at most one suffix per token
    assert_eq!(tokenize("R2'"), ["R2", "'"]);
    assert_eq!(tokenize("R22"), ["R2", "2"]);
    assert_eq!(tokenize("2R"), ["2", "R"]);
}

#[test]
fn test_parse_move() {
    assert_eq!("R".parse(), Ok(Move::new(Family::R, Turn::Normal)));
    assert_eq!("u2".parse(), Ok(Move::new(Family::WideU, Turn::Double)));
    assert_eq!("x'".parse(), Ok(Move::new(Family::X, Turn::Prime)));
    assert_eq!("M'".parse(), Ok(Move::new(Family::M, Turn::Prime)));

    assert_eq!("".parse::<Move>(), Err(ParseMoveError::Empty));
    assert_eq!(
        "w2".parse::<Move>(),
        Err(ParseMoveError::UnknownFamily("w2".to_owned())),
    );
    assert_eq!(
        "R3".parse::<Move>(),
        Err(ParseMoveError::BadSuffix("R3".to_owned())),
    );
    assert_eq!(
        "X".parse::<Move>(),
        Err(ParseMoveError::UnknownFamily("X".to_owned())),
    );
}

#[test]
fn test_family_kinds() {
    assert_eq!(Family::R.kind(), FamilyKind::Face);
    assert_eq!(Family::E.kind(), FamilyKind::Slice);
    assert_eq!(Family::WideF.kind(), FamilyKind::Wide);
    assert_eq!(Family::Z.kind(), FamilyKind::Rotation);
    assert_eq!(Family::from_char('b'), Some(Family::WideB));
    assert_eq!(Family::from_char('B'), Some(Family::B));
    assert_eq!(Family::from_char('w'), None);
}

#[test]
fn test_all_moves() {
    let all: Vec<Move> = Move::all().collect();
    assert_eq!(all.len(), 54);
    assert_eq!(
        all[..3].iter().map(|m| m.to_string()).collect::<Vec<_>>(),
        ["U", "U2", "U'"],
    );
}

#[test]
fn test_algorithm() {
    let alg: Algorithm = "R U R' U'".parse().unwrap();
    assert_eq!(alg.len(), 4);
    assert_eq!(alg.to_string(), "R U R' U'");
    assert_eq!(alg.inv().to_string(), "U R U' R'");

    let alg: Algorithm = "x2 r' S".parse().unwrap();
    assert_eq!(alg.inv().to_string(), "S' r x2");

    assert_eq!(
        "R U Rw".parse::<Algorithm>(),
        Err(ParseMoveError::UnknownFamily("w".to_owned())),
    );
}

proptest! {
    #[test]
    fn proptest_move_display_parses_back(m: Move) {
        assert_eq!(m.to_string().parse(), Ok(m));
    }

    #[test]
    fn proptest_inverse_is_involution(moves: Vec<Move>) {
        assert_eq!(invert_moves(&invert_moves(&moves)), moves);
    }

    #[test]
    fn proptest_tokens_of_display(moves: Vec<Move>) {
        let alg = Algorithm(moves);
        let s = alg.to_string();
        assert_eq!(s.parse(), Ok(alg));
        assert_eq!(tokenize(&s).join(""), s.replace(' ', ""));
    }
}
