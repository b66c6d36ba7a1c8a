use super::*;

#[test]
fn test_square_parse_is_case_insensitive() {
    let lower: Square = "e4".parse().unwrap();
    let upper: Square = "E4".parse().unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower.column(), 'E');
    assert_eq!(lower.row(), 4);
    assert_eq!(lower.to_string(), "E4");
}

#[test]
fn test_square_parse_rejects_off_board() {
    assert!("i1".parse::<Square>().is_err());
    assert!("a9".parse::<Square>().is_err());
    assert!("a0".parse::<Square>().is_err());
    assert!("a10".parse::<Square>().is_err());
    assert!("".parse::<Square>().is_err());
}

#[test]
fn test_move_parse_two_tokens() {
    let mv: Move = "e2   E4".parse().unwrap();
    assert_eq!(mv.from, "E2".parse().unwrap());
    assert_eq!(mv.to, "E4".parse().unwrap());
    assert_eq!(mv.to_string(), "E2 E4");
    assert_eq!(mv.arrow(), "E2→E4");
}

#[test]
fn test_move_parse_wrong_shape() {
    assert!(matches!(
        "e2e4".parse::<Move>(),
        Err(ParseMoveError::Shape(_))
    ));
    assert!(matches!(
        "e2 e4 e5".parse::<Move>(),
        Err(ParseMoveError::Shape(_))
    ));
    assert!(matches!(
        "e2 z4".parse::<Move>(),
        Err(ParseMoveError::Square(_))
    ));
}

#[test]
fn test_between_lines_and_diagonals() {
    let a1: Square = "a1".parse().unwrap();
    let a4: Square = "a4".parse().unwrap();
    let d4: Square = "d4".parse().unwrap();
    let b3: Square = "b3".parse().unwrap();

    let column: Vec<String> = a1.between(a4).iter().map(|s| s.to_string()).collect();
    assert_eq!(column, vec!["A2", "A3"]);

    let diagonal: Vec<String> = d4.between(a1).iter().map(|s| s.to_string()).collect();
    assert_eq!(diagonal, vec!["C3", "B2"]);

    assert!(a1.between(b3).is_empty(), "knight jump is not a line");
    assert!(a1.between(a1).is_empty());
}
