use crate::prompt::confirm;

use std::io::Cursor;

fn ask(answer: &str) -> (bool, String) {
    let mut input = Cursor::new(answer.as_bytes().to_vec());
    let mut out: Vec<u8> = Vec::new();

    let confirmed = confirm(&mut input, &mut out, "Delete?").expect("confirm");

    (confirmed, String::from_utf8(out).expect("utf8"))
}

/// **VALUE**: Only an explicit yes deletes.
///
/// **WHY THIS MATTERS**: Deleting a droplet destroys its disk. Anything ambiguous must
/// be treated as no.
///
/// **BUG THIS CATCHES**: Would catch a default-yes prompt, or prefix matching that accepts
/// `yeah` or `n` mistakes.
#[test]
fn given_various_answers_when_confirming_then_only_y_or_yes_accepted() {
    assert!(ask("y\n").0);
    assert!(ask("YES\n").0);
    assert!(ask("  yes  \n").0);

    assert!(!ask("n\n").0);
    assert!(!ask("\n").0);
    assert!(!ask("yeah\n").0);
    assert!(!ask("").0, "EOF counts as no");
}

#[test]
fn given_question_when_confirming_then_prompt_has_default_hint() {
    let (_, printed) = ask("n\n");

    assert_eq!(printed, "Delete? (y/N): ");
}
