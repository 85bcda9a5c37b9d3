/// Decide whether a submitted answer matches the expected one.
///
/// Comparison ignores surrounding whitespace and letter case. A question
/// with no known correct answer can never be answered correctly.
pub fn is_correct_answer(user_answer: &str, correct_answer: Option<&str>) -> bool {
    match correct_answer {
        Some(expected) => user_answer.trim().to_uppercase() == expected.trim().to_uppercase(),
        None => false,
    }
}
