use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::multispace0,
    sequence::pair,
    IResult,
};
use crate::token::Span;

/// Opening punctuation glued to the front of a word: quotes, brackets, dashes.
fn is_leading_punct(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}

/// Closing brackets and quotes are dropped; sentence punctuation stays on the term.
fn is_closing_wrapper(c: char) -> bool {
    matches!(c, ')' | ']' | '}' | '"' | '\u{201D}' | '\u{00BB}')
}

fn word_chunk(input: &str) -> IResult<&str, (&str, &str)> {
    pair(
        take_while(is_leading_punct),
        take_while1(|c: char| !c.is_whitespace()),
    )(input)
}

/// Splits `original_input` into surface terms, returning their byte spans.
///
/// Chunks without any alphanumeric character are skipped.
pub fn split_terms(original_input: &str) -> Vec<Span> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        // 1. Skip whitespace
        let (next_input, _) = match multispace0::<&str, nom::error::Error<&str>>(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        if input.is_empty() {
            break;
        }

        // 2. Try to match a word, stripping its leading punctuation
        match word_chunk(input) {
            Ok((next_input, (_lead, body))) => {
                let body = body.trim_end_matches(is_closing_wrapper);
                if body.chars().any(char::is_alphanumeric) {
                    let start = body.as_ptr() as usize - original_input.as_ptr() as usize;
                    result.push(Span::new(start, start + body.len()));
                }
                input = next_input;
            }
            Err(_) => {
                // Punctuation-only chunk: skip one char to recover
                if let Some(c) = input.chars().next() {
                    input = &input[c.len_utf8()..];
                } else {
                    break;
                }
            }
        }
    }

    result
}
