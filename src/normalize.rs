use log::debug;

use crate::error::ParseError;

/// Rewrites every unary minus in a whitespace-free expression into an
/// explicit binary form, so the shunting-yard pass can treat `-` uniformly
/// as subtraction.
///
/// A `-` is unary exactly when it is the first character or the preceding
/// character is not a digit. Two rewrite shapes exist, picked by the
/// character after the `-`:
///
/// * digit / `x` / `y`: the negated operand is a literal or variable run,
///   rewritten `-3.5` → `(0-3.5)`;
/// * anything else: the negated operand is a parenthesized group or function
///   call, rewritten `-sin(x)` → `((0-1)*sin(x))` once the parenthesis
///   balance returns to zero.
///
/// The scan resumes after each rewritten span, so already-normalized text is
/// left alone on a second pass.
pub(crate) fn format_minus_signs(input: &str) -> Result<String, ParseError> {
    let src: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(src.len());

    let mut i = 0;
    while i < src.len() {
        let c = src[i];

        // `out` mirrors the text processed so far, so its last character is
        // what precedes position i after any earlier rewrites.
        let unary = c == '-' && out.chars().next_back().is_none_or(|p| !p.is_ascii_digit());
        if !unary {
            out.push(c);
            i += 1;
            continue;
        }

        match src.get(i + 1) {
            Some(&next) if next.is_ascii_digit() || next == 'x' || next == 'y' => {
                let mut end = i + 1;
                while end < src.len() && is_operand_char(src[end]) {
                    end += 1;
                }

                out.push_str("(0");
                out.extend(&src[i..end]);
                out.push(')');
                i = end;
            }
            _ => {
                // Negated group or call: find the close paren that brings
                // the balance back to zero.
                let mut balance = 0i32;
                let mut close = None;
                for (j, &g) in src.iter().enumerate().skip(i + 1) {
                    match g {
                        '(' => balance += 1,
                        ')' => {
                            balance -= 1;
                            if balance == 0 {
                                close = Some(j);
                                break;
                            }
                            if balance < 0 {
                                return Err(ParseError::MismatchedParenthesis);
                            }
                        }
                        _ => {}
                    }
                }
                let close = close.ok_or(ParseError::MismatchedParenthesis)?;

                out.push_str("((0-1)*");
                out.extend(&src[i + 1..=close]);
                out.push(')');
                i = close + 1;
            }
        }
    }

    if out != input {
        debug!("normalized unary minus: {input} -> {out}");
    }
    Ok(out)
}

fn is_operand_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == 'x' || c == 'y'
}
