//! Comma-separated list splitting for header field values.
//!
//! RFC 7230 §7 list syntax (`#rule`): elements are separated by commas,
//! but a comma inside a quoted string or quoted pair belongs to the
//! element. The splitter tracks just enough quoting state to tell the two
//! apart; it does not validate the elements themselves.

use crate::error::ListError;

/// Splits `input` on top-level commas.
///
/// Elements are trimmed and empty elements are dropped, so stray or
/// trailing commas are harmless. A closing DQUOTE ends its element
/// immediately; text between the closing quote and the next comma becomes
/// a separate element.
///
/// # Errors
///
/// Returns [`ListError::UnclosedQuotedString`] when the input ends inside
/// a quoted string, and [`ListError::UnclosedQuotedPair`] when it ends
/// right after a backslash. The quoted-pair check wins when both apply.
///
/// # Examples
///
/// ```
/// use credfield::list;
///
/// let elements = list::split("a, b=\"x, y\", c")?;
/// assert_eq!(elements, ["a", "b=\"x, y\"", "c"]);
/// # Ok::<(), credfield::ListError>(())
/// ```
pub fn split(input: &str) -> Result<Vec<String>, ListError> {
    let mut elements = Vec::new();
    let mut element = String::new();
    let mut in_quoted_string = false;
    let mut in_quoted_pair = false;

    for ch in input.chars() {
        match ch {
            '"' => {
                element.push(ch);
                if !in_quoted_pair {
                    in_quoted_string = !in_quoted_string;
                    if !in_quoted_string {
                        close_element(&mut elements, &mut element);
                    }
                }
            }
            ',' if !in_quoted_string && !in_quoted_pair => {
                close_element(&mut elements, &mut element);
            }
            _ => element.push(ch),
        }
        in_quoted_pair = !in_quoted_pair && ch == '\\';
    }

    if in_quoted_pair {
        return Err(ListError::UnclosedQuotedPair);
    }
    if in_quoted_string {
        return Err(ListError::UnclosedQuotedString);
    }
    close_element(&mut elements, &mut element);
    Ok(elements)
}

fn close_element(elements: &mut Vec<String>, element: &mut String) {
    let trimmed = element.trim();
    if !trimmed.is_empty() {
        elements.push(trimmed.to_string());
    }
    element.clear();
}
