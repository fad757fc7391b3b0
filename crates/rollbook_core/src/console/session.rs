//! Add-two-numbers session loop.

use crate::console::reader::{prompt_int, TokenReader};
use crate::console::{EXIT_PROMPT, EXIT_SENTINEL, VALUE_PROMPT};
use log::info;
use std::io::{self, BufRead, Write};

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The sentinel was entered at the exit prompt.
    Sentinel,
    /// Input ran out.
    InputClosed,
}

/// Outcome of one arithmetic session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Every sum printed, in order.
    pub sums: Vec<i64>,
    pub end: SessionEnd,
}

/// Runs the sum loop until the sentinel is entered or input ends.
///
/// # Errors
/// - Propagates I/O errors from `input` or `output`. Malformed tokens are
///   never errors.
pub fn run_sum_session<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
) -> io::Result<SessionSummary> {
    let mut reader = TokenReader::new(input);
    let mut sums = Vec::new();

    let end = loop {
        let Some(first) = prompt_int(&mut reader, output, VALUE_PROMPT)? else {
            break SessionEnd::InputClosed;
        };
        let Some(second) = prompt_int(&mut reader, output, VALUE_PROMPT)? else {
            break SessionEnd::InputClosed;
        };

        let sum = i64::from(first) + i64::from(second);
        writeln!(output, "Sum is : {sum}")?;
        sums.push(sum);

        match prompt_int(&mut reader, output, EXIT_PROMPT)? {
            Some(EXIT_SENTINEL) => break SessionEnd::Sentinel,
            Some(_) => continue,
            None => break SessionEnd::InputClosed,
        }
    };
    output.flush()?;

    info!(
        "event=sum_session_end module=console status=ok sums={} end={:?}",
        sums.len(),
        end
    );
    Ok(SessionSummary { sums, end })
}

#[cfg(test)]
mod tests {
    use super::{run_sum_session, SessionEnd};
    use std::io::Cursor;

    #[test]
    fn stops_at_sentinel() {
        let mut out = Vec::new();
        let summary = run_sum_session(Cursor::new("2 3\n1\n99 99\n"), &mut out).unwrap();

        assert_eq!(summary.sums, vec![5]);
        assert_eq!(summary.end, SessionEnd::Sentinel);
        assert!(String::from_utf8(out).unwrap().contains("Sum is : 5"));
    }

    #[test]
    fn sum_does_not_overflow_i32() {
        let input = format!("{} {}\n1\n", i32::MAX, i32::MAX);
        let mut out = Vec::new();
        let summary = run_sum_session(Cursor::new(input), &mut out).unwrap();
        assert_eq!(summary.sums, vec![2 * i64::from(i32::MAX)]);
    }
}
