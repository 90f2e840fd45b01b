/// Position of the first quoting violation in a CSV buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteError {
    pub line: u64,
    pub message: &'static str,
}

#[derive(Clone, Copy)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
    /// Just saw a `"` inside a quoted field: either an escape or the close.
    QuoteInQuoted,
}

/// RFC 4180 quoting check. The csv reader accepts stray quotes in unquoted
/// fields and an unterminated quoted field at EOF; both are rejected here.
pub fn check_quoting(data: &[u8]) -> Result<(), QuoteError> {
    let mut state = State::FieldStart;
    let mut line = 1u64;
    let mut open_line = 1u64;

    for &byte in data {
        state = match (state, byte) {
            (State::Quoted, b'"') => State::QuoteInQuoted,
            (State::Quoted, _) => State::Quoted,
            (State::FieldStart, b'"') => {
                open_line = line;
                State::Quoted
            }
            (State::QuoteInQuoted, b'"') => State::Quoted,
            (State::Unquoted, b'"') => {
                return Err(QuoteError {
                    line,
                    message: "quote character inside an unquoted field",
                });
            }
            (_, b',' | b'\n' | b'\r') => State::FieldStart,
            (State::QuoteInQuoted, _) => {
                return Err(QuoteError {
                    line,
                    message: "unexpected character after closing quote",
                });
            }
            (State::FieldStart | State::Unquoted, _) => State::Unquoted,
        };
        if byte == b'\n' {
            line += 1;
        }
    }

    if matches!(state, State::Quoted) {
        return Err(QuoteError {
            line: open_line,
            message: "quoted field is not terminated",
        });
    }
    Ok(())
}
