//! Stateless console helpers: prompting, quote stripping, ANSI styling.
//!
//! Styling is modelled as pure functions that wrap a string in an escape
//! sequence and reset afterwards, so no ambient terminal state survives a
//! call. The library itself never prints; only the binary uses these.

use std::io::{self, BufRead, Write};

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

pub fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
pub fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
pub fn yellow(s: &str) -> String {
    format!("\x1b[33m{s}\x1b[0m")
}
pub fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

// ── Input helpers ────────────────────────────────────────────────────────────

/// Print `prompt` followed by a space, then read one line from `input`.
///
/// Returns `None` only on EOF. An empty line comes back as `Some("")`:
/// the caller's validation treats it as an absent path and re-prompts,
/// whereas EOF means stdin is gone for good and the run should end.
pub fn prompt_line(prompt: &str, input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut out = io::stdout();
    write!(out, "{prompt} ")?;
    out.flush()?;

    let mut line = String::new();
    let n = input.read_line(&mut line)?;
    if n == 0 {
        return Ok(None); // EOF
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Strip one pair of surrounding double-quote characters, if present.
///
/// Tolerates paths copied from a file browser as `"C:\docs\a.pdf"`.
/// Quotes inside the path are left alone.
pub fn strip_surrounding_quotes(path: &str) -> &str {
    path.trim_matches('"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn strips_one_pair_of_quotes() {
        assert_eq!(strip_surrounding_quotes("\"/tmp/a.pdf\""), "/tmp/a.pdf");
        assert_eq!(strip_surrounding_quotes("/tmp/a.pdf"), "/tmp/a.pdf");
        assert_eq!(strip_surrounding_quotes("\"C:\\docs\\a.pdf\""), "C:\\docs\\a.pdf");
    }

    #[test]
    fn inner_quotes_are_kept() {
        assert_eq!(strip_surrounding_quotes("a\"b.pdf"), "a\"b.pdf");
    }

    #[test]
    fn empty_string_is_fine() {
        assert_eq!(strip_surrounding_quotes(""), "");
        assert_eq!(strip_surrounding_quotes("\"\""), "");
    }

    #[test]
    fn prompt_reads_a_line() {
        let mut input = Cursor::new(b"hello.pdf\n".to_vec());
        let got = prompt_line("Enter PDF file path:", &mut input).unwrap();
        assert_eq!(got.as_deref(), Some("hello.pdf"));
    }

    #[test]
    fn prompt_keeps_empty_lines() {
        let mut input = Cursor::new(b"\n".to_vec());
        assert_eq!(prompt_line(">", &mut input).unwrap().as_deref(), Some(""));
    }

    #[test]
    fn prompt_returns_none_on_eof() {
        let mut input = Cursor::new(Vec::new());
        assert_eq!(prompt_line(">", &mut input).unwrap(), None);
    }

    #[test]
    fn prompt_strips_crlf() {
        let mut input = Cursor::new(b"a.pdf\r\n".to_vec());
        assert_eq!(prompt_line(">", &mut input).unwrap().as_deref(), Some("a.pdf"));
    }

    #[test]
    fn colours_reset_after_each_segment() {
        assert_eq!(green("ok"), "\x1b[32mok\x1b[0m");
        assert!(yellow("warn").ends_with("\x1b[0m"));
        assert!(red("bad").starts_with("\x1b[31m"));
        assert!(cyan("path").contains("path"));
    }
}
