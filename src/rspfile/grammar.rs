//! Response-file line grammar.
//!
//! Reading accepts backslash escapes plus single- and double-quoted
//! sections. Writing always emits the double-quoted form, the same shape a
//! clang driver uses when it hands a response file to its own frontend.

/// Decode one line of a response file.
///
/// - `\x` yields `x`; a trailing lone `\` is kept as is.
/// - `"..."` and `'...'` group text up to the matching quote. Escapes apply
///   inside both kinds; the other quote character is literal.
/// - An unterminated quote runs to the end of the line.
///
/// Spaces are preserved; splitting happens separately in [`split_words`].
pub fn unescape_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some(escaped) => out.push(escaped),
                None => out.push('\\'),
            },
            '"' | '\'' => {
                let quote = ch;
                while let Some(inner) = chars.next() {
                    if inner == quote {
                        break;
                    }
                    if inner == '\\' {
                        match chars.next() {
                            Some(escaped) => out.push(escaped),
                            None => out.push('\\'),
                        }
                    } else {
                        out.push(inner);
                    }
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Split an unescaped line into words on the space character.
///
/// Only `' '` separates; empty pieces are dropped.
pub fn split_words(unescaped: &str) -> impl Iterator<Item = &str> {
    unescaped.split(' ').filter(|word| !word.is_empty())
}

/// Quote a single argument for a response file.
///
/// Every argument is quoted, needed or not.
pub fn quote_arg(arg: &str) -> String {
    let mut out = String::with_capacity(arg.len() + 2);
    out.push('"');
    for ch in arg.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

/// Serialize an argument list, one quoted argument per line.
pub fn render<S: AsRef<str>>(args: &[S]) -> String {
    let mut out = String::new();
    for arg in args {
        out.push_str(&quote_arg(arg.as_ref()));
        out.push('\n');
    }
    out
}
