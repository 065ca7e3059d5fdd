// crates/infra/src/frontend/sanitize.rs
//! Removes compiler-specific syntax that system headers leave in preprocessed
//! output and that the C grammar has no use for. Every newline is kept, so a
//! [`LineMap`](super::line_map::LineMap) built before sanitizing stays valid.

enum Rewrite {
    Drop,
    Replace(&'static str),
    /// Drop the keyword together with a parenthesised argument list.
    DropWithArgs,
}

fn rewrite_for(ident: &str) -> Option<Rewrite> {
    Some(match ident {
        "__extension__" | "__restrict" | "__restrict__" => Rewrite::Drop,
        "__const" => Rewrite::Replace("const"),
        "__inline" | "__inline__" => Rewrite::Replace("inline"),
        "__signed__" => Rewrite::Replace("signed"),
        "__volatile" => Rewrite::Replace("volatile"),
        "__attribute__" | "__attribute" | "__asm__" | "__asm" | "__declspec" => Rewrite::DropWithArgs,
        _ => return None,
    })
}

/// Rewrites or drops GNU keywords in `text`.
pub fn sanitize(text: &str) -> String {
    rewrite_extensions(text)
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

fn rewrite_extensions(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '"' | '\'' => {
                let end = skip_literal(&chars, i);
                out.extend(&chars[i..end]);
                i = end;
            }
            '/' if chars.get(i + 1) == Some(&'/') => {
                let end = chars[i..].iter().position(|&ch| ch == '\n').map_or(chars.len(), |p| i + p);
                out.extend(&chars[i..end]);
                i = end;
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                let end = find_block_end(&chars, i + 2);
                out.extend(&chars[i..end]);
                i = end;
            }
            c if is_ident_start(c) => {
                let start = i;
                while i < chars.len() && is_ident_continue(chars[i]) {
                    i += 1;
                }
                let ident: String = chars[start..i].iter().collect();
                match rewrite_for(&ident) {
                    None => out.push_str(&ident),
                    Some(Rewrite::Drop) => out.push(' '),
                    Some(Rewrite::Replace(with)) => out.push_str(with),
                    Some(Rewrite::DropWithArgs) => match skip_parenthesized(&chars, i) {
                        Some(end) => {
                            out.push(' ');
                            push_newlines(&mut out, &chars[i..end]);
                            i = end;
                        }
                        // `__asm__ volatile (...)` statements are left for the grammar.
                        None => out.push_str(&ident),
                    },
                }
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

fn push_newlines(out: &mut String, skipped: &[char]) {
    out.extend(skipped.iter().filter(|&&c| c == '\n'));
}

/// Index just past the string or character literal opening at `start`.
fn skip_literal(chars: &[char], start: usize) -> usize {
    let quote = chars[start];
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            c if c == quote => return i + 1,
            '\n' => return i,
            _ => i += 1,
        }
    }
    chars.len()
}

fn find_block_end(chars: &[char], from: usize) -> usize {
    let mut i = from;
    while i + 1 < chars.len() {
        if chars[i] == '*' && chars[i + 1] == '/' {
            return i + 2;
        }
        i += 1;
    }
    chars.len()
}

/// If optional whitespace followed by a balanced `( ... )` starts at `from`,
/// returns the index just past the closing parenthesis.
fn skip_parenthesized(chars: &[char], from: usize) -> Option<usize> {
    let mut i = from;
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    if chars.get(i) != Some(&'(') {
        return None;
    }
    let mut depth = 0usize;
    while i < chars.len() {
        match chars[i] {
            '"' | '\'' => {
                i = skip_literal(chars, i);
                continue;
            }
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}
