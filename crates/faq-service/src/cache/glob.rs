//! Redis-compatible glob matching for key patterns.
//!
//! Supports `*`, `?`, `[abc]`, `[a-z]`, `[^a]` and `\` escapes, with the
//! same semantics as the `KEYS` command.

/// Returns true if `key` matches `pattern`.
#[must_use]
pub fn glob_match(pattern: &str, key: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let key: Vec<char> = key.chars().collect();
    match_from(&pattern, &key)
}

fn match_from(mut pattern: &[char], mut key: &[char]) -> bool {
    while let Some(&p) = pattern.first() {
        match p {
            '*' => {
                while pattern.first() == Some(&'*') {
                    pattern = &pattern[1..];
                }
                if pattern.is_empty() {
                    return true;
                }
                return (0..=key.len()).any(|skip| match_from(pattern, &key[skip..]));
            }
            '?' => {
                if key.is_empty() {
                    return false;
                }
                key = &key[1..];
                pattern = &pattern[1..];
            }
            '[' => {
                let Some(&c) = key.first() else {
                    return false;
                };
                let (matched, rest) = match_class(&pattern[1..], c);
                if !matched {
                    return false;
                }
                pattern = rest;
                key = &key[1..];
            }
            '\\' if pattern.len() >= 2 => {
                if key.first() != Some(&pattern[1]) {
                    return false;
                }
                pattern = &pattern[2..];
                key = &key[1..];
            }
            literal => {
                if key.first() != Some(&literal) {
                    return false;
                }
                pattern = &pattern[1..];
                key = &key[1..];
            }
        }
    }
    key.is_empty()
}

/// Matches `c` against a bracket class whose body starts at `class`
/// (just past the `[`). Returns the result and the pattern after the `]`.
fn match_class(class: &[char], c: char) -> (bool, &[char]) {
    let mut rest = class;
    let negate = rest.first() == Some(&'^');
    if negate {
        rest = &rest[1..];
    }

    let mut matched = false;
    loop {
        match rest {
            // Unterminated class: Redis treats the end of pattern as `]`.
            [] => break,
            [']', tail @ ..] => {
                rest = tail;
                break;
            }
            ['\\', escaped, tail @ ..] => {
                matched |= *escaped == c;
                rest = tail;
            }
            [start, '-', end, tail @ ..] if *end != ']' => {
                let (lo, hi) = if start <= end { (*start, *end) } else { (*end, *start) };
                matched |= (lo..=hi).contains(&c);
                rest = tail;
            }
            [single, tail @ ..] => {
                matched |= *single == c;
                rest = tail;
            }
        }
    }

    (matched != negate, rest)
}
