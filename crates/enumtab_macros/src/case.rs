//! Case conventions for `#[reflect(rename_all = "...")]`.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenameRule {
    Lower,
    Upper,
    Snake,
    ScreamingSnake,
    Kebab,
    Camel,
    Pascal,
}

impl RenameRule {
    pub const ALL: &[(&'static str, RenameRule)] = &[
        ("lowercase", RenameRule::Lower),
        ("UPPERCASE", RenameRule::Upper),
        ("snake_case", RenameRule::Snake),
        ("SCREAMING_SNAKE_CASE", RenameRule::ScreamingSnake),
        ("kebab-case", RenameRule::Kebab),
        ("camelCase", RenameRule::Camel),
        ("PascalCase", RenameRule::Pascal),
    ];

    pub fn from_name(s: &str) -> Option<RenameRule> {
        Self::ALL
            .iter()
            .find(|(name, _)| *name == s)
            .map(|&(_, rule)| rule)
    }

    /// Comma-separated list of accepted spellings, for error messages.
    pub fn expected() -> String {
        Self::ALL
            .iter()
            .map(|(name, _)| format!("`{name}`"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Apply this rule to a variant identifier.
    pub fn apply(self, ident: &str) -> String {
        match self {
            RenameRule::Lower => ident.replace('_', "").to_lowercase(),
            RenameRule::Upper => ident.replace('_', "").to_uppercase(),
            RenameRule::Snake => join(ident, "_", str::to_lowercase),
            RenameRule::ScreamingSnake => join(ident, "_", str::to_uppercase),
            RenameRule::Kebab => join(ident, "-", str::to_lowercase),
            RenameRule::Camel => {
                let mut out = String::new();
                for (i, word) in split_words(ident).iter().enumerate() {
                    if i == 0 {
                        out.push_str(&word.to_lowercase());
                    } else {
                        out.push_str(&capitalize(word));
                    }
                }
                out
            }
            RenameRule::Pascal => split_words(ident).iter().map(|w| capitalize(w)).collect(),
        }
    }
}

fn join(ident: &str, sep: &str, f: fn(&str) -> String) -> String {
    split_words(ident)
        .iter()
        .map(|w| f(w))
        .collect::<Vec<_>>()
        .join(sep)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Split an identifier into words.
///
/// Boundaries are underscores, a lower-to-upper transition (`ReadOnly`), and
/// the last capital of an acronym run (`HTTPServer` -> `HTTP`, `Server`).
/// Digits stay attached to the preceding word.
fn split_words(ident: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = ident.char_indices().collect();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &(pos, c)) in chars.iter().enumerate() {
        if c == '_' {
            if let Some(s) = start.take() {
                words.push(&ident[s..pos]);
            }
            continue;
        }

        let prev = i.checked_sub(1).map(|p| chars[p].1);
        let next = chars.get(i + 1).map(|&(_, n)| n);
        let boundary = c.is_uppercase()
            && match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(char::is_lowercase),
                _ => false,
            };

        match start {
            Some(s) if boundary => {
                words.push(&ident[s..pos]);
                start = Some(pos);
            }
            None => start = Some(pos),
            Some(_) => {}
        }
    }

    if let Some(s) = start {
        words.push(&ident[s..]);
    }
    words
}
