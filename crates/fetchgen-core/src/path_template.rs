/// A path split into literal segments interleaved with parameter
/// references. Invariant: `literals.len() == params.len() + 1`, including
/// zero-length literals for adjacent placeholders or placeholders at the
/// path's edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    pub literals: Vec<String>,
    pub params: Vec<String>,
}

impl PathTemplate {
    pub fn is_static(&self) -> bool {
        self.params.is_empty()
    }

    /// Interleave literals and placeholders back into the original path.
    pub fn reassemble(&self) -> String {
        let mut out = self.literals[0].clone();
        for (name, literal) in self.params.iter().zip(&self.literals[1..]) {
            out.push('{');
            out.push_str(name);
            out.push('}');
            out.push_str(literal);
        }
        out
    }
}

/// Split a path on `{name}` placeholders, left to right, duplicates
/// preserved. A brace pair whose contents are not a valid identifier, or an
/// unclosed `{`, is not a placeholder and stays in the literal text.
pub fn parse_path(path: &str) -> PathTemplate {
    let mut literals = Vec::new();
    let mut params = Vec::new();
    let mut current = String::new();
    let mut rest = path;

    while let Some(open) = rest.find('{') {
        current.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if is_identifier(&after[..close]) => {
                params.push(after[..close].to_string());
                literals.push(std::mem::take(&mut current));
                rest = &after[close + 1..];
            }
            _ => {
                current.push('{');
                rest = after;
            }
        }
    }
    current.push_str(rest);
    literals.push(current);

    PathTemplate { literals, params }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
