use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    /// `{key}`. `quoted` when the placeholder sits between single quotes.
    Named { key: String, quoted: bool },
    /// `{}`
    Positional,
}

/// Which kind of placeholder a template is filled through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholders {
    Named,
    Positional,
}

/// SQL text with placeholders, compiled once and formatted per call.
///
/// Placeholders use `{key}` (named) or `{}` (positional) syntax, and `{{` / `}}`
/// stand for literal braces. A template holds only one kind of placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
    kind: Placeholders,
    keys: Vec<String>,
    segments: Vec<Segment>,
}

impl Template {
    /// A template filled by keyword arguments.
    pub fn named(text: impl Into<String>) -> Result<Self> {
        Self::parse(text.into(), Placeholders::Named)
    }

    /// A template filled by positional arguments, in order.
    pub fn positional(text: impl Into<String>) -> Result<Self> {
        Self::parse(text.into(), Placeholders::Positional)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> Placeholders {
        self.kind
    }

    /// Named parameters in the order they appear, repeats included.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of `{}` placeholders.
    pub fn arity(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Positional))
            .count()
    }

    /// Fill named placeholders. Every key must be supplied, unknown keys are ignored.
    pub fn format_named(&self, keywords: &HashMap<String, Value>, quoting: Quoting) -> Result<String> {
        if let Some(missing) = self.keys.iter().find(|k| !keywords.contains_key(*k)) {
            return Err(Error::Lookup(format!(
                "missing keyword argument `{missing}` for `{}`",
                self.text
            )));
        }
        let mut out = String::with_capacity(self.text.len());
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Named { key, quoted } => {
                    // presence checked above
                    let value = keywords[key].to_string();
                    if *quoted {
                        out.push_str(&quoting.apply(&value));
                    } else {
                        out.push_str(&value);
                    }
                }
                Segment::Positional => {}
            }
        }
        Ok(out)
    }

    /// Fill `{}` placeholders from `args` in order. Surplus arguments are ignored.
    pub fn format_positional(&self, args: &[Value]) -> Result<String> {
        let arity = self.arity();
        if args.len() < arity {
            return Err(Error::Format(format!(
                "`{}` takes {arity} positional arguments, got {}",
                self.text,
                args.len()
            )));
        }
        if args.len() > arity {
            debug!("Ignoring {} surplus arguments for `{}`", args.len() - arity, self.text);
        }
        let mut args = args.iter();
        let mut out = String::with_capacity(self.text.len());
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Positional => {
                    if let Some(value) = args.next() {
                        out.push_str(&value.to_string());
                    }
                }
                Segment::Named { .. } => {}
            }
        }
        Ok(out)
    }

    fn parse(text: String, kind: Placeholders) -> Result<Self> {
        let invalid = |why: &str| Error::ConventionViolation(format!("invalid template `{text}`: {why}"));
        let mut segments = Vec::new();
        let mut keys = Vec::new();
        let mut literal = String::new();
        let mut chars = text.char_indices().peekable();

        while let Some((_, c)) = chars.next() {
            match c {
                '{' if chars.next_if(|&(_, n)| n == '{').is_some() => literal.push('{'),
                '}' if chars.next_if(|&(_, n)| n == '}').is_some() => literal.push('}'),
                '}' => return Err(invalid("unmatched `}`")),
                '{' => {
                    let mut key = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, '{')) | None => return Err(invalid("unclosed `{`")),
                            Some((_, ch)) => key.push(ch),
                        }
                    }
                    let quoted = literal.ends_with('\'')
                        && chars.peek().is_some_and(|&(_, n)| n == '\'');
                    if !literal.is_empty() {
                        segments.push(Segment::Text(std::mem::take(&mut literal)));
                    }
                    match (kind, key.is_empty()) {
                        (Placeholders::Positional, true) => segments.push(Segment::Positional),
                        (Placeholders::Named, false) => {
                            keys.push(key.clone());
                            segments.push(Segment::Named { key, quoted });
                        }
                        (Placeholders::Positional, false) => {
                            return Err(invalid("named placeholder in a positional template"));
                        }
                        (Placeholders::Named, true) => {
                            return Err(invalid("positional placeholder in a named template"));
                        }
                    }
                }
                other => literal.push(other),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Text(literal));
        }
        Ok(Self {
            text,
            kind,
            keys,
            segments,
        })
    }
}
