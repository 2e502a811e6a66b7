use vakya_protocol::{normalize_word, TermFlags};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A surface word of the sentence with its lookup key and lexical tags.
#[derive(Debug, Clone)]
pub struct Term<'a> {
    pub span: Span,
    /// As written, trailing punctuation included.
    pub text: &'a str,
    /// Lowercased with one trailing mark stripped.
    pub normal: String,
    pub flags: TermFlags,
}

impl<'a> Term<'a> {
    pub fn new(span: Span, text: &'a str) -> Self {
        Self {
            span,
            text,
            normal: normalize_word(text),
            flags: TermFlags::empty(),
        }
    }

    /// Surface text with every trailing non-alphanumeric character removed.
    pub fn bare(&self) -> &'a str {
        self.text.trim_end_matches(|c: char| !c.is_alphanumeric())
    }

    /// A trailing comma or semicolon closes the clause this term belongs to.
    pub fn closes_clause(&self) -> bool {
        self.text.ends_with([',', ';', ':'])
    }
}
