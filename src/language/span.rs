use miette::SourceSpan;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    const SYNTHETIC: usize = usize::MAX;

    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Location for things that have no source text, such as built-in functions.
    pub fn synthetic() -> Self {
        Self {
            start: Self::SYNTHETIC,
            end: Self::SYNTHETIC,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.start == Self::SYNTHETIC
    }

    pub fn len(&self) -> usize {
        if self.is_synthetic() {
            0
        } else {
            self.end.saturating_sub(self.start)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_source_span(&self) -> SourceSpan {
        if self.is_synthetic() {
            (0, 0).into()
        } else {
            (self.start, self.len()).into()
        }
    }
}
