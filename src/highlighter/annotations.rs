use gpui::{Rgba, SharedString};

use crate::error::{HighlightError, Result};

/// How annotated characters are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightStyle {
    /// A filled block behind the glyph.
    Highlight,
    /// A one pixel straight line under the glyph.
    Underline,
    /// A three pixel dithered wave under the glyph.
    WavyUnderline,
}

/// Marks every occurrence of `substring` in the current text.
#[derive(Debug, Clone, PartialEq)]
pub struct SubstringAnnotation {
    /// Drawing style.
    pub style: HighlightStyle,
    /// Text to search for; never empty.
    pub substring: SharedString,
    /// Drawing color.
    pub color: Rgba,
}

/// Marks the character at `index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexAnnotation {
    /// Drawing style.
    pub style: HighlightStyle,
    /// `char` index into the text.
    pub index: usize,
    /// Drawing color.
    pub color: Rgba,
}

/// Pending annotations, in insertion order.
///
/// The two lists are independent. `revision` changes whenever either list
/// does, so a renderer can tell that its last frame is out of date.
#[derive(Debug, Default, Clone)]
pub struct AnnotationStore {
    substrings: Vec<SubstringAnnotation>,
    indices: Vec<IndexAnnotation>,
    revision: u64,
}

impl AnnotationStore {
    /// Appends a substring annotation. Fails if `substring` is empty.
    pub fn add_substring(
        &mut self,
        style: HighlightStyle,
        substring: impl Into<SharedString>,
        color: Rgba,
    ) -> Result<()> {
        let substring = substring.into();
        if substring.is_empty() {
            return Err(HighlightError::invalid_argument(
                "substring must not be empty",
            ));
        }

        self.substrings.push(SubstringAnnotation {
            style,
            substring,
            color,
        });
        self.bump();
        Ok(())
    }

    /// Appends an index annotation. Fails if `index` is negative or does not
    /// fit in a `usize`.
    pub fn add_index<I>(&mut self, style: HighlightStyle, index: I, color: Rgba) -> Result<()>
    where
        I: TryInto<usize> + Copy + std::fmt::Display,
    {
        let Ok(converted) = index.try_into() else {
            return Err(HighlightError::invalid_argument(format!(
                "index must not be negative, got {index}"
            )));
        };

        self.indices.push(IndexAnnotation {
            style,
            index: converted,
            color,
        });
        self.bump();
        Ok(())
    }

    /// Removes every substring annotation.
    pub fn clear_substrings(&mut self) {
        self.substrings.clear();
        self.bump();
    }

    /// Removes every index annotation.
    pub fn clear_indices(&mut self) {
        self.indices.clear();
        self.bump();
    }

    /// Substring annotations, oldest first.
    pub fn substrings(&self) -> &[SubstringAnnotation] {
        &self.substrings
    }

    /// Index annotations, oldest first.
    pub fn indices(&self) -> &[IndexAnnotation] {
        &self.indices
    }

    /// Whether both lists are empty.
    pub fn is_empty(&self) -> bool {
        self.substrings.is_empty() && self.indices.is_empty()
    }

    /// Counter that changes on every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
