//! # Text Segmentor Trait

/// Splits text into word-like segments ahead of wordpiece splitting.
///
/// Implementations must cover the input exactly once:
/// segments are non-empty, non-overlapping, in order, and their
/// concatenation is the input text.
pub trait TextSegmentor: Send + Sync {
    /// Visit each segment of `text`, in order.
    ///
    /// ## Arguments
    /// * `text` - The text to segment.
    /// * `f` - Called once per segment.
    fn for_each_segment<'t>(
        &self,
        text: &'t str,
        f: &mut dyn FnMut(&'t str),
    );

    /// Split `text` into segments.
    ///
    /// ## Arguments
    /// * `text` - The text to segment.
    ///
    /// ## Returns
    /// The segments, as slices of `text`.
    fn segment<'t>(
        &self,
        text: &'t str,
    ) -> Vec<&'t str> {
        let mut segments = Vec::new();
        self.for_each_segment(text, &mut |s| segments.push(s));
        segments
    }
}
