//! Diphthongs, triphthongs and longer vocalic sequences.

use std::fmt;

use crate::errors::{SegmentalError, SegmentalResult};
use crate::segment::Segment;

/// An ordered sequence of at least two vowels or glides, such as [ai].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nphthong {
    segments: Vec<Segment>,
}

impl Nphthong {
    pub fn new(segments: Vec<Segment>) -> SegmentalResult<Self> {
        let surface: String = segments.iter().map(Segment::surface).collect();

        if segments.len() < 2 {
            return Err(SegmentalError::InvalidNphthong {
                nphthong: surface,
                reason: format!("needs at least two segments, found {}", segments.len()),
            });
        }

        if let Some(offender) = segments
            .iter()
            .find(|segment| !(segment.is_vowel() || segment.is_glide()))
        {
            return Err(SegmentalError::InvalidNphthong {
                reason: format!("{} is neither a vowel nor a glide", offender),
                nphthong: surface,
            });
        }

        Ok(Nphthong { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; an nphthong has at least two members.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }
}

impl<'a> IntoIterator for &'a Nphthong {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl fmt::Display for Nphthong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(segment.surface())?;
        }
        Ok(())
    }
}
