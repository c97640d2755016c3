use std::fmt::{self, Write};

use unicode_width::UnicodeWidthStr;

use super::Segment;
use crate::feature::Feature;

const SPACE_PADDING: usize = 2;
const HEADER: &str = "feature";

/// A feature matrix with one column per segment.
///
/// ```text
/// feature          p  a  n̥
/// syllabic         -  +  -
/// consonantal      +  -  +
/// ```
///
/// Column widths are measured in terminal cells, so combining diacritics
/// do not push later columns out of line.
pub struct FeatureChart<'a> {
    segments: Vec<&'a Segment>,
    features: Vec<Feature>,
}

impl<'a> FeatureChart<'a> {
    pub fn new(segments: &[&'a Segment]) -> Self {
        FeatureChart {
            segments: segments.to_vec(),
            features: Feature::ALL.to_vec(),
        }
    }

    /// Only render the given rows, in the given order.
    pub fn with_features(mut self, features: &[Feature]) -> Self {
        self.features = features.to_vec();
        self
    }
}

impl<'a> fmt::Display for FeatureChart<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .features
            .iter()
            .map(|feature| feature.name().width())
            .chain(std::iter::once(HEADER.width()))
            .max()
            .unwrap_or(0);

        // a sign is always one cell wide
        let column_widths: Vec<usize> = self
            .segments
            .iter()
            .map(|segment| segment.surface().width().max(1))
            .collect();

        let mut line = String::new();
        push_cell(&mut line, HEADER, label_width);
        for (segment, &width) in self.segments.iter().zip(&column_widths) {
            line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            push_cell(&mut line, segment.surface(), width);
        }
        f.write_str(line.trim_end())?;

        for &feature in &self.features {
            line.clear();
            push_cell(&mut line, feature.name(), label_width);
            for (segment, &width) in self.segments.iter().zip(&column_widths) {
                line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
                let mut sign = [0u8; 4];
                push_cell(&mut line, segment.get(feature).sign().encode_utf8(&mut sign), width);
            }
            f.write_char('\n')?;
            f.write_str(line.trim_end())?;
        }

        Ok(())
    }
}

fn push_cell(line: &mut String, text: &str, width: usize) {
    line.push_str(text);
    let pad = width.saturating_sub(text.width());
    line.extend(std::iter::repeat(' ').take(pad));
}
