/*!
 * Fingerspelling of proper names.
 *
 * A name expands inline to: optional start marker, one descriptor per
 * alphabetic character, optional end marker. Markers must be curated catalog
 * entries; when absent they are left out without complaint.
 */

use super::assembler::{SignDescriptor, TokenOutcome};
use super::rules::TextRules;
use super::tokenizer::Token;
use crate::catalog::CatalogResolver;

/// Expands proper-name tokens into letter sequences
#[derive(Debug, Clone, Copy)]
pub struct FingerspellingExpander<'a> {
    resolver: CatalogResolver<'a>,
    rules: &'a TextRules,
}

impl<'a> FingerspellingExpander<'a> {
    /// Create an expander
    pub fn new(resolver: CatalogResolver<'a>, rules: &'a TextRules) -> Self {
        Self { resolver, rules }
    }

    fn marker(&self, marker: Option<&str>, index: usize) -> Option<SignDescriptor> {
        let resolution = self.resolver.exact(marker?)?;
        Some(SignDescriptor::found(resolution.entry.word.as_str(), index, &resolution).name_indicator())
    }

    /// Expand one token
    ///
    /// Failed letters are recorded individually; if any failed, the whole
    /// surface is recorded once more at the end.
    pub fn expand(&self, token: &Token) -> TokenOutcome {
        let mut outcome = TokenOutcome::default();
        let letters: Vec<char> = token.surface.chars().filter(|c| c.is_alphabetic()).collect();
        let name_length = letters.len();

        outcome
            .descriptors
            .extend(self.marker(self.rules.name_start_marker.as_deref(), token.position));

        for (letter_position, letter) in letters.iter().enumerate() {
            let letter = letter.to_string();
            let resolution = self.resolver.resolve(&letter);
            let descriptor = SignDescriptor::from_resolution(letter.as_str(), token.position, resolution.as_ref())
                .name_letter(letter_position, name_length);

            if !descriptor.found {
                outcome.missing.push(letter);
            }
            outcome.descriptors.push(descriptor);
        }

        outcome
            .descriptors
            .extend(self.marker(self.rules.name_end_marker.as_deref(), token.position));

        if !outcome.missing.is_empty() {
            outcome.missing.push(token.surface.clone());
        }

        outcome
    }
}
