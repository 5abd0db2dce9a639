use scraper::Html;

use crate::category::Category;
use crate::extract::extract_text;
use crate::frequency::{count_ngrams, count_tokens, FrequencyTable};
use crate::tokenize::tokenize;

/// Phrase lengths counted over the whole document.
pub const PHRASE_SIZES: [usize; 3] = [1, 2, 3];

/// Word counts for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCounts {
    pub category: Category,
    pub total: usize,
    pub words: FrequencyTable,
}

/// Phrase counts for one window size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseCounts {
    pub n: usize,
    pub total: usize,
    pub phrases: FrequencyTable,
}

/// Category and phrase frequencies for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    url: String,
    categories: Vec<CategoryCounts>,
    phrases: Vec<PhraseCounts>,
}

impl Report {
    /// Parse `html` and build its report.
    pub fn from_html(url: &str, html: &str) -> Self {
        let doc = Html::parse_document(html);
        Self::from_document(url, &doc)
    }

    /// Build the report for an already parsed document.
    ///
    /// Each category is extracted independently; phrases come from the
    /// whole-document text only.
    pub fn from_document(url: &str, doc: &Html) -> Self {
        let categories: Vec<CategoryCounts> = Category::ALL
            .iter()
            .map(|&category| {
                let text = extract_text(doc, Some(&category.selector()));
                let words = count_tokens(&tokenize(&text));
                CategoryCounts {
                    category,
                    total: words.total(),
                    words,
                }
            })
            .collect();

        let tokens = tokenize(&extract_text(doc, None));
        let phrases: Vec<PhraseCounts> = PHRASE_SIZES
            .iter()
            .map(|&n| {
                let phrases = count_ngrams(&tokens, n);
                PhraseCounts {
                    n,
                    total: phrases.total(),
                    phrases,
                }
            })
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            url,
            tokens = tokens.len(),
            distinct = phrases[0].phrases.len(),
            "built report"
        );

        Self {
            url: url.to_owned(),
            categories,
            phrases,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Per-category counts in [`Category::ALL`] order.
    pub fn categories(&self) -> &[CategoryCounts] {
        &self.categories
    }

    pub fn category(&self, category: Category) -> &FrequencyTable {
        &self.categories[category as usize].words
    }

    /// Phrase counts for n = 1, 2, 3 in that order.
    pub fn phrases(&self) -> &[PhraseCounts] {
        &self.phrases
    }

    /// Phrase table for window size `n`, if it was counted.
    pub fn phrase_table(&self, n: usize) -> Option<&FrequencyTable> {
        self.phrases.iter().find(|p| p.n == n).map(|p| &p.phrases)
    }
}
