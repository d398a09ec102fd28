use chrono::{DateTime, Utc};

use crate::document::Document;
use crate::search::request::SearchRequest;

/// A single filter category.
pub(crate) trait Predicate {
    fn matches(&self, doc: &Document) -> bool;
}

/// Title starts with any of the prefixes. Case-sensitive.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TitlePrefix<'a> {
    pub(crate) prefixes: &'a [String],
}

impl Predicate for TitlePrefix<'_> {
    fn matches(&self, doc: &Document) -> bool {
        self.prefixes.is_empty()
            || self
                .prefixes
                .iter()
                .any(|prefix| doc.title.starts_with(prefix.as_str()))
    }
}

/// Content contains any of the fragments. Case-sensitive.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ContentContains<'a> {
    pub(crate) fragments: &'a [String],
}

impl Predicate for ContentContains<'_> {
    fn matches(&self, doc: &Document) -> bool {
        self.fragments.is_empty()
            || self
                .fragments
                .iter()
                .any(|fragment| doc.content.contains(fragment.as_str()))
    }
}

/// Author id is one of the listed ids.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AuthorIn<'a> {
    pub(crate) author_ids: &'a [String],
}

impl Predicate for AuthorIn<'_> {
    fn matches(&self, doc: &Document) -> bool {
        self.author_ids.is_empty() || self.author_ids.iter().any(|id| *id == doc.author.id)
    }
}

/// Open interval on `created`: `from < created < to`.
///
/// A missing bound passes its side. A document without a timestamp only
/// passes when both bounds are missing.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CreatedWithin {
    pub(crate) from: Option<DateTime<Utc>>,
    pub(crate) to: Option<DateTime<Utc>>,
}

impl CreatedWithin {
    pub(crate) fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

impl Predicate for CreatedWithin {
    fn matches(&self, doc: &Document) -> bool {
        if self.is_unbounded() {
            return true;
        }

        let Some(created) = doc.created else {
            return false;
        };

        let after_from = self.from.map_or(true, |from| created > from);
        let before_to = self.to.map_or(true, |to| created < to);
        after_from && before_to
    }
}

/// All four categories of a request, AND-ed.
///
/// Evaluated cheapest first: author membership and the timestamp comparison
/// run before any string scanning.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestMatcher<'a> {
    author: AuthorIn<'a>,
    created: CreatedWithin,
    title: TitlePrefix<'a>,
    content: ContentContains<'a>,
}

impl<'a> RequestMatcher<'a> {
    pub(crate) fn new(request: &'a SearchRequest) -> Self {
        Self {
            author: AuthorIn {
                author_ids: &request.author_ids,
            },
            created: CreatedWithin {
                from: request.created_from,
                to: request.created_to,
            },
            title: TitlePrefix {
                prefixes: &request.title_prefixes,
            },
            content: ContentContains {
                fragments: &request.contains_contents,
            },
        }
    }
}

impl Predicate for RequestMatcher<'_> {
    fn matches(&self, doc: &Document) -> bool {
        self.author.matches(doc)
            && self.created.matches(doc)
            && self.title.matches(doc)
            && self.content.matches(doc)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::document::Author;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, day, 0, 0, 0).unwrap()
    }

    fn make_doc() -> Document {
        Document::builder()
            .title("Design notes")
            .content("The cache is rebuilt nightly.")
            .author(Author::builder().id("u-7").name("Ines").build())
            .created(at(10))
            .build()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_lists_pass_everything() {
        let doc = make_doc();
        let empty: Vec<String> = Vec::new();

        assert!(TitlePrefix { prefixes: &empty }.matches(&doc));
        assert!(ContentContains { fragments: &empty }.matches(&doc));
        assert!(AuthorIn { author_ids: &empty }.matches(&doc));
        assert!(CreatedWithin::default().matches(&doc));
        assert!(RequestMatcher::new(&SearchRequest::default()).matches(&doc));
    }

    #[test]
    fn title_prefix_is_anchored_and_case_sensitive() {
        let doc = make_doc();

        assert!(TitlePrefix { prefixes: &strings(&["Design"]) }.matches(&doc));
        assert!(TitlePrefix { prefixes: &strings(&["Nope", "Design n"]) }.matches(&doc));
        assert!(TitlePrefix { prefixes: &strings(&[""]) }.matches(&doc));
        assert!(!TitlePrefix { prefixes: &strings(&["notes"]) }.matches(&doc));
        assert!(!TitlePrefix { prefixes: &strings(&["design"]) }.matches(&doc));
    }

    #[test]
    fn content_contains_is_case_sensitive() {
        let doc = make_doc();

        assert!(ContentContains { fragments: &strings(&["rebuilt"]) }.matches(&doc));
        assert!(ContentContains { fragments: &strings(&["missing", "nightly."]) }.matches(&doc));
        assert!(!ContentContains { fragments: &strings(&["Cache"]) }.matches(&doc));
    }

    #[test]
    fn author_membership_is_exact() {
        let doc = make_doc();

        assert!(AuthorIn { author_ids: &strings(&["u-1", "u-7"]) }.matches(&doc));
        assert!(!AuthorIn { author_ids: &strings(&["u-"]) }.matches(&doc));
        assert!(!AuthorIn { author_ids: &strings(&["U-7"]) }.matches(&doc));
    }

    #[test]
    fn created_within_excludes_both_bounds() {
        let doc = make_doc();

        let inside = CreatedWithin { from: Some(at(9)), to: Some(at(11)) };
        let on_from = CreatedWithin { from: Some(at(10)), to: Some(at(11)) };
        let on_to = CreatedWithin { from: Some(at(9)), to: Some(at(10)) };
        let lower_only = CreatedWithin { from: Some(at(9)), to: None };
        let upper_only = CreatedWithin { from: None, to: Some(at(9)) };

        assert!(inside.matches(&doc));
        assert!(!on_from.matches(&doc));
        assert!(!on_to.matches(&doc));
        assert!(lower_only.matches(&doc));
        assert!(!upper_only.matches(&doc));
    }

    #[test]
    fn created_within_missing_timestamp() {
        let mut doc = make_doc();
        doc.created = None;

        assert!(CreatedWithin::default().matches(&doc));
        assert!(!CreatedWithin { from: Some(at(1)), to: None }.matches(&doc));
        assert!(!CreatedWithin { from: None, to: Some(at(30)) }.matches(&doc));
    }

    #[test]
    fn request_matcher_needs_every_category() {
        let doc = make_doc();

        let all_pass = SearchRequest::builder()
            .title_prefixes(["Design"])
            .contains_contents(["nightly"])
            .author_ids(["u-7"])
            .created_from(at(1))
            .created_to(at(20))
            .build();
        assert!(RequestMatcher::new(&all_pass).matches(&doc));

        let wrong_author = SearchRequest {
            author_ids: strings(&["u-8"]),
            ..all_pass.clone()
        };
        assert!(!RequestMatcher::new(&wrong_author).matches(&doc));

        let wrong_title = SearchRequest {
            title_prefixes: strings(&["notes"]),
            ..all_pass
        };
        assert!(!RequestMatcher::new(&wrong_title).matches(&doc));
    }
}
