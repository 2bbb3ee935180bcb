// src/extractors/query.rs
use scraper::ElementRef;
use super::markers::Marker;

/// The small set of tree lookups the job-card extractor needs.
///
/// Lookups only ever search strict descendants and return matches in document
/// order, so the first hit is the one closest to the top of the subtree.
pub trait NodeQuery<'a>: Copy + 'a {
    /// Whether this node carries the marker's tag and class signature.
    fn matches_marker(self, marker: Marker) -> bool;

    /// All descendant elements satisfying `pred`, in document order.
    fn find_all_where<P>(self, pred: P) -> impl Iterator<Item = Self> + 'a
    where
        P: Fn(Self) -> bool + 'a;

    /// Attribute value on this node, if present.
    fn attr(self, name: &str) -> Option<&'a str>;

    /// Every descendant text node trimmed, blanks dropped, joined without separator.
    fn visible_text(self) -> String;

    /// Only the direct text children of this node, joined and trimmed.
    fn own_text(self) -> String;

    /// Whether any descendant text node satisfies `pred`.
    fn has_text_node<P>(self, pred: P) -> bool
    where
        P: Fn(&str) -> bool;

    fn find_where<P>(self, pred: P) -> Option<Self>
    where
        P: Fn(Self) -> bool + 'a,
    {
        self.find_all_where(pred).next()
    }

    fn find(self, marker: Marker) -> Option<Self> {
        self.find_where(move |el| el.matches_marker(marker))
    }

    fn find_all(self, marker: Marker) -> impl Iterator<Item = Self> + 'a {
        self.find_all_where(move |el| el.matches_marker(marker))
    }
}

impl<'a> NodeQuery<'a> for ElementRef<'a> {
    fn matches_marker(self, marker: Marker) -> bool {
        let element = self.value();
        element.name() == marker.tag && marker.class.matches(element.classes())
    }

    fn find_all_where<P>(self, pred: P) -> impl Iterator<Item = Self> + 'a
    where
        P: Fn(Self) -> bool + 'a,
    {
        self.descendants()
            .skip(1) // descendants() yields the node itself first
            .filter_map(ElementRef::wrap)
            .filter(move |el| pred(*el))
    }

    fn attr(self, name: &str) -> Option<&'a str> {
        self.value().attr(name)
    }

    fn visible_text(self) -> String {
        self.text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    fn own_text(self) -> String {
        self.children()
            .filter_map(|node| node.value().as_text())
            .map(|text| &**text)
            .collect::<String>()
            .trim()
            .to_string()
    }

    fn has_text_node<P>(self, pred: P) -> bool
    where
        P: Fn(&str) -> bool,
    {
        self.descendants()
            .filter_map(|node| node.value().as_text())
            .any(|text| pred(&**text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::markers::ClassMatch;
    use scraper::{Html, Selector};

    fn root(doc: &Html) -> ElementRef<'_> {
        let selector = Selector::parse("#root").unwrap();
        doc.select(&selector).next().unwrap()
    }

    #[test]
    fn test_find_returns_first_descendant_in_document_order() {
        let doc = Html::parse_document(
            r#"<div id="root" class="hit"><p><span class="hit">one</span></p><span class="hit">two</span></div>"#,
        );
        let found = root(&doc)
            .find(Marker::new("span", ClassMatch::Token("hit")))
            .unwrap();
        assert_eq!(found.visible_text(), "one");
    }

    #[test]
    fn test_find_does_not_match_the_node_itself() {
        let doc = Html::parse_document(r#"<div id="root" class="hit"><p>inner</p></div>"#);
        assert!(root(&doc)
            .find(Marker::new("div", ClassMatch::Token("hit")))
            .is_none());
    }

    #[test]
    fn test_visible_text_strips_each_text_node() {
        let doc = Html::parse_document(
            "<div id=\"root\">\n   Acme \n <b> Corp </b>\n</div>",
        );
        assert_eq!(root(&doc).visible_text(), "AcmeCorp");
    }

    #[test]
    fn test_own_text_skips_nested_elements() {
        let doc = Html::parse_document(
            r#"<div id="root">  Senior <span>Verified</span>Engineer  </div>"#,
        );
        assert_eq!(root(&doc).own_text(), "Senior Engineer");
    }

    #[test]
    fn test_has_text_node_is_per_node() {
        let doc = Html::parse_document(
            r#"<div id="root"><span>Easy</span><span> Apply</span><em>Promoted</em></div>"#,
        );
        let node = root(&doc);
        assert!(node.has_text_node(|t| t.contains("Promoted")));
        assert!(!node.has_text_node(|t| t.contains("Easy Apply")));
    }

    #[test]
    fn test_find_all_collects_every_match() {
        let doc = Html::parse_document(
            r#"<ul id="root"><li class="x">a</li><li>b</li><li class="y x">c</li></ul>"#,
        );
        let texts: Vec<String> = root(&doc)
            .find_all(Marker::new("li", ClassMatch::Token("x")))
            .map(|el| el.visible_text())
            .collect();
        assert_eq!(texts, vec!["a", "c"]);
    }
}
