// src/core/html.rs
//! Tag-name based walking over a parsed document.
//!
//! Lookups match on element names only, never on classes; the site renames its
//! CSS-module classes often enough that class selectors break between seasons.

use scraper::{ElementRef, Html};

use super::sanitize::normalize_ws;

pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// True when the raw markup spells out an opening `<name>` tag, any case.
///
/// The parser inserts implied elements (a `<tbody>` around bare `<tr>`s, for
/// one), so the tree alone cannot say what the page actually wrote.
pub fn has_open_tag(source: &str, name: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    let needle = format!("<{}", name.to_ascii_lowercase());
    lower.match_indices(&needle).any(|(at, _)| {
        lower[at + needle.len()..]
            .chars()
            .next()
            .is_some_and(|c| c == '>' || c == '/' || c.is_ascii_whitespace())
    })
}

/// All descendant elements named `name`, document order, excluding `root`.
pub fn find_all<'a>(root: ElementRef<'a>, name: &'static str) -> impl Iterator<Item = ElementRef<'a>> {
    root.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name().eq_ignore_ascii_case(name))
}

pub fn find_first<'a>(root: ElementRef<'a>, name: &'static str) -> Option<ElementRef<'a>> {
    find_all(root, name).next()
}

/// Direct children whose tag is one of `names`.
pub fn children_named<'a>(el: ElementRef<'a>, names: &'a [&'a str]) -> impl Iterator<Item = ElementRef<'a>> {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(move |c| names.iter().any(|n| c.value().name().eq_ignore_ascii_case(n)))
}

/// Visible text, each text node trimmed, joined with single spaces.
pub fn text_of(el: ElementRef<'_>) -> String {
    let joined = el
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    normalize_ws(&joined)
}

/// Text of each innermost `names` element below `el`.
///
/// "Innermost" means the element holds no other `names` element, so a `<p>`
/// wrapping two `<span>`s yields the two span texts rather than their
/// concatenation. Empty fragments are skipped.
pub fn leaf_fragments(el: ElementRef<'_>, names: &[&str]) -> Vec<String> {
    let is_wanted = |e: &ElementRef<'_>| names.iter().any(|n| e.value().name().eq_ignore_ascii_case(n));

    el.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(|e| is_wanted(e))
        .filter(|e| !e.descendants().skip(1).filter_map(ElementRef::wrap).any(|d| is_wanted(&d)))
        .map(text_of)
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_td(doc: &Html) -> ElementRef<'_> {
        find_first(doc.root_element(), "td").unwrap()
    }

    #[test]
    fn text_joins_nodes_with_spaces() {
        let doc = parse_document("<table><tr><td> <span>Max</span><span>Verstappen</span>\n</td></tr></table>");
        assert_eq!(text_of(first_td(&doc)), "Max Verstappen");
    }

    #[test]
    fn fragments_prefer_innermost() {
        let doc = parse_document(
            "<table><tr><td><p><span>Lando</span> <span>Norris</span></p><div>GBR</div></td></tr></table>",
        );
        let frags = leaf_fragments(first_td(&doc), &["span", "p", "div"]);
        assert_eq!(frags, vec!["Lando", "Norris", "GBR"]);
    }

    #[test]
    fn fragments_empty_for_flat_cell() {
        let doc = parse_document("<table><tr><td>Max Verstappen</td></tr></table>");
        assert!(leaf_fragments(first_td(&doc), &["span", "p", "div"]).is_empty());
    }

    #[test]
    fn open_tag_seen_in_source_only() {
        assert!(has_open_tag("<table><TBODY class=\"x\"><tr></tr></TBODY></table>", "tbody"));
        assert!(has_open_tag("<tbody>", "TBody"));
        assert!(!has_open_tag("<table><tr><td>1</td></tr></table>", "tbody"));
        assert!(!has_open_tag("<tbodyx></tbodyx>", "tbody"));
        assert!(!has_open_tag("</tbody>", "tbody"));
    }

    #[test]
    fn children_named_is_shallow() {
        let doc = parse_document(
            "<table><tbody><tr><td>1</td><th>2</th><td><table><tr><td>x</td></tr></table></td></tr></tbody></table>",
        );
        let tr = find_first(doc.root_element(), "tr").unwrap();
        assert_eq!(children_named(tr, &["td", "th"]).count(), 3);
    }
}
