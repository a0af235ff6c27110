use scraper::node::Node;
use scraper::Html;

/// Parse markup text into a navigable document tree.
///
/// html5ever repairs malformed markup instead of rejecting it, so every input
/// produces a tree; garbage yields a tree with no anchors, not an error.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Collect the `href` value of every anchor element, in document order.
///
/// The walk is an explicit pre-order traversal of the whole tree, so anchors
/// buried inside nested structure are still found. Values are returned
/// verbatim and in order: nothing is resolved against a base URL, nothing is
/// trimmed, and duplicates and empty values are kept. A document with no
/// anchors yields an empty vector.
pub fn extract_links(document: &Html) -> Vec<String> {
    document
        .tree
        .root()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Element(element) if element.name() == "a" => {
                element.attr("href").map(String::from)
            }
            _ => None,
        })
        .collect()
}
