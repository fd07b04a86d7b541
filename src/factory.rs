//! Constructors for common pre-configured nodes.
//!
//! Every function returns a fresh node; nothing here keeps state.

use crate::node::{Comment, Element, Paragraph, Text};

/// Highest heading level (`<h6>`).
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Class used by [`blue_box`].
pub const BOX_CLASS: &str = "myBox";

const SVG_CIRCLE_STROKE: &str = "#808080";
const SVG_SQUARE_STROKE: &str = "#c0c0c0";

/// `<div>` with the given id.
pub fn div(id: &str) -> Element {
    Element::new("div").with_id(id)
}

/// `<div class="myBox">` headed by an `<h2>` title.
pub fn blue_box(title: &str) -> Element {
    boxed(title, BOX_CLASS)
}

/// `<div>` with the given class, headed by an `<h2>` title.
pub fn boxed(title: &str, class: &str) -> Element {
    Element::new("div")
        .with_class(class)
        .child(heading(2, title))
}

/// Named anchor, `<a name="...">`.
pub fn anchor(name: &str) -> Element {
    Element::new("a").attr("name", name)
}

/// Link opening in the same tab.
pub fn link(href: &str, text: &str) -> Element {
    link_with(href, Some(text), None, false)
}

/// Link opening in a new tab.
pub fn external_link(href: &str, text: &str) -> Element {
    link_with(href, Some(text), None, true)
}

/// Link with optional text and tooltip; `external` opens it in a new tab.
pub fn link_with(href: &str, text: Option<&str>, title: Option<&str>, external: bool) -> Element {
    let mut link = Element::new("a");
    link.content = text.map(str::to_string);
    link.add_attribute("href", href);
    if let Some(title) = title {
        link.add_attribute("title", title);
    }
    if external {
        link.add_attribute("target", "_blank");
    }
    link
}

/// `<img>` void element with optional tooltip and alternate text.
pub fn image(src: &str, title: Option<&str>, alt: Option<&str>) -> Element {
    let mut img = Element::void("img");
    img.add_attribute("src", src);
    if let Some(title) = title {
        img.add_attribute("title", title);
    }
    if let Some(alt) = alt {
        img.add_attribute("alt", alt);
    }
    img
}

/// Link showing an image instead of text.
pub fn image_link(href: &str, title: Option<&str>, src: &str, alt: Option<&str>) -> Element {
    link_with(href, None, title, false).child(image(src, None, alt))
}

/// Text in a gray `<font>`.
pub fn gray_font(text: &str) -> Element {
    Element::with_content("font", text).attr("color", "gray")
}

/// `<span>` with a class.
pub fn span(class: &str, text: &str) -> Element {
    Element::with_content("span", text).with_class(class)
}

/// Stylesheet reference (void element).
pub fn css_link(url: &str) -> Element {
    Element::void("link")
        .attr("rel", "stylesheet")
        .attr("type", "text/css")
        .attr("href", url)
}

/// Favicon reference to `favicon.ico` (void element).
pub fn icon_link() -> Element {
    Element::void("link")
        .attr("rel", "icon")
        .attr("type", "image/x-icon")
        .attr("href", "favicon.ico")
}

/// External script, `<script src="..."></script>`.
pub fn script_src(url: &str) -> Element {
    Element::new("script").attr("src", url)
}

/// Empty `<meta>` (void element).
pub fn meta() -> Element {
    Element::void("meta")
}

/// `<meta name="..." content="...">` (void element).
pub fn meta_named(name: &str, content: &str) -> Element {
    meta().attr("name", name).attr("content", content)
}

/// Line break, `<br>` (void element).
pub fn br() -> Element {
    Element::void("br")
}

/// `<center>` block.
pub fn center() -> Element {
    Element::new("center")
}

/// `<form>` submitting to `action` with the given method.
pub fn form(method: &str, action: &str) -> Element {
    Element::new("form").attr("method", method).attr("action", action)
}

/// `<input>` field (void element).
pub fn input(kind: &str, name: &str) -> Element {
    Element::void("input").attr("type", kind).attr("name", name)
}

/// Submit button.
pub fn button(text: &str) -> Element {
    Element::with_content("button", text).attr("onClick", "submit")
}

/// Small filled circle drawn in a `size` x `size` SVG box.
pub fn svg_circle(size: &str, fill: &str, title: Option<&str>) -> Element {
    let mut circle = Element::new("circle")
        .attr("cx", "9")
        .attr("cy", "9")
        .attr("r", "8")
        .attr("stroke", SVG_CIRCLE_STROKE)
        .attr("stroke-width", "1")
        .attr("fill", fill);
    if let Some(title) = title {
        circle.add_attribute("title", title);
    }
    svg_box(size).child(circle)
}

/// Filled square covering a `size` x `size` SVG box.
pub fn svg_square(size: &str, fill: &str, title: Option<&str>) -> Element {
    let mut rect = Element::new("rect")
        .attr("width", size)
        .attr("height", size)
        .attr("stroke", SVG_SQUARE_STROKE)
        .attr("stroke-width", "1")
        .attr("fill", fill);
    if let Some(title) = title {
        rect.add_attribute("title", title);
    }
    svg_box(size).child(rect)
}

fn svg_box(size: &str) -> Element {
    Element::new("svg").attr("height", size).attr("width", size)
}

/// `<h1>`..`<h6>` heading. Levels outside 1..=6 are clamped.
pub fn heading(level: u8, text: &str) -> Element {
    let level = level.clamp(1, MAX_HEADING_LEVEL);
    Element::with_content(format!("h{level}"), text)
}

/// `<p>` with initial text.
pub fn paragraph(text: &str) -> Paragraph {
    Paragraph::new(text)
}

/// `<!-- text -->` comment.
pub fn comment(text: &str) -> Comment {
    Comment::new(text)
}

/// Raw text pseudo-node.
pub fn text(text: &str) -> Text {
    Text::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    fn inline(elem: impl Into<Node>) -> String {
        elem.into().render(0, true)
    }

    #[test]
    fn test_meta_renders_as_void() {
        let node: Node = meta_named("author", "X").into();
        assert_eq!(node.render(2, false), "\n    <meta name=\"author\" content=\"X\">");
        assert!(!node.render(0, false).contains("</meta>"));
    }

    #[test]
    fn test_links() {
        assert_eq!(inline(link("a.html", "A")), r#"<a href="a.html">A</a>"#);
        assert_eq!(
            inline(external_link("https://x.org", "X")),
            r#"<a href="https://x.org" target="_blank">X</a>"#
        );
        assert_eq!(
            inline(link_with("b.html", None, Some("tip"), false)),
            r#"<a href="b.html" title="tip"></a>"#
        );
        assert_eq!(inline(anchor("top")), r#"<a name="top"></a>"#);
    }

    #[test]
    fn test_image_optional_attributes() {
        assert_eq!(inline(image("a.png", None, None)), r#"<img src="a.png">"#);
        assert_eq!(
            inline(image("a.png", Some("Tip"), Some("fail"))),
            r#"<img src="a.png" title="Tip" alt="fail">"#
        );
        assert!(image("a.png", None, None).is_void());
    }

    #[test]
    fn test_image_link() {
        assert_eq!(
            inline(image_link("big.png", Some("Zoom"), "small.png", Some("thumb"))),
            r#"<a href="big.png" title="Zoom"><img src="small.png" alt="thumb"></a>"#
        );
    }

    #[test]
    fn test_head_links_are_void() {
        assert_eq!(
            inline(css_link("../style.css")),
            r#"<link rel="stylesheet" type="text/css" href="../style.css">"#
        );
        assert_eq!(
            inline(icon_link()),
            r#"<link rel="icon" type="image/x-icon" href="favicon.ico">"#
        );
        assert!(css_link("x").is_void());
        assert!(icon_link().is_void());
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(inline(heading(1, "Top")), "<h1>Top</h1>");
        assert_eq!(inline(heading(6, "Low")), "<h6>Low</h6>");
        assert_eq!(heading(0, "x").name, "h1");
        assert_eq!(heading(9, "x").name, "h6");
    }

    #[test]
    fn test_boxes() {
        assert_eq!(
            inline(blue_box("News")),
            r#"<div class="myBox"><h2>News</h2></div>"#
        );
        assert_eq!(
            inline(boxed("Links", "side")),
            r#"<div class="side"><h2>Links</h2></div>"#
        );
    }

    #[test]
    fn test_small_helpers() {
        assert_eq!(inline(div("main")), r#"<div id="main"></div>"#);
        assert_eq!(inline(gray_font("old")), r#"<font color="gray">old</font>"#);
        assert_eq!(inline(span("tag", "rust")), r#"<span class="tag">rust</span>"#);
        assert_eq!(inline(script_src("app.js")), r#"<script src="app.js"></script>"#);
        assert_eq!(inline(comment("note")), "<!-- note -->");
        assert_eq!(inline(text("plain")), "plain");
        assert_eq!(inline(paragraph("Hi")), "<p>Hi</p>");
    }

    #[test]
    fn test_form_controls() {
        let form = form("post", "/search")
            .child(input("text", "q"))
            .child(button("Go"));
        let expected = concat!(
            "\n<form method=\"post\" action=\"/search\">",
            "\n  <input type=\"text\" name=\"q\">",
            "\n  <button onClick=\"submit\">Go</button>",
            "\n</form>",
        );
        assert_eq!(Node::from(form).render(0, false), expected);
        assert!(input("hidden", "id").is_void());
    }

    #[test]
    fn test_br_and_center() {
        assert_eq!(inline(br()), "<br>");
        assert!(br().is_void());
        assert_eq!(inline(center().child(br())), "<center><br></center>");
    }

    #[test]
    fn test_svg_shapes() {
        assert_eq!(
            inline(svg_circle("18", "green", Some("ok"))),
            concat!(
                r#"<svg height="18" width="18">"#,
                r##"<circle cx="9" cy="9" r="8" stroke="#808080" stroke-width="1" fill="green" title="ok"></circle>"##,
                "</svg>",
            )
        );
        assert_eq!(
            inline(svg_square("12", "red", None)),
            concat!(
                r#"<svg height="12" width="12">"#,
                r##"<rect width="12" height="12" stroke="#c0c0c0" stroke-width="1" fill="red"></rect>"##,
                "</svg>",
            )
        );
        // One descendant keeps the shape on the svg line
        assert_eq!(
            Node::from(svg_square("8", "blue", None)).render(1, false),
            concat!(
                "\n  ",
                r#"<svg height="8" width="8">"#,
                r##"<rect width="8" height="8" stroke="#c0c0c0" stroke-width="1" fill="blue"></rect>"##,
                "</svg>",
            )
        );
    }
}
