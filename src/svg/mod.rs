//! Markup tree builder for nested graphical elements.
//!
//! An `Svg` owns an arena of nodes under an implicit root `<svg>` element.
//! Every `add`-style operation appends to the current group context (the top
//! of the group stack, or the root when no group is open) and returns the
//! [`NodeId`] of the appended node, so a transform can be applied right
//! after. Rendering maps the tree 1:1 to tags and attributes, with
//! attributes in insertion order.

mod node;

pub use node::{AttrList, AttrValue};

use node::{Node, Tag};

use crate::error::{GeotileError, Result};

const XMLNS: &str = "http://www.w3.org/2000/svg";

/// Handle to a node in the markup tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// An ordered list of transform operations, serialized as
/// `name1(a,b) name2(c,d)` in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Transform {
    ops: Vec<(String, Vec<f64>)>,
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an arbitrary operation.
    pub fn op(mut self, name: &str, args: impl Into<Vec<f64>>) -> Self {
        self.ops.push((name.to_string(), args.into()));
        self
    }

    /// Append a `translate(x,y)` operation.
    pub fn translate(self, x: f64, y: f64) -> Self {
        self.op("translate", [x, y])
    }

    fn to_attr_string(&self) -> String {
        let parts: Vec<String> = self
            .ops
            .iter()
            .map(|(name, args)| {
                let joined: Vec<String> = args.iter().map(|a| a.to_string()).collect();
                format!("{}({})", name, joined.join(","))
            })
            .collect();
        parts.join(" ")
    }
}

/// The markup tree builder.
#[derive(Debug, Clone)]
pub struct Svg {
    nodes: Vec<Node>,
    stack: Vec<NodeId>,
}

const ROOT: NodeId = NodeId(0);

impl Svg {
    /// Create an empty 100x100 canvas.
    pub fn new() -> Self {
        let root_attrs = AttrList::new()
            .with("xmlns", XMLNS)
            .with("width", 100_u32)
            .with("height", 100_u32);

        Self {
            nodes: vec![Node::new(Tag::Svg, root_attrs)],
            stack: Vec::new(),
        }
    }

    /// Resize the root canvas. Generators call this once they know their
    /// tiling extent; children added earlier are unaffected.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.nodes[ROOT.0].attrs.set("width", width);
        self.nodes[ROOT.0].attrs.set("height", height);
    }

    /// Add a rectangle to the current context.
    pub fn rect(
        &mut self,
        x: f64,
        y: f64,
        width: impl Into<AttrValue>,
        height: impl Into<AttrValue>,
        extra: AttrList,
    ) -> NodeId {
        let mut attrs = AttrList::new()
            .with("x", x)
            .with("y", y)
            .with("width", width)
            .with("height", height);
        merge(&mut attrs, &extra);
        self.append(Tag::Rect, attrs)
    }

    /// Add a circle to the current context.
    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, extra: AttrList) -> NodeId {
        let mut attrs = AttrList::new().with("cx", cx).with("cy", cy).with("r", r);
        merge(&mut attrs, &extra);
        self.append(Tag::Circle, attrs)
    }

    /// Add a path with the given `d` data to the current context.
    pub fn path(&mut self, d: &str, extra: AttrList) -> NodeId {
        let mut attrs = AttrList::new().with("d", d);
        merge(&mut attrs, &extra);
        self.append(Tag::Path, attrs)
    }

    /// Add a polyline with the given point string to the current context.
    pub fn polyline(&mut self, points: &str, extra: AttrList) -> NodeId {
        let mut attrs = AttrList::new().with("points", points);
        merge(&mut attrs, &extra);
        self.append(Tag::Polyline, attrs)
    }

    /// Add one sibling polyline per point string, all sharing `extra`.
    pub fn polylines<I, S>(&mut self, points: I, extra: &AttrList) -> Vec<NodeId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        points
            .into_iter()
            .map(|p| self.polyline(p.as_ref(), extra.clone()))
            .collect()
    }

    /// Open a group: the group is appended to the current context and
    /// becomes the context for subsequent adds until [`end_group`].
    ///
    /// [`end_group`]: Self::end_group
    pub fn group(&mut self, extra: AttrList) -> NodeId {
        let id = self.append(Tag::Group, extra);
        self.stack.push(id);
        id
    }

    /// Close the innermost open group.
    pub fn end_group(&mut self) -> Result<()> {
        self.stack.pop().map(|_| ()).ok_or(GeotileError::EmptyContext)
    }

    /// Set the `transform` attribute on a previously added node.
    pub fn set_transform(&mut self, id: NodeId, transform: &Transform) {
        self.nodes[id.0]
            .attrs
            .set("transform", transform.to_attr_string());
    }

    /// Number of open groups.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Render the tree to markup text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_node(ROOT, &mut out);
        out
    }

    fn append(&mut self, tag: Tag, attrs: AttrList) -> NodeId {
        let parent = self.stack.last().copied().unwrap_or(ROOT);
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(tag, attrs));
        self.nodes[parent.0].children.push(id);
        id
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let node = &self.nodes[id.0];

        out.push('<');
        out.push_str(node.tag.as_str());
        for (name, value) in node.attrs.iter() {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(&value.to_string()));
            out.push('"');
        }

        if node.children.is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        for child in &node.children {
            self.write_node(*child, out);
        }
        out.push_str("</");
        out.push_str(node.tag.as_str());
        out.push('>');
    }
}

impl Default for Svg {
    fn default() -> Self {
        Self::new()
    }
}

fn merge(attrs: &mut AttrList, extra: &AttrList) {
    for (name, value) in extra.iter() {
        attrs.set(name, value.clone());
    }
}

fn escape_attr(value: &str) -> String {
    if !value.contains(['&', '<', '>', '"']) {
        return value.to_string();
    }

    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_canvas() {
        let svg = Svg::new();
        assert_eq!(
            svg.render(),
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"/>"#
        );
    }

    #[test]
    fn test_set_size_after_children() {
        let mut svg = Svg::new();
        svg.rect(0.0, 0.0, "100%", "100%", AttrList::new().with("fill", "rgb(1,2,3)"));
        svg.set_size(540.0, 623.0);

        assert_eq!(
            svg.render(),
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="540" height="623">"#,
                r#"<rect x="0" y="0" width="100%" height="100%" fill="rgb(1,2,3)"/>"#,
                r#"</svg>"#
            )
        );
    }

    #[test]
    fn test_shape_elements() {
        let mut svg = Svg::new();
        svg.circle(3.0, 4.0, 5.0, AttrList::new());
        svg.path("M0 0L10 10", AttrList::new().with("fill", "none"));

        let out = svg.render();
        assert!(out.contains(r#"<circle cx="3" cy="4" r="5"/>"#));
        assert!(out.contains(r#"<path d="M0 0L10 10" fill="none"/>"#));
    }

    #[test]
    fn test_polyline_attr_order() {
        let mut svg = Svg::new();
        let styles = AttrList::new()
            .with("fill", "#ddd")
            .with("fill-opacity", 0.02)
            .with("stroke", "#000")
            .with("stroke-opacity", 0.02);
        svg.polyline("0,1,2,3", styles);

        assert!(svg.render().contains(
            r##"<polyline points="0,1,2,3" fill="#ddd" fill-opacity="0.02" stroke="#000" stroke-opacity="0.02"/>"##
        ));
    }

    #[test]
    fn test_polylines_emit_siblings_with_shared_attrs() {
        let mut svg = Svg::new();
        let styles = AttrList::new().with("fill", "#222");
        let ids = svg.polylines(["0,0", "1,1", "2,2"], &styles);

        assert_eq!(ids.len(), 3);
        let out = svg.render();
        assert_eq!(out.matches("<polyline").count(), 3);
        assert_eq!(out.matches(r##"fill="#222""##).count(), 3);
    }

    #[test]
    fn test_transform_after_add() {
        let mut svg = Svg::new();
        let id = svg.polyline("0,0", AttrList::new().with("fill", "#222"));
        svg.set_transform(id, &Transform::new().translate(-13.5, 20.0));

        assert!(svg.render().contains(
            r##"<polyline points="0,0" fill="#222" transform="translate(-13.5,20)"/>"##
        ));
    }

    #[test]
    fn test_transform_op_order() {
        let t = Transform::new()
            .translate(1.5, -3.0)
            .op("rotate", [45.0])
            .op("scale", [2.0, 2.0]);
        assert_eq!(t.to_attr_string(), "translate(1.5,-3) rotate(45) scale(2,2)");
    }

    #[test]
    fn test_group_nesting() {
        let mut svg = Svg::new();
        svg.group(AttrList::new().with("fill", "#ddd"));
        svg.rect(1.0, 2.0, 3_u32, 4_u32, AttrList::new());
        svg.group(AttrList::new());
        svg.circle(0.0, 0.0, 1.0, AttrList::new());
        svg.end_group().unwrap();
        svg.end_group().unwrap();
        svg.rect(5.0, 6.0, 7_u32, 8_u32, AttrList::new());

        assert_eq!(
            svg.render(),
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">"#,
                r##"<g fill="#ddd">"##,
                r#"<rect x="1" y="2" width="3" height="4"/>"#,
                r#"<g><circle cx="0" cy="0" r="1"/></g>"#,
                r#"</g>"#,
                r#"<rect x="5" y="6" width="7" height="8"/>"#,
                r#"</svg>"#
            )
        );
    }

    #[test]
    fn test_end_group_underflow() {
        let mut svg = Svg::new();
        assert!(matches!(svg.end_group(), Err(GeotileError::EmptyContext)));

        svg.group(AttrList::new());
        assert!(svg.end_group().is_ok());
        assert!(matches!(svg.end_group(), Err(GeotileError::EmptyContext)));
    }

    #[test]
    fn test_attr_escaping() {
        let mut svg = Svg::new();
        svg.rect(0.0, 0.0, "1", "1", AttrList::new().with("data-note", "a<b&\"c\""));
        assert!(svg.render().contains(r#"data-note="a&lt;b&amp;&quot;c&quot;""#));
    }
}
