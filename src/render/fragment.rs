use smallvec::SmallVec;

/// Markup node produced by the component library.
///
/// Fragments are a typed tree rather than concatenated strings: text is
/// escaped exactly once, at serialization, and structure stays inspectable
/// until then. `Raw` exists for payloads that must bypass escaping (the
/// stylesheet body); callers own its safety.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Element(Element),
    Text(String),
    Raw(String),
}

impl Fragment {
    #[must_use]
    pub fn element(tag: &'static str) -> Element {
        Element::new(tag)
    }

    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Fragment::Text(value.into())
    }

    /// Unescaped passthrough. The caller guarantees the content is
    /// markup-safe.
    #[must_use]
    pub fn raw(value: impl Into<String>) -> Self {
        Fragment::Raw(value.into())
    }

    /// Serializes the tree to HTML text.
    ///
    /// Deterministic: the same tree always yields byte-identical output.
    /// Multi-byte punctuation and CJK copy pass through unchanged.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        match self {
            Fragment::Element(element) => element.write_html(out),
            Fragment::Text(text) => escape_text(text, out),
            Fragment::Raw(raw) => out.push_str(raw),
        }
    }
}

impl From<Element> for Fragment {
    fn from(element: Element) -> Self {
        Fragment::Element(element)
    }
}

/// A single markup element under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    classes: SmallVec<[String; 4]>,
    attrs: Vec<(String, String)>,
    children: Vec<Fragment>,
}

impl Element {
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: SmallVec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_style(self, value: impl Into<String>) -> Self {
        self.with_attr("style", value)
    }

    #[must_use]
    pub fn with_child(mut self, child: impl Into<Fragment>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Fragment>) -> Self {
        self.children.extend(children);
        self
    }

    #[must_use]
    pub fn with_text(self, value: impl Into<String>) -> Self {
        self.with_child(Fragment::text(value))
    }

    #[must_use]
    pub fn build(self) -> Fragment {
        Fragment::Element(self)
    }

    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);

        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            for (index, class) in self.classes.iter().enumerate() {
                if index > 0 {
                    out.push(' ');
                }
                escape_attr(class, out);
            }
            out.push('"');
        }

        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_attr(value, out);
            out.push('"');
        }

        out.push('>');

        if is_void(self.tag) {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }

        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

// Non-void tags always get an explicit closing tag, even when empty;
// HTML parsers treat `<div/>` as an open tag.
fn is_void(tag: &str) -> bool {
    matches!(tag, "br" | "hr" | "img" | "input" | "link" | "meta")
}

pub(crate) fn escape_text(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

pub(crate) fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
