//! Render element builder API.
//!
//! Views are returned as structured JSON render trees (never raw HTML).
//! The host sanitizes them, orders siblings by `#weight`, and renders them
//! with its own templates and widgets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A render element in the JSON render tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderElement {
    #[serde(rename = "#type")]
    pub element_type: String,
    #[serde(rename = "#weight", skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
    #[serde(rename = "#tag", skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(rename = "#value", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "#attributes", skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
    #[serde(flatten)]
    pub children: BTreeMap<String, RenderElement>,
}

impl RenderElement {
    pub fn child(&self, key: &str) -> Option<&RenderElement> {
        self.children.get(key)
    }

    /// Look up a string attribute.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.as_ref()?.get(key)?.as_str()
    }
}

/// Builder for constructing render elements.
pub struct ElementBuilder {
    element_type: String,
    weight: Option<i32>,
    tag: Option<String>,
    value: Option<String>,
    classes: Vec<String>,
    attrs: serde_json::Map<String, Value>,
    children: BTreeMap<String, RenderElement>,
}

impl ElementBuilder {
    fn new(element_type: &str) -> Self {
        Self {
            element_type: element_type.into(),
            weight: None,
            tag: None,
            value: None,
            classes: Vec::new(),
            attrs: serde_json::Map::new(),
            children: BTreeMap::new(),
        }
    }

    pub fn weight(mut self, w: i32) -> Self {
        self.weight = Some(w);
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, key: &str, value: &str) -> Self {
        self.attrs.insert(key.into(), Value::String(value.into()));
        self
    }

    /// Set a `data-*` attribute read by the host's client widgets.
    pub fn data(self, key: &str, value: &str) -> Self {
        self.attr(&format!("data-{key}"), value)
    }

    pub fn child(mut self, key: &str, element: RenderElement) -> Self {
        self.children.insert(key.into(), element);
        self
    }

    pub fn build(self) -> RenderElement {
        let attributes = if self.classes.is_empty() && self.attrs.is_empty() {
            None
        } else {
            let mut map = self.attrs;
            if !self.classes.is_empty() {
                map.insert(
                    "class".into(),
                    Value::Array(self.classes.into_iter().map(Value::String).collect()),
                );
            }
            Some(Value::Object(map))
        };

        RenderElement {
            element_type: self.element_type,
            weight: self.weight,
            tag: self.tag,
            value: self.value,
            attributes,
            children: self.children,
        }
    }
}

/// Create a container element (groups children).
pub fn container() -> ElementBuilder {
    ElementBuilder::new("container")
}

/// Create a markup element with an HTML tag and text value.
pub fn markup(tag: &str, value: &str) -> ElementBuilder {
    let mut b = ElementBuilder::new("markup");
    b.tag = Some(tag.into());
    b.value = Some(value.into());
    b
}

/// Create a tab set; children should be [`tab`] elements.
pub fn tabs() -> ElementBuilder {
    ElementBuilder::new("tabs")
}

/// Create a single tab with a visible label.
pub fn tab(label: &str) -> ElementBuilder {
    ElementBuilder::new("tab").attr("label", label)
}

/// Create a select box; children should be [`option`] elements.
pub fn select(name: &str) -> ElementBuilder {
    ElementBuilder::new("select").attr("name", name)
}

/// Create a select option.
pub fn option(value: &str, label: &str) -> ElementBuilder {
    let mut b = ElementBuilder::new("option").attr("value", value);
    b.value = Some(label.into());
    b
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_has_no_attributes() {
        let el = container().build();
        assert!(el.attributes.is_none());
        let json = serde_json::to_value(&el).unwrap();
        assert_eq!(json, serde_json::json!({"#type": "container"}));
    }

    #[test]
    fn data_attribute_is_prefixed() {
        let el = container().data("endpoint", "/x").build();
        assert_eq!(el.attr("data-endpoint"), Some("/x"));
    }

    #[test]
    fn children_flatten_into_parent() {
        let el = select("size")
            .child("20", option("20", "20").build())
            .build();
        let json = serde_json::to_value(&el).unwrap();
        assert_eq!(json["#attributes"]["name"], "size");
        assert_eq!(json["20"]["#type"], "option");
        assert_eq!(json["20"]["#value"], "20");
    }

    #[test]
    fn classes_collected_into_array() {
        let el = markup("p", "hi").class("a").class("b").build();
        let classes = el.attributes.unwrap()["class"].clone();
        assert_eq!(classes, serde_json::json!(["a", "b"]));
    }
}
