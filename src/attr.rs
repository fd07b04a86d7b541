//! Attribute system for tag tree elements
//!
//! Attributes are a plain `Vec<(String, String)>`: insertion order is kept,
//! so a given tree always renders its attributes in the same order.

/// Element attributes as ordered key-value pairs
pub type Attrs = Vec<(String, String)>;

/// Extension trait for attribute operations on Attrs
pub trait AttrsExt {
    /// Get an attribute value by name
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute value (insert or overwrite, keeping the first position)
    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>);
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_attr(&self, name: &str) -> bool {
        self.iter().any(|(k, _)| k == name)
    }

    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(attr) = self.iter_mut().find(|(k, _)| k == &name) {
            attr.1 = value;
        } else {
            self.push((name, value));
        }
    }
}

/// Render attributes as ` name="value"` pairs.
///
/// Values are written verbatim. Callers that need entities run their text
/// through [`crate::transcode`] first.
pub fn write_attrs(attrs: &Attrs, output: &mut String) {
    for (name, value) in attrs {
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        output.push_str(value);
        output.push('"');
    }
}

// =============================================================================
// Tests
// =============================================================================
