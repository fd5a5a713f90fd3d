use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

use super::method::Method;

/// A named location-template variable with optional documentation
///
/// Unique per owning resource by name; see [`Resource::set_template_var`]
/// for the replace rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateVar {
    pub name: String,
    pub documentation: Option<String>,
}

/// An addressable unit of the described service
///
/// While discovery runs, the raw dotted name is the unique key and a resource
/// may record several parents and several raw locations. The canonicalizer
/// reduces this to a forest of uniquely named resources with at most one
/// resolved location each.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Raw dotted name, unique key while the model is being built
    pub name: String,

    /// Optional documentation (last discovery write wins)
    pub documentation: Option<String>,

    /// Names of recorded parents (possibly >1 before build(), <=1 after)
    pub parents: BTreeSet<String>,

    /// Names of recorded children (inverse of parents)
    pub children: BTreeSet<String>,

    /// Raw location strings, insertion-ordered, no duplicates
    pub locations: Vec<String>,

    /// Location-template variables, insertion-ordered, unique by name
    pub template_vars: Vec<TemplateVar>,

    /// Methods, insertion-ordered, unique by name
    pub methods: Vec<Method>,
}

impl Resource {
    /// Create a new resource with the given raw dotted name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Whether at least one method was discovered for this resource
    pub fn has_methods(&self) -> bool {
        !self.methods.is_empty()
    }

    /// The resolved location, once the canonicalizer has run
    ///
    /// Before `build()` a resource may hold several raw locations; this
    /// returns the first one.
    pub fn location(&self) -> Option<&str> {
        self.locations.first().map(String::as_str)
    }

    /// Record a raw location, keeping insertion order and dropping duplicates
    pub fn add_location(&mut self, location: impl Into<String>) {
        let location = location.into();
        if !self.locations.contains(&location) {
            self.locations.push(location);
        }
    }

    /// Insert or replace a location-template variable
    ///
    /// A later write with an equal or absent documentation is a no-op;
    /// otherwise the prior entry is replaced, which moves the variable to the
    /// end of the list and keeps the richer documentation.
    pub fn set_template_var(&mut self, name: &str, documentation: Option<&str>) {
        if let Some(pos) = self.template_vars.iter().position(|v| v.name == name) {
            let existing = &self.template_vars[pos];
            if documentation.is_none() || existing.documentation.as_deref() == documentation {
                return;
            }
            self.template_vars.remove(pos);
        }
        self.template_vars.push(TemplateVar {
            name: name.to_string(),
            documentation: documentation.map(str::to_string),
        });
    }

    /// Insert a method, combining with an existing method of the same name
    ///
    /// If a method of the same name already exists it is removed and
    /// [`Method::combine_with`] applied before insertion, so repeated
    /// discovery of the same method accumulates media types rather than
    /// overwriting.
    ///
    /// # Errors
    ///
    /// Propagates `MethodNameMismatch` from the combine step (cannot occur
    /// for methods matched by name here).
    pub fn merge_method(&mut self, method: Method) -> Result<()> {
        let incoming = match self.methods.iter().position(|m| m.name() == method.name()) {
            Some(pos) => {
                let existing = self.methods.remove(pos);
                existing.combine_with(&method)?
            }
            None => method,
        };
        self.methods.push(incoming);
        Ok(())
    }
}
