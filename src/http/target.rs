use crate::contract::InterfaceSpec;
use crate::template::RequestTemplate;

/// The interface description and base URL a client binds to.
///
/// Targets are immutable; two clients built from equal targets are
/// interchangeable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub interface: InterfaceSpec,
    pub base_url: String,
    pub name: String,
}

impl Target {
    pub fn new(interface: InterfaceSpec, base_url: impl Into<String>) -> Self {
        let name = interface.name.clone();
        Self::named(interface, base_url, name)
    }

    pub fn named(
        interface: InterfaceSpec,
        base_url: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            interface,
            base_url: base_url.into(),
            name: name.into(),
        }
    }

    /// Prepends the base URL unless the template already resolved to an
    /// absolute URL (a call-time URI override makes it absolute).
    pub fn apply(&self, template: &mut RequestTemplate) {
        if !template.url().starts_with("http") {
            template.insert(0, &self.base_url);
        }
    }
}
