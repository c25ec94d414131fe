//! Minimal identity of a namespaced cluster resource.

/// Read access to a resource's metadata.
pub trait Resource {
    /// `metadata.name` of the resource.
    fn name(&self) -> &str;

    /// `metadata.namespace`, absent for cluster-scoped objects.
    fn namespace(&self) -> Option<&str>;
}

/// Name and namespace of a resource, detached from the full object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    pub name: String,
    pub namespace: Option<String>,
}

impl ResourceRef {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: Some(namespace.into()),
        }
    }

    /// Reference to a resource without a namespace.
    pub fn cluster_scoped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
        }
    }
}

impl Resource for ResourceRef {
    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }
}
