use std::collections::HashSet;

use crate::domain::{entities::service::ServiceDescriptor, error::DomainError};

/// A parsed descriptor: every service, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptor {
    services: Vec<ServiceDescriptor>,
}

impl Descriptor {
    /// Every service must be named once; a second entry is a
    /// [`DomainError::DuplicateService`].
    pub fn new(services: Vec<ServiceDescriptor>) -> Result<Self, DomainError> {
        let descriptor = Self { services };
        descriptor.validate()?;
        Ok(descriptor)
    }

    pub fn services(&self) -> &[ServiceDescriptor] {
        &self.services
    }

    pub fn service_count(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for service in &self.services {
            if !seen.insert(service.name().as_str()) {
                return Err(DomainError::DuplicateService {
                    name: service.name().to_string(),
                });
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Descriptor {
    type Item = &'a ServiceDescriptor;
    type IntoIter = std::slice::Iter<'a, ServiceDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.services.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(name: &str) -> ServiceDescriptor {
        ServiceDescriptor::builder(name).image("busybox").build().unwrap()
    }

    #[test]
    fn keeps_document_order() {
        let descriptor = Descriptor::new(vec![service("web"), service("api"), service("db")])
            .unwrap();
        let names: Vec<_> = descriptor.services().iter().map(|s| s.name().as_str()).collect();
        assert_eq!(names, ["web", "api", "db"]);
    }

    #[test]
    fn rejects_duplicates() {
        let err = Descriptor::new(vec![service("web"), service("web")]).unwrap_err();
        assert_eq!(err, DomainError::DuplicateService { name: "web".into() });
    }

    #[test]
    fn empty_descriptor_is_valid() {
        let descriptor = Descriptor::new(Vec::new()).unwrap();
        assert!(descriptor.is_empty());
    }
}
