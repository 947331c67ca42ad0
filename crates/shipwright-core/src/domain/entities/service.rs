use std::collections::BTreeMap;

use crate::domain::{
    error::DomainError,
    value_objects::{RestartPolicy, Section, SectionValue, ServiceName},
};

/// One service entry of the descriptor.
///
/// Constructed through [`ServiceDescriptor::builder`], which enforces that
/// the name is usable as a file stem and that an image is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    name: ServiceName,
    image: String,
    sections: BTreeMap<Section, SectionValue>,
    restart: Option<RestartPolicy>,
}

impl ServiceDescriptor {
    pub fn builder(name: impl Into<String>) -> ServiceDescriptorBuilder {
        ServiceDescriptorBuilder {
            name: name.into(),
            image: None,
            sections: BTreeMap::new(),
            restart: None,
        }
    }

    pub fn name(&self) -> &ServiceName {
        &self.name
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn section(&self, section: Section) -> Option<&SectionValue> {
        self.sections.get(&section)
    }

    /// Present sections, in rendering order.
    pub fn sections(&self) -> impl Iterator<Item = (Section, &SectionValue)> {
        self.sections.iter().map(|(section, value)| (*section, value))
    }

    pub fn restart(&self) -> Option<&RestartPolicy> {
        self.restart.as_ref()
    }
}

/// Builder for [`ServiceDescriptor`].
#[derive(Debug, Clone)]
pub struct ServiceDescriptorBuilder {
    name: String,
    image: Option<String>,
    sections: BTreeMap<Section, SectionValue>,
    restart: Option<RestartPolicy>,
}

impl ServiceDescriptorBuilder {
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set a section. Setting the same section twice keeps the last value.
    pub fn section(mut self, section: Section, value: SectionValue) -> Self {
        self.sections.insert(section, value);
        self
    }

    pub fn restart(mut self, policy: RestartPolicy) -> Self {
        self.restart = Some(policy);
        self
    }

    pub fn build(self) -> Result<ServiceDescriptor, DomainError> {
        let name = ServiceName::new(self.name)?;
        let image = self
            .image
            .ok_or_else(|| DomainError::MissingRequiredField {
                service: name.to_string(),
                field: "image",
            })?;

        reject_control_characters(&name, &image, self.restart.as_ref(), &self.sections)?;

        Ok(ServiceDescriptor {
            name,
            image,
            sections: self.sections,
            restart: self.restart,
        })
    }
}

/// Values rendered without quotes must stay on one playbook line.
fn reject_control_characters(
    name: &ServiceName,
    image: &str,
    restart: Option<&RestartPolicy>,
    sections: &BTreeMap<Section, SectionValue>,
) -> Result<(), DomainError> {
    let unsafe_field = |field: &str| DomainError::ControlCharacters {
        service: name.to_string(),
        field: field.to_string(),
    };
    let has_control = |text: &str| text.chars().any(char::is_control);

    if has_control(image) {
        return Err(unsafe_field("image"));
    }
    if let Some(RestartPolicy::Token(token)) = restart {
        if has_control(token) {
            return Err(unsafe_field("restart"));
        }
    }
    for (section, value) in sections {
        let bare = match value {
            SectionValue::Sequence(items) if !section.quotes_items() => {
                items.iter().any(|item| has_control(item))
            }
            SectionValue::Sequence(_) => false,
            SectionValue::Mapping(entries) => entries.iter().any(|(key, _)| has_control(key)),
        };
        if bare {
            return Err(unsafe_field(section.key()));
        }
    }
    Ok(())
}
