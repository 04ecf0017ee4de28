//! API metadata: info, contact and license.

use crate::Extensions;
use crate::compose::composed;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InfoObject {
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub terms_of_service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    pub version: String,
}

/// API metadata. `title` and `version` are always written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Info {
    pub object: InfoObject,
    pub extensions: Extensions,
}

composed!(Info { object, extensions });

impl Info {
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            object: InfoObject {
                title: title.into(),
                version: version.into(),
                ..InfoObject::default()
            },
            extensions: Extensions::default(),
        }
    }

    pub fn with_license(mut self, license: License) -> Self {
        self.object.license = Some(license);
        self
    }

    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.object.contact = Some(contact);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactObject {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contact {
    pub object: ContactObject,
    pub extensions: Extensions,
}

composed!(Contact { object, extensions });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseObject {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct License {
    pub object: LicenseObject,
    pub extensions: Extensions,
}

composed!(License { object, extensions });

impl License {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            object: LicenseObject {
                name: name.into(),
                url: String::new(),
            },
            extensions: Extensions::default(),
        }
    }
}
