//! Small shapes embedded by several resources.

use serde::{Deserialize, Serialize};

/// Short representation of a team, as embedded in other resources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamRef {
    pub id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TeamRef {
    /// Reference a team by id
    pub fn new(id: i64) -> Self {
        Self { id, name: None }
    }
}

/// Image attached to an alert or event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Image {
    pub src: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Link attached to an alert or event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Link {
    pub href: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Phone number with its region
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Phone {
    pub region_code: String,
    pub number: String,
}

api_enum! {
    /// Visibility of teams and status pages
    pub enum Visibility {
        Public => "PUBLIC",
        Private => "PRIVATE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_ref_omits_missing_name() {
        let json = serde_json::to_string(&TeamRef::new(3)).unwrap();
        assert_eq!(json, r#"{"id":3}"#);
    }

    #[test]
    fn test_phone_camel_case() {
        let phone: Phone =
            serde_json::from_str(r#"{"regionCode":"DE","number":"+4915100000000"}"#).unwrap();
        assert_eq!(phone.region_code, "DE");
        assert_eq!(Visibility::ALL.len(), 2);
    }
}
