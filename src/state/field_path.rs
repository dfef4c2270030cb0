//! Addressing of single editable leaves inside a [`User`]
//!
//! A path is either a top-level field or a `(group, field)` pair. Writes through
//! a group path only touch the named leaf, the rest of the group is kept.

use super::record::User;
use serde_json::Value;
use std::fmt;

/// Top-level scalar field of a user
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TopField {
    Name,
    Email,
    Phone,
    Website,
    /// Any other flat member, stored in the record's extra map
    Other(String),
}

/// Leaf inside the `address` group
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AddressField {
    Street,
    Suite,
    City,
    Zipcode,
    Other(String),
}

/// Leaf inside the `company` group
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompanyField {
    Name,
    CatchPhrase,
    Bs,
    Other(String),
}

/// Path to one editable leaf of a user
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Top(TopField),
    Address(AddressField),
    Company(CompanyField),
}

impl TopField {
    fn from_name(name: &str) -> Self {
        match name {
            "name" => Self::Name,
            "email" => Self::Email,
            "phone" => Self::Phone,
            "website" => Self::Website,
            other => Self::Other(other.to_string()),
        }
    }

    fn as_str(&self) -> &str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Website => "website",
            Self::Other(name) => name,
        }
    }
}

impl AddressField {
    fn from_name(name: &str) -> Self {
        match name {
            "street" => Self::Street,
            "suite" => Self::Suite,
            "city" => Self::City,
            "zipcode" => Self::Zipcode,
            other => Self::Other(other.to_string()),
        }
    }

    fn as_str(&self) -> &str {
        match self {
            Self::Street => "street",
            Self::Suite => "suite",
            Self::City => "city",
            Self::Zipcode => "zipcode",
            Self::Other(name) => name,
        }
    }
}

impl CompanyField {
    fn from_name(name: &str) -> Self {
        match name {
            "name" => Self::Name,
            "catchPhrase" => Self::CatchPhrase,
            "bs" => Self::Bs,
            other => Self::Other(other.to_string()),
        }
    }

    fn as_str(&self) -> &str {
        match self {
            Self::Name => "name",
            Self::CatchPhrase => "catchPhrase",
            Self::Bs => "bs",
            Self::Other(name) => name,
        }
    }
}

impl FieldPath {
    /// Parse a form field name such as `"email"` or `"address.city"`.
    ///
    /// `address.<leaf>` and `company.<leaf>` address a group leaf. Every other
    /// name, including unknown prefixes like `"geo.lat"`, is a flat top-level
    /// field. Returns `None` for names that would clobber structure: the empty
    /// string, `id`, and bare or empty-leaf group names.
    pub fn parse(name: &str) -> Option<Self> {
        match name.split_once('.') {
            Some(("address", leaf)) if !leaf.is_empty() => {
                Some(Self::Address(AddressField::from_name(leaf)))
            }
            Some(("company", leaf)) if !leaf.is_empty() => {
                Some(Self::Company(CompanyField::from_name(leaf)))
            }
            Some(("address" | "company", _)) => None,
            _ => match name {
                "" | "id" | "address" | "company" => None,
                _ => Some(Self::Top(TopField::from_name(name))),
            },
        }
    }

    /// Read the current value of this leaf.
    ///
    /// Extra members that are missing or not strings read as `None`.
    pub fn get<'a>(&self, user: &'a User) -> Option<&'a str> {
        match self {
            Self::Top(TopField::Name) => Some(&user.name),
            Self::Top(TopField::Email) => Some(&user.email),
            Self::Top(TopField::Phone) => Some(&user.phone),
            Self::Top(TopField::Website) => Some(&user.website),
            Self::Top(TopField::Other(key)) => user.extra.get(key).and_then(Value::as_str),
            Self::Address(AddressField::Street) => Some(&user.address.street),
            Self::Address(AddressField::Suite) => Some(&user.address.suite),
            Self::Address(AddressField::City) => Some(&user.address.city),
            Self::Address(AddressField::Zipcode) => Some(&user.address.zipcode),
            Self::Address(AddressField::Other(key)) => {
                user.address.extra.get(key).and_then(Value::as_str)
            }
            Self::Company(CompanyField::Name) => Some(&user.company.name),
            Self::Company(CompanyField::CatchPhrase) => Some(&user.company.catch_phrase),
            Self::Company(CompanyField::Bs) => Some(&user.company.bs),
            Self::Company(CompanyField::Other(key)) => {
                user.company.extra.get(key).and_then(Value::as_str)
            }
        }
    }

    /// Mutable access to a known string leaf, `None` for extra members
    fn known_mut<'a>(&self, user: &'a mut User) -> Option<&'a mut String> {
        match self {
            Self::Top(TopField::Name) => Some(&mut user.name),
            Self::Top(TopField::Email) => Some(&mut user.email),
            Self::Top(TopField::Phone) => Some(&mut user.phone),
            Self::Top(TopField::Website) => Some(&mut user.website),
            Self::Address(AddressField::Street) => Some(&mut user.address.street),
            Self::Address(AddressField::Suite) => Some(&mut user.address.suite),
            Self::Address(AddressField::City) => Some(&mut user.address.city),
            Self::Address(AddressField::Zipcode) => Some(&mut user.address.zipcode),
            Self::Company(CompanyField::Name) => Some(&mut user.company.name),
            Self::Company(CompanyField::CatchPhrase) => Some(&mut user.company.catch_phrase),
            Self::Company(CompanyField::Bs) => Some(&mut user.company.bs),
            Self::Top(TopField::Other(_))
            | Self::Address(AddressField::Other(_))
            | Self::Company(CompanyField::Other(_)) => None,
        }
    }

    /// Replace the value of this leaf, leaving every other field untouched
    pub fn set(&self, user: &mut User, value: String) {
        if let Some(slot) = self.known_mut(user) {
            *slot = value;
            return;
        }
        let (map, key) = match self {
            Self::Top(TopField::Other(key)) => (&mut user.extra, key),
            Self::Address(AddressField::Other(key)) => (&mut user.address.extra, key),
            Self::Company(CompanyField::Other(key)) => (&mut user.company.extra, key),
            _ => return,
        };
        map.insert(key.clone(), Value::String(value));
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top(field) => write!(f, "{}", field.as_str()),
            Self::Address(field) => write!(f, "address.{}", field.as_str()),
            Self::Company(field) => write!(f, "company.{}", field.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::record::{Address, Company};
    use pretty_assertions::assert_eq;

    fn sample_user() -> User {
        User {
            id: Some(1),
            name: "Leanne".to_string(),
            email: "leanne@example.com".to_string(),
            phone: "555".to_string(),
            address: Address {
                street: "Kulas Light".to_string(),
                suite: "Apt. 556".to_string(),
                city: "Gwenborough".to_string(),
                zipcode: "92998".to_string(),
                ..Default::default()
            },
            company: Company {
                name: "Romaguera".to_string(),
                catch_phrase: "Neural-net".to_string(),
                bs: "e-markets".to_string(),
                ..Default::default()
            },
            website: "hildegard.org".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(FieldPath::parse("name"), Some(FieldPath::Top(TopField::Name)));
        assert_eq!(
            FieldPath::parse("address.city"),
            Some(FieldPath::Address(AddressField::City))
        );
        assert_eq!(
            FieldPath::parse("company.catchPhrase"),
            Some(FieldPath::Company(CompanyField::CatchPhrase))
        );
    }

    #[test]
    fn test_parse_unknown_prefix_is_flat() {
        assert_eq!(
            FieldPath::parse("geo.lat"),
            Some(FieldPath::Top(TopField::Other("geo.lat".to_string())))
        );
        assert_eq!(
            FieldPath::parse("username"),
            Some(FieldPath::Top(TopField::Other("username".to_string())))
        );
    }

    #[test]
    fn test_parse_unknown_group_leaf_stays_in_group() {
        assert_eq!(
            FieldPath::parse("address.country"),
            Some(FieldPath::Address(AddressField::Other("country".to_string())))
        );
    }

    #[test]
    fn test_parse_rejects_structural_names() {
        assert_eq!(FieldPath::parse(""), None);
        assert_eq!(FieldPath::parse("id"), None);
        assert_eq!(FieldPath::parse("address"), None);
        assert_eq!(FieldPath::parse("company."), None);
    }

    #[test]
    fn test_display_matches_parse() {
        for name in ["email", "address.zipcode", "company.bs", "username"] {
            let path = FieldPath::parse(name).unwrap();
            assert_eq!(path.to_string(), name);
        }
    }

    #[test]
    fn test_set_nested_leaf_only_changes_that_leaf() {
        let before = sample_user();
        let mut user = before.clone();
        FieldPath::Address(AddressField::City).set(&mut user, "Paris".to_string());

        assert_eq!(user.address.city, "Paris");
        assert_eq!(user.address.street, before.address.street);
        assert_eq!(user.address.suite, before.address.suite);
        assert_eq!(user.address.zipcode, before.address.zipcode);
        assert_eq!(user.company, before.company);
        assert_eq!(user.name, before.name);
    }

    #[test]
    fn test_set_other_goes_to_extra() {
        let mut user = sample_user();
        FieldPath::parse("username")
            .unwrap()
            .set(&mut user, "Bret".to_string());
        assert_eq!(user.extra.get("username"), Some(&Value::from("Bret")));
        assert_eq!(
            FieldPath::parse("username").unwrap().get(&user),
            Some("Bret")
        );
    }

    #[test]
    fn test_get_reads_group_leaf() {
        let user = sample_user();
        assert_eq!(
            FieldPath::Company(CompanyField::Name).get(&user),
            Some("Romaguera")
        );
        assert_eq!(
            FieldPath::Address(AddressField::Other("geo".to_string())).get(&user),
            None
        );
    }
}
