//! Form field descriptors

use crate::state::{AddressField, CompanyField, FieldPath, TopField, User};

/// Input kind, decides which checks run before submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
}

/// Visual grouping of fields on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    Contact,
    Address,
    Company,
}

impl FieldGroup {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Contact => "Contact",
            Self::Address => "Address",
            Self::Company => "Company",
        }
    }
}

/// One editable leaf of the user form
#[derive(Debug, Clone)]
pub struct FormField {
    pub path: FieldPath,
    pub label: &'static str,
    pub group: FieldGroup,
    pub kind: FieldKind,
}

impl FormField {
    const fn text(path: FieldPath, label: &'static str, group: FieldGroup) -> Self {
        Self {
            path,
            label,
            group,
            kind: FieldKind::Text,
        }
    }

    /// Current value of this field in `user` (empty when unset)
    pub fn value<'a>(&self, user: &'a User) -> &'a str {
        self.path.get(user).unwrap_or("")
    }

    /// Value with `c` appended
    pub fn with_char(&self, user: &User, c: char) -> String {
        let mut value = self.value(user).to_string();
        value.push(c);
        value
    }

    /// Value with its last character removed
    pub fn without_last_char(&self, user: &User) -> String {
        let mut value = self.value(user).to_string();
        value.pop();
        value
    }
}

/// Number of editable fields on the form
pub const FIELD_COUNT: usize = 11;

/// All editable fields in display order
pub static FIELDS: [FormField; FIELD_COUNT] = [
    FormField::text(FieldPath::Top(TopField::Name), "Name", FieldGroup::Contact),
    FormField {
        path: FieldPath::Top(TopField::Email),
        label: "Email",
        group: FieldGroup::Contact,
        kind: FieldKind::Email,
    },
    FormField::text(FieldPath::Top(TopField::Phone), "Phone", FieldGroup::Contact),
    FormField::text(
        FieldPath::Address(AddressField::Street),
        "Street",
        FieldGroup::Address,
    ),
    FormField::text(
        FieldPath::Address(AddressField::Suite),
        "Suite",
        FieldGroup::Address,
    ),
    FormField::text(
        FieldPath::Address(AddressField::City),
        "City",
        FieldGroup::Address,
    ),
    FormField::text(
        FieldPath::Address(AddressField::Zipcode),
        "Zipcode",
        FieldGroup::Address,
    ),
    FormField::text(
        FieldPath::Company(CompanyField::Name),
        "Company Name",
        FieldGroup::Company,
    ),
    FormField::text(
        FieldPath::Company(CompanyField::CatchPhrase),
        "Catch Phrase",
        FieldGroup::Company,
    ),
    FormField::text(
        FieldPath::Company(CompanyField::Bs),
        "BS",
        FieldGroup::Company,
    ),
    FormField::text(
        FieldPath::Top(TopField::Website),
        "Website",
        FieldGroup::Contact,
    ),
];

/// Fields belonging to `group`, with their index in [`FIELDS`]
pub fn fields_in(group: FieldGroup) -> impl Iterator<Item = (usize, &'static FormField)> {
    FIELDS
        .iter()
        .enumerate()
        .filter(move |(_, field)| field.group == group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_cover_every_leaf() {
        let names: Vec<String> = FIELDS.iter().map(|f| f.path.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "name",
                "email",
                "phone",
                "address.street",
                "address.suite",
                "address.city",
                "address.zipcode",
                "company.name",
                "company.catchPhrase",
                "company.bs",
                "website",
            ]
        );
    }

    #[test]
    fn test_only_email_is_email_kind() {
        let emails: Vec<_> = FIELDS
            .iter()
            .filter(|f| f.kind == FieldKind::Email)
            .map(|f| f.label)
            .collect();
        assert_eq!(emails, vec!["Email"]);
    }

    #[test]
    fn test_with_char_and_without_last_char() {
        let user = User {
            name: "Le".to_string(),
            ..User::empty()
        };
        let field = &FIELDS[0];
        assert_eq!(field.with_char(&user, 'a'), "Lea");
        assert_eq!(field.without_last_char(&user), "L");
        assert_eq!(field.without_last_char(&User::empty()), "");
    }

    #[test]
    fn test_fields_in_group() {
        let address: Vec<_> = fields_in(FieldGroup::Address).map(|(i, _)| i).collect();
        assert_eq!(address, vec![3, 4, 5, 6]);
        assert_eq!(fields_in(FieldGroup::Company).count(), 3);
        assert_eq!(fields_in(FieldGroup::Contact).count(), 4);
    }
}
