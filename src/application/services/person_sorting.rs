//! Person Sorting
//!
//! Each sortable field resolves to one comparator; the order only decides
//! whether it is applied as-is or reversed. `sort_by` is stable, so equal keys
//! keep their input order in both directions.

use std::cmp::Ordering;

use crate::application::dto::PersonResponse;
use crate::domain::{PersonField, SortOrder};

/// Comparator over person responses.
pub type PersonComparator = fn(&PersonResponse, &PersonResponse) -> Ordering;

/// Resolve the comparator for a field.
pub fn comparator_for(field: PersonField) -> PersonComparator {
    match field {
        PersonField::Name => by_name,
        PersonField::Email => by_email,
        PersonField::DateOfBirth => by_date_of_birth,
        PersonField::Gender => by_gender,
        PersonField::Country => by_country,
        PersonField::Address => by_address,
        PersonField::ReceiveNewsletters => by_receive_newsletters,
        PersonField::Age => by_age,
    }
}

/// Sort persons by a field in the given order.
pub fn sort_persons(
    mut persons: Vec<PersonResponse>,
    field: PersonField,
    order: SortOrder,
) -> Vec<PersonResponse> {
    let compare = comparator_for(field);
    match order {
        SortOrder::Ascending => persons.sort_by(compare),
        SortOrder::Descending => persons.sort_by(|a, b| compare(b, a)),
    }
    persons
}

/// Case-insensitive comparison; `None` sorts before any text.
fn compare_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a
            .chars()
            .flat_map(char::to_uppercase)
            .cmp(b.chars().flat_map(char::to_uppercase)),
        _ => a.is_some().cmp(&b.is_some()),
    }
}

fn by_name(a: &PersonResponse, b: &PersonResponse) -> Ordering {
    compare_text(Some(a.name.as_str()), Some(b.name.as_str()))
}

fn by_email(a: &PersonResponse, b: &PersonResponse) -> Ordering {
    compare_text(Some(a.email.as_str()), Some(b.email.as_str()))
}

fn by_date_of_birth(a: &PersonResponse, b: &PersonResponse) -> Ordering {
    a.date_of_birth.cmp(&b.date_of_birth)
}

fn by_gender(a: &PersonResponse, b: &PersonResponse) -> Ordering {
    compare_text(a.gender.as_deref(), b.gender.as_deref())
}

fn by_country(a: &PersonResponse, b: &PersonResponse) -> Ordering {
    compare_text(a.country.as_deref(), b.country.as_deref())
}

fn by_address(a: &PersonResponse, b: &PersonResponse) -> Ordering {
    compare_text(a.address.as_deref(), b.address.as_deref())
}

fn by_receive_newsletters(a: &PersonResponse, b: &PersonResponse) -> Ordering {
    a.receive_newsletters.cmp(&b.receive_newsletters)
}

fn by_age(a: &PersonResponse, b: &PersonResponse) -> Ordering {
    a.age.cmp(&b.age)
}
