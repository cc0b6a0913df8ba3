use crate::prelude::Contact;

/// Returns every contact whose name or city contains `term`, ignoring case.
///
/// A blank term matches everything. Results keep the order of `contacts`.
pub fn search_name_or_city<'a, I>(term: &str, contacts: I) -> Vec<&'a Contact>
where
    I: IntoIterator<Item = &'a Contact>,
{
    if term.trim().is_empty() {
        return contacts.into_iter().collect();
    }

    let needle = term.to_lowercase();

    contacts
        .into_iter()
        .filter(|c| {
            contains_ignore_case(&c.name, &needle) || contains_ignore_case(&c.city, &needle)
        })
        .collect()
}

// `needle` must already be lowercased.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
