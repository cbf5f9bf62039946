use crate::domain::contact::Contact;

/// Presence check the presentation layer runs before add/edit. First
/// name, last name and phone are required, email and address are free.
/// Returns the first missing field, for the error message.
pub fn missing_required_field(contact: &Contact) -> Option<&'static str> {
    if contact.first_name.trim().is_empty() {
        return Some("First name");
    }
    if contact.last_name.trim().is_empty() {
        return Some("Last name");
    }
    if contact.phone.trim().is_empty() {
        return Some("Phone number");
    }
    None
}
