use crate::domain::Contact;
use crate::errors::AppError;

// Field checks the host runs before handing values to the address book.
// The book itself stores whatever it is given.
pub fn validate_contact(contact: &Contact) -> Result<(), AppError> {
    if contact.fields().iter().any(|field| field.trim().is_empty()) {
        return Err(AppError::Validation("All fields must be filled.".to_string()));
    }

    // One contact per line in the backing file
    if contact.fields().iter().any(|field| field.contains(['\n', '\r'])) {
        return Err(AppError::Validation(
            "Fields must not contain line breaks.".to_string(),
        ));
    }

    if !validate_zip_code(&contact.zip_code) {
        return Err(AppError::Validation("Zip code must be numeric.".to_string()));
    }

    if !validate_number(&contact.phone) {
        return Err(AppError::Validation("Phone must be numeric.".to_string()));
    }

    if !validate_email(&contact.email) {
        return Err(AppError::Validation("Email must contain @.".to_string()));
    }

    Ok(())
}

pub fn validate_zip_code(zip_code: &str) -> bool {
    zip_code.trim().parse::<i32>().is_ok()
}

pub fn validate_number(phone: &str) -> bool {
    phone.trim().parse::<i64>().is_ok()
}

pub fn validate_email(email: &str) -> bool {
    email.contains('@')
}
