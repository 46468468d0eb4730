use validator::ValidationErrors;

use crate::api::util::json::FieldErrors;

/// Flatten `validator` output into the `errors` map of a 422 response.
///
/// One reason per field: the first error's message, or its code when no
/// message was attached. Nested struct and list errors are not included.
pub(crate) fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            let first = errs.first()?;
            let reason = match &first.message {
                Some(message) => message.to_string(),
                None => first.code.to_string(),
            };
            Some((field.to_string(), reason))
        })
        .collect()
}
