use crate::domain::CustomerInteractionNew;
use crate::error::CoreError;

pub const MAX_TEXT_LEN: usize = 1000;

/// Checks the constraints a record must satisfy before it is stored.
pub fn validate_interaction(input: &CustomerInteractionNew) -> Result<(), CoreError> {
    if input.product_id.is_none() {
        return Err(CoreError::MissingProductId);
    }
    if input.customer_id.is_none() {
        return Err(CoreError::MissingCustomerId);
    }
    check_text("feedback", input.feedback.as_deref())?;
    check_text("message", input.message.as_deref())?;
    check_text(
        "responsesFromCustomerSupport",
        input.responses_from_customer_support.as_deref(),
    )?;
    Ok(())
}

fn check_text(field: &'static str, value: Option<&str>) -> Result<(), CoreError> {
    let Some(value) = value else {
        return Ok(());
    };
    let len = value.chars().count();
    if len > MAX_TEXT_LEN {
        return Err(CoreError::TextTooLong {
            field,
            len,
            max: MAX_TEXT_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_interaction, MAX_TEXT_LEN};
    use crate::domain::CustomerInteractionNew;
    use crate::error::CoreError;

    fn valid() -> CustomerInteractionNew {
        CustomerInteractionNew {
            product_id: Some(1),
            customer_id: Some(2),
            ..Default::default()
        }
    }

    #[test]
    fn validate_accepts_minimal_record() {
        assert_eq!(validate_interaction(&valid()), Ok(()));
    }

    #[test]
    fn validate_rejects_missing_ids() {
        let mut input = valid();
        input.product_id = None;
        assert_eq!(
            validate_interaction(&input),
            Err(CoreError::MissingProductId)
        );

        let mut input = valid();
        input.customer_id = None;
        assert_eq!(
            validate_interaction(&input),
            Err(CoreError::MissingCustomerId)
        );
    }

    #[test]
    fn validate_counts_characters_not_bytes() {
        let mut input = valid();
        input.feedback = Some("é".repeat(MAX_TEXT_LEN));
        assert_eq!(validate_interaction(&input), Ok(()));

        input.message = Some("x".repeat(MAX_TEXT_LEN + 1));
        assert_eq!(
            validate_interaction(&input),
            Err(CoreError::TextTooLong {
                field: "message",
                len: MAX_TEXT_LEN + 1,
                max: MAX_TEXT_LEN,
            })
        );
    }
}
