//! Checkout form state and payment validation.
//!
//! The form is plain string state. Each field has a keystroke filter
//! applied on every edit, and the whole form is validated in one pass
//! when the customer submits. The two layers are deliberately separate:
//! filters keep junk out of the fields while typing, validation decides
//! whether the submission is acceptable.

use chrono::NaiveDate;

/// Required card number length.
pub const CARD_NUMBER_LEN: usize = 16;
/// Required CVV length.
pub const CVV_LEN: usize = 3;
/// Length of a fully typed expiration date (YYYY-MM-DD).
pub const EXPIRATION_LEN: usize = 10;

/// Expiration dates are entered and parsed in ISO format.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Dialog title shown when an order goes through.
pub const CONFIRMATION_TITLE: &str = "Order Processed";
/// Dialog body shown when an order goes through. The "text updates"
/// promise is copy only; nothing is sent anywhere.
pub const CONFIRMATION_MESSAGE: &str = "Your payment has been processed and your order has been \
     confirmed. You will receive text updates on the delivery status. \
     Keep an eye on the sky! Thank you for your order!";

/// The ways a submitted form can be rejected. Validation short-circuits,
/// so a submission reports exactly one of these even when several fields
/// are bad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more fields are empty
    IncompleteForm,
    /// Card number is not exactly 16 characters
    InvalidCardNumberLength,
    /// Card number contains a non-digit
    InvalidCardNumberFormat,
    /// CVV is not exactly 3 characters
    InvalidCvvLength,
    /// CVV contains a non-digit
    InvalidCvvFormat,
    /// Expiration date does not parse as YYYY-MM-DD
    InvalidDateFormat,
    /// Expiration date is today or earlier
    ExpiredCard,
}

impl ValidationError {
    /// Title for the warning dialog.
    pub fn title(&self) -> &'static str {
        match self {
            Self::IncompleteForm => "Incomplete Form",
            Self::InvalidCardNumberLength | Self::InvalidCardNumberFormat => {
                "Invalid Card Number"
            }
            Self::InvalidCvvLength | Self::InvalidCvvFormat => "Invalid CVV",
            Self::InvalidDateFormat | Self::ExpiredCard => "Invalid Expiration Date",
        }
    }

    /// Body text for the warning dialog.
    pub fn message(&self) -> &'static str {
        match self {
            Self::IncompleteForm => "Please fill out all fields.",
            Self::InvalidCardNumberLength => "Card number must be 16 digits.",
            Self::InvalidCardNumberFormat => "Card number must contain only digits.",
            Self::InvalidCvvLength => "CVV must be 3 digits.",
            Self::InvalidCvvFormat => "CVV must contain only digits.",
            Self::InvalidDateFormat => "Please enter a valid date in the format YYYY-MM-DD.",
            Self::ExpiredCard => "Expiration date must be in the future.",
        }
    }
}

/// The editable fields of the form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    CardNumber,
    ExpirationDate,
    Cvv,
}

impl FormField {
    /// Label shown next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name on Card",
            Self::CardNumber => "Card Number",
            Self::ExpirationDate => "Expiration Date",
            Self::Cvv => "CVV",
        }
    }

    /// The field below this one, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            Self::Name => Self::CardNumber,
            Self::CardNumber => Self::ExpirationDate,
            Self::ExpirationDate => Self::Cvv,
            Self::Cvv => Self::Name,
        }
    }

    /// The field above this one, wrapping around.
    pub fn previous(&self) -> Self {
        match self {
            Self::Name => Self::Cvv,
            Self::CardNumber => Self::Name,
            Self::ExpirationDate => Self::CardNumber,
            Self::Cvv => Self::ExpirationDate,
        }
    }

    /// All fields in focus order.
    pub fn all() -> [Self; 4] {
        [Self::Name, Self::CardNumber, Self::ExpirationDate, Self::Cvv]
    }
}

// --- Keystroke filters ---
//
// Each filter takes the raw field contents and returns the sanitized
// value. They run on every edit, so the stored value always satisfies
// the field's charset and length cap no matter what was typed.

/// Name field: alphabetic characters and whitespace only.
pub fn filter_name(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect()
}

/// Card number field: digits only, capped at 16.
pub fn filter_card_number(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_digit)
        .take(CARD_NUMBER_LEN)
        .collect()
}

/// CVV field: digits only, capped at 3.
pub fn filter_cvv(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_digit)
        .take(CVV_LEN)
        .collect()
}

/// Expiration field: digits and the date separator, capped at the
/// length of a full YYYY-MM-DD date.
pub fn filter_expiration_date(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .take(EXPIRATION_LEN)
        .collect()
}

/// Payment details as currently typed. Held only while the checkout
/// view is on screen; nothing here is stored after a submission.
#[derive(Debug, Clone, Default)]
pub struct PaymentForm {
    pub name: String,
    pub card_number: String,
    pub expiration_date: String,
    pub cvv: String,
}

impl PaymentForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents of a field.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::CardNumber => &self.card_number,
            FormField::ExpirationDate => &self.expiration_date,
            FormField::Cvv => &self.cvv,
        }
    }

    /// Appends a character to a field and re-applies that field's
    /// filter, so invalid characters never land in the stored value.
    pub fn push_char(&mut self, field: FormField, c: char) {
        match field {
            FormField::Name => {
                self.name.push(c);
                self.name = filter_name(&self.name);
            }
            FormField::CardNumber => {
                self.card_number.push(c);
                self.card_number = filter_card_number(&self.card_number);
            }
            FormField::ExpirationDate => {
                self.expiration_date.push(c);
                self.expiration_date = filter_expiration_date(&self.expiration_date);
            }
            FormField::Cvv => {
                self.cvv.push(c);
                self.cvv = filter_cvv(&self.cvv);
            }
        }
    }

    /// Removes the last character from a field.
    pub fn pop_char(&mut self, field: FormField) {
        match field {
            FormField::Name => self.name.pop(),
            FormField::CardNumber => self.card_number.pop(),
            FormField::ExpirationDate => self.expiration_date.pop(),
            FormField::Cvv => self.cvv.pop(),
        };
    }

    /// Validates the form against the rules in field order.
    ///
    /// Checks run in a fixed sequence and the first failure wins:
    /// completeness, card number length, card number charset, CVV
    /// length, CVV charset, date parse, date in the future. `today` is
    /// injected so the future check is a pure comparison.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationError> {
        if self.name.is_empty()
            || self.card_number.is_empty()
            || self.expiration_date.is_empty()
            || self.cvv.is_empty()
        {
            return Err(ValidationError::IncompleteForm);
        }

        if self.card_number.chars().count() != CARD_NUMBER_LEN {
            return Err(ValidationError::InvalidCardNumberLength);
        }
        if !self.card_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidCardNumberFormat);
        }

        if self.cvv.chars().count() != CVV_LEN {
            return Err(ValidationError::InvalidCvvLength);
        }
        if !self.cvv.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidCvvFormat);
        }

        let expiration = NaiveDate::parse_from_str(&self.expiration_date, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDateFormat)?;
        if expiration <= today {
            return Err(ValidationError::ExpiredCard);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    /// A form that passes every check against `today()`.
    fn valid_form() -> PaymentForm {
        PaymentForm {
            name: "Jane Doe".to_string(),
            card_number: "1234567890123456".to_string(),
            expiration_date: "2025-06-15".to_string(),
            cvv: "123".to_string(),
        }
    }

    /// Types a string into a field one keystroke at a time.
    fn type_into(form: &mut PaymentForm, field: FormField, text: &str) {
        for c in text.chars() {
            form.push_char(field, c);
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(valid_form().validate(today()), Ok(()));
    }

    #[test]
    fn test_valid_form_one_year_out() {
        let mut form = valid_form();
        let next_year = today().checked_add_days(Days::new(365)).unwrap();
        form.expiration_date = next_year.format("%Y-%m-%d").to_string();
        assert_eq!(form.validate(today()), Ok(()));
    }

    #[test]
    fn test_empty_fields_are_incomplete() {
        for field in FormField::all() {
            let mut form = valid_form();
            match field {
                FormField::Name => form.name.clear(),
                FormField::CardNumber => form.card_number.clear(),
                FormField::ExpirationDate => form.expiration_date.clear(),
                FormField::Cvv => form.cvv.clear(),
            }
            assert_eq!(form.validate(today()), Err(ValidationError::IncompleteForm));
        }
    }

    #[test]
    fn test_incomplete_wins_over_malformed_card() {
        // Empty name must be reported even though the card number is
        // also bad: completeness is checked first.
        let mut form = valid_form();
        form.name.clear();
        form.card_number = "12".to_string();
        assert_eq!(form.validate(today()), Err(ValidationError::IncompleteForm));
    }

    #[test]
    fn test_thirteen_digit_card_fails_length() {
        let mut form = valid_form();
        form.card_number = "1234567890123".to_string();
        assert_eq!(
            form.validate(today()),
            Err(ValidationError::InvalidCardNumberLength)
        );
    }

    #[test]
    fn test_card_length_checked_before_charset() {
        let mut form = valid_form();
        form.card_number = "12345abc".to_string();
        assert_eq!(
            form.validate(today()),
            Err(ValidationError::InvalidCardNumberLength)
        );
    }

    #[test]
    fn test_sixteen_chars_with_letters_fails_format() {
        let mut form = valid_form();
        form.card_number = "123456789012345x".to_string();
        assert_eq!(
            form.validate(today()),
            Err(ValidationError::InvalidCardNumberFormat)
        );
    }

    #[test]
    fn test_cvv_length_and_format() {
        let mut form = valid_form();
        form.cvv = "12".to_string();
        assert_eq!(form.validate(today()), Err(ValidationError::InvalidCvvLength));

        form.cvv = "12x".to_string();
        assert_eq!(form.validate(today()), Err(ValidationError::InvalidCvvFormat));
    }

    #[test]
    fn test_unparseable_date_fails_format() {
        let mut form = valid_form();
        for bad in ["06/15/2025", "2025-13-01", "2025-02-30", "tomorrow"] {
            form.expiration_date = bad.to_string();
            assert_eq!(
                form.validate(today()),
                Err(ValidationError::InvalidDateFormat),
                "expected {bad:?} to fail parsing"
            );
        }
    }

    #[test]
    fn test_yesterday_is_expired() {
        let mut form = valid_form();
        form.expiration_date = "2024-06-14".to_string();
        assert_eq!(form.validate(today()), Err(ValidationError::ExpiredCard));
    }

    #[test]
    fn test_today_is_expired() {
        // Strictly-later check: expiring today is already too late.
        let mut form = valid_form();
        form.expiration_date = "2024-06-15".to_string();
        assert_eq!(form.validate(today()), Err(ValidationError::ExpiredCard));
    }

    #[test]
    fn test_tomorrow_is_accepted() {
        let mut form = valid_form();
        form.expiration_date = "2024-06-16".to_string();
        assert_eq!(form.validate(today()), Ok(()));
    }

    #[test]
    fn test_card_filter_invariant_per_keystroke() {
        let mut form = PaymentForm::new();
        for c in "12a34-5678 9012345678x9".chars() {
            form.push_char(FormField::CardNumber, c);
            assert!(form.card_number.len() <= CARD_NUMBER_LEN);
            assert!(form.card_number.chars().all(|c| c.is_ascii_digit()));
        }
        assert_eq!(form.card_number, "1234567890123456");
    }

    #[test]
    fn test_filtered_short_card_fails_at_submit() {
        // Letters are stripped while typing, leaving too few digits, so
        // submission reports a length problem rather than a charset one.
        let mut form = valid_form();
        form.card_number.clear();
        type_into(&mut form, FormField::CardNumber, "12345678901234ab");
        assert_eq!(form.card_number, "12345678901234");
        assert_eq!(
            form.validate(today()),
            Err(ValidationError::InvalidCardNumberLength)
        );
    }

    #[test]
    fn test_cvv_filter_invariant_per_keystroke() {
        let mut form = PaymentForm::new();
        for c in "1x2y3456".chars() {
            form.push_char(FormField::Cvv, c);
            assert!(form.cvv.len() <= CVV_LEN);
            assert!(form.cvv.chars().all(|c| c.is_ascii_digit()));
        }
        assert_eq!(form.cvv, "123");
    }

    #[test]
    fn test_name_filter_accepts_letters_and_spaces_only() {
        let mut form = PaymentForm::new();
        type_into(&mut form, FormField::Name, "Jane 4. Doe-Smith!");
        assert_eq!(form.name, "Jane  DoeSmith");
        assert!(form
            .name
            .chars()
            .all(|c| c.is_alphabetic() || c.is_whitespace()));
    }

    #[test]
    fn test_expiration_filter_keeps_digits_and_dashes() {
        let mut form = PaymentForm::new();
        type_into(&mut form, FormField::ExpirationDate, "2025/06-15 extra");
        assert_eq!(form.expiration_date, "202506-15");
        assert!(form.expiration_date.len() <= EXPIRATION_LEN);
    }

    #[test]
    fn test_pop_char_edits_focused_field() {
        let mut form = valid_form();
        form.pop_char(FormField::Cvv);
        assert_eq!(form.cvv, "12");
        form.pop_char(FormField::Name);
        assert_eq!(form.name, "Jane Do");
    }

    #[test]
    fn test_dialog_copy() {
        assert_eq!(ValidationError::IncompleteForm.title(), "Incomplete Form");
        assert_eq!(
            ValidationError::InvalidCardNumberLength.message(),
            "Card number must be 16 digits."
        );
        assert_eq!(
            ValidationError::InvalidCardNumberFormat.title(),
            ValidationError::InvalidCardNumberLength.title()
        );
        assert_eq!(
            ValidationError::ExpiredCard.message(),
            "Expiration date must be in the future."
        );
    }

    #[test]
    fn test_field_focus_order_wraps() {
        assert_eq!(FormField::Name.next(), FormField::CardNumber);
        assert_eq!(FormField::Cvv.next(), FormField::Name);
        assert_eq!(FormField::Name.previous(), FormField::Cvv);
        for field in FormField::all() {
            assert_eq!(field.next().previous(), field);
        }
    }
}
