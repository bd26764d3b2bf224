//! Validation utilities

use crate::traits::*;
use crate::types::*;
use bigdecimal::BigDecimal;

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: &BigDecimal) -> LedgerResult<()> {
    if *amount <= BigDecimal::from(0) {
        Err(LedgerError::Validation(
            "Amount must be positive".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Validate that a khate number is usable as a natural key
pub fn validate_khate_number(khate_number: &str) -> LedgerResult<()> {
    if khate_number.trim().is_empty() {
        return Err(LedgerError::Validation(
            "Khate number cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate that an account name is valid
pub fn validate_account_name(name: &str) -> LedgerResult<()> {
    if name.trim().is_empty() {
        return Err(LedgerError::Validation(
            "Account name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate that an entry's details text is valid
pub fn validate_details(details: &str) -> LedgerResult<()> {
    if details.trim().is_empty() {
        return Err(LedgerError::Validation(
            "Details cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Enhanced account validator adding length caps to the basic rules
pub struct EnhancedAccountValidator;

impl AccountValidator for EnhancedAccountValidator {
    fn validate_new_account(&self, khate_number: &str, name: &str) -> LedgerResult<()> {
        validate_khate_number(khate_number)?;
        self.validate_rename(name)?;

        if khate_number.len() > 50 {
            return Err(LedgerError::Validation(
                "Khate number cannot exceed 50 characters".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_rename(&self, name: &str) -> LedgerResult<()> {
        validate_account_name(name)?;

        if name.len() > 100 {
            return Err(LedgerError::Validation(
                "Account name cannot exceed 100 characters".to_string(),
            ));
        }

        Ok(())
    }
}

/// Enhanced entry validator adding length caps to the basic rules
pub struct EnhancedEntryValidator;

impl EntryValidator for EnhancedEntryValidator {
    fn validate_draft(&self, draft: &EntryDraft) -> LedgerResult<()> {
        validate_khate_number(&draft.account_number)?;
        validate_details(&draft.details)?;
        validate_positive_amount(&draft.amount)?;

        if draft.details.len() > 500 {
            return Err(LedgerError::Validation(
                "Details cannot exceed 500 characters".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_amount_rule() {
        assert!(validate_positive_amount(&BigDecimal::from(1)).is_ok());
        assert!(validate_positive_amount(&"0.01".parse().unwrap()).is_ok());
        assert!(validate_positive_amount(&BigDecimal::from(0)).is_err());
        assert!(validate_positive_amount(&BigDecimal::from(-10)).is_err());
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert!(validate_khate_number("12").is_ok());
        assert!(validate_khate_number("   ").is_err());
        assert!(validate_account_name("Ram").is_ok());
        assert!(validate_account_name("").is_err());
        assert!(validate_details("school fee").is_ok());
        assert!(validate_details("\n\t").is_err());
    }

    #[test]
    fn enhanced_validators_cap_lengths() {
        let validator = EnhancedAccountValidator;
        assert!(validator.validate_new_account("12", "Ram").is_ok());
        assert!(validator
            .validate_new_account(&"9".repeat(51), "Ram")
            .is_err());
        assert!(validator.validate_rename(&"x".repeat(101)).is_err());
    }
}
