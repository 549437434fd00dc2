use anchor_lang::prelude::*;

#[error_code]
pub enum MasterOrgError {
    #[msg("Signer is not the registry administrator")]
    Unauthorized,

    #[msg("Majority and quorum must be between 0 and 100")]
    InvalidSettings,

    #[msg("Organization name or owner is invalid")]
    InvalidInput,

    #[msg("Organization address is already registered")]
    DuplicateAddress,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}

/// Anchor error code carried by `err`, if it came from an `#[error_code]` enum.
#[cfg(test)]
pub(crate) fn anchor_code(err: &Error) -> Option<u32> {
    match err {
        Error::AnchorError(e) => Some(e.error_code_number),
        Error::ProgramError(_) => None,
    }
}
