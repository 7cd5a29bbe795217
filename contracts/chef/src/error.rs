use lcfarm_shared::MathError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ChefError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidWeight = 4,
    InvalidAmount = 5,
    InvalidConfiguration = 6,
    PoolNotFound = 7,
    BonusNotFound = 8,
    DuplicateBonus = 9,
    BonusLimitReached = 10,
    InsufficientApproval = 11,
    InsufficientBalance = 12,
    InsufficientStake = 13,
    StillLocked = 14,
    ArithmeticOverflow = 15,
    MintRejected = 16,
}

impl From<MathError> for ChefError {
    fn from(_: MathError) -> Self {
        ChefError::ArithmeticOverflow
    }
}
