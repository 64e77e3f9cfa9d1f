use anchor_lang::prelude::*;

#[error_code]
pub enum LuckyDrawError {
    // General Errors (0x1000 - 0x1999)
    #[msg("Unauthorized action for this account")]
    Unauthorized = 0x1000,

    #[msg("Arithmetic overflow")]
    Overflow = 0x1001,

    // Configuration Errors (0x2000 - 0x2999)
    #[msg("Participant name is required")]
    NameRequired = 0x2000,

    #[msg("Participant name exceeds the maximum length")]
    NameTooLong = 0x2001,

    #[msg("Participant id is empty or too long")]
    InvalidParticipantId = 0x2002,

    #[msg("A participant with this id already exists")]
    DuplicateParticipantId = 0x2003,

    #[msg("Prize count must be at least 1")]
    InvalidPrizeCount = 0x2004,

    #[msg("Prize id is empty or too long")]
    InvalidPrizeId = 0x2005,

    #[msg("Prize name is empty or too long")]
    InvalidPrizeName = 0x2006,

    #[msg("Prize color or icon exceeds the maximum length")]
    InvalidPrizeStyle = 0x2007,

    #[msg("A prize with this id already exists")]
    DuplicatePrizeId = 0x2008,

    #[msg("Too many prize tiers")]
    TooManyPrizes = 0x2009,

    #[msg("Prize not found")]
    PrizeNotFound = 0x200a,

    #[msg("Activity name is empty or too long")]
    InvalidActivityName = 0x200b,

    // Draw Errors (0x3000 - 0x3999)
    #[msg("Participant pool is empty")]
    PoolEmpty = 0x3000,

    #[msg("All prizes have been drawn")]
    NoCurrentPrize = 0x3001,

    #[msg("A round is already in progress")]
    RoundInProgress = 0x3002,

    #[msg("No round is in progress")]
    RoundNotInProgress = 0x3003,

    // Store Errors (0x4000 - 0x4999)
    #[msg("Batch exceeds the maximum size")]
    BatchTooLarge = 0x4000,

    #[msg("Participant roster is full")]
    TooManyParticipants = 0x4001,

    #[msg("Winner log is full")]
    TooManyWinnerRecords = 0x4002,

    #[msg("Winner record is malformed")]
    InvalidWinnerRecord = 0x4003,

    #[msg("Activity not found")]
    ActivityNotFound = 0x4004,

    #[msg("No activity is attached to this session")]
    NoActiveActivity = 0x4005,

    #[msg("Store is unavailable")]
    StoreUnavailable = 0x4006,
}
