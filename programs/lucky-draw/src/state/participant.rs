use crate::{constants::*, error::LuckyDrawError, utils::*};
use anchor_lang::prelude::*;

/// Someone who can be drawn. Identity is the `id` alone; names may repeat.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, InitSpace)]
pub struct Participant {
    #[max_len(MAX_ID_LEN)]
    pub id: String, // Opaque identity key, assigned once at creation.
    #[max_len(MAX_NAME_LEN)]
    pub name: String, // Display name, trimmed.
}

impl Participant {
    /// Creates a participant with a freshly generated id, re-rolled while
    /// `taken` reports a collision.
    pub fn new<R, F>(name: &str, rng: &mut R, taken: F) -> Result<Self>
    where
        R: RandomSource,
        F: Fn(&str) -> bool,
    {
        Self::with_id(&generate_unique_id(rng, taken), name)
    }

    pub fn with_id(id: &str, name: &str) -> Result<Self> {
        let participant = Self {
            id: id.to_string(),
            name: name.trim().to_string(),
        };
        participant.validate()?;

        Ok(participant)
    }

    pub fn validate(&self) -> Result<()> {
        require!(
            !self.id.is_empty() && self.id.len() <= MAX_ID_LEN,
            LuckyDrawError::InvalidParticipantId
        );

        Self::validate_name(&self.name)?;
        require!(self.name.len() <= MAX_NAME_LEN, LuckyDrawError::NameTooLong);

        Ok(())
    }

    /// Trimmed name, or an error if it is blank or too long.
    pub fn validate_name(name: &str) -> Result<String> {
        let name = name.trim();
        require!(!name.is_empty(), LuckyDrawError::NameRequired);
        require!(name.len() <= MAX_NAME_LEN, LuckyDrawError::NameTooLong);

        Ok(name.to_string())
    }
}

impl PartialEq for Participant {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Participant {}
