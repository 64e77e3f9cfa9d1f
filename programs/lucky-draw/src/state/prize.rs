use crate::{constants::*, error::LuckyDrawError, utils::*};
use anchor_lang::prelude::*;

/// One prize tier. Tiers are drawn in list order; `level` is display only.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, InitSpace)]
pub struct Prize {
    // --- Identity ---
    #[max_len(MAX_ID_LEN)]
    pub id: String,
    #[max_len(MAX_PRIZE_NAME_LEN)]
    pub name: String,
    pub level: u8,

    // --- Draw ---
    pub count: u32, // Winners drawn for this tier, at least 1.

    // --- Display ---
    #[max_len(MAX_COLOR_LEN)]
    pub color: String,
    #[max_len(MAX_ICON_LEN)]
    pub icon: String,
}

impl Prize {
    pub fn new(
        id: &str,
        name: &str,
        level: u8,
        count: u32,
        color: &str,
        icon: &str,
    ) -> Result<Self> {
        let prize = Self {
            id: id.to_string(),
            name: name.trim().to_string(),
            level,
            count,
            color: color.to_string(),
            icon: icon.to_string(),
        };
        prize.validate()?;

        Ok(prize)
    }

    /// Third, second, then first prize.
    pub fn default_tiers<R: RandomSource>(rng: &mut R) -> Vec<Self> {
        [
            ("Third Prize", 3, 5, "#CD7F32", "fa-medal"),
            ("Second Prize", 2, 3, "#C0C0C0", "fa-award"),
            ("First Prize", 1, 1, "#FFD700", "fa-crown"),
        ]
        .iter()
        .map(|&(name, level, count, color, icon)| Self {
            id: generate_id(rng),
            name: name.to_string(),
            level,
            count,
            color: color.to_string(),
            icon: icon.to_string(),
        })
        .collect()
    }

    /// Stand-in for a prize that a winner log references but the current
    /// configuration no longer has.
    pub fn placeholder(id: &str, name: &str, level: u8, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            level,
            count: 1,
            color: color.to_string(),
            icon: DEFAULT_PRIZE_ICON.to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require!(
            !self.id.is_empty() && self.id.len() <= MAX_ID_LEN,
            LuckyDrawError::InvalidPrizeId
        );

        require!(
            !self.name.trim().is_empty() && self.name.len() <= MAX_PRIZE_NAME_LEN,
            LuckyDrawError::InvalidPrizeName
        );

        require!(self.count >= 1, LuckyDrawError::InvalidPrizeCount);

        require!(
            self.color.len() <= MAX_COLOR_LEN && self.icon.len() <= MAX_ICON_LEN,
            LuckyDrawError::InvalidPrizeStyle
        );

        Ok(())
    }

    /// Validates a full tier list: each prize, the tier limit and id uniqueness.
    pub fn validate_tiers(prizes: &[Prize]) -> Result<()> {
        require!(prizes.len() <= MAX_PRIZES, LuckyDrawError::TooManyPrizes);

        for (index, prize) in prizes.iter().enumerate() {
            prize.validate()?;
            require!(
                !prizes[..index].iter().any(|p| p.id == prize.id),
                LuckyDrawError::DuplicatePrizeId
            );
        }

        Ok(())
    }
}

impl PartialEq for Prize {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Prize {}
