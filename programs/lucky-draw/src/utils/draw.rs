use crate::{error::LuckyDrawError, state::*, utils::RandomSource};
use anchor_lang::prelude::*;

/// Number of winners the next round draws: `min(prize.count, pool_size)`.
///
/// Errors are the "cannot start" signals: empty pool, no prize left, or a
/// prize configured with a zero count.
pub fn compute_draw_count(pool_size: usize, prize: Option<&Prize>) -> Result<u32> {
    require!(pool_size > 0, LuckyDrawError::PoolEmpty);

    let prize = prize.ok_or(LuckyDrawError::NoCurrentPrize)?;
    require!(prize.count >= 1, LuckyDrawError::InvalidPrizeCount);

    let pool_size = u32::try_from(pool_size).unwrap_or(u32::MAX);
    Ok(prize.count.min(pool_size))
}

/// Draws `min(draw_count, pool.len())` distinct participants, each pool member
/// equally likely. Runs a partial Fisher-Yates over an index permutation, so
/// only the drawn prefix is shuffled and `pool` is left untouched.
pub fn select_winners<R: RandomSource>(
    pool: &[Participant],
    draw_count: u32,
    rng: &mut R,
) -> Vec<Participant> {
    let take = (draw_count as usize).min(pool.len());
    let mut order: Vec<usize> = (0..pool.len()).collect();

    for i in 0..take {
        let j = i + rng.next_index(pool.len() - i);
        order.swap(i, j);
    }

    order[..take].iter().map(|&i| pool[i].clone()).collect()
}
