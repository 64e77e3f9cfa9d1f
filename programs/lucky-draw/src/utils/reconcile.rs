use crate::state::*;
use std::collections::HashSet;

/// Progress recovered from a persisted winner log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reconciled {
    pub current_prize_index: usize,
    pub pool: Vec<Participant>,
}

/// Walks the tiers in draw order. A tier with at least `count` records is
/// finished; the first tier with fewer (none or a partial draw) is current.
/// Never skips past an unfinished tier, even if a later one has records.
///
/// A round capped by the pool size writes fewer than `count` records and
/// empties the pool, so with `pool_exhausted` a partially drawn tier is
/// finished too. A tier with no records always halts the walk.
pub fn recompute_prize_index(
    prizes: &[Prize],
    records: &[WinnerRecord],
    pool_exhausted: bool,
) -> usize {
    prizes
        .iter()
        .position(|prize| {
            let drawn = records
                .iter()
                .filter(|record| record.prize.id == prize.id)
                .count();
            drawn == 0 || (drawn < prize.count as usize && !pool_exhausted)
        })
        .unwrap_or(prizes.len())
}

/// Participants minus everyone who appears as a winner, matched by id.
pub fn remaining_pool(participants: &[Participant], records: &[WinnerRecord]) -> Vec<Participant> {
    let winners: HashSet<&str> = records
        .iter()
        .map(|record| record.participant.id.as_str())
        .collect();

    participants
        .iter()
        .filter(|participant| !winners.contains(participant.id.as_str()))
        .cloned()
        .collect()
}

pub fn reconcile(
    prizes: &[Prize],
    records: &[WinnerRecord],
    participants: &[Participant],
) -> Reconciled {
    let pool = remaining_pool(participants, records);

    Reconciled {
        current_prize_index: recompute_prize_index(prizes, records, pool.is_empty()),
        pool,
    }
}

/// Drops repeated (participant, prize) pairs, keeping the first occurrence.
pub fn dedupe_records(records: Vec<WinnerRecord>) -> Vec<WinnerRecord> {
    let mut kept: Vec<WinnerRecord> = Vec::with_capacity(records.len());
    for record in records {
        if !kept.iter().any(|existing| existing.same_draw(&record)) {
            kept.push(record);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prize(id: &str, count: u32) -> Prize {
        Prize::new(id, "Tier", 1, count, "", "").unwrap()
    }

    fn guest(id: &str) -> Participant {
        Participant::with_id(id, "Guest").unwrap()
    }

    fn won(participant: &str, prize: &Prize) -> WinnerRecord {
        WinnerRecord::new(guest(participant), prize.clone(), 0)
    }

    #[test]
    fn test_finished_tier_is_passed() {
        let prizes = vec![prize("p0", 2), prize("p1", 1)];
        let records = vec![won("a", &prizes[0]), won("b", &prizes[0])];
        assert_eq!(recompute_prize_index(&prizes, &records, false), 1);
    }

    #[test]
    fn test_partial_tier_halts_even_if_later_tier_is_full() {
        let prizes = vec![prize("p0", 3), prize("p1", 1)];
        let records = vec![won("a", &prizes[0]), won("b", &prizes[1])];
        assert_eq!(recompute_prize_index(&prizes, &records, false), 0);
    }

    #[test]
    fn test_empty_tier_halts() {
        let prizes = vec![prize("p0", 1), prize("p1", 1), prize("p2", 1)];
        let records = vec![won("a", &prizes[0]), won("c", &prizes[2])];
        assert_eq!(recompute_prize_index(&prizes, &records, false), 1);
    }

    #[test]
    fn test_all_tiers_finished() {
        let prizes = vec![prize("p0", 1), prize("p1", 1)];
        let records = vec![won("a", &prizes[0]), won("b", &prizes[1])];
        assert_eq!(recompute_prize_index(&prizes, &records, false), 2);
        assert_eq!(recompute_prize_index(&[], &records, false), 0);
    }

    #[test]
    fn test_capped_tier_finished_once_pool_is_empty() {
        let prizes = vec![prize("p0", 2), prize("p1", 2)];
        let records = vec![won("a", &prizes[0]), won("b", &prizes[0]), won("c", &prizes[1])];
        assert_eq!(recompute_prize_index(&prizes, &records, true), 2);
        assert_eq!(recompute_prize_index(&prizes, &records, false), 1);
    }

    #[test]
    fn test_empty_tier_halts_even_with_empty_pool() {
        let prizes = vec![prize("p0", 3), prize("p1", 1)];
        let records = vec![won("a", &prizes[0])];
        assert_eq!(recompute_prize_index(&prizes, &records, true), 1);
        assert_eq!(recompute_prize_index(&prizes, &[], true), 0);
    }

    #[test]
    fn test_reconcile_capped_final_round() {
        let prizes = vec![prize("p0", 2), prize("p1", 2)];
        let participants: Vec<Participant> = ["a", "b", "c"].iter().map(|id| guest(id)).collect();
        let records = vec![won("a", &prizes[0]), won("b", &prizes[0]), won("c", &prizes[1])];

        let reconciled = reconcile(&prizes, &records, &participants);
        assert_eq!(reconciled.current_prize_index, 2);
        assert!(reconciled.pool.is_empty());
    }

    #[test]
    fn test_placeholder_records_do_not_advance() {
        let prizes = vec![prize("p0", 1)];
        let retired = Prize::placeholder("retired", "Old", 9, "");
        let records = vec![won("a", &retired)];
        assert_eq!(recompute_prize_index(&prizes, &records, false), 0);
    }

    #[test]
    fn test_pool_excludes_winners_by_id() {
        let participants = vec![
            Participant::with_id("a", "Ash").unwrap(),
            Participant::with_id("b", "Ash").unwrap(),
            Participant::with_id("c", "Misty").unwrap(),
        ];
        let records = vec![WinnerRecord::new(
            Participant::with_id("a", "Ash").unwrap(),
            prize("p0", 1),
            0,
        )];

        let pool = remaining_pool(&participants, &records);
        let ids: Vec<&str> = pool.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn test_reconcile_combines_index_and_pool() {
        let prizes = vec![prize("p0", 2), prize("p1", 1)];
        let participants: Vec<Participant> = ["a", "b", "c"].iter().map(|id| guest(id)).collect();
        let records = vec![won("a", &prizes[0]), won("b", &prizes[0])];

        let reconciled = reconcile(&prizes, &records, &participants);
        assert_eq!(reconciled.current_prize_index, 1);
        assert_eq!(reconciled.pool, vec![guest("c")]);
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let gold = prize("gold", 1);
        let mut later = won("a", &gold);
        later.timestamp = 99;
        let records = vec![won("a", &gold), later, won("b", &gold)];

        let deduped = dedupe_records(records);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].timestamp, 0);
    }
}
