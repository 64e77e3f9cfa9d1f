use crate::{constants::*, error::LuckyDrawError, state::*, utils::*};
use anchor_lang::prelude::*;
use std::mem;

/// Where the session is in the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    Idle,                           // Waiting for the next round to start
    InProgress { draw_count: u32 }, // Spinning; winners not yet selected
    AwaitingConfirmation,           // Winners selected, not yet committed
    Completed,                      // Every prize tier has been drawn
}

/// What the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct SceneView<'a> {
    pub pool: Vec<&'a Participant>,
    pub pending_winners: &'a [Participant],
    pub is_round_in_progress: bool,
}

/// Draw state of one lucky draw: pool, tiers, progress and the winner log.
///
/// `start_round` -> `complete_round` -> `confirm_round` moves through one tier;
/// the caller owns whatever presentation runs between the first two calls.
#[derive(Clone, Debug)]
pub struct DrawSession {
    pool: Vec<Participant>,
    prizes: Vec<Prize>,
    current_prize_index: usize,
    winner_records: Vec<WinnerRecord>,
    pending_winners: Vec<Participant>,
    status: RoundStatus,
}

impl DrawSession {
    pub fn new(participants: Vec<Participant>, prizes: Vec<Prize>) -> Result<Self> {
        Prize::validate_tiers(&prizes)?;
        for (index, participant) in participants.iter().enumerate() {
            participant.validate()?;
            require!(
                !participants[..index].contains(participant),
                LuckyDrawError::DuplicateParticipantId
            );
        }

        let mut session = Self {
            pool: participants,
            prizes,
            current_prize_index: 0,
            winner_records: vec![],
            pending_winners: vec![],
            status: RoundStatus::Idle,
        };
        session.settle_status();

        Ok(session)
    }

    // --- Accessors ---

    pub fn pool(&self) -> &[Participant] {
        &self.pool
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn current_prize_index(&self) -> usize {
        self.current_prize_index
    }

    pub fn current_prize(&self) -> Option<&Prize> {
        self.prizes.get(self.current_prize_index)
    }

    pub fn winner_records(&self) -> &[WinnerRecord] {
        &self.winner_records
    }

    pub fn pending_winners(&self) -> &[Participant] {
        &self.pending_winners
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn all_prizes_drawn(&self) -> bool {
        self.current_prize_index >= self.prizes.len()
    }

    pub fn winners_for<'a>(&'a self, prize_id: &'a str) -> impl Iterator<Item = &'a WinnerRecord> {
        self.winner_records
            .iter()
            .filter(move |record| record.prize.id == prize_id)
    }

    /// Pool members still eligible, i.e. excluding drawn-but-unconfirmed winners.
    pub fn view(&self) -> SceneView<'_> {
        SceneView {
            pool: self
                .pool
                .iter()
                .filter(|participant| !self.pending_winners.contains(participant))
                .collect(),
            pending_winners: &self.pending_winners,
            is_round_in_progress: matches!(self.status, RoundStatus::InProgress { .. }),
        }
    }

    // --- Roster ---

    pub fn add_participant<R: RandomSource>(&mut self, name: &str, rng: &mut R) -> Result<&Participant> {
        self.require_roster_editable()?;
        self.require_room(1)?;

        let participant = Participant::new(name, rng, |candidate| {
            self.pool.iter().any(|participant| participant.id == candidate)
        })?;
        self.pool.push(participant);

        Ok(&self.pool[self.pool.len() - 1])
    }

    /// Adds every name or none of them. Returns how many were added.
    pub fn add_participants<R: RandomSource>(&mut self, names: &[String], rng: &mut R) -> Result<usize> {
        self.require_roster_editable()?;
        self.require_room(names.len())?;

        let mut added: Vec<Participant> = Vec::with_capacity(names.len());
        for name in names {
            let participant = Participant::new(name, rng, |candidate| {
                self.pool.iter().any(|p| p.id == candidate)
                    || added.iter().any(|p| p.id == candidate)
            })?;
            added.push(participant);
        }

        let count = added.len();
        self.pool.extend(added);

        Ok(count)
    }

    /// Batch add from raw text; see `parse_names`.
    pub fn add_batch_input<R: RandomSource>(&mut self, input: &str, rng: &mut R) -> Result<usize> {
        self.add_participants(&parse_names(input), rng)
    }

    /// Returns whether a participant with that id was in the pool.
    pub fn remove_participant(&mut self, id: &str) -> Result<bool> {
        self.require_roster_editable()?;

        let before = self.pool.len();
        self.pool.retain(|participant| participant.id != id);

        Ok(self.pool.len() != before)
    }

    /// Empties the pool and the draw history.
    pub fn clear_all(&mut self) -> Result<()> {
        self.require_roster_editable()?;

        self.pool.clear();
        self.winner_records.clear();
        self.pending_winners.clear();
        self.current_prize_index = 0;
        self.settle_status();

        Ok(())
    }

    // --- Prize configuration ---

    pub fn update_prize_name(&mut self, prize_id: &str, name: &str) -> Result<()> {
        let name = name.trim();
        require!(
            !name.is_empty() && name.len() <= MAX_PRIZE_NAME_LEN,
            LuckyDrawError::InvalidPrizeName
        );

        self.prize_mut(prize_id)?.name = name.to_string();
        Ok(())
    }

    /// A round already in progress keeps the draw count it started with.
    pub fn update_prize_count(&mut self, prize_id: &str, count: u32) -> Result<()> {
        require!(count >= 1, LuckyDrawError::InvalidPrizeCount);

        self.prize_mut(prize_id)?.count = count;
        Ok(())
    }

    // --- Draw ---

    /// Idle -> InProgress. Returns the number of winners the round will draw.
    pub fn start_round(&mut self) -> Result<u32> {
        match self.status {
            RoundStatus::Idle => {}
            RoundStatus::Completed => return err!(LuckyDrawError::NoCurrentPrize),
            _ => return err!(LuckyDrawError::RoundInProgress),
        }

        let draw_count = compute_draw_count(self.pool.len(), self.current_prize())?;
        self.pending_winners.clear();
        self.status = RoundStatus::InProgress { draw_count };

        msg!(
            "Round started for prize {} drawing {} of {}",
            self.current_prize_index,
            draw_count,
            self.pool.len()
        );

        Ok(draw_count)
    }

    /// InProgress -> AwaitingConfirmation. Selects the round's winners.
    pub fn complete_round<R: RandomSource>(&mut self, rng: &mut R) -> Result<Vec<Participant>> {
        let draw_count = match self.status {
            RoundStatus::InProgress { draw_count } => draw_count,
            _ => return err!(LuckyDrawError::RoundNotInProgress),
        };

        self.pending_winners = select_winners(&self.pool, draw_count, rng);
        self.status = RoundStatus::AwaitingConfirmation;

        Ok(self.pending_winners.clone())
    }

    /// AwaitingConfirmation -> Idle (or Completed after the last tier).
    ///
    /// Commits the pending winners under the current prize, removes them from
    /// the pool and advances to the next tier. Returns the appended records;
    /// an empty result means there was nothing to confirm, which makes repeated
    /// confirmations harmless.
    pub fn confirm_round(&mut self, timestamp: i64) -> Vec<WinnerRecord> {
        if self.status != RoundStatus::AwaitingConfirmation || self.pending_winners.is_empty() {
            return vec![];
        }

        let winners = mem::take(&mut self.pending_winners);
        let prize = match self.current_prize() {
            Some(prize) => prize.clone(),
            None => {
                self.settle_status();
                return vec![];
            }
        };

        let records: Vec<WinnerRecord> = winners
            .iter()
            .map(|winner| WinnerRecord::new(winner.clone(), prize.clone(), timestamp))
            .collect();

        self.winner_records.extend(records.iter().cloned());
        self.pool.retain(|participant| !winners.contains(participant));
        self.current_prize_index += 1;
        self.settle_status();

        msg!(
            "Confirmed {} winner(s) for {}, {} left in pool",
            records.len(),
            prize.name,
            self.pool.len()
        );

        records
    }

    /// Clears the draw history and starts over at the first tier. Drawn
    /// participants are not returned to the pool.
    pub fn reset_progress(&mut self) -> Result<()> {
        require!(
            !matches!(self.status, RoundStatus::InProgress { .. }),
            LuckyDrawError::RoundInProgress
        );

        self.winner_records.clear();
        self.pending_winners.clear();
        self.current_prize_index = 0;
        self.settle_status();

        Ok(())
    }

    /// Replaces pool and history with persisted data and recomputes progress.
    pub fn restore(&mut self, participants: Vec<Participant>, records: Vec<WinnerRecord>) -> Result<()> {
        require!(
            matches!(self.status, RoundStatus::Idle | RoundStatus::Completed),
            LuckyDrawError::RoundInProgress
        );

        let records = dedupe_records(records);
        let reconciled = reconcile(&self.prizes, &records, &participants);

        self.pool = reconciled.pool;
        self.winner_records = records;
        self.pending_winners.clear();
        self.current_prize_index = reconciled.current_prize_index;
        self.settle_status();

        Ok(())
    }

    // --- Internals ---

    fn settle_status(&mut self) {
        self.status = if self.all_prizes_drawn() {
            RoundStatus::Completed
        } else {
            RoundStatus::Idle
        };
    }

    fn require_roster_editable(&self) -> Result<()> {
        require!(
            matches!(self.status, RoundStatus::Idle | RoundStatus::Completed),
            LuckyDrawError::RoundInProgress
        );
        Ok(())
    }

    fn require_room(&self, additional: usize) -> Result<()> {
        require!(
            self.pool.len() + additional <= MAX_PARTICIPANTS,
            LuckyDrawError::TooManyParticipants
        );
        Ok(())
    }

    fn prize_mut(&mut self, prize_id: &str) -> Result<&mut Prize> {
        self.prizes
            .iter_mut()
            .find(|prize| prize.id == prize_id)
            .ok_or_else(|| LuckyDrawError::PrizeNotFound.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::random::tests::SequenceRandom;

    fn guests(ids: &[&str]) -> Vec<Participant> {
        ids.iter()
            .map(|id| Participant::with_id(id, &format!("Guest {}", id)).unwrap())
            .collect()
    }

    fn tier(id: &str, count: u32) -> Prize {
        Prize::new(id, &format!("Tier {}", id), 1, count, "#FFFFFF", "fa-medal").unwrap()
    }

    fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: LuckyDrawError) {
        assert_eq!(result.unwrap_err(), anchor_lang::error::Error::from(expected));
    }

    fn run_round<R: RandomSource>(session: &mut DrawSession, rng: &mut R, now: i64) -> Vec<WinnerRecord> {
        session.start_round().unwrap();
        session.complete_round(rng).unwrap();
        session.confirm_round(now)
    }

    #[test]
    fn test_two_tier_scenario() {
        let mut session = DrawSession::new(
            guests(&["a", "b", "c", "d", "e"]),
            vec![tier("p0", 2), tier("p1", 1)],
        )
        .unwrap();
        let mut rng = SeededRandom::new([5u8; 32]);

        assert_eq!(session.start_round().unwrap(), 2);
        let winners = session.complete_round(&mut rng).unwrap();
        assert_eq!(winners.len(), 2);
        assert_ne!(winners[0], winners[1]);
        assert_eq!(session.confirm_round(1).len(), 2);
        assert_eq!(session.pool().len(), 3);
        assert_eq!(session.current_prize_index(), 1);
        assert_eq!(session.status(), RoundStatus::Idle);

        assert_eq!(session.start_round().unwrap(), 1);
        session.complete_round(&mut rng).unwrap();
        assert_eq!(session.confirm_round(2).len(), 1);
        assert_eq!(session.pool().len(), 2);
        assert_eq!(session.current_prize_index(), 2);
        assert_eq!(session.status(), RoundStatus::Completed);
        assert!(session.all_prizes_drawn());
        assert_eq!(session.winner_records().len(), 3);
    }

    #[test]
    fn test_draw_capped_by_pool() {
        let mut session = DrawSession::new(guests(&["a", "b"]), vec![tier("p0", 5)]).unwrap();
        let mut rng = SeededRandom::new([6u8; 32]);

        assert_eq!(session.start_round().unwrap(), 2);
        assert_eq!(session.complete_round(&mut rng).unwrap().len(), 2);
        session.confirm_round(0);
        assert!(session.pool().is_empty());
        assert_eq!(session.status(), RoundStatus::Completed);
    }

    #[test]
    fn test_cannot_start() {
        let mut empty_pool = DrawSession::new(vec![], vec![tier("p0", 1)]).unwrap();
        assert_error(empty_pool.start_round(), LuckyDrawError::PoolEmpty);
        assert_eq!(empty_pool.status(), RoundStatus::Idle);

        let mut no_prizes = DrawSession::new(guests(&["a"]), vec![]).unwrap();
        assert_eq!(no_prizes.status(), RoundStatus::Completed);
        assert_error(no_prizes.start_round(), LuckyDrawError::NoCurrentPrize);

        let mut spinning = DrawSession::new(guests(&["a"]), vec![tier("p0", 1)]).unwrap();
        spinning.start_round().unwrap();
        assert_error(spinning.start_round(), LuckyDrawError::RoundInProgress);
    }

    #[test]
    fn test_complete_requires_started_round() {
        let mut session = DrawSession::new(guests(&["a"]), vec![tier("p0", 1)]).unwrap();
        let mut rng = SeededRandom::new([1u8; 32]);
        assert_error(session.complete_round(&mut rng), LuckyDrawError::RoundNotInProgress);

        session.start_round().unwrap();
        session.complete_round(&mut rng).unwrap();
        assert_error(session.complete_round(&mut rng), LuckyDrawError::RoundNotInProgress);
    }

    #[test]
    fn test_confirm_applies_once() {
        let mut session =
            DrawSession::new(guests(&["a", "b", "c"]), vec![tier("p0", 1), tier("p1", 1)]).unwrap();
        let mut rng = SeededRandom::new([8u8; 32]);

        session.start_round().unwrap();
        session.complete_round(&mut rng).unwrap();
        assert_eq!(session.confirm_round(10).len(), 1);
        assert!(session.confirm_round(10).is_empty());

        assert_eq!(session.winner_records().len(), 1);
        assert_eq!(session.current_prize_index(), 1);
        assert_eq!(session.pool().len(), 2);
    }

    #[test]
    fn test_confirm_without_selection_is_noop() {
        let mut session = DrawSession::new(guests(&["a"]), vec![tier("p0", 1)]).unwrap();
        assert!(session.confirm_round(0).is_empty());

        session.start_round().unwrap();
        assert!(session.confirm_round(0).is_empty());
        assert_eq!(session.current_prize_index(), 0);
        assert!(matches!(session.status(), RoundStatus::InProgress { .. }));
    }

    #[test]
    fn test_confirmation_shares_timestamp_and_prize() {
        let mut session = DrawSession::new(guests(&["a", "b", "c"]), vec![tier("p0", 3)]).unwrap();
        let records = run_round(&mut session, &mut SeededRandom::new([4u8; 32]), 777);

        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.timestamp == 777 && r.prize.id == "p0"));
        assert_eq!(session.winners_for("p0").count(), 3);
    }

    #[test]
    fn test_reset_keeps_drawn_participants_out() {
        let mut session =
            DrawSession::new(guests(&["a", "b", "c", "d"]), vec![tier("p0", 2), tier("p1", 1)]).unwrap();
        run_round(&mut session, &mut SeededRandom::new([3u8; 32]), 1);
        assert_eq!(session.pool().len(), 2);

        session.reset_progress().unwrap();
        assert_eq!(session.current_prize_index(), 0);
        assert!(session.winner_records().is_empty());
        assert_eq!(session.pool().len(), 2);
        assert_eq!(session.status(), RoundStatus::Idle);
    }

    #[test]
    fn test_reset_rejected_while_spinning() {
        let mut session = DrawSession::new(guests(&["a"]), vec![tier("p0", 1)]).unwrap();
        session.start_round().unwrap();
        assert_error(session.reset_progress(), LuckyDrawError::RoundInProgress);
    }

    #[test]
    fn test_reset_drops_pending_winners() {
        let mut session = DrawSession::new(guests(&["a", "b"]), vec![tier("p0", 1)]).unwrap();
        session.start_round().unwrap();
        session.complete_round(&mut SeededRandom::new([1u8; 32])).unwrap();

        session.reset_progress().unwrap();
        assert!(session.pending_winners().is_empty());
        assert_eq!(session.pool().len(), 2);
        assert!(session.confirm_round(5).is_empty());
    }

    #[test]
    fn test_prize_index_is_monotonic() {
        let prizes = vec![tier("p0", 1), tier("p1", 2), tier("p2", 1)];
        let mut session = DrawSession::new(guests(&["a", "b", "c", "d", "e", "f"]), prizes).unwrap();
        let mut rng = SeededRandom::new([12u8; 32]);

        let mut last = session.current_prize_index();
        while session.status() != RoundStatus::Completed {
            session.start_round().unwrap();
            assert_eq!(session.current_prize_index(), last);
            session.complete_round(&mut rng).unwrap();
            assert_eq!(session.current_prize_index(), last);
            session.confirm_round(0);
            assert_eq!(session.current_prize_index(), last + 1);
            last = session.current_prize_index();
        }
        assert_eq!(last, 3);
    }

    #[test]
    fn test_view_hides_pending_winners() {
        let mut session = DrawSession::new(guests(&["a", "b", "c"]), vec![tier("p0", 1)]).unwrap();
        session.start_round().unwrap();
        assert!(session.view().is_round_in_progress);
        assert_eq!(session.view().pool.len(), 3);

        // zero words draw the first pool member
        let winners = session.complete_round(&mut SequenceRandom::new(vec![0])).unwrap();
        let view = session.view();
        assert!(!view.is_round_in_progress);
        assert_eq!(view.pending_winners, &winners[..]);
        assert_eq!(view.pool.len(), 2);
        assert!(!view.pool.contains(&&winners[0]));
    }

    #[test]
    fn test_roster_editing() {
        let mut session = DrawSession::new(vec![], vec![tier("p0", 1)]).unwrap();
        let mut rng = SeededRandom::new([21u8; 32]);

        let id = session.add_participant(" Togepi ", &mut rng).unwrap().id.clone();
        assert_eq!(session.add_batch_input("Onix,\nGolem, ,Geodude", &mut rng).unwrap(), 3);
        assert_eq!(session.pool().len(), 4);
        assert_eq!(session.pool()[0].name, "Togepi");
        assert!(session.add_participant("   ", &mut rng).is_err());

        assert!(session.remove_participant(&id).unwrap());
        assert!(!session.remove_participant(&id).unwrap());
        assert_eq!(session.pool().len(), 3);

        let ids: Vec<&str> = session.pool().iter().map(|p| p.id.as_str()).collect();
        for (index, id) in ids.iter().enumerate() {
            assert!(!ids[..index].contains(id));
        }
    }

    #[test]
    fn test_batch_add_is_all_or_nothing() {
        let mut session = DrawSession::new(vec![], vec![tier("p0", 1)]).unwrap();
        let mut rng = SeededRandom::new([22u8; 32]);
        let names = vec!["Ok".to_string(), "x".repeat(MAX_NAME_LEN + 1)];

        assert!(session.add_participants(&names, &mut rng).is_err());
        assert!(session.pool().is_empty());
    }

    #[test]
    fn test_roster_locked_during_round() {
        let mut session = DrawSession::new(guests(&["a", "b"]), vec![tier("p0", 1)]).unwrap();
        let mut rng = SeededRandom::new([2u8; 32]);
        session.start_round().unwrap();

        assert_error(session.add_participant("Late", &mut rng), LuckyDrawError::RoundInProgress);
        assert_error(session.remove_participant("a"), LuckyDrawError::RoundInProgress);
        assert_error(session.clear_all(), LuckyDrawError::RoundInProgress);
    }

    #[test]
    fn test_clear_all_resets_everything() {
        let mut session =
            DrawSession::new(guests(&["a", "b", "c"]), vec![tier("p0", 1), tier("p1", 1)]).unwrap();
        run_round(&mut session, &mut SeededRandom::new([7u8; 32]), 1);

        session.clear_all().unwrap();
        assert!(session.pool().is_empty());
        assert!(session.winner_records().is_empty());
        assert_eq!(session.current_prize_index(), 0);
    }

    #[test]
    fn test_prize_count_edit_keeps_running_draw_count() {
        let mut session =
            DrawSession::new(guests(&["a", "b", "c", "d"]), vec![tier("p0", 1)]).unwrap();
        assert_eq!(session.start_round().unwrap(), 1);

        session.update_prize_count("p0", 3).unwrap();
        let winners = session.complete_round(&mut SeededRandom::new([1u8; 32])).unwrap();
        assert_eq!(winners.len(), 1);
        assert_eq!(session.prizes()[0].count, 3);
    }

    #[test]
    fn test_prize_edits_validated() {
        let mut session = DrawSession::new(vec![], vec![tier("p0", 1)]).unwrap();

        assert_error(session.update_prize_count("p0", 0), LuckyDrawError::InvalidPrizeCount);
        assert_error(session.update_prize_count("nope", 2), LuckyDrawError::PrizeNotFound);
        assert_error(session.update_prize_name("p0", "  "), LuckyDrawError::InvalidPrizeName);

        session.update_prize_name("p0", " Grand Prize ").unwrap();
        assert_eq!(session.prizes()[0].name, "Grand Prize");
    }

    #[test]
    fn test_restore_reproduces_completed_run() {
        let participants = guests(&["a", "b", "c", "d", "e", "f", "g"]);
        let prizes = vec![tier("p0", 3), tier("p1", 2), tier("p2", 1)];
        let mut original = DrawSession::new(participants.clone(), prizes.clone()).unwrap();
        let mut rng = SeededRandom::new([13u8; 32]);
        while original.status() != RoundStatus::Completed {
            run_round(&mut original, &mut rng, 100);
        }

        let mut resumed = DrawSession::new(vec![], prizes).unwrap();
        resumed
            .restore(participants, original.winner_records().to_vec())
            .unwrap();

        assert_eq!(resumed.current_prize_index(), 3);
        assert_eq!(resumed.status(), RoundStatus::Completed);
        assert_eq!(resumed.pool(), original.pool());
        assert_eq!(resumed.pool().len(), 1);
    }

    #[test]
    fn test_restore_after_round_capped_by_pool() {
        let participants = guests(&["a", "b", "c"]);
        let prizes = vec![tier("p0", 2), tier("p1", 2)];
        let mut original = DrawSession::new(participants.clone(), prizes.clone()).unwrap();
        let mut rng = SeededRandom::new([15u8; 32]);
        while original.status() != RoundStatus::Completed {
            run_round(&mut original, &mut rng, 100);
        }
        assert_eq!(original.current_prize_index(), 2);
        assert_eq!(original.winners_for("p1").count(), 1);

        let mut resumed = DrawSession::new(vec![], prizes).unwrap();
        resumed
            .restore(participants, original.winner_records().to_vec())
            .unwrap();

        assert_eq!(resumed.current_prize_index(), 2);
        assert_eq!(resumed.status(), RoundStatus::Completed);
        assert!(resumed.pool().is_empty());
        assert_error(resumed.start_round(), LuckyDrawError::NoCurrentPrize);
    }

    #[test]
    fn test_restore_resumes_mid_run() {
        let participants = guests(&["a", "b", "c", "d", "e"]);
        let prizes = vec![tier("p0", 2), tier("p1", 1)];
        let mut original = DrawSession::new(participants.clone(), prizes.clone()).unwrap();
        run_round(&mut original, &mut SeededRandom::new([14u8; 32]), 100);

        let mut resumed = DrawSession::new(vec![], prizes).unwrap();
        resumed
            .restore(participants, original.winner_records().to_vec())
            .unwrap();

        assert_eq!(resumed.current_prize_index(), 1);
        assert_eq!(resumed.status(), RoundStatus::Idle);
        assert_eq!(resumed.pool().len(), 3);
    }

    #[test]
    fn test_restore_drops_duplicate_records() {
        let prizes = vec![tier("p0", 2)];
        let mut session = DrawSession::new(vec![], prizes.clone()).unwrap();
        let record = WinnerRecord::new(guests(&["a"]).remove(0), prizes[0].clone(), 1);

        session
            .restore(guests(&["a", "b"]), vec![record.clone(), record])
            .unwrap();
        assert_eq!(session.winner_records().len(), 1);
        assert_eq!(session.current_prize_index(), 0);
        assert_eq!(session.pool(), &guests(&["b"])[..]);
    }

    #[test]
    fn test_new_rejects_duplicate_participants() {
        assert_error(
            DrawSession::new(guests(&["a", "a"]), vec![]),
            LuckyDrawError::DuplicateParticipantId,
        );
    }
}
