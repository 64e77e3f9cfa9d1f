use crate::{
    constants::*,
    error::LuckyDrawError,
    session::{ActivityStore, DrawSession, RoundStatus, SceneView},
    state::*,
    utils::*,
};
use anchor_lang::prelude::*;

/// Outcome of a confirmation. `synced` is `None` when nothing was sent to
/// the store (no new records or no attached activity).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    pub records: Vec<WinnerRecord>,
    pub synced: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyncReport {
    pub activity_id: u64,
    pub participants_saved: bool,
    pub winners_saved: Option<bool>, // None when there was no history to save.
}

/// Counts are `None` when that load failed and local data was kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadReport {
    pub participants_loaded: Option<usize>,
    pub records_loaded: Option<usize>,
    pub current_prize_index: usize,
}

/// A draw session wired to a store and a random source.
///
/// Store failures never roll back local state: they are logged and reported
/// to the caller, who decides whether to retry.
pub struct Lottery<S: ActivityStore, R: RandomSource> {
    session: DrawSession,
    store: S,
    rng: R,
    activity_id: Option<u64>,
}

impl<S: ActivityStore, R: RandomSource> Lottery<S, R> {
    pub fn new(session: DrawSession, store: S, rng: R) -> Self {
        Self {
            session,
            store,
            rng,
            activity_id: None,
        }
    }

    /// Empty roster with the three default tiers.
    pub fn with_default_tiers(store: S, mut rng: R) -> Result<Self> {
        let session = DrawSession::new(vec![], Prize::default_tiers(&mut rng))?;
        Ok(Self::new(session, store, rng))
    }

    pub fn session(&self) -> &DrawSession {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn activity_id(&self) -> Option<u64> {
        self.activity_id
    }

    pub fn view(&self) -> SceneView<'_> {
        self.session.view()
    }

    // --- Roster and prizes ---

    pub fn add_participant(&mut self, name: &str) -> Result<&Participant> {
        self.session.add_participant(name, &mut self.rng)
    }

    pub fn add_batch_input(&mut self, input: &str) -> Result<usize> {
        self.session.add_batch_input(input, &mut self.rng)
    }

    pub fn remove_participant(&mut self, id: &str) -> Result<bool> {
        self.session.remove_participant(id)
    }

    pub fn clear_all(&mut self) -> Result<()> {
        self.session.clear_all()
    }

    pub fn update_prize_name(&mut self, prize_id: &str, name: &str) -> Result<()> {
        self.session.update_prize_name(prize_id, name)
    }

    pub fn update_prize_count(&mut self, prize_id: &str, count: u32) -> Result<()> {
        self.session.update_prize_count(prize_id, count)
    }

    /// Count as typed into the form; see `parse_prize_count`.
    pub fn update_prize_count_input(&mut self, prize_id: &str, input: &str) -> Result<()> {
        self.session.update_prize_count(prize_id, parse_prize_count(input))
    }

    // --- Draw ---

    pub fn start_round(&mut self) -> Result<u32> {
        self.session.start_round()
    }

    pub fn complete_round(&mut self) -> Result<Vec<Participant>> {
        self.session.complete_round(&mut self.rng)
    }

    pub fn confirm_round(&mut self, now: i64) -> Confirmation {
        let records = self.session.confirm_round(now);

        let synced = match self.activity_id {
            Some(activity_id) if !records.is_empty() => {
                match self.store.save_winner_records(activity_id, &records) {
                    Ok(()) => Some(true),
                    Err(e) => {
                        msg!("Saving winners of activity {} failed: {}", activity_id, e);
                        Some(false)
                    }
                }
            }
            _ => None,
        };

        Confirmation { records, synced }
    }

    pub fn reset_progress(&mut self) -> Result<()> {
        self.session.reset_progress()
    }

    // --- Store ---

    /// Points the session at an existing activity. Nothing is loaded yet.
    pub fn attach_activity(&mut self, activity_id: u64) {
        self.activity_id = Some(activity_id);
    }

    /// Newest first; `None` uses the default page of `ACTIVITY_LIST_LIMIT`.
    pub fn list_activities(&self, limit: Option<usize>) -> Result<Vec<Activity>> {
        self.store
            .list_activities(limit.unwrap_or(ACTIVITY_LIST_LIMIT))
    }

    /// Saves the pool and the whole winner history, creating the activity
    /// first when none is attached. Only a failed creation is an error.
    pub fn save(&mut self, name: &str, now: i64) -> Result<SyncReport> {
        let activity_id = match self.activity_id {
            Some(activity_id) => activity_id,
            None => {
                let activity_id = self.store.create_activity(name, self.session.prizes(), now)?;
                self.activity_id = Some(activity_id);
                activity_id
            }
        };

        let participants_saved = match self
            .store
            .save_participants(activity_id, self.session.pool())
        {
            Ok(()) => true,
            Err(e) => {
                msg!("Saving participants of activity {} failed: {}", activity_id, e);
                false
            }
        };

        let records = self.session.winner_records();
        let winners_saved = if records.is_empty() {
            None
        } else {
            match self.store.save_winner_records(activity_id, records) {
                Ok(()) => Some(true),
                Err(e) => {
                    msg!("Saving winners of activity {} failed: {}", activity_id, e);
                    Some(false)
                }
            }
        };

        Ok(SyncReport {
            activity_id,
            participants_saved,
            winners_saved,
        })
    }

    /// Replaces local data with the attached activity's saved roster and
    /// history, then recomputes progress. A failed or empty load keeps the
    /// local data for that part.
    pub fn load(&mut self) -> Result<LoadReport> {
        let activity_id = self.activity_id.ok_or(LuckyDrawError::NoActiveActivity)?;
        require!(
            matches!(
                self.session.status(),
                RoundStatus::Idle | RoundStatus::Completed
            ),
            LuckyDrawError::RoundInProgress
        );

        let (participants, participants_loaded) = match self.store.load_participants(activity_id) {
            Ok(list) => {
                let count = list.len();
                let list = if list.is_empty() {
                    self.session.pool().to_vec()
                } else {
                    list
                };
                (list, Some(count))
            }
            Err(e) => {
                msg!("Loading participants of activity {} failed: {}", activity_id, e);
                (self.session.pool().to_vec(), None)
            }
        };

        let (records, records_loaded) = match self
            .store
            .load_winner_records(activity_id, self.session.prizes())
        {
            Ok(list) => {
                let count = list.len();
                let list = if list.is_empty() {
                    self.session.winner_records().to_vec()
                } else {
                    list
                };
                (list, Some(count))
            }
            Err(e) => {
                msg!("Loading winners of activity {} failed: {}", activity_id, e);
                (self.session.winner_records().to_vec(), None)
            }
        };

        self.session.restore(participants, records)?;

        Ok(LoadReport {
            participants_loaded,
            records_loaded,
            current_prize_index: self.session.current_prize_index(),
        })
    }

    /// Deletes an activity; detaches the session if it was the attached one.
    pub fn delete_activity(&mut self, activity_id: u64) -> Result<()> {
        self.store.delete_activity(activity_id)?;

        if self.activity_id == Some(activity_id) {
            self.activity_id = None;
        }

        Ok(())
    }
}
