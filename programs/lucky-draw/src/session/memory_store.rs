use crate::{constants::*, error::LuckyDrawError, session::ActivityStore, state::*};
use anchor_lang::prelude::*;
use std::collections::BTreeMap;

#[derive(Clone)]
struct StoredActivity {
    activity: Activity,
    roster: ParticipantRoster,
    winner_log: WinnerLog,
}

/// In-process store holding the same account types the program writes and
/// applying the same batch rules. Writes are not rolled back when a later
/// batch fails, matching one transaction per batch on chain.
#[derive(Clone, Default)]
pub struct MemoryStore {
    next_id: u64,
    activities: BTreeMap<u64, StoredActivity>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    fn stored(&self, activity_id: u64) -> Result<&StoredActivity> {
        self.activities
            .get(&activity_id)
            .ok_or_else(|| error!(LuckyDrawError::ActivityNotFound))
    }

    fn stored_mut(&mut self, activity_id: u64) -> Result<&mut StoredActivity> {
        self.activities
            .get_mut(&activity_id)
            .ok_or_else(|| error!(LuckyDrawError::ActivityNotFound))
    }
}

impl ActivityStore for MemoryStore {
    fn create_activity(&mut self, name: &str, prizes: &[Prize], now: i64) -> Result<u64> {
        Activity::validate_config(name, prizes)?;

        let id = self
            .next_id
            .checked_add(1)
            .ok_or(LuckyDrawError::Overflow)?;

        let activity = Activity {
            id,
            organizer: Pubkey::default(),
            authority: Pubkey::default(),
            name: name.trim().to_string(),
            prizes: prizes.to_vec(),
            participant_count: 0,
            winner_count: 0,
            created_at: now,
            updated_at: now,
            bump: 0,
        };
        let roster = ParticipantRoster {
            activity: Pubkey::default(),
            participants: vec![],
            bump: 0,
        };
        let winner_log = WinnerLog {
            activity: Pubkey::default(),
            records: vec![],
            bump: 0,
        };

        self.activities.insert(
            id,
            StoredActivity {
                activity,
                roster,
                winner_log,
            },
        );
        self.next_id = id;

        msg!("Activity {} created: {}", id, name.trim());

        Ok(id)
    }

    fn list_activities(&self, limit: usize) -> Result<Vec<Activity>> {
        let mut activities: Vec<Activity> = self
            .activities
            .values()
            .map(|stored| stored.activity.clone())
            .collect();

        activities.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        activities.truncate(limit);

        Ok(activities)
    }

    fn save_participants(&mut self, activity_id: u64, participants: &[Participant]) -> Result<()> {
        let stored = self.stored_mut(activity_id)?;

        if participants.is_empty() {
            stored.roster.apply_batch(&[], true)?;
        }
        for (index, batch) in participants.chunks(PARTICIPANT_BATCH_SIZE).enumerate() {
            stored.roster.apply_batch(batch, index == 0)?;
        }
        stored.activity.participant_count = u32::try_from(stored.roster.participants.len())
            .map_err(|_| LuckyDrawError::Overflow)?;

        Ok(())
    }

    fn load_participants(&self, activity_id: u64) -> Result<Vec<Participant>> {
        Ok(self.stored(activity_id)?.roster.participants.clone())
    }

    fn save_winner_records(&mut self, activity_id: u64, records: &[WinnerRecord]) -> Result<()> {
        let stored = self.stored_mut(activity_id)?;
        let entries: Vec<WinnerEntry> = records.iter().map(WinnerEntry::from).collect();

        for batch in entries.chunks(WINNER_BATCH_SIZE) {
            let appended = stored.winner_log.append_batch(batch)?;
            stored.activity.winner_count = stored
                .activity
                .winner_count
                .checked_add(appended)
                .ok_or(LuckyDrawError::Overflow)?;
        }

        Ok(())
    }

    fn load_winner_records(&self, activity_id: u64, known_prizes: &[Prize]) -> Result<Vec<WinnerRecord>> {
        let mut records: Vec<WinnerRecord> = self
            .stored(activity_id)?
            .winner_log
            .records
            .iter()
            .map(|entry| entry.to_record(known_prizes))
            .collect();
        records.sort_by_key(|record| record.timestamp);

        Ok(records)
    }

    fn delete_activity(&mut self, activity_id: u64) -> Result<()> {
        self.activities
            .remove(&activity_id)
            .ok_or(LuckyDrawError::ActivityNotFound)?;

        msg!("Activity {} deleted", activity_id);

        Ok(())
    }
}
