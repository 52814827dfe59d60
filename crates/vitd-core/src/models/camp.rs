use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CampStatus {
    Scheduled,
    Active,
    Completed,
}

/// A screening camp held at a doctor's clinic.
///
/// The camp owns the patient numbering: `total_patients` is the last
/// number handed out and only ever grows.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Camp {
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub camp_date: jiff::civil::Date,
    pub status: CampStatus,
    #[serde(default)]
    pub total_patients: u32,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Camp {
    /// Camps dated after `today` start out scheduled, others are active.
    pub fn new(doctor_id: Uuid, camp_date: jiff::civil::Date, today: jiff::civil::Date) -> Self {
        let status = if camp_date > today {
            CampStatus::Scheduled
        } else {
            CampStatus::Active
        };
        let now = jiff::Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            doctor_id,
            camp_date,
            status,
            total_patients: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Hand out the next patient number for this camp.
    pub fn next_patient_number(&mut self) -> u32 {
        self.total_patients += 1;
        self.updated_at = jiff::Timestamp::now();
        self.total_patients
    }
}
