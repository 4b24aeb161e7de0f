pub mod activity;
pub mod participant;

pub use activity::{Activity, ActivityMap, StoredActivity};
pub use participant::{ExperienceLevel, Participant, StoredParticipant};
