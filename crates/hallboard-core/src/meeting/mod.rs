mod models;
mod sample;

pub use models::{next_meeting, BilingualText, MeetingRecord};
pub use sample::sample_meetings;
