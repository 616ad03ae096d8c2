pub mod calendar;
pub mod config;
pub mod display;
pub mod error;
pub mod meeting;
pub mod scheduler;
pub mod status;

pub use calendar::{to_hijri, GregorianDate, HijriDate};
pub use config::{AppConfig, ScrollConfig, ScrollMode};
pub use display::{DisplaySnapshot, DisplaySurface, Region};
pub use error::{Error, Result};
pub use meeting::MeetingRecord;
pub use status::{StatusBoard, StatusDescriptor, StatusKey};
