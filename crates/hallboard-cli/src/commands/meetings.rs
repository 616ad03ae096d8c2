use anyhow::Result;
use chrono::{Local, NaiveTime};

use hallboard_core::meeting::next_meeting;
use hallboard_core::{AppConfig, MeetingRecord};

/// Marker shown in front of a meeting in the listing
fn marker(meeting: &MeetingRecord, next: Option<&MeetingRecord>, now: NaiveTime) -> &'static str {
    if meeting.is_in_progress(now) {
        "now "
    } else if next.is_some_and(|n| std::ptr::eq(n, meeting)) {
        "next"
    } else {
        "    "
    }
}

fn render(meetings: &[MeetingRecord], now: NaiveTime) -> Vec<String> {
    let next = next_meeting(meetings, now);
    let mut lines = Vec::with_capacity(meetings.len() * 2);

    for meeting in meetings {
        let attendees = match meeting.attendees {
            0 => String::new(),
            1 => " (1 attendee)".to_string(),
            n => format!(" ({} attendees)", n),
        };
        let invalid = if meeting.start_time().is_none() {
            " [invalid time range]"
        } else {
            ""
        };

        lines.push(format!(
            "  {} {}  {}{}{}",
            marker(meeting, next, now),
            meeting.time_range,
            meeting.title.en,
            attendees,
            invalid
        ));
        if !meeting.title.ar.is_empty() {
            lines.push(format!("         {}", meeting.title.ar));
        }
    }

    lines
}

pub fn run(config: &AppConfig) -> Result<()> {
    let meetings = config.meetings();
    let now = Local::now().time();

    if config.meetings.is_empty() {
        println!("No meetings configured; showing the built-in schedule.");
        println!("\nTo add meetings, append [[meetings]] tables to the config file.\n");
    }

    println!("Meetings ({}):\n", meetings.len());
    for line in render(&meetings, now) {
        println!("{}", line);
    }

    Ok(())
}
