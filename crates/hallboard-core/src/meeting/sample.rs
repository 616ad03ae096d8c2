use super::models::MeetingRecord;

/// Built-in schedule shown when the config file lists no meetings
pub fn sample_meetings() -> Vec<MeetingRecord> {
    vec![
        MeetingRecord::new("08:00 - 08:30", "Morning Briefing", "الإحاطة الصباحية", 12),
        MeetingRecord::new("08:45 - 09:30", "Operations Review", "مراجعة العمليات", 8),
        MeetingRecord::new("09:45 - 10:30", "Budget Planning", "تخطيط الميزانية", 6),
        MeetingRecord::new("10:45 - 11:30", "Vendor Presentation", "عرض المورد", 15),
        MeetingRecord::new("11:45 - 12:30", "HR Committee", "لجنة الموارد البشرية", 5),
        MeetingRecord::new("13:30 - 14:15", "Project Kickoff", "انطلاق المشروع", 20),
        MeetingRecord::new("14:30 - 15:00", "IT Security Update", "تحديث أمن المعلومات", 9),
        MeetingRecord::new("15:15 - 16:00", "Quality Assurance", "ضمان الجودة", 7),
        MeetingRecord::new("16:15 - 17:00", "Executive Board", "المجلس التنفيذي", 10),
        MeetingRecord::new("17:15 - 18:00", "Training Session", "جلسة تدريبية", 25),
    ]
}
