//! 看板图表数据的整理

use chrono::{DateTime, Datelike, Duration, NaiveTime, Timelike, Utc};

use crate::models::attendances::entities::Attendance;
use crate::models::dashboard::responses::{AttendanceDay, CalendarEntry};
use crate::models::lessons::entities::Lesson;

pub const WEEKDAY_NAMES: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

const WORKDAY_START_SECS: u32 = 9 * 3600;
const WORKDAY_END_SECS: u32 = 17 * 3600;

/// 本周一 00:00 UTC（周日算作上一周）
pub fn week_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let days_since_monday = i64::from(now.weekday().num_days_from_monday());
    (now.date_naive() - Duration::days(days_since_monday))
        .and_time(NaiveTime::MIN)
        .and_utc()
}

/// 按周一到周五统计出勤，周末记录忽略
pub fn weekly_attendance(records: &[Attendance]) -> Vec<AttendanceDay> {
    let mut days: Vec<AttendanceDay> = WEEKDAY_NAMES
        .iter()
        .map(|name| AttendanceDay {
            name: name.to_string(),
            present: 0,
            absent: 0,
        })
        .collect();

    for record in records {
        let index = record.date.weekday().num_days_from_monday() as usize;
        if let Some(day) = days.get_mut(index) {
            if record.present {
                day.present += 1;
            } else {
                day.absent += 1;
            }
        }
    }
    days
}

/// 覆盖 09:00–17:00 UTC 的课程显示为全天
pub fn is_full_working_day(start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    start.num_seconds_from_midnight() <= WORKDAY_START_SECS
        && end.num_seconds_from_midnight() >= WORKDAY_END_SECS
}

pub fn calendar_entries(lessons: Vec<Lesson>) -> Vec<CalendarEntry> {
    lessons
        .into_iter()
        .map(|lesson| CalendarEntry {
            all_day: is_full_working_day(lesson.start_time, lesson.end_time),
            title: lesson.name,
            start: lesson.start_time,
            end: lesson.end_time,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn attendance(date: DateTime<Utc>, present: bool) -> Attendance {
        Attendance {
            id: 1,
            date,
            present,
            student_id: "s1".to_string(),
            lesson_id: 1,
        }
    }

    #[test]
    fn test_week_start() {
        // 2026-10-14 是周三
        assert_eq!(week_start(at(2026, 10, 14, 15, 30)), at(2026, 10, 12, 0, 0));
        assert_eq!(week_start(at(2026, 10, 12, 0, 0)), at(2026, 10, 12, 0, 0));
        // 周日
        assert_eq!(week_start(at(2026, 10, 18, 8, 0)), at(2026, 10, 12, 0, 0));
    }

    #[test]
    fn test_weekly_attendance() {
        let records = vec![
            attendance(at(2026, 10, 12, 9, 0), true),
            attendance(at(2026, 10, 12, 10, 0), false),
            attendance(at(2026, 10, 14, 9, 0), true),
            attendance(at(2026, 10, 17, 9, 0), true),
        ];
        let days = weekly_attendance(&records);

        assert_eq!(days.len(), 5);
        assert_eq!(days[0].name, "Mon");
        assert_eq!((days[0].present, days[0].absent), (1, 1));
        assert_eq!((days[2].present, days[2].absent), (1, 0));
        assert_eq!(days.iter().map(|d| d.present + d.absent).sum::<u64>(), 3);
    }

    #[test]
    fn test_full_working_day() {
        assert!(is_full_working_day(at(2026, 10, 12, 8, 30), at(2026, 10, 12, 17, 0)));
        assert!(!is_full_working_day(at(2026, 10, 12, 9, 30), at(2026, 10, 12, 17, 0)));
        assert!(!is_full_working_day(at(2026, 10, 12, 9, 0), at(2026, 10, 12, 16, 0)));
    }
}
