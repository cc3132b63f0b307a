mod common;

use chrono::NaiveDate;

use common::*;
use rust_school_admin::errors::SchoolAdminError;
use rust_school_admin::models::Viewer;
use rust_school_admin::models::announcements::requests::AnnouncementRequest;
use rust_school_admin::models::attendances::requests::AttendanceRequest;
use rust_school_admin::models::auth::entities::UserRole;
use rust_school_admin::models::events::requests::EventRequest;
use rust_school_admin::models::people::UserSex;
use rust_school_admin::services::{dashboard, forms};
use rust_school_admin::storage::{ScheduleOwner, Storage};

async fn record_attendance(
    ctx: &TestContext,
    student_id: &str,
    lesson_id: i64,
    date: chrono::DateTime<chrono::Utc>,
    present: bool,
) {
    ctx.storage
        .create_attendance(&AttendanceRequest {
            id: None,
            date,
            present,
            student_id: student_id.to_string(),
            lesson_id,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn counts_people_by_role_and_sex() {
    let ctx = setup().await;
    let school = seed_school(&ctx).await;
    ctx.storage
        .create_student(
            "student_a",
            &student_request("student_a", "555-0301", &school, UserSex::Male),
        )
        .await
        .unwrap();
    ctx.storage
        .create_student(
            "student_b",
            &student_request("student_b", "555-0302", &school, UserSex::Female),
        )
        .await
        .unwrap();

    let roles = ctx.storage.count_role_members().await.unwrap();
    assert_eq!(roles.admins, 0);
    assert_eq!(roles.teachers, 2);
    assert_eq!(roles.students, 2);
    assert_eq!(roles.parents, 1);

    let sexes = ctx.storage.count_students_by_sex().await.unwrap();
    assert_eq!(sexes.boys, 1);
    assert_eq!(sexes.girls, 1);
}

#[tokio::test]
async fn weekly_attendance_covers_monday_until_now() {
    let ctx = setup().await;
    let school = seed_school(&ctx).await;
    let lesson = seed_lesson(&ctx, &school, "Algebra", school.class_id, &school.teacher_a).await;
    ctx.storage
        .create_student(
            "student_a",
            &student_request("student_a", "555-0301", &school, UserSex::Male),
        )
        .await
        .unwrap();

    // 2026-10-15 是周四
    let now = at(2026, 10, 15, 12, 0);
    record_attendance(&ctx, "student_a", lesson.id, at(2026, 10, 12, 9, 0), true).await;
    record_attendance(&ctx, "student_a", lesson.id, at(2026, 10, 12, 14, 0), true).await;
    record_attendance(&ctx, "student_a", lesson.id, at(2026, 10, 12, 15, 0), false).await;
    record_attendance(&ctx, "student_a", lesson.id, at(2026, 10, 14, 9, 0), true).await;
    // 上周五和晚于 now 的记录不计
    record_attendance(&ctx, "student_a", lesson.id, at(2026, 10, 9, 9, 0), true).await;
    record_attendance(&ctx, "student_a", lesson.id, at(2026, 10, 15, 13, 0), false).await;

    let days = dashboard::weekly_attendance(&ctx.storage, now).await.unwrap();
    let summary: Vec<(&str, u64, u64)> = days
        .iter()
        .map(|d| (d.name.as_str(), d.present, d.absent))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Mon", 2, 1),
            ("Tue", 0, 0),
            ("Wed", 1, 0),
            ("Thu", 0, 0),
            ("Fri", 0, 0),
        ]
    );
}

#[tokio::test]
async fn schedule_marks_full_working_day_lessons() {
    let ctx = setup().await;
    let school = seed_school(&ctx).await;
    seed_lesson(&ctx, &school, "Algebra", school.class_id, &school.teacher_a).await;
    let mut long_day = lesson_request(
        "Field Trip",
        school.other_class_id,
        &school.teacher_a,
        &school,
    );
    long_day.start_time = at(2026, 10, 13, 8, 30);
    long_day.end_time = at(2026, 10, 13, 17, 0);
    ctx.storage.create_lesson(&long_day).await.unwrap();
    seed_lesson(&ctx, &school, "Physics", school.class_id, &school.teacher_b).await;

    let owner = ScheduleOwner::Teacher(school.teacher_a.clone());
    let entries = dashboard::schedule(&ctx.storage, &owner).await.unwrap();
    let flags: Vec<(&str, bool)> = entries.iter().map(|e| (e.title.as_str(), e.all_day)).collect();
    assert_eq!(flags, vec![("Algebra", false), ("Field Trip", true)]);

    let class_entries = dashboard::schedule(&ctx.storage, &ScheduleOwner::Class(school.class_id))
        .await
        .unwrap();
    assert_eq!(class_entries.len(), 2);
}

#[tokio::test]
async fn schedule_owner_defaults_to_calling_teacher() {
    let owner = dashboard::schedule_owner(&query(teacher("teacher_a"), &[])).unwrap();
    assert_eq!(owner, ScheduleOwner::Teacher("teacher_a".to_string()));

    let owner = dashboard::schedule_owner(&query(admin(), &[("classId", "7")])).unwrap();
    assert_eq!(owner, ScheduleOwner::Class(7));

    let err = dashboard::schedule_owner(&query(admin(), &[])).unwrap_err();
    assert!(matches!(err, SchoolAdminError::Validation(_)));
}

#[tokio::test]
async fn events_on_a_day_follow_class_visibility() {
    let ctx = setup().await;
    let school = seed_school(&ctx).await;
    ctx.storage
        .create_student(
            "student_a",
            &student_request("student_a", "555-0301", &school, UserSex::Male),
        )
        .await
        .unwrap();

    let event = |title: &str, day: u32, class_id: Option<i64>| EventRequest {
        id: None,
        title: title.to_string(),
        description: "See you there".to_string(),
        start_time: at(2026, 10, day, 10, 0),
        end_time: at(2026, 10, day, 12, 0),
        class_id,
    };
    for req in [
        event("Sports day", 15, None),
        event("1A trip", 15, Some(school.class_id)),
        event("1B trip", 15, Some(school.other_class_id)),
        event("Open house", 16, None),
    ] {
        ctx.storage.create_event(&req).await.unwrap();
    }

    let date = dashboard::parse_date(Some("2026-10-15")).unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2026, 10, 15).unwrap());

    let for_admin = dashboard::events_on(&ctx.storage, &admin(), date).await.unwrap();
    assert_eq!(for_admin.items.len(), 3);

    let student = Viewer::new(UserRole::Student, "student_a");
    let for_student = dashboard::events_on(&ctx.storage, &student, date).await.unwrap();
    let titles: Vec<&str> = for_student.items.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles.len(), 2);
    assert!(titles.contains(&"Sports day"));
    assert!(titles.contains(&"1A trip"));

    assert!(dashboard::parse_date(Some("15/10/2026")).is_err());
}

#[tokio::test]
async fn latest_announcements_are_newest_first() {
    let ctx = setup().await;
    let school = seed_school(&ctx).await;

    for (day, class_id) in [
        (1, None),
        (2, None),
        (3, Some(school.other_class_id)),
        (4, None),
        (5, None),
    ] {
        ctx.storage
            .create_announcement(&AnnouncementRequest {
                id: None,
                title: format!("Notice {day}"),
                description: "Please read".to_string(),
                date: at(2026, 10, day, 8, 0),
                class_id,
            })
            .await
            .unwrap();
    }

    let latest = ctx
        .storage
        .list_latest_announcements(&admin(), dashboard::LATEST_ANNOUNCEMENTS)
        .await
        .unwrap();
    let titles: Vec<&str> = latest.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Notice 5", "Notice 4", "Notice 3"]);

    // 教师没有在 1B 上课，看不到 1B 的公告
    let for_teacher = ctx
        .storage
        .list_latest_announcements(&teacher(&school.teacher_a), dashboard::LATEST_ANNOUNCEMENTS)
        .await
        .unwrap();
    let titles: Vec<&str> = for_teacher.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Notice 5", "Notice 4", "Notice 2"]);
}

#[tokio::test]
async fn form_data_depends_on_table() {
    let ctx = setup().await;
    let school = seed_school(&ctx).await;
    seed_lesson(&ctx, &school, "Algebra", school.class_id, &school.teacher_a).await;
    seed_lesson(&ctx, &school, "Physics", school.class_id, &school.teacher_b).await;

    let student_form = forms::related_data(&ctx.storage, &admin(), "student").await.unwrap();
    assert_eq!(student_form.parents.len(), 1);
    assert_eq!(student_form.grades.len(), 1);
    assert_eq!(student_form.classes.len(), 2);
    assert!(student_form.teachers.is_empty());

    let exam_form = forms::related_data(&ctx.storage, &teacher(&school.teacher_a), "exam")
        .await
        .unwrap();
    assert_eq!(exam_form.lessons.len(), 1);
    assert_eq!(exam_form.lessons[0].label, "Algebra");

    let err = forms::related_data(&ctx.storage, &admin(), "cafeteria")
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolAdminError::Validation(_)));
}
