mod common;

use common::*;
use rust_school_admin::errors::SchoolAdminError;
use rust_school_admin::identity::IdentityProvider;
use rust_school_admin::models::ActionResult;
use rust_school_admin::models::auth::entities::UserRole;
use rust_school_admin::models::common::action::DUPLICATE_ENTRY_MESSAGE;
use rust_school_admin::models::exams::requests::ExamRequest;
use rust_school_admin::models::people::UserSex;
use rust_school_admin::models::subjects::requests::SubjectRequest;
use rust_school_admin::models::Viewer;
use rust_school_admin::runtime::lifetime::startup::seed_admin;
use rust_school_admin::services::actions::into_action_result;
use rust_school_admin::services::{exams, lessons, students, subjects, teachers};
use rust_school_admin::storage::Storage;

fn exam_request(id: Option<i64>, lesson_id: i64) -> ExamRequest {
    ExamRequest {
        id,
        title: "Midterm".to_string(),
        start_time: at(2026, 11, 2, 9, 0),
        end_time: at(2026, 11, 2, 10, 30),
        lesson_id,
    }
}

#[tokio::test]
async fn create_teacher_persists_row_and_account() {
    let ctx = setup().await;

    let outcome = teachers::actions::create_teacher(
        &ctx.storage,
        &ctx.identity,
        &admin(),
        teacher_request("grace", "555-1000"),
    )
    .await
    .unwrap();
    assert!(outcome.success);
    assert!(!outcome.error);
    assert_eq!(outcome.message.as_deref(), Some("Teacher created successfully!"));

    let listed = ctx
        .storage
        .list_teachers(&query(admin(), &[("search", "grace")]))
        .await
        .unwrap();
    assert_eq!(listed.pagination.total, 1);

    let account = ctx
        .identity
        .verify_credentials("grace", PASSWORD)
        .await
        .unwrap()
        .expect("account exists");
    assert_eq!(account.id, listed.items[0].id);
    assert_eq!(account.role, UserRole::Teacher);
}

#[tokio::test]
async fn duplicate_username_is_reported_as_duplicate_entry() {
    let ctx = setup().await;
    teachers::actions::create_teacher(
        &ctx.storage,
        &ctx.identity,
        &admin(),
        teacher_request("grace", "555-1000"),
    )
    .await
    .unwrap();

    let err = teachers::actions::create_teacher(
        &ctx.storage,
        &ctx.identity,
        &admin(),
        teacher_request("grace", "555-1001"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SchoolAdminError::DuplicateEntry(_)));

    let result = ActionResult::from_error(&err);
    assert!(!result.success);
    assert!(result.error);
    assert_eq!(result.message.as_deref(), Some(DUPLICATE_ENTRY_MESSAGE));

    let listed = ctx.storage.list_teachers(&query(admin(), &[])).await.unwrap();
    assert_eq!(listed.pagination.total, 1);
}

#[tokio::test]
async fn failed_insert_removes_new_account() {
    let ctx = setup().await;
    // 业务表中已有同名记录，但身份提供方里没有
    ctx.storage
        .create_teacher("legacy_1", &teacher_request("grace", "555-1000"))
        .await
        .unwrap();

    let err = teachers::actions::create_teacher(
        &ctx.storage,
        &ctx.identity,
        &admin(),
        teacher_request("grace", "555-1001"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SchoolAdminError::DuplicateEntry(_)));

    let orphan = ctx
        .identity
        .verify_credentials("grace", PASSWORD)
        .await
        .unwrap();
    assert!(orphan.is_none());
}

#[tokio::test]
async fn delete_missing_entity_is_not_found() {
    let ctx = setup().await;

    let err =
        teachers::actions::delete_teacher(&ctx.storage, &ctx.identity, &admin(), "user_missing")
            .await
            .unwrap_err();
    assert!(matches!(err, SchoolAdminError::NotFound(_)));
    assert_eq!(err.message(), "Teacher not found.");

    let result =
        into_action_result(lessons::actions::delete_lesson(&ctx.storage, &admin(), 404).await);
    assert!(!result.success);
    assert!(result.error);
    assert_eq!(result.message.as_deref(), Some("Lesson not found."));
}

#[tokio::test]
async fn delete_teacher_removes_account() {
    let ctx = setup().await;
    teachers::actions::create_teacher(
        &ctx.storage,
        &ctx.identity,
        &admin(),
        teacher_request("grace", "555-1000"),
    )
    .await
    .unwrap();
    let id = ctx
        .storage
        .list_teachers(&query(admin(), &[]))
        .await
        .unwrap()
        .items
        .remove(0)
        .id;

    let outcome = teachers::actions::delete_teacher(&ctx.storage, &ctx.identity, &admin(), &id)
        .await
        .unwrap();
    assert_eq!(outcome.message.as_deref(), Some("Teacher deleted successfully!"));
    assert!(ctx.storage.get_teacher(&id).await.unwrap().is_none());
    assert!(ctx.identity.get_account(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn update_teacher_renames_account() {
    let ctx = setup().await;
    teachers::actions::create_teacher(
        &ctx.storage,
        &ctx.identity,
        &admin(),
        teacher_request("grace", "555-1000"),
    )
    .await
    .unwrap();
    let id = ctx
        .storage
        .list_teachers(&query(admin(), &[]))
        .await
        .unwrap()
        .items
        .remove(0)
        .id;

    let mut req = teacher_request("grace_h", "555-1000");
    req.id = Some(id.clone());
    req.account.password = None;
    let outcome = teachers::actions::update_teacher(&ctx.storage, &ctx.identity, &admin(), req)
        .await
        .unwrap();
    assert!(outcome.success);

    // 未提供密码时保留原密码
    let account = ctx
        .identity
        .verify_credentials("grace_h", PASSWORD)
        .await
        .unwrap()
        .expect("renamed account");
    assert_eq!(account.id, id);
    assert_eq!(
        ctx.storage.get_teacher(&id).await.unwrap().unwrap().teacher.username,
        "grace_h"
    );
}

#[tokio::test]
async fn update_without_id_is_rejected() {
    let ctx = setup().await;
    let school = seed_school(&ctx).await;

    let err = lessons::actions::update_lesson(
        &ctx.storage,
        &admin(),
        lesson_request("Algebra", school.class_id, &school.teacher_a, &school),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SchoolAdminError::Validation(_)));
    assert_eq!(err.message(), "Lesson ID is missing");

    let err = teachers::actions::update_teacher(
        &ctx.storage,
        &ctx.identity,
        &admin(),
        teacher_request("grace", "555-1000"),
    )
    .await
    .unwrap_err();
    assert_eq!(err.message(), "Teacher ID is missing");
}

#[tokio::test]
async fn non_admin_cannot_write_admin_entities() {
    let ctx = setup().await;

    let err = subjects::actions::create_subject(
        &ctx.storage,
        &teacher("teacher_a"),
        SubjectRequest {
            id: None,
            name: "Art".to_string(),
            teachers: vec![],
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SchoolAdminError::Authorization(_)));
    assert_eq!(err.message(), "You are not authorized to create a subject.");

    let err = teachers::actions::delete_teacher(
        &ctx.storage,
        &ctx.identity,
        &Viewer::new(UserRole::Parent, "parent_a"),
        "teacher_a",
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SchoolAdminError::Authorization(_)));

    let listed = ctx.storage.list_subjects(&query(admin(), &[])).await.unwrap();
    assert_eq!(listed.pagination.total, 0);
}

#[tokio::test]
async fn validation_runs_before_any_write() {
    let ctx = setup().await;
    let mut req = teacher_request("grace", "555-1000");
    req.blood_type = "C+".to_string();

    let err = teachers::actions::create_teacher(&ctx.storage, &ctx.identity, &admin(), req)
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolAdminError::Validation(_)));
    assert!(
        ctx.identity
            .verify_credentials("grace", PASSWORD)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn full_class_rejects_new_student() {
    let ctx = setup().await;
    let school = seed_school(&ctx).await;

    for (username, phone) in [("pupil_one", "555-2001"), ("pupil_two", "555-2002")] {
        students::actions::create_student(
            &ctx.storage,
            &ctx.identity,
            &admin(),
            student_request(username, phone, &school, UserSex::Male),
        )
        .await
        .unwrap();
    }

    let err = students::actions::create_student(
        &ctx.storage,
        &ctx.identity,
        &admin(),
        student_request("pupil_three", "555-2003", &school, UserSex::Female),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SchoolAdminError::Capacity(_)));
    assert_eq!(err.message(), "Class capacity is full");
    assert_eq!(ctx.storage.count_students_in_class(school.class_id).await.unwrap(), 2);
    assert!(
        ctx.identity
            .verify_credentials("pupil_three", PASSWORD)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn lesson_with_unknown_class_is_a_database_error() {
    let ctx = setup().await;
    let school = seed_school(&ctx).await;

    let result = into_action_result(
        lessons::actions::create_lesson(
            &ctx.storage,
            &admin(),
            lesson_request("Algebra", 9_999, &school.teacher_a, &school),
        )
        .await,
    );
    assert!(!result.success);
    assert!(result.message.unwrap().starts_with("Database error"));
}

#[tokio::test]
async fn teachers_manage_exams_only_for_their_lessons() {
    let ctx = setup().await;
    let school = seed_school(&ctx).await;
    let own = seed_lesson(&ctx, &school, "Algebra", school.class_id, &school.teacher_a).await;
    let other = seed_lesson(&ctx, &school, "Physics", school.class_id, &school.teacher_b).await;
    let viewer = teacher(&school.teacher_a);

    let created = exams::actions::create_exam(&ctx.storage, &viewer, exam_request(None, own.id))
        .await
        .unwrap();
    assert_eq!(created.message.as_deref(), Some("Exam created successfully!"));

    let err = exams::actions::create_exam(&ctx.storage, &viewer, exam_request(None, other.id))
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolAdminError::Authorization(_)));
    assert_eq!(
        err.message(),
        "You are not authorized to create an exam for this lesson."
    );

    let exam_id = ctx
        .storage
        .list_exams(&query(viewer.clone(), &[]))
        .await
        .unwrap()
        .items[0]
        .id;

    // 不能把考试挪到别人的课程下
    let err = exams::actions::update_exam(
        &ctx.storage,
        &viewer,
        exam_request(Some(exam_id), other.id),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SchoolAdminError::Authorization(_)));

    let err = exams::actions::delete_exam(&ctx.storage, &teacher(&school.teacher_b), exam_id)
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolAdminError::Authorization(_)));

    let student = Viewer::new(UserRole::Student, "student_a");
    let err = exams::actions::delete_exam(&ctx.storage, &student, exam_id)
        .await
        .unwrap_err();
    assert_eq!(err.message(), "You are not authorized to delete an exam.");

    exams::actions::delete_exam(&ctx.storage, &viewer, exam_id)
        .await
        .unwrap();
    assert!(ctx.storage.get_exam(exam_id).await.unwrap().is_none());
}

#[tokio::test]
async fn seeding_admin_is_idempotent() {
    let ctx = setup().await;

    seed_admin(&ctx.storage, &ctx.identity).await;
    seed_admin(&ctx.storage, &ctx.identity).await;

    assert_eq!(ctx.storage.count_admins().await.unwrap(), 1);
    let counts = ctx.storage.count_role_members().await.unwrap();
    assert_eq!(counts.admins, 1);
}
