mod common;

use common::*;
use rust_school_admin::models::ITEM_PER_PAGE;
use rust_school_admin::models::common::pagination::MAX_PAGE;
use rust_school_admin::models::Viewer;
use rust_school_admin::models::auth::entities::UserRole;
use rust_school_admin::models::people::UserSex;
use rust_school_admin::storage::Storage;

#[tokio::test]
async fn teacher_sees_only_own_lessons() {
    let ctx = setup().await;
    let school = seed_school(&ctx).await;
    for name in ["Algebra", "Geometry", "Statistics"] {
        seed_lesson(&ctx, &school, name, school.class_id, &school.teacher_a).await;
    }
    for name in ["Physics", "Chemistry"] {
        seed_lesson(&ctx, &school, name, school.other_class_id, &school.teacher_b).await;
    }

    let page = ctx
        .storage
        .list_lessons(&query(teacher(&school.teacher_a), &[]))
        .await
        .unwrap();

    assert_eq!(page.pagination.total, 3);
    assert_eq!(page.items.len(), 3);
    assert!(page.items.iter().all(|l| l.teacher_id == school.teacher_a));

    // 角色范围和显式过滤同时生效
    let crossed = ctx
        .storage
        .list_lessons(&query(
            teacher(&school.teacher_a),
            &[("teacherId", school.teacher_b.as_str())],
        ))
        .await
        .unwrap();
    assert_eq!(crossed.pagination.total, 0);
    assert!(crossed.items.is_empty());

    let everything = ctx.storage.list_lessons(&query(admin(), &[])).await.unwrap();
    assert_eq!(everything.pagination.total, 5);
}

#[tokio::test]
async fn pagination_caps_page_size_and_keeps_total() {
    let ctx = setup().await;
    let school = seed_school(&ctx).await;
    for i in 0..23 {
        let name = format!("Lesson {i}");
        seed_lesson(&ctx, &school, &name, school.class_id, &school.teacher_a).await;
    }

    let first = ctx.storage.list_lessons(&query(admin(), &[])).await.unwrap();
    assert_eq!(first.items.len() as u64, ITEM_PER_PAGE);
    assert_eq!(first.pagination.total, 23);
    assert_eq!(first.pagination.total_pages, 3);

    let last = ctx
        .storage
        .list_lessons(&query(admin(), &[("page", "3")]))
        .await
        .unwrap();
    assert_eq!(last.items.len(), 3);
    assert_eq!(last.pagination.total, 23);
    assert_eq!(last.items[0].name, "Lesson 20");

    let beyond = ctx
        .storage
        .list_lessons(&query(admin(), &[("page", "9")]))
        .await
        .unwrap();
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.pagination.total, 23);
}

#[tokio::test]
async fn invalid_page_falls_back_to_first() {
    let ctx = setup().await;
    let school = seed_school(&ctx).await;
    for i in 0..12 {
        let name = format!("Lesson {i}");
        seed_lesson(&ctx, &school, &name, school.class_id, &school.teacher_a).await;
    }

    for raw in ["abc", "0", "-2"] {
        let page = ctx
            .storage
            .list_lessons(&query(admin(), &[("page", raw)]))
            .await
            .unwrap();
        assert_eq!(page.pagination.page, 1, "page={raw}");
        assert_eq!(page.items[0].name, "Lesson 0");
    }
}

#[tokio::test]
async fn huge_page_number_returns_empty_page() {
    let ctx = setup().await;
    let school = seed_school(&ctx).await;
    for name in ["Algebra", "Geometry", "Statistics"] {
        seed_lesson(&ctx, &school, name, school.class_id, &school.teacher_a).await;
    }

    let page = ctx
        .storage
        .list_lessons(&query(admin(), &[("page", "9223372036854775807")]))
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.pagination.total, 3);
    assert_eq!(page.pagination.page, MAX_PAGE);
}

#[tokio::test]
async fn search_is_case_insensitive_and_unknown_filters_are_ignored() {
    let ctx = setup().await;
    let school = seed_school(&ctx).await;
    for name in ["Algebra", "algebra II", "Biology"] {
        seed_lesson(&ctx, &school, name, school.class_id, &school.teacher_a).await;
    }

    let found = ctx
        .storage
        .list_lessons(&query(admin(), &[("search", "ALGEBRA")]))
        .await
        .unwrap();
    assert_eq!(found.pagination.total, 2);

    let ignored = ctx
        .storage
        .list_lessons(&query(admin(), &[("colour", "blue")]))
        .await
        .unwrap();
    assert_eq!(ignored.pagination.total, 3);

    // 无法解析的数字过滤视为未提供
    let unparsed = ctx
        .storage
        .list_lessons(&query(admin(), &[("classId", "not-a-number")]))
        .await
        .unwrap();
    assert_eq!(unparsed.pagination.total, 3);
}

#[tokio::test]
async fn class_filter_narrows_lessons() {
    let ctx = setup().await;
    let school = seed_school(&ctx).await;
    seed_lesson(&ctx, &school, "Algebra", school.class_id, &school.teacher_a).await;
    seed_lesson(&ctx, &school, "Physics", school.other_class_id, &school.teacher_a).await;

    let class_id = school.other_class_id.to_string();
    let page = ctx
        .storage
        .list_lessons(&query(admin(), &[("classId", class_id.as_str())]))
        .await
        .unwrap();
    assert_eq!(page.pagination.total, 1);
    assert_eq!(page.items[0].name, "Physics");
}

#[tokio::test]
async fn students_and_parents_see_their_class() {
    let ctx = setup().await;
    let school = seed_school(&ctx).await;
    seed_lesson(&ctx, &school, "Algebra", school.class_id, &school.teacher_a).await;
    seed_lesson(&ctx, &school, "Physics", school.other_class_id, &school.teacher_b).await;
    ctx.storage
        .create_student(
            "student_a",
            &student_request("student_a", "555-0301", &school, UserSex::Male),
        )
        .await
        .unwrap();

    let as_student = ctx
        .storage
        .list_lessons(&query(Viewer::new(UserRole::Student, "student_a"), &[]))
        .await
        .unwrap();
    assert_eq!(as_student.pagination.total, 1);
    assert_eq!(as_student.items[0].class_id, school.class_id);

    let as_parent = ctx
        .storage
        .list_lessons(&query(Viewer::new(UserRole::Parent, &school.parent_id), &[]))
        .await
        .unwrap();
    assert_eq!(as_parent.pagination.total, 1);

    let stranger = ctx
        .storage
        .list_lessons(&query(Viewer::new(UserRole::Parent, "parent_z"), &[]))
        .await
        .unwrap();
    assert_eq!(stranger.pagination.total, 0);
}

#[tokio::test]
async fn teacher_sees_classes_and_students_they_teach() {
    let ctx = setup().await;
    let school = seed_school(&ctx).await;
    seed_lesson(&ctx, &school, "Algebra", school.class_id, &school.teacher_a).await;
    ctx.storage
        .create_student(
            "student_a",
            &student_request("student_a", "555-0301", &school, UserSex::Female),
        )
        .await
        .unwrap();

    let classes = ctx
        .storage
        .list_classes(&query(teacher(&school.teacher_a), &[]))
        .await
        .unwrap();
    assert_eq!(classes.pagination.total, 1);
    assert_eq!(classes.items[0].id, school.class_id);

    let students = ctx
        .storage
        .list_students(&query(teacher(&school.teacher_a), &[]))
        .await
        .unwrap();
    assert_eq!(students.pagination.total, 1);

    let none = ctx
        .storage
        .list_students(&query(teacher(&school.teacher_b), &[]))
        .await
        .unwrap();
    assert_eq!(none.pagination.total, 0);
}
