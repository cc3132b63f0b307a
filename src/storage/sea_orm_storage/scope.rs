//! 按角色限定可见范围
//!
//! 每个实体一个函数，返回需要 AND 到列表查询上的条件；
//! 管理员返回 `None`。
//! 所有关联都用子查询表达，避免 join 带来的重复行。

use sea_orm::sea_query::SelectStatement;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QuerySelect, QueryTrait};

use crate::entity::{assignments, exams, lessons, students, teacher_subjects};
use crate::models::Viewer;
use crate::models::auth::entities::UserRole;

/// 教师任课的班级
pub(crate) fn class_ids_taught_by(teacher_id: &str) -> SelectStatement {
    lessons::Entity::find()
        .select_only()
        .column(lessons::Column::ClassId)
        .filter(lessons::Column::TeacherId.eq(teacher_id))
        .into_query()
}

/// 学生所在班级
fn class_ids_of_student(student_id: &str) -> SelectStatement {
    students::Entity::find()
        .select_only()
        .column(students::Column::ClassId)
        .filter(students::Column::Id.eq(student_id))
        .into_query()
}

/// 家长的孩子所在班级
fn class_ids_of_parent(parent_id: &str) -> SelectStatement {
    students::Entity::find()
        .select_only()
        .column(students::Column::ClassId)
        .filter(students::Column::ParentId.eq(parent_id))
        .into_query()
}

/// 调用者关联的班级；管理员不受限
pub(crate) fn viewer_class_ids(viewer: &Viewer) -> Option<SelectStatement> {
    match viewer.role {
        UserRole::Admin => None,
        UserRole::Teacher => Some(class_ids_taught_by(&viewer.user_id)),
        UserRole::Student => Some(class_ids_of_student(&viewer.user_id)),
        UserRole::Parent => Some(class_ids_of_parent(&viewer.user_id)),
    }
}

pub(crate) fn lesson_ids_taught_by(teacher_id: &str) -> SelectStatement {
    lessons::Entity::find()
        .select_only()
        .column(lessons::Column::Id)
        .filter(lessons::Column::TeacherId.eq(teacher_id))
        .into_query()
}

pub(crate) fn lesson_ids_in_class(class_id: i64) -> SelectStatement {
    lessons::Entity::find()
        .select_only()
        .column(lessons::Column::Id)
        .filter(lessons::Column::ClassId.eq(class_id))
        .into_query()
}

fn lesson_ids_in_classes(class_ids: SelectStatement) -> SelectStatement {
    lessons::Entity::find()
        .select_only()
        .column(lessons::Column::Id)
        .filter(lessons::Column::ClassId.in_subquery(class_ids))
        .into_query()
}

/// 调用者可见的课程 id
fn viewer_lesson_ids(viewer: &Viewer) -> Option<SelectStatement> {
    match viewer.role {
        UserRole::Admin => None,
        UserRole::Teacher => Some(lesson_ids_taught_by(&viewer.user_id)),
        _ => viewer_class_ids(viewer).map(lesson_ids_in_classes),
    }
}

pub(crate) fn teachers(viewer: &Viewer) -> Option<Condition> {
    use crate::entity::teachers::Column;

    match viewer.role {
        UserRole::Admin => None,
        UserRole::Teacher => Some(Condition::all().add(Column::Id.eq(viewer.user_id.as_str()))),
        UserRole::Student | UserRole::Parent => viewer_class_ids(viewer).map(|class_ids| {
            let teacher_ids = lessons::Entity::find()
                .select_only()
                .column(lessons::Column::TeacherId)
                .filter(lessons::Column::ClassId.in_subquery(class_ids))
                .into_query();
            Condition::all().add(Column::Id.in_subquery(teacher_ids))
        }),
    }
}

pub(crate) fn students(viewer: &Viewer) -> Option<Condition> {
    use crate::entity::students::Column;

    let uid = viewer.user_id.as_str();
    match viewer.role {
        UserRole::Admin => None,
        UserRole::Teacher => Some(
            Condition::all().add(Column::ClassId.in_subquery(class_ids_taught_by(uid))),
        ),
        UserRole::Student => Some(Condition::all().add(Column::Id.eq(uid))),
        UserRole::Parent => Some(Condition::all().add(Column::ParentId.eq(uid))),
    }
}

pub(crate) fn parents(viewer: &Viewer) -> Option<Condition> {
    use crate::entity::parents::Column;

    let uid = viewer.user_id.as_str();
    let parent_ids = |filter: Condition| {
        students::Entity::find()
            .select_only()
            .column(students::Column::ParentId)
            .filter(filter)
            .into_query()
    };
    match viewer.role {
        UserRole::Admin => None,
        UserRole::Teacher => Some(Condition::all().add(Column::Id.in_subquery(parent_ids(
            Condition::all().add(students::Column::ClassId.in_subquery(class_ids_taught_by(uid))),
        )))),
        UserRole::Student => Some(Condition::all().add(Column::Id.in_subquery(parent_ids(
            Condition::all().add(students::Column::Id.eq(uid)),
        )))),
        UserRole::Parent => Some(Condition::all().add(Column::Id.eq(uid))),
    }
}

pub(crate) fn subjects(viewer: &Viewer) -> Option<Condition> {
    use crate::entity::subjects::Column;

    let subject_ids_of_lessons = |filter: Condition| {
        lessons::Entity::find()
            .select_only()
            .column(lessons::Column::SubjectId)
            .filter(filter)
            .into_query()
    };
    match viewer.role {
        UserRole::Admin => None,
        UserRole::Teacher => {
            let uid = viewer.user_id.as_str();
            let assigned = teacher_subjects::Entity::find()
                .select_only()
                .column(teacher_subjects::Column::SubjectId)
                .filter(teacher_subjects::Column::TeacherId.eq(uid))
                .into_query();
            Some(
                Condition::any()
                    .add(Column::Id.in_subquery(subject_ids_of_lessons(
                        Condition::all().add(lessons::Column::TeacherId.eq(uid)),
                    )))
                    .add(Column::Id.in_subquery(assigned)),
            )
        }
        UserRole::Student | UserRole::Parent => viewer_class_ids(viewer).map(|class_ids| {
            Condition::all().add(Column::Id.in_subquery(subject_ids_of_lessons(
                Condition::all().add(lessons::Column::ClassId.in_subquery(class_ids)),
            )))
        }),
    }
}

pub(crate) fn classes(viewer: &Viewer) -> Option<Condition> {
    use crate::entity::classes::Column;

    match viewer.role {
        UserRole::Admin => None,
        UserRole::Teacher => Some(
            Condition::any()
                .add(Column::Id.in_subquery(class_ids_taught_by(&viewer.user_id)))
                .add(Column::SupervisorId.eq(viewer.user_id.as_str())),
        ),
        UserRole::Student | UserRole::Parent => viewer_class_ids(viewer)
            .map(|class_ids| Condition::all().add(Column::Id.in_subquery(class_ids))),
    }
}

pub(crate) fn lessons(viewer: &Viewer) -> Option<Condition> {
    use crate::entity::lessons::Column;

    match viewer.role {
        UserRole::Admin => None,
        UserRole::Teacher => {
            Some(Condition::all().add(Column::TeacherId.eq(viewer.user_id.as_str())))
        }
        UserRole::Student | UserRole::Parent => viewer_class_ids(viewer)
            .map(|class_ids| Condition::all().add(Column::ClassId.in_subquery(class_ids))),
    }
}

pub(crate) fn exams(viewer: &Viewer) -> Option<Condition> {
    viewer_lesson_ids(viewer)
        .map(|lesson_ids| Condition::all().add(exams::Column::LessonId.in_subquery(lesson_ids)))
}

pub(crate) fn assignments(viewer: &Viewer) -> Option<Condition> {
    viewer_lesson_ids(viewer).map(|lesson_ids| {
        Condition::all().add(assignments::Column::LessonId.in_subquery(lesson_ids))
    })
}

pub(crate) fn results(viewer: &Viewer) -> Option<Condition> {
    use crate::entity::results::Column;

    let uid = viewer.user_id.as_str();
    match viewer.role {
        UserRole::Admin => None,
        UserRole::Teacher => {
            let exam_ids = exams::Entity::find()
                .select_only()
                .column(exams::Column::Id)
                .filter(exams::Column::LessonId.in_subquery(lesson_ids_taught_by(uid)))
                .into_query();
            let assignment_ids = assignments::Entity::find()
                .select_only()
                .column(assignments::Column::Id)
                .filter(assignments::Column::LessonId.in_subquery(lesson_ids_taught_by(uid)))
                .into_query();
            Some(
                Condition::any()
                    .add(Column::ExamId.in_subquery(exam_ids))
                    .add(Column::AssignmentId.in_subquery(assignment_ids)),
            )
        }
        UserRole::Student => Some(Condition::all().add(Column::StudentId.eq(uid))),
        UserRole::Parent => {
            let children = students::Entity::find()
                .select_only()
                .column(students::Column::Id)
                .filter(students::Column::ParentId.eq(uid))
                .into_query();
            Some(Condition::all().add(Column::StudentId.in_subquery(children)))
        }
    }
}

/// 活动与公告：全校的（class_id 为空）加上调用者关联班级的
pub(crate) fn class_bound<C: ColumnTrait>(viewer: &Viewer, class_column: C) -> Option<Condition> {
    viewer_class_ids(viewer).map(|class_ids| {
        Condition::any()
            .add(class_column.is_null())
            .add(class_column.in_subquery(class_ids))
    })
}
