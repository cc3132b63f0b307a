//! 集成测试共用的内存数据库和数据构造

#![allow(dead_code)]

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};

use rust_school_admin::config::{Argon2Config, DatabaseConfig};
use rust_school_admin::identity::LocalIdentityProvider;
use rust_school_admin::models::auth::entities::UserRole;
use rust_school_admin::models::classes::requests::ClassRequest;
use rust_school_admin::models::lessons::entities::{Day, Lesson};
use rust_school_admin::models::lessons::requests::LessonRequest;
use rust_school_admin::models::parents::requests::ParentRequest;
use rust_school_admin::models::people::{AccountFields, UserSex};
use rust_school_admin::models::students::requests::StudentRequest;
use rust_school_admin::models::subjects::requests::SubjectRequest;
use rust_school_admin::models::teachers::requests::TeacherRequest;
use rust_school_admin::models::{ListQuery, Viewer};
use rust_school_admin::storage::Storage;
use rust_school_admin::storage::sea_orm_storage::SeaOrmStorage;

pub const PASSWORD: &str = "s3cure-Passphrase";

pub struct TestContext {
    pub storage: SeaOrmStorage,
    pub identity: LocalIdentityProvider,
}

/// 每个测试一个独立的内存库，迁移已执行
pub async fn setup() -> TestContext {
    let storage = SeaOrmStorage::connect("sqlite::memory:", &DatabaseConfig::default())
        .await
        .expect("in-memory database");
    // 测试里不需要生产强度的哈希参数
    let identity = LocalIdentityProvider::new(
        storage.connection(),
        Argon2Config {
            memory_cost: 1024,
            time_cost: 1,
            parallelism: 1,
        },
    );
    TestContext { storage, identity }
}

pub fn admin() -> Viewer {
    Viewer::new(UserRole::Admin, "admin")
}

pub fn teacher(id: &str) -> Viewer {
    Viewer::new(UserRole::Teacher, id)
}

pub fn query(viewer: Viewer, params: &[(&str, &str)]) -> ListQuery {
    let params: HashMap<String, String> = params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ListQuery::new(viewer, params)
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
}

pub fn account(username: &str) -> AccountFields {
    AccountFields {
        username: username.to_string(),
        password: Some(PASSWORD.to_string()),
        name: "Grace".to_string(),
        surname: "Hopper".to_string(),
        email: None,
    }
}

pub fn teacher_request(username: &str, phone: &str) -> TeacherRequest {
    TeacherRequest {
        id: None,
        account: account(username),
        phone: phone.to_string(),
        address: "1 School Lane".to_string(),
        img: None,
        blood_type: "A+".to_string(),
        sex: UserSex::Female,
        birthday: at(1985, 12, 9, 0, 0),
        subjects: vec![],
    }
}

pub fn parent_request(username: &str, phone: &str) -> ParentRequest {
    ParentRequest {
        id: None,
        account: account(username),
        phone: phone.to_string(),
        address: "2 Family Road".to_string(),
    }
}

pub fn student_request(
    username: &str,
    phone: &str,
    school: &School,
    sex: UserSex,
) -> StudentRequest {
    StudentRequest {
        id: None,
        account: account(username),
        phone: phone.to_string(),
        address: "2 Family Road".to_string(),
        img: None,
        blood_type: "O-".to_string(),
        sex,
        birthday: at(2014, 3, 1, 0, 0),
        grade_id: school.grade_id,
        class_id: school.class_id,
        parent_id: school.parent_id.clone(),
    }
}

pub fn lesson_request(
    name: &str,
    class_id: i64,
    teacher_id: &str,
    school: &School,
) -> LessonRequest {
    LessonRequest {
        id: None,
        name: name.to_string(),
        day: Day::Monday,
        start_time: at(2026, 10, 12, 10, 0),
        end_time: at(2026, 10, 12, 11, 0),
        subject_id: school.subject_id,
        class_id,
        teacher_id: teacher_id.to_string(),
    }
}

/// 一个年级、两个班级（1A 容量 2）、一门科目、两位教师和一位家长
///
/// 直接写业务表，id 不带账号前缀，不经过身份提供方。
pub struct School {
    pub grade_id: i64,
    pub class_id: i64,
    pub other_class_id: i64,
    pub subject_id: i64,
    pub teacher_a: String,
    pub teacher_b: String,
    pub parent_id: String,
}

pub async fn seed_school(ctx: &TestContext) -> School {
    let storage = &ctx.storage;
    let grade = storage.create_grade(1).await.unwrap();
    let class = storage
        .create_class(&ClassRequest {
            id: None,
            name: "1A".to_string(),
            capacity: 2,
            supervisor_id: None,
            grade_id: grade.id,
        })
        .await
        .unwrap();
    let other_class = storage
        .create_class(&ClassRequest {
            id: None,
            name: "1B".to_string(),
            capacity: 30,
            supervisor_id: None,
            grade_id: grade.id,
        })
        .await
        .unwrap();
    let subject = storage
        .create_subject(&SubjectRequest {
            id: None,
            name: "Math".to_string(),
            teachers: vec![],
        })
        .await
        .unwrap();

    storage
        .create_teacher("teacher_a", &teacher_request("teacher_a", "555-0101"))
        .await
        .unwrap();
    storage
        .create_teacher("teacher_b", &teacher_request("teacher_b", "555-0102"))
        .await
        .unwrap();
    storage
        .create_parent("parent_a", &parent_request("parent_a", "555-0201"))
        .await
        .unwrap();

    School {
        grade_id: grade.id,
        class_id: class.id,
        other_class_id: other_class.id,
        subject_id: subject.id,
        teacher_a: "teacher_a".to_string(),
        teacher_b: "teacher_b".to_string(),
        parent_id: "parent_a".to_string(),
    }
}

pub async fn seed_lesson(
    ctx: &TestContext,
    school: &School,
    name: &str,
    class_id: i64,
    teacher_id: &str,
) -> Lesson {
    ctx.storage
        .create_lesson(&lesson_request(name, class_id, teacher_id, school))
        .await
        .unwrap()
}
