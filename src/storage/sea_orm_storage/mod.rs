//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod announcements;
mod assignments;
mod attendances;
mod classes;
mod dashboard;
mod events;
mod exams;
mod forms;
mod grades;
mod lessons;
mod parents;
mod results;
pub(crate) mod scope;
mod students;
mod subjects;
mod teachers;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{Result, SchoolAdminError};
use crate::models::ITEM_PER_PAGE;
use crate::models::common::pagination::page_offset;
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, EntityTrait, FromQueryResult, PaginatorTrait,
    QuerySelect, Select,
};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 按全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(&config.database.url, &config.database).await
    }

    /// 连接数据库并运行迁移
    pub async fn connect(url: &str, config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| {
                SchoolAdminError::database_operation(format!("数据库迁移失败: {e}"))
            })?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 共享给身份提供方等组件的连接
    pub fn connection(&self) -> DatabaseConnection {
        self.db.clone()
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:") || url.contains("mode=memory");

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| {
                SchoolAdminError::database_config(format!("SQLite URL 解析失败: {e}"))
            })?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("wal_autocheckpoint", "1000");

        // 内存库只在连接存活期间存在，固定为单连接
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.pool_size)
                .min_connections(1)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| {
                SchoolAdminError::database_connection(format!("SQLite 连接失败: {e}"))
            })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(2)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| {
                SchoolAdminError::database_connection(format!("无法连接到数据库: {e}"))
            })
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolAdminError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. \
                 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 取第 `page` 页（每页 ITEM_PER_PAGE 条）并返回总条数
    pub(crate) async fn fetch_page<E>(
        &self,
        select: Select<E>,
        page: u64,
        context: &'static str,
    ) -> Result<(Vec<E::Model>, u64)>
    where
        E: EntityTrait,
        E::Model: FromQueryResult + Sized + Send + Sync,
    {
        let total = select
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| SchoolAdminError::from_db(context, e))?;
        let items = select
            .offset(page_offset(page))
            .limit(ITEM_PER_PAGE)
            .all(&self.db)
            .await
            .map_err(|e| SchoolAdminError::from_db(context, e))?;
        Ok((items, total))
    }
}

// Storage trait 实现
use crate::models::{
    ListQuery, PaginatedResponse, Viewer,
    announcements::{entities::Announcement, requests::AnnouncementRequest},
    assignments::{entities::Assignment, requests::AssignmentRequest},
    attendances::{entities::Attendance, requests::AttendanceRequest},
    classes::{entities::Class, requests::ClassRequest},
    dashboard::responses::{RoleCounts, SexCounts},
    events::{entities::Event, requests::EventRequest},
    exams::{entities::Exam, requests::ExamRequest},
    forms::responses::{ClassOption, FormOption},
    grades::entities::Grade,
    lessons::{entities::Lesson, requests::LessonRequest},
    parents::{entities::Parent, requests::ParentRequest},
    results::{entities::ResultRecord, requests::ResultRequest},
    students::{entities::Student, requests::StudentRequest},
    subjects::{entities::Subject, requests::SubjectRequest},
    teachers::{
        entities::{Teacher, TeacherDetail},
        requests::TeacherRequest,
    },
};
use crate::storage::{OptionSource, ScheduleOwner, Storage};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl Storage for SeaOrmStorage {
    // 教师
    async fn list_teachers(&self, query: &ListQuery) -> Result<PaginatedResponse<Teacher>> {
        self.list_teachers_impl(query).await
    }

    async fn get_teacher(&self, id: &str) -> Result<Option<TeacherDetail>> {
        self.get_teacher_impl(id).await
    }

    async fn create_teacher(&self, id: &str, req: &TeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(id, req).await
    }

    async fn update_teacher(&self, id: &str, req: &TeacherRequest) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, req).await
    }

    async fn delete_teacher(&self, id: &str) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    // 学生
    async fn list_students(&self, query: &ListQuery) -> Result<PaginatedResponse<Student>> {
        self.list_students_impl(query).await
    }

    async fn get_student(&self, id: &str) -> Result<Option<Student>> {
        self.get_student_impl(id).await
    }

    async fn create_student(&self, id: &str, req: &StudentRequest) -> Result<Student> {
        self.create_student_impl(id, req).await
    }

    async fn update_student(&self, id: &str, req: &StudentRequest) -> Result<Option<Student>> {
        self.update_student_impl(id, req).await
    }

    async fn delete_student(&self, id: &str) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    async fn count_students_in_class(&self, class_id: i64) -> Result<u64> {
        self.count_students_in_class_impl(class_id).await
    }

    // 家长
    async fn list_parents(&self, query: &ListQuery) -> Result<PaginatedResponse<Parent>> {
        self.list_parents_impl(query).await
    }

    async fn get_parent(&self, id: &str) -> Result<Option<Parent>> {
        self.get_parent_impl(id).await
    }

    async fn create_parent(&self, id: &str, req: &ParentRequest) -> Result<Parent> {
        self.create_parent_impl(id, req).await
    }

    async fn update_parent(&self, id: &str, req: &ParentRequest) -> Result<Option<Parent>> {
        self.update_parent_impl(id, req).await
    }

    async fn delete_parent(&self, id: &str) -> Result<bool> {
        self.delete_parent_impl(id).await
    }

    // 科目
    async fn list_subjects(&self, query: &ListQuery) -> Result<PaginatedResponse<Subject>> {
        self.list_subjects_impl(query).await
    }

    async fn get_subject(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_impl(id).await
    }

    async fn create_subject(&self, req: &SubjectRequest) -> Result<Subject> {
        self.create_subject_impl(req).await
    }

    async fn update_subject(&self, id: i64, req: &SubjectRequest) -> Result<Option<Subject>> {
        self.update_subject_impl(id, req).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    // 班级
    async fn list_classes(&self, query: &ListQuery) -> Result<PaginatedResponse<Class>> {
        self.list_classes_impl(query).await
    }

    async fn get_class(&self, id: i64) -> Result<Option<Class>> {
        self.get_class_impl(id).await
    }

    async fn create_class(&self, req: &ClassRequest) -> Result<Class> {
        self.create_class_impl(req).await
    }

    async fn update_class(&self, id: i64, req: &ClassRequest) -> Result<Option<Class>> {
        self.update_class_impl(id, req).await
    }

    async fn delete_class(&self, id: i64) -> Result<bool> {
        self.delete_class_impl(id).await
    }

    // 课程
    async fn list_lessons(&self, query: &ListQuery) -> Result<PaginatedResponse<Lesson>> {
        self.list_lessons_impl(query).await
    }

    async fn get_lesson(&self, id: i64) -> Result<Option<Lesson>> {
        self.get_lesson_impl(id).await
    }

    async fn create_lesson(&self, req: &LessonRequest) -> Result<Lesson> {
        self.create_lesson_impl(req).await
    }

    async fn update_lesson(&self, id: i64, req: &LessonRequest) -> Result<Option<Lesson>> {
        self.update_lesson_impl(id, req).await
    }

    async fn delete_lesson(&self, id: i64) -> Result<bool> {
        self.delete_lesson_impl(id).await
    }

    async fn lesson_taught_by(&self, lesson_id: i64, teacher_id: &str) -> Result<bool> {
        self.lesson_taught_by_impl(lesson_id, teacher_id).await
    }

    // 考试
    async fn list_exams(&self, query: &ListQuery) -> Result<PaginatedResponse<Exam>> {
        self.list_exams_impl(query).await
    }

    async fn get_exam(&self, id: i64) -> Result<Option<Exam>> {
        self.get_exam_impl(id).await
    }

    async fn create_exam(&self, req: &ExamRequest) -> Result<Exam> {
        self.create_exam_impl(req).await
    }

    async fn update_exam(&self, id: i64, req: &ExamRequest) -> Result<Option<Exam>> {
        self.update_exam_impl(id, req).await
    }

    async fn delete_exam(&self, id: i64) -> Result<bool> {
        self.delete_exam_impl(id).await
    }

    // 作业
    async fn list_assignments(&self, query: &ListQuery) -> Result<PaginatedResponse<Assignment>> {
        self.list_assignments_impl(query).await
    }

    async fn get_assignment(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_impl(id).await
    }

    async fn create_assignment(&self, req: &AssignmentRequest) -> Result<Assignment> {
        self.create_assignment_impl(req).await
    }

    async fn update_assignment(
        &self,
        id: i64,
        req: &AssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(id, req).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<bool> {
        self.delete_assignment_impl(id).await
    }

    // 成绩
    async fn list_results(&self, query: &ListQuery) -> Result<PaginatedResponse<ResultRecord>> {
        self.list_results_impl(query).await
    }

    async fn get_result(&self, id: i64) -> Result<Option<ResultRecord>> {
        self.get_result_impl(id).await
    }

    async fn create_result(&self, req: &ResultRequest) -> Result<ResultRecord> {
        self.create_result_impl(req).await
    }

    async fn update_result(&self, id: i64, req: &ResultRequest) -> Result<Option<ResultRecord>> {
        self.update_result_impl(id, req).await
    }

    async fn delete_result(&self, id: i64) -> Result<bool> {
        self.delete_result_impl(id).await
    }

    // 考勤
    async fn get_attendance(&self, id: i64) -> Result<Option<Attendance>> {
        self.get_attendance_impl(id).await
    }

    async fn create_attendance(&self, req: &AttendanceRequest) -> Result<Attendance> {
        self.create_attendance_impl(req).await
    }

    async fn update_attendance(
        &self,
        id: i64,
        req: &AttendanceRequest,
    ) -> Result<Option<Attendance>> {
        self.update_attendance_impl(id, req).await
    }

    async fn delete_attendance(&self, id: i64) -> Result<bool> {
        self.delete_attendance_impl(id).await
    }

    // 活动
    async fn list_events(&self, query: &ListQuery) -> Result<PaginatedResponse<Event>> {
        self.list_events_impl(query).await
    }

    async fn get_event(&self, id: i64) -> Result<Option<Event>> {
        self.get_event_impl(id).await
    }

    async fn create_event(&self, req: &EventRequest) -> Result<Event> {
        self.create_event_impl(req).await
    }

    async fn update_event(&self, id: i64, req: &EventRequest) -> Result<Option<Event>> {
        self.update_event_impl(id, req).await
    }

    async fn delete_event(&self, id: i64) -> Result<bool> {
        self.delete_event_impl(id).await
    }

    // 公告
    async fn list_announcements(
        &self,
        query: &ListQuery,
    ) -> Result<PaginatedResponse<Announcement>> {
        self.list_announcements_impl(query).await
    }

    async fn get_announcement(&self, id: i64) -> Result<Option<Announcement>> {
        self.get_announcement_impl(id).await
    }

    async fn create_announcement(&self, req: &AnnouncementRequest) -> Result<Announcement> {
        self.create_announcement_impl(req).await
    }

    async fn update_announcement(
        &self,
        id: i64,
        req: &AnnouncementRequest,
    ) -> Result<Option<Announcement>> {
        self.update_announcement_impl(id, req).await
    }

    async fn delete_announcement(&self, id: i64) -> Result<bool> {
        self.delete_announcement_impl(id).await
    }

    // 年级
    async fn list_grades(&self) -> Result<Vec<Grade>> {
        self.list_grades_impl().await
    }

    async fn create_grade(&self, level: i32) -> Result<Grade> {
        self.create_grade_impl(level).await
    }

    async fn delete_grade(&self, id: i64) -> Result<bool> {
        self.delete_grade_impl(id).await
    }

    // 管理员
    async fn count_admins(&self) -> Result<u64> {
        self.count_admins_impl().await
    }

    async fn create_admin(&self, id: &str, username: &str) -> Result<()> {
        self.create_admin_impl(id, username).await
    }

    // 看板
    async fn count_role_members(&self) -> Result<RoleCounts> {
        self.count_role_members_impl().await
    }

    async fn count_students_by_sex(&self) -> Result<SexCounts> {
        self.count_students_by_sex_impl().await
    }

    async fn list_attendance_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Attendance>> {
        self.list_attendance_between_impl(from, to).await
    }

    async fn list_schedule(&self, owner: &ScheduleOwner) -> Result<Vec<Lesson>> {
        self.list_schedule_impl(owner).await
    }

    async fn list_events_between(
        &self,
        viewer: &Viewer,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Event>> {
        self.list_events_between_impl(viewer, from, to).await
    }

    async fn list_latest_announcements(
        &self,
        viewer: &Viewer,
        limit: u64,
    ) -> Result<Vec<Announcement>> {
        self.list_latest_announcements_impl(viewer, limit).await
    }

    // 表单
    async fn list_form_options(&self, source: &OptionSource) -> Result<Vec<FormOption>> {
        self.list_form_options_impl(source).await
    }

    async fn list_class_options(&self) -> Result<Vec<ClassOption>> {
        self.list_class_options_impl().await
    }
}
