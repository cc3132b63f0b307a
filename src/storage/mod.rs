use chrono::{DateTime, Utc};

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

use crate::errors::Result;

pub mod sea_orm_storage;

/// 课表归属：某位教师或某个班级
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleOwner {
    Teacher(String),
    Class(i64),
}

/// 表单下拉选项的数据来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionSource {
    Teachers,
    Subjects,
    Grades,
    Parents,
    Students,
    Exams,
    Assignments,
    /// 指定教师时只列出其任课的课程
    Lessons { teacher_id: Option<String> },
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 教师
    async fn list_teachers(&self, query: &ListQuery) -> Result<PaginatedResponse<Teacher>>;
    async fn get_teacher(&self, id: &str) -> Result<Option<TeacherDetail>>;
    async fn create_teacher(&self, id: &str, req: &TeacherRequest) -> Result<Teacher>;
    async fn update_teacher(&self, id: &str, req: &TeacherRequest) -> Result<Option<Teacher>>;
    async fn delete_teacher(&self, id: &str) -> Result<bool>;

    /// 学生
    async fn list_students(&self, query: &ListQuery) -> Result<PaginatedResponse<Student>>;
    async fn get_student(&self, id: &str) -> Result<Option<Student>>;
    async fn create_student(&self, id: &str, req: &StudentRequest) -> Result<Student>;
    async fn update_student(&self, id: &str, req: &StudentRequest) -> Result<Option<Student>>;
    async fn delete_student(&self, id: &str) -> Result<bool>;
    async fn count_students_in_class(&self, class_id: i64) -> Result<u64>;

    /// 家长
    async fn list_parents(&self, query: &ListQuery) -> Result<PaginatedResponse<Parent>>;
    async fn get_parent(&self, id: &str) -> Result<Option<Parent>>;
    async fn create_parent(&self, id: &str, req: &ParentRequest) -> Result<Parent>;
    async fn update_parent(&self, id: &str, req: &ParentRequest) -> Result<Option<Parent>>;
    async fn delete_parent(&self, id: &str) -> Result<bool>;

    /// 科目
    async fn list_subjects(&self, query: &ListQuery) -> Result<PaginatedResponse<Subject>>;
    async fn get_subject(&self, id: i64) -> Result<Option<Subject>>;
    async fn create_subject(&self, req: &SubjectRequest) -> Result<Subject>;
    async fn update_subject(&self, id: i64, req: &SubjectRequest) -> Result<Option<Subject>>;
    async fn delete_subject(&self, id: i64) -> Result<bool>;

    /// 班级
    async fn list_classes(&self, query: &ListQuery) -> Result<PaginatedResponse<Class>>;
    async fn get_class(&self, id: i64) -> Result<Option<Class>>;
    async fn create_class(&self, req: &ClassRequest) -> Result<Class>;
    async fn update_class(&self, id: i64, req: &ClassRequest) -> Result<Option<Class>>;
    async fn delete_class(&self, id: i64) -> Result<bool>;

    /// 课程
    async fn list_lessons(&self, query: &ListQuery) -> Result<PaginatedResponse<Lesson>>;
    async fn get_lesson(&self, id: i64) -> Result<Option<Lesson>>;
    async fn create_lesson(&self, req: &LessonRequest) -> Result<Lesson>;
    async fn update_lesson(&self, id: i64, req: &LessonRequest) -> Result<Option<Lesson>>;
    async fn delete_lesson(&self, id: i64) -> Result<bool>;
    async fn lesson_taught_by(&self, lesson_id: i64, teacher_id: &str) -> Result<bool>;

    /// 考试
    async fn list_exams(&self, query: &ListQuery) -> Result<PaginatedResponse<Exam>>;
    async fn get_exam(&self, id: i64) -> Result<Option<Exam>>;
    async fn create_exam(&self, req: &ExamRequest) -> Result<Exam>;
    async fn update_exam(&self, id: i64, req: &ExamRequest) -> Result<Option<Exam>>;
    async fn delete_exam(&self, id: i64) -> Result<bool>;

    /// 作业
    async fn list_assignments(&self, query: &ListQuery) -> Result<PaginatedResponse<Assignment>>;
    async fn get_assignment(&self, id: i64) -> Result<Option<Assignment>>;
    async fn create_assignment(&self, req: &AssignmentRequest) -> Result<Assignment>;
    async fn update_assignment(
        &self,
        id: i64,
        req: &AssignmentRequest,
    ) -> Result<Option<Assignment>>;
    async fn delete_assignment(&self, id: i64) -> Result<bool>;

    /// 成绩
    async fn list_results(&self, query: &ListQuery) -> Result<PaginatedResponse<ResultRecord>>;
    async fn get_result(&self, id: i64) -> Result<Option<ResultRecord>>;
    async fn create_result(&self, req: &ResultRequest) -> Result<ResultRecord>;
    async fn update_result(&self, id: i64, req: &ResultRequest) -> Result<Option<ResultRecord>>;
    async fn delete_result(&self, id: i64) -> Result<bool>;

    /// 考勤
    async fn get_attendance(&self, id: i64) -> Result<Option<Attendance>>;
    async fn create_attendance(&self, req: &AttendanceRequest) -> Result<Attendance>;
    async fn update_attendance(
        &self,
        id: i64,
        req: &AttendanceRequest,
    ) -> Result<Option<Attendance>>;
    async fn delete_attendance(&self, id: i64) -> Result<bool>;

    /// 活动
    async fn list_events(&self, query: &ListQuery) -> Result<PaginatedResponse<Event>>;
    async fn get_event(&self, id: i64) -> Result<Option<Event>>;
    async fn create_event(&self, req: &EventRequest) -> Result<Event>;
    async fn update_event(&self, id: i64, req: &EventRequest) -> Result<Option<Event>>;
    async fn delete_event(&self, id: i64) -> Result<bool>;

    /// 公告
    async fn list_announcements(
        &self,
        query: &ListQuery,
    ) -> Result<PaginatedResponse<Announcement>>;
    async fn get_announcement(&self, id: i64) -> Result<Option<Announcement>>;
    async fn create_announcement(&self, req: &AnnouncementRequest) -> Result<Announcement>;
    async fn update_announcement(
        &self,
        id: i64,
        req: &AnnouncementRequest,
    ) -> Result<Option<Announcement>>;
    async fn delete_announcement(&self, id: i64) -> Result<bool>;

    /// 年级
    async fn list_grades(&self) -> Result<Vec<Grade>>;
    async fn create_grade(&self, level: i32) -> Result<Grade>;
    async fn delete_grade(&self, id: i64) -> Result<bool>;

    /// 管理员
    async fn count_admins(&self) -> Result<u64>;
    async fn create_admin(&self, id: &str, username: &str) -> Result<()>;

    /// 看板
    async fn count_role_members(&self) -> Result<RoleCounts>;
    async fn count_students_by_sex(&self) -> Result<SexCounts>;
    async fn list_attendance_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Attendance>>;
    async fn list_schedule(&self, owner: &ScheduleOwner) -> Result<Vec<Lesson>>;
    async fn list_events_between(
        &self,
        viewer: &Viewer,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Event>>;
    async fn list_latest_announcements(
        &self,
        viewer: &Viewer,
        limit: u64,
    ) -> Result<Vec<Announcement>>;

    /// 表单
    async fn list_form_options(&self, source: &OptionSource) -> Result<Vec<FormOption>>;
    async fn list_class_options(&self) -> Result<Vec<ClassOption>>;
}
