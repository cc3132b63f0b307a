//! 考勤实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendances")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub date: i64,
    pub present: bool,
    pub student_id: String,
    pub lesson_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_attendance(self) -> crate::models::attendances::entities::Attendance {
        crate::models::attendances::entities::Attendance {
            id: self.id,
            date: super::timestamp_to_datetime(self.date),
            present: self.present,
            student_id: self.student_id,
            lesson_id: self.lesson_id,
        }
    }
}
