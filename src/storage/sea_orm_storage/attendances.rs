//! 考勤存储操作

use super::SeaOrmStorage;
use crate::entity::attendances::{ActiveModel, Column, Entity as Attendances};
use crate::errors::{Result, db_err};
use crate::models::attendances::{entities::Attendance, requests::AttendanceRequest};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn get_attendance_impl(&self, id: i64) -> Result<Option<Attendance>> {
        let result = Attendances::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询考勤失败"))?;

        Ok(result.map(|m| m.into_attendance()))
    }

    pub async fn create_attendance_impl(&self, req: &AttendanceRequest) -> Result<Attendance> {
        let result = active_model_from(req)
            .insert(&self.db)
            .await
            .map_err(db_err("创建考勤失败"))?;

        Ok(result.into_attendance())
    }

    pub async fn update_attendance_impl(
        &self,
        id: i64,
        req: &AttendanceRequest,
    ) -> Result<Option<Attendance>> {
        if self.get_attendance_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = active_model_from(req);
        model.id = Set(id);

        let result = model.update(&self.db).await.map_err(db_err("更新考勤失败"))?;

        Ok(Some(result.into_attendance()))
    }

    pub async fn delete_attendance_impl(&self, id: i64) -> Result<bool> {
        let result = Attendances::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除考勤失败"))?;

        Ok(result.rows_affected > 0)
    }

    /// [from, to) 区间内的考勤
    pub async fn list_attendance_between_impl(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Attendance>> {
        let models = Attendances::find()
            .filter(Column::Date.gte(from.timestamp()))
            .filter(Column::Date.lt(to.timestamp()))
            .order_by_asc(Column::Date)
            .all(&self.db)
            .await
            .map_err(db_err("查询考勤失败"))?;

        Ok(models.into_iter().map(|m| m.into_attendance()).collect())
    }
}

fn active_model_from(req: &AttendanceRequest) -> ActiveModel {
    ActiveModel {
        date: Set(req.date.timestamp()),
        present: Set(req.present),
        student_id: Set(req.student_id.trim().to_string()),
        lesson_id: Set(req.lesson_id),
        ..Default::default()
    }
}
