//! 教师存储操作

use super::{SeaOrmStorage, scope};
use crate::entity::lessons;
use crate::entity::teacher_subjects;
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::errors::{Result, db_err};
use crate::models::{
    ListQuery, PaginatedResponse,
    people::optional_text,
    teachers::{
        entities::{Teacher, TeacherDetail},
        requests::TeacherRequest,
    },
};
use crate::utils::contains_insensitive;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 分页列出教师
    pub async fn list_teachers_impl(
        &self,
        query: &ListQuery,
    ) -> Result<PaginatedResponse<Teacher>> {
        let mut select = Teachers::find();

        if let Some(visible) = scope::teachers(&query.viewer) {
            select = select.filter(visible);
        }

        // 在该班级有课的教师
        if let Some(class_id) = query.filter_id("classId") {
            let teacher_ids = lessons::Entity::find()
                .select_only()
                .column(lessons::Column::TeacherId)
                .filter(lessons::Column::ClassId.eq(class_id))
                .into_query();
            select = select.filter(Column::Id.in_subquery(teacher_ids));
        }

        if let Some(search) = query.search() {
            select = select.filter(contains_insensitive(Column::Name, search));
        }

        select = select.order_by_asc(Column::CreatedAt).order_by_asc(Column::Id);

        let (models, total) = self
            .fetch_page(select, query.page, "查询教师列表失败")
            .await?;

        Ok(PaginatedResponse::new(
            models.into_iter().map(|m| m.into_teacher()).collect(),
            query.page,
            total,
        ))
    }

    /// 教师及其所教科目
    pub async fn get_teacher_impl(&self, id: &str) -> Result<Option<TeacherDetail>> {
        let Some(model) = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询教师失败"))?
        else {
            return Ok(None);
        };

        let subject_ids = teacher_subjects::Entity::find()
            .filter(teacher_subjects::Column::TeacherId.eq(id))
            .all(&self.db)
            .await
            .map_err(db_err("查询教师科目失败"))?
            .into_iter()
            .map(|link| link.subject_id)
            .collect();

        Ok(Some(TeacherDetail {
            teacher: model.into_teacher(),
            subject_ids,
        }))
    }

    /// 创建教师，id 来自身份提供方
    pub async fn create_teacher_impl(&self, id: &str, req: &TeacherRequest) -> Result<Teacher> {
        let txn = self.db.begin().await.map_err(db_err("开启事务失败"))?;

        let mut model = active_model_from(req);
        model.id = Set(id.to_string());
        model.created_at = Set(chrono::Utc::now().timestamp());

        let teacher = model.insert(&txn).await.map_err(db_err("创建教师失败"))?;
        replace_subjects(&txn, id, &req.subjects).await?;

        txn.commit().await.map_err(db_err("提交事务失败"))?;

        Ok(teacher.into_teacher())
    }

    /// 更新教师；不存在时返回 None
    pub async fn update_teacher_impl(
        &self,
        id: &str,
        req: &TeacherRequest,
    ) -> Result<Option<Teacher>> {
        let txn = self.db.begin().await.map_err(db_err("开启事务失败"))?;

        let existing = Teachers::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err("查询教师失败"))?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = active_model_from(req);
        model.id = Set(id.to_string());

        let teacher = model.update(&txn).await.map_err(db_err("更新教师失败"))?;
        replace_subjects(&txn, id, &req.subjects).await?;

        txn.commit().await.map_err(db_err("提交事务失败"))?;

        Ok(Some(teacher.into_teacher()))
    }

    /// 删除教师
    pub async fn delete_teacher_impl(&self, id: &str) -> Result<bool> {
        let result = Teachers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除教师失败"))?;

        Ok(result.rows_affected > 0)
    }
}

fn active_model_from(req: &TeacherRequest) -> ActiveModel {
    ActiveModel {
        username: Set(req.account.username.trim().to_string()),
        name: Set(req.account.name.trim().to_string()),
        surname: Set(req.account.surname.trim().to_string()),
        email: Set(req.account.email()),
        phone: Set(Some(req.phone.trim().to_string())),
        address: Set(req.address.trim().to_string()),
        img: Set(optional_text(&req.img)),
        blood_type: Set(req.blood_type.trim().to_string()),
        sex: Set(req.sex.to_string()),
        birthday: Set(req.birthday.timestamp()),
        ..Default::default()
    }
}

/// 用给定的科目集合替换教师现有的科目
async fn replace_subjects<C: ConnectionTrait>(
    conn: &C,
    teacher_id: &str,
    subject_ids: &[i64],
) -> Result<()> {
    teacher_subjects::Entity::delete_many()
        .filter(teacher_subjects::Column::TeacherId.eq(teacher_id))
        .exec(conn)
        .await
        .map_err(db_err("更新教师科目失败"))?;

    let mut unique = subject_ids.to_vec();
    unique.sort_unstable();
    unique.dedup();
    if unique.is_empty() {
        return Ok(());
    }

    let links = unique.into_iter().map(|subject_id| teacher_subjects::ActiveModel {
        teacher_id: Set(teacher_id.to_string()),
        subject_id: Set(subject_id),
    });
    teacher_subjects::Entity::insert_many(links)
        .exec(conn)
        .await
        .map_err(db_err("更新教师科目失败"))?;

    Ok(())
}
