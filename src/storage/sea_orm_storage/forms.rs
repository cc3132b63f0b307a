//! 表单下拉选项

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::{
    assignments, classes, exams, grades, lessons, parents, students, subjects, teachers,
};
use crate::errors::{Result, db_err};
use crate::models::forms::responses::{ClassOption, FormOption};
use crate::storage::OptionSource;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

fn full_name(name: &str, surname: &str) -> String {
    format!("{name} {surname}")
}

impl SeaOrmStorage {
    pub async fn list_form_options_impl(&self, source: &OptionSource) -> Result<Vec<FormOption>> {
        let options = match source {
            OptionSource::Teachers => teachers::Entity::find()
                .order_by_asc(teachers::Column::Name)
                .all(&self.db)
                .await
                .map_err(db_err("查询教师选项失败"))?
                .into_iter()
                .map(|t| FormOption {
                    label: full_name(&t.name, &t.surname),
                    id: t.id,
                })
                .collect(),
            OptionSource::Subjects => subjects::Entity::find()
                .order_by_asc(subjects::Column::Name)
                .all(&self.db)
                .await
                .map_err(db_err("查询科目选项失败"))?
                .into_iter()
                .map(|s| FormOption {
                    id: s.id.to_string(),
                    label: s.name,
                })
                .collect(),
            OptionSource::Grades => grades::Entity::find()
                .order_by_asc(grades::Column::Level)
                .all(&self.db)
                .await
                .map_err(db_err("查询年级选项失败"))?
                .into_iter()
                .map(|g| FormOption {
                    id: g.id.to_string(),
                    label: g.level.to_string(),
                })
                .collect(),
            OptionSource::Parents => parents::Entity::find()
                .order_by_asc(parents::Column::Name)
                .all(&self.db)
                .await
                .map_err(db_err("查询家长选项失败"))?
                .into_iter()
                .map(|p| FormOption {
                    label: full_name(&p.name, &p.surname),
                    id: p.id,
                })
                .collect(),
            OptionSource::Students => students::Entity::find()
                .order_by_asc(students::Column::Name)
                .all(&self.db)
                .await
                .map_err(db_err("查询学生选项失败"))?
                .into_iter()
                .map(|s| FormOption {
                    label: full_name(&s.name, &s.surname),
                    id: s.id,
                })
                .collect(),
            OptionSource::Exams => exams::Entity::find()
                .order_by_asc(exams::Column::Id)
                .all(&self.db)
                .await
                .map_err(db_err("查询考试选项失败"))?
                .into_iter()
                .map(|e| FormOption {
                    id: e.id.to_string(),
                    label: e.title,
                })
                .collect(),
            OptionSource::Assignments => assignments::Entity::find()
                .order_by_asc(assignments::Column::Id)
                .all(&self.db)
                .await
                .map_err(db_err("查询作业选项失败"))?
                .into_iter()
                .map(|a| FormOption {
                    id: a.id.to_string(),
                    label: a.title,
                })
                .collect(),
            OptionSource::Lessons { teacher_id } => {
                let mut select = lessons::Entity::find();
                if let Some(teacher_id) = teacher_id {
                    select = select.filter(lessons::Column::TeacherId.eq(teacher_id.as_str()));
                }
                select
                    .order_by_asc(lessons::Column::Id)
                    .all(&self.db)
                    .await
                    .map_err(db_err("查询课程选项失败"))?
                    .into_iter()
                    .map(|l| FormOption {
                        id: l.id.to_string(),
                        label: l.name,
                    })
                    .collect()
            }
        };

        Ok(options)
    }

    /// 班级选项，附带当前人数
    pub async fn list_class_options_impl(&self) -> Result<Vec<ClassOption>> {
        let classes = classes::Entity::find()
            .order_by_asc(classes::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询班级选项失败"))?;

        let class_ids: Vec<i64> = students::Entity::find()
            .select_only()
            .column(students::Column::ClassId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_err("统计班级人数失败"))?;

        let mut counts: HashMap<i64, u64> = HashMap::new();
        for class_id in class_ids {
            *counts.entry(class_id).or_default() += 1;
        }

        Ok(classes
            .into_iter()
            .map(|c| ClassOption {
                student_count: counts.get(&c.id).copied().unwrap_or(0),
                id: c.id,
                name: c.name,
                capacity: c.capacity,
            })
            .collect())
    }
}
