//! 新建/编辑表单需要的下拉数据

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{current_viewer, data_response, storage_from};
use crate::errors::{Result, SchoolAdminError};
use crate::models::auth::entities::UserRole;
use crate::models::forms::responses::FormRelatedData;
use crate::models::Viewer;
use crate::storage::{OptionSource, Storage};

pub struct FormService {
    storage: Option<Arc<dyn Storage>>,
}

impl FormService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from(request),
        }
    }

    pub async fn related_data(
        &self,
        request: &HttpRequest,
        table: String,
    ) -> ActixResult<HttpResponse> {
        let viewer = match current_viewer(request) {
            Ok(viewer) => viewer,
            Err(resp) => return Ok(resp),
        };
        let storage = self.get_storage(request);

        Ok(data_response(
            related_data(storage.as_ref(), &viewer, &table).await,
            "Form data retrieved successfully",
        ))
    }
}

/// 教师只能在自己的课程下建考试和作业
fn lesson_source(viewer: &Viewer) -> OptionSource {
    OptionSource::Lessons {
        teacher_id: (viewer.role == UserRole::Teacher).then(|| viewer.user_id.clone()),
    }
}

pub async fn related_data(
    storage: &dyn Storage,
    viewer: &Viewer,
    table: &str,
) -> Result<FormRelatedData> {
    let mut data = FormRelatedData::default();

    match table {
        "subject" => {
            data.teachers = storage.list_form_options(&OptionSource::Teachers).await?;
        }
        "class" => {
            data.grades = storage.list_form_options(&OptionSource::Grades).await?;
            data.teachers = storage.list_form_options(&OptionSource::Teachers).await?;
        }
        "teacher" => {
            data.subjects = storage.list_form_options(&OptionSource::Subjects).await?;
        }
        "student" => {
            data.parents = storage.list_form_options(&OptionSource::Parents).await?;
            data.classes = storage.list_class_options().await?;
            data.grades = storage.list_form_options(&OptionSource::Grades).await?;
        }
        "parent" => {}
        "lesson" => {
            data.classes = storage.list_class_options().await?;
            data.teachers = storage.list_form_options(&OptionSource::Teachers).await?;
            data.subjects = storage.list_form_options(&OptionSource::Subjects).await?;
        }
        "exam" | "assignment" => {
            data.lessons = storage.list_form_options(&lesson_source(viewer)).await?;
        }
        "result" => {
            data.students = storage.list_form_options(&OptionSource::Students).await?;
            data.exams = storage.list_form_options(&OptionSource::Exams).await?;
            data.assignments = storage.list_form_options(&OptionSource::Assignments).await?;
        }
        "attendance" => {
            data.students = storage.list_form_options(&OptionSource::Students).await?;
            data.lessons = storage.list_form_options(&lesson_source(viewer)).await?;
        }
        "event" | "announcement" => {
            data.classes = storage.list_class_options().await?;
        }
        other => {
            return Err(SchoolAdminError::validation(format!("Unknown form: {other}")));
        }
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_source_scoped_for_teachers() {
        assert_eq!(
            lesson_source(&Viewer::new(UserRole::Teacher, "user_t1")),
            OptionSource::Lessons {
                teacher_id: Some("user_t1".to_string())
            }
        );
        assert_eq!(
            lesson_source(&Viewer::new(UserRole::Admin, "admin")),
            OptionSource::Lessons { teacher_id: None }
        );
    }
}
