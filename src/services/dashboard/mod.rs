pub mod charts;

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use super::{current_viewer, data_response, storage_from};
use crate::errors::{Result, SchoolAdminError};
use crate::models::auth::entities::UserRole;
use crate::models::dashboard::responses::{
    AnnouncementsResponse, AttendanceDay, CalendarEntry, EventsResponse,
};
use crate::models::{ListQuery, Viewer};
use crate::storage::{ScheduleOwner, Storage};

/// 看板上显示的公告条数
pub const LATEST_ANNOUNCEMENTS: u64 = 3;

pub struct DashboardService {
    storage: Option<Arc<dyn Storage>>,
}

impl DashboardService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => storage_from(request),
        }
    }

    pub async fn role_counts(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        Ok(data_response(
            storage.count_role_members().await,
            "Role counts retrieved successfully",
        ))
    }

    pub async fn sex_counts(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        Ok(data_response(
            storage.count_students_by_sex().await,
            "Student counts retrieved successfully",
        ))
    }

    pub async fn attendance(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        Ok(data_response(
            weekly_attendance(storage.as_ref(), Utc::now()).await,
            "Attendance retrieved successfully",
        ))
    }

    pub async fn schedule(
        &self,
        request: &HttpRequest,
        params: HashMap<String, String>,
    ) -> ActixResult<HttpResponse> {
        let viewer = match current_viewer(request) {
            Ok(viewer) => viewer,
            Err(resp) => return Ok(resp),
        };
        let storage = self.get_storage(request);

        let query = ListQuery::new(viewer, params);
        let result = match schedule_owner(&query) {
            Ok(owner) => schedule(storage.as_ref(), &owner).await,
            Err(err) => Err(err),
        };
        Ok(data_response(result, "Schedule retrieved successfully"))
    }

    pub async fn events(
        &self,
        request: &HttpRequest,
        params: HashMap<String, String>,
    ) -> ActixResult<HttpResponse> {
        let viewer = match current_viewer(request) {
            Ok(viewer) => viewer,
            Err(resp) => return Ok(resp),
        };
        let storage = self.get_storage(request);

        let result = match parse_date(params.get("date").map(String::as_str)) {
            Ok(date) => events_on(storage.as_ref(), &viewer, date).await,
            Err(err) => Err(err),
        };
        Ok(data_response(result, "Events retrieved successfully"))
    }

    pub async fn announcements(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let viewer = match current_viewer(request) {
            Ok(viewer) => viewer,
            Err(resp) => return Ok(resp),
        };
        let storage = self.get_storage(request);

        let result = storage
            .list_latest_announcements(&viewer, LATEST_ANNOUNCEMENTS)
            .await
            .map(|items| AnnouncementsResponse { items });
        Ok(data_response(result, "Announcements retrieved successfully"))
    }
}

/// 本周一至今的出勤统计
pub async fn weekly_attendance(
    storage: &dyn Storage,
    now: DateTime<Utc>,
) -> Result<Vec<AttendanceDay>> {
    let records = storage
        .list_attendance_between(charts::week_start(now), now)
        .await?;
    Ok(charts::weekly_attendance(&records))
}

/// `teacherId` 或 `classId`；都没给时教师看自己的课表
pub fn schedule_owner(query: &ListQuery) -> Result<ScheduleOwner> {
    if let Some(teacher_id) = query.filter("teacherId") {
        return Ok(ScheduleOwner::Teacher(teacher_id.to_string()));
    }
    if let Some(class_id) = query.filter_id("classId") {
        return Ok(ScheduleOwner::Class(class_id));
    }
    match query.viewer.role {
        UserRole::Teacher => Ok(ScheduleOwner::Teacher(query.viewer.user_id.clone())),
        _ => Err(SchoolAdminError::validation("teacherId or classId is required")),
    }
}

pub async fn schedule(storage: &dyn Storage, owner: &ScheduleOwner) -> Result<Vec<CalendarEntry>> {
    let lessons = storage.list_schedule(owner).await?;
    Ok(charts::calendar_entries(lessons))
}

/// `YYYY-MM-DD`，缺省为今天
pub fn parse_date(raw: Option<&str>) -> Result<NaiveDate> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => Ok(NaiveDate::parse_from_str(value, "%Y-%m-%d")?),
        None => Ok(Utc::now().date_naive()),
    }
}

pub async fn events_on(
    storage: &dyn Storage,
    viewer: &Viewer,
    date: NaiveDate,
) -> Result<EventsResponse> {
    let from = date.and_time(NaiveTime::MIN).and_utc();
    let items = storage
        .list_events_between(viewer, from, from + Duration::days(1))
        .await?;
    Ok(EventsResponse { date, items })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(role: UserRole, params: &[(&str, &str)]) -> ListQuery {
        ListQuery::new(
            Viewer::new(role, "user_t1"),
            params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_schedule_owner() {
        assert_eq!(
            schedule_owner(&query(UserRole::Admin, &[("classId", "4")])).unwrap(),
            ScheduleOwner::Class(4)
        );
        assert_eq!(
            schedule_owner(&query(UserRole::Parent, &[("teacherId", "teacher2")])).unwrap(),
            ScheduleOwner::Teacher("teacher2".to_string())
        );
        assert_eq!(
            schedule_owner(&query(UserRole::Teacher, &[])).unwrap(),
            ScheduleOwner::Teacher("user_t1".to_string())
        );
        assert!(schedule_owner(&query(UserRole::Student, &[])).is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(Some("2026-10-16")).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
        );
        assert!(parse_date(Some("16/10/2026")).is_err());
        assert!(parse_date(None).is_ok());
    }
}
