use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 表单下拉选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/forms.ts")]
pub struct FormOption {
    pub id: String,
    pub label: String,
}

/// 学生表单的班级选项，附带当前人数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/forms.ts")]
pub struct ClassOption {
    pub id: i64,
    pub name: String,
    pub capacity: i32,
    pub student_count: u64,
}

/// 各表单需要的关联数据，未用到的列表为空
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/forms.ts")]
pub struct FormRelatedData {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teachers: Vec<FormOption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<FormOption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub grades: Vec<FormOption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<ClassOption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<FormOption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lessons: Vec<FormOption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub students: Vec<FormOption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exams: Vec<FormOption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assignments: Vec<FormOption>,
}
