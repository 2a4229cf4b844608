//! Каталог схем и функций базы данных проекта (только чтение)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaInfo {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInfo {
    pub schema: String,
    pub name: String,
    #[serde(default)]
    pub return_type: String,
}

/// Query-параметры списка функций
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunctionsQuery {
    pub schema: Option<String>,
}
