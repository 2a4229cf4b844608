use super::identifier::{decode, encode};

/// Состояние выбора "схема → функция" для одного поля хука.
///
/// Функция всегда зависит от схемы: смена схемы сбрасывает функцию,
/// а значение поля становится пустым.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SchemaFunctionSelection {
    #[default]
    NoSchema,
    SchemaOnly {
        schema: String,
    },
    SchemaAndFunction {
        schema: String,
        function: String,
    },
}

impl SchemaFunctionSelection {
    /// Начальное состояние по текущему значению поля формы
    pub fn from_uri(uri: &str) -> Self {
        let decoded = decode(uri);
        match (
            decoded.schema_name.is_empty(),
            decoded.function_name.is_empty(),
        ) {
            (true, _) => Self::NoSchema,
            (false, true) => Self::SchemaOnly {
                schema: decoded.schema_name,
            },
            (false, false) => Self::SchemaAndFunction {
                schema: decoded.schema_name,
                function: decoded.function_name,
            },
        }
    }

    pub fn select_schema(&mut self, schema: &str) {
        if schema.is_empty() {
            self.clear_schema();
            return;
        }
        *self = Self::SchemaOnly {
            schema: schema.to_string(),
        };
    }

    /// Без выбранной схемы выбор функции игнорируется
    pub fn select_function(&mut self, function: &str) {
        let Some(schema) = self.schema().map(str::to_string) else {
            return;
        };
        *self = if function.is_empty() {
            Self::SchemaOnly { schema }
        } else {
            Self::SchemaAndFunction {
                schema,
                function: function.to_string(),
            }
        };
    }

    pub fn clear_schema(&mut self) {
        *self = Self::NoSchema;
    }

    pub fn schema(&self) -> Option<&str> {
        match self {
            Self::NoSchema => None,
            Self::SchemaOnly { schema } | Self::SchemaAndFunction { schema, .. } => Some(schema),
        }
    }

    pub fn function(&self) -> Option<&str> {
        match self {
            Self::SchemaAndFunction { function, .. } => Some(function),
            _ => None,
        }
    }

    /// Значение, которое пишется обратно в поле формы
    pub fn uri(&self) -> String {
        match self {
            Self::SchemaAndFunction { schema, function } => encode(schema, function),
            _ => String::new(),
        }
    }

    /// Поле формы изменилось извне (загрузка, сброс) и выбор надо построить заново.
    ///
    /// Выбранная схема без функции пишет в поле пустую строку, поэтому
    /// пустое поле при `SchemaOnly` не считается расхождением.
    pub fn needs_resync(&self, field_uri: &str, revision_changed: bool) -> bool {
        revision_changed || self.uri() != field_uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_from_uri() {
        assert_eq!(
            SchemaFunctionSelection::from_uri(""),
            SchemaFunctionSelection::NoSchema
        );
        assert_eq!(
            SchemaFunctionSelection::from_uri("pg-functions://postgres/public"),
            SchemaFunctionSelection::SchemaOnly {
                schema: "public".into()
            }
        );

        let selection = SchemaFunctionSelection::from_uri("pg-functions://postgres/public/my_fn");
        assert_eq!(selection.schema(), Some("public"));
        assert_eq!(selection.function(), Some("my_fn"));
        assert_eq!(selection.uri(), "pg-functions://postgres/public/my_fn");
    }

    #[test]
    fn test_schema_change_clears_function() {
        let mut selection = SchemaFunctionSelection::default();
        selection.select_schema("a");
        selection.select_function("fn");
        selection.select_schema("b");

        assert_eq!(selection.function(), None);
        assert_eq!(selection.uri(), "");

        // та же функция в новой схеме не восстанавливается сама
        selection.select_schema("a");
        assert_eq!(selection.uri(), "");
    }

    #[test]
    fn test_schema_then_function_encodes() {
        let mut selection = SchemaFunctionSelection::default();
        selection.select_schema("a");
        assert_eq!(selection.uri(), "");
        selection.select_function("fn");
        assert_eq!(selection.uri(), "pg-functions://postgres/a/fn");
    }

    #[test]
    fn test_function_without_schema_is_ignored() {
        let mut selection = SchemaFunctionSelection::default();
        selection.select_function("fn");
        assert_eq!(selection, SchemaFunctionSelection::NoSchema);
        assert_eq!(selection.uri(), "");
    }

    #[test]
    fn test_clear_schema() {
        let mut selection = SchemaFunctionSelection::from_uri("pg-functions://postgres/public/my_fn");
        selection.clear_schema();
        assert_eq!(selection, SchemaFunctionSelection::NoSchema);
        assert_eq!(selection.uri(), "");

        let mut selection = SchemaFunctionSelection::from_uri("pg-functions://postgres/public/my_fn");
        selection.select_schema("");
        assert_eq!(selection, SchemaFunctionSelection::NoSchema);
    }

    #[test]
    fn test_empty_function_falls_back_to_schema_only() {
        let mut selection = SchemaFunctionSelection::from_uri("pg-functions://postgres/public/my_fn");
        selection.select_function("");
        assert_eq!(
            selection,
            SchemaFunctionSelection::SchemaOnly {
                schema: "public".into()
            }
        );
    }

    #[test]
    fn test_resync_on_revision_or_foreign_value() {
        let mut selection = SchemaFunctionSelection::default();
        selection.select_schema("public");
        assert!(!selection.needs_resync("", false));
        assert!(selection.needs_resync("", true));

        selection.select_function("my_fn");
        assert!(!selection.needs_resync("pg-functions://postgres/public/my_fn", false));
        assert!(selection.needs_resync("pg-functions://postgres/auth/other_fn", false));
        assert!(selection.needs_resync("", false));
    }
}
