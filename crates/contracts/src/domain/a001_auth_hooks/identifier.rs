//! Кодек идентификатора функции хука
//!
//! Хук ссылается на функцию Postgres строкой вида
//! `pg-functions://postgres/{schema}/{function}`.
//! Разбор по позициям живёт только здесь: остальной код работает с [`FunctionRef`].

/// Схема URI функций хуков
pub const HOOK_URI_SCHEME: &str = "pg-functions";

/// Единственная база, на которую ссылаются хуки
pub const HOOK_URI_AUTHORITY: &str = "postgres";

// Позиции сегментов после split('/'):
// "pg-functions:" / "" / "postgres" / schema / function
const SCHEMA_SLOT: usize = 3;
const FUNCTION_SLOT: usize = 4;

/// Схема и имя функции, разобранные из идентификатора хука
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionRef {
    pub schema_name: String,
    pub function_name: String,
}

impl FunctionRef {
    pub fn new(schema_name: impl Into<String>, function_name: impl Into<String>) -> Self {
        Self {
            schema_name: schema_name.into(),
            function_name: function_name.into(),
        }
    }
}

/// Разбор идентификатора хука.
///
/// Никогда не падает: пустая или короткая строка даёт пустые сегменты.
pub fn decode(identifier: &str) -> FunctionRef {
    if identifier.is_empty() {
        return FunctionRef::default();
    }

    let segments: Vec<&str> = identifier.split('/').collect();
    let slot = |index: usize| segments.get(index).copied().unwrap_or_default().to_string();

    FunctionRef::new(slot(SCHEMA_SLOT), slot(FUNCTION_SLOT))
}

/// Сборка идентификатора хука.
///
/// Частичный идентификатор не собирается: если схема или функция пустые, результат пустой.
pub fn encode(schema_name: &str, function_name: &str) -> String {
    if schema_name.is_empty() || function_name.is_empty() {
        return String::new();
    }
    format!(
        "{}://{}/{}/{}",
        HOOK_URI_SCHEME, HOOK_URI_AUTHORITY, schema_name, function_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(""), FunctionRef::default());
    }

    #[test]
    fn test_decode_full_identifier() {
        let decoded = decode("pg-functions://postgres/public/handle_hook");
        assert_eq!(decoded.schema_name, "public");
        assert_eq!(decoded.function_name, "handle_hook");
    }

    #[test]
    fn test_decode_short_identifier_degrades() {
        assert_eq!(decode("pg-functions://postgres"), FunctionRef::default());
        assert_eq!(
            decode("pg-functions://postgres/auth"),
            FunctionRef::new("auth", "")
        );
        assert_eq!(decode("garbage"), FunctionRef::default());
    }

    #[test]
    fn test_decode_ignores_scheme_and_authority() {
        let decoded = decode("http://example/extensions/fn_name");
        assert_eq!(decoded, FunctionRef::new("extensions", "fn_name"));
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode("", "f"), "");
        assert_eq!(encode("s", ""), "");
        assert_eq!(encode("", ""), "");
        assert_eq!(encode("s", "f"), "pg-functions://postgres/s/f");
    }

    #[test]
    fn test_round_trip() {
        for (schema, function) in [
            ("public", "custom_access_token_hook"),
            ("auth", "mfa_attempt"),
            ("a", "b"),
        ] {
            let uri = encode(schema, function);
            assert_eq!(decode(&uri), FunctionRef::new(schema, function));
            let decoded = decode(&uri);
            assert_eq!(encode(&decoded.schema_name, &decoded.function_name), uri);
        }
    }
}
