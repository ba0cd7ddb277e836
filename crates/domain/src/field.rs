//! Column declarations and wire-value coercion.
//!
//! Every entity kind declares its columns as a static table; raw JSON
//! values coming off the wire are converted to typed [`FieldValue`]s
//! against that table. Date columns accept exactly one textual format
//! per call site: `%m/%d/%Y` when loading seed data or creating a
//! record, `%Y-%m-%d` when applying a partial update. The two formats
//! are not interchangeable; a value in the wrong format must fail.

use chrono::NaiveDate;

use crate::error::DomainError;

/// The type a column stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Int,
    Text,
    Date,
}

/// One declared column of an entity kind.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    pub const fn int(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Int,
        }
    }

    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Text,
        }
    }

    pub const fn date(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Date,
        }
    }
}

/// Textual date layout accepted at a given call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `%m/%d/%Y` — used for seed data and create requests.
    MonthDayYear,
    /// `%Y-%m-%d` — used for partial-update requests.
    YearMonthDay,
}

impl DateFormat {
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "%m/%d/%Y",
            DateFormat::YearMonthDay => "%Y-%m-%d",
        }
    }
}

/// A typed column value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Int(i64),
    Text(String),
    Date(NaiveDate),
}

impl FieldValue {
    /// Renders the value in its textual wire form.
    ///
    /// Dates always render as `YYYY-MM-DD` regardless of which format
    /// they were parsed from.
    pub fn render(&self) -> String {
        match self {
            FieldValue::Int(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Converts a raw JSON value into the typed value a column expects.
///
/// Integer columns accept a JSON number or a numeric string; text
/// columns accept a string or render a number. Date columns accept
/// only a string in the call site's [`DateFormat`]. Anything else
/// fails with [`DomainError::InvalidFieldValue`].
pub fn coerce(
    column: &Column,
    raw: &serde_json::Value,
    dates: DateFormat,
) -> Result<FieldValue, DomainError> {
    match column.kind {
        ColumnKind::Int => match raw {
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(FieldValue::Int)
                .ok_or_else(|| DomainError::invalid_field(column.name, "not an integer")),
            serde_json::Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map(FieldValue::Int)
                .map_err(|_| DomainError::invalid_field(column.name, "not an integer")),
            _ => Err(DomainError::invalid_field(column.name, "expected an integer")),
        },
        ColumnKind::Text => match raw {
            serde_json::Value::String(s) => Ok(FieldValue::Text(s.clone())),
            serde_json::Value::Number(n) => Ok(FieldValue::Text(n.to_string())),
            _ => Err(DomainError::invalid_field(column.name, "expected a string")),
        },
        ColumnKind::Date => match raw {
            serde_json::Value::String(s) => NaiveDate::parse_from_str(s, dates.pattern())
                .map(FieldValue::Date)
                .map_err(|e| {
                    DomainError::invalid_field(
                        column.name,
                        format!("expected a date in {} form: {e}", dates.pattern()),
                    )
                }),
            _ => Err(DomainError::invalid_field(column.name, "expected a date string")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_column_accepts_number() {
        let value = coerce(&Column::int("age"), &serde_json::json!(30), DateFormat::MonthDayYear);
        assert_eq!(value.unwrap(), FieldValue::Int(30));
    }

    #[test]
    fn int_column_accepts_numeric_string() {
        let value = coerce(&Column::int("age"), &serde_json::json!("30"), DateFormat::MonthDayYear);
        assert_eq!(value.unwrap(), FieldValue::Int(30));
    }

    #[test]
    fn int_column_rejects_word() {
        let result = coerce(
            &Column::int("age"),
            &serde_json::json!("thirty"),
            DateFormat::MonthDayYear,
        );
        assert!(matches!(result, Err(DomainError::InvalidFieldValue { .. })));
    }

    #[test]
    fn text_column_renders_number() {
        let value = coerce(
            &Column::text("phone"),
            &serde_json::json!(5550123),
            DateFormat::MonthDayYear,
        );
        assert_eq!(value.unwrap(), FieldValue::Text("5550123".to_string()));
    }

    #[test]
    fn date_column_parses_month_day_year() {
        let value = coerce(
            &Column::date("start_date"),
            &serde_json::json!("01/15/2024"),
            DateFormat::MonthDayYear,
        )
        .unwrap();
        assert_eq!(value.render(), "2024-01-15");
    }

    #[test]
    fn date_column_parses_year_month_day() {
        let value = coerce(
            &Column::date("end_date"),
            &serde_json::json!("2024-02-01"),
            DateFormat::YearMonthDay,
        )
        .unwrap();
        assert_eq!(value.render(), "2024-02-01");
    }

    #[test]
    fn date_formats_are_not_interchangeable() {
        // An ISO date at a seed/create call site must fail...
        let result = coerce(
            &Column::date("start_date"),
            &serde_json::json!("2024-01-15"),
            DateFormat::MonthDayYear,
        );
        assert!(matches!(result, Err(DomainError::InvalidFieldValue { .. })));

        // ...and a slash date at an update call site must fail.
        let result = coerce(
            &Column::date("start_date"),
            &serde_json::json!("01/15/2024"),
            DateFormat::YearMonthDay,
        );
        assert!(matches!(result, Err(DomainError::InvalidFieldValue { .. })));
    }

    #[test]
    fn date_column_rejects_non_string() {
        let result = coerce(
            &Column::date("start_date"),
            &serde_json::json!(20240115),
            DateFormat::YearMonthDay,
        );
        assert!(matches!(result, Err(DomainError::InvalidFieldValue { .. })));
    }

    #[test]
    fn render_forms() {
        assert_eq!(FieldValue::Int(-5).render(), "-5");
        assert_eq!(FieldValue::Text("привет".to_string()).render(), "привет");
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(FieldValue::Date(date).render(), "2024-01-15");
    }
}
