//! Element types and their value handling.

use serde_json::{Map, Value};

use pagebuilder_protocols::{ElementType, ElementValueError, ExecutionContext, Registerable};

const HEADING_LEVELS: (i64, i64) = (1, 6);

/// Heading element with a text value and a level from 1 to 6.
pub struct HeadingElementType {
    ctx: ExecutionContext,
}

impl HeadingElementType {
    pub fn new(ctx: ExecutionContext) -> Self {
        Self { ctx }
    }
}

impl Registerable for HeadingElementType {
    fn type_key(&self) -> &str {
        "heading"
    }

    fn label(&self) -> String {
        self.ctx.t("elementType.heading")
    }
}

impl ElementType for HeadingElementType {
    fn description(&self) -> String {
        self.ctx.t("elementType.headingDescription")
    }

    fn icon_class(&self) -> &str {
        "iconoir-text"
    }

    fn component(&self) -> &str {
        "HeadingElement"
    }

    fn form_component(&self) -> &str {
        "HeadingElementForm"
    }

    fn default_values(&self) -> Map<String, Value> {
        let mut values = Map::new();
        values.insert("value".to_string(), Value::from(""));
        values.insert("level".to_string(), Value::from(HEADING_LEVELS.0));
        values
    }

    fn prepare_values(&self, values: &mut Map<String, Value>) -> Result<(), ElementValueError> {
        let mut prepared = values.clone();
        prepare_string(&mut prepared, "value", "")?;
        prepare_integer(&mut prepared, "level", HEADING_LEVELS.0, HEADING_LEVELS)?;
        *values = prepared;
        Ok(())
    }
}

/// Paragraph element with a single text value.
pub struct ParagraphElementType {
    ctx: ExecutionContext,
}

impl ParagraphElementType {
    pub fn new(ctx: ExecutionContext) -> Self {
        Self { ctx }
    }
}

impl Registerable for ParagraphElementType {
    fn type_key(&self) -> &str {
        "paragraph"
    }

    fn label(&self) -> String {
        self.ctx.t("elementType.paragraph")
    }
}

impl ElementType for ParagraphElementType {
    fn description(&self) -> String {
        self.ctx.t("elementType.paragraphDescription")
    }

    fn icon_class(&self) -> &str {
        "iconoir-align-left"
    }

    fn component(&self) -> &str {
        "ParagraphElement"
    }

    fn form_component(&self) -> &str {
        "ParagraphElementForm"
    }

    fn default_values(&self) -> Map<String, Value> {
        let mut values = Map::new();
        values.insert("value".to_string(), Value::from(""));
        values
    }

    fn prepare_values(&self, values: &mut Map<String, Value>) -> Result<(), ElementValueError> {
        let mut prepared = values.clone();
        prepare_string(&mut prepared, "value", "")?;
        *values = prepared;
        Ok(())
    }
}

/// Default a missing or null string field, reject any other non-string.
fn prepare_string(
    values: &mut Map<String, Value>,
    field: &str,
    default: &str,
) -> Result<(), ElementValueError> {
    match values.get(field) {
        None | Some(Value::Null) => {
            values.insert(field.to_string(), Value::from(default));
            Ok(())
        }
        Some(Value::String(_)) => Ok(()),
        Some(_) => Err(ElementValueError::InvalidType {
            field: field.to_string(),
            expected: "a string",
        }),
    }
}

/// Default a missing or null integer field and check it lies in `range`.
fn prepare_integer(
    values: &mut Map<String, Value>,
    field: &str,
    default: i64,
    (min, max): (i64, i64),
) -> Result<(), ElementValueError> {
    let value = match values.get(field) {
        None | Some(Value::Null) => {
            values.insert(field.to_string(), Value::from(default));
            return Ok(());
        }
        Some(value) => value.as_i64().ok_or_else(|| ElementValueError::InvalidType {
            field: field.to_string(),
            expected: "an integer",
        })?,
    };

    if value < min || value > max {
        return Err(ElementValueError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "elements_tests.rs"]
mod tests;
