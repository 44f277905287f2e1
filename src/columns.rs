use serde::Serialize;

use crate::actions::RowAction;

// ---------------------------------------------------------------------------
// Grid column definitions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Text,
    Currency,
    Date,
    Button,
}

/// A value that is either fixed or read from a field of each row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Binding {
    Literal(String),
    Field {
        #[serde(rename = "fieldName")]
        field_name: String,
    },
}

impl Binding {
    fn field(name: &str) -> Self {
        Self::Field {
            field_name: name.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonAttributes {
    pub label: String,
    pub name: String,
    pub title: String,
    pub variant: Binding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<Binding>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_width: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_attributes: Option<ButtonAttributes>,
}

impl Column {
    fn data(label: &str, field_name: &str, column_type: ColumnType) -> Self {
        Self {
            label: label.to_owned(),
            field_name: Some(field_name.to_owned()),
            column_type,
            initial_width: None,
            type_attributes: None,
        }
    }

    fn button(label: &str, attributes: ButtonAttributes) -> Self {
        Self {
            label: label.to_owned(),
            field_name: None,
            column_type: ColumnType::Button,
            initial_width: Some(200),
            type_attributes: Some(attributes),
        }
    }

    /// Row action name if this is a button column.
    pub fn action_name(&self) -> Option<&str> {
        self.type_attributes.as_ref().map(|a| a.name.as_str())
    }
}

/// Columns of the opportunity grid, in display order.
pub fn columns() -> Vec<Column> {
    vec![
        Column::data("Nome", "name", ColumnType::Text),
        Column::data("Fase", "stageName", ColumnType::Text),
        Column::data("Valor", "amount", ColumnType::Currency),
        Column::data("Data de Fechamento", "closeDate", ColumnType::Date),
        Column::button(
            "Ações",
            ButtonAttributes {
                label: "Ver Detalhes".to_owned(),
                name: RowAction::ViewDetails.name().to_owned(),
                title: "Ver Detalhes".to_owned(),
                variant: Binding::Literal("brand".to_owned()),
                disabled: None,
            },
        ),
        Column::button(
            "Fechar",
            ButtonAttributes {
                label: "Marcar como Fechada".to_owned(),
                name: RowAction::MarkClosed.name().to_owned(),
                title: "Marcar como Fechada".to_owned(),
                variant: Binding::field("buttonVariant"),
                disabled: Some(Binding::field("isClosed")),
            },
        ),
    ]
}
