use std::num::NonZeroUsize;

use serde::Deserialize;

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(5).unwrap();

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Rows per page. Zero is rejected at parse time.
    pub page_size: NonZeroUsize,
    /// Stage written onto a record after a successful close.
    pub closed_stage_name: String,
    pub messages: Messages,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            closed_stage_name: "Closed Won".to_owned(),
            messages: Messages::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// User-visible text
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Title of every failure notification.
    pub error_title: String,
    /// Title of the notification raised after a close reply.
    pub result_title: String,
    /// Body of the notification raised when the bulk load fails.
    pub load_error: String,
    /// Body used when a failure carries no message of its own.
    pub generic_error: String,
    /// Shown by hosts in place of the grid when nothing matched.
    pub empty_state: String,
    /// Page indicator; `{page}` and `{total}` are substituted.
    pub page_label: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            error_title: "Erro".to_owned(),
            result_title: "Resultado".to_owned(),
            load_error: "Houve um erro ao carregar as oportunidades.".to_owned(),
            generic_error: "Ocorreu um erro inesperado.".to_owned(),
            empty_state: "Nenhuma oportunidade encontrada.".to_owned(),
            page_label: "Página {page} de {total}".to_owned(),
        }
    }
}

impl Messages {
    pub fn format_page_label(&self, page: usize, total: usize) -> String {
        self.page_label
            .replace("{page}", &page.to_string())
            .replace("{total}", &total.to_string())
    }
}
