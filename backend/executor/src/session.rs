//! The session: a single owned table slot with an explicit two-state
//! lifecycle. `Empty` until the first successful upload, `Loaded` after;
//! only `Loaded` accepts mutations. A new upload replaces the table
//! wholesale, there is no merge.

use tracing::{info, warn};
use uuid::Uuid;

use repricer_commands::interpret;
use repricer_core::{
    export, ExportFile, Mutation, PriceTable, QuickAction, RepriceError, EXPORT_FILENAME,
};
use repricer_extract::{ContentKind, Ingestor};

use crate::executor::apply;

pub const MSG_NO_TABLE: &str = "Primero carga un archivo con precios";
pub const MSG_NOT_UNDERSTOOD: &str = "Comando no reconocido";
pub const MSG_UPDATED: &str = "Precios actualizados correctamente";

// ---------------------------------------------------------------------------
// Reply
// ---------------------------------------------------------------------------

/// User-visible outcome of one interaction: a plain-text acknowledgment or
/// error string, suitable for chat display or a text-to-speech collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    /// Whether the table actually changed.
    pub applied: bool,
}

impl Reply {
    pub fn applied(text: impl Into<String>) -> Self {
        Self { text: text.into(), applied: true }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), applied: false }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    Loaded,
}

/// Session-scoped state: the table slot plus an id for log correlation.
/// Lives for one user session; nothing is persisted.
pub struct PriceSession {
    id: Uuid,
    table: Option<PriceTable>,
}

impl PriceSession {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4(), table: None }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        match self.table {
            Some(_) => SessionState::Loaded,
            None => SessionState::Empty,
        }
    }

    pub fn table(&self) -> Option<&PriceTable> {
        self.table.as_ref()
    }

    /// Upload boundary. A successful decode replaces any prior table; a
    /// failed decode reports the error and leaves the previous state intact.
    pub fn upload(&mut self, ingestor: &Ingestor, bytes: &[u8], kind: ContentKind) -> Reply {
        match ingestor.ingest(bytes, kind) {
            Ok(table) => {
                let rows = table.row_count();
                info!("[Session {}] table loaded: {} rows", self.id, rows);
                self.table = Some(table);
                Reply::applied(format!("Archivo cargado: {} filas", rows))
            }
            Err(e) => {
                warn!("[Session {}] upload failed: {}", self.id, e);
                Reply::info(format!("Error al cargar el archivo: {}", e))
            }
        }
    }

    /// Command boundary: interpret free text and apply the result.
    pub fn command(&mut self, text: &str) -> Reply {
        if self.table.is_none() {
            return Reply::info(MSG_NO_TABLE);
        }
        match interpret(text) {
            Some(mutation) => self.apply_mutation(mutation),
            None => Reply::info(MSG_NOT_UNDERSTOOD),
        }
    }

    /// Quick-action boundary: direct triggers, no interpretation.
    pub fn quick(&mut self, action: QuickAction) -> Reply {
        self.apply_mutation(action.mutation())
    }

    /// Apply an already-constructed mutation to the loaded table.
    pub fn apply_mutation(&mut self, mutation: Mutation) -> Reply {
        let id = self.id;
        let Some(table) = self.table.as_mut() else {
            return Reply::info(MSG_NO_TABLE);
        };
        match apply(&mutation, table) {
            Ok(()) => {
                info!("[Session {}] applied {}", id, mutation.describe());
                Reply::applied(MSG_UPDATED)
            }
            Err(e) => {
                warn!("[Session {}] mutation rejected: {}", id, e);
                Reply::info(format!("Error ejecutando comando: {}", e))
            }
        }
    }

    /// Export boundary: serialize the loaded table under the fixed filename.
    pub fn export_csv(&self) -> Result<ExportFile, RepriceError> {
        let table = self.table.as_ref().ok_or(RepriceError::NoTable)?;
        export(table, EXPORT_FILENAME)
    }
}

impl Default for PriceSession {
    fn default() -> Self {
        Self::new()
    }
}
