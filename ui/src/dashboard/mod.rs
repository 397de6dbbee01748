//! Dashboard building blocks: report catalog, chart rendering, sidebar
//! filters, masked table panel, and export actions.

pub mod charts;
pub mod export;
pub mod highlights;
pub mod sections;
pub mod sidebar;
pub mod table_panel;

pub use charts::SectionChart;
pub use export::ExportPanel;
pub use highlights::DashboardHighlights;
pub use sidebar::FilterSidebar;
pub use table_panel::MaskedTablePanel;

use crate::core::dataset::{self, DatasetSnapshot};
use crate::core::table::DataTable;

/// Everything the dashboard view needs from the loaded dataset. Loading
/// never fails outright; problems surface as a `notice` banner over an
/// empty table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub table: DataTable,
    pub updated: Option<String>,
    pub notice: Option<String>,
}

impl DashboardState {
    pub fn load() -> Self {
        let DatasetSnapshot { table, updated } = dataset::load_default();
        let notice = if table.is_empty() {
            Some(format!(
                "No survey data found at {}. Place the dataset there and reload.",
                dataset::DATA_PATH
            ))
        } else {
            None
        };

        Self {
            table,
            updated,
            notice,
        }
    }
}
