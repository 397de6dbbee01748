use dioxus::prelude::*;
use serde::Serialize;

use crate::core::filter::FilterState;
use crate::core::table::DataTable;
use crate::dashboard::sections::SectionReport;

/// Fixed export filenames. The CSV name is part of the product contract;
/// both exports always describe the filtered, already-masked view.
pub const CSV_FILENAME: &str = "student_survey_filtered.csv";
pub const JSON_FILENAME: &str = "student_survey_summary.json";

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(&'static str),
    Done(String),
    Error(String),
}

#[derive(Serialize)]
struct SummaryExport<'a> {
    filters: &'a FilterState,
    sections: &'a [SectionReport],
}

#[component]
pub fn ExportPanel(
    table: DataTable,
    filters: FilterState,
    sections: Vec<SectionReport>,
) -> Element {
    let row_count = table.len();
    let section_count = sections.len();

    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => {
            Some(("dashboard-card__meta".to_string(), format!("{label}…")))
        }
        ExportStatus::Done(message) => Some((
            "dashboard-card__meta dashboard-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "dashboard-card__meta dashboard-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let csv_handler = {
        let export_table = table.clone();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working("Preparing CSV"));
            let export_table = export_table.clone();
            #[cfg(target_arch = "wasm32")]
            {
                let outcome = perform_csv_export(export_table);
                match outcome {
                    Ok(message) => status_signal.set(ExportStatus::Done(message)),
                    Err(err) => status_signal.set(ExportStatus::Error(err)),
                }
                busy_signal.set(false);
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let outcome = futures::executor::block_on(async { perform_csv_export(export_table) });
                match outcome {
                    Ok(message) => status_signal.set(ExportStatus::Done(message)),
                    Err(err) => status_signal.set(ExportStatus::Error(err)),
                }
                busy_signal.set(false);
            }
        }
    };

    let json_handler = {
        let export_filters = filters.clone();
        let export_sections = sections.clone();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working("Preparing JSON"));
            let payload = SummaryExport {
                filters: &export_filters,
                sections: &export_sections,
            };
            let outcome = serde_json::to_string_pretty(&payload)
                .map_err(|err| err.to_string())
                .and_then(perform_json_export);
            match outcome {
                Ok(message) => status_signal.set(ExportStatus::Done(message)),
                Err(err) => status_signal.set(ExportStatus::Error(err)),
            }
            busy_signal.set(false);
        }
    };

    rsx! {
        section { class: "dashboard-card dashboard-export",
            div { class: "dashboard-card__header",
                h2 { "Export" }
            }

            if row_count == 0 {
                p { class: "dashboard-card__placeholder",
                    "Exports unlock once at least one row matches the filters."
                }
            } else {
                p { "Download the filtered, masked table as CSV, or the computed summaries as JSON." }

                ul { class: "dashboard-export__summary",
                    li { strong { "{row_count}" } " rows in the filtered view" }
                    li { strong { "{section_count}" } " report sections computed" }
                }

                div { class: "dashboard-export__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        disabled: busy(),
                        onclick: csv_handler,
                        "💾 Export CSV"
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        disabled: busy(),
                        onclick: json_handler,
                        "Export JSON summary"
                    }
                }

                if let Some((class_name, message)) = feedback {
                    p { class: "{class_name}", "{message}" }
                }
            }
        }
    }
}

fn perform_csv_export(table: DataTable) -> Result<String, String> {
    let csv = build_csv(&table);
    let delivery = download_bytes(CSV_FILENAME, "text/csv", csv.into_bytes())?;
    Ok(match delivery {
        Some(path) => format!("CSV saved to {path}"),
        None => "CSV download started".to_string(),
    })
}

fn perform_json_export(json: String) -> Result<String, String> {
    copy_to_clipboard(json.clone())?;
    let delivery = download_bytes(JSON_FILENAME, "application/json", json.into_bytes())?;
    Ok(match delivery {
        Some(path) => format!("JSON copied and saved to {path}"),
        None => "JSON copied to clipboard and download started".to_string(),
    })
}

/// UTF-8 CSV of the filtered masked table: header row, then every row's
/// display values.
fn build_csv(table: &DataTable) -> String {
    let mut csv = String::new();

    let header = table
        .columns()
        .iter()
        .map(|name| escape_csv(name))
        .collect::<Vec<_>>()
        .join(",");
    csv.push_str(&header);
    csv.push('\n');

    for row in table.rows() {
        let line = row
            .iter()
            .map(|cell| escape_csv(&cell.display()))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }

    csv
}

fn escape_csv(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

fn copy_to_clipboard(payload: String) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or("window unavailable")?;
        let document = window.document().ok_or("document unavailable")?;
        let body = document.body().ok_or("missing body")?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| "Unable to create textarea")?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| "Textarea cast failed")?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        if !document.exec_command("copy").unwrap_or(false) {
            textarea.remove();
            return Err("Clipboard copy blocked".into());
        }
        textarea.remove();
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
        clipboard.set_text(payload).map_err(|err| err.to_string())
    }
}

fn download_bytes(filename: &str, mime: &str, bytes: Vec<u8>) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("com", "Surveydeck", "Surveydeck")
        .ok_or("Unable to determine export directory")?;
    let dir = dirs.data_dir().join("exports");
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_export_quotes_awkward_fields() {
        let table = DataTable::from_csv_str(
            "Full Name,Note\nA** B***,\"likes, commas\"\n",
        )
        .unwrap();
        let csv = build_csv(&table);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Full Name,Note"));
        assert_eq!(lines.next(), Some("A** B***,\"likes, commas\""));
    }

    #[test]
    fn csv_export_round_trips_through_the_parser() {
        let table = DataTable::from_csv_str("Faculty,GPA\nLaw,3.5\nEngineering,2.8\n").unwrap();
        let reparsed = DataTable::from_csv_str(&build_csv(&table)).unwrap();
        assert_eq!(reparsed, table);
    }

    #[test]
    fn escape_csv_doubles_embedded_quotes() {
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv(""), "");
    }
}
