//! Text and JSON rendering of the derived list and footer.

use packlist_core::{Item, PackingService, PackingStats, SnapshotStore, ViewParams};
use serde::Serialize;

const EMPTY_TITLE: &str = "No items yet";
const EMPTY_HINT: &str = "Please continue shopping / adding!";

/// Machine-readable snapshot of what `render_list` shows.
#[derive(Debug, Serialize)]
pub struct ListReport<'a> {
    pub view: &'a ViewParams,
    pub all_packed: bool,
    pub items: Vec<Item>,
    pub stats: PackingStats,
}

impl<'a> ListReport<'a> {
    pub fn from_service<S: SnapshotStore>(service: &'a PackingService<S>) -> Self {
        Self {
            view: service.view_params(),
            all_packed: service.all_packed(),
            items: service.visible_items(),
            stats: service.stats(),
        }
    }
}

/// Renders the controls summary, visible items and progress footer.
pub fn render_list<S: SnapshotStore>(service: &PackingService<S>) -> String {
    let report = ListReport::from_service(service);
    let toggle_label = if report.all_packed {
        "Unpack All"
    } else {
        "Pack All"
    };

    let mut lines = vec![format!(
        "filter={} sort={} search={:?} [{toggle_label}]",
        report.view.filter, report.view.sort, report.view.search
    )];
    if report.items.is_empty() {
        lines.push(EMPTY_TITLE.to_string());
        lines.push(EMPTY_HINT.to_string());
    } else {
        lines.extend(report.items.iter().map(render_item));
    }
    lines.push(report.stats.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Pretty-printed JSON form of the list, for scripts.
pub fn render_json<S: SnapshotStore>(service: &PackingService<S>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ListReport::from_service(service))
}

/// One line per item: checkbox, description, quantity and id.
pub fn render_item(item: &Item) -> String {
    let mark = if item.packed { 'x' } else { ' ' };
    format!(
        "[{mark}] {} ({})  {}",
        item.description, item.quantity, item.id
    )
}

#[cfg(test)]
mod tests {
    use super::{render_item, render_json, render_list};
    use packlist_core::{Item, MemorySnapshotStore, PackingService, SortMode, SNAPSHOT_KEY};
    use serde_json::Value;

    #[test]
    fn render_item_marks_packed_state() {
        let item = Item::new("Socks", 3).unwrap();
        assert!(render_item(&item).starts_with("[ ] Socks (3)"));
        assert!(render_item(&item.toggled()).starts_with("[x] Socks (3)"));
    }

    #[test]
    fn render_list_shows_empty_message_and_footer() {
        let service = PackingService::open(MemorySnapshotStore::with_blob(SNAPSHOT_KEY, "[]"));
        let text = render_list(&service);

        assert!(text.contains("No items yet"));
        assert!(text.contains("[Pack All]"));
        assert!(text.ends_with("You packed 0/0 items (0%).\n"));
    }

    #[test]
    fn render_list_offers_unpack_when_everything_packed() {
        let mut service = PackingService::open(MemorySnapshotStore::new());
        service.toggle_all_packed();

        let text = render_list(&service);
        assert!(text.contains("[Unpack All]"));
        assert!(text.contains("You packed 2/2 items (100%)."));
    }

    #[test]
    fn render_json_mirrors_text_view() {
        let mut service = PackingService::open(MemorySnapshotStore::new());
        service.set_sort(SortMode::PackedFirst);
        let first = service.items()[0].id;
        service.toggle_packed(first);

        let report: Value = serde_json::from_str(&render_json(&service).unwrap()).unwrap();

        assert_eq!(report["view"]["sort"], "packed-first");
        assert_eq!(report["view"]["filter"], "all");
        assert_eq!(report["all_packed"], false);
        assert_eq!(report["items"][0]["id"], first.to_string());
        assert_eq!(report["items"][0]["packed"], true);
        assert_eq!(report["stats"]["packed_count"], 1);
        assert_eq!(report["stats"]["total"], 2);
        assert_eq!(report["stats"]["percentage"], 50);
    }
}
