use crate::dates;
use crate::models::{Adjustment, MethodFilter, Patient};
use crate::remote::AdjustmentStore;
use tracing::warn;

/// Everything the page shows. Each slot is replaced wholesale by a refresh;
/// nothing is edited in place, so a half-applied refresh cannot be observed.
#[derive(Debug, Default)]
pub struct BoardView {
    pub filter: MethodFilter,
    pub patient: Option<Patient>,
    pub pending: Vec<Adjustment>,
    pub completed: Vec<Adjustment>,
    pub tomorrow: Vec<Adjustment>,
    pub show_tomorrow: bool,
    pub notices: Vec<String>,
}

struct AdjustmentLists {
    pending: Vec<Adjustment>,
    completed: Vec<Adjustment>,
    tomorrow: Vec<Adjustment>,
    notices: Vec<String>,
}

/// Re-derive the whole view from the remote store. The patient read and the
/// three list reads are independent; none waits for another and a failure in
/// one leaves the rest intact.
pub async fn refresh(store: &dyn AdjustmentStore, view: &mut BoardView) {
    let (patient, lists) = tokio::join!(load_patient(store), load_adjustments(store, view.filter));

    apply_lists(view, lists);
    match patient {
        Ok(Some(row)) => view.patient = Some(row),
        // Empty result or failed read: keep the previous snapshot.
        Ok(None) => {}
        Err(notice) => view.notices.push(notice),
    }
}

/// Flip the completion flag remotely, then re-read the lists no matter what.
/// Non-optimistic: the row moves from pending to completed only once the
/// re-read reflects it. A failed write leaves the row visibly pending, so
/// clicking again retries.
pub async fn mark_completed(store: &dyn AdjustmentStore, view: &mut BoardView, id: i64) {
    let write_notice = match store.mark_completed(id).await {
        Ok(()) => None,
        Err(err) => {
            warn!("marking adjustment {id} completed failed: {err}");
            Some(format!("could not mark adjustment {id} as done: {err}"))
        }
    };

    let lists = load_adjustments(store, view.filter).await;
    apply_lists(view, lists);
    if let Some(notice) = write_notice {
        view.notices.push(notice);
    }
}

async fn load_patient(store: &dyn AdjustmentStore) -> Result<Option<Patient>, String> {
    store.latest_patient().await.map_err(|err| {
        warn!("patient lookup failed: {err}");
        format!("could not load patient details: {err}")
    })
}

async fn load_adjustments(store: &dyn AdjustmentStore, filter: MethodFilter) -> AdjustmentLists {
    let today = dates::today_range();
    let tomorrow = dates::tomorrow_range();

    let (pending, completed, next_day) = tokio::join!(
        store.adjustments(&today, Some(false), filter),
        store.adjustments(&today, Some(true), filter),
        store.adjustments(&tomorrow, None, filter),
    );

    let mut notices = Vec::new();
    AdjustmentLists {
        pending: list_or_empty(pending, "pending adjustments", &mut notices),
        completed: list_or_empty(completed, "completed adjustments", &mut notices),
        tomorrow: list_or_empty(next_day, "tomorrow's schedule", &mut notices),
        notices,
    }
}

fn list_or_empty(
    result: Result<Vec<Adjustment>, crate::remote::StoreError>,
    label: &str,
    notices: &mut Vec<String>,
) -> Vec<Adjustment> {
    match result {
        Ok(rows) => rows,
        Err(err) => {
            warn!("loading {label} failed: {err}");
            notices.push(format!("could not load {label}: {err}"));
            Vec::new()
        }
    }
}

fn apply_lists(view: &mut BoardView, lists: AdjustmentLists) {
    view.pending = lists.pending;
    view.completed = lists.completed;
    view.tomorrow = lists.tomorrow;
    view.notices = lists.notices;
}
